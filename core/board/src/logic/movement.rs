//! 移動邏輯

use crate::domain::alias::MovementBudget;
use crate::domain::core_types::Position;

/// 以曼哈頓距離判斷目標是否在移動力範圍內
///
/// 不考慮路徑與阻擋，只看直線格數。
pub fn is_within_reach(from: Position, to: Position, budget: MovementBudget) -> bool {
    from.manhattan_distance(to) <= u64::from(budget)
}

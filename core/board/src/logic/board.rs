//! 棋盤邏輯

use crate::domain::alias::Coord;
use crate::domain::constants::{BOARD_HEIGHT, BOARD_WIDTH};
use crate::domain::core_types::Position;

/// 驗證位置是否在棋盤邊界內
pub fn is_valid_position(pos: Position) -> bool {
    (0..BOARD_WIDTH).contains(&pos.x) && (0..BOARD_HEIGHT).contains(&pos.y)
}

/// 列舉中心點周圍 `distance` 範圍正方形內的所有位置
///
/// - 不包含中心點本身
/// - 超出棋盤的位置直接略過
/// - 順序為 x 外層、y 內層，並非依實際距離排序
/// - 延遲計算，每次呼叫都是新的序列
///
/// `distance` 為負數時不產生任何位置。
pub fn surrounding_positions(center: Position, distance: Coord) -> impl Iterator<Item = Position> {
    // 正方形先與棋盤取交集，順序不變
    let x_min = center.x.saturating_sub(distance).max(0);
    let x_max = center.x.saturating_add(distance).min(BOARD_WIDTH - 1);
    let y_min = center.y.saturating_sub(distance).max(0);
    let y_max = center.y.saturating_add(distance).min(BOARD_HEIGHT - 1);

    (x_min..=x_max)
        .flat_map(move |x| (y_min..=y_max).map(move |y| Position { x, y }))
        .filter(move |&pos| pos != center && is_valid_position(pos))
}

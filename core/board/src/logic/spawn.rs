//! 生成點搜尋邏輯

use crate::domain::core_types::Position;

/// 有上限的拒絕取樣
///
/// 反覆呼叫 `draw` 取得候選位置，回傳第一個通過 `is_free` 的位置。
/// 嘗試 `max_attempts` 次仍失敗時回傳 `None`；即使仍有空位也可能失敗，
/// 以固定延遲換取完整性。
pub fn sample_free_position<D, F>(max_attempts: usize, mut draw: D, is_free: F) -> Option<Position>
where
    D: FnMut() -> Position,
    F: Fn(Position) -> bool,
{
    (0..max_attempts).map(|_| draw()).find(|&pos| is_free(pos))
}

//! 核心業務邏輯（純函數，不持有棋盤狀態）

pub mod board;
pub mod movement;
pub mod spawn;

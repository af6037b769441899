//! 型別別名

/// 棋盤座標（有號，鄰格列舉時可為負數）
pub type Coord = i32;

/// 佔據者 ID
pub type ID = u32;

/// 單位每回合的移動力
pub type MovementBudget = u32;

//! 遊戲常數定義

use crate::domain::alias::Coord;

/// 棋盤寬度（x 軸格數）
pub const BOARD_WIDTH: Coord = 9;

/// 棋盤高度（y 軸格數）
pub const BOARD_HEIGHT: Coord = 5;

/// 敵方生成區的 x 範圍（含）
pub const SPAWN_ZONE_X: (Coord, Coord) = (6, BOARD_WIDTH - 1);

/// 敵方生成區的 y 範圍（含）
pub const SPAWN_ZONE_Y: (Coord, Coord) = (0, BOARD_HEIGHT - 1);

/// 尋找生成點的預設嘗試次數
pub const DEFAULT_SPAWN_ATTEMPTS: usize = 100;

/// 鄰格查詢的預設距離
pub const DEFAULT_SURROUNDING_DISTANCE: Coord = 1;

//! 9×5 戰術棋盤的空間模型
//!
//! 追蹤每格的佔據者、驗證放置與移動、尋找敵方生成點，並提供鄰格查詢。
//! 回合順序與戰鬥結果由呼叫端決定。

pub mod board;
pub mod domain;
pub mod error;
pub mod loader;
pub mod loader_schema;
pub mod logic;

pub use board::Board;
pub use domain::alias::{Coord, ID, MovementBudget};
pub use domain::core_types::{Occupant, OccupantKind, Position, SpawnZone, Tile, TileMark};

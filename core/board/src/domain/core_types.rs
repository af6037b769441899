//! 基本資料類型定義

use crate::domain::alias::{Coord, ID, MovementBudget};
use crate::domain::constants::{BOARD_HEIGHT, BOARD_WIDTH, SPAWN_ZONE_X, SPAWN_ZONE_Y};
use rand::Rng;
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter};

// ============================================================================
// 位置
// ============================================================================

/// 棋盤位置（座標）
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct Position {
    pub x: Coord,
    pub y: Coord,
}

impl Position {
    /// 「找不到 / 無可用位置」的哨兵座標
    pub const SENTINEL: Position = Position { x: -1, y: -1 };

    /// 將查詢結果攤平成座標，`None` 轉為 [`Position::SENTINEL`]
    pub fn or_sentinel(pos: Option<Position>) -> Position {
        pos.unwrap_or(Self::SENTINEL)
    }

    /// 曼哈頓距離，以 u64 計算，極端座標也不會溢位
    pub fn manhattan_distance(self, other: Position) -> u64 {
        u64::from(self.x.abs_diff(other.x)) + u64::from(self.y.abs_diff(other.y))
    }
}

// ============================================================================
// 佔據者
// ============================================================================

/// 佔據者種類
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum OccupantKind {
    /// 可移動的單位，攜帶移動力
    Unit { movement: MovementBudget },
    /// 不可移動的物件
    Object,
}

/// 放在棋盤上的佔據者
///
/// 由呼叫端持有；`position` 是位置快取，只有 [`crate::board::Board`]
/// 在放置時會改寫，外部只能讀取。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Occupant {
    id: ID,
    kind: OccupantKind,
    position: Position,
}

impl Occupant {
    pub fn new(id: ID, kind: OccupantKind, position: Position) -> Self {
        Self { id, kind, position }
    }

    /// 建立可移動單位
    pub fn unit(id: ID, position: Position, movement: MovementBudget) -> Self {
        Self::new(id, OccupantKind::Unit { movement }, position)
    }

    /// 建立物件
    pub fn object(id: ID, position: Position) -> Self {
        Self::new(id, OccupantKind::Object, position)
    }

    pub fn id(&self) -> ID {
        self.id
    }

    pub fn kind(&self) -> OccupantKind {
        self.kind
    }

    /// 佔據者自報的位置（最後一次由棋盤放置時寫入）
    pub fn position(&self) -> Position {
        self.position
    }

    /// 剩餘移動力，物件回傳 `None`
    pub fn movement(&self) -> Option<MovementBudget> {
        match self.kind {
            OccupantKind::Unit { movement } => Some(movement),
            OccupantKind::Object => None,
        }
    }

    /// 更新單位的移動力，物件不受影響
    pub fn set_movement(&mut self, budget: MovementBudget) {
        if let OccupantKind::Unit { movement } = &mut self.kind {
            *movement = budget;
        }
    }

    pub(crate) fn sync_position(&mut self, position: Position) {
        self.position = position;
    }
}

// ============================================================================
// 格子
// ============================================================================

/// 格子的顯示標記，核心只負責保存
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Display, EnumIter, Serialize, Deserialize,
)]
pub enum TileMark {
    #[default]
    Blank,
    Move,
    Attack,
    Heal,
    NoMove,
}

/// 每個座標一個的固定格子
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tile {
    position: Position,
    mark: TileMark,
}

impl Tile {
    pub(crate) fn new(position: Position) -> Self {
        Self {
            position,
            mark: TileMark::default(),
        }
    }

    pub fn position(&self) -> Position {
        self.position
    }

    pub fn mark(&self) -> TileMark {
        self.mark
    }

    pub(crate) fn set_mark(&mut self, mark: TileMark) {
        self.mark = mark;
    }
}

// ============================================================================
// 生成區
// ============================================================================

/// 敵方生成區（x、y 皆為含端點的範圍）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpawnZone {
    pub x: (Coord, Coord),
    pub y: (Coord, Coord),
}

impl Default for SpawnZone {
    fn default() -> Self {
        Self {
            x: SPAWN_ZONE_X,
            y: SPAWN_ZONE_Y,
        }
    }
}

impl SpawnZone {
    /// 範圍非空且完全落在棋盤內
    pub fn is_within_board(&self) -> bool {
        let (x_min, x_max) = self.x;
        let (y_min, y_max) = self.y;
        x_min <= x_max
            && y_min <= y_max
            && x_min >= 0
            && y_min >= 0
            && x_max < BOARD_WIDTH
            && y_max < BOARD_HEIGHT
    }

    pub fn contains(&self, pos: Position) -> bool {
        (self.x.0..=self.x.1).contains(&pos.x) && (self.y.0..=self.y.1).contains(&pos.y)
    }

    /// 格數，範圍為空時為 0
    pub fn area(&self) -> u64 {
        let span = |(min, max): (Coord, Coord)| (i64::from(max) - i64::from(min) + 1).max(0) as u64;
        span(self.x).saturating_mul(span(self.y))
    }

    /// 均勻抽一個生成區內的座標
    ///
    /// 生成區為空或超出棋盤時回傳 `None`。
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<Position> {
        if !self.is_within_board() {
            return None;
        }
        Some(Position {
            x: rng.random_range(self.x.0..=self.x.1),
            y: rng.random_range(self.y.0..=self.y.1),
        })
    }
}

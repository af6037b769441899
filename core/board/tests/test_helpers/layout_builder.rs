//! 測試輔助：LayoutBuilder
//!
//! 用 ASCII art 視覺化定義棋盤佈局，取代手寫 TOML 字串。

use board::domain::alias::{ID, MovementBudget};
use board::domain::core_types::{OccupantKind, SpawnZone};
use board::error::Result;
use board::loader::load_from_ascii;
use board::loader_schema::{BoardLayout, OccupantPlacement};

struct MarkerDef {
    marker: String,
    kind: OccupantKind,
}

/// 用 ASCII art 建立佈局 TOML 字串
///
/// 佔據者 ID 從 1 開始，依標記設定順序、再依 x 外層 y 內層的位置順序遞增。
///
/// ```ignore
/// let layout_toml = LayoutBuilder::from_ascii("
///   A . . . . . . . .
///   . . . . . . . . .
///   . . w . . . . . .
///   . . . . . . . . .
///   . . . . . . . . .
/// ")
/// .unit("A", 2)
/// .object("w")
/// .to_toml();
/// ```
pub struct LayoutBuilder {
    ascii: String,
    spawn_zone: Option<SpawnZone>,
    markers: Vec<MarkerDef>,
}

impl LayoutBuilder {
    /// 以 ASCII art 初始化 builder
    pub fn from_ascii(ascii: &str) -> Self {
        LayoutBuilder {
            ascii: ascii.to_string(),
            spawn_zone: None,
            markers: Vec::new(),
        }
    }

    /// 設定標記為可移動單位
    pub fn unit(mut self, marker: &str, movement: MovementBudget) -> Self {
        self.markers.push(MarkerDef {
            marker: marker.to_string(),
            kind: OccupantKind::Unit { movement },
        });
        self
    }

    /// 設定標記為物件
    pub fn object(mut self, marker: &str) -> Self {
        self.markers.push(MarkerDef {
            marker: marker.to_string(),
            kind: OccupantKind::Object,
        });
        self
    }

    /// 自訂生成區
    pub fn spawn_zone(mut self, spawn_zone: SpawnZone) -> Self {
        self.spawn_zone = Some(spawn_zone);
        self
    }

    /// 組裝佈局
    pub fn to_layout(&self) -> Result<BoardLayout> {
        let markers = load_from_ascii(&self.ascii)?;

        let mut next_id: ID = 1;
        let mut occupants = Vec::new();
        for def in &self.markers {
            let positions = markers.get(&def.marker).cloned().unwrap_or_default();
            for position in positions {
                occupants.push(OccupantPlacement {
                    id: next_id,
                    kind: def.kind,
                    position,
                });
                next_id += 1;
            }
        }

        Ok(BoardLayout {
            spawn_zone: self.spawn_zone,
            occupants,
        })
    }

    /// 組裝完整 TOML 字串
    pub fn to_toml(&self) -> Result<String> {
        self.to_layout()?.to_toml("test-layout")
    }
}

//! 佈局檔的資料結構定義

use crate::domain::alias::ID;
use crate::domain::core_types::{OccupantKind, Position, SpawnZone};
use crate::error::{LoadError, Result};
use serde::{Deserialize, Serialize};

/// 單一佔據者的初始配置
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OccupantPlacement {
    pub id: ID,
    pub kind: OccupantKind,
    pub position: Position,
}

/// 棋盤初始佈局
///
/// ```toml
/// spawn_zone = { x = [6, 8], y = [0, 4] }
///
/// [[occupants]]
/// id = 1
/// kind = { type = "Unit", movement = 2 }
/// position = { x = 0, y = 0 }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BoardLayout {
    /// 未指定時使用預設生成區
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub spawn_zone: Option<SpawnZone>,
    #[serde(default)]
    pub occupants: Vec<OccupantPlacement>,
}

impl BoardLayout {
    pub fn from_toml(layout_toml: &str, layout_name: &str) -> Result<Self> {
        toml::from_str(layout_toml).map_err(|e| {
            LoadError::DeserializeError {
                format: layout_name.to_string(),
                reason: e.to_string(),
            }
            .into()
        })
    }

    pub fn to_toml(&self, layout_name: &str) -> Result<String> {
        toml::to_string(self).map_err(|e| {
            LoadError::SerializeError {
                format: layout_name.to_string(),
                reason: e.to_string(),
            }
            .into()
        })
    }
}

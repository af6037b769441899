//! 棋盤佈局載入器

use crate::board::Board;
use crate::domain::alias::{Coord, ID};
use crate::domain::constants::{BOARD_HEIGHT, BOARD_WIDTH};
use crate::domain::core_types::{Occupant, Position};
use crate::error::{BoardError, Context, LoadError, Result};
use crate::loader_schema::{BoardLayout, OccupantPlacement};
use std::collections::{HashMap, HashSet};

/// 從 ASCII 格式讀出標記位置
///
/// ASCII 格式：每行用空格分隔的符號，必須剛好 9 欄 5 列
/// - `.` = 空格
/// - 其他字符串（`S`、`E` 等）= 標記位置
/// - 相同的標記會全部收集成 Vec（x 外層、y 內層的順序）
///
/// 例如：
/// ```text
/// S . . . . . . . .
/// . . . . . . . . E
/// . . . . . . . . .
/// . . . . . . . . .
/// . . . . . . . . .
/// ```
pub fn load_from_ascii(ascii: &str) -> Result<HashMap<String, Vec<Position>>> {
    let lines: Vec<&str> = ascii
        .lines()
        .map(|l| l.trim())
        .filter(|l| !l.is_empty())
        .collect();

    if lines.is_empty() {
        return Err(LoadError::ParseError("棋盤為空".to_string()).into());
    }

    if lines.len() != BOARD_HEIGHT as usize {
        return Err(LoadError::ParseError(format!(
            "棋盤高度應為 {}，實際為 {}",
            BOARD_HEIGHT,
            lines.len()
        ))
        .into());
    }

    let mut cells: Vec<(Position, &str)> = Vec::new();
    for (y, line) in lines.iter().enumerate() {
        let symbols: Vec<&str> = line.split_whitespace().collect();
        if symbols.len() != BOARD_WIDTH as usize {
            return Err(LoadError::ParseError(format!(
                "第 {} 列寬度應為 {}，實際為 {}",
                y,
                BOARD_WIDTH,
                symbols.len()
            ))
            .into());
        }
        for (x, symbol) in symbols.into_iter().enumerate() {
            let pos = Position {
                x: x as Coord,
                y: y as Coord,
            };
            cells.push((pos, symbol));
        }
    }

    // 與佔據表相同的掃描順序
    cells.sort_by_key(|(pos, _)| *pos);

    let mut markers: HashMap<String, Vec<Position>> = HashMap::new();
    for (pos, symbol) in cells {
        // 非 `.` 的符號記為標記
        if symbol != "." {
            markers.entry(symbol.to_string()).or_default().push(pos);
        }
    }

    Ok(markers)
}

impl Board {
    /// 依佈局建立棋盤與其上的佔據者
    ///
    /// 回傳的佔據者已同步位置，順序同佈局檔。
    pub fn from_layout(layout: &BoardLayout) -> Result<(Board, Vec<Occupant>)> {
        let spawn_zone = layout.spawn_zone.unwrap_or_default();
        if !spawn_zone.is_within_board() {
            return Err(LoadError::InvalidSpawnZone {
                x: spawn_zone.x,
                y: spawn_zone.y,
            }
            .into());
        }

        let mut board = Board::with_spawn_zone(spawn_zone);
        let mut occupants = Vec::with_capacity(layout.occupants.len());
        let mut used_ids: HashSet<ID> = HashSet::new();

        for placement in &layout.occupants {
            let occupant = place_occupant(&mut board, &mut used_ids, placement)
                .context(format!("佈局中的佔據者 {}", placement.id))?;
            occupants.push(occupant);
        }

        tracing::debug!(
            "載入佈局：{} 個佔據者，生成區 x {:?} y {:?}",
            occupants.len(),
            spawn_zone.x,
            spawn_zone.y
        );
        Ok((board, occupants))
    }

    /// 從 TOML 佈局建立棋盤
    pub fn from_layout_toml(
        layout_toml: &str,
        layout_name: &str,
    ) -> Result<(Board, Vec<Occupant>)> {
        let layout = BoardLayout::from_toml(layout_toml, layout_name)?;
        Board::from_layout(&layout).context(format!("建立棋盤 {layout_name}"))
    }
}

fn place_occupant(
    board: &mut Board,
    used_ids: &mut HashSet<ID>,
    placement: &OccupantPlacement,
) -> Result<Occupant> {
    let pos = placement.position;
    if !used_ids.insert(placement.id) {
        let existing = Position::or_sentinel(board.locate(placement.id));
        return Err(BoardError::OccupantAlreadyExists {
            occupant: placement.id,
            x: existing.x,
            y: existing.y,
        }
        .into());
    }
    if let Some(other) = board.at(pos) {
        return Err(BoardError::PositionOccupied {
            occupant: other,
            x: pos.x,
            y: pos.y,
        }
        .into());
    }

    let mut occupant = Occupant::new(placement.id, placement.kind, pos);
    board.add(&mut occupant)?;
    Ok(occupant)
}

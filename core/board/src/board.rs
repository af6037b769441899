//! 棋盤：佔據表、格子與生成區

use crate::domain::alias::{Coord, ID};
use crate::domain::constants::{BOARD_HEIGHT, BOARD_WIDTH};
use crate::domain::core_types::{Occupant, Position, SpawnZone, Tile, TileMark};
use crate::error::{BoardError, Result};
use crate::logic::board::{is_valid_position, surrounding_positions};
use crate::logic::movement::is_within_reach;
use crate::logic::spawn::sample_free_position;
use rand::Rng;
use std::fmt;

const WIDTH: usize = BOARD_WIDTH as usize;
const HEIGHT: usize = BOARD_HEIGHT as usize;

/// 9×5 棋盤
///
/// 佔據表是位置的唯一真實來源；[`Occupant::position`] 只是快取，
/// 由 [`Board::set`] 在放置時同步。
#[derive(Debug, Clone)]
pub struct Board {
    cells: [[Option<ID>; HEIGHT]; WIDTH],
    tiles: Vec<Tile>,
    spawn_zone: SpawnZone,
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    /// 建立空棋盤，並一次建立全部 45 個格子
    pub fn new() -> Self {
        Self::with_spawn_zone(SpawnZone::default())
    }

    pub fn with_spawn_zone(spawn_zone: SpawnZone) -> Self {
        let tiles = (0..BOARD_WIDTH)
            .flat_map(|x| (0..BOARD_HEIGHT).map(move |y| Tile::new(Position { x, y })))
            .collect();

        Self {
            cells: [[None; HEIGHT]; WIDTH],
            tiles,
            spawn_zone,
        }
    }

    pub fn spawn_zone(&self) -> SpawnZone {
        self.spawn_zone
    }

    // ------------------------------------------------------------------------
    // 佔據表
    // ------------------------------------------------------------------------

    /// 查詢位置上的佔據者；空格或超出邊界都回傳 `None`
    pub fn at(&self, pos: Position) -> Option<ID> {
        let (x, y) = cell_index(pos)?;
        self.cells[x][y]
    }

    /// 寫入或清除一格
    ///
    /// 放入佔據者時會同步改寫它的位置快取。若該佔據者已在其他格子，
    /// 回傳錯誤而不寫入；目標格原有的其他佔據者會被直接覆蓋。
    pub fn set(&mut self, pos: Position, occupant: Option<&mut Occupant>) -> Result<()> {
        let (x, y) = cell_index(pos).ok_or_else(|| out_of_bounds(pos))?;

        let Some(occupant) = occupant else {
            self.cells[x][y] = None;
            tracing::trace!("清除格子 ({}, {})", pos.x, pos.y);
            return Ok(());
        };

        let id = occupant.id();
        if let Some(existing) = self.locate(id).filter(|&existing| existing != pos) {
            return Err(BoardError::OccupantAlreadyExists {
                occupant: id,
                x: existing.x,
                y: existing.y,
            }
            .into());
        }

        if let Some(displaced) = self.cells[x][y].filter(|&other| other != id) {
            tracing::debug!(
                "佔據者 {} 覆蓋了 ({}, {}) 上的佔據者 {}",
                id,
                pos.x,
                pos.y,
                displaced
            );
        }

        self.cells[x][y] = Some(id);
        occupant.sync_position(pos);
        tracing::trace!("佔據者 {} 放置於 ({}, {})", id, pos.x, pos.y);
        Ok(())
    }

    /// 清除一格
    pub fn clear(&mut self, pos: Position) -> Result<()> {
        self.set(pos, None)
    }

    /// 依佔據者自報的位置放上棋盤
    pub fn add(&mut self, occupant: &mut Occupant) -> Result<()> {
        let pos = occupant.position();
        self.set(pos, Some(occupant))
    }

    /// 從棋盤移除佔據者，回傳原本所在位置
    ///
    /// 不在棋盤上時不做任何事並回傳 `None`。
    pub fn remove(&mut self, id: ID) -> Option<Position> {
        let pos = self.locate(id)?;
        let (x, y) = cell_index(pos)?;
        self.cells[x][y] = None;
        tracing::trace!("佔據者 {} 自 ({}, {}) 移除", id, pos.x, pos.y);
        Some(pos)
    }

    /// 移動佔據者：先移除再放置
    ///
    /// 目標必須在棋盤內，且為空格或佔據者本身所在格；不符時回傳錯誤，
    /// 棋盤與佔據者皆不變。不檢查移動距離，需先以 [`Board::can_move_to`] 驗證。
    pub fn move_occupant(&mut self, occupant: &mut Occupant, to: Position) -> Result<()> {
        let id = occupant.id();
        if !is_valid_position(to) {
            tracing::debug!("拒絕移動佔據者 {}：({}, {}) 超出邊界", id, to.x, to.y);
            return Err(out_of_bounds(to).into());
        }
        if let Some(other) = self.at(to).filter(|&other| other != id) {
            tracing::debug!(
                "拒絕移動佔據者 {}：({}, {}) 已被 {} 佔用",
                id,
                to.x,
                to.y,
                other
            );
            return Err(BoardError::PositionOccupied {
                occupant: other,
                x: to.x,
                y: to.y,
            }
            .into());
        }

        self.remove(id);
        self.set(to, Some(occupant))
    }

    /// 掃描整個佔據表找出佔據者的真實位置
    ///
    /// 以 x 外層、y 內層的順序回傳第一個符合的格子，不信任佔據者自報的位置。
    pub fn locate(&self, id: ID) -> Option<Position> {
        self.occupied()
            .find(|&(_, occupant)| occupant == id)
            .map(|(pos, _)| pos)
    }

    /// 所有被佔據的格子，順序同 [`Board::locate`]
    pub fn occupied(&self) -> impl Iterator<Item = (Position, ID)> + '_ {
        self.cells.iter().enumerate().flat_map(|(x, column)| {
            column.iter().enumerate().filter_map(move |(y, cell)| {
                cell.map(|id| {
                    let pos = Position {
                        x: x as Coord,
                        y: y as Coord,
                    };
                    (pos, id)
                })
            })
        })
    }

    // ------------------------------------------------------------------------
    // 合法性與移動判定
    // ------------------------------------------------------------------------

    pub fn is_valid(&self, pos: Position) -> bool {
        is_valid_position(pos)
    }

    /// 位置在棋盤內且為空格
    pub fn can_occupy(&self, pos: Position) -> bool {
        is_valid_position(pos) && self.at(pos).is_none()
    }

    /// 單位能否移動到指定位置
    ///
    /// 需同時滿足：位置合法、為空格、曼哈頓距離不超過剩餘移動力。
    /// 物件沒有移動力，一律回傳 `false`。
    pub fn can_move_to(&self, unit: &Occupant, pos: Position) -> bool {
        let Some(budget) = unit.movement() else {
            return false;
        };
        self.can_occupy(pos) && is_within_reach(unit.position(), pos, budget)
    }

    /// 單位目前可移動到的所有位置
    pub fn movable_positions<'a>(
        &'a self,
        unit: &'a Occupant,
    ) -> impl Iterator<Item = Position> + 'a {
        self.tiles
            .iter()
            .map(Tile::position)
            .filter(move |&pos| self.can_move_to(unit, pos))
    }

    // ------------------------------------------------------------------------
    // 生成點
    // ------------------------------------------------------------------------

    /// 在生成區內隨機尋找空格
    ///
    /// 嘗試 `max_attempts` 次仍找不到時回傳 `None`，由呼叫端決定是否略過本次生成。
    pub fn find_spawn_location<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        max_attempts: usize,
    ) -> Option<Position> {
        let zone = self.spawn_zone;
        if !zone.is_within_board() {
            tracing::debug!("生成區無效：x {:?} y {:?}", zone.x, zone.y);
            return None;
        }
        // 生成區已驗證，哨兵不會被抽中；即使抽中也不是空格
        self.find_spawn_location_with(max_attempts, || {
            zone.sample(rng).unwrap_or(Position::SENTINEL)
        })
    }

    /// 同 [`Board::find_spawn_location`]，候選位置由 `draw` 提供
    pub fn find_spawn_location_with<D>(&self, max_attempts: usize, draw: D) -> Option<Position>
    where
        D: FnMut() -> Position,
    {
        let found = sample_free_position(max_attempts, draw, |pos| self.can_occupy(pos));
        if found.is_none() {
            tracing::debug!("嘗試 {} 次後仍找不到生成點", max_attempts);
        }
        found
    }

    // ------------------------------------------------------------------------
    // 鄰格查詢
    // ------------------------------------------------------------------------

    /// 見 [`surrounding_positions`]
    pub fn surrounding_positions(
        &self,
        center: Position,
        distance: Coord,
    ) -> impl Iterator<Item = Position> {
        surrounding_positions(center, distance)
    }

    /// 周圍有佔據者的格子上的佔據者
    pub fn surrounding_occupants(
        &self,
        center: Position,
        distance: Coord,
    ) -> impl Iterator<Item = ID> + '_ {
        surrounding_positions(center, distance).filter_map(move |pos| self.at(pos))
    }

    /// 周圍的格子
    pub fn surrounding_tiles(
        &self,
        center: Position,
        distance: Coord,
    ) -> impl Iterator<Item = &Tile> + '_ {
        surrounding_positions(center, distance).filter_map(move |pos| self.tile_at(pos))
    }

    // ------------------------------------------------------------------------
    // 格子
    // ------------------------------------------------------------------------

    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    /// 線性搜尋指定座標的格子
    pub fn tile_at(&self, pos: Position) -> Option<&Tile> {
        self.tiles.iter().find(|tile| tile.position() == pos)
    }

    /// 將指定位置的格子設為 `mark`，略過不存在的位置
    pub fn mark_tiles<I>(&mut self, positions: I, mark: TileMark)
    where
        I: IntoIterator<Item = Position>,
    {
        for pos in positions {
            if let Some(tile) = self.tiles.iter_mut().find(|tile| tile.position() == pos) {
                tile.set_mark(mark);
            }
        }
    }

    /// 標記單位可移動的格子
    pub fn show_movable_tiles(&mut self, unit: &Occupant) {
        let positions: Vec<Position> = self.movable_positions(unit).collect();
        self.mark_tiles(positions, TileMark::Move);
    }

    /// 所有格子回到空白標記
    pub fn clear_tile_marks(&mut self) {
        for tile in &mut self.tiles {
            tile.set_mark(TileMark::Blank);
        }
    }
}

/// 以 ASCII 輸出棋盤，格式與 [`crate::loader::load_from_ascii`] 相同
///
/// `.` 為空格，其他為佔據者 ID。
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for y in 0..BOARD_HEIGHT {
            let row: Vec<String> = (0..BOARD_WIDTH)
                .map(|x| match self.at(Position { x, y }) {
                    Some(id) => id.to_string(),
                    None => ".".to_string(),
                })
                .collect();
            writeln!(f, "{}", row.join(" "))?;
        }
        Ok(())
    }
}

fn cell_index(pos: Position) -> Option<(usize, usize)> {
    if !is_valid_position(pos) {
        return None;
    }
    Some((pos.x as usize, pos.y as usize))
}

fn out_of_bounds(pos: Position) -> BoardError {
    BoardError::OutOfBounds {
        x: pos.x,
        y: pos.y,
        width: BOARD_WIDTH,
        height: BOARD_HEIGHT,
    }
}

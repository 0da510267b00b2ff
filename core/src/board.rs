use alloc::vec::Vec;

use ndarray::{Array2, ArrayView1};
use serde::{Deserialize, Serialize};

use crate::*;

/// Input to a generator: board dimensions and the nominal mine target.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameConfig {
    pub size: Coord2,
    pub mines: CellCount,
}

impl GameConfig {
    pub const fn new_unchecked(size: Coord2, mines: CellCount) -> Self {
        Self { size, mines }
    }

    pub fn new(size: Coord2, mines: CellCount) -> Result<Self> {
        let config = Self::new_unchecked(size, mines);
        config.validate()?;
        Ok(config)
    }

    /// Builds a config from a raw per-cell mine probability, the nominal mine count is the
    /// probability scaled to the board and rounded to nearest.
    pub fn from_density(size: Coord2, density: f64) -> Result<Self> {
        if !(0.0..=1.0).contains(&density) {
            return Err(GameError::InvalidDensity);
        }
        let total = area(size);
        let mines = (density * f64::from(total) + 0.5) as CellCount;
        Self::new(size, mines)
    }

    pub fn validate(&self) -> Result<()> {
        if self.size.0 == 0 || self.size.1 == 0 {
            Err(GameError::InvalidDimensions)
        } else {
            Ok(())
        }
    }

    pub const fn total_cells(&self) -> CellCount {
        area(self.size)
    }

    /// Probability for each cell to hold a mine, clamped to 1.
    pub fn density(&self) -> f64 {
        let total = self.total_cells();
        if self.mines >= total {
            1.0
        } else {
            f64::from(self.mines) / f64::from(total)
        }
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new_unchecked((12, 12), 12)
    }
}

/// Full game state: the cell grid, indexed `[y, x]`, plus its generation parameters.
///
/// Deserialized snapshots are checked against the invariants a generated board upholds.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawBoard")]
pub struct Board {
    size: Coord2,
    mine_count: CellCount,
    cells: Array2<Cell>,
    open_count: CellCount,
}

/// Snapshot layout of [`Board`] as read from serde, before any checks.
#[derive(Deserialize)]
struct RawBoard {
    size: Coord2,
    mine_count: CellCount,
    cells: Array2<Cell>,
    open_count: CellCount,
}

impl TryFrom<RawBoard> for Board {
    type Error = GameError;

    fn try_from(raw: RawBoard) -> Result<Self> {
        GameConfig::new_unchecked(raw.size, raw.mine_count).validate()?;

        let (width, height) = raw.size;
        if raw.cells.dim() != (usize::from(height), usize::from(width)) {
            return Err(GameError::InvalidBoardShape);
        }

        let mut board = Self::build(raw.size, raw.mine_count, |coords| {
            raw.cells[grid_index(coords)].is_mine()
        });

        for (expected, given) in board.cells.iter().zip(raw.cells.iter()) {
            if given.coords() != expected.coords() {
                return Err(GameError::InvalidBoardShape);
            }
            if given.neighbor_mine_count() != expected.neighbor_mine_count() {
                return Err(GameError::InconsistentBoard);
            }
            // mines are never opened
            if given.is_open() && given.is_mine() {
                return Err(GameError::InconsistentBoard);
            }
        }

        for cell in raw.cells.iter().filter(|cell| cell.is_open()) {
            board.open_cell(cell.coords());
        }
        if board.open_count != raw.open_count {
            return Err(GameError::InconsistentBoard);
        }

        Ok(board)
    }
}

impl Board {
    /// Lays out a fresh closed board and precomputes neighbor counts.
    ///
    /// `is_mine` is called exactly once per cell in row-major order.
    pub(crate) fn build(
        size: Coord2,
        mine_count: CellCount,
        mut is_mine: impl FnMut(Coord2) -> bool,
    ) -> Self {
        let (width, height) = size;
        let shape = (usize::from(height), usize::from(width));
        let mut cells = Array2::from_shape_fn(shape, |(y, x)| {
            let coords = (x as Coord, y as Coord);
            Cell::closed(coords, is_mine(coords))
        });

        for y in 0..height {
            for x in 0..width {
                let coords = (x, y);
                if cells[grid_index(coords)].is_mine() {
                    continue;
                }
                let count = neighbors(coords, size)
                    .filter(|&pos| cells[grid_index(pos)].is_mine())
                    .count() as u8;
                cells[grid_index(coords)].set_neighbor_mine_count(count);
            }
        }

        Self {
            size,
            mine_count,
            cells,
            open_count: 0,
        }
    }

    /// Builds a board with mines at exactly the given coordinates.
    pub fn from_mine_coords(size: Coord2, mine_coords: &[Coord2]) -> Result<Self> {
        GameConfig::new_unchecked(size, 0).validate()?;

        let shape = (usize::from(size.1), usize::from(size.0));
        let mut mine_mask: Array2<bool> = Array2::default(shape);
        for &coords in mine_coords {
            if coords.0 >= size.0 || coords.1 >= size.1 {
                return Err(GameError::OutOfBounds);
            }
            mine_mask[grid_index(coords)] = true;
        }

        let placed = mine_mask.iter().filter(|&&is_mine| is_mine).count() as CellCount;
        Ok(Self::build(size, placed, |coords| mine_mask[grid_index(coords)]))
    }

    pub fn validate_coords(&self, coords: Coord2) -> Result<Coord2> {
        if coords.0 < self.size.0 && coords.1 < self.size.1 {
            Ok(coords)
        } else {
            Err(GameError::OutOfBounds)
        }
    }

    pub fn width(&self) -> Coord {
        self.size.0
    }

    pub fn height(&self) -> Coord {
        self.size.1
    }

    pub fn size(&self) -> Coord2 {
        self.size
    }

    /// Nominal mine count requested at generation.
    pub fn mine_count(&self) -> CellCount {
        self.mine_count
    }

    /// Mines actually on the board, may differ from [`Board::mine_count`].
    pub fn placed_mines(&self) -> CellCount {
        self.cells.iter().filter(|cell| cell.is_mine()).count() as CellCount
    }

    pub fn total_cells(&self) -> CellCount {
        area(self.size)
    }

    pub fn open_count(&self) -> CellCount {
        self.open_count
    }

    pub fn cell(&self, coords: Coord2) -> Result<&Cell> {
        let coords = self.validate_coords(coords)?;
        Ok(&self.cells[grid_index(coords)])
    }

    /// Rows of the grid, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = ArrayView1<'_, Cell>> {
        self.cells.rows().into_iter()
    }

    /// All cells in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = &Cell> {
        self.cells.iter()
    }

    /// In-bounds cells around `coords`, the iterator does not borrow the board.
    pub fn neighbors(
        &self,
        coords: Coord2,
    ) -> impl Iterator<Item = Coord2> + Clone + use<> {
        neighbors(coords, self.size)
    }

    pub fn mine_coords(&self) -> Vec<Coord2> {
        self.cells
            .iter()
            .filter(|cell| cell.is_mine())
            .map(Cell::coords)
            .collect()
    }

    pub(crate) fn cell_at(&self, coords: Coord2) -> &Cell {
        &self.cells[grid_index(coords)]
    }

    pub(crate) fn open_cell(&mut self, coords: Coord2) {
        let cell = &mut self.cells[grid_index(coords)];
        if !cell.is_open() {
            cell.open();
            self.open_count += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use alloc::string::ToString;
    use serde_json::json;

    use super::*;

    #[test]
    fn config_rejects_zero_dimensions() {
        assert_eq!(GameConfig::new((0, 4), 1), Err(GameError::InvalidDimensions));
        assert_eq!(GameConfig::new((4, 0), 1), Err(GameError::InvalidDimensions));
        assert!(GameConfig::new((1, 1), 0).is_ok());
    }

    #[test]
    fn config_density_from_mine_count() {
        let config = GameConfig::default();
        assert_eq!(config.size, (12, 12));
        assert_eq!(config.mines, 12);
        assert_eq!(config.density(), 12.0 / 144.0);

        let overfull = GameConfig::new((2, 2), 9).unwrap();
        assert_eq!(overfull.density(), 1.0);
    }

    #[test]
    fn config_from_density() {
        let config = GameConfig::from_density((10, 10), 0.25).unwrap();
        assert_eq!(config.mines, 25);
        let config = GameConfig::from_density((4, 4), 0.3).unwrap();
        assert_eq!(config.mines, 5);

        assert_eq!(
            GameConfig::from_density((10, 10), 1.5),
            Err(GameError::InvalidDensity)
        );
        assert_eq!(
            GameConfig::from_density((10, 10), -0.1),
            Err(GameError::InvalidDensity)
        );
        assert_eq!(
            GameConfig::from_density((10, 10), f64::NAN),
            Err(GameError::InvalidDensity)
        );
        assert_eq!(
            GameConfig::from_density((0, 10), 0.5),
            Err(GameError::InvalidDimensions)
        );
    }

    #[test]
    fn from_mine_coords_computes_neighbor_counts() {
        let board = Board::from_mine_coords((3, 3), &[(0, 0), (2, 2)]).unwrap();

        assert_eq!(board.size(), (3, 3));
        assert_eq!(board.mine_count(), 2);
        assert_eq!(board.cell((1, 1)).unwrap().neighbor_mine_count(), 2);
        assert_eq!(board.cell((1, 0)).unwrap().neighbor_mine_count(), 1);
        assert_eq!(board.cell((2, 0)).unwrap().neighbor_mine_count(), 0);
        assert_eq!(board.cell((0, 2)).unwrap().neighbor_mine_count(), 0);
        assert!(board.cell((0, 0)).unwrap().is_mine());
        assert_eq!(board.cell((0, 0)).unwrap().neighbor_mine_count(), 0);
    }

    #[test]
    fn from_mine_coords_rejects_bad_input() {
        assert_eq!(
            Board::from_mine_coords((3, 3), &[(3, 0)]),
            Err(GameError::OutOfBounds)
        );
        assert_eq!(
            Board::from_mine_coords((0, 3), &[]),
            Err(GameError::InvalidDimensions)
        );
    }

    #[test]
    fn rows_are_indexed_by_y_then_x() {
        let board = Board::from_mine_coords((4, 2), &[(3, 1)]).unwrap();

        assert_eq!(board.rows().count(), 2);
        for (y, row) in board.rows().enumerate() {
            assert_eq!(row.len(), 4);
            for (x, cell) in row.iter().enumerate() {
                assert_eq!(cell.coords(), (x as Coord, y as Coord));
            }
        }
        assert_eq!(board.cells().count(), 8);
        assert_eq!(board.mine_coords(), [(3, 1)]);
    }

    #[test]
    fn cell_lookup_checks_bounds() {
        let board = Board::from_mine_coords((2, 3), &[]).unwrap();

        assert!(board.cell((1, 2)).is_ok());
        assert_eq!(board.cell((2, 0)), Err(GameError::OutOfBounds));
        assert_eq!(board.cell((0, 3)), Err(GameError::OutOfBounds));
    }

    #[test]
    fn board_serializes_with_serde() {
        let mut board = Board::from_mine_coords((3, 2), &[(0, 0)]).unwrap();
        board.reveal((2, 1)).unwrap();

        let json = serde_json::to_string(&board).unwrap();
        let restored: Board = serde_json::from_str(&json).unwrap();

        assert_eq!(restored, board);
        assert_eq!(restored.open_count(), 4);
    }

    fn tampered(
        board: &Board,
        edit: impl FnOnce(&mut serde_json::Value),
    ) -> serde_json::Result<Board> {
        let mut value = serde_json::to_value(board).unwrap();
        edit(&mut value);
        serde_json::from_value(value)
    }

    #[test]
    fn snapshot_with_wrong_size_is_rejected() {
        let board = Board::from_mine_coords((1, 1), &[]).unwrap();

        let err = tampered(&board, |value| value["size"] = json!([5, 5])).unwrap_err();
        assert!(err.to_string().contains("Board shape"), "{err}");

        let err = tampered(&board, |value| value["size"] = json!([0, 1])).unwrap_err();
        assert!(err.to_string().contains("positive"), "{err}");
    }

    #[test]
    fn snapshot_with_moved_cell_is_rejected() {
        let board = Board::from_mine_coords((2, 2), &[]).unwrap();

        let err = tampered(&board, |value| {
            value["cells"]["data"][1]["x"] = json!(0);
        })
        .unwrap_err();
        assert!(err.to_string().contains("Board shape"), "{err}");
    }

    #[test]
    fn snapshot_with_wrong_counts_is_rejected() {
        let mut board = Board::from_mine_coords((3, 3), &[(1, 1)]).unwrap();
        board.reveal((0, 0)).unwrap();
        assert!(tampered(&board, |_| {}).is_ok());

        let err = tampered(&board, |value| value["open_count"] = json!(5)).unwrap_err();
        assert!(err.to_string().contains("inconsistent"), "{err}");

        let err = tampered(&board, |value| {
            value["cells"]["data"][0]["neighbor_mine_count"] = json!(3);
        })
        .unwrap_err();
        assert!(err.to_string().contains("inconsistent"), "{err}");

        // the mine sits at data index 4
        let err = tampered(&board, |value| {
            value["cells"]["data"][4]["is_open"] = json!(true);
            value["open_count"] = json!(2);
        })
        .unwrap_err();
        assert!(err.to_string().contains("inconsistent"), "{err}");
    }

    #[test]
    fn reveal_on_restored_board_checks_bounds() {
        let board = Board::from_mine_coords((1, 1), &[]).unwrap();
        let json = serde_json::to_string(&board).unwrap();
        let mut restored: Board = serde_json::from_str(&json).unwrap();

        assert_eq!(restored.reveal((3, 3)), Err(GameError::OutOfBounds));
        assert_eq!(restored.reveal((0, 0)), Ok(RevealOutcome::Continue));
    }
}

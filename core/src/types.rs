/// Single coordinate axis used for board width, height, and positions.
pub type Coord = u8;

/// Count type used for mine counts and total-cell counts.
pub type CellCount = u16;

/// Two-dimensional coordinates `(x, y)`.
pub type Coord2 = (Coord, Coord);

/// Cells on a board of the given size, a full `u8 x u8` board still fits.
pub const fn area((width, height): Coord2) -> CellCount {
    width as CellCount * height as CellCount
}

/// Row-major grid index, boards store rows so `y` comes first.
pub(crate) fn grid_index((x, y): Coord2) -> [usize; 2] {
    [y.into(), x.into()]
}

/// The up-to-8 cells around `center` that lie inside `bounds`, row by row.
///
/// Walks the 3x3 window clipped to the board and skips the center itself.
pub fn neighbors(center: Coord2, bounds: Coord2) -> impl Iterator<Item = Coord2> + Clone {
    let (x, y) = center;
    let last_x = bounds.0.saturating_sub(1);
    let last_y = bounds.1.saturating_sub(1);
    let columns = x.saturating_sub(1)..=x.saturating_add(1).min(last_x);
    let rows = y.saturating_sub(1)..=y.saturating_add(1).min(last_y);

    rows.flat_map(move |ny| columns.clone().map(move |nx| (nx, ny)))
        .filter(move |&pos| pos != center)
}

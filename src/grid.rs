use crate::error::{MapError, RenderError};
use crate::geometry::{GridLocation, Point2};
use crate::scalar::Scalar;
use std::fs::read_to_string;
use std::path::Path;

const CLASSIC: &str = include_str!("../maps/classic.map");

/// Occupancy table of wall kinds, 0 being passable.
///
/// Stored row-major (`y * width + x`). The renderer only ever reads it.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<u8>,
}

impl Grid {
    pub fn new(width: usize, height: usize, cells: Vec<u8>) -> Result<Self, MapError> {
        if width == 0 || height == 0 {
            return Err(MapError::Empty);
        }
        if cells.len() != width * height {
            return Err(MapError::SizeMismatch {
                width,
                height,
                expected: width * height,
                found: cells.len(),
            });
        }

        Ok(Self {
            width,
            height,
            cells,
        })
    }

    /// build from rows, `rows[y][x]`
    pub fn from_rows<R: AsRef<[u8]>>(rows: &[R]) -> Result<Self, MapError> {
        let width = rows.first().map(|row| row.as_ref().len()).unwrap_or(0);
        let mut cells = Vec::with_capacity(width * rows.len());
        for (y, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            if row.len() != width {
                return Err(MapError::Ragged {
                    row: y,
                    expected: width,
                    found: row.len(),
                });
            }
            cells.extend_from_slice(row);
        }

        Self::new(width, rows.len(), cells)
    }

    /// empty interior surrounded by a one cell ring of `wall`
    pub fn bordered(width: usize, height: usize, wall: u8) -> Result<Self, MapError> {
        let cells = (0..height)
            .flat_map(|y| {
                (0..width).map(move |x| {
                    if x == 0 || y == 0 || x + 1 == width || y + 1 == height {
                        wall
                    } else {
                        0
                    }
                })
            })
            .collect();

        Self::new(width, height, cells)
    }

    /// the 24x24 demo world
    pub fn classic() -> Result<Self, MapError> {
        Self::parse(CLASSIC)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, MapError> {
        let path = path.as_ref();
        log::info!("loading map at {}", path.display());
        let file = read_to_string(path)?;
        Self::parse(&file)
    }

    /// Parse the text map format: one line per row, one digit per cell.
    /// Blank lines and lines starting with `#` are skipped.
    pub fn parse(text: &str) -> Result<Self, MapError> {
        let mut rows = vec![];
        for line in text.lines() {
            let line = line.trim_end();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            let row = line
                .chars()
                .enumerate()
                .map(|(column, c)| {
                    c.to_digit(10)
                        .map(|kind| kind as u8)
                        .ok_or(MapError::InvalidCell {
                            row: rows.len(),
                            column,
                            found: c,
                        })
                })
                .collect::<Result<Vec<_>, _>>()?;
            rows.push(row);
        }

        let grid = Self::from_rows(&rows[..])?;
        log::debug!("parsed {}x{} map", grid.width, grid.height);
        Ok(grid)
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    fn index(&self, cell: GridLocation) -> Option<usize> {
        let x = usize::try_from(cell.x).ok()?;
        let y = usize::try_from(cell.y).ok()?;
        (x < self.width && y < self.height).then(|| y * self.width + x)
    }

    pub fn contains(&self, cell: GridLocation) -> bool {
        self.index(cell).is_some()
    }

    /// wall kind at `cell`; leaving the grid is an error, never a wall
    pub fn get(&self, cell: GridLocation) -> Result<u8, RenderError> {
        self.index(cell)
            .map(|idx| self.cells[idx])
            .ok_or(RenderError::OutOfBounds { cell })
    }

    /// true iff the cell holding `point` is passable
    pub fn can_move<T: Scalar>(&self, point: Point2<T>) -> Result<bool, RenderError> {
        Ok(self.get(point.to_location())? == 0)
    }

    /// whether the outermost ring is all walls, which keeps every ray inside
    pub fn is_enclosed(&self) -> bool {
        let (w, h) = (self.width as i32, self.height as i32);
        let mut ring = (0..w)
            .flat_map(|x| [GridLocation::new(x, 0), GridLocation::new(x, h - 1)])
            .chain((0..h).flat_map(|y| [GridLocation::new(0, y), GridLocation::new(w - 1, y)]));

        ring.all(|cell| self.get(cell).is_ok_and(|kind| kind > 0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classic_map_matches_demo_layout() {
        let grid = Grid::classic().unwrap();
        assert_eq!((grid.width(), grid.height()), (24, 24));
        assert!(grid.is_enclosed());

        // spawn of the demo
        assert_eq!(grid.get(GridLocation::new(22, 12)), Ok(0));
        // the lone kind 5 pillar inside the 4 room
        assert_eq!(grid.get(GridLocation::new(18, 6)), Ok(5));
        assert_eq!(grid.get(GridLocation::new(4, 6)), Ok(2));
        assert_eq!(grid.get(GridLocation::new(4, 15)), Ok(3));
    }

    #[test]
    fn parse_skips_comments_and_blank_lines() {
        let grid = Grid::parse("# test\n\n111\n101\n\n111\n").unwrap();
        assert_eq!((grid.width(), grid.height()), (3, 3));
        assert_eq!(grid.get(GridLocation::new(1, 1)), Ok(0));
        assert_eq!(grid.get(GridLocation::new(2, 1)), Ok(1));
    }

    #[test]
    fn parse_rejects_bad_maps() {
        assert!(matches!(Grid::parse("# nothing\n"), Err(MapError::Empty)));
        assert!(matches!(
            Grid::parse("111\n10\n111"),
            Err(MapError::Ragged {
                row: 1,
                expected: 3,
                found: 2
            })
        ));
        assert!(matches!(
            Grid::parse("111\n1x1\n111"),
            Err(MapError::InvalidCell {
                row: 1,
                column: 1,
                found: 'x'
            })
        ));
    }

    #[test]
    fn new_checks_cell_count() {
        assert!(matches!(
            Grid::new(2, 2, vec![1, 1, 1]),
            Err(MapError::SizeMismatch { expected: 4, .. })
        ));
    }

    #[test]
    fn out_of_range_lookup_is_an_error() {
        let grid = Grid::bordered(5, 5, 1).unwrap();
        assert_eq!(
            grid.get(GridLocation::new(5, 0)),
            Err(RenderError::OutOfBounds {
                cell: GridLocation::new(5, 0)
            })
        );
        assert!(grid.get(GridLocation::new(-1, 2)).is_err());
        assert!(!grid.contains(GridLocation::new(0, 5)));
    }

    #[test]
    fn can_move_follows_cell_kind() {
        let grid = Grid::bordered(5, 5, 1).unwrap();
        assert_eq!(grid.can_move(Point2::new(1.0, 1.0)), Ok(true));
        assert_eq!(grid.can_move(Point2::new(3.99f32, 2.5)), Ok(true));
        assert_eq!(grid.can_move(Point2::new(0.0, 0.0)), Ok(false));
        assert_eq!(grid.can_move(Point2::new(4.2, 2.0)), Ok(false));
        assert!(grid.can_move(Point2::new(5.5, 2.0)).is_err());
    }

    #[test]
    fn open_grid_is_not_enclosed() {
        let grid = Grid::from_rows(&[[1u8, 1, 1], [0, 0, 1], [1, 1, 1]]).unwrap();
        assert!(!grid.is_enclosed());
    }

    #[test]
    fn enclosure_checks_every_edge() {
        assert!(Grid::bordered(4, 3, 2).unwrap().is_enclosed());
        assert!(Grid::from_rows(&[[1u8]]).unwrap().is_enclosed());

        // a single gap on the bottom edge is enough to leak
        let grid = Grid::from_rows(&[[1u8, 1, 1, 1], [1, 0, 0, 1], [1, 1, 0, 1]]).unwrap();
        assert!(!grid.is_enclosed());
    }
}

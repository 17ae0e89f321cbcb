use crate::utils::error::{AuditError, Result};
use std::fmt;

/// Side length of the grid and of every region.
pub const GRID_SIZE: usize = 9;

/// Number of cells consumed from an input source.
pub const CELL_COUNT: usize = GRID_SIZE * GRID_SIZE;

/// A fully loaded 9x9 grid. Cells hold 0 (empty) or a digit 1-9.
/// Read-only after construction; validation never writes back.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    cells: [[u8; GRID_SIZE]; GRID_SIZE],
}

impl Grid {
    /// Parses the first 81 bytes of `input` as ASCII digits, row-major.
    /// Anything after the 81st byte (trailing newline, extra content) is
    /// ignored. Fails if the input is shorter than 81 bytes or contains a
    /// non-digit byte among the first 81.
    pub fn parse(input: &[u8]) -> Result<Grid> {
        if input.len() < CELL_COUNT {
            return Err(AuditError::MalformedInput {
                reason: format!(
                    "expected {} digit characters, got {}",
                    CELL_COUNT,
                    input.len()
                ),
            });
        }

        let mut cells = [[0u8; GRID_SIZE]; GRID_SIZE];
        for (index, byte) in input.iter().take(CELL_COUNT).enumerate() {
            if !byte.is_ascii_digit() {
                return Err(AuditError::MalformedInput {
                    reason: format!("non-digit byte 0x{:02x} at position {}", byte, index),
                });
            }
            cells[index / GRID_SIZE][index % GRID_SIZE] = byte - b'0';
        }

        Ok(Grid { cells })
    }

    pub fn from_cells(cells: [[u8; GRID_SIZE]; GRID_SIZE]) -> Grid {
        Grid { cells }
    }

    pub fn get(&self, row: usize, col: usize) -> u8 {
        self.cells[row][col]
    }
}

/// Identity of one 9-cell region. Subgrid origins are block-aligned,
/// i.e. row and col are each in {0, 3, 6}.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum RegionKind {
    Row(usize),
    Column(usize),
    Subgrid { row: usize, col: usize },
}

impl RegionKind {
    /// The 9 cell coordinates of this region, in scan order (left to right
    /// for rows, top to bottom for columns, row-major within a subgrid).
    pub fn cells(&self) -> [(usize, usize); GRID_SIZE] {
        let mut coords = [(0usize, 0usize); GRID_SIZE];
        match *self {
            RegionKind::Row(row) => {
                for (col, slot) in coords.iter_mut().enumerate() {
                    *slot = (row, col);
                }
            }
            RegionKind::Column(col) => {
                for (row, slot) in coords.iter_mut().enumerate() {
                    *slot = (row, col);
                }
            }
            RegionKind::Subgrid { row, col } => {
                for (offset, slot) in coords.iter_mut().enumerate() {
                    *slot = (row + offset / 3, col + offset % 3);
                }
            }
        }
        coords
    }

    /// All 27 regions in canonical order: rows 0-8, columns 0-8, then
    /// subgrids row-major.
    pub fn all() -> Vec<RegionKind> {
        let mut regions = Vec::with_capacity(3 * GRID_SIZE);
        regions.extend((0..GRID_SIZE).map(RegionKind::Row));
        regions.extend((0..GRID_SIZE).map(RegionKind::Column));
        for row in (0..GRID_SIZE).step_by(3) {
            for col in (0..GRID_SIZE).step_by(3) {
                regions.push(RegionKind::Subgrid { row, col });
            }
        }
        regions
    }
}

impl fmt::Display for RegionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Rows and columns are 1-based for humans; subgrids print their
        // 0-based origin cell.
        match *self {
            RegionKind::Row(row) => write!(f, "row {}", row + 1),
            RegionKind::Column(col) => write!(f, "column {}", col + 1),
            RegionKind::Subgrid { row, col } => write!(f, "subgrid [{}, {}]", row, col),
        }
    }
}

/// Outcome of scanning a single region. `duplicates` holds one entry per
/// repeated occurrence, in scan order, so a digit appearing three times is
/// recorded twice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegionResult {
    pub kind: RegionKind,
    pub duplicates: Vec<u8>,
}

impl RegionResult {
    pub fn is_valid(&self) -> bool {
        self.duplicates.is_empty()
    }
}

/// Aggregate of all 27 region results, held in canonical region order so
/// two runs over the same grid compare equal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationOutcome {
    results: Vec<RegionResult>,
}

impl ValidationOutcome {
    pub fn new(mut results: Vec<RegionResult>) -> ValidationOutcome {
        results.sort_by_key(|result| result.kind);
        ValidationOutcome { results }
    }

    pub fn results(&self) -> &[RegionResult] {
        &self.results
    }

    /// Conjunction of every region's validity.
    pub fn is_valid(&self) -> bool {
        self.results.iter().all(RegionResult::is_valid)
    }

    pub fn invalid_rows(&self) -> usize {
        self.invalid_matching(|kind| matches!(kind, RegionKind::Row(_)))
    }

    pub fn invalid_columns(&self) -> usize {
        self.invalid_matching(|kind| matches!(kind, RegionKind::Column(_)))
    }

    pub fn invalid_subgrids(&self) -> usize {
        self.invalid_matching(|kind| matches!(kind, RegionKind::Subgrid { .. }))
    }

    fn invalid_matching(&self, predicate: impl Fn(&RegionKind) -> bool) -> usize {
        self.results
            .iter()
            .filter(|result| predicate(&result.kind) && !result.is_valid())
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_maps_digits_row_major() {
        let mut input = vec![b'0'; CELL_COUNT];
        input[0] = b'5';
        input[10] = b'7'; // row 1, col 1
        input[80] = b'9';

        let grid = Grid::parse(&input).unwrap();
        assert_eq!(grid.get(0, 0), 5);
        assert_eq!(grid.get(1, 1), 7);
        assert_eq!(grid.get(8, 8), 9);
    }

    #[test]
    fn parse_ignores_trailing_content() {
        let mut input = vec![b'1'; CELL_COUNT];
        input.extend_from_slice(b"\nextra junk");
        assert!(Grid::parse(&input).is_ok());
    }

    #[test]
    fn parse_rejects_short_input() {
        let input = vec![b'1'; CELL_COUNT - 1];
        let err = Grid::parse(&input).unwrap_err();
        assert!(matches!(err, AuditError::MalformedInput { .. }));
    }

    #[test]
    fn parse_rejects_non_digit_byte() {
        let mut input = vec![b'1'; CELL_COUNT];
        input[40] = b'x';
        let err = Grid::parse(&input).unwrap_err();
        assert!(matches!(err, AuditError::MalformedInput { .. }));
    }

    #[test]
    fn region_cells_cover_expected_coordinates() {
        assert_eq!(RegionKind::Row(2).cells()[4], (2, 4));
        assert_eq!(RegionKind::Column(7).cells()[0], (0, 7));

        let subgrid = RegionKind::Subgrid { row: 3, col: 6 }.cells();
        assert_eq!(subgrid[0], (3, 6));
        assert_eq!(subgrid[4], (4, 7));
        assert_eq!(subgrid[8], (5, 8));
    }

    #[test]
    fn all_regions_is_27_unique() {
        let regions = RegionKind::all();
        assert_eq!(regions.len(), 27);
        let unique: std::collections::HashSet<_> = regions.iter().collect();
        assert_eq!(unique.len(), 27);
    }

    #[test]
    fn display_matches_reporting_format() {
        assert_eq!(RegionKind::Row(0).to_string(), "row 1");
        assert_eq!(RegionKind::Column(8).to_string(), "column 9");
        assert_eq!(
            RegionKind::Subgrid { row: 6, col: 3 }.to_string(),
            "subgrid [6, 3]"
        );
    }

    #[test]
    fn outcome_orders_results_canonically() {
        let shuffled = vec![
            RegionResult {
                kind: RegionKind::Subgrid { row: 0, col: 0 },
                duplicates: vec![],
            },
            RegionResult {
                kind: RegionKind::Row(0),
                duplicates: vec![4],
            },
            RegionResult {
                kind: RegionKind::Column(3),
                duplicates: vec![],
            },
        ];
        let outcome = ValidationOutcome::new(shuffled);
        assert_eq!(outcome.results()[0].kind, RegionKind::Row(0));
        assert!(!outcome.is_valid());
        assert_eq!(outcome.invalid_rows(), 1);
        assert_eq!(outcome.invalid_columns(), 0);
    }
}

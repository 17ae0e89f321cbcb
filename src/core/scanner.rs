use crate::domain::model::{Grid, RegionKind, RegionResult};

/// Scans one region for duplicate digits with a seen-marker array.
///
/// Index 0 of the marker array is unused: 0 means an empty cell and is
/// never flagged, so a grid of blanks scans as valid. The scan does not
/// short-circuit; every repeated occurrence is recorded in scan order.
/// Reads the grid only, so any number of scans may run concurrently.
pub fn scan_region(grid: &Grid, kind: RegionKind) -> RegionResult {
    let mut seen = [false; 10];
    let mut duplicates = Vec::new();

    for (row, col) in kind.cells() {
        let digit = grid.get(row, col);
        if digit == 0 {
            continue;
        }
        if seen[digit as usize] {
            duplicates.push(digit);
        } else {
            seen[digit as usize] = true;
        }
    }

    RegionResult { kind, duplicates }
}

//! Board and fleet constants shared across the crate.

/// Default number of board rows.
pub const ROWS: usize = 10;
/// Default number of board columns.
pub const COLS: usize = 10;

/// Lengths of the fixed fleet, one entry per ship.
pub const FLEET: [usize; 5] = [5, 4, 3, 3, 2];

/// Total cells occupied by the full fleet.
pub const TOTAL_SHIP_CELLS: usize = fleet_total();

/// Random placement attempts allowed per ship before giving up.
pub const MAX_PLACEMENT_ATTEMPTS: usize = 100;

/// Trials allowed when inferring the remaining fleet from a hit count.
pub const REMAINING_SHIP_TRIALS: usize = 999;

const fn fleet_total() -> usize {
    let mut total = 0;
    let mut i = 0;
    while i < FLEET.len() {
        total += FLEET[i];
        i += 1;
    }
    total
}

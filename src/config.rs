use crate::ship::ShipSpec;

/// Grid height of the standard board.
pub const BOARD_ROWS: usize = 10;
/// Grid width of the standard board.
pub const BOARD_COLS: usize = 10;
/// Number of ships in the standard fleet.
pub const FLEET_SIZE: usize = 5;
/// Random placement attempts per ship before giving up.
pub const MAX_PLACEMENT_ATTEMPTS: usize = 100;

/// The standard fleet to place.
pub const FLEET: [ShipSpec; FLEET_SIZE] = [
    ShipSpec::new("Carrier", 5),
    ShipSpec::new("Battleship", 4),
    ShipSpec::new("Cruiser", 3),
    ShipSpec::new("Submarine", 3),
    ShipSpec::new("Destroyer", 2),
];

/// Total number of cells occupied by the standard fleet.
pub const TOTAL_FLEET_CELLS: usize = {
    let mut total = 0;
    let mut i = 0;
    while i < FLEET_SIZE {
        total += FLEET[i].size();
        i += 1;
    }
    total
};

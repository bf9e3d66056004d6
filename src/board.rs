//! Game board state: ship placements over an R×C grid.

use core::fmt;
use num_traits::{PrimInt, Unsigned, Zero};
use rand::Rng;

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

use crate::bitboard::BitBoard;
use crate::common::BoardError;
use crate::config::{BOARD_COLS, BOARD_ROWS, MAX_PLACEMENT_ATTEMPTS};
use crate::ship::{Orientation, Ship, ShipSpec};

/// The standard 10×10 board backed by a `u128`.
pub type StandardBoard = Board<u128, BOARD_ROWS, BOARD_COLS>;

/// Main board state: placed ships and their combined occupancy mask.
///
/// Invariant: `ship_map` is the union of the masks of `ships`, so a cell
/// is marked occupied iff exactly one placed ship covers it.
#[derive(Clone, PartialEq, Eq)]
pub struct Board<T, const R: usize, const C: usize>
where
    T: PrimInt + Unsigned + Zero,
{
    ship_map: BitBoard<T, R, C>,
    ships: Vec<Ship<T, R, C>>,
}

impl<T, const R: usize, const C: usize> Board<T, R, C>
where
    T: PrimInt + Unsigned + Zero,
{
    /// Create an empty board (no ships placed, every cell clear).
    pub fn new() -> Self {
        Board {
            ship_map: BitBoard::new(),
            ships: Vec::new(),
        }
    }

    /// Grid height.
    pub const fn rows(&self) -> usize {
        R
    }

    /// Grid width.
    pub const fn cols(&self) -> usize {
        C
    }

    /// Board occupancy mask of all ships.
    pub fn ship_map(&self) -> BitBoard<T, R, C> {
        self.ship_map
    }

    /// Ships placed so far, in placement order.
    pub fn ships(&self) -> &[Ship<T, R, C>] {
        &self.ships
    }

    /// Number of occupied cells.
    pub fn occupied_cells(&self) -> usize {
        self.ship_map.count_ones()
    }

    /// Returns `true` when no ship occupies any cell.
    pub fn is_clear(&self) -> bool {
        self.ship_map.is_empty()
    }

    /// The ship occupying (`row`, `col`), or `None` for an empty cell.
    /// Out-of-bounds coordinates are an error.
    pub fn ship_at(&self, row: usize, col: usize) -> Result<Option<&Ship<T, R, C>>, BoardError> {
        if !self.ship_map.get(row, col)? {
            return Ok(None);
        }
        Ok(self.ships.iter().find(|ship| ship.contains(row, col)))
    }

    /// Placement validator: `true` iff every cell the ship would occupy
    /// lies inside the grid and is currently empty. Pure, no side effects.
    pub fn can_place(
        &self,
        spec: ShipSpec,
        row: usize,
        col: usize,
        orientation: Orientation,
    ) -> bool {
        match Ship::<T, R, C>::new(spec, orientation, row, col) {
            Ok(ship) => (self.ship_map & ship.mask()).is_empty(),
            Err(_) => false,
        }
    }

    /// Place a ship at (`row`, `col`) with `orientation`, marking its cells
    /// and appending it to the ship list.
    pub fn place(
        &mut self,
        spec: ShipSpec,
        row: usize,
        col: usize,
        orientation: Orientation,
    ) -> Result<(), BoardError> {
        let ship = Ship::<T, R, C>::new(spec, orientation, row, col)?;
        // ensure no overlap
        if !(self.ship_map & ship.mask()).is_empty() {
            return Err(BoardError::ShipOverlaps);
        }
        // record placement
        self.ship_map = self.ship_map | ship.mask();
        self.ships.push(ship);
        Ok(())
    }

    /// Returns a random non‐overlapping (row, col, Orientation) for `spec`.
    ///
    /// Sampling is bounded by [`MAX_PLACEMENT_ATTEMPTS`]; once the budget is
    /// exhausted `Err(UnableToPlaceShip)` is returned instead of looping.
    pub fn random_placement<Rg: Rng>(
        &self,
        rng: &mut Rg,
        spec: ShipSpec,
    ) -> Result<(usize, usize, Orientation), BoardError> {
        if spec.size() == 0 {
            return Err(BoardError::InvalidShipSize);
        }
        let fits_horizontal = spec.size() <= C;
        let fits_vertical = spec.size() <= R;
        if !fits_horizontal && !fits_vertical {
            return Err(BoardError::ShipOutOfBounds);
        }
        let mut attempts = 0;
        while attempts < MAX_PLACEMENT_ATTEMPTS {
            attempts += 1;
            let orientation = if fits_horizontal && fits_vertical {
                if rng.random() {
                    Orientation::Horizontal
                } else {
                    Orientation::Vertical
                }
            } else if fits_horizontal {
                Orientation::Horizontal
            } else {
                Orientation::Vertical
            };
            // clamp start ranges so the run always fits the orientation
            let max_r = if orientation == Orientation::Vertical {
                R - spec.size()
            } else {
                R - 1
            };
            let max_c = if orientation == Orientation::Horizontal {
                C - spec.size()
            } else {
                C - 1
            };
            let r = rng.random_range(0..=max_r);
            let c = rng.random_range(0..=max_c);
            // build a temp ship and check overlap
            let ship = Ship::<T, R, C>::new(spec, orientation, r, c)?;
            if (self.ship_map & ship.mask()).is_empty() {
                return Ok((r, c, orientation));
            }
        }
        Err(BoardError::UnableToPlaceShip)
    }

    /// Sample a random placement for `spec` and commit it to the board.
    /// Returns the chosen position and orientation.
    pub fn place_random<Rg: Rng>(
        &mut self,
        rng: &mut Rg,
        spec: ShipSpec,
    ) -> Result<(usize, usize, Orientation), BoardError> {
        let (r, c, orientation) = self.random_placement(rng, spec)?;
        self.place(spec, r, c, orientation)?;
        Ok((r, c, orientation))
    }

    /// Place every ship of `specs` at a random position, accumulating all
    /// placements onto this board.
    ///
    /// On failure the board keeps the ships placed so far; the caller
    /// decides whether to retry with a fresh board or surface the error.
    pub fn place_fleet<Rg: Rng>(
        &mut self,
        rng: &mut Rg,
        specs: &[ShipSpec],
    ) -> Result<(), BoardError> {
        for spec in specs {
            self.place_random(rng, *spec)?;
        }
        Ok(())
    }
}

impl<T, const R: usize, const C: usize> Default for Board<T, R, C>
where
    T: PrimInt + Unsigned + Zero,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<T, const R: usize, const C: usize> fmt::Debug for Board<T, R, C>
where
    T: PrimInt + Unsigned + Zero + fmt::Binary,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Board {{\n  ship_map: {:?},\n  ships: {:?}\n}}",
            self.ship_map, self.ships
        )
    }
}

/// Textual dump of the grid: one line per row, `■` for an occupied cell,
/// `□` for an empty one.
impl<T, const R: usize, const C: usize> fmt::Display for Board<T, R, C>
where
    T: PrimInt + Unsigned + Zero,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for r in 0..R {
            for c in 0..C {
                let occupied = self.ship_map.get(r, c).unwrap_or(false);
                write!(f, "{} ", if occupied { '■' } else { '□' })?;
            }
            if r + 1 < R {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}

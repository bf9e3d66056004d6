//! Ship definitions and placement geometry using our `BitBoard`.

use core::fmt;
use num_traits::{PrimInt, Unsigned, Zero};

use crate::bitboard::BitBoard;
use crate::common::BoardError;

/// Orientation of a ship on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    Horizontal,
    Vertical,
}

/// Fleet entry: name and size of a ship to place.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShipSpec {
    name: &'static str,
    size: usize,
}

impl ShipSpec {
    /// Create a new ship spec.
    pub const fn new(name: &'static str, size: usize) -> Self {
        Self { name, size }
    }

    /// Ship's name.
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Ship's size in cells.
    pub const fn size(&self) -> usize {
        self.size
    }
}

/// A ship placed on an R×C board, with received hits tracked in a counter.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Ship<T, const R: usize, const C: usize>
where
    T: PrimInt + Unsigned + Zero,
{
    spec: ShipSpec,
    orientation: Orientation,
    row: usize,
    col: usize,
    mask: BitBoard<T, R, C>,
    hits: usize,
}

impl<T, const R: usize, const C: usize> Ship<T, R, C>
where
    T: PrimInt + Unsigned + Zero,
{
    /// Place a ship at (`row`, `col`) with `orientation`.
    /// Returns the newly constructed ship with its hit counter at zero.
    pub fn new(
        spec: ShipSpec,
        orientation: Orientation,
        row: usize,
        col: usize,
    ) -> Result<Self, BoardError> {
        let size = spec.size();
        if size == 0 {
            return Err(BoardError::InvalidShipSize);
        }
        // Ensure the whole run fits within R×C
        if row >= R || col >= C {
            return Err(BoardError::ShipOutOfBounds);
        }
        if orientation == Orientation::Horizontal {
            if col + size > C {
                return Err(BoardError::ShipOutOfBounds);
            }
        } else if row + size > R {
            return Err(BoardError::ShipOutOfBounds);
        }

        // Build occupancy mask
        let mut mask = BitBoard::<T, R, C>::new();
        for i in 0..size {
            let (r, c) = match orientation {
                Orientation::Horizontal => (row, col + i),
                Orientation::Vertical => (row + i, col),
            };
            mask.set(r, c)?;
        }

        Ok(Ship {
            spec,
            orientation,
            row,
            col,
            mask,
            hits: 0,
        })
    }

    /// Ship's spec.
    pub fn spec(&self) -> ShipSpec {
        self.spec
    }

    /// Ship's name.
    pub fn name(&self) -> &'static str {
        self.spec.name()
    }

    /// Ship's size in cells.
    pub fn size(&self) -> usize {
        self.spec.size()
    }

    /// Origin of the ship (row, col).
    pub fn origin(&self) -> (usize, usize) {
        (self.row, self.col)
    }

    /// Orientation of the ship.
    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Occupancy mask of the ship on the board.
    pub fn mask(&self) -> BitBoard<T, R, C> {
        self.mask
    }

    /// Returns `true` if the ship occupies (`row`, `col`).
    pub fn contains(&self, row: usize, col: usize) -> bool {
        self.mask.get(row, col).unwrap_or(false)
    }

    /// Iterator over the cells the ship occupies, from its origin outward.
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        let (row, col) = (self.row, self.col);
        let orientation = self.orientation;
        (0..self.spec.size()).map(move |i| match orientation {
            Orientation::Horizontal => (row, col + i),
            Orientation::Vertical => (row + i, col),
        })
    }

    /// Number of hits the ship has received.
    pub fn hits(&self) -> usize {
        self.hits
    }

    /// Register one hit on the ship, saturating at its size.
    pub fn record_hit(&mut self) {
        if self.hits < self.spec.size() {
            self.hits += 1;
        }
    }

    /// Check if the ship is sunk (all segments hit).
    pub fn is_sunk(&self) -> bool {
        self.hits == self.spec.size()
    }
}

impl<T, const R: usize, const C: usize> fmt::Debug for Ship<T, R, C>
where
    T: PrimInt + Unsigned + Zero + fmt::Binary,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Ship {{ name: \"{}\", origin: ({}, {}), orientation: {:?}, hits: {}, mask: {:?} }}",
            self.spec.name(),
            self.row,
            self.col,
            self.orientation,
            self.hits,
            self.mask,
        )
    }
}

//! Hex board geometry with axial coordinates

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::game::Player;

/// Largest supported board radius
pub const MAX_RADIUS: u8 = 20;

/// Axial hex coordinates
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Hex {
    pub q: i8,
    pub r: i8,
}

impl Hex {
    pub const fn new(q: i8, r: i8) -> Self {
        Self { q, r }
    }

    /// Implicit third axial coordinate, widened so every `(q, r)` pair fits
    pub const fn s(&self) -> i16 {
        -(self.q as i16) - self.r as i16
    }

    /// Check if this hex lies inside a hexagon of the given radius
    pub fn is_within(&self, radius: u8) -> bool {
        let radius = i16::from(radius);
        i16::from(self.q).abs() <= radius
            && i16::from(self.r).abs() <= radius
            && self.s().abs() <= radius
    }

    /// Distance from center (0,0)
    pub fn distance_to_center(&self) -> i16 {
        self.distance_to(Hex::new(0, 0))
    }

    /// Distance between two hexes
    pub fn distance_to(&self, other: Hex) -> i16 {
        let dq = (i16::from(self.q) - i16::from(other.q)).abs();
        let dr = (i16::from(self.r) - i16::from(other.r)).abs();
        let ds = (self.s() - other.s()).abs();
        dq.max(dr).max(ds)
    }

    /// Get neighbor in direction (0-5)
    pub fn neighbor(&self, direction: u8) -> Hex {
        let (dq, dr) = DIRECTIONS[direction as usize % 6];
        Hex::new(self.q + dq, self.r + dr)
    }

    /// All six adjacent coordinates, on or off any particular board
    pub fn neighbors(&self) -> [Hex; 6] {
        std::array::from_fn(|i| self.neighbor(i as u8))
    }
}

/// Direction vectors in axial coordinates (dq, dr)
/// Index: 0=N, 1=NE, 2=SE, 3=S, 4=SW, 5=NW
pub const DIRECTIONS: [(i8, i8); 6] = [
    (0, -1),  // N
    (1, -1),  // NE
    (1, 0),   // SE
    (0, 1),   // S
    (-1, 1),  // SW
    (-1, 0),  // NW
];

/// Number of cells in a hexagon of the given radius
pub const fn cell_count(radius: u8) -> usize {
    let r = radius as usize;
    3 * r * (r + 1) + 1
}

// ============================================================================
// BOARD
// ============================================================================

/// Fixed cell layout for one radius, shared by every clone of a board
#[derive(Debug, PartialEq, Eq)]
struct Geometry {
    radius: u8,
    /// Coordinates in generation order (q ascending, then r ascending)
    coords: Vec<Hex>,
    /// Index of the first cell of each q-row
    row_start: Vec<usize>,
}

impl Geometry {
    fn new(radius: u8) -> Self {
        let n = radius as i8;
        let mut coords = Vec::with_capacity(cell_count(radius));
        let mut row_start = Vec::with_capacity(2 * radius as usize + 1);

        for q in -n..=n {
            row_start.push(coords.len());
            let r1 = (-n).max(-q - n);
            let r2 = n.min(-q + n);
            for r in r1..=r2 {
                coords.push(Hex::new(q, r));
            }
        }

        Self {
            radius,
            coords,
            row_start,
        }
    }

    fn index_of(&self, hex: Hex) -> Option<usize> {
        if !hex.is_within(self.radius) {
            return None;
        }
        let n = self.radius as i8;
        let row = (hex.q + n) as usize;
        let r_min = (-n).max(-hex.q - n);
        Some(self.row_start[row] + (hex.r - r_min) as usize)
    }
}

/// Hexagonal board: every cell of the region plus its owner.
///
/// Cells are never added or removed after construction, only their
/// ownership changes. Clones share the geometry and copy only the
/// ownership vector.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    geometry: Arc<Geometry>,
    cells: Vec<Option<Player>>,
}

impl Board {
    /// Build an empty board of the given radius.
    ///
    /// Panics if `radius` exceeds [`MAX_RADIUS`]; level validation rejects
    /// such configurations before a board is built.
    pub fn new(radius: u8) -> Self {
        assert!(radius <= MAX_RADIUS, "board radius {} exceeds {}", radius, MAX_RADIUS);
        let geometry = Geometry::new(radius);
        let cells = vec![None; geometry.coords.len()];
        Self {
            geometry: Arc::new(geometry),
            cells,
        }
    }

    pub fn radius(&self) -> u8 {
        self.geometry.radius
    }

    /// Total number of cells
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn contains(&self, hex: Hex) -> bool {
        hex.is_within(self.geometry.radius)
    }

    /// Dense index of a coordinate, `None` when off the board
    pub fn index_of(&self, hex: Hex) -> Option<usize> {
        self.geometry.index_of(hex)
    }

    /// Coordinate stored at a dense index
    pub fn hex_at(&self, index: usize) -> Hex {
        self.geometry.coords[index]
    }

    /// Owner of a cell (`None` for empty or off-board cells)
    pub fn get(&self, hex: Hex) -> Option<Player> {
        self.index_of(hex).and_then(|i| self.cells[i])
    }

    /// Set the owner of a cell. Returns false if the hex is off the board.
    pub fn set(&mut self, hex: Hex, owner: Option<Player>) -> bool {
        match self.index_of(hex) {
            Some(i) => {
                self.cells[i] = owner;
                true
            }
            None => false,
        }
    }

    /// Iterate every cell in generation order
    pub fn cells(&self) -> impl Iterator<Item = (Hex, Option<Player>)> + '_ {
        self.geometry.coords.iter().copied().zip(self.cells.iter().copied())
    }

    /// Iterate the cells owned by `player`, in generation order
    pub fn pieces(&self, player: Player) -> impl Iterator<Item = Hex> + '_ {
        self.cells()
            .filter(move |&(_, owner)| owner == Some(player))
            .map(|(hex, _)| hex)
    }

    /// Iterate unowned cells, in generation order
    pub fn empty_cells(&self) -> impl Iterator<Item = Hex> + '_ {
        self.cells()
            .filter(|&(_, owner)| owner.is_none())
            .map(|(hex, _)| hex)
    }

    /// Count cells owned by `player` (full scan)
    pub fn count(&self, player: Player) -> usize {
        self.cells.iter().filter(|&&owner| owner == Some(player)).count()
    }

    /// Count unowned cells (full scan)
    pub fn empty_count(&self) -> usize {
        self.cells.iter().filter(|owner| owner.is_none()).count()
    }
}

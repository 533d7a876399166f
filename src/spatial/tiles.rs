//! Tile codes and the closed tile enumeration shared by every component

use crate::io::error::LevelError;

/// Raw byte stored in a grid cell
pub type TileCode = u8;

/// Every tile kind a section may contain
///
/// The numeric value is the byte written into the grid and the digit used in
/// blueprints. Codes above [`TileKind::GhostTrigger`] are corrupt data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum TileKind {
    /// No tile
    Empty = 0,
    /// Solid wall
    Wall = 1,
    /// Halves the player's speed
    Resistance = 2,
    /// Doubles the player's speed
    Coil = 3,
    /// Collectible battery
    Battery = 4,
    /// Consumable hazard that slows the player
    BrokenCircuitry = 5,
    /// Fires positrons along a random direction
    PositronSpawner = 6,
    /// Grows a beam across the shaft when touched
    BeamTrigger = 7,
    /// Redirects the player and locks input while inside
    Led = 8,
    /// Temporary invulnerability
    Shield = 9,
    /// Starts replaying a ghost of the player
    GhostTrigger = 10,
}

impl TileKind {
    /// All kinds in code order
    pub const ALL: [Self; 11] = [
        Self::Empty,
        Self::Wall,
        Self::Resistance,
        Self::Coil,
        Self::Battery,
        Self::BrokenCircuitry,
        Self::PositronSpawner,
        Self::BeamTrigger,
        Self::Led,
        Self::Shield,
        Self::GhostTrigger,
    ];

    /// Highest valid tile code
    pub const MAX_CODE: TileCode = Self::GhostTrigger as TileCode;

    /// Byte representation stored in grids
    pub const fn code(self) -> TileCode {
        self as TileCode
    }

    /// Whether the kind produces a spawned object
    pub const fn is_spawnable(self) -> bool {
        !matches!(self, Self::Empty)
    }

    /// Human readable asset name
    pub const fn name(self) -> &'static str {
        match self {
            Self::Empty => "Empty",
            Self::Wall => "Wall",
            Self::Resistance => "Resistance",
            Self::Coil => "Coil",
            Self::Battery => "Battery",
            Self::BrokenCircuitry => "BrokenCircuitry",
            Self::PositronSpawner => "PositronSpawner",
            Self::BeamTrigger => "BeamTrigger",
            Self::Led => "LED",
            Self::Shield => "Shield",
            Self::GhostTrigger => "GhostTrigger",
        }
    }
}

impl TryFrom<TileCode> for TileKind {
    type Error = LevelError;

    /// Position fields of the error are zero; callers attach the real cell
    /// through [`crate::io::error::WithContext`].
    fn try_from(code: TileCode) -> Result<Self, Self::Error> {
        Self::ALL
            .get(code as usize)
            .copied()
            .ok_or(LevelError::UnknownTileCode {
                code,
                column: 0,
                row: 0,
            })
    }
}

impl From<TileKind> for TileCode {
    fn from(kind: TileKind) -> Self {
        kind.code()
    }
}

use serde::{Deserialize, Serialize};

use crate::entity::KeyColor;

/// Terrain occupying one grid cell.
///
/// On the wire a tile is a packed identity `tag | variant << 8`, where the
/// tag selects the category (decoration, ground, climbable, door, water).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Tile {
    /// A cell whose identity was not recognized, holding the packed value as
    /// read so it is written back unchanged.
    Unset(u32),

    // Background (tag 0x01)
    /// Empty space; fills new or grown grids.
    #[default]
    Air,
    Fence,
    Bush,
    LeftCloud,
    RightCloud,
    Sun,
    LeftArrow,
    RightArrow,
    UpArrow,
    DownArrow,

    // Ground (tag 0x02)
    Ground,
    HardGround,
    Trap,
    GrassGround,
    HardGrassGround,
    GrassTrap,
    MoleHill,

    // Climbable (tag 0x03)
    Ladder,
    LadderShowingUpWhenFinished,
    Rope,
    LadderVanishingWhenFinished,

    // Doors (tag 0x04)
    RedDoor,
    YellowDoor,
    GreenDoor,
    AutoClosingRedDoor,
    AutoClosingYellowDoor,
    AutoClosingGreenDoor,

    // Water (tag 0x05)
    Water,
    WaterSurface,
}

impl Tile {
    /// Every named tile, in wire order.
    pub const ALL: [Tile; 29] = [
        Self::Air,
        Self::Fence,
        Self::Bush,
        Self::LeftCloud,
        Self::RightCloud,
        Self::Sun,
        Self::LeftArrow,
        Self::RightArrow,
        Self::UpArrow,
        Self::DownArrow,
        Self::Ground,
        Self::HardGround,
        Self::Trap,
        Self::GrassGround,
        Self::HardGrassGround,
        Self::GrassTrap,
        Self::MoleHill,
        Self::Ladder,
        Self::LadderShowingUpWhenFinished,
        Self::Rope,
        Self::LadderVanishingWhenFinished,
        Self::RedDoor,
        Self::YellowDoor,
        Self::GreenDoor,
        Self::AutoClosingRedDoor,
        Self::AutoClosingYellowDoor,
        Self::AutoClosingGreenDoor,
        Self::Water,
        Self::WaterSurface,
    ];

    /// Look up a named tile by packed identity.
    pub fn from_packed(v: u32) -> Option<Self> {
        match v {
            0x000001 => Some(Self::Air),
            0x000101 => Some(Self::Fence),
            0x000201 => Some(Self::Bush),
            0x000301 => Some(Self::LeftCloud),
            0x000401 => Some(Self::RightCloud),
            0x000501 => Some(Self::Sun),
            0x000601 => Some(Self::LeftArrow),
            0x000701 => Some(Self::RightArrow),
            0x000801 => Some(Self::UpArrow),
            0x000901 => Some(Self::DownArrow),
            0x000002 => Some(Self::Ground),
            0x000102 => Some(Self::HardGround),
            0x000202 => Some(Self::Trap),
            0x000D02 => Some(Self::GrassGround),
            0x000E02 => Some(Self::HardGrassGround),
            0x000F02 => Some(Self::GrassTrap),
            0x001A02 => Some(Self::MoleHill),
            0x000003 => Some(Self::Ladder),
            0x000103 => Some(Self::LadderShowingUpWhenFinished),
            0x000303 => Some(Self::Rope),
            0x000403 => Some(Self::LadderVanishingWhenFinished),
            0x000004 => Some(Self::RedDoor),
            0x000104 => Some(Self::YellowDoor),
            0x000204 => Some(Self::GreenDoor),
            0x000604 => Some(Self::AutoClosingRedDoor),
            0x000704 => Some(Self::AutoClosingYellowDoor),
            0x000804 => Some(Self::AutoClosingGreenDoor),
            0x000005 => Some(Self::Water),
            0x000105 => Some(Self::WaterSurface),
            _ => None,
        }
    }

    /// Decode a packed identity, keeping anything unrecognized as [`Tile::Unset`].
    pub fn from_packed_or_unset(v: u32) -> Self {
        Self::from_packed(v).unwrap_or(Self::Unset(v))
    }

    pub fn packed(self) -> u32 {
        match self {
            Self::Unset(raw) => raw,
            Self::Air => 0x000001,
            Self::Fence => 0x000101,
            Self::Bush => 0x000201,
            Self::LeftCloud => 0x000301,
            Self::RightCloud => 0x000401,
            Self::Sun => 0x000501,
            Self::LeftArrow => 0x000601,
            Self::RightArrow => 0x000701,
            Self::UpArrow => 0x000801,
            Self::DownArrow => 0x000901,
            Self::Ground => 0x000002,
            Self::HardGround => 0x000102,
            Self::Trap => 0x000202,
            Self::GrassGround => 0x000D02,
            Self::HardGrassGround => 0x000E02,
            Self::GrassTrap => 0x000F02,
            Self::MoleHill => 0x001A02,
            Self::Ladder => 0x000003,
            Self::LadderShowingUpWhenFinished => 0x000103,
            Self::Rope => 0x000303,
            Self::LadderVanishingWhenFinished => 0x000403,
            Self::RedDoor => 0x000004,
            Self::YellowDoor => 0x000104,
            Self::GreenDoor => 0x000204,
            Self::AutoClosingRedDoor => 0x000604,
            Self::AutoClosingYellowDoor => 0x000704,
            Self::AutoClosingGreenDoor => 0x000804,
            Self::Water => 0x000005,
            Self::WaterSurface => 0x000105,
        }
    }

    /// Category byte (low 8 bits of the packed identity).
    pub fn tag(self) -> u8 {
        (self.packed() & 0xFF) as u8
    }

    /// Variant within the category (upper 16 bits of the packed identity).
    pub fn variant(self) -> u16 {
        (self.packed() >> 8) as u16
    }

    pub fn is_unset(self) -> bool {
        matches!(self, Self::Unset(_))
    }

    /// Key color required to open this tile, if it is a door.
    pub fn door_color(self) -> Option<KeyColor> {
        match self {
            Self::RedDoor | Self::AutoClosingRedDoor => Some(KeyColor::Red),
            Self::YellowDoor | Self::AutoClosingYellowDoor => Some(KeyColor::Yellow),
            Self::GreenDoor | Self::AutoClosingGreenDoor => Some(KeyColor::Green),
            _ => None,
        }
    }
}

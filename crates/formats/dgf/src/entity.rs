use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Kind of a placed object.
///
/// Packed the same way as tiles: `tag | variant << 8`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EntityType {
    /// Player start.
    Daisy,
    Marmot,
    RightMovingWorm,
    LeftMovingWorm,
    UpMovingLift,
    DownMovingLift,
    LeftMovingLift,
    RightMovingLift,
    RedKey,
    YellowKey,
    GreenKey,
    Apple,
    Lemon,
    Cherry,
    Pineapple,
    Garlic,
    Mushroom,
    Spinach,
    Carrot,
    Sunflower,
    Tulip,
    YellowDaisy,
    Rose,
    /// Hint marker; carries a text payload.
    QuestionMark,
}

/// Which extra fields follow an entity's position on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PayloadKind {
    None,
    /// Four `i16` fields: left, top, right, bottom.
    Bounds,
    /// One DGF string.
    Hint,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum KeyColor {
    Red,
    Yellow,
    Green,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LiftDirection {
    Up,
    Down,
    Left,
    Right,
}

impl EntityType {
    pub const ALL: [EntityType; 24] = [
        Self::Daisy,
        Self::Marmot,
        Self::RightMovingWorm,
        Self::LeftMovingWorm,
        Self::UpMovingLift,
        Self::DownMovingLift,
        Self::LeftMovingLift,
        Self::RightMovingLift,
        Self::RedKey,
        Self::YellowKey,
        Self::GreenKey,
        Self::Apple,
        Self::Lemon,
        Self::Cherry,
        Self::Pineapple,
        Self::Garlic,
        Self::Mushroom,
        Self::Spinach,
        Self::Carrot,
        Self::Sunflower,
        Self::Tulip,
        Self::YellowDaisy,
        Self::Rose,
        Self::QuestionMark,
    ];

    pub fn from_packed(v: u32) -> Option<Self> {
        match v {
            0x000001 => Some(Self::Daisy),
            0x000002 => Some(Self::Marmot),
            0x000003 => Some(Self::RightMovingWorm),
            0x000103 => Some(Self::LeftMovingWorm),
            0x000004 => Some(Self::UpMovingLift),
            0x000104 => Some(Self::DownMovingLift),
            0x000204 => Some(Self::LeftMovingLift),
            0x000304 => Some(Self::RightMovingLift),
            0x000005 => Some(Self::RedKey),
            0x000105 => Some(Self::YellowKey),
            0x000205 => Some(Self::GreenKey),
            0x000006 => Some(Self::Apple),
            0x000506 => Some(Self::Lemon),
            0x000606 => Some(Self::Cherry),
            0x000706 => Some(Self::Pineapple),
            0x000007 => Some(Self::Garlic),
            0x000107 => Some(Self::Mushroom),
            0x000207 => Some(Self::Spinach),
            0x000307 => Some(Self::Carrot),
            0x000008 => Some(Self::Sunflower),
            0x000408 => Some(Self::Tulip),
            0x000508 => Some(Self::YellowDaisy),
            0x000608 => Some(Self::Rose),
            0x000009 => Some(Self::QuestionMark),
            _ => None,
        }
    }

    pub fn packed(self) -> u32 {
        match self {
            Self::Daisy => 0x000001,
            Self::Marmot => 0x000002,
            Self::RightMovingWorm => 0x000003,
            Self::LeftMovingWorm => 0x000103,
            Self::UpMovingLift => 0x000004,
            Self::DownMovingLift => 0x000104,
            Self::LeftMovingLift => 0x000204,
            Self::RightMovingLift => 0x000304,
            Self::RedKey => 0x000005,
            Self::YellowKey => 0x000105,
            Self::GreenKey => 0x000205,
            Self::Apple => 0x000006,
            Self::Lemon => 0x000506,
            Self::Cherry => 0x000606,
            Self::Pineapple => 0x000706,
            Self::Garlic => 0x000007,
            Self::Mushroom => 0x000107,
            Self::Spinach => 0x000207,
            Self::Carrot => 0x000307,
            Self::Sunflower => 0x000008,
            Self::Tulip => 0x000408,
            Self::YellowDaisy => 0x000508,
            Self::Rose => 0x000608,
            Self::QuestionMark => 0x000009,
        }
    }

    pub fn payload_kind(self) -> PayloadKind {
        match self {
            Self::Marmot
            | Self::RightMovingWorm
            | Self::LeftMovingWorm
            | Self::UpMovingLift
            | Self::DownMovingLift
            | Self::LeftMovingLift
            | Self::RightMovingLift => PayloadKind::Bounds,
            Self::QuestionMark => PayloadKind::Hint,
            Self::Daisy
            | Self::RedKey
            | Self::YellowKey
            | Self::GreenKey
            | Self::Apple
            | Self::Lemon
            | Self::Cherry
            | Self::Pineapple
            | Self::Garlic
            | Self::Mushroom
            | Self::Spinach
            | Self::Carrot
            | Self::Sunflower
            | Self::Tulip
            | Self::YellowDaisy
            | Self::Rose => PayloadKind::None,
        }
    }

    pub fn key(color: KeyColor) -> Self {
        match color {
            KeyColor::Red => Self::RedKey,
            KeyColor::Yellow => Self::YellowKey,
            KeyColor::Green => Self::GreenKey,
        }
    }

    pub fn key_color(self) -> Option<KeyColor> {
        match self {
            Self::RedKey => Some(KeyColor::Red),
            Self::YellowKey => Some(KeyColor::Yellow),
            Self::GreenKey => Some(KeyColor::Green),
            _ => None,
        }
    }

    pub fn lift(direction: LiftDirection) -> Self {
        match direction {
            LiftDirection::Up => Self::UpMovingLift,
            LiftDirection::Down => Self::DownMovingLift,
            LiftDirection::Left => Self::LeftMovingLift,
            LiftDirection::Right => Self::RightMovingLift,
        }
    }

    pub fn lift_direction(self) -> Option<LiftDirection> {
        match self {
            Self::UpMovingLift => Some(LiftDirection::Up),
            Self::DownMovingLift => Some(LiftDirection::Down),
            Self::LeftMovingLift => Some(LiftDirection::Left),
            Self::RightMovingLift => Some(LiftDirection::Right),
            _ => None,
        }
    }
}

impl TryFrom<u32> for EntityType {
    type Error = Error;

    fn try_from(packed: u32) -> Result<Self, Error> {
        Self::from_packed(packed).ok_or(Error::UnknownEntityVariant { packed })
    }
}

/// Grid coordinates of an entity.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub x: u16,
    pub y: u16,
}

impl Position {
    pub fn new(x: u16, y: u16) -> Self {
        Self { x, y }
    }
}

/// Movement range of a moving entity, in tiles relative to its spawn point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Bounds {
    pub top: i16,
    pub bottom: i16,
    pub left: i16,
    pub right: i16,
}

impl Bounds {
    /// No movement constraint.
    pub const INFINITE: Self = Self {
        top: -1,
        bottom: -1,
        left: -1,
        right: -1,
    };

    pub fn new(top: i16, bottom: i16, left: i16, right: i16) -> Self {
        Self {
            top,
            bottom,
            left,
            right,
        }
    }

    pub fn is_infinite(&self) -> bool {
        *self == Self::INFINITE
    }
}

impl Default for Bounds {
    fn default() -> Self {
        Self::INFINITE
    }
}

/// Per-kind data following an entity's position.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Payload {
    None,
    Bounds(Bounds),
    Hint(String),
}

impl Payload {
    /// The payload a fresh entity of `kind` starts with.
    pub fn default_for(kind: EntityType) -> Self {
        match kind.payload_kind() {
            PayloadKind::None => Self::None,
            PayloadKind::Bounds => Self::Bounds(Bounds::INFINITE),
            PayloadKind::Hint => Self::Hint(String::new()),
        }
    }
}

/// A placed object in a garden.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entity {
    kind: EntityType,
    pub position: Position,
    payload: Payload,
}

impl Entity {
    pub fn new(kind: EntityType, position: Position) -> Self {
        Self {
            kind,
            position,
            payload: Payload::default_for(kind),
        }
    }

    /// Set movement bounds. Ignored for kinds that do not move.
    pub fn with_bounds(mut self, bounds: Bounds) -> Self {
        if self.kind.payload_kind() == PayloadKind::Bounds {
            self.payload = Payload::Bounds(bounds);
        }
        self
    }

    /// Set the hint text. Ignored for kinds other than [`EntityType::QuestionMark`].
    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        if self.kind.payload_kind() == PayloadKind::Hint {
            self.payload = Payload::Hint(hint.into());
        }
        self
    }

    pub fn kind(&self) -> EntityType {
        self.kind
    }

    pub fn payload(&self) -> &Payload {
        &self.payload
    }

    /// Movement bounds, or [`Bounds::INFINITE`] for kinds without them.
    pub fn bounds(&self) -> Bounds {
        match &self.payload {
            Payload::Bounds(b) => *b,
            _ => Bounds::INFINITE,
        }
    }

    /// Hint text, or `""` for kinds without one.
    pub fn hint(&self) -> &str {
        match &self.payload {
            Payload::Hint(h) => h,
            _ => "",
        }
    }
}

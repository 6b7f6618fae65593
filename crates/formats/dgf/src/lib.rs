//! Reader/writer for Daisy's Garden 2 level packs (`.dgf`).
//!
//! Two layers:
//! - **Wire** (`cursor`, `cipher`, `reader`, `writer`): the little-endian
//!   container, DGF strings and the password obfuscation
//! - **Model** (`pack`, `garden`, `entity`, `tile`): plain data types with
//!   list editing and the garden resize transform
//!
//! ```no_run
//! let pack = dgf::LevelPack::open("levels.dgf")?;
//! for garden in pack.gardens() {
//!     println!("{} ({})", garden.name, garden.size());
//! }
//! # Ok::<(), dgf::Error>(())
//! ```

pub mod cipher;
pub mod cursor;
pub mod entity;
pub mod error;
pub mod format;
pub mod garden;
pub mod pack;
pub mod reader;
pub mod tile;
pub mod version;
pub mod writer;

pub use entity::{Bounds, Entity, EntityType, KeyColor, LiftDirection, Payload, Position};
pub use error::{Error, Result};
pub use garden::{Garden, ResizeAlignment, Size};
pub use pack::{CountMarker, FormatHeader, LevelPack};
pub use tile::Tile;
pub use version::ProgramVersion;

/// Parse a complete DGF file.
pub fn decode(data: &[u8]) -> Result<LevelPack> {
    reader::decode(data)
}

/// Serialize a level pack to DGF bytes.
pub fn encode(pack: &LevelPack) -> Vec<u8> {
    writer::encode(pack)
}

/// Serialize a level pack, failing instead of truncating over-long content.
pub fn try_encode(pack: &LevelPack) -> Result<Vec<u8>> {
    writer::try_encode(pack)
}

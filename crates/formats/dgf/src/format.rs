//! Fixed values of the DGF container.

/// First four bytes of every file (`01 67 07 04`).
pub const MAGIC: u32 = 0x0407_6701;

/// Game name string following the magic.
pub const GAME_NAME: &str = "FB: Daisy's Garden 2";

/// `u16` following the game name.
pub const FORMAT_MARKER_WORD: u16 = 0x0007;

/// `u8` following [`FORMAT_MARKER_WORD`].
pub const FORMAT_MARKER_BYTE: u8 = 0x00;

/// Count marker byte of the short form.
pub const COUNT_MARKER_SHORT: u8 = 0x00;

/// First byte of the legacy count marker.
pub const COUNT_MARKER_LEGACY: u8 = 0xFF;

/// `u32` following [`COUNT_MARKER_LEGACY`].
pub const COUNT_MARKER_LEGACY_WORD: u32 = 0x0900_01FF;

/// Final byte of the legacy count marker.
pub const COUNT_MARKER_LEGACY_END: u8 = 0x00;

/// Class name written after the count marker.
pub const CLASS_NAME: &[u8; 9] = b"CDaisygPg";

/// Separator preceding every garden except the first.
pub const GARDEN_SEPARATOR: u32 = 0x0002_8001;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("unexpected end of data at offset {offset:#x} (need {need} bytes, have {have})")]
    TruncatedInput {
        offset: usize,
        need: usize,
        have: usize,
    },

    #[error("invalid magic: expected {expected:#010x}, found {found:#010x}")]
    InvalidMagic { expected: u32, found: u32 },

    #[error("game name mismatch: expected {expected:?}, found {found:?}")]
    GameNameMismatch {
        expected: &'static str,
        found: String,
    },

    #[error("format marker after game name is {found_word:#06x}/{found_byte:#04x}, expected 0x0007/0x00")]
    FormatMarkerMismatch { found_word: u16, found_byte: u8 },

    #[error("unknown marker after garden count at offset {offset:#x}")]
    UnknownMarker { offset: usize },

    #[error("class name mismatch: expected {expected:?}, found {found:?}")]
    ClassNameMismatch {
        expected: &'static str,
        found: String,
    },

    #[error("unsupported program version {version}")]
    UnsupportedVersion { version: u16 },

    #[error("missing separator before garden {garden}: found {found:#010x}")]
    MissingSeparator { garden: usize, found: u32 },

    #[error("garden {garden}: declared tile count {declared} does not match {width}x{height}")]
    TileCountMismatch {
        garden: usize,
        width: u16,
        height: u16,
        declared: u32,
    },

    #[error("{len} unexpected bytes after the last garden at offset {offset:#x}")]
    TrailingData { offset: usize, len: usize },

    #[error("{field} is {len} bytes, longer than the 65535 a DGF string can hold")]
    StringTooLong { field: &'static str, len: usize },

    #[error("{count} gardens exceed the 65535 a pack can hold")]
    TooManyGardens { count: usize },

    #[error("unknown entity variant {packed:#08x}")]
    UnknownEntityVariant { packed: u32 },

    #[error("malformed obfuscated string {input:?}: {reason}")]
    MalformedHex { input: String, reason: &'static str },

    #[error("invalid number {input:?}")]
    InvalidNumber {
        input: String,
        source: std::num::ParseIntError,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

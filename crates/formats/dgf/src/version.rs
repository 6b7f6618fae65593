use serde::{Deserialize, Serialize};

/// Editor program version stored after the class name.
///
/// Known versions:
/// - 1: original editor release
/// - 2: current editor; the version new files are written with
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ProgramVersion(pub u16);

impl ProgramVersion {
    pub const V1: Self = Self(1);
    pub const V2: Self = Self(2);

    /// Version written for packs built in memory.
    pub const CURRENT: Self = Self::V2;

    pub fn is_supported(self) -> bool {
        self == Self::V1 || self == Self::V2
    }
}

impl Default for ProgramVersion {
    fn default() -> Self {
        Self::CURRENT
    }
}

impl std::fmt::Display for ProgramVersion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

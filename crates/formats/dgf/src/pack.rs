use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::garden::Garden;
use crate::version::ProgramVersion;
use crate::{reader, writer};

/// Bytes following the garden count.
///
/// Both forms are accepted on read. Packs built in memory use the short form.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CountMarker {
    /// `00`
    #[default]
    Short,
    /// `FF FF 01 00 09 00`, written by older editors.
    Legacy,
}

/// Wire-level choices that carry no level data but must survive a round trip.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FormatHeader {
    pub count_marker: CountMarker,
    pub program_version: ProgramVersion,
}

/// A complete level pack: metadata, passwords and gardens.
///
/// Passwords are held as plaintext; they are obfuscated only on the wire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LevelPack {
    pub header: FormatHeader,
    pub edit_password: String,
    pub play_password: String,
    /// Gardens up to and including this number require the play password.
    pub apply_play_password_until: u16,
    pub author_name: String,
    pub comments: String,
    /// MIDI file of the first garden, as shown on the title screen.
    pub garden_one_music_path: String,
    pub(crate) gardens: Vec<Garden>,
}

impl Default for LevelPack {
    fn default() -> Self {
        Self {
            header: FormatHeader::default(),
            edit_password: String::new(),
            play_password: String::new(),
            apply_play_password_until: 1,
            author_name: String::new(),
            comments: String::new(),
            garden_one_music_path: String::new(),
            gardens: Vec::new(),
        }
    }
}

impl LevelPack {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a complete DGF file.
    pub fn decode(data: &[u8]) -> Result<Self> {
        reader::decode(data)
    }

    /// Read and parse a complete DGF stream.
    pub fn read_from(mut source: impl std::io::Read) -> Result<Self> {
        let mut data = Vec::new();
        source.read_to_end(&mut data)?;
        Self::decode(&data)
    }

    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let data = std::fs::read(path.as_ref())?;
        Self::decode(&data)
    }

    /// Serialize to DGF bytes.
    pub fn encode(&self) -> Vec<u8> {
        writer::encode(self)
    }

    /// Serialize to DGF bytes, failing on content the format cannot hold.
    pub fn try_encode(&self) -> Result<Vec<u8>> {
        writer::try_encode(self)
    }

    /// Write to `sink`. Nothing is written if the pack exceeds the format's
    /// limits.
    pub fn write_to(&self, mut sink: impl std::io::Write) -> Result<()> {
        sink.write_all(&self.try_encode()?)?;
        sink.flush()?;
        Ok(())
    }

    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let data = self.try_encode()?;
        std::fs::write(path.as_ref(), data)?;
        Ok(())
    }

    pub fn gardens(&self) -> &[Garden] {
        &self.gardens
    }

    pub fn gardens_mut(&mut self) -> &mut [Garden] {
        &mut self.gardens
    }

    pub fn garden(&self, index: usize) -> Option<&Garden> {
        self.gardens.get(index)
    }

    pub fn garden_mut(&mut self, index: usize) -> Option<&mut Garden> {
        self.gardens.get_mut(index)
    }

    pub fn add_garden(&mut self, garden: Garden) {
        self.gardens.push(garden);
    }

    /// Insert at `index`, shifting later gardens. Returns `false` if `index`
    /// is past the end.
    pub fn insert_garden(&mut self, index: usize, garden: Garden) -> bool {
        if index > self.gardens.len() {
            return false;
        }
        self.gardens.insert(index, garden);
        true
    }

    pub fn remove_garden(&mut self, index: usize) -> Option<Garden> {
        (index < self.gardens.len()).then(|| self.gardens.remove(index))
    }

    pub fn clear_gardens(&mut self) {
        self.gardens.clear();
    }
}

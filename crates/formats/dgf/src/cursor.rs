use crate::error::{Error, Result};

/// Length byte announcing that a `u16` length follows.
pub const LONG_STRING_ESCAPE: u8 = 0xFF;

/// Longest string the `u16` length form can describe.
pub const MAX_STRING_LEN: usize = u16::MAX as usize;

/// Read cursor over a byte slice. All reads are little-endian.
#[derive(Clone)]
pub struct Cursor<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> Cursor<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        Self { data, pos: 0 }
    }

    /// Current byte position.
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Whether we've reached the end.
    pub fn is_empty(&self) -> bool {
        self.pos >= self.data.len()
    }

    /// Remaining bytes from current position.
    pub fn remaining(&self) -> usize {
        self.data.len().saturating_sub(self.pos)
    }

    /// Read a slice of `n` bytes without copying.
    pub fn read_bytes(&mut self, n: usize) -> Result<&'a [u8]> {
        self.ensure(n)?;
        let slice = &self.data[self.pos..self.pos + n];
        self.pos += n;
        Ok(slice)
    }

    pub fn read_u8(&mut self) -> Result<u8> {
        self.ensure(1)?;
        let v = self.data[self.pos];
        self.pos += 1;
        Ok(v)
    }

    pub fn read_i16(&mut self) -> Result<i16> {
        let bytes = self.read_bytes(2)?;
        Ok(i16::from_le_bytes([bytes[0], bytes[1]]))
    }

    pub fn read_u16(&mut self) -> Result<u16> {
        let bytes = self.read_bytes(2)?;
        Ok(u16::from_le_bytes([bytes[0], bytes[1]]))
    }

    pub fn read_u32(&mut self) -> Result<u32> {
        let bytes = self.read_bytes(4)?;
        Ok(u32::from_le_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]))
    }

    /// Read a packed identity: `u8` tag, then `u16` variant.
    ///
    /// Returns `tag | variant << 8`.
    pub fn read_packed_id(&mut self) -> Result<u32> {
        let tag = self.read_u8()?;
        let variant = self.read_u16()?;
        Ok((tag as u32) | ((variant as u32) << 8))
    }

    /// Read a DGF string: a `u8` length (or `0xFF` + `u16` length) followed by
    /// single-byte characters.
    pub fn read_dgf_string(&mut self) -> Result<String> {
        let mut len = self.read_u8()? as usize;
        if len == LONG_STRING_ESCAPE as usize {
            len = self.read_u16()? as usize;
        }
        let bytes = self.read_bytes(len)?;
        Ok(bytes.iter().map(|&b| b as char).collect())
    }

    fn ensure(&self, n: usize) -> Result<()> {
        if self.pos + n > self.data.len() {
            return Err(Error::TruncatedInput {
                offset: self.pos,
                need: n,
                have: self.remaining(),
            });
        }
        Ok(())
    }
}

/// Writer that builds a byte buffer. All writes are little-endian.
pub struct Writer {
    buf: Vec<u8>,
}

impl Writer {
    pub fn new() -> Self {
        Self { buf: Vec::new() }
    }

    pub fn with_capacity(cap: usize) -> Self {
        Self {
            buf: Vec::with_capacity(cap),
        }
    }

    pub fn position(&self) -> usize {
        self.buf.len()
    }

    pub fn write_bytes(&mut self, bytes: &[u8]) {
        self.buf.extend_from_slice(bytes);
    }

    pub fn write_u8(&mut self, v: u8) {
        self.buf.push(v);
    }

    pub fn write_i16(&mut self, v: i16) {
        self.buf.extend_from_slice(&v.to_le_bytes());
    }

    pub fn write_u16(&mut self, v: u16) {
        self.buf.extend_from_slice(&v.to_le_bytes());
    }

    pub fn write_u32(&mut self, v: u32) {
        self.buf.extend_from_slice(&v.to_le_bytes());
    }

    /// Write a packed identity as `u8` tag + `u16` variant.
    pub fn write_packed_id(&mut self, packed: u32) {
        self.write_u8((packed & 0xFF) as u8);
        self.write_u16(((packed >> 8) & 0xFFFF) as u16);
    }

    /// Write a DGF string. Lengths of 255 and above use the `0xFF` + `u16` form.
    ///
    /// Characters above U+00FF are written as `?`.
    pub fn write_dgf_string(&mut self, s: &str) {
        let mut bytes: Vec<u8> = s
            .chars()
            .map(|c| u8::try_from(u32::from(c)).unwrap_or(b'?'))
            .collect();
        if bytes.len() > MAX_STRING_LEN {
            tracing::warn!(
                len = bytes.len(),
                max = MAX_STRING_LEN,
                "string too long for DGF, truncating"
            );
            bytes.truncate(MAX_STRING_LEN);
        }
        if bytes.len() < LONG_STRING_ESCAPE as usize {
            self.write_u8(bytes.len() as u8);
        } else {
            self.write_u8(LONG_STRING_ESCAPE);
            self.write_u16(bytes.len() as u16);
        }
        self.buf.extend_from_slice(&bytes);
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.buf
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.buf
    }
}

impl Default for Writer {
    fn default() -> Self {
        Self::new()
    }
}

//! Hand-assembled DGF fixtures.
//!
//! Bytes are laid out here directly rather than through `dgf::cursor::Writer`
//! so the reader and writer are both checked against an independent source.

#![allow(dead_code)]

pub const MAGIC: u32 = 0x0407_6701;
pub const SEPARATOR: u32 = 0x0002_8001;
pub const LEGACY_MARKER: &[u8] = &[0xFF, 0xFF, 0x01, 0x00, 0x09, 0x00];
pub const SHORT_MARKER: &[u8] = &[0x00];

/// Little-endian byte sink.
#[derive(Default)]
pub struct Bytes(pub Vec<u8>);

impl Bytes {
    pub fn u8(&mut self, v: u8) -> &mut Self {
        self.0.push(v);
        self
    }

    pub fn u16(&mut self, v: u16) -> &mut Self {
        self.0.extend_from_slice(&v.to_le_bytes());
        self
    }

    pub fn i16(&mut self, v: i16) -> &mut Self {
        self.0.extend_from_slice(&v.to_le_bytes());
        self
    }

    pub fn u32(&mut self, v: u32) -> &mut Self {
        self.0.extend_from_slice(&v.to_le_bytes());
        self
    }

    pub fn raw(&mut self, bytes: &[u8]) -> &mut Self {
        self.0.extend_from_slice(bytes);
        self
    }

    pub fn id(&mut self, packed: u32) -> &mut Self {
        self.u8((packed & 0xFF) as u8).u16((packed >> 8) as u16)
    }

    pub fn string(&mut self, s: &str) -> &mut Self {
        if s.len() < 255 {
            self.u8(s.len() as u8);
        } else {
            self.u8(0xFF).u16(s.len() as u16);
        }
        self.raw(s.as_bytes())
    }
}

/// One raw entity record.
pub fn plain_entity(packed: u32, x: u16, y: u16) -> Vec<u8> {
    let mut b = Bytes::default();
    b.id(packed).u16(x).u16(y);
    b.0
}

/// Entity record with bounds in wire order: left, top, right, bottom.
pub fn bounded_entity(packed: u32, x: u16, y: u16, ltrb: [i16; 4]) -> Vec<u8> {
    let mut b = Bytes::default();
    b.id(packed).u16(x).u16(y);
    for v in ltrb {
        b.i16(v);
    }
    b.0
}

pub fn hint_entity(x: u16, y: u16, text: &str) -> Vec<u8> {
    let mut b = Bytes::default();
    b.id(0x000009).u16(x).u16(y).string(text);
    b.0
}

/// An identity outside the known set; the reader consumes only these 3 bytes.
pub fn unknown_entity(packed: u32) -> Vec<u8> {
    let mut b = Bytes::default();
    b.id(packed);
    b.0
}

pub struct FixtureGarden {
    pub separator: u32,
    pub name: String,
    pub music: String,
    pub width: u16,
    pub height: u16,
    pub time: u16,
    /// Overrides the tile count field; defaults to `width * height`.
    pub declared_tiles: Option<u32>,
    pub tiles: Vec<u32>,
    pub entities: Vec<Vec<u8>>,
}

impl FixtureGarden {
    pub fn new(name: &str, music: &str, width: u16, height: u16, time: u16) -> Self {
        Self {
            separator: SEPARATOR,
            name: name.to_string(),
            music: music.to_string(),
            width,
            height,
            time,
            declared_tiles: None,
            tiles: patterned_tiles(width, height),
            entities: Vec::new(),
        }
    }

    fn write(&self, b: &mut Bytes) {
        b.string(&self.name).string(&self.music);
        b.u16(self.width).u16(self.height).u16(self.time);
        b.u32(
            self.declared_tiles
                .unwrap_or(self.width as u32 * self.height as u32),
        );
        for &t in &self.tiles {
            b.id(t);
        }
        b.u32(self.entities.len() as u32);
        for e in &self.entities {
            b.raw(e);
        }
    }
}

/// Air with a ground floor, a ladder column and some decoration.
pub fn patterned_tiles(width: u16, height: u16) -> Vec<u32> {
    let mut tiles = Vec::with_capacity(width as usize * height as usize);
    for y in 0..height {
        for x in 0..width {
            let t = if y + 1 == height {
                0x000102 // HardGround
            } else if y + 2 == height {
                0x000D02 // GrassGround
            } else if x == 3 {
                0x000003 // Ladder
            } else if (x + y) % 11 == 0 {
                0x000201 // Bush
            } else if y == 1 && x % 5 == 0 {
                0x000301 // LeftCloud
            } else {
                0x000001 // Air
            };
            tiles.push(t);
        }
    }
    tiles
}

pub struct Fixture {
    pub magic: u32,
    pub game_name: String,
    pub format_marker: (u16, u8),
    pub edit_password_hex: String,
    pub play_password_hex: String,
    pub apply_until_hex: String,
    pub author: String,
    pub comments: String,
    pub music: String,
    /// Overrides the garden count field; defaults to `gardens.len()`.
    pub garden_count: Option<u16>,
    pub count_marker: Vec<u8>,
    pub class_name: Vec<u8>,
    pub version: u16,
    pub gardens: Vec<FixtureGarden>,
}

impl Fixture {
    pub fn empty() -> Self {
        Self {
            magic: MAGIC,
            game_name: "FB: Daisy's Garden 2".to_string(),
            format_marker: (0x0007, 0x00),
            edit_password_hex: String::new(),
            play_password_hex: String::new(),
            apply_until_hex: "FA".to_string(),
            author: String::new(),
            comments: String::new(),
            music: String::new(),
            garden_count: None,
            count_marker: SHORT_MARKER.to_vec(),
            class_name: b"CDaisygPg".to_vec(),
            version: 2,
            gardens: Vec::new(),
        }
    }

    /// The three-garden pack used by the end-to-end tests.
    pub fn sample() -> Self {
        let mut first = FixtureGarden::new(
            "Round trip around flying ground",
            "DAISYG_5.MID",
            17,
            12,
            85,
        );
        first.entities = vec![
            plain_entity(0x000001, 0, 10),
            plain_entity(0x000006, 5, 9),
            plain_entity(0x000506, 6, 9),
            bounded_entity(0x000004, 8, 7, [0, 4, 0, 0]),
            bounded_entity(0x000204, 12, 3, [3, 0, 0, 0]),
            hint_entity(2, 10, "Climb the ladder to reach the clouds."),
            plain_entity(0x000608, 16, 1),
        ];

        let mut second = FixtureGarden::new("Marmot garden", "DAISYG_2.MID", 17, 12, 120);
        second.entities = vec![
            plain_entity(0x000001, 0, 10),
            bounded_entity(0x000002, 9, 10, [4, -1, 4, -1]),
            bounded_entity(0x000003, 4, 10, [-1, -1, 3, -1]),
            bounded_entity(0x000103, 14, 10, [2, -1, -1, -1]),
            plain_entity(0x000005, 16, 10),
            plain_entity(0x000307, 11, 5),
        ];
        // A red door guarding the key.
        second.tiles[10 * 17 + 15] = 0x000004;

        let mut third = FixtureGarden::new("Underground garden", "DAISYG_6.MID", 40, 40, 225);
        third.entities = vec![
            bounded_entity(0x000104, 20, 5, [0, 0, 0, 12]),
            plain_entity(0x000001, 1, 4),
            bounded_entity(0x000304, 2, 30, [0, 0, 15, 0]),
            plain_entity(0x000105, 38, 38),
            plain_entity(0x000205, 30, 20),
            plain_entity(0x000107, 7, 7),
            hint_entity(1, 5, ""),
        ];
        for y in 20..30 {
            third.tiles[y * 40 + 25] = 0x000005; // Water
        }
        third.tiles[19 * 40 + 25] = 0x000105; // WaterSurface

        Self {
            edit_password_hex: "8EEA83F7".to_string(), // "Edit"
            play_password_hex: "9BF796EF".to_string(), // "Play"
            author: "Ethem Kurt".to_string(),
            comments: "https://github.com/BigETI/DGFSharp".to_string(),
            music: "DAISYG_5.MID".to_string(),
            count_marker: LEGACY_MARKER.to_vec(),
            gardens: vec![first, second, third],
            ..Self::empty()
        }
    }

    pub fn build(&self) -> Vec<u8> {
        let mut b = Bytes::default();
        b.u32(self.magic).string(&self.game_name);
        b.u16(self.format_marker.0).u8(self.format_marker.1);
        b.string(&self.edit_password_hex)
            .string(&self.play_password_hex)
            .string(&self.apply_until_hex);
        b.string(&self.author)
            .string(&self.comments)
            .string(&self.music);
        b.u16(self.garden_count.unwrap_or(self.gardens.len() as u16));
        b.raw(&self.count_marker).raw(&self.class_name).u16(self.version);
        for (i, g) in self.gardens.iter().enumerate() {
            if i > 0 {
                b.u32(g.separator);
            }
            g.write(&mut b);
        }
        b.0
    }
}

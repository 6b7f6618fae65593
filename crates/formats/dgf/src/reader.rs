use crate::cipher;
use crate::cursor::Cursor;
use crate::entity::{Bounds, Entity, EntityType, PayloadKind, Position};
use crate::error::{Error, Result};
use crate::format;
use crate::garden::{Garden, Size};
use crate::pack::{CountMarker, FormatHeader, LevelPack};
use crate::tile::Tile;
use crate::version::ProgramVersion;

/// Bytes per packed identity on the wire.
const PACKED_ID_LEN: usize = 3;

/// Parse a complete DGF file.
///
/// Decoding is all-or-nothing: any structural mismatch, including bytes left
/// over after the last garden, aborts with an error and nothing is returned.
/// Tiles with unknown identities become [`Tile::Unset`] carrying the raw
/// value; entities with unknown identities are skipped.
pub fn decode(data: &[u8]) -> Result<LevelPack> {
    let mut c = Cursor::new(data);

    let magic = c.read_u32()?;
    if magic != format::MAGIC {
        return Err(Error::InvalidMagic {
            expected: format::MAGIC,
            found: magic,
        });
    }
    let game_name = c.read_dgf_string()?;
    if game_name != format::GAME_NAME {
        return Err(Error::GameNameMismatch {
            expected: format::GAME_NAME,
            found: game_name,
        });
    }
    let marker_word = c.read_u16()?;
    let marker_byte = c.read_u8()?;
    if marker_word != format::FORMAT_MARKER_WORD || marker_byte != format::FORMAT_MARKER_BYTE {
        return Err(Error::FormatMarkerMismatch {
            found_word: marker_word,
            found_byte: marker_byte,
        });
    }

    let edit_password = cipher::decode(&c.read_dgf_string()?)?;
    let play_password = cipher::decode(&c.read_dgf_string()?)?;
    let apply_play_password_until = cipher::decode_number(&c.read_dgf_string()?)?;

    let author_name = c.read_dgf_string()?;
    let comments = c.read_dgf_string()?;
    let garden_one_music_path = c.read_dgf_string()?;

    let garden_count = c.read_u16()? as usize;
    let count_marker = read_count_marker(&mut c)?;

    let class_name = c.read_bytes(format::CLASS_NAME.len())?;
    if class_name != format::CLASS_NAME {
        return Err(Error::ClassNameMismatch {
            expected: "CDaisygPg",
            found: String::from_utf8_lossy(class_name).into_owned(),
        });
    }
    let program_version = ProgramVersion(c.read_u16()?);
    if !program_version.is_supported() {
        return Err(Error::UnsupportedVersion {
            version: program_version.0,
        });
    }

    let mut gardens = Vec::with_capacity(garden_count);
    for index in 0..garden_count {
        if index > 0 {
            let separator = c.read_u32()?;
            if separator != format::GARDEN_SEPARATOR {
                return Err(Error::MissingSeparator {
                    garden: index,
                    found: separator,
                });
            }
        }
        gardens.push(read_garden(&mut c, index)?);
    }

    if !c.is_empty() {
        return Err(Error::TrailingData {
            offset: c.position(),
            len: c.remaining(),
        });
    }

    Ok(LevelPack {
        header: FormatHeader {
            count_marker,
            program_version,
        },
        edit_password,
        play_password,
        apply_play_password_until,
        author_name,
        comments,
        garden_one_music_path,
        gardens,
    })
}

fn read_count_marker(c: &mut Cursor) -> Result<CountMarker> {
    let offset = c.position();
    match c.read_u8()? {
        format::COUNT_MARKER_SHORT => Ok(CountMarker::Short),
        format::COUNT_MARKER_LEGACY => {
            if c.read_u32()? == format::COUNT_MARKER_LEGACY_WORD
                && c.read_u8()? == format::COUNT_MARKER_LEGACY_END
            {
                Ok(CountMarker::Legacy)
            } else {
                Err(Error::UnknownMarker { offset })
            }
        }
        _ => Err(Error::UnknownMarker { offset }),
    }
}

fn read_garden(c: &mut Cursor, index: usize) -> Result<Garden> {
    let name = c.read_dgf_string()?;
    let music_path = c.read_dgf_string()?;
    let width = c.read_u16()?;
    let height = c.read_u16()?;
    let time = c.read_u16()?;
    let size = Size::new(width, height);

    let declared = c.read_u32()?;
    if declared as usize != size.area() {
        return Err(Error::TileCountMismatch {
            garden: index,
            width,
            height,
            declared,
        });
    }

    let mut tiles = Vec::with_capacity(size.area().min(c.remaining() / PACKED_ID_LEN));
    let mut unset = 0usize;
    for _ in 0..size.area() {
        let tile = Tile::from_packed_or_unset(c.read_packed_id()?);
        if tile.is_unset() {
            unset += 1;
        }
        tiles.push(tile);
    }

    let entity_count = c.read_u32()? as usize;
    let mut entities = Vec::with_capacity(entity_count.min(c.remaining() / PACKED_ID_LEN));
    for _ in 0..entity_count {
        if let Some(entity) = read_entity(c)? {
            entities.push(entity);
        }
    }

    tracing::debug!(
        garden = index,
        %name,
        %size,
        time,
        entities = entities.len(),
        dropped = entity_count - entities.len(),
        unset,
        "decoded garden"
    );
    Ok(Garden::from_parts(name, music_path, time, size, tiles, entities))
}

/// Read one entity record. Unknown identities carry no further fields and
/// yield `None`.
fn read_entity(c: &mut Cursor) -> Result<Option<Entity>> {
    let offset = c.position();
    let packed = c.read_packed_id()?;
    let Some(kind) = EntityType::from_packed(packed) else {
        tracing::debug!(offset, packed, "skipping unknown entity");
        return Ok(None);
    };

    let x = c.read_u16()?;
    let y = c.read_u16()?;
    let entity = Entity::new(kind, Position::new(x, y));

    let entity = match kind.payload_kind() {
        PayloadKind::None => entity,
        PayloadKind::Bounds => {
            let left = c.read_i16()?;
            let top = c.read_i16()?;
            let right = c.read_i16()?;
            let bottom = c.read_i16()?;
            entity.with_bounds(Bounds::new(top, bottom, left, right))
        }
        PayloadKind::Hint => entity.with_hint(c.read_dgf_string()?),
    };
    Ok(Some(entity))
}

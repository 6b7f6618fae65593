use crate::cipher;
use crate::cursor::{Writer, MAX_STRING_LEN};
use crate::entity::{Entity, PayloadKind};
use crate::error::{Error, Result};
use crate::format;
use crate::garden::Garden;
use crate::pack::{CountMarker, LevelPack};

/// Serialize a level pack, rejecting content the format cannot hold.
pub fn try_encode(pack: &LevelPack) -> Result<Vec<u8>> {
    validate(pack)?;
    Ok(encode(pack))
}

/// Check every length-limited field against the format's limits.
pub fn validate(pack: &LevelPack) -> Result<()> {
    let count = pack.gardens().len();
    if count > u16::MAX as usize {
        return Err(Error::TooManyGardens { count });
    }
    // Obfuscated passwords take two hex digits per character.
    check_len("edit password", pack.edit_password.chars().count() * 2)?;
    check_len("play password", pack.play_password.chars().count() * 2)?;
    check_len("author name", pack.author_name.chars().count())?;
    check_len("comments", pack.comments.chars().count())?;
    check_len("garden one music path", pack.garden_one_music_path.chars().count())?;
    for garden in pack.gardens() {
        check_len("garden name", garden.name.chars().count())?;
        check_len("garden music path", garden.music_path.chars().count())?;
        for entity in garden.entities() {
            check_len("hint", entity.hint().chars().count())?;
        }
    }
    Ok(())
}

fn check_len(field: &'static str, len: usize) -> Result<()> {
    if len > MAX_STRING_LEN {
        return Err(Error::StringTooLong { field, len });
    }
    Ok(())
}

/// Serialize a level pack. Mirrors [`crate::reader::decode`] field for field.
///
/// The count marker and program version come from `pack.header`, so a
/// decoded pack encodes back to its original bytes. Content past the
/// format's limits is truncated with a warning; use [`try_encode`] to reject
/// it instead.
pub fn encode(pack: &LevelPack) -> Vec<u8> {
    let mut w = Writer::with_capacity(estimate_len(pack));

    w.write_u32(format::MAGIC);
    w.write_dgf_string(format::GAME_NAME);
    w.write_u16(format::FORMAT_MARKER_WORD);
    w.write_u8(format::FORMAT_MARKER_BYTE);

    w.write_dgf_string(&cipher::encode(&pack.edit_password));
    w.write_dgf_string(&cipher::encode(&pack.play_password));
    w.write_dgf_string(&cipher::encode_number(pack.apply_play_password_until));

    w.write_dgf_string(&pack.author_name);
    w.write_dgf_string(&pack.comments);
    w.write_dgf_string(&pack.garden_one_music_path);

    let gardens = pack.gardens();
    if gardens.len() > u16::MAX as usize {
        tracing::warn!(
            count = gardens.len(),
            "too many gardens for DGF, writing the first 65535"
        );
    }
    let gardens = &gardens[..gardens.len().min(u16::MAX as usize)];
    w.write_u16(gardens.len() as u16);
    match pack.header.count_marker {
        CountMarker::Short => w.write_u8(format::COUNT_MARKER_SHORT),
        CountMarker::Legacy => {
            w.write_u8(format::COUNT_MARKER_LEGACY);
            w.write_u32(format::COUNT_MARKER_LEGACY_WORD);
            w.write_u8(format::COUNT_MARKER_LEGACY_END);
        }
    }
    w.write_bytes(format::CLASS_NAME);
    w.write_u16(pack.header.program_version.0);

    for (index, garden) in gardens.iter().enumerate() {
        if index > 0 {
            w.write_u32(format::GARDEN_SEPARATOR);
        }
        write_garden(&mut w, garden);
    }

    w.into_bytes()
}

fn write_garden(w: &mut Writer, garden: &Garden) {
    let size = garden.size();
    w.write_dgf_string(&garden.name);
    w.write_dgf_string(&garden.music_path);
    w.write_u16(size.width);
    w.write_u16(size.height);
    w.write_u16(garden.time);
    w.write_u32(size.area() as u32);
    for tile in garden.tiles() {
        w.write_packed_id(tile.packed());
    }
    w.write_u32(garden.entities().len() as u32);
    for entity in garden.entities() {
        write_entity(w, entity);
    }
}

fn write_entity(w: &mut Writer, entity: &Entity) {
    let kind = entity.kind();
    w.write_packed_id(kind.packed());
    w.write_u16(entity.position.x);
    w.write_u16(entity.position.y);
    match kind.payload_kind() {
        PayloadKind::None => {}
        PayloadKind::Bounds => {
            let bounds = entity.bounds();
            w.write_i16(bounds.left);
            w.write_i16(bounds.top);
            w.write_i16(bounds.right);
            w.write_i16(bounds.bottom);
        }
        PayloadKind::Hint => w.write_dgf_string(entity.hint()),
    }
}

/// Rough output size, to avoid regrowing the buffer for large gardens.
fn estimate_len(pack: &LevelPack) -> usize {
    pack.gardens()
        .iter()
        .map(|g| 64 + g.tiles().len() * 3 + g.entities().len() * 16)
        .sum::<usize>()
        + 256
}

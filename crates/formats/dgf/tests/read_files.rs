mod common;

use common::Fixture;
use dgf::{
    Bounds, CountMarker, EntityType, LevelPack, Position, ProgramVersion, Size, Tile,
};

fn load_if_exists(path: &str) -> Option<Vec<u8>> {
    std::fs::read(path).ok()
}

#[test]
fn parse_sample_pack() {
    let pack = dgf::decode(&Fixture::sample().build()).expect("failed to parse sample pack");

    assert_eq!(pack.edit_password, "Edit");
    assert_eq!(pack.play_password, "Play");
    assert_eq!(pack.apply_play_password_until, 1);
    assert_eq!(pack.author_name, "Ethem Kurt");
    assert_eq!(pack.comments, "https://github.com/BigETI/DGFSharp");
    assert_eq!(pack.garden_one_music_path, "DAISYG_5.MID");
    assert_eq!(pack.header.count_marker, CountMarker::Legacy);
    assert_eq!(pack.header.program_version, ProgramVersion::V2);

    let summary: Vec<(&str, &str, Size, u16)> = pack
        .gardens()
        .iter()
        .map(|g| (g.name.as_str(), g.music_path.as_str(), g.size(), g.time))
        .collect();
    assert_eq!(
        summary,
        [
            ("Round trip around flying ground", "DAISYG_5.MID", Size::new(17, 12), 85),
            ("Marmot garden", "DAISYG_2.MID", Size::new(17, 12), 120),
            ("Underground garden", "DAISYG_6.MID", Size::new(40, 40), 225),
        ]
    );

    let starts: Vec<Option<Position>> = pack.gardens().iter().map(|g| g.player_start()).collect();
    assert_eq!(
        starts,
        [
            Some(Position::new(0, 10)),
            Some(Position::new(0, 10)),
            Some(Position::new(1, 4)),
        ]
    );
}

#[test]
fn sample_tiles_and_entities() {
    let pack = dgf::decode(&Fixture::sample().build()).expect("failed to parse sample pack");

    let first = pack.garden(0).expect("garden 0");
    assert_eq!(first.tiles().len(), 17 * 12);
    assert_eq!(first.tile(0, 11), Some(Tile::HardGround));
    assert_eq!(first.tile(0, 10), Some(Tile::GrassGround));
    assert_eq!(first.tile(3, 4), Some(Tile::Ladder));
    assert!(first.tiles().iter().all(|t| !t.is_unset()));

    let kinds: Vec<EntityType> = first.entities().iter().map(|e| e.kind()).collect();
    assert_eq!(
        kinds,
        [
            EntityType::Daisy,
            EntityType::Apple,
            EntityType::Lemon,
            EntityType::UpMovingLift,
            EntityType::LeftMovingLift,
            EntityType::QuestionMark,
            EntityType::Rose,
        ]
    );
    assert_eq!(first.entities()[3].bounds(), Bounds::new(4, 0, 0, 0));
    assert_eq!(first.entities()[4].bounds(), Bounds::new(0, 0, 3, 0));
    assert_eq!(
        first.entities()[5].hint(),
        "Climb the ladder to reach the clouds."
    );

    let second = pack.garden(1).expect("garden 1");
    assert_eq!(second.tile(15, 10), Some(Tile::RedDoor));
    let marmot = &second.entities()[1];
    assert_eq!(marmot.kind(), EntityType::Marmot);
    assert_eq!(marmot.position, Position::new(9, 10));
    assert_eq!(marmot.bounds(), Bounds::new(-1, -1, 4, 4));

    let third = pack.garden(2).expect("garden 2");
    assert_eq!(third.tile(25, 19), Some(Tile::WaterSurface));
    assert_eq!(third.tile(25, 29), Some(Tile::Water));
    let kinds: Vec<EntityType> = third.entities().iter().map(|e| e.kind()).collect();
    assert_eq!(
        kinds,
        [
            EntityType::DownMovingLift,
            EntityType::Daisy,
            EntityType::RightMovingLift,
            EntityType::YellowKey,
            EntityType::GreenKey,
            EntityType::Mushroom,
            EntityType::QuestionMark,
        ]
    );
    assert_eq!(third.entities()[5].position, Position::new(7, 7));
    let hint = third.entities().last().expect("hint entity");
    assert_eq!(hint.kind(), EntityType::QuestionMark);
    assert_eq!(hint.hint(), "");
}

#[test]
fn sample_reencodes_identically() {
    let bytes = Fixture::sample().build();
    let pack = LevelPack::decode(&bytes).expect("failed to parse sample pack");
    assert_eq!(pack.encode(), bytes);
}

#[test]
fn sample_resize_and_save() {
    let mut pack = dgf::decode(&Fixture::sample().build()).expect("failed to parse sample pack");
    let third = pack.garden_mut(2).expect("garden 2");
    third.resize(Size::new(20, 20), dgf::ResizeAlignment::BottomRight);
    assert_eq!(third.size(), Size::new(20, 20));
    // Offset is 20 on both axes; only the two keys stay in range.
    let kept: Vec<(EntityType, Position)> = third
        .entities()
        .iter()
        .map(|e| (e.kind(), e.position))
        .collect();
    assert_eq!(
        kept,
        [
            (EntityType::YellowKey, Position::new(18, 18)),
            (EntityType::GreenKey, Position::new(10, 0)),
        ]
    );

    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("resized.dgf");
    pack.save(&path).expect("save");
    let reopened = LevelPack::open(&path).expect("reopen");
    assert_eq!(reopened, pack);
}

#[test]
fn parse_real_pack() {
    let path = std::env::var("DGF_TEST_FILE").unwrap_or_else(|_| "test.dgf".to_string());
    let Some(data) = load_if_exists(&path) else {
        eprintln!("skipping: {path} not found");
        return;
    };
    let pack = dgf::decode(&data).expect("failed to parse real pack");
    assert!(!pack.gardens().is_empty());
    for garden in pack.gardens() {
        assert_eq!(garden.tiles().len(), garden.size().area());
    }
    assert_eq!(dgf::encode(&pack), data);
}

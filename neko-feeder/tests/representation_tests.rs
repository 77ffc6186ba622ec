//! End-to-end representation fixtures
//!
//! One known-good file name per convention goes through dispatch and every
//! field accessor; the resulting JSON must match exactly.

use neko_feeder::song::{ConventionDispatcher, FieldMapper, SongDescription, SongPaths};
use serde_json::{json, Value};

fn represent(path: &str) -> Value {
    let mut description = SongDescription::new(SongPaths::new(path));
    ConventionDispatcher::default().prepare(&mut description);
    assert!(description.can_parse(), "fixture should parse: {}", path);
    serde_json::to_value(FieldMapper::new(&description).representation()).unwrap()
}

#[test]
fn test_music_fixture() {
    let value = represent(
        "CJKmusic/Tank! - Seatbelts, Mai Yamane - Yoko Kanno [FULL, SPOIL] \
         (OP1 Cowboy Bebop) (Original artist Hajime Mizoguchi) (Version TV) \
         (Video Live) (AMV Fan edit) {Instrumental break kept}.mp4",
    );

    assert_eq!(
        value,
        json!({
            "filename": "Tank! - Seatbelts, Mai Yamane - Yoko Kanno [FULL, SPOIL] (OP1 Cowboy Bebop) (Original artist Hajime Mizoguchi) (Version TV) (Video Live) (AMV Fan edit) {Instrumental break kept}.mp4",
            "directory": "CJKmusic",
            "title": "Tank!",
            "artists": [
                {"name": "Seatbelts"},
                {"name": "Mai Yamane"},
                {"name": "Yoko Kanno"},
                {"name": "Hajime Mizoguchi"}
            ],
            "tags": [{"name": "FULL"}, {"name": "SPOILER"}],
            "works": [{
                "link_type": "OP",
                "link_type_number": 1,
                "work": {"title": "Cowboy Bebop", "work_type": {"query_name": "anime"}}
            }],
            "version": "TV",
            "detail": "Instrumental break kept",
            "detail_video": "Live, Fan edit"
        })
    );
}

#[test]
fn test_anime_fixture() {
    let value = represent(
        "Anime/Naruto/Naruto - OP1 - Haruka Kanata [LONG] \
         (Artist Asian Kung-Fu Generation) (Episodes 26-53) (Subtitle Shippuden) \
         (Title video Creditless).mkv",
    );

    assert_eq!(
        value,
        json!({
            "filename": "Naruto - OP1 - Haruka Kanata [LONG] (Artist Asian Kung-Fu Generation) (Episodes 26-53) (Subtitle Shippuden) (Title video Creditless).mkv",
            "directory": "Anime/Naruto",
            "title": "Haruka Kanata",
            "artists": [{"name": "Asian Kung-Fu Generation"}],
            "tags": [{"name": "LONG"}],
            "works": [{
                "link_type": "OP",
                "link_type_number": 1,
                "episodes": "26-53",
                "work": {
                    "title": "Naruto",
                    "subtitle": "Shippuden",
                    "work_type": {"query_name": "anime"}
                }
            }],
            "version": "",
            "detail": "",
            "detail_video": "Creditless"
        })
    );
}

#[test]
fn test_cartoon_fixture() {
    let value = represent(
        "Dessin animé/Mon voisin Totoro - ED [DUET] (Version Film) (Language fr) \
         (Original artist Azumi Inoue).mp4",
    );

    assert_eq!(
        value,
        json!({
            "filename": "Mon voisin Totoro - ED [DUET] (Version Film) (Language fr) (Original artist Azumi Inoue).mp4",
            "directory": "Dessin animé",
            "title": "Mon voisin Totoro",
            "artists": [{"name": "Azumi Inoue"}],
            "tags": [{"name": "DUET"}],
            "works": [{
                "link_type": "ED",
                "work": {"title": "Mon voisin Totoro", "work_type": {"query_name": "cartoon"}}
            }],
            "version": "Film, fr",
            "detail": "",
            "detail_video": ""
        })
    );
}

#[test]
fn test_cartoon_music_title_wins() {
    let value = represent("Dessin animé/DuckTales - OP - Woo-oo.mp4");
    assert_eq!(value["title"], "Woo-oo");
    assert_eq!(value["works"][0]["work"]["title"], "DuckTales");
    assert!(value["works"][0].get("link_type_number").is_none());
}

#[test]
fn test_insert_song_has_no_number() {
    let value = represent("Live action/Kamen Rider - INS - Climax Jump.mp4");
    assert_eq!(value["works"][0]["link_type"], "IN");
    assert!(value["works"][0].get("link_type_number").is_none());
    assert_eq!(value["works"][0]["work"]["work_type"]["query_name"], "live_action");
}

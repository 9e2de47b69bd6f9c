use std::fs::OpenOptions;
use std::io::Write;

use player_league::{FileSystemPlayerStore, League, Player, PlayerStore, StoreError};

use crate::support::Database;

#[test]
fn recorded_wins_survive_reopen() {
    let db = Database::with_contents(r#"[{"Name":"Alam","Wins":10}]"#);

    let store = FileSystemPlayerStore::open(&db.path).unwrap();
    store.record_win("Alam").unwrap();
    store.record_win("Deka").unwrap();
    store.record_win("Tamtam").unwrap();
    let before = store.league();
    drop(store);

    let reopened = FileSystemPlayerStore::open(&db.path).unwrap();
    assert_eq!(reopened.league(), before);
    assert_eq!(
        reopened.league(),
        League::from(vec![
            Player::new("Alam", 11),
            Player::new("Deka", 1),
            Player::new("Tamtam", 1),
        ])
    );
}

#[test]
fn existing_player_then_new_player() {
    let db = Database::with_contents(r#"[{"Name":"Alam","Wins":10}]"#);
    let store = FileSystemPlayerStore::open(&db.path).unwrap();

    store.record_win("Alam").unwrap();
    assert_eq!(store.player_score("Alam"), 11);

    store.record_win("Deka").unwrap();
    assert_eq!(store.player_score("Deka"), 1);

    let league = store.league();
    assert_eq!(league.len(), 2);
    assert_eq!(league.players()[0], Player::new("Alam", 11));
    assert_eq!(league.players()[1], Player::new("Deka", 1));
}

#[test]
fn empty_file_is_an_empty_league() {
    let db = Database::with_contents("");
    let store = FileSystemPlayerStore::open(&db.path).unwrap();
    assert!(store.league().is_empty());
    assert_eq!(store.player_score("Anyone"), 0);
}

#[test]
fn file_holds_exactly_the_current_document() {
    let db = Database::with_contents(r#"[{"Name":"Alam","Wins":10}]"#);
    let store = FileSystemPlayerStore::open(&db.path).unwrap();

    store.record_win("Deka").unwrap();

    assert_eq!(
        db.contents(),
        "[{\"Name\":\"Alam\",\"Wins\":10},{\"Name\":\"Deka\",\"Wins\":1}]\n"
    );
}

#[test]
fn shorter_document_leaves_no_trailing_bytes() {
    // Pretty-printed seed is longer than the compact document written back.
    let seed = r#"[
        {"Name": "Alam", "Wins": 10},
        {"Name": "Dimas", "Wins": 15}
    ]"#;
    let db = Database::with_contents(seed);
    let store = FileSystemPlayerStore::open(&db.path).unwrap();

    store.record_win("Alam").unwrap();

    let expected = "[{\"Name\":\"Alam\",\"Wins\":11},{\"Name\":\"Dimas\",\"Wins\":15}]\n";
    assert!(expected.len() < seed.len());
    assert_eq!(std::fs::metadata(&db.path).unwrap().len(), expected.len() as u64);
    assert_eq!(db.contents(), expected);

    drop(store);
    let reopened = FileSystemPlayerStore::open(&db.path).unwrap();
    assert_eq!(reopened.player_score("Alam"), 11);
}

#[test]
fn malformed_file_fails_to_open() {
    let db = Database::with_contents(r#"[{"Name":"Alam","Wins":10}] trailing"#);
    let err = FileSystemPlayerStore::open(&db.path).err().unwrap();
    assert!(matches!(err, StoreError::LoadFile { .. }));
    assert!(err.to_string().contains("game.db.json"));
    assert_eq!(err.status_code(), 500);
}

#[test]
fn store_over_an_open_file_handle() {
    let db = Database::with_contents("");
    let mut file = OpenOptions::new()
        .read(true)
        .write(true)
        .open(&db.path)
        .unwrap();
    file.write_all(br#"[{"Name":"Alam","Wins":2}]"#).unwrap();

    // The handle is positioned at the end; construction rewinds it.
    let store = FileSystemPlayerStore::new(file).unwrap().with_sync(true);
    assert_eq!(store.player_score("Alam"), 2);

    store.record_win("Alam").unwrap();
    assert_eq!(db.contents(), "[{\"Name\":\"Alam\",\"Wins\":3}]\n");
}

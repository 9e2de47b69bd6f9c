//! HTTP integration tests: full axum roundtrip with a reqwest client.
#![cfg(feature = "http")]

use std::net::SocketAddr;

use player_league::{
    http, FileSystemPlayerStore, InMemoryPlayerStore, League, Player, PlayerStore,
};
use tokio::net::TcpListener;

/// Serve `store` on a random local port.
async fn spawn_server<S: PlayerStore + 'static>(store: S) -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let app = http::router(store);

    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    addr
}

#[tokio::test]
async fn record_wins_and_read_them_back() {
    let addr = spawn_server(InMemoryPlayerStore::new()).await;
    let client = reqwest::Client::new();
    let player_url = format!("http://{}/players/Pepper", addr);

    // 1. Unknown player → 404 with a zero score
    let resp = client.get(&player_url).send().await.unwrap();
    assert_eq!(resp.status(), 404);
    assert_eq!(resp.text().await.unwrap(), "0");

    // 2. Three wins → 202 each
    for _ in 0..3 {
        let resp = client.post(&player_url).send().await.unwrap();
        assert_eq!(resp.status(), 202);
    }

    // 3. Score is now 3
    let resp = client.get(&player_url).send().await.unwrap();
    assert_eq!(resp.status(), 200);
    assert_eq!(resp.text().await.unwrap(), "3");
}

#[tokio::test]
async fn league_is_served_as_json() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("game.db.json");
    std::fs::write(&path, r#"[{"Name":"Alam","Wins":10}]"#).unwrap();

    let store = FileSystemPlayerStore::open(&path).unwrap();
    let addr = spawn_server(store.clone()).await;
    let client = reqwest::Client::new();

    let resp = client
        .post(format!("http://{}/players/Deka", addr))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 202);

    let resp = client
        .get(format!("http://{}/league", addr))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);
    assert_eq!(
        resp.headers()["content-type"].to_str().unwrap(),
        "application/json"
    );

    let league: League = resp.json().await.unwrap();
    assert_eq!(
        league,
        League::from(vec![Player::new("Alam", 10), Player::new("Deka", 1)])
    );
    assert_eq!(store.league(), league);
}

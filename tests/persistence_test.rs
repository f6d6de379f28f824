//! Integration test: Save files
//!
//! Exercises the file-backed store end to end: round trips, key
//! namespacing, and resuming a session from disk.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use arena::save_manager::{save_key, SaveManager, SessionStore};
use arena::session::{GameSession, PlayerProfile, Registration, SessionStart};
use arena::{GameState, LocationId, WeaponKind};

fn profile(name: &str) -> PlayerProfile {
    Registration {
        name: name.to_string(),
        age: "20".to_string(),
        consent: true,
    }
    .validate()
    .expect("registration should be valid")
}

#[test]
fn test_roundtrip_preserves_every_field() {
    let dir = tempfile::tempdir().expect("tempdir");
    let manager = SaveManager::with_dir(dir.path().to_path_buf()).expect("with_dir");

    let mut state = GameState::new("Hero".to_string());
    state.health = 37;
    state.gold = 5;
    state.xp = 120;
    state.inventory.sword = true;
    state.inventory.magic = true;
    state.selected_weapon = Some(WeaponKind::Magic);
    state.location = LocationId::Fight;
    state.monster_health = 3;

    manager.save(&save_key(&state.player_name), &state).expect("save");
    let loaded = manager.load("hero").expect("load").expect("present");

    assert_eq!(loaded, state);
}

#[test]
fn test_saves_are_namespaced_per_player() {
    let dir = tempfile::tempdir().expect("tempdir");
    let manager = SaveManager::with_dir(dir.path().to_path_buf()).expect("with_dir");

    manager
        .save("alice", &GameState::new("Alice".to_string()))
        .expect("save alice");
    manager
        .save("bob", &GameState::new("Bob".to_string()))
        .expect("save bob");

    let files: Vec<String> = std::fs::read_dir(dir.path())
        .expect("read_dir")
        .map(|e| e.expect("entry").file_name().to_string_lossy().into_owned())
        .collect();

    assert_eq!(files.len(), 2);
    assert!(files.contains(&"arena_save_alice.json".to_string()));
    assert!(files.contains(&"arena_save_bob.json".to_string()));
}

#[test]
fn test_session_resumes_from_disk() {
    let dir = tempfile::tempdir().expect("tempdir");

    {
        let manager = SaveManager::with_dir(dir.path().to_path_buf()).expect("with_dir");
        let (mut session, start) = GameSession::start(profile("Hero"), manager).expect("start");
        assert_eq!(start, SessionStart::Fresh);

        let mut rng = ChaCha8Rng::seed_from_u64(1);
        session.perform_slot(0, &mut rng).expect("go store");
        session.perform_slot(0, &mut rng).expect("buy sword");
    }

    let manager = SaveManager::with_dir(dir.path().to_path_buf()).expect("with_dir");
    let (session, start) = GameSession::start(profile("hero"), manager).expect("restart");

    assert_eq!(start, SessionStart::Resumed);
    assert_eq!(session.state().gold, 70);
    assert!(session.state().inventory.sword);
    assert_eq!(session.state().player_name, "Hero");
}

#[test]
fn test_fresh_session_writes_its_initial_state() {
    let dir = tempfile::tempdir().expect("tempdir");
    let manager = SaveManager::with_dir(dir.path().to_path_buf()).expect("with_dir");

    let (_session, start) = GameSession::start(profile("Hero"), manager).expect("start");

    assert_eq!(start, SessionStart::Fresh);
    let reopened = SaveManager::with_dir(dir.path().to_path_buf()).expect("with_dir");
    let stored = reopened.load("hero").expect("load").expect("present");
    assert_eq!(stored, GameState::new("Hero".to_string()));
}

use rand::Rng;
use std::io;

use crate::constants::AGE_FLOOR;
use crate::events::GameEvent;
use crate::game_logic;
use crate::game_state::{GameState, WeaponKind};
use crate::save_manager::{save_key, SessionStore};

/// Why a registration form was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegistrationError {
    InvalidName,
    InvalidAge,
    ConsentRequired,
}

impl RegistrationError {
    pub fn message(self) -> &'static str {
        match self {
            RegistrationError::InvalidName => "Name must contain letters only.",
            RegistrationError::InvalidAge => "Age must be a number greater than 8.",
            RegistrationError::ConsentRequired => "You must agree to the rules.",
        }
    }
}

/// Raw form values as the player typed them.
#[derive(Debug, Clone, Default)]
pub struct Registration {
    pub name: String,
    pub age: String,
    pub consent: bool,
}

/// A validated identity, ready to start or resume a session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerProfile {
    pub name: String,
}

impl Registration {
    /// Checks name, then age, then consent; the first violation wins.
    pub fn validate(&self) -> Result<PlayerProfile, RegistrationError> {
        let name = self.name.trim();
        if name.is_empty() || !name.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(RegistrationError::InvalidName);
        }

        let age: f64 = self
            .age
            .trim()
            .parse()
            .map_err(|_| RegistrationError::InvalidAge)?;
        if age.is_nan() || age <= AGE_FLOOR {
            return Err(RegistrationError::InvalidAge);
        }

        if !self.consent {
            return Err(RegistrationError::ConsentRequired);
        }

        Ok(PlayerProfile {
            name: name.to_string(),
        })
    }
}

/// How a session began.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionStart {
    /// No save existed; a fresh state was created and written.
    Fresh,
    /// A previous save was restored wholesale.
    Resumed,
}

impl SessionStart {
    pub fn greeting(self) -> &'static str {
        match self {
            SessionStart::Fresh => "Welcome! Let's start the game.",
            SessionStart::Resumed => "Welcome back! Your saved game has been loaded.",
        }
    }
}

/// One player's game, bound to its store.
///
/// All mutation goes through here so every state change hits the store
/// before the UI sees it. Purely informational outcomes (dodge, swinging
/// with no weapon) skip the write.
pub struct GameSession<S: SessionStore> {
    state: GameState,
    store: S,
}

impl<S: SessionStore> GameSession<S> {
    /// Resumes the save for this player, or starts a fresh game and
    /// persists it immediately.
    pub fn start(profile: PlayerProfile, store: S) -> io::Result<(Self, SessionStart)> {
        if let Some(state) = store.load(&save_key(&profile.name))? {
            return Ok((Self { state, store }, SessionStart::Resumed));
        }

        let session = Self {
            state: GameState::new(profile.name),
            store,
        };
        session.persist()?;
        Ok((session, SessionStart::Fresh))
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Runs the action in the given slot of the current location.
    pub fn perform_slot<R: Rng>(&mut self, slot: usize, rng: &mut R) -> io::Result<Vec<GameEvent>> {
        let events = game_logic::perform_slot(&mut self.state, slot, rng);
        if events.iter().any(|e| e.mutates_state()) {
            self.persist()?;
        }
        Ok(events)
    }

    /// Equips an owned weapon.
    pub fn select_weapon(&mut self, weapon: WeaponKind) -> io::Result<Option<GameEvent>> {
        match game_logic::select_weapon(&mut self.state, weapon) {
            Some(event) => {
                self.persist()?;
                Ok(Some(event))
            }
            None => Ok(None),
        }
    }

    fn persist(&self) -> io::Result<()> {
        self.store
            .save(&save_key(&self.state.player_name), &self.state)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::location::LocationId;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;
    use std::cell::RefCell;
    use std::collections::HashMap;

    /// Store that counts writes, for asserting the save-on-mutation rule.
    #[derive(Default)]
    struct MemoryStore {
        entries: RefCell<HashMap<String, GameState>>,
        writes: RefCell<u32>,
    }

    impl SessionStore for MemoryStore {
        fn save(&self, key: &str, state: &GameState) -> io::Result<()> {
            *self.writes.borrow_mut() += 1;
            self.entries
                .borrow_mut()
                .insert(key.to_string(), state.clone());
            Ok(())
        }

        fn load(&self, key: &str) -> io::Result<Option<GameState>> {
            Ok(self.entries.borrow().get(key).cloned())
        }
    }

    fn registration(name: &str, age: &str, consent: bool) -> Registration {
        Registration {
            name: name.to_string(),
            age: age.to_string(),
            consent,
        }
    }

    #[test]
    fn test_validation_rejects_non_letter_names() {
        for bad in ["abc123", "", "   ", "a b", "he-ro"] {
            assert_eq!(
                registration(bad, "20", true).validate(),
                Err(RegistrationError::InvalidName),
                "{:?} should be invalid",
                bad
            );
        }
    }

    #[test]
    fn test_validation_rejects_young_or_non_numeric_ages() {
        for bad in ["8", "-3", "abc", ""] {
            assert_eq!(
                registration("Hero", bad, true).validate(),
                Err(RegistrationError::InvalidAge),
                "{:?} should be invalid",
                bad
            );
        }
        // Strictly greater than 8, not at least 8.
        assert!(registration("Hero", "9", true).validate().is_ok());
    }

    #[test]
    fn test_validation_requires_consent() {
        assert_eq!(
            registration("Hero", "20", false).validate(),
            Err(RegistrationError::ConsentRequired)
        );
    }

    #[test]
    fn test_validation_trims_and_keeps_name_casing() {
        let profile = registration("  Hero  ", "20", true).validate().expect("valid");
        assert_eq!(profile.name, "Hero");
    }

    #[test]
    fn test_fresh_session_saves_immediately() {
        let store = MemoryStore::default();
        let profile = registration("Hero", "20", true).validate().expect("valid");

        let (session, start) = GameSession::start(profile, store).expect("start");

        assert_eq!(start, SessionStart::Fresh);
        assert_eq!(*session.store.writes.borrow(), 1);
        assert!(session.store.entries.borrow().contains_key("hero"));
    }

    #[test]
    fn test_session_resumes_by_case_insensitive_name() {
        let store = MemoryStore::default();
        let mut saved = GameState::new("Hero".to_string());
        saved.gold = 55;
        store.save("hero", &saved).expect("seed save");

        let profile = registration("HERO", "20", true).validate().expect("valid");
        let (session, start) = GameSession::start(profile, store).expect("start");

        assert_eq!(start, SessionStart::Resumed);
        assert_eq!(session.state().gold, 55);
        assert_eq!(session.state().player_name, "Hero");
    }

    #[test]
    fn test_dodge_skips_the_save() {
        let store = MemoryStore::default();
        let profile = registration("Hero", "20", true).validate().expect("valid");
        let (mut session, _) = GameSession::start(profile, store).expect("start");
        let mut rng = ChaCha8Rng::seed_from_u64(1);

        // Town slot 1 -> fight, then slot 1 -> dodge.
        session.perform_slot(1, &mut rng).expect("go fight");
        let writes_before = *session.store.writes.borrow();
        let events = session.perform_slot(1, &mut rng).expect("dodge");

        assert_eq!(events, vec![GameEvent::Dodged]);
        assert_eq!(*session.store.writes.borrow(), writes_before);
    }

    #[test]
    fn test_location_change_persists() {
        let store = MemoryStore::default();
        let profile = registration("Hero", "20", true).validate().expect("valid");
        let (mut session, _) = GameSession::start(profile, store).expect("start");
        let mut rng = ChaCha8Rng::seed_from_u64(1);

        session.perform_slot(0, &mut rng).expect("go store");

        assert_eq!(session.state().location, LocationId::Store);
        let stored = session.store.entries.borrow().get("hero").cloned().unwrap();
        assert_eq!(stored.location, LocationId::Store);
    }
}

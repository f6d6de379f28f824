use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::PathBuf;

use crate::constants::{SAVE_DIR_NAME, SAVE_FILE_PREFIX, SAVE_VERSION};
use crate::game_state::{GameState, Inventory, WeaponKind};
use crate::location::LocationId;

/// Durable storage for one game state per player key.
///
/// A missing entry is not an error; `load` answers `Ok(None)` and the
/// caller starts fresh.
pub trait SessionStore {
    fn save(&self, key: &str, state: &GameState) -> io::Result<()>;
    fn load(&self, key: &str) -> io::Result<Option<GameState>>;
}

impl<S: SessionStore> SessionStore for &S {
    fn save(&self, key: &str, state: &GameState) -> io::Result<()> {
        (**self).save(key, state)
    }

    fn load(&self, key: &str) -> io::Result<Option<GameState>> {
        (**self).load(key)
    }
}

/// Storage key for a player name. Case-insensitive so "Hero" and "hero"
/// resume the same game.
pub fn save_key(player_name: &str) -> String {
    player_name.trim().to_lowercase()
}

/// On-disk envelope around the game state.
#[derive(Serialize, Deserialize)]
struct SaveData {
    version: u32,
    last_save_time: i64,
    player_name: String,
    health: u32,
    gold: u32,
    xp: u32,
    inventory: Inventory,
    selected_weapon: Option<WeaponKind>,
    location: LocationId,
    monster_health: u32,
}

/// File-backed store keeping one JSON save per player under `~/.arena/`.
pub struct SaveManager {
    save_dir: PathBuf,
}

impl SaveManager {
    pub fn new() -> io::Result<Self> {
        let home_dir = dirs::home_dir().ok_or_else(|| {
            io::Error::new(
                io::ErrorKind::NotFound,
                "Could not determine home directory",
            )
        })?;
        Self::with_dir(home_dir.join(SAVE_DIR_NAME))
    }

    /// Uses an explicit directory instead of `~/.arena/`.
    pub fn with_dir(save_dir: PathBuf) -> io::Result<Self> {
        fs::create_dir_all(&save_dir)?;
        Ok(Self { save_dir })
    }

    /// The prefix namespaces our saves away from anything else a user
    /// might keep in the directory.
    fn file_path(&self, key: &str) -> PathBuf {
        self.save_dir.join(format!("{}{}.json", SAVE_FILE_PREFIX, key))
    }
}

impl SessionStore for SaveManager {
    fn save(&self, key: &str, state: &GameState) -> io::Result<()> {
        let save_data = SaveData {
            version: SAVE_VERSION,
            last_save_time: Utc::now().timestamp(),
            player_name: state.player_name.clone(),
            health: state.health,
            gold: state.gold,
            xp: state.xp,
            inventory: state.inventory,
            selected_weapon: state.selected_weapon,
            location: state.location,
            monster_health: state.monster_health,
        };

        let json = serde_json::to_string_pretty(&save_data)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;

        fs::write(self.file_path(key), json)
    }

    fn load(&self, key: &str) -> io::Result<Option<GameState>> {
        let path = self.file_path(key);
        let json = match fs::read_to_string(&path) {
            Ok(json) => json,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e),
        };

        let save_data: SaveData = serde_json::from_str(&json)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;

        Ok(Some(GameState {
            player_name: save_data.player_name,
            health: save_data.health,
            gold: save_data.gold,
            xp: save_data.xp,
            inventory: save_data.inventory,
            selected_weapon: save_data.selected_weapon,
            location: save_data.location,
            monster_health: save_data.monster_health,
        }))
    }
}

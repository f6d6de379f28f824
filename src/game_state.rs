use serde::{Deserialize, Serialize};

use crate::constants::*;
use crate::location::LocationId;

/// The three weapons the store deals in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WeaponKind {
    Sword,
    Bow,
    Magic,
}

impl WeaponKind {
    /// All weapons in store order.
    pub fn all() -> [WeaponKind; 3] {
        [WeaponKind::Sword, WeaponKind::Bow, WeaponKind::Magic]
    }

    /// Gold cost at the store.
    pub fn price(self) -> u32 {
        match self {
            WeaponKind::Sword => 30,
            WeaponKind::Bow => 50,
            WeaponKind::Magic => 80,
        }
    }

    /// Gold returned when sold. Always less than the price.
    pub fn refund(self) -> u32 {
        match self {
            WeaponKind::Sword => 15,
            WeaponKind::Bow => 25,
            WeaponKind::Magic => 40,
        }
    }

    /// Base damage fed into the damage roll.
    pub fn base_damage(self) -> u32 {
        match self {
            WeaponKind::Sword => 5,
            WeaponKind::Bow => 7,
            WeaponKind::Magic => 20,
        }
    }

    /// Display name, capitalized.
    pub fn label(self) -> &'static str {
        match self {
            WeaponKind::Sword => "Sword",
            WeaponKind::Bow => "Bow",
            WeaponKind::Magic => "Magic",
        }
    }
}

/// Owned-or-not flag per weapon.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Inventory {
    pub sword: bool,
    pub bow: bool,
    pub magic: bool,
}

impl Inventory {
    pub fn owns(&self, weapon: WeaponKind) -> bool {
        match weapon {
            WeaponKind::Sword => self.sword,
            WeaponKind::Bow => self.bow,
            WeaponKind::Magic => self.magic,
        }
    }

    pub fn set(&mut self, weapon: WeaponKind, owned: bool) {
        match weapon {
            WeaponKind::Sword => self.sword = owned,
            WeaponKind::Bow => self.bow = owned,
            WeaponKind::Magic => self.magic = owned,
        }
    }

    /// Owned weapons in store order.
    pub fn owned_weapons(&self) -> Vec<WeaponKind> {
        WeaponKind::all()
            .into_iter()
            .filter(|w| self.owns(*w))
            .collect()
    }

    /// First owned weapon in store order, if any.
    pub fn first_owned(&self) -> Option<WeaponKind> {
        WeaponKind::all().into_iter().find(|w| self.owns(*w))
    }
}

/// Main game state containing all player progress
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    pub player_name: String,
    pub health: u32,
    pub gold: u32,
    pub xp: u32,
    pub inventory: Inventory,
    pub selected_weapon: Option<WeaponKind>,
    pub location: LocationId,
    pub monster_health: u32,
}

impl GameState {
    /// Creates a fresh game state for a newly registered player.
    pub fn new(player_name: String) -> Self {
        Self {
            player_name,
            health: START_HEALTH,
            gold: START_GOLD,
            xp: 0,
            inventory: Inventory::default(),
            selected_weapon: None,
            location: LocationId::Town,
            monster_health: MONSTER_MAX_HEALTH,
        }
    }

    /// The selected weapon, but only while it is actually owned.
    pub fn equipped_weapon(&self) -> Option<WeaponKind> {
        self.selected_weapon.filter(|w| self.inventory.owns(*w))
    }
}

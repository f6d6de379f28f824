use rand::Rng;

use crate::combat;
use crate::constants::*;
use crate::economy;
use crate::events::GameEvent;
use crate::game_state::{GameState, Inventory, WeaponKind};
use crate::location::{Action, LocationId};

/// Moves the player to a location and applies its entry effects.
///
/// Entering the fight re-derives the weapon selection: the first owned
/// weapon is auto-equipped, or the selection is cleared when the player
/// owns nothing.
pub fn enter_location(state: &mut GameState, dest: LocationId) -> GameEvent {
    state.location = dest;
    if dest == LocationId::Fight {
        state.selected_weapon = state.inventory.first_owned();
    }
    GameEvent::Moved(dest)
}

/// Equips an owned weapon. Returns `None` for weapons the player does
/// not own; the selector only ever offers owned ones.
pub fn select_weapon(state: &mut GameState, weapon: WeaponKind) -> Option<GameEvent> {
    if !state.inventory.owns(weapon) {
        return None;
    }
    state.selected_weapon = Some(weapon);
    Some(GameEvent::WeaponSelected(weapon))
}

/// Executes one action and reports what happened.
pub fn perform<R: Rng>(state: &mut GameState, action: Action, rng: &mut R) -> Vec<GameEvent> {
    match action {
        Action::Go(dest) => vec![enter_location(state, dest)],
        Action::Buy(weapon) => vec![economy::buy(state, weapon)],
        Action::Sell(weapon) => vec![economy::sell(state, weapon)],
        Action::Attack => combat::attack(state, rng),
        Action::Dodge => vec![GameEvent::Dodged],
        Action::RunAway => vec![
            GameEvent::RanAway,
            enter_location(state, LocationId::Town),
        ],
    }
}

/// Executes the action bound to a slot of the current location.
/// Empty slots are a no-op.
pub fn perform_slot<R: Rng>(state: &mut GameState, slot: usize, rng: &mut R) -> Vec<GameEvent> {
    match state.location.action_at(slot) {
        Some(action) => perform(state, action, rng),
        None => Vec::new(),
    }
}

/// Puts every stat back to its starting value, keeping only the player
/// name. Idempotent; runs automatically when health hits zero.
pub fn reset(state: &mut GameState) {
    state.health = START_HEALTH;
    state.gold = START_GOLD;
    state.xp = 0;
    state.inventory = Inventory::default();
    state.selected_weapon = None;
    state.location = LocationId::Town;
    state.monster_health = MONSTER_MAX_HEALTH;
}

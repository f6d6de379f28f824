use crate::events::GameEvent;
use crate::game_state::{GameState, WeaponKind};

/// Attempts to buy a weapon at the store price.
///
/// Fails on insufficient gold or a weapon already owned; either way the
/// caller gets a single generic failure and the state is untouched.
pub fn buy(state: &mut GameState, weapon: WeaponKind) -> GameEvent {
    if state.gold >= weapon.price() && !state.inventory.owns(weapon) {
        state.gold -= weapon.price();
        state.inventory.set(weapon, true);
        GameEvent::Purchased(weapon)
    } else {
        GameEvent::PurchaseFailed(weapon)
    }
}

/// Attempts to sell an owned weapon for its refund value.
///
/// Selling the equipped weapon also clears the selection so it never
/// points at something the player no longer owns.
pub fn sell(state: &mut GameState, weapon: WeaponKind) -> GameEvent {
    if state.inventory.owns(weapon) {
        state.inventory.set(weapon, false);
        state.gold += weapon.refund();
        if state.selected_weapon == Some(weapon) {
            state.selected_weapon = None;
        }
        GameEvent::Sold(weapon)
    } else {
        GameEvent::SellFailed(weapon)
    }
}

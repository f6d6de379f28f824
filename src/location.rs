use serde::{Deserialize, Serialize};

use crate::constants::ACTION_SLOTS;
use crate::game_state::WeaponKind;

/// The four places a player can be.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LocationId {
    Town,
    Store,
    Fight,
    Sell,
}

/// One thing a player can do from an action slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Go(LocationId),
    Buy(WeaponKind),
    Sell(WeaponKind),
    Attack,
    Dodge,
    RunAway,
}

impl Action {
    /// Button label shown for this action.
    pub fn label(self) -> String {
        match self {
            Action::Go(dest) => format!("Go to {}", dest.name()),
            Action::Buy(w) => format!("Buy {} ({})", w.label(), w.price()),
            Action::Sell(w) => format!("Sell {} ({})", w.label(), w.refund()),
            Action::Attack => "Attack".to_string(),
            Action::Dodge => "Dodge".to_string(),
            Action::RunAway => "Run".to_string(),
        }
    }
}

impl LocationId {
    /// Short display name.
    pub fn name(self) -> &'static str {
        match self {
            LocationId::Town => "Town",
            LocationId::Store => "Store",
            LocationId::Fight => "Fight",
            LocationId::Sell => "Sell",
        }
    }

    /// Prompt text shown on arrival.
    pub fn description(self) -> &'static str {
        match self {
            LocationId::Town => "You're in the Town. What do you want to do?",
            LocationId::Store => "Buy a weapon.",
            LocationId::Fight => "Choose your weapon and fight!",
            LocationId::Sell => "Sell your items.",
        }
    }

    /// The fixed action slots for this location. Empty slots are hidden
    /// and never selectable.
    pub fn actions(self) -> [Option<Action>; ACTION_SLOTS] {
        match self {
            LocationId::Town => [
                Some(Action::Go(LocationId::Store)),
                Some(Action::Go(LocationId::Fight)),
                Some(Action::Go(LocationId::Sell)),
                None,
            ],
            LocationId::Store => [
                Some(Action::Buy(WeaponKind::Sword)),
                Some(Action::Buy(WeaponKind::Bow)),
                Some(Action::Buy(WeaponKind::Magic)),
                Some(Action::Go(LocationId::Town)),
            ],
            LocationId::Fight => [
                Some(Action::Attack),
                Some(Action::Dodge),
                Some(Action::RunAway),
                Some(Action::Go(LocationId::Town)),
            ],
            LocationId::Sell => [
                Some(Action::Sell(WeaponKind::Sword)),
                Some(Action::Sell(WeaponKind::Bow)),
                Some(Action::Sell(WeaponKind::Magic)),
                Some(Action::Go(LocationId::Town)),
            ],
        }
    }

    /// Action bound to a slot index, if the slot is populated.
    pub fn action_at(self, slot: usize) -> Option<Action> {
        self.actions().get(slot).copied().flatten()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_location_has_four_slots() {
        for location in [
            LocationId::Town,
            LocationId::Store,
            LocationId::Fight,
            LocationId::Sell,
        ] {
            assert_eq!(location.actions().len(), ACTION_SLOTS);
        }
    }

    #[test]
    fn test_town_last_slot_is_empty() {
        assert_eq!(LocationId::Town.action_at(3), None);
        assert_eq!(LocationId::Town.action_at(0), Some(Action::Go(LocationId::Store)));
    }

    #[test]
    fn test_out_of_range_slot_is_empty() {
        assert_eq!(LocationId::Store.action_at(ACTION_SLOTS), None);
    }

    #[test]
    fn test_every_non_town_location_can_return_to_town() {
        for location in [LocationId::Store, LocationId::Fight, LocationId::Sell] {
            assert_eq!(location.action_at(3), Some(Action::Go(LocationId::Town)));
        }
    }

    #[test]
    fn test_store_sells_all_weapons_in_order() {
        let actions = LocationId::Store.actions();
        for (slot, weapon) in WeaponKind::all().into_iter().enumerate() {
            assert_eq!(actions[slot], Some(Action::Buy(weapon)));
        }
    }

    #[test]
    fn test_action_labels() {
        assert_eq!(Action::Buy(WeaponKind::Sword).label(), "Buy Sword (30)");
        assert_eq!(Action::Sell(WeaponKind::Magic).label(), "Sell Magic (40)");
        assert_eq!(Action::Go(LocationId::Town).label(), "Go to Town");
    }
}

use crate::game_state::WeaponKind;
use crate::location::LocationId;

/// Everything a player action can report back to the UI layer.
///
/// Events communicate outcomes without coupling game logic to
/// the terminal; the driver turns them into the message line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    Moved(LocationId),
    Purchased(WeaponKind),
    PurchaseFailed(WeaponKind),
    Sold(WeaponKind),
    SellFailed(WeaponKind),
    WeaponSelected(WeaponKind),
    /// Both sides landed a hit and the fight continues.
    Exchange { dealt: u32, received: u32 },
    Victory { xp_gained: u32, gold_gained: u32 },
    GameOver,
    NoWeaponSelected,
    Dodged,
    RanAway,
}

impl GameEvent {
    /// Whether the action behind this event changed the game state.
    /// Informational outcomes are exempt from the save-on-mutation rule.
    pub fn mutates_state(self) -> bool {
        !matches!(self, GameEvent::Dodged | GameEvent::NoWeaponSelected)
    }

    /// Message shown to the player, if the event carries one.
    pub fn message(self) -> Option<String> {
        match self {
            GameEvent::Moved(_) => None,
            GameEvent::Purchased(w) => Some(match w {
                WeaponKind::Sword => "You bought a sword!".to_string(),
                WeaponKind::Bow => "You bought a bow!".to_string(),
                WeaponKind::Magic => "You bought magic!".to_string(),
            }),
            GameEvent::PurchaseFailed(_) => {
                Some("You already own it or don't have enough gold.".to_string())
            }
            GameEvent::Sold(w) => Some(format!("{} sold.", w.label())),
            GameEvent::SellFailed(_) => Some("You don't own this.".to_string()),
            GameEvent::WeaponSelected(w) => Some(format!("{} equipped.", w.label())),
            GameEvent::Exchange { dealt, received } => {
                Some(format!("You dealt {}, Monster dealt {}.", dealt, received))
            }
            GameEvent::Victory { .. } => Some("You defeated the monster!".to_string()),
            GameEvent::GameOver => Some("You died!".to_string()),
            GameEvent::NoWeaponSelected => {
                Some("Please choose a valid weapon before fighting.".to_string())
            }
            GameEvent::Dodged => Some("You dodged the attack.".to_string()),
            GameEvent::RanAway => Some("You ran away.".to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_informational_events_do_not_mutate() {
        assert!(!GameEvent::Dodged.mutates_state());
        assert!(!GameEvent::NoWeaponSelected.mutates_state());
    }

    #[test]
    fn test_failed_trades_still_count_as_mutations() {
        // Failed buys and sells refresh and persist like successful ones.
        assert!(GameEvent::PurchaseFailed(WeaponKind::Sword).mutates_state());
        assert!(GameEvent::SellFailed(WeaponKind::Bow).mutates_state());
    }

    #[test]
    fn test_moves_carry_no_message() {
        assert_eq!(GameEvent::Moved(LocationId::Store).message(), None);
        assert!(GameEvent::GameOver.message().is_some());
    }
}

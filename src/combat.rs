use rand::Rng;

use crate::constants::*;
use crate::events::GameEvent;
use crate::game_logic;
use crate::game_state::GameState;

/// Damage for one swing with the equipped weapon, 0 when nothing valid
/// is equipped.
///
/// The roll is `floor(r * base/2) + floor(base/2)` with `r` in `[0, 1)`,
/// which lands each weapon in `[floor(base/2), base - 1]`: sword 2-4,
/// bow 3-6, magic 10-19.
pub fn player_damage<R: Rng>(state: &GameState, rng: &mut R) -> u32 {
    let Some(weapon) = state.equipped_weapon() else {
        return 0;
    };
    let base = weapon.base_damage();
    let roll: f64 = rng.gen();
    (roll * base as f64 / 2.0) as u32 + base / 2
}

/// Uniform retaliation roll for the monster.
fn monster_hit<R: Rng>(rng: &mut R) -> u32 {
    rng.gen_range(MONSTER_HIT_MIN..=MONSTER_HIT_MAX)
}

/// One round of combat: the player strikes, then the monster answers
/// unless it died.
///
/// Defeating the monster awards xp and gold and respawns it at full
/// health. If the retaliation drops the player to zero the whole game
/// resets, which replaces the usual post-attack refresh.
pub fn attack<R: Rng>(state: &mut GameState, rng: &mut R) -> Vec<GameEvent> {
    if state.equipped_weapon().is_none() {
        return vec![GameEvent::NoWeaponSelected];
    }

    let dealt = player_damage(state, rng);
    state.monster_health = state.monster_health.saturating_sub(dealt);

    if state.monster_health == 0 {
        state.xp += VICTORY_XP;
        state.gold += VICTORY_GOLD;
        state.monster_health = MONSTER_MAX_HEALTH;
        return vec![GameEvent::Victory {
            xp_gained: VICTORY_XP,
            gold_gained: VICTORY_GOLD,
        }];
    }

    let received = monster_hit(rng);
    state.health = state.health.saturating_sub(received);

    let mut events = vec![GameEvent::Exchange { dealt, received }];
    if state.health == 0 {
        game_logic::reset(state);
        events.push(GameEvent::GameOver);
    }
    events
}

//! UI-agnostic input handling for the registration form and the
//! adventure screen.

use rand::Rng;
use std::io;

use crate::events::GameEvent;
use crate::game_state::WeaponKind;
use crate::location::LocationId;
use crate::save_manager::SessionStore;
use crate::session::{GameSession, PlayerProfile, Registration};

/// Which form field currently has focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegisterField {
    Name,
    Age,
    Consent,
}

impl RegisterField {
    pub fn next(self) -> RegisterField {
        match self {
            RegisterField::Name => RegisterField::Age,
            RegisterField::Age => RegisterField::Consent,
            RegisterField::Consent => RegisterField::Name,
        }
    }
}

/// Editable state of the registration form.
#[derive(Debug, Clone)]
pub struct RegisterForm {
    pub name: String,
    pub age: String,
    pub consent: bool,
    pub focus: RegisterField,
    pub error: Option<String>,
}

impl RegisterForm {
    pub fn new() -> Self {
        Self {
            name: String::new(),
            age: String::new(),
            consent: false,
            focus: RegisterField::Name,
            error: None,
        }
    }

    fn handle_char(&mut self, c: char) {
        match self.focus {
            RegisterField::Name => self.name.push(c),
            RegisterField::Age => self.age.push(c),
            RegisterField::Consent => {
                if c == ' ' {
                    self.consent = !self.consent;
                }
            }
        }
    }

    fn handle_backspace(&mut self) {
        match self.focus {
            RegisterField::Name => {
                self.name.pop();
            }
            RegisterField::Age => {
                self.age.pop();
            }
            RegisterField::Consent => {}
        }
    }
}

impl Default for RegisterForm {
    fn default() -> Self {
        Self::new()
    }
}

/// Input events for the registration form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegisterInput {
    /// Character typed
    Char(char),
    /// Backspace pressed
    Backspace,
    /// Tab pressed to move focus
    NextField,
    /// Enter pressed to submit the form
    Submit,
    /// Escape pressed to quit
    Quit,
    /// Any other key
    Other,
}

/// Result of processing registration input.
#[derive(Debug, Clone, PartialEq)]
pub enum RegisterResult {
    /// Stay on the form
    Continue,
    /// Form validated; start or resume a session for this profile
    Submitted(PlayerProfile),
    /// Player quit from the form
    Quit,
}

/// Applies one input event to the form. Validation failures land in
/// `form.error` and keep the player on the form.
pub fn process_register_input(form: &mut RegisterForm, input: RegisterInput) -> RegisterResult {
    match input {
        RegisterInput::Char(c) => {
            form.handle_char(c);
            RegisterResult::Continue
        }
        RegisterInput::Backspace => {
            form.handle_backspace();
            RegisterResult::Continue
        }
        RegisterInput::NextField => {
            form.focus = form.focus.next();
            RegisterResult::Continue
        }
        RegisterInput::Submit => {
            let registration = Registration {
                name: form.name.clone(),
                age: form.age.clone(),
                consent: form.consent,
            };
            match registration.validate() {
                Ok(profile) => {
                    form.error = None;
                    RegisterResult::Submitted(profile)
                }
                Err(e) => {
                    form.error = Some(e.message().to_string());
                    RegisterResult::Continue
                }
            }
        }
        RegisterInput::Quit => RegisterResult::Quit,
        RegisterInput::Other => RegisterResult::Continue,
    }
}

/// Input events for the adventure screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdventureInput {
    /// Number key 1-4 pressed
    Slot(usize),
    /// 'w' pressed to switch to the next owned weapon
    CycleWeapon,
    /// Escape pressed to quit
    Quit,
    /// Any other key
    Other,
}

/// Result of processing adventure input.
#[derive(Debug, Clone, PartialEq)]
pub enum AdventureResult {
    /// Stay in the game; events describe what happened
    Continue(Vec<GameEvent>),
    /// Player quit the game
    Quit,
}

/// Applies one input event to the running session.
pub fn process_adventure_input<S: SessionStore, R: Rng>(
    session: &mut GameSession<S>,
    input: AdventureInput,
    rng: &mut R,
) -> io::Result<AdventureResult> {
    match input {
        AdventureInput::Slot(slot) => {
            let events = session.perform_slot(slot, rng)?;
            Ok(AdventureResult::Continue(events))
        }
        AdventureInput::CycleWeapon => {
            let events = match next_weapon(session) {
                Some(weapon) => session.select_weapon(weapon)?.into_iter().collect(),
                None => Vec::new(),
            };
            Ok(AdventureResult::Continue(events))
        }
        AdventureInput::Quit => Ok(AdventureResult::Quit),
        AdventureInput::Other => Ok(AdventureResult::Continue(Vec::new())),
    }
}

/// The owned weapon after the current selection, wrapping around.
/// `None` outside the fight or when nothing is owned.
fn next_weapon<S: SessionStore>(session: &GameSession<S>) -> Option<WeaponKind> {
    let state = session.state();
    if state.location != LocationId::Fight {
        return None;
    }

    let owned = state.inventory.owned_weapons();
    if owned.is_empty() {
        return None;
    }

    let next_index = match state
        .selected_weapon
        .and_then(|current| owned.iter().position(|w| *w == current))
    {
        Some(index) => (index + 1) % owned.len(),
        None => 0,
    };
    Some(owned[next_index])
}

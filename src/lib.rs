//! Arena - Terminal Text-Adventure Library
//!
//! This module exposes the game logic for testing and external use.

// Allow dead code in library - some functions are only used by the binary
#![allow(dead_code)]

pub mod build_info;
pub mod combat;
pub mod constants;
pub mod economy;
pub mod events;
pub mod game_logic;
pub mod game_state;
pub mod input;
pub mod location;
pub mod save_manager;
pub mod session;

// UI module is not exposed as it's tightly coupled to the terminal
mod ui;

pub use events::GameEvent;
pub use game_state::{GameState, Inventory, WeaponKind};
pub use location::{Action, LocationId};

//! Imposter Word terminal front end
//!
//! A pass-the-device party game for the terminal. Everyone at the table
//! shares one keyboard; each player in turn looks at their role, then
//! hands the device on.
//!
//! # Architecture
//!
//! - **App**: event loop mapping key presses to controller transitions
//! - **Screens**: one per game phase, each rendering from the controller
//! - **Config**: TOML file plus command-line overrides
//!
//! # Example
//!
//! ```
//! use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
//! use imposter_core::{FixedRoll, GameController, Phase, WordSuggestions};
//! use imposter_tui::App;
//!
//! let mut app = App::new(GameController::with_dice(FixedRoll(2)), WordSuggestions::default());
//! for c in "3".chars() {
//!     app.handle_key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE));
//! }
//! app.handle_key(KeyEvent::new(KeyCode::Tab, KeyModifiers::NONE));
//! for c in "Pizza".chars() {
//!     app.handle_key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE));
//! }
//! app.handle_key(KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE));
//! assert_eq!(app.game().phase(), Phase::AwaitingReveal);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod app;
mod cli;
mod config;
mod screen;
mod screens;
mod widgets;

// Crate-level exports - Event loop
pub use app::App;

// Crate-level exports - Configuration
pub use cli::Cli;
pub use config::{ConfigError, GameConfig};

// Crate-level exports - Screens
pub use screen::{Screen, ScreenAction};
pub use screens::{
    DiscussionScreen, PassDeviceScreen, ResultsScreen, RevealScreen, SetupField, SetupScreen,
};

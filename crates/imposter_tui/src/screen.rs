//! Screen trait and action type for the game table state machine.

use crossterm::event::KeyEvent;
use imposter_core::{GameController, RandomSource, SessionView};
use ratatui::Frame;

/// The result of handling a key on a screen.
///
/// Screens return this from [`Screen::handle_key`]; the
/// [`App`](crate::App) turns it into a controller transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScreenAction {
    /// Nothing for the controller to do.
    Stay,
    /// Submit the setup form.
    StartGame {
        /// Player count as typed.
        player_count: String,
        /// Secret word as typed.
        secret_word: String,
    },
    /// Fill the word field with a random suggestion.
    SuggestWord,
    /// Acknowledge the validation message.
    DismissError,
    /// Show the current player their role.
    RevealWord,
    /// Hide the role and pass the device.
    Advance,
    /// Show the results to the table.
    RevealResults,
    /// Start over from setup.
    PlayAgain,
    /// Exit the application.
    Quit,
}

/// Implemented by the screen for each game phase.
///
/// A screen only ever reads the controller; state changes go through the
/// returned [`ScreenAction`].
pub trait Screen {
    /// Renders the screen into the provided [`Frame`].
    fn render<S: RandomSource>(&self, frame: &mut Frame, game: &GameController<S>);

    /// Handles a key event and returns the resulting [`ScreenAction`].
    fn handle_key(&mut self, key: KeyEvent, view: &SessionView) -> ScreenAction;
}

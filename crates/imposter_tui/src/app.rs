//! App: the event loop tying key presses, screens, and the game controller.

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use imposter_core::{Dice, GameController, GameError, Phase, RandomSource, WordSuggestions};
use ratatui::{Frame, Terminal, backend::Backend};
use tokio::time::{Duration, sleep};
use tracing::{debug, info, instrument, warn};

use crate::config::GameConfig;
use crate::screen::{Screen, ScreenAction};
use crate::screens::{
    DiscussionScreen, PassDeviceScreen, ResultsScreen, RevealScreen, SetupScreen,
};

/// Active screen, one per game phase.
#[derive(Debug)]
enum ActiveScreen {
    Setup(SetupScreen),
    PassDevice(PassDeviceScreen),
    Reveal(RevealScreen),
    Discussion(DiscussionScreen),
    Results(ResultsScreen),
}

impl ActiveScreen {
    fn for_phase(phase: Phase) -> Self {
        match phase {
            Phase::Setup => Self::Setup(SetupScreen::new()),
            Phase::AwaitingReveal => Self::PassDevice(PassDeviceScreen),
            Phase::Revealing => Self::Reveal(RevealScreen),
            Phase::PendingFinish => Self::Discussion(DiscussionScreen),
            Phase::Complete => Self::Results(ResultsScreen),
        }
    }

    fn phase(&self) -> Phase {
        match self {
            Self::Setup(_) => Phase::Setup,
            Self::PassDevice(_) => Phase::AwaitingReveal,
            Self::Reveal(_) => Phase::Revealing,
            Self::Discussion(_) => Phase::PendingFinish,
            Self::Results(_) => Phase::Complete,
        }
    }
}

/// Terminal front end for one game table.
///
/// Call [`App::run`] to start the event loop, or drive it directly with
/// [`App::handle_key`] and [`App::render`].
#[derive(Debug)]
pub struct App<S = Dice> {
    game: GameController<S>,
    suggestions: WordSuggestions,
    screen: ActiveScreen,
    running: bool,
}

impl App<Dice> {
    /// Builds an app from loaded configuration.
    #[instrument(skip(config))]
    pub fn from_config(config: &GameConfig) -> Self {
        Self::new(GameController::with_dice(config.dice()), config.suggestions())
    }
}

impl<S: RandomSource> App<S> {
    /// Creates an app around an existing controller.
    #[instrument(skip_all)]
    pub fn new(game: GameController<S>, suggestions: WordSuggestions) -> Self {
        info!("Creating App");
        let screen = ActiveScreen::for_phase(game.phase());
        Self {
            game,
            suggestions,
            screen,
            running: true,
        }
    }

    /// The game being played.
    pub fn game(&self) -> &GameController<S> {
        &self.game
    }

    /// The setup form, while in setup.
    pub fn setup(&self) -> Option<&SetupScreen> {
        match &self.screen {
            ActiveScreen::Setup(s) => Some(s),
            _ => None,
        }
    }

    /// False once the player has asked to quit.
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Draws the screen for the current phase.
    pub fn render(&self, frame: &mut Frame) {
        match &self.screen {
            ActiveScreen::Setup(s) => s.render(frame, &self.game),
            ActiveScreen::PassDevice(s) => s.render(frame, &self.game),
            ActiveScreen::Reveal(s) => s.render(frame, &self.game),
            ActiveScreen::Discussion(s) => s.render(frame, &self.game),
            ActiveScreen::Results(s) => s.render(frame, &self.game),
        }
    }

    /// Routes a key press to the active screen and applies the result.
    #[instrument(skip(self, key), fields(phase = %self.game.phase()))]
    pub fn handle_key(&mut self, key: KeyEvent) {
        // Crossterm fires both press and release on some platforms.
        if key.kind == KeyEventKind::Release {
            return;
        }
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            info!("Ctrl+C pressed");
            self.running = false;
            return;
        }

        let view = self.game.view();
        let action = match &mut self.screen {
            ActiveScreen::Setup(s) => s.handle_key(key, &view),
            ActiveScreen::PassDevice(s) => s.handle_key(key, &view),
            ActiveScreen::Reveal(s) => s.handle_key(key, &view),
            ActiveScreen::Discussion(s) => s.handle_key(key, &view),
            ActiveScreen::Results(s) => s.handle_key(key, &view),
        };
        self.apply(action);
    }

    /// Applies a screen action to the controller, then syncs the screen.
    #[instrument(skip(self, action))]
    fn apply(&mut self, action: ScreenAction) {
        let result = match action {
            ScreenAction::Stay => return,
            ScreenAction::Quit => {
                info!("Quit requested");
                self.running = false;
                return;
            }
            ScreenAction::DismissError => {
                self.game.dismiss_error();
                return;
            }
            ScreenAction::SuggestWord => {
                let word = self.game.suggest_word(&self.suggestions);
                if let ActiveScreen::Setup(setup) = &mut self.screen {
                    setup.apply_suggestion(word);
                }
                return;
            }
            ScreenAction::StartGame {
                player_count,
                secret_word,
            } => self.game.start_game(&player_count, &secret_word),
            ScreenAction::RevealWord => self.game.reveal_word(),
            ScreenAction::Advance => self.game.advance(),
            ScreenAction::RevealResults => self.game.reveal_results(),
            ScreenAction::PlayAgain => self.game.reset(),
        };

        match result {
            Ok(phase) => debug!(%phase, "Transition applied"),
            Err(GameError::Validation(error)) => debug!(%error, "Setup rejected"),
            Err(error) => warn!(%error, "Action ignored"),
        }
        self.sync_screen();
    }

    fn sync_screen(&mut self) {
        let phase = self.game.phase();
        if self.screen.phase() != phase {
            debug!(from = %self.screen.phase(), to = %phase, "Switching screen");
            self.screen = ActiveScreen::for_phase(phase);
        }
    }

    /// Runs the event loop until the player quits.
    #[instrument(skip(self, terminal))]
    pub async fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> anyhow::Result<()>
    where
        <B as Backend>::Error: Send + Sync + 'static,
    {
        info!("Starting event loop");

        while self.running {
            terminal.draw(|f| self.render(f))?;

            // Short poll keeps the loop responsive.
            if event::poll(Duration::from_millis(100))?
                && let Event::Key(key) = event::read()?
            {
                self.handle_key(key);
            }

            sleep(Duration::from_millis(10)).await;
        }

        info!("Event loop finished");
        Ok(())
    }
}

use std::io;
use std::time::{Duration, Instant};

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{backend::Backend, Terminal};
use tracing::{debug, info};

use crate::config::AppConfig;
use crate::error::MoveError;
use crate::game::{GameSession, PieceColor, Seat, WIDTH};

/// Which screen is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Start,
    ColorSelection,
    Playing,
    GameOver,
}

/// State of the two color pickers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColorSelection {
    pub choices: [Option<PieceColor>; 2],
    pub focused: Seat,
    pub error: Option<String>,
}

impl ColorSelection {
    fn new(first: Option<PieceColor>, second: Option<PieceColor>) -> Self {
        ColorSelection {
            choices: [first, second],
            focused: Seat::First,
            error: None,
        }
    }

    /// Step the focused picker through "no color" and the palette.
    fn cycle(&mut self, forward: bool) {
        let slot = &mut self.choices[self.focused.index()];
        let len = PieceColor::ALL.len();
        let current = slot.and_then(|c| PieceColor::ALL.iter().position(|&p| p == c));
        *slot = match (current, forward) {
            (None, true) => Some(PieceColor::ALL[0]),
            (None, false) => Some(PieceColor::ALL[len - 1]),
            (Some(i), true) if i + 1 < len => Some(PieceColor::ALL[i + 1]),
            (Some(i), false) if i > 0 => Some(PieceColor::ALL[i - 1]),
            (Some(_), _) => None,
        };
    }
}

pub struct App {
    config: AppConfig,
    screen: Screen,
    selection: ColorSelection,
    session: Option<GameSession>,
    selected_column: usize,
    /// When the final move landed; the game-over screen waits for the delay.
    finished_at: Option<Instant>,
    game_over_message: String,
    message: Option<String>,
    should_quit: bool,
}

impl App {
    pub fn new(config: AppConfig) -> Self {
        let selection = ColorSelection::new(config.players.first, config.players.second);
        let selected_column = config.display.initial_column;
        App {
            config,
            screen: Screen::Start,
            selection,
            session: None,
            selected_column,
            finished_at: None,
            game_over_message: String::new(),
            message: None,
            should_quit: false,
        }
    }

    pub fn screen(&self) -> Screen {
        self.screen
    }

    pub fn session(&self) -> Option<&GameSession> {
        self.session.as_ref()
    }

    pub fn selection(&self) -> &ColorSelection {
        &self.selection
    }

    pub fn selected_column(&self) -> usize {
        self.selected_column
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    pub fn game_over_message(&self) -> &str {
        &self.game_over_message
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Main application loop
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()>
    where
        B::Error: Into<io::Error>,
    {
        loop {
            self.tick(Instant::now());
            terminal
                .draw(|f| self.render(f))
                .map_err(|e| io::Error::new(io::ErrorKind::Other, e.to_string()))?;

            if self.should_quit {
                break;
            }

            self.handle_events()?;
        }
        Ok(())
    }

    /// Handle keyboard events
    fn handle_events(&mut self) -> io::Result<()> {
        if event::poll(Duration::from_millis(50))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    self.handle_key(key);
                }
            }
        }
        Ok(())
    }

    /// Advance display timing: show the game-over screen once the delay
    /// after the final move has passed.
    pub fn tick(&mut self, now: Instant) {
        let Some(finished_at) = self.finished_at else {
            return;
        };
        let delay = Duration::from_millis(self.config.display.game_over_delay_ms);
        if now.saturating_duration_since(finished_at) >= delay {
            self.finished_at = None;
            self.screen = Screen::GameOver;
        }
    }

    /// Handle key press
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.code == KeyCode::Char('q') {
            self.should_quit = true;
            return;
        }

        match self.screen {
            Screen::Start => self.handle_start_key(key),
            Screen::ColorSelection => self.handle_selection_key(key),
            Screen::Playing => self.handle_game_key(key),
            Screen::GameOver => self.handle_game_over_key(key),
        }
    }

    fn handle_start_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Enter | KeyCode::Char(' ') => self.show_color_selection(),
            KeyCode::Esc => self.should_quit = true,
            _ => {}
        }
    }

    fn handle_selection_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Up | KeyCode::Down | KeyCode::Tab => {
                self.selection.focused = self.selection.focused.other();
            }
            KeyCode::Left => self.selection.cycle(false),
            KeyCode::Right => self.selection.cycle(true),
            KeyCode::Enter => self.start_game(),
            KeyCode::Esc => self.show_start(),
            _ => {}
        }
    }

    fn handle_game_key(&mut self, key: KeyEvent) {
        self.message = None;

        match key.code {
            KeyCode::Left => {
                self.selected_column = self.selected_column.saturating_sub(1);
            }
            KeyCode::Right => {
                if self.selected_column + 1 < WIDTH {
                    self.selected_column += 1;
                }
            }
            KeyCode::Enter | KeyCode::Char(' ') | KeyCode::Down => {
                self.drop_piece(self.selected_column);
            }
            KeyCode::Char(c @ '1'..='9') => {
                let col = c as usize - '1' as usize;
                self.drop_piece(col);
            }
            KeyCode::Esc => self.show_start(),
            _ => {}
        }
    }

    fn handle_game_over_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('s') | KeyCode::Enter => self.show_color_selection(),
            KeyCode::Char('r') => self.rematch(),
            KeyCode::Char('h') | KeyCode::Esc => self.show_start(),
            _ => {}
        }
    }

    fn show_start(&mut self) {
        self.session = None;
        self.finished_at = None;
        self.message = None;
        self.screen = Screen::Start;
    }

    fn show_color_selection(&mut self) {
        self.session = None;
        self.selection.error = None;
        self.selection.focused = Seat::First;
        self.screen = Screen::ColorSelection;
    }

    fn start_game(&mut self) {
        let [first, second] = self.selection.choices;
        match GameSession::from_selection(first, second) {
            Ok(session) => self.begin(session),
            Err(err) => self.selection.error = Some(err.to_string()),
        }
    }

    fn rematch(&mut self) {
        if let Some(session) = self.session.as_ref().map(GameSession::restart) {
            info!("rematch with the same players");
            self.begin(session);
        }
    }

    fn begin(&mut self, session: GameSession) {
        self.session = Some(session);
        self.selection.error = None;
        self.selected_column = self.config.display.initial_column;
        self.finished_at = None;
        self.message = None;
        self.screen = Screen::Playing;
    }

    /// Drop the active player's piece in `col`
    fn drop_piece(&mut self, col: usize) {
        let Some(session) = self.session.as_mut() else {
            return;
        };

        match session.request_move(col) {
            Ok(event) => {
                self.selected_column = col;
                if let Some(outcome) = event.outcome {
                    debug!(?outcome, "scheduling game-over screen");
                    self.game_over_message = outcome.message(session.players());
                    self.finished_at = Some(Instant::now());
                }
            }
            Err(MoveError::ColumnFull(_)) => {
                self.message =
                    Some("This column is full. Please choose a different column.".to_string());
            }
            Err(MoveError::InvalidColumn { .. }) => {
                self.message = Some("Invalid column!".to_string());
            }
            Err(MoveError::GameAlreadyOver) => {
                self.message = Some("Game is over!".to_string());
            }
            Err(err @ (MoveError::InvalidMove { .. } | MoveError::OutOfBounds { .. })) => {
                self.message = Some(err.to_string());
            }
        }
    }

    /// Render the UI
    fn render(&self, frame: &mut ratatui::Frame) {
        match self.screen {
            Screen::Start => super::menu_view::render_start(frame),
            Screen::ColorSelection => {
                super::menu_view::render_color_selection(frame, &self.selection)
            }
            Screen::Playing => {
                if let Some(session) = &self.session {
                    super::game_view::render(frame, session, self.selected_column, &self.message);
                }
            }
            Screen::GameOver => {
                super::menu_view::render_game_over(frame, &self.game_over_message, self.session())
            }
        }
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new(AppConfig::default())
    }
}

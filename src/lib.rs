//! # nature-explorer
//!
//! Browse a catalog of Indian plants with bilingual descriptions and take a
//! multiple-choice quiz about them, in the terminal or over HTTP.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use nature_explorer::{Explorer, Error};
//!
//! fn main() -> Result<(), Error> {
//!     // Load the catalog and question bank compiled into the crate
//!     let explorer = Explorer::bundled()?;
//!
//!     // Run the explorer in the terminal
//!     explorer.run()?;
//!
//!     Ok(())
//! }
//! ```

mod app;
pub mod catalog;
pub mod config;
mod data;
pub mod error;
pub mod logging;
mod models;
pub mod quiz;
pub mod server;
pub mod terminal;
mod ui;

use std::path::Path;

use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};
use tracing::info;

pub use app::App;
pub use catalog::Catalog;
pub use data::{
    bundled_catalog, bundled_question_bank, catalog_from_str, load_catalog_from_json,
    load_question_bank_from_json, question_bank_from_str,
};
pub use error::{CatalogError, DataError, Error, IntegrityError, QuizError};
pub use models::{AppState, Description, Language, PlantRecord, QuizQuestion};
pub use quiz::{QuestionBank, QuizSession};

/// The terminal explorer.
pub struct Explorer {
    app: App,
}

impl Explorer {
    pub fn new(catalog: Catalog, bank: QuestionBank) -> Self {
        Self {
            app: App::new(catalog, bank),
        }
    }

    /// Explorer over the catalog and question bank bundled with the crate.
    pub fn bundled() -> Result<Self, Error> {
        Ok(Self::new(bundled_catalog()?, bundled_question_bank()?))
    }

    /// Load an explorer from a plants file and a quiz file.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use nature_explorer::Explorer;
    ///
    /// let explorer = Explorer::from_json("data/plants.json", "data/quiz.json")
    ///     .expect("Failed to load data");
    /// ```
    pub fn from_json<P: AsRef<Path>, Q: AsRef<Path>>(plants: P, quiz: Q) -> Result<Self, Error> {
        let catalog = load_catalog_from_json(plants)?;
        let bank = load_question_bank_from_json(quiz)?;
        Ok(Self::new(catalog, bank))
    }

    /// Run the explorer in the terminal.
    ///
    /// This takes over the terminal and returns when the user quits.
    pub fn run(mut self) -> Result<(), Error> {
        let mut guard = terminal::TerminalGuard::enter()?;
        info!("terminal explorer started");
        run_event_loop(guard.terminal(), &mut self.app)
    }

    pub fn app(&self) -> &App {
        &self.app
    }

    pub fn app_mut(&mut self) -> &mut App {
        &mut self.app
    }
}

fn run_event_loop(terminal: &mut terminal::ExplorerTerminal, app: &mut App) -> Result<(), Error> {
    loop {
        terminal.draw(|frame| ui::render(frame, app))?;

        if let Event::Key(key) = event::read()? {
            if key.kind != KeyEventKind::Press {
                continue;
            }
            if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
                break;
            }
            if handle_input(app, key.code) {
                break;
            }
        }
    }

    Ok(())
}

/// Returns true if the explorer should exit.
pub fn handle_input(app: &mut App, key: KeyCode) -> bool {
    match app.state {
        AppState::Home => handle_home_input(app, key),
        AppState::Detail => handle_detail_input(app, key),
        AppState::Quiz => handle_quiz_input(app, key),
        AppState::Result => handle_result_input(app, key),
        AppState::About => handle_about_input(app, key),
    }
}

fn handle_home_input(app: &mut App, key: KeyCode) -> bool {
    match key {
        KeyCode::Esc => return true,
        KeyCode::Char(c) => app.push_search_char(c),
        KeyCode::Backspace => app.pop_search_char(),
        KeyCode::Tab => app.next_type_filter(),
        KeyCode::BackTab => app.previous_type_filter(),
        KeyCode::Down => app.select_next_plant(),
        KeyCode::Up => app.select_previous_plant(),
        KeyCode::Enter => app.open_selected_plant(),
        KeyCode::F(1) => app.show_about(),
        // The error is left on screen as a notice.
        KeyCode::F(2) => {
            let _ = app.start_quiz();
        }
        _ => {}
    }
    false
}

fn handle_detail_input(app: &mut App, key: KeyCode) -> bool {
    match key {
        KeyCode::Char('l') | KeyCode::Char('L') => app.toggle_language(),
        KeyCode::Esc | KeyCode::Backspace | KeyCode::Char('b') => app.go_home(),
        KeyCode::Char('q') | KeyCode::Char('Q') => return true,
        _ => {}
    }
    false
}

fn handle_quiz_input(app: &mut App, key: KeyCode) -> bool {
    match key {
        KeyCode::Up | KeyCode::Char('k') => app.select_previous_option(),
        KeyCode::Down | KeyCode::Char('j') => app.select_next_option(),
        KeyCode::Enter | KeyCode::Char(' ') => {
            // The cursor always points at one of the current options.
            let _ = app.submit_answer();
        }
        KeyCode::Char('n') => {
            let _ = app.next_question();
        }
        KeyCode::Esc => app.go_home(),
        KeyCode::Char('q') | KeyCode::Char('Q') => return true,
        _ => {}
    }
    false
}

fn handle_result_input(app: &mut App, key: KeyCode) -> bool {
    match key {
        KeyCode::Char('r') | KeyCode::Char('R') => {
            let _ = app.start_quiz();
        }
        KeyCode::Char('h') | KeyCode::Esc => app.go_home(),
        KeyCode::Char('q') | KeyCode::Char('Q') => return true,
        _ => {}
    }
    false
}

fn handle_about_input(app: &mut App, key: KeyCode) -> bool {
    match key {
        KeyCode::Esc | KeyCode::Backspace => app.go_home(),
        KeyCode::Char('q') | KeyCode::Char('Q') => return true,
        _ => {}
    }
    false
}

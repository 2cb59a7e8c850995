use tracing::{debug, warn};

use crate::catalog::Catalog;
use crate::error::{CatalogError, QuizError};
use crate::models::{AppState, Language, PlantRecord};
use crate::quiz::{Advance, QuestionBank, QuizSession};

/// State behind the terminal explorer: the catalog browser, plant detail and
/// the quiz flow.
pub struct App {
    pub state: AppState,
    catalog: Catalog,
    bank: QuestionBank,
    plant_types: Vec<String>,
    search_term: String,
    type_filter: Option<usize>,
    list_cursor: usize,
    detail_id: Option<u32>,
    language: Language,
    session: Option<QuizSession>,
    option_cursor: usize,
    notice: Option<String>,
}

impl App {
    pub fn new(catalog: Catalog, bank: QuestionBank) -> Self {
        let plant_types = catalog
            .distinct_types()
            .into_iter()
            .map(str::to_string)
            .collect();

        Self {
            state: AppState::Home,
            catalog,
            bank,
            plant_types,
            search_term: String::new(),
            type_filter: None,
            list_cursor: 0,
            detail_id: None,
            language: Language::default(),
            session: None,
            option_cursor: 0,
            notice: None,
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    /// The active type filter, or `""` for all types.
    pub fn selected_type(&self) -> &str {
        self.type_filter
            .and_then(|index| self.plant_types.get(index))
            .map_or("", String::as_str)
    }

    pub fn type_filter_label(&self) -> &str {
        match self.selected_type() {
            "" => "All Types",
            plant_type => plant_type,
        }
    }

    pub fn filtered_plants(&self) -> Vec<&PlantRecord> {
        self.catalog.query(&self.search_term, self.selected_type())
    }

    pub fn list_cursor(&self) -> usize {
        self.list_cursor
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn session(&self) -> Option<&QuizSession> {
        self.session.as_ref()
    }

    pub fn option_cursor(&self) -> usize {
        self.option_cursor
    }

    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    pub fn push_search_char(&mut self, c: char) {
        self.search_term.push(c);
        self.list_cursor = 0;
    }

    pub fn pop_search_char(&mut self) {
        self.search_term.pop();
        self.list_cursor = 0;
    }

    /// Cycle forward through "All Types" followed by each plant type.
    pub fn next_type_filter(&mut self) {
        self.type_filter = match self.type_filter {
            None if self.plant_types.is_empty() => None,
            None => Some(0),
            Some(index) if index + 1 < self.plant_types.len() => Some(index + 1),
            Some(_) => None,
        };
        self.list_cursor = 0;
    }

    pub fn previous_type_filter(&mut self) {
        self.type_filter = match self.type_filter {
            None => self.plant_types.len().checked_sub(1),
            Some(0) => None,
            Some(index) => Some(index - 1),
        };
        self.list_cursor = 0;
    }

    pub fn select_next_plant(&mut self) {
        let count = self.filtered_plants().len();
        if count > 0 {
            self.list_cursor = (self.list_cursor + 1) % count;
        }
    }

    pub fn select_previous_plant(&mut self) {
        let count = self.filtered_plants().len();
        if count > 0 {
            self.list_cursor = (self.list_cursor + count - 1) % count;
        }
    }

    /// Open the plant under the list cursor. Does nothing on an empty list.
    pub fn open_selected_plant(&mut self) {
        let id = self
            .filtered_plants()
            .get(self.list_cursor)
            .map(|plant| plant.id);
        if let Some(id) = id {
            self.open_plant(id);
        }
    }

    pub fn open_plant(&mut self, id: u32) {
        debug!(id, "opening plant detail");
        self.detail_id = Some(id);
        self.language = Language::default();
        self.state = AppState::Detail;
    }

    /// The plant being shown, or `None` when no plant has been opened.
    pub fn detail_plant(&self) -> Option<Result<&PlantRecord, CatalogError>> {
        self.detail_id.map(|id| self.catalog.get(id))
    }

    pub fn toggle_language(&mut self) {
        self.language = self.language.toggle();
    }

    pub fn go_home(&mut self) {
        self.state = AppState::Home;
        self.detail_id = None;
        self.notice = None;
    }

    pub fn show_about(&mut self) {
        self.state = AppState::About;
    }

    /// Start or restart the quiz with a fresh draw, replacing any session.
    pub fn start_quiz(&mut self) -> Result<(), QuizError> {
        match self.bank.start() {
            Ok(session) => {
                self.session = Some(session);
                self.option_cursor = 0;
                self.notice = None;
                self.state = AppState::Quiz;
                Ok(())
            }
            Err(err) => {
                warn!(%err, "could not start quiz");
                self.notice = Some(err.to_string());
                Err(err)
            }
        }
    }

    pub fn select_next_option(&mut self) {
        let count = self.option_count();
        if count > 0 {
            self.option_cursor = (self.option_cursor + 1) % count;
        }
    }

    pub fn select_previous_option(&mut self) {
        let count = self.option_count();
        if count > 0 {
            self.option_cursor = (self.option_cursor + count - 1) % count;
        }
    }

    /// Answer with the option under the cursor, or move on once answered.
    pub fn submit_answer(&mut self) -> Result<(), QuizError> {
        let Some(session) = self.session.as_mut() else {
            return Ok(());
        };

        if !session.is_answered() {
            let option = session.current_question().options[self.option_cursor].clone();
            session.select(&option)?;
            return Ok(());
        }

        match session.advance()? {
            Advance::NextQuestion => self.option_cursor = 0,
            Advance::Finished => self.state = AppState::Result,
        }
        Ok(())
    }

    /// Move past an answered question. Does nothing while it is unanswered.
    pub fn next_question(&mut self) -> Result<(), QuizError> {
        match self.session.as_ref() {
            Some(session) if session.is_answered() => self.submit_answer(),
            _ => Ok(()),
        }
    }

    fn option_count(&self) -> usize {
        self.session
            .as_ref()
            .filter(|session| !session.is_answered())
            .map_or(0, |session| session.current_question().options.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::{bundled_catalog, bundled_question_bank};

    fn app() -> App {
        App::new(bundled_catalog().unwrap(), bundled_question_bank().unwrap())
    }

    #[test]
    fn test_search_resets_cursor_and_filters() {
        let mut app = app();
        app.select_next_plant();
        assert_eq!(app.list_cursor(), 1);

        for c in "NEEM".chars() {
            app.push_search_char(c);
        }
        assert_eq!(app.list_cursor(), 0);
        let names: Vec<&str> = app.filtered_plants().iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["Neem"]);

        app.pop_search_char();
        assert_eq!(app.search_term(), "NEE");
    }

    #[test]
    fn test_type_filter_cycles_through_all_types() {
        let mut app = app();
        let types = app.catalog().distinct_types().len();
        assert_eq!(app.type_filter_label(), "All Types");

        app.next_type_filter();
        assert_eq!(app.selected_type(), "Medicinal");

        for _ in 0..types {
            app.next_type_filter();
        }
        assert_eq!(app.selected_type(), "");

        app.previous_type_filter();
        assert_eq!(app.selected_type(), app.catalog().distinct_types()[types - 1]);
    }

    #[test]
    fn test_open_selected_plant_on_empty_list_does_nothing() {
        let mut app = app();
        for c in "no such plant".chars() {
            app.push_search_char(c);
        }
        app.open_selected_plant();
        assert_eq!(app.state, AppState::Home);
    }

    #[test]
    fn test_unknown_detail_id_is_not_found() {
        let mut app = app();
        app.open_plant(999);
        assert_eq!(app.state, AppState::Detail);
        assert_eq!(
            app.detail_plant().unwrap().unwrap_err(),
            CatalogError::NotFound(999)
        );
    }

    #[test]
    fn test_no_detail_plant_before_opening() {
        let mut app = app();
        assert!(app.detail_plant().is_none());

        app.open_plant(1);
        app.go_home();
        assert!(app.detail_plant().is_none());
    }

    #[test]
    fn test_each_plant_opens_in_english() {
        let mut app = app();
        app.open_plant(1);
        app.toggle_language();
        assert_eq!(app.language(), Language::Hindi);

        app.go_home();
        app.open_plant(2);
        assert_eq!(app.language(), Language::English);
    }

    #[test]
    fn test_next_question_waits_for_an_answer() {
        let mut app = app();
        app.start_quiz().unwrap();

        app.next_question().unwrap();
        let session = app.session().unwrap();
        assert!(!session.is_answered());
        assert_eq!(session.current_index(), 0);

        app.submit_answer().unwrap();
        app.next_question().unwrap();
        let session = app.session().unwrap();
        assert!(!session.is_answered());
        assert_eq!(session.current_index(), 1);
    }

    #[test]
    fn test_quiz_flow_reaches_result() {
        let mut app = app();
        app.start_quiz().unwrap();
        let total = app.session().unwrap().len();

        for _ in 0..total {
            app.submit_answer().unwrap();
            app.submit_answer().unwrap();
        }

        assert_eq!(app.state, AppState::Result);
        let session = app.session().unwrap();
        assert!(session.is_finished());
        assert!(session.score() <= total);
    }

    #[test]
    fn test_empty_bank_leaves_notice() {
        let mut app = App::new(bundled_catalog().unwrap(), QuestionBank::default());
        assert_eq!(app.start_quiz().unwrap_err(), QuizError::EmptyBank);
        assert_eq!(app.state, AppState::Home);
        assert!(app.session().is_none());
        assert!(app.notice().is_some());
    }
}

//! Selection wizard state machine
//!
//! The wizard walks a fixed, forward-only sequence of steps. Each step owns a
//! widget ([`TextInput`] or [`Selector`]) that absorbs navigation and editing
//! input; only `Confirm` advances and only `Cancel` ends the session early.
//! Confirming the last step hands a [`ScaffoldRequest`] to the materializer.

mod input;
mod selector;
mod text_input;

pub use input::{Input, Widget};
pub use selector::Selector;
pub use text_input::TextInput;

use crate::catalog::{
    CodingStyle, ConfigStyle, Database, LoggerLibrary, OptionSet, Orm, PackageManager,
    SourceLanguage, TestFramework,
};
use crate::error::AppError;
use crate::templates::{Materialize, ScaffoldRequest};
use colored::Colorize;
use std::path::PathBuf;

/// Wizard steps, in visiting order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Welcome,
    ProjectName,
    Language,
    PackageManager,
    TestFramework,
    LoggerLibrary,
    Database,
    Orm,
    Config,
    CodingStyle,
    FolderStructure,
}

impl Step {
    pub const ALL: [Step; 11] = [
        Step::Welcome,
        Step::ProjectName,
        Step::Language,
        Step::PackageManager,
        Step::TestFramework,
        Step::LoggerLibrary,
        Step::Database,
        Step::Orm,
        Step::Config,
        Step::CodingStyle,
        Step::FolderStructure,
    ];

    /// The following step; the terminal step maps to itself
    pub fn next(self) -> Step {
        match self {
            Step::Welcome => Step::ProjectName,
            Step::ProjectName => Step::Language,
            Step::Language => Step::PackageManager,
            Step::PackageManager => Step::TestFramework,
            Step::TestFramework => Step::LoggerLibrary,
            Step::LoggerLibrary => Step::Database,
            Step::Database => Step::Orm,
            Step::Orm => Step::Config,
            Step::Config => Step::CodingStyle,
            Step::CodingStyle => Step::FolderStructure,
            Step::FolderStructure => Step::FolderStructure,
        }
    }

    pub fn is_terminal(self) -> bool {
        self == Step::FolderStructure
    }

    /// Zero-based position in [`Step::ALL`]
    pub fn index(self) -> usize {
        Step::ALL.iter().position(|s| *s == self).unwrap_or(0)
    }
}

/// Everything the user has chosen so far
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Answers {
    pub project_name: String,
    pub language: Option<SourceLanguage>,
    pub package_manager: Option<PackageManager>,
    pub test_framework: Option<TestFramework>,
    pub logger: Option<LoggerLibrary>,
    pub database: Option<Database>,
    pub orm: Option<Orm>,
    pub config: Option<ConfigStyle>,
    pub coding_style: Option<CodingStyle>,
}

impl Answers {
    pub fn request(&self) -> ScaffoldRequest {
        ScaffoldRequest::new(self.project_name.clone(), self.language)
    }

    fn summary(&self) -> Vec<(&'static str, String)> {
        fn label<T: OptionSet>(value: Option<T>) -> String {
            value.map(|v| v.label().to_string()).unwrap_or_else(|| "-".to_string())
        }

        vec![
            ("Project", self.project_name.clone()),
            ("Language", label(self.language)),
            ("Package manager", label(self.package_manager)),
            ("Test framework", label(self.test_framework)),
            ("Logger", label(self.logger)),
            ("Database", label(self.database)),
            ("ORM", label(self.orm)),
            ("Config", label(self.config)),
            ("Coding style", label(self.coding_style)),
        ]
    }
}

/// How a session ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Project materialized at this path
    Created(PathBuf),
    /// Materialization failed; the session is over
    Failed(AppError),
    Cancelled,
}

/// One scaffolding session
pub struct Wizard<M: Materialize> {
    step: Step,
    welcome: String,
    project_name: TextInput,
    language: Selector<SourceLanguage>,
    package_manager: Selector<PackageManager>,
    test_framework: Selector<TestFramework>,
    logger: Selector<LoggerLibrary>,
    database: Selector<Database>,
    orm: Selector<Orm>,
    config: Selector<ConfigStyle>,
    coding_style: Selector<CodingStyle>,
    answers: Answers,
    confirmation: Option<&'static str>,
    outcome: Option<Outcome>,
    materializer: M,
}

impl<M: Materialize> Wizard<M> {
    pub fn new(welcome: impl Into<String>, materializer: M) -> Self {
        Self {
            step: Step::Welcome,
            welcome: welcome.into(),
            project_name: TextInput::new("Enter your project name:", "my-express-app"),
            language: Selector::new(),
            package_manager: Selector::new(),
            test_framework: Selector::new(),
            logger: Selector::new(),
            database: Selector::new(),
            orm: Selector::new(),
            config: Selector::new(),
            coding_style: Selector::new(),
            answers: Answers::default(),
            confirmation: None,
            outcome: None,
            materializer,
        }
    }

    pub fn step(&self) -> Step {
        self.step
    }

    pub fn answers(&self) -> &Answers {
        &self.answers
    }

    pub fn outcome(&self) -> Option<&Outcome> {
        self.outcome.as_ref()
    }

    pub fn is_finished(&self) -> bool {
        self.outcome.is_some()
    }

    /// Error from the materializer, if the session ended with one
    pub fn last_error(&self) -> Option<&AppError> {
        match &self.outcome {
            Some(Outcome::Failed(err)) => Some(err),
            _ => None,
        }
    }

    pub fn materializer(&self) -> &M {
        &self.materializer
    }

    /// Feed one input event. Returns the outcome once the session ends;
    /// input after that is ignored.
    pub fn handle_input(&mut self, input: Input) -> Option<Outcome> {
        if self.outcome.is_some() {
            return None;
        }

        match input {
            Input::Cancel => self.finish(Outcome::Cancelled),
            Input::Confirm => self.confirm(),
            other => {
                if let Some(widget) = self.widget_mut() {
                    widget.handle_input(other);
                }
                None
            }
        }
    }

    fn confirm(&mut self) -> Option<Outcome> {
        self.confirmation = match self.step {
            Step::Welcome => {
                self.project_name.focus();
                None
            }
            Step::ProjectName => {
                self.answers.project_name = self.project_name.value().to_string();
                None
            }
            Step::Language => pick(&self.language, &mut self.answers.language),
            Step::PackageManager => {
                pick(&self.package_manager, &mut self.answers.package_manager)
            }
            Step::TestFramework => pick(&self.test_framework, &mut self.answers.test_framework),
            Step::LoggerLibrary => pick(&self.logger, &mut self.answers.logger),
            Step::Database => pick(&self.database, &mut self.answers.database),
            Step::Orm => pick(&self.orm, &mut self.answers.orm),
            Step::Config => pick(&self.config, &mut self.answers.config),
            Step::CodingStyle => pick(&self.coding_style, &mut self.answers.coding_style),
            Step::FolderStructure => {
                let outcome = match self.materializer.materialize(&self.answers.request()) {
                    Ok(path) => Outcome::Created(path),
                    Err(err) => Outcome::Failed(err),
                };
                return self.finish(outcome);
            }
        };

        self.step = self.step.next();
        None
    }

    fn finish(&mut self, outcome: Outcome) -> Option<Outcome> {
        self.outcome = Some(outcome.clone());
        Some(outcome)
    }

    fn widget_mut(&mut self) -> Option<&mut dyn Widget> {
        match self.step {
            Step::Welcome | Step::FolderStructure => None,
            Step::ProjectName => Some(&mut self.project_name),
            Step::Language => Some(&mut self.language),
            Step::PackageManager => Some(&mut self.package_manager),
            Step::TestFramework => Some(&mut self.test_framework),
            Step::LoggerLibrary => Some(&mut self.logger),
            Step::Database => Some(&mut self.database),
            Step::Orm => Some(&mut self.orm),
            Step::Config => Some(&mut self.config),
            Step::CodingStyle => Some(&mut self.coding_style),
        }
    }

    fn widget(&self) -> Option<&dyn Widget> {
        match self.step {
            Step::Welcome | Step::FolderStructure => None,
            Step::ProjectName => Some(&self.project_name),
            Step::Language => Some(&self.language),
            Step::PackageManager => Some(&self.package_manager),
            Step::TestFramework => Some(&self.test_framework),
            Step::LoggerLibrary => Some(&self.logger),
            Step::Database => Some(&self.database),
            Step::Orm => Some(&self.orm),
            Step::Config => Some(&self.config),
            Step::CodingStyle => Some(&self.coding_style),
        }
    }

    /// Render the current step as terminal text
    pub fn render(&self) -> String {
        let mut lines = Vec::new();

        if let Some(outcome) = &self.outcome {
            lines.push(match outcome {
                Outcome::Created(path) => {
                    format!("{} {}", "Project created at".green(), path.display())
                }
                Outcome::Failed(err) => err.to_string().red().to_string(),
                Outcome::Cancelled => "Setup cancelled.".yellow().to_string(),
            });
            return lines.join("\n");
        }

        if let Some(remark) = self.confirmation {
            lines.push(remark.green().to_string());
            lines.push(String::new());
        }

        match self.step {
            Step::Welcome => {
                lines.push(self.welcome.bold().to_string());
                lines.push(String::new());
                lines.push("Enter Start • Esc Quit".dimmed().to_string());
            }
            Step::FolderStructure => {
                lines.push("Ready to create your project".cyan().bold().to_string());
                lines.push(String::new());
                for (name, value) in self.answers.summary() {
                    lines.push(format!("  {:<16} {}", format!("{}:", name).dimmed(), value));
                }
                lines.push(String::new());
                lines.push("Enter Create • Esc Quit".dimmed().to_string());
            }
            Step::ProjectName => {
                if let Some(widget) = self.widget() {
                    lines.push(widget.render());
                }
                lines.push(String::new());
                lines.push("←→ Move • Enter Confirm • Esc Quit".dimmed().to_string());
            }
            _ => {
                if let Some(widget) = self.widget() {
                    lines.push(widget.render());
                    if !widget.is_complete() {
                        lines.push(String::new());
                        lines.push("Nothing selected; Enter skips this step".yellow().to_string());
                    }
                }
                lines.push(String::new());
                lines.push(
                    "↑↓ Navigate • Type to filter • Enter Confirm • Esc Quit"
                        .dimmed()
                        .to_string(),
                );
            }
        }

        lines.join("\n")
    }
}

/// Record the highlighted option (if any) and return its remark
fn pick<T: OptionSet>(selector: &Selector<T>, slot: &mut Option<T>) -> Option<&'static str> {
    *slot = selector.highlighted();
    slot.map(|option| option.remark())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ValidationKind;
    use std::cell::RefCell;

    /// Records every request instead of touching the filesystem
    #[derive(Default)]
    struct RecordingMaterializer {
        requests: RefCell<Vec<ScaffoldRequest>>,
        fail_with: Option<AppError>,
    }

    impl Materialize for RecordingMaterializer {
        fn materialize(&self, request: &ScaffoldRequest) -> Result<PathBuf, AppError> {
            self.requests.borrow_mut().push(request.clone());
            match &self.fail_with {
                Some(err) => Err(err.clone()),
                None => Ok(PathBuf::from(".expressify").join(&request.project_name)),
            }
        }
    }

    fn wizard() -> Wizard<RecordingMaterializer> {
        Wizard::new("Welcome", RecordingMaterializer::default())
    }

    fn type_str<M: Materialize>(wizard: &mut Wizard<M>, s: &str) {
        for c in s.chars() {
            assert!(wizard.handle_input(Input::Char(c)).is_none());
        }
    }

    #[test]
    fn test_ten_confirmations_reach_folder_structure() {
        let mut wizard = wizard();

        for (i, expected) in Step::ALL.iter().enumerate() {
            assert_eq!(wizard.step(), *expected);
            assert_eq!(wizard.step().index(), i);
            if !expected.is_terminal() {
                assert!(wizard.handle_input(Input::Confirm).is_none());
            }
        }

        assert_eq!(wizard.step(), Step::FolderStructure);
        assert!(wizard.materializer().requests.borrow().is_empty());
    }

    #[test]
    fn test_final_confirmation_materializes_once() {
        let mut wizard = wizard();
        wizard.handle_input(Input::Confirm);
        type_str(&mut wizard, "orders");
        for _ in 0..9 {
            wizard.handle_input(Input::Confirm);
        }

        let outcome = wizard.handle_input(Input::Confirm);

        assert_eq!(
            outcome,
            Some(Outcome::Created(PathBuf::from(".expressify/orders")))
        );
        assert_eq!(
            *wizard.materializer().requests.borrow(),
            vec![ScaffoldRequest::new("orders", Some(SourceLanguage::JavaScript))]
        );

        // Session is over; further input does nothing
        assert!(wizard.handle_input(Input::Confirm).is_none());
        assert_eq!(wizard.materializer().requests.borrow().len(), 1);
    }

    #[test]
    fn test_cancel_from_every_step_skips_materializer() {
        for stop_at in 0..Step::ALL.len() {
            let mut wizard = wizard();
            for _ in 0..stop_at {
                wizard.handle_input(Input::Confirm);
            }
            assert_eq!(wizard.step(), Step::ALL[stop_at]);

            assert_eq!(wizard.handle_input(Input::Cancel), Some(Outcome::Cancelled));
            assert!(wizard.is_finished());
            assert!(wizard.materializer().requests.borrow().is_empty());
            assert!(wizard.handle_input(Input::Confirm).is_none());
        }
    }

    #[test]
    fn test_answers_follow_highlighted_options() {
        let mut wizard = wizard();
        wizard.handle_input(Input::Confirm);
        type_str(&mut wizard, "billing");
        wizard.handle_input(Input::Confirm);

        // Language: TypeScript
        wizard.handle_input(Input::Down);
        wizard.handle_input(Input::Confirm);
        // Package manager: PNPM
        wizard.handle_input(Input::Up);
        wizard.handle_input(Input::Confirm);
        // Test framework: default
        wizard.handle_input(Input::Confirm);
        // Logger: Pino via filter
        type_str(&mut wizard, "pi");
        wizard.handle_input(Input::Confirm);
        // Database: PostgreSQL
        wizard.handle_input(Input::Down);
        wizard.handle_input(Input::Confirm);
        // ORM: Prisma
        type_str(&mut wizard, "prisma");
        wizard.handle_input(Input::Confirm);
        // Config, coding style: defaults
        wizard.handle_input(Input::Confirm);
        wizard.handle_input(Input::Confirm);

        let answers = wizard.answers();
        assert_eq!(answers.project_name, "billing");
        assert_eq!(answers.language, Some(SourceLanguage::TypeScript));
        assert_eq!(answers.package_manager, Some(PackageManager::Pnpm));
        assert_eq!(answers.test_framework, Some(TestFramework::SuperTestWithJest));
        assert_eq!(answers.logger, Some(LoggerLibrary::Pino));
        assert_eq!(answers.database, Some(Database::PostgreSQL));
        assert_eq!(answers.orm, Some(Orm::Prisma));
        assert_eq!(answers.config, Some(ConfigStyle::Dotenv));
        assert_eq!(answers.coding_style, Some(CodingStyle::EslintPrettier));
    }

    #[test]
    fn test_unhighlighted_confirm_leaves_slot_empty_and_advances() {
        let mut wizard = wizard();
        wizard.handle_input(Input::Confirm);
        wizard.handle_input(Input::Confirm);
        assert_eq!(wizard.step(), Step::Language);

        type_str(&mut wizard, "cobol");
        assert!(wizard.render().contains("Enter skips"));
        wizard.handle_input(Input::Confirm);

        assert_eq!(wizard.step(), Step::PackageManager);
        assert_eq!(wizard.answers().language, None);
    }

    #[test]
    fn test_later_slots_empty_until_visited() {
        let mut wizard = wizard();
        for _ in 0..4 {
            wizard.handle_input(Input::Confirm);
        }

        let answers = wizard.answers();
        assert_eq!(wizard.step(), Step::TestFramework);
        assert!(answers.language.is_some());
        assert!(answers.package_manager.is_some());
        assert!(answers.test_framework.is_none());
        assert!(answers.coding_style.is_none());
    }

    #[test]
    fn test_empty_project_name_is_passed_through() {
        let mut wizard = wizard();
        for _ in 0..11 {
            wizard.handle_input(Input::Confirm);
        }

        let requests = wizard.materializer().requests.borrow();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].project_name, "");
    }

    #[test]
    fn test_navigation_does_not_change_step() {
        let mut wizard = wizard();
        for input in [Input::Down, Input::Char('x'), Input::Backspace, Input::Left] {
            wizard.handle_input(input);
            assert_eq!(wizard.step(), Step::Welcome);
        }

        wizard.handle_input(Input::Confirm);
        for input in [Input::Up, Input::Down, Input::Char('a'), Input::Right] {
            wizard.handle_input(input);
            assert_eq!(wizard.step(), Step::ProjectName);
        }
        wizard.handle_input(Input::Confirm);
        assert_eq!(wizard.answers().project_name, "a");
    }

    #[test]
    fn test_materializer_error_is_stored() {
        let err = AppError::validation(
            ValidationKind::AlreadyExists,
            "Project already exists",
            "taken",
        );
        let mut wizard = Wizard::new(
            "Welcome",
            RecordingMaterializer {
                fail_with: Some(err.clone()),
                ..Default::default()
            },
        );
        for _ in 0..10 {
            wizard.handle_input(Input::Confirm);
        }

        assert_eq!(
            wizard.handle_input(Input::Confirm),
            Some(Outcome::Failed(err.clone()))
        );
        assert_eq!(wizard.last_error(), Some(&err));
        assert!(wizard.render().contains("Project already exists"));
    }

    #[test]
    fn test_render_shows_confirmation_then_next_widget() {
        let mut wizard = wizard();
        assert!(wizard.render().contains("Welcome"));

        wizard.handle_input(Input::Confirm);
        assert!(wizard.render().contains("Enter your project name:"));

        wizard.handle_input(Input::Confirm);
        wizard.handle_input(Input::Confirm);

        let rendered = wizard.render();
        assert!(rendered.contains("JavaScript brings flexibility"));
        assert!(rendered.contains("Choose a package manager"));
    }

    #[test]
    fn test_folder_structure_summary() {
        let mut wizard = wizard();
        wizard.handle_input(Input::Confirm);
        type_str(&mut wizard, "inventory");
        for _ in 0..9 {
            wizard.handle_input(Input::Confirm);
        }

        let rendered = wizard.render();
        assert!(rendered.contains("Ready to create your project"));
        assert!(rendered.contains("inventory"));
        assert!(rendered.contains("MongoDB"));
    }
}

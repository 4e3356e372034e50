//! Expressify Core - wizard and template materializer for Express scaffolding
//!
//! The library is organized into layers:
//!
//! - **Core operations** - [`templates`]: validation, directory creation and
//!   recursive byte-for-byte template copying
//! - **Workflow** - [`wizard`]: the step-by-step selection state machine, driven
//!   by abstract [`wizard::Input`] events and independent of any terminal
//! - **CLI/TUI interface** - [`tui`]: reads keys from the terminal and renders
//!   the wizard (feature-gated)
//!
//! # Feature Flags
//!
//! - `tui` (default): Enables the terminal driver built on `console` and `cliclack`
//!
//! # Example Usage (without TUI)
//!
//! ```ignore
//! use expressify_core::{Input, Wizard, TemplateMaterializer};
//!
//! let materializer = TemplateMaterializer::from_config(&MyConfig, &working_dir);
//! let mut wizard = Wizard::new("Welcome", materializer);
//! wizard.handle_input(Input::Confirm);
//! ```

pub mod catalog;
pub mod error;
pub mod product;
pub mod templates;
pub mod wizard;

#[cfg(feature = "tui")]
pub mod tui;

// Re-export main types for convenience
pub use catalog::{OptionSet, SourceLanguage};
pub use error::{AppError, ValidationKind};
pub use product::ProductConfig;
pub use templates::{
    bootstrap, working_dir, Materialize, ScaffoldRequest, TemplateMaterializer, TemplateSet,
};
pub use wizard::{Answers, Input, Outcome, Step, Wizard};

#[cfg(feature = "tui")]
pub use tui::run;

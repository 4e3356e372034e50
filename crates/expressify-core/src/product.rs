//! Product configuration trait for CLI binaries
//!
//! The binary implements this trait to name itself and to decide where
//! templates are read from and projects are written to.

use crate::wizard::Answers;
use std::path::Path;

/// Configuration trait for a scaffolding product
///
/// Implementations define:
/// - Product identity (name, display name, welcome text)
/// - Template and output directory names, relative to the working directory
/// - The optional bootstrap project copied before the wizard starts
/// - Post-setup instructions
pub trait ProductConfig: Clone + Send + Sync + 'static {
    /// Internal product name
    fn name(&self) -> &'static str;

    /// Human-readable display name
    fn display_name(&self) -> &'static str;

    /// Banner shown on the first wizard step
    fn welcome_message(&self) -> &'static str;

    /// CLI description shown in help text
    fn cli_description(&self) -> &'static str;

    /// Directory holding one subdirectory per template set
    fn templates_dir(&self) -> &'static str {
        ".templates"
    }

    /// Directory new projects are created in
    fn output_dir(&self) -> &'static str {
        ".expressify"
    }

    /// Project copied from the JavaScript template on every start, if any
    fn bootstrap_project(&self) -> Option<&'static str> {
        None
    }

    /// Generate the "next steps" instructions after project creation
    fn next_steps(&self, dir: &Path, answers: &Answers) -> Vec<String>;
}

#[cfg(test)]
pub(crate) mod testing {
    use super::*;

    #[derive(Clone)]
    pub struct TestConfig;

    impl ProductConfig for TestConfig {
        fn name(&self) -> &'static str {
            "test"
        }

        fn display_name(&self) -> &'static str {
            "Test"
        }

        fn welcome_message(&self) -> &'static str {
            "Welcome to the test scaffolder"
        }

        fn cli_description(&self) -> &'static str {
            "Test scaffolder"
        }

        fn bootstrap_project(&self) -> Option<&'static str> {
            Some("auth-service")
        }

        fn next_steps(&self, dir: &Path, _answers: &Answers) -> Vec<String> {
            vec![format!("cd {}", dir.display())]
        }
    }
}

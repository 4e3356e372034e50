//! Structured application errors
//!
//! Every fallible operation returns an [`AppError`]. Failures are wrapped once,
//! where they happen, and passed up unchanged; only the binary prints them.

use colored::Colorize;
use std::fmt;
use std::path::Path;

/// Which validation rule rejected the input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationKind {
    /// Something already exists at the destination path
    AlreadyExists,
    /// Project name is empty or too long
    InvalidName,
    /// Source language has no template set
    UnsupportedLanguage,
}

impl fmt::Display for ValidationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ValidationKind::AlreadyExists => "already exists",
            ValidationKind::InvalidName => "invalid name",
            ValidationKind::UnsupportedLanguage => "unsupported language",
        };
        write!(f, "{}", name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AppError {
    /// Bad user-supplied input
    #[error("[VALIDATION_ERROR] {message}: {detail}")]
    Validation {
        kind: ValidationKind,
        message: String,
        detail: String,
    },

    /// The environment failed us (filesystem, working directory)
    #[error("[SYSTEM_ERROR] {message}: {detail}")]
    System { message: String, detail: String },

    /// The interactive loop itself failed
    #[error("[RUNTIME_ERROR] {message}: {detail}")]
    Runtime { message: String, detail: String },
}

impl AppError {
    pub fn validation(
        kind: ValidationKind,
        message: impl Into<String>,
        detail: impl Into<String>,
    ) -> Self {
        AppError::Validation {
            kind,
            message: message.into(),
            detail: detail.into(),
        }
    }

    pub fn system(message: impl Into<String>, detail: impl Into<String>) -> Self {
        AppError::System {
            message: message.into(),
            detail: detail.into(),
        }
    }

    pub fn runtime(message: impl Into<String>, detail: impl Into<String>) -> Self {
        AppError::Runtime {
            message: message.into(),
            detail: detail.into(),
        }
    }

    /// System error for an I/O failure on a single path
    pub(crate) fn io(message: &str, action: &str, path: &Path, err: std::io::Error) -> Self {
        Self::system(
            message,
            format!("Error {} {}: {}", action, path.display(), err),
        )
    }

    /// Stable type tag, as printed in reports
    pub fn error_type(&self) -> &'static str {
        match self {
            AppError::Validation { .. } => "VALIDATION_ERROR",
            AppError::System { .. } => "SYSTEM_ERROR",
            AppError::Runtime { .. } => "RUNTIME_ERROR",
        }
    }

    /// HTTP-style status: 400 for validation, 500 for everything else
    pub fn code(&self) -> u16 {
        match self {
            AppError::Validation { .. } => 400,
            AppError::System { .. } | AppError::Runtime { .. } => 500,
        }
    }

    pub fn kind(&self) -> Option<ValidationKind> {
        match self {
            AppError::Validation { kind, .. } => Some(*kind),
            _ => None,
        }
    }

    pub fn message(&self) -> &str {
        match self {
            AppError::Validation { message, .. }
            | AppError::System { message, .. }
            | AppError::Runtime { message, .. } => message,
        }
    }

    pub fn detail(&self) -> &str {
        match self {
            AppError::Validation { detail, .. }
            | AppError::System { detail, .. }
            | AppError::Runtime { detail, .. } => detail,
        }
    }

    /// Four-line report printed on fatal exit
    pub fn report(&self) -> String {
        format!(
            "{} {}\n{} {}\n{} {}\n{} {}",
            "Error Type:".red().bold(),
            self.error_type(),
            "Message:".bold(),
            self.message(),
            "Detail:".bold(),
            self.detail(),
            "Code:".bold(),
            self.code()
        )
    }
}

//! Template copying and project materialization
//!
//! This module provides:
//! - Recursive byte-for-byte copying of template trees
//! - The materializer that validates a request and creates the project
//! - The bootstrap copy performed before the wizard starts

pub mod copier;
pub mod materializer;

use crate::error::AppError;
use crate::product::ProductConfig;
use std::path::{Path, PathBuf};

pub use copier::{copy_dir, copy_file};
pub use materializer::{
    validate_project_name, Materialize, ScaffoldRequest, TemplateMaterializer, TemplateSet,
    MAX_PROJECT_NAME_LEN,
};

/// Copy the JavaScript template into the product's bootstrap project.
///
/// Runs unconditionally on start for products that configure one. Unlike
/// [`Materialize::materialize`] it does not check for an existing project:
/// files already present are overwritten. Returns the bootstrap path, or
/// `None` when the product has no bootstrap project.
pub fn bootstrap<C: ProductConfig>(
    config: &C,
    working_dir: &Path,
) -> Result<Option<PathBuf>, AppError> {
    let Some(project) = config.bootstrap_project() else {
        return Ok(None);
    };

    let materializer = TemplateMaterializer::from_config(config, working_dir);
    let src = materializer.template_path(TemplateSet::JsBase);
    let dst = materializer.project_path(project);

    copy_dir(&src, &dst)?;

    Ok(Some(dst))
}

/// Current working directory, as a [`AppError::System`] on failure
pub fn working_dir() -> Result<PathBuf, AppError> {
    std::env::current_dir().map_err(|e| {
        AppError::system(
            "Failed to get working directory",
            format!("Error details: {}", e),
        )
    })
}

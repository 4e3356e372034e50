//! Project materialization: validate, create the project directory, copy the
//! template set for the chosen language

use crate::catalog::SourceLanguage;
use crate::error::{AppError, ValidationKind};
use crate::product::ProductConfig;
use crate::templates::copier;
use std::path::{Component, Path, PathBuf};

/// Longest accepted project name, in bytes
pub const MAX_PROJECT_NAME_LEN: usize = 214;

/// Finalized input to materialization
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScaffoldRequest {
    pub project_name: String,
    /// `None` when no supported language was chosen
    pub language: Option<SourceLanguage>,
}

impl ScaffoldRequest {
    pub fn new(project_name: impl Into<String>, language: Option<SourceLanguage>) -> Self {
        Self {
            project_name: project_name.into(),
            language,
        }
    }
}

/// Named template directory for one source language
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TemplateSet {
    JsBase,
    TsBase,
}

impl TemplateSet {
    pub fn for_language(language: Option<SourceLanguage>) -> Result<Self, AppError> {
        match language {
            Some(SourceLanguage::JavaScript) => Ok(TemplateSet::JsBase),
            Some(SourceLanguage::TypeScript) => Ok(TemplateSet::TsBase),
            None => Err(AppError::validation(
                ValidationKind::UnsupportedLanguage,
                "Invalid language selection",
                "No supported language selected. Use 'JavaScript' or 'TypeScript'",
            )),
        }
    }

    pub fn dir_name(&self) -> &'static str {
        match self {
            TemplateSet::JsBase => "jsbase",
            TemplateSet::TsBase => "tsbase",
        }
    }
}

/// Something that can turn a [`ScaffoldRequest`] into a project on disk
pub trait Materialize {
    /// Create the project, returning its path
    fn materialize(&self, request: &ScaffoldRequest) -> Result<PathBuf, AppError>;
}

/// Filesystem-backed materializer rooted at a working directory
#[derive(Debug, Clone)]
pub struct TemplateMaterializer {
    templates_root: PathBuf,
    output_root: PathBuf,
}

impl TemplateMaterializer {
    pub fn new(templates_root: PathBuf, output_root: PathBuf) -> Self {
        Self {
            templates_root,
            output_root,
        }
    }

    /// Resolve template and output directories under `working_dir`
    pub fn from_config<C: ProductConfig>(config: &C, working_dir: &Path) -> Self {
        Self::new(
            working_dir.join(config.templates_dir()),
            working_dir.join(config.output_dir()),
        )
    }

    /// Path of `project_name` under the output root
    ///
    /// Only the name's normal components are kept, so root, prefix and `..`
    /// parts never lead outside the output root.
    pub fn project_path(&self, project_name: &str) -> PathBuf {
        let mut path = self.output_root.clone();
        path.extend(
            Path::new(project_name)
                .components()
                .filter_map(|component| match component {
                    Component::Normal(part) => Some(part),
                    _ => None,
                }),
        );
        path
    }

    pub fn template_path(&self, set: TemplateSet) -> PathBuf {
        self.templates_root.join(set.dir_name())
    }
}

impl Materialize for TemplateMaterializer {
    fn materialize(&self, request: &ScaffoldRequest) -> Result<PathBuf, AppError> {
        let project_name = request.project_name.as_str();
        let project_path = self.project_path(project_name);
        let names_directory = project_path != self.output_root;

        if names_directory && project_path.symlink_metadata().is_ok() {
            return Err(AppError::validation(
                ValidationKind::AlreadyExists,
                "Project already exists",
                format!(
                    "A project with name '{}' already exists at path: {}",
                    project_name,
                    project_path.display()
                ),
            ));
        }

        validate_project_name(project_name)?;
        if !names_directory {
            return Err(AppError::validation(
                ValidationKind::InvalidName,
                "Invalid project name",
                format!(
                    "project name '{}' does not name a directory under {}",
                    project_name,
                    self.output_root.display()
                ),
            ));
        }

        create_project_dir(&project_path)?;

        let set = TemplateSet::for_language(request.language)?;

        copier::copy_dir(&self.template_path(set), &project_path)?;

        Ok(project_path)
    }
}

/// Reject empty names and names longer than [`MAX_PROJECT_NAME_LEN`]
pub fn validate_project_name(name: &str) -> Result<(), AppError> {
    if name.is_empty() {
        return Err(AppError::validation(
            ValidationKind::InvalidName,
            "Invalid project name",
            "project name cannot be empty",
        ));
    }
    if name.len() > MAX_PROJECT_NAME_LEN {
        return Err(AppError::validation(
            ValidationKind::InvalidName,
            "Invalid project name",
            format!(
                "project name too long (max {} characters)",
                MAX_PROJECT_NAME_LEN
            ),
        ));
    }
    Ok(())
}

fn create_project_dir(path: &Path) -> Result<(), AppError> {
    let mut builder = std::fs::DirBuilder::new();
    builder.recursive(true);

    #[cfg(unix)]
    {
        use std::os::unix::fs::DirBuilderExt;
        builder.mode(0o755);
    }

    builder.create(path).map_err(|e| {
        AppError::io(
            "Failed to create project directory",
            "creating directory at",
            path,
            e,
        )
    })
}

//! Validation error for the assembly pipeline

use thiserror::Error;

/// One reason a build or enrichment call was rejected
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationIssue {
    /// A required field is absent or empty
    Missing(&'static str),
    /// The declared source tag is not one of the known tags
    UnknownSource(String),
    /// Enrichment was requested before any structural build
    NotBuilt,
}

impl ValidationIssue {
    /// Name of the offending input field
    pub fn field(&self) -> &'static str {
        match self {
            Self::Missing(field) => *field,
            Self::UnknownSource(_) => "source",
            Self::NotBuilt => "record",
        }
    }
}

impl std::fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Missing(field) => write!(f, "missing required field '{}'", field),
            Self::UnknownSource(tag) => write!(f, "unknown source type '{}'", tag),
            Self::NotBuilt => write!(f, "no base record has been built"),
        }
    }
}

/// All the reasons an input was rejected, in input-field order.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("validation failed: {}", render_issues(.issues))]
pub struct ValidationError {
    issues: Vec<ValidationIssue>,
}

impl ValidationError {
    pub fn new(issues: Vec<ValidationIssue>) -> Self {
        Self { issues }
    }

    pub fn not_built() -> Self {
        Self::new(vec![ValidationIssue::NotBuilt])
    }

    pub fn issues(&self) -> &[ValidationIssue] {
        &self.issues
    }

    /// Offending field names, in order
    pub fn fields(&self) -> Vec<&'static str> {
        self.issues.iter().map(ValidationIssue::field).collect()
    }
}

fn render_issues(issues: &[ValidationIssue]) -> String {
    issues
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

/// Result type for assembly operations
pub type AssemblyResult<T> = Result<T, ValidationError>;

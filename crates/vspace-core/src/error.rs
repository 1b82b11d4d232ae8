//! Error types for vspace operations.
//!
//! Malformed input and training-data inconsistency are ordinary errors.
//! Comparing hypotheses built over different attribute sets is a
//! programming error; the panicking entry points document it and the
//! `try_` variants surface it as [`VspaceError::DomainMismatch`].

use std::fmt;

use thiserror::Error;

use crate::instance::Instance;
use crate::types::{Attribute, Value};

/// Result type for vspace operations.
pub type Result<T> = std::result::Result<T, VspaceError>;

/// Errors that can occur while loading, validating or reporting.
#[derive(Error, Debug, Clone)]
pub enum VspaceError {
    #[error("Domain error: {0}")]
    Domain(#[from] DomainError),

    #[error("Instance error: {0}")]
    Instance(#[from] InstanceError),

    #[error("Instance #{index}: {source}")]
    InvalidInstance { index: usize, source: InstanceError },

    #[error(transparent)]
    Training(#[from] TrainingInconsistency),

    #[error("Hypotheses range over different attribute sets")]
    DomainMismatch,

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("I/O error: {0}")]
    Io(String),
}

impl From<std::io::Error> for VspaceError {
    fn from(e: std::io::Error) -> Self {
        VspaceError::Io(e.to_string())
    }
}

impl From<serde_json::Error> for VspaceError {
    fn from(e: serde_json::Error) -> Self {
        VspaceError::Parse(e.to_string())
    }
}

/// Problems with a domain declaration.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("domain declares no attributes")]
    NoAttributes,

    #[error("attribute {0} declared twice")]
    DuplicateAttribute(Attribute),

    #[error("attribute {0} has no legal values")]
    NoValues(Attribute),

    #[error("attribute name {0} is reserved")]
    ReservedAttribute(Attribute),

    #[error("value {value} of attribute {attribute} collides with a hypothesis marker")]
    ReservedValue { attribute: Attribute, value: Value },
}

/// Problems with a single instance checked against its domain.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InstanceError {
    #[error("attribute {0} is in the domain but not in the instance")]
    MissingAttribute(Attribute),

    #[error("attribute {0} is not in the domain")]
    UnknownAttribute(Attribute),

    #[error("value {value} is not legal for attribute {attribute}")]
    IllegalValue { attribute: Attribute, value: Value },

    #[error("invalid label: {0}")]
    InvalidLabel(String),
}

/// Which boundary of the version space could not be maintained.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Boundary {
    /// A positive instance forced S above every member of G.
    General,
    /// A negative instance is accepted by S.
    Specific,
}

impl fmt::Display for Boundary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Boundary::General => write!(
                f,
                "no general-boundary hypothesis covers the generalized specific boundary"
            ),
            Boundary::Specific => write!(f, "the specific boundary accepts a negative instance"),
        }
    }
}

/// The labeled data cannot be explained by any single conjunctive hypothesis.
///
/// Raised by Candidate-Elimination; the learner stops at the offending
/// instance and its partial state is discarded.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Training set inconsistency at instance #{index} {instance}: {boundary}")]
pub struct TrainingInconsistency {
    /// Zero-based position of the offending instance in the training sequence.
    pub index: usize,
    pub instance: Instance,
    pub boundary: Boundary,
}

// Convenience constructors
impl VspaceError {
    pub fn parse(msg: impl Into<String>) -> Self {
        VspaceError::Parse(msg.into())
    }

    pub fn missing_section(section: &str) -> Self {
        VspaceError::Parse(format!("lacking section: {}", section))
    }
}

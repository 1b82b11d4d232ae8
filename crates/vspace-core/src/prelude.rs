//! vspace Core Prelude - convenient imports for common usage.
//!
//! ```rust
//! use vspace_core::prelude::*;
//! ```

// Re-export commonly used types
pub use crate::types::{Attribute, Value, Label, Domain, ANY_MARKER, EMPTY_MARKER};

pub use crate::instance::{Instance, InstanceCreator, RawRecord};

pub use crate::hypothesis::{
    Entry, Hypothesis, HypothesisBuilder,
    generalize_minimally, specialize_minimally_against, generate_all,
};

// Re-export error types
pub use crate::error::{
    VspaceError, Result,
    DomainError, InstanceError,
    TrainingInconsistency, Boundary,
};

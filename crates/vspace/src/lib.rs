//! # vspace
//!
//! Version-space concept learning over finite symbolic domains.
//!
//! Given attributes with enumerable values and a sequence of labeled
//! instances, vspace infers conjunctive hypotheses consistent with every
//! label, using one of three classical learners.
//!
//! ## Quick Start
//!
//! ```rust
//! use vspace::prelude::*;
//!
//! let domain = Domain::new([
//!     ("Sky", vec!["Sunny", "Rainy"]),
//!     ("Wind", vec!["Strong", "Weak"]),
//! ]).unwrap();
//!
//! let instances = vec![
//!     Instance::new(&domain, [("Sky", "Sunny"), ("Wind", "Strong")], Label::Positive).unwrap(),
//!     Instance::new(&domain, [("Sky", "Sunny"), ("Wind", "Weak")], Label::Positive).unwrap(),
//!     Instance::new(&domain, [("Sky", "Rainy"), ("Wind", "Strong")], Label::Negative).unwrap(),
//! ];
//!
//! let space = candidate_elimination(&instances, &domain).unwrap();
//! println!("{}", render_version_space(&space, &domain, 10).unwrap());
//! ```
//!
//! ## Architecture
//!
//! - [`vspace_core`] - Domain, instances, hypotheses and the generality lattice
//! - [`vspace_learn`] - The learners, version spaces, training files, reports
//!
//! ## Learners
//!
//! | Learner | Result | On inconsistent data |
//! |---------|--------|----------------------|
//! | Find-S | most specific hypothesis covering the positives | ignores negatives |
//! | List-Then-Eliminate | every consistent hypothesis | empty set |
//! | Candidate-Elimination | G and S boundaries | `TrainingInconsistency` error |
//!
//! ## Training Files
//!
//! ```rust,ignore
//! use vspace::prelude::*;
//! use std::path::Path;
//!
//! let set = TrainingSet::load(Path::new("training_sets/enjoy_sport.yaml")).unwrap();
//! let outcome = learn(Algorithm::CandidateElimination, &set.labeled(), set.domain()).unwrap();
//! ```

// Re-export all subcrates
pub use vspace_core as core;
pub use vspace_learn as learn;

/// Prelude module for convenient imports.
///
/// ```rust
/// use vspace::prelude::*;
/// ```
pub mod prelude {
    // Core types
    pub use vspace_core::types::{Attribute, Value, Label, Domain, ANY_MARKER, EMPTY_MARKER};
    pub use vspace_core::instance::{Instance, InstanceCreator, RawRecord};
    pub use vspace_core::hypothesis::{
        Entry, Hypothesis, HypothesisBuilder,
        generalize_minimally, specialize_minimally_against, generate_all,
    };

    // Error types
    pub use vspace_core::error::{
        VspaceError, Result,
        DomainError, InstanceError,
        TrainingInconsistency, Boundary,
    };

    // Learners
    pub use vspace_learn::algorithm::{
        find_s, list_then_eliminate, candidate_elimination, maximal_elements,
        learn, Algorithm, Outcome,
    };
    pub use vspace_learn::version_space::{VersionSpace, Verdict};

    // Training sets and reporting
    pub use vspace_learn::training_set::{TrainingSet, LabelCounts};
    pub use vspace_learn::report::{
        render_table, render_version_space, render_outcome, DEFAULT_COLUMN_WIDTH,
    };
}

/// Version information.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

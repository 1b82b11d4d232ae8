//! # vspace Learn
//!
//! Concept learners over the hypothesis lattice of [`vspace_core`]:
//!
//! - [`find_s`] - the most specific hypothesis covering the positives
//! - [`list_then_eliminate`] - brute-force enumeration of the version space
//! - [`candidate_elimination`] - the version space as its G and S boundaries
//!
//! plus training-set loading ([`TrainingSet`]) and fixed-width reporting.
//!
//! ```rust
//! use vspace_core::prelude::*;
//! use vspace_learn::{candidate_elimination, TrainingSet};
//!
//! let set = TrainingSet::from_yaml_str(r#"
//! domain:
//!   Sky: [Sunny, Rainy]
//!   Wind: [Strong, Weak]
//! instances:
//!   - {Sky: Sunny, Wind: Strong, label: true}
//!   - {Sky: Sunny, Wind: Weak, label: true}
//!   - {Sky: Rainy, Wind: Strong, label: false}
//! "#).unwrap();
//!
//! let space = candidate_elimination(&set.labeled(), set.domain()).unwrap();
//! assert_eq!(space.specific().to_string(), "< Sky:Sunny Wind:? >");
//! ```

pub mod algorithm;
pub mod report;
pub mod training_set;
pub mod version_space;

pub use algorithm::{
    candidate_elimination, find_s, learn, list_then_eliminate, maximal_elements, Algorithm, Outcome,
};
pub use report::{render_outcome, render_table, render_version_space, DEFAULT_COLUMN_WIDTH};
pub use training_set::{LabelCounts, TrainingSet};
pub use version_space::{Verdict, VersionSpace};

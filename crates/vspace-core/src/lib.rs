//! # vspace Core
//!
//! Types shared by every vspace crate:
//!
//! - **Domain** - attributes and the finite value set of each
//! - **Instance** - a validated, labeled assignment of one value per attribute
//! - **Hypothesis** - a conjunctive rule (value, `?` or `∅` per attribute),
//!   its generality order, and the minimal generalization/specialization
//!   operators the learners are built from
//!
//! ## Quick Start
//!
//! ```rust
//! use vspace_core::prelude::*;
//!
//! let domain = Domain::new([
//!     ("Sky", vec!["Sunny", "Rainy"]),
//!     ("Wind", vec!["Strong", "Weak"]),
//! ]).unwrap();
//!
//! let sunny = Instance::new(&domain, [("Sky", "Sunny"), ("Wind", "Weak")], Label::Positive).unwrap();
//! let h = generalize_minimally(&Hypothesis::most_specific(&domain), &sunny);
//! assert!(h.does_accept(&sunny));
//! ```

pub mod types;
pub mod instance;
pub mod hypothesis;
pub mod error;
pub mod prelude;

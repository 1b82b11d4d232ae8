//! List-Then-Eliminate: enumerate the whole hypothesis space and discard
//! everything a labeled instance contradicts.
//!
//! Cost is the size of the hypothesis space, the product of
//! `|values| + 1` over the attributes, so it only suits small domains.
//! Inconsistent training data simply leaves nothing behind.

use std::collections::BTreeSet;

use tracing::{debug, warn};
use vspace_core::prelude::*;

/// The exact version space for `instances`, possibly empty.
pub fn list_then_eliminate(instances: &[Instance], domain: &Domain) -> BTreeSet<Hypothesis> {
    let mut survivors = generate_all(domain);
    debug!(candidates = survivors.len(), "enumerated hypothesis space");

    for (index, instance) in instances.iter().enumerate() {
        if !instance.is_labeled() {
            warn!(index, "skipping unlabeled instance {}", instance);
            continue;
        }
        let should_accept = instance.label().is_positive();
        survivors.retain(|hypothesis| hypothesis.is_consistent(instance, should_accept));
        debug!(index, survivors = survivors.len(), "eliminated against {}", instance);
    }

    survivors
}

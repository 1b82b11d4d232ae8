//! Candidate-Elimination: maintain both boundaries of the version space.
//!
//! G holds the maximally general hypotheses consistent with every instance
//! seen so far, S the single maximally specific hypothesis consistent with
//! every positive one.
//!
//! - positive: drop members of G that reject it, generalize S minimally,
//!   then require some member of G to still cover S
//! - negative: S must reject it; every member of G is replaced by its
//!   minimal specializations that stay above S, and only the maximal
//!   elements of the result are kept

use std::collections::BTreeSet;

use tracing::{debug, trace, warn};
use vspace_core::prelude::*;

use crate::version_space::VersionSpace;

/// Run Candidate-Elimination over `instances` in order.
///
/// Stops at the first instance that no conjunctive hypothesis can explain.
pub fn candidate_elimination(
    instances: &[Instance],
    domain: &Domain,
) -> std::result::Result<VersionSpace, TrainingInconsistency> {
    let mut general = BTreeSet::from([Hypothesis::most_general(domain)]);
    let mut specific = Hypothesis::most_specific(domain);

    for (index, instance) in instances.iter().enumerate() {
        let boundary = match instance.label() {
            Label::Positive => absorb_positive(&mut general, &mut specific, instance),
            Label::Negative => absorb_negative(&mut general, &specific, instance, domain),
            Label::Unlabeled => {
                warn!(index, "skipping unlabeled instance {}", instance);
                continue;
            }
        };

        if let Err(boundary) = boundary {
            warn!(index, ?boundary, "training set inconsistency at {}", instance);
            return Err(TrainingInconsistency {
                index,
                instance: instance.clone(),
                boundary,
            });
        }

        debug!(
            index,
            general = general.len(),
            "S = {} after {}",
            specific,
            instance
        );
        for hypothesis in &general {
            trace!(index, "G member {}", hypothesis);
        }
    }

    Ok(VersionSpace::new(general, specific))
}

fn absorb_positive(
    general: &mut BTreeSet<Hypothesis>,
    specific: &mut Hypothesis,
    instance: &Instance,
) -> std::result::Result<(), Boundary> {
    general.retain(|hypothesis| hypothesis.is_consistent(instance, true));
    *specific = generalize_minimally(specific, instance);

    if general
        .iter()
        .any(|hypothesis| hypothesis.is_more_general_than(specific))
    {
        Ok(())
    } else {
        Err(Boundary::General)
    }
}

fn absorb_negative(
    general: &mut BTreeSet<Hypothesis>,
    specific: &Hypothesis,
    instance: &Instance,
    domain: &Domain,
) -> std::result::Result<(), Boundary> {
    if specific.does_accept(instance) {
        return Err(Boundary::Specific);
    }

    let candidates: BTreeSet<Hypothesis> = general
        .iter()
        .flat_map(|hypothesis| specialize_minimally_against(hypothesis, instance, domain))
        .filter(|hypothesis| hypothesis.is_more_general_than(specific))
        .collect();

    *general = maximal_elements(candidates);
    Ok(())
}

/// Keep exactly the hypotheses no other candidate is strictly more general than.
///
/// The result does not depend on iteration order.
pub fn maximal_elements(candidates: BTreeSet<Hypothesis>) -> BTreeSet<Hypothesis> {
    candidates
        .iter()
        .filter(|hypothesis| {
            !candidates
                .iter()
                .any(|other| other.is_strictly_more_general_than(hypothesis))
        })
        .cloned()
        .collect()
}

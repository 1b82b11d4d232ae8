//! Find-S: the most specific hypothesis consistent with the positive examples.

use tracing::{debug, warn};
use vspace_core::prelude::*;

/// Fold `generalize_minimally` over the positive instances, starting from
/// the all-`∅` hypothesis. Negative instances have no effect.
pub fn find_s(instances: &[Instance], domain: &Domain) -> Hypothesis {
    let mut hypothesis = Hypothesis::most_specific(domain);

    for (index, instance) in instances.iter().enumerate() {
        match instance.label() {
            Label::Positive => {
                hypothesis = generalize_minimally(&hypothesis, instance);
                debug!(index, "h = {}", hypothesis);
            }
            Label::Negative => {}
            Label::Unlabeled => warn!(index, "skipping unlabeled instance {}", instance),
        }
    }

    hypothesis
}

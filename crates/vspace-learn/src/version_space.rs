//! The boundary-set representation of a version space.

use serde::Serialize;
use std::collections::BTreeSet;
use std::fmt;

use vspace_core::prelude::*;

/// Everything between S and some member of G, inclusive.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VersionSpace {
    general: BTreeSet<Hypothesis>,
    specific: Hypothesis,
}

/// How the version space as a whole classifies an instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Verdict {
    /// Every member accepts it.
    Positive,
    /// Every member rejects it.
    Negative,
    /// Members disagree; more training data is needed.
    Undecided,
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Verdict::Positive => write!(f, "positive"),
            Verdict::Negative => write!(f, "negative"),
            Verdict::Undecided => write!(f, "undecided"),
        }
    }
}

impl VersionSpace {
    pub fn new(general: BTreeSet<Hypothesis>, specific: Hypothesis) -> Self {
        Self { general, specific }
    }

    /// The G boundary.
    pub fn general(&self) -> &BTreeSet<Hypothesis> {
        &self.general
    }

    /// The S boundary.
    pub fn specific(&self) -> &Hypothesis {
        &self.specific
    }

    pub fn into_parts(self) -> (BTreeSet<Hypothesis>, Hypothesis) {
        (self.general, self.specific)
    }

    /// Whether `hypothesis` lies between the boundaries.
    pub fn contains(&self, hypothesis: &Hypothesis) -> bool {
        hypothesis.is_more_general_than(&self.specific)
            && self
                .general
                .iter()
                .any(|general| general.is_more_general_than(hypothesis))
    }

    /// Enumerate the members explicitly. Exponential in the number of
    /// attributes, like List-Then-Eliminate.
    pub fn members(&self, domain: &Domain) -> BTreeSet<Hypothesis> {
        generate_all(domain)
            .into_iter()
            .filter(|hypothesis| self.contains(hypothesis))
            .collect()
    }

    /// Classify `instance` without enumerating members.
    ///
    /// Every member is above S and below some member of G, so S accepting
    /// means all members accept and no member of G accepting means all reject.
    pub fn classify(&self, instance: &Instance) -> Verdict {
        if self.specific.does_accept(instance) {
            Verdict::Positive
        } else if !self.general.iter().any(|general| general.does_accept(instance)) {
            Verdict::Negative
        } else {
            Verdict::Undecided
        }
    }
}

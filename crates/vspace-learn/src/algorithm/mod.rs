//! The three learners and a common entry point that dispatches between them.

mod candidate_elimination;
mod find_s;
mod list_then_eliminate;

pub use candidate_elimination::{candidate_elimination, maximal_elements};
pub use find_s::find_s;
pub use list_then_eliminate::list_then_eliminate;

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use tracing::info;
use vspace_core::prelude::*;

use crate::version_space::VersionSpace;

/// Which learner to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Algorithm {
    FindS,
    ListThenEliminate,
    CandidateElimination,
}

impl Algorithm {
    pub const ALL: [Algorithm; 3] = [
        Algorithm::FindS,
        Algorithm::ListThenEliminate,
        Algorithm::CandidateElimination,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Algorithm::FindS => "find-s",
            Algorithm::ListThenEliminate => "list-then-eliminate",
            Algorithm::CandidateElimination => "candidate-elimination",
        }
    }
}

impl Default for Algorithm {
    fn default() -> Self {
        Algorithm::CandidateElimination
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Algorithm {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase().replace('_', "-");
        Algorithm::ALL
            .into_iter()
            .find(|algorithm| algorithm.name() == wanted)
            .ok_or_else(|| {
                let names: Vec<&str> = Algorithm::ALL.iter().map(Algorithm::name).collect();
                format!("unknown algorithm '{}' (expected one of: {})", s, names.join(", "))
            })
    }
}

/// What a learner produced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Outcome {
    /// Find-S: a single most specific hypothesis.
    Hypothesis { hypothesis: Hypothesis },
    /// List-Then-Eliminate: every consistent hypothesis (maybe none).
    Hypotheses { hypotheses: BTreeSet<Hypothesis> },
    /// Candidate-Elimination: the two boundaries.
    VersionSpace { version_space: VersionSpace },
}

/// Run `algorithm` over `instances`.
///
/// Only Candidate-Elimination can fail; the other learners express
/// inconsistency through their result (Find-S ignores it, List-Then-Eliminate
/// returns an empty set).
pub fn learn(
    algorithm: Algorithm,
    instances: &[Instance],
    domain: &Domain,
) -> std::result::Result<Outcome, TrainingInconsistency> {
    info!(%algorithm, instances = instances.len(), attributes = domain.len(), "learning");

    let outcome = match algorithm {
        Algorithm::FindS => Outcome::Hypothesis {
            hypothesis: find_s(instances, domain),
        },
        Algorithm::ListThenEliminate => Outcome::Hypotheses {
            hypotheses: list_then_eliminate(instances, domain),
        },
        Algorithm::CandidateElimination => Outcome::VersionSpace {
            version_space: candidate_elimination(instances, domain)?,
        },
    };
    Ok(outcome)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn algorithm_names_round_trip() {
        for algorithm in Algorithm::ALL {
            assert_eq!(algorithm.name().parse::<Algorithm>().unwrap(), algorithm);
        }
        assert_eq!("Find_S".parse::<Algorithm>().unwrap(), Algorithm::FindS);
        assert!("id3".parse::<Algorithm>().is_err());
    }

    #[test]
    fn learn_dispatches() {
        let domain = Domain::new([("Sky", vec!["Sunny", "Rainy"])]).unwrap();
        let positive = Instance::new(&domain, [("Sky", "Sunny")], Label::Positive).unwrap();
        let instances = [positive];

        match learn(Algorithm::FindS, &instances, &domain).unwrap() {
            Outcome::Hypothesis { hypothesis } => {
                assert_eq!(hypothesis, Hypothesis::from_entries([("Sky", Entry::value("Sunny"))]))
            }
            other => panic!("unexpected outcome {:?}", other),
        }
        assert!(matches!(
            learn(Algorithm::ListThenEliminate, &instances, &domain).unwrap(),
            Outcome::Hypotheses { .. }
        ));
        assert!(matches!(
            learn(Algorithm::CandidateElimination, &instances, &domain).unwrap(),
            Outcome::VersionSpace { .. }
        ));
    }
}

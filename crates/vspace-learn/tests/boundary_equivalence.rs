//! The G/S boundaries from Candidate-Elimination describe exactly the set
//! List-Then-Eliminate enumerates.

use proptest::prelude::*;
use vspace_core::prelude::*;
use vspace_learn::{candidate_elimination, find_s, list_then_eliminate};

fn two_by_two() -> Domain {
    Domain::new([("A", vec!["a0", "a1"]), ("B", vec!["b0", "b1"])]).unwrap()
}

const ATTRIBUTES: [(&str, [&str; 3]); 3] = [
    ("Color", ["Red", "Green", "Blue"]),
    ("Shape", ["Round", "Square", "Star"]),
    ("Size", ["Small", "Medium", "Large"]),
];

fn three_by_three() -> Domain {
    Domain::new(ATTRIBUTES.iter().map(|(name, values)| (*name, values.to_vec()))).unwrap()
}

fn arb_instance() -> impl Strategy<Value = Instance> {
    (prop::array::uniform3(0usize..3), any::<bool>()).prop_map(|(picks, positive)| {
        let values = picks
            .iter()
            .enumerate()
            .map(|(i, pick)| (ATTRIBUTES[i].0, ATTRIBUTES[i].1[*pick]));
        Instance::new(&three_by_three(), values, Label::from_flag(positive)).unwrap()
    })
}

/// Sequences led by a positive instance, so S is satisfiable from the start.
fn arb_training_sequence() -> impl Strategy<Value = Vec<Instance>> {
    (arb_instance(), prop::collection::vec(arb_instance(), 0..7)).prop_map(|(first, rest)| {
        let mut sequence = vec![first.relabeled(Label::Positive)];
        sequence.extend(rest);
        sequence
    })
}

#[test]
fn every_realizable_pair_on_two_by_two() {
    let domain = two_by_two();
    let mut points = Vec::new();
    for a in ["a0", "a1"] {
        for b in ["b0", "b1"] {
            points.push((a, b));
        }
    }

    for &(pa, pb) in &points {
        for &(na, nb) in &points {
            if (pa, pb) == (na, nb) {
                continue;
            }
            let positive = Instance::new(&domain, [("A", pa), ("B", pb)], Label::Positive).unwrap();
            let negative = Instance::new(&domain, [("A", na), ("B", nb)], Label::Negative).unwrap();

            for sequence in [
                vec![positive.clone(), negative.clone()],
                vec![negative.clone(), positive.clone()],
            ] {
                let space = candidate_elimination(&sequence, &domain).unwrap();
                let enumerated = list_then_eliminate(&sequence, &domain);
                assert!(!enumerated.is_empty());
                assert_eq!(space.members(&domain), enumerated, "sequence {:?}", sequence);
            }
        }
    }
}

proptest! {
    #[test]
    fn boundaries_match_enumeration(sequence in arb_training_sequence()) {
        let domain = three_by_three();
        let enumerated = list_then_eliminate(&sequence, &domain);

        match candidate_elimination(&sequence, &domain) {
            Ok(space) => {
                prop_assert_eq!(space.members(&domain), enumerated);
                prop_assert_eq!(space.specific(), &find_s(&sequence, &domain));
                for general in space.general() {
                    for other in space.general() {
                        prop_assert!(!general.is_strictly_more_general_than(other));
                    }
                }
            }
            Err(_) => prop_assert!(enumerated.is_empty()),
        }
    }

    #[test]
    fn candidate_elimination_is_deterministic(sequence in arb_training_sequence()) {
        let domain = three_by_three();
        prop_assert_eq!(
            candidate_elimination(&sequence, &domain),
            candidate_elimination(&sequence, &domain)
        );
    }
}

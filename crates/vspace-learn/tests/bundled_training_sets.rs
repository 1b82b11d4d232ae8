//! The training sets shipped in the repository parse and are realizable.

use std::path::PathBuf;

use vspace_core::prelude::*;
use vspace_learn::{candidate_elimination, find_s, TrainingSet};

fn training_sets_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../training_sets")
}

fn load(name: &str) -> TrainingSet {
    TrainingSet::load(&training_sets_dir().join(name)).unwrap()
}

#[test]
fn every_bundled_set_is_consistent() {
    let mut seen = 0;
    for entry in std::fs::read_dir(training_sets_dir()).unwrap() {
        let path = entry.unwrap().path();
        if path.extension().and_then(|e| e.to_str()) != Some("yaml") {
            continue;
        }
        let set = TrainingSet::load(&path).unwrap();
        assert!(
            candidate_elimination(&set.labeled(), set.domain()).is_ok(),
            "{} is not realizable",
            path.display()
        );
        seen += 1;
    }
    assert!(seen >= 3);
}

#[test]
fn cars_concept_is_japanese_economy() {
    let set = load("cars.yaml");
    let h = find_s(&set.labeled(), set.domain());
    assert_eq!(
        h,
        Hypothesis::from_entries([
            ("origin", Entry::value("Japan")),
            ("manufacturer", Entry::Any),
            ("color", Entry::Any),
            ("decade", Entry::Any),
            ("type", Entry::value("Economy")),
        ])
    );
}

#[test]
fn cars_domain_keeps_file_order() {
    let set = load("cars.yaml");
    let names: Vec<&str> = set.domain().attributes().iter().map(Attribute::as_str).collect();
    assert_eq!(names, vec!["origin", "manufacturer", "color", "decade", "type"]);
}

//! Conjunctive hypotheses and the generality lattice over them.
//!
//! A hypothesis pins every attribute of a domain to one [`Entry`]: a
//! required value, the wildcard `?`, or the unsatisfiable marker `∅`.
//! Hypotheses are immutable values; new ones are produced through a
//! [`HypothesisBuilder`] by the generalization and specialization operators.
//!
//! The partial order "is more general than or equal to" (⪰):
//! `a ⪰ b` iff `b` accepts nothing, or every entry of `a` is `?` or equal
//! to the matching entry of `b`.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

use crate::error::{Result, VspaceError};
use crate::instance::Instance;
use crate::types::{Attribute, Domain, Value, ANY_MARKER, EMPTY_MARKER};

/// Per-attribute constraint inside a hypothesis.
///
/// Variant order follows generality: `Empty < Value(_) < Any`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Entry {
    /// Accepts no value; any such entry makes the hypothesis unsatisfiable.
    Empty,
    /// Accepts exactly this value.
    Value(Value),
    /// Accepts every value.
    Any,
}

impl Entry {
    pub fn value(value: impl Into<Value>) -> Self {
        Entry::Value(value.into())
    }

    pub fn is_any(&self) -> bool {
        matches!(self, Entry::Any)
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Entry::Empty)
    }

    /// Whether this entry lets `value` through.
    pub fn admits(&self, value: &Value) -> bool {
        match self {
            Entry::Any => true,
            Entry::Value(required) => required == value,
            Entry::Empty => false,
        }
    }
}

impl fmt::Display for Entry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Entry::Empty => f.write_str(EMPTY_MARKER),
            Entry::Value(value) => write!(f, "{}", value),
            Entry::Any => f.write_str(ANY_MARKER),
        }
    }
}

/// A conjunctive acceptance rule over the attributes of one domain.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Hypothesis {
    entries: BTreeMap<Attribute, Entry>,
}

impl Hypothesis {
    /// Create a boundary hypothesis over `attributes`.
    ///
    /// `strict` gives the maximally specific hypothesis (all `∅`), otherwise
    /// the maximally general one (all `?`).
    pub fn new<'a>(attributes: impl IntoIterator<Item = &'a Attribute>, strict: bool) -> Self {
        let fill = if strict { Entry::Empty } else { Entry::Any };
        let mut builder = HypothesisBuilder::new();
        for attribute in attributes {
            builder.set(attribute.clone(), fill.clone());
        }
        builder.build()
    }

    /// The all-`∅` hypothesis over `domain`; accepts nothing.
    pub fn most_specific(domain: &Domain) -> Self {
        Self::new(domain.attributes(), true)
    }

    /// The all-`?` hypothesis over `domain`; accepts everything.
    pub fn most_general(domain: &Domain) -> Self {
        Self::new(domain.attributes(), false)
    }

    /// Build directly from `(attribute, entry)` pairs.
    pub fn from_entries<A: Into<Attribute>>(entries: impl IntoIterator<Item = (A, Entry)>) -> Self {
        let mut builder = HypothesisBuilder::new();
        for (attribute, entry) in entries {
            builder.set(attribute, entry);
        }
        builder.build()
    }

    /// Start a builder pre-filled with this hypothesis' entries.
    pub fn to_builder(&self) -> HypothesisBuilder {
        HypothesisBuilder {
            entries: self.entries.clone(),
        }
    }

    pub fn entry(&self, attribute: &Attribute) -> Option<&Entry> {
        self.entries.get(attribute)
    }

    pub fn entries(&self) -> impl Iterator<Item = (&Attribute, &Entry)> {
        self.entries.iter()
    }

    pub fn attributes(&self) -> impl Iterator<Item = &Attribute> {
        self.entries.keys()
    }

    /// Number of wildcard entries.
    pub fn wildcard_count(&self) -> usize {
        self.entries.values().filter(|entry| entry.is_any()).count()
    }

    /// Whether both hypotheses range over the same attribute set.
    pub fn same_domain(&self, other: &Hypothesis) -> bool {
        self.entries.len() == other.entries.len()
            && self.entries.keys().zip(other.entries.keys()).all(|(a, b)| a == b)
    }

    /// Whether any entry is `∅`.
    pub fn is_unsatisfiable(&self) -> bool {
        self.entries.values().any(Entry::is_empty)
    }

    /// Whether the hypothesis classifies `instance` as positive.
    ///
    /// Fails closed: an unsatisfiable hypothesis accepts nothing.
    pub fn does_accept(&self, instance: &Instance) -> bool {
        if self.is_unsatisfiable() {
            return false;
        }
        self.entries.iter().all(|(attribute, entry)| {
            instance
                .value(attribute)
                .map_or(false, |value| entry.admits(value))
        })
    }

    /// Whether accepting or rejecting `instance` agrees with `should_accept`.
    pub fn is_consistent(&self, instance: &Instance, should_accept: bool) -> bool {
        self.does_accept(instance) == should_accept
    }

    /// `self ⪰ other`.
    ///
    /// # Panics
    ///
    /// Panics if the hypotheses range over different attribute sets.
    /// Use [`Hypothesis::try_is_more_general_than`] when that can happen.
    pub fn is_more_general_than(&self, other: &Hypothesis) -> bool {
        match self.try_is_more_general_than(other) {
            Ok(result) => result,
            Err(_) => panic!(
                "cannot compare hypotheses over different attribute sets: {} vs {}",
                self, other
            ),
        }
    }

    /// `self ⪰ other`, reporting a domain mismatch instead of panicking.
    pub fn try_is_more_general_than(&self, other: &Hypothesis) -> Result<bool> {
        if !self.same_domain(other) {
            return Err(VspaceError::DomainMismatch);
        }
        if other.is_unsatisfiable() {
            return Ok(true);
        }
        Ok(self
            .entries
            .values()
            .zip(other.entries.values())
            .all(|(own, against)| own.is_any() || own == against))
    }

    /// `self ⪰ other` and `self != other`.
    pub fn is_strictly_more_general_than(&self, other: &Hypothesis) -> bool {
        self != other && self.is_more_general_than(other)
    }
}

impl fmt::Display for Hypothesis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<")?;
        for (attribute, entry) in &self.entries {
            write!(f, " {}:{}", attribute, entry)?;
        }
        write!(f, " >")
    }
}

/// Accumulates entries and is finalized into an immutable [`Hypothesis`].
#[derive(Debug, Clone, Default)]
pub struct HypothesisBuilder {
    entries: BTreeMap<Attribute, Entry>,
}

impl HypothesisBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, attribute: impl Into<Attribute>, entry: Entry) -> &mut Self {
        self.entries.insert(attribute.into(), entry);
        self
    }

    pub fn with(mut self, attribute: impl Into<Attribute>, entry: Entry) -> Self {
        self.set(attribute, entry);
        self
    }

    pub fn build(self) -> Hypothesis {
        Hypothesis {
            entries: self.entries,
        }
    }
}

/// Smallest generalization of `hypothesis` that accepts a positive `instance`.
///
/// Unlabeled and negative instances, and instances already accepted, leave
/// the hypothesis unchanged. Otherwise `∅` entries take the instance's value
/// and conflicting values widen to `?`.
pub fn generalize_minimally(hypothesis: &Hypothesis, instance: &Instance) -> Hypothesis {
    if !instance.label().is_positive() || hypothesis.does_accept(instance) {
        return hypothesis.clone();
    }

    let mut builder = hypothesis.to_builder();
    for (attribute, entry) in hypothesis.entries() {
        let Some(value) = instance.value(attribute) else {
            panic!("instance does not assign attribute {}", attribute);
        };
        match entry {
            Entry::Any => {}
            Entry::Value(required) if required == value => {}
            Entry::Empty => {
                builder.set(attribute.clone(), Entry::Value(value.clone()));
            }
            Entry::Value(_) => {
                builder.set(attribute.clone(), Entry::Any);
            }
        }
    }
    builder.build()
}

/// Minimal specializations of `hypothesis` that reject `instance`.
///
/// A hypothesis that already rejects the instance is returned on its own.
/// Otherwise each wildcard attribute is pinned, in turn, to every legal value
/// other than the instance's own.
pub fn specialize_minimally_against(
    hypothesis: &Hypothesis,
    instance: &Instance,
    domain: &Domain,
) -> BTreeSet<Hypothesis> {
    if hypothesis.is_consistent(instance, false) {
        return BTreeSet::from([hypothesis.clone()]);
    }

    let mut stricter = BTreeSet::new();
    for (attribute, entry) in hypothesis.entries() {
        if !entry.is_any() {
            continue;
        }
        let (Some(instance_value), Some(legal)) = (instance.value(attribute), domain.values(attribute))
        else {
            panic!("attribute {} is missing from the instance or domain", attribute);
        };
        for value in legal.iter().filter(|value| *value != instance_value) {
            stricter.insert(
                hypothesis
                    .to_builder()
                    .with(attribute.clone(), Entry::Value(value.clone()))
                    .build(),
            );
        }
    }
    stricter
}

/// Every hypothesis over `domain`: the Cartesian product of each attribute's
/// values plus `?`, together with the all-`∅` hypothesis.
///
/// The result has [`Domain::hypothesis_space_size`] members.
pub fn generate_all(domain: &Domain) -> BTreeSet<Hypothesis> {
    let mut partial = vec![HypothesisBuilder::new()];
    for (attribute, values) in domain.iter() {
        let choices: Vec<Entry> = values
            .iter()
            .cloned()
            .map(Entry::Value)
            .chain(std::iter::once(Entry::Any))
            .collect();
        partial = partial
            .into_iter()
            .flat_map(|prefix| {
                choices
                    .iter()
                    .map(move |choice| prefix.clone().with(attribute.clone(), choice.clone()))
            })
            .collect();
    }

    let mut all: BTreeSet<Hypothesis> = partial.into_iter().map(HypothesisBuilder::build).collect();
    all.insert(Hypothesis::most_specific(domain));
    all
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Label;

    fn weather() -> Domain {
        Domain::new([("Sky", vec!["Sunny", "Rainy"]), ("Wind", vec!["Strong", "Weak"])]).unwrap()
    }

    fn instance(sky: &str, wind: &str, label: Label) -> Instance {
        Instance::new(&weather(), [("Sky", sky), ("Wind", wind)], label).unwrap()
    }

    fn hyp(sky: Entry, wind: Entry) -> Hypothesis {
        Hypothesis::from_entries([("Sky", sky), ("Wind", wind)])
    }

    #[test]
    fn boundary_constructors() {
        let domain = weather();
        let specific = Hypothesis::most_specific(&domain);
        let general = Hypothesis::most_general(&domain);

        assert!(specific.is_unsatisfiable());
        assert!(!general.is_unsatisfiable());
        assert_eq!(general.wildcard_count(), 2);
        assert_eq!(specific, Hypothesis::new(domain.attributes(), true));
    }

    #[test]
    fn unsatisfiable_accepts_nothing() {
        let partial = hyp(Entry::Any, Entry::Empty);
        assert!(!partial.does_accept(&instance("Sunny", "Weak", Label::Positive)));
        assert!(!partial.does_accept(&instance("Rainy", "Strong", Label::Negative)));
    }

    #[test]
    fn acceptance_checks_every_entry() {
        let h = hyp(Entry::value("Sunny"), Entry::Any);
        assert!(h.does_accept(&instance("Sunny", "Weak", Label::Unlabeled)));
        assert!(!h.does_accept(&instance("Rainy", "Weak", Label::Unlabeled)));
        assert!(h.is_consistent(&instance("Rainy", "Weak", Label::Negative), false));
    }

    #[test]
    fn generality_order() {
        let top = hyp(Entry::Any, Entry::Any);
        let mid = hyp(Entry::value("Sunny"), Entry::Any);
        let low = hyp(Entry::value("Sunny"), Entry::value("Weak"));
        let bottom = hyp(Entry::Empty, Entry::Empty);

        assert!(top.is_more_general_than(&mid));
        assert!(mid.is_more_general_than(&low));
        assert!(!low.is_more_general_than(&mid));
        assert!(low.is_more_general_than(&bottom));
        assert!(mid.is_more_general_than(&mid));
        assert!(!mid.is_strictly_more_general_than(&mid));
        assert!(top.is_strictly_more_general_than(&low));
        assert!(!bottom.is_more_general_than(&low));
    }

    #[test]
    fn incomparable_hypotheses() {
        let a = hyp(Entry::value("Sunny"), Entry::Any);
        let b = hyp(Entry::Any, Entry::value("Weak"));
        assert!(!a.is_more_general_than(&b));
        assert!(!b.is_more_general_than(&a));
    }

    #[test]
    fn domain_mismatch_is_reported() {
        let a = hyp(Entry::Any, Entry::Any);
        let b = Hypothesis::from_entries([("Sky", Entry::Any)]);
        assert!(matches!(
            a.try_is_more_general_than(&b),
            Err(VspaceError::DomainMismatch)
        ));
    }

    #[test]
    #[should_panic(expected = "different attribute sets")]
    fn domain_mismatch_panics_on_plain_comparison() {
        let a = hyp(Entry::Any, Entry::Any);
        let b = Hypothesis::from_entries([("Temp", Entry::Any), ("Wind", Entry::Any)]);
        a.is_more_general_than(&b);
    }

    #[test]
    fn generalize_from_bottom_copies_instance() {
        let bottom = Hypothesis::most_specific(&weather());
        let h = generalize_minimally(&bottom, &instance("Sunny", "Strong", Label::Positive));
        assert_eq!(h, hyp(Entry::value("Sunny"), Entry::value("Strong")));
    }

    #[test]
    fn generalize_widens_conflicts() {
        let h = hyp(Entry::value("Sunny"), Entry::value("Strong"));
        let widened = generalize_minimally(&h, &instance("Sunny", "Weak", Label::Positive));
        assert_eq!(widened, hyp(Entry::value("Sunny"), Entry::Any));
        assert!(widened.is_more_general_than(&h));
    }

    #[test]
    fn generalize_ignores_negative_unlabeled_and_accepted() {
        let h = hyp(Entry::value("Sunny"), Entry::Any);
        assert_eq!(generalize_minimally(&h, &instance("Rainy", "Weak", Label::Negative)), h);
        assert_eq!(generalize_minimally(&h, &instance("Rainy", "Weak", Label::Unlabeled)), h);
        assert_eq!(generalize_minimally(&h, &instance("Sunny", "Weak", Label::Positive)), h);
    }

    #[test]
    fn specialize_pins_each_wildcard() {
        let domain = weather();
        let top = Hypothesis::most_general(&domain);
        let negative = instance("Rainy", "Strong", Label::Negative);

        let specs = specialize_minimally_against(&top, &negative, &domain);
        let expected = BTreeSet::from([
            hyp(Entry::value("Sunny"), Entry::Any),
            hyp(Entry::Any, Entry::value("Weak")),
        ]);
        assert_eq!(specs, expected);
        for spec in &specs {
            assert!(!spec.does_accept(&negative));
            assert!(top.is_strictly_more_general_than(spec));
        }
    }

    #[test]
    fn specialize_keeps_rejecting_hypothesis() {
        let domain = weather();
        let h = hyp(Entry::value("Sunny"), Entry::Any);
        let specs = specialize_minimally_against(&h, &instance("Rainy", "Weak", Label::Negative), &domain);
        assert_eq!(specs, BTreeSet::from([h]));
    }

    #[test]
    fn specialize_only_touches_wildcards() {
        let domain = weather();
        let h = hyp(Entry::value("Sunny"), Entry::Any);
        let specs =
            specialize_minimally_against(&h, &instance("Sunny", "Weak", Label::Negative), &domain);
        assert_eq!(
            specs,
            BTreeSet::from([hyp(Entry::value("Sunny"), Entry::value("Strong"))])
        );
    }

    #[test]
    fn generate_all_enumerates_product_and_bottom() {
        let domain = weather();
        let all = generate_all(&domain);
        assert_eq!(all.len() as u128, domain.hypothesis_space_size());
        assert!(all.contains(&Hypothesis::most_general(&domain)));
        assert!(all.contains(&Hypothesis::most_specific(&domain)));
        assert!(all.contains(&hyp(Entry::value("Rainy"), Entry::Any)));
    }

    #[test]
    fn display_uses_markers() {
        let h = hyp(Entry::value("Sunny"), Entry::Any);
        assert_eq!(h.to_string(), "< Sky:Sunny Wind:? >");
        assert_eq!(Entry::Empty.to_string(), "∅");
    }

    #[test]
    fn builder_leaves_source_untouched() {
        let h = hyp(Entry::value("Sunny"), Entry::Any);
        let pinned = h.to_builder().with("Wind", Entry::value("Weak")).build();
        assert_eq!(h.entry(&"Wind".into()), Some(&Entry::Any));
        assert_eq!(pinned.entry(&"Wind".into()), Some(&Entry::value("Weak")));
    }
}

//! Shared vocabulary used across every vspace crate.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

use crate::error::DomainError;

/// Rendered form of the wildcard entry.
pub const ANY_MARKER: &str = "?";

/// Rendered form of the unsatisfiable entry.
pub const EMPTY_MARKER: &str = "∅";

/// Key reserved for the label inside raw training records.
pub const LABEL_KEY: &str = "label";

/// A named dimension of an instance (e.g. `Sky`).
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Attribute(pub String);

impl Attribute {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Attribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Attribute {
    fn from(name: &str) -> Self {
        Self(name.to_string())
    }
}

impl From<String> for Attribute {
    fn from(name: String) -> Self {
        Self(name)
    }
}

/// A legal setting for an attribute.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Value(pub String);

impl Value {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether this value would render the same as a hypothesis sentinel.
    pub fn is_reserved(&self) -> bool {
        self.0 == ANY_MARKER || self.0 == EMPTY_MARKER
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Self(value)
    }
}

/// Label attached to a training instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Label {
    /// Member of the target concept.
    Positive,
    /// Not a member of the target concept.
    Negative,
    /// No label given; carries no training evidence.
    Unlabeled,
}

impl Label {
    /// Map a boolean training flag onto a label.
    pub fn from_flag(flag: bool) -> Self {
        if flag {
            Label::Positive
        } else {
            Label::Negative
        }
    }

    pub fn is_labeled(&self) -> bool {
        !matches!(self, Label::Unlabeled)
    }

    pub fn is_positive(&self) -> bool {
        matches!(self, Label::Positive)
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Label::Positive => write!(f, "POSITIVE"),
            Label::Negative => write!(f, "NEGATIVE"),
            Label::Unlabeled => write!(f, "UNLABELED"),
        }
    }
}

/// The attributes of a learning problem and the values each may take.
///
/// Attribute order is the order they were declared in, which is also the
/// column order used when hypotheses are reported.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<(Attribute, BTreeSet<Value>)>", into = "Vec<(Attribute, BTreeSet<Value>)>")]
pub struct Domain {
    attributes: Vec<Attribute>,
    values: BTreeMap<Attribute, BTreeSet<Value>>,
}

impl Domain {
    /// Build a validated domain from `(attribute, values)` pairs.
    pub fn new<A, V, I, S>(entries: I) -> Result<Self, DomainError>
    where
        I: IntoIterator<Item = (A, S)>,
        S: IntoIterator<Item = V>,
        A: Into<Attribute>,
        V: Into<Value>,
    {
        let mut attributes = Vec::new();
        let mut values = BTreeMap::new();

        for (attribute, attribute_values) in entries {
            let attribute = attribute.into();
            if attribute.as_str() == LABEL_KEY {
                return Err(DomainError::ReservedAttribute(attribute));
            }
            if values.contains_key(&attribute) {
                return Err(DomainError::DuplicateAttribute(attribute));
            }

            let set: BTreeSet<Value> = attribute_values.into_iter().map(Into::into).collect();
            if set.is_empty() {
                return Err(DomainError::NoValues(attribute));
            }
            if let Some(reserved) = set.iter().find(|value| value.is_reserved()) {
                return Err(DomainError::ReservedValue {
                    attribute,
                    value: reserved.clone(),
                });
            }

            attributes.push(attribute.clone());
            values.insert(attribute, set);
        }

        if attributes.is_empty() {
            return Err(DomainError::NoAttributes);
        }

        Ok(Self { attributes, values })
    }

    /// Attributes in declaration order.
    pub fn attributes(&self) -> &[Attribute] {
        &self.attributes
    }

    /// Legal values of `attribute`, if it belongs to this domain.
    pub fn values(&self, attribute: &Attribute) -> Option<&BTreeSet<Value>> {
        self.values.get(attribute)
    }

    pub fn contains(&self, attribute: &Attribute) -> bool {
        self.values.contains_key(attribute)
    }

    /// Iterate `(attribute, values)` in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (&Attribute, &BTreeSet<Value>)> {
        self.attributes
            .iter()
            .filter_map(move |attribute| self.values.get(attribute).map(|set| (attribute, set)))
    }

    pub fn len(&self) -> usize {
        self.attributes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.attributes.is_empty()
    }

    /// Number of syntactically distinct hypotheses over this domain:
    /// the product of `|values| + 1` plus the unsatisfiable one.
    pub fn hypothesis_space_size(&self) -> u128 {
        self.values
            .values()
            .fold(1u128, |acc, set| acc.saturating_mul(set.len() as u128 + 1))
            .saturating_add(1)
    }

    /// Whether `attributes` is exactly this domain's attribute set.
    pub fn has_attribute_set<'a>(&self, attributes: impl IntoIterator<Item = &'a Attribute>) -> bool {
        let given: BTreeSet<&Attribute> = attributes.into_iter().collect();
        given.len() == self.values.len() && given.iter().all(|a| self.values.contains_key(*a))
    }
}

impl TryFrom<Vec<(Attribute, BTreeSet<Value>)>> for Domain {
    type Error = DomainError;

    fn try_from(entries: Vec<(Attribute, BTreeSet<Value>)>) -> Result<Self, Self::Error> {
        Domain::new(entries)
    }
}

impl From<Domain> for Vec<(Attribute, BTreeSet<Value>)> {
    fn from(domain: Domain) -> Self {
        let Domain { attributes, mut values } = domain;
        attributes
            .into_iter()
            .map(|attribute| {
                let set = values.remove(&attribute).unwrap_or_default();
                (attribute, set)
            })
            .collect()
    }
}

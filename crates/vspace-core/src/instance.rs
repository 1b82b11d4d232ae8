//! Labeled assignments of one value per domain attribute.

use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;

use crate::error::InstanceError;
use crate::types::{Attribute, Domain, Label, Value, LABEL_KEY};

/// An immutable, validated assignment of one value to every domain attribute.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Instance {
    values: BTreeMap<Attribute, Value>,
    label: Label,
}

impl Instance {
    /// Validate `values` against `domain` and build an instance.
    ///
    /// Every domain attribute must be present with a legal value and no
    /// other attribute may appear.
    pub fn new<A, V>(
        domain: &Domain,
        values: impl IntoIterator<Item = (A, V)>,
        label: Label,
    ) -> Result<Self, InstanceError>
    where
        A: Into<Attribute>,
        V: Into<Value>,
    {
        let values: BTreeMap<Attribute, Value> = values
            .into_iter()
            .map(|(attribute, value)| (attribute.into(), value.into()))
            .collect();

        for (attribute, legal) in domain.iter() {
            let value = values
                .get(attribute)
                .ok_or_else(|| InstanceError::MissingAttribute(attribute.clone()))?;
            if !legal.contains(value) {
                return Err(InstanceError::IllegalValue {
                    attribute: attribute.clone(),
                    value: value.clone(),
                });
            }
        }

        if let Some(extra) = values.keys().find(|attribute| !domain.contains(attribute)) {
            return Err(InstanceError::UnknownAttribute(extra.clone()));
        }

        Ok(Self { values, label })
    }

    pub fn label(&self) -> Label {
        self.label
    }

    pub fn is_labeled(&self) -> bool {
        self.label.is_labeled()
    }

    pub fn value(&self, attribute: &Attribute) -> Option<&Value> {
        self.values.get(attribute)
    }

    /// Iterate `(attribute, value)` in attribute order.
    pub fn values(&self) -> impl Iterator<Item = (&Attribute, &Value)> {
        self.values.iter()
    }

    /// The same assignment carrying a different label.
    pub fn relabeled(&self, label: Label) -> Self {
        Self {
            values: self.values.clone(),
            label,
        }
    }
}

impl fmt::Display for Instance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Label: {} <", self.label)?;
        for (attribute, value) in &self.values {
            write!(f, " {}:{}", attribute, value)?;
        }
        write!(f, " >")
    }
}

/// A raw record as read from a training file: attribute → textual value,
/// plus an optional label field.
pub type RawRecord = BTreeMap<String, String>;

/// Builds validated instances for a fixed domain.
#[derive(Debug, Clone)]
pub struct InstanceCreator<'a> {
    domain: &'a Domain,
}

impl<'a> InstanceCreator<'a> {
    pub fn new(domain: &'a Domain) -> Self {
        Self { domain }
    }

    pub fn domain(&self) -> &Domain {
        self.domain
    }

    /// Pull the `label` field out of `record` and validate the rest.
    pub fn create_instance(&self, mut record: RawRecord) -> Result<Instance, InstanceError> {
        let label = match record.remove(LABEL_KEY) {
            Some(raw) => parse_label(&raw)?,
            None => Label::Unlabeled,
        };
        Instance::new(self.domain, record, label)
    }
}

/// Interpret the textual form of a label field.
pub fn parse_label(raw: &str) -> Result<Label, InstanceError> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "true" | "yes" | "positive" | "+" => Ok(Label::Positive),
        "false" | "no" | "negative" | "-" => Ok(Label::Negative),
        _ => Err(InstanceError::InvalidLabel(raw.to_string())),
    }
}

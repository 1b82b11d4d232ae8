//! Training-set files: a domain declaration plus a list of instances.
//!
//! ```yaml
//! domain:
//!   Sky: [Sunny, Rainy]
//!   Wind: [Strong, Weak]
//! instances:
//!   - {Sky: Sunny, Wind: Strong, label: true}
//!   - {Sky: Rainy, Wind: Weak}
//! ```
//!
//! Attribute order in `domain` is kept. Scalars may be strings, numbers or
//! booleans. An instance without `label` is unlabeled.

use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::Path;

use tracing::debug;
use vspace_core::prelude::*;

/// A parsed and validated training set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrainingSet {
    domain: Domain,
    instances: Vec<Instance>,
}

/// Label counts of a training set.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LabelCounts {
    pub positive: usize,
    pub negative: usize,
    pub unlabeled: usize,
}

#[derive(Debug, Deserialize)]
struct RawTrainingSet {
    domain: Option<serde_yaml::Mapping>,
    instances: Option<Vec<BTreeMap<String, Scalar>>>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
enum Scalar {
    Flag(bool),
    Integer(i64),
    Float(f64),
    Text(String),
}

impl Scalar {
    fn into_text(self) -> String {
        match self {
            Scalar::Flag(flag) => flag.to_string(),
            Scalar::Integer(n) => n.to_string(),
            Scalar::Float(x) => x.to_string(),
            Scalar::Text(text) => text,
        }
    }
}

impl TrainingSet {
    pub fn new(domain: Domain, instances: Vec<Instance>) -> Self {
        Self { domain, instances }
    }

    /// Read a training set, choosing JSON for `.json` files and YAML otherwise.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let is_json = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map_or(false, |ext| ext.eq_ignore_ascii_case("json"));

        let set = if is_json {
            Self::from_json_str(&content)?
        } else {
            Self::from_yaml_str(&content)?
        };
        debug!(
            path = %path.display(),
            attributes = set.domain.len(),
            instances = set.instances.len(),
            "loaded training set"
        );
        Ok(set)
    }

    pub fn from_yaml_str(content: &str) -> Result<Self> {
        let raw: RawTrainingSet =
            serde_yaml::from_str(content).map_err(|e| VspaceError::parse(e.to_string()))?;
        Self::from_raw(raw)
    }

    pub fn from_json_str(content: &str) -> Result<Self> {
        let raw: RawTrainingSet = serde_json::from_str(content)?;
        Self::from_raw(raw)
    }

    fn from_raw(raw: RawTrainingSet) -> Result<Self> {
        let mapping = raw.domain.ok_or_else(|| VspaceError::missing_section("domain"))?;
        let records = raw
            .instances
            .ok_or_else(|| VspaceError::missing_section("instances"))?;

        let mut entries = Vec::with_capacity(mapping.len());
        for (key, values) in mapping {
            let attribute = scalar_from_yaml(key)?.into_text();
            let values: Vec<Scalar> = serde_yaml::from_value(values).map_err(|e| {
                VspaceError::parse(format!("values of attribute {}: {}", attribute, e))
            })?;
            entries.push((attribute, values.into_iter().map(Scalar::into_text).collect::<Vec<_>>()));
        }
        let domain = Domain::new(entries)?;

        let creator = InstanceCreator::new(&domain);
        let instances = records
            .into_iter()
            .enumerate()
            .map(|(index, record)| {
                let record: RawRecord = record
                    .into_iter()
                    .map(|(attribute, value)| (attribute, value.into_text()))
                    .collect();
                creator
                    .create_instance(record)
                    .map_err(|source| VspaceError::InvalidInstance { index, source })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self { domain, instances })
    }

    pub fn domain(&self) -> &Domain {
        &self.domain
    }

    /// All instances in file order, labeled or not.
    pub fn instances(&self) -> &[Instance] {
        &self.instances
    }

    /// The labeled instances in file order; what the learners are fed.
    pub fn labeled(&self) -> Vec<Instance> {
        self.instances
            .iter()
            .filter(|instance| instance.is_labeled())
            .cloned()
            .collect()
    }

    pub fn unlabeled(&self) -> impl Iterator<Item = &Instance> {
        self.instances.iter().filter(|instance| !instance.is_labeled())
    }

    pub fn label_counts(&self) -> LabelCounts {
        self.instances
            .iter()
            .fold(LabelCounts::default(), |mut counts, instance| {
                match instance.label() {
                    Label::Positive => counts.positive += 1,
                    Label::Negative => counts.negative += 1,
                    Label::Unlabeled => counts.unlabeled += 1,
                }
                counts
            })
    }
}

fn scalar_from_yaml(value: serde_yaml::Value) -> Result<Scalar> {
    serde_yaml::from_value(value).map_err(|e| VspaceError::parse(format!("attribute name: {}", e)))
}

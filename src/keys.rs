// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Key registration: turning caller field specs into a uniform id space.
//!
//! Callers describe searchable fields in whichever form is convenient: a
//! dotted path, a list of segments, a path with a weight, or a custom
//! accessor function. All of them become a [`Key`] whose `id` is the path
//! joined with `.`, so `"author.name"` and `["author", "name"]` land on the
//! same id. Records are keyed by that id, which is why ids must be unique
//! within one [`KeyRegistry`].

use crate::config::KEY_PATH_DELIMITER;
use crate::error::{IndexError, Result};
use crate::extract::{self, Extracted};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

const DEFAULT_KEY_WEIGHT: f64 = 1.0;

// =============================================================================
// ACCESSOR
// =============================================================================

/// Signature of a custom field accessor.
pub type AccessorFn = dyn Fn(&Value) -> Option<Extracted> + Send + Sync;

/// Custom extraction function that replaces path lookup for one key.
#[derive(Clone)]
pub struct Accessor(Arc<AccessorFn>);

impl Accessor {
    pub fn new<F>(f: F) -> Self
    where
        F: Fn(&Value) -> Option<Extracted> + Send + Sync + 'static,
    {
        Accessor(Arc::new(f))
    }

    #[inline]
    pub fn call(&self, document: &Value) -> Option<Extracted> {
        (self.0)(document)
    }
}

impl fmt::Debug for Accessor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Accessor(..)")
    }
}

// =============================================================================
// KEY
// =============================================================================

/// A registered, searchable field.
///
/// Equality ignores the accessor: two keys with the same path, id and weight
/// describe the same field even if one was restored from a snapshot.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Key {
    pub path: Vec<String>,
    pub id: String,
    pub weight: f64,
    #[serde(skip)]
    pub accessor: Option<Accessor>,
}

impl PartialEq for Key {
    fn eq(&self, other: &Self) -> bool {
        self.path == other.path && self.id == other.id && self.weight == other.weight
    }
}

impl Key {
    /// Value(s) this key selects from `document`.
    pub fn resolve(&self, document: &Value) -> Option<Extracted> {
        match &self.accessor {
            Some(accessor) => accessor.call(document),
            None => extract::get(document, &self.path),
        }
    }
}

// =============================================================================
// KEY SPECS
// =============================================================================

/// Path part of a key spec: dotted string or explicit segments.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum KeyName {
    Dotted(String),
    Segments(Vec<String>),
}

impl KeyName {
    fn segments(&self) -> Vec<String> {
        match self {
            KeyName::Dotted(name) if name.is_empty() => Vec::new(),
            KeyName::Dotted(name) => name.split(KEY_PATH_DELIMITER).map(str::to_owned).collect(),
            KeyName::Segments(segments) => segments.clone(),
        }
    }

    fn display(&self) -> String {
        match self {
            KeyName::Dotted(name) => name.clone(),
            KeyName::Segments(segments) => segments.join(KEY_PATH_DELIMITER),
        }
    }
}

impl From<&str> for KeyName {
    fn from(name: &str) -> Self {
        KeyName::Dotted(name.to_owned())
    }
}

impl From<Vec<String>> for KeyName {
    fn from(segments: Vec<String>) -> Self {
        KeyName::Segments(segments)
    }
}

/// Caller-facing description of a key, before validation.
///
/// Deserializes from `"a.b"`, `["a", "b"]` or `{"name": "a.b", "weight": 2}`.
/// Accessor specs only exist in code.
#[derive(Debug, Clone, Deserialize)]
#[serde(from = "RawKeySpec")]
pub enum KeySpec {
    Path(String),
    Segments(Vec<String>),
    Weighted {
        name: KeyName,
        weight: f64,
    },
    Accessor {
        name: KeyName,
        weight: f64,
        accessor: Accessor,
    },
}

impl KeySpec {
    pub fn weighted(name: impl Into<KeyName>, weight: f64) -> Self {
        KeySpec::Weighted {
            name: name.into(),
            weight,
        }
    }

    pub fn accessor<F>(name: impl Into<KeyName>, weight: f64, f: F) -> Self
    where
        F: Fn(&Value) -> Option<Extracted> + Send + Sync + 'static,
    {
        KeySpec::Accessor {
            name: name.into(),
            weight,
            accessor: Accessor::new(f),
        }
    }
}

impl From<&str> for KeySpec {
    fn from(path: &str) -> Self {
        KeySpec::Path(path.to_owned())
    }
}

impl From<String> for KeySpec {
    fn from(path: String) -> Self {
        KeySpec::Path(path)
    }
}

impl From<Vec<String>> for KeySpec {
    fn from(segments: Vec<String>) -> Self {
        KeySpec::Segments(segments)
    }
}

impl From<(&str, f64)> for KeySpec {
    fn from((name, weight): (&str, f64)) -> Self {
        KeySpec::weighted(name, weight)
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawKeySpec {
    Path(String),
    Segments(Vec<String>),
    Weighted {
        name: KeyName,
        #[serde(default = "default_key_weight")]
        weight: f64,
    },
}

fn default_key_weight() -> f64 {
    DEFAULT_KEY_WEIGHT
}

impl From<RawKeySpec> for KeySpec {
    fn from(raw: RawKeySpec) -> Self {
        match raw {
            RawKeySpec::Path(path) => KeySpec::Path(path),
            RawKeySpec::Segments(segments) => KeySpec::Segments(segments),
            RawKeySpec::Weighted { name, weight } => KeySpec::Weighted { name, weight },
        }
    }
}

// =============================================================================
// KEY CREATION
// =============================================================================

/// Validate a spec and turn it into a [`Key`].
///
/// # Errors
///
/// `InvalidKey` when the weight is not a positive finite number, when the
/// path is empty or has an empty segment, or when an accessor has no name.
pub fn create_key(spec: KeySpec) -> Result<Key> {
    match spec {
        KeySpec::Path(path) => build_key(KeyName::Dotted(path), DEFAULT_KEY_WEIGHT, None),
        KeySpec::Segments(segments) => {
            build_key(KeyName::Segments(segments), DEFAULT_KEY_WEIGHT, None)
        }
        KeySpec::Weighted { name, weight } => build_key(name, weight, None),
        KeySpec::Accessor {
            name,
            weight,
            accessor,
        } => {
            if name.segments().is_empty() {
                return Err(IndexError::InvalidKey {
                    key: name.display(),
                    reason: "custom accessor requires a name",
                });
            }
            build_key(name, weight, Some(accessor))
        }
    }
}

fn build_key(name: KeyName, weight: f64, accessor: Option<Accessor>) -> Result<Key> {
    let invalid = |reason| IndexError::InvalidKey {
        key: name.display(),
        reason,
    };

    if !weight.is_finite() || weight <= 0.0 {
        return Err(invalid("weight must be a positive finite number"));
    }

    let path = name.segments();
    if path.is_empty() {
        return Err(invalid("key path is empty"));
    }
    if path.iter().any(String::is_empty) {
        return Err(invalid("key path has an empty segment"));
    }

    Ok(Key {
        id: path.join(KEY_PATH_DELIMITER),
        path,
        weight,
        accessor,
    })
}

// =============================================================================
// REGISTRY
// =============================================================================

/// Validated key set with id → ordinal lookup.
#[derive(Debug, Clone, Default)]
pub struct KeyRegistry {
    keys: Vec<Key>,
    ordinals: HashMap<String, usize>,
    total_weight: f64,
}

impl KeyRegistry {
    /// Build a registry from specs. Any bad spec fails the whole set.
    pub fn new<I, S>(specs: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<KeySpec>,
    {
        let keys = specs
            .into_iter()
            .map(|spec| create_key(spec.into()))
            .collect::<Result<Vec<_>>>()?;
        Self::from_keys(keys)
    }

    /// Build a registry from already-created keys, e.g. from a snapshot.
    pub fn from_keys(keys: Vec<Key>) -> Result<Self> {
        let mut ordinals = HashMap::with_capacity(keys.len());
        let mut total_weight = 0.0;

        for (ordinal, key) in keys.iter().enumerate() {
            if !key.weight.is_finite() || key.weight <= 0.0 {
                return Err(IndexError::InvalidKey {
                    key: key.id.clone(),
                    reason: "weight must be a positive finite number",
                });
            }
            if ordinals.insert(key.id.clone(), ordinal).is_some() {
                return Err(IndexError::DuplicateKey { id: key.id.clone() });
            }
            total_weight += key.weight;
        }

        Ok(Self {
            keys,
            ordinals,
            total_weight,
        })
    }

    pub fn keys(&self) -> &[Key] {
        &self.keys
    }

    pub fn get(&self, id: &str) -> Option<&Key> {
        self.ordinal(id).map(|ordinal| &self.keys[ordinal])
    }

    /// Registration order of the key with this id.
    pub fn ordinal(&self, id: &str) -> Option<usize> {
        self.ordinals.get(id).copied()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.ordinals.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    pub fn total_weight(&self) -> f64 {
        self.total_weight
    }

    /// Key weight divided by the sum of all weights, so weights sum to 1.
    pub fn normalized_weight(&self, id: &str) -> Option<f64> {
        self.get(id).map(|key| key.weight / self.total_weight)
    }
}

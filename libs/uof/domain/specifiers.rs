//! Market specifiers: `k=v|k=v` strings parsed into a flat map

use super::hash::fnv1a32;
use serde::Serialize;
use std::collections::BTreeMap;
use tracing::debug;

/// Key naming the outcome-set variant of a variant market
pub const VARIANT_KEY: &str = "variant";

/// Market-qualifying key/value parameters.
///
/// Backed by a `BTreeMap` so the canonical form, and everything derived
/// from it, never depends on the order keys arrived in.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Specifiers(BTreeMap<String, String>);

impl Specifiers {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a single specifier string
    pub fn parse(raw: &str) -> Self {
        Self::merge(raw, "")
    }

    /// Combine primary and extended specifier strings.
    ///
    /// Only `k=v` tokens contribute. Empty tokens (`"||"`, trailing `|`),
    /// tokens without `=` and tokens with an empty key are dropped. A key
    /// present in both inputs keeps its `base` value: extended specifiers
    /// only add.
    pub fn merge(base: &str, extended: &str) -> Self {
        let mut map = BTreeMap::new();
        insert_tokens(&mut map, base);
        insert_tokens(&mut map, extended);
        Self(map)
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Value of the `variant` specifier, if present
    pub fn variant(&self) -> Option<&str> {
        self.get(VARIANT_KEY)
    }

    /// `k=v|k=v` with keys in sorted order
    pub fn canonical(&self) -> String {
        self.iter()
            .map(|(k, v)| format!("{}={}", k, v))
            .collect::<Vec<_>>()
            .join("|")
    }

    /// Line identifier: FNV-1a of the canonical form, `0` without specifiers
    pub fn line_id(&self) -> u32 {
        if self.is_empty() {
            return 0;
        }
        fnv1a32(&self.canonical())
    }
}

impl FromIterator<(String, String)> for Specifiers {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

fn insert_tokens(map: &mut BTreeMap<String, String>, raw: &str) {
    for token in raw.split('|').filter(|t| !t.is_empty()) {
        match token.split_once('=') {
            Some((key, value)) if !key.is_empty() => {
                map.entry(key.to_string())
                    .or_insert_with(|| value.to_string());
            }
            _ => debug!(token, specifiers = raw, "Dropping malformed specifier token"),
        }
    }
}

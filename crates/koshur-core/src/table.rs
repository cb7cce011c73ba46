use std::collections::{BTreeMap, HashMap};

use serde::{Deserialize, Serialize};

use crate::error::TableError;

/// Mapping from a canonical form to the variants that collapse into it.
///
/// Entries keep their insertion order. When the table is flattened and the same
/// variant shows up under two canonical forms, the later entry wins; `validate`
/// rejects such tables so callers never depend on that order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(
    from = "BTreeMap<String, Vec<String>>",
    into = "BTreeMap<String, Vec<String>>"
)]
pub struct EquivalenceTable {
    entries: Vec<(String, Vec<String>)>,
}

impl EquivalenceTable {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Build a table from constant data
    pub fn from_static(entries: &[(&str, &[&str])]) -> Self {
        let mut table = Self::new();
        for (canonical, variants) in entries {
            table.insert(*canonical, variants.iter().copied());
        }
        table
    }

    /// Append variants under `canonical`, extending an existing entry if present
    pub fn insert<C, I, V>(&mut self, canonical: C, variants: I)
    where
        C: Into<String>,
        I: IntoIterator<Item = V>,
        V: Into<String>,
    {
        let canonical = canonical.into();
        let variants = variants.into_iter().map(Into::into);

        match self.entries.iter_mut().find(|(c, _)| *c == canonical) {
            Some((_, existing)) => existing.extend(variants),
            None => self.entries.push((canonical, variants.collect())),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.entries
            .iter()
            .map(|(canonical, variants)| (canonical.as_str(), variants.as_slice()))
    }

    pub fn canonical_forms(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(canonical, _)| canonical.as_str())
    }

    pub fn variants(&self) -> impl Iterator<Item = &str> {
        self.entries
            .iter()
            .flat_map(|(_, variants)| variants.iter().map(String::as_str))
    }

    /// Invert into a variant → canonical lookup
    pub fn flatten(&self) -> HashMap<String, String> {
        let mut lookup = HashMap::new();
        for (canonical, variants) in &self.entries {
            for variant in variants {
                lookup.insert(variant.clone(), canonical.clone());
            }
        }
        lookup
    }

    /// Reverse the direction of the table: every entry's first variant becomes
    /// the canonical form for the old canonical.
    ///
    /// Entries with no variants are dropped.
    pub fn invert_primary(&self) -> Self {
        let mut inverted = Self::new();
        for (canonical, variants) in &self.entries {
            if let Some(primary) = variants.first() {
                inverted.insert(primary.clone(), [canonical.clone()]);
            }
        }
        inverted
    }

    /// Reject empty variants and variants claimed by more than one canonical form
    pub fn validate(&self) -> Result<(), TableError> {
        let mut owners: HashMap<&str, &str> = HashMap::new();

        for (canonical, variants) in &self.entries {
            for variant in variants {
                if variant.is_empty() {
                    return Err(TableError::EmptyVariant {
                        canonical: canonical.clone(),
                    });
                }

                if let Some(first) = owners.insert(variant.as_str(), canonical.as_str()) {
                    if first != canonical.as_str() {
                        return Err(TableError::ConflictingVariant {
                            variant: variant.clone(),
                            first: first.to_string(),
                            second: canonical.clone(),
                        });
                    }
                }
            }
        }

        Ok(())
    }
}

impl From<BTreeMap<String, Vec<String>>> for EquivalenceTable {
    fn from(map: BTreeMap<String, Vec<String>>) -> Self {
        Self {
            entries: map.into_iter().collect(),
        }
    }
}

impl From<EquivalenceTable> for BTreeMap<String, Vec<String>> {
    fn from(table: EquivalenceTable) -> Self {
        let mut map = BTreeMap::new();
        for (canonical, variants) in table.entries {
            map.entry(canonical).or_insert_with(Vec::new).extend(variants);
        }
        map
    }
}

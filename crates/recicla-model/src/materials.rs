// SPDX-License-Identifier: Apache-2.0

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt::Formatter;

/// Category name grouping free-text material entries.
pub const CUSTOM_CATEGORY: &str = "Custom";

#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub struct MaterialCategory {
    pub name: String,
    pub subtypes: Vec<String>,
}

/// The fixed set of recognized material categories and their subtype
/// labels. Built once at startup and passed explicitly to whatever
/// validates, extracts, or renders material selections.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub struct MaterialTaxonomy {
    categories: Vec<MaterialCategory>,
}

impl Default for MaterialTaxonomy {
    fn default() -> Self {
        fn category(name: &str, subtypes: &[&str]) -> MaterialCategory {
            MaterialCategory {
                name: name.to_string(),
                subtypes: subtypes.iter().map(|s| (*s).to_string()).collect(),
            }
        }
        Self {
            categories: vec![
                category(
                    "Papel",
                    &[
                        "Jornais, revistas e panfletos",
                        "Caixas de papelão",
                        "Papel de escritório",
                        "Embalagens de papel e papelão",
                    ],
                ),
                category(
                    "Plástico",
                    &[
                        "Garrafas e embalagens plásticas",
                        "Tampas e frascos",
                        "Sacolas plásticas",
                        "Brinquedos de plástico",
                        "Tubos e canos de PVC",
                    ],
                ),
                category("Vidro", &["Garrafa", "Frascos", "Potes"]),
                category("Metal", &["Latas", "Panelas", "Peças metálicas"]),
                category(
                    "Eletrônicos",
                    &["Celulares", "Baterias", "Cabos e acessórios"],
                ),
                category("Orgânico", &["Restos de comida", "Resíduos vegetais"]),
            ],
        }
    }
}

impl MaterialTaxonomy {
    #[must_use]
    pub fn categories(&self) -> &[MaterialCategory] {
        &self.categories
    }

    #[must_use]
    pub fn category_names(&self) -> impl Iterator<Item = &str> {
        self.categories.iter().map(|c| c.name.as_str())
    }
}

/// Ordered mapping of category name to selected subtype labels.
///
/// Insertion order is the contract: taxonomy order first, then
/// `Custom` last when present. The JSON codec preserves it exactly.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Materials {
    entries: Vec<(String, Vec<String>)>,
}

impl Materials {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a category; empty selections are dropped so the mapping
    /// never contains an empty list.
    pub fn push(&mut self, category: impl Into<String>, items: Vec<String>) {
        if items.is_empty() {
            return;
        }
        self.entries.push((category.into(), items));
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn get(&self, category: &str) -> Option<&[String]> {
        self.entries
            .iter()
            .find(|(name, _)| name == category)
            .map(|(_, items)| items.as_slice())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.entries
            .iter()
            .map(|(name, items)| (name.as_str(), items.as_slice()))
    }

    /// JSON object encoding for the storage blob.
    pub fn encode(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    pub fn decode(blob: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(blob)
    }

    /// Decode for read paths: an undecodable blob becomes an empty
    /// mapping instead of an error.
    #[must_use]
    pub fn decode_or_empty(blob: &str) -> Self {
        Self::decode(blob).unwrap_or_default()
    }
}

impl Serialize for Materials {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (name, items) in &self.entries {
            map.serialize_entry(name, items)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for Materials {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct MaterialsVisitor;

        impl<'de> Visitor<'de> for MaterialsVisitor {
            type Value = Materials;

            fn expecting(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
                f.write_str("a map of category name to subtype labels")
            }

            fn visit_map<A>(self, mut access: A) -> Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut entries = Vec::with_capacity(access.size_hint().unwrap_or(0));
                while let Some((name, items)) = access.next_entry::<String, Vec<String>>()? {
                    entries.push((name, items));
                }
                Ok(Materials { entries })
            }
        }

        deserializer.deserialize_map(MaterialsVisitor)
    }
}

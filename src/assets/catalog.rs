//! The prefab model catalog: a remote JSON document listing available 3D
//! models by category, consumed read-only.

use serde::Deserialize;

use crate::errors::Result;

/// Immutable catalog record describing one prefab model.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ModelDefinition {
    /// Unique within the catalog.
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub attribution: String,
    /// Absolute URL, or a path relative to the catalog's `models/` root.
    pub path: String,
    pub category: String,
}

/// Remote document listing the available prefab models.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ModelCatalog {
    pub categories: Vec<String>,
    pub models: Vec<ModelDefinition>,
}

impl ModelCatalog {
    /// Parses a catalog document.
    ///
    /// The source data does not guarantee that every model's category appears
    /// in the category set; mismatches are surfaced as warnings and the
    /// document is accepted unchanged.
    pub fn from_json(bytes: &[u8]) -> Result<Self> {
        let catalog: Self = serde_json::from_slice(bytes)?;
        for model in &catalog.models {
            if !catalog.categories.iter().any(|c| c == &model.category) {
                log::warn!(
                    "model '{}' references unlisted category '{}'",
                    model.id,
                    model.category
                );
            }
        }
        Ok(catalog)
    }

    /// First model with the given id. Catalogs are small; a linear scan is
    /// fine.
    #[must_use]
    pub fn model_by_id(&self, id: &str) -> Option<&ModelDefinition> {
        self.models.iter().find(|m| m.id == id)
    }

    /// First model with the given display name.
    #[must_use]
    pub fn model_by_name(&self, name: &str) -> Option<&ModelDefinition> {
        self.models.iter().find(|m| m.name == name)
    }
}

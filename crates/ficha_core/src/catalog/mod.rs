mod builtin;
mod types;

use std::collections::BTreeMap;

pub use types::{
    Background, Class, FeatureText, NamedText, ProgressionCell, ProgressionRow, SizeCategory,
    SkillChoice, Species,
};

use crate::error::{CoreError, CoreErrorCode};

/// Read-only reference data: species, classes, backgrounds. Loaded
/// once, keyed by entry id, never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    species: BTreeMap<String, Species>,
    classes: BTreeMap<String, Class>,
    backgrounds: BTreeMap<String, Background>,
}

impl Catalog {
    /// Builds a catalog, enforcing the load-time invariants: unique
    /// ids everywhere, and a dense progression row per level 1..=20
    /// for every class. A gap would silently produce wrong level-up
    /// numbers later, so it is fatal here and never recoverable at
    /// compute time.
    pub fn new(
        species: Vec<Species>,
        classes: Vec<Class>,
        backgrounds: Vec<Background>,
    ) -> Result<Self, CoreError> {
        for class in &classes {
            validate_progression(class)?;
        }

        let mut species_map = BTreeMap::new();
        for entry in species {
            let id = entry.id.clone();
            if species_map.insert(id.clone(), entry).is_some() {
                return Err(CoreError::new(
                    CoreErrorCode::DuplicateEntry,
                    format!("duplicate species id {id:?}"),
                ));
            }
        }

        let mut class_map = BTreeMap::new();
        for entry in classes {
            let id = entry.id.clone();
            if class_map.insert(id.clone(), entry).is_some() {
                return Err(CoreError::new(
                    CoreErrorCode::DuplicateEntry,
                    format!("duplicate class id {id:?}"),
                ));
            }
        }

        let mut background_map = BTreeMap::new();
        for entry in backgrounds {
            let id = entry.id.clone();
            if background_map.insert(id.clone(), entry).is_some() {
                return Err(CoreError::new(
                    CoreErrorCode::DuplicateEntry,
                    format!("duplicate background id {id:?}"),
                ));
            }
        }

        Ok(Self {
            species: species_map,
            classes: class_map,
            backgrounds: background_map,
        })
    }

    /// The bundled reference data.
    pub fn builtin() -> Result<Self, CoreError> {
        Self::new(
            builtin::species(),
            builtin::classes(),
            builtin::backgrounds(),
        )
    }

    pub fn species(&self, id: &str) -> Option<&Species> {
        self.species.get(id)
    }

    pub fn class(&self, id: &str) -> Option<&Class> {
        self.classes.get(id)
    }

    pub fn background(&self, id: &str) -> Option<&Background> {
        self.backgrounds.get(id)
    }

    pub fn species_ids(&self) -> impl Iterator<Item = &str> {
        self.species.keys().map(String::as_str)
    }

    pub fn class_ids(&self) -> impl Iterator<Item = &str> {
        self.classes.keys().map(String::as_str)
    }

    pub fn background_ids(&self) -> impl Iterator<Item = &str> {
        self.backgrounds.keys().map(String::as_str)
    }
}

fn validate_progression(class: &Class) -> Result<(), CoreError> {
    if class.progression.len() != 20 {
        return Err(CoreError::new(
            CoreErrorCode::CatalogIntegrity,
            format!(
                "class {:?} has {} progression rows, expected 20",
                class.id,
                class.progression.len()
            ),
        ));
    }
    for (index, row) in class.progression.iter().enumerate() {
        let expected = index as u8 + 1;
        if row.level != expected {
            return Err(CoreError::new(
                CoreErrorCode::CatalogIntegrity,
                format!(
                    "class {:?} progression row {} is for level {}, expected level {}",
                    class.id, index, row.level, expected
                ),
            ));
        }
    }
    Ok(())
}

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::ability::AbilityScores;
use crate::skill::Skill;

/// Free-text narrative sections carried through to the exported sheet
/// without interpretation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Biography {
    pub personality: String,
    pub ideals: String,
    pub bonds: String,
    pub flaws: String,
    pub appearance: String,
    pub backstory: String,
}

/// The working state of a character build. This is the single source
/// of truth; every derived number is recomputed from it on demand and
/// never written back. Species/class/background are referenced by
/// catalog id and may be absent while the build is in progress.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CharacterSelection {
    pub name: String,
    pub species: Option<String>,
    pub class: Option<String>,
    pub background: Option<String>,
    pub level: u8,
    pub abilities: AbilityScores,
    pub skill_proficiencies: BTreeSet<Skill>,
    pub known_spells: Vec<String>,
    pub equipment: Vec<String>,
    pub biography: Biography,
}

impl Default for CharacterSelection {
    fn default() -> Self {
        Self {
            name: String::new(),
            species: None,
            class: None,
            background: None,
            level: 1,
            abilities: AbilityScores::default(),
            skill_proficiencies: BTreeSet::new(),
            known_spells: Vec::new(),
            equipment: Vec::new(),
            biography: Biography::default(),
        }
    }
}

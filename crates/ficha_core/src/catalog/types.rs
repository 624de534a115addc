use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::ability::Ability;
use crate::skill::Skill;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SizeCategory {
    Small,
    Medium,
}

/// A named block of descriptive text (species trait, background
/// feature).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NamedText {
    pub name: String,
    pub text: String,
}

impl NamedText {
    pub fn new(name: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            text: text.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Species {
    pub id: String,
    pub name: String,
    /// Walking speed in feet.
    pub speed: i32,
    pub size: SizeCategory,
    /// Sparse: an absent ability grants no bonus. One species may
    /// cover all six keys.
    pub ability_bonuses: BTreeMap<Ability, i32>,
    pub traits: Vec<NamedText>,
    pub languages: Vec<String>,
}

impl Species {
    pub fn ability_bonus(&self, ability: Ability) -> i32 {
        self.ability_bonuses.get(&ability).copied().unwrap_or(0)
    }
}

/// One cell of a per-level progression table. Cells are tagged so
/// consumers never re-parse "-" placeholders out of raw strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProgressionCell {
    Absent,
    Numeric(i32),
    Label(String),
}

impl ProgressionCell {
    pub fn is_present(&self) -> bool {
        !matches!(self, ProgressionCell::Absent)
    }

    /// Sheet-facing rendering; absent cells render as "-".
    pub fn as_text(&self) -> String {
        match self {
            ProgressionCell::Absent => "-".to_string(),
            ProgressionCell::Numeric(n) => n.to_string(),
            ProgressionCell::Label(s) => s.clone(),
        }
    }
}

/// Per-level class record: proficiency bonus, features unlocked at
/// that level, and class-specific extra columns (spell slots, sneak
/// attack dice, ...). Extra columns are sparse.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ProgressionRow {
    pub level: u8,
    pub proficiency_bonus: i32,
    pub features: Vec<String>,
    pub columns: BTreeMap<String, ProgressionCell>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SkillChoice {
    pub choose: usize,
    pub from: Vec<Skill>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FeatureText {
    pub level: u8,
    pub name: String,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Class {
    pub id: String,
    pub name: String,
    /// Die size: 6, 8, 10 or 12.
    pub hit_die: i32,
    pub primary_abilities: Vec<Ability>,
    pub saving_throws: [Ability; 2],
    pub armor_proficiencies: Vec<String>,
    pub weapon_proficiencies: Vec<String>,
    pub tool_proficiencies: Vec<String>,
    pub skill_choice: SkillChoice,
    /// Dense: one row per level 1..=20, ascending. Enforced by
    /// catalog construction.
    pub progression: Vec<ProgressionRow>,
    pub feature_texts: Vec<FeatureText>,
}

impl Class {
    /// Row for a character level, clamped into 1..=20. Returns `None`
    /// only for a class that bypassed catalog validation.
    pub fn progression_row(&self, level: u8) -> Option<&ProgressionRow> {
        let level = level.clamp(1, 20);
        self.progression.get(usize::from(level) - 1)
    }

    pub fn is_save_proficient(&self, ability: Ability) -> bool {
        self.saving_throws.contains(&ability)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Background {
    pub id: String,
    pub name: String,
    /// Fixed grants, not a choice.
    pub skills: Vec<Skill>,
    pub tools: Vec<String>,
    pub feature: NamedText,
}

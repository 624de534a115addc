use serde::{Deserialize, Serialize};

use crate::ability::{Ability, modifier};
use crate::catalog::{Catalog, NamedText, ProgressionCell};
use crate::selection::CharacterSelection;
use crate::skill::Skill;

/// Hit-die size assumed while no class is chosen.
const DEFAULT_HIT_DIE: i32 = 8;
/// Proficiency bonus assumed while no class is chosen (the level-1
/// baseline of every class table).
const DEFAULT_PROFICIENCY_BONUS: i32 = 2;
/// Walking speed assumed while no species is chosen.
const DEFAULT_SPEED: i32 = 30;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AbilityLine {
    pub ability: Ability,
    /// Base score + species bonus, resolved at read time.
    pub score: i32,
    pub modifier: i32,
    pub saving_throw: i32,
    pub save_proficient: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SkillLine {
    pub skill: Skill,
    pub ability: Ability,
    pub modifier: i32,
    pub proficient: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SpellResource {
    pub column: String,
    pub value: ProgressionCell,
}

/// The fully computed projection of a `CharacterSelection`. Output
/// only: recomputed on every read, never persisted as authoritative
/// state, and never written back into the selection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DerivedSheet {
    pub species_name: Option<String>,
    pub class_name: Option<String>,
    pub background_name: Option<String>,
    /// Six lines, in canonical ability order.
    pub abilities: Vec<AbilityLine>,
    pub proficiency_bonus: i32,
    /// Unarmored baseline: 10 + DEX modifier.
    pub armor_class: i32,
    /// Level-1 baseline only: hit die + CON modifier. Multi-level HP
    /// projection is out of scope.
    pub max_hit_points: i32,
    pub initiative: i32,
    pub passive_perception: i32,
    pub speed: i32,
    /// Eighteen lines, in canonical skill order.
    pub skills: Vec<SkillLine>,
    /// Spellcasting columns of the current progression row, copied
    /// verbatim; empty for non-casters.
    pub spell_resources: Vec<SpellResource>,
    pub languages: Vec<String>,
    pub species_traits: Vec<NamedText>,
    /// Class feature names unlocked through the current level.
    pub class_features: Vec<String>,
    pub background_feature: Option<NamedText>,
}

/// True for progression columns that belong to the spell-resource
/// section of the sheet.
fn is_spell_column(key: &str) -> bool {
    key == "cantrips_known" || key.starts_with("spell_slots_")
}

/// Computes the full derived sheet. Total over any selection: a
/// missing or unknown species/class/background contributes a neutral
/// default (zero bonus, hit die 8, empty proficiency sets) instead of
/// failing, so even an empty selection yields a consistent sheet.
pub fn compute_sheet(selection: &CharacterSelection, catalog: &Catalog) -> DerivedSheet {
    let species = selection
        .species
        .as_deref()
        .and_then(|id| catalog.species(id));
    let class = selection.class.as_deref().and_then(|id| catalog.class(id));
    let background = selection
        .background
        .as_deref()
        .and_then(|id| catalog.background(id));

    let final_score = |ability: Ability| {
        let bonus = species.map(|s| s.ability_bonus(ability)).unwrap_or(0);
        selection.abilities.get(ability) + bonus
    };
    let final_modifier = |ability: Ability| modifier(final_score(ability));

    let row = class.and_then(|c| c.progression_row(selection.level));
    let proficiency_bonus = row
        .map(|r| r.proficiency_bonus)
        .unwrap_or(DEFAULT_PROFICIENCY_BONUS);

    let abilities = Ability::ALL
        .iter()
        .map(|&ability| {
            let score = final_score(ability);
            let ability_modifier = modifier(score);
            let save_proficient = class.is_some_and(|c| c.is_save_proficient(ability));
            AbilityLine {
                ability,
                score,
                modifier: ability_modifier,
                saving_throw: ability_modifier
                    + if save_proficient { proficiency_bonus } else { 0 },
                save_proficient,
            }
        })
        .collect();

    // Idempotent union: a skill granted by both an explicit choice and
    // the background is still proficient exactly once.
    let mut proficient_skills = selection.skill_proficiencies.clone();
    if let Some(background) = background {
        proficient_skills.extend(background.skills.iter().copied());
    }

    let skills = Skill::ALL
        .iter()
        .map(|&skill| {
            let ability = skill.governing_ability();
            let proficient = proficient_skills.contains(&skill);
            SkillLine {
                skill,
                ability,
                modifier: final_modifier(ability)
                    + if proficient { proficiency_bonus } else { 0 },
                proficient,
            }
        })
        .collect();

    let spell_resources = row
        .map(|r| {
            r.columns
                .iter()
                .filter(|(key, _)| is_spell_column(key))
                .map(|(key, cell)| SpellResource {
                    column: key.clone(),
                    value: cell.clone(),
                })
                .collect()
        })
        .unwrap_or_default();

    let class_features = class
        .map(|c| {
            let level = selection.level.clamp(1, 20);
            c.progression
                .iter()
                .take_while(|r| r.level <= level)
                .flat_map(|r| r.features.iter().cloned())
                .collect()
        })
        .unwrap_or_default();

    let hit_die = class.map(|c| c.hit_die).unwrap_or(DEFAULT_HIT_DIE);
    let dexterity_modifier = final_modifier(Ability::Dexterity);

    DerivedSheet {
        species_name: species.map(|s| s.name.clone()),
        class_name: class.map(|c| c.name.clone()),
        background_name: background.map(|b| b.name.clone()),
        abilities,
        proficiency_bonus,
        armor_class: 10 + dexterity_modifier,
        max_hit_points: hit_die + final_modifier(Ability::Constitution),
        initiative: dexterity_modifier,
        passive_perception: 10 + final_modifier(Ability::Wisdom),
        speed: species.map(|s| s.speed).unwrap_or(DEFAULT_SPEED),
        skills,
        spell_resources,
        languages: species.map(|s| s.languages.clone()).unwrap_or_default(),
        species_traits: species.map(|s| s.traits.clone()).unwrap_or_default(),
        class_features,
        background_feature: background.map(|b| b.feature.clone()),
    }
}

impl DerivedSheet {
    pub fn ability_line(&self, ability: Ability) -> Option<&AbilityLine> {
        self.abilities.iter().find(|line| line.ability == ability)
    }

    pub fn skill_line(&self, skill: Skill) -> Option<&SkillLine> {
        self.skills.iter().find(|line| line.skill == skill)
    }
}

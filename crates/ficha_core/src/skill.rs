use std::fmt;

use serde::{Deserialize, Serialize};

use crate::ability::Ability;

/// The eighteen sheet skills, each governed by exactly one ability.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Skill {
    Acrobatics,
    AnimalHandling,
    Arcana,
    Athletics,
    Deception,
    History,
    Insight,
    Intimidation,
    Investigation,
    Medicine,
    Nature,
    Perception,
    Performance,
    Persuasion,
    Religion,
    SleightOfHand,
    Stealth,
    Survival,
}

impl Skill {
    pub const COUNT: usize = 18;

    pub const ALL: [Skill; Skill::COUNT] = [
        Skill::Acrobatics,
        Skill::AnimalHandling,
        Skill::Arcana,
        Skill::Athletics,
        Skill::Deception,
        Skill::History,
        Skill::Insight,
        Skill::Intimidation,
        Skill::Investigation,
        Skill::Medicine,
        Skill::Nature,
        Skill::Perception,
        Skill::Performance,
        Skill::Persuasion,
        Skill::Religion,
        Skill::SleightOfHand,
        Skill::Stealth,
        Skill::Survival,
    ];

    pub fn name(&self) -> &'static str {
        match *self {
            Skill::Acrobatics => "Acrobatics",
            Skill::AnimalHandling => "Animal Handling",
            Skill::Arcana => "Arcana",
            Skill::Athletics => "Athletics",
            Skill::Deception => "Deception",
            Skill::History => "History",
            Skill::Insight => "Insight",
            Skill::Intimidation => "Intimidation",
            Skill::Investigation => "Investigation",
            Skill::Medicine => "Medicine",
            Skill::Nature => "Nature",
            Skill::Perception => "Perception",
            Skill::Performance => "Performance",
            Skill::Persuasion => "Persuasion",
            Skill::Religion => "Religion",
            Skill::SleightOfHand => "Sleight of Hand",
            Skill::Stealth => "Stealth",
            Skill::Survival => "Survival",
        }
    }

    /// Governing ability, from the fixed 18-entry skill table.
    pub fn governing_ability(&self) -> Ability {
        match *self {
            Skill::Athletics => Ability::Strength,
            Skill::Acrobatics | Skill::SleightOfHand | Skill::Stealth => Ability::Dexterity,
            Skill::Arcana
            | Skill::History
            | Skill::Investigation
            | Skill::Nature
            | Skill::Religion => Ability::Intelligence,
            Skill::AnimalHandling
            | Skill::Insight
            | Skill::Medicine
            | Skill::Perception
            | Skill::Survival => Ability::Wisdom,
            Skill::Deception | Skill::Intimidation | Skill::Performance | Skill::Persuasion => {
                Ability::Charisma
            }
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        let name = name.trim();
        Skill::ALL
            .iter()
            .copied()
            .find(|skill| skill.name().eq_ignore_ascii_case(name))
    }
}

impl fmt::Display for Skill {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use crate::ability::Ability;

    use super::Skill;

    #[test]
    fn all_lists_eighteen_distinct_skills() {
        let mut names: Vec<&str> = Skill::ALL.iter().map(Skill::name).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), 18);
    }

    #[test]
    fn governing_ability_table_covers_the_expected_split() {
        let count_for = |ability: Ability| {
            Skill::ALL
                .iter()
                .filter(|skill| skill.governing_ability() == ability)
                .count()
        };
        assert_eq!(count_for(Ability::Strength), 1);
        assert_eq!(count_for(Ability::Dexterity), 3);
        assert_eq!(count_for(Ability::Constitution), 0);
        assert_eq!(count_for(Ability::Intelligence), 5);
        assert_eq!(count_for(Ability::Wisdom), 5);
        assert_eq!(count_for(Ability::Charisma), 4);
    }

    #[test]
    fn from_name_accepts_display_names() {
        assert_eq!(Skill::from_name("Athletics"), Some(Skill::Athletics));
        assert_eq!(
            Skill::from_name("sleight of hand"),
            Some(Skill::SleightOfHand)
        );
        assert_eq!(Skill::from_name(" Animal Handling "), Some(Skill::AnimalHandling));
        assert_eq!(Skill::from_name("Basketweaving"), None);
    }
}

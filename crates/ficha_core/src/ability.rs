use std::fmt;

use serde::{Deserialize, Serialize};

/// The six base abilities. Order is the canonical sheet order and is
/// relied on by the calculator and the exporter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Ability {
    Strength,
    Dexterity,
    Constitution,
    Intelligence,
    Wisdom,
    Charisma,
}

impl Ability {
    pub const COUNT: usize = 6;

    pub const ALL: [Ability; Ability::COUNT] = [
        Ability::Strength,
        Ability::Dexterity,
        Ability::Constitution,
        Ability::Intelligence,
        Ability::Wisdom,
        Ability::Charisma,
    ];

    pub fn name(&self) -> &'static str {
        match *self {
            Ability::Strength => "Strength",
            Ability::Dexterity => "Dexterity",
            Ability::Constitution => "Constitution",
            Ability::Intelligence => "Intelligence",
            Ability::Wisdom => "Wisdom",
            Ability::Charisma => "Charisma",
        }
    }

    pub fn code(&self) -> &'static str {
        match *self {
            Ability::Strength => "STR",
            Ability::Dexterity => "DEX",
            Ability::Constitution => "CON",
            Ability::Intelligence => "INT",
            Ability::Wisdom => "WIS",
            Ability::Charisma => "CHA",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Ability::ALL
            .iter()
            .copied()
            .find(|ability| ability.code().eq_ignore_ascii_case(code))
    }
}

impl fmt::Display for Ability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Ability modifier: `floor((score - 10) / 2)` for every score,
/// including scores outside 8..=20. No clamping.
pub fn modifier(score: i32) -> i32 {
    (score - 10).div_euclid(2)
}

/// The six base scores of a character allocation. These are the
/// player-owned values; species bonuses are never folded in here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AbilityScores {
    pub strength: i32,
    pub dexterity: i32,
    pub constitution: i32,
    pub intelligence: i32,
    pub wisdom: i32,
    pub charisma: i32,
}

impl Default for AbilityScores {
    fn default() -> Self {
        Self {
            strength: 10,
            dexterity: 10,
            constitution: 10,
            intelligence: 10,
            wisdom: 10,
            charisma: 10,
        }
    }
}

impl AbilityScores {
    pub fn get(&self, ability: Ability) -> i32 {
        match ability {
            Ability::Strength => self.strength,
            Ability::Dexterity => self.dexterity,
            Ability::Constitution => self.constitution,
            Ability::Intelligence => self.intelligence,
            Ability::Wisdom => self.wisdom,
            Ability::Charisma => self.charisma,
        }
    }

    pub fn set(&mut self, ability: Ability, value: i32) {
        match ability {
            Ability::Strength => self.strength = value,
            Ability::Dexterity => self.dexterity = value,
            Ability::Constitution => self.constitution = value,
            Ability::Intelligence => self.intelligence = value,
            Ability::Wisdom => self.wisdom = value,
            Ability::Charisma => self.charisma = value,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (Ability, i32)> + '_ {
        Ability::ALL.iter().map(|&ability| (ability, self.get(ability)))
    }
}

#[cfg(test)]
mod tests {
    use super::{Ability, AbilityScores, modifier};

    #[test]
    fn modifier_matches_reference_points() {
        assert_eq!(modifier(10), 0);
        assert_eq!(modifier(8), -1);
        assert_eq!(modifier(15), 2);
        assert_eq!(modifier(20), 5);
        assert_eq!(modifier(30), 10);
    }

    #[test]
    fn modifier_floors_below_ten() {
        assert_eq!(modifier(9), -1);
        assert_eq!(modifier(7), -2);
        assert_eq!(modifier(1), -5);
        assert_eq!(modifier(0), -5);
    }

    #[test]
    fn default_scores_are_all_ten() {
        let scores = AbilityScores::default();
        for (_, value) in scores.iter() {
            assert_eq!(value, 10);
        }
    }

    #[test]
    fn get_and_set_round_trip_every_ability() {
        let mut scores = AbilityScores::default();
        for (index, ability) in Ability::ALL.iter().enumerate() {
            scores.set(*ability, 8 + index as i32);
        }
        for (index, ability) in Ability::ALL.iter().enumerate() {
            assert_eq!(scores.get(*ability), 8 + index as i32);
        }
    }

    #[test]
    fn codes_resolve_case_insensitively() {
        assert_eq!(Ability::from_code("dex"), Some(Ability::Dexterity));
        assert_eq!(Ability::from_code("WIS"), Some(Ability::Wisdom));
        assert_eq!(Ability::from_code("LCK"), None);
    }
}

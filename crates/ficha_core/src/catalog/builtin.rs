//! Bundled reference data. Content volume lives here; the shapes and
//! invariants live in `types` and are enforced by `Catalog::new`.

use std::collections::BTreeMap;

use crate::ability::Ability;
use crate::skill::Skill;

use super::types::{
    Background, Class, FeatureText, NamedText, ProgressionCell, ProgressionRow, SizeCategory,
    SkillChoice, Species,
};

/// Proficiency bonus by level, 1..=20.
fn proficiency_bonus(level: u8) -> i32 {
    match level {
        1..=4 => 2,
        5..=8 => 3,
        9..=12 => 4,
        13..=16 => 5,
        _ => 6,
    }
}

/// Full-caster spell slots per spell level (columns 1..=9), indexed by
/// character level 1..=20. Zero means the slot level is not yet
/// available and is emitted as an absent cell, not a "0".
const FULL_CASTER_SLOTS: [[i32; 9]; 20] = [
    [2, 0, 0, 0, 0, 0, 0, 0, 0],
    [3, 0, 0, 0, 0, 0, 0, 0, 0],
    [4, 2, 0, 0, 0, 0, 0, 0, 0],
    [4, 3, 0, 0, 0, 0, 0, 0, 0],
    [4, 3, 2, 0, 0, 0, 0, 0, 0],
    [4, 3, 3, 0, 0, 0, 0, 0, 0],
    [4, 3, 3, 1, 0, 0, 0, 0, 0],
    [4, 3, 3, 2, 0, 0, 0, 0, 0],
    [4, 3, 3, 3, 1, 0, 0, 0, 0],
    [4, 3, 3, 3, 2, 0, 0, 0, 0],
    [4, 3, 3, 3, 2, 1, 0, 0, 0],
    [4, 3, 3, 3, 2, 1, 0, 0, 0],
    [4, 3, 3, 3, 2, 1, 1, 0, 0],
    [4, 3, 3, 3, 2, 1, 1, 0, 0],
    [4, 3, 3, 3, 2, 1, 1, 1, 0],
    [4, 3, 3, 3, 2, 1, 1, 1, 0],
    [4, 3, 3, 3, 2, 1, 1, 1, 1],
    [4, 3, 3, 3, 3, 1, 1, 1, 1],
    [4, 3, 3, 3, 3, 2, 1, 1, 1],
    [4, 3, 3, 3, 3, 2, 2, 1, 1],
];

fn full_caster_columns(level: u8, cantrips_known: i32) -> BTreeMap<String, ProgressionCell> {
    let mut columns = BTreeMap::new();
    columns.insert(
        "cantrips_known".to_string(),
        ProgressionCell::Numeric(cantrips_known),
    );
    let slots = FULL_CASTER_SLOTS[usize::from(level) - 1];
    for (index, &count) in slots.iter().enumerate() {
        if count > 0 {
            columns.insert(
                format!("spell_slots_{}", index + 1),
                ProgressionCell::Numeric(count),
            );
        }
    }
    columns
}

fn caster_cantrips(level: u8) -> i32 {
    match level {
        1..=3 => 3,
        4..=9 => 4,
        _ => 5,
    }
}

fn row(
    level: u8,
    features: &[&str],
    columns: BTreeMap<String, ProgressionCell>,
) -> ProgressionRow {
    ProgressionRow {
        level,
        proficiency_bonus: proficiency_bonus(level),
        features: features.iter().map(|s| (*s).to_string()).collect(),
        columns,
    }
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| (*s).to_string()).collect()
}

pub fn species() -> Vec<Species> {
    vec![
        Species {
            id: "human".to_string(),
            name: "Human".to_string(),
            speed: 30,
            size: SizeCategory::Medium,
            ability_bonuses: Ability::ALL.iter().map(|&a| (a, 1)).collect(),
            traits: vec![NamedText::new(
                "Versatile",
                "Humans gain a +1 bonus to every ability score.",
            )],
            languages: strings(&["Common", "One extra language of your choice"]),
        },
        Species {
            id: "elf".to_string(),
            name: "Elf".to_string(),
            speed: 30,
            size: SizeCategory::Medium,
            ability_bonuses: BTreeMap::from([(Ability::Dexterity, 2)]),
            traits: vec![
                NamedText::new(
                    "Darkvision",
                    "You can see in dim light within 60 feet as if it were bright light.",
                ),
                NamedText::new(
                    "Keen Senses",
                    "You have proficiency in the Perception skill.",
                ),
                NamedText::new(
                    "Fey Ancestry",
                    "You have advantage on saves against being charmed, and magic cannot put you to sleep.",
                ),
                NamedText::new(
                    "Trance",
                    "You do not need to sleep; you meditate deeply for 4 hours a day instead.",
                ),
            ],
            languages: strings(&["Common", "Elvish"]),
        },
        Species {
            id: "dwarf".to_string(),
            name: "Dwarf".to_string(),
            speed: 25,
            size: SizeCategory::Medium,
            ability_bonuses: BTreeMap::from([(Ability::Constitution, 2)]),
            traits: vec![
                NamedText::new(
                    "Darkvision",
                    "You can see in dim light within 60 feet as if it were bright light.",
                ),
                NamedText::new(
                    "Dwarven Resilience",
                    "You have advantage on saves against poison and resistance against poison damage.",
                ),
                NamedText::new(
                    "Stonecunning",
                    "Add double your proficiency bonus to History checks related to stonework.",
                ),
            ],
            languages: strings(&["Common", "Dwarvish"]),
        },
        Species {
            id: "halfling".to_string(),
            name: "Halfling".to_string(),
            speed: 25,
            size: SizeCategory::Small,
            ability_bonuses: BTreeMap::from([(Ability::Dexterity, 2)]),
            traits: vec![
                NamedText::new(
                    "Lucky",
                    "When you roll a 1 on a d20 for an attack, check, or save, you can reroll and must use the new roll.",
                ),
                NamedText::new(
                    "Brave",
                    "You have advantage on saves against being frightened.",
                ),
                NamedText::new(
                    "Halfling Nimbleness",
                    "You can move through the space of any creature larger than you.",
                ),
            ],
            languages: strings(&["Common", "Halfling"]),
        },
    ]
}

pub fn classes() -> Vec<Class> {
    vec![fighter(), wizard(), rogue(), cleric()]
}

fn fighter() -> Class {
    let features: [&[&str]; 20] = [
        &["Fighting Style", "Second Wind"],
        &["Action Surge"],
        &["Martial Archetype"],
        &["Ability Score Improvement"],
        &["Extra Attack"],
        &["Ability Score Improvement"],
        &["Archetype Feature"],
        &["Ability Score Improvement"],
        &["Indomitable"],
        &["Archetype Feature"],
        &["Extra Attack (2)"],
        &["Ability Score Improvement"],
        &["Indomitable (2)"],
        &["Ability Score Improvement"],
        &["Archetype Feature"],
        &["Ability Score Improvement"],
        &["Action Surge (2)", "Indomitable (3)"],
        &["Archetype Feature"],
        &["Ability Score Improvement"],
        &["Extra Attack (3)"],
    ];
    Class {
        id: "fighter".to_string(),
        name: "Fighter".to_string(),
        hit_die: 10,
        primary_abilities: vec![Ability::Strength, Ability::Dexterity],
        saving_throws: [Ability::Strength, Ability::Constitution],
        armor_proficiencies: strings(&["All armor", "Shields"]),
        weapon_proficiencies: strings(&["Simple weapons", "Martial weapons"]),
        tool_proficiencies: Vec::new(),
        skill_choice: SkillChoice {
            choose: 2,
            from: vec![
                Skill::Acrobatics,
                Skill::AnimalHandling,
                Skill::Athletics,
                Skill::History,
                Skill::Insight,
                Skill::Intimidation,
                Skill::Perception,
                Skill::Survival,
            ],
        },
        progression: features
            .iter()
            .enumerate()
            .map(|(index, names)| row(index as u8 + 1, names, BTreeMap::new()))
            .collect(),
        feature_texts: vec![
            FeatureText {
                level: 1,
                name: "Fighting Style".to_string(),
                text: "Adopt a particular style of fighting as your specialty.".to_string(),
            },
            FeatureText {
                level: 1,
                name: "Second Wind".to_string(),
                text: "On your turn, use a bonus action to regain 1d10 + your fighter level hit points."
                    .to_string(),
            },
            FeatureText {
                level: 2,
                name: "Action Surge".to_string(),
                text: "Take one additional action on your turn, once per rest.".to_string(),
            },
            FeatureText {
                level: 5,
                name: "Extra Attack".to_string(),
                text: "Attack twice, instead of once, whenever you take the Attack action."
                    .to_string(),
            },
        ],
    }
}

fn wizard() -> Class {
    let features: [&[&str]; 20] = [
        &["Spellcasting", "Arcane Recovery"],
        &["Arcane Tradition"],
        &[],
        &["Ability Score Improvement"],
        &[],
        &["Tradition Feature"],
        &[],
        &["Ability Score Improvement"],
        &[],
        &["Tradition Feature"],
        &[],
        &["Ability Score Improvement"],
        &[],
        &["Tradition Feature"],
        &[],
        &["Ability Score Improvement"],
        &[],
        &["Spell Mastery"],
        &["Ability Score Improvement"],
        &["Signature Spells"],
    ];
    Class {
        id: "wizard".to_string(),
        name: "Wizard".to_string(),
        hit_die: 6,
        primary_abilities: vec![Ability::Intelligence],
        saving_throws: [Ability::Intelligence, Ability::Wisdom],
        armor_proficiencies: Vec::new(),
        weapon_proficiencies: strings(&[
            "Daggers",
            "Darts",
            "Slings",
            "Quarterstaffs",
            "Light crossbows",
        ]),
        tool_proficiencies: Vec::new(),
        skill_choice: SkillChoice {
            choose: 2,
            from: vec![
                Skill::Arcana,
                Skill::History,
                Skill::Insight,
                Skill::Investigation,
                Skill::Medicine,
                Skill::Religion,
            ],
        },
        progression: features
            .iter()
            .enumerate()
            .map(|(index, names)| {
                let level = index as u8 + 1;
                row(level, names, full_caster_columns(level, caster_cantrips(level)))
            })
            .collect(),
        feature_texts: vec![
            FeatureText {
                level: 1,
                name: "Spellcasting".to_string(),
                text: "You can cast wizard spells, using Intelligence as your spellcasting ability."
                    .to_string(),
            },
            FeatureText {
                level: 1,
                name: "Arcane Recovery".to_string(),
                text: "Once per day during a short rest, recover expended spell slots with a combined level up to half your wizard level (rounded up)."
                    .to_string(),
            },
            FeatureText {
                level: 18,
                name: "Spell Mastery".to_string(),
                text: "Choose a 1st-level and a 2nd-level spell; you can cast them at their lowest level without expending a slot."
                    .to_string(),
            },
        ],
    }
}

fn rogue() -> Class {
    let features: [&[&str]; 20] = [
        &["Expertise", "Sneak Attack", "Thieves' Cant"],
        &["Cunning Action"],
        &["Roguish Archetype"],
        &["Ability Score Improvement"],
        &["Uncanny Dodge"],
        &["Expertise"],
        &["Evasion"],
        &["Ability Score Improvement"],
        &["Archetype Feature"],
        &["Ability Score Improvement"],
        &["Reliable Talent"],
        &["Ability Score Improvement"],
        &["Archetype Feature"],
        &["Blindsense"],
        &["Slippery Mind"],
        &["Ability Score Improvement"],
        &["Archetype Feature"],
        &["Elusive"],
        &["Ability Score Improvement"],
        &["Stroke of Luck"],
    ];
    Class {
        id: "rogue".to_string(),
        name: "Rogue".to_string(),
        hit_die: 8,
        primary_abilities: vec![Ability::Dexterity],
        saving_throws: [Ability::Dexterity, Ability::Intelligence],
        armor_proficiencies: strings(&["Light armor"]),
        weapon_proficiencies: strings(&[
            "Simple weapons",
            "Hand crossbows",
            "Longswords",
            "Rapiers",
            "Shortswords",
        ]),
        tool_proficiencies: strings(&["Thieves' tools"]),
        skill_choice: SkillChoice {
            choose: 4,
            from: vec![
                Skill::Acrobatics,
                Skill::Athletics,
                Skill::Deception,
                Skill::Insight,
                Skill::Intimidation,
                Skill::Investigation,
                Skill::Perception,
                Skill::Performance,
                Skill::Persuasion,
                Skill::SleightOfHand,
                Skill::Stealth,
            ],
        },
        progression: features
            .iter()
            .enumerate()
            .map(|(index, names)| {
                let level = index as u8 + 1;
                let dice = (u32::from(level) + 1) / 2;
                let mut columns = BTreeMap::new();
                columns.insert(
                    "sneak_attack".to_string(),
                    ProgressionCell::Label(format!("{dice}d6")),
                );
                row(level, names, columns)
            })
            .collect(),
        feature_texts: vec![
            FeatureText {
                level: 1,
                name: "Sneak Attack".to_string(),
                text: "Once per turn, deal extra damage to one creature you hit with advantage."
                    .to_string(),
            },
            FeatureText {
                level: 2,
                name: "Cunning Action".to_string(),
                text: "Use a bonus action to Dash, Disengage, or Hide.".to_string(),
            },
            FeatureText {
                level: 7,
                name: "Evasion".to_string(),
                text: "When you succeed on a Dexterity save for half damage, you take none instead."
                    .to_string(),
            },
        ],
    }
}

fn cleric() -> Class {
    let features: [&[&str]; 20] = [
        &["Spellcasting", "Divine Domain"],
        &["Channel Divinity (1/rest)", "Domain Feature"],
        &[],
        &["Ability Score Improvement"],
        &["Destroy Undead (CR 1/2)"],
        &["Channel Divinity (2/rest)", "Domain Feature"],
        &[],
        &["Ability Score Improvement", "Destroy Undead (CR 1)", "Domain Feature"],
        &[],
        &["Divine Intervention"],
        &["Destroy Undead (CR 2)"],
        &["Ability Score Improvement"],
        &[],
        &["Destroy Undead (CR 3)"],
        &[],
        &["Ability Score Improvement"],
        &["Destroy Undead (CR 4)", "Domain Feature"],
        &["Channel Divinity (3/rest)"],
        &["Ability Score Improvement"],
        &["Divine Intervention Improvement"],
    ];
    Class {
        id: "cleric".to_string(),
        name: "Cleric".to_string(),
        hit_die: 8,
        primary_abilities: vec![Ability::Wisdom],
        saving_throws: [Ability::Wisdom, Ability::Charisma],
        armor_proficiencies: strings(&["Light armor", "Medium armor", "Shields"]),
        weapon_proficiencies: strings(&["Simple weapons"]),
        tool_proficiencies: Vec::new(),
        skill_choice: SkillChoice {
            choose: 2,
            from: vec![
                Skill::History,
                Skill::Insight,
                Skill::Medicine,
                Skill::Persuasion,
                Skill::Religion,
            ],
        },
        progression: features
            .iter()
            .enumerate()
            .map(|(index, names)| {
                let level = index as u8 + 1;
                row(level, names, full_caster_columns(level, caster_cantrips(level)))
            })
            .collect(),
        feature_texts: vec![
            FeatureText {
                level: 1,
                name: "Spellcasting".to_string(),
                text: "You can cast cleric spells, using Wisdom as your spellcasting ability."
                    .to_string(),
            },
            FeatureText {
                level: 2,
                name: "Channel Divinity".to_string(),
                text: "Channel divine energy to fuel magical effects such as Turn Undead."
                    .to_string(),
            },
            FeatureText {
                level: 10,
                name: "Divine Intervention".to_string(),
                text: "Call on your deity to intervene; succeed on a d100 roll at or under your cleric level."
                    .to_string(),
            },
        ],
    }
}

pub fn backgrounds() -> Vec<Background> {
    vec![
        Background {
            id: "acolyte".to_string(),
            name: "Acolyte".to_string(),
            skills: vec![Skill::Insight, Skill::Religion],
            tools: Vec::new(),
            feature: NamedText::new(
                "Shelter of the Faithful",
                "You and your companions can expect free healing and care at temples of your faith.",
            ),
        },
        Background {
            id: "criminal".to_string(),
            name: "Criminal".to_string(),
            skills: vec![Skill::Deception, Skill::Stealth],
            tools: strings(&["Thieves' tools", "Gaming set"]),
            feature: NamedText::new(
                "Criminal Contact",
                "You have a reliable contact who acts as your liaison to a network of criminals.",
            ),
        },
        Background {
            id: "sage".to_string(),
            name: "Sage".to_string(),
            skills: vec![Skill::Arcana, Skill::History],
            tools: Vec::new(),
            feature: NamedText::new(
                "Researcher",
                "When you attempt to recall lore, you often know where to find the information.",
            ),
        },
        Background {
            id: "soldier".to_string(),
            name: "Soldier".to_string(),
            skills: vec![Skill::Athletics, Skill::Intimidation],
            tools: strings(&["Gaming set", "Vehicles (land)"]),
            feature: NamedText::new(
                "Military Rank",
                "Soldiers loyal to your former organization still recognize your authority.",
            ),
        },
    ]
}

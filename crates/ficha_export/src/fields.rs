//! External field-name contract.
//!
//! The sheet template addresses its fillable regions by Spanish field
//! names; these must be matched verbatim, diacritics and casing
//! included. Any rename on the template side is a breaking change to
//! this table, not to the domain model, so the whole surface lives in
//! one place.

use ficha_core::{Ability, Skill};

pub const FIELD_NAME: &str = "Nombre";
pub const FIELD_CLASS_LEVEL: &str = "ClaseNivel";
pub const FIELD_SPECIES: &str = "Raza";
pub const FIELD_BACKGROUND: &str = "Trasfondo";
pub const FIELD_ARMOR_CLASS: &str = "CA";
pub const FIELD_INITIATIVE: &str = "Iniciativa";
pub const FIELD_SPEED: &str = "Velocidad";
pub const FIELD_MAX_HP: &str = "PuntosGolpeMax";
pub const FIELD_PROFICIENCY_BONUS: &str = "Competencia";
pub const FIELD_PASSIVE_PERCEPTION: &str = "Percepci\u{f3}nPasiva";
pub const FIELD_LANGUAGES: &str = "Idiomas";
pub const FIELD_EQUIPMENT: &str = "Equipo";
pub const FIELD_TRAITS: &str = "Rasgos";
pub const FIELD_FEATURES: &str = "Aptitudes";
pub const FIELD_SPELLS: &str = "Conjuros";
pub const FIELD_PERSONALITY: &str = "Personalidad";
pub const FIELD_IDEALS: &str = "Ideales";
pub const FIELD_BONDS: &str = "V\u{ed}nculos";
pub const FIELD_FLAWS: &str = "Defectos";
pub const FIELD_APPEARANCE: &str = "Apariencia";
pub const FIELD_BACKSTORY: &str = "Historial";
/// Cosmetic footer region overwritten by the branding pass.
pub const FIELD_BRANDING: &str = "Generador";

pub fn score_field(ability: Ability) -> &'static str {
    match ability {
        Ability::Strength => "Fuerza",
        Ability::Dexterity => "Destreza",
        Ability::Constitution => "Constituci\u{f3}n",
        Ability::Intelligence => "Inteligencia",
        Ability::Wisdom => "Sabidur\u{ed}a",
        Ability::Charisma => "Carisma",
    }
}

pub fn modifier_field(ability: Ability) -> &'static str {
    match ability {
        Ability::Strength => "FuerzaMod",
        Ability::Dexterity => "DestrezaMod",
        Ability::Constitution => "Constituci\u{f3}nMod",
        Ability::Intelligence => "InteligenciaMod",
        Ability::Wisdom => "Sabidur\u{ed}aMod",
        Ability::Charisma => "CarismaMod",
    }
}

pub fn save_field(ability: Ability) -> &'static str {
    match ability {
        Ability::Strength => "FuerzaSalv",
        Ability::Dexterity => "DestrezaSalv",
        Ability::Constitution => "Constituci\u{f3}nSalv",
        Ability::Intelligence => "InteligenciaSalv",
        Ability::Wisdom => "Sabidur\u{ed}aSalv",
        Ability::Charisma => "CarismaSalv",
    }
}

pub fn save_toggle_field(ability: Ability) -> &'static str {
    match ability {
        Ability::Strength => "FuerzaSalvComp",
        Ability::Dexterity => "DestrezaSalvComp",
        Ability::Constitution => "Constituci\u{f3}nSalvComp",
        Ability::Intelligence => "InteligenciaSalvComp",
        Ability::Wisdom => "Sabidur\u{ed}aSalvComp",
        Ability::Charisma => "CarismaSalvComp",
    }
}

/// Domain skill -> template field, one entry per sheet skill.
pub fn skill_field(skill: Skill) -> &'static str {
    match skill {
        Skill::Acrobatics => "Acrobacias",
        Skill::AnimalHandling => "TratoConAnimales",
        Skill::Arcana => "Arcanos",
        Skill::Athletics => "Atletismo",
        Skill::Deception => "Enga\u{f1}o",
        Skill::History => "Historia",
        Skill::Insight => "Perspicacia",
        Skill::Intimidation => "Intimidaci\u{f3}n",
        Skill::Investigation => "Investigaci\u{f3}n",
        Skill::Medicine => "Medicina",
        Skill::Nature => "Naturaleza",
        Skill::Perception => "Percepci\u{f3}n",
        Skill::Performance => "Interpretaci\u{f3}n",
        Skill::Persuasion => "Persuasi\u{f3}n",
        Skill::Religion => "Religi\u{f3}n",
        Skill::SleightOfHand => "JuegoDeManos",
        Skill::Stealth => "Sigilo",
        Skill::Survival => "Supervivencia",
    }
}

/// Proficiency checkbox paired with a skill field.
pub fn skill_toggle_field(skill: Skill) -> String {
    format!("{}Comp", skill_field(skill))
}

/// Resolves a domain skill label, including intentional legacy
/// aliases, to its skill. "Atheletics" is a historical misspelling
/// that shipped in saved selections and still resolves to the same
/// template field as "Athletics"; it is a deliberate many-to-one
/// entry, not a bug to normalize away.
pub fn resolve_skill_label(label: &str) -> Option<Skill> {
    let label = label.trim();
    if label.eq_ignore_ascii_case("Atheletics") {
        return Some(Skill::Athletics);
    }
    if label.eq_ignore_ascii_case("Sleight Of Hand") {
        return Some(Skill::SleightOfHand);
    }
    Skill::from_name(label)
}

/// Template field for a domain skill label, alias spellings
/// included.
pub fn field_for_label(label: &str) -> Option<&'static str> {
    resolve_skill_label(label).map(skill_field)
}

/// Reverse lookup: template field -> domain skill.
pub fn skill_for_field(field: &str) -> Option<Skill> {
    Skill::ALL
        .iter()
        .copied()
        .find(|&skill| skill_field(skill) == field)
}

/// Text size by field-name category, applied at write time. Sizes are
/// presentation policy for the template and are never stored on the
/// sheet itself.
pub fn font_size_for(field: &str) -> u8 {
    if field == FIELD_NAME {
        return 14;
    }
    if Ability::ALL.iter().any(|&a| score_field(a) == field) {
        return 24;
    }
    let medium_box = Ability::ALL
        .iter()
        .any(|&a| modifier_field(a) == field || save_field(a) == field)
        || field == FIELD_ARMOR_CLASS
        || field == FIELD_INITIATIVE
        || field == FIELD_SPEED
        || field == FIELD_MAX_HP
        || field == FIELD_PROFICIENCY_BONUS
        || field == FIELD_PASSIVE_PERCEPTION;
    if medium_box {
        return 12;
    }
    let multiline = field == FIELD_LANGUAGES
        || field == FIELD_EQUIPMENT
        || field == FIELD_TRAITS
        || field == FIELD_FEATURES
        || field == FIELD_SPELLS
        || field == FIELD_PERSONALITY
        || field == FIELD_IDEALS
        || field == FIELD_BONDS
        || field == FIELD_FLAWS
        || field == FIELD_APPEARANCE
        || field == FIELD_BACKSTORY;
    if multiline {
        return 8;
    }
    10
}

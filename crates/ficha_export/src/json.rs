//! Canonical JSON projection of a computed sheet.
//!
//! Key order is fixed by insertion; identical input always serializes
//! to identical output.

use ficha_core::{
    CharacterSelection, DerivedSheet, POINT_BUDGET, ProgressionCell, price_allocation,
};
use serde_json::{Map as JsonMap, Value as JsonValue};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum JsonStyle {
    #[default]
    CanonicalV1,
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct FieldSelection {
    pub name: bool,
    pub species: bool,
    pub class: bool,
    pub background: bool,
    pub level: bool,
    pub abilities: bool,
    pub point_buy: bool,
    pub proficiency_bonus: bool,
    pub armor_class: bool,
    pub max_hit_points: bool,
    pub initiative: bool,
    pub passive_perception: bool,
    pub speed: bool,
    pub skills: bool,
    pub spells: bool,
    pub languages: bool,
    pub traits: bool,
    pub features: bool,
    pub equipment: bool,
    pub biography: bool,
}

impl FieldSelection {
    pub fn is_any_selected(&self) -> bool {
        self.name
            || self.species
            || self.class
            || self.background
            || self.level
            || self.abilities
            || self.point_buy
            || self.proficiency_bonus
            || self.armor_class
            || self.max_hit_points
            || self.initiative
            || self.passive_perception
            || self.speed
            || self.skills
            || self.spells
            || self.languages
            || self.traits
            || self.features
            || self.equipment
            || self.biography
    }
}

pub fn render_json_full(
    selection: &CharacterSelection,
    sheet: &DerivedSheet,
    style: JsonStyle,
) -> JsonValue {
    match style {
        JsonStyle::CanonicalV1 => JsonValue::Object(default_json(selection, sheet)),
    }
}

pub fn render_json_selected(
    selection: &CharacterSelection,
    sheet: &DerivedSheet,
    fields: &FieldSelection,
    style: JsonStyle,
) -> JsonValue {
    match style {
        JsonStyle::CanonicalV1 => JsonValue::Object(selected_json(fields, selection, sheet)),
    }
}

fn cell_to_json(cell: &ProgressionCell) -> JsonValue {
    match cell {
        ProgressionCell::Absent => JsonValue::Null,
        ProgressionCell::Numeric(value) => JsonValue::from(*value),
        ProgressionCell::Label(text) => JsonValue::String(text.clone()),
    }
}

fn abilities_to_json(sheet: &DerivedSheet) -> JsonValue {
    JsonValue::Array(
        sheet
            .abilities
            .iter()
            .map(|line| {
                let mut entry = JsonMap::new();
                entry.insert(
                    "ability".to_string(),
                    JsonValue::String(line.ability.name().to_string()),
                );
                entry.insert("score".to_string(), JsonValue::from(line.score));
                entry.insert("modifier".to_string(), JsonValue::from(line.modifier));
                entry.insert(
                    "saving_throw".to_string(),
                    JsonValue::from(line.saving_throw),
                );
                entry.insert(
                    "save_proficient".to_string(),
                    JsonValue::Bool(line.save_proficient),
                );
                JsonValue::Object(entry)
            })
            .collect(),
    )
}

fn point_buy_to_json(selection: &CharacterSelection) -> JsonValue {
    let report = price_allocation(&selection.abilities);
    let mut entry = JsonMap::new();
    entry.insert("budget".to_string(), JsonValue::from(POINT_BUDGET));
    entry.insert("spent".to_string(), JsonValue::from(report.spent));
    entry.insert("remaining".to_string(), JsonValue::from(report.remaining));
    JsonValue::Object(entry)
}

fn skills_to_json(sheet: &DerivedSheet) -> JsonValue {
    JsonValue::Array(
        sheet
            .skills
            .iter()
            .map(|line| {
                let mut entry = JsonMap::new();
                entry.insert(
                    "skill".to_string(),
                    JsonValue::String(line.skill.name().to_string()),
                );
                entry.insert(
                    "ability".to_string(),
                    JsonValue::String(line.ability.name().to_string()),
                );
                entry.insert("modifier".to_string(), JsonValue::from(line.modifier));
                entry.insert("proficient".to_string(), JsonValue::Bool(line.proficient));
                JsonValue::Object(entry)
            })
            .collect(),
    )
}

fn spells_to_json(selection: &CharacterSelection, sheet: &DerivedSheet) -> JsonValue {
    let mut entry = JsonMap::new();
    let mut resources = JsonMap::new();
    for resource in &sheet.spell_resources {
        resources.insert(resource.column.clone(), cell_to_json(&resource.value));
    }
    entry.insert("resources".to_string(), JsonValue::Object(resources));
    entry.insert(
        "known".to_string(),
        JsonValue::Array(
            selection
                .known_spells
                .iter()
                .map(|spell| JsonValue::String(spell.clone()))
                .collect(),
        ),
    );
    JsonValue::Object(entry)
}

fn strings_to_json(values: &[String]) -> JsonValue {
    JsonValue::Array(
        values
            .iter()
            .map(|value| JsonValue::String(value.clone()))
            .collect(),
    )
}

fn traits_to_json(sheet: &DerivedSheet) -> JsonValue {
    JsonValue::Array(
        sheet
            .species_traits
            .iter()
            .map(|entry| {
                let mut out = JsonMap::new();
                out.insert("name".to_string(), JsonValue::String(entry.name.clone()));
                out.insert("text".to_string(), JsonValue::String(entry.text.clone()));
                JsonValue::Object(out)
            })
            .collect(),
    )
}

fn features_to_json(sheet: &DerivedSheet) -> JsonValue {
    let mut out: Vec<JsonValue> = sheet
        .class_features
        .iter()
        .map(|name| JsonValue::String(name.clone()))
        .collect();
    if let Some(feature) = &sheet.background_feature {
        out.push(JsonValue::String(feature.name.clone()));
    }
    JsonValue::Array(out)
}

fn biography_to_json(selection: &CharacterSelection) -> JsonValue {
    let biography = &selection.biography;
    let mut entry = JsonMap::new();
    entry.insert(
        "personality".to_string(),
        JsonValue::String(biography.personality.clone()),
    );
    entry.insert(
        "ideals".to_string(),
        JsonValue::String(biography.ideals.clone()),
    );
    entry.insert(
        "bonds".to_string(),
        JsonValue::String(biography.bonds.clone()),
    );
    entry.insert(
        "flaws".to_string(),
        JsonValue::String(biography.flaws.clone()),
    );
    entry.insert(
        "appearance".to_string(),
        JsonValue::String(biography.appearance.clone()),
    );
    entry.insert(
        "backstory".to_string(),
        JsonValue::String(biography.backstory.clone()),
    );
    JsonValue::Object(entry)
}

fn name_or_null(name: &Option<String>) -> JsonValue {
    match name {
        Some(value) => JsonValue::String(value.clone()),
        None => JsonValue::Null,
    }
}

fn selected_json(
    fields: &FieldSelection,
    selection: &CharacterSelection,
    sheet: &DerivedSheet,
) -> JsonMap<String, JsonValue> {
    let mut out = JsonMap::new();

    if fields.name {
        out.insert(
            "name".to_string(),
            JsonValue::String(selection.name.clone()),
        );
    }
    if fields.species {
        out.insert("species".to_string(), name_or_null(&sheet.species_name));
    }
    if fields.class {
        out.insert("class".to_string(), name_or_null(&sheet.class_name));
    }
    if fields.background {
        out.insert(
            "background".to_string(),
            name_or_null(&sheet.background_name),
        );
    }
    if fields.level {
        out.insert("level".to_string(), JsonValue::from(selection.level));
    }
    if fields.abilities {
        out.insert("abilities".to_string(), abilities_to_json(sheet));
    }
    if fields.point_buy {
        out.insert("point_buy".to_string(), point_buy_to_json(selection));
    }
    if fields.proficiency_bonus {
        out.insert(
            "proficiency_bonus".to_string(),
            JsonValue::from(sheet.proficiency_bonus),
        );
    }
    if fields.armor_class {
        out.insert("armor_class".to_string(), JsonValue::from(sheet.armor_class));
    }
    if fields.max_hit_points {
        out.insert(
            "max_hit_points".to_string(),
            JsonValue::from(sheet.max_hit_points),
        );
    }
    if fields.initiative {
        out.insert("initiative".to_string(), JsonValue::from(sheet.initiative));
    }
    if fields.passive_perception {
        out.insert(
            "passive_perception".to_string(),
            JsonValue::from(sheet.passive_perception),
        );
    }
    if fields.speed {
        out.insert("speed".to_string(), JsonValue::from(sheet.speed));
    }
    if fields.skills {
        out.insert("skills".to_string(), skills_to_json(sheet));
    }
    if fields.spells {
        out.insert("spells".to_string(), spells_to_json(selection, sheet));
    }
    if fields.languages {
        out.insert("languages".to_string(), strings_to_json(&sheet.languages));
    }
    if fields.traits {
        out.insert("traits".to_string(), traits_to_json(sheet));
    }
    if fields.features {
        out.insert("features".to_string(), features_to_json(sheet));
    }
    if fields.equipment {
        out.insert(
            "equipment".to_string(),
            strings_to_json(&selection.equipment),
        );
    }
    if fields.biography {
        out.insert("biography".to_string(), biography_to_json(selection));
    }

    out
}

fn default_json(
    selection: &CharacterSelection,
    sheet: &DerivedSheet,
) -> JsonMap<String, JsonValue> {
    selected_json(
        &FieldSelection {
            name: true,
            species: true,
            class: true,
            background: true,
            level: true,
            abilities: true,
            point_buy: true,
            proficiency_bonus: true,
            armor_class: true,
            max_hit_points: true,
            initiative: true,
            passive_perception: true,
            speed: true,
            skills: true,
            spells: true,
            languages: true,
            traits: true,
            features: true,
            equipment: true,
            biography: true,
        },
        selection,
        sheet,
    )
}

#[cfg(test)]
mod tests {
    use ficha_core::{Catalog, CharacterSelection, compute_sheet};

    use super::{FieldSelection, JsonStyle, render_json_full, render_json_selected};

    fn sample() -> (CharacterSelection, Catalog) {
        let catalog = Catalog::builtin().expect("builtin catalog should validate");
        let selection = CharacterSelection {
            name: "Mirala".to_string(),
            species: Some("elf".to_string()),
            class: Some("wizard".to_string()),
            background: Some("sage".to_string()),
            level: 3,
            ..CharacterSelection::default()
        };
        (selection, catalog)
    }

    #[test]
    fn full_projection_keeps_canonical_key_order() {
        let (selection, catalog) = sample();
        let sheet = compute_sheet(&selection, &catalog);
        let value = render_json_full(&selection, &sheet, JsonStyle::CanonicalV1);

        let keys: Vec<&str> = value
            .as_object()
            .expect("projection should be an object")
            .keys()
            .map(String::as_str)
            .collect();
        assert_eq!(&keys[..5], &["name", "species", "class", "background", "level"]);
        assert_eq!(value["abilities"].as_array().map(Vec::len), Some(6));
        assert_eq!(value["skills"].as_array().map(Vec::len), Some(18));
        assert_eq!(value["point_buy"]["budget"], 27);
    }

    #[test]
    fn selected_projection_emits_only_requested_keys() {
        let (selection, catalog) = sample();
        let sheet = compute_sheet(&selection, &catalog);
        let fields = FieldSelection {
            name: true,
            armor_class: true,
            ..FieldSelection::default()
        };
        let value = render_json_selected(&selection, &sheet, &fields, JsonStyle::CanonicalV1);
        let object = value.as_object().expect("projection should be an object");
        assert_eq!(object.len(), 2);
        assert_eq!(value["name"], "Mirala");
    }

    #[test]
    fn spell_resources_project_as_a_column_map() {
        let (selection, catalog) = sample();
        let sheet = compute_sheet(&selection, &catalog);
        let value = render_json_full(&selection, &sheet, JsonStyle::CanonicalV1);
        assert_eq!(value["spells"]["resources"]["cantrips_known"], 3);
        assert_eq!(value["spells"]["resources"]["spell_slots_2"], 2);
    }
}

//! Sheet-to-template mapper.
//!
//! Export runs three passes over a parsed template: reset (every field
//! cleared), branding (the generator footer), and fill (the derived
//! sheet plus the selection's free text). The fill pass probes each
//! field's capability before writing and records fields the template
//! does not carry instead of failing, so one export never dies on a
//! trimmed or older template revision.

use ficha_core::{CharacterSelection, DerivedSheet};

use crate::document::{FieldKind, FormDocument};
use crate::error::ExportError;
use crate::fields;

/// Footer text written by the branding pass.
pub const GENERATOR_LABEL: &str = concat!("ficha v", env!("CARGO_PKG_VERSION"));

/// Outcome of one export: the serialized document plus an account of
/// which template fields were actually touched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportReport {
    pub bytes: Vec<u8>,
    pub written: usize,
    /// Fields the sheet wanted but the template does not declare.
    pub skipped: Vec<String>,
}

/// Signed modifier in the sheet's display form, always with a sign.
pub fn format_modifier(value: i32) -> String {
    format!("{value:+}")
}

/// A text value counts as set when it is not empty, not "0", and not
/// the "-" placeholder. Used when a toggle-shaped value lands on a
/// text field or vice versa.
fn truthy(value: &str) -> bool {
    !matches!(value.trim(), "" | "0" | "-")
}

struct Filler<'a> {
    doc: &'a mut FormDocument,
    written: usize,
    skipped: Vec<String>,
}

impl Filler<'_> {
    /// Text write with toggle fallback: a text value arriving at a
    /// toggle field checks it when the value is truthy.
    fn text(&mut self, field: &str, value: &str) {
        match self.doc.field_kind(field) {
            Some(FieldKind::Text) => {
                self.doc.set_text(field, value, fields::font_size_for(field));
                self.written += 1;
            }
            Some(FieldKind::Toggle) => {
                self.doc.set_checked(field, truthy(value));
                self.written += 1;
            }
            None => self.skipped.push(field.to_string()),
        }
    }

    /// Toggle write with text fallback: a boolean arriving at a text
    /// field leaves an "X" mark when set.
    fn toggle(&mut self, field: &str, checked: bool) {
        match self.doc.field_kind(field) {
            Some(FieldKind::Toggle) => {
                self.doc.set_checked(field, checked);
                self.written += 1;
            }
            Some(FieldKind::Text) => {
                let mark = if checked { "X" } else { "" };
                self.doc.set_text(field, mark, fields::font_size_for(field));
                self.written += 1;
            }
            None => self.skipped.push(field.to_string()),
        }
    }
}

fn spell_resource_label(column: &str) -> String {
    if column == "cantrips_known" {
        return "Trucos conocidos".to_string();
    }
    match column.strip_prefix("spell_slots_") {
        Some(level) => format!("Espacios de nivel {level}"),
        None => column.to_string(),
    }
}

fn spell_section(sheet: &DerivedSheet, selection: &CharacterSelection) -> String {
    let mut blocks = Vec::new();
    if !sheet.spell_resources.is_empty() {
        let lines: Vec<String> = sheet
            .spell_resources
            .iter()
            .map(|resource| {
                format!(
                    "{}: {}",
                    spell_resource_label(&resource.column),
                    resource.value.as_text()
                )
            })
            .collect();
        blocks.push(lines.join("\n"));
    }
    if !selection.known_spells.is_empty() {
        blocks.push(selection.known_spells.join("\n"));
    }
    blocks.join("\n\n")
}

fn named_text_section(entries: &[ficha_core::NamedText]) -> String {
    entries
        .iter()
        .map(|entry| format!("{}. {}", entry.name, entry.text))
        .collect::<Vec<_>>()
        .join("\n\n")
}

/// Fills a form template from a computed sheet and returns the
/// serialized result. `blank` skips the fill pass, producing a reset
/// and branded but otherwise empty document.
pub fn export_sheet(
    selection: &CharacterSelection,
    sheet: &DerivedSheet,
    template: &[u8],
    blank: bool,
) -> Result<ExportReport, ExportError> {
    let mut doc = FormDocument::parse(template)?;

    // Reset pass. The template may ship with stale values; export
    // output depends only on the selection, never on them.
    doc.clear_all();

    // Branding pass.
    doc.set_text(
        fields::FIELD_BRANDING,
        GENERATOR_LABEL,
        fields::font_size_for(fields::FIELD_BRANDING),
    );

    let mut filler = Filler {
        doc: &mut doc,
        written: 0,
        skipped: Vec::new(),
    };

    if !blank {
        fill(&mut filler, selection, sheet);
    }

    let Filler {
        written, skipped, ..
    } = filler;
    Ok(ExportReport {
        bytes: doc.to_bytes(),
        written,
        skipped,
    })
}

fn fill(filler: &mut Filler<'_>, selection: &CharacterSelection, sheet: &DerivedSheet) {
    filler.text(fields::FIELD_NAME, &selection.name);

    let class_level = match &sheet.class_name {
        Some(class) => format!("{} {}", class, selection.level),
        None => format!("Nivel {}", selection.level),
    };
    filler.text(fields::FIELD_CLASS_LEVEL, &class_level);
    filler.text(fields::FIELD_SPECIES, sheet.species_name.as_deref().unwrap_or(""));
    filler.text(
        fields::FIELD_BACKGROUND,
        sheet.background_name.as_deref().unwrap_or(""),
    );

    for line in &sheet.abilities {
        filler.text(fields::score_field(line.ability), &line.score.to_string());
        filler.text(
            fields::modifier_field(line.ability),
            &format_modifier(line.modifier),
        );
        filler.text(
            fields::save_field(line.ability),
            &format_modifier(line.saving_throw),
        );
        filler.toggle(fields::save_toggle_field(line.ability), line.save_proficient);
    }

    filler.text(fields::FIELD_ARMOR_CLASS, &sheet.armor_class.to_string());
    filler.text(fields::FIELD_INITIATIVE, &format_modifier(sheet.initiative));
    filler.text(fields::FIELD_SPEED, &sheet.speed.to_string());
    filler.text(fields::FIELD_MAX_HP, &sheet.max_hit_points.to_string());
    filler.text(
        fields::FIELD_PROFICIENCY_BONUS,
        &format_modifier(sheet.proficiency_bonus),
    );
    filler.text(
        fields::FIELD_PASSIVE_PERCEPTION,
        &sheet.passive_perception.to_string(),
    );

    for line in &sheet.skills {
        filler.text(
            fields::skill_field(line.skill),
            &format_modifier(line.modifier),
        );
        filler.toggle(&fields::skill_toggle_field(line.skill), line.proficient);
    }

    filler.text(fields::FIELD_LANGUAGES, &sheet.languages.join("\n\n"));
    filler.text(fields::FIELD_EQUIPMENT, &selection.equipment.join("\n\n"));
    filler.text(
        fields::FIELD_TRAITS,
        &named_text_section(&sheet.species_traits),
    );

    let mut features = sheet.class_features.join("\n\n");
    if let Some(feature) = &sheet.background_feature {
        if !features.is_empty() {
            features.push_str("\n\n");
        }
        features.push_str(&format!("{}. {}", feature.name, feature.text));
    }
    filler.text(fields::FIELD_FEATURES, &features);

    filler.text(fields::FIELD_SPELLS, &spell_section(sheet, selection));

    let biography = &selection.biography;
    filler.text(fields::FIELD_PERSONALITY, &biography.personality);
    filler.text(fields::FIELD_IDEALS, &biography.ideals);
    filler.text(fields::FIELD_BONDS, &biography.bonds);
    filler.text(fields::FIELD_FLAWS, &biography.flaws);
    filler.text(fields::FIELD_APPEARANCE, &biography.appearance);
    filler.text(fields::FIELD_BACKSTORY, &biography.backstory);
}

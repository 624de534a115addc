//! Fixed-width plain-text sheet.

use std::fmt::Write as _;

use ficha_core::{CharacterSelection, DerivedSheet};

use crate::mapper::format_modifier;

const SHEET_WIDTH: usize = 72;
const TWO_COL_WIDTH: usize = 36;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextStyle {
    #[default]
    Classic,
}

pub fn render_text(selection: &CharacterSelection, sheet: &DerivedSheet, style: TextStyle) -> String {
    match style {
        TextStyle::Classic => render_classic_sheet(selection, sheet),
    }
}

fn centered(value: &str, width: usize) -> String {
    let len = value.chars().count();
    if len >= width {
        return value.to_string();
    }
    let left_padding = (width - len) / 2;
    format!("{}{}", " ".repeat(left_padding), value)
}

fn render_classic_sheet(selection: &CharacterSelection, sheet: &DerivedSheet) -> String {
    let mut out = String::new();

    let name = if selection.name.is_empty() {
        "(unnamed)"
    } else {
        selection.name.as_str()
    };
    writeln!(&mut out, "{}", centered(name, SHEET_WIDTH))
        .expect("writing to String cannot fail");

    let identity = format!(
        "{} | {} {} | {}",
        sheet.species_name.as_deref().unwrap_or("-"),
        sheet.class_name.as_deref().unwrap_or("-"),
        selection.level,
        sheet.background_name.as_deref().unwrap_or("-"),
    );
    writeln!(&mut out, "{}", centered(&identity, SHEET_WIDTH))
        .expect("writing to String cannot fail");
    writeln!(&mut out, "{}", "=".repeat(SHEET_WIDTH)).expect("writing to String cannot fail");
    writeln!(&mut out).expect("writing to String cannot fail");

    for line in &sheet.abilities {
        let save_mark = if line.save_proficient { "*" } else { " " };
        writeln!(
            &mut out,
            "  {:<13} {:>2} ({:>3})   Save: {:>3}{}",
            line.ability.name(),
            line.score,
            format_modifier(line.modifier),
            format_modifier(line.saving_throw),
            save_mark,
        )
        .expect("writing to String cannot fail");
    }
    writeln!(&mut out).expect("writing to String cannot fail");

    let left = [
        format!("Armor Class: {}", sheet.armor_class),
        format!("Initiative: {}", format_modifier(sheet.initiative)),
        format!("Speed: {} ft.", sheet.speed),
    ];
    let right = [
        format!("Max HP: {}", sheet.max_hit_points),
        format!("Proficiency: {}", format_modifier(sheet.proficiency_bonus)),
        format!("Passive Perception: {}", sheet.passive_perception),
    ];
    for (a, b) in left.iter().zip(right.iter()) {
        writeln!(&mut out, "  {:<width$}{}", a, b, width = TWO_COL_WIDTH)
            .expect("writing to String cannot fail");
    }
    writeln!(&mut out).expect("writing to String cannot fail");

    writeln!(&mut out, "  Skills").expect("writing to String cannot fail");
    let half = sheet.skills.len().div_ceil(2);
    for row in 0..half {
        let mut line = String::from("  ");
        let skill = &sheet.skills[row];
        let mark = if skill.proficient { "*" } else { " " };
        line.push_str(&format!(
            "{:<18} {:>3}{}",
            skill.skill.name(),
            format_modifier(skill.modifier),
            mark,
        ));
        if let Some(skill) = sheet.skills.get(row + half) {
            let mark = if skill.proficient { "*" } else { " " };
            line = format!(
                "{:<width$}{:<18} {:>3}{}",
                line,
                skill.skill.name(),
                format_modifier(skill.modifier),
                mark,
                width = TWO_COL_WIDTH,
            );
        }
        writeln!(&mut out, "{}", line.trim_end()).expect("writing to String cannot fail");
    }

    if !sheet.spell_resources.is_empty() || !selection.known_spells.is_empty() {
        writeln!(&mut out).expect("writing to String cannot fail");
        writeln!(&mut out, "  Spellcasting").expect("writing to String cannot fail");
        for resource in &sheet.spell_resources {
            writeln!(
                &mut out,
                "    {}: {}",
                resource.column,
                resource.value.as_text()
            )
            .expect("writing to String cannot fail");
        }
        for spell in &selection.known_spells {
            writeln!(&mut out, "    {spell}").expect("writing to String cannot fail");
        }
    }

    if !sheet.class_features.is_empty() || sheet.background_feature.is_some() {
        writeln!(&mut out).expect("writing to String cannot fail");
        writeln!(&mut out, "  Features").expect("writing to String cannot fail");
        for feature in &sheet.class_features {
            writeln!(&mut out, "    {feature}").expect("writing to String cannot fail");
        }
        if let Some(feature) = &sheet.background_feature {
            writeln!(&mut out, "    {}", feature.name).expect("writing to String cannot fail");
        }
    }

    if !sheet.species_traits.is_empty() {
        writeln!(&mut out).expect("writing to String cannot fail");
        writeln!(&mut out, "  Traits").expect("writing to String cannot fail");
        for entry in &sheet.species_traits {
            writeln!(&mut out, "    {}", entry.name).expect("writing to String cannot fail");
        }
    }

    if !sheet.languages.is_empty() {
        writeln!(&mut out).expect("writing to String cannot fail");
        writeln!(&mut out, "  Languages: {}", sheet.languages.join(", "))
            .expect("writing to String cannot fail");
    }

    if !selection.equipment.is_empty() {
        writeln!(&mut out).expect("writing to String cannot fail");
        writeln!(&mut out, "  Equipment: {}", selection.equipment.join(", "))
            .expect("writing to String cannot fail");
    }

    out
}

#[cfg(test)]
mod tests {
    use ficha_core::{Catalog, CharacterSelection, Skill, compute_sheet};

    use super::{TextStyle, render_text};

    #[test]
    fn classic_sheet_lists_all_sections_for_a_caster() {
        let catalog = Catalog::builtin().expect("builtin catalog should validate");
        let mut selection = CharacterSelection {
            name: "Mirala".to_string(),
            species: Some("elf".to_string()),
            class: Some("wizard".to_string()),
            background: Some("sage".to_string()),
            level: 3,
            ..CharacterSelection::default()
        };
        selection.known_spells.push("Magic Missile".to_string());

        let sheet = compute_sheet(&selection, &catalog);
        let text = render_text(&selection, &sheet, TextStyle::Classic);

        assert!(text.contains("Mirala"));
        assert!(text.contains("Elf | Wizard 3 | Sage"));
        assert!(text.contains("Spellcasting"));
        assert!(text.contains("Magic Missile"));
        assert!(text.contains("Languages:"));
    }

    #[test]
    fn proficient_skills_are_starred() {
        let catalog = Catalog::builtin().expect("builtin catalog should validate");
        let mut selection = CharacterSelection {
            class: Some("rogue".to_string()),
            ..CharacterSelection::default()
        };
        selection.skill_proficiencies.insert(Skill::Stealth);

        let sheet = compute_sheet(&selection, &catalog);
        let text = render_text(&selection, &sheet, TextStyle::Classic);

        let stealth = text
            .lines()
            .find(|line| line.contains("Stealth"))
            .expect("sheet should list Stealth");
        assert!(stealth.contains("+2*"));
        let athletics = text
            .lines()
            .find(|line| line.contains("Athletics"))
            .expect("sheet should list Athletics");
        assert!(athletics.contains("+0"));
        assert!(!athletics.contains("+0*"));
    }

    #[test]
    fn empty_selection_still_renders_a_sheet() {
        let catalog = Catalog::builtin().expect("builtin catalog should validate");
        let selection = CharacterSelection::default();
        let sheet = compute_sheet(&selection, &catalog);
        let text = render_text(&selection, &sheet, TextStyle::Classic);

        assert!(text.contains("(unnamed)"));
        assert!(text.contains("- | - 1 | -"));
        assert!(!text.contains("Spellcasting"));
    }
}

use std::fs;
use std::path::PathBuf;
use std::process;

use clap::Parser;
use ficha_core::{Catalog, CharacterSelection, DerivedSheet, POINT_BUDGET, compute_sheet,
    price_allocation};
use ficha_export::{
    FieldSelection as JsonFieldSelection, JsonStyle, TextStyle, export_sheet, format_modifier,
    render_json_full, render_json_selected, render_text,
};
#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Cli {
    #[arg(value_name = "SELECTION.json")]
    path: PathBuf,
    #[arg(long)]
    name: bool,
    #[arg(long)]
    species: bool,
    #[arg(long)]
    class: bool,
    #[arg(long)]
    background: bool,
    #[arg(long)]
    level: bool,
    #[arg(long)]
    abilities: bool,
    #[arg(long)]
    points: bool,
    #[arg(long = "proficiency-bonus")]
    proficiency_bonus: bool,
    #[arg(long)]
    ac: bool,
    #[arg(long = "max-hp")]
    max_hp: bool,
    #[arg(long)]
    initiative: bool,
    #[arg(long = "passive-perception")]
    passive_perception: bool,
    #[arg(long)]
    speed: bool,
    #[arg(long)]
    skills: bool,
    #[arg(long)]
    spells: bool,
    #[arg(long)]
    languages: bool,
    #[arg(long)]
    traits: bool,
    #[arg(long)]
    features: bool,
    #[arg(long)]
    equipment: bool,
    #[arg(long)]
    biography: bool,
    #[arg(long)]
    json: bool,
    #[arg(long, value_name = "TEMPLATE.fdf")]
    export: Option<PathBuf>,
    #[arg(long)]
    output: Option<PathBuf>,
    /// Export a reset, branded but otherwise empty sheet.
    #[arg(long)]
    blank: bool,
    #[arg(long = "force-overwrite")]
    force_overwrite: bool,
}

#[derive(Debug, Default, Clone, Copy)]
struct FieldSelection {
    name: bool,
    species: bool,
    class: bool,
    background: bool,
    level: bool,
    abilities: bool,
    points: bool,
    proficiency_bonus: bool,
    ac: bool,
    max_hp: bool,
    initiative: bool,
    passive_perception: bool,
    speed: bool,
    skills: bool,
    spells: bool,
    languages: bool,
    traits: bool,
    features: bool,
    equipment: bool,
    biography: bool,
}

impl FieldSelection {
    fn from_cli(cli: &Cli) -> Self {
        Self {
            name: cli.name,
            species: cli.species,
            class: cli.class,
            background: cli.background,
            level: cli.level,
            abilities: cli.abilities,
            points: cli.points,
            proficiency_bonus: cli.proficiency_bonus,
            ac: cli.ac,
            max_hp: cli.max_hp,
            initiative: cli.initiative,
            passive_perception: cli.passive_perception,
            speed: cli.speed,
            skills: cli.skills,
            spells: cli.spells,
            languages: cli.languages,
            traits: cli.traits,
            features: cli.features,
            equipment: cli.equipment,
            biography: cli.biography,
        }
    }

    fn is_field_mode(&self) -> bool {
        self.name
            || self.species
            || self.class
            || self.background
            || self.level
            || self.abilities
            || self.points
            || self.proficiency_bonus
            || self.ac
            || self.max_hp
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

    fn to_json_fields(self) -> JsonFieldSelection {
        JsonFieldSelection {
            name: self.name,
            species: self.species,
            class: self.class,
            background: self.background,
            level: self.level,
            abilities: self.abilities,
            point_buy: self.points,
            proficiency_bonus: self.proficiency_bonus,
            armor_class: self.ac,
            max_hit_points: self.max_hp,
            initiative: self.initiative,
            passive_perception: self.passive_perception,
            speed: self.speed,
            skills: self.skills,
            spells: self.spells,
            languages: self.languages,
            traits: self.traits,
            features: self.features,
            equipment: self.equipment,
            biography: self.biography,
        }
    }

    fn selected_pairs(
        &self,
        selection: &CharacterSelection,
        sheet: &DerivedSheet,
    ) -> Vec<(&'static str, String)> {
        let mut out = Vec::new();

        if self.name {
            out.push(("name", selection.name.clone()));
        }
        if self.species {
            out.push((
                "species",
                sheet.species_name.clone().unwrap_or_else(|| "none".to_string()),
            ));
        }
        if self.class {
            out.push((
                "class",
                sheet.class_name.clone().unwrap_or_else(|| "none".to_string()),
            ));
        }
        if self.background {
            out.push((
                "background",
                sheet
                    .background_name
                    .clone()
                    .unwrap_or_else(|| "none".to_string()),
            ));
        }
        if self.level {
            out.push(("level", selection.level.to_string()));
        }
        if self.abilities {
            for line in &sheet.abilities {
                out.push((
                    "ability",
                    format!(
                        "{}={} ({})",
                        line.ability.name(),
                        line.score,
                        format_modifier(line.modifier)
                    ),
                ));
            }
        }
        if self.points {
            let report = price_allocation(&selection.abilities);
            out.push(("points_budget", POINT_BUDGET.to_string()));
            out.push(("points_spent", report.spent.to_string()));
            out.push(("points_remaining", report.remaining.to_string()));
        }
        if self.proficiency_bonus {
            out.push((
                "proficiency_bonus",
                format_modifier(sheet.proficiency_bonus),
            ));
        }
        if self.ac {
            out.push(("ac", sheet.armor_class.to_string()));
        }
        if self.max_hp {
            out.push(("max_hp", sheet.max_hit_points.to_string()));
        }
        if self.initiative {
            out.push(("initiative", format_modifier(sheet.initiative)));
        }
        if self.passive_perception {
            out.push(("passive_perception", sheet.passive_perception.to_string()));
        }
        if self.speed {
            out.push(("speed", sheet.speed.to_string()));
        }
        if self.skills {
            for line in &sheet.skills {
                let mark = if line.proficient { " [Proficient]" } else { "" };
                out.push((
                    "skill",
                    format!(
                        "{}={}{}",
                        line.skill.name(),
                        format_modifier(line.modifier),
                        mark
                    ),
                ));
            }
        }
        if self.spells {
            for resource in &sheet.spell_resources {
                out.push((
                    "spell_resource",
                    format!("{}={}", resource.column, resource.value.as_text()),
                ));
            }
            for spell in &selection.known_spells {
                out.push(("known_spell", spell.clone()));
            }
        }
        if self.languages {
            for language in &sheet.languages {
                out.push(("language", language.clone()));
            }
        }
        if self.traits {
            for entry in &sheet.species_traits {
                out.push(("trait", entry.name.clone()));
            }
        }
        if self.features {
            for feature in &sheet.class_features {
                out.push(("feature", feature.clone()));
            }
            if let Some(feature) = &sheet.background_feature {
                out.push(("feature", feature.name.clone()));
            }
        }
        if self.equipment {
            for item in &selection.equipment {
                out.push(("equipment", item.clone()));
            }
        }
        if self.biography {
            let biography = &selection.biography;
            out.push(("personality", biography.personality.clone()));
            out.push(("ideals", biography.ideals.clone()));
            out.push(("bonds", biography.bonds.clone()));
            out.push(("flaws", biography.flaws.clone()));
            out.push(("appearance", biography.appearance.clone()));
            out.push(("backstory", biography.backstory.clone()));
        }

        out
    }
}

fn main() {
    let cli = Cli::parse();
    let fields = FieldSelection::from_cli(&cli);

    if cli.export.is_some() && cli.output.is_none() {
        eprintln!("--export requires --output <PATH>");
        process::exit(2);
    }
    if cli.export.is_none() && cli.output.is_some() {
        eprintln!("--output requires --export <TEMPLATE>");
        process::exit(2);
    }
    if cli.blank && cli.export.is_none() {
        eprintln!("--blank requires --export <TEMPLATE>");
        process::exit(2);
    }

    let text = fs::read_to_string(&cli.path).unwrap_or_else(|e| {
        eprintln!("Error reading {}: {e}", cli.path.display());
        process::exit(1);
    });
    let selection: CharacterSelection = serde_json::from_str(&text).unwrap_or_else(|e| {
        eprintln!("Error parsing selection file: {}", cli.path.display());
        eprintln!("  {e}");
        process::exit(1);
    });

    let catalog = Catalog::builtin().unwrap_or_else(|e| {
        eprintln!("Error loading builtin catalog: {e}");
        process::exit(1);
    });
    let sheet = compute_sheet(&selection, &catalog);

    if let Some(template_path) = &cli.export {
        let out_path = cli.output.as_ref().expect("checked above");
        if out_path.exists() && !cli.force_overwrite {
            eprintln!(
                "refusing to overwrite existing file {} (use --force-overwrite)",
                out_path.display()
            );
            process::exit(1);
        }
        let template = fs::read(template_path).unwrap_or_else(|e| {
            eprintln!("Error reading {}: {e}", template_path.display());
            process::exit(1);
        });
        let report = export_sheet(&selection, &sheet, &template, cli.blank).unwrap_or_else(|e| {
            eprintln!("Error filling template: {e}");
            process::exit(1);
        });
        fs::write(out_path, &report.bytes).unwrap_or_else(|e| {
            eprintln!("Error writing {}: {e}", out_path.display());
            process::exit(1);
        });
        if !report.skipped.is_empty() {
            eprintln!(
                "warning: template is missing {} fields: {}",
                report.skipped.len(),
                report.skipped.join(", ")
            );
        }
        println!("Wrote filled sheet to {}", out_path.display());
        return;
    }

    if cli.json {
        let json = if fields.is_field_mode() {
            render_json_selected(
                &selection,
                &sheet,
                &fields.to_json_fields(),
                JsonStyle::CanonicalV1,
            )
        } else {
            render_json_full(&selection, &sheet, JsonStyle::CanonicalV1)
        };
        let rendered = serde_json::to_string_pretty(&json).unwrap_or_else(|e| {
            eprintln!("Error rendering JSON output: {e}");
            process::exit(1);
        });
        println!("{rendered}");
        return;
    }

    if fields.is_field_mode() {
        for (key, value) in fields.selected_pairs(&selection, &sheet) {
            println!("{key}={value}");
        }
        return;
    }

    print!("{}", render_text(&selection, &sheet, TextStyle::Classic));
}

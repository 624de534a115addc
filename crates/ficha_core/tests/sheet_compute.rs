use ficha_core::{
    Ability, Catalog, CharacterSelection, ProgressionCell, Skill, compute_sheet,
};

fn catalog() -> Catalog {
    Catalog::builtin().expect("bundled catalog should validate")
}

#[test]
fn empty_selection_yields_neutral_defaults() {
    let sheet = compute_sheet(&CharacterSelection::default(), &catalog());

    assert_eq!(sheet.armor_class, 10);
    assert_eq!(sheet.initiative, 0);
    assert_eq!(sheet.passive_perception, 10);
    assert_eq!(sheet.max_hit_points, 8);
    assert_eq!(sheet.proficiency_bonus, 2);
    assert_eq!(sheet.speed, 30);
    assert!(sheet.species_name.is_none());
    assert!(sheet.spell_resources.is_empty());
    assert!(sheet.class_features.is_empty());
    assert!(sheet.languages.is_empty());
    assert_eq!(sheet.abilities.len(), 6);
    assert_eq!(sheet.skills.len(), 18);
    for line in &sheet.abilities {
        assert_eq!(line.score, 10);
        assert_eq!(line.modifier, 0);
        assert_eq!(line.saving_throw, 0);
        assert!(!line.save_proficient);
    }
}

#[test]
fn elf_wizard_round_trip_example() {
    let mut selection = CharacterSelection {
        species: Some("elf".to_string()),
        class: Some("wizard".to_string()),
        level: 1,
        ..CharacterSelection::default()
    };
    selection.abilities.dexterity = 14;

    let sheet = compute_sheet(&selection, &catalog());

    let dex = sheet
        .ability_line(Ability::Dexterity)
        .expect("dexterity line should exist");
    assert_eq!(dex.score, 16);
    assert_eq!(dex.modifier, 3);
    assert_eq!(sheet.max_hit_points, 6);
    assert_eq!(sheet.armor_class, 13);
    assert_eq!(sheet.initiative, 3);
}

#[test]
fn species_bonus_is_applied_at_read_time_only() {
    let mut selection = CharacterSelection {
        species: Some("elf".to_string()),
        ..CharacterSelection::default()
    };
    selection.abilities.dexterity = 14;
    let before = selection.abilities;

    let elf_sheet = compute_sheet(&selection, &catalog());
    assert_eq!(selection.abilities, before);

    selection.species = Some("dwarf".to_string());
    let dwarf_sheet = compute_sheet(&selection, &catalog());
    assert_eq!(selection.abilities, before);

    let elf_dex = elf_sheet.ability_line(Ability::Dexterity).map(|l| l.score);
    let dwarf_dex = dwarf_sheet.ability_line(Ability::Dexterity).map(|l| l.score);
    assert_eq!(elf_dex, Some(16));
    assert_eq!(dwarf_dex, Some(14));
}

#[test]
fn human_grants_one_to_all_six_scores() {
    let selection = CharacterSelection {
        species: Some("human".to_string()),
        ..CharacterSelection::default()
    };
    let sheet = compute_sheet(&selection, &catalog());
    for line in &sheet.abilities {
        assert_eq!(line.score, 11, "{}", line.ability);
    }
}

#[test]
fn proficiency_is_not_stacked_across_sources() {
    // Soldier grants Athletics; the explicit choice repeats it.
    let mut selection = CharacterSelection {
        background: Some("soldier".to_string()),
        ..CharacterSelection::default()
    };
    selection.skill_proficiencies.insert(Skill::Athletics);
    selection.abilities.strength = 14;

    let sheet = compute_sheet(&selection, &catalog());
    let athletics = sheet
        .skill_line(Skill::Athletics)
        .expect("athletics line should exist");
    assert!(athletics.proficient);
    // +2 ability, +2 proficiency, applied exactly once.
    assert_eq!(athletics.modifier, 4);
}

#[test]
fn background_skills_alone_grant_proficiency() {
    let selection = CharacterSelection {
        background: Some("acolyte".to_string()),
        ..CharacterSelection::default()
    };
    let sheet = compute_sheet(&selection, &catalog());
    assert!(sheet.skill_line(Skill::Religion).is_some_and(|l| l.proficient));
    assert!(sheet.skill_line(Skill::Insight).is_some_and(|l| l.proficient));
    assert!(!sheet.skill_line(Skill::Stealth).is_some_and(|l| l.proficient));
}

#[test]
fn proficiency_bonus_follows_the_progression_row() {
    let mut selection = CharacterSelection {
        class: Some("fighter".to_string()),
        level: 1,
        ..CharacterSelection::default()
    };
    for (level, expected) in [(1, 2), (4, 2), (5, 3), (9, 4), (13, 5), (17, 6), (20, 6)] {
        selection.level = level;
        let sheet = compute_sheet(&selection, &catalog());
        assert_eq!(sheet.proficiency_bonus, expected, "level {level}");
    }
}

#[test]
fn levels_above_twenty_clamp_to_the_last_row() {
    let selection = CharacterSelection {
        class: Some("wizard".to_string()),
        level: 25,
        ..CharacterSelection::default()
    };
    let sheet = compute_sheet(&selection, &catalog());
    assert_eq!(sheet.proficiency_bonus, 6);
    let ninth = sheet
        .spell_resources
        .iter()
        .find(|r| r.column == "spell_slots_9")
        .expect("level-20 wizard should have 9th-level slots");
    assert_eq!(ninth.value, ProgressionCell::Numeric(1));
}

#[test]
fn caster_sheet_copies_spell_columns_verbatim() {
    let selection = CharacterSelection {
        class: Some("wizard".to_string()),
        level: 1,
        ..CharacterSelection::default()
    };
    let sheet = compute_sheet(&selection, &catalog());
    let columns: Vec<(&str, &ProgressionCell)> = sheet
        .spell_resources
        .iter()
        .map(|r| (r.column.as_str(), &r.value))
        .collect();
    assert_eq!(
        columns,
        vec![
            ("cantrips_known", &ProgressionCell::Numeric(3)),
            ("spell_slots_1", &ProgressionCell::Numeric(2)),
        ]
    );
}

#[test]
fn non_caster_columns_stay_out_of_the_spell_section() {
    let selection = CharacterSelection {
        class: Some("rogue".to_string()),
        level: 5,
        ..CharacterSelection::default()
    };
    let sheet = compute_sheet(&selection, &catalog());
    assert!(sheet.spell_resources.is_empty());

    let fighter = CharacterSelection {
        class: Some("fighter".to_string()),
        level: 5,
        ..CharacterSelection::default()
    };
    assert!(compute_sheet(&fighter, &catalog()).spell_resources.is_empty());
}

#[test]
fn saving_throw_proficiencies_come_from_the_class() {
    let selection = CharacterSelection {
        class: Some("wizard".to_string()),
        ..CharacterSelection::default()
    };
    let sheet = compute_sheet(&selection, &catalog());
    let int = sheet
        .ability_line(Ability::Intelligence)
        .expect("intelligence line should exist");
    assert!(int.save_proficient);
    assert_eq!(int.saving_throw, 2);
    let str_ = sheet
        .ability_line(Ability::Strength)
        .expect("strength line should exist");
    assert!(!str_.save_proficient);
    assert_eq!(str_.saving_throw, 0);
}

#[test]
fn class_features_accumulate_through_the_current_level() {
    let selection = CharacterSelection {
        class: Some("fighter".to_string()),
        level: 5,
        ..CharacterSelection::default()
    };
    let sheet = compute_sheet(&selection, &catalog());
    assert_eq!(
        sheet.class_features,
        vec![
            "Fighting Style",
            "Second Wind",
            "Action Surge",
            "Martial Archetype",
            "Ability Score Improvement",
            "Extra Attack",
        ]
    );
}

#[test]
fn unknown_catalog_ids_behave_like_no_selection() {
    let selection = CharacterSelection {
        species: Some("gnome".to_string()),
        class: Some("warlock".to_string()),
        background: Some("hermit".to_string()),
        ..CharacterSelection::default()
    };
    let sheet = compute_sheet(&selection, &catalog());
    assert!(sheet.species_name.is_none());
    assert!(sheet.class_name.is_none());
    assert!(sheet.background_name.is_none());
    assert_eq!(sheet.max_hit_points, 8);
    assert_eq!(sheet.proficiency_bonus, 2);
}

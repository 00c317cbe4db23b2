use sheet_core::{
    Ability, AbilityScores, CastingFraction, CastingMap, ClassProgression, ContentKind,
    CurrentStats, DieSize, Maneuver, Power, RawArchetype, RawCharacter, RawClass,
    ResolutionIssue, SheetInputs, Tradition, derive_casting, derive_resources, derive_superiority,
};
use serde_json::json;

fn ability_scores() -> AbilityScores {
    [
        (Ability::Strength, 2),
        (Ability::Dexterity, 3),
        (Ability::Constitution, 1),
        (Ability::Intelligence, 3),
        (Ability::Wisdom, 2),
        (Ability::Charisma, -1),
    ]
    .into_iter()
    .collect()
}

fn powers() -> Vec<Power> {
    vec![
        Power::new("Encrypted Message").with_level(0),
        Power::new("Overload").with_level(1),
        Power::new("Force Push").with_level(1),
        Power::new("Saber Reflect").with_level(0),
    ]
}

fn maneuvers() -> Vec<Maneuver> {
    vec![
        Maneuver::new("Disarming Attack"),
        Maneuver::new("Precision Attack"),
        Maneuver::new("Tactical Assessment"),
    ]
}

fn tech_map() -> CastingMap {
    [
        ("Engineer", ClassProgression::new(CastingFraction::Full)),
        ("Scout", ClassProgression::new(CastingFraction::Half)),
        (
            "Operative",
            ClassProgression::new(CastingFraction::None)
                .with_archetype("Gadgeteer Practice", CastingFraction::Third),
        ),
        (
            "Fighter",
            ClassProgression::new(CastingFraction::None)
                .with_archetype("Tactical Specialist", CastingFraction::Third),
        ),
    ]
    .into_iter()
    .collect()
}

fn force_map() -> CastingMap {
    [
        ("Consular", ClassProgression::new(CastingFraction::Full)),
        ("Guardian", ClassProgression::new(CastingFraction::TwoThirds)),
        ("Sentinel", ClassProgression::new(CastingFraction::Half)),
    ]
    .into_iter()
    .collect()
}

// ============================================================================
// Casting
// ============================================================================

#[test]
fn third_tech_caster_worked_example() {
    let character = RawCharacter::new(vec![
        RawClass::new("Operative", 6).with_archetype(
            RawArchetype::new("Gadgeteer Practice").with_powers(Tradition::Tech, ["Overload"]),
        ),
    ]);

    let casting = derive_casting(
        &character,
        &ability_scores(),
        &powers(),
        2,
        &tech_map(),
        &force_map(),
    )
    .expect("casting derives")
    .value;
    let tech = casting.tech_casting.expect("tech caster");

    // 3 + ⌈6 / 2⌉
    assert_eq!(tech.max_points, 6);
    assert_eq!(tech.attack_modifier, 5);
    assert_eq!(tech.save_dc, 13);
}

#[test]
fn zero_multiplier_classes_do_not_change_casting() {
    let caster = RawClass::new("Engineer", 5).with_powers(Tradition::Tech, ["Overload"]);
    let alone = RawCharacter::new(vec![caster.clone()]);
    let multiclassed = RawCharacter::new(vec![caster, RawClass::new("Berserker", 7)]);

    let scores = ability_scores();
    let alone = derive_casting(&alone, &scores, &powers(), 3, &tech_map(), &force_map())
        .expect("casting derives")
        .value
        .tech_casting
        .expect("tech caster");
    let multiclassed = derive_casting(
        &multiclassed,
        &scores,
        &powers(),
        3,
        &tech_map(),
        &force_map(),
    )
    .expect("casting derives")
    .value
    .tech_casting
    .expect("tech caster");

    assert_eq!(alone.max_points, multiclassed.max_points);
    assert_eq!(alone.max_power_level, multiclassed.max_power_level);
    // 3 + 5 × 2 = 13, ⌈5 / 2⌉ = 3
    assert_eq!(alone.max_points, 13);
    assert_eq!(alone.max_power_level, 3);
}

#[test]
fn tradition_without_resolved_powers_is_empty() {
    // Twenty Consular levels would reach power level 9, but no force power resolves.
    let character = RawCharacter::new(vec![
        RawClass::new("Consular", 20).with_powers(Tradition::Force, ["Force Lightning"]),
        RawClass::new("Engineer", 1).with_powers(Tradition::Tech, ["Encrypted Message"]),
    ])
    .with_current_stats(CurrentStats {
        tech_points: 2,
        force_points: 40,
        superiority_dice: 0,
    });

    let derived = derive_casting(
        &character,
        &ability_scores(),
        &powers(),
        6,
        &tech_map(),
        &force_map(),
    )
    .expect("casting derives");

    assert!(derived.value.force_casting.is_none());
    let tech = derived.value.tech_casting.expect("tech caster");
    assert_eq!(tech.current_points, 2);
    assert_eq!(
        derived.issues,
        vec![ResolutionIssue::new(ContentKind::Power, "Force Lightning", "Consular")]
    );
}

#[test]
fn mixed_force_progression() {
    let character = RawCharacter::new(vec![
        RawClass::new("Guardian", 6).with_powers(Tradition::Force, ["Saber Reflect"]),
        RawClass::new("Sentinel", 3).with_powers(Tradition::Force, ["Force Push"]),
    ]);

    let force = derive_casting(
        &character,
        &ability_scores(),
        &powers(),
        3,
        &tech_map(),
        &force_map(),
    )
    .expect("casting derives")
    .value
    .force_casting
    .expect("force caster");

    // universal = max(2, -1) = 2; 2 + 6 × 3 + 3 × 2 = 26
    assert_eq!(force.max_points, 26);
    // 6 × 2/3 + 3 × 1/2 = 5.5 → ⌈2.75⌉ = 3
    assert_eq!(force.max_power_level, 3);
    assert_eq!(force.light_save_dc, 13);
    assert_eq!(force.dark_save_dc, 10);
    assert_eq!(force.universal_save_dc, 13);
    assert_eq!(force.dark_attack_modifier, 2);
    let names: Vec<&str> = force.powers_known.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, ["Saber Reflect", "Force Push"]);
}

// ============================================================================
// Superiority
// ============================================================================

#[test]
fn two_eligible_classes_add_one_die() {
    let character = RawCharacter::new(vec![
        RawClass::new("Scholar", 5),
        RawClass::new("Fighter", 3),
    ]);
    let superiority = derive_superiority(&character, &ability_scores(), 3, &maneuvers())
        .expect("derives")
        .value
        .expect("has superiority");

    // Scholar(5) = 2 × ⌈7 / 4⌉ = 4, plus one for the Fighter
    assert_eq!(superiority.max_dice, 5);
    assert_eq!(superiority.dice_size, DieSize(6));
}

#[test]
fn three_eligible_classes_add_two_dice() {
    let character = RawCharacter::new(vec![
        RawClass::new("Fighter", 5),
        RawClass::new("Scholar", 3),
        RawClass::new("Scout", 4).with_archetype(RawArchetype::new("Deadeye Technique")),
    ]);
    let superiority = derive_superiority(&character, &ability_scores(), 3, &maneuvers())
        .expect("derives")
        .value
        .expect("has superiority");

    // Fighter(5) = 2, plus two
    assert_eq!(superiority.max_dice, 4);
    assert_eq!(superiority.dice_size.to_string(), "d4");
}

#[test]
fn deadeye_fighter_and_scholar_count_twice() {
    let character = RawCharacter::new(vec![
        RawClass::new("Fighter", 4).with_archetype(RawArchetype::new("Deadeye Technique")),
        RawClass::new("Scholar", 4),
    ]);
    let superiority = derive_superiority(&character, &ability_scores(), 2, &maneuvers())
        .expect("derives")
        .value
        .expect("has superiority");

    // Fighter(4) = 2, plus one
    assert_eq!(superiority.max_dice, 3);
}

#[test]
fn tactical_specialist_uses_tactical_formulas() {
    let character = RawCharacter::new(vec![
        RawClass::new("Fighter", 11).with_archetype(
            RawArchetype::new("Tactical Specialist").with_maneuvers(["Tactical Assessment"]),
        ),
    ]);
    let superiority = derive_superiority(&character, &ability_scores(), 4, &maneuvers())
        .expect("derives")
        .value
        .expect("has superiority");

    // 2 × (⌈13 / 8⌉ + 1) = 6; die min(2 × ⌈9 / 4⌉ + 4, 12) = 10
    assert_eq!(superiority.max_dice, 6);
    assert_eq!(superiority.dice_size, DieSize(10));
    // 8 + 4 + max(2, 3)
    assert_eq!(superiority.maneuver_save_dc, 15);
    assert_eq!(superiority.maneuvers, vec![Maneuver::new("Tactical Assessment")]);
}

#[test]
fn each_missing_maneuver_occurrence_is_reported() {
    let character = RawCharacter::new(vec![
        RawClass::new("Fighter", 3)
            .with_maneuvers(["Feint", "Disarming Attack"])
            .with_archetype(RawArchetype::new("Deadeye Technique").with_maneuvers(["Feint"])),
    ]);
    let derived =
        derive_superiority(&character, &ability_scores(), 2, &maneuvers()).expect("derives");

    assert_eq!(derived.issues.len(), 2);
    assert!(derived.issues.iter().all(|issue| issue.name == "Feint"));
    let superiority = derived.value.expect("has superiority");
    assert_eq!(superiority.max_dice, 2);
    assert_eq!(superiority.dice_size, DieSize(4));
    assert_eq!(superiority.maneuvers, vec![Maneuver::new("Disarming Attack")]);
}

// ============================================================================
// Combined sheet
// ============================================================================

#[test]
fn combined_sheet_merges_issues_in_calculator_order() {
    let inputs = SheetInputs {
        character: RawCharacter::new(vec![
            RawClass::new("Engineer", 4)
                .with_powers(Tradition::Tech, ["Overload", "Cryogenic Burst"]),
            RawClass::new("Fighter", 2).with_maneuvers(["Riposte"]),
        ]),
        ability_scores: ability_scores(),
        proficiency_bonus: 2,
        powers: powers(),
        maneuvers: maneuvers(),
        tech_casting_map: tech_map(),
        force_casting_map: force_map(),
    };

    let derived = derive_resources(&inputs).expect("sheet derives");

    assert!(derived.value.tech_casting.is_some());
    assert!(derived.value.force_casting.is_none());
    assert!(derived.value.superiority.is_some());
    let kinds: Vec<ContentKind> = derived.issues.iter().map(|issue| issue.kind).collect();
    assert_eq!(kinds, [ContentKind::Power, ContentKind::Maneuver]);
}

// ============================================================================
// JSON contract
// ============================================================================

#[test]
fn absent_blocks_serialize_as_empty_objects() {
    let inputs: SheetInputs = serde_json::from_value(json!({
        "character": {
            "classes": [
                { "name": "Scholar", "levels": 3, "maneuvers": ["Precision Attack"] }
            ],
            "currentStats": { "techPoints": 0, "forcePoints": 0, "superiorityDice": 2 }
        },
        "abilityScores": { "Intelligence": { "modifier": 3 } },
        "proficiencyBonus": 2,
        "maneuvers": [{ "name": "Precision Attack" }],
        "techCastingMap": { "Engineer": { "base": 1 } },
        "forceCastingMap": { "Consular": { "base": "1" } }
    }))
    .expect("inputs parse");

    let sheet = derive_resources(&inputs).expect("sheet derives").value;
    let json = serde_json::to_value(&sheet).expect("sheet serializes");

    assert_eq!(
        json,
        json!({
            "techCasting": {},
            "forceCasting": {},
            "superiority": {
                "currentDice": 2,
                "maxDice": 4,
                "diceSize": "d6",
                "maneuverSaveDC": 13,
                "maneuvers": [{ "name": "Precision Attack" }]
            }
        })
    );
}

#[test]
fn catalog_fields_survive_into_the_sheet() {
    let inputs: SheetInputs = serde_json::from_value(json!({
        "character": {
            "classes": [
                {
                    "name": "Consular",
                    "levels": 1,
                    "forcePowers": ["Force Push"],
                    "maneuvers": []
                },
                { "name": "Fighter", "levels": 1, "maneuvers": ["Precision Attack"] }
            ]
        },
        "abilityScores": {
            "Strength": { "modifier": 1 },
            "Dexterity": { "modifier": 1 },
            "Constitution": { "modifier": 1 },
            "Wisdom": { "modifier": 2 },
            "Charisma": { "modifier": 0 }
        },
        "proficiencyBonus": 2,
        "powers": [{
            "name": "Force Push",
            "level": 1,
            "castingPeriod": "Action",
            "range": "60 feet",
            "forceAlignment": "Universal"
        }],
        "maneuvers": [{
            "name": "Precision Attack",
            "maneuverType": "General",
            "contentSource": "PHB"
        }],
        "forceCastingMap": { "Consular": { "base": "1" } }
    }))
    .expect("inputs parse");

    let sheet = derive_resources(&inputs).expect("sheet derives").value;
    let json = serde_json::to_value(&sheet).expect("sheet serializes");

    assert_eq!(
        json["forceCasting"]["powersKnown"],
        json!([{
            "name": "Force Push",
            "level": 1,
            "castingPeriod": "Action",
            "range": "60 feet",
            "forceAlignment": "Universal"
        }])
    );
    assert_eq!(
        json["superiority"]["maneuvers"],
        json!([{
            "name": "Precision Attack",
            "maneuverType": "General",
            "contentSource": "PHB"
        }])
    );
}

#[test]
fn casting_maps_accept_fractions_as_strings_or_floats() {
    let map: CastingMap = serde_json::from_value(json!({
        "Engineer": { "base": 1 },
        "Guardian": { "base": "2/3" },
        "Scout": { "base": 0.5 },
        "Operative": { "base": 0, "Gadgeteer Practice": 0.3333333333 },
        "Fighter": { "Tactical Specialist": "1/3" }
    }))
    .expect("map parses");

    assert_eq!(map.multiplier("Engineer", None), CastingFraction::Full);
    assert_eq!(map.multiplier("Guardian", None), CastingFraction::TwoThirds);
    assert_eq!(map.multiplier("Scout", Some("Deadeye Technique")), CastingFraction::Half);
    assert_eq!(
        map.multiplier("Operative", Some("Gadgeteer Practice")),
        CastingFraction::Third
    );
    assert_eq!(map.multiplier("Operative", None), CastingFraction::None);
    assert_eq!(
        map.multiplier("Fighter", Some("Tactical Specialist")),
        CastingFraction::Third
    );
    assert_eq!(map.multiplier("Fighter", Some("Deadeye Technique")), CastingFraction::None);
}

#[test]
fn casting_maps_reject_non_canonical_fractions() {
    for rate in [json!(0.75), json!("3/4"), json!("0.5"), json!(true)] {
        let parsed = serde_json::from_value::<CastingMap>(json!({ "Sentinel": { "base": rate } }));
        assert!(parsed.is_err(), "{rate} should be rejected");
    }
}

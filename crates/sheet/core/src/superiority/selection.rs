//! Primary superiority class selection.
//!
//! Resolution runs in two steps: pick the first eligible class in
//! class-selection order, then map it to a [`RuleSet`] through the archetype
//! override table before falling back to the class's own rule set.

use super::rules::RuleSet;
use crate::character::{RawCharacter, RawClass};

/// Classes that grant superiority on their own.
const SUPERIORITY_CLASSES: &[&str] = &["Fighter", "Scholar"];

/// Archetypes that grant superiority regardless of class.
const SUPERIORITY_ARCHETYPES: &[&str] = &["Deadeye Technique"];

/// Archetypes whose rule set replaces the class's own.
const ARCHETYPE_OVERRIDES: &[(&str, RuleSet)] = &[("Tactical Specialist", RuleSet::Tactical)];

pub fn is_superiority_class(class: &RawClass) -> bool {
    SUPERIORITY_CLASSES.contains(&class.name.as_str())
        || class
            .archetype_name()
            .is_some_and(|name| SUPERIORITY_ARCHETYPES.contains(&name))
}

/// Rule set for an eligible class, honoring archetype overrides.
pub fn rule_set_for(class: &RawClass) -> RuleSet {
    class
        .archetype_name()
        .and_then(|archetype| {
            ARCHETYPE_OVERRIDES
                .iter()
                .find(|(name, _)| *name == archetype)
                .map(|(_, rule_set)| *rule_set)
        })
        .unwrap_or_else(|| RuleSet::for_class(&class.name))
}

/// The class whose levels drive the superiority pool.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PrimaryClass<'a> {
    pub class: Option<&'a RawClass>,
    pub rule_set: RuleSet,
}

impl<'a> PrimaryClass<'a> {
    pub fn select(character: &'a RawCharacter) -> Self {
        let class = character.classes.iter().find(|class| is_superiority_class(class));
        let rule_set = class.map(rule_set_for).unwrap_or_default();
        Self { class, rule_set }
    }

    /// Levels in the primary class; zero without one.
    pub fn level(&self) -> u32 {
        self.class.map_or(0, |class| class.levels)
    }

    pub fn max_dice(&self) -> u32 {
        self.rule_set.max_dice(self.level())
    }

    pub fn dice_size(&self) -> u32 {
        self.rule_set.dice_size(self.level())
    }
}

/// One extra die for every eligible class beyond the first.
pub fn multiclass_dice_bonus(character: &RawCharacter) -> u32 {
    let eligible = character
        .classes
        .iter()
        .filter(|class| is_superiority_class(class))
        .count();
    u32::try_from(eligible.saturating_sub(1)).unwrap_or(u32::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::character::RawArchetype;

    #[test]
    fn eligibility_by_name_or_archetype() {
        assert!(is_superiority_class(&RawClass::new("Fighter", 1)));
        assert!(is_superiority_class(&RawClass::new("Scholar", 1)));
        assert!(is_superiority_class(
            &RawClass::new("Scout", 3).with_archetype(RawArchetype::new("Deadeye Technique"))
        ));
        assert!(!is_superiority_class(&RawClass::new("Scout", 3)));
        assert!(!is_superiority_class(
            &RawClass::new("Operative", 3).with_archetype(RawArchetype::new("Tactical Specialist"))
        ));
    }

    #[test]
    fn first_eligible_class_is_primary() {
        let character = RawCharacter::new(vec![
            RawClass::new("Consular", 4),
            RawClass::new("Scholar", 2),
            RawClass::new("Fighter", 9),
        ]);
        let primary = PrimaryClass::select(&character);
        assert_eq!(primary.rule_set, RuleSet::Scholar);
        assert_eq!(primary.level(), 2);
    }

    #[test]
    fn tactical_specialist_overrides_class_rules() {
        let character = RawCharacter::new(vec![
            RawClass::new("Fighter", 3).with_archetype(RawArchetype::new("Tactical Specialist")),
        ]);
        let primary = PrimaryClass::select(&character);
        assert_eq!(primary.rule_set, RuleSet::Tactical);
        // 2 × (⌈5 / 8⌉ + 1) = 4, die min(2 × ⌈1 / 4⌉ + 4, 12) = 6
        assert_eq!(primary.max_dice(), 4);
        assert_eq!(primary.dice_size(), 6);
    }

    #[test]
    fn deadeye_on_unmapped_class_has_no_rules() {
        let character = RawCharacter::new(vec![
            RawClass::new("Operative", 5).with_archetype(RawArchetype::new("Deadeye Technique")),
        ]);
        let primary = PrimaryClass::select(&character);
        assert!(primary.class.is_some());
        assert_eq!(primary.rule_set, RuleSet::None);
        assert_eq!(primary.dice_size(), 0);
    }

    #[test]
    fn no_eligible_class_selects_none() {
        let character = RawCharacter::new(vec![RawClass::new("Consular", 4)]);
        let primary = PrimaryClass::select(&character);
        assert_eq!(primary.class, None);
        assert_eq!(primary.rule_set, RuleSet::None);
        assert_eq!(primary.level(), 0);
        assert_eq!(multiclass_dice_bonus(&character), 0);
    }

    #[test]
    fn multiclass_bonus_counts_every_eligible_class() {
        let character = RawCharacter::new(vec![
            RawClass::new("Fighter", 4).with_archetype(RawArchetype::new("Deadeye Technique")),
            RawClass::new("Scholar", 4),
            RawClass::new("Scout", 2).with_archetype(RawArchetype::new("Deadeye Technique")),
        ]);
        assert_eq!(multiclass_dice_bonus(&character), 2);
    }
}

/// Rule constants shared by the casting and superiority calculators.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RulesConfig;

impl RulesConfig {
    /// Flat base added to every save DC (`8 + modifier + proficiency`).
    pub const SAVE_DC_BASE: i32 = 8;
    /// Cap applied to `ceil(casting_level / 2)`.
    pub const MAX_POWER_LEVEL: u32 = 9;
    /// Largest superiority die any rule set grows into.
    pub const MAX_SUPERIORITY_DIE: u32 = 12;
    /// Scholar dice pool cap.
    pub const MAX_SCHOLAR_DICE: u32 = 10;

    /// Save DC for a casting or maneuver ability.
    pub const fn save_dc(modifier: i32, proficiency_bonus: i32) -> i32 {
        Self::SAVE_DC_BASE + modifier + proficiency_bonus
    }

    /// Attack modifier for a casting ability.
    pub const fn attack_modifier(modifier: i32, proficiency_bonus: i32) -> i32 {
        modifier + proficiency_bonus
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn save_dc_adds_base_modifier_and_proficiency() {
        // 8 + 3 + 2
        assert_eq!(RulesConfig::save_dc(3, 2), 13);
        // 8 + (-1) + 2
        assert_eq!(RulesConfig::save_dc(-1, 2), 9);
    }

    #[test]
    fn attack_modifier_omits_base() {
        assert_eq!(RulesConfig::attack_modifier(3, 2), 5);
    }
}

//! Read-only rules registry.
//!
//! Every lookup answers. A class lookup tries the class's own table, then the
//! `"Default"` entry, then a hard default documented on the accessor.

use std::collections::{BTreeMap, HashMap};
use std::str::FromStr;

use super::config::{
    find_band, Band, ClassTableConfig, GameSystemConfig, LevelXp, PrimeRequisiteConfig,
    SpellSlotRow,
};
use crate::character::SavingThrows;
use crate::value_objects::{
    AbilityScores, AbilityType, CharacterClass, CoinType, DieType, Language, MagicType, SpellType,
};

const DEFAULT_CLASS_KEY: &str = "Default";

/// One prime-requisite condition: every listed ability must meet its minimum.
#[derive(Debug, Clone, PartialEq)]
pub struct PrimeCondition {
    pub minimums: Vec<(AbilityType, i32)>,
    pub multiplier: f64,
}

impl PrimeCondition {
    pub fn is_met(&self, abilities: &AbilityScores) -> bool {
        self.minimums
            .iter()
            .all(|(ability, minimum)| abilities.value(*ability) >= *minimum)
    }
}

/// How a class turns ability scores into an XP multiplier.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PrimeRequisiteRule {
    pub primary_ability: Option<AbilityType>,
    /// Checked in order; the first satisfied condition wins.
    pub conditions: Vec<PrimeCondition>,
}

/// Per-class spell slot counts for spell levels 1 to 6.
pub type SpellSlots = [u8; 6];

#[derive(Debug, Clone, Default)]
struct ClassRules {
    hit_die: Option<DieType>,
    max_level: Option<u8>,
    hit_die_modifiers: Vec<Band<i32>>,
    xp_for_next_level: Vec<LevelXp>,
    xp_modifiers: Vec<Band<f64>>,
    prime_requisite: Option<PrimeRequisiteRule>,
    thac0: Vec<Band<i32>>,
    attack_bonus: Vec<Band<i32>>,
    saving_throws: Vec<Band<SavingThrows>>,
    starting_languages: Vec<Language>,
    magic_type: Option<MagicType>,
    spell_type: Option<SpellType>,
    spell_slots: Vec<SpellSlotRow>,
    spell_lists: BTreeMap<u8, Vec<String>>,
    turning: Vec<Band<BTreeMap<String, String>>>,
}

/// Enum-keyed view over a [`GameSystemConfig`].
#[derive(Debug, Clone, Default)]
pub struct RulesRegistry {
    game_system: String,
    version: String,
    languages: Vec<Language>,
    ability_modifiers: Vec<Band<i32>>,
    max_retainers: Vec<Band<i32>>,
    retainer_loyalty: Vec<Band<i32>>,
    reaction_bonus: Vec<Band<i32>>,
    literacy: Vec<Band<String>>,
    additional_languages: Vec<Band<i32>>,
    open_doors: Vec<Band<String>>,
    coin_conversion: HashMap<CoinType, f64>,
    classes: HashMap<CharacterClass, ClassRules>,
    fallback: ClassRules,
    skipped_keys: Vec<String>,
}

/// Parses each name, collecting the ones that are not part of the vocabulary.
fn parse_all<T: FromStr>(names: &[String], context: &str, skipped: &mut Vec<String>) -> Vec<T> {
    names
        .iter()
        .filter_map(|name| match name.parse() {
            Ok(value) => Some(value),
            Err(_) => {
                skipped.push(format!("{}: {}", context, name));
                None
            }
        })
        .collect()
}

fn parse_optional<T: FromStr>(
    name: Option<&String>,
    context: &str,
    skipped: &mut Vec<String>,
) -> Option<T> {
    let name = name?;
    match name.parse() {
        Ok(value) => Some(value),
        Err(_) => {
            skipped.push(format!("{}: {}", context, name));
            None
        }
    }
}

fn prime_requisite_rule(
    config: &PrimeRequisiteConfig,
    context: &str,
    skipped: &mut Vec<String>,
) -> PrimeRequisiteRule {
    let primary_ability = match config.primary_ability.as_deref() {
        None | Some("None") | Some("") => None,
        Some(name) => parse_optional(Some(&name.to_string()), context, skipped),
    };
    let conditions = config
        .conditions
        .iter()
        .map(|condition| PrimeCondition {
            minimums: condition
                .minimums
                .iter()
                .filter_map(|(name, minimum)| {
                    parse_optional::<AbilityType>(Some(name), context, skipped)
                        .map(|ability| (ability, *minimum))
                })
                .collect(),
            multiplier: condition.multiplier,
        })
        .collect();
    PrimeRequisiteRule {
        primary_ability,
        conditions,
    }
}

impl ClassRules {
    fn from_config(name: &str, config: ClassTableConfig, skipped: &mut Vec<String>) -> Self {
        let context = format!("classes.{}", name);
        let hit_die = parse_optional(
            config.hit_die.as_ref(),
            &format!("{}.hit_die", context),
            skipped,
        );
        let starting_languages = parse_all(
            &config.starting_languages,
            &format!("{}.starting_languages", context),
            skipped,
        );
        let magic_type = parse_optional(
            config.magic_type.as_ref(),
            &format!("{}.magic_type", context),
            skipped,
        );
        let spell_type = parse_optional(
            config.spell_type.as_ref(),
            &format!("{}.spell_type", context),
            skipped,
        );
        let prime_requisite = config.prime_requisite.as_ref().map(|rule| {
            prime_requisite_rule(rule, &format!("{}.prime_requisite", context), skipped)
        });

        Self {
            hit_die,
            max_level: config.max_level,
            hit_die_modifiers: config.hit_die_modifiers,
            xp_for_next_level: config.xp_for_next_level,
            xp_modifiers: config.xp_modifiers,
            prime_requisite,
            thac0: config.thac0,
            attack_bonus: config.attack_bonus,
            saving_throws: config.saving_throws,
            starting_languages,
            magic_type,
            spell_type,
            spell_slots: config.spell_slots,
            spell_lists: config.spell_lists,
            turning: config.turning,
        }
    }
}

impl RulesRegistry {
    /// Turns the textual document into enum-keyed tables.
    ///
    /// Never fails: names outside the closed vocabularies are dropped and
    /// reported through [`RulesRegistry::skipped_keys`].
    pub fn from_config(config: GameSystemConfig) -> Self {
        let mut skipped = Vec::new();

        let languages = parse_all(&config.languages, "languages", &mut skipped);

        let mut coin_conversion = HashMap::new();
        for (name, rate) in &config.coin_conversion {
            match name.parse::<CoinType>() {
                Ok(coin) => {
                    coin_conversion.insert(coin, *rate);
                }
                Err(_) => skipped.push(format!("coin_conversion: {}", name)),
            }
        }

        let mut classes = HashMap::new();
        let mut fallback = ClassRules::default();
        for (name, table) in config.classes {
            if name == DEFAULT_CLASS_KEY {
                fallback = ClassRules::from_config(&name, table, &mut skipped);
                continue;
            }
            match name.parse::<CharacterClass>() {
                Ok(class) => {
                    classes.insert(class, ClassRules::from_config(&name, table, &mut skipped));
                }
                Err(_) => skipped.push(format!("classes: {}", name)),
            }
        }

        Self {
            game_system: config.game_system,
            version: config.version,
            languages,
            ability_modifiers: config.ability_modifiers,
            max_retainers: config.max_retainers,
            retainer_loyalty: config.retainer_loyalty,
            reaction_bonus: config.reaction_bonus,
            literacy: config.literacy,
            additional_languages: config.additional_languages,
            open_doors: config.open_doors,
            coin_conversion,
            classes,
            fallback,
            skipped_keys: skipped,
        }
    }

    pub fn game_system(&self) -> &str {
        &self.game_system
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    /// Configuration entries that named nothing in the vocabulary.
    pub fn skipped_keys(&self) -> &[String] {
        &self.skipped_keys
    }

    /// Every language in the game, in document order.
    pub fn languages(&self) -> &[Language] {
        &self.languages
    }

    /// Class table first, then the `"Default"` table.
    fn class_lookup<'a, T>(
        &'a self,
        class: CharacterClass,
        f: impl Fn(&'a ClassRules) -> Option<T>,
    ) -> Option<T> {
        self.classes.get(&class).and_then(&f).or_else(|| f(&self.fallback))
    }

    // =========================================================================
    // Ability-score tables
    // =========================================================================

    /// Modifier for an ability value. Default 0.
    pub fn ability_modifier(&self, score: i32) -> i32 {
        find_band(&self.ability_modifiers, score).copied().unwrap_or(0)
    }

    /// Retainers a character of this Charisma may hire. Default 0.
    pub fn max_retainers(&self, charisma: i32) -> i32 {
        find_band(&self.max_retainers, charisma).copied().unwrap_or(0)
    }

    /// Base retainer morale for this Charisma. Default 0.
    pub fn retainer_loyalty(&self, charisma: i32) -> i32 {
        find_band(&self.retainer_loyalty, charisma).copied().unwrap_or(0)
    }

    /// NPC reaction roll adjustment. Default 0.
    pub fn npc_reaction_bonus(&self, charisma: i32) -> i32 {
        find_band(&self.reaction_bonus, charisma).copied().unwrap_or(0)
    }

    /// Literacy tier for this Intelligence. Default `"UNKNOWN"`.
    pub fn literacy(&self, intelligence: i32) -> &str {
        find_band(&self.literacy, intelligence).map_or("UNKNOWN", String::as_str)
    }

    /// Extra languages this Intelligence allows. Default 0.
    pub fn additional_languages(&self, intelligence: i32) -> i32 {
        find_band(&self.additional_languages, intelligence)
            .copied()
            .unwrap_or(0)
    }

    /// Chance to force a stuck door. Default `"1-in-6"`.
    pub fn open_door_chance(&self, strength: i32) -> &str {
        find_band(&self.open_doors, strength).map_or("1-in-6", String::as_str)
    }

    /// Gold pieces per coin. Default 1.0.
    pub fn coin_conversion_rate(&self, coin: CoinType) -> f64 {
        self.coin_conversion.get(&coin).copied().unwrap_or(1.0)
    }

    // =========================================================================
    // Class progression
    // =========================================================================

    /// Hit die rolled per level. Default d6.
    pub fn hit_die(&self, class: CharacterClass) -> DieType {
        self.class_lookup(class, |rules| rules.hit_die)
            .unwrap_or(DieType::D6)
    }

    /// Flat hit points granted per level once dice stop being rolled.
    /// Zero or less means "roll the hit die". Default 0.
    pub fn hit_die_modifier(&self, class: CharacterClass, level: u8) -> i32 {
        self.class_lookup(class, |rules| {
            find_band(&rules.hit_die_modifiers, i32::from(level)).copied()
        })
        .unwrap_or(0)
    }

    /// Highest attainable level. Default 0 (the class cannot advance).
    pub fn max_level(&self, class: CharacterClass) -> u8 {
        self.class_lookup(class, |rules| rules.max_level)
            .unwrap_or(0)
    }

    /// XP total needed to leave `current_level`. Default 0 (no further levels).
    pub fn xp_for_next_level(&self, class: CharacterClass, current_level: u8) -> u32 {
        self.class_lookup(class, |rules| {
            rules
                .xp_for_next_level
                .iter()
                .find(|row| row.level == current_level)
                .map(|row| row.xp)
        })
        .unwrap_or(0)
    }

    /// XP multiplier for a prime-requisite score. Default 1.0.
    pub fn xp_modifier(&self, class: CharacterClass, score: i32) -> f64 {
        self.class_lookup(class, |rules| find_band(&rules.xp_modifiers, score).copied())
            .unwrap_or(1.0)
    }

    /// Default: no primary ability and no conditions.
    pub fn prime_requisite(&self, class: CharacterClass) -> PrimeRequisiteRule {
        self.class_lookup(class, |rules| rules.prime_requisite.clone())
            .unwrap_or_default()
    }

    /// Multiplier applied to every future XP award.
    ///
    /// The first satisfied condition wins. Otherwise the primary ability's
    /// score is looked up; with no primary ability the multiplier is 0.0.
    pub fn xp_multiplier(&self, class: CharacterClass, abilities: &AbilityScores) -> f64 {
        let rule = self.prime_requisite(class);
        if let Some(condition) = rule.conditions.iter().find(|c| c.is_met(abilities)) {
            return condition.multiplier;
        }
        match rule.primary_ability {
            Some(ability) => self.xp_modifier(class, abilities.value(ability)),
            None => 0.0,
        }
    }

    // =========================================================================
    // Combat and saves
    // =========================================================================

    /// Roll needed to hit armour class 0. Default 19.
    pub fn to_hit_ac0(&self, class: CharacterClass, level: u8) -> i32 {
        self.class_lookup(class, |rules| find_band(&rules.thac0, i32::from(level)).copied())
            .unwrap_or(19)
    }

    /// Attack bonus against ascending armour class. Default 0.
    pub fn attack_bonus(&self, class: CharacterClass, level: u8) -> i32 {
        self.class_lookup(class, |rules| {
            find_band(&rules.attack_bonus, i32::from(level)).copied()
        })
        .unwrap_or(0)
    }

    /// Default: [`SavingThrows::UNLISTED`].
    pub fn saving_throws(&self, class: CharacterClass, level: u8) -> SavingThrows {
        self.class_lookup(class, |rules| {
            find_band(&rules.saving_throws, i32::from(level)).copied()
        })
        .unwrap_or(SavingThrows::UNLISTED)
    }

    /// Cleric-style turning result against undead of the given hit dice.
    /// Default `"-"` (no chance).
    pub fn turning_result(&self, class: CharacterClass, level: u8, monster_hit_dice: &str) -> &str {
        self.class_lookup(class, |rules| {
            find_band(&rules.turning, i32::from(level))
                .and_then(|row| turning_column(row, monster_hit_dice))
        })
        .unwrap_or("-")
    }

    // =========================================================================
    // Languages and magic
    // =========================================================================

    /// Default: none.
    pub fn starting_languages(&self, class: CharacterClass) -> Vec<Language> {
        self.class_lookup(class, |rules| {
            (!rules.starting_languages.is_empty()).then(|| rules.starting_languages.clone())
        })
        .unwrap_or_default()
    }

    /// Default: [`MagicType::None`].
    pub fn magic_type(&self, class: CharacterClass) -> MagicType {
        self.class_lookup(class, |rules| rules.magic_type)
            .unwrap_or_default()
    }

    /// Default: [`SpellType::None`].
    pub fn spell_type(&self, class: CharacterClass) -> SpellType {
        self.class_lookup(class, |rules| rules.spell_type)
            .unwrap_or_default()
    }

    /// Spells per day for spell levels 1 to 6. Default all zero.
    pub fn spell_slots(&self, class: CharacterClass, level: u8) -> SpellSlots {
        self.class_lookup(class, |rules| {
            rules
                .spell_slots
                .iter()
                .find(|row| row.level == level)
                .map(|row| row.slots)
        })
        .unwrap_or([0; 6])
    }

    /// Spell names of one spell level. Default empty.
    pub fn spell_list(&self, class: CharacterClass, spell_level: u8) -> &[String] {
        self.class_lookup(class, |rules| {
            rules.spell_lists.get(&spell_level).map(Vec::as_slice)
        })
        .unwrap_or(&[])
    }

    /// Spell level of a named spell on the class list, ignoring case.
    pub fn find_spell(&self, class: CharacterClass, name: &str) -> Option<(u8, &str)> {
        (1..=6).find_map(|level| {
            self.spell_list(class, level)
                .iter()
                .find(|spell| spell.eq_ignore_ascii_case(name.trim()))
                .map(|spell| (level, spell.as_str()))
        })
    }
}

/// Column for a monster's hit dice: an exact key ("2*"), then a range key
/// ("7-9") or open key ("9+") containing the numeric value.
fn turning_column<'a>(row: &'a BTreeMap<String, String>, hit_dice: &str) -> Option<&'a str> {
    let hit_dice = hit_dice.trim();
    if let Some(result) = row.get(hit_dice) {
        return Some(result.as_str());
    }
    let hd: i32 = hit_dice.trim_end_matches('*').parse().ok()?;
    row.iter().find_map(|(key, result)| {
        let matched = if let Some(open) = key.strip_suffix('+') {
            open.parse::<i32>().is_ok_and(|min| hd >= min)
        } else if let Some((lo, hi)) = key.split_once('-') {
            matches!((lo.parse::<i32>(), hi.parse::<i32>()), (Ok(lo), Ok(hi)) if lo <= hd && hd <= hi)
        } else {
            key.parse::<i32>().is_ok_and(|exact| exact == hd)
        };
        matched.then_some(result.as_str())
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::ose_rules;

    fn empty() -> RulesRegistry {
        RulesRegistry::from_config(GameSystemConfig::default())
    }

    mod loading {
        use super::*;

        #[test]
        fn test_bundled_rules_load_without_skips() {
            let rules = ose_rules();
            assert_eq!(rules.game_system(), "Old-School Essentials");
            assert!(rules.skipped_keys().is_empty(), "{:?}", rules.skipped_keys());
        }

        #[test]
        fn test_unknown_names_are_skipped_not_fatal() {
            let config: GameSystemConfig = serde_json::from_str(
                r#"{
                    "languages": ["Elvish", "Klingon"],
                    "coin_conversion": {"Gold": 1.0, "Mithril": 50.0},
                    "classes": {
                        "Bard": {"max_level": 10},
                        "Fighter": {"hit_die": "D7", "max_level": 14}
                    }
                }"#,
            )
            .unwrap();
            let rules = RulesRegistry::from_config(config);

            assert_eq!(rules.languages(), &[Language::Elvish]);
            assert_eq!(rules.max_level(CharacterClass::Fighter), 14);
            assert_eq!(rules.hit_die(CharacterClass::Fighter), DieType::D6);
            let skipped = rules.skipped_keys().join("; ");
            assert!(skipped.contains("Klingon"));
            assert!(skipped.contains("Mithril"));
            assert!(skipped.contains("Bard"));
            assert!(skipped.contains("D7"));
        }
    }

    mod defaults {
        use super::*;

        #[test]
        fn test_empty_registry_answers_every_lookup() {
            let rules = empty();
            let class = CharacterClass::Fighter;
            assert_eq!(rules.ability_modifier(13), 0);
            assert_eq!(rules.max_retainers(13), 0);
            assert_eq!(rules.retainer_loyalty(13), 0);
            assert_eq!(rules.npc_reaction_bonus(13), 0);
            assert_eq!(rules.literacy(13), "UNKNOWN");
            assert_eq!(rules.additional_languages(13), 0);
            assert_eq!(rules.open_door_chance(13), "1-in-6");
            assert_eq!(rules.coin_conversion_rate(CoinType::Silver), 1.0);
            assert_eq!(rules.hit_die(class), DieType::D6);
            assert_eq!(rules.hit_die_modifier(class, 12), 0);
            assert_eq!(rules.max_level(class), 0);
            assert_eq!(rules.xp_for_next_level(class, 1), 0);
            assert_eq!(rules.xp_modifier(class, 16), 1.0);
            assert_eq!(rules.to_hit_ac0(class, 1), 19);
            assert_eq!(rules.attack_bonus(class, 1), 0);
            assert_eq!(rules.saving_throws(class, 1), SavingThrows::UNLISTED);
            assert!(rules.starting_languages(class).is_empty());
            assert_eq!(rules.magic_type(class), MagicType::None);
            assert_eq!(rules.spell_type(class), SpellType::None);
            assert_eq!(rules.spell_slots(class, 1), [0; 6]);
            assert!(rules.spell_list(class, 1).is_empty());
            assert_eq!(rules.turning_result(CharacterClass::Cleric, 1, "1"), "-");
        }

        #[test]
        fn test_no_prime_requisite_means_zero_multiplier() {
            let rules = empty();
            let abilities = AbilityScores::new(&rules);
            assert_eq!(rules.xp_multiplier(CharacterClass::Thief, &abilities), 0.0);
        }

        #[test]
        fn test_default_entry_backs_missing_class_tables() {
            let config: GameSystemConfig = serde_json::from_str(
                r#"{"classes": {
                    "Default": {"xp_for_next_level": [{"level": 1, "xp": 2000}]},
                    "Thief": {"xp_for_next_level": [{"level": 1, "xp": 1200}]}
                }}"#,
            )
            .unwrap();
            let rules = RulesRegistry::from_config(config);
            assert_eq!(rules.xp_for_next_level(CharacterClass::Thief, 1), 1200);
            assert_eq!(rules.xp_for_next_level(CharacterClass::Cleric, 1), 2000);
            assert_eq!(rules.xp_for_next_level(CharacterClass::Cleric, 2), 0);
        }
    }

    mod ose_tables {
        use super::*;

        #[test]
        fn test_ability_modifier_bands() {
            let rules = ose_rules();
            let expected = [
                (3, -3),
                (4, -2),
                (5, -2),
                (6, -1),
                (8, -1),
                (9, 0),
                (12, 0),
                (13, 1),
                (15, 1),
                (16, 2),
                (17, 2),
                (18, 3),
            ];
            for (score, modifier) in expected {
                assert_eq!(rules.ability_modifier(score), modifier, "score {}", score);
            }
        }

        #[test]
        fn test_charisma_tables() {
            let rules = ose_rules();
            assert_eq!(rules.max_retainers(3), 1);
            assert_eq!(rules.max_retainers(18), 7);
            assert_eq!(rules.retainer_loyalty(10), 7);
            assert_eq!(rules.npc_reaction_bonus(18), 2);
            assert_eq!(rules.npc_reaction_bonus(4), -1);
        }

        #[test]
        fn test_intelligence_and_strength_tables() {
            let rules = ose_rules();
            assert_eq!(rules.literacy(3), "Illiterate");
            assert_eq!(rules.literacy(7), "Basic");
            assert_eq!(rules.literacy(9), "Literate");
            assert_eq!(rules.additional_languages(12), 0);
            assert_eq!(rules.additional_languages(16), 2);
            assert_eq!(rules.open_door_chance(9), "2-in-6");
            assert_eq!(rules.open_door_chance(18), "5-in-6");
        }

        #[test]
        fn test_fighter_progression() {
            let rules = ose_rules();
            let fighter = CharacterClass::Fighter;
            assert_eq!(rules.hit_die(fighter), DieType::D8);
            assert_eq!(rules.max_level(fighter), 14);
            assert_eq!(rules.xp_for_next_level(fighter, 1), 2000);
            assert_eq!(rules.xp_for_next_level(fighter, 2), 4000);
            assert_eq!(rules.xp_for_next_level(fighter, 14), 0);
            assert_eq!(rules.hit_die_modifier(fighter, 9), 0);
            assert_eq!(rules.hit_die_modifier(fighter, 10), 2);
            assert_eq!(rules.to_hit_ac0(fighter, 4), 17);
            assert_eq!(rules.attack_bonus(fighter, 4), 2);
            assert_eq!(
                rules.starting_languages(fighter),
                vec![Language::Alignment, Language::Common]
            );
        }

        #[test]
        fn test_single_prime_requisite_multiplier() {
            let rules = ose_rules();
            let mut abilities = AbilityScores::new(&rules);
            let fighter = CharacterClass::Fighter;
            assert_eq!(rules.xp_multiplier(fighter, &abilities), 1.0);
            abilities.set(AbilityType::Strength, 16, &rules);
            assert_eq!(rules.xp_multiplier(fighter, &abilities), 1.1);
            abilities.set(AbilityType::Strength, 5, &rules);
            assert_eq!(rules.xp_multiplier(fighter, &abilities), 0.8);
        }

        #[test]
        fn test_multi_condition_prime_requisite_first_match_wins() {
            let rules = ose_rules();
            let elf = CharacterClass::Elf;
            let mut abilities = AbilityScores::new(&rules);
            assert_eq!(rules.xp_multiplier(elf, &abilities), 1.0);

            abilities.set(AbilityType::Intelligence, 13, &rules);
            abilities.set(AbilityType::Strength, 13, &rules);
            assert_eq!(rules.xp_multiplier(elf, &abilities), 1.05);

            abilities.set(AbilityType::Intelligence, 16, &rules);
            assert_eq!(rules.xp_multiplier(elf, &abilities), 1.1);
        }

        #[test]
        fn test_spell_tables() {
            let rules = ose_rules();
            assert_eq!(rules.magic_type(CharacterClass::MagicUser), MagicType::Arcane);
            assert_eq!(rules.spell_type(CharacterClass::Cleric), SpellType::Cleric);
            assert_eq!(rules.spell_slots(CharacterClass::MagicUser, 1), [1, 0, 0, 0, 0, 0]);
            assert_eq!(rules.spell_slots(CharacterClass::Cleric, 1), [0; 6]);
            assert_eq!(rules.spell_slots(CharacterClass::Cleric, 2), [1, 0, 0, 0, 0, 0]);
            assert_eq!(rules.spell_slots(CharacterClass::Fighter, 5), [0; 6]);
            assert!(rules
                .spell_list(CharacterClass::MagicUser, 1)
                .iter()
                .any(|s| s == "Sleep"));
            assert_eq!(
                rules.find_spell(CharacterClass::MagicUser, "magic missile"),
                Some((1, "Magic Missile"))
            );
            assert_eq!(rules.find_spell(CharacterClass::Fighter, "Sleep"), None);
        }

        #[test]
        fn test_saving_throws_by_level_band() {
            let rules = ose_rules();
            let level_one = rules.saving_throws(CharacterClass::Fighter, 1);
            assert_eq!(level_one.death_poison, 12);
            assert_eq!(level_one.spells_rods_staves, 16);
            let level_four = rules.saving_throws(CharacterClass::Fighter, 4);
            assert_eq!(level_four.death_poison, 10);
        }

        #[test]
        fn test_turning_columns() {
            let rules = ose_rules();
            let cleric = CharacterClass::Cleric;
            assert_eq!(rules.turning_result(cleric, 1, "1"), "7");
            assert_eq!(rules.turning_result(cleric, 1, "2*"), "11");
            assert_eq!(rules.turning_result(cleric, 6, "8"), "11");
            assert_eq!(rules.turning_result(cleric, 1, "4"), "-");
            assert_eq!(rules.turning_result(CharacterClass::Fighter, 5, "1"), "-");
        }

        #[test]
        fn test_coin_rates() {
            let rules = ose_rules();
            assert_eq!(rules.coin_conversion_rate(CoinType::Platinum), 5.0);
            assert_eq!(rules.coin_conversion_rate(CoinType::Copper), 0.01);
        }
    }
}

//! Rule bundle loader.

use std::path::Path;

use game_core::GameRules;

use crate::loaders::{LoadResult, read_file};

/// Loader for [`GameRules`] from TOML files.
///
/// Every key is optional; missing keys keep the classic defaults. Policies
/// are externally tagged tables:
///
/// ```toml
/// wall_durability = 3
/// give_life = "disabled"
///
/// [gold_transfer.taxed]
/// tax = 1
///
/// [trade_gold.table_rate]
/// rates = [{ gold = 3, ap = 1 }, { gold = 5, ap = 2 }]
/// ```
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load rules from a TOML file.
    pub fn load(path: &Path) -> LoadResult<GameRules> {
        let content = read_file(path)?;
        Self::load_str(&content)
    }

    pub fn load_str(content: &str) -> LoadResult<GameRules> {
        let rules: GameRules = toml::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse rules TOML: {}", e))?;
        tracing::debug!(?rules, "loaded rules");

        Ok(rules)
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use game_core::{GiveLifeRule, GoldTransferRule, MoveRule, RangeIncreaseRule, TradeGoldRule};

    use super::*;
    use crate::presets;

    #[test]
    fn empty_file_is_classic() {
        assert_eq!(ConfigLoader::load_str("").unwrap(), presets::classic());
    }

    #[test]
    fn parses_every_policy() {
        let rules = ConfigLoader::load_str(
            r#"
            fire_ap_cost = 3
            max_ap = 12
            give_life = "disabled"

            [move_rule]
            ap_cost = 2

            [range_increase.gold_cost]
            cost = 4

            [gold_transfer.taxed]
            tax = 2

            [trade_gold.table_rate]
            rates = [
                { gold = 3, ap = 1 },
                { gold = 5, ap = 2 },
            ]
            "#,
        )
        .unwrap();

        assert_eq!(rules.fire_ap_cost(), 3);
        assert_eq!(rules.max_ap(), 12);
        assert_eq!(rules.ap_per_turn(), 2);
        assert_eq!(rules.give_life(), GiveLifeRule::Disabled);
        assert_eq!(rules.move_rule(), MoveRule::new(2));
        assert_eq!(rules.range_increase(), RangeIncreaseRule::GoldCost { cost: 4 });
        assert_eq!(rules.gold_transfer(), GoldTransferRule::Taxed { tax: 2 });
        assert_eq!(rules.trade_gold(), &TradeGoldRule::table([(3, 1), (5, 2)]));
    }

    #[test]
    fn rejects_unknown_keys() {
        let err = ConfigLoader::load_str("fire_cost = 3").unwrap_err();
        assert!(err.to_string().contains("Failed to parse rules TOML"));
    }

    #[test]
    fn loads_from_disk() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "starting_gold = 6").unwrap();

        let rules = ConfigLoader::load(file.path()).unwrap();
        assert_eq!(rules.starting_gold(), 6);
    }

    #[test]
    fn missing_file_names_the_path() {
        let err = ConfigLoader::load(Path::new("/nonexistent/rules.toml")).unwrap_err();
        assert!(err.to_string().contains("/nonexistent/rules.toml"));
    }

    #[test]
    fn shipped_council_rules_match_preset() {
        let path = Path::new(env!("CARGO_MANIFEST_DIR"))
            .join("../../../data/rules/council_season.toml");
        assert_eq!(ConfigLoader::load(&path).unwrap(), presets::council_season());
    }
}

//! Built-in rule bundles.

use game_core::{GameRules, GoldTransferRule, RangeIncreaseRule, TradeGoldRule};

/// Named rule bundle selectable from the command line.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, strum::Display, strum::EnumString, strum::EnumIter,
)]
#[strum(serialize_all = "kebab-case", ascii_case_insensitive)]
pub enum Preset {
    #[default]
    Classic,
    CouncilSeason,
}

impl Preset {
    pub fn rules(self) -> GameRules {
        match self {
            Preset::Classic => classic(),
            Preset::CouncilSeason => council_season(),
        }
    }
}

/// Rules of the first season: AP upgrades, flat-rate trading, no gold transfers.
pub fn classic() -> GameRules {
    GameRules::default()
}

/// Council season: taxed gold transfers, table-rate trading, weaker walls,
/// and range upgrades bought with gold.
pub fn council_season() -> GameRules {
    GameRules::new()
        .with_wall_durability(3)
        .with_gold_transfer(GoldTransferRule::Taxed { tax: 1 })
        .with_range_increase(RangeIncreaseRule::GoldCost { cost: 10 })
        .with_trade_gold(TradeGoldRule::table([(3, 1), (5, 2), (10, 4)]))
}

//! Coins and an optional stronghold.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::DomainError;
use crate::rules::RulesRegistry;
use crate::value_objects::CoinType;

/// A ruled territory, for name-level characters.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Domain {
    pub name: String,
    pub description: String,
    pub population: u32,
    /// Gold pieces collected per month.
    pub tax_income: u32,
    pub structures: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WealthState {
    platinum: u32,
    gold: u32,
    electrum: u32,
    silver: u32,
    copper: u32,
    domain: Option<Domain>,
}

impl WealthState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn coins(&self, coin: CoinType) -> u32 {
        match coin {
            CoinType::Platinum => self.platinum,
            CoinType::Gold => self.gold,
            CoinType::Electrum => self.electrum,
            CoinType::Silver => self.silver,
            CoinType::Copper => self.copper,
        }
    }

    fn purse_mut(&mut self, coin: CoinType) -> &mut u32 {
        match coin {
            CoinType::Platinum => &mut self.platinum,
            CoinType::Gold => &mut self.gold,
            CoinType::Electrum => &mut self.electrum,
            CoinType::Silver => &mut self.silver,
            CoinType::Copper => &mut self.copper,
        }
    }

    /// Returns the new count of that coin.
    pub fn gain_coins(&mut self, coin: CoinType, amount: u32) -> u32 {
        let purse = self.purse_mut(coin);
        *purse = purse.saturating_add(amount);
        *purse
    }

    /// Returns the new count of that coin.
    pub fn spend_coins(&mut self, coin: CoinType, amount: u32) -> Result<u32, DomainError> {
        let purse = self.purse_mut(coin);
        if amount > *purse {
            return Err(DomainError::invalid_argument(format!(
                "Cannot spend {} {} with only {} held",
                amount,
                coin.abbreviation(),
                *purse
            )));
        }
        *purse -= amount;
        Ok(*purse)
    }

    /// Whole gold pieces: pp x5, ep x2, sp /10, cp /100, each rounded down.
    pub fn total_value_in_gp(&self) -> u64 {
        u64::from(self.platinum) * 5
            + u64::from(self.gold)
            + u64::from(self.electrum) * 2
            + u64::from(self.silver) / 10
            + u64::from(self.copper) / 100
    }

    /// Gold value of `amount` coins at the configured rate, rounded down.
    pub fn convert_coin_to_gold(coin: CoinType, amount: u32, rules: &RulesRegistry) -> u64 {
        let value = (f64::from(amount) * rules.coin_conversion_rate(coin)).floor();
        if value <= 0.0 {
            0
        } else {
            value as u64
        }
    }

    pub fn domain(&self) -> Option<&Domain> {
        self.domain.as_ref()
    }

    pub fn set_domain(&mut self, domain: Option<Domain>) {
        self.domain = domain;
    }
}

impl fmt::Display for WealthState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} pp, {} gp, {} ep, {} sp, {} cp (total {} gp)",
            self.platinum,
            self.gold,
            self.electrum,
            self.silver,
            self.copper,
            self.total_value_in_gp()
        )?;
        if let Some(domain) = &self.domain {
            write!(
                f,
                "; Domain: {} (population {}, tax income {} gp",
                domain.name, domain.population, domain.tax_income
            )?;
            if !domain.structures.is_empty() {
                write!(f, ", structures: {}", domain.structures.join(", "))?;
            }
            write!(f, ")")?;
        }
        Ok(())
    }
}

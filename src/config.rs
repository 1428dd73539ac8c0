//! Runtime settings, read from command-line flags or the environment by the demo binary.

use clap::Parser;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::model::DEFAULT_MAINTENANCE_INTERVAL_MONTHS;

const MIN_PASSWORD_COST: u32 = 4;
const MAX_PASSWORD_COST: u32 = 31;

/// Errors raised while loading [`Config`].
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error(transparent)]
    Args(#[from] clap::Error),

    #[error("password cost {0} outside 4..=31")]
    PasswordCostOutOfRange(u32),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// bcrypt work factor used when hashing member passwords.
    pub password_cost: u32,
    /// Months between equipment services when a caller does not name an interval.
    pub maintenance_interval_months: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            password_cost: bcrypt::DEFAULT_COST,
            maintenance_interval_months: DEFAULT_MAINTENANCE_INTERVAL_MONTHS,
        }
    }
}

impl Config {
    /// Fills unset flags with defaults.
    pub fn from_args(args: GymArgs) -> Result<Self, ConfigError> {
        let defaults = Self::default();
        let config = Self {
            password_cost: args.password_cost.unwrap_or(defaults.password_cost),
            maintenance_interval_months: args
                .maintenance_interval_months
                .unwrap_or(defaults.maintenance_interval_months),
        };
        config.validate()?;
        Ok(config)
    }

    /// Range check for configs built in code or deserialized, which bypass the flag parser.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(MIN_PASSWORD_COST..=MAX_PASSWORD_COST).contains(&self.password_cost) {
            return Err(ConfigError::PasswordCostOutOfRange(self.password_cost));
        }
        Ok(())
    }
}

#[derive(Parser, Debug, Default, Clone)]
#[command(name = "gym-records", about = "Gym membership, equipment and payment records", version)]
pub struct GymArgs {
    #[arg(
        long,
        env = "GYM_PASSWORD_COST",
        value_name = "COST",
        help = "bcrypt work factor for member passwords",
        value_parser = clap::value_parser!(u32).range(4..=31)
    )]
    pub password_cost: Option<u32>,

    #[arg(
        long,
        env = "GYM_MAINTENANCE_INTERVAL_MONTHS",
        value_name = "MONTHS",
        help = "Months between equipment services when none is given",
        value_parser = clap::value_parser!(u32)
    )]
    pub maintenance_interval_months: Option<u32>,
}

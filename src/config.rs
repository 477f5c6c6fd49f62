use crate::Chips;

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ConfigError {
    #[error("blinds must be positive: small {small}, big {big}")]
    NonPositiveBlind { small: Chips, big: Chips },
    #[error("small blind {small} exceeds big blind {big}")]
    InvertedBlinds { small: Chips, big: Chips },
}

/// Forced-bet structure of a table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableConfig {
    small_blind: Chips,
    big_blind: Chips,
}

impl TableConfig {
    /// ```
    /// use potsettle::config::TableConfig;
    ///
    /// let cfg = TableConfig::new(5, 10).unwrap();
    /// assert_eq!(cfg.big_blind(), 10);
    /// assert!(TableConfig::new(10, 5).is_err());
    /// ```
    pub fn new(small_blind: Chips, big_blind: Chips) -> Result<Self, ConfigError> {
        if small_blind <= 0 || big_blind <= 0 {
            return Err(ConfigError::NonPositiveBlind { small: small_blind, big: big_blind });
        }
        if small_blind > big_blind {
            return Err(ConfigError::InvertedBlinds { small: small_blind, big: big_blind });
        }
        Ok(Self { small_blind, big_blind })
    }

    pub fn small_blind(&self) -> Chips {
        self.small_blind
    }

    pub fn big_blind(&self) -> Chips {
        self.big_blind
    }
}

impl Default for TableConfig {
    fn default() -> Self {
        Self { small_blind: 10, big_blind: 20 }
    }
}

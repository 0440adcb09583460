use std::fmt;

use thiserror::Error;

use super::level::MAX_ENCHANTMENT_LEVEL;

/// Why an enchant command was refused. The message is shown to the player.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnchantError {
    #[error("Enchantment level has to be a number (or \"max\")")]
    InvalidLevelFormat,
    #[error("{0}")]
    LevelOutOfRange(LevelBound),
    #[error("Only a player can enchant.")]
    NotAPlayer,
    #[error("You need to be holding an item to enchant it!")]
    NoItemInHand,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LevelBound {
    TooLow,
    TooHigh,
}

impl fmt::Display for LevelBound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TooLow => write!(f, "Enchantment level has to be greater than 0"),
            Self::TooHigh => write!(
                f,
                "Enchantment level can't be higher than {MAX_ENCHANTMENT_LEVEL}"
            ),
        }
    }
}

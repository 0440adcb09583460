use std::str::FromStr;

use tim_data::Enchantment;

use super::error::{EnchantError, LevelBound};

/// Levels are stored as a signed short by the client.
pub const MAX_ENCHANTMENT_LEVEL: i32 = i16::MAX as i32;

const MAX_TOKEN: &str = "max";

/// The level argument of `enchant`, before it meets a concrete enchantment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnchantLevel {
    Exact(i32),
    /// Whatever the enchantment's own maximum is.
    Max,
}

impl Default for EnchantLevel {
    fn default() -> Self {
        Self::Exact(1)
    }
}

impl EnchantLevel {
    /// A missing token means level 1.
    pub fn parse(token: Option<&str>) -> Result<Self, EnchantError> {
        token.map_or(Ok(Self::default()), |token| token.parse())
    }

    pub fn resolve(self, enchantment: &Enchantment) -> i32 {
        match self {
            Self::Exact(level) => level,
            Self::Max => enchantment.max_level,
        }
    }
}

impl FromStr for EnchantLevel {
    type Err = EnchantError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == MAX_TOKEN {
            return Ok(Self::Max);
        }
        let level: i32 = s.parse().map_err(|_| EnchantError::InvalidLevelFormat)?;
        if level < 1 {
            Err(EnchantError::LevelOutOfRange(LevelBound::TooLow))
        } else if level > MAX_ENCHANTMENT_LEVEL {
            Err(EnchantError::LevelOutOfRange(LevelBound::TooHigh))
        } else {
            Ok(Self::Exact(level))
        }
    }
}

#[cfg(test)]
mod test {
    use tim_data::Enchantment;
    use tim_util::resource_location::ResourceLocation;

    use super::EnchantLevel;
    use crate::enchanter::error::{EnchantError, LevelBound};

    #[test]
    fn accepts_valid_tokens() {
        assert_eq!(EnchantLevel::parse(Some("1")), Ok(EnchantLevel::Exact(1)));
        assert_eq!(
            EnchantLevel::parse(Some("32767")),
            Ok(EnchantLevel::Exact(32767))
        );
        assert_eq!(EnchantLevel::parse(Some("max")), Ok(EnchantLevel::Max));
        assert_eq!(EnchantLevel::parse(None), Ok(EnchantLevel::Exact(1)));
        assert_eq!(EnchantLevel::parse(Some("+7")), Ok(EnchantLevel::Exact(7)));
    }

    #[test]
    fn rejects_out_of_range() {
        let too_low = Err(EnchantError::LevelOutOfRange(LevelBound::TooLow));
        let too_high = Err(EnchantError::LevelOutOfRange(LevelBound::TooHigh));

        assert_eq!(EnchantLevel::parse(Some("0")), too_low);
        assert_eq!(EnchantLevel::parse(Some("-3")), too_low);
        assert_eq!(EnchantLevel::parse(Some("32768")), too_high);
        assert_eq!(EnchantLevel::parse(Some("2147483647")), too_high);
    }

    #[test]
    fn rejects_non_numbers() {
        for token in ["abc", "MAX", "1.5", "", "99999999999", "5 "] {
            assert_eq!(
                EnchantLevel::parse(Some(token)),
                Err(EnchantError::InvalidLevelFormat),
                "token {token:?}"
            );
        }
    }

    #[test]
    fn max_resolves_per_enchantment() {
        let sharpness = Enchantment::new(ResourceLocation::vanilla("sharpness"), 5);
        let mending = Enchantment::new(ResourceLocation::vanilla("mending"), 1);

        assert_eq!(EnchantLevel::Max.resolve(&sharpness), 5);
        assert_eq!(EnchantLevel::Max.resolve(&mending), 1);
        assert_eq!(EnchantLevel::Exact(3).resolve(&mending), 3);
    }

    #[test]
    fn messages() {
        assert_eq!(
            EnchantError::LevelOutOfRange(LevelBound::TooHigh).to_string(),
            "Enchantment level can't be higher than 32767"
        );
        assert_eq!(
            EnchantError::LevelOutOfRange(LevelBound::TooLow).to_string(),
            "Enchantment level has to be greater than 0"
        );
    }
}

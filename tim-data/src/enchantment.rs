use std::sync::{Arc, LazyLock};

use serde::Deserialize;
use tim_util::resource_location::ResourceLocation;

/// Every vanilla enchantment, in registry order.
pub static ENCHANTMENTS: LazyLock<Vec<Arc<Enchantment>>> = LazyLock::new(|| {
    serde_json::from_str(include_str!("../assets/enchantments.json"))
        .expect("Could not parse enchantments.json registry.")
});

#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize)]
pub struct Enchantment {
    pub id: ResourceLocation,
    pub max_level: i32,
}

impl Enchantment {
    pub fn new(id: ResourceLocation, max_level: i32) -> Self {
        Self { id, max_level }
    }

    /// The registry path, used as the command-facing name (`sharpness`).
    pub fn name(&self) -> &str {
        &self.id.path
    }
}

#[cfg(test)]
mod test {
    use std::collections::HashSet;

    use super::ENCHANTMENTS;

    fn max_level_of(name: &str) -> Option<i32> {
        ENCHANTMENTS
            .iter()
            .find(|enchantment| enchantment.name() == name)
            .map(|enchantment| enchantment.max_level)
    }

    #[test]
    fn vanilla_registry_loads() {
        assert_eq!(ENCHANTMENTS.len(), 42);

        let names: HashSet<&str> = ENCHANTMENTS.iter().map(|e| e.name()).collect();
        assert_eq!(names.len(), ENCHANTMENTS.len());
        assert!(ENCHANTMENTS.iter().all(|e| e.id.is_vanilla() && e.max_level >= 1));
    }

    #[test]
    fn lookup_by_name() {
        assert_eq!(max_level_of("sharpness"), Some(5));
        assert_eq!(max_level_of("mending"), Some(1));
        assert_eq!(max_level_of("rabbit_bane"), None);
    }
}

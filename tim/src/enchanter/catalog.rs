use std::sync::Arc;

use indexmap::IndexMap;
use thiserror::Error;
use tim_data::Enchantment;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum CatalogError {
    #[error("Enchantment name {0:?} is registered twice")]
    DuplicateEnchantment(String),
}

/// Every enchantment by name, frozen once built. Keeps registry order.
#[derive(Debug)]
pub struct EnchantmentCatalog {
    enchantments: IndexMap<String, Arc<Enchantment>>,
}

impl EnchantmentCatalog {
    pub fn build(
        enchantments: impl IntoIterator<Item = Arc<Enchantment>>,
    ) -> Result<Self, CatalogError> {
        let mut map = IndexMap::new();
        for enchantment in enchantments {
            let name = enchantment.name().to_string();
            if map.contains_key(&name) {
                return Err(CatalogError::DuplicateEnchantment(name));
            }
            map.insert(name, enchantment);
        }
        Ok(Self { enchantments: map })
    }

    pub fn get(&self, name: &str) -> Option<&Arc<Enchantment>> {
        self.enchantments.get(name)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.enchantments.keys().map(String::as_str)
    }

    pub fn values(&self) -> impl Iterator<Item = &Arc<Enchantment>> {
        self.enchantments.values()
    }

    pub fn len(&self) -> usize {
        self.enchantments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.enchantments.is_empty()
    }
}

#[cfg(test)]
mod test {
    use std::sync::Arc;

    use tim_data::{ENCHANTMENTS, Enchantment};
    use tim_util::resource_location::ResourceLocation;

    use super::{CatalogError, EnchantmentCatalog};

    #[test]
    fn indexes_vanilla_by_name() {
        let catalog = EnchantmentCatalog::build(ENCHANTMENTS.iter().cloned()).unwrap();

        assert_eq!(catalog.len(), ENCHANTMENTS.len());
        assert_eq!(catalog.get("sharpness").unwrap().max_level, 5);
        assert!(catalog.get("minecraft:sharpness").is_none());
        assert_eq!(catalog.names().next(), Some("protection"));
    }

    #[test]
    fn rejects_duplicate_names() {
        let catalog = EnchantmentCatalog::build([
            Arc::new(Enchantment::new(ResourceLocation::vanilla("sharpness"), 5)),
            Arc::new(Enchantment::new("tim:sharpness".parse().unwrap(), 10)),
        ]);

        assert_eq!(
            catalog.unwrap_err(),
            CatalogError::DuplicateEnchantment("sharpness".to_string())
        );
    }

    #[test]
    fn empty_registry() {
        let catalog = EnchantmentCatalog::build(Vec::new()).unwrap();
        assert!(catalog.is_empty());
        assert_eq!(catalog.values().count(), 0);
    }
}

use std::sync::Arc;

use tim_data::Enchantment;
use tim_util::resource_location::ResourceLocation;

/// One enchantment applied to an item, at a specific level.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemEnchantment {
    pub enchantment: Arc<Enchantment>,
    pub level: i32,
}

impl ItemEnchantment {
    pub fn new(enchantment: Arc<Enchantment>, level: i32) -> Self {
        Self { enchantment, level }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemStack {
    pub item: ResourceLocation,
    pub item_count: u8,
    enchantments: Vec<ItemEnchantment>,
}

impl Default for ItemStack {
    fn default() -> Self {
        Self::empty()
    }
}

impl ItemStack {
    pub fn new(item_count: u8, item: ResourceLocation) -> Self {
        Self {
            item,
            item_count,
            enchantments: Vec::new(),
        }
    }

    pub fn empty() -> Self {
        Self::new(0, ResourceLocation::vanilla("air"))
    }

    pub fn is_empty(&self) -> bool {
        self.item_count == 0 || self.item == ResourceLocation::vanilla("air")
    }

    pub fn enchantments(&self) -> &[ItemEnchantment] {
        &self.enchantments
    }

    pub fn get_enchantment_level(&self, enchantment: &Enchantment) -> Option<i32> {
        self.enchantments
            .iter()
            .find(|entry| entry.enchantment.id == enchantment.id)
            .map(|entry| entry.level)
    }

    /// Returns a copy of this stack whose enchantment list keeps every entry of
    /// another enchantment and ends with `(enchantment, level)`.
    #[must_use]
    pub fn with_enchantment(&self, enchantment: &Arc<Enchantment>, level: i32) -> Self {
        let mut enchantments: Vec<ItemEnchantment> = self
            .enchantments
            .iter()
            .filter(|entry| entry.enchantment.id != enchantment.id)
            .cloned()
            .collect();
        enchantments.push(ItemEnchantment::new(enchantment.clone(), level));

        Self {
            item: self.item.clone(),
            item_count: self.item_count,
            enchantments,
        }
    }
}

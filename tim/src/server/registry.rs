use std::sync::Arc;

use tim_data::{ENCHANTMENTS, Enchantment};

/// Source of every enchantment the server knows about.
pub trait EnchantmentRegistry: Send + Sync {
    fn all_enchantments(&self) -> Vec<Arc<Enchantment>>;
}

/// The enchantments shipped with the game.
pub struct VanillaEnchantmentRegistry;

impl EnchantmentRegistry for VanillaEnchantmentRegistry {
    fn all_enchantments(&self) -> Vec<Arc<Enchantment>> {
        ENCHANTMENTS.clone()
    }
}

impl EnchantmentRegistry for Vec<Arc<Enchantment>> {
    fn all_enchantments(&self) -> Vec<Arc<Enchantment>> {
        self.clone()
    }
}

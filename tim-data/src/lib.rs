mod enchantment;

pub use enchantment::{ENCHANTMENTS, Enchantment};

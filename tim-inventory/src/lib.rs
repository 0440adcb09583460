mod error;
pub mod item_stack;
pub mod player;

pub use error::InventoryError;
pub use item_stack::{ItemEnchantment, ItemStack};

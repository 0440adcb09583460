use std::sync::atomic::{AtomicUsize, Ordering};

use tokio::sync::Mutex;

use crate::{InventoryError, ItemStack};

pub const HOTBAR_SIZE: usize = 9;

/// The hotbar of a player; the selected slot is the item in hand.
pub struct PlayerInventory {
    hotbar: [Mutex<ItemStack>; HOTBAR_SIZE],
    selected_slot: AtomicUsize,
}

impl Default for PlayerInventory {
    fn default() -> Self {
        Self::new()
    }
}

impl PlayerInventory {
    pub fn new() -> Self {
        Self {
            hotbar: std::array::from_fn(|_| Mutex::new(ItemStack::empty())),
            selected_slot: AtomicUsize::new(0),
        }
    }

    pub fn get_selected_slot(&self) -> usize {
        self.selected_slot.load(Ordering::Relaxed)
    }

    pub fn set_selected_slot(&self, slot: usize) -> Result<(), InventoryError> {
        if slot >= HOTBAR_SIZE {
            return Err(InventoryError::InvalidSlot(slot));
        }
        self.selected_slot.store(slot, Ordering::Relaxed);
        Ok(())
    }

    pub fn held_item(&self) -> &Mutex<ItemStack> {
        &self.hotbar[self.get_selected_slot()]
    }

    pub async fn set_stack(&self, slot: usize, stack: ItemStack) -> Result<(), InventoryError> {
        let Some(entry) = self.hotbar.get(slot) else {
            return Err(InventoryError::InvalidSlot(slot));
        };
        log::trace!("Setting hotbar slot {slot} to {}", stack.item);
        *entry.lock().await = stack;
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use tim_util::resource_location::ResourceLocation;

    use super::{HOTBAR_SIZE, PlayerInventory};
    use crate::{InventoryError, ItemStack};

    #[tokio::test]
    async fn held_item_follows_selection() {
        let inventory = PlayerInventory::new();
        assert!(inventory.held_item().lock().await.is_empty());

        inventory
            .set_stack(3, ItemStack::new(1, ResourceLocation::vanilla("bow")))
            .await
            .unwrap();
        assert!(inventory.held_item().lock().await.is_empty());

        inventory.set_selected_slot(3).unwrap();
        assert_eq!(
            inventory.held_item().lock().await.item,
            ResourceLocation::vanilla("bow")
        );
    }

    #[tokio::test]
    async fn rejects_slots_outside_hotbar() {
        let inventory = PlayerInventory::new();
        assert_eq!(
            inventory.set_selected_slot(HOTBAR_SIZE),
            Err(InventoryError::InvalidSlot(HOTBAR_SIZE))
        );
        assert_eq!(
            inventory.set_stack(12, ItemStack::empty()).await,
            Err(InventoryError::InvalidSlot(12))
        );
    }
}

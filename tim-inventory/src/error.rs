use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum InventoryError {
    #[error("Slot {0} is outside of the hotbar")]
    InvalidSlot(usize),
}

use std::sync::Arc;

use crossbeam::atomic::AtomicCell;
use tim_inventory::player::PlayerInventory;
use tim_util::{PermissionLvl, text::TextComponent};
use uuid::Uuid;

use crate::net::ClientConnection;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameProfile {
    pub id: Uuid,
    pub name: String,
}

impl GameProfile {
    /// Offline players get a name-based UUID, like an offline-mode server hands out.
    pub fn offline(name: &str) -> Self {
        Self {
            id: Uuid::new_v3(&Uuid::NAMESPACE_OID, format!("OfflinePlayer:{name}").as_bytes()),
            name: name.to_string(),
        }
    }
}

pub struct Player {
    pub gameprofile: GameProfile,
    /// Operator level, 0 for regular players.
    pub permission_lvl: AtomicCell<PermissionLvl>,
    pub inventory: PlayerInventory,
    client: Arc<dyn ClientConnection>,
}

impl Player {
    pub fn new(
        gameprofile: GameProfile,
        permission_lvl: PermissionLvl,
        client: Arc<dyn ClientConnection>,
    ) -> Self {
        Self {
            gameprofile,
            permission_lvl: AtomicCell::new(permission_lvl),
            inventory: PlayerInventory::new(),
            client,
        }
    }

    pub async fn send_system_message(&self, text: &TextComponent) {
        self.client.send_system_message(text).await;
    }
}

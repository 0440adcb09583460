use std::collections::HashMap;
use std::sync::Arc;

use tim_util::permission::{PermissionManager, PermissionRegistry};
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::command::dispatcher::CommandDispatcher;
use crate::command::{CommandResult, CommandSender};
use crate::entity::player::Player;

pub mod registry;

use registry::{EnchantmentRegistry, VanillaEnchantmentRegistry};

pub struct Server {
    pub command_dispatcher: RwLock<CommandDispatcher>,
    pub permission_manager: Arc<RwLock<PermissionManager>>,
    pub enchantment_registry: Arc<dyn EnchantmentRegistry>,
    players: RwLock<HashMap<Uuid, Arc<Player>>>,
}

impl Default for Server {
    fn default() -> Self {
        Self::new(Arc::new(VanillaEnchantmentRegistry))
    }
}

impl Server {
    #[must_use]
    pub fn new(enchantment_registry: Arc<dyn EnchantmentRegistry>) -> Self {
        let permission_registry = Arc::new(RwLock::new(PermissionRegistry::new()));
        Self {
            command_dispatcher: RwLock::new(CommandDispatcher::default()),
            permission_manager: Arc::new(RwLock::new(PermissionManager::new(
                permission_registry,
            ))),
            enchantment_registry,
            players: RwLock::new(HashMap::new()),
        }
    }

    pub async fn add_player(&self, player: Arc<Player>) {
        log::info!("{} joined the game", player.gameprofile.name);
        self.players
            .write()
            .await
            .insert(player.gameprofile.id, player);
    }

    pub async fn remove_player(&self, id: &Uuid) -> Option<Arc<Player>> {
        let player = self.players.write().await.remove(id)?;
        self.permission_manager.write().await.remove_attachment(id);
        log::info!("{} left the game", player.gameprofile.name);
        Some(player)
    }

    /// Runs one line of input for `sender`, reporting failures back to them.
    pub async fn handle_command(&self, sender: &CommandSender, command: &str) -> CommandResult {
        let dispatcher = self.command_dispatcher.read().await;
        dispatcher.handle_command(sender, self, command).await
    }
}

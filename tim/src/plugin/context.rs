use std::sync::Arc;

use tim_util::permission::Permission;

use crate::{command::tree::CommandTree, server::Server};

use super::PluginMetadata;

/// The `Context` a plugin gets handed in every lifecycle hook.
///
/// # Fields
/// - `metadata`: Metadata of the plugin.
/// - `server`: A reference to the server on which the plugin operates.
pub struct Context {
    metadata: PluginMetadata<'static>,
    pub server: Arc<Server>,
}

impl Context {
    #[must_use]
    pub fn new(metadata: PluginMetadata<'static>, server: Arc<Server>) -> Self {
        Self { metadata, server }
    }

    #[must_use]
    pub const fn metadata(&self) -> &PluginMetadata<'static> {
        &self.metadata
    }

    /// Registers a command tree guarded by `permission_node`.
    pub async fn register_command(&self, tree: CommandTree, permission_node: &str) {
        let mut dispatcher_lock = self.server.command_dispatcher.write().await;
        dispatcher_lock.register(tree, permission_node);
    }

    /// Registers a permission node owned by this plugin.
    pub async fn register_permission(&self, permission: Permission) -> Result<(), String> {
        let manager = self.server.permission_manager.read().await;
        let mut registry = manager.registry.write().await;
        registry.register_permission(permission)
    }
}

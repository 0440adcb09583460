//! I... am an enchanter.
//!
//! Adds `/enchant <enchantment> [level|max]` and `/enchant all [level|max]`,
//! which enchant the item in the sender's hand.

use std::sync::Arc;

use async_trait::async_trait;
use tim_config::EnchantCommandConfig;
use tim_data::Enchantment;
use tim_util::permission::Permission;

use crate::entity::player::Player;
use crate::plugin::{Context, Plugin, PluginMetadata};

pub mod catalog;
pub mod commands;
pub mod error;
pub mod level;
pub mod quotes;

use catalog::EnchantmentCatalog;
use error::EnchantError;
use quotes::QuoteCycle;

pub struct Enchanter {
    config: EnchantCommandConfig,
    catalog: Option<Arc<EnchantmentCatalog>>,
    quotes: Arc<QuoteCycle>,
}

impl Enchanter {
    #[must_use]
    pub fn new(config: EnchantCommandConfig) -> Self {
        Self {
            config,
            catalog: None,
            quotes: Arc::new(QuoteCycle::new()),
        }
    }

    #[must_use]
    pub const fn metadata() -> PluginMetadata<'static> {
        PluginMetadata {
            id: "tim",
            name: "Tim the Enchanter",
            version: env!("CARGO_PKG_VERSION"),
            authors: "kitteh.org",
            description: "I... am an enchanter.",
        }
    }

    #[must_use]
    pub fn catalog(&self) -> Option<&Arc<EnchantmentCatalog>> {
        self.catalog.as_ref()
    }
}

#[async_trait]
impl Plugin for Enchanter {
    async fn on_post_initialization(&mut self, context: &Context) -> Result<(), String> {
        if self.catalog.is_some() {
            return Err("enchantment catalog is already built".to_string());
        }
        let catalog = EnchantmentCatalog::build(
            context.server.enchantment_registry.all_enchantments(),
        )
        .map_err(|err| err.to_string())?;
        log::debug!("Indexed {} enchantments", catalog.len());
        self.catalog = Some(Arc::new(catalog));
        Ok(())
    }

    async fn on_server_starting(&mut self, context: &Context) -> Result<(), String> {
        let Some(catalog) = self.catalog.clone() else {
            return Err("enchantment catalog has not been built yet".to_string());
        };

        context
            .register_permission(Permission::new(
                &self.config.permission,
                "Allows enchanting the held item",
                self.config.permission_default.clone(),
            ))
            .await?;
        context
            .register_command(
                commands::init_command_tree(catalog, self.quotes.clone()),
                &self.config.permission,
            )
            .await;

        log::debug!("{} registered /enchant", context.metadata().name);
        log::info!("There are some who call me... Tim?");
        Ok(())
    }
}

/// Puts `enchantment` at `level` on the player's held item, replacing any
/// level it already had.
pub async fn enchant(
    player: &Player,
    enchantment: &Arc<Enchantment>,
    level: i32,
) -> Result<(), EnchantError> {
    let mut held = player.inventory.held_item().lock().await;
    if held.is_empty() {
        return Err(EnchantError::NoItemInHand);
    }
    let enchanted = held.with_enchantment(enchantment, level);
    *held = enchanted;
    Ok(())
}

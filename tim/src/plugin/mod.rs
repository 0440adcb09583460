use std::sync::Arc;

use async_trait::async_trait;
use thiserror::Error;

use crate::server::Server;

pub mod context;

pub use context::Context;

/// Struct representing metadata for a plugin.
///
/// This struct contains essential information about a plugin, including its name,
/// version, authors, and a description. It is generic over a lifetime `'s` to allow
/// for string slices that are valid for the lifetime of the plugin metadata.
#[derive(Debug, Clone)]
pub struct PluginMetadata<'s> {
    /// The id of the plugin, also the namespace of its log lines.
    pub id: &'s str,
    /// The name of the plugin.
    pub name: &'s str,
    /// The version of the plugin.
    pub version: &'s str,
    /// The authors of the plugin.
    pub authors: &'s str,
    /// A description of the plugin.
    pub description: &'s str,
}

/// Server lifecycle hooks, called once each and in this order.
#[async_trait]
pub trait Plugin: Send + Sync + 'static {
    /// Every registry is populated, nothing is running yet.
    async fn on_post_initialization(&mut self, _context: &Context) -> Result<(), String> {
        Ok(())
    }

    /// The server is about to accept commands.
    async fn on_server_starting(&mut self, _context: &Context) -> Result<(), String> {
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LifecyclePhase {
    Loaded,
    PostInitialization,
    ServerStarting,
}

#[derive(Error, Debug)]
pub enum PluginError {
    #[error("Plugin {plugin} failed during {phase:?}: {message}")]
    HookFailed {
        plugin: String,
        phase: LifecyclePhase,
        message: String,
    },
    #[error("Lifecycle phase {attempted:?} can't run after {current:?}")]
    OutOfOrder {
        current: LifecyclePhase,
        attempted: LifecyclePhase,
    },
}

struct LoadedPlugin {
    metadata: PluginMetadata<'static>,
    instance: Box<dyn Plugin>,
}

pub struct PluginManager {
    server: Arc<Server>,
    plugins: Vec<LoadedPlugin>,
    phase: LifecyclePhase,
}

impl PluginManager {
    #[must_use]
    pub fn new(server: Arc<Server>) -> Self {
        Self {
            server,
            plugins: Vec::new(),
            phase: LifecyclePhase::Loaded,
        }
    }

    pub fn add_plugin(&mut self, metadata: PluginMetadata<'static>, instance: Box<dyn Plugin>) {
        log::info!(
            "Loaded {} ({}) v{} by {}",
            metadata.name,
            metadata.id,
            metadata.version,
            metadata.authors
        );
        self.plugins.push(LoadedPlugin { metadata, instance });
    }

    #[must_use]
    pub const fn phase(&self) -> LifecyclePhase {
        self.phase
    }

    pub async fn post_initialize(&mut self) -> Result<(), PluginError> {
        self.advance(LifecyclePhase::PostInitialization).await
    }

    pub async fn server_starting(&mut self) -> Result<(), PluginError> {
        self.advance(LifecyclePhase::ServerStarting).await
    }

    /// Runs `phase` on every plugin, stopping at the first failure.
    async fn advance(&mut self, phase: LifecyclePhase) -> Result<(), PluginError> {
        if phase <= self.phase {
            return Err(PluginError::OutOfOrder {
                current: self.phase,
                attempted: phase,
            });
        }

        for plugin in &mut self.plugins {
            let context = Context::new(plugin.metadata.clone(), self.server.clone());
            let result = match phase {
                LifecyclePhase::Loaded => Ok(()),
                LifecyclePhase::PostInitialization => {
                    plugin.instance.on_post_initialization(&context).await
                }
                LifecyclePhase::ServerStarting => {
                    plugin.instance.on_server_starting(&context).await
                }
            };
            result.map_err(|message| PluginError::HookFailed {
                plugin: plugin.metadata.name.to_string(),
                phase,
                message,
            })?;
        }

        self.phase = phase;
        Ok(())
    }
}

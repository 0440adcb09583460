use std::fmt;
use std::sync::Arc;

use async_trait::async_trait;
use tim_util::text::TextComponent;

use crate::command::args::ConsumedArgs;
use crate::entity::player::Player;
use crate::server::Server;

pub mod args;
pub mod dispatcher;
pub mod tree;

pub use dispatcher::CommandError;

/// Whoever typed the command.
pub enum CommandSender {
    Console,
    Player(Arc<Player>),
}

impl fmt::Display for CommandSender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Console => write!(f, "Server"),
            Self::Player(player) => write!(f, "{}", player.gameprofile.name),
        }
    }
}

impl CommandSender {
    pub async fn send_message(&self, text: TextComponent) {
        match self {
            Self::Console => log::info!("{}", text.to_pretty_console()),
            Self::Player(player) => player.send_system_message(&text).await,
        }
    }

    #[must_use]
    pub const fn is_player(&self) -> bool {
        matches!(self, Self::Player(_))
    }

    #[must_use]
    pub fn as_player(&self) -> Option<Arc<Player>> {
        match self {
            Self::Player(player) => Some(player.clone()),
            Self::Console => None,
        }
    }

    /// The console holds every permission.
    pub async fn has_permission(&self, server: &Server, node: &str) -> bool {
        match self {
            Self::Console => true,
            Self::Player(player) => {
                server
                    .permission_manager
                    .read()
                    .await
                    .has_permission(
                        &player.gameprofile.id,
                        node,
                        player.permission_lvl.load(),
                    )
                    .await
            }
        }
    }
}

/// What a successful command reports back to the dispatcher.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CommandResult {
    pub affected_items: u32,
}

impl CommandResult {
    #[must_use]
    pub const fn empty() -> Self {
        Self { affected_items: 0 }
    }

    #[must_use]
    pub const fn affected_items(affected_items: u32) -> Self {
        Self { affected_items }
    }
}

#[async_trait]
pub trait CommandExecutor: Send + Sync {
    async fn execute<'a>(
        &self,
        sender: &CommandSender,
        server: &Server,
        args: &ConsumedArgs<'a>,
    ) -> Result<CommandResult, CommandError>;
}

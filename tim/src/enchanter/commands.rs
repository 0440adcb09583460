use std::sync::Arc;

use async_trait::async_trait;
use tim_data::Enchantment;
use tim_util::text::{TextComponent, color::NamedColor};

use crate::command::args::enchantment::EnchantmentArgumentConsumer;
use crate::command::args::simple::SimpleArgConsumer;
use crate::command::args::{ConsumedArgs, FindArg};
use crate::command::tree::CommandTree;
use crate::command::tree::builder::{argument, literal};
use crate::command::{CommandError, CommandExecutor, CommandResult, CommandSender};
use crate::server::Server;

use super::catalog::EnchantmentCatalog;
use super::error::EnchantError;
use super::level::EnchantLevel;
use super::quotes::QuoteCycle;

const NAMES: [&str; 1] = ["enchant"];
const DESCRIPTION: &str = "Enchants the item in your hand.";

pub const ARG_ENCHANTMENT: &str = "enchantment";
pub const ARG_LEVEL: &str = "level";

const SUCCESS_MESSAGE: &str = "Item enchanted. I... am an enchanter.";

#[derive(Clone, Copy)]
enum Target {
    Single,
    All,
}

struct EnchantExecutor {
    target: Target,
    catalog: Arc<EnchantmentCatalog>,
    quotes: Arc<QuoteCycle>,
}

impl EnchantExecutor {
    async fn enchant_held_item(
        &self,
        sender: &CommandSender,
        enchantment: Option<&Arc<Enchantment>>,
        level_token: Option<&str>,
    ) -> Result<(), EnchantError> {
        let player = sender.as_player().ok_or(EnchantError::NotAPlayer)?;
        let level = EnchantLevel::parse(level_token)?;

        match enchantment {
            Some(enchantment) => {
                super::enchant(&player, enchantment, level.resolve(enchantment)).await
            }
            None => {
                for enchantment in self.catalog.values() {
                    super::enchant(&player, enchantment, level.resolve(enchantment)).await?;
                }
                Ok(())
            }
        }
    }
}

#[async_trait]
impl CommandExecutor for EnchantExecutor {
    async fn execute<'a>(
        &self,
        sender: &CommandSender,
        _server: &Server,
        args: &ConsumedArgs<'a>,
    ) -> Result<CommandResult, CommandError> {
        let enchantment = match self.target {
            Target::Single => Some(EnchantmentArgumentConsumer::find_arg(
                args,
                ARG_ENCHANTMENT,
            )?),
            Target::All => None,
        };
        let level_token = SimpleArgConsumer::find_arg(args, ARG_LEVEL).ok();

        self.enchant_held_item(sender, enchantment, level_token)
            .await
            .map_err(|err| {
                CommandError::CommandFailed(Box::new(self.quotes.error_text(err.to_string())))
            })?;

        sender
            .send_message(TextComponent::text(SUCCESS_MESSAGE).color_named(NamedColor::Yellow))
            .await;
        Ok(CommandResult::affected_items(1))
    }
}

#[must_use]
pub fn init_command_tree(catalog: Arc<EnchantmentCatalog>, quotes: Arc<QuoteCycle>) -> CommandTree {
    let executor = |target| EnchantExecutor {
        target,
        catalog: catalog.clone(),
        quotes: quotes.clone(),
    };

    CommandTree::new(NAMES, DESCRIPTION)
        .then(
            literal("all")
                .then(argument(ARG_LEVEL, SimpleArgConsumer).execute(executor(Target::All)))
                .execute(executor(Target::All)),
        )
        .then(
            argument(
                ARG_ENCHANTMENT,
                EnchantmentArgumentConsumer::new(catalog.clone()),
            )
            .then(argument(ARG_LEVEL, SimpleArgConsumer).execute(executor(Target::Single)))
            .execute(executor(Target::Single)),
        )
}

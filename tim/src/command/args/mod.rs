use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tim_data::Enchantment;

use super::{CommandSender, dispatcher::CommandError, tree::RawArgs};
use crate::server::Server;

pub mod enchantment;
pub mod simple;

/// see [`crate::command::tree::builder::argument`]
#[async_trait]
pub trait ArgumentConsumer: Send + Sync {
    async fn consume<'a>(
        &'a self,
        sender: &CommandSender,
        server: &'a Server,
        args: &mut RawArgs<'a>,
    ) -> Option<Arg<'a>>;
}

#[derive(Clone)]
pub enum Arg<'a> {
    Enchantment(Arc<Enchantment>),
    Simple(&'a str),
}

pub type ConsumedArgs<'a> = HashMap<&'a str, Arg<'a>>;

pub trait FindArg<'a> {
    type Data;

    fn find_arg(args: &'a ConsumedArgs, name: &str) -> Result<Self::Data, CommandError>;
}

use async_trait::async_trait;

use crate::command::{CommandSender, dispatcher::CommandError, tree::RawArgs};
use crate::server::Server;

use super::{Arg, ArgumentConsumer, ConsumedArgs, FindArg};

/// Takes a single word as is; interpreting it is up to the executor.
pub struct SimpleArgConsumer;

#[async_trait]
impl ArgumentConsumer for SimpleArgConsumer {
    async fn consume<'a>(
        &'a self,
        _sender: &CommandSender,
        _server: &'a Server,
        args: &mut RawArgs<'a>,
    ) -> Option<Arg<'a>> {
        Some(Arg::Simple(args.pop()?))
    }
}

impl<'a> FindArg<'a> for SimpleArgConsumer {
    type Data = &'a str;

    fn find_arg(args: &'a ConsumedArgs, name: &str) -> Result<Self::Data, CommandError> {
        match args.get(name) {
            Some(Arg::Simple(data)) => Ok(data),
            _ => Err(CommandError::InvalidConsumption(Some(name.to_string()))),
        }
    }
}

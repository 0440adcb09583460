use std::sync::Arc;

use async_trait::async_trait;
use tim_data::Enchantment;

use crate::command::{CommandSender, dispatcher::CommandError, tree::RawArgs};
use crate::enchanter::catalog::EnchantmentCatalog;
use crate::server::Server;

use super::{Arg, ArgumentConsumer, ConsumedArgs, FindArg};

/// Accepts exactly the names present in the catalog it was built with.
pub struct EnchantmentArgumentConsumer {
    catalog: Arc<EnchantmentCatalog>,
}

impl EnchantmentArgumentConsumer {
    pub fn new(catalog: Arc<EnchantmentCatalog>) -> Self {
        Self { catalog }
    }
}

#[async_trait]
impl ArgumentConsumer for EnchantmentArgumentConsumer {
    async fn consume<'a>(
        &'a self,
        _sender: &CommandSender,
        _server: &'a Server,
        args: &mut RawArgs<'a>,
    ) -> Option<Arg<'a>> {
        let name = args.pop()?;
        self.catalog.get(name).cloned().map(Arg::Enchantment)
    }
}

impl<'a> FindArg<'a> for EnchantmentArgumentConsumer {
    type Data = &'a Arc<Enchantment>;

    fn find_arg(args: &'a ConsumedArgs, name: &str) -> Result<Self::Data, CommandError> {
        match args.get(name) {
            Some(Arg::Enchantment(data)) => Ok(data),
            _ => Err(CommandError::InvalidConsumption(Some(name.to_string()))),
        }
    }
}

use std::collections::HashMap;

use thiserror::Error;
use tim_util::text::{TextComponent, color::NamedColor};

use super::args::ConsumedArgs;
use super::tree::{CommandTree, NodeType, RawArgs};
use super::{CommandResult, CommandSender};
use crate::server::Server;

#[derive(Debug, Error)]
pub enum CommandError {
    /// This error means that there was an error while parsing a previously consumed argument.
    /// That only happens when consumption is wrongly implemented, as it should ensure parsing may
    /// never fail.
    #[error("Invalid consumption of argument {0:?}")]
    InvalidConsumption(Option<String>),
    #[error("Permission denied")]
    PermissionDenied,
    #[error("{0}")]
    GeneralCommandIssue(String),
    /// The executor ran and refused; the text is shown to the sender as is.
    #[error("{}", .0.get_text())]
    CommandFailed(Box<TextComponent>),
}

impl CommandError {
    pub fn into_component(self, command: &str) -> TextComponent {
        match self {
            Self::InvalidConsumption(arg) => {
                log::debug!("Could not parse {command:?} (argument {arg:?})");
                TextComponent::text("Invalid command syntax").color_named(NamedColor::Red)
            }
            Self::PermissionDenied => {
                TextComponent::text("You do not have permission to use this command")
                    .color_named(NamedColor::Red)
            }
            Self::GeneralCommandIssue(message) => {
                TextComponent::text(message).color_named(NamedColor::Red)
            }
            Self::CommandFailed(text) => *text,
        }
    }
}

enum Command {
    Tree(CommandTree),
    Alias(String),
}

#[derive(Default)]
pub struct CommandDispatcher {
    commands: HashMap<String, Command>,
    permissions: HashMap<String, String>,
}

impl CommandDispatcher {
    /// Runs `cmd` and reports any failure to the sender.
    pub async fn handle_command<'a>(
        &'a self,
        sender: &CommandSender,
        server: &'a Server,
        cmd: &'a str,
    ) -> CommandResult {
        match self.dispatch(sender, server, cmd).await {
            Ok(result) => result,
            Err(err) => {
                log::debug!("{sender} failed to run {cmd:?}: {err}");
                sender.send_message(err.into_component(cmd)).await;
                CommandResult::empty()
            }
        }
    }

    /// Execute a command using its corresponding [`CommandExecutor`](super::CommandExecutor).
    pub async fn dispatch<'a>(
        &'a self,
        sender: &CommandSender,
        server: &'a Server,
        cmd: &'a str,
    ) -> Result<CommandResult, CommandError> {
        let cmd = cmd.strip_prefix('/').unwrap_or(cmd);
        let mut parts = cmd.split_whitespace();
        let Some(key) = parts.next() else {
            return Err(CommandError::GeneralCommandIssue("Empty Command".to_string()));
        };
        let raw_args: RawArgs = parts.rev().collect();

        let Some(permission) = self.permissions.get(key) else {
            return Err(CommandError::GeneralCommandIssue(format!(
                "Unknown command: {key}"
            )));
        };
        if !sender.has_permission(server, permission).await {
            return Err(CommandError::PermissionDenied);
        }

        let tree = self.get_tree(key)?;

        for path in tree.iter_paths() {
            let mut raw_args = raw_args.clone();
            if let Some(result) =
                Self::try_is_fitting_path(sender, server, &path, tree, &mut raw_args).await?
            {
                return Ok(result);
            }
        }
        Err(CommandError::InvalidConsumption(None))
    }

    pub fn get_tree<'a>(&'a self, key: &str) -> Result<&'a CommandTree, CommandError> {
        let command = self
            .commands
            .get(key)
            .ok_or_else(|| CommandError::GeneralCommandIssue(format!("Unknown command: {key}")))?;

        match command {
            Command::Tree(tree) => Ok(tree),
            Command::Alias(target) => {
                let Some(Command::Tree(tree)) = &self.commands.get(target) else {
                    log::error!("Error while parsing command alias \"{key}\": pointing to \"{target}\" which is not a valid tree");
                    return Err(CommandError::GeneralCommandIssue(
                        "Internal Error (See logs for details)".into(),
                    ));
                };
                Ok(tree)
            }
        }
    }

    pub fn trees(&self) -> impl Iterator<Item = &CommandTree> {
        self.commands.values().filter_map(|command| match command {
            Command::Tree(tree) => Some(tree),
            Command::Alias(_) => None,
        })
    }

    /// Walks one path; `Ok(None)` means the input does not fit it.
    async fn try_is_fitting_path<'a>(
        sender: &CommandSender,
        server: &'a Server,
        path: &[usize],
        tree: &'a CommandTree,
        raw_args: &mut RawArgs<'a>,
    ) -> Result<Option<CommandResult>, CommandError> {
        let mut parsed_args: ConsumedArgs = HashMap::new();

        for node in path.iter().map(|&i| &tree.nodes[i]) {
            match &node.node_type {
                NodeType::ExecuteLeaf { executor } => {
                    return if raw_args.is_empty() {
                        executor.execute(sender, server, &parsed_args).await.map(Some)
                    } else {
                        log::trace!("Path {path:?} leaves {raw_args:?} unconsumed");
                        Ok(None)
                    };
                }
                NodeType::Literal { string } => {
                    if raw_args.pop() != Some(string.as_str()) {
                        return Ok(None);
                    }
                }
                NodeType::Argument { consumer, name } => {
                    match consumer.consume(sender, server, raw_args).await {
                        Some(consumed) => {
                            parsed_args.insert(name.as_str(), consumed);
                        }
                        None => return Ok(None),
                    }
                }
            }
        }

        log::error!(
            "Error while parsing command: {raw_args:?} was not consumed, but there should have been an error"
        );
        Err(CommandError::GeneralCommandIssue(
            "Internal Error (See logs for details)".into(),
        ))
    }

    /// Register a command with the dispatcher.
    pub fn register(&mut self, tree: CommandTree, permission: &str) {
        let mut names = tree.names.iter();

        let Some(primary_name) = names.next() else {
            log::error!("Refusing to register a command tree without a name");
            return;
        };
        let primary_name = primary_name.clone();

        for name in names {
            self.commands
                .insert(name.to_string(), Command::Alias(primary_name.to_string()));
            self.permissions
                .insert(name.to_string(), permission.to_string());
        }

        self.permissions
            .insert(primary_name.to_string(), permission.to_string());
        log::debug!("Registered {tree} ({permission})");
        self.commands
            .insert(primary_name.to_string(), Command::Tree(tree));
    }

    pub fn unregister(&mut self, name: &str) {
        let mut to_remove = Vec::new();
        for (key, value) in &self.commands {
            if key == name {
                to_remove.push(key.clone());
            } else if let Command::Alias(target) = value {
                if target == name {
                    to_remove.push(key.clone());
                }
            }
        }

        for key in to_remove {
            self.commands.remove(&key);
            self.permissions.remove(&key);
        }
    }
}

#[cfg(test)]
mod test {
    use std::sync::Arc;
    use std::sync::atomic::{AtomicU32, Ordering};

    use async_trait::async_trait;

    use crate::command::args::simple::SimpleArgConsumer;
    use crate::command::args::{ConsumedArgs, FindArg};
    use crate::command::tree::CommandTree;
    use crate::command::tree::builder::{argument, literal};
    use crate::command::{CommandExecutor, CommandResult, CommandSender};
    use crate::server::Server;

    use super::{CommandDispatcher, CommandError};

    struct Counter(Arc<AtomicU32>, u32);

    #[async_trait]
    impl CommandExecutor for Counter {
        async fn execute<'a>(
            &self,
            _sender: &CommandSender,
            _server: &Server,
            args: &ConsumedArgs<'a>,
        ) -> Result<CommandResult, CommandError> {
            let extra = SimpleArgConsumer::find_arg(args, "word").map_or(0, str::len);
            self.0.fetch_add(self.1 + extra as u32, Ordering::Relaxed);
            Ok(CommandResult::affected_items(1))
        }
    }

    fn dispatcher(counter: &Arc<AtomicU32>) -> CommandDispatcher {
        let tree = CommandTree::new(["rabbit", "bunny"], "Counts rabbits.")
            .then(literal("all").execute(Counter(counter.clone(), 100)))
            .then(argument("word", SimpleArgConsumer).execute(Counter(counter.clone(), 10)))
            .execute(Counter(counter.clone(), 1));
        let mut dispatcher = CommandDispatcher::default();
        dispatcher.register(tree, "test.rabbit");
        dispatcher
    }

    #[tokio::test]
    async fn picks_first_fitting_path() {
        let server = Server::default();
        let counter = Arc::new(AtomicU32::new(0));
        let dispatcher = dispatcher(&counter);
        let sender = CommandSender::Console;

        let result = dispatcher.dispatch(&sender, &server, "/rabbit").await.unwrap();
        assert_eq!(result, CommandResult::affected_items(1));
        assert_eq!(counter.swap(0, Ordering::Relaxed), 1);

        dispatcher.dispatch(&sender, &server, "rabbit all").await.unwrap();
        assert_eq!(counter.swap(0, Ordering::Relaxed), 100);

        dispatcher.dispatch(&sender, &server, "bunny  abc").await.unwrap();
        assert_eq!(counter.swap(0, Ordering::Relaxed), 13);
    }

    #[tokio::test]
    async fn rejects_unfitting_input() {
        let server = Server::default();
        let counter = Arc::new(AtomicU32::new(0));
        let dispatcher = dispatcher(&counter);
        let sender = CommandSender::Console;

        assert!(matches!(
            dispatcher.dispatch(&sender, &server, "rabbit a b").await,
            Err(CommandError::InvalidConsumption(None))
        ));
        assert!(matches!(
            dispatcher.dispatch(&sender, &server, "hare").await,
            Err(CommandError::GeneralCommandIssue(_))
        ));
        assert!(matches!(
            dispatcher.dispatch(&sender, &server, "   ").await,
            Err(CommandError::GeneralCommandIssue(_))
        ));
        assert_eq!(counter.load(Ordering::Relaxed), 0);
    }

    #[tokio::test]
    async fn unregister_removes_aliases() {
        let server = Server::default();
        let counter = Arc::new(AtomicU32::new(0));
        let mut dispatcher = dispatcher(&counter);
        dispatcher.unregister("rabbit");

        assert!(dispatcher.get_tree("bunny").is_err());
        assert!(
            dispatcher
                .dispatch(&CommandSender::Console, &server, "rabbit")
                .await
                .is_err()
        );
    }
}

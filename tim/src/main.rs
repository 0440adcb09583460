use std::path::Path;
use std::sync::Arc;

use tim::command::CommandSender;
use tim::enchanter::Enchanter;
use tim::entity::player::{GameProfile, Player};
use tim::logging::init_logger;
use tim::net::ConsoleClient;
use tim::plugin::PluginManager;
use tim::server::Server;
use tim_config::{EnchanterConfig, LoadConfiguration};
use tim_inventory::ItemStack;
use tim_util::PermissionLvl;
use tim_util::resource_location::ResourceLocation;
use tokio::io::{AsyncBufReadExt, BufReader};

const CONFIG_DIR: &str = "config";

#[tokio::main]
async fn main() {
    let config = match EnchanterConfig::load(Path::new(CONFIG_DIR)) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(1);
        }
    };
    if let Err(err) = init_logger(&config.logging) {
        eprintln!("{err}");
        std::process::exit(1);
    }

    let server = Arc::new(Server::default());
    let mut plugins = PluginManager::new(server.clone());
    plugins.add_plugin(
        Enchanter::metadata(),
        Box::new(Enchanter::new(config.enchant.clone())),
    );

    let started = match plugins.post_initialize().await {
        Ok(()) => plugins.server_starting().await,
        Err(err) => Err(err),
    };
    if let Err(err) = started {
        log::error!("{err}");
        std::process::exit(1);
    }
    log::debug!("Plugins reached {:?}", plugins.phase());

    let player = Arc::new(Player::new(
        GameProfile::offline("Arthur"),
        PermissionLvl::Two,
        Arc::new(ConsoleClient),
    ));
    let sword = ItemStack::new(1, ResourceLocation::vanilla("diamond_sword"));
    if let Err(err) = player.inventory.set_stack(0, sword).await {
        log::error!("{err}");
    }
    server.add_player(player.clone()).await;

    log::info!(
        "Type \"/<command>\" to run as {}, anything else runs as the console",
        player.gameprofile.name
    );
    log::info!("\"help\" lists commands, \"stop\" quits");

    let as_player = CommandSender::Player(player.clone());
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        let line = match lines.next_line().await {
            Ok(Some(line)) => line,
            Ok(None) => break,
            Err(err) => {
                log::error!("Couldn't read console input: {err}");
                break;
            }
        };
        let line = line.trim();

        match line {
            "" => {}
            "stop" => break,
            "help" => {
                let dispatcher = server.command_dispatcher.read().await;
                for tree in dispatcher.trees() {
                    log::info!("{tree}");
                    for usage in tree.usage() {
                        log::info!("  {usage}");
                    }
                }
            }
            _ if line.starts_with('/') => {
                server.handle_command(&as_player, line).await;
            }
            _ => {
                server.handle_command(&CommandSender::Console, line).await;
            }
        }
    }

    server.remove_player(&player.gameprofile.id).await;
    log::info!("Stopped");
}

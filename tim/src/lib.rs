pub mod command;
pub mod enchanter;
pub mod entity;
pub mod logging;
pub mod net;
pub mod plugin;
pub mod server;

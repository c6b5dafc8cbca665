mod client;
pub mod operation;
mod server;

pub use self::client::Client;
pub use self::server::SimServer;

// Modules
pub mod ai;
pub mod intent;
pub mod links;
pub mod mood;
pub mod server;

pub mod fixtures;
pub mod recording;
pub mod starter_server;

pub mod config;
pub mod logging;

pub mod archive;
pub mod build_system;
pub mod checksum;
pub mod events;
pub mod fetch;
pub mod generate_url;
pub mod host;
pub mod intercept;
pub mod materialize;
pub mod slot;
pub mod wizard;

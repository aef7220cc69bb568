//! CLI command handlers. Each command is in its own file.

mod checksum;
mod detect;
mod fetch;
mod generate;
mod materialize;

pub use checksum::run_checksum;
pub use detect::run_detect;
pub use fetch::run_fetch;
pub use generate::run_generate;
pub use materialize::run_materialize;

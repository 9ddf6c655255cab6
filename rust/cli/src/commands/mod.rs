//! Command handler modules.
//!
//! Each subcommand lives in its own file with a consistent pattern:
//!
//! - Public handler function: `pub fn handle_COMMAND_command(...) -> Result<(), CliError>`
//! - Output streams (`&mut dyn Write`) passed as parameters for testability
//! - Errors propagated via the `CliError` enum

pub mod cfg;
pub mod deal;
pub mod sim;
pub mod stats;

pub use cfg::handle_cfg_command;
pub use deal::handle_deal_command;
pub use sim::handle_sim_command;
pub use stats::handle_stats_command;

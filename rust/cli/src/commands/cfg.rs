//! Configuration display command.
//!
//! Prints the resolved configuration as JSON, with each field annotated
//! with the source it came from (default, file, or environment).

use crate::config;
use crate::error::CliError;
use crate::ui;
use std::io::Write;

/// Handle the cfg command.
pub fn handle_cfg_command(out: &mut dyn Write, err: &mut dyn Write) -> Result<(), CliError> {
    let resolved = match config::load_with_sources() {
        Ok(r) => r,
        Err(e) => {
            ui::write_error(err, &format!("Invalid configuration: {}", e))?;
            return Err(CliError::Config(format!("Invalid configuration: {}", e)));
        }
    };

    let config::ConfigResolved { config, sources } = resolved;
    let display = serde_json::json!({
        "num_decks": {
            "value": config.num_decks,
            "source": sources.num_decks,
        },
        "cut_card_loc": {
            "value": config.cut_card_loc,
            "source": sources.cut_card_loc,
        },
        "bet_size": {
            "value": config.bet_size,
            "source": sources.bet_size,
        },
        "starting_bankroll": {
            "value": config.starting_bankroll,
            "source": sources.starting_bankroll,
        },
        "seed": {
            "value": config.seed,
            "source": sources.seed,
        }
    });
    let json_str = serde_json::to_string_pretty(&display).map_err(std::io::Error::other)?;
    writeln!(out, "{}", json_str)?;
    Ok(())
}

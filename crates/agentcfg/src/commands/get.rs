use clap::ArgMatches;
use serde_json::json;
use tracing::{error, info};

use super::CommandContext;
use super::show::display_value;

pub(crate) fn handle_get_command(
    context: &CommandContext,
    matches: &ArgMatches,
) -> Result<(), Box<dyn std::error::Error>> {
    let key = matches
        .get_one::<String>("key")
        .ok_or("Key argument is required")?;
    let json_output = matches.get_flag("json");

    info!(event = "cli.get_started", key = %key);

    let Some((value, source)) = context.agent.effective(key) else {
        eprintln!("Unknown config key '{}'", key);
        error!(event = "cli.get_failed", key = %key, reason = "unknown_key");
        return Err(format!("Unknown config key '{}'", key).into());
    };

    if json_output {
        let output = json!({
            "key": key,
            "value": value,
            "source": source,
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        println!("{} = {} ({})", key, display_value(&value), source);
    }

    info!(event = "cli.get_completed", key = %key, source = source);
    Ok(())
}

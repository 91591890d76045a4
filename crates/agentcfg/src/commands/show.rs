use clap::ArgMatches;
use serde::Serialize;
use serde_json::Value;
use tracing::{error, info};

use agentcfg_core::accessor::{MAX_ITERATIONS_KEY, MODEL_KEY, TEMPERATURE_KEY};
use agentcfg_core::{AgentSnapshot, BaseConfig, events};

use super::CommandContext;

#[derive(Serialize)]
struct AdminStatus {
    path: String,
    status: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

#[derive(Serialize)]
struct ShowOutput<'a> {
    base: &'a BaseConfig,
    agent: AgentSnapshot,
    admin_config: AdminStatus,
}

pub(crate) fn handle_show_command(
    context: &CommandContext,
    matches: &ArgMatches,
) -> Result<(), Box<dyn std::error::Error>> {
    let json_output = matches.get_flag("json");

    info!(event = "cli.show_started", json_output = json_output);

    let agent = match context.agent.snapshot() {
        Ok(snapshot) => snapshot,
        Err(e) => {
            eprintln!("Invalid admin override: {}", e);
            error!(event = "cli.show_failed", error = %e);
            events::log_app_error(&e);
            return Err(e.into());
        }
    };

    let admin_config = admin_status(context);

    if json_output {
        let output = ShowOutput {
            base: context.agent.base(),
            agent,
            admin_config,
        };
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        print_base(context.agent.base())?;
        println!();
        println!("Agent (effective):");
        for key in [MODEL_KEY, TEMPERATURE_KEY, MAX_ITERATIONS_KEY] {
            let source = context
                .agent
                .effective(key)
                .map(|(_, source)| source)
                .unwrap_or("base");
            let value = match key {
                MODEL_KEY => agent.model.clone(),
                TEMPERATURE_KEY => agent.temperature.to_string(),
                _ => agent.max_iterations.to_string(),
            };
            println!("  {:<24} {:<24} ({})", key, value, source);
        }
        println!();
        match admin_config.error {
            Some(err) => println!(
                "Admin config: {} ({}: {})",
                admin_config.path, admin_config.status, err
            ),
            None => println!(
                "Admin config: {} ({})",
                admin_config.path, admin_config.status
            ),
        }
    }

    info!(event = "cli.show_completed");
    Ok(())
}

fn admin_status(context: &CommandContext) -> AdminStatus {
    let path = context.admin.path().display().to_string();
    match context.admin.read_document() {
        Ok(Some(_)) => AdminStatus {
            path,
            status: "loaded",
            error: None,
        },
        Ok(None) => AdminStatus {
            path,
            status: "missing",
            error: None,
        },
        Err(e) => AdminStatus {
            path,
            status: "unusable",
            error: Some(e.to_string()),
        },
    }
}

fn print_base(base: &BaseConfig) -> Result<(), Box<dyn std::error::Error>> {
    let Value::Object(fields) = serde_json::to_value(base)? else {
        return Err("Base configuration did not serialize to an object".into());
    };

    println!("Base configuration:");
    for (name, value) in &fields {
        println!("  {:<24} {}", name, display_value(value));
    }
    Ok(())
}

/// Strings print bare; everything else prints as compact JSON.
pub(crate) fn display_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_display_value() {
        assert_eq!(display_value(&json!("gpt-4")), "gpt-4");
        assert_eq!(display_value(&json!(30)), "30");
        assert_eq!(display_value(&json!({"a": 1})), "{\"a\":1}");
    }
}

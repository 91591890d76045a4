use std::sync::Arc;

use clap::ArgMatches;
use tracing::error;

use agentcfg_core::overrides::DEFAULT_ADMIN_CONFIG_PATH;
use agentcfg_core::secrets::DEFAULT_SECRETS_DIR;
use agentcfg_core::{AdminOverrides, AgentConfig, BaseConfig, SecretStore, events};

mod get;
mod secret;
mod show;

/// Everything a command needs, built once per invocation.
pub struct CommandContext {
    pub secrets: SecretStore,
    pub admin: AdminOverrides,
    pub agent: AgentConfig,
}

impl CommandContext {
    /// Build the base configuration and accessor from the global path flags.
    ///
    /// A malformed environment variable aborts here, before any command runs.
    fn from_matches(matches: &ArgMatches) -> Result<Self, Box<dyn std::error::Error>> {
        let secrets_dir = matches
            .get_one::<String>("secrets-dir")
            .map(String::as_str)
            .unwrap_or(DEFAULT_SECRETS_DIR);
        let admin_path = matches
            .get_one::<String>("admin-config")
            .map(String::as_str)
            .unwrap_or(DEFAULT_ADMIN_CONFIG_PATH);

        let secrets = SecretStore::new(secrets_dir);
        let admin = AdminOverrides::new(admin_path);

        let base = BaseConfig::from_env(&secrets).map_err(|e| {
            events::log_app_error(&e);
            e
        })?;
        let agent = AgentConfig::new(Arc::new(base), admin.clone());

        Ok(Self {
            secrets,
            admin,
            agent,
        })
    }
}

pub fn run_command(matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    events::log_app_startup();

    let Some((name, sub_matches)) = matches.subcommand() else {
        error!(event = "cli.command_missing");
        return Err("No command given".into());
    };

    let context = CommandContext::from_matches(sub_matches)?;

    match name {
        "show" => show::handle_show_command(&context, sub_matches),
        "get" => get::handle_get_command(&context, sub_matches),
        "secret" => secret::handle_secret_command(&context, sub_matches),
        _ => {
            error!(event = "cli.command_unknown", command = name);
            Err("Unknown command".into())
        }
    }
}

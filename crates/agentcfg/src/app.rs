use agentcfg_core::overrides::DEFAULT_ADMIN_CONFIG_PATH;
use agentcfg_core::secrets::DEFAULT_SECRETS_DIR;
use clap::{Arg, ArgAction, Command};

pub fn build_cli() -> Command {
    Command::new("agentcfg")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Inspect the effective agent configuration")
        .long_about("agentcfg resolves agent configuration the same way the agent services do: admin overrides first, then secret files, then environment variables, then built-in defaults. Use it to check what a running service will see.")
        .arg(
            Arg::new("quiet")
                .short('q')
                .long("quiet")
                .help("Only log errors")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .arg(
            Arg::new("secrets-dir")
                .long("secrets-dir")
                .help("Directory holding secret files")
                .default_value(DEFAULT_SECRETS_DIR)
                .global(true),
        )
        .arg(
            Arg::new("admin-config")
                .long("admin-config")
                .help("Path of the admin override document")
                .default_value(DEFAULT_ADMIN_CONFIG_PATH)
                .global(true),
        )
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            Command::new("show")
                .about("Show base configuration and effective agent settings")
                .arg(
                    Arg::new("json")
                        .long("json")
                        .help("Output in JSON format")
                        .action(ArgAction::SetTrue)
                )
        )
        .subcommand(
            Command::new("get")
                .about("Show the effective value of one configuration key")
                .arg(
                    Arg::new("key")
                        .help("Configuration key (e.g. model, temperature, api_port)")
                        .required(true)
                        .index(1)
                )
                .arg(
                    Arg::new("json")
                        .long("json")
                        .help("Output in JSON format")
                        .action(ArgAction::SetTrue)
                )
        )
        .subcommand(
            Command::new("secret")
                .about("Report which secret file candidates resolve (values are never printed)")
                .arg(
                    Arg::new("name")
                        .help("Secret name (e.g. model_name)")
                        .required(true)
                        .index(1)
                )
        )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_build() {
        let app = build_cli();
        assert_eq!(app.get_name(), "agentcfg");
    }

    #[test]
    fn test_cli_show_json() {
        let app = build_cli();
        let matches = app.try_get_matches_from(vec!["agentcfg", "show", "--json"]);
        assert!(matches.is_ok());

        let matches = matches.unwrap();
        let show_matches = matches.subcommand_matches("show").unwrap();
        assert!(show_matches.get_flag("json"));
    }

    #[test]
    fn test_cli_path_defaults() {
        let app = build_cli();
        let matches = app.try_get_matches_from(vec!["agentcfg", "show"]).unwrap();
        assert_eq!(
            matches.get_one::<String>("secrets-dir").unwrap(),
            "/run/secrets"
        );
        assert_eq!(
            matches.get_one::<String>("admin-config").unwrap(),
            "/workspace/_shared/admin_config.json"
        );
    }

    #[test]
    fn test_cli_global_paths_after_subcommand() {
        let app = build_cli();
        let matches = app
            .try_get_matches_from(vec![
                "agentcfg",
                "get",
                "model",
                "--admin-config",
                "/tmp/admin.json",
            ])
            .unwrap();
        let get_matches = matches.subcommand_matches("get").unwrap();
        assert_eq!(get_matches.get_one::<String>("key").unwrap(), "model");
        assert_eq!(
            get_matches.get_one::<String>("admin-config").unwrap(),
            "/tmp/admin.json"
        );
    }

    #[test]
    fn test_cli_get_requires_key() {
        let app = build_cli();
        let matches = app.try_get_matches_from(vec!["agentcfg", "get"]);
        assert!(matches.is_err());
    }

    #[test]
    fn test_cli_requires_subcommand() {
        let app = build_cli();
        let matches = app.try_get_matches_from(vec!["agentcfg"]);
        assert!(matches.is_err());
    }
}

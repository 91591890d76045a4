use clap::ArgMatches;
use tracing::info;

use agentcfg_core::secrets::{SecretProbe, SecretStore};

use super::CommandContext;

pub(crate) fn handle_secret_command(
    context: &CommandContext,
    matches: &ArgMatches,
) -> Result<(), Box<dyn std::error::Error>> {
    let name = matches
        .get_one::<String>("name")
        .ok_or("Secret name argument is required")?;

    let mut resolved = false;
    for path in context.secrets.candidates(name) {
        let status = match SecretStore::probe(&path) {
            // The first hit is the one that counts; later candidates are shadowed.
            SecretProbe::Found(_) if !resolved => {
                resolved = true;
                "found (used)".to_string()
            }
            SecretProbe::Found(_) => "found (shadowed)".to_string(),
            SecretProbe::Empty => "empty".to_string(),
            SecretProbe::Missing => "missing".to_string(),
            SecretProbe::Unreadable(e) => format!("unreadable: {}", e),
        };
        println!("{}: {}", path.display(), status);
    }

    if !resolved {
        println!("{}: not set, default applies", name);
    }

    info!(
        event = "cli.secret_checked",
        name = %name,
        resolved = resolved
    );
    Ok(())
}

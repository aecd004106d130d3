//! Config subcommand handlers.

use std::io::{self, BufRead};

use homeconnect_config::{Config, Profile, config_path, save_config, store_access_token};

use crate::cli::{ConfigArgs, ConfigCommand, GlobalOpts, OutputFormat, SetTokenArgs};
use crate::config::active_profile_name;
use crate::error::CliError;
use crate::output;

const MASK: &str = "********";

pub fn handle(args: ConfigArgs, config: Config, global: &GlobalOpts) -> Result<(), CliError> {
    match args.command {
        ConfigCommand::Path => {
            output::print_output(&config_path().display().to_string(), global.quiet);
            Ok(())
        }

        ConfigCommand::Show => {
            let masked = masked(config);
            let out = match global.output {
                OutputFormat::Table | OutputFormat::Plain => {
                    toml::to_string_pretty(&masked).map_err(|e| CliError::Validation {
                        field: "config".into(),
                        reason: format!("failed to serialize config: {e}"),
                    })?
                }
                structured => output::render_structured(structured, &masked)?,
            };
            output::print_output(out.trim_end(), global.quiet);
            Ok(())
        }

        ConfigCommand::SetToken(set) => set_token(&set, config, global),
    }
}

/// Hide plaintext tokens before printing.
fn masked(mut config: Config) -> Config {
    for profile in config.profiles.values_mut() {
        if profile.access_token.is_some() {
            profile.access_token = Some(MASK.into());
        }
    }
    config
}

fn set_token(args: &SetTokenArgs, mut config: Config, global: &GlobalOpts) -> Result<(), CliError> {
    let name = active_profile_name(global, &config);

    let token = if args.stdin {
        let mut line = String::new();
        io::stdin().lock().read_line(&mut line)?;
        line.trim().to_owned()
    } else {
        rpassword::prompt_password(format!("Access token for '{name}': "))?
            .trim()
            .to_owned()
    };
    if token.is_empty() {
        return Err(CliError::Validation {
            field: "access_token".into(),
            reason: "access token cannot be empty".into(),
        });
    }

    let profile = config.profiles.entry(name.clone()).or_insert_with(Profile::default);
    if args.plaintext {
        profile.access_token = Some(token);
    } else {
        store_access_token(&name, &token)?;
        profile.access_token = None;
        eprintln!("Access token stored in system keyring");
    }

    if config.default_profile.is_none() {
        config.default_profile = Some(name.clone());
    }
    save_config(&config)?;
    tracing::info!(profile = %name, path = %config_path().display(), "saved configuration");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn show_masks_plaintext_tokens() {
        let mut config = Config::default();
        config.profiles.insert(
            "home".into(),
            Profile {
                access_token: Some("secret".into()),
                ..Profile::default()
            },
        );
        config.profiles.insert("sim".into(), Profile::default());

        let shown = masked(config);
        assert_eq!(shown.profiles["home"].access_token.as_deref(), Some(MASK));
        assert_eq!(shown.profiles["sim"].access_token, None);
    }
}

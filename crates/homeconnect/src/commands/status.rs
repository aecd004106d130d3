//! `status`: show all status values of an appliance, or a single one.

use tabled::Tabled;

use homeconnect_api::Status;

use crate::cli::{GlobalOpts, StatusArgs};
use crate::config::Session;
use crate::error::CliError;
use crate::output;

#[derive(Tabled)]
struct StatusRow {
    #[tabled(rename = "Key")]
    key: String,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Value")]
    value: String,
}

fn to_row(s: &Status) -> StatusRow {
    StatusRow {
        key: s.key.to_string(),
        name: s.name.clone().unwrap_or_default(),
        value: display_value(s),
    }
}

/// The translated value if the API sent one, else the raw value with its unit.
fn display_value(status: &Status) -> String {
    if let Some(ref shown) = status.display_value {
        return shown.clone();
    }
    let raw = match status.value {
        serde_json::Value::String(ref s) => s.clone(),
        ref other => other.to_string(),
    };
    match status.unit {
        Some(ref unit) => format!("{raw} {unit}"),
        None => raw,
    }
}

/// Keys not in `StatusKey` are passed through; only malformed ones are refused.
fn validate_key(raw: &str) -> Result<(), CliError> {
    if raw.is_empty() || raw.contains(['/', '?', '#']) || raw.contains(char::is_whitespace) {
        return Err(CliError::Validation {
            field: "key".into(),
            reason: format!("'{raw}' is not a status key"),
        });
    }
    Ok(())
}

pub async fn handle(session: &Session, args: StatusArgs, global: &GlobalOpts) -> Result<(), CliError> {
    let client = &session.client;

    let out = match args.key {
        Some(raw) => {
            validate_key(&raw)?;
            let status = client
                .get_status_value_raw(&args.ha_id, &raw, session.language)
                .await?;
            output::render_single(
                global.output,
                &status,
                |s| format!("{}: {}", s.name.as_deref().unwrap_or(&raw), display_value(s)),
                display_value,
            )?
        }
        None => {
            let status = client.get_status(&args.ha_id, session.language).await?.status;
            output::render_list(global.output, &status, to_row, |s| {
                format!("{}={}", s.key, display_value(s))
            })?
        }
    };

    output::print_output(&out, global.quiet);
    Ok(())
}

#[cfg(test)]
mod tests {
    use homeconnect_api::StatusKey;
    use serde_json::json;

    use super::*;

    fn status(value: serde_json::Value) -> Status {
        Status {
            key: StatusKey::BshCommonDoorState,
            name: None,
            value,
            display_value: None,
            unit: None,
            kind: None,
            constraints: None,
        }
    }

    #[test]
    fn display_value_prefers_translation() {
        let mut s = status(json!("BSH.Common.EnumType.DoorState.Open"));
        assert_eq!(display_value(&s), "BSH.Common.EnumType.DoorState.Open");

        s.display_value = Some("Open".into());
        assert_eq!(display_value(&s), "Open");
    }

    #[test]
    fn vendor_keys_pass_validation() {
        assert!(validate_key("BSH.Common.Status.DoorState").is_ok());
        assert!(validate_key("Cooking.Oven.Status.Vendor.NewerKey").is_ok());
        assert!(validate_key("").is_err());
        assert!(validate_key("a/b").is_err());
        assert!(validate_key("two words").is_err());
    }

    #[test]
    fn display_value_appends_unit() {
        let mut s = status(json!(42));
        s.unit = Some("%".into());
        assert_eq!(display_value(&s), "42 %");
    }
}

// ── Status, settings, programs and commands ──
//
// Values on these resources are untyped on the wire (enum strings, numbers,
// booleans), so they stay as `serde_json::Value`.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::keys::{CommandKey, OptionKey, ProgramKey, SettingKey, StatusKey};

/// Value range and access rules advertised for a status or setting.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Constraints {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max: Option<i64>,
    #[serde(rename = "stepsize", default, skip_serializing_if = "Option::is_none")]
    pub step_size: Option<i64>,
    #[serde(rename = "allowedvalues", default, skip_serializing_if = "Option::is_none")]
    pub allowed_values: Option<Vec<String>>,
    #[serde(rename = "displayvalues", default, skip_serializing_if = "Option::is_none")]
    pub display_values: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default: Option<Value>,
    /// `"read"` or `"readWrite"`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub access: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Status {
    pub key: StatusKey,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub value: Value,
    #[serde(rename = "displayvalue", default, skip_serializing_if = "Option::is_none")]
    pub display_value: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub constraints: Option<Constraints>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ArrayOfStatus {
    pub status: Vec<Status>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Setting {
    pub key: SettingKey,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub value: Value,
    #[serde(rename = "displayvalue", default, skip_serializing_if = "Option::is_none")]
    pub display_value: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub constraints: Option<Constraints>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ArrayOfSettings {
    pub settings: Vec<Setting>,
}

/// An option value of a selected or active program.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProgramOption {
    pub key: OptionKey,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub value: Value,
    #[serde(rename = "displayvalue", default, skip_serializing_if = "Option::is_none")]
    pub display_value: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Program {
    pub key: ProgramKey,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default)]
    pub options: Vec<ProgramOption>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Command {
    pub key: CommandKey,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArrayOfCommands {
    pub commands: Vec<Command>,
}

/// Body of a setting or command write: `{"data": {"key": .., "value": ..}}`.
#[derive(Debug, Serialize)]
pub(crate) struct PutValue<'a> {
    data: PutValueInner<'a>,
}

#[derive(Debug, Serialize)]
struct PutValueInner<'a> {
    key: &'a str,
    value: &'a Value,
}

impl<'a> PutValue<'a> {
    pub(crate) fn new(key: &'a str, value: &'a Value) -> Self {
        Self {
            data: PutValueInner { key, value },
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn status_keeps_untyped_value_and_unknown_key() {
        let json = json!({
            "status": [
                {
                    "key": "BSH.Common.Status.OperationState",
                    "value": "BSH.Common.EnumType.OperationState.Ready",
                    "displayvalue": "Ready"
                },
                { "key": "Vendor.Future.Status", "value": 3 }
            ]
        });

        let list: ArrayOfStatus = serde_json::from_value(json).unwrap();
        assert_eq!(list.status[0].key, StatusKey::BshCommonOperationState);
        assert_eq!(list.status[0].display_value.as_deref(), Some("Ready"));
        assert!(list.status[1].key.is_unknown());
        assert_eq!(list.status[1].value, json!(3));
    }

    #[test]
    fn setting_constraints_use_wire_names() {
        let json = json!({
            "key": "BSH.Common.Setting.PowerState",
            "value": "BSH.Common.EnumType.PowerState.On",
            "type": "BSH.Common.EnumType.PowerState",
            "constraints": {
                "allowedvalues": ["BSH.Common.EnumType.PowerState.On", "BSH.Common.EnumType.PowerState.Standby"],
                "access": "readWrite"
            }
        });

        let setting: Setting = serde_json::from_value(json).unwrap();
        let constraints = setting.constraints.unwrap();
        assert_eq!(constraints.allowed_values.unwrap().len(), 2);
        assert_eq!(constraints.access.as_deref(), Some("readWrite"));
        assert_eq!(setting.kind.as_deref(), Some("BSH.Common.EnumType.PowerState"));
    }

    #[test]
    fn put_value_wraps_in_data_envelope() {
        let value = json!(true);
        let body = serde_json::to_value(PutValue::new("BSH.Common.Setting.ChildLock", &value)).unwrap();
        assert_eq!(
            body,
            json!({ "data": { "key": "BSH.Common.Setting.ChildLock", "value": true } })
        );
    }
}

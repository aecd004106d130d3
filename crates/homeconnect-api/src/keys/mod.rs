//! Open key enumerations.
//!
//! Every identifier the API sends is a dot-separated vendor string such as
//! `BSH.Common.Status.DoorState`. Each enumeration here knows a closed set of
//! them and resolves anything else to an `Unknown` member, so lookup from a raw
//! string never fails. Keys serialize back to their raw string.

/// Shared conversions for a strum-derived key enum with an `Unknown` member.
macro_rules! open_key {
    ($name:ident) => {
        impl $name {
            /// Resolve a raw key, falling back to `Unknown`.
            pub fn from_raw(raw: &str) -> Self {
                raw.parse().unwrap_or(Self::Unknown)
            }

            /// The raw vendor string for this key.
            pub fn as_str(self) -> &'static str {
                self.into()
            }

            pub fn is_unknown(self) -> bool {
                matches!(self, Self::Unknown)
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl serde::Serialize for $name {
            fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.serialize_str(self.as_str())
            }
        }

        impl<'de> serde::Deserialize<'de> for $name {
            fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                let raw = <std::borrow::Cow<'de, str>>::deserialize(deserializer)?;
                Ok(Self::from_raw(&raw))
            }
        }
    };
}

mod command;
mod event;
mod option;
mod program;
mod setting;
mod status;

pub use command::CommandKey;
pub use event::EventKey;
pub use option::OptionKey;
pub use program::ProgramKey;
pub use setting::SettingKey;
pub use status::StatusKey;

// ── Conversions into EventKey ────────────────────────────────────────

impl From<StatusKey> for EventKey {
    fn from(key: StatusKey) -> Self {
        Self::from_raw(key.as_str())
    }
}

impl From<SettingKey> for EventKey {
    fn from(key: SettingKey) -> Self {
        Self::from_raw(key.as_str())
    }
}

impl From<OptionKey> for EventKey {
    fn from(key: OptionKey) -> Self {
        Self::from_raw(key.as_str())
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use strum::IntoEnumIterator;

    use super::*;

    fn assert_unique<K: IntoEnumIterator + Copy + Into<&'static str>>() {
        let mut seen = HashSet::new();
        for key in K::iter() {
            let raw: &'static str = key.into();
            assert!(seen.insert(raw), "duplicate key string {raw}");
        }
    }

    #[test]
    fn unmatched_strings_resolve_to_unknown() {
        let raw = "Vendor.Future.Key";
        assert!(StatusKey::from_raw(raw).is_unknown());
        assert!(SettingKey::from_raw(raw).is_unknown());
        assert!(OptionKey::from_raw(raw).is_unknown());
        assert!(ProgramKey::from_raw(raw).is_unknown());
        assert!(CommandKey::from_raw(raw).is_unknown());
        assert!(EventKey::from_raw(raw).is_unknown());
        assert!(EventKey::from_raw("").is_unknown());
    }

    #[test]
    fn key_strings_are_unique() {
        assert_unique::<StatusKey>();
        assert_unique::<SettingKey>();
        assert_unique::<OptionKey>();
        assert_unique::<ProgramKey>();
        assert_unique::<CommandKey>();
        assert_unique::<EventKey>();
    }

    #[test]
    fn known_keys_round_trip_through_raw_string() {
        let key = StatusKey::from_raw("BSH.Common.Status.DoorState");
        assert_eq!(key, StatusKey::BshCommonDoorState);
        assert_eq!(key.to_string(), "BSH.Common.Status.DoorState");

        let key = EventKey::from_raw("BSH.Common.Event.ProgramFinished");
        assert_eq!(key, EventKey::BshCommonEventProgramFinished);
    }

    #[test]
    fn typed_keys_convert_into_event_keys() {
        for key in StatusKey::iter().filter(|k| !k.is_unknown()) {
            assert_eq!(EventKey::from(key).as_str(), key.as_str());
        }
        for key in SettingKey::iter().filter(|k| !k.is_unknown()) {
            assert_eq!(EventKey::from(key).as_str(), key.as_str());
        }
        for key in OptionKey::iter().filter(|k| !k.is_unknown()) {
            assert_eq!(EventKey::from(key).as_str(), key.as_str());
        }
    }

    #[test]
    fn keys_serialize_as_raw_strings() {
        let json = serde_json::to_string(&SettingKey::BshCommonPowerState).unwrap();
        assert_eq!(json, r#""BSH.Common.Setting.PowerState""#);

        let key: ProgramKey = serde_json::from_str(r#""Not.A.Program""#).unwrap();
        assert_eq!(key, ProgramKey::Unknown);
    }
}

//! Wire models for REST responses and stream frames.

mod appliance;
mod event;
mod resource;

pub use appliance::{ArrayOfHomeAppliances, HomeAppliance};
pub use event::{
    ArrayOfEvents, CallbackCategory, DecodeError, Event, EventMessage, EventType, EventValue,
};
pub(crate) use resource::PutValue;
pub use resource::{
    ArrayOfCommands, ArrayOfSettings, ArrayOfStatus, Command, Constraints, Program, ProgramOption,
    Setting, Status,
};

/// `Accept-Language` values the API serves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum Language {
    #[serde(rename = "de-DE")]
    De,
    #[serde(rename = "en-US")]
    En,
    #[serde(rename = "en-GB")]
    EnGb,
}

impl Language {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::De => "de-DE",
            Self::En => "en-US",
            Self::EnGb => "en-GB",
        }
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Language {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "de-DE" => Ok(Self::De),
            "en-US" => Ok(Self::En),
            "en-GB" => Ok(Self::EnGb),
            other => Err(format!("unsupported language {other:?} (expected de-DE, en-US or en-GB)")),
        }
    }
}

/// Media types used by the API.
pub mod content_type {
    pub const JSON: &str = "application/vnd.bsh.sdk.v1+json";
    pub const EVENT_STREAM: &str = "text/event-stream";
}

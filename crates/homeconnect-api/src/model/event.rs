// ── Stream event envelope ──
//
// A stream frame carries the appliance id in its `id` field, the event type in
// its `event` field, and a JSON payload in `data`. Decoding is the same for
// iterator and callback delivery.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::keys::EventKey;
use crate::stream::Frame;

/// Value carried by an [`Event`].
///
/// The variant follows the JSON type of the wire value: `1` is an `Int`,
/// `1.0` a `Float`, `"1"` a `String`. Nothing is coerced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum EventValue {
    Bool(bool),
    Int(i64),
    Float(f64),
    String(String),
}

impl EventValue {
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }

    #[allow(clippy::cast_precision_loss, clippy::as_conversions)]
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Int(i) => Some(*i as f64),
            Self::Float(f) => Some(*f),
            _ => None,
        }
    }
}

impl fmt::Display for EventValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool(b) => write!(f, "{b}"),
            Self::Int(i) => write!(f, "{i}"),
            Self::Float(x) => write!(f, "{x}"),
            Self::String(s) => f.write_str(s),
        }
    }
}

/// One event item from a stream frame.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    pub key: EventKey,

    /// Seconds since the Unix epoch.
    pub timestamp: i64,

    pub level: String,
    pub handling: String,
    pub value: EventValue,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uri: Option<String>,

    #[serde(
        rename = "displayvalue",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub display_value: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,
}

impl Event {
    /// The event timestamp as a UTC date-time, if it is in range.
    pub fn time(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp(self.timestamp, 0)
    }
}

/// Ordered event items of a single frame.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ArrayOfEvents {
    pub items: Vec<Event>,
}

impl ArrayOfEvents {
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

// ── Event types ──────────────────────────────────────────────────────

/// Registry namespace a frame's items are dispatched to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CallbackCategory {
    Status,
    Event,
    Notify,
}

/// Frame-level event type, from the SSE `event` field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EventType {
    #[serde(rename = "KEEP-ALIVE")]
    KeepAlive,
    #[serde(rename = "STATUS")]
    Status,
    #[serde(rename = "EVENT")]
    Event,
    #[serde(rename = "NOTIFY")]
    Notify,
    #[serde(rename = "CONNECTED")]
    Connected,
    #[serde(rename = "DISCONNECTED")]
    Disconnected,
    #[serde(rename = "PAIRED")]
    Paired,
    #[serde(rename = "DEPAIRED")]
    Depaired,
}

impl EventType {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::KeepAlive => "KEEP-ALIVE",
            Self::Status => "STATUS",
            Self::Event => "EVENT",
            Self::Notify => "NOTIFY",
            Self::Connected => "CONNECTED",
            Self::Disconnected => "DISCONNECTED",
            Self::Paired => "PAIRED",
            Self::Depaired => "DEPAIRED",
        }
    }

    /// Namespace for item-level dispatch, `None` for frames without items.
    pub fn callback_category(self) -> Option<CallbackCategory> {
        match self {
            Self::Status => Some(CallbackCategory::Status),
            Self::Event => Some(CallbackCategory::Event),
            Self::Notify => Some(CallbackCategory::Notify),
            Self::KeepAlive
            | Self::Connected
            | Self::Disconnected
            | Self::Paired
            | Self::Depaired => None,
        }
    }

    /// Whether this frame reports an appliance joining or leaving the account.
    pub fn is_appliance_lifecycle(self) -> bool {
        matches!(
            self,
            Self::Connected | Self::Disconnected | Self::Paired | Self::Depaired
        )
    }
}

impl FromStr for EventType {
    type Err = DecodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "KEEP-ALIVE" => Self::KeepAlive,
            "STATUS" => Self::Status,
            "EVENT" => Self::Event,
            "NOTIFY" => Self::Notify,
            "CONNECTED" => Self::Connected,
            "DISCONNECTED" => Self::Disconnected,
            "PAIRED" => Self::Paired,
            "DEPAIRED" => Self::Depaired,
            other => return Err(DecodeError::UnknownEventType(other.to_owned())),
        })
    }
}

impl fmt::Display for EventType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── Decoding ─────────────────────────────────────────────────────────

/// Why a stream frame could not be turned into an [`EventMessage`].
///
/// The stream reader logs these and moves on to the next frame.
#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("frame data is not valid JSON: {0}")]
    Malformed(#[source] serde_json::Error),

    #[error("frame data is not a valid event: {0}")]
    InvalidEvent(#[source] serde_json::Error),

    #[error("unknown event type {0:?}")]
    UnknownEventType(String),
}

/// A decoded stream frame.
#[derive(Debug, Clone, PartialEq)]
pub struct EventMessage {
    /// Appliance the frame refers to. Empty for frames without an id.
    pub ha_id: String,
    pub event_type: EventType,
    pub data: ArrayOfEvents,
}

impl EventMessage {
    /// Decode a raw frame.
    ///
    /// Empty data gives an empty batch. A JSON object with an `items` member is
    /// a batch; any other value is a single event. One invalid item rejects the
    /// whole frame.
    pub fn from_frame(frame: &Frame) -> Result<Self, DecodeError> {
        let event_type: EventType = frame.event.parse()?;
        let data = parse_events(&frame.data)?;
        Ok(Self {
            ha_id: frame.id.clone(),
            event_type,
            data,
        })
    }
}

fn parse_events(data: &str) -> Result<ArrayOfEvents, DecodeError> {
    if data.trim().is_empty() {
        return Ok(ArrayOfEvents::default());
    }

    let value: serde_json::Value = serde_json::from_str(data).map_err(DecodeError::Malformed)?;
    if value.get("items").is_some() {
        serde_json::from_value(value).map_err(DecodeError::InvalidEvent)
    } else {
        let event: Event = serde_json::from_value(value).map_err(DecodeError::InvalidEvent)?;
        Ok(ArrayOfEvents { items: vec![event] })
    }
}

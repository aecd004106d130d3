// homeconnect-api: Async Rust client for the Home Connect appliance API
//
// Typed REST access plus the server-sent-event stream engine: frame decoding,
// classification by event type, and per-appliance callback dispatch.

pub mod auth;
pub mod client;
pub mod error;
pub mod keys;
pub mod model;
pub mod stream;
pub mod transport;

pub use auth::{Auth, DEFAULT_HOST, EventSource, FrameStream, SIMULATOR_HOST, StaticToken, TokenProvider};
pub use client::Client;
pub use error::{ApiError, Error};
pub use keys::{CommandKey, EventKey, OptionKey, ProgramKey, SettingKey, StatusKey};
pub use model::{
    ArrayOfCommands, ArrayOfEvents, ArrayOfHomeAppliances, ArrayOfSettings, ArrayOfStatus,
    CallbackCategory, Command, Constraints, DecodeError, Event, EventMessage, EventType,
    EventValue, HomeAppliance, Language, Program, ProgramOption, Setting, Status,
};
pub use stream::{
    CallbackRegistry, Deregister, EventReader, Frame, SseClient, StreamEnd, StreamScope,
};
pub use transport::TransportConfig;

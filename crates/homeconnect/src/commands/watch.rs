//! `watch`: follow the live event stream.
//!
//! Without `--changes` the stream is read in iterator mode and every event
//! item is printed. With `--changes` the stream runs in callback mode and only
//! appliance lifecycle frames (CONNECTED, PAIRED, ...) reach the output.
//! Reconnection lives here, not in the library: `--reconnect` reopens the
//! stream with exponential backoff after transient failures, and after at
//! least the initial delay when the server ends the stream cleanly.

use std::time::Duration;

use chrono::Local;
use owo_colors::OwoColorize;
use serde::Serialize;
use tokio_util::sync::CancellationToken;
use tracing::{error, info, warn};

use homeconnect_api::{
    Error as ApiError, Event, EventMessage, EventType, Language, SseClient, StreamEnd, StreamScope,
};

use crate::cli::{GlobalOpts, OutputFormat, WatchArgs};
use crate::config::Session;
use crate::error::CliError;
use crate::output;

// ── ReconnectConfig ──────────────────────────────────────────────────

/// Exponential backoff configuration for stream reconnection.
#[derive(Debug, Clone)]
pub struct ReconnectConfig {
    /// Delay before the first reconnection attempt. Default: 1s.
    pub initial_delay: Duration,

    /// Upper bound on backoff delay. Default: 30s.
    pub max_delay: Duration,

    /// Consecutive failed attempts before giving up. `None` retries forever.
    pub max_retries: Option<u32>,
}

impl Default for ReconnectConfig {
    fn default() -> Self {
        Self {
            initial_delay: Duration::from_secs(1),
            max_delay: Duration::from_secs(30),
            max_retries: None,
        }
    }
}

// ── Handler ──────────────────────────────────────────────────────────

pub async fn handle(session: Session, args: WatchArgs, global: &GlobalOpts) -> Result<(), CliError> {
    let cancel = CancellationToken::new();
    let on_signal = cancel.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            on_signal.cancel();
        }
    });

    let scope = args
        .appliance
        .map_or(StreamScope::All, StreamScope::Appliance);
    let printer = Printer::new(global);
    let sse = session.client.sse();

    if args.changes {
        let printer = printer.clone();
        sse.set_home_appliances_changes_callback(move |event_type, ha_id| {
            printer.lifecycle(event_type, &ha_id);
            async {}
        });
    }

    let reconnect = args.reconnect.then(|| ReconnectConfig {
        max_retries: args.max_retries,
        ..ReconnectConfig::default()
    });

    let mut attempt: u32 = 0;
    loop {
        let result = if args.changes {
            sse.run(&scope, session.language, &cancel).await
        } else {
            follow(sse, &scope, session.language, args.keep_alive, &printer, &cancel).await
        };

        match result {
            Ok(StreamEnd::Cancelled) => return Ok(()),
            Ok(end) => {
                let Some(ref config) = reconnect else {
                    return match end {
                        StreamEnd::TimedOut => Err(CliError::Timeout {
                            seconds: session.read_timeout_secs,
                        }),
                        _ => Ok(()),
                    };
                };
                // Clean end: reset the attempt counter but still pause.
                attempt = 0;
                let delay = clean_end_delay(config);
                info!(
                    ?end,
                    path = %scope.path(),
                    delay_ms = millis(delay),
                    "Event stream ended, reconnecting"
                );
                if !pause(delay, &cancel).await {
                    return Ok(());
                }
            }
            Err(e) => {
                let Some(ref config) = reconnect else {
                    return Err(e.into());
                };
                if !e.is_transient() {
                    return Err(e.into());
                }
                warn!(error = %e, attempt, "Event stream error");

                if let Some(max) = config.max_retries {
                    if attempt >= max {
                        error!(max_retries = max, "Reconnection limit reached, giving up");
                        return Err(e.into());
                    }
                }

                let delay = retry_delay(&e, attempt, config);
                info!(delay_ms = millis(delay), attempt, "Waiting before reconnect");

                if !pause(delay, &cancel).await {
                    return Ok(());
                }
                attempt += 1;
            }
        }
    }
}

/// Sleep for `delay`. Returns `false` if `cancel` fired first.
async fn pause(delay: Duration, cancel: &CancellationToken) -> bool {
    tokio::select! {
        biased;
        () = cancel.cancelled() => false,
        () = tokio::time::sleep(delay) => true,
    }
}

fn millis(delay: Duration) -> u64 {
    u64::try_from(delay.as_millis()).unwrap_or(u64::MAX)
}

/// Iterator mode: print every message until the stream ends or `cancel` fires.
async fn follow(
    sse: &SseClient,
    scope: &StreamScope,
    language: Option<Language>,
    keep_alive: bool,
    printer: &Printer,
    cancel: &CancellationToken,
) -> Result<StreamEnd, ApiError> {
    let mut reader = tokio::select! {
        biased;
        () = cancel.cancelled() => return Ok(StreamEnd::Cancelled),
        reader = sse.events(scope, language) => reader?.skip_keep_alive(!keep_alive),
    };

    loop {
        tokio::select! {
            biased;
            () = cancel.cancelled() => return Ok(StreamEnd::Cancelled),
            next = reader.next_message() => match next? {
                Some(message) => printer.message(&message),
                None => return Ok(reader.end_reason().unwrap_or(StreamEnd::Closed)),
            },
        }
    }
}

// ── Backoff calculation ──────────────────────────────────────────────

/// Backoff for `attempt`, stretched to the server's `Retry-After` when rate
/// limited.
fn retry_delay(err: &ApiError, attempt: u32, config: &ReconnectConfig) -> Duration {
    let backoff = calculate_backoff(attempt, config);
    match err {
        ApiError::TooManyRequests {
            retry_after_secs: Some(secs),
            ..
        } => backoff.max(Duration::from_secs(*secs)),
        _ => backoff,
    }
}

/// Pause after the server closed the stream or it went quiet.
fn clean_end_delay(config: &ReconnectConfig) -> Duration {
    calculate_backoff(0, config).max(config.initial_delay)
}

/// Exponential backoff with jitter.
///
/// `delay = min(initial * 2^attempt, max) * jitter`, jitter within +-25%.
fn calculate_backoff(attempt: u32, config: &ReconnectConfig) -> Duration {
    let exponent = i32::try_from(attempt.min(30)).unwrap_or(30);
    let base = config.initial_delay.as_secs_f64() * 2.0_f64.powi(exponent);
    let capped = base.min(config.max_delay.as_secs_f64());

    // Deterministic jitter seeded from the attempt number.
    let jitter_factor = 1.0 + 0.25 * (f64::from(attempt) * 7.3).sin();
    Duration::from_secs_f64((capped * jitter_factor).max(0.0))
}

// ── Printing ─────────────────────────────────────────────────────────

/// One output record: a frame's type and appliance, plus one item if any.
#[derive(Serialize)]
struct EventRecord<'a> {
    ha_id: &'a str,
    #[serde(rename = "type")]
    event_type: EventType,
    #[serde(flatten, skip_serializing_if = "Option::is_none")]
    event: Option<&'a Event>,
}

#[derive(Debug, Clone)]
struct Printer {
    format: OutputFormat,
    color: bool,
    quiet: bool,
}

impl Printer {
    fn new(global: &GlobalOpts) -> Self {
        Self {
            format: global.output,
            color: output::should_color(global.color),
            quiet: global.quiet,
        }
    }

    fn message(&self, message: &EventMessage) {
        if message.data.is_empty() {
            self.emit(&EventRecord {
                ha_id: &message.ha_id,
                event_type: message.event_type,
                event: None,
            });
            return;
        }
        for event in &message.data.items {
            self.emit(&EventRecord {
                ha_id: &message.ha_id,
                event_type: message.event_type,
                event: Some(event),
            });
        }
    }

    fn lifecycle(&self, event_type: EventType, ha_id: &str) {
        self.emit(&EventRecord {
            ha_id,
            event_type,
            event: None,
        });
    }

    fn emit(&self, record: &EventRecord<'_>) {
        // One document per record so the output can be consumed line by line.
        let rendered = match self.format {
            OutputFormat::Table | OutputFormat::Plain => Ok(self.text_line(record)),
            OutputFormat::Json | OutputFormat::JsonCompact => {
                output::render_structured(OutputFormat::JsonCompact, record)
            }
            OutputFormat::Yaml => output::render_structured(OutputFormat::Yaml, record)
                .map(|yaml| format!("---\n{}", yaml.trim_end())),
        };
        match rendered {
            Ok(line) => output::print_output(&line, self.quiet),
            Err(e) => warn!(error = %e, "Could not render event"),
        }
    }

    fn text_line(&self, record: &EventRecord<'_>) -> String {
        let kind = if self.color {
            record.event_type.as_str().cyan().to_string()
        } else {
            record.event_type.as_str().to_owned()
        };

        let Some(event) = record.event else {
            return format!("{kind:<12} {}", record.ha_id);
        };

        let time = event.time().map_or_else(
            || event.timestamp.to_string(),
            |t| t.with_timezone(&Local).format("%H:%M:%S").to_string(),
        );
        let value = event
            .display_value
            .clone()
            .unwrap_or_else(|| event.value.to_string());
        let value = match event.unit {
            Some(ref unit) => format!("{value} {unit}"),
            None => value,
        };
        let value = if self.color {
            value.bold().to_string()
        } else {
            value
        };

        format!("{time} {kind:<12} {} {} = {value}", record.ha_id, event.key)
    }
}

#[cfg(test)]
mod tests {
    use homeconnect_api::{ApiError as ErrorPair, EventValue, StatusKey};

    use super::*;

    fn printer() -> Printer {
        Printer {
            format: OutputFormat::Plain,
            color: false,
            quiet: true,
        }
    }

    fn door_event() -> Event {
        Event {
            key: StatusKey::BshCommonDoorState.into(),
            timestamp: 1_700_000_000,
            level: "hint".into(),
            handling: "none".into(),
            value: EventValue::String("BSH.Common.EnumType.DoorState.Open".into()),
            name: None,
            uri: None,
            display_value: Some("Open".into()),
            unit: None,
        }
    }

    #[test]
    fn default_reconnect_config() {
        let config = ReconnectConfig::default();
        assert_eq!(config.initial_delay, Duration::from_secs(1));
        assert_eq!(config.max_delay, Duration::from_secs(30));
        assert!(config.max_retries.is_none());
    }

    #[test]
    fn backoff_increases_exponentially() {
        let config = ReconnectConfig::default();

        let d0 = calculate_backoff(0, &config);
        let d1 = calculate_backoff(1, &config);
        let d2 = calculate_backoff(2, &config);

        assert!(d1 > d0, "d1 ({d1:?}) should be greater than d0 ({d0:?})");
        assert!(d2 > d1, "d2 ({d2:?}) should be greater than d1 ({d1:?})");
    }

    #[test]
    fn backoff_caps_at_max_delay() {
        let config = ReconnectConfig {
            initial_delay: Duration::from_secs(1),
            max_delay: Duration::from_secs(10),
            max_retries: None,
        };

        // Jitter can stretch the cap by at most 25%.
        let d10 = calculate_backoff(10, &config);
        assert!(d10 <= Duration::from_millis(12_500), "{d10:?}");
        let huge = calculate_backoff(u32::MAX, &config);
        assert!(huge <= Duration::from_millis(12_500), "{huge:?}");
    }

    #[test]
    fn rate_limit_stretches_the_delay() {
        let config = ReconnectConfig::default();
        let err = ApiError::TooManyRequests {
            error: ErrorPair::new("429", None),
            retry_after_secs: Some(120),
        };
        assert_eq!(retry_delay(&err, 0, &config), Duration::from_secs(120));
    }

    #[test]
    fn clean_end_waits_at_least_the_initial_delay() {
        let config = ReconnectConfig {
            initial_delay: Duration::from_millis(500),
            ..ReconnectConfig::default()
        };
        assert!(clean_end_delay(&config) >= Duration::from_millis(500));
        assert!(clean_end_delay(&ReconnectConfig::default()) >= Duration::from_secs(1));
    }

    #[test]
    fn text_line_shows_key_and_translated_value() {
        let event = door_event();
        let line = printer().text_line(&EventRecord {
            ha_id: "SIEMENS-HCS02DWH1-1234",
            event_type: EventType::Status,
            event: Some(&event),
        });
        assert!(line.contains("STATUS"), "{line}");
        assert!(
            line.ends_with("SIEMENS-HCS02DWH1-1234 BSH.Common.Status.DoorState = Open"),
            "{line}"
        );
    }

    #[test]
    fn lifecycle_line_has_type_and_appliance() {
        let line = printer().text_line(&EventRecord {
            ha_id: "SIEMENS-HCS02DWH1-1234",
            event_type: EventType::Disconnected,
            event: None,
        });
        assert_eq!(line, "DISCONNECTED SIEMENS-HCS02DWH1-1234");
    }

    #[test]
    fn records_flatten_the_event_item() {
        let event = door_event();
        let record = EventRecord {
            ha_id: "SIEMENS-HCS02DWH1-1234",
            event_type: EventType::Status,
            event: Some(&event),
        };
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["type"], "STATUS");
        assert_eq!(json["ha_id"], "SIEMENS-HCS02DWH1-1234");
        assert_eq!(json["key"], "BSH.Common.Status.DoorState");
        assert_eq!(json["displayvalue"], "Open");
    }
}

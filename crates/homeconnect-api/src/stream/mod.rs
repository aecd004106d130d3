//! Event stream ingestion and dispatch.
//!
//! [`SseClient`] opens the appliance event feed through an [`EventSource`],
//! decodes each frame into an [`EventMessage`] and either hands messages to
//! the caller one at a time ([`EventReader`]) or routes every event item to the
//! handler registered for its appliance and key ([`SseClient::run`]).
//!
//! Streams are never reconnected here. Every read ends in a [`StreamEnd`] or
//! an [`Error`], and the caller decides what to do next.
//!
//! # Example
//!
//! ```rust,ignore
//! use homeconnect_api::{EventKey, SseClient, StatusKey};
//!
//! let sse: SseClient = client.sse();
//! let _deregister = sse.register_status_callback(
//!     "SIEMENS-HCS02DWH1-6F2FC400C1EA",
//!     StatusKey::BshCommonDoorState,
//!     |event| async move { println!("door: {}", event.value) },
//! );
//! let end = sse.stream_all_events(None).await?;
//! ```

mod frame;
mod registry;

use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use futures_util::{Stream, StreamExt};
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, trace};

use crate::auth::{EventSource, FrameStream};
use crate::error::Error;
use crate::keys::EventKey;
use crate::model::{CallbackCategory, Event, EventMessage, EventType, Language};
use crate::transport::DEFAULT_READ_TIMEOUT;

pub(crate) use frame::DataLineFill;
pub use frame::Frame;
pub use registry::{CallbackRegistry, Deregister, Handler, LifecycleHandler};

// ── Scope and terminal state ─────────────────────────────────────────

/// Which event feed to open.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StreamScope {
    /// Events for every appliance on the account.
    All,
    /// Events for a single appliance.
    Appliance(String),
}

impl StreamScope {
    pub fn path(&self) -> String {
        match self {
            Self::All => "/homeappliances/events".to_owned(),
            Self::Appliance(ha_id) => format!("/homeappliances/{ha_id}/events"),
        }
    }
}

/// How a stream ended without an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StreamEnd {
    /// The server closed the connection.
    Closed,
    /// No frame arrived within the read timeout.
    TimedOut,
    /// The caller's cancellation token fired.
    Cancelled,
}

// ── EventReader ──────────────────────────────────────────────────────

/// Pull-based reader over one open stream.
///
/// Frames are read and decoded only when [`next_message`](Self::next_message)
/// is called. Frames that fail to decode are logged and skipped. Dropping the
/// reader closes the connection.
pub struct EventReader {
    frames: FrameStream,
    read_timeout: Duration,
    skip_keep_alive: bool,
    finished: bool,
    end: Option<StreamEnd>,
}

impl EventReader {
    pub fn new(frames: FrameStream, read_timeout: Duration) -> Self {
        Self {
            frames,
            read_timeout,
            skip_keep_alive: false,
            finished: false,
            end: None,
        }
    }

    /// Stop yielding `KEEP-ALIVE` messages. They still reset the read timeout.
    pub fn skip_keep_alive(mut self, skip: bool) -> Self {
        self.skip_keep_alive = skip;
        self
    }

    /// Read until the next decodable message.
    ///
    /// Returns `Ok(None)` once the stream has ended; [`end_reason`](Self::end_reason)
    /// then says why. A transport failure mid-stream is returned once as an
    /// error, after which the reader is finished.
    pub async fn next_message(&mut self) -> Result<Option<EventMessage>, Error> {
        if self.finished {
            return Ok(None);
        }

        loop {
            let Ok(next) = tokio::time::timeout(self.read_timeout, self.frames.next()).await else {
                debug!(timeout_secs = self.read_timeout.as_secs(), "Connection timed out");
                self.finish(Some(StreamEnd::TimedOut));
                return Ok(None);
            };

            let frame = match next {
                Some(Ok(frame)) => frame,
                Some(Err(e)) => {
                    self.finish(None);
                    return Err(e);
                }
                None => {
                    debug!("Connection closed cleanly");
                    self.finish(Some(StreamEnd::Closed));
                    return Ok(None);
                }
            };

            debug!(event = %frame.event, id = %frame.id, data = %frame.data, "Received frame");

            match EventMessage::from_frame(&frame) {
                Ok(message) if self.skip_keep_alive && message.event_type == EventType::KeepAlive => {}
                Ok(message) => return Ok(Some(message)),
                Err(e) => debug!(error = %e, event = %frame.event, "Skipping undecodable frame"),
            }
        }
    }

    /// Why the stream ended, once it has ended without an error.
    pub fn end_reason(&self) -> Option<StreamEnd> {
        self.end
    }

    /// Adapt the reader into a `Stream` of messages.
    pub fn into_stream(mut self) -> impl Stream<Item = Result<EventMessage, Error>> + Send {
        async_stream::stream! {
            loop {
                match self.next_message().await {
                    Ok(Some(message)) => yield Ok(message),
                    Ok(None) => break,
                    Err(e) => {
                        yield Err(e);
                        break;
                    }
                }
            }
        }
    }

    fn finish(&mut self, end: Option<StreamEnd>) {
        self.finished = true;
        self.end = end;
        // Release the connection now rather than when the reader is dropped.
        self.frames = futures_util::stream::empty().boxed();
    }
}

impl std::fmt::Debug for EventReader {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EventReader")
            .field("read_timeout", &self.read_timeout)
            .field("skip_keep_alive", &self.skip_keep_alive)
            .field("finished", &self.finished)
            .field("end", &self.end)
            .finish_non_exhaustive()
    }
}

// ── SseClient ────────────────────────────────────────────────────────

/// Event stream client: connection lifecycle plus callback dispatch.
///
/// Clones share the event source and the callback registry, so several
/// streams can run at once against the same subscriptions.
#[derive(Clone)]
pub struct SseClient {
    source: Arc<dyn EventSource>,
    registry: CallbackRegistry,
    read_timeout: Duration,
}

impl SseClient {
    pub fn new(source: Arc<dyn EventSource>) -> Self {
        Self {
            source,
            registry: CallbackRegistry::new(),
            read_timeout: DEFAULT_READ_TIMEOUT,
        }
    }

    /// Override the inactivity timeout (default 60 s).
    pub fn with_read_timeout(mut self, read_timeout: Duration) -> Self {
        self.read_timeout = read_timeout;
        self
    }

    pub fn registry(&self) -> &CallbackRegistry {
        &self.registry
    }

    // ── Iterator mode ────────────────────────────────────────────────

    /// Open a stream and return a reader over it.
    ///
    /// Fails without yielding anything if the server rejects the connection.
    pub async fn events(
        &self,
        scope: &StreamScope,
        language: Option<Language>,
    ) -> Result<EventReader, Error> {
        let path = scope.path();
        let frames = self.source.connect(&path, language).await?;
        Ok(EventReader::new(frames, self.read_timeout))
    }

    pub async fn iter_all_events(&self, language: Option<Language>) -> Result<EventReader, Error> {
        self.events(&StreamScope::All, language).await
    }

    pub async fn iter_events(
        &self,
        ha_id: &str,
        language: Option<Language>,
    ) -> Result<EventReader, Error> {
        self.events(&StreamScope::Appliance(ha_id.to_owned()), language)
            .await
    }

    // ── Callback mode ────────────────────────────────────────────────

    /// Stream events into the registered callbacks until the connection ends
    /// or `cancel` fires.
    ///
    /// Handlers run one at a time, in frame order and in item order within a
    /// frame.
    pub async fn run(
        &self,
        scope: &StreamScope,
        language: Option<Language>,
        cancel: &CancellationToken,
    ) -> Result<StreamEnd, Error> {
        let mut reader = tokio::select! {
            biased;
            () = cancel.cancelled() => return Ok(StreamEnd::Cancelled),
            reader = self.events(scope, language) => reader?,
        };

        loop {
            tokio::select! {
                biased;
                () = cancel.cancelled() => {
                    info!(path = %scope.path(), "Event stream cancelled");
                    return Ok(StreamEnd::Cancelled);
                }
                finished = Self::step(&self.registry, &mut reader) => {
                    if let Some(end) = finished? {
                        info!(path = %scope.path(), ?end, "Event stream ended");
                        return Ok(end);
                    }
                }
            }
        }
    }

    /// Stream all appliances' events into the registered callbacks.
    pub async fn stream_all_events(&self, language: Option<Language>) -> Result<StreamEnd, Error> {
        self.run(&StreamScope::All, language, &CancellationToken::new())
            .await
    }

    /// Stream one appliance's events into the registered callbacks.
    pub async fn stream_events(
        &self,
        ha_id: &str,
        language: Option<Language>,
    ) -> Result<StreamEnd, Error> {
        self.run(
            &StreamScope::Appliance(ha_id.to_owned()),
            language,
            &CancellationToken::new(),
        )
        .await
    }

    /// Read and dispatch one message. `Some` once the stream has ended.
    async fn step(
        registry: &CallbackRegistry,
        reader: &mut EventReader,
    ) -> Result<Option<StreamEnd>, Error> {
        match reader.next_message().await? {
            Some(message) => {
                dispatch_message(registry, message).await;
                Ok(None)
            }
            None => Ok(Some(reader.end_reason().unwrap_or(StreamEnd::Closed))),
        }
    }

    // ── Registration ─────────────────────────────────────────────────

    pub fn register_status_callback<F, Fut>(
        &self,
        ha_id: impl Into<String>,
        key: impl Into<EventKey>,
        handler: F,
    ) -> Deregister
    where
        F: Fn(Event) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = ()> + Send + 'static,
    {
        self.registry
            .register(CallbackCategory::Status, ha_id, key, handler)
    }

    pub fn register_event_callback<F, Fut>(
        &self,
        ha_id: impl Into<String>,
        key: impl Into<EventKey>,
        handler: F,
    ) -> Deregister
    where
        F: Fn(Event) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = ()> + Send + 'static,
    {
        self.registry
            .register(CallbackCategory::Event, ha_id, key, handler)
    }

    pub fn register_notify_callback<F, Fut>(
        &self,
        ha_id: impl Into<String>,
        key: impl Into<EventKey>,
        handler: F,
    ) -> Deregister
    where
        F: Fn(Event) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = ()> + Send + 'static,
    {
        self.registry
            .register(CallbackCategory::Notify, ha_id, key, handler)
    }

    pub fn deregister_status_callback(&self, ha_id: &str, key: impl Into<EventKey>) {
        self.registry.deregister(CallbackCategory::Status, ha_id, key);
    }

    pub fn deregister_event_callback(&self, ha_id: &str, key: impl Into<EventKey>) {
        self.registry.deregister(CallbackCategory::Event, ha_id, key);
    }

    pub fn deregister_notify_callback(&self, ha_id: &str, key: impl Into<EventKey>) {
        self.registry.deregister(CallbackCategory::Notify, ha_id, key);
    }

    /// Called with `(event type, ha_id)` for CONNECTED, DISCONNECTED, PAIRED
    /// and DEPAIRED frames.
    pub fn set_home_appliances_changes_callback<F, Fut>(&self, handler: F)
    where
        F: Fn(EventType, String) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = ()> + Send + 'static,
    {
        self.registry.set_lifecycle(handler);
    }

    pub fn clear_home_appliances_changes_callback(&self) {
        self.registry.clear_lifecycle();
    }
}

impl std::fmt::Debug for SseClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SseClient")
            .field("registry", &self.registry)
            .field("read_timeout", &self.read_timeout)
            .finish_non_exhaustive()
    }
}

/// Route one decoded message to its subscribers.
async fn dispatch_message(registry: &CallbackRegistry, message: EventMessage) {
    let EventMessage {
        ha_id,
        event_type,
        data,
    } = message;

    if let Some(category) = event_type.callback_category() {
        for event in data.items {
            registry.dispatch(category, &ha_id, event).await;
        }
    } else if event_type.is_appliance_lifecycle() {
        registry.dispatch_lifecycle(event_type, &ha_id).await;
    } else {
        trace!(ha_id = %ha_id, "Keep-alive");
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use futures_util::FutureExt;
    use futures_util::future::BoxFuture;
    use futures_util::stream;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;
    use crate::keys::StatusKey;

    const HA_ID: &str = "SIEMENS-HCS02DWH1-6F2FC400C1EA";

    /// Serves a fixed list of frames on every connect.
    struct FakeSource {
        frames: Vec<Frame>,
        failure: Mutex<Option<Error>>,
        hang: bool,
        paths: Mutex<Vec<String>>,
    }

    impl FakeSource {
        fn new(frames: Vec<Frame>) -> Self {
            Self {
                frames,
                failure: Mutex::new(None),
                hang: false,
                paths: Mutex::new(Vec::new()),
            }
        }

        fn hanging(frames: Vec<Frame>) -> Self {
            Self {
                hang: true,
                ..Self::new(frames)
            }
        }

        fn failing_after(frames: Vec<Frame>, error: Error) -> Self {
            let source = Self::new(frames);
            *source.failure.lock().unwrap() = Some(error);
            source
        }
    }

    impl EventSource for FakeSource {
        fn connect<'a>(
            &'a self,
            path: &'a str,
            _language: Option<Language>,
        ) -> BoxFuture<'a, Result<FrameStream, Error>> {
            self.paths.lock().unwrap().push(path.to_owned());

            let mut items: Vec<Result<Frame, Error>> =
                self.frames.iter().cloned().map(Ok).collect();
            if let Some(error) = self.failure.lock().unwrap().take() {
                items.push(Err(error));
            }

            let frames = stream::iter(items);
            let frames = if self.hang {
                frames.chain(stream::pending()).boxed()
            } else {
                frames.boxed()
            };
            futures_util::future::ready(Ok(frames)).boxed()
        }
    }

    fn frame(event: &str, data: String) -> Frame {
        Frame {
            id: HA_ID.into(),
            event: event.into(),
            data,
        }
    }

    fn door_state_frame(event: &str) -> Frame {
        let data = json!({
            "items": [{
                "key": "BSH.Common.Status.DoorState",
                "timestamp": 1_700_000_000,
                "level": "hint",
                "handling": "none",
                "value": "BSH.Common.EnumType.DoorState.Open"
            }]
        });
        frame(event, data.to_string())
    }

    fn client(source: FakeSource) -> (SseClient, Arc<FakeSource>) {
        let source = Arc::new(source);
        let sse = SseClient::new(Arc::clone(&source) as Arc<dyn EventSource>);
        (sse, source)
    }

    fn count_status(sse: &SseClient) -> (Arc<AtomicUsize>, Deregister) {
        let count = Arc::new(AtomicUsize::new(0));
        let seen = Arc::clone(&count);
        let deregister = sse.register_status_callback(HA_ID, StatusKey::BshCommonDoorState, move |event| {
            let seen = Arc::clone(&seen);
            async move {
                assert_eq!(event.key, EventKey::from(StatusKey::BshCommonDoorState));
                seen.fetch_add(1, Ordering::SeqCst);
            }
        });
        (count, deregister)
    }

    #[test]
    fn scope_paths() {
        assert_eq!(StreamScope::All.path(), "/homeappliances/events");
        assert_eq!(
            StreamScope::Appliance(HA_ID.into()).path(),
            format!("/homeappliances/{HA_ID}/events")
        );
    }

    #[tokio::test]
    async fn reader_yields_messages_in_order_then_closes() {
        let (sse, source) = client(FakeSource::new(vec![
            frame("KEEP-ALIVE", String::new()),
            door_state_frame("STATUS"),
            frame("CONNECTED", String::new()),
        ]));

        let mut reader = sse.iter_events(HA_ID, None).await.unwrap();
        let types: Vec<EventType> = [
            reader.next_message().await.unwrap().unwrap(),
            reader.next_message().await.unwrap().unwrap(),
            reader.next_message().await.unwrap().unwrap(),
        ]
        .iter()
        .map(|m| m.event_type)
        .collect();
        assert_eq!(
            types,
            vec![EventType::KeepAlive, EventType::Status, EventType::Connected]
        );

        assert!(reader.next_message().await.unwrap().is_none());
        assert_eq!(reader.end_reason(), Some(StreamEnd::Closed));
        assert!(reader.next_message().await.unwrap().is_none());
        assert_eq!(
            source.paths.lock().unwrap().as_slice(),
            [format!("/homeappliances/{HA_ID}/events")]
        );
    }

    #[tokio::test]
    async fn reader_can_filter_keep_alive() {
        let (sse, _) = client(FakeSource::new(vec![
            frame("KEEP-ALIVE", String::new()),
            door_state_frame("NOTIFY"),
        ]));

        let mut reader = sse.iter_all_events(None).await.unwrap().skip_keep_alive(true);
        let message = reader.next_message().await.unwrap().unwrap();
        assert_eq!(message.event_type, EventType::Notify);
        assert_eq!(message.data.len(), 1);
    }

    #[tokio::test]
    async fn undecodable_frames_are_skipped() {
        let (sse, _) = client(FakeSource::new(vec![
            frame("STATUS", "{broken".into()),
            frame("MYSTERY", String::new()),
            door_state_frame("EVENT"),
        ]));

        let messages: Vec<_> = sse
            .iter_all_events(None)
            .await
            .unwrap()
            .into_stream()
            .collect()
            .await;
        assert_eq!(messages.len(), 1);
        assert_eq!(messages[0].as_ref().unwrap().event_type, EventType::Event);
    }

    #[tokio::test(start_paused = true)]
    async fn silence_past_read_timeout_ends_the_stream() {
        let (sse, _) = client(FakeSource::hanging(vec![door_state_frame("STATUS")]));
        let sse = sse.with_read_timeout(Duration::from_secs(5));

        let mut reader = sse.iter_all_events(None).await.unwrap();
        assert!(reader.next_message().await.unwrap().is_some());
        assert!(reader.next_message().await.unwrap().is_none());
        assert_eq!(reader.end_reason(), Some(StreamEnd::TimedOut));
    }

    #[tokio::test]
    async fn transport_failure_mid_stream_is_an_error() {
        let (sse, _) = client(FakeSource::failing_after(
            vec![door_state_frame("STATUS")],
            Error::Stream("connection reset".into()),
        ));

        let mut reader = sse.iter_all_events(None).await.unwrap();
        assert!(reader.next_message().await.unwrap().is_some());
        assert!(matches!(reader.next_message().await, Err(Error::Stream(_))));
        assert_eq!(reader.end_reason(), None);
        assert!(reader.next_message().await.unwrap().is_none());
    }

    #[tokio::test]
    async fn status_callback_runs_once_and_not_after_deregistration() {
        let (sse, _) = client(FakeSource::new(vec![door_state_frame("STATUS")]));
        let (count, deregister) = count_status(&sse);

        assert_eq!(sse.stream_all_events(None).await.unwrap(), StreamEnd::Closed);
        assert_eq!(count.load(Ordering::SeqCst), 1);

        deregister();
        deregister();
        sse.deregister_status_callback(HA_ID, StatusKey::BshCommonDoorState);

        sse.stream_all_events(None).await.unwrap();
        assert_eq!(count.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn items_go_to_the_namespace_of_their_frame_type() {
        let (sse, _) = client(FakeSource::new(vec![
            door_state_frame("EVENT"),
            door_state_frame("NOTIFY"),
        ]));
        let (count, _deregister) = count_status(&sse);

        sse.stream_events(HA_ID, None).await.unwrap();
        assert_eq!(count.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn connected_only_reaches_the_lifecycle_callback() {
        let (sse, _) = client(FakeSource::new(vec![frame("CONNECTED", String::new())]));
        let (count, _deregister) = count_status(&sse);

        let changes = Arc::new(Mutex::new(Vec::new()));
        let seen = Arc::clone(&changes);
        sse.set_home_appliances_changes_callback(move |event_type, ha_id| {
            seen.lock().unwrap().push((event_type, ha_id));
            async {}
        });

        sse.stream_all_events(None).await.unwrap();
        assert_eq!(count.load(Ordering::SeqCst), 0);
        assert_eq!(
            changes.lock().unwrap().as_slice(),
            [(EventType::Connected, HA_ID.to_owned())]
        );
    }

    #[tokio::test]
    async fn run_stops_on_cancellation() {
        let (sse, _) = client(FakeSource::hanging(vec![door_state_frame("STATUS")]));
        let (count, _deregister) = count_status(&sse);
        let cancel = CancellationToken::new();

        let task = {
            let sse = sse.clone();
            let cancel = cancel.clone();
            tokio::spawn(async move { sse.run(&StreamScope::All, None, &cancel).await })
        };

        while count.load(Ordering::SeqCst) == 0 {
            tokio::task::yield_now().await;
        }
        cancel.cancel();

        assert_eq!(task.await.unwrap().unwrap(), StreamEnd::Cancelled);
    }

    #[tokio::test]
    async fn run_propagates_transport_failure() {
        let (sse, _) = client(FakeSource::failing_after(
            Vec::new(),
            Error::Stream("connection reset".into()),
        ));
        let result = sse.stream_all_events(None).await;
        assert!(matches!(result, Err(Error::Stream(_))));
    }
}

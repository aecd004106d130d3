// ── Callback registry ──
//
// Three independent namespaces keyed by (appliance id, event key), plus one
// slot for appliance lifecycle changes. Handlers are cloned out of the map
// before they are awaited, so no shard lock is held across a handler.

use std::future::Future;
use std::sync::Arc;

use arc_swap::ArcSwapOption;
use dashmap::DashMap;
use futures_util::FutureExt;
use futures_util::future::BoxFuture;
use tracing::{trace, warn};

use crate::keys::EventKey;
use crate::model::{CallbackCategory, Event, EventType};

/// Async handler for one event item.
pub type Handler = Arc<dyn Fn(Event) -> BoxFuture<'static, ()> + Send + Sync>;

/// Async handler for appliance lifecycle changes: `(event type, ha_id)`.
pub type LifecycleHandler = Box<dyn Fn(EventType, String) -> BoxFuture<'static, ()> + Send + Sync>;

/// Removes one registration when called. Safe to call repeatedly.
pub type Deregister = Box<dyn Fn() + Send + Sync>;

type Namespace = Arc<DashMap<(String, EventKey), Handler>>;

/// Shared subscriber table for one or more event streams.
///
/// Cloning is cheap and clones share the same table.
#[derive(Clone, Default)]
pub struct CallbackRegistry {
    status: Namespace,
    event: Namespace,
    notify: Namespace,
    lifecycle: Arc<ArcSwapOption<LifecycleHandler>>,
}

impl CallbackRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    fn namespace(&self, category: CallbackCategory) -> &Namespace {
        match category {
            CallbackCategory::Status => &self.status,
            CallbackCategory::Event => &self.event,
            CallbackCategory::Notify => &self.notify,
        }
    }

    /// Install `handler` for `(ha_id, key)` in the given namespace.
    ///
    /// Replaces any existing handler for the same pair, with a warning. The
    /// returned function removes this entry and may be called any number of
    /// times.
    pub fn register<F, Fut>(
        &self,
        category: CallbackCategory,
        ha_id: impl Into<String>,
        key: impl Into<EventKey>,
        handler: F,
    ) -> Deregister
    where
        F: Fn(Event) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = ()> + Send + 'static,
    {
        let entry = (ha_id.into(), key.into());
        let handler: Handler = Arc::new(move |event| handler(event).boxed());

        let namespace = Arc::clone(self.namespace(category));
        if namespace.insert(entry.clone(), handler).is_some() {
            warn!(
                ha_id = %entry.0,
                key = %entry.1,
                ?category,
                "Replacing existing callback"
            );
        }

        Box::new(move || {
            namespace.remove(&entry);
        })
    }

    /// Remove the handler for `(ha_id, key)`; does nothing if there is none.
    pub fn deregister(&self, category: CallbackCategory, ha_id: &str, key: impl Into<EventKey>) {
        self.namespace(category).remove(&(ha_id.to_owned(), key.into()));
    }

    pub fn contains(&self, category: CallbackCategory, ha_id: &str, key: impl Into<EventKey>) -> bool {
        self.namespace(category)
            .contains_key(&(ha_id.to_owned(), key.into()))
    }

    /// Install the appliance lifecycle handler, replacing any previous one.
    pub fn set_lifecycle<F, Fut>(&self, handler: F)
    where
        F: Fn(EventType, String) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = ()> + Send + 'static,
    {
        let handler: LifecycleHandler = Box::new(move |event_type, ha_id| handler(event_type, ha_id).boxed());
        self.lifecycle.store(Some(Arc::new(handler)));
    }

    pub fn clear_lifecycle(&self) {
        self.lifecycle.store(None);
    }

    /// Invoke the handler for one event item, if any.
    pub(crate) async fn dispatch(&self, category: CallbackCategory, ha_id: &str, event: Event) {
        let handler = self
            .namespace(category)
            .get(&(ha_id.to_owned(), event.key))
            .map(|entry| Arc::clone(entry.value()));

        match handler {
            Some(handler) => handler(event).await,
            None => trace!(ha_id, key = %event.key, ?category, "No subscriber"),
        }
    }

    pub(crate) async fn dispatch_lifecycle(&self, event_type: EventType, ha_id: &str) {
        match self.lifecycle.load_full() {
            Some(handler) => handler(event_type, ha_id.to_owned()).await,
            None => trace!(ha_id, %event_type, "No lifecycle subscriber"),
        }
    }
}

impl std::fmt::Debug for CallbackRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CallbackRegistry")
            .field("status", &self.status.len())
            .field("event", &self.event.len())
            .field("notify", &self.notify.len())
            .field("lifecycle", &self.lifecycle.load().is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use super::*;
    use crate::keys::StatusKey;
    use crate::model::EventValue;

    const HA_ID: &str = "BOSCH-HCS06COM1-1234";

    fn door_event() -> Event {
        Event {
            key: StatusKey::BshCommonDoorState.into(),
            timestamp: 1_700_000_000,
            level: "hint".into(),
            handling: "none".into(),
            value: EventValue::String("BSH.Common.EnumType.DoorState.Open".into()),
            name: None,
            uri: None,
            display_value: None,
            unit: None,
        }
    }

    fn counter(registry: &CallbackRegistry, category: CallbackCategory) -> (Arc<AtomicUsize>, Deregister) {
        let count = Arc::new(AtomicUsize::new(0));
        let seen = Arc::clone(&count);
        let deregister = registry.register(category, HA_ID, StatusKey::BshCommonDoorState, move |_| {
            let seen = Arc::clone(&seen);
            async move {
                seen.fetch_add(1, Ordering::SeqCst);
            }
        });
        (count, deregister)
    }

    #[tokio::test]
    async fn dispatch_reaches_only_the_selected_namespace() {
        let registry = CallbackRegistry::new();
        let (status, _) = counter(&registry, CallbackCategory::Status);

        registry.dispatch(CallbackCategory::Notify, HA_ID, door_event()).await;
        assert_eq!(status.load(Ordering::SeqCst), 0);

        registry.dispatch(CallbackCategory::Status, HA_ID, door_event()).await;
        assert_eq!(status.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn dispatch_without_subscriber_is_a_no_op() {
        let registry = CallbackRegistry::new();
        registry.dispatch(CallbackCategory::Event, HA_ID, door_event()).await;
        registry.dispatch_lifecycle(EventType::Connected, HA_ID).await;
    }

    #[tokio::test]
    async fn last_registration_wins() {
        let registry = CallbackRegistry::new();
        let (first, _) = counter(&registry, CallbackCategory::Status);
        let (second, _) = counter(&registry, CallbackCategory::Status);

        registry.dispatch(CallbackCategory::Status, HA_ID, door_event()).await;
        assert_eq!(first.load(Ordering::SeqCst), 0);
        assert_eq!(second.load(Ordering::SeqCst), 1);
    }

    /// Collects formatted log output for assertions.
    #[derive(Clone, Default)]
    struct Capture(Arc<std::sync::Mutex<Vec<u8>>>);

    impl std::io::Write for Capture {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    impl Capture {
        fn take(&self) -> String {
            String::from_utf8(std::mem::take(&mut *self.0.lock().unwrap())).unwrap()
        }
    }

    #[test]
    fn overwriting_a_handler_logs_a_warning() {
        let capture = Capture::default();
        let writer = capture.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(move || writer.clone())
            .with_max_level(tracing::Level::WARN)
            .with_ansi(false)
            .finish();

        tracing::subscriber::with_default(subscriber, || {
            let registry = CallbackRegistry::new();

            let _first = counter(&registry, CallbackCategory::Notify);
            assert_eq!(capture.take(), "");

            let _second = counter(&registry, CallbackCategory::Notify);
            let logged = capture.take();
            assert!(logged.contains("WARN"), "{logged}");
            assert!(logged.contains("Replacing existing callback"), "{logged}");
            assert!(logged.contains(HA_ID), "{logged}");

            let _other_key = registry.register(
                CallbackCategory::Notify,
                HA_ID,
                StatusKey::BshCommonOperationState,
                |_| async {},
            );
            assert_eq!(capture.take(), "");
        });
    }

    #[test]
    fn deregistration_is_idempotent() {
        let registry = CallbackRegistry::new();
        let (_, deregister) = counter(&registry, CallbackCategory::Event);
        assert!(registry.contains(CallbackCategory::Event, HA_ID, StatusKey::BshCommonDoorState));

        deregister();
        deregister();
        registry.deregister(CallbackCategory::Event, HA_ID, StatusKey::BshCommonDoorState);
        assert!(!registry.contains(CallbackCategory::Event, HA_ID, StatusKey::BshCommonDoorState));
    }

    #[tokio::test]
    async fn lifecycle_slot_can_be_replaced_and_cleared() {
        let registry = CallbackRegistry::new();
        let count = Arc::new(AtomicUsize::new(0));
        let seen = Arc::clone(&count);
        registry.set_lifecycle(move |event_type, ha_id| {
            let seen = Arc::clone(&seen);
            async move {
                assert_eq!(event_type, EventType::Paired);
                assert_eq!(ha_id, HA_ID);
                seen.fetch_add(1, Ordering::SeqCst);
            }
        });

        registry.dispatch_lifecycle(EventType::Paired, HA_ID).await;
        registry.clear_lifecycle();
        registry.dispatch_lifecycle(EventType::Paired, HA_ID).await;
        assert_eq!(count.load(Ordering::SeqCst), 1);
    }
}

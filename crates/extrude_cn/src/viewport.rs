//! Viewport observation
//!
//! Components recalibrate when the host viewport or their container is
//! resized. The host owns one [`ViewportObserver`] per measured element and
//! reports sizes to it; components subscribe and keep the returned
//! [`ObserverHandle`] for as long as they are mounted. Dropping the handle
//! removes the subscription, so an unmounted component is never called
//! again and never keeps the registry alive.

use rustc_hash::FxHashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, RwLock, Weak};

/// Measured size in CSS pixels
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    /// State before the first measurement
    pub const UNMEASURED: Viewport = Viewport {
        width: 0.0,
        height: 0.0,
    };

    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    pub fn is_measured(&self) -> bool {
        self.width > 0.0
    }
}

type ResizeCallback = Arc<dyn Fn(Viewport) + Send + Sync>;

struct Registry {
    current: RwLock<Viewport>,
    subscribers: RwLock<FxHashMap<u64, ResizeCallback>>,
    next_id: AtomicU64,
}

/// Broadcasts size changes to subscribed components
#[derive(Clone)]
pub struct ViewportObserver {
    registry: Arc<Registry>,
}

impl Default for ViewportObserver {
    fn default() -> Self {
        Self::new()
    }
}

impl ViewportObserver {
    pub fn new() -> Self {
        Self {
            registry: Arc::new(Registry {
                current: RwLock::new(Viewport::UNMEASURED),
                subscribers: RwLock::new(FxHashMap::default()),
                next_id: AtomicU64::new(1),
            }),
        }
    }

    /// Last reported size
    pub fn current(&self) -> Viewport {
        match self.registry.current.read() {
            Ok(guard) => *guard,
            Err(poisoned) => *poisoned.into_inner(),
        }
    }

    /// Subscribe to size changes
    ///
    /// The callback runs immediately with the current size, then on every
    /// change until the handle is dropped.
    pub fn subscribe<F>(&self, callback: F) -> ObserverHandle
    where
        F: Fn(Viewport) + Send + Sync + 'static,
    {
        let id = self.registry.next_id.fetch_add(1, Ordering::Relaxed);
        let callback: ResizeCallback = Arc::new(callback);
        match self.registry.subscribers.write() {
            Ok(mut subs) => subs.insert(id, Arc::clone(&callback)),
            Err(poisoned) => poisoned.into_inner().insert(id, Arc::clone(&callback)),
        };
        callback(self.current());

        ObserverHandle {
            id,
            registry: Arc::downgrade(&self.registry),
        }
    }

    /// Report a new size; subscribers run only when it differs from the last
    pub fn resize(&self, viewport: Viewport) {
        {
            let mut current = match self.registry.current.write() {
                Ok(guard) => guard,
                Err(poisoned) => poisoned.into_inner(),
            };
            if *current == viewport {
                return;
            }
            *current = viewport;
        }
        tracing::trace!("viewport resized to {}x{}", viewport.width, viewport.height);

        // Snapshot so callbacks may subscribe or drop handles
        let callbacks: Vec<ResizeCallback> = match self.registry.subscribers.read() {
            Ok(subs) => subs.values().cloned().collect(),
            Err(poisoned) => poisoned.into_inner().values().cloned().collect(),
        };
        for callback in callbacks {
            callback(viewport);
        }
    }

    pub fn subscriber_count(&self) -> usize {
        match self.registry.subscribers.read() {
            Ok(subs) => subs.len(),
            Err(poisoned) => poisoned.into_inner().len(),
        }
    }

    /// Subscribe and keep the latest size in a shared cell
    pub fn track(&self) -> TrackedViewport {
        let cell = Arc::new(RwLock::new(Viewport::UNMEASURED));
        let sink = Arc::clone(&cell);
        let handle = self.subscribe(move |viewport| {
            let mut guard = match sink.write() {
                Ok(guard) => guard,
                Err(poisoned) => poisoned.into_inner(),
            };
            *guard = viewport;
        });
        TrackedViewport {
            cell,
            _handle: handle,
        }
    }
}

/// Keeps a subscription alive; dropping it unsubscribes
#[must_use = "dropping the handle unsubscribes immediately"]
pub struct ObserverHandle {
    id: u64,
    registry: Weak<Registry>,
}

impl ObserverHandle {
    pub fn id(&self) -> u64 {
        self.id
    }
}

impl Drop for ObserverHandle {
    fn drop(&mut self) {
        let Some(registry) = self.registry.upgrade() else {
            return;
        };
        match registry.subscribers.write() {
            Ok(mut subs) => subs.remove(&self.id),
            Err(poisoned) => poisoned.into_inner().remove(&self.id),
        };
    }
}

/// Latest size from an observer, for components that read it on build
pub struct TrackedViewport {
    cell: Arc<RwLock<Viewport>>,
    _handle: ObserverHandle,
}

impl TrackedViewport {
    pub fn get(&self) -> Viewport {
        match self.cell.read() {
            Ok(guard) => *guard,
            Err(poisoned) => *poisoned.into_inner(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    #[test]
    fn test_subscribe_receives_current_then_changes() {
        let observer = ViewportObserver::new();
        let seen = Arc::new(Mutex::new(Vec::new()));
        let log = Arc::clone(&seen);
        let _handle = observer.subscribe(move |v| log.lock().unwrap().push(v.width));

        observer.resize(Viewport::new(800.0, 600.0));
        observer.resize(Viewport::new(800.0, 600.0));
        observer.resize(Viewport::new(400.0, 600.0));

        assert_eq!(*seen.lock().unwrap(), vec![0.0, 800.0, 400.0]);
    }

    #[test]
    fn test_drop_handle_unsubscribes() {
        let observer = ViewportObserver::new();
        let seen = Arc::new(Mutex::new(0));
        let counter = Arc::clone(&seen);
        let handle = observer.subscribe(move |_| *counter.lock().unwrap() += 1);
        assert_eq!(observer.subscriber_count(), 1);

        drop(handle);
        assert_eq!(observer.subscriber_count(), 0);
        observer.resize(Viewport::new(1024.0, 768.0));
        assert_eq!(*seen.lock().unwrap(), 1);
    }

    #[test]
    fn test_handle_outlives_observer() {
        let observer = ViewportObserver::new();
        let handle = observer.subscribe(|_| {});
        drop(observer);
        drop(handle);
    }

    #[test]
    fn test_tracked_viewport() {
        let observer = ViewportObserver::new();
        let tracked = observer.track();
        assert!(!tracked.get().is_measured());
        observer.resize(Viewport::new(1280.0, 720.0));
        assert_eq!(tracked.get(), Viewport::new(1280.0, 720.0));
        drop(tracked);
        assert_eq!(observer.subscriber_count(), 0);
    }
}

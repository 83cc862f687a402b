//! Signal/slot notifications.
//!
//! A [`Signal`] holds any number of connected slots (closures). Emitting the
//! signal invokes every slot synchronously, in connection order, on the
//! emitting thread. The navbar runs on a single cooperative UI thread, so
//! there is no queued or cross-thread delivery.
//!
//! # Example
//!
//! ```
//! use horizon_navbar_core::Signal;
//!
//! let closed_changed = Signal::<bool>::new();
//!
//! let conn_id = closed_changed.connect(|closed| {
//!     println!("navbar closed: {}", closed);
//! });
//!
//! closed_changed.emit(false);
//! closed_changed.disconnect(conn_id);
//! ```

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Weak};

use parking_lot::Mutex;
use slotmap::{new_key_type, SlotMap};

use crate::logging::targets;

new_key_type! {
    /// A unique identifier for a signal-slot connection.
    ///
    /// Use this ID to disconnect a specific connection via [`Signal::disconnect`].
    pub struct ConnectionId;
}

type Slot<Args> = Arc<dyn Fn(&Args) + Send + Sync>;
type SlotTable<Args> = Mutex<SlotMap<ConnectionId, Slot<Args>>>;

/// Type-erased removal used by [`ConnectionGuard`].
trait SlotRegistry: Send + Sync {
    fn remove(&self, id: ConnectionId) -> bool;
}

impl<Args: 'static> SlotRegistry for SlotTable<Args> {
    fn remove(&self, id: ConnectionId) -> bool {
        self.lock().remove(id).is_some()
    }
}

/// A type-safe signal that can have multiple connected slots.
///
/// # Type Parameter
///
/// - `Args`: The argument type passed to connected slots. Use `()` for signals
///   with no arguments.
pub struct Signal<Args> {
    slots: Arc<SlotTable<Args>>,
    blocked: AtomicBool,
}

impl<Args: 'static> Default for Signal<Args> {
    fn default() -> Self {
        Self::new()
    }
}

impl<Args: 'static> Signal<Args> {
    /// Create a new signal with no connections.
    pub fn new() -> Self {
        Self {
            slots: Arc::new(Mutex::new(SlotMap::with_key())),
            blocked: AtomicBool::new(false),
        }
    }

    /// Connect a slot (closure) to this signal.
    ///
    /// Returns a `ConnectionId` that can be used to disconnect the slot later.
    pub fn connect<F>(&self, slot: F) -> ConnectionId
    where
        F: Fn(&Args) + Send + Sync + 'static,
    {
        self.slots.lock().insert(Arc::new(slot))
    }

    /// Connect a slot that is disconnected when the returned guard is dropped.
    ///
    /// The guard only holds a weak reference to the signal, so it is safe to
    /// drop the guard after the signal itself is gone.
    ///
    /// ```
    /// use horizon_navbar_core::Signal;
    /// use std::sync::atomic::{AtomicI32, Ordering};
    /// use std::sync::Arc;
    ///
    /// let signal = Signal::<i32>::new();
    /// let counter = Arc::new(AtomicI32::new(0));
    /// {
    ///     let counter = counter.clone();
    ///     let _guard = signal.connect_scoped(move |&n| {
    ///         counter.fetch_add(n, Ordering::SeqCst);
    ///     });
    ///     signal.emit(42);
    /// }
    /// signal.emit(43);
    /// assert_eq!(counter.load(Ordering::SeqCst), 42);
    /// ```
    #[must_use = "the connection is dropped immediately if the guard is not kept"]
    pub fn connect_scoped<F>(&self, slot: F) -> ConnectionGuard
    where
        F: Fn(&Args) + Send + Sync + 'static,
    {
        let id = self.connect(slot);
        let registry: Weak<dyn SlotRegistry> = Arc::downgrade(&self.slots) as Weak<dyn SlotRegistry>;
        ConnectionGuard {
            registry: Some(registry),
            id,
        }
    }

    /// Disconnect a specific slot by its connection ID.
    ///
    /// Returns `true` if the connection was found and removed, `false` otherwise.
    pub fn disconnect(&self, id: ConnectionId) -> bool {
        self.slots.lock().remove(id).is_some()
    }

    /// Disconnect all slots from this signal.
    pub fn disconnect_all(&self) {
        self.slots.lock().clear();
    }

    /// Get the number of connected slots.
    pub fn connection_count(&self) -> usize {
        self.slots.lock().len()
    }

    /// Block signal emission temporarily.
    ///
    /// While blocked, calls to `emit()` do nothing.
    pub fn set_blocked(&self, blocked: bool) {
        self.blocked.store(blocked, Ordering::SeqCst);
    }

    /// Check if signal emission is currently blocked.
    pub fn is_blocked(&self) -> bool {
        self.blocked.load(Ordering::SeqCst)
    }

    /// Emit the signal, invoking all connected slots with `args`.
    ///
    /// The slot list is snapshotted before invocation, so a slot may connect
    /// or disconnect slots (including itself) without deadlocking.
    #[tracing::instrument(skip_all, target = "horizon_navbar_core::signal", level = "trace")]
    pub fn emit(&self, args: Args) {
        if self.is_blocked() {
            tracing::trace!(target: targets::SIGNAL, "signal blocked, skipping emit");
            return;
        }

        let slots: Vec<Slot<Args>> = self.slots.lock().values().cloned().collect();
        tracing::trace!(target: targets::SIGNAL, connection_count = slots.len(), "emitting signal");

        for slot in slots {
            slot(&args);
        }
    }
}

/// A connection guard that automatically disconnects when dropped.
///
/// Created via [`Signal::connect_scoped`] and the resize source's
/// `subscribe`. Call [`disconnect`](Self::disconnect) to release it early.
pub struct ConnectionGuard {
    registry: Option<Weak<dyn SlotRegistry>>,
    id: ConnectionId,
}

impl ConnectionGuard {
    /// The ID of the guarded connection.
    pub fn id(&self) -> ConnectionId {
        self.id
    }

    /// Whether the guarded connection is still live.
    pub fn is_connected(&self) -> bool {
        self.registry
            .as_ref()
            .is_some_and(|registry| registry.strong_count() > 0)
    }

    /// Disconnect now instead of on drop.
    ///
    /// Returns `true` if the slot was still connected.
    pub fn disconnect(&mut self) -> bool {
        match self.registry.take().and_then(|weak| weak.upgrade()) {
            Some(registry) => registry.remove(self.id),
            None => false,
        }
    }
}

impl Drop for ConnectionGuard {
    fn drop(&mut self) {
        self.disconnect();
    }
}

impl std::fmt::Debug for ConnectionGuard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ConnectionGuard")
            .field("id", &self.id)
            .field("connected", &self.is_connected())
            .finish()
    }
}

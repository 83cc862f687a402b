//! Core plumbing for Horizon navbar widgets.
//!
//! This crate provides the event-side building blocks the navbar widget is
//! driven by. Everything here runs on a single cooperative UI thread:
//!
//! - **Signals**: Type-safe notifications with scoped connections
//! - **Clock**: Injectable time source (system or manually advanced)
//! - **Timers**: One-shot timer queue ordered by deadline
//! - **Task Queue**: Deferred "next tick" work
//! - **Debounce**: Trailing-edge debouncing of bursty triggers
//! - **Resize**: The window-level resize notification channel
//!
//! # Debounced Resize Example
//!
//! ```
//! use std::sync::Arc;
//! use std::time::Duration;
//!
//! use horizon_navbar_core::{Clock, Debouncer, ManualClock, ResizeEvent, ResizeSource};
//! use parking_lot::Mutex;
//!
//! let clock = ManualClock::new();
//! let source = ResizeSource::new();
//! let debouncer = Arc::new(Mutex::new(Debouncer::new(Duration::from_millis(100))));
//!
//! let _guard = {
//!     let debouncer = debouncer.clone();
//!     let clock = clock.clone();
//!     source.subscribe(move |_event| debouncer.lock().trigger(clock.now()))
//! };
//!
//! source.emit(ResizeEvent::new(800.0, 600.0));
//! clock.advance(Duration::from_millis(100));
//! assert!(debouncer.lock().poll(clock.now()));
//! ```

mod clock;
mod debounce;
mod error;
pub mod logging;
mod resize;
pub mod signal;
mod task;
mod timer;

pub use clock::{Clock, ManualClock, SystemClock};
pub use debounce::Debouncer;
pub use error::{Result, TimerError};
pub use resize::{ResizeEvent, ResizeSource};
pub use signal::{ConnectionGuard, ConnectionId, Signal};
pub use task::{TaskId, TaskQueue};
pub use timer::{TimerId, TimerManager};

// Re-export winit types that hosts feed into the resize source
pub use winit::dpi::PhysicalSize;
pub use winit::event::WindowEvent;

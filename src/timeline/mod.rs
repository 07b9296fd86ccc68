//! The scheduling-timeline core: geometry, window management, scroll
//! synchronization, and the gesture controllers. Everything here is plain
//! state + functions so it can be exercised without a running UI.

pub mod drag;
pub mod geometry;
pub mod queue;
pub mod range;
pub mod resize;
pub mod scroll;

pub use drag::{DragPayload, DropVerdict};
pub use queue::QueueFilter;
pub use range::RangeController;
pub use resize::{ResizeGesture, ResizeSide};
pub use scroll::ScrollSyncCoordinator;

/// Pixels per hour column.
pub const HOUR_WIDTH: f32 = 80.0;
/// Pixels per day.
pub const DAY_WIDTH: f32 = HOUR_WIDTH * 24.0;
/// Extend the window when the viewport is within ~6 hours of an edge.
pub const EXTEND_THRESHOLD: f32 = HOUR_WIDTH * 6.0;
/// A bar is never narrower than half an hour on screen.
pub const MIN_BAR_WIDTH: f32 = HOUR_WIDTH / 2.0;

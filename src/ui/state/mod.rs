// SPDX-License-Identifier: MPL-2.0
//! UI state management modules
//!
//! Pure state pieces the viewer component is assembled from, kept apart so
//! each can be tested without a running application.

pub mod navigation;
pub mod timer;
pub mod zoom;

// Re-export commonly used types for convenience
pub use navigation::ArrowState;
pub use timer::TimerSlot;
pub use zoom::ZoomState;

//! Reusable UI components.

pub mod dialog_frame;

pub use dialog_frame::{render_dialog_frame, DialogFrameConfig};

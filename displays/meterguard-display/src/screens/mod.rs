//! Screen composers
//!
//! Each screen redraws everything it owns from scratch; nothing is diffed
//! against the previous frame.

pub mod dashboard;
pub mod face;

pub use dashboard::{render_dashboard, MeterStatus};
pub use face::{draw_expression, draw_head, Expression};

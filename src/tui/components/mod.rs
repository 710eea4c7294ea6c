//! UI components for the review browser TUI.
//!
//! This module provides reusable UI components following the bubbletea-rs
//! Model-View pattern. Each component manages its own state and rendering.

mod review_detail;
mod review_list;
mod text_truncate;
mod text_wrap;

pub use review_detail::{ReviewDetailComponent, ReviewDetailViewContext};
pub use review_list::{ReviewListComponent, ReviewListViewContext};
pub use text_wrap::wrap_text;

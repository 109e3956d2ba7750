//! Terminal output formatting
//!
//! Banners, gallows art and pure render functions for the shell.

pub mod art;
pub mod display;
pub mod formatters;

pub use display::{
    render_briefing, render_difficulty_menu, render_feedback, render_main_menu, render_outcome,
    render_round, render_stats, render_stats_update, render_welcome,
};

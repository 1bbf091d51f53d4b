//! Terminal output formatting
//!
//! Colored guess tiles, hint lines and result displays.

pub mod display;
pub mod formatters;

pub use display::{print_bench_report, print_solve_report, print_win_banner};
pub use formatters::{colored_guess, format_hints};

//! Command handlers for the CLI
//!
//! Each handler receives the [`AppContext`](crate::context::AppContext)
//! built by the entrypoint and prints its result to stdout.
//!
//! - `auth`       -- login, logout, whoami
//! - `products`   -- list, show, add, update, delete
//! - `categories` -- category list and badge colors

pub mod auth;
pub mod categories;
pub mod products;

use colored::Color;

/// Terminal color closest to a badge color token such as
/// `"border-teal-500 text-teal-600 ..."`
pub(crate) fn terminal_color(token: &str) -> Color {
    let name = token
        .split_whitespace()
        .next()
        .and_then(|class| class.strip_prefix("border-"))
        .and_then(|rest| rest.split('-').next())
        .unwrap_or("gray");

    match name {
        "pink" | "fuchsia" => Color::BrightMagenta,
        "purple" | "violet" => Color::Magenta,
        "blue" | "indigo" => Color::Blue,
        "sky" | "cyan" => Color::Cyan,
        "teal" => Color::BrightCyan,
        "rose" | "red" => Color::Red,
        "orange" => Color::BrightRed,
        "amber" | "yellow" => Color::Yellow,
        "lime" => Color::BrightGreen,
        "green" | "emerald" => Color::Green,
        "slate" => Color::BrightBlack,
        _ => Color::White,
    }
}

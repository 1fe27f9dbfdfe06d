/// ANSI color helper utilities for terminal output.
use crate::models::shift::ShiftStatus;
use ansi_term::Colour;

pub const RESET: &str = "\x1b[0m";
pub const GREY: &str = "\x1b[90m";

/// Colour used for a shift status label.
pub fn colour_for_status(status: ShiftStatus) -> Colour {
    match status {
        ShiftStatus::Scheduled => Colour::Blue,
        ShiftStatus::Completed => Colour::Green,
        ShiftStatus::Cancelled => Colour::Red,
    }
}

pub fn paint_status(status: ShiftStatus) -> String {
    colour_for_status(status).paint(status.as_str()).to_string()
}

/// Grey out text for cells outside the reference month.
pub fn greyed(value: &str) -> String {
    format!("{GREY}{value}{RESET}")
}

pub fn on_break(value: &str) -> String {
    Colour::Yellow.paint(value).to_string()
}

//! Color mapping for directory events.
//!
//! Every place that shows an event (the watch log, its symbols and paths) takes
//! its color from here so the scheme stays consistent.
//!
//! # Color Scheme
//! - **Added**: Green
//! - **Changed**: Yellow
//! - **Deleted**: Red

use crate::core::events::EventKind;
use colored::*;

/// Color function for an event kind, applicable to any text
pub fn get_event_color_style(kind: EventKind) -> Box<dyn Fn(&str) -> ColoredString> {
    match kind {
        EventKind::Added => Box::new(|text: &str| text.green()),
        EventKind::Changed => Box::new(|text: &str| text.yellow()),
        EventKind::Deleted => Box::new(|text: &str| text.red()),
    }
}

/// Colored `+`, `~` or `-` symbol
pub fn get_event_symbol(kind: EventKind) -> ColoredString {
    let color_fn = get_event_color_style(kind);
    color_fn(kind.as_str()).bold()
}

/// Path colored by the event that touched it
pub fn get_colored_path(kind: EventKind, path: &str) -> ColoredString {
    let color_fn = get_event_color_style(kind);
    color_fn(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_symbol_text() {
        assert!(get_event_symbol(EventKind::Added).to_string().contains('+'));
        assert!(get_event_symbol(EventKind::Changed).to_string().contains('~'));
        assert!(get_event_symbol(EventKind::Deleted).to_string().contains('-'));
    }

    #[test]
    fn test_colored_path_keeps_text() {
        let colored = get_colored_path(EventKind::Deleted, "renders/frame_001.exr");
        assert!(colored.to_string().contains("renders/frame_001.exr"));
    }

    #[test]
    fn test_color_style_consistency() {
        for kind in [EventKind::Added, EventKind::Changed, EventKind::Deleted] {
            let color_fn = get_event_color_style(kind);
            assert_eq!(color_fn("x").to_string(), color_fn("x").to_string());
        }
    }
}

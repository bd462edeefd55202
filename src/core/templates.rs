//! Template system for consistent output formatting.
//!
//! This module renders every line seqmon prints for sequences and events. A
//! template is rendered in a single pass that substitutes `{placeholder}`s from
//! a [`TemplateContext`], then colors are applied according to which template
//! was used.
//!
//! # Public API
//! - [`Templates`]: Template definitions for all output lines
//! - [`TemplateContext`]: Context data for template rendering
//! - [`TEMPLATES`]: Global template instance
//! - [`render_template`]: Main rendering function with colors
//! - [`render_template_plain`]: Plain text rendering for testing
//! - [`strip_ansi_codes`]: Utility for removing color codes
//!
//! # Template Categories
//! - **Sections**: Directory headers, the unsequenced-files header
//! - **Sequence lines**: Pattern, frame ranges, counts, gaps and details
//! - **Event lines**: One line per applied watch event

use crate::core::{colors::get_colored_path, colors::get_event_symbol, events::EventKind};
use colored::*;
use std::fmt::Write;

/// Template definitions for all output formatting
pub struct Templates {
    pub section_directory: &'static str,
    pub section_unsequenced: &'static str,
    pub sequence_line: &'static str,
    pub missing_line: &'static str,
    pub missing_file_line: &'static str,
    pub detail_line: &'static str,
    pub unsequenced_line: &'static str,
    pub event_line: &'static str,
    pub summary_line: &'static str,
}

/// Global templates instance
pub static TEMPLATES: Templates = Templates {
    section_directory: "➤ {directory}:",
    section_unsequenced: "➤ Unsequenced:",
    sequence_line: "   [{n}] {pattern}  {frames}  ({count} frames)",
    missing_line: "       missing: {missing}",
    missing_file_line: "         {path}",
    detail_line: "       {size}, modified {modified}",
    unsequenced_line: "   {path}",
    event_line: "{event} {path}{outcome}",
    summary_line: "{count} sequences, {unsequenced} unsequenced",
};

/// Context for template rendering
#[derive(Debug, Default)]
pub struct TemplateContext<'a> {
    pub directory: Option<&'a str>,
    pub pattern: Option<&'a str>,
    pub frames: Option<&'a str>,
    pub missing: Option<&'a str>,
    pub path: Option<&'a str>,
    pub outcome: Option<&'a str>,
    pub size: Option<&'a str>,
    pub modified: Option<&'a str>,
    pub n: Option<usize>,
    pub count: Option<usize>,
    pub unsequenced: Option<usize>,
    pub event: Option<EventKind>,
}

/// Render a template with context and apply colors
pub fn render_template(template: &str, context: &TemplateContext) -> String {
    let mut result = String::with_capacity(template.len() + 64);
    render_template_single_pass(template, context, &mut result);
    apply_colors(&result, template, context)
}

/// Single-pass placeholder substitution; unknown placeholders are kept as-is
fn render_template_single_pass(template: &str, context: &TemplateContext, output: &mut String) {
    let mut chars = template.chars();

    while let Some(ch) = chars.next() {
        if ch != '{' {
            output.push(ch);
            continue;
        }

        let mut placeholder = String::new();
        let mut found_closing = false;
        for next_ch in chars.by_ref() {
            if next_ch == '}' {
                found_closing = true;
                break;
            }
            placeholder.push(next_ch);
        }

        if !found_closing {
            output.push(ch);
            output.push_str(&placeholder);
            continue;
        }

        let text = match placeholder.as_str() {
            "directory" => context.directory,
            "pattern" => context.pattern,
            "frames" => context.frames,
            "missing" => context.missing,
            "path" => context.path,
            "outcome" => context.outcome,
            "size" => context.size,
            "modified" => context.modified,
            "event" => context.event.map(|kind| kind.as_str()),
            "n" | "count" | "unsequenced" => {
                let value = match placeholder.as_str() {
                    "n" => context.n,
                    "count" => context.count,
                    _ => context.unsequenced,
                };
                if let Some(value) = value {
                    let _ = write!(output, "{value}");
                }
                continue;
            }
            _ => {
                output.push('{');
                output.push_str(&placeholder);
                output.push('}');
                continue;
            }
        };
        if let Some(text) = text {
            output.push_str(text);
        }
    }
}

/// Color the rendered text according to the template it came from
fn apply_colors(text: &str, template: &str, context: &TemplateContext) -> String {
    let mut result = String::with_capacity(text.len() + 64);

    match template {
        t if t == TEMPLATES.section_directory => {
            let directory = context.directory.unwrap_or_default();
            let _ = write!(result, "{} {}", "➤".blue(), format!("{directory}:").blue());
        }
        t if t == TEMPLATES.section_unsequenced => {
            let _ = write!(result, "{} {}", "➤".bright_black(), "Unsequenced:".bright_black());
        }
        t if t == TEMPLATES.sequence_line => {
            result.push_str("   ");
            if let Some(n) = context.n {
                let _ = write!(
                    result,
                    "{}{}{} ",
                    "[".bright_black(),
                    n.to_string().white(),
                    "]".bright_black()
                );
            }
            let _ = write!(
                result,
                "{}  {}  {}",
                context.pattern.unwrap_or_default().cyan().bold(),
                context.frames.unwrap_or_default().white(),
                format!("({} frames)", context.count.unwrap_or_default()).bright_black()
            );
        }
        t if t == TEMPLATES.missing_line => {
            let _ = write!(
                result,
                "       {} {}",
                "missing:".yellow(),
                context.missing.unwrap_or_default().yellow()
            );
        }
        t if t == TEMPLATES.event_line => {
            match context.event {
                Some(kind) => {
                    let _ = write!(
                        result,
                        "{} {}",
                        get_event_symbol(kind),
                        get_colored_path(kind, context.path.unwrap_or_default())
                    );
                }
                None => result.push_str(context.path.unwrap_or_default()),
            }
            if let Some(outcome) = context.outcome {
                let _ = write!(result, "{}", outcome.bright_black());
            }
        }
        t if t == TEMPLATES.detail_line
            || t == TEMPLATES.unsequenced_line
            || t == TEMPLATES.missing_file_line =>
        {
            let _ = write!(result, "{}", text.bright_black());
        }
        _ => result.push_str(text),
    }

    result
}

/// Strip ANSI color codes for testing
pub fn strip_ansi_codes(text: &str) -> String {
    let mut result = String::new();
    let mut chars = text.chars().peekable();

    while let Some(ch) = chars.next() {
        if ch == '\x1b' && chars.peek() == Some(&'[') {
            chars.next();
            for ch in chars.by_ref() {
                if ch.is_ascii_alphabetic() {
                    break;
                }
            }
        } else {
            result.push(ch);
        }
    }

    result
}

/// Render template without colors for testing
pub fn render_template_plain(template: &str, context: &TemplateContext) -> String {
    let colored = render_template(template, context);
    strip_ansi_codes(&colored)
}

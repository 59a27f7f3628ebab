//! Terminal rendering for the editor surface and event listings.

use gistsched_core::Surface;
use owo_colors::OwoColorize;
use serde_json::Value;

/// Writes status lines to stderr and previews to stdout.
pub struct TerminalSurface {
    show_preview: bool,
}

impl TerminalSurface {
    pub fn new(show_preview: bool) -> Self {
        Self { show_preview }
    }
}

impl Surface for TerminalSurface {
    fn status(&mut self, message: &str) {
        eprintln!("{}", render_status(message));
    }

    fn preview(&mut self, preview: &Value) {
        if self.show_preview {
            println!("{}", pretty(preview));
        }
    }
}

fn render_status(message: &str) -> String {
    if message.starts_with("Saved") {
        format!("{} {}", "✓".green(), message)
    } else if message.ends_with('…') || message.starts_with("Tip:") {
        message.dimmed().to_string()
    } else if message.starts_with("Loaded") || message.starts_with("Cleared") {
        message.to_string()
    } else {
        format!("{} {}", "✗".red(), message.red())
    }
}

pub fn pretty(value: &Value) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string())
}

/// One line per event: date, type, label, time, location.
pub fn render_event_line(event: &Value) -> String {
    let field = |key: &str| event.get(key).and_then(Value::as_str).unwrap_or_default();

    let date = field("date");
    let label = match field("label") {
        "" => field("vs"),
        label => label,
    };
    let time = match field("time") {
        "" => field("time24"),
        time => time,
    };

    let mut line = format!("{:<10}", date).bold().to_string();
    if !field("type").is_empty() {
        line.push_str(&format!(" {}", field("type").cyan()));
    }
    if !label.is_empty() {
        line.push_str(&format!(" {}", label));
    }
    if !time.is_empty() {
        line.push_str(&format!(" {}", time.dimmed()));
    }
    if !field("location").is_empty() {
        line.push_str(&format!(" @ {}", field("location")));
    }
    line
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn plain(s: &str) -> String {
        // Strip ANSI escapes so assertions don't depend on the terminal.
        let mut out = String::new();
        let mut chars = s.chars();
        while let Some(c) = chars.next() {
            if c == '\u{1b}' {
                for c in chars.by_ref() {
                    if c == 'm' {
                        break;
                    }
                }
            } else {
                out.push(c);
            }
        }
        out
    }

    #[test]
    fn event_line_has_all_parts() {
        let line = render_event_line(&json!({
            "date": "2024-06-01",
            "type": "game",
            "label": "Wolves",
            "time": "6:00 PM",
            "location": "Home"
        }));
        assert_eq!(plain(&line), "2024-06-01 game Wolves 6:00 PM @ Home");
    }

    #[test]
    fn event_line_falls_back_to_vs_and_time24() {
        let line = render_event_line(&json!({ "date": "2024-06-01", "vs": "Tigers", "time24": "18:00" }));
        assert_eq!(plain(&line), "2024-06-01 Tigers 18:00");
    }

    #[test]
    fn event_line_tolerates_non_objects() {
        assert_eq!(plain(&render_event_line(&json!(42))).trim(), "");
    }

    #[test]
    fn failures_are_marked() {
        assert!(plain(&render_status("GitHub error: 404 Not Found")).starts_with("✗ "));
        assert!(plain(&render_status("Saved. Your schedule file has been updated.")).starts_with("✓ "));
        assert_eq!(plain(&render_status("Cleared pending fields.")), "Cleared pending fields.");
    }
}

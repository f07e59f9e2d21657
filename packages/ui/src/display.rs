//! Text helpers shared by the cards and forms.

use chrono::{DateTime, Local, TimeZone, Utc};

/// Fallback title when a note's first line is blank.
pub const DEFAULT_NOTE_TITLE: &str = "Generated Note";

/// Cut `text` to at most `max` characters, appending `...` when shortened.
pub fn truncate_chars(text: &str, max: usize) -> String {
    match text.char_indices().nth(max) {
        Some((idx, _)) => format!("{}...", &text[..idx]),
        None => text.to_string(),
    }
}

/// Title derived from the first line of a note body.
pub fn derive_title(content: &str, max: usize) -> String {
    let first = content.trim().lines().next().unwrap_or_default().trim();
    if first.is_empty() {
        return DEFAULT_NOTE_TITLE.to_string();
    }
    first.chars().take(max).collect()
}

/// `Mar 5, 02:07 PM`, in local time.
pub fn format_note_date(at: Option<DateTime<Utc>>) -> String {
    format_note_date_in(at.unwrap_or_else(Utc::now).with_timezone(&Local))
}

pub fn format_note_date_in<Tz: TimeZone>(at: DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    at.format("%b %-d, %I:%M %p").to_string()
}

/// `2024-03-05`, in local time.
pub fn format_feed_date(at: Option<DateTime<Utc>>) -> String {
    format_feed_date_in(at.unwrap_or_else(Utc::now).with_timezone(&Local))
}

pub fn format_feed_date_in<Tz: TimeZone>(at: DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    at.format("%Y-%m-%d").to_string()
}

/// `2024-03-05 14:07`, in local time.
pub fn format_full_date(at: Option<DateTime<Utc>>) -> String {
    format_full_date_in(at.unwrap_or_else(Utc::now).with_timezone(&Local))
}

pub fn format_full_date_in<Tz: TimeZone>(at: DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    at.format("%Y-%m-%d %H:%M").to_string()
}

/// Human-readable byte count for upload previews.
pub fn format_size(bytes: usize) -> String {
    const KB: f64 = 1024.0;
    let b = bytes as f64;
    if b < KB {
        format!("{bytes} B")
    } else if b < KB * KB {
        format!("{:.1} KB", b / KB)
    } else {
        format!("{:.1} MB", b / (KB * KB))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate() {
        assert_eq!(truncate_chars("short", 50), "short");
        assert_eq!(truncate_chars("abcdef", 3), "abc...");
        assert_eq!(truncate_chars("abc", 3), "abc");
        // Multi-byte characters are counted, not bytes
        assert_eq!(truncate_chars("héllo wörld", 4), "héll...");
    }

    #[test]
    fn test_derive_title() {
        assert_eq!(derive_title("Shopping\nmilk\neggs", 60), "Shopping");
        assert_eq!(derive_title("\n\n  Indented first line  \nrest", 60), "Indented first line");
        assert_eq!(derive_title("   ", 60), DEFAULT_NOTE_TITLE);
        let long = "x".repeat(100);
        assert_eq!(derive_title(&long, 60).len(), 60);
    }

    #[test]
    fn test_dates() {
        let at = Utc.with_ymd_and_hms(2024, 3, 5, 14, 7, 0).unwrap();
        assert_eq!(format_note_date_in(at), "Mar 5, 02:07 PM");
        assert_eq!(format_feed_date_in(at), "2024-03-05");
        assert_eq!(format_full_date_in(at), "2024-03-05 14:07");
    }

    #[test]
    fn test_sizes() {
        assert_eq!(format_size(512), "512 B");
        assert_eq!(format_size(2048), "2.0 KB");
        assert_eq!(format_size(3 * 1024 * 1024), "3.0 MB");
    }
}

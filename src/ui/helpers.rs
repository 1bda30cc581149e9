use anyhow::Error;
use ratatui::layout::{Position, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use unicode_width::UnicodeWidthChar;

use crate::models::ImageRef;

/// ASCII textures standing in for each photo asset. Unknown keys fall back
/// to [`FALLBACK_PHOTO`].
const PHOTO_ART: &[(&str, &[&str])] = &[
    ("kota", &["/\\/\\/", "\\/\\/\\"]),
    ("fuku", &["*+*+", "+*+*"]),
    ("mame", &["oOo ", " OoO"]),
    ("dai", &["=--=", "--=="]),
    ("hana", &["~~  ", "  ~~"]),
    ("sakura", &["*.  ", "  .*"]),
    ("tsumoji", &["^v^v", "v^v^"]),
    ("yuri", &["::''", "''::"]),
    ("yumopiyo", &["[]<>", "<>[]"]),
];
const FALLBACK_PHOTO: &[&str] = &["..  ", "  .."];

pub(crate) fn photo_pattern(image: ImageRef) -> &'static [&'static str] {
    PHOTO_ART
        .iter()
        .find(|(key, _)| *key == image.key())
        .map(|(_, pattern)| *pattern)
        .unwrap_or(FALLBACK_PHOTO)
}

/// Repeat a short ASCII motif until it fills the requested width.
pub(crate) fn repeat_pattern_row(row: &str, width: usize) -> String {
    if width == 0 {
        return String::new();
    }
    if row.is_empty() {
        return " ".repeat(width);
    }
    let repeat_count = width / row.len() + 2;
    let mut repeated = row.repeat(repeat_count);
    repeated.truncate(width);
    repeated
}

/// Fill a `width` x `height` box with the photo's texture. Highlighted
/// photos use a brighter tone.
pub(crate) fn build_photo_lines(
    image: ImageRef,
    width: u16,
    height: u16,
    highlighted: bool,
) -> Vec<Line<'static>> {
    let width = width as usize;
    let height = height as usize;
    if width == 0 || height == 0 {
        return vec![Line::from("")];
    }

    let pattern = photo_pattern(image);
    let style = if highlighted {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    (0..height)
        .map(|row_idx| {
            let base = pattern[row_idx % pattern.len()];
            Line::from(vec![Span::styled(repeat_pattern_row(base, width), style)])
        })
        .collect()
}

/// Wrap `text` into lines of at most `width` display columns, keeping at
/// most `max_lines`. Overflow is replaced with a trailing ellipsis.
pub(crate) fn ellipsize_lines(text: &str, width: usize, max_lines: usize) -> Vec<String> {
    if width == 0 || max_lines == 0 {
        return Vec::new();
    }

    let mut lines = vec![String::new()];
    let mut line_width = 0;
    let mut overflow = false;
    for ch in text.chars() {
        let ch_width = ch.width().unwrap_or(0);
        if ch_width > width {
            overflow = true;
            break;
        }
        if line_width + ch_width > width {
            if lines.len() == max_lines {
                overflow = true;
                break;
            }
            lines.push(String::new());
            line_width = 0;
        }
        if let Some(line) = lines.last_mut() {
            line.push(ch);
        }
        line_width += ch_width;
    }

    if overflow {
        if let Some(last) = lines.last_mut() {
            let mut used: usize = last.chars().filter_map(|ch| ch.width()).sum();
            while used + 1 > width {
                match last.pop() {
                    Some(ch) => used -= ch.width().unwrap_or(0),
                    None => break,
                }
            }
            last.push('…');
        }
    }

    lines
}

/// Word-wrap `text` to `width` display columns without dropping anything.
pub(crate) fn wrap_sentence(text: &str, width: usize) -> Vec<String> {
    textwrap::wrap(text, width.max(1))
        .into_iter()
        .map(|line| line.into_owned())
        .collect()
}

pub(crate) fn rect_contains(rect: Rect, column: u16, row: u16) -> bool {
    rect.contains(Position::new(column, row))
}

/// Extract the most relevant error message from a chained error.
pub(crate) fn surface_error(err: &Error) -> String {
    err.chain()
        .last()
        .map(|cause| cause.to_string())
        .unwrap_or_else(|| err.to_string())
}

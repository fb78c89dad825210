//! Terminal preview of a CSS gradient
//!
//! Only the color stops are read; direction and shape are ignored, so every
//! swatch runs left to right.

use ratatui::style::{Color, Style};
use ratatui::text::Span;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Stop {
    pub rgb: (u8, u8, u8),
    /// Position in 0.0..=1.0.
    pub at: f32,
}

/// Parse the color stops of a `linear-gradient(...)` / `radial-gradient(...)`.
pub fn parse_stops(css: &str) -> Vec<Stop> {
    let Some(open) = css.find('(') else {
        return Vec::new();
    };
    let Some(close) = css.rfind(')') else {
        return Vec::new();
    };
    if close <= open {
        return Vec::new();
    }

    let parts = split_top_level(&css[open + 1..close]);
    let mut stops: Vec<Stop> = parts.iter().filter_map(|p| parse_stop(p)).collect();

    // Stops without a position are spread evenly.
    let n = stops.len();
    for (i, s) in stops.iter_mut().enumerate() {
        if s.at.is_nan() {
            s.at = if n > 1 { i as f32 / (n - 1) as f32 } else { 0.0 };
        }
    }
    stops
}

/// Color at `t` (0.0..=1.0), interpolated linearly between stops.
pub fn sample(stops: &[Stop], t: f32) -> Option<(u8, u8, u8)> {
    let first = stops.first()?;
    if t <= first.at {
        return Some(first.rgb);
    }
    for pair in stops.windows(2) {
        let (a, b) = (pair[0], pair[1]);
        if t <= b.at {
            let span = b.at - a.at;
            if span <= f32::EPSILON {
                return Some(b.rgb);
            }
            let f = (t - a.at) / span;
            return Some(lerp(a.rgb, b.rgb, f));
        }
    }
    stops.last().map(|s| s.rgb)
}

/// `width` cells of background color sampled across the gradient.
pub fn spans(css: &str, width: usize) -> Vec<Span<'static>> {
    let stops = parse_stops(css);
    (0..width)
        .map(|i| {
            let t = if width > 1 { i as f32 / (width - 1) as f32 } else { 0.0 };
            let style = match sample(&stops, t) {
                Some((r, g, b)) => Style::default().bg(Color::Rgb(r, g, b)),
                None => Style::default(),
            };
            Span::styled(" ", style)
        })
        .collect()
}

fn lerp(a: (u8, u8, u8), b: (u8, u8, u8), f: f32) -> (u8, u8, u8) {
    let mix = |x: u8, y: u8| (x as f32 + (y as f32 - x as f32) * f).round().clamp(0.0, 255.0) as u8;
    (mix(a.0, b.0), mix(a.1, b.1), mix(a.2, b.2))
}

fn split_top_level(inner: &str) -> Vec<&str> {
    let mut parts = Vec::new();
    let mut depth = 0usize;
    let mut start = 0;
    for (i, c) in inner.char_indices() {
        match c {
            '(' => depth += 1,
            ')' => depth = depth.saturating_sub(1),
            ',' if depth == 0 => {
                parts.push(inner[start..i].trim());
                start = i + 1;
            }
            _ => {}
        }
    }
    parts.push(inner[start..].trim());
    parts
}

fn parse_stop(part: &str) -> Option<Stop> {
    let (rgb, rest) = if let Some(body) = part.strip_prefix("rgb(") {
        let end = body.find(')')?;
        let mut channels = body[..end].split(',').map(|c| c.trim().parse::<u8>());
        let rgb = (
            channels.next()?.ok()?,
            channels.next()?.ok()?,
            channels.next()?.ok()?,
        );
        (rgb, &body[end + 1..])
    } else {
        let word_end = part.find(char::is_whitespace).unwrap_or(part.len());
        (named_color(&part[..word_end])?, &part[word_end..])
    };

    let at = rest
        .trim()
        .strip_suffix('%')
        .and_then(|p| p.trim().parse::<f32>().ok())
        .map(|p| (p / 100.0).clamp(0.0, 1.0))
        .unwrap_or(f32::NAN);
    Some(Stop { rgb, at })
}

fn named_color(name: &str) -> Option<(u8, u8, u8)> {
    match name.to_ascii_lowercase().as_str() {
        "black" => Some((0, 0, 0)),
        "white" => Some((255, 255, 255)),
        "lightgrey" | "lightgray" => Some((211, 211, 211)),
        "red" => Some((255, 0, 0)),
        "blue" => Some((0, 0, 255)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::CATALOG;

    #[test]
    fn test_parse_warm_flame() {
        let stops = parse_stops(CATALOG[0].css);
        assert_eq!(stops.len(), 3);
        assert_eq!(stops[0].rgb, (255, 154, 158));
        assert_eq!(stops[0].at, 0.0);
        assert!((stops[1].at - 0.99).abs() < 1e-6);
        assert_eq!(stops[2].rgb, (250, 208, 196));
    }

    #[test]
    fn test_direction_and_shape_are_skipped() {
        let stops = parse_stops(
            "radial-gradient(circle 248px at center, rgb(22,217,227) 0%, rgb(48,199,236) 47%, rgb(70,174,247) 100%)",
        );
        assert_eq!(stops.len(), 3);
        assert_eq!(stops[0].rgb, (22, 217, 227));
    }

    #[test]
    fn test_named_colors() {
        let stops = parse_stops("linear-gradient(to right, rgb(67,67,67) 0%, black 100%)");
        assert_eq!(stops[1].rgb, (0, 0, 0));
        assert_eq!(stops[1].at, 1.0);
    }

    #[test]
    fn test_positions_default_to_even_spread() {
        let stops = parse_stops("linear-gradient(red, white, blue)");
        let at: Vec<f32> = stops.iter().map(|s| s.at).collect();
        assert_eq!(at, vec![0.0, 0.5, 1.0]);
    }

    #[test]
    fn test_sample_interpolates() {
        let stops = parse_stops("linear-gradient(to right, rgb(0,0,0) 0%, rgb(200,100,50) 100%)");
        assert_eq!(sample(&stops, 0.0), Some((0, 0, 0)));
        assert_eq!(sample(&stops, 0.5), Some((100, 50, 25)));
        assert_eq!(sample(&stops, 1.0), Some((200, 100, 50)));
        assert_eq!(sample(&[], 0.5), None);
    }

    #[test]
    fn test_every_catalog_entry_has_stops() {
        for g in CATALOG {
            assert!(parse_stops(g.css).len() >= 2, "{}", g.name);
        }
    }

    #[test]
    fn test_spans_width() {
        assert_eq!(spans(CATALOG[0].css, 12).len(), 12);
    }
}

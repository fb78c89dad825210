//! Plain-text sanitizers for submitted values and slugs

/// Reduce arbitrary input to a single line of plain text.
///
/// Markup is removed (script/style bodies included), a `<` that does not open a
/// tag is kept as `&lt;`, control characters and whitespace runs collapse to one
/// space, percent-encoded octets are dropped and the result is trimmed.
pub fn text_field(input: &str) -> String {
    let stripped = strip_tags(input);

    let mut out = String::with_capacity(stripped.len());
    let mut pending_space = false;
    for c in stripped.chars() {
        if c.is_whitespace() || c.is_control() {
            pending_space = true;
            continue;
        }
        if pending_space && !out.is_empty() {
            out.push(' ');
        }
        pending_space = false;
        out.push(c);
    }

    let without_octets = strip_octets(&out);
    if without_octets.len() == out.len() {
        return out;
    }
    // Dropping octets can leave doubled or edge spaces behind.
    without_octets.split(' ').filter(|w| !w.is_empty()).collect::<Vec<_>>().join(" ")
}

/// Derive a key-safe slug from a title: lowercase ASCII alphanumerics and `_`,
/// every other run of characters becomes a single `-`.
pub fn title(input: &str) -> String {
    let stripped = strip_tags(input);
    let mut slug = String::with_capacity(stripped.len());
    let mut pending_dash = false;
    for c in stripped.chars() {
        let c = c.to_ascii_lowercase();
        if c.is_ascii_alphanumeric() || c == '_' {
            if pending_dash && !slug.is_empty() {
                slug.push('-');
            }
            pending_dash = false;
            slug.push(c);
        } else {
            pending_dash = true;
        }
    }
    slug
}

fn strip_tags(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut rest = input;

    while let Some(pos) = rest.find('<') {
        out.push_str(&rest[..pos]);
        let tail = &rest[pos..];

        let opens_tag = tail[1..]
            .chars()
            .next()
            .is_some_and(|c| c.is_ascii_alphabetic() || matches!(c, '/' | '!' | '?'));
        let close = tail.find('>');

        match (opens_tag, close) {
            (true, Some(end)) => {
                let name = tag_name(&tail[1..end]);
                rest = &tail[end + 1..];
                if name == "script" || name == "style" {
                    let closing = format!("</{name}");
                    rest = match rest.to_ascii_lowercase().find(&closing) {
                        Some(at) => match rest[at..].find('>') {
                            Some(gt) => &rest[at + gt + 1..],
                            None => "",
                        },
                        None => "",
                    };
                }
            }
            // Unterminated tag: drop the remainder.
            (true, None) => {
                rest = "";
            }
            (false, _) => {
                out.push_str("&lt;");
                rest = &tail[1..];
            }
        }
    }
    out.push_str(rest);
    out
}

fn tag_name(inner: &str) -> String {
    inner
        .chars()
        .take_while(|c| c.is_ascii_alphanumeric())
        .collect::<String>()
        .to_ascii_lowercase()
}

fn strip_octets(input: &str) -> String {
    let bytes = input.as_bytes();
    let mut out = String::with_capacity(input.len());
    let mut i = 0;
    let mut copied = 0;
    while i < bytes.len() {
        if bytes[i] == b'%'
            && i + 2 < bytes.len()
            && bytes[i + 1].is_ascii_hexdigit()
            && bytes[i + 2].is_ascii_hexdigit()
        {
            out.push_str(&input[copied..i]);
            i += 3;
            copied = i;
        } else {
            i += 1;
        }
    }
    out.push_str(&input[copied..]);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_field_strips_markup() {
        assert_eq!(text_field("<b>x</b>"), "x");
        assert_eq!(text_field("Warm <em>Flame</em>"), "Warm Flame");
        assert_eq!(text_field("a<script>alert(1)</script>b"), "ab");
    }

    #[test]
    fn test_text_field_keeps_lone_less_than() {
        assert_eq!(text_field("1 < 2"), "1 &lt; 2");
    }

    #[test]
    fn test_text_field_collapses_control_characters() {
        assert_eq!(text_field("  Night\n\tFade\u{7}  "), "Night Fade");
    }

    #[test]
    fn test_text_field_drops_octets() {
        assert_eq!(text_field("warm%20flame"), "warmflame");
        assert_eq!(text_field("a %0A b"), "a b");
    }

    #[test]
    fn test_text_field_leaves_css_untouched() {
        let css = "linear-gradient(45deg, rgb(255,154,158) 0%, rgb(250,208,196) 99%, rgb(250,208,196) 100%)";
        assert_eq!(text_field(css), css);
    }

    #[test]
    fn test_title() {
        assert_eq!(title("Warm Flame"), "warm-flame");
        assert_eq!(title("Arielles Smile"), "arielles-smile");
        assert_eq!(title("  Above The Sky!! "), "above-the-sky");
        assert_eq!(title("<b>x</b>"), "x");
        assert_eq!(title("snake_case Name"), "snake_case-name");
    }
}

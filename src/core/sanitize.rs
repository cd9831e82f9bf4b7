// src/core/sanitize.rs

/// Decode the handful of entities the source pages actually use.
pub fn normalize_entities(s: &str) -> String {
    s.replace("&nbsp;", " ")
        .replace("&#160;", " ")
        .replace("&amp;", "&")
}

/// Collapse runs of whitespace to single spaces and trim the ends.
pub fn normalize_ws(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for word in s.split_whitespace() {
        if !out.is_empty() {
            out.push(' ');
        }
        out.push_str(word);
    }
    out
}

/// Remove `[ ... ]` segments: footnote/reference markers like `[11]` or
/// `[n 3]` that survive tag stripping. Greedy within each pair, no nesting.
pub fn strip_footnotes(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut in_bracket = false;
    for ch in s.chars() {
        match ch {
            '[' => in_bracket = true,
            ']' => in_bracket = false,
            _ if !in_bracket => out.push(ch),
            _ => {}
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entities_and_ws() {
        assert_eq!(normalize_ws(&normalize_entities("West&nbsp;\n Germany")), "West Germany");
        assert_eq!(normalize_entities("Trinidad &amp; Tobago"), "Trinidad & Tobago");
    }

    #[test]
    fn footnote_markers_go_away() {
        assert_eq!(normalize_ws(&strip_footnotes("Uruguay[11]")), "Uruguay");
        assert_eq!(normalize_ws(&strip_footnotes("1950[n 3] ")), "1950");
        assert_eq!(strip_footnotes("no markers"), "no markers");
    }
}

// src/core/html.rs
// Naive, tolerant HTML scanning. No DOM, no attribute parsing; tag names
// are matched case-insensitively on ASCII. Good enough for the one page
// layout the specs care about.

/// ASCII-lowercase copy. Non-ASCII chars pass through unchanged, so byte
/// offsets into the copy line up with the original.
pub fn to_lower(s: &str) -> String {
    s.chars()
        .map(|c| if c.is_ascii() { c.to_ascii_lowercase() } else { c })
        .collect()
}

/// Case-insensitive find of `needle` in `s[from..]`. Absolute offset.
pub fn find_ci(s: &str, needle: &str, from: usize) -> Option<usize> {
    let lc = to_lower(s);
    let nd = to_lower(needle);
    lc.get(from..)?.find(&nd).map(|i| i + from)
}

/// Locate the next `open …> … close` block at or after `from`.
/// Returns (start of opening tag, end just past the closing tag).
pub fn next_tag_block_ci(s: &str, open: &str, close: &str, from: usize) -> Option<(usize, usize)> {
    let start = find_ci(s, open, from)?;
    let open_end = s[start..].find('>')? + start + 1;
    let close_at = find_ci(s, close, open_end)?;
    Some((start, close_at + close.len()))
}

/// Inner text of a tag block: between the opener's '>' and the final '<'.
pub fn tag_inner(block: &str) -> &str {
    if let (Some(gt), Some(lt)) = (block.find('>'), block.rfind('<')) {
        if lt > gt {
            return &block[gt + 1..lt];
        }
    }
    ""
}

/// Drop everything between '<' and '>'. Text content only; entities are
/// left alone (see sanitize::normalize_entities).
pub fn strip_tags<S: AsRef<str>>(s: S) -> String {
    let s = s.as_ref();
    let mut out = String::with_capacity(s.len());
    let mut in_tag = false;
    for ch in s.chars() {
        match ch {
            '<' => in_tag = true,
            '>' => in_tag = false,
            _ if !in_tag => out.push(ch),
            _ => {}
        }
    }
    out
}

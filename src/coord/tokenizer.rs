use crate::coord::types::Part;
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Everything outside the working character set gets deleted before
    /// matching. Degree/minute/second symbols fall out here; the hyphen
    /// survives as a candidate sign marker.
    static ref STRIP_PATTERN: Regex = Regex::new(r"[^\-a-z0-9\. ,;]+").unwrap();

    /// One coordinate group: optional single letter-or-hyphen prefix,
    /// a digit run with optional decimal tail, optional letter postfix.
    static ref PART_PATTERN: Regex = Regex::new(r"([a-z\-]?)(\d+\.?\d*)([a-z]?)").unwrap();
}

/// Lowercase the query and strip it down to the working character set.
pub fn clean(query: &str) -> String {
    STRIP_PATTERN.replace_all(&query.to_lowercase(), "").into_owned()
}

/// Scan the cleaned text left to right for coordinate groups.
/// Separators between groups are skipped; a bare hyphen or a stray
/// letter with no digit run produces no part.
pub fn tokenize(cleaned: &str) -> Vec<Part> {
    PART_PATTERN
        .captures_iter(cleaned)
        .map(|caps| Part {
            prefix: single_char(caps.get(1).map(|m| m.as_str())),
            value: caps.get(2).map(|m| m.as_str()).unwrap_or("").to_string(),
            postfix: single_char(caps.get(3).map(|m| m.as_str())),
        })
        .collect()
}

fn single_char(capture: Option<&str>) -> Option<char> {
    capture.and_then(|s| s.chars().next())
}

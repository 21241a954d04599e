use crate::coord::convert;
use crate::coord::error::ParseError;
use crate::coord::formatter::display_string;
use crate::coord::notation::Notation;
use crate::coord::tokenizer;
use crate::coord::types::{DebugInfo, ParseResult};

/// Parse a free-form coordinate query into a canonical decimal-degree
/// pair.
///
/// The pipeline is tokenize -> classify by part count -> convert ->
/// assemble. Every step is pure; the same query always yields the same
/// result and concurrent callers need no coordination.
///
/// With `debug` set, the result carries the cleaned string, the matched
/// parts and (once classification succeeded) the notation name.
pub fn parse(query: &str, debug: bool) -> ParseResult {
    if query.is_empty() {
        return ParseResult::failure(ParseError::EmptyQuery.to_string(), None);
    }

    let cleaned = tokenizer::clean(query);
    let parts = tokenizer::tokenize(&cleaned);

    let mut debug_info = if debug {
        Some(DebugInfo {
            query: query.to_string(),
            parsed: cleaned,
            parts: parts.clone(),
            method: None,
        })
    } else {
        None
    };

    let notation = match Notation::classify(parts.len()) {
        Ok(notation) => notation,
        Err(err) => return ParseResult::failure(err.to_string(), debug_info),
    };
    if let Some(info) = debug_info.as_mut() {
        info.method = Some(notation.name().to_string());
    }

    match convert::convert(notation, &parts) {
        Ok(point) => ParseResult::success(point, display_string(&point), debug_info),
        Err(err) => ParseResult::failure(err.to_string(), debug_info),
    }
}

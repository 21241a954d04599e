use serde::Serialize;

/// One coordinate group pulled out of the cleaned query string.
///
/// The numeric text is kept verbatim so the debug output shows exactly
/// what was matched; `number()` converts on demand.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Part {
    /// Leading hemisphere marker or sign ("n", "-", ...), if any
    pub prefix: Option<char>,
    /// Digit run, optionally with a decimal point
    pub value: String,
    /// Trailing hemisphere marker, if any
    pub postfix: Option<char>,
}

impl Part {
    pub fn number(&self) -> f64 {
        // The tokenizer only produces values matching \d+\.?\d*
        self.value.parse().unwrap_or(0.0)
    }

    pub fn has_prefix(&self, marker: char) -> bool {
        self.prefix == Some(marker)
    }

    pub fn has_postfix(&self, marker: char) -> bool {
        self.postfix == Some(marker)
    }
}

/// Canonical decimal-degree pair. Serialized as `{"x": lng, "y": lat}`
/// to match the service's wire shape.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GeodeticPoint {
    #[serde(rename = "x")]
    pub longitude: f64,
    #[serde(rename = "y")]
    pub latitude: f64,
}

/// Diagnostics attached to a result when the caller asks for them.
#[derive(Debug, Clone, Serialize)]
pub struct DebugInfo {
    /// Original query text, untouched
    pub query: String,
    /// Query after lowercasing and character stripping
    pub parsed: String,
    /// Coordinate groups found in the cleaned text
    pub parts: Vec<Part>,
    /// Detected notation name, present only once classification succeeded
    #[serde(skip_serializing_if = "Option::is_none")]
    pub method: Option<String>,
}

/// Top-level value handed back to the caller.
#[derive(Debug, Clone, Serialize)]
pub struct ParseResult {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<GeodeticPoint>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub debug: Option<DebugInfo>,
}

impl ParseResult {
    pub fn success(point: GeodeticPoint, display: String, debug: Option<DebugInfo>) -> Self {
        Self {
            success: true,
            result: Some(point),
            display: Some(display),
            error: None,
            debug,
        }
    }

    pub fn failure(message: String, debug: Option<DebugInfo>) -> Self {
        Self {
            success: false,
            result: None,
            display: None,
            error: Some(message),
            debug,
        }
    }
}

use crate::coord::types::{GeodeticPoint, ParseResult};
use serde_json::{json, Value};

/// Round to 6 decimal places (roughly 0.1 m) for display; the result
/// struct keeps full precision.
fn round6(value: f64) -> f64 {
    (value * 1e6).round() / 1e6
}

/// Human-readable "<lng> <lat>" summary of a parsed point.
pub fn display_string(point: &GeodeticPoint) -> String {
    format!("{} {}", round6(point.longitude), round6(point.latitude))
}

/// The result as its plain JSON wire shape.
pub fn to_simple(result: &ParseResult) -> Value {
    serde_json::to_value(result).unwrap_or(Value::Null)
}

/// The result as a GeoJSON FeatureCollection: one Point feature on
/// success, an empty feature list on failure.
pub fn to_geojson(result: &ParseResult) -> Value {
    let mut features = Vec::new();
    if let Some(point) = &result.result {
        features.push(json!({
            "type": "Feature",
            "geometry": {
                "type": "Point",
                "coordinates": [point.longitude, point.latitude],
            },
            "properties": {
                "display": result.display,
            },
        }));
    }

    let mut doc = json!({
        "type": "FeatureCollection",
        "features": features,
    });
    attach_debug(&mut doc, result);
    doc
}

/// The result shaped like a CKAN datastore_search response record set.
pub fn to_ckan(result: &ParseResult) -> Value {
    let mut doc = if let Some(point) = &result.result {
        json!({
            "success": true,
            "result": {
                "records": [{
                    "x": point.longitude,
                    "y": point.latitude,
                    "display": result.display,
                }],
            },
        })
    } else {
        json!({
            "success": false,
            "error": result.error,
        })
    };
    attach_debug(&mut doc, result);
    doc
}

fn attach_debug(doc: &mut Value, result: &ParseResult) {
    if let Some(debug) = &result.debug {
        doc["debug"] = serde_json::to_value(debug).unwrap_or(Value::Null);
    }
}

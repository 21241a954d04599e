use crate::coord::error::{FieldKind, ParseError};
use crate::coord::notation::Notation;
use crate::coord::projection::utm_to_lat_lng;
use crate::coord::types::{GeodeticPoint, Part};

/// Run the converter matching the classified notation. Each converter
/// assumes the part count the classifier guaranteed for it.
pub fn convert(notation: Notation, parts: &[Part]) -> Result<GeodeticPoint, ParseError> {
    match notation {
        Notation::DecimalDegrees => from_dd(parts),
        Notation::DegreesMinutes => from_dm(parts),
        Notation::DegreesMinutesSeconds => from_dms(parts),
        Notation::Utm => from_utm(parts),
    }
}

/// A value is negated when its leading part carries the hemisphere
/// letter (prefix or postfix) or a minus prefix, or when any of the
/// given trailing parts carries the letter as postfix.
fn flips_sign(lead: &Part, marker: char, trailing: &[&Part]) -> bool {
    lead.has_prefix(marker)
        || lead.has_prefix('-')
        || lead.has_postfix(marker)
        || trailing.iter().any(|part| part.has_postfix(marker))
}

/// Degrees must lie strictly inside (-limit, limit); hitting the limit
/// exactly is rejected.
fn check_degrees(value: f64, limit: f64, field: FieldKind) -> Result<(), ParseError> {
    if value >= limit || value <= -limit {
        return Err(ParseError::OutOfBounds { field, value });
    }
    Ok(())
}

// Minutes and seconds use an open (0, 60) range: exactly 0 is rejected,
// matching the service this replaces.
fn check_sexagesimal(value: f64, field: FieldKind) -> Result<(), ParseError> {
    if value <= 0.0 || value >= 60.0 {
        return Err(ParseError::OutOfBounds { field, value });
    }
    Ok(())
}

/// Decimal degrees: longitude then latitude.
fn from_dd(parts: &[Part]) -> Result<GeodeticPoint, ParseError> {
    let mut lng = parts[0].number();
    let mut lat = parts[1].number();

    if flips_sign(&parts[0], 'w', &[]) {
        lng = -lng;
    }
    if flips_sign(&parts[1], 's', &[]) {
        lat = -lat;
    }

    check_degrees(lat, 90.0, FieldKind::LatitudeDegrees)?;
    check_degrees(lng, 180.0, FieldKind::LongitudeDegrees)?;

    Ok(GeodeticPoint {
        longitude: lng,
        latitude: lat,
    })
}

/// Degrees + decimal minutes: lngDeg, lngMin, latDeg, latMin.
fn from_dm(parts: &[Part]) -> Result<GeodeticPoint, ParseError> {
    let mut dlng = parts[0].number();
    let mlng = parts[1].number();
    let mut dlat = parts[2].number();
    let mlat = parts[3].number();

    if flips_sign(&parts[0], 'w', &[&parts[1]]) {
        dlng = -dlng;
    }
    if flips_sign(&parts[2], 's', &[&parts[3]]) {
        dlat = -dlat;
    }

    check_degrees(dlat, 90.0, FieldKind::LatitudeDegrees)?;
    check_degrees(dlng, 180.0, FieldKind::LongitudeDegrees)?;
    check_sexagesimal(mlat, FieldKind::LatitudeMinutes)?;
    check_sexagesimal(mlng, FieldKind::LongitudeMinutes)?;

    // Minutes contribute in the direction the degrees already point,
    // including the -0 degrees case
    Ok(GeodeticPoint {
        longitude: dlng + mlng.copysign(dlng) / 60.0,
        latitude: dlat + mlat.copysign(dlat) / 60.0,
    })
}

/// Degrees, minutes, seconds: lngDeg, lngMin, lngSec, latDeg, latMin, latSec.
/// The minutes part never carries the hemisphere letter; only the leading
/// degrees and the trailing seconds do.
fn from_dms(parts: &[Part]) -> Result<GeodeticPoint, ParseError> {
    let mut dlng = parts[0].number();
    let mlng = parts[1].number();
    let slng = parts[2].number();
    let mut dlat = parts[3].number();
    let mlat = parts[4].number();
    let slat = parts[5].number();

    if flips_sign(&parts[0], 'w', &[&parts[2]]) {
        dlng = -dlng;
    }
    if flips_sign(&parts[3], 's', &[&parts[5]]) {
        dlat = -dlat;
    }

    check_degrees(dlat, 90.0, FieldKind::LatitudeDegrees)?;
    check_degrees(dlng, 180.0, FieldKind::LongitudeDegrees)?;
    check_sexagesimal(mlat, FieldKind::LatitudeMinutes)?;
    check_sexagesimal(mlng, FieldKind::LongitudeMinutes)?;
    check_sexagesimal(slat, FieldKind::LatitudeSeconds)?;
    check_sexagesimal(slng, FieldKind::LongitudeSeconds)?;

    Ok(GeodeticPoint {
        longitude: dlng + mlng.copysign(dlng) / 60.0 + slng.copysign(dlng) / 3600.0,
        latitude: dlat + mlat.copysign(dlat) / 60.0 + slat.copysign(dlat) / 3600.0,
    })
}

/// UTM: zone (with optional hemisphere marker), easting, northing.
fn from_utm(parts: &[Part]) -> Result<GeodeticPoint, ParseError> {
    let southern =
        parts[0].has_prefix('s') || parts[0].has_prefix('-') || parts[0].has_postfix('s');

    let zone = parts[0].number().trunc() as i32;
    let easting = parts[1].number();
    let northing = parts[2].number();

    if zone <= 0 || zone > 60 {
        return Err(ParseError::OutOfBounds {
            field: FieldKind::Zone,
            value: f64::from(zone),
        });
    }
    if !(100_000.0..=1_000_000.0).contains(&easting) {
        return Err(ParseError::OutOfBounds {
            field: FieldKind::Easting,
            value: easting,
        });
    }
    if !(0.0..=10_000_000.0).contains(&northing) {
        return Err(ParseError::OutOfBounds {
            field: FieldKind::Northing,
            value: northing,
        });
    }

    // The projection is trusted to stay in range for validated input;
    // its output is not re-checked against the degree bounds
    let (latitude, longitude) = utm_to_lat_lng(zone, easting, northing, !southern);

    Ok(GeodeticPoint {
        longitude,
        latitude,
    })
}

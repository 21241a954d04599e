//! Inverse Transverse Mercator projection for UTM coordinates.
//!
//! Closed-form Redfearn-series inverse over fixed WGS84-like ellipsoid
//! constants. Pure arithmetic, no shared state; the UTM converter is the
//! only caller.

/// Semi-major axis of the ellipsoid, metres
const SEMI_MAJOR_AXIS: f64 = 6378137.0;
/// First eccentricity
const ECCENTRICITY: f64 = 0.081819191;
/// Second eccentricity squared
const SECOND_ECC_SQ: f64 = 0.006739497;
/// UTM central-meridian scale factor
const SCALE_FACTOR: f64 = 0.9996;

/// Convert a UTM position into geodetic latitude/longitude degrees.
///
/// Southern-hemisphere northings are measured from a 10,000,000 m false
/// northing; they are folded back before projecting and the resulting
/// latitude is negated afterwards.
pub fn utm_to_lat_lng(
    zone: i32,
    easting: f64,
    northing: f64,
    northern_hemisphere: bool,
) -> (f64, f64) {
    let a = SEMI_MAJOR_AXIS;
    let e = ECCENTRICITY;
    let e1sq = SECOND_ECC_SQ;
    let k0 = SCALE_FACTOR;

    let northing = if northern_hemisphere {
        northing
    } else {
        10_000_000.0 - northing
    };

    // Meridional arc and footpoint latitude
    let arc = northing / k0;
    let mu = arc / (a * (1.0 - e.powi(2) / 4.0 - 3.0 * e.powi(4) / 64.0 - 5.0 * e.powi(6) / 256.0));

    let ei = (1.0 - (1.0 - e * e).sqrt()) / (1.0 + (1.0 - e * e).sqrt());

    let ca = 3.0 * ei / 2.0 - 27.0 * ei.powi(3) / 32.0;
    let cb = 21.0 * ei.powi(2) / 16.0 - 55.0 * ei.powi(4) / 32.0;
    let cc = 151.0 * ei.powi(3) / 96.0;
    let cd = 1097.0 * ei.powi(4) / 512.0;
    let phi1 = mu
        + ca * (2.0 * mu).sin()
        + cb * (4.0 * mu).sin()
        + cc * (6.0 * mu).sin()
        + cd * (8.0 * mu).sin();

    // Radii of curvature at the footpoint
    let n0 = a / (1.0 - (e * phi1.sin()).powi(2)).sqrt();
    let r0 = a * (1.0 - e * e) / (1.0 - (e * phi1.sin()).powi(2)).powf(1.5);

    let fact1 = n0 * phi1.tan() / r0;

    let a1 = 500_000.0 - easting;
    let dd0 = a1 / (n0 * k0);
    let fact2 = dd0 * dd0 / 2.0;

    let t0 = phi1.tan().powi(2);
    let q0 = e1sq * phi1.cos().powi(2);
    let fact3 = (5.0 + 3.0 * t0 + 10.0 * q0 - 4.0 * q0 * q0 - 9.0 * e1sq) * dd0.powi(4) / 24.0;
    let fact4 = (61.0 + 90.0 * t0 + 298.0 * q0 + 45.0 * t0 * t0 - 252.0 * e1sq - 3.0 * q0 * q0)
        * dd0.powi(6)
        / 720.0;

    // Longitude correction series
    let lof1 = a1 / (n0 * k0);
    let lof2 = (1.0 + 2.0 * t0 + q0) * dd0.powi(3) / 6.0;
    let lof3 = (5.0 - 2.0 * q0 + 28.0 * t0 - 3.0 * q0.powi(2) + 8.0 * e1sq + 24.0 * t0.powi(2))
        * dd0.powi(5)
        / 120.0;
    let a2 = (lof1 - lof2 + lof3) / phi1.cos();
    let a3 = a2.to_degrees();

    let mut latitude = (phi1 - fact1 * (fact2 + fact3 + fact4)).to_degrees();
    if !northern_hemisphere {
        latitude = -latitude;
    }

    // Zone is validated positive upstream; the fallback branch is kept
    // for parity with the reference formula.
    let central_meridian = if zone > 0 {
        6.0 * f64::from(zone) - 183.0
    } else {
        3.0
    };
    let longitude = central_meridian - a3;

    (latitude, longitude)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_york_city() {
        // 18T 583960 4507523 is lower Manhattan
        let (lat, lng) = utm_to_lat_lng(18, 583960.0, 4507523.0, true);
        assert!((lat - 40.71).abs() < 0.05, "lat was {}", lat);
        assert!((lng - -74.01).abs() < 0.05, "lng was {}", lng);
    }

    #[test]
    fn test_central_meridian_on_axis() {
        // An easting of exactly 500000 sits on the central meridian
        let (_, lng) = utm_to_lat_lng(31, 500000.0, 4649776.0, true);
        assert!((lng - 3.0).abs() < 1e-9, "lng was {}", lng);
    }

    #[test]
    fn test_southern_hemisphere_mirrors_northern() {
        // Folding the false northing makes the southern result the exact
        // mirror of the corresponding northern one
        let (north_lat, north_lng) = utm_to_lat_lng(18, 583960.0, 10_000_000.0 - 4507523.0, true);
        let (south_lat, south_lng) = utm_to_lat_lng(18, 583960.0, 4507523.0, false);
        assert_eq!(south_lat, -north_lat);
        assert_eq!(south_lng, north_lng);
    }

    #[test]
    fn test_equator_northing() {
        let (lat, _) = utm_to_lat_lng(30, 500000.0, 0.0, true);
        assert!(lat.abs() < 1e-6, "lat was {}", lat);
    }
}

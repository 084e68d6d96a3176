//! Frame geometry: equatorial ↔ ecliptic rotation and angular math.
//!
//! All rotations use the mean obliquity of J2000; the oracle's position
//! vectors are equatorial (J2000-aligned), and alignment comparisons
//! happen in ecliptic longitude.

/// Mean obliquity of the ecliptic at J2000.0, in degrees.
pub const OBLIQUITY_J2000_DEG: f64 = 23.439_291_1;

/// Rotate an equatorial (J2000) vector into the ecliptic frame.
pub fn equatorial_to_ecliptic(xyz: &[f64; 3]) -> [f64; 3] {
    let eps = OBLIQUITY_J2000_DEG.to_radians();
    let (sin_e, cos_e) = eps.sin_cos();
    [
        xyz[0],
        cos_e * xyz[1] + sin_e * xyz[2],
        -sin_e * xyz[1] + cos_e * xyz[2],
    ]
}

/// Rotate an ecliptic vector back into the equatorial (J2000) frame.
pub fn ecliptic_to_equatorial(xyz: &[f64; 3]) -> [f64; 3] {
    let eps = OBLIQUITY_J2000_DEG.to_radians();
    let (sin_e, cos_e) = eps.sin_cos();
    [
        xyz[0],
        cos_e * xyz[1] - sin_e * xyz[2],
        sin_e * xyz[1] + cos_e * xyz[2],
    ]
}

/// Ecliptic longitude of an equatorial position vector, in degrees `[0, 360)`.
pub fn ecliptic_longitude_deg(xyz: &[f64; 3]) -> f64 {
    let ecl = equatorial_to_ecliptic(xyz);
    let lon = ecl[1].atan2(ecl[0]).to_degrees();
    if lon < 0.0 { lon + 360.0 } else { lon }
}

/// Angle between two position vectors, in degrees `[0, 180]`.
///
/// Returns 0 for degenerate (zero-length) input.
pub fn angle_between_deg(a: &[f64; 3], b: &[f64; 3]) -> f64 {
    let norm_a = (a[0] * a[0] + a[1] * a[1] + a[2] * a[2]).sqrt();
    let norm_b = (b[0] * b[0] + b[1] * b[1] + b[2] * b[2]).sqrt();
    if norm_a == 0.0 || norm_b == 0.0 {
        return 0.0;
    }
    let dot = (a[0] * b[0] + a[1] * b[1] + a[2] * b[2]) / (norm_a * norm_b);
    dot.clamp(-1.0, 1.0).acos().to_degrees()
}

/// Unit vector at a given ecliptic longitude on the ecliptic plane,
/// expressed in the equatorial frame.
///
/// Handy for providers and test fixtures that think in longitudes.
pub fn vector_from_ecliptic_lon(lon_deg: f64) -> [f64; 3] {
    let lon = lon_deg.to_radians();
    ecliptic_to_equatorial(&[lon.cos(), lon.sin(), 0.0])
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    #[test]
    fn rotation_roundtrip() {
        let v = [0.3, -0.7, 0.648];
        let back = ecliptic_to_equatorial(&equatorial_to_ecliptic(&v));
        for i in 0..3 {
            assert!((v[i] - back[i]).abs() < EPS, "axis {i}");
        }
    }

    #[test]
    fn longitude_of_vernal_equinox_direction() {
        // +x is the equinox direction in both frames
        assert!(ecliptic_longitude_deg(&[1.0, 0.0, 0.0]).abs() < EPS);
    }

    #[test]
    fn longitude_recovers_construction() {
        for lon in [0.0, 45.0, 123.456, 270.0, 359.9] {
            let v = vector_from_ecliptic_lon(lon);
            let got = ecliptic_longitude_deg(&v);
            assert!((got - lon).abs() < 1e-9, "lon {lon} → {got}");
        }
    }

    #[test]
    fn angle_between_orthogonal() {
        let a = [1.0, 0.0, 0.0];
        let b = [0.0, 1.0, 0.0];
        assert!((angle_between_deg(&a, &b) - 90.0).abs() < EPS);
    }

    #[test]
    fn angle_between_is_scale_invariant() {
        let a = [2.0, 0.0, 0.0];
        let b = [0.0, 0.5, 0.0];
        assert!((angle_between_deg(&a, &b) - 90.0).abs() < EPS);
    }

    #[test]
    fn angle_between_zero_vector() {
        assert_eq!(angle_between_deg(&[0.0; 3], &[1.0, 0.0, 0.0]), 0.0);
    }

    #[test]
    fn angle_between_antiparallel() {
        let a = [1.0, 1.0, 0.0];
        let b = [-1.0, -1.0, 0.0];
        assert!((angle_between_deg(&a, &b) - 180.0).abs() < EPS);
    }
}

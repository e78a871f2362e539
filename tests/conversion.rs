use approx::assert_abs_diff_eq;
use lambertconv::{
    geo_to_lambert, isometric_latitude, lambert_to_geo, lambert_type, latitude_from_isometric,
    Error, Lambert, LambertConformalConic, LambertZone, LatLon,
};

const PARIS_MERIDIAN_DEG: f64 = 2.337_229_167;

#[test]
fn round_trip_all_zones() {
    let mut worst = 0_f64;

    for code in 0..6 {
        for lat_step in -17..=17 {
            let latitude = f64::from(lat_step) * 5.2;
            for lon_step in -12..=12 {
                let longitude = f64::from(lon_step) * 14.9;

                let (x, y) = geo_to_lambert(longitude, latitude, code).unwrap();
                let (lon, lat) = lambert_to_geo(x, y, code).unwrap();

                let err = (lon - longitude).abs().max((lat - latitude).abs());
                assert!(
                    err < 1e-7,
                    "zone {code}: ({longitude}, {latitude}) came back as ({lon}, {lat})"
                );
                worst = worst.max(err);
            }
        }
    }

    println!("Worst round trip error: {worst:e} degrees");
}

#[test]
fn round_trip_near_poles() {
    for code in 0..6 {
        for latitude in [-88.99, 88.99] {
            let (x, y) = geo_to_lambert(-1.5, latitude, code).unwrap();
            let (lon, lat) = lambert_to_geo(x, y, code).unwrap();

            assert_abs_diff_eq!(lon, -1.5, epsilon = 1e-7);
            assert_abs_diff_eq!(lat, latitude, epsilon = 1e-7);
        }
    }
}

#[test]
fn lambert_93_origin() {
    // φ = 0 is where the isometric latitude vanishes
    let (x, y) = geo_to_lambert(PARIS_MERIDIAN_DEG, 0.0, lambert_type::LAMBERT_93).unwrap();

    assert_abs_diff_eq!(x, 700_000.0, epsilon = 1e-3);
    assert_abs_diff_eq!(y, 12_655_612.050 - 11_754_255.426, epsilon = 1e-3);
}

#[test]
fn lambert_93_pole_point() {
    let (x, y) = geo_to_lambert(PARIS_MERIDIAN_DEG, 90.0, lambert_type::LAMBERT_93).unwrap();

    assert_abs_diff_eq!(x, 700_000.0, epsilon = 1e-3);
    assert_abs_diff_eq!(y, 12_655_612.050, epsilon = 1e-3);
}

#[test]
fn lambert_ii_extended_origin() {
    // Origin of Lambert II extended: 52 grads north on the Paris meridian
    let (x, y) =
        geo_to_lambert(PARIS_MERIDIAN_DEG, 46.8, lambert_type::LAMBERT_II_EXTENDED).unwrap();

    assert_abs_diff_eq!(x, 600_000.0, epsilon = 1e-2);
    assert_abs_diff_eq!(y, 2_200_000.0, epsilon = 1e-2);
}

#[test]
fn lambert_ii_pole_is_degenerate() {
    let (lon, lat) = lambert_to_geo(600_000.0, 6_199_695.768, lambert_type::LAMBERT_II).unwrap();

    assert_abs_diff_eq!(lat, 90.0, epsilon = 1e-9);
    assert!(lon.is_finite());
}

#[test]
fn points_above_the_pole_keep_their_quadrant() {
    // Ys - Y < 0 for these: only reachable through far-off longitudes
    let zone = LambertZone::LambertIV;
    let ys = zone.parameters().ys;

    for longitude in [-178.0, 178.0] {
        let coord = LatLon::create(20.0, longitude).unwrap().to_lambert(zone);
        assert!(coord.y() > ys);

        let back = coord.to_latlon();
        assert_abs_diff_eq!(back.longitude(), longitude, epsilon = 1e-7);
        assert_abs_diff_eq!(back.latitude(), 20.0, epsilon = 1e-7);
    }
}

#[test]
fn invalid_zone_codes() {
    assert!(matches!(geo_to_lambert(2.0, 46.0, 6), Err(Error::InvalidZone(6))));
    assert!(matches!(lambert_to_geo(6e5, 2e6, -1), Err(Error::InvalidZone(-1))));
}

#[test]
fn isometric_latitude_is_zone_independent() {
    let projections = LambertZone::ALL.map(LambertConformalConic::new);

    for deg in [-60.0_f64, 0.0, 43.3, 48.85, 51.0] {
        let phi = deg.to_radians();
        let reference = isometric_latitude(phi, projections[0].eccentricity());

        for proj in &projections[1..] {
            let l = isometric_latitude(phi, proj.eccentricity());
            assert_eq!(l, reference);
            assert_eq!(
                latitude_from_isometric(l, proj.eccentricity(), proj.tolerance()),
                latitude_from_isometric(reference, projections[0].eccentricity(), 1e-11),
            );
        }
    }
}

#[test]
fn typed_and_coded_api_agree() {
    let coord = LatLon::create(43.2965, 5.3698).unwrap();

    for zone in LambertZone::ALL {
        let typed = coord.to_lambert(zone);
        let (x, y) = geo_to_lambert(coord.longitude(), coord.latitude(), zone.code()).unwrap();

        assert_eq!(typed.x(), x);
        assert_eq!(typed.y(), y);

        let back = LatLon::from_lambert(&Lambert::create(zone, x, y).unwrap());
        let (lon, lat) = lambert_to_geo(x, y, zone.code()).unwrap();
        assert_eq!(back.longitude(), lon);
        assert_eq!(back.latitude(), lat);
    }
}

#[test]
fn non_convergence_is_tolerated_by_lenient_api() {
    let proj = LambertConformalConic::new(LambertZone::LambertI).with_max_iterations(0);
    let (x, y) = proj.from_geographic(0.1, 0.8);

    assert!(matches!(
        proj.try_to_geographic(x, y),
        Err(Error::NonConvergence { iterations: 0, .. })
    ));

    // Spherical first guess only
    let (lambda, phi) = proj.to_geographic(x, y);
    assert_abs_diff_eq!(lambda, 0.1, epsilon = 1e-12);
    assert!((phi - 0.8).abs() < 1e-2);
}

#[cfg(feature = "serde")]
#[test]
fn serde_round_trip() {
    let coord = LatLon::create(48.85837, 2.294481).unwrap();
    let projected = coord.to_lambert(LambertZone::Lambert93);

    let json = serde_json::to_string(&projected).unwrap();
    let parsed: Lambert = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed.zone(), LambertZone::Lambert93);
    assert_abs_diff_eq!(parsed.x(), projected.x(), epsilon = 1e-6);
    assert_abs_diff_eq!(parsed.y(), projected.y(), epsilon = 1e-6);

    let parsed: LatLon = serde_json::from_str(r#"{"lat": 48.85837, "lon": 2.294481}"#).unwrap();
    assert_abs_diff_eq!(parsed.latitude(), coord.latitude(), epsilon = 1e-12);
    assert_abs_diff_eq!(parsed.longitude(), coord.longitude(), epsilon = 1e-12);
}

use assert_approx_eq::assert_approx_eq;
use sat_predict::{propagate, Error, ParseError, PropagationError, Regime, Satellite};

const ISS1: &str = "1 25544U 98067A   20148.21301450  .00001715  00000-0  38778-4 0  9992";
const ISS2: &str = "2 25544  51.6435  92.2789 0002570 358.0648 144.9972 15.49396855228767";

#[test]
fn iss_at_epoch() {
    let pos = propagate(ISS1, ISS2, 0.0).unwrap();
    assert_approx_eq!(pos.lat, 28.1914, 0.01);
    assert_approx_eq!(pos.long, -74.5768, 0.01);
    assert_approx_eq!(pos.alt, 421_176.0, 100.0);
}

#[test]
fn iss_over_a_day() {
    let sat = Satellite::from_lines(ISS1, ISS2).unwrap();
    assert_eq!(sat.regime(), Regime::NearEarth);
    for t in (-1440..=1440).step_by(15) {
        let pos = sat.geodetic(t as f64).unwrap();
        assert!(pos.lat.abs() <= 52.0, "lat {}", pos.lat);
        assert!(pos.long > -180.0 && pos.long <= 180.0, "long {}", pos.long);
        assert!(pos.alt > 400_000.0 && pos.alt < 450_000.0, "alt {}", pos.alt);
    }
}

#[test]
fn same_answer_every_time() {
    let a = propagate(ISS1, ISS2, 1234.5).unwrap();
    let b = propagate(ISS1, ISS2, 1234.5).unwrap();
    assert_eq!(a, b);
}

#[test]
fn corrupted_checksum() {
    let bad = format!("{}3", &ISS1[..68]);
    match propagate(&bad, ISS2, 0.0) {
        Err(Error::Parse(ParseError::Checksum {
            line: 1, computed: 2, ..
        })) => {}
        other => panic!("unexpected {:?}", other),
    }
}

#[test]
fn decayed_orbit_is_reported() {
    let line1 = "1 88888U 88888A   80275.98708465  .00073094  13844-3  50000-2 0  5550";
    let line2 = "2 88888  72.8435 115.9689 0086731  52.6988 110.5714 16.05824518   103";
    assert!(propagate(line1, line2, 360.0).is_ok());
    match propagate(line1, line2, 20000.0) {
        Err(Error::Propagation(PropagationError::DecayedOrbit { tsince, .. })) => {
            assert_eq!(tsince, 20000.0)
        }
        other => panic!("unexpected {:?}", other),
    }
}

#[test]
fn errors_display() {
    let err = propagate(ISS1, ISS2, f64::NAN).unwrap_err();
    assert_eq!(err.to_string(), "elapsed time NaN is not finite or out of range");
    let err = propagate(&ISS1[..60], ISS2, 0.0).unwrap_err();
    assert_eq!(err.to_string(), "line 1 is 60 characters long, expected 69");
}

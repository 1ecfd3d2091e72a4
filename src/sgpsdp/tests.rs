use super::vals::*;
use super::*;

const TLE1: &str = "TEST SAT SGP 001
1 88888U 88888A   80275.98708465  .00073094  13844-3  66816-4 0  5554
2 88888  72.8435 115.9689 0086731  52.6988 110.5714 16.05824518   103";

const TLE2: &str = "TEST SAT SDP 001
1 11801U 88888A   80230.29629788  .01431103  00000-0  14311-1 0  5557
2 11801  46.7916 230.4354 7318036  47.4722  10.4117  2.28537848   103";

const ISS1: &str = "1 25544U 98067A   20148.21301450  .00001715  00000-0  38778-4 0  9992";
const ISS2: &str = "2 25544  51.6435  92.2789 0002570 358.0648 144.9972 15.49396855228767";

const MOLNIYA: &str = "1 08195U 75081A   06176.33215444  .00000099  00000-0  11873-3 0   813
2 08195  64.1586 279.0717 6877146 264.7651  20.2257  2.00491383225656";

const GEO: &str = "1 28626U 05008A   06176.46683397 -.00000205  00000-0  10000-3 0  2190
2 28626   0.0019 286.9433 0000335  13.7918  55.6504  1.00270176  4891";

struct DataSet {
    t: f64,
    x: f64,
    y: f64,
    z: f64,
    vx: f64,
    vy: f64,
    vz: f64,
}

const DATA1: [DataSet; 5] = [
    DataSet {
        t: 0.0,
        x: 2328.97048951,
        y: -5995.22076416,
        z: 1719.97067261,
        vx: 2.91207230,
        vy: -0.98341546,
        vz: -7.09081703,
    },
    DataSet {
        t: 360.0,
        x: 2456.10705566,
        y: -6071.93853760,
        z: 1222.89727783,
        vx: 2.67938992,
        vy: -0.44829041,
        vz: -7.22879231,
    },
    DataSet {
        t: 720.0,
        x: 2567.56195068,
        y: -6112.50384522,
        z: 713.96397400,
        vx: 2.44024599,
        vy: 0.09810869,
        vz: -7.31995916,
    },
    DataSet {
        t: 1080.0,
        x: 2663.09078980,
        y: -6115.48229980,
        z: 196.39640427,
        vx: 2.19611958,
        vy: 0.65241995,
        vz: -7.36282432,
    },
    DataSet {
        t: 1440.0,
        x: 2742.55133057,
        y: -6079.67144775,
        z: -326.38095856,
        vx: 1.94850229,
        vy: 1.21106251,
        vz: -7.35619372,
    },
];

const DATA2: [DataSet; 5] = [
    DataSet {
        t: 0.0,
        x: 7473.37066650,
        y: 428.95261765,
        z: 5828.74786377,
        vx: 5.1071513,
        vy: 6.44468284,
        vz: -0.18613096,
    },
    DataSet {
        t: 360.0,
        x: -3305.22537232,
        y: 32410.86328125,
        z: -24697.17675781,
        vx: -1.30113538,
        vy: -1.15131518,
        vz: -0.28333528,
    },
    DataSet {
        t: 720.0,
        x: 14271.28759766,
        y: 24110.46411133,
        z: -4725.76837158,
        vx: -0.32050445,
        vy: 2.67984074,
        vz: -2.08405289,
    },
    DataSet {
        t: 1080.0,
        x: -9990.05883789,
        y: 22717.35522461,
        z: -23616.890662501,
        vx: -1.01667246,
        vy: -2.29026759,
        vz: 0.72892364,
    },
    DataSet {
        t: 1440.0,
        x: 9787.86975097,
        y: 33753.34667969,
        z: -15030.81176758,
        vx: -1.09425966,
        vy: 0.92358845,
        vz: -1.52230928,
    },
];

/* Resonant orbits, past the first integrator step */
const DATA_MOLNIYA: [DataSet; 5] = [
    DataSet {
        t: 720.0,
        x: 2622.13360348,
        y: -15125.15286398,
        z: 474.51381230,
        vx: 2.68828722,
        vy: -3.07842603,
        vz: 4.49498012,
    },
    DataSet {
        t: 1440.0,
        x: 2890.80771907,
        y: -15446.43766620,
        z: 948.77329416,
        vx: 2.65440751,
        vy: -2.90934429,
        vz: 4.48643790,
    },
    DataSet {
        t: 4320.0,
        x: 3928.67545373,
        y: -16569.56675668,
        z: 2834.70953862,
        vx: 2.51624163,
        vy: -2.31500049,
        vz: 4.41450091,
    },
    DataSet {
        t: 10080.0,
        x: 5821.44511785,
        y: -18182.84017496,
        z: 6488.00678886,
        vx: 2.25025503,
        vy: -1.42713390,
        vz: 4.17525249,
    },
    DataSet {
        t: 14400.0,
        x: 7085.20201201,
        y: -18974.60584613,
        z: 9076.57519535,
        vx: 2.07080217,
        vy: -0.94249792,
        vz: 3.96716937,
    },
];

const DATA_GEO: [DataSet; 5] = [
    DataSet {
        t: 720.0,
        x: -42103.20129822,
        y: 2291.06330524,
        z: -0.13274788,
        vx: -0.16697485,
        vy: -3.07010456,
        vz: -0.00031100,
    },
    DataSet {
        t: 1440.0,
        x: 42119.96262538,
        y: -1925.77529967,
        z: -0.19827273,
        vx: 0.14052119,
        vy: 3.07154161,
        vz: 0.00017956,
    },
    DataSet {
        t: 4320.0,
        x: 42161.33408041,
        y: -485.77727848,
        z: 2.10541571,
        vx: 0.03551287,
        vy: 3.07454165,
        vz: -0.00025878,
    },
    DataSet {
        t: 10080.0,
        x: 42097.26019256,
        y: 2379.78291376,
        z: 10.11175219,
        vx: -0.17344768,
        vy: 3.06983527,
        vz: -0.00048496,
    },
    DataSet {
        t: 14400.0,
        x: 41922.28341975,
        y: 4515.14224399,
        z: 12.96022524,
        vx: -0.32915784,
        vy: 3.05705012,
        vz: -0.00064270,
    },
];

fn propagator(tle: &str) -> Propagator {
    Propagator::new(&TLE::parse(tle).unwrap()).unwrap()
}

fn check_reference(prop: &Propagator, data: &[DataSet]) {
    for DataSet {
        t,
        x,
        y,
        z,
        vx,
        vy,
        vz,
    } in data
    {
        let StateVector {
            position: EarthCenteredInertial {
                x: c_x,
                y: c_y,
                z: c_z,
            },
            velocity: ECIVector {
                x: c_vx,
                y: c_vy,
                z: c_vz,
            },
            ..
        } = prop.propagate(*t).unwrap();

        assert_approx_eq!(x, c_x, 0.5);
        assert_approx_eq!(y, c_y, 0.5);
        assert_approx_eq!(z, c_z, 0.5);
        assert_approx_eq!(vx, c_vx, 1e-3);
        assert_approx_eq!(vy, c_vy, 1e-3);
        assert_approx_eq!(vz, c_vz, 1e-3);
    }
}

#[test]
fn test_sgp() {
    let prop = propagator(TLE1);
    assert_eq!(prop.regime(), Regime::NearEarth);
    check_reference(&prop, &DATA1);
}

#[test]
fn test_sdp() {
    let prop = propagator(TLE2);
    assert_eq!(prop.regime(), Regime::DeepSpace);
    assert_eq!(prop.resonance(), None);
    check_reference(&prop, &DATA2);
}

#[test]
fn test_sdp_half_day_resonance() {
    let prop = propagator(MOLNIYA);
    assert_eq!(prop.resonance(), Some(Resonance::HalfDay));
    check_reference(&prop, &DATA_MOLNIYA);
}

#[test]
fn test_sdp_synchronous_resonance() {
    let prop = propagator(GEO);
    assert_eq!(prop.resonance(), Some(Resonance::Synchronous));
    check_reference(&prop, &DATA_GEO);
}

#[test]
fn inclination_sign_through_periodics() {
    /* Lunar/solar secular rate drives the epoch inclination of 0.0019 degrees negative */
    let prop = propagator(GEO);
    for t in (0..=14400).step_by(600) {
        let mean = prop.mean_elements(t as f64).unwrap();
        assert!(mean.incl >= 0.0, "t = {}", t);
    }
    let z = prop.propagate(10080.0).unwrap().position.z;
    assert_approx_eq!(z, 10.11, 0.5);
}

#[test]
fn zero_time_gives_epoch_elements() {
    let tle = TLE::from_lines(ISS1, ISS2).unwrap();
    let prop = Propagator::new(&tle).unwrap();
    let mean = prop.mean_elements(0.0).unwrap();

    assert_approx_eq!(mean.a, prop.common.aodp, 1e-12);
    assert_approx_eq!(mean.e, tle.eo, 1e-12);
    assert_approx_eq!(mean.incl, tle.xincl, 1e-12);
    assert_approx_eq!(mean.omega, tle.omegao, 1e-12);
    assert_approx_eq!(mean.xnode, tle.xnodeo, 1e-12);
    assert_approx_eq!(mean.xl, tle.xmo + tle.omegao + tle.xnodeo, 1e-12);

    let epoch = MeanElements {
        a: prop.common.aodp,
        e: tle.eo,
        incl: tle.xincl,
        omega: tle.omegao,
        xnode: tle.xnodeo,
        xl: tle.xmo + tle.omegao + tle.xnodeo,
    };
    let expected = state::assemble(&prop.common, &epoch, 0.0).unwrap();
    let actual = prop.propagate(0.0).unwrap();
    let scale = expected.position.radius();
    assert!((actual.position - expected.position).magnitude() / scale < 1e-6);
}

#[test]
fn regime_boundary() {
    let line2 = |mean_motion: &str, checksum: char| {
        format!(
            "2 25544  51.6435  92.2789 0002570 358.0648 144.9972 {}22876{}",
            mean_motion, checksum
        )
    };

    /* 228.6 minutes */
    let tle = TLE::from_lines(ISS1, &line2(" 6.30000000", '1')).unwrap();
    let class = classify(&tle);
    assert_eq!(class.regime, Regime::DeepSpace);
    assert!(class.period > DEEP_SPACE_PERIOD);

    /* 221.5 minutes */
    let tle = TLE::from_lines(ISS1, &line2(" 6.50000000", '3')).unwrap();
    let class = classify(&tle);
    assert_eq!(class.regime, Regime::NearEarth);
    assert!(class.period < DEEP_SPACE_PERIOD);

    let tle = TLE::from_lines(ISS1, ISS2).unwrap();
    let class = classify(&tle);
    assert_eq!(class.regime, Regime::NearEarth);
    assert_approx_eq!(class.period, 92.95, 0.01);
}

#[test]
fn resonance_classes() {
    let molniya = propagator(MOLNIYA);
    assert_eq!(molniya.regime(), Regime::DeepSpace);
    assert_eq!(molniya.resonance(), Some(Resonance::HalfDay));

    let geo = propagator(GEO);
    assert_eq!(geo.resonance(), Some(Resonance::Synchronous));
    let class = geo.classification();
    assert!(class.near_circular);
    assert!(class.low_inclination);
    assert!(!class.retrograde_equatorial);
}

#[test]
fn deep_space_terms_matter() {
    let tle = TLE::parse(GEO).unwrap();
    let deep = Propagator::new(&tle).unwrap();
    let near = Propagator::with_regime(&tle, Regime::NearEarth).unwrap();

    for &t in &[10080.0, 20160.0, 43200.0] {
        let d = deep.propagate(t).unwrap().position;
        let n = near.propagate(t).unwrap().position;
        assert!((d - n).magnitude() > 10.0, "t = {}", t);
    }
}

#[test]
fn geostationary_altitude() {
    let tle = TLE::parse(GEO).unwrap();
    let prop = Propagator::new(&tle).unwrap();
    for t in (-1440..=4320).step_by(180) {
        let t = t as f64;
        let state = prop.propagate(t).unwrap();
        let gmst = crate::time::gmst_jd(tle.epoch_jd() + t / XMNPDA);
        let geo = state.position.to_geodetic(gmst).unwrap();
        assert_approx_eq!(geo.alt, 35786.0, 100.0);
        assert!(geo.lat.abs() < 0.1f64.to_radians());
    }
}

#[test]
fn molniya_stays_bound() {
    let prop = propagator(MOLNIYA);
    for t in (-1440..=14400).step_by(240) {
        let state = prop.propagate(t as f64).unwrap();
        let r = state.position.radius();
        assert!(r > XKMPER + 1000.0 && r < 50000.0, "t = {} r = {}", t, r);
    }
}

#[test]
fn idempotent() {
    let prop = propagator(MOLNIYA);
    let first = prop.propagate(10000.0).unwrap();
    let _ = prop.propagate(-3000.0).unwrap();
    let second = prop.propagate(10000.0).unwrap();
    assert_eq!(first, second);

    let other = propagator(MOLNIYA);
    assert_eq!(other.propagate(10000.0).unwrap(), first);
}

#[test]
fn drag_decay() {
    /* Test case 88888 with a drag term of 0.005 */
    let tle = TLE::from_lines(
        "1 88888U 88888A   80275.98708465  .00073094  13844-3  50000-2 0  5550",
        "2 88888  72.8435 115.9689 0086731  52.6988 110.5714 16.05824518   103",
    )
    .unwrap();
    let prop = Propagator::new(&tle).unwrap();

    let mut last: Option<MeanElements> = None;
    let mut t = 0.0;
    let err = loop {
        match prop.mean_elements(t).and_then(|m| prop.propagate(t).map(|_| m)) {
            Ok(mean) => {
                if let Some(prev) = last {
                    assert!(mean.a < prev.a);
                    assert!(mean.e <= prev.e);
                }
                last = Some(mean);
            }
            Err(err) => break err,
        }
        t += 360.0;
        assert!(t < 1.0e6);
    };

    match err {
        PropagationError::DecayedOrbit { tsince, .. } => assert_eq!(tsince, t),
        other => panic!("unexpected {:?}", other),
    }
    assert!(t > 0.0);
    assert_eq!(
        prop.propagate(t).unwrap_err(),
        PropagationError::DecayedOrbit {
            tsince: t,
            cause: "eccentricity out of range"
        }
    );
}

#[test]
fn singular_configurations() {
    /* Circular */
    let tle = TLE::from_lines(
        ISS1,
        "2 25544  51.6435  92.2789 0000000 358.0648 144.9972 15.49396855228763",
    )
    .unwrap();
    assert!(classify(&tle).near_circular);
    let prop = Propagator::new(&tle).unwrap();
    assert!(prop.propagate(1440.0).unwrap().position.radius().is_finite());

    /* Retrograde equatorial */
    let tle = TLE::from_lines(
        ISS1,
        "2 25544 180.0000  92.2789 0002570 358.0648 144.9972 15.49396855228762",
    )
    .unwrap();
    assert!(classify(&tle).retrograde_equatorial);
    let state = Propagator::new(&tle).unwrap().propagate(1440.0).unwrap();
    assert!(state.position.z.abs() < 1e-6);
    assert_approx_eq!(state.position.radius(), 6800.0, 50.0);

    /* Circular, equatorial and synchronous */
    let tle = TLE::from_lines(
        ISS1,
        "2 25544   0.0000  92.2789 0000000 358.0648 144.9972  1.00270000228764",
    )
    .unwrap();
    let prop = Propagator::new(&tle).unwrap();
    assert_eq!(prop.resonance(), Some(Resonance::Synchronous));
    for &t in &[-1440.0, 0.0, 100.0, 1440.0] {
        assert_approx_eq!(prop.propagate(t).unwrap().position.radius(), 42164.0, 20.0);
    }
}

#[test]
fn near_parabolic_refused() {
    let tle = TLE::from_lines(
        ISS1,
        "2 25544  51.6435  92.2789 9995000 358.0648 144.9972  2.00000000228762",
    )
    .unwrap();
    assert!(classify(&tle).near_parabolic);
    assert_eq!(
        Propagator::new(&tle).unwrap_err(),
        PropagationError::NearParabolic(0.9995)
    );
}

#[test]
fn invalid_time() {
    let prop = propagator(TLE2);
    assert!(matches!(
        prop.propagate(f64::NAN),
        Err(PropagationError::InvalidTime(_))
    ));
    assert_eq!(
        prop.propagate(f64::INFINITY).unwrap_err(),
        PropagationError::InvalidTime(f64::INFINITY)
    );

    /* Finite but past the resonance integrator's bound */
    let geo = propagator(GEO);
    assert!(geo.propagate(MAX_TSINCE).is_ok());
    assert_eq!(
        geo.propagate(-1.0e10).unwrap_err(),
        PropagationError::InvalidTime(-1.0e10)
    );
}

#[test]
fn shared_between_threads() {
    let prop = propagator(GEO);
    let expected = prop.propagate(2880.0).unwrap();
    std::thread::scope(|s| {
        for _ in 0..4 {
            s.spawn(|| assert_eq!(prop.propagate(2880.0).unwrap(), expected));
        }
    });
}

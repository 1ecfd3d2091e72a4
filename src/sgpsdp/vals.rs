/** Table of constant values **/
pub const PI: f64 = std::f64::consts::PI;
pub const TWOPI: f64 = 2.0 * PI;
pub const TOTHRD: f64 = 2.0 / 3.0;
pub const XJ3: f64 = -2.53881E-6; /* J3 Harmonic (WGS '72) */
pub const XKE: f64 = 7.43669161E-2; /* sqrt(GM) in earth radii^1.5 per minute */
pub const XKMPER: f64 = 6.378135E3; /* WGS '72 equatorial radius, km */
pub const XMNPDA: f64 = 1.44E3; /* Minutes per day */
pub const AE: f64 = 1.0;
pub const CK2: f64 = 5.413079E-4; /* J2/2 */
pub const CK4: f64 = 6.209887E-7; /* -3*J4/8 */
pub const __F: f64 = 1.0 / 298.26; /* WGS '72 flattening */
pub const __S__: f64 = 1.012229;
pub const QOMS2T: f64 = 1.880279E-09;
pub const SECDAY: f64 = 8.6400E4; /* Seconds per day */
pub const OMEGA_E: f64 = 7.292115E-5; /* Earth rotation, rad/s */

/* Lunar and solar terms */
pub const ZNS: f64 = 1.19459E-5;
pub const C1SS: f64 = 2.9864797E-6;
pub const ZES: f64 = 1.675E-2;
pub const ZNL: f64 = 1.5835218E-4;
pub const C1L: f64 = 4.7968065E-7;
pub const ZEL: f64 = 5.490E-2;
pub const ZCOSIS: f64 = 9.1744867E-1;
pub const ZSINIS: f64 = 3.9785416E-1;
pub const ZSINGS: f64 = -9.8088458E-1;
pub const ZCOSGS: f64 = 1.945905E-1;

/* Resonance terms */
pub const Q22: f64 = 1.7891679E-6;
pub const Q31: f64 = 2.1460748E-6;
pub const Q33: f64 = 2.2123015E-7;
pub const G22: f64 = 5.7686396;
pub const G32: f64 = 9.5240898E-1;
pub const G44: f64 = 1.8014998;
pub const G52: f64 = 1.0508330;
pub const G54: f64 = 4.4108898;
pub const ROOT22: f64 = 1.7891679E-6;
pub const ROOT32: f64 = 3.7393792E-7;
pub const ROOT44: f64 = 7.3636953E-9;
pub const ROOT52: f64 = 1.1428639E-7;
pub const ROOT54: f64 = 2.1765803E-9;
pub const FASX2: f64 = 0.13130908;
pub const FASX4: f64 = 2.8843198;
pub const FASX6: f64 = 0.37448087;
pub const THDT: f64 = 4.3752691E-3; /* Earth rotation, rad/min */

/* Resonance integrator step, minutes, and step^2 / 2 */
pub const STEP: f64 = 720.0;
pub const STEP2: f64 = STEP * STEP / 2.0;

/* Regime and resonance windows */
pub const DEEP_SPACE_PERIOD: f64 = 225.0; /* minutes */
pub const SYNC_XN_MIN: f64 = 0.0034906585; /* rad/min, 24h window */
pub const SYNC_XN_MAX: f64 = 0.0052359877;
pub const HALF_DAY_XN_MIN: f64 = 0.00826; /* rad/min, 12h window */
pub const HALF_DAY_XN_MAX: f64 = 0.00924;
pub const HALF_DAY_MIN_ECC: f64 = 0.5;

/* Singularity thresholds */
pub const NEAR_CIRCULAR_ECC: f64 = 1.0E-4;
pub const NEAR_PARABOLIC_ECC: f64 = 0.999;
pub const MIN_ECC: f64 = 1.0E-6;
pub const DECAYED_ECC: f64 = -1.0E-3;
pub const LOW_INCLINATION: f64 = 5.2359877E-2; /* 3 degrees */
pub const LYDDANE_INCLINATION: f64 = 0.2;
pub const RETROGRADE_EQUATORIAL: f64 = 1.5E-12; /* bound on 1 + cos(i) */
pub const SIMPLE_PERIGEE: f64 = 220.0; /* km */
pub const LOW_PERIGEE: f64 = 156.0; /* km */

/* Solvers */
pub const KEPLER_TOLERANCE: f64 = 1.0E-12;
pub const KEPLER_MAX_ITER: usize = 10;
pub const GEODETIC_TOLERANCE: f64 = 1.0E-10;
pub const GEODETIC_MAX_ITER: usize = 10;
/* Longest elapsed time accepted, minutes (100 years) */
pub const MAX_TSINCE: f64 = 36525.0 * XMNPDA;

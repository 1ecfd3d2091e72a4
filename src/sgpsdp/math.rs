use super::vals::*;
use crate::error::{PropagationError, Solver};

/// Four-quadrant arctangent in [0, 2π).
pub fn ac_tan(sinx: f64, cosx: f64) -> f64 {
    let x = sinx.atan2(cosx);
    if x < 0.0 {
        x + TWOPI
    } else {
        x
    }
}

/* Returns mod 2pi of argument */
pub fn fmod2p(x: f64) -> f64 {
    x.rem_euclid(TWOPI)
}

/// Wraps an angle into (-π, π].
pub fn wrap_neg_pos_pi(x: f64) -> f64 {
    let x = (x + PI).rem_euclid(TWOPI) - PI;
    if x <= -PI {
        x + TWOPI
    } else {
        x
    }
}

/// Greenwich sidereal angle at the element set epoch, and the epoch in days since
/// 1950 January 0.0 UT.
///
/// This is the simplified form used by the deep-space initialisation; see
/// [`crate::time::gmst_jd`] for the full IAU expression.
pub fn theta_g(epoch_jd: f64) -> (f64, f64) {
    /* Reference:  The 1992 Astronomical Almanac, page B6. */
    let ds50 = epoch_jd - 2433281.5;
    (fmod2p(6.3003880987 * ds50 + 1.72944494), ds50)
}

/// Eccentric longitude solution of Kepler's equation in Lyddane variables.
#[derive(Debug, Clone, Copy)]
pub struct KeplerSolution {
    pub sinepw: f64,
    pub cosepw: f64,
    pub ecose: f64,
    pub esine: f64,
}

/// Solves `capu = epw - axn*sin(epw) + ayn*cos(epw)` for `epw`.
///
/// Newton-Raphson with a second-order correction; the first step is clamped so high
/// eccentricities cannot overshoot into the wrong branch.
pub fn solve_kepler(capu: f64, axn: f64, ayn: f64) -> Result<KeplerSolution, PropagationError> {
    let max_newton_raphson = 1.25 * (axn * axn + ayn * ayn).sqrt();
    let mut epw = capu;
    let mut delta_epw = 0.0;

    for i in 0..=KEPLER_MAX_ITER {
        let (sinepw, cosepw) = epw.sin_cos();
        let ecose = axn * cosepw + ayn * sinepw;
        let esine = axn * sinepw - ayn * cosepw;
        let f = capu - epw + esine;
        if f.abs() < KEPLER_TOLERANCE {
            return Ok(KeplerSolution {
                sinepw,
                cosepw,
                ecose,
                esine,
            });
        }
        if i == KEPLER_MAX_ITER {
            break;
        }

        let fdot = 1.0 - ecose;
        delta_epw = if i == 0 {
            (f / fdot).clamp(-max_newton_raphson, max_newton_raphson)
        } else {
            f / (fdot + 0.5 * esine * delta_epw)
        };
        epw += delta_epw;
    }

    Err(PropagationError::ConvergenceFailure {
        solver: Solver::Kepler,
        iterations: KEPLER_MAX_ITER,
    })
}

/*
 *  Unit SGP4SDP4
 *           Author:  Dr TS Kelso
 * Original Version:  1991 Oct 30
 * Current Revision:  1992 Sep 03
 *          Version:  1.50
 *        Copyright:  1991-1992, All Rights Reserved
 *
 *   Ported to C by:  Neoklis Kyriazis  April 10  2001
 *   Reentrancy mods by Alexandru Csete OZ9AEC
 *   Rust port by Conner Ebbinghaus
 */

mod deep;
pub(crate) mod math;
mod near;
mod state;
#[cfg(test)]
mod tests;
pub(crate) mod vals;

use log::debug;

use crate::coords::eci::{ECIVector, EarthCenteredInertial};
use crate::error::PropagationError;
use crate::tle::TLE;
pub use deep::Resonance;
use vals::*;

/// Which perturbation model an element set is propagated with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Regime {
    /// SGP4, periods under 225 minutes.
    NearEarth,
    /// SDP4, adds lunar/solar and resonance terms.
    DeepSpace,
}

/// Regime and singular configurations of an element set, fixed at epoch.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Classification {
    pub regime: Regime,
    /// Anomalistic period in minutes, from the recovered mean motion.
    pub period: f64,
    /// Eccentricity too small for the c3 and delta-M drag terms, which divide by it.
    pub near_circular: bool,
    /// Eccentricity too close to one for the theory.
    pub near_parabolic: bool,
    /// Below 3 degrees the lunar/solar node rate is dropped.
    pub low_inclination: bool,
    /// Inclination within rounding of 180 degrees, where `1 + cos(i)` vanishes.
    pub retrograde_equatorial: bool,
}

/// Classifies an element set from its epoch mean motion, eccentricity and inclination.
pub fn classify(tle: &TLE) -> Classification {
    let (xnodp, _) = recover_mean_motion(tle.xno, tle.eo, tle.xincl.cos());
    let period = TWOPI / xnodp;

    /* Period >= 225 minutes is deep space */
    let regime = if period >= DEEP_SPACE_PERIOD {
        Regime::DeepSpace
    } else {
        Regime::NearEarth
    };

    Classification {
        regime,
        period,
        near_circular: tle.eo <= NEAR_CIRCULAR_ECC,
        near_parabolic: tle.eo > NEAR_PARABOLIC_ECC,
        low_inclination: tle.xincl < LOW_INCLINATION,
        retrograde_equatorial: (1.0 + tle.xincl.cos()).abs() < RETROGRADE_EQUATORIAL,
    }
}

/* Recover original mean motion (xnodp) and semimajor axis (aodp) */
/* from input elements.                                          */
fn recover_mean_motion(xno: f64, eo: f64, cosio: f64) -> (f64, f64) {
    let a1 = (XKE / xno).powf(TOTHRD);
    let x3thm1 = 3.0 * cosio * cosio - 1.0;
    let betao2 = 1.0 - eo * eo;
    let betao = betao2.sqrt();
    let del1 = 1.5 * CK2 * x3thm1 / (a1 * a1 * betao * betao2);
    let ao = a1 * (1.0 - del1 * (0.5 * TOTHRD + del1 * (1.0 + 134.0 / 81.0 * del1)));
    let delo = 1.5 * CK2 * x3thm1 / (ao * ao * betao * betao2);
    (xno / (1.0 + delo), ao / (1.0 - delo))
}

/// Position and velocity in the TEME inertial frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StateVector {
    pub minutes_since_epoch: f64,
    /// Kilometres.
    pub position: EarthCenteredInertial,
    /// Kilometres per second.
    pub velocity: ECIVector,
}

/// Mean elements at epoch, copied out of the element set so a propagator owns its inputs.
#[derive(Debug, Clone, Copy)]
struct Elements {
    xmo: f64,
    omegao: f64,
    xnodeo: f64,
    xincl: f64,
    eo: f64,
    bstar: f64,
    xno: f64,
    epoch_jd: f64,
}

impl From<&TLE> for Elements {
    fn from(tle: &TLE) -> Self {
        Elements {
            xmo: tle.xmo,
            omegao: tle.omegao,
            xnodeo: tle.xnodeo,
            xincl: tle.xincl,
            eo: tle.eo,
            bstar: tle.bstar,
            xno: tle.xno,
            epoch_jd: tle.epoch_jd(),
        }
    }
}

/// Mean elements after the secular (and, in deep space, lunar/solar periodic) updates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct MeanElements {
    /// Semi-major axis, earth radii.
    pub a: f64,
    pub e: f64,
    pub incl: f64,
    pub omega: f64,
    pub xnode: f64,
    /// Mean longitude: mean anomaly + argument of perigee + node.
    pub xl: f64,
}

/// Initialisation shared by SGP4 and SDP4.
#[derive(Debug, Clone)]
struct Common {
    aodp: f64,
    xnodp: f64,
    cosio: f64,
    sinio: f64,
    theta2: f64,
    x3thm1: f64,
    x1mth2: f64,
    x7thm1: f64,
    eosq: f64,
    betao: f64,
    betao2: f64,
    s4: f64,
    tsi: f64,
    eta: f64,
    coef: f64,
    coef1: f64,
    a3ovk2: f64,
    c1: f64,
    c4: f64,
    xmdot: f64,
    omgdot: f64,
    xnodot: f64,
    xnodcf: f64,
    t2cof: f64,
    xlcof: f64,
    aycof: f64,
}

impl Common {
    fn new(el: &Elements, class: &Classification) -> Common {
        let cosio = el.xincl.cos();
        let sinio = el.xincl.sin();
        let theta2 = cosio * cosio;
        let x3thm1 = 3.0 * theta2 - 1.0;
        let eosq = el.eo * el.eo;
        let betao2 = 1.0 - eosq;
        let betao = betao2.sqrt();
        let (xnodp, aodp) = recover_mean_motion(el.xno, el.eo, cosio);

        /* For perigee below 156 km, the values */
        /* of s and qoms2t are altered.         */
        let mut s4 = __S__;
        let mut qoms24 = QOMS2T;
        let perige = (aodp * (1.0 - el.eo) - AE) * XKMPER;
        if perige < LOW_PERIGEE {
            s4 = if perige <= 98.0 { 20.0 } else { perige - 78.0 };
            qoms24 = ((120.0 - s4) * AE / XKMPER).powi(4);
            s4 = s4 / XKMPER + AE;
        }

        let pinvsq = 1.0 / (aodp * aodp * betao2 * betao2);
        let tsi = 1.0 / (aodp - s4);
        let eta = aodp * el.eo * tsi;
        let etasq = eta * eta;
        let eeta = el.eo * eta;
        let psisq = (1.0 - etasq).abs();
        let coef = qoms24 * tsi.powi(4);
        let coef1 = coef / psisq.powf(3.5);
        let c2 = coef1
            * xnodp
            * (aodp * (1.0 + 1.5 * etasq + eeta * (4.0 + etasq))
                + 0.75 * CK2 * tsi / psisq * x3thm1 * (8.0 + 3.0 * etasq * (8.0 + etasq)));
        let c1 = el.bstar * c2;
        let a3ovk2 = -XJ3 / CK2 * AE.powi(3);
        let x1mth2 = 1.0 - theta2;
        let c4 = 2.0
            * xnodp
            * coef1
            * aodp
            * betao2
            * (eta * (2.0 + 0.5 * etasq) + el.eo * (0.5 + 2.0 * etasq)
                - 2.0 * CK2 * tsi / (aodp * psisq)
                    * (-3.0 * x3thm1 * (1.0 - 2.0 * eeta + etasq * (1.5 - 0.5 * eeta))
                        + 0.75
                            * x1mth2
                            * (2.0 * etasq - eeta * (1.0 + etasq))
                            * (2.0 * el.omegao).cos()));

        let theta4 = theta2 * theta2;
        let temp1 = 3.0 * CK2 * pinvsq * xnodp;
        let temp2 = temp1 * CK2 * pinvsq;
        let temp3 = 1.25 * CK4 * pinvsq * pinvsq * xnodp;
        let xmdot = xnodp
            + 0.5 * temp1 * betao * x3thm1
            + 0.0625 * temp2 * betao * (13.0 - 78.0 * theta2 + 137.0 * theta4);
        let x1m5th = 1.0 - 5.0 * theta2;
        let omgdot = -0.5 * temp1 * x1m5th
            + 0.0625 * temp2 * (7.0 - 114.0 * theta2 + 395.0 * theta4)
            + temp3 * (3.0 - 36.0 * theta2 + 49.0 * theta4);
        let xhdot1 = -temp1 * cosio;
        let xnodot = xhdot1
            + (0.5 * temp2 * (4.0 - 19.0 * theta2) + 2.0 * temp3 * (3.0 - 7.0 * theta2)) * cosio;

        /* 1 + cos(i) vanishes for retrograde equatorial orbits */
        let xlcof_den = if class.retrograde_equatorial {
            RETROGRADE_EQUATORIAL
        } else {
            1.0 + cosio
        };

        Common {
            aodp,
            xnodp,
            cosio,
            sinio,
            theta2,
            x3thm1,
            x1mth2,
            x7thm1: 7.0 * theta2 - 1.0,
            eosq,
            betao,
            betao2,
            s4,
            tsi,
            eta,
            coef,
            coef1,
            a3ovk2,
            c1,
            c4,
            xmdot,
            omgdot,
            xnodot,
            xnodcf: 3.5 * betao2 * xhdot1 * c1,
            t2cof: 1.5 * c1,
            xlcof: 0.125 * a3ovk2 * sinio * (3.0 + 5.0 * cosio) / xlcof_den,
            aycof: 0.25 * a3ovk2 * sinio,
        }
    }
}

#[derive(Debug, Clone)]
enum Model {
    NearEarth(near::NearEarth),
    DeepSpace(Box<deep::DeepSpace>),
}

/// Everything derived from one element set that propagation needs.
///
/// Built once per element set and never mutated afterwards, so a single propagator can be
/// shared between threads and queried for any number of times.
#[derive(Debug, Clone)]
pub struct Propagator {
    elements: Elements,
    classification: Classification,
    common: Common,
    model: Model,
}

impl Propagator {
    pub fn new(tle: &TLE) -> Result<Propagator, PropagationError> {
        let regime = classify(tle).regime;
        Propagator::with_regime(tle, regime)
    }

    /// Builds a propagator for an explicitly chosen regime, bypassing the period test.
    pub(crate) fn with_regime(tle: &TLE, regime: Regime) -> Result<Propagator, PropagationError> {
        let classification = Classification {
            regime,
            ..classify(tle)
        };
        if classification.near_parabolic {
            return Err(PropagationError::NearParabolic(tle.eo));
        }

        let elements = Elements::from(tle);
        let common = Common::new(&elements, &classification);
        if common.aodp * (1.0 - elements.eo) < AE {
            return Err(decayed(0.0, "perigee below the surface at epoch"));
        }

        let model = match regime {
            Regime::NearEarth => Model::NearEarth(near::NearEarth::new(
                &elements,
                &common,
                &classification,
            )),
            Regime::DeepSpace => Model::DeepSpace(Box::new(deep::DeepSpace::new(
                &elements,
                &common,
                &classification,
            ))),
        };

        let propagator = Propagator {
            elements,
            classification,
            common,
            model,
        };
        debug!(
            "satellite {}: period {:.2} min, {:?}, resonance {:?}",
            tle.sat_num(),
            classification.period,
            regime,
            propagator.resonance()
        );
        Ok(propagator)
    }

    pub fn classification(&self) -> &Classification {
        &self.classification
    }

    pub fn regime(&self) -> Regime {
        self.classification.regime
    }

    /// Geopotential resonance of a deep-space orbit, if any.
    pub fn resonance(&self) -> Option<Resonance> {
        match &self.model {
            Model::NearEarth(_) => None,
            Model::DeepSpace(deep) => deep.resonance(),
        }
    }

    /// Julian date of the element set epoch.
    pub fn epoch_jd(&self) -> f64 {
        self.elements.epoch_jd
    }

    /// Position and velocity `tsince` minutes after epoch (negative for earlier times).
    pub fn propagate(&self, tsince: f64) -> Result<StateVector, PropagationError> {
        let mean = self.mean_elements(tsince)?;
        state::assemble(&self.common, &mean, tsince)
    }

    pub(crate) fn mean_elements(&self, tsince: f64) -> Result<MeanElements, PropagationError> {
        if !tsince.is_finite() || tsince.abs() > MAX_TSINCE {
            return Err(PropagationError::InvalidTime(tsince));
        }
        match &self.model {
            Model::NearEarth(near) => near.secular(&self.elements, &self.common, tsince),
            Model::DeepSpace(deep) => deep.mean_elements(&self.elements, &self.common, tsince),
        }
    }
}

fn decayed(tsince: f64, cause: &'static str) -> PropagationError {
    debug!("orbit decayed at {:.3} min: {}", tsince, cause);
    PropagationError::DecayedOrbit { tsince, cause }
}

/// Rejects eccentricities pushed out of the model's domain by drag and floors tiny ones.
fn guard_eccentricity(e: f64, tsince: f64) -> Result<f64, PropagationError> {
    if !(DECAYED_ECC..1.0).contains(&e) {
        return Err(decayed(tsince, "eccentricity out of range"));
    }
    Ok(e.max(MIN_ECC))
}

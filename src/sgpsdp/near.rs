use super::vals::*;
use super::{decayed, guard_eccentricity, Classification, Common, Elements, MeanElements};
use crate::error::PropagationError;

/// SGP4 drag coefficients for orbits with periods under 225 minutes.
#[derive(Debug, Clone)]
pub(super) struct NearEarth {
    /// Perigee under 220 km: drag truncated to linear variation in sqrt(a) and quadratic
    /// variation in mean anomaly, and the c3, delta-omega and delta-M terms dropped.
    simple: bool,
    c5: f64,
    omgcof: f64,
    xmcof: f64,
    delmo: f64,
    sinmo: f64,
    d2: f64,
    d3: f64,
    d4: f64,
    t3cof: f64,
    t4cof: f64,
    t5cof: f64,
}

impl NearEarth {
    pub(super) fn new(el: &Elements, c: &Common, class: &Classification) -> NearEarth {
        let perigee = (c.aodp * (1.0 - el.eo) - AE) * XKMPER;
        let simple = perigee < SIMPLE_PERIGEE;

        let etasq = c.eta * c.eta;
        let eeta = el.eo * c.eta;
        let c5 = 2.0 * c.coef1 * c.aodp * c.betao2 * (1.0 + 2.75 * (etasq + eeta) + eeta * etasq);

        /* c3 and the delta-M coefficient divide by eo */
        let (omgcof, xmcof) = if class.near_circular {
            (0.0, 0.0)
        } else {
            let c3 = c.coef * c.tsi * c.a3ovk2 * c.xnodp * AE * c.sinio / el.eo;
            (
                el.bstar * c3 * el.omegao.cos(),
                -TOTHRD * c.coef * el.bstar * AE / eeta,
            )
        };

        let mut near = NearEarth {
            simple,
            c5,
            omgcof,
            xmcof,
            delmo: (1.0 + c.eta * el.xmo.cos()).powi(3),
            sinmo: el.xmo.sin(),
            d2: 0.0,
            d3: 0.0,
            d4: 0.0,
            t3cof: 0.0,
            t4cof: 0.0,
            t5cof: 0.0,
        };

        if !simple {
            let c1sq = c.c1 * c.c1;
            near.d2 = 4.0 * c.aodp * c.tsi * c1sq;
            let temp = near.d2 * c.tsi * c.c1 / 3.0;
            near.d3 = (17.0 * c.aodp + c.s4) * temp;
            near.d4 = 0.5 * temp * c.aodp * c.tsi * (221.0 * c.aodp + 31.0 * c.s4) * c.c1;
            near.t3cof = near.d2 + 2.0 * c1sq;
            near.t4cof = 0.25 * (3.0 * near.d3 + c.c1 * (12.0 * near.d2 + 10.0 * c1sq));
            near.t5cof = 0.2
                * (3.0 * near.d4
                    + 12.0 * c.c1 * near.d3
                    + 6.0 * near.d2 * near.d2
                    + 15.0 * c1sq * (2.0 * near.d2 + c1sq));
        }

        near
    }

    /// Secular gravity and atmospheric drag.
    pub(super) fn secular(
        &self,
        el: &Elements,
        c: &Common,
        tsince: f64,
    ) -> Result<MeanElements, PropagationError> {
        let xmdf = el.xmo + c.xmdot * tsince;
        let omgadf = el.omegao + c.omgdot * tsince;
        let xnoddf = el.xnodeo + c.xnodot * tsince;
        let mut omega = omgadf;
        let mut xmp = xmdf;
        let tsq = tsince * tsince;
        let xnode = xnoddf + c.xnodcf * tsq;
        let mut tempa = 1.0 - c.c1 * tsince;
        let mut tempe = el.bstar * c.c4 * tsince;
        let mut templ = c.t2cof * tsq;

        if !self.simple {
            let delomg = self.omgcof * tsince;
            let delm = self.xmcof * ((1.0 + c.eta * xmdf.cos()).powi(3) - self.delmo);
            let temp = delomg + delm;
            xmp = xmdf + temp;
            omega = omgadf - temp;
            let tcube = tsq * tsince;
            let tfour = tsince * tcube;
            tempa = tempa - self.d2 * tsq - self.d3 * tcube - self.d4 * tfour;
            tempe += el.bstar * self.c5 * (xmp.sin() - self.sinmo);
            templ += self.t3cof * tcube + tfour * (self.t4cof + tsince * self.t5cof);
        }

        if tempa <= 0.0 {
            return Err(decayed(tsince, "drag collapsed the semi-major axis"));
        }

        let e = guard_eccentricity(el.eo - tempe, tsince)?;

        Ok(MeanElements {
            a: c.aodp * tempa * tempa,
            e,
            incl: el.xincl,
            omega,
            xnode,
            xl: xmp + omega + xnode + c.xnodp * templ,
        })
    }
}

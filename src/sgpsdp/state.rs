use super::math::{ac_tan, fmod2p, solve_kepler};
use super::vals::*;
use super::{decayed, Common, MeanElements, StateVector};
use crate::coords::eci::{ECIVector, EarthCenteredInertial};
use crate::error::PropagationError;

/// Long-period periodics, Kepler's equation, short-period periodics and rotation into the
/// inertial frame. Shared by both regimes.
pub(super) fn assemble(
    c: &Common,
    mean: &MeanElements,
    tsince: f64,
) -> Result<StateVector, PropagationError> {
    let MeanElements {
        a,
        e,
        incl,
        omega,
        xnode,
        xl,
    } = *mean;
    let beta = (1.0 - e * e).sqrt();
    let xn = XKE / a.powf(1.5);

    /* Long period periodics */
    let axn = e * omega.cos();
    let temp = 1.0 / (a * beta * beta);
    let xll = temp * c.xlcof * axn;
    let aynl = temp * c.aycof;
    let xlt = xl + xll;
    let ayn = e * omega.sin() + aynl;

    /* Solve Kepler's Equation */
    let capu = fmod2p(xlt - xnode);
    let k = solve_kepler(capu, axn, ayn)?;

    /* Short period preliminary quantities */
    let elsq = axn * axn + ayn * ayn;
    if elsq >= 1.0 {
        return Err(decayed(tsince, "long-period eccentricity reached one"));
    }
    let temp = 1.0 - elsq;
    let pl = a * temp;
    if pl < 0.0 {
        return Err(decayed(tsince, "negative semi-latus rectum"));
    }
    let r = a * (1.0 - k.ecose);
    let temp1 = 1.0 / r;
    let rdot = XKE * a.sqrt() * k.esine * temp1;
    let rfdot = XKE * pl.sqrt() * temp1;
    let temp2 = a * temp1;
    let betal = temp.sqrt();
    let temp3 = 1.0 / (1.0 + betal);
    let cosu = temp2 * (k.cosepw - axn + ayn * k.esine * temp3);
    let sinu = temp2 * (k.sinepw - ayn - axn * k.esine * temp3);
    let u = ac_tan(sinu, cosu);
    let sin2u = 2.0 * sinu * cosu;
    let cos2u = 2.0 * cosu * cosu - 1.0;
    let temp = 1.0 / pl;
    let temp1 = CK2 * temp;
    let temp2 = temp1 * temp;

    /* Update for short periodics */
    let rk = r * (1.0 - 1.5 * temp2 * betal * c.x3thm1) + 0.5 * temp1 * c.x1mth2 * cos2u;
    if rk < 1.0 {
        return Err(decayed(tsince, "radius below the surface"));
    }
    let uk = u - 0.25 * temp2 * c.x7thm1 * sin2u;
    let xnodek = xnode + 1.5 * temp2 * c.cosio * sin2u;
    let xinck = incl + 1.5 * temp2 * c.cosio * c.sinio * cos2u;
    let rdotk = rdot - xn * temp1 * c.x1mth2 * sin2u;
    let rfdotk = rfdot + xn * temp1 * (c.x1mth2 * cos2u + 1.5 * c.x3thm1);

    /* Orientation vectors */
    let (sinuk, cosuk) = uk.sin_cos();
    let (sinik, cosik) = xinck.sin_cos();
    let (sinnok, cosnok) = xnodek.sin_cos();
    let xmx = -sinnok * cosik;
    let xmy = cosnok * cosik;
    let ux = xmx * sinuk + cosnok * cosuk;
    let uy = xmy * sinuk + sinnok * cosuk;
    let uz = sinik * sinuk;
    let vx = xmx * cosuk - cosnok * sinuk;
    let vy = xmy * cosuk - sinnok * sinuk;
    let vz = sinik * cosuk;

    /* Position in km and velocity in km/s */
    let vscale = XKMPER * XMNPDA / SECDAY;
    Ok(StateVector {
        minutes_since_epoch: tsince,
        position: EarthCenteredInertial::new(rk * ux * XKMPER, rk * uy * XKMPER, rk * uz * XKMPER),
        velocity: ECIVector::new(
            (rdotk * ux + rfdotk * vx) * vscale,
            (rdotk * uy + rfdotk * vy) * vscale,
            (rdotk * uz + rfdotk * vz) * vscale,
        ),
    })
}

//! SDP4 lunar/solar perturbations and geopotential resonance.

use log::trace;

use super::math::{ac_tan, fmod2p, theta_g};
use super::vals::*;
use super::{decayed, guard_eccentricity, Classification, Common, Elements, MeanElements};
use crate::error::PropagationError;

/// Geopotential resonance of a deep-space orbit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resonance {
    /// 12 hour period with eccentricity of at least 0.5 (Molniya class).
    HalfDay,
    /// 24 hour period.
    Synchronous,
}

/// Orientation of a perturbing body's orbit relative to the satellite's node.
#[derive(Debug, Clone, Copy)]
struct Geometry {
    zcosg: f64,
    zsing: f64,
    zcosi: f64,
    zsini: f64,
    zcosh: f64,
    zsinh: f64,
}

/// Amplitudes of the periodic terms of one perturbing body.
#[derive(Debug, Clone, Copy, Default)]
struct PeriodicTerms {
    e2: f64,
    e3: f64,
    i2: f64,
    i3: f64,
    l2: f64,
    l3: f64,
    l4: f64,
    gh2: f64,
    gh3: f64,
    gh4: f64,
    h2: f64,
    h3: f64,
}

/// Contribution of one perturbing body: secular rates plus periodic amplitudes.
#[derive(Debug, Clone, Copy)]
struct ThirdBody {
    se: f64,
    si: f64,
    sl: f64,
    sgh: f64,
    sh: f64,
    terms: PeriodicTerms,
}

/// Periodic corrections of one perturbing body at some time.
#[derive(Debug, Clone, Copy)]
struct Periodics {
    pe: f64,
    pinc: f64,
    pl: f64,
    pgh: f64,
    ph: f64,
}

impl PeriodicTerms {
    /// Evaluates the terms at mean anomaly `zm` of the perturbing body.
    fn at(&self, zm: f64, ze: f64) -> Periodics {
        let zf = zm + 2.0 * ze * zm.sin();
        let sinzf = zf.sin();
        let f2 = 0.5 * sinzf * sinzf - 0.25;
        let f3 = -0.5 * sinzf * zf.cos();
        Periodics {
            pe: self.e2 * f2 + self.e3 * f3,
            pinc: self.i2 * f2 + self.i3 * f3,
            pl: self.l2 * f2 + self.l3 * f3 + self.l4 * sinzf,
            pgh: self.gh2 * f2 + self.gh3 * f3 + self.gh4 * sinzf,
            ph: self.h2 * f2 + self.h3 * f3,
        }
    }
}

/// Lunar/solar secular rates (radians or eccentricity per minute).
#[derive(Debug, Clone, Copy)]
struct SecularRates {
    sse: f64,
    ssi: f64,
    ssl: f64,
    ssg: f64,
    ssh: f64,
}

#[derive(Debug, Clone, Copy)]
struct HalfDayTerms {
    d2201: f64,
    d2211: f64,
    d3210: f64,
    d3222: f64,
    d4410: f64,
    d4422: f64,
    d5220: f64,
    d5232: f64,
    d5421: f64,
    d5433: f64,
}

#[derive(Debug, Clone, Copy)]
enum Coefficients {
    HalfDay(HalfDayTerms),
    Synchronous { del1: f64, del2: f64, del3: f64 },
}

/// Resonance integrator constants; the integrator itself restarts at epoch on every call.
#[derive(Debug, Clone, Copy)]
struct ResonanceTerms {
    coefficients: Coefficients,
    xlamo: f64,
    xfact: f64,
}

impl ResonanceTerms {
    fn kind(&self) -> Resonance {
        match self.coefficients {
            Coefficients::HalfDay(_) => Resonance::HalfDay,
            Coefficients::Synchronous { .. } => Resonance::Synchronous,
        }
    }

    /// First and second derivatives of mean motion at resonance angle `xli`.
    fn dot_terms(&self, xli: f64, xomi: f64) -> (f64, f64) {
        match self.coefficients {
            Coefficients::Synchronous { del1, del2, del3 } => {
                let xndot = del1 * (xli - FASX2).sin()
                    + del2 * (2.0 * (xli - FASX4)).sin()
                    + del3 * (3.0 * (xli - FASX6)).sin();
                let xnddt = del1 * (xli - FASX2).cos()
                    + 2.0 * del2 * (2.0 * (xli - FASX4)).cos()
                    + 3.0 * del3 * (3.0 * (xli - FASX6)).cos();
                (xndot, xnddt)
            }
            Coefficients::HalfDay(d) => {
                let x2omi = xomi + xomi;
                let x2li = xli + xli;
                let xndot = d.d2201 * (x2omi + xli - G22).sin()
                    + d.d2211 * (xli - G22).sin()
                    + d.d3210 * (xomi + xli - G32).sin()
                    + d.d3222 * (-xomi + xli - G32).sin()
                    + d.d4410 * (x2omi + x2li - G44).sin()
                    + d.d4422 * (x2li - G44).sin()
                    + d.d5220 * (xomi + xli - G52).sin()
                    + d.d5232 * (-xomi + xli - G52).sin()
                    + d.d5421 * (xomi + x2li - G54).sin()
                    + d.d5433 * (-xomi + x2li - G54).sin();
                let xnddt = d.d2201 * (x2omi + xli - G22).cos()
                    + d.d2211 * (xli - G22).cos()
                    + d.d3210 * (xomi + xli - G32).cos()
                    + d.d3222 * (-xomi + xli - G32).cos()
                    + d.d5220 * (xomi + xli - G52).cos()
                    + d.d5232 * (-xomi + xli - G52).cos()
                    + 2.0
                        * (d.d4410 * (x2omi + x2li - G44).cos()
                            + d.d4422 * (x2li - G44).cos()
                            + d.d5421 * (xomi + x2li - G54).cos()
                            + d.d5433 * (-xomi + x2li - G54).cos());
                (xndot, xnddt)
            }
        }
    }
}

/// Deep-space state fixed at epoch.
#[derive(Debug, Clone)]
pub(super) struct DeepSpace {
    thgr: f64,
    xnq: f64,
    omegaq: f64,
    zmos: f64,
    zmol: f64,
    solar: PeriodicTerms,
    lunar: PeriodicTerms,
    rates: SecularRates,
    resonance: Option<ResonanceTerms>,
}

impl DeepSpace {
    pub(super) fn new(el: &Elements, c: &Common, class: &Classification) -> DeepSpace {
        let (thgr, ds50) = theta_g(el.epoch_jd);
        let xnq = c.xnodp;
        let (sinq, cosq) = el.xnodeo.sin_cos();
        let xnoi = 1.0 / xnq;

        /* Lunar ephemeris at epoch */
        let day = ds50 + 18261.5; /* Days since 1900 Jan 0.5 */
        let xnodce = 4.5236020 - 9.2422029E-4 * day;
        let (stem, ctem) = xnodce.sin_cos();
        let zcosil = 0.91375164 - 0.03568096 * ctem;
        let zsinil = (1.0 - zcosil * zcosil).sqrt();
        let zsinhl = 0.089683511 * stem / zsinil;
        let zcoshl = (1.0 - zsinhl * zsinhl).sqrt();
        let cl = 4.7199672 + 0.22997150 * day;
        let gam = 5.8351514 + 0.0019443680 * day;
        let zmol = fmod2p(cl - gam);
        let zx = 0.39785416 * stem / zsinil;
        let zy = zcoshl * ctem + 0.91744867 * zsinhl * stem;
        let zx = gam + ac_tan(zx, zy) - xnodce;
        let (zsingl, zcosgl) = zx.sin_cos();
        let zmos = fmod2p(6.2565837 + 0.017201977 * day);

        let solar = third_body(
            &Geometry {
                zcosg: ZCOSGS,
                zsing: ZSINGS,
                zcosi: ZCOSIS,
                zsini: ZSINIS,
                zcosh: cosq,
                zsinh: sinq,
            },
            C1SS,
            ZNS,
            ZES,
            el,
            c,
            xnoi,
            class.low_inclination,
        );
        let lunar = third_body(
            &Geometry {
                zcosg: zcosgl,
                zsing: zsingl,
                zcosi: zcosil,
                zsini: zsinil,
                zcosh: zcoshl * cosq + zsinhl * sinq,
                zsinh: sinq * zcoshl - cosq * zsinhl,
            },
            C1L,
            ZNL,
            ZEL,
            el,
            c,
            xnoi,
            class.low_inclination,
        );

        /* sh is zero below 3 degrees, where sinio may be too */
        let ssh = |b: &ThirdBody| {
            if class.low_inclination {
                0.0
            } else {
                b.sh / c.sinio
            }
        };
        let rates = SecularRates {
            sse: solar.se + lunar.se,
            ssi: solar.si + lunar.si,
            ssl: solar.sl + lunar.sl,
            ssg: solar.sgh - c.cosio * ssh(&solar) + lunar.sgh - c.cosio * ssh(&lunar),
            ssh: ssh(&solar) + ssh(&lunar),
        };

        let resonance = resonance_terms(el, c, thgr, &rates);

        DeepSpace {
            thgr,
            xnq,
            omegaq: el.omegao,
            zmos,
            zmol,
            solar: solar.terms,
            lunar: lunar.terms,
            rates,
            resonance,
        }
    }

    pub(super) fn resonance(&self) -> Option<Resonance> {
        self.resonance.as_ref().map(ResonanceTerms::kind)
    }

    /// Secular drag, lunar/solar secular and resonance effects, then lunar/solar periodics.
    pub(super) fn mean_elements(
        &self,
        el: &Elements,
        c: &Common,
        tsince: f64,
    ) -> Result<MeanElements, PropagationError> {
        /* Update for secular gravity and atmospheric drag */
        let xmdf = el.xmo + c.xmdot * tsince;
        let omgadf = el.omegao + c.omgdot * tsince;
        let xnoddf = el.xnodeo + c.xnodot * tsince;
        let tsq = tsince * tsince;
        let xnode = xnoddf + c.xnodcf * tsq;
        let tempa = 1.0 - c.c1 * tsince;
        let tempe = el.bstar * c.c4 * tsince;
        let templ = c.t2cof * tsq;

        /* Update for deep-space secular effects */
        let mut xll = xmdf + self.rates.ssl * tsince;
        let omgadf = omgadf + self.rates.ssg * tsince;
        let xnode = xnode + self.rates.ssh * tsince;
        let em = el.eo + self.rates.sse * tsince;
        /* Left signed until after the periodics */
        let xinc = el.xincl + self.rates.ssi * tsince;

        let mut xn = self.xnq;
        if let Some(res) = &self.resonance {
            let (xni, xl) = self.integrate(res, c.omgdot, tsince);
            xn = xni;
            let temp = -xnode + self.thgr + tsince * THDT;
            xll = match res.coefficients {
                Coefficients::Synchronous { .. } => xl - omgadf + temp,
                Coefficients::HalfDay(_) => xl + temp + temp,
            };
        }

        if xn <= 0.0 {
            return Err(decayed(tsince, "resonance drove mean motion to zero"));
        }
        if tempa <= 0.0 {
            return Err(decayed(tsince, "drag collapsed the semi-major axis"));
        }

        let a = (XKE / xn).powf(TOTHRD) * tempa * tempa;
        let em = guard_eccentricity(em - tempe, tsince)?;
        let xmam = xll + c.xnodp * templ;

        /* Update for deep-space periodic effects */
        let mut p = Perturbed {
            em,
            xinc,
            omgadf,
            xnode,
            xll: xmam,
        };
        self.apply_periodics(&mut p, tsince);

        if p.xinc < 0.0 {
            p.xinc = -p.xinc;
            p.xnode += PI;
            p.omgadf -= PI;
        }
        let e = guard_eccentricity(p.em, tsince)?;

        Ok(MeanElements {
            a,
            e,
            incl: p.xinc,
            omega: p.omgadf,
            xnode: p.xnode,
            xl: p.xll + p.omgadf + p.xnode,
        })
    }

    /// Integrates the resonance equations from epoch to `tsince` in fixed 720 minute steps
    /// followed by a Taylor step over the remainder. Returns mean motion and resonance angle.
    fn integrate(&self, res: &ResonanceTerms, omgdot: f64, tsince: f64) -> (f64, f64) {
        let delt = if tsince >= 0.0 { STEP } else { -STEP };
        let mut atime = 0.0;
        let mut xli = res.xlamo;
        let mut xni = self.xnq;
        let mut steps = 0usize;

        loop {
            let (xndot, xnddt) = res.dot_terms(xli, self.omegaq + omgdot * atime);
            let xldot = xni + res.xfact;
            let xnddt = xnddt * xldot;

            if (tsince - atime).abs() < STEP {
                let ft = tsince - atime;
                trace!("resonance integrated in {} steps, {:.3} min remainder", steps, ft);
                return (
                    xni + xndot * ft + xnddt * ft * ft * 0.5,
                    xli + xldot * ft + xndot * ft * ft * 0.5,
                );
            }

            xli += xldot * delt + xndot * STEP2;
            xni += xndot * delt + xnddt * STEP2;
            atime += delt;
            steps += 1;
        }
    }

    fn apply_periodics(&self, p: &mut Perturbed, tsince: f64) {
        let sun = self.solar.at(self.zmos + ZNS * tsince, ZES);
        let moon = self.lunar.at(self.zmol + ZNL * tsince, ZEL);
        let pe = sun.pe + moon.pe;
        let pinc = sun.pinc + moon.pinc;
        let pl = sun.pl + moon.pl;
        let mut pgh = sun.pgh + moon.pgh;
        let mut ph = sun.ph + moon.ph;

        p.xinc += pinc;
        p.em += pe;
        let (sinis, cosis) = p.xinc.sin_cos();

        if p.xinc >= LYDDANE_INCLINATION {
            /* Apply periodics directly */
            ph /= sinis;
            pgh -= cosis * ph;
            p.omgadf += pgh;
            p.xnode += ph;
            p.xll += pl;
        } else {
            /* Apply periodics with Lyddane modification */
            let (sinok, cosok) = p.xnode.sin_cos();
            let alfdp = sinis * sinok + ph * cosok + pinc * cosis * sinok;
            let betdp = sinis * cosok - ph * sinok + pinc * cosis * cosok;
            p.xnode = fmod2p(p.xnode);
            let xls = p.xll + p.omgadf + cosis * p.xnode + pl + pgh - pinc * p.xnode * sinis;
            let xnoh = p.xnode;
            p.xnode = ac_tan(alfdp, betdp);

            /* Keep the node on the same revolution as before the correction */
            if (xnoh - p.xnode).abs() > PI {
                if p.xnode < xnoh {
                    p.xnode += TWOPI;
                } else {
                    p.xnode -= TWOPI;
                }
            }

            p.xll += pl;
            p.omgadf = xls - p.xll - cosis * p.xnode;
        }
    }
}

/// Elements being carried through the lunar/solar periodic corrections.
#[derive(Debug, Clone, Copy)]
struct Perturbed {
    em: f64,
    xinc: f64,
    omgadf: f64,
    xnode: f64,
    xll: f64,
}

/// Secular rates and periodic amplitudes induced by one perturbing body.
#[allow(clippy::too_many_arguments)]
fn third_body(
    g: &Geometry,
    cc: f64,
    zn: f64,
    ze: f64,
    el: &Elements,
    c: &Common,
    xnoi: f64,
    low_inclination: bool,
) -> ThirdBody {
    let (sing, cosg) = el.omegao.sin_cos();
    let eosq = c.eosq;

    let a1 = g.zcosg * g.zcosh + g.zsing * g.zcosi * g.zsinh;
    let a3 = -g.zsing * g.zcosh + g.zcosg * g.zcosi * g.zsinh;
    let a7 = -g.zcosg * g.zsinh + g.zsing * g.zcosi * g.zcosh;
    let a8 = g.zsing * g.zsini;
    let a9 = g.zsing * g.zsinh + g.zcosg * g.zcosi * g.zcosh;
    let a10 = g.zcosg * g.zsini;
    let a2 = c.cosio * a7 + c.sinio * a8;
    let a4 = c.cosio * a9 + c.sinio * a10;
    let a5 = -c.sinio * a7 + c.cosio * a8;
    let a6 = -c.sinio * a9 + c.cosio * a10;
    let x1 = a1 * cosg + a2 * sing;
    let x2 = a3 * cosg + a4 * sing;
    let x3 = -a1 * sing + a2 * cosg;
    let x4 = -a3 * sing + a4 * cosg;
    let x5 = a5 * sing;
    let x6 = a6 * sing;
    let x7 = a5 * cosg;
    let x8 = a6 * cosg;
    let z31 = 12.0 * x1 * x1 - 3.0 * x3 * x3;
    let z32 = 24.0 * x1 * x2 - 6.0 * x3 * x4;
    let z33 = 12.0 * x2 * x2 - 3.0 * x4 * x4;
    let z1 = 3.0 * (a1 * a1 + a2 * a2) + z31 * eosq;
    let z2 = 6.0 * (a1 * a3 + a2 * a4) + z32 * eosq;
    let z3 = 3.0 * (a3 * a3 + a4 * a4) + z33 * eosq;
    let z11 = -6.0 * a1 * a5 + eosq * (-24.0 * x1 * x7 - 6.0 * x3 * x5);
    let z12 = -6.0 * (a1 * a6 + a3 * a5)
        + eosq * (-24.0 * (x2 * x7 + x1 * x8) - 6.0 * (x3 * x6 + x4 * x5));
    let z13 = -6.0 * a3 * a6 + eosq * (-24.0 * x2 * x8 - 6.0 * x4 * x6);
    let z21 = 6.0 * a2 * a5 + eosq * (24.0 * x1 * x5 - 6.0 * x3 * x7);
    let z22 =
        6.0 * (a4 * a5 + a2 * a6) + eosq * (24.0 * (x2 * x5 + x1 * x6) - 6.0 * (x4 * x7 + x3 * x8));
    let z23 = 6.0 * a4 * a6 + eosq * (24.0 * x2 * x6 - 6.0 * x4 * x8);
    let z1 = z1 + z1 + c.betao2 * z31;
    let z2 = z2 + z2 + c.betao2 * z32;
    let z3 = z3 + z3 + c.betao2 * z33;
    let s3 = cc * xnoi;
    let s2 = -0.5 * s3 / c.betao;
    let s4 = s3 * c.betao;
    let s1 = -15.0 * el.eo * s4;
    let s5 = x1 * x3 + x2 * x4;
    let s6 = x2 * x3 + x1 * x4;
    let s7 = x2 * x4 - x1 * x3;

    ThirdBody {
        se: s1 * zn * s5,
        si: s2 * zn * (z11 + z13),
        sl: -zn * s3 * (z1 + z3 - 14.0 - 6.0 * eosq),
        sgh: s4 * zn * (z31 + z33 - 6.0),
        sh: if low_inclination {
            0.0
        } else {
            -zn * s2 * (z21 + z23)
        },
        terms: PeriodicTerms {
            e2: 2.0 * s1 * s6,
            e3: 2.0 * s1 * s7,
            i2: 2.0 * s2 * z12,
            i3: 2.0 * s2 * (z13 - z11),
            l2: -2.0 * s3 * z2,
            l3: -2.0 * s3 * (z3 - z1),
            l4: -2.0 * s3 * (-21.0 - 9.0 * eosq) * ze,
            gh2: 2.0 * s4 * z32,
            gh3: 2.0 * s4 * (z33 - z31),
            gh4: -18.0 * s4 * ze,
            h2: -2.0 * s2 * z22,
            h3: -2.0 * s2 * (z23 - z21),
        },
    }
}

/// Geopotential resonance set-up for 24 hour and eccentric 12 hour orbits.
fn resonance_terms(
    el: &Elements,
    c: &Common,
    thgr: f64,
    rates: &SecularRates,
) -> Option<ResonanceTerms> {
    let xnq = c.xnodp;
    let eq = el.eo;
    let aqnv = 1.0 / c.aodp;
    let eosq = c.eosq;
    let (cosio, sinio, theta2) = (c.cosio, c.sinio, c.theta2);

    let (coefficients, xlamo, bfact) = if xnq > SYNC_XN_MIN && xnq < SYNC_XN_MAX {
        /* Synchronous resonance terms initialization */
        let g200 = 1.0 + eosq * (-2.5 + 0.8125 * eosq);
        let g310 = 1.0 + 2.0 * eosq;
        let g300 = 1.0 + eosq * (-6.0 + 6.60937 * eosq);
        let f220 = 0.75 * (1.0 + cosio) * (1.0 + cosio);
        let f311 = 0.9375 * sinio * sinio * (1.0 + 3.0 * cosio) - 0.75 * (1.0 + cosio);
        let f330 = 1.875 * (1.0 + cosio).powi(3);
        let del1 = 3.0 * xnq * xnq * aqnv * aqnv;
        let coefficients = Coefficients::Synchronous {
            del1: del1 * f311 * g310 * Q31 * aqnv,
            del2: 2.0 * del1 * f220 * g200 * Q22,
            del3: 3.0 * del1 * f330 * g300 * Q33 * aqnv,
        };
        let xpidot = c.omgdot + c.xnodot;
        (
            coefficients,
            el.xmo + el.xnodeo + el.omegao - thgr,
            c.xmdot + xpidot - THDT + rates.ssl + rates.ssg + rates.ssh,
        )
    } else if (HALF_DAY_XN_MIN..=HALF_DAY_XN_MAX).contains(&xnq) && eq >= HALF_DAY_MIN_ECC {
        /* Geopotential resonance initialization for 12 hour orbits */
        let eoc = eq * eosq;
        let g201 = -0.306 - (eq - 0.64) * 0.440;
        let (g211, g310, g322, g410, g422, g520);
        if eq <= 0.65 {
            g211 = 3.616 - 13.247 * eq + 16.290 * eosq;
            g310 = -19.302 + 117.390 * eq - 228.419 * eosq + 156.591 * eoc;
            g322 = -18.9068 + 109.7927 * eq - 214.6334 * eosq + 146.5816 * eoc;
            g410 = -41.122 + 242.694 * eq - 471.094 * eosq + 313.953 * eoc;
            g422 = -146.407 + 841.880 * eq - 1629.014 * eosq + 1083.435 * eoc;
            g520 = -532.114 + 3017.977 * eq - 5740.0 * eosq + 3708.276 * eoc;
        } else {
            g211 = -72.099 + 331.819 * eq - 508.738 * eosq + 266.724 * eoc;
            g310 = -346.844 + 1582.851 * eq - 2415.925 * eosq + 1246.113 * eoc;
            g322 = -342.585 + 1554.908 * eq - 2366.899 * eosq + 1215.972 * eoc;
            g410 = -1052.797 + 4758.686 * eq - 7193.992 * eosq + 3651.957 * eoc;
            g422 = -3581.69 + 16178.11 * eq - 24462.77 * eosq + 12422.52 * eoc;
            g520 = if eq <= 0.715 {
                1464.74 - 4664.75 * eq + 3763.64 * eosq
            } else {
                -5149.66 + 29936.92 * eq - 54087.36 * eosq + 31324.56 * eoc
            };
        }

        let (g533, g521, g532) = if eq < 0.7 {
            (
                -919.2277 + 4988.61 * eq - 9064.77 * eosq + 5542.21 * eoc,
                -822.71072 + 4568.6173 * eq - 8491.4146 * eosq + 5337.524 * eoc,
                -853.666 + 4690.25 * eq - 8624.77 * eosq + 5341.4 * eoc,
            )
        } else {
            (
                -37995.78 + 161616.52 * eq - 229838.2 * eosq + 109377.94 * eoc,
                -51752.104 + 218913.95 * eq - 309468.16 * eosq + 146349.42 * eoc,
                -40023.88 + 170470.89 * eq - 242699.48 * eosq + 115605.82 * eoc,
            )
        };

        let sini2 = sinio * sinio;
        let f220 = 0.75 * (1.0 + 2.0 * cosio + theta2);
        let f221 = 1.5 * sini2;
        let f321 = 1.875 * sinio * (1.0 - 2.0 * cosio - 3.0 * theta2);
        let f322 = -1.875 * sinio * (1.0 + 2.0 * cosio - 3.0 * theta2);
        let f441 = 35.0 * sini2 * f220;
        let f442 = 39.3750 * sini2 * sini2;
        let f522 = 9.84375
            * sinio
            * (sini2 * (1.0 - 2.0 * cosio - 5.0 * theta2)
                + 0.33333333 * (-2.0 + 4.0 * cosio + 6.0 * theta2));
        let f523 = sinio
            * (4.92187512 * sini2 * (-2.0 - 4.0 * cosio + 10.0 * theta2)
                + 6.56250012 * (1.0 + 2.0 * cosio - 3.0 * theta2));
        let f542 = 29.53125 * sinio * (2.0 - 8.0 * cosio + theta2 * (-12.0 + 8.0 * cosio + 10.0 * theta2));
        let f543 = 29.53125 * sinio * (-2.0 - 8.0 * cosio + theta2 * (12.0 + 8.0 * cosio - 10.0 * theta2));

        let xno2 = xnq * xnq;
        let ainv2 = aqnv * aqnv;
        let mut temp1 = 3.0 * xno2 * ainv2;
        let mut temp = temp1 * ROOT22;
        let d2201 = temp * f220 * g201;
        let d2211 = temp * f221 * g211;
        temp1 *= aqnv;
        temp = temp1 * ROOT32;
        let d3210 = temp * f321 * g310;
        let d3222 = temp * f322 * g322;
        temp1 *= aqnv;
        temp = 2.0 * temp1 * ROOT44;
        let d4410 = temp * f441 * g410;
        let d4422 = temp * f442 * g422;
        temp1 *= aqnv;
        temp = temp1 * ROOT52;
        let d5220 = temp * f522 * g520;
        let d5232 = temp * f523 * g532;
        temp = 2.0 * temp1 * ROOT54;
        let d5421 = temp * f542 * g521;
        let d5433 = temp * f543 * g533;

        (
            Coefficients::HalfDay(HalfDayTerms {
                d2201,
                d2211,
                d3210,
                d3222,
                d4410,
                d4422,
                d5220,
                d5232,
                d5421,
                d5433,
            }),
            el.xmo + el.xnodeo + el.xnodeo - thgr - thgr,
            c.xmdot + c.xnodot + c.xnodot - THDT - THDT + rates.ssl + rates.ssh + rates.ssh,
        )
    } else {
        return None;
    };

    Some(ResonanceTerms {
        coefficients,
        xlamo,
        xfact: bfact - xnq,
    })
}

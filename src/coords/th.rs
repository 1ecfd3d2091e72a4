use super::azel::AzElVector;
use crate::sgpsdp::math::ac_tan;

/// Topocentric-horizon (south, east, zenith) components, kilometres.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TopographicHorizonVector {
    pub s: f64,
    pub e: f64,
    pub z: f64,
}

impl TopographicHorizonVector {
    /// Azimuth (clockwise from north) and elevation; `range_rate` is carried through.
    pub fn to_azel(self, range_rate: f64) -> AzElVector {
        let range = (self.s * self.s + self.e * self.e + self.z * self.z).sqrt();
        let el = (self.z / range).asin();
        let az = ac_tan(self.e, -self.s);
        AzElVector {
            az,
            el,
            range,
            range_rate,
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use std::f64::consts::{FRAC_PI_2, FRAC_PI_4, PI};

    #[test]
    fn compass_points() {
        let north = TopographicHorizonVector { s: -1.0, e: 0.0, z: 0.0 }.to_azel(0.0);
        assert_approx_eq!(north.az, 0.0);
        let east = TopographicHorizonVector { s: 0.0, e: 1.0, z: 0.0 }.to_azel(0.0);
        assert_approx_eq!(east.az, FRAC_PI_2);
        let south = TopographicHorizonVector { s: 1.0, e: 0.0, z: 0.0 }.to_azel(0.0);
        assert_approx_eq!(south.az, PI);
        let west = TopographicHorizonVector { s: 0.0, e: -1.0, z: 1.0 }.to_azel(-2.0);
        assert_approx_eq!(west.az, 1.5 * PI);
        assert_approx_eq!(west.el, FRAC_PI_4);
        assert_approx_eq!(west.range, 2f64.sqrt());
        assert_eq!(west.range_rate, -2.0);
    }
}

use super::eci::{ECIVector, EarthCenteredInertial};
use crate::sgpsdp::math::fmod2p;
use crate::sgpsdp::vals::{OMEGA_E, XKMPER, __F};

/// Geodetic coordinates on the WGS-72 ellipsoid in radians and kilometres.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Geodetic {
    pub lat: f64,
    pub lon: f64,
    pub alt: f64,
}

/// Geodetic coordinates in degrees, with altitude in metres.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LatitudeLongitude {
    pub lat: f64,
    pub long: f64,
    pub alt: f64,
}

impl From<Geodetic> for LatitudeLongitude {
    fn from(g: Geodetic) -> Self {
        LatitudeLongitude {
            lat: g.lat.to_degrees(),
            long: g.lon.to_degrees(),
            alt: g.alt * 1000.0,
        }
    }
}

impl From<LatitudeLongitude> for Geodetic {
    fn from(l: LatitudeLongitude) -> Self {
        Geodetic {
            lat: l.lat.to_radians(),
            lon: l.long.to_radians(),
            alt: l.alt / 1000.0,
        }
    }
}

impl Geodetic {
    /// Inertial position and velocity (km, km/s) of a point fixed to the rotating earth.
    pub fn to_eci(self, gmst: f64) -> (EarthCenteredInertial, ECIVector) {
        // Adapted from https://celestrak.com/columns/v02n03/
        let theta = fmod2p(gmst + self.lon);
        let (sin_lat, cos_lat) = self.lat.sin_cos();
        let c = 1.0 / (1.0 + __F * (__F - 2.0) * sin_lat * sin_lat).sqrt();
        let sq = (1.0 - __F) * (1.0 - __F) * c;
        let achcp = (XKMPER * c + self.alt) * cos_lat;
        let (sin_theta, cos_theta) = theta.sin_cos();
        let pos = EarthCenteredInertial::new(
            achcp * cos_theta,
            achcp * sin_theta,
            (XKMPER * sq + self.alt) * sin_lat,
        );
        let vel = ECIVector::new(-OMEGA_E * pos.y, OMEGA_E * pos.x, 0.0);
        (pos, vel)
    }
}

impl LatitudeLongitude {
    pub fn new(lat: f64, long: f64, alt: f64) -> LatitudeLongitude {
        LatitudeLongitude { lat, long, alt }
    }

    /// Inertial position of this point at `now`, in kilometres.
    pub fn to_eci(self, now: chrono::DateTime<chrono::Utc>) -> EarthCenteredInertial {
        Geodetic::from(self).to_eci(crate::time::gmst(now)).0
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn latlong_to_eci() {
        let date = chrono::Utc.with_ymd_and_hms(1995, 10, 1, 9, 0, 0).unwrap();
        let lla = LatitudeLongitude::new(40.0, -75.0, 0.0);

        let EarthCenteredInertial { x, y, z } = lla.to_eci(date);
        assert_approx_eq!(x, 1703.296, 0.01);
        assert_approx_eq!(y, 4586.650, 0.01);
        assert_approx_eq!(z, 4077.984, 0.01);
    }

    #[test]
    fn ground_velocity() {
        let (pos, vel) = Geodetic {
            lat: 0.0,
            lon: 0.0,
            alt: 0.0,
        }
        .to_eci(0.0);
        assert_approx_eq!(pos.x, XKMPER);
        assert_approx_eq!(vel.y, 0.465, 1e-3);
        assert_eq!(vel.z, 0.0);
    }

    #[test]
    fn boundary_units() {
        let l = LatitudeLongitude::from(Geodetic {
            lat: -std::f64::consts::FRAC_PI_4,
            lon: std::f64::consts::PI,
            alt: 0.42,
        });
        assert_approx_eq!(l.lat, -45.0);
        assert_approx_eq!(l.long, 180.0);
        assert_approx_eq!(l.alt, 420.0);
    }
}

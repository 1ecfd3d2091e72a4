use super::latlong::{Geodetic, LatitudeLongitude};
use super::th::TopographicHorizonVector;
use crate::error::{PropagationError, Solver};
use crate::sgpsdp::math::{ac_tan, wrap_neg_pos_pi};
use crate::sgpsdp::vals::{GEODETIC_MAX_ITER, GEODETIC_TOLERANCE, PI, XKMPER, __F};

/// A point in the earth-centred inertial (TEME) frame, kilometres.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EarthCenteredInertial {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

/// A displacement or velocity in the inertial frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ECIVector {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl ECIVector {
    pub fn new(x: f64, y: f64, z: f64) -> ECIVector {
        ECIVector { x, y, z }
    }

    pub fn magnitude(&self) -> f64 {
        self.dot(self).sqrt()
    }

    pub fn dot(&self, other: &ECIVector) -> f64 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    /// Rotates the vector into the observer's south/east/zenith frame, given Greenwich mean
    /// sidereal time in radians.
    pub fn to_topo_horiz(self, ob: &LatitudeLongitude, gmst: f64) -> TopographicHorizonVector {
        /* Local sidereal time */
        let theta = gmst + ob.long.to_radians();
        let phi = ob.lat.to_radians();
        let (sin_theta, cos_theta) = theta.sin_cos();
        let (sin_phi, cos_phi) = phi.sin_cos();
        let s = sin_phi * cos_theta * self.x + sin_phi * sin_theta * self.y - cos_phi * self.z;
        let e = -sin_theta * self.x + cos_theta * self.y;
        let z = cos_phi * cos_theta * self.x + cos_phi * sin_theta * self.y + sin_phi * self.z;
        TopographicHorizonVector { s, e, z }
    }
}

impl EarthCenteredInertial {
    pub fn new(x: f64, y: f64, z: f64) -> EarthCenteredInertial {
        EarthCenteredInertial { x, y, z }
    }

    /// Distance from the centre of the earth.
    pub fn radius(&self) -> f64 {
        (self.x * self.x + self.y * self.y + self.z * self.z).sqrt()
    }

    /// Geodetic latitude, longitude and height above the WGS-72 ellipsoid.
    ///
    /// Latitude is solved iteratively; longitude is wrapped to (-π, π].
    pub fn to_geodetic(&self, gmst: f64) -> Result<Geodetic, PropagationError> {
        // Adapted from https://celestrak.com/columns/v02n03/
        let theta = ac_tan(self.y, self.x);
        let lon = wrap_neg_pos_pi(theta - gmst);
        let r = (self.x * self.x + self.y * self.y).sqrt();
        let e2 = __F * (2.0 - __F);

        let mut lat = self.z.atan2(r);
        let mut c = 1.0;
        let mut converged = false;
        for _ in 0..GEODETIC_MAX_ITER {
            let phi = lat;
            let sin_phi = phi.sin();
            c = 1.0 / (1.0 - e2 * sin_phi * sin_phi).sqrt();
            lat = (self.z + XKMPER * c * e2 * sin_phi).atan2(r);
            if (lat - phi).abs() < GEODETIC_TOLERANCE {
                converged = true;
                break;
            }
        }
        if !converged {
            return Err(PropagationError::ConvergenceFailure {
                solver: Solver::Geodetic,
                iterations: GEODETIC_MAX_ITER,
            });
        }

        /* r / cos(lat) is ill-conditioned near the poles */
        let alt = if lat.abs() < PI / 4.0 {
            r / lat.cos() - XKMPER * c
        } else {
            self.z / lat.sin() - XKMPER * c * (1.0 - e2)
        };

        Ok(Geodetic { lat, lon, alt })
    }
}

impl std::ops::Sub for EarthCenteredInertial {
    type Output = ECIVector;
    fn sub(self, other: EarthCenteredInertial) -> ECIVector {
        ECIVector {
            x: self.x - other.x,
            y: self.y - other.y,
            z: self.z - other.z,
        }
    }
}

impl std::ops::Sub for ECIVector {
    type Output = ECIVector;
    fn sub(self, other: ECIVector) -> ECIVector {
        ECIVector {
            x: self.x - other.x,
            y: self.y - other.y,
            z: self.z - other.z,
        }
    }
}

pub mod azel;
pub mod eci;
pub mod latlong;
pub mod th;

pub use eci::EarthCenteredInertial;

use crate::sgpsdp::StateVector;

/// Azimuth, elevation, range and range rate of a propagated satellite seen from `obs`.
pub fn calculate_look(
    state: &StateVector,
    obs: latlong::LatitudeLongitude,
    date: chrono::DateTime<chrono::Utc>,
) -> azel::AzElVector {
    let gmst = crate::time::gmst(date);
    let (obs_pos, obs_vel) = latlong::Geodetic::from(obs).to_eci(gmst);
    let range = state.position - obs_pos;
    let rate = state.velocity - obs_vel;
    let range_rate = range.dot(&rate) / range.magnitude();
    range.to_topo_horiz(&obs, gmst).to_azel(range_rate)
}

//! Satellite position prediction from NORAD two-line element sets.
//!
//! Element sets are parsed by [`tle::TLE`], classified into the near-earth (SGP4) or
//! deep-space (SDP4) regime and propagated by [`sgpsdp::Propagator`]. The resulting TEME
//! state vector can be converted into geodetic coordinates on the WGS-72 ellipsoid or into
//! look angles for a ground observer.
//!
//! ```no_run
//! let line1 = "1 25544U 98067A   20148.21301450  .00001715  00000-0  38778-4 0  9992";
//! let line2 = "2 25544  51.6435  92.2789 0002570 358.0648 144.9972 15.49396855228767";
//! let pos = sat_predict::propagate(line1, line2, 90.0)?;
//! println!("{:.3} {:.3} {:.0}", pos.lat, pos.long, pos.alt);
//! # Ok::<(), sat_predict::Error>(())
//! ```

#[cfg(test)]
#[macro_use]
extern crate assert_approx_eq;

pub mod coords;
mod error;
pub mod sat;
pub mod sgpsdp;
pub mod time;
pub mod tle;

pub use coords::latlong::LatitudeLongitude;
pub use error::{Error, ParseError, PropagationError, Solver};
pub use sat::Satellite;
pub use sgpsdp::{Propagator, Regime, StateVector};
pub use tle::TLE;

/// Parses the two element lines and returns the sub-satellite point `minutes_since_epoch`
/// minutes after the element set epoch.
///
/// Latitude and longitude are in degrees, altitude in metres above the WGS-72 ellipsoid.
/// Callers propagating the same element set repeatedly should build a [`Satellite`] once
/// instead.
pub fn propagate(
    line1: &str,
    line2: &str,
    minutes_since_epoch: f64,
) -> Result<LatitudeLongitude, Error> {
    let sat = Satellite::from_lines(line1, line2)?;
    Ok(sat.geodetic(minutes_since_epoch)?)
}

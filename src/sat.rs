use chrono::{DateTime, Utc};

use crate::coords::azel::AzElVector;
use crate::coords::latlong::LatitudeLongitude;
use crate::error::Error;
use crate::sgpsdp::{Propagator, Regime, StateVector};
use crate::tle::TLE;

/// An element set paired with its propagator.
///
/// Parsing and initialisation happen once; every query afterwards takes `&self`, so a
/// `Satellite` can be cached and shared between threads.
#[derive(Debug, Clone)]
pub struct Satellite {
    tle: TLE,
    propagator: Propagator,
}

impl Satellite {
    pub fn new(tle: TLE) -> Result<Satellite, Error> {
        let propagator = Propagator::new(&tle)?;
        Ok(Satellite { tle, propagator })
    }

    pub fn from_lines(line1: &str, line2: &str) -> Result<Satellite, Error> {
        Satellite::new(TLE::from_lines(line1, line2)?)
    }

    /// Parses a two or three line element set.
    pub fn from_tle(t: &str) -> Result<Satellite, Error> {
        Satellite::new(TLE::parse(t)?)
    }

    pub fn tle(&self) -> &TLE {
        &self.tle
    }

    pub fn propagator(&self) -> &Propagator {
        &self.propagator
    }

    pub fn regime(&self) -> Regime {
        self.propagator.regime()
    }

    /// Minutes from the element set epoch to `date`.
    pub fn minutes_since_epoch(&self, date: DateTime<Utc>) -> f64 {
        (crate::time::julian_date(date) - self.propagator.epoch_jd()) * 24.0 * 60.0
    }

    pub fn propagate(&self, minutes_since_epoch: f64) -> Result<StateVector, Error> {
        Ok(self.propagator.propagate(minutes_since_epoch)?)
    }

    /// Sub-satellite point and altitude `minutes_since_epoch` after epoch.
    pub fn geodetic(&self, minutes_since_epoch: f64) -> Result<LatitudeLongitude, Error> {
        let state = self.propagator.propagate(minutes_since_epoch)?;
        let jd = self.propagator.epoch_jd() + minutes_since_epoch / 1440.0;
        let g = state.position.to_geodetic(crate::time::gmst_jd(jd))?;
        Ok(LatitudeLongitude::from(g))
    }

    pub fn predict(&self, date: DateTime<Utc>) -> Result<StateVector, Error> {
        self.propagate(self.minutes_since_epoch(date))
    }

    pub fn position_at(&self, date: DateTime<Utc>) -> Result<LatitudeLongitude, Error> {
        self.geodetic(self.minutes_since_epoch(date))
    }

    /// Look angles from `observer` at `date`.
    pub fn look(&self, observer: LatitudeLongitude, date: DateTime<Utc>) -> Result<AzElVector, Error> {
        let state = self.predict(date)?;
        Ok(crate::coords::calculate_look(&state, observer, date))
    }
}

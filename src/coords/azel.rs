/// Look angles from an observer: azimuth and elevation in radians, range in km, range rate
/// in km/s (positive when receding).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AzElVector {
    pub az: f64,
    pub el: f64,
    pub range: f64,
    pub range_rate: f64,
}

impl AzElVector {
    pub fn az_degrees(&self) -> f64 {
        self.az.to_degrees()
    }

    pub fn el_degrees(&self) -> f64 {
        self.el.to_degrees()
    }

    /// Above the observer's geometric horizon.
    pub fn is_visible(&self) -> bool {
        self.el > 0.0
    }
}

use std::fmt;

use thiserror::Error;

/// Reasons a two-line element set is rejected.
///
/// Lines are numbered 1 and 2 as in the element set; columns are 1-based and inclusive, the
/// way the NORAD format documents them.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParseError {
    #[error("line {line} is {len} characters long, expected 69")]
    Length { line: u8, len: usize },

    #[error("line {line} starts with {found:?}, expected '{line}'")]
    LineNumber { line: u8, found: char },

    #[error("line {line} checksum mismatch: computed {computed}, found {found:?}")]
    Checksum { line: u8, computed: u32, found: char },

    #[error("line {line} columns {start}-{end} ({field}): cannot parse {text:?}")]
    Field {
        line: u8,
        field: &'static str,
        start: usize,
        end: usize,
        text: String,
    },

    #[error("{field} out of range: {value}")]
    OutOfRange { field: &'static str, value: f64 },

    #[error("satellite number mismatch: line 1 has {0}, line 2 has {1}")]
    SatelliteNumber(u32, u32),

    #[error("expected two or three lines, got {0}")]
    LineCount(usize),

    #[error("line {0} contains non-ASCII characters")]
    NonAscii(u8),
}

/// Iterative solvers that can fail to converge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Solver {
    Kepler,
    Geodetic,
}

impl fmt::Display for Solver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Solver::Kepler => write!(f, "Kepler's equation"),
            Solver::Geodetic => write!(f, "geodetic latitude"),
        }
    }
}

/// Failures of a single propagation. None of them is transient: propagating the same
/// element set to the same time reproduces the same error.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum PropagationError {
    /// Drag has driven the orbit out of the model's domain, or below the surface.
    #[error("orbit decayed {tsince:.3} minutes from epoch: {cause}")]
    DecayedOrbit { tsince: f64, cause: &'static str },

    #[error("{solver} did not converge within {iterations} iterations")]
    ConvergenceFailure { solver: Solver, iterations: usize },

    #[error("eccentricity {0} is too close to parabolic")]
    NearParabolic(f64),

    #[error("elapsed time {0} is not finite or out of range")]
    InvalidTime(f64),
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Propagation(#[from] PropagationError),
}

use std::ops::RangeInclusive;
use std::str::FromStr;

use chrono::{DateTime, Duration, NaiveDate, TimeZone, Utc};

use crate::error::ParseError;
use crate::sgpsdp::vals::*;

const LINE_LEN: usize = 69;

/// A parsed two-line element set.
///
/// The mean elements are kept in the units the propagator works in (radians, radians per
/// minute, earth radii); the accessors convert back to the units printed in the element set.
#[derive(Debug, Clone, PartialEq)]
pub struct TLE {
    name: Option<String>,
    sat_num: u32,
    class: char,
    desig: String,
    epoch_year: i32,
    epoch_day: f64,
    epoch: DateTime<Utc>,
    elset: u32,
    rev_num: u32,
    checksums: [u8; 2],

    pub(crate) xno: f64,
    pub(crate) xndt2o: f64,
    pub(crate) xndd6o: f64,
    pub(crate) bstar: f64,
    pub(crate) xincl: f64,
    pub(crate) xnodeo: f64,
    pub(crate) eo: f64,
    pub(crate) omegao: f64,
    pub(crate) xmo: f64,
}

impl TLE {
    /// Parses an element set from a block of text holding the two element lines, optionally
    /// preceded by a name line (with or without the `0 ` prefix used by 3LE files).
    pub fn parse(s: &str) -> Result<TLE, ParseError> {
        let lines: Vec<&str> = s
            .lines()
            .map(str::trim_end)
            .filter(|l| !l.is_empty())
            .collect();

        match lines.as_slice() {
            [line1, line2] => TLE::from_lines(line1, line2),
            [name, line1, line2] => {
                let name = name.strip_prefix("0 ").unwrap_or(name).trim();
                let tle = TLE::from_lines(line1, line2)?;
                Ok(TLE {
                    name: (!name.is_empty()).then(|| name.to_owned()),
                    ..tle
                })
            }
            _ => Err(ParseError::LineCount(lines.len())),
        }
    }

    /// Parses and validates the two 69-column element lines.
    pub fn from_lines(line1: &str, line2: &str) -> Result<TLE, ParseError> {
        let line1 = line1.trim_end();
        let line2 = line2.trim_end();
        let checksums = [validate_line(line1, 1)?, validate_line(line2, 2)?];

        let sat_num = parse_sat_num(line1, 1)?;
        let sat_num2 = parse_sat_num(line2, 2)?;
        if sat_num != sat_num2 {
            return Err(ParseError::SatelliteNumber(sat_num, sat_num2));
        }

        let class = line1.as_bytes()[7] as char;
        let desig = column(line1, 10, 17).trim().to_owned();

        /* Two digit years: 57-99 are 1957-1999, 00-56 are 2000-2056 */
        let year: i32 = parse_field(line1, 1, "epoch year", 19, 20)?;
        let epoch_year = if year < 57 { year + 2000 } else { year + 1900 };
        let epoch_day = parse_f64(line1, 1, "epoch day", 21, 32)?;
        check_range("epoch day", epoch_day, 1.0..=days_in_year(epoch_year) + 0.99999999)?;
        let epoch = epoch_datetime(epoch_year, epoch_day).ok_or(ParseError::OutOfRange {
            field: "epoch day",
            value: epoch_day,
        })?;

        let ndot = parse_f64(line1, 1, "first derivative of mean motion", 34, 43)?;
        let nddot = parse_exponent(line1, 1, "second derivative of mean motion", 45, 52)?;
        let bstar = parse_exponent(line1, 1, "drag term", 54, 61)?;
        let elset = parse_count(line1, 1, "element set number", 65, 68)?;

        let xincl = parse_f64(line2, 2, "inclination", 9, 16)?;
        check_range("inclination", xincl, 0.0..=180.0)?;
        let xnodeo = parse_f64(line2, 2, "right ascension of ascending node", 18, 25)?;
        check_range("right ascension of ascending node", xnodeo, 0.0..=360.0)?;
        let eo = parse_eccentricity(line2)?;
        let omegao = parse_f64(line2, 2, "argument of perigee", 35, 42)?;
        check_range("argument of perigee", omegao, 0.0..=360.0)?;
        let xmo = parse_f64(line2, 2, "mean anomaly", 44, 51)?;
        check_range("mean anomaly", xmo, 0.0..=360.0)?;
        let xno = parse_f64(line2, 2, "mean motion", 53, 63)?;
        if xno <= 0.0 {
            return Err(ParseError::OutOfRange {
                field: "mean motion",
                value: xno,
            });
        }
        let rev_num = parse_count(line2, 2, "revolution number", 64, 68)?;

        /* Convert to radians and radians per minute */
        let temp = TWOPI / XMNPDA / XMNPDA;
        Ok(TLE {
            name: None,
            sat_num,
            class,
            desig,
            epoch_year,
            epoch_day,
            epoch,
            elset,
            rev_num,
            checksums,
            xno: xno * temp * XMNPDA,
            xndt2o: ndot * temp,
            xndd6o: nddot * temp / XMNPDA,
            bstar: bstar / AE,
            xincl: xincl.to_radians(),
            xnodeo: xnodeo.to_radians(),
            eo,
            omegao: omegao.to_radians(),
            xmo: xmo.to_radians(),
        })
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn sat_num(&self) -> u32 {
        self.sat_num
    }

    pub fn classification(&self) -> char {
        self.class
    }

    pub fn designator(&self) -> &str {
        &self.desig
    }

    pub fn element_set(&self) -> u32 {
        self.elset
    }

    pub fn revolution(&self) -> u32 {
        self.rev_num
    }

    /// Checksum digits in column 69 of line 1 and line 2.
    pub fn checksums(&self) -> [u8; 2] {
        self.checksums
    }

    pub fn epoch_year(&self) -> i32 {
        self.epoch_year
    }

    /// Fractional day of year, 1.0 being 00:00 UTC on January 1st.
    pub fn epoch_day(&self) -> f64 {
        self.epoch_day
    }

    pub fn epoch_jd(&self) -> f64 {
        crate::time::julian_date_of_year(self.epoch_year) + self.epoch_day
    }

    pub fn epoch_datetime(&self) -> DateTime<Utc> {
        self.epoch
    }

    /// Mean motion in revolutions per day.
    pub fn mean_motion(&self) -> f64 {
        self.xno * XMNPDA / TWOPI
    }

    /// First time derivative of mean motion divided by two, revolutions per day squared.
    pub fn mean_motion_dot(&self) -> f64 {
        self.xndt2o * XMNPDA * XMNPDA / TWOPI
    }

    /// Second time derivative of mean motion divided by six, revolutions per day cubed.
    pub fn mean_motion_ddot(&self) -> f64 {
        self.xndd6o * XMNPDA * XMNPDA * XMNPDA / TWOPI
    }

    pub fn bstar(&self) -> f64 {
        self.bstar * AE
    }

    /// Inclination in degrees.
    pub fn inclination(&self) -> f64 {
        self.xincl.to_degrees()
    }

    /// Right ascension of the ascending node in degrees.
    pub fn right_ascension(&self) -> f64 {
        self.xnodeo.to_degrees()
    }

    pub fn eccentricity(&self) -> f64 {
        self.eo
    }

    /// Argument of perigee in degrees.
    pub fn argument_of_perigee(&self) -> f64 {
        self.omegao.to_degrees()
    }

    /// Mean anomaly in degrees.
    pub fn mean_anomaly(&self) -> f64 {
        self.xmo.to_degrees()
    }
}

/// Modulo 10 checksum of the first 68 columns of an element line: digits count their
/// value, minus signs count one, everything else counts zero.
pub fn checksum(line: &str) -> u32 {
    line.bytes()
        .take(LINE_LEN - 1)
        .map(|b| match b {
            b'0'..=b'9' => (b - b'0') as u32,
            b'-' => 1,
            _ => 0,
        })
        .sum::<u32>()
        % 10
}

/// Checks layout and checksum, returning the checksum digit.
fn validate_line(line: &str, number: u8) -> Result<u8, ParseError> {
    if !line.is_ascii() {
        return Err(ParseError::NonAscii(number));
    }
    if line.len() != LINE_LEN {
        return Err(ParseError::Length {
            line: number,
            len: line.len(),
        });
    }

    let bytes = line.as_bytes();
    if bytes[0] != b'0' + number {
        return Err(ParseError::LineNumber {
            line: number,
            found: bytes[0] as char,
        });
    }

    let found = bytes[LINE_LEN - 1] as char;
    let computed = checksum(line);
    if found.to_digit(10) != Some(computed) {
        return Err(ParseError::Checksum {
            line: number,
            computed,
            found,
        });
    }
    Ok(computed as u8)
}

/// 1-based inclusive column range, the way the format is documented.
fn column(line: &str, start: usize, end: usize) -> &str {
    &line[start - 1..end]
}

fn field_error(line: &str, number: u8, field: &'static str, start: usize, end: usize) -> ParseError {
    ParseError::Field {
        line: number,
        field,
        start,
        end,
        text: column(line, start, end).to_owned(),
    }
}

fn parse_field<T: FromStr>(
    line: &str,
    number: u8,
    field: &'static str,
    start: usize,
    end: usize,
) -> Result<T, ParseError> {
    column(line, start, end)
        .trim()
        .parse()
        .map_err(|_| field_error(line, number, field, start, end))
}

fn parse_f64(
    line: &str,
    number: u8,
    field: &'static str,
    start: usize,
    end: usize,
) -> Result<f64, ParseError> {
    let value: f64 = parse_field(line, number, field, start, end)?;
    if !value.is_finite() {
        return Err(field_error(line, number, field, start, end));
    }
    Ok(value)
}

/// Counters such as the element set number may be left blank.
fn parse_count(
    line: &str,
    number: u8,
    field: &'static str,
    start: usize,
    end: usize,
) -> Result<u32, ParseError> {
    if column(line, start, end).trim().is_empty() {
        return Ok(0);
    }
    parse_field(line, number, field, start, end)
}

/// Fields like " 13844-3" carry a signed mantissa with an implied leading decimal point and
/// a power of ten: 0.13844e-3.
fn parse_exponent(
    line: &str,
    number: u8,
    field: &'static str,
    start: usize,
    end: usize,
) -> Result<f64, ParseError> {
    let err = || field_error(line, number, field, start, end);
    let text = column(line, start, end).trim();
    if text.len() < 3 {
        return Err(err());
    }

    let (mantissa, exponent) = text.split_at(text.len() - 2);
    let (sign, digits) = match mantissa.as_bytes()[0] {
        b'-' => (-1.0, &mantissa[1..]),
        b'+' => (1.0, &mantissa[1..]),
        _ => (1.0, mantissa),
    };
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(err());
    }

    let exponent: i32 = exponent.replace(' ', "+").parse().map_err(|_| err())?;
    let mantissa: f64 = format!("0.{}", digits).parse().map_err(|_| err())?;
    Ok(sign * mantissa * 10f64.powi(exponent))
}

fn parse_eccentricity(line: &str) -> Result<f64, ParseError> {
    let text = column(line, 27, 33).trim();
    if text.is_empty() || !text.bytes().all(|b| b.is_ascii_digit()) {
        return Err(field_error(line, 2, "eccentricity", 27, 33));
    }
    let eo: f64 = format!("0.{}", text)
        .parse()
        .map_err(|_| field_error(line, 2, "eccentricity", 27, 33))?;
    if !(0.0..1.0).contains(&eo) {
        return Err(ParseError::OutOfRange {
            field: "eccentricity",
            value: eo,
        });
    }
    Ok(eo)
}

/// Catalogue numbers above 99999 use the Alpha-5 scheme: a leading letter stands for
/// 10 to 33, skipping I and O.
fn parse_sat_num(line: &str, number: u8) -> Result<u32, ParseError> {
    let text = column(line, 3, 7);
    let lead = text.as_bytes()[0];
    if !lead.is_ascii_uppercase() {
        return parse_field(line, number, "satellite number", 3, 7);
    }

    let high = match lead {
        b'A'..=b'H' => lead - b'A' + 10,
        b'J'..=b'N' => lead - b'A' + 9,
        b'P'..=b'Z' => lead - b'A' + 8,
        _ => return Err(field_error(line, number, "satellite number", 3, 7)),
    };
    let low: u32 = text[1..]
        .parse()
        .map_err(|_| field_error(line, number, "satellite number", 3, 7))?;
    Ok(high as u32 * 10000 + low)
}

fn check_range(field: &'static str, value: f64, range: RangeInclusive<f64>) -> Result<(), ParseError> {
    if range.contains(&value) {
        Ok(())
    } else {
        Err(ParseError::OutOfRange { field, value })
    }
}

fn days_in_year(year: i32) -> f64 {
    if NaiveDate::from_ymd_opt(year, 2, 29).is_some() {
        366.0
    } else {
        365.0
    }
}

fn epoch_datetime(year: i32, day: f64) -> Option<DateTime<Utc>> {
    let jan1 = NaiveDate::from_ymd_opt(year, 1, 1)?.and_hms_opt(0, 0, 0)?;
    let offset = Duration::microseconds(((day - 1.0) * 86_400_000_000.0).round() as i64);
    Some(Utc.from_utc_datetime(&(jan1 + offset)))
}

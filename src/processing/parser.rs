use crate::core::constants::*;
use crate::core::types::GpsFix;
use std::fmt;

/// Errors that can occur while parsing a raw fix sentence
#[derive(Debug, Clone, PartialEq)]
pub enum ParseError {
    /// Sentence does not start with the expected talker prefix
    UnknownSentence { prefix: String },
    /// Fewer comma-delimited fields than the layout requires
    InsufficientFields { required: usize, available: usize },
    /// A fixed-width token is shorter than its layout demands
    ShortToken { field: &'static str, required: usize, available: usize },
    /// Digits expected but something else found
    InvalidDigits { field: &'static str, token: String },
    /// Hemisphere letter was not one of the two legal values
    InvalidHemisphere { field: &'static str, letter: String },
    /// A clock field decodes to digits but not to a real time of day
    TimeOutOfRange { field: &'static str, value: u8 },
    /// Receiver reported no valid fix (status `V`)
    NoFix,
    /// Checksum trailer present but does not match the sentence body
    ChecksumMismatch { expected: u8, actual: u8 },
    /// Converted coordinate falls outside the representable range
    CoordinateOutOfRange { field: &'static str, value: f64 },
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::UnknownSentence { prefix } => {
                write!(f, "Unknown sentence type '{}'", prefix)
            }
            ParseError::InsufficientFields { required, available } => {
                write!(f, "Insufficient fields: need {}, got {}", required, available)
            }
            ParseError::ShortToken { field, required, available } => {
                write!(f, "Token '{}' too short: need {} chars, got {}", field, required, available)
            }
            ParseError::InvalidDigits { field, token } => {
                write!(f, "Non-numeric data in '{}': '{}'", field, token)
            }
            ParseError::InvalidHemisphere { field, letter } => {
                write!(f, "Invalid hemisphere letter for '{}': '{}'", field, letter)
            }
            ParseError::TimeOutOfRange { field, value } => {
                write!(f, "Clock field '{}' out of range: {}", field, value)
            }
            ParseError::NoFix => write!(f, "Receiver reported void fix"),
            ParseError::ChecksumMismatch { expected, actual } => {
                write!(f, "Checksum mismatch: sentence says 0x{:02X}, computed 0x{:02X}", expected, actual)
            }
            ParseError::CoordinateOutOfRange { field, value } => {
                write!(f, "{} out of range: {}", field, value)
            }
        }
    }
}

impl std::error::Error for ParseError {}

/// Result type for sentence parsing
pub type ParseResult<T> = Result<T, ParseError>;

/// Parser for the receiver's RMC position/time sentence.
///
/// The sentence is treated as a fixed layout: field positions and the
/// widths of the time and date tokens are validated up front, and a typed
/// error is returned instead of a record with sentinel coordinates.
pub struct SentenceParser {
    require_valid_status: bool,
}

impl SentenceParser {
    /// Create a parser with default settings (void fixes are rejected)
    pub fn new() -> Self {
        Self {
            require_valid_status: true,
        }
    }

    /// Accept sentences whose status flag is `V` (useful when replaying
    /// logs captured before the receiver had satellite lock)
    pub fn set_require_valid_status(&mut self, require: bool) {
        self.require_valid_status = require;
    }

    /// Parse one raw sentence into a [`GpsFix`]
    pub fn parse(&self, sentence: &str) -> ParseResult<GpsFix> {
        let trimmed = sentence.trim();

        // Split off the optional "*HH" checksum trailer before tokenizing
        let body = match trimmed.rsplit_once('*') {
            Some((body, trailer)) => {
                let expected = u8::from_str_radix(trailer, 16).map_err(|_| {
                    ParseError::InvalidDigits {
                        field: "checksum",
                        token: trailer.to_string(),
                    }
                })?;
                let actual = checksum(body.strip_prefix('$').unwrap_or(body));
                if expected != actual {
                    return Err(ParseError::ChecksumMismatch { expected, actual });
                }
                body
            }
            None => trimmed,
        };

        let fields: Vec<&str> = body.split(',').collect();

        if fields[0] != SENTENCE_PREFIX {
            return Err(ParseError::UnknownSentence {
                prefix: fields[0].to_string(),
            });
        }
        if fields.len() < SENTENCE_MIN_FIELDS {
            return Err(ParseError::InsufficientFields {
                required: SENTENCE_MIN_FIELDS,
                available: fields.len(),
            });
        }

        if self.require_valid_status && fields[FIELD_STATUS] != "A" {
            return Err(ParseError::NoFix);
        }

        let (hour, minute, second) = parse_time(fields[FIELD_TIME])?;
        let latitude = parse_coordinate(
            fields[FIELD_LATITUDE],
            fields[FIELD_LAT_HEMISPHERE],
            CoordinateAxis::Latitude,
        )?;
        let longitude = parse_coordinate(
            fields[FIELD_LONGITUDE],
            fields[FIELD_LON_HEMISPHERE],
            CoordinateAxis::Longitude,
        )?;
        let (day, month, year) = parse_date(fields[FIELD_DATE])?;

        Ok(GpsFix {
            latitude,
            longitude,
            hour,
            minute,
            second,
            month,
            day,
            year,
        })
    }
}

impl Default for SentenceParser {
    fn default() -> Self {
        Self::new()
    }
}

/// Which axis a coordinate token belongs to; selects hemisphere letters
/// and the legal range
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CoordinateAxis {
    Latitude,
    Longitude,
}

/// XOR checksum over the sentence body, as transmitted between `$` and `*`
fn checksum(body: &str) -> u8 {
    body.bytes().fold(0u8, |acc, b| acc ^ b)
}

/// Extract `HHMMSS` from a fixed-width time token
fn parse_time(token: &str) -> ParseResult<(u8, u8, u8)> {
    if !token.is_ascii() {
        return Err(ParseError::InvalidDigits {
            field: "time",
            token: token.to_string(),
        });
    }
    if token.len() < TIME_TOKEN_LEN {
        return Err(ParseError::ShortToken {
            field: "time",
            required: TIME_TOKEN_LEN,
            available: token.len(),
        });
    }
    let hour = parse_u8_slice(token, 0..2, "time")?;
    let minute = parse_u8_slice(token, 2..4, "time")?;
    let second = parse_u8_slice(token, 4..6, "time")?;
    if hour > 23 {
        return Err(ParseError::TimeOutOfRange { field: "hour", value: hour });
    }
    if minute > 59 {
        return Err(ParseError::TimeOutOfRange { field: "minute", value: minute });
    }
    if second > 59 {
        return Err(ParseError::TimeOutOfRange { field: "second", value: second });
    }
    Ok((hour, minute, second))
}

/// Extract `DDMMYY` from a fixed-width date token; the century is added
/// to produce a full year
fn parse_date(token: &str) -> ParseResult<(u8, u8, u16)> {
    if !token.is_ascii() {
        return Err(ParseError::InvalidDigits {
            field: "date",
            token: token.to_string(),
        });
    }
    if token.len() < DATE_TOKEN_LEN {
        return Err(ParseError::ShortToken {
            field: "date",
            required: DATE_TOKEN_LEN,
            available: token.len(),
        });
    }
    let day = parse_u8_slice(token, 0..2, "date")?;
    let month = parse_u8_slice(token, 2..4, "date")?;
    let year = parse_u8_slice(token, 4..6, "date")? as u16 + 2000;
    Ok((day, month, year))
}

fn parse_u8_slice(
    token: &str,
    range: std::ops::Range<usize>,
    field: &'static str,
) -> ParseResult<u8> {
    token[range].parse::<u8>().map_err(|_| ParseError::InvalidDigits {
        field,
        token: token.to_string(),
    })
}

/// Convert a `DDMM.MMMM` (or `DDDMM.MMMM`) token plus hemisphere letter
/// into signed decimal degrees: whole degrees are everything above the
/// minutes pair, minutes divide by sixty, and `S`/`W` negate.
fn parse_coordinate(token: &str, hemisphere: &str, axis: CoordinateAxis) -> ParseResult<f64> {
    let field = match axis {
        CoordinateAxis::Latitude => "latitude",
        CoordinateAxis::Longitude => "longitude",
    };

    if token.is_empty() {
        return Err(ParseError::ShortToken {
            field,
            required: 1,
            available: 0,
        });
    }
    let raw: f64 = token.parse().map_err(|_| ParseError::InvalidDigits {
        field,
        token: token.to_string(),
    })?;
    // f64 parsing also accepts "nan"/"inf", and NaN slides past any
    // range comparison, so non-finite tokens are rejected outright
    if !raw.is_finite() {
        return Err(ParseError::InvalidDigits {
            field,
            token: token.to_string(),
        });
    }

    let degrees = (raw / 100.0).trunc();
    let minutes = raw - degrees * 100.0;
    let unsigned = degrees + minutes / 60.0;

    let signed = match (axis, hemisphere) {
        (CoordinateAxis::Latitude, "N") => unsigned,
        (CoordinateAxis::Latitude, "S") => -unsigned,
        (CoordinateAxis::Longitude, "E") => unsigned,
        (CoordinateAxis::Longitude, "W") => -unsigned,
        _ => {
            return Err(ParseError::InvalidHemisphere {
                field,
                letter: hemisphere.to_string(),
            })
        }
    };

    let (min, max) = match axis {
        CoordinateAxis::Latitude => (LATITUDE_MIN_DEG, LATITUDE_MAX_DEG),
        CoordinateAxis::Longitude => (LONGITUDE_MIN_DEG, LONGITUDE_MAX_DEG),
    };
    if signed < min || signed > max {
        return Err(ParseError::CoordinateOutOfRange {
            field,
            value: signed,
        });
    }

    Ok(signed)
}

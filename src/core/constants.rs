//! Physical constants and sentence layout parameters

/// Mean Earth radius used for great-circle distances (m)
pub const EARTH_RADIUS_M: f64 = 6_371_000.0;

/// Smallest representable latitude (degrees)
pub const LATITUDE_MIN_DEG: f64 = -90.0;
/// Largest representable latitude (degrees)
pub const LATITUDE_MAX_DEG: f64 = 90.0;
/// Smallest representable longitude (degrees)
pub const LONGITUDE_MIN_DEG: f64 = -180.0;
/// Largest representable longitude (degrees)
pub const LONGITUDE_MAX_DEG: f64 = 180.0;

/// Sentence talker prefix for the receiver's position/time report
pub const SENTENCE_PREFIX: &str = "$GPRMC";

/// Minimum number of comma-delimited fields in a usable sentence
pub const SENTENCE_MIN_FIELDS: usize = 10;

/// Field index of the `HHMMSS` time token
pub const FIELD_TIME: usize = 1;
/// Field index of the fix status flag (`A` = valid, `V` = void)
pub const FIELD_STATUS: usize = 2;
/// Field index of the `DDMM.MMMM` latitude token
pub const FIELD_LATITUDE: usize = 3;
/// Field index of the latitude hemisphere letter (`N`/`S`)
pub const FIELD_LAT_HEMISPHERE: usize = 4;
/// Field index of the `DDDMM.MMMM` longitude token
pub const FIELD_LONGITUDE: usize = 5;
/// Field index of the longitude hemisphere letter (`E`/`W`)
pub const FIELD_LON_HEMISPHERE: usize = 6;
/// Field index of the `DDMMYY` date token
pub const FIELD_DATE: usize = 9;

/// Required width of the `HHMMSS` time token
pub const TIME_TOKEN_LEN: usize = 6;
/// Required width of the `DDMMYY` date token
pub const DATE_TOKEN_LEN: usize = 6;

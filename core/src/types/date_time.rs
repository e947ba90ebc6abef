use crate::error::{Dicom2FhirError, Result};
use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, NaiveTime, TimeZone};
use regex::Regex;
use std::fmt;
use std::sync::OnceLock;

const DICOM_DATE_FORMAT: &str = "%Y%m%d";
const DICOM_TIME_FORMAT: &str = "%H%M%S";
const MIN_OFFSET_MINUTES: i32 = -12 * 60;
const MAX_OFFSET_MINUTES: i32 = 14 * 60;

/// Start of an imaging study as a FHIR `date` or `dateTime`
///
/// FHIR requires a timezone offset on a `dateTime` that carries hours and
/// minutes. [`StudyStart::DateTime`] has none; an offset is only attached
/// through [`StudyStart::with_offset`] when one is actually known.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StudyStart {
    /// Date-only value (FHIR `date`)
    Date(NaiveDate),
    /// Date and time without a known offset
    DateTime(NaiveDateTime),
    /// Date and time with an explicit UTC offset
    OffsetDateTime(DateTime<FixedOffset>),
}

impl StudyStart {
    /// Returns the calendar date
    pub fn date(&self) -> NaiveDate {
        match self {
            StudyStart::Date(date) => *date,
            StudyStart::DateTime(dt) => dt.date(),
            StudyStart::OffsetDateTime(dt) => dt.date_naive(),
        }
    }

    /// Returns the time of day, if present
    pub fn time(&self) -> Option<NaiveTime> {
        match self {
            StudyStart::Date(_) => None,
            StudyStart::DateTime(dt) => Some(dt.time()),
            StudyStart::OffsetDateTime(dt) => Some(dt.time()),
        }
    }

    /// Returns the UTC offset, if one was attached
    pub fn offset(&self) -> Option<FixedOffset> {
        match self {
            StudyStart::OffsetDateTime(dt) => Some(*dt.offset()),
            _ => None,
        }
    }

    /// Returns true when the value carries a time component
    pub fn has_time(&self) -> bool {
        self.time().is_some()
    }

    /// Attaches a UTC offset to a date-time
    ///
    /// Date-only values are returned unchanged since a FHIR `date` has no
    /// offset. An existing offset is replaced, keeping the local wall time.
    pub fn with_offset(self, offset: FixedOffset) -> Result<Self> {
        let local = match self {
            StudyStart::Date(_) => return Ok(self),
            StudyStart::DateTime(dt) => dt,
            StudyStart::OffsetDateTime(dt) => dt.naive_local(),
        };

        offset
            .from_local_datetime(&local)
            .single()
            .map(StudyStart::OffsetDateTime)
            .ok_or_else(|| {
                Dicom2FhirError::MappingError(format!(
                    "cannot attach offset {} to {}",
                    offset, local
                ))
            })
    }
}

impl fmt::Display for StudyStart {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StudyStart::Date(date) => write!(f, "{}", date.format("%Y-%m-%d")),
            StudyStart::DateTime(dt) => write!(f, "{}", dt.format("%Y-%m-%dT%H:%M:%S")),
            StudyStart::OffsetDateTime(dt) => {
                write!(f, "{}", dt.format("%Y-%m-%dT%H:%M:%S%:z"))
            }
        }
    }
}

#[cfg(feature = "json")]
impl serde::Serialize for StudyStart {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Parses a DICOM DA value in the strict 8-digit `YYYYMMDD` form
///
/// # Errors
///
/// Returns [`Dicom2FhirError::InvalidDate`] for anything that is not exactly
/// eight digits forming a valid calendar date.
pub fn parse_dicom_date(value: &str) -> Result<NaiveDate> {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    let re = REGEX.get_or_init(|| Regex::new(r"^[0-9]{8}$").expect("Failed to compile regex"));

    if !re.is_match(value) {
        return Err(Dicom2FhirError::InvalidDate {
            value: value.to_string(),
            reason: "expected 8-digit YYYYMMDD".to_string(),
        });
    }

    NaiveDate::parse_from_str(value, DICOM_DATE_FORMAT).map_err(|e| Dicom2FhirError::InvalidDate {
        value: value.to_string(),
        reason: e.to_string(),
    })
}

/// Parses the leading `HHMMSS` of a DICOM TM value
///
/// Fractional seconds after the first six characters are ignored.
///
/// # Errors
///
/// Returns [`Dicom2FhirError::InvalidTime`] if the first six characters are
/// not a valid `HHMMSS` time.
pub fn parse_dicom_time(value: &str) -> Result<NaiveTime> {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    let re = REGEX.get_or_init(|| Regex::new(r"^[0-9]{6}").expect("Failed to compile regex"));

    if !re.is_match(value) {
        return Err(Dicom2FhirError::InvalidTime {
            value: value.to_string(),
            reason: "expected HHMMSS".to_string(),
        });
    }

    // `[0-9]` is ASCII-only, so the first six bytes are the six digits
    NaiveTime::parse_from_str(&value[..6], DICOM_TIME_FORMAT).map_err(|e| {
        Dicom2FhirError::InvalidTime {
            value: value.to_string(),
            reason: e.to_string(),
        }
    })
}

/// Parses a DICOM TimezoneOffsetFromUTC value (`+HHMM` / `-HHMM`)
///
/// The offset must lie between `-1200` and `+1400`.
///
/// # Errors
///
/// Returns [`Dicom2FhirError::InvalidValue`] if the string is malformed or
/// out of range.
pub fn parse_timezone_offset(value: &str) -> Result<FixedOffset> {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    let re = REGEX.get_or_init(|| {
        Regex::new(r"^([+-])([0-9]{2})([0-9]{2})$").expect("Failed to compile regex")
    });

    let invalid = || {
        Dicom2FhirError::InvalidValue(format!("Invalid timezone offset '{}'", value))
    };

    let caps = re.captures(value.trim()).ok_or_else(invalid)?;
    let hours: i32 = caps[2].parse().map_err(|_| invalid())?;
    let minutes: i32 = caps[3].parse().map_err(|_| invalid())?;
    if minutes > 59 {
        return Err(invalid());
    }

    let total = (hours * 60 + minutes) * if &caps[1] == "-" { -1 } else { 1 };
    if !(MIN_OFFSET_MINUTES..=MAX_OFFSET_MINUTES).contains(&total) {
        return Err(invalid());
    }
    FixedOffset::east_opt(total * 60).ok_or_else(invalid)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn test_parse_dicom_date() {
        let date = parse_dicom_date("20230101").unwrap();
        assert_eq!(date, NaiveDate::from_ymd_opt(2023, 1, 1).unwrap());
    }

    #[rstest]
    #[case("")]
    #[case("2023-01-01")]
    #[case("202301")]
    #[case("20231301")]
    #[case("20230230")]
    #[case(" 20230101")]
    #[case("+20230101")]
    #[case("202301011")]
    #[case("２０２３０１０１")]
    #[case("२०२३०१०१")]
    fn test_parse_dicom_date_rejects(#[case] value: &str) {
        assert!(matches!(
            parse_dicom_date(value),
            Err(Dicom2FhirError::InvalidDate { .. })
        ));
    }

    #[rstest]
    #[case("153045", 15, 30, 45)]
    #[case("153045.123456", 15, 30, 45)]
    #[case("000000", 0, 0, 0)]
    fn test_parse_dicom_time(
        #[case] value: &str,
        #[case] h: u32,
        #[case] m: u32,
        #[case] s: u32,
    ) {
        let time = parse_dicom_time(value).unwrap();
        assert_eq!(time, NaiveTime::from_hms_opt(h, m, s).unwrap());
    }

    #[rstest]
    #[case("1530")]
    #[case("15:30:45")]
    #[case("256000")]
    #[case("1१२३४५")]
    #[case("१२३४५६")]
    #[case("15३045.5")]
    fn test_parse_dicom_time_rejects(#[case] value: &str) {
        assert!(matches!(
            parse_dicom_time(value),
            Err(Dicom2FhirError::InvalidTime { .. })
        ));
    }

    #[rstest]
    #[case("+0100", 3600)]
    #[case("-0530", -19800)]
    #[case("+0000", 0)]
    #[case("+1400", 50400)]
    #[case("-1200", -43200)]
    fn test_parse_timezone_offset(#[case] value: &str, #[case] seconds: i32) {
        let offset = parse_timezone_offset(value).unwrap();
        assert_eq!(offset.local_minus_utc(), seconds);
    }

    #[rstest]
    #[case("0100")]
    #[case("+1")]
    #[case("+2500")]
    #[case("+0160")]
    #[case("+1459")]
    #[case("+1401")]
    #[case("-1201")]
    #[case("-1400")]
    #[case("+０１００")]
    fn test_parse_timezone_offset_rejects(#[case] value: &str) {
        assert!(parse_timezone_offset(value).is_err());
    }

    #[test]
    fn test_display_formats() {
        let date = NaiveDate::from_ymd_opt(2023, 1, 1).unwrap();
        let dt = date.and_hms_opt(15, 30, 45).unwrap();

        assert_eq!(StudyStart::Date(date).to_string(), "2023-01-01");
        assert_eq!(StudyStart::DateTime(dt).to_string(), "2023-01-01T15:30:45");

        let offset = FixedOffset::east_opt(3600).unwrap();
        let with_offset = StudyStart::DateTime(dt).with_offset(offset).unwrap();
        assert_eq!(with_offset.to_string(), "2023-01-01T15:30:45+01:00");
        assert_eq!(with_offset.offset(), Some(offset));
        assert_eq!(with_offset.time(), Some(dt.time()));
    }

    #[test]
    fn test_with_offset_keeps_date_only() {
        let date = NaiveDate::from_ymd_opt(2023, 1, 1).unwrap();
        let offset = FixedOffset::east_opt(3600).unwrap();
        let start = StudyStart::Date(date).with_offset(offset).unwrap();
        assert_eq!(start, StudyStart::Date(date));
        assert!(!start.has_time());
    }
}

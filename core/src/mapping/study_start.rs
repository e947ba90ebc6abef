use crate::error::Result;
use crate::types::{parse_dicom_date, parse_dicom_time, StudyStart};

/// Builds ImagingStudy.started from DICOM StudyDate and StudyTime
///
/// - no date → `None`, even if a time is given
/// - time absent or shorter than `HHMMSS` → date only
/// - otherwise the first six time characters are combined with the date
///
/// No timezone offset is attached here; see [`StudyStart::with_offset`].
///
/// # Errors
///
/// Returns an error if the date is not a strict `YYYYMMDD` value or the time
/// does not start with a valid `HHMMSS`.
pub fn build_study_start(date: Option<&str>, time: Option<&str>) -> Result<Option<StudyStart>> {
    let Some(date) = date else {
        return Ok(None);
    };
    let date = parse_dicom_date(date)?;

    match time {
        Some(time) if time.chars().count() >= 6 => {
            let time = parse_dicom_time(time)?;
            Ok(Some(StudyStart::DateTime(date.and_time(time))))
        }
        _ => Ok(Some(StudyStart::Date(date))),
    }
}

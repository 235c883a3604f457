//! 12-hour clock times (`H:MM[ ]am|pm`), normalized to 24-hour form.

use chrono::NaiveTime;

use crate::error::ParseError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Meridiem {
    Am,
    Pm,
}

/// Parse a 12-hour clock reading into a time of day.
///
/// `12am` maps to hour 0, `12pm` to hour 12, other `pm` hours gain 12.
pub(super) fn parse(text: &str) -> Result<NaiveTime, ParseError> {
    let text = text.trim();
    let malformed = || ParseError::InvalidTimeFormat(text.to_string());

    let (clock, meridiem) = split_meridiem(text).ok_or_else(malformed)?;
    let (hours, minutes) = clock.trim_end().split_once(':').ok_or_else(malformed)?;
    if !is_digits(hours, 1, 2) || !is_digits(minutes, 2, 2) {
        return Err(malformed());
    }

    let hour: u32 = hours.parse().map_err(|_| malformed())?;
    let minute: u32 = minutes.parse().map_err(|_| malformed())?;
    if !(1..=12).contains(&hour) || minute > 59 {
        return Err(ParseError::InvalidTimeValue(text.to_string()));
    }

    let hour = match (meridiem, hour) {
        (Meridiem::Am, 12) => 0,
        (Meridiem::Pm, 12) | (Meridiem::Am, _) => hour,
        (Meridiem::Pm, _) => hour + 12,
    };

    NaiveTime::from_hms_opt(hour, minute, 0)
        .ok_or_else(|| ParseError::InvalidTimeValue(text.to_string()))
}

fn split_meridiem(text: &str) -> Option<(&str, Meridiem)> {
    let split = text.len().checked_sub(2)?;
    let (clock, marker) = (text.get(..split)?, text.get(split..)?);
    if marker.eq_ignore_ascii_case("am") {
        Some((clock, Meridiem::Am))
    } else if marker.eq_ignore_ascii_case("pm") {
        Some((clock, Meridiem::Pm))
    } else {
        None
    }
}

fn is_digits(s: &str, min: usize, max: usize) -> bool {
    (min..=max).contains(&s.len()) && s.bytes().all(|b| b.is_ascii_digit())
}

#[cfg(test)]
mod tests {
    use chrono::Timelike;

    use super::*;

    fn hm(text: &str) -> (u32, u32) {
        let time = parse(text).unwrap();
        (time.hour(), time.minute())
    }

    #[test]
    fn should_map_midnight_to_hour_zero() {
        assert_eq!(hm("12:00am"), (0, 0));
    }

    #[test]
    fn should_keep_noon_at_hour_twelve() {
        assert_eq!(hm("12:00pm"), (12, 0));
    }

    #[test]
    fn should_add_twelve_to_afternoon_hours() {
        assert_eq!(hm("10:00 pm"), (22, 0));
        assert_eq!(hm("1:30PM"), (13, 30));
    }

    #[test]
    fn should_keep_morning_hours() {
        assert_eq!(hm("08:00am"), (8, 0));
        assert_eq!(hm("9:45 AM"), (9, 45));
    }

    #[test]
    fn should_reject_hour_outside_twelve_hour_range() {
        assert_eq!(
            parse("13:00 pm"),
            Err(ParseError::InvalidTimeValue("13:00 pm".to_string()))
        );
        assert!(matches!(parse("25:00am"), Err(ParseError::InvalidTimeValue(_))));
        assert!(matches!(parse("0:30am"), Err(ParseError::InvalidTimeValue(_))));
    }

    #[test]
    fn should_reject_minute_outside_range() {
        assert!(matches!(parse("10:60pm"), Err(ParseError::InvalidTimeValue(_))));
    }

    #[test]
    fn should_reject_missing_meridiem() {
        assert!(matches!(parse("10:00"), Err(ParseError::InvalidTimeFormat(_))));
    }

    #[test]
    fn should_reject_missing_minutes() {
        assert!(matches!(parse("10pm"), Err(ParseError::InvalidTimeFormat(_))));
        assert!(matches!(parse("10:5pm"), Err(ParseError::InvalidTimeFormat(_))));
    }

    #[test]
    fn should_reject_free_text() {
        assert!(matches!(parse("sunset"), Err(ParseError::InvalidTimeFormat(_))));
        assert!(matches!(parse(""), Err(ParseError::InvalidTimeFormat(_))));
    }
}

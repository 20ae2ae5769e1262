//! Calendar age in full years.

use jiff::civil::Date;

use crate::error::CoreError;

fn is_leap_year(year: i16) -> bool {
    year % 4 == 0 && (year % 100 != 0 || year % 400 == 0)
}

/// `date` moved to `year`. A 29 February that does not exist in `year`
/// rolls over to 1 March.
fn with_year(date: Date, year: i16) -> Result<Date, CoreError> {
    if date.month() == 2 && date.day() == 29 && !is_leap_year(year) {
        return Ok(Date::new(year, 3, 1)?);
    }
    Ok(Date::new(year, date.month(), date.day())?)
}

/// Compute age in full years as of `today`.
///
/// Takes the whole-year difference, steps back a year if this year's
/// birthday is still ahead, then adds the remaining days as a fraction of
/// the current year's length (366 in a leap year) before flooring.
///
/// A 29 February birthday falls on 1 March in common years, and the
/// stepped-back anniversary keeps that rolled-over date.
pub fn compute_age(birth_date: Date, today: Date) -> Result<i32, CoreError> {
    let mut years = i32::from(today.year()) - i32::from(birth_date.year());
    let mut anniversary = with_year(birth_date, today.year())?;
    if anniversary > today {
        years -= 1;
        anniversary = with_year(anniversary, today.year() - 1)?;
    }

    let days = f64::from(anniversary.until(today)?.get_days());
    let year_length = if is_leap_year(today.year()) { 366.0 } else { 365.0 };
    Ok((f64::from(years) + days / year_length).floor() as i32)
}

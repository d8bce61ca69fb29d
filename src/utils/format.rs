//! Formatting utilities for file metadata.

const SECONDS_PER_DAY: u64 = 86_400;

/// Format a Unix timestamp (UTC) as an ISO date, `YYYY-MM-DD`.
pub fn format_date_iso(timestamp: u64) -> String {
    let (year, month, day) = civil_from_days((timestamp / SECONDS_PER_DAY) as i64);
    format!("{:04}-{:02}-{:02}", year, month, day)
}

/// Convert days since 1970-01-01 to a proleptic Gregorian (year, month, day).
///
/// Works in 400-year eras starting on March 1st so leap days fall at the end
/// of each computed year.
fn civil_from_days(days: i64) -> (i64, u32, u32) {
    let z = days + 719_468;
    let era = z.div_euclid(146_097);
    let day_of_era = z.rem_euclid(146_097);
    let year_of_era =
        (day_of_era - day_of_era / 1_460 + day_of_era / 36_524 - day_of_era / 146_096) / 365;
    let day_of_year = day_of_era - (365 * year_of_era + year_of_era / 4 - year_of_era / 100);
    let shifted_month = (5 * day_of_year + 2) / 153;
    let day = (day_of_year - (153 * shifted_month + 2) / 5 + 1) as u32;
    let month = (if shifted_month < 10 {
        shifted_month + 3
    } else {
        shifted_month - 9
    }) as u32;
    let year = year_of_era + era * 400 + i64::from(month <= 2);
    (year, month, day)
}

/// Minimum valid year (inclusive)
pub const MIN_YEAR: u16 = 1;
/// Maximum valid year (inclusive)
pub const MAX_YEAR: u16 = 9999;

/// Maximum valid month (December)
pub const MAX_MONTH: u8 = 12;

/// First day of month, used for lower bounds
pub const MIN_DAY: u8 = 1;

/// Month number for January
pub const JANUARY: u8 = 1;
/// Month number for February
pub const FEBRUARY: u8 = 2;
/// Month number for December
pub const DECEMBER: u8 = 12;

/// Days in February for leap years
pub const FEBRUARY_DAYS_LEAP: u8 = 29;

/// Maximum days in each month (index 0 is unused, months are 1-indexed)
/// February shows 28 days (non-leap year default)
pub const DAYS_IN_MONTH: [u8; 13] = [
    0,  // index 0 unused (months are 1-indexed)
    31, // January
    28, // February (non-leap, adjusted by is_leap_year check)
    31, // March
    30, // April
    31, // May
    30, // June
    31, // July
    31, // August
    30, // September
    31, // October
    30, // November
    31, // December
];

/// Days elapsed before each month of a year that starts on March 1.
/// Index 0 is March, index 11 is February (which ends the internal year,
/// so the leap day never shifts a later month).
pub(crate) const DAYS_BEFORE_MARCH_MONTH: [u16; 12] =
    [0, 31, 61, 92, 122, 153, 184, 214, 245, 275, 306, 337];

/// Day number of 0001-01-01 counted from 0000-03-01.
pub(crate) const MARCH_EPOCH_OFFSET: u32 = 306;

/// Leap year occurs every 4 years
pub(crate) const LEAP_YEAR_CYCLE: u16 = 4;
/// Century years are not leap years unless...
pub(crate) const CENTURY_CYCLE: u16 = 100;
/// ...they are divisible by 400 (Gregorian calendar correction)
pub(crate) const GREGORIAN_CYCLE: u16 = 400;

pub(crate) const DAYS_PER_YEAR: u32 = 365;
pub(crate) const DAYS_PER_LEAP_CYCLE: u32 = 1_461;
pub(crate) const DAYS_PER_CENTURY: u32 = 36_524;
pub(crate) const DAYS_PER_GREGORIAN_CYCLE: u32 = 146_097;

/// Day number of 9999-12-31; 0001-01-01 is day number 0.
pub const MAX_DAY_NUMBER: u32 = 3_652_058;

/// Number of weekdays.
pub const DAYS_PER_WEEK: u8 = 7;

/// `add_days` deltas up to this magnitude adjust the packed fields directly
/// instead of going through a day number. It is the shortest month length,
/// so at most one month boundary can be crossed.
pub(crate) const SMALL_DAY_DELTA: i32 = 28;

/// Largest magnitude of a per-weekday adjustment, in days.
pub const MAX_WEEKDAY_ADJUSTMENT: i8 = 6;

/// Largest magnitude of a weekday-of-month occurrence ordinal.
pub const MAX_ORDINAL: i8 = 4;

/// Date component separator (ISO 8601 format)
pub const DATE_SEPARATOR: char = '-';
/// Range separator (ISO 8601 extended format)
pub const RANGE_SEPARATOR: char = '/';

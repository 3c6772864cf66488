/// Offset between the Gregorian and Buddhist Era calendars.
const BUDDHIST_ERA_OFFSET: i32 = 543;

/// Buddhist Era rendering of a Gregorian year, for the Thai-locale UI.
///
/// Display only: stored dates and query filters always stay Gregorian.
pub fn buddhist_era_year(gregorian: i32) -> i32 {
    gregorian + BUDDHIST_ERA_OFFSET
}

/// Formats a number with thousands separators.
pub fn format_number(n: usize) -> String {
    let s = n.to_string();
    let mut result = String::new();
    for (i, ch) in s.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push(',');
        }
        result.push(ch);
    }
    result.chars().rev().collect()
}

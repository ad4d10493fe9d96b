const UNITS: [&str; 7] = ["", "K", "M", "G", "T", "P", "E"];

/// Human readable size using binary units, e.g. `3.5G`.
///
/// Sizes below ten units that are not whole get one decimal place, anything
/// else is rounded to the nearest integer.
pub fn format_size(size: u64) -> String {
    let mut scaled = size as f64;
    let mut unit = 0;
    while scaled >= 1024.0 && unit < UNITS.len() - 1 {
        scaled /= 1024.0;
        unit += 1;
    }

    if scaled > 0.0 && scaled < 10.0 && scaled.fract() != 0.0 {
        format!("{:.1}{}", scaled, UNITS[unit])
    } else {
        format!("{}{}", scaled.round_ties_even() as u64, UNITS[unit])
    }
}

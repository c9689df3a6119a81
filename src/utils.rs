/// Rounds to the nearest integer, halves toward positive infinity
/// (`-2.5` becomes `-2`, `2.5` becomes `3`).
pub(crate) fn round_half_up(value: f64) -> f64 {
    if value - value.floor() == 0.5 {
        value.ceil()
    } else {
        value.round()
    }
}

pub(crate) fn round_to_int(value: f64) -> i32 {
    round_half_up(value) as i32
}

/// Rounds to one decimal place with the same tie rule as [`round_half_up`].
pub(crate) fn round_to_tenth(value: f64) -> f64 {
    round_half_up(value * 10.0) / 10.0
}

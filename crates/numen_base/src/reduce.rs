//! Digit reduction (repeated digit-summing) under two rule regimes.
//!
//! One regime halts as soon as the chain reaches a master value
//! (11, 22 or 33); the other always runs down to a single digit. Both are
//! served by [`reduce`], with the regime chosen by the caller at every call
//! site.

/// Master values that survive reduction when preservation is enabled.
pub const MASTER_NUMBERS: [u32; 3] = [11, 22, 33];

/// Karmic-debt values: pre-reduction sums flagged by the karmic module.
pub const KARMIC_DEBT_NUMBERS: [u32; 4] = [13, 14, 16, 19];

/// Whether `n` is one of the master values 11, 22, 33.
pub const fn is_master(n: u32) -> bool {
    matches!(n, 11 | 22 | 33)
}

/// Whether `n` is one of the karmic-debt values 13, 14, 16, 19.
pub const fn is_karmic_debt(n: u32) -> bool {
    matches!(n, 13 | 14 | 16 | 19)
}

/// Sum of the decimal digits of `n` (one pass, no repetition).
pub const fn digit_sum(mut n: u32) -> u32 {
    let mut sum = 0;
    while n > 0 {
        sum += n % 10;
        n /= 10;
    }
    sum
}

/// Digit sum of a calendar year. Negative (proleptic) years use their
/// magnitude.
pub const fn year_digit_sum(year: i32) -> u32 {
    digit_sum(year.unsigned_abs())
}

/// Collapse `n` to a single digit by repeated digit-summing.
///
/// With `preserve_masters`, the chain stops the moment it reaches 11, 22
/// or 33, including when the input itself is a master value. The check is
/// re-evaluated at every step, so `29 -> 11` stops at 11 while
/// `44 -> 8` never passes through a master value.
///
/// Without `preserve_masters`, the result is the digital root (0 maps to 0).
pub const fn reduce(mut n: u32, preserve_masters: bool) -> u32 {
    while n > 9 && !(preserve_masters && is_master(n)) {
        n = digit_sum(n);
    }
    n
}

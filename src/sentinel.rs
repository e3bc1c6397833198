//! Sentinel handling and fixed-point scaling.
//!
//! Sensors report "not measured" as a reserved raw pattern, usually all-ones
//! for unsigned fields and the positive maximum for signed fields. These
//! helpers map a raw integer to `None` when it matches its sentinel and
//! otherwise apply the field's fixed-point divisor using `f64` division.

/// Sentinel for unsigned 8-bit fields.
pub const U8_NONE: u8 = 0xff;
/// Sentinel for unsigned 16-bit fields.
pub const U16_NONE: u16 = 0xffff;
/// Sentinel for signed 16-bit fields.
pub const I16_NONE: i16 = 0x7fff;
/// Sentinel for unsigned 32-bit fields.
pub const U32_NONE: u32 = 0xffff_ffff;
/// Sentinel for signed 32-bit fields.
pub const I32_NONE: i32 = 0x7fff_ffff;

#[must_use]
pub fn norm_u8(raw: u8, sentinel: u8, scale: f64) -> Option<f64> {
    (raw != sentinel).then(|| f64::from(raw) / scale)
}

#[must_use]
pub fn norm_u16(raw: u16, sentinel: u16, scale: f64) -> Option<f64> {
    (raw != sentinel).then(|| f64::from(raw) / scale)
}

#[must_use]
pub fn norm_i16(raw: i16, sentinel: i16, scale: f64) -> Option<f64> {
    (raw != sentinel).then(|| f64::from(raw) / scale)
}

#[must_use]
pub fn norm_u32(raw: u32, sentinel: u32, scale: f64) -> Option<f64> {
    (raw != sentinel).then(|| f64::from(raw) / scale)
}

#[must_use]
pub fn norm_i32(raw: i32, sentinel: i32, scale: f64) -> Option<f64> {
    (raw != sentinel).then(|| f64::from(raw) / scale)
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case(0xffff, None; "sentinel is absent")]
    #[test_case(3250, Some(3.25); "millivolts to volts")]
    #[test_case(0, Some(0.0); "zero is a reading")]
    fn u16_millivolts(raw: u16, expected: Option<f64>) {
        assert_eq!(norm_u16(raw, U16_NONE, 1000.0), expected);
    }

    #[test_case(0x7fff, None; "sentinel is absent")]
    #[test_case(100, Some(1.0); "centidegrees")]
    #[test_case(-100, Some(-1.0); "negative centidegrees")]
    fn i16_centidegrees(raw: i16, expected: Option<f64>) {
        assert_eq!(norm_i16(raw, I16_NONE, 100.0), expected);
    }

    #[test]
    fn half_percent_humidity_is_not_truncated() {
        // 101 half-percent steps is 50.5%, which integer division would lose
        assert_eq!(norm_u8(101, U8_NONE, 2.0), Some(50.5));
    }

    #[test]
    fn negative_all_ones_is_a_reading() {
        // only the positive max is reserved for signed fields
        assert_eq!(norm_i32(-1, I32_NONE, 1000.0), Some(-0.001));
        assert_eq!(norm_i32(I32_NONE, I32_NONE, 1000.0), None);
    }
}

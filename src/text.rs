/// Digits in `u64::MAX`.
pub const MAX_DIGITS: usize = 20;

/// Writes `value` in decimal into the tail of `buf` and returns the digits.
pub fn format_decimal(mut value: u64, buf: &mut [u8; MAX_DIGITS]) -> &str {
    let mut start = MAX_DIGITS;
    loop {
        start -= 1;
        buf[start] = b'0' + (value % 10) as u8;
        value /= 10;
        if value == 0 {
            break;
        }
    }
    std::str::from_utf8(&buf[start..]).unwrap_or_default()
}

#[cfg(test)]
#[ctor::ctor]
fn init_backtrace() {
    color_backtrace::install();
}

/// Returns the number of characters needed to print `value` in base 10.
pub fn display_width(value: isize) -> usize {
    let digits = value.unsigned_abs().checked_ilog10().map_or(1, |d| d as usize + 1);
    if value < 0 {
        digits + 1
    } else {
        digits
    }
}

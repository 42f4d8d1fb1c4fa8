//! Lossy numeric conversions with the corresponding clippy exceptions in one place.

#[must_use]
pub const fn usize_to_f64(value: usize) -> f64 {
    #[allow(clippy::cast_precision_loss)]
    let newval = value as f64;
    newval
}

#[cfg(test)]
mod test {
    use super::*;
    #[test]
    fn to_f64() {
        assert_eq!(usize_to_f64(0), 0.0);
        assert_eq!(usize_to_f64(7), 7.0);
    }
}

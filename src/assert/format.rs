//! Rendering helpers for failure messages.

/// Render an `i64`-typed field with thousands grouping, e.g. `363000000000`
/// becomes `363,000,000,000`. `i32`-typed fields (days, months, years) render
/// plainly and never go through this.
pub(crate) fn grouped(value: i64) -> String {
    let digits = value.unsigned_abs().to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if value < 0 {
        out.push('-');
    }
    let lead = digits.len() % 3;
    for (i, ch) in digits.chars().enumerate() {
        if i != 0 && (i % 3) == lead % 3 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grouped() {
        assert_eq!(grouped(0), "0");
        assert_eq!(grouped(5), "5");
        assert_eq!(grouped(999), "999");
        assert_eq!(grouped(1000), "1,000");
        assert_eq!(grouped(363_000_000_000), "363,000,000,000");
        assert_eq!(grouped(-12_345), "-12,345");
    }
}

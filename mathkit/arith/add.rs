use std::ops::Add;

/// Sum two numeric operands.
///
/// Written once over the operator trait so integer and float callers share the implementation,
/// overflow and precision follow the operand type's own `+` semantics.
///
/// Arguments:
/// - `a`: The left operand.
/// - `b`: The right operand.
pub fn add<T: Add<Output = T>>(a: T, b: T) -> T {
    a + b
}

#[cfg(test)]
mod tests {
    use rstest::*;

    use super::*;

    #[rstest]
    #[case(2, 3, 5)]
    #[case(0, 0, 0)]
    #[case(-7, 7, 0)]
    #[case(i64::MAX - 1, 1, i64::MAX)]
    fn test_add_ints(#[case] a: i64, #[case] b: i64, #[case] expected: i64) {
        assert_eq!(add(a, b), expected);
    }

    #[rstest]
    #[case(1.0, 2.0, 3.0)]
    #[case(0.25, 0.5, 0.75)]
    #[case(-1.5, 1.5, 0.0)]
    fn test_add_floats(#[case] a: f64, #[case] b: f64, #[case] expected: f64) {
        assert_eq!(add(a, b), expected);
    }

    #[rstest]
    fn test_add_commutative(#[values(-3, 0, 4, 123)] a: i64, #[values(-9, 0, 42)] b: i64) {
        assert_eq!(add(a, b), add(b, a));
    }

    #[rstest]
    fn test_add_identity(#[values(-3, 0, 4, 123)] a: i64) {
        assert_eq!(add(a, 0), a);
    }
}

use std::ops::Mul;

/// Multiply two numeric operands.
///
/// Same shape as [`add`](crate::arith::add), overflow and precision follow the operand type's own
/// `*` semantics.
///
/// Arguments:
/// - `a`: The left operand.
/// - `b`: The right operand.
pub fn multiply<T: Mul<Output = T>>(a: T, b: T) -> T {
    a * b
}

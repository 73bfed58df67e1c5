//! Binary operations applied by the accumulator
//!
//! Probar: Error prevention - a closed enum instead of a function pointer

use bigdecimal::BigDecimal;
use serde::{Deserialize, Serialize};

use crate::core::{decimal, CalcResult};

/// Type-safe binary operation awaiting its right-hand operand
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Operation {
    /// Addition (+)
    Add,
    /// Subtraction (-)
    Subtract,
    /// Multiplication (*)
    Multiply,
    /// Division (/)
    Divide,
}

impl Operation {
    /// All operations in keypad order
    pub const ALL: [Self; 4] = [Self::Add, Self::Subtract, Self::Multiply, Self::Divide];

    /// Returns the operator symbol for display
    #[must_use]
    pub const fn symbol(&self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Subtract => "-",
            Self::Multiply => "*",
            Self::Divide => "/",
        }
    }

    /// Looks up an operation by its symbol
    #[must_use]
    pub const fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            '+' => Some(Self::Add),
            '-' => Some(Self::Subtract),
            '*' => Some(Self::Multiply),
            '/' => Some(Self::Divide),
            _ => None,
        }
    }

    /// Applies the operation to `(lhs, rhs)`.
    ///
    /// Addition, subtraction and multiplication are exact. Division is
    /// rounded to [`decimal::DIVISION_SCALE`] places.
    pub fn apply(self, lhs: &BigDecimal, rhs: &BigDecimal) -> CalcResult<BigDecimal> {
        match self {
            Self::Add => Ok(lhs + rhs),
            Self::Subtract => Ok(lhs - rhs),
            Self::Multiply => Ok(lhs * rhs),
            Self::Divide => decimal::divide(lhs, rhs),
        }
    }
}

impl std::fmt::Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.symbol())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::CalcError;
    use proptest::prelude::*;
    use std::str::FromStr;

    fn dec(s: &str) -> BigDecimal {
        BigDecimal::from_str(s).unwrap()
    }

    // --- Operation enum tests ---

    #[test]
    fn test_operation_symbols() {
        assert_eq!(Operation::Add.symbol(), "+");
        assert_eq!(Operation::Subtract.symbol(), "-");
        assert_eq!(Operation::Multiply.symbol(), "*");
        assert_eq!(Operation::Divide.symbol(), "/");
    }

    #[test]
    fn test_operation_from_symbol_round_trip() {
        for op in Operation::ALL {
            let symbol = op.symbol().chars().next().unwrap();
            assert_eq!(Operation::from_symbol(symbol), Some(op));
        }
    }

    #[test]
    fn test_operation_from_symbol_unknown() {
        assert_eq!(Operation::from_symbol('^'), None);
        assert_eq!(Operation::from_symbol('%'), None);
    }

    #[test]
    fn test_operation_display() {
        assert_eq!(Operation::Multiply.to_string(), "*");
    }

    // --- apply tests ---

    #[test]
    fn test_add_is_exact() {
        // 0.1 + 0.2 is exactly 0.3 in decimal
        assert_eq!(Operation::Add.apply(&dec("0.1"), &dec("0.2")), Ok(dec("0.3")));
    }

    #[test]
    fn test_subtract_to_negative() {
        assert_eq!(Operation::Subtract.apply(&dec("3"), &dec("5")), Ok(dec("-2")));
    }

    #[test]
    fn test_multiply_decimals() {
        assert_eq!(
            Operation::Multiply.apply(&dec("1.5"), &dec("1.5")),
            Ok(dec("2.25"))
        );
    }

    #[test]
    fn test_multiply_large_values_stay_exact() {
        let big = dec("123456789012345678901234567890");
        assert_eq!(
            Operation::Multiply.apply(&big, &dec("10")),
            Ok(dec("1234567890123456789012345678900"))
        );
    }

    #[test]
    fn test_divide_rounds() {
        let q = Operation::Divide.apply(&dec("10"), &dec("3")).unwrap();
        assert_eq!(q, dec("3.333333333333"));
    }

    #[test]
    fn test_divide_by_zero() {
        assert_eq!(
            Operation::Divide.apply(&dec("10"), &dec("0")),
            Err(CalcError::DivisionByZero)
        );
    }

    // --- Property-based tests ---

    proptest! {
        #[test]
        fn prop_add_commutative(a in any::<i64>(), b in any::<i64>()) {
            let (a, b) = (BigDecimal::from(a), BigDecimal::from(b));
            prop_assert_eq!(Operation::Add.apply(&a, &b), Operation::Add.apply(&b, &a));
        }

        #[test]
        fn prop_multiply_commutative(a in any::<i64>(), b in any::<i64>()) {
            let (a, b) = (BigDecimal::from(a), BigDecimal::from(b));
            prop_assert_eq!(
                Operation::Multiply.apply(&a, &b),
                Operation::Multiply.apply(&b, &a)
            );
        }

        #[test]
        fn prop_subtract_self_is_zero(a in any::<i64>()) {
            let a = BigDecimal::from(a);
            prop_assert_eq!(Operation::Subtract.apply(&a, &a), Ok(BigDecimal::from(0)));
        }

        #[test]
        fn prop_divide_by_self(a in any::<i64>()) {
            prop_assume!(a != 0);
            let a = BigDecimal::from(a);
            prop_assert_eq!(Operation::Divide.apply(&a, &a), Ok(BigDecimal::from(1)));
        }
    }
}

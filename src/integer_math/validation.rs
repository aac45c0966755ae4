// src/integer_math/validation.rs

use log::debug;

use crate::core::error::GcdError;

/// Checks an operand set before any reduction runs.
///
/// The range check is evaluated first, so an operand equal to `i32::MIN`
/// reports [`GcdError::Range`] even when every other operand is zero.
/// An empty `rest` leaves the domain check to the two fixed operands.
pub fn validate_operands(a: i32, b: i32, rest: &[i32]) -> Result<(), GcdError> {
    let operands = || [a, b].into_iter().chain(rest.iter().copied());

    if let Some(position) = operands().position(|value| value == i32::MIN) {
        debug!("rejecting operand set: i32::MIN at position {}", position);
        return Err(GcdError::Range { position });
    }

    if operands().all(|value| value == 0) {
        debug!("rejecting operand set: all {} operands are zero", rest.len() + 2);
        return Err(GcdError::Domain);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_mixed_operands() {
        assert_eq!(validate_operands(48, 18, &[]), Ok(()));
        assert_eq!(validate_operands(0, 0, &[0, 3]), Ok(()));
        assert_eq!(validate_operands(i32::MAX, -i32::MAX, &[]), Ok(()));
    }

    #[test]
    fn test_all_zero_is_domain_error() {
        assert_eq!(validate_operands(0, 0, &[]), Err(GcdError::Domain));
        assert_eq!(validate_operands(0, 0, &[0, 0, 0]), Err(GcdError::Domain));
    }

    #[test]
    fn test_min_value_is_range_error() {
        assert_eq!(validate_operands(i32::MIN, 5, &[]), Err(GcdError::Range { position: 0 }));
        assert_eq!(validate_operands(5, i32::MIN, &[]), Err(GcdError::Range { position: 1 }));
        assert_eq!(validate_operands(1, 2, &[3, i32::MIN]), Err(GcdError::Range { position: 3 }));
    }

    #[test]
    fn test_range_error_takes_precedence() {
        assert_eq!(validate_operands(i32::MIN, 0, &[]), Err(GcdError::Range { position: 0 }));
        assert_eq!(validate_operands(0, 0, &[i32::MIN]), Err(GcdError::Range { position: 2 }));
    }
}

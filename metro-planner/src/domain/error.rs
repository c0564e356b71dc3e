//! Domain error types.
//!
//! These errors represent values that break a domain invariant at
//! construction time. They are distinct from data-loading errors.

use super::LineId;

/// Domain-level errors for validation.
#[derive(Debug, Clone, thiserror::Error)]
pub enum DomainError {
    /// Route has no segments
    #[error("route must have at least one segment")]
    EmptyRoute,

    /// A segment lists no stations
    #[error("segment on line {0} has no stations")]
    EmptySegment(LineId),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = DomainError::EmptyRoute;
        assert_eq!(err.to_string(), "route must have at least one segment");

        let err = DomainError::EmptySegment(LineId::from("Blue"));
        assert_eq!(err.to_string(), "segment on line Blue has no stations");
    }
}

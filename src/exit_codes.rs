//! Exit code constants for the projlint CLI.
//!
//! - 0: Success (all files structurally valid)
//! - 1: User error (bad args, unreadable file, invalid config)
//! - 2: Validation failure (one or more structural findings)
//! - 3: Syntax failure (malformed XML)

/// Successful execution.
pub const SUCCESS: i32 = 0;

/// User error: bad arguments, unreadable input, or invalid config.
pub const USER_ERROR: i32 = 1;

/// Validation failure: structural findings were reported.
pub const VALIDATION_FAILURE: i32 = 2;

/// Syntax failure: the XML could not be parsed into a tree.
pub const SYNTAX_FAILURE: i32 = 3;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exit_codes_are_distinct() {
        let codes = [SUCCESS, USER_ERROR, VALIDATION_FAILURE, SYNTAX_FAILURE];
        for (i, &a) in codes.iter().enumerate() {
            for (j, &b) in codes.iter().enumerate() {
                if i != j {
                    assert_ne!(a, b, "Exit codes must be distinct");
                }
            }
        }
    }

    #[test]
    fn exit_codes_match_documented_values() {
        assert_eq!(SUCCESS, 0);
        assert_eq!(USER_ERROR, 1);
        assert_eq!(VALIDATION_FAILURE, 2);
        assert_eq!(SYNTAX_FAILURE, 3);
    }
}

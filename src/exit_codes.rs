//! Exit code constants for the gacha CLI.
//!
//! - 0: Success
//! - 1: User error (bad args, oversized input)
//! - 2: Configuration error (unreadable or invalid config file)
//! - 3: I/O failure (reading input, writing output)

/// Successful execution.
pub const SUCCESS: i32 = 0;

/// User error: bad arguments or unusable input.
pub const USER_ERROR: i32 = 1;

/// Configuration error: config file missing, malformed, or invalid.
pub const CONFIG_ERROR: i32 = 2;

/// I/O failure: input could not be read or output could not be written.
pub const IO_ERROR: i32 = 3;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exit_codes_are_distinct() {
        let codes = [SUCCESS, USER_ERROR, CONFIG_ERROR, IO_ERROR];
        for (i, &a) in codes.iter().enumerate() {
            for (j, &b) in codes.iter().enumerate() {
                if i != j {
                    assert_ne!(a, b, "Exit codes must be distinct");
                }
            }
        }
    }

    #[test]
    fn exit_codes_are_stable() {
        assert_eq!(SUCCESS, 0);
        assert_eq!(USER_ERROR, 1);
        assert_eq!(CONFIG_ERROR, 2);
        assert_eq!(IO_ERROR, 3);
    }
}

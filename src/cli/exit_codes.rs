//! Exit codes for the CLI
//!
//! Standard exit codes used by StyleLens so that scripts can tell a clean
//! text from a flagged one.
//!
//! # Exit Code Reference
//!
//! | Code | Constant | Meaning | Example |
//! |------|----------|---------|---------|
//! | 0 | `SUCCESS` | Success | No rule matched |
//! | 2 | `MATCHES_FOUND` | Matches | At least one rule matched |
//! | 3 | `ERROR` | Runtime error | Rule file not found, malformed input |
//!
//! # Usage
//!
//! ```rust,ignore
//! use stylelens::cli::exit_codes;
//!
//! std::process::exit(exit_codes::MATCHES_FOUND);
//! ```

/// Success - nothing matched or the command completed normally.
pub const SUCCESS: i32 = 0;

/// At least one rule matched the checked text.
pub const MATCHES_FOUND: i32 = 2;

/// Runtime error.
///
/// Used when:
/// - The rule file is missing or malformed
/// - The tagged input cannot be read or parsed
/// - The configuration file is invalid or would be overwritten
pub const ERROR: i32 = 3;

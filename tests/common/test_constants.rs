//! Shared constants for integration tests.
//!
//! Integration tests are compiled as separate crates (one per top-level file in
//! `tests/`). Placing shared constants under `tests/common/` avoids creating an
//! additional integration test binary while still allowing reuse via:
//!
//! ```rust
//! #[path = "common/test_constants.rs"]
//! mod test_constants;
//! ```

/// Instance type used when configuration does not name one.
pub const DEFAULT_INSTANCE_TYPE: &str = "t3.micro";

/// Well-formed image id.
pub const IMAGE_ID: &str = "ami-0abcdef1234567890";

/// Well-formed instance id.
pub const INSTANCE_ID: &str = "i-0123456789abcdef0";

/// Second well-formed instance id.
pub const OTHER_INSTANCE_ID: &str = "i-0fedcba9876543210";

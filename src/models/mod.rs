//! Request, response and record types shared by the three services.
//!
//! Field names are camelCase on the wire.

/// Account balance types
pub mod account;
/// Lenient decoding of request fields
pub mod de;
/// Payment request and response types
pub mod payment;
/// Transaction record types
pub mod transaction;

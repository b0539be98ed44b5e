//! Search result types
//!
//! The relay passes provider payloads through without parsing them; these
//! types are for consumers that want the organic results out of that JSON.

mod types;

pub use types::*;

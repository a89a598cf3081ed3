//! Shared data structures
//!
//! - Verification records loaded from the offline knowledge document
//! - Conversation messages consumed from and returned to the host

mod message;
mod verification;

pub use message::*;
pub use verification::*;

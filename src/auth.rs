//! Login session state, stored credentials, and secret handling.

pub mod secret;
pub mod session;

pub use secret::*;
pub use session::*;

//! Session token handling
//!
//! Sign-in itself happens against Google on the frontend; the backend
//! verifies the asserted profile against the allowed email domain and
//! issues its own JWT for subsequent API calls. This module owns that
//! token lifecycle.

mod jwt;

pub use jwt::{Claims, JwtHandler};

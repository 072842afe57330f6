//! Chat intent classification and navigation routing
//!
//! This module turns a free-text chat message into an intent category,
//! a confidence score, and a short list of navigation suggestions. All
//! of it is pure string matching over static tables; the completion
//! backend builds on top of this output but is never required for it.

mod classifier;
mod keywords;
mod responses;
mod router;


// Re-export public types and structs
pub use classifier::{detect_intent, IntentAnalysis};
pub use keywords::Intent;
pub use responses::{
    canned_response, CONNECTION_FALLBACK, DEFAULT_GREETING, EMPTY_COMPLETION_FALLBACK,
};
pub use router::{
    generate_routing_suggestions, navigation_option, resolve_suggestions, NavigationKey,
    NavigationOption, NAVIGATION_OPTIONS,
};

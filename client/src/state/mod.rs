//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by domain (`session`, `meeting`) so individual components
//! can depend on small focused models. Both are provided as `RwSignal`
//! contexts by the root component and live only for the page's lifetime.

pub mod meeting;
pub mod session;

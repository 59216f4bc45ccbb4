//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! The current user and system info are fetched once in `App` and provided
//! through context as `RwSignal`s; components re-render when they resolve.

pub mod current_user;

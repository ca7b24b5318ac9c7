//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State lives in plain structs wrapped in `RwSignal`s provided via context
//! by the root component, so the append/trim logic stays natively testable.

pub mod chat;

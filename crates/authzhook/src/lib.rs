//! Top-level facade crate for authzhook.
//!
//! Re-exports core types and the gateway library so users can depend on a single crate.

pub mod core {
    pub use authzhook_core::*;
}

pub mod gateway {
    pub use authzhook_gateway::*;
}

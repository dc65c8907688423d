//! Top-level facade crate for dbguard.
//!
//! Re-exports the protocol/error core and the gate library so users can depend on a single crate.

pub mod core {
    pub use dbguard_core::*;
}

pub mod gate {
    pub use dbguard_gate::*;
}

//! Histfeed Core — domain types and the parameter-validation layer.
//!
//! Request-construction code calls into this crate before any network
//! resource is touched:
//! - Closed enum-valued parameters with canonical string forms
//! - Enum coercion/validation with self-describing errors
//! - Gateway endpoint URL normalization
//!
//! Everything here is pure and synchronous: no I/O, no shared state, no
//! locks. An invalid parameter short-circuits the request path with zero
//! network side effects.

pub mod enums;
pub mod error;
pub mod validation;

pub use enums::{
    Compression, Delivery, Encoding, Packaging, ParamEnum, SType, Schema, SplitDuration,
};
pub use error::{Error, Result};
pub use validation::{validate_enum, validate_gateway, validate_maybe_enum, ParamValue};

#[cfg(test)]
mod tests {
    use super::*;

    /// Compile-time check: everything exported here is Send + Sync, so the
    /// validation layer can be called from any thread without coordination.
    #[allow(dead_code)]
    fn assert_send_sync() {
        fn require_send<T: Send>() {}
        fn require_sync<T: Sync>() {}

        require_send::<Schema>();
        require_sync::<Schema>();
        require_send::<Encoding>();
        require_sync::<Encoding>();
        require_send::<Compression>();
        require_sync::<Compression>();
        require_send::<SType>();
        require_sync::<SType>();
        require_send::<SplitDuration>();
        require_sync::<SplitDuration>();
        require_send::<Packaging>();
        require_sync::<Packaging>();
        require_send::<Delivery>();
        require_sync::<Delivery>();

        require_send::<Error>();
        require_sync::<Error>();
        require_send::<ParamValue<Schema>>();
        require_sync::<ParamValue<Schema>>();
    }
}

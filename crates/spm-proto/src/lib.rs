//! ## Crate layout
//! - `core`: `RepeatedField`, the `Message` / `MessageCodec` traits, and `Error`.
//! - `message`: attribute macro that expands a field list into a message
//!   struct with protobuf-style accessors.
//!
//! Generated code resolves every runtime path through `::spm_proto`, so a
//! schema crate only needs this crate as a dependency.

pub use spm_proto_core as core;
pub use spm_proto_derive::message;

/// re-exports
///
/// generated code reaches its dependencies through here, so schema crates
/// do not have to list serde or tracing in their own Cargo.toml
#[doc(hidden)]
pub mod __reexports {
    pub use serde;
    pub use tracing;
}

//
// Runtime
//

pub use spm_proto_core::{DEBUG_PLACEHOLDER, Error, Message, MessageCodec, RepeatedField, repeated};

///
/// Prelude
/// using _ brings traits into scope and avoids name conflicts
///

pub mod prelude {
    pub use crate::{
        Error, RepeatedField,
        core::message::{Message as _, MessageCodec as _},
        message, repeated,
    };
    pub use serde::{Deserialize, Serialize};
}

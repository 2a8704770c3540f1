//! `#[message]`: expands a declarative field list into a message struct
//! with protobuf-style accessors.
//!
//! ```ignore
//! #[message(
//!     debug = "text",
//!     codec,
//!     fields(
//!         repeated(ident = "pieces", ty = "SentencePiece"),
//!         string(ident = "text"),
//!         scalar(ident = "score", ty = "f32", default = 0.0),
//!     )
//! )]
//! pub struct SentencePieceText;
//! ```

use proc_macro::TokenStream;

mod helper;
mod imp;
mod node;
mod validate;

/// Generate a message struct, its accessors, `Default`, and `Message`
/// (plus the inert `MessageCodec` when `codec` is set).
#[proc_macro_attribute]
pub fn message(args: TokenStream, input: TokenStream) -> TokenStream {
    node::expand_message(args.into(), input.into()).into()
}

///
/// Prelude
///

mod prelude {
    pub use crate::{
        helper::*,
        node::{Def, Field, FieldKind, FieldList, Message},
    };
    pub use darling::{Error as DarlingError, FromMeta, ast::NestedMeta};
    pub use proc_macro2::TokenStream;
    pub use quote::{ToTokens, format_ident, quote};
    pub use syn::{Expr, Ident, Type, ext::IdentExt};
}

use crate::{imp, prelude::*, validate};
use syn::ItemStruct;

///
/// MessageArgs
///
/// Everything inside `#[message(...)]`.
///

#[derive(Debug, FromMeta)]
struct MessageArgs {
    #[darling(default)]
    name: Option<String>,

    #[darling(default)]
    debug: Option<Ident>,

    #[darling(default)]
    codec: bool,

    #[darling(default)]
    fields: FieldList,
}

///
/// Message
///

#[derive(Clone, Debug)]
pub struct Message {
    pub def: Def,

    /// Name reported through `Message::NAME`; defaults to the struct ident.
    pub name: String,

    /// String field echoed by `utf8_debug_string`.
    pub debug: Option<Ident>,

    /// Emit the inert `MessageCodec` impl.
    pub codec: bool,

    pub fields: FieldList,
}

impl Message {
    fn new(def: Def, args: MessageArgs) -> Self {
        let name = args.name.unwrap_or_else(|| def.ident().to_string());

        Self {
            def,
            name,
            debug: args.debug,
            codec: args.codec,
            fields: args.fields,
        }
    }

    /// Emit the struct definition with its private storage slots.
    fn type_part(&self) -> TokenStream {
        let Def { ident, vis, attrs } = &self.def;
        let serde = reexport("serde");
        let serde_path = format!("{serde}").replace(' ', "");

        let slots = self.fields.iter().map(|f| {
            let ident = &f.ident;
            let ty = f.storage_type();

            quote!(#ident: #ty)
        });

        quote! {
            #(#attrs)*
            #[derive(Clone, Debug, PartialEq, #serde::Serialize, #serde::Deserialize)]
            #[serde(crate = #serde_path, default)]
            #vis struct #ident {
                #(#slots),*
            }
        }
    }
}

impl ToTokens for Message {
    fn to_tokens(&self, tokens: &mut TokenStream) {
        tokens.extend(self.type_part());
        tokens.extend(imp::default::default_impl(self));
        tokens.extend(imp::accessor::inherent_impl(self));
        tokens.extend(imp::message::message_impl(self));

        if self.codec {
            tokens.extend(imp::message::codec_impl(self));
        }
    }
}

/// Entry point for `#[message]`.
pub fn expand_message(args: TokenStream, input: TokenStream) -> TokenStream {
    match try_expand_message(args, input) {
        Ok(tokens) => tokens,
        Err(err) => err.write_errors(),
    }
}

fn try_expand_message(args: TokenStream, input: TokenStream) -> Result<TokenStream, DarlingError> {
    let list = NestedMeta::parse_meta_list(args)?;
    let args = MessageArgs::from_list(&list)?;
    let item: ItemStruct = syn::parse2(input)?;
    let def = Def::from_item(&item)?;

    let node = Message::new(def, args);
    validate::message(&node)?;

    Ok(node.to_token_stream())
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;

    fn expand(args: TokenStream, item: TokenStream) -> String {
        expand_message(args, item).to_string()
    }

    #[test]
    fn scalar_field_gets_getter_setter_and_presence_stub() {
        let out = expand(
            quote!(fields(scalar(ident = "vocab_size", ty = "i32", default = 8000))),
            quote!(pub struct TrainerSpec;),
        );

        assert!(out.contains("vocab_size : i32"), "{out}");
        assert!(out.contains("pub const fn vocab_size (& self) -> i32"), "{out}");
        assert!(out.contains("fn set_vocab_size"), "{out}");
        assert!(out.contains("fn has_vocab_size"), "{out}");
        assert!(out.contains("vocab_size : 8000"), "{out}");
        assert!(!out.contains("compile_error"), "{out}");
    }

    #[test]
    fn repeated_field_gets_the_full_container_surface() {
        let out = expand(
            quote!(fields(repeated(ident = "pieces", ty = "SentencePiece"))),
            quote!(pub struct SentencePieceText;),
        );

        for accessor in [
            "fn pieces (",
            "fn pieces_at (",
            "fn add_pieces (",
            "fn mutable_pieces (",
            "fn mutable_pieces_field (",
            "fn pieces_size (",
        ] {
            assert!(out.contains(accessor), "missing {accessor}: {out}");
        }
        assert!(out.contains("RepeatedField < SentencePiece >"), "{out}");
    }

    #[test]
    fn string_default_is_applied_in_default_and_clear() {
        let out = expand(
            quote!(fields(string(ident = "unk_surface", default = " \u{2047} "))),
            quote!(pub struct TrainerSpec;),
        );

        assert!(out.contains("String :: from (\" \u{2047} \")"), "{out}");
        assert!(out.contains("self . unk_surface . push_str"), "{out}");
    }

    #[test]
    fn codec_flag_emits_inert_codec_impl() {
        let with = expand(quote!(codec), quote!(pub struct ModelProto;));
        let without = expand(quote!(), quote!(pub struct ModelProto;));

        assert!(with.contains("MessageCodec for ModelProto"), "{with}");
        assert!(!without.contains("MessageCodec"), "{without}");
    }

    #[test]
    fn name_override_is_reported_through_message_name() {
        let out = expand(
            quote!(name = "ModelProto.SentencePiece"),
            quote!(pub struct SentencePiece;),
        );

        assert!(out.contains("\"ModelProto.SentencePiece\""), "{out}");
    }

    #[test]
    fn raw_identifier_fields_keep_a_raw_getter() {
        let out = expand(
            quote!(fields(scalar(ident = "r#type", ty = "PieceType"))),
            quote!(pub struct SentencePiece;),
        );

        assert!(out.contains("fn r#type ("), "{out}");
        assert!(out.contains("fn set_type ("), "{out}");
    }

    #[test]
    fn doc_comments_carry_over() {
        let out = expand(quote!(), quote!(#[doc = "Model parameters."] pub struct ModelProto;));

        assert!(out.contains("Model parameters."), "{out}");
    }

    #[test]
    fn struct_with_fields_is_rejected() {
        let out = expand(quote!(), quote!(pub struct ModelProto { pieces: u32 }));

        assert!(out.contains("compile_error"), "{out}");
        assert!(out.contains("must be unit structs"), "{out}");
    }

    #[test]
    fn unknown_category_is_rejected() {
        let out = expand(
            quote!(fields(optional(ident = "x", ty = "u32"))),
            quote!(pub struct M;),
        );

        assert!(out.contains("compile_error"), "{out}");
    }
}

use crate::prelude::*;

// message_impl
pub fn message_impl(node: &Message) -> TokenStream {
    let runtime = runtime();
    let tracing = reexport("tracing");
    let ident = node.def.ident();
    let name = &node.name;
    let clears = node.fields.iter().map(Field::clear_stmt);

    let debug_string = match &node.debug {
        Some(field) => quote!(::std::clone::Clone::clone(&self.#field)),
        None => quote!(::std::string::String::from(#runtime::DEBUG_PLACEHOLDER)),
    };

    quote! {
        impl #runtime::Message for #ident {
            const NAME: &'static str = #name;

            fn clear(&mut self) {
                #tracing::trace!(message_type = Self::NAME, "clearing message");
                #(#clears)*
            }

            fn utf8_debug_string(&self) -> ::std::string::String {
                #debug_string
            }
        }
    }
}

// codec_impl
// Both methods stay inert: no bytes are read and none are produced.
pub fn codec_impl(node: &Message) -> TokenStream {
    let runtime = runtime();
    let tracing = reexport("tracing");
    let ident = node.def.ident();

    quote! {
        impl #runtime::MessageCodec for #ident {
            fn parse_from_array(
                &mut self,
                data: &[u8],
            ) -> ::core::result::Result<(), #runtime::Error> {
                #tracing::debug!(
                    message_type = <Self as #runtime::Message>::NAME,
                    ignored_bytes = data.len(),
                    "parse_from_array is a stub; input ignored"
                );

                ::core::result::Result::Ok(())
            }

            fn serialize_as_string(&self) -> ::std::string::String {
                #tracing::debug!(
                    message_type = <Self as #runtime::Message>::NAME,
                    "serialize_as_string is a stub; returning empty output"
                );

                ::std::string::String::new()
            }
        }
    }
}

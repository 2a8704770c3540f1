use crate::prelude::*;

// default_impl
pub fn default_impl(node: &Message) -> TokenStream {
    let ident = node.def.ident();

    let assignments = node.fields.iter().map(|f| {
        let ident = &f.ident;
        let expr = f.default_expr();

        quote!(#ident: #expr)
    });

    quote! {
        impl ::core::default::Default for #ident {
            fn default() -> Self {
                Self { #(#assignments),* }
            }
        }
    }
}

use proc_macro2::TokenStream;
use quote::quote;

// Path helpers

/// Crate root that generated code resolves runtime items through.
pub fn runtime() -> TokenStream {
    quote!(::spm_proto)
}

/// Path to a dependency re-exported by the runtime facade.
pub fn reexport(krate: &str) -> TokenStream {
    let runtime = runtime();
    let krate = syn::Ident::new(krate, proc_macro2::Span::call_site());

    quote!(#runtime::__reexports::#krate)
}

/// Emit a `#[doc = "..."]` attribute.
pub fn doc(text: &str) -> TokenStream {
    quote!(#[doc = #text])
}

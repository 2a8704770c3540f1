use crate::prelude::*;

// inherent_impl
pub fn inherent_impl(node: &Message) -> TokenStream {
    let ident = node.def.ident();
    let accessors = node.fields.iter().map(field_accessors);

    quote! {
        impl #ident {
            #(#accessors)*
        }
    }
}

fn field_accessors(field: &Field) -> TokenStream {
    match &field.kind {
        FieldKind::Scalar { ty, .. } => scalar_accessors(field, ty),
        FieldKind::String { .. } => string_accessors(field),
        FieldKind::Repeated { ty } => repeated_accessors(field, ty),
        FieldKind::Member { ty } => member_accessors(field, ty),
    }
}

fn presence_stub(field: &Field) -> TokenStream {
    let name = field.ident.unraw();
    let has = format_ident!("has_{}", name);
    let doc = doc(&format!(
        "Presence probe for `{name}`. Fields are always present, so this is always `true`."
    ));

    quote! {
        #doc
        #[must_use]
        pub const fn #has(&self) -> bool {
            true
        }
    }
}

fn scalar_accessors(field: &Field, ty: &Type) -> TokenStream {
    let ident = &field.ident;
    let name = ident.unraw();
    let set = format_ident!("set_{}", name);
    let has = presence_stub(field);
    let get_doc = doc(&format!("Returns `{name}`."));
    let set_doc = doc(&format!("Replaces `{name}`."));

    quote! {
        #get_doc
        #[must_use]
        pub const fn #ident(&self) -> #ty {
            self.#ident
        }

        #set_doc
        pub fn #set(&mut self, value: #ty) {
            self.#ident = value;
        }

        #has
    }
}

fn string_accessors(field: &Field) -> TokenStream {
    let ident = &field.ident;
    let name = ident.unraw();
    let set = format_ident!("set_{}", name);
    let set_bytes = format_ident!("set_{}_bytes", name);
    let set_cstr = format_ident!("set_{}_cstr", name);
    let mutable = format_ident!("mutable_{}", name);
    let has = presence_stub(field);
    let get_doc = doc(&format!("Returns `{name}`."));
    let set_doc = doc(&format!("Replaces `{name}`."));
    let bytes_doc = doc(&format!(
        "Replaces `{name}` with the contents of a raw byte buffer. \
         Invalid UTF-8 is replaced with U+FFFD."
    ));
    let cstr_doc = doc(&format!(
        "Replaces `{name}` with NUL-terminated text. Invalid UTF-8 is replaced with U+FFFD."
    ));
    let mutable_doc = doc(&format!("Returns `{name}` for in-place editing."));

    quote! {
        #get_doc
        #[must_use]
        pub fn #ident(&self) -> &str {
            &self.#ident
        }

        #set_doc
        pub fn #set(&mut self, value: impl ::core::convert::Into<::std::string::String>) {
            self.#ident = value.into();
        }

        #bytes_doc
        pub fn #set_bytes(&mut self, value: &[u8]) {
            self.#ident = ::std::string::String::from_utf8_lossy(value).into_owned();
        }

        #cstr_doc
        pub fn #set_cstr(&mut self, value: &::core::ffi::CStr) {
            self.#ident = value.to_string_lossy().into_owned();
        }

        #mutable_doc
        pub fn #mutable(&mut self) -> &mut ::std::string::String {
            &mut self.#ident
        }

        #has
    }
}

fn repeated_accessors(field: &Field, ty: &Type) -> TokenStream {
    let runtime = runtime();
    let ident = &field.ident;
    let name = ident.unraw();
    let at = format_ident!("{}_at", name);
    let add = format_ident!("add_{}", name);
    let mutable = format_ident!("mutable_{}", name);
    let mutable_field = format_ident!("mutable_{}_field", name);
    let size = format_ident!("{}_size", name);
    let add_doc = doc(&format!(
        "Appends a default element to `{name}` and returns it for editing. \
         The returned borrow must end before `{name}` is touched again."
    ));

    quote! {
        #[must_use]
        pub const fn #ident(&self) -> &#runtime::RepeatedField<#ty> {
            &self.#ident
        }

        /// Panics if `index` is out of bounds.
        #[must_use]
        pub fn #at(&self, index: usize) -> &#ty {
            self.#ident.at(index)
        }

        #add_doc
        pub fn #add(&mut self) -> &mut #ty {
            self.#ident.add()
        }

        /// Panics if `index` is out of bounds.
        pub fn #mutable(&mut self, index: usize) -> &mut #ty {
            self.#ident.mutable(index)
        }

        pub fn #mutable_field(&mut self) -> &mut #runtime::RepeatedField<#ty> {
            &mut self.#ident
        }

        #[must_use]
        pub const fn #size(&self) -> usize {
            self.#ident.len()
        }
    }
}

fn member_accessors(field: &Field, ty: &Type) -> TokenStream {
    let ident = &field.ident;
    let name = ident.unraw();
    let mutable = format_ident!("mutable_{}", name);
    let has = presence_stub(field);

    quote! {
        #[must_use]
        pub const fn #ident(&self) -> &#ty {
            &self.#ident
        }

        pub fn #mutable(&mut self) -> &mut #ty {
            &mut self.#ident
        }

        #has
    }
}

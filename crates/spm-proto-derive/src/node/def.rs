use crate::prelude::*;
use syn::{Attribute, Fields, ItemStruct, Visibility};

///
/// Def
///
/// The item the attribute was placed on: a unit struct whose name,
/// visibility and outer attributes (doc comments) carry over to the
/// generated type.
///

#[derive(Clone, Debug)]
pub struct Def {
    pub ident: Ident,
    pub vis: Visibility,
    pub attrs: Vec<Attribute>,
}

impl Def {
    pub fn from_item(item: &ItemStruct) -> Result<Self, DarlingError> {
        if !matches!(item.fields, Fields::Unit) {
            return Err(DarlingError::custom(
                "message structs must be unit structs; declare fields in #[message(fields(...))]",
            )
            .with_span(&item.fields));
        }

        if !item.generics.params.is_empty() {
            return Err(
                DarlingError::custom("message structs cannot be generic").with_span(&item.generics)
            );
        }

        Ok(Self {
            ident: item.ident.clone(),
            vis: item.vis.clone(),
            attrs: item.attrs.clone(),
        })
    }

    pub const fn ident(&self) -> &Ident {
        &self.ident
    }
}

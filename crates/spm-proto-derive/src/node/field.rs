use crate::prelude::*;
use std::slice::Iter;

///
/// FieldList
///
/// Ordered field declarations. Parsed by hand so the declaration order of
/// mixed categories is preserved in the generated struct.
///

#[derive(Clone, Debug, Default)]
pub struct FieldList {
    pub fields: Vec<Field>,
}

impl FieldList {
    pub fn get(&self, name: &str) -> Option<&Field> {
        self.fields.iter().find(|f| f.name() == name)
    }

    pub fn iter(&self) -> Iter<'_, Field> {
        self.fields.iter()
    }
}

impl FromMeta for FieldList {
    fn from_list(items: &[NestedMeta]) -> Result<Self, DarlingError> {
        let mut errors = DarlingError::accumulator();
        let mut fields = Vec::with_capacity(items.len());

        for item in items {
            let NestedMeta::Meta(meta) = item else {
                errors.push(DarlingError::unsupported_format("literal").with_span(item));
                continue;
            };

            if let Some(field) = errors.handle(Field::from_meta(meta)) {
                fields.push(field);
            }
        }

        errors.finish_with(Self { fields })
    }
}

impl<'a> IntoIterator for &'a FieldList {
    type Item = &'a Field;
    type IntoIter = Iter<'a, Field>;

    fn into_iter(self) -> Self::IntoIter {
        self.fields.iter()
    }
}

///
/// Field
///

#[derive(Clone, Debug)]
pub struct Field {
    pub ident: Ident,
    pub kind: FieldKind,
}

///
/// FieldKind
///
/// One variant per field-definition generator.
///

#[derive(Clone, Debug)]
pub enum FieldKind {
    Scalar { ty: Type, default: Option<Expr> },
    String { default: Option<String> },
    Repeated { ty: Type },
    Member { ty: Type },
}

#[derive(FromMeta)]
struct ScalarArgs {
    ident: Ident,
    ty: Type,
    #[darling(default)]
    default: Option<Expr>,
}

#[derive(FromMeta)]
struct StringArgs {
    ident: Ident,
    #[darling(default)]
    default: Option<String>,
}

#[derive(FromMeta)]
struct TypedArgs {
    ident: Ident,
    ty: Type,
}

impl Field {
    const CATEGORIES: [&'static str; 4] = ["scalar", "string", "repeated", "member"];

    fn from_meta(meta: &syn::Meta) -> Result<Self, DarlingError> {
        let path = meta.path();

        let field = if path.is_ident("scalar") {
            let args = ScalarArgs::from_meta(meta)?;
            Self {
                ident: args.ident,
                kind: FieldKind::Scalar {
                    ty: args.ty,
                    default: args.default,
                },
            }
        } else if path.is_ident("string") {
            let args = StringArgs::from_meta(meta)?;
            Self {
                ident: args.ident,
                kind: FieldKind::String {
                    default: args.default,
                },
            }
        } else if path.is_ident("repeated") {
            let args = TypedArgs::from_meta(meta)?;
            Self {
                ident: args.ident,
                kind: FieldKind::Repeated { ty: args.ty },
            }
        } else if path.is_ident("member") {
            let args = TypedArgs::from_meta(meta)?;
            Self {
                ident: args.ident,
                kind: FieldKind::Member { ty: args.ty },
            }
        } else {
            return Err(
                DarlingError::unknown_field_path_with_alts(path, &Self::CATEGORIES).with_span(path),
            );
        };

        Ok(field)
    }

    /// Field name without any raw-identifier prefix.
    pub fn name(&self) -> String {
        self.ident.unraw().to_string()
    }

    pub const fn is_string(&self) -> bool {
        matches!(self.kind, FieldKind::String { .. })
    }

    /// Every method name this field contributes to the generated impl.
    pub fn accessor_idents(&self) -> Vec<Ident> {
        let getter = self.ident.clone();
        let name = self.ident.unraw();

        match &self.kind {
            FieldKind::Scalar { .. } => vec![
                getter,
                format_ident!("set_{}", name),
                format_ident!("has_{}", name),
            ],
            FieldKind::String { .. } => vec![
                getter,
                format_ident!("set_{}", name),
                format_ident!("set_{}_bytes", name),
                format_ident!("set_{}_cstr", name),
                format_ident!("mutable_{}", name),
                format_ident!("has_{}", name),
            ],
            FieldKind::Repeated { .. } => vec![
                getter,
                format_ident!("{}_at", name),
                format_ident!("add_{}", name),
                format_ident!("mutable_{}", name),
                format_ident!("mutable_{}_field", name),
                format_ident!("{}_size", name),
            ],
            FieldKind::Member { .. } => vec![
                getter,
                format_ident!("mutable_{}", name),
                format_ident!("has_{}", name),
            ],
        }
    }

    /// Type of the private storage slot.
    pub fn storage_type(&self) -> TokenStream {
        let runtime = runtime();

        match &self.kind {
            FieldKind::Scalar { ty, .. } | FieldKind::Member { ty } => quote!(#ty),
            FieldKind::String { .. } => quote!(::std::string::String),
            FieldKind::Repeated { ty } => quote!(#runtime::RepeatedField<#ty>),
        }
    }

    /// Expression producing the declared default.
    pub fn default_expr(&self) -> TokenStream {
        let runtime = runtime();

        match &self.kind {
            FieldKind::Scalar {
                default: Some(default),
                ..
            } => quote!(#default),
            FieldKind::Scalar { default: None, .. } | FieldKind::Member { .. } => {
                quote!(::core::default::Default::default())
            }
            FieldKind::String {
                default: Some(default),
            } => quote!(::std::string::String::from(#default)),
            FieldKind::String { default: None } => quote!(::std::string::String::new()),
            FieldKind::Repeated { .. } => quote!(#runtime::RepeatedField::new()),
        }
    }

    /// Statement that resets this field inside `Message::clear`.
    pub fn clear_stmt(&self) -> TokenStream {
        let runtime = runtime();
        let ident = &self.ident;

        match &self.kind {
            FieldKind::Scalar { .. } => {
                let default = self.default_expr();
                quote!(self.#ident = #default;)
            }
            FieldKind::String {
                default: Some(default),
            } => quote! {
                self.#ident.clear();
                self.#ident.push_str(#default);
            },
            FieldKind::String { default: None } | FieldKind::Repeated { .. } => {
                quote!(self.#ident.clear();)
            }
            FieldKind::Member { .. } => quote!(#runtime::Message::clear(&mut self.#ident);),
        }
    }
}

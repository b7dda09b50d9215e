//! Derive macro for `unstruct` records.
//!
//! This crate only houses the `#[derive(Record)]` implementation; the
//! traits it implements live in `unstruct`, which re-exports the macro.

use proc_macro::TokenStream;
use proc_macro2::Span;
use quote::quote;
use syn::punctuated::Punctuated;
use syn::spanned::Spanned;
use syn::{
    parse_macro_input, Attribute, Data, DeriveInput, Expr, ExprLit, Field, Fields, FieldsNamed,
    GenericParam, Lit, Meta,
};

const UNSUPPORTED_CONTAINER_ARG: &str =
    "unsupported #[record(...)] argument; hint: the only container argument is `name = \"...\"`";
const UNSUPPORTED_FIELD_ARG: &str =
    "unsupported #[record(...)] argument; hint: field arguments are `internal` and `rename = \"...\"`";

/// Derives `unstruct::Record` and `unstruct::ToValue` for a struct with
/// named fields.
///
/// The schema name defaults to the struct name; `#[record(name = "...")]`
/// overrides it. On fields, `#[record(internal)]` tags the field internal
/// and `#[record(rename = "...")]` overrides the recorded name.
#[proc_macro_derive(Record, attributes(record))]
pub fn derive_record(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    match expand_record(&input) {
        Ok(tokens) => TokenStream::from(tokens),
        Err(err) => TokenStream::from(err.into_compile_error()),
    }
}

fn expand_record(input: &DeriveInput) -> syn::Result<proc_macro2::TokenStream> {
    let fields = validate_input(input)?;
    let container = parse_container_attrs(input)?;

    let mut specs = Vec::new();
    let mut value_exprs = Vec::new();
    let mut names: Vec<String> = Vec::new();
    for field in &fields.named {
        let ident = field
            .ident
            .as_ref()
            .ok_or_else(|| syn::Error::new_spanned(field, "expected a named field"))?;
        let attrs = parse_field_attrs(field)?;
        let name = attrs.rename.unwrap_or_else(|| ident.to_string());
        if names.contains(&name) {
            return Err(syn::Error::new_spanned(
                ident,
                format!(
                    "duplicate record field name `{}`; hint: rename one of the fields",
                    name
                ),
            ));
        }
        let type_name = type_name_string(&field.ty);
        specs.push(if attrs.internal {
            quote! { ::unstruct::FieldSpec::new(#name, #type_name).internal() }
        } else {
            quote! { ::unstruct::FieldSpec::new(#name, #type_name) }
        });
        value_exprs.push(quote! { ::unstruct::ToValue::to_value(&self.#ident) });
        names.push(name);
    }

    let ident = &input.ident;
    let record_name = container.name.unwrap_or_else(|| ident.to_string());
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    Ok(quote! {
        impl #impl_generics ::unstruct::Record for #ident #ty_generics #where_clause {
            fn descriptor() -> &'static ::unstruct::RecordDescriptor {
                static FIELDS: &[::unstruct::FieldSpec] = &[#(#specs),*];
                static DESCRIPTOR: ::unstruct::RecordDescriptor =
                    ::unstruct::RecordDescriptor::new(#record_name, FIELDS);
                &DESCRIPTOR
            }

            fn to_record(&self) -> ::unstruct::RecordValue {
                ::unstruct::RecordValue::new(
                    <Self as ::unstruct::Record>::descriptor(),
                    vec![#(#value_exprs),*],
                )
            }
        }

        impl #impl_generics ::unstruct::ToValue for #ident #ty_generics #where_clause {
            fn to_value(&self) -> ::unstruct::Value {
                ::unstruct::Value::Record(::unstruct::Record::to_record(self))
            }
        }
    })
}

fn validate_input(input: &DeriveInput) -> syn::Result<&FieldsNamed> {
    if let Some(param) = input
        .generics
        .params
        .iter()
        .find(|param| !matches!(param, GenericParam::Lifetime(_)))
    {
        return Err(syn::Error::new_spanned(
            param,
            "Record cannot be derived for generic types; hint: remove the type parameters or write the impl by hand",
        ));
    }
    match &input.data {
        Data::Struct(data) => match &data.fields {
            Fields::Named(fields) => Ok(fields),
            Fields::Unnamed(_) => Err(syn::Error::new_spanned(
                &input.ident,
                "Record cannot be derived for tuple structs; hint: use named fields",
            )),
            Fields::Unit => Err(syn::Error::new_spanned(
                &input.ident,
                "Record cannot be derived for unit structs; hint: use a struct with named fields",
            )),
        },
        Data::Enum(_) => Err(syn::Error::new_spanned(
            &input.ident,
            "Record cannot be derived for enums; hint: use a struct with named fields",
        )),
        Data::Union(data) => Err(syn::Error::new(
            data.union_token.span,
            "Record does not support `union` items; hint: use a struct with named fields",
        )),
    }
}

#[derive(Debug)]
struct ContainerAttrs {
    name: Option<String>,
}

fn parse_container_attrs(input: &DeriveInput) -> syn::Result<ContainerAttrs> {
    let mut name = None;
    for attr in &input.attrs {
        if !attr.path().is_ident("record") {
            continue;
        }
        for meta in parse_meta_list(attr)? {
            match meta {
                Meta::NameValue(meta) if meta.path.is_ident("name") => {
                    name = Some(parse_string_expr(&meta.value, meta.span())?);
                }
                other => {
                    return Err(syn::Error::new_spanned(other, UNSUPPORTED_CONTAINER_ARG));
                }
            }
        }
    }
    Ok(ContainerAttrs { name })
}

#[derive(Debug)]
struct FieldAttrs {
    internal: bool,
    rename: Option<String>,
}

fn parse_field_attrs(field: &Field) -> syn::Result<FieldAttrs> {
    let mut attrs = FieldAttrs {
        internal: false,
        rename: None,
    };
    for attr in &field.attrs {
        if !attr.path().is_ident("record") {
            continue;
        }
        for meta in parse_meta_list(attr)? {
            match meta {
                Meta::Path(path) if path.is_ident("internal") => {
                    attrs.internal = true;
                }
                Meta::NameValue(meta) if meta.path.is_ident("rename") => {
                    attrs.rename = Some(parse_string_expr(&meta.value, meta.span())?);
                }
                other => {
                    return Err(syn::Error::new_spanned(other, UNSUPPORTED_FIELD_ARG));
                }
            }
        }
    }
    Ok(attrs)
}

fn parse_meta_list(attr: &Attribute) -> syn::Result<Vec<Meta>> {
    Ok(attr
        .parse_args_with(Punctuated::<Meta, syn::Token![,]>::parse_terminated)?
        .into_iter()
        .collect())
}

fn parse_string_expr(expr: &Expr, span: Span) -> syn::Result<String> {
    if let Expr::Lit(ExprLit {
        lit: Lit::Str(s), ..
    }) = expr
    {
        Ok(s.value())
    } else {
        Err(syn::Error::new(
            span,
            "expected string literal; hint: wrap the value in quotes",
        ))
    }
}

/// Renders a field type as the string stored in its schema entry,
/// undoing the spacing the token printer inserts.
fn type_name_string(ty: &syn::Type) -> String {
    quote!(#ty)
        .to_string()
        .replace(" :: ", "::")
        .replace(" < ", "<")
        .replace(" >", ">")
        .replace(" , ", ", ")
        .replace("& ", "&")
        .replace(" ; ", "; ")
}

#[cfg(test)]
mod tests {
    use syn::parse_quote;

    use super::*;

    #[test]
    fn test_type_name_normalization() {
        let ty: syn::Type = parse_quote!(Vec<String>);
        assert_eq!(type_name_string(&ty), "Vec<String>");
        let ty: syn::Type = parse_quote!(IndexMap<String, i64>);
        assert_eq!(type_name_string(&ty), "IndexMap<String, i64>");
        let ty: syn::Type = parse_quote!(&'a str);
        assert_eq!(type_name_string(&ty), "&'a str");
        let ty: syn::Type = parse_quote!([u8; 4]);
        assert_eq!(type_name_string(&ty), "[u8; 4]");
        let ty: syn::Type = parse_quote!(std::vec::Vec<u8>);
        assert_eq!(type_name_string(&ty), "std::vec::Vec<u8>");
    }

    #[test]
    fn test_container_name_override() {
        let input: DeriveInput = parse_quote! {
            #[record(name = "session")]
            struct Session {
                user: String,
            }
        };
        let attrs = parse_container_attrs(&input).unwrap();
        assert_eq!(attrs.name.as_deref(), Some("session"));
    }

    #[test]
    fn test_rejects_unknown_container_arg() {
        let input: DeriveInput = parse_quote! {
            #[record(rename = "session")]
            struct Session {
                user: String,
            }
        };
        let err = parse_container_attrs(&input).unwrap_err();
        assert_eq!(err.to_string(), UNSUPPORTED_CONTAINER_ARG);
    }

    #[test]
    fn test_field_attrs() {
        let input: DeriveInput = parse_quote! {
            struct Session {
                #[record(internal, rename = "raw_token")]
                token: String,
            }
        };
        let fields = validate_input(&input).unwrap();
        let attrs = parse_field_attrs(fields.named.first().unwrap()).unwrap();
        assert!(attrs.internal);
        assert_eq!(attrs.rename.as_deref(), Some("raw_token"));
    }

    #[test]
    fn test_rejects_unknown_field_arg() {
        let input: DeriveInput = parse_quote! {
            struct Session {
                #[record(hidden)]
                token: String,
            }
        };
        let fields = validate_input(&input).unwrap();
        let err = parse_field_attrs(fields.named.first().unwrap()).unwrap_err();
        assert_eq!(err.to_string(), UNSUPPORTED_FIELD_ARG);
    }

    #[test]
    fn test_rejects_duplicate_field_names() {
        let input: DeriveInput = parse_quote! {
            struct Point {
                x: i64,
                #[record(rename = "x")]
                y: i64,
            }
        };
        let err = expand_record(&input).unwrap_err();
        assert_eq!(
            err.to_string(),
            "duplicate record field name `x`; hint: rename one of the fields"
        );
    }

    #[test]
    fn test_rejects_non_structs() {
        let input: DeriveInput = parse_quote! {
            enum Direction { North, South }
        };
        let err = validate_input(&input).unwrap_err();
        assert!(err.to_string().contains("enums"));

        let input: DeriveInput = parse_quote! {
            struct Pair(i64, i64);
        };
        let err = validate_input(&input).unwrap_err();
        assert!(err.to_string().contains("tuple structs"));

        let input: DeriveInput = parse_quote! {
            struct Wrapper<T> { inner: T }
        };
        let err = validate_input(&input).unwrap_err();
        assert!(err.to_string().contains("generic types"));
    }
}

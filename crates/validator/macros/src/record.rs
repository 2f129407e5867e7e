use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::ext::IdentExt;
use syn::spanned::Spanned;
use syn::{Data, DeriveInput, Field, Fields, Visibility, WherePredicate, parse_macro_input};

use crate::support::{attrs, diag};

pub fn derive(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    match expand(input) {
        Ok(ts) => ts.into(),
        Err(e) => diag::to_compile_error(e),
    }
}

/// Named fields of the struct; unit structs have none.
fn record_fields(input: &DeriveInput) -> syn::Result<Vec<&Field>> {
    match &input.data {
        Data::Struct(s) => match &s.fields {
            Fields::Named(named) => Ok(named.named.iter().collect()),
            Fields::Unit => Ok(Vec::new()),
            Fields::Unnamed(unnamed) => Err(syn::Error::new(
                unnamed.span(),
                "`Record` requires a struct with named fields (e.g. `struct X { ... }`)",
            )),
        },
        Data::Enum(_) | Data::Union(_) => Err(syn::Error::new(
            input.ident.span(),
            "`Record` can only be derived for structs",
        )),
    }
}

struct FieldEntry<'a> {
    field: &'a Field,
    descriptor: TokenStream2,
    inspected: bool,
}

fn field_entry(field: &Field) -> syn::Result<FieldEntry<'_>> {
    let Some(ident) = field.ident.as_ref() else {
        return Err(diag::error_spanned(field, "expected a named field"));
    };
    let field_attrs = attrs::parse_field_attrs(&field.attrs)?;

    let name = field_attrs
        .name
        .map_or_else(|| ident.unraw().to_string(), |lit| lit.value());
    let public = matches!(field.vis, Visibility::Public(_));

    let (descriptor, inspected) = match (public, field_attrs.rules) {
        (true, Some(tag)) => (
            quote! {
                ::tagcheck::FieldDescriptor::public(
                    #name,
                    #tag,
                    ::tagcheck::Inspect::field_value(&self.#ident),
                )
            },
            true,
        ),
        (true, None) => (quote!(::tagcheck::FieldDescriptor::untagged(#name)), false),
        (false, tag) => {
            let tag = tag.map(|lit| lit.value()).unwrap_or_default();
            (
                quote!(::tagcheck::FieldDescriptor::private(#name, #tag)),
                false,
            )
        }
    };

    Ok(FieldEntry {
        field,
        descriptor,
        inspected,
    })
}

fn expand(input: DeriveInput) -> syn::Result<TokenStream2> {
    let struct_name = &input.ident;
    let type_name = struct_name.unraw().to_string();

    let entries = record_fields(&input)?
        .into_iter()
        .map(field_entry)
        .collect::<syn::Result<Vec<_>>>()?;

    let mut generics = input.generics.clone();
    if generics.type_params().next().is_some() {
        let where_clause = generics.make_where_clause();
        for entry in entries.iter().filter(|e| e.inspected) {
            let ty = &entry.field.ty;
            let predicate: WherePredicate = syn::parse_quote!(#ty: ::tagcheck::Inspect);
            where_clause.predicates.push(predicate);
        }
    }
    let (impl_generics, ty_generics, where_clause) = generics.split_for_impl();

    let descriptors = entries.iter().map(|e| &e.descriptor);

    Ok(quote! {
        impl #impl_generics ::tagcheck::Record for #struct_name #ty_generics #where_clause {
            fn type_name(&self) -> &'static str {
                #type_name
            }

            fn fields(&self) -> ::std::vec::Vec<::tagcheck::FieldDescriptor<'_>> {
                ::std::vec![#(#descriptors),*]
            }
        }

        impl #impl_generics ::tagcheck::Inspect for #struct_name #ty_generics #where_clause {
            fn field_value(&self) -> ::tagcheck::FieldValue<'_> {
                ::tagcheck::FieldValue::Record(self)
            }
        }
    })
}

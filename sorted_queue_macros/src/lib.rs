use proc_macro2::{Span, TokenStream};
use quote::quote;
use syn::{parse_macro_input, Data, DeriveInput, Fields, Index, Member, Type};

/// The field of a struct that was marked `#[priority]`.
struct PriorityField {
    member: Member,
    ty: Type,
}

impl PriorityField {
    /// Locate the single `#[priority]` field of a struct.
    fn find(input: &DeriveInput) -> syn::Result<Self> {
        let fields = match &input.data {
            Data::Struct(s) => &s.fields,
            Data::Enum(e) => {
                return Err(syn::Error::new(
                    e.enum_token.span,
                    "`Prioritized` can only be derived for structs",
                ))
            }
            Data::Union(u) => {
                return Err(syn::Error::new(
                    u.union_token.span,
                    "`Prioritized` can only be derived for structs",
                ))
            }
        };

        if let Fields::Unit = fields {
            return Err(syn::Error::new_spanned(
                &input.ident,
                "unit structs have no field to mark with `#[priority]`",
            ));
        }

        let mut found: Option<Self> = None;
        for (i, field) in fields.iter().enumerate() {
            let Some(attr) = field.attrs.iter().find(|a| a.path().is_ident("priority")) else {
                continue;
            };
            attr.meta.require_path_only()?;

            if found.is_some() {
                return Err(syn::Error::new_spanned(
                    attr,
                    "only one field may be marked `#[priority]`",
                ));
            }

            let member = match &field.ident {
                Some(ident) => Member::Named(ident.clone()),
                None => Member::Unnamed(Index::from(i)),
            };
            found = Some(Self {
                member,
                ty: field.ty.clone(),
            });
        }

        found.ok_or_else(|| {
            syn::Error::new(
                Span::call_site(),
                "mark the key field with `#[priority]` to derive `Prioritized`",
            )
        })
    }
}

fn expand(input: DeriveInput) -> syn::Result<TokenStream> {
    let PriorityField { member, ty } = PriorityField::find(&input)?;
    let name = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    Ok(quote! {
        impl #impl_generics ::sorted_queue::Prioritized for #name #ty_generics #where_clause {
            #[inline]
            fn priority(&self) -> u64 {
                <u64 as ::core::convert::From<#ty>>::from(
                    ::core::clone::Clone::clone(&self.#member)
                )
            }
        }
    })
}

/// Derive `sorted_queue::Prioritized` for a struct.
///
/// Exactly one field must be marked `#[priority]`, and its type must convert losslessly into a
/// `u64`. The struct still needs its own `Display` implementation.
///
/// Example:
///
/// ```ignore
/// #[derive(Prioritized)]
/// struct Job {
///     #[priority]
///     deadline: u32,
///     name: String,
/// }
/// ```
#[proc_macro_derive(Prioritized, attributes(priority))]
pub fn derive_prioritized(input: proc_macro::TokenStream) -> proc_macro::TokenStream {
    expand(parse_macro_input!(input as DeriveInput))
        .unwrap_or_else(|e| e.into_compile_error())
        .into()
}

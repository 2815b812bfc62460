use proc_macro::TokenStream;
use proc_macro2::{Ident, TokenStream as TokenStream2};
use quote::{format_ident, quote};
use syn::punctuated::Punctuated;
use syn::{parse_macro_input, Data, DeriveInput, Expr, Fields, Lit, Meta, Token, Type};

/// Derive a column-wise timeseries collector for a per-timestep flux record.
///
/// Every field of the annotated struct must be `f64`. The generated
/// `{StructName}Timeseries` holds one `Vec<f64>` per field and provides
/// `with_capacity`, `push`, `get`, `len` and `is_empty`. The record itself
/// gains `field_names()` and `to_array()`.
///
/// `#[fluxes(timeseries_name = "Name")]` overrides the collector's name.
#[proc_macro_derive(Fluxes, attributes(fluxes))]
pub fn derive_fluxes(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    expand(&input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}

fn expand(input: &DeriveInput) -> syn::Result<TokenStream2> {
    let name = &input.ident;
    let ts_name = match timeseries_name(input)? {
        Some(ident) => ident,
        None => format_ident!("{}Timeseries", name),
    };
    let fields = f64_fields(input)?;
    let n_fields = fields.len();
    let first = &fields[0];
    let labels: Vec<String> = fields.iter().map(|f| f.to_string()).collect();

    Ok(quote! {
        /// Column-wise timeseries of per-timestep fluxes.
        #[derive(Debug, Clone, Default, PartialEq)]
        pub struct #ts_name {
            #(pub #fields: Vec<f64>,)*
        }

        impl #ts_name {
            /// Pre-allocate every column for `n` timesteps.
            pub fn with_capacity(n: usize) -> Self {
                Self {
                    #(#fields: Vec::with_capacity(n),)*
                }
            }

            /// Append one timestep.
            pub fn push(&mut self, f: &#name) {
                #(self.#fields.push(f.#fields);)*
            }

            /// Reassemble the record stored at timestep `t`.
            pub fn get(&self, t: usize) -> Option<#name> {
                if t >= self.len() {
                    return None;
                }
                Some(#name {
                    #(#fields: self.#fields[t],)*
                })
            }

            /// Number of timesteps stored.
            pub fn len(&self) -> usize {
                self.#first.len()
            }

            /// Returns `true` if no timesteps have been stored.
            pub fn is_empty(&self) -> bool {
                self.#first.is_empty()
            }
        }

        impl #name {
            /// Field names in declaration order.
            pub fn field_names() -> &'static [&'static str] {
                &[#(#labels),*]
            }

            /// Field values in declaration order.
            pub fn to_array(&self) -> [f64; #n_fields] {
                [#(self.#fields),*]
            }
        }
    })
}

/// Named fields of the struct, all checked to be `f64`.
fn f64_fields(input: &DeriveInput) -> syn::Result<Vec<Ident>> {
    let Data::Struct(data) = &input.data else {
        return Err(syn::Error::new_spanned(
            &input.ident,
            "Fluxes can only be derived for structs",
        ));
    };
    let Fields::Named(named) = &data.fields else {
        return Err(syn::Error::new_spanned(
            &input.ident,
            "Fluxes can only be derived for structs with named fields",
        ));
    };
    if named.named.is_empty() {
        return Err(syn::Error::new_spanned(
            &input.ident,
            "Fluxes struct must have at least one field",
        ));
    }

    named
        .named
        .iter()
        .map(|field| {
            if !is_f64(&field.ty) {
                return Err(syn::Error::new_spanned(
                    &field.ty,
                    "Fluxes derive: all fields must be f64",
                ));
            }
            field
                .ident
                .clone()
                .ok_or_else(|| syn::Error::new_spanned(field, "expected a named field"))
        })
        .collect()
}

/// Parse `#[fluxes(timeseries_name = "...")]`, if present.
fn timeseries_name(input: &DeriveInput) -> syn::Result<Option<Ident>> {
    for attr in input.attrs.iter().filter(|a| a.path().is_ident("fluxes")) {
        let metas = attr.parse_args_with(Punctuated::<Meta, Token![,]>::parse_terminated)?;
        for meta in metas {
            let nv = match meta {
                Meta::NameValue(nv) => nv,
                other => {
                    return Err(syn::Error::new_spanned(other, "expected `key = \"value\"`"))
                }
            };
            if !nv.path.is_ident("timeseries_name") {
                return Err(syn::Error::new_spanned(&nv.path, "unknown fluxes attribute"));
            }
            match &nv.value {
                Expr::Lit(expr) => match &expr.lit {
                    Lit::Str(s) => return Ok(Some(format_ident!("{}", s.value()))),
                    other => {
                        return Err(syn::Error::new_spanned(other, "expected a string literal"))
                    }
                },
                other => return Err(syn::Error::new_spanned(other, "expected a string literal")),
            }
        }
    }
    Ok(None)
}

fn is_f64(ty: &Type) -> bool {
    matches!(ty, Type::Path(p) if p.qself.is_none() && p.path.is_ident("f64"))
}

//! Derive macro implementation used by `physq-core`.
//!
//! `physq-derive` is an implementation detail of this workspace. Both derives expand in terms of `crate::Kind`,
//! `crate::Unit`, `crate::Quantity` and `crate::Dimension`, so they are intended to be used by `physq-core` (or by
//! crates that expose an identical crate-root API).
//!
//! # Generated impls
//!
//! For a kind marker type `MyKind`, `#[derive(Kind)]` implements:
//!
//! - `crate::Kind for MyKind`
//! - `core::fmt::Display for crate::Quantity<MyKind>` (formats as `<value> <symbol>`, or `<value>` for an empty
//!   symbol)
//!
//! For a unit marker type `MyUnit`, `#[derive(Unit)]` implements `crate::Unit for MyUnit`.
//!
//! # Attributes
//!
//! `#[kind(...)]` (required by `Kind`):
//!
//! - `symbol = "N"`: SI symbol shown when formatting quantities of this kind
//! - `dimension = Dimension::FORCE`: constant expression evaluating to a `crate::Dimension`
//!
//! `#[unit(...)]` (required by `Unit`):
//!
//! - `symbol = "km"`: unit symbol
//! - `kind = Length`: kind marker type the unit measures
//! - `ratio = 1000.0`: SI magnitude of one unit
//! - `offset = 273.15` (optional): SI magnitude of the unit's zero point, for affine scales

#![deny(missing_docs)]
#![forbid(unsafe_code)]

use proc_macro::TokenStream;
use proc_macro2::{Span, TokenStream as TokenStream2};
use quote::quote;
use syn::{
    parse::{Parse, ParseStream},
    parse_macro_input, Attribute, DeriveInput, Expr, Ident, LitStr, Token, Type,
};

/// Derive `crate::Kind` and a `Display` impl for `crate::Quantity<ThisKind>`.
///
/// The derive must be paired with a `#[kind(...)]` attribute providing `symbol` and `dimension`.
#[proc_macro_derive(Kind, attributes(kind))]
pub fn derive_kind(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    match derive_kind_impl(input) {
        Ok(tokens) => tokens.into(),
        Err(err) => err.to_compile_error().into(),
    }
}

/// Derive `crate::Unit` for a zero-sized scaling marker.
///
/// The derive must be paired with a `#[unit(...)]` attribute providing `symbol`, `kind` and `ratio`, and optionally
/// `offset`.
#[proc_macro_derive(Unit, attributes(unit))]
pub fn derive_unit(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    match derive_unit_impl(input) {
        Ok(tokens) => tokens.into(),
        Err(err) => err.to_compile_error().into(),
    }
}

fn derive_kind_impl(input: DeriveInput) -> syn::Result<TokenStream2> {
    let name = &input.ident;
    let attr: KindAttribute = parse_attribute(&input.attrs, "kind")?;

    let symbol = &attr.symbol;
    let dimension = &attr.dimension;

    // Dimensionless kinds print as bare numbers.
    let display_body = if symbol.value().is_empty() {
        quote! { ::core::fmt::Display::fmt(&self.value(), f) }
    } else {
        quote! {
            ::core::fmt::Display::fmt(&self.value(), f)?;
            write!(f, " {}", <#name as crate::Kind>::SYMBOL)
        }
    };

    Ok(quote! {
        impl crate::Kind for #name {
            const DIM: crate::Dimension = #dimension;
            const SYMBOL: &'static str = #symbol;
        }

        impl ::core::fmt::Display for crate::Quantity<#name> {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                #display_body
            }
        }
    })
}

fn derive_unit_impl(input: DeriveInput) -> syn::Result<TokenStream2> {
    let name = &input.ident;
    let attr: UnitAttribute = parse_attribute(&input.attrs, "unit")?;

    let symbol = &attr.symbol;
    let kind = &attr.kind;
    let ratio = &attr.ratio;
    let offset = attr
        .offset
        .as_ref()
        .map(|expr| quote! { #expr })
        .unwrap_or_else(|| quote! { 0.0 });

    Ok(quote! {
        impl crate::Unit for #name {
            type Kind = #kind;
            const RATIO: f64 = #ratio;
            const OFFSET: f64 = #offset;
            const SYMBOL: &'static str = #symbol;
        }
    })
}

/// Parsed contents of the `#[kind(...)]` attribute.
struct KindAttribute {
    symbol: LitStr,
    dimension: Expr,
}

/// Parsed contents of the `#[unit(...)]` attribute.
struct UnitAttribute {
    symbol: LitStr,
    kind: Type,
    ratio: Expr,
    offset: Option<Expr>,
}

/// Walks `key = value` pairs separated by optional commas, handing each key to `on_key`.
fn parse_pairs(
    input: ParseStream,
    mut on_key: impl FnMut(&Ident, ParseStream) -> syn::Result<()>,
) -> syn::Result<()> {
    while !input.is_empty() {
        let ident: Ident = input.parse()?;
        input.parse::<Token![=]>()?;
        on_key(&ident, input)?;

        if input.peek(Token![,]) {
            input.parse::<Token![,]>()?;
        }
    }
    Ok(())
}

fn unknown_key(ident: &Ident) -> syn::Error {
    syn::Error::new(ident.span(), format!("unknown attribute `{}`", ident))
}

fn missing(span: Span, key: &str) -> syn::Error {
    syn::Error::new(span, format!("missing required attribute `{}`", key))
}

impl Parse for KindAttribute {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let mut symbol: Option<LitStr> = None;
        let mut dimension: Option<Expr> = None;

        parse_pairs(input, |ident, input| {
            match ident.to_string().as_str() {
                "symbol" => symbol = Some(input.parse()?),
                "dimension" => dimension = Some(input.parse()?),
                _ => return Err(unknown_key(ident)),
            }
            Ok(())
        })?;

        Ok(KindAttribute {
            symbol: symbol.ok_or_else(|| missing(input.span(), "symbol"))?,
            dimension: dimension.ok_or_else(|| missing(input.span(), "dimension"))?,
        })
    }
}

impl Parse for UnitAttribute {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let mut symbol: Option<LitStr> = None;
        let mut kind: Option<Type> = None;
        let mut ratio: Option<Expr> = None;
        let mut offset: Option<Expr> = None;

        parse_pairs(input, |ident, input| {
            match ident.to_string().as_str() {
                "symbol" => symbol = Some(input.parse()?),
                "kind" => kind = Some(input.parse()?),
                "ratio" => ratio = Some(input.parse()?),
                "offset" => offset = Some(input.parse()?),
                _ => return Err(unknown_key(ident)),
            }
            Ok(())
        })?;

        Ok(UnitAttribute {
            symbol: symbol.ok_or_else(|| missing(input.span(), "symbol"))?,
            kind: kind.ok_or_else(|| missing(input.span(), "kind"))?,
            ratio: ratio.ok_or_else(|| missing(input.span(), "ratio"))?,
            offset,
        })
    }
}

fn parse_attribute<T: Parse>(attrs: &[Attribute], name: &str) -> syn::Result<T> {
    for attr in attrs {
        if attr.path().is_ident(name) {
            return attr.parse_args::<T>();
        }
    }

    Err(syn::Error::new(
        Span::call_site(),
        format!("missing #[{}(...)] attribute", name),
    ))
}

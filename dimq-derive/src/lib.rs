//! Derive macro implementation used by `dimq-core`.
//!
//! `dimq-derive` is an implementation detail of this workspace. The derives expand in terms of `crate::Unit`,
//! `crate::UnitFormat`, `crate::DefaultFormat` and `crate::format`, so they are intended to be used by `dimq-core`
//! (or by crates that expose an identical crate-root API).
//!
//! Most users should depend on `dimq` instead and use the predefined units.
//!
//! # `#[derive(Unit)]`
//!
//! Reads a required `#[unit(...)]` attribute:
//!
//! - `dimension = dim::Force`: dimension vector type
//! - `ratio = 1.0`: coherent value of one unit
//! - `symbol = "N"` (optional): the unit gets its own named format printing this symbol
//! - `format = SomeFormat` (optional): reuse an existing formatter for the dimension
//!
//! Without `symbol` or `format` the unit uses `crate::DefaultFormat`.
//!
//! # `#[derive(UnitFormat)]`
//!
//! Reads a required `#[format(...)]` attribute:
//!
//! - `dimension = dim::Energy`: dimension the format renders
//! - exactly one of `symbol = "J"` or `composite = "N*m"`
//! - `reference = 1.0` (optional): coherent value of one displayed unit
//!
//! Composite expressions are checked at expansion time: every `[` must open a `p<digits>` or `n<digits>` token
//! closed by `]`.

#![deny(missing_docs)]
#![forbid(unsafe_code)]

use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::{
    parse::{Parse, ParseStream},
    parse_macro_input, Attribute, DeriveInput, Expr, Ident, LitStr, Token, Type,
};

/// Derive `crate::Unit`, plus `crate::UnitFormat` when a `symbol` is given.
///
/// The derive must be paired with a `#[unit(...)]` attribute providing `dimension` and `ratio`.
#[proc_macro_derive(Unit, attributes(unit))]
pub fn derive_unit(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    match derive_unit_impl(input) {
        Ok(tokens) => tokens.into(),
        Err(err) => err.to_compile_error().into(),
    }
}

/// Derive `crate::UnitFormat` for a named or composite unit expression.
///
/// The derive must be paired with a `#[format(...)]` attribute providing `dimension` and either `symbol` or
/// `composite`.
#[proc_macro_derive(UnitFormat, attributes(format))]
pub fn derive_unit_format(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    match derive_unit_format_impl(input) {
        Ok(tokens) => tokens.into(),
        Err(err) => err.to_compile_error().into(),
    }
}

fn derive_unit_impl(input: DeriveInput) -> syn::Result<TokenStream2> {
    let name = &input.ident;
    let unit_attr = parse_attribute::<UnitAttribute>(&input.attrs, "unit")?;

    let dimension = &unit_attr.dimension;
    let ratio = &unit_attr.ratio;

    let format = match (&unit_attr.symbol, &unit_attr.format) {
        (Some(_), Some(format)) => {
            return Err(syn::Error::new_spanned(
                format,
                "`symbol` and `format` cannot be used together",
            ))
        }
        (Some(_), None) => quote!(Self),
        (None, Some(format)) => quote!(#format),
        (None, None) => quote!(crate::DefaultFormat),
    };

    let named_format = unit_attr.symbol.as_ref().map(|symbol| {
        quote! {
            impl crate::UnitFormat<#dimension> for #name {
                const REFERENCE: f64 = <Self as crate::Unit>::RATIO;
                const SEPARATOR: &'static str = crate::format::NAMED_SEPARATOR;

                fn write_unit<W: ::core::fmt::Write>(w: &mut W) -> ::core::fmt::Result {
                    w.write_str(#symbol)
                }
            }
        }
    });

    Ok(quote! {
        impl crate::Unit for #name {
            const RATIO: f64 = #ratio;
            type Dim = #dimension;
            type Format = #format;
        }

        #named_format
    })
}

fn derive_unit_format_impl(input: DeriveInput) -> syn::Result<TokenStream2> {
    let name = &input.ident;
    let format_attr = parse_attribute::<FormatAttribute>(&input.attrs, "format")?;

    let dimension = &format_attr.dimension;
    let reference = format_attr
        .reference
        .as_ref()
        .map(|reference| quote!(const REFERENCE: f64 = #reference;));

    let body = match format_attr.text {
        FormatText::Symbol(symbol) => quote!(w.write_str(#symbol)),
        FormatText::Composite(expression) => quote!(crate::format::write_composite(w, #expression)),
    };

    Ok(quote! {
        impl crate::UnitFormat<#dimension> for #name {
            #reference
            const SEPARATOR: &'static str = crate::format::NAMED_SEPARATOR;

            fn write_unit<W: ::core::fmt::Write>(w: &mut W) -> ::core::fmt::Result {
                #body
            }
        }
    })
}

fn parse_attribute<A: Parse>(attrs: &[Attribute], name: &str) -> syn::Result<A> {
    for attr in attrs {
        if attr.path().is_ident(name) {
            return attr.parse_args::<A>();
        }
    }

    Err(syn::Error::new(
        proc_macro2::Span::call_site(),
        format!("missing #[{}(...)] attribute", name),
    ))
}

// ─────────────────────────────────────────────────────────────────────────────
// #[unit(...)]
// ─────────────────────────────────────────────────────────────────────────────

/// Parsed contents of the `#[unit(...)]` attribute.
struct UnitAttribute {
    dimension: Type,
    ratio: Expr,
    symbol: Option<LitStr>,
    format: Option<Type>,
}

impl Parse for UnitAttribute {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let mut dimension: Option<Type> = None;
        let mut ratio: Option<Expr> = None;
        let mut symbol: Option<LitStr> = None;
        let mut format: Option<Type> = None;

        while !input.is_empty() {
            let ident: Ident = input.parse()?;
            input.parse::<Token![=]>()?;

            match ident.to_string().as_str() {
                "dimension" => dimension = Some(input.parse()?),
                "ratio" => ratio = Some(input.parse()?),
                "symbol" => symbol = Some(input.parse()?),
                "format" => format = Some(input.parse()?),
                other => {
                    return Err(syn::Error::new(
                        ident.span(),
                        format!("unknown attribute `{}`", other),
                    ));
                }
            }

            if input.peek(Token![,]) {
                input.parse::<Token![,]>()?;
            }
        }

        let dimension = dimension.ok_or_else(|| {
            syn::Error::new(input.span(), "missing required attribute `dimension`")
        })?;
        let ratio = ratio
            .ok_or_else(|| syn::Error::new(input.span(), "missing required attribute `ratio`"))?;

        Ok(UnitAttribute {
            dimension,
            ratio,
            symbol,
            format,
        })
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// #[format(...)]
// ─────────────────────────────────────────────────────────────────────────────

enum FormatText {
    Symbol(LitStr),
    Composite(LitStr),
}

/// Parsed contents of the `#[format(...)]` attribute.
struct FormatAttribute {
    dimension: Type,
    text: FormatText,
    reference: Option<Expr>,
}

impl Parse for FormatAttribute {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let mut dimension: Option<Type> = None;
        let mut text: Option<FormatText> = None;
        let mut reference: Option<Expr> = None;

        while !input.is_empty() {
            let ident: Ident = input.parse()?;
            input.parse::<Token![=]>()?;

            match ident.to_string().as_str() {
                "dimension" => dimension = Some(input.parse()?),
                "reference" => reference = Some(input.parse()?),
                "symbol" | "composite" => {
                    if text.is_some() {
                        return Err(syn::Error::new(
                            ident.span(),
                            "only one of `symbol` or `composite` may be given",
                        ));
                    }
                    let literal: LitStr = input.parse()?;
                    text = Some(if ident == "symbol" {
                        FormatText::Symbol(literal)
                    } else {
                        check_composite(&literal)?;
                        FormatText::Composite(literal)
                    });
                }
                other => {
                    return Err(syn::Error::new(
                        ident.span(),
                        format!("unknown attribute `{}`", other),
                    ));
                }
            }

            if input.peek(Token![,]) {
                input.parse::<Token![,]>()?;
            }
        }

        let dimension = dimension.ok_or_else(|| {
            syn::Error::new(input.span(), "missing required attribute `dimension`")
        })?;
        let text = text.ok_or_else(|| {
            syn::Error::new(input.span(), "missing `symbol` or `composite` attribute")
        })?;

        Ok(FormatAttribute {
            dimension,
            text,
            reference,
        })
    }
}

/// Rejects composite expressions whose exponent tokens would render incorrectly.
fn check_composite(literal: &LitStr) -> syn::Result<()> {
    let expression = literal.value();
    let mut chars = expression.chars();
    while let Some(c) = chars.next() {
        if c != '[' {
            continue;
        }
        match chars.next() {
            Some('p') | Some('n') => {}
            Some(other) => {
                return Err(syn::Error::new(
                    literal.span(),
                    format!("exponent must start with `p` or `n`, found `{}`", other),
                ))
            }
            None => {
                return Err(syn::Error::new(
                    literal.span(),
                    "unterminated exponent in composite unit",
                ))
            }
        }
        let mut digits = 0;
        loop {
            match chars.next() {
                Some(']') if digits > 0 => break,
                Some(d) if d.is_ascii_digit() => digits += 1,
                Some(']') => {
                    return Err(syn::Error::new(literal.span(), "exponent has no digits"))
                }
                Some(other) => {
                    return Err(syn::Error::new(
                        literal.span(),
                        format!("unexpected `{}` in exponent", other),
                    ))
                }
                None => {
                    return Err(syn::Error::new(
                        literal.span(),
                        "unterminated exponent in composite unit",
                    ))
                }
            }
        }
    }
    Ok(())
}

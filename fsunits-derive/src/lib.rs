//! Derive macro implementation used by `fsunits-core`.
//!
//! `fsunits-derive` is an implementation detail of this workspace. The `UnitKind` derive expands in terms of
//! `crate::UnitKind`, `crate::Conversion`, `crate::Dimension` and `crate::abbreviation`, so it is intended to be used
//! by `fsunits-core` only.
//!
//! # Generated impls
//!
//! For a unit enum `MyUnit`, the derive implements:
//!
//! - `crate::UnitKind for MyUnit` (ids, names, abbreviations and the `(scale, offset)` conversion table)
//! - `core::fmt::Display for MyUnit` (formats as the canonical abbreviation)
//! - `core::str::FromStr for MyUnit` (parses any registered abbreviation)
//!
//! # Attributes
//!
//! The enum carries a required `#[unit_kind(dimension = Length)]` attribute naming a `crate::Dimension` variant.
//!
//! Every variant carries a required `#[unit(...)]` attribute:
//!
//! - `id = 3`: stable raw id, unique within the enum; `0` is reserved for "undefined"
//! - `scale = 0.3048`: factor to the base unit (`base = raw * scale + offset`). Integer and decimal literals may be
//!   combined with `*` and `/` (`scale = 1852 / 3600`); the expression is evaluated to an exact fraction here, so a
//!   decimal literal such as `0.3048` becomes `381 / 1250` rather than the nearest `f64`.
//! - `offset = 273.15`: optional affine offset, defaults to `0.0`
//! - `base`: marks the base unit of the dimension (implies `scale = 1.0, offset = 0.0`)
//! - `symbols = ["ft", "'"]`: abbreviations, canonical first

#![deny(missing_docs)]
#![forbid(unsafe_code)]

use std::collections::BTreeMap;

use proc_macro::TokenStream;
use proc_macro2::{Literal, Span, TokenStream as TokenStream2};
use quote::quote;
use syn::{
    parse::{Parse, ParseStream},
    parse_macro_input,
    punctuated::Punctuated,
    Attribute, BinOp, Data, DeriveInput, Expr, Fields, Ident, Lit, LitInt, LitStr, Token,
};

/// Derive `crate::UnitKind`, `Display` and `FromStr` for a unit enum.
///
/// The enum must carry `#[unit_kind(dimension = ...)]` and every variant a `#[unit(...)]` attribute.
#[proc_macro_derive(UnitKind, attributes(unit_kind, unit))]
pub fn derive_unit_kind(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    match derive_unit_kind_impl(input) {
        Ok(tokens) => tokens.into(),
        Err(err) => err.to_compile_error().into(),
    }
}

fn derive_unit_kind_impl(input: DeriveInput) -> syn::Result<TokenStream2> {
    let name = &input.ident;

    if !input.generics.params.is_empty() {
        return Err(syn::Error::new_spanned(
            &input.generics,
            "unit enums cannot be generic",
        ));
    }

    let data = match &input.data {
        Data::Enum(data) => data,
        _ => {
            return Err(syn::Error::new_spanned(
                name,
                "UnitKind can only be derived for enums",
            ))
        }
    };

    let kind_attr = parse_unit_kind_attribute(&input.attrs)?;
    let dimension = &kind_attr.dimension;

    let mut units = Vec::with_capacity(data.variants.len());
    for variant in &data.variants {
        if !matches!(variant.fields, Fields::Unit) {
            return Err(syn::Error::new_spanned(
                variant,
                "unit variants cannot carry fields",
            ));
        }
        let attr = parse_variant_attribute(&variant.ident, &variant.attrs)?;
        units.push((variant.ident.clone(), attr));
    }

    if units.is_empty() {
        return Err(syn::Error::new_spanned(
            name,
            "a unit enum needs at least one unit",
        ));
    }

    let mut seen_ids = BTreeMap::new();
    for (ident, attr) in &units {
        if let Some(previous) = seen_ids.insert(attr.id, ident.clone()) {
            return Err(syn::Error::new(
                attr.id_span,
                format!("duplicate id `{}` (already used by `{}`)", attr.id, previous),
            ));
        }
    }

    let bases: Vec<&Ident> = units
        .iter()
        .filter(|(_, attr)| attr.base)
        .map(|(ident, _)| ident)
        .collect();
    let base = match bases.as_slice() {
        [single] => *single,
        [] => {
            return Err(syn::Error::new_spanned(
                name,
                "exactly one variant must be marked `base`",
            ))
        }
        [_, second, ..] => {
            return Err(syn::Error::new_spanned(
                second,
                "only one variant can be marked `base`",
            ))
        }
    };

    let variants: Vec<&Ident> = units.iter().map(|(ident, _)| ident).collect();

    let mut id_arms = Vec::with_capacity(units.len());
    let mut from_id_arms = Vec::with_capacity(units.len());
    let mut name_arms = Vec::with_capacity(units.len());
    let mut symbol_arms = Vec::with_capacity(units.len());
    let mut conversion_arms = Vec::with_capacity(units.len());

    for (ident, attr) in &units {
        let id = Literal::u32_suffixed(attr.id);
        let unit_name = LitStr::new(&ident.to_string(), ident.span());
        let symbols = &attr.symbols;
        let (numerator, denominator, offset) = attr.conversion_tokens();

        id_arms.push(quote! { Self::#ident => #id });
        from_id_arms.push(quote! { #id => ::core::option::Option::Some(Self::#ident) });
        name_arms.push(quote! { Self::#ident => #unit_name });
        symbol_arms.push(quote! { Self::#ident => &[#(#symbols),*] });
        conversion_arms.push(quote! { Self::#ident => crate::Conversion::new(#numerator, #denominator, #offset) });
    }

    let expanded = quote! {
        impl crate::UnitKind for #name {
            const DIMENSION: crate::Dimension = crate::Dimension::#dimension;
            const BASE: Self = Self::#base;
            const ALL: &'static [Self] = &[#(Self::#variants),*];

            #[inline]
            fn id(self) -> u32 {
                match self {
                    #(#id_arms,)*
                }
            }

            #[inline]
            fn from_id(id: u32) -> ::core::option::Option<Self> {
                match id {
                    #(#from_id_arms,)*
                    _ => ::core::option::Option::None,
                }
            }

            #[inline]
            fn name(self) -> &'static str {
                match self {
                    #(#name_arms,)*
                }
            }

            #[inline]
            fn symbols(self) -> &'static [&'static str] {
                match self {
                    #(#symbol_arms,)*
                }
            }

            #[inline]
            fn conversion(self) -> crate::Conversion {
                match self {
                    #(#conversion_arms,)*
                }
            }
        }

        impl crate::sealed::Sealed for #name {}

        impl ::core::fmt::Display for #name {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                f.write_str(crate::abbreviation(*self))
            }
        }

        impl ::core::str::FromStr for #name {
            type Err = crate::QuantityError;

            fn from_str(s: &str) -> ::core::result::Result<Self, Self::Err> {
                crate::parse_unit(s)
            }
        }
    };

    Ok(expanded)
}

/// Parsed contents of the enum-level `#[unit_kind(...)]` attribute.
struct UnitKindAttribute {
    dimension: Ident,
}

impl Parse for UnitKindAttribute {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let mut dimension: Option<Ident> = None;

        while !input.is_empty() {
            let ident: Ident = input.parse()?;
            input.parse::<Token![=]>()?;

            match ident.to_string().as_str() {
                "dimension" => {
                    dimension = Some(input.parse()?);
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

        Ok(UnitKindAttribute { dimension })
    }
}

fn parse_unit_kind_attribute(attrs: &[Attribute]) -> syn::Result<UnitKindAttribute> {
    for attr in attrs {
        if attr.path().is_ident("unit_kind") {
            return attr.parse_args::<UnitKindAttribute>();
        }
    }

    Err(syn::Error::new(
        Span::call_site(),
        "missing #[unit_kind(...)] attribute",
    ))
}

/// Parsed contents of a variant-level `#[unit(...)]` attribute.
struct UnitAttribute {
    id: u32,
    id_span: Span,
    scale: Option<(u64, u64)>,
    offset: Option<Expr>,
    base: bool,
    symbols: Vec<LitStr>,
}

impl UnitAttribute {
    /// `(numerator, denominator, offset)` tokens for `crate::Conversion::new`.
    fn conversion_tokens(&self) -> (Literal, Literal, TokenStream2) {
        let (numerator, denominator) = if self.base {
            (1, 1)
        } else {
            self.scale.unwrap_or((1, 1))
        };
        let offset = match (&self.offset, self.base) {
            (Some(expr), false) => quote! { #expr },
            _ => quote! { 0.0 },
        };
        (
            Literal::u64_suffixed(numerator),
            Literal::u64_suffixed(denominator),
            offset,
        )
    }
}

/// An exact non-negative fraction, kept in lowest terms.
type Ratio = (u128, u128);

fn gcd(mut a: u128, mut b: u128) -> u128 {
    while b != 0 {
        let t = a % b;
        a = b;
        b = t;
    }
    a
}

fn reduce((numerator, denominator): Ratio) -> Ratio {
    let divisor = gcd(numerator, denominator).max(1);
    (numerator / divisor, denominator / divisor)
}

fn pow10(exponent: u32) -> Option<u128> {
    10u128.checked_pow(exponent)
}

/// Reads decimal literal text (`"0.3048"`, `"1000"`, `"1e-6"`) as an exact fraction.
fn parse_decimal(text: &str) -> Option<Ratio> {
    let (mantissa, exponent) = match text.find(['e', 'E']) {
        Some(at) => (&text[..at], text[at + 1..].parse::<i32>().ok()?),
        None => (text, 0),
    };
    let (whole, fraction) = mantissa.split_once('.').unwrap_or((mantissa, ""));
    let digits: String = whole.chars().chain(fraction.chars()).filter(|c| *c != '_').collect();
    if digits.is_empty() || !digits.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }
    let mut numerator: u128 = digits.parse().ok()?;
    let fraction_len = fraction.chars().filter(|c| *c != '_').count() as i32;
    let mut denominator: u128 = 1;
    let shift = exponent - fraction_len;
    if shift >= 0 {
        numerator = numerator.checked_mul(pow10(shift as u32)?)?;
    } else {
        denominator = pow10(shift.unsigned_abs())?;
    }
    Some(reduce((numerator, denominator)))
}

/// Evaluates a `scale` expression built from literals, `*`, `/` and parentheses.
fn eval_ratio(expr: &Expr) -> syn::Result<Ratio> {
    let overflow = || syn::Error::new_spanned(expr, "scale does not fit in a 64-bit fraction");
    match expr {
        Expr::Lit(lit) => {
            let text = match &lit.lit {
                Lit::Int(int) => int.base10_digits().to_owned(),
                Lit::Float(float) => float.base10_digits().to_owned(),
                _ => return Err(syn::Error::new_spanned(expr, "scale must be numeric")),
            };
            parse_decimal(&text).ok_or_else(overflow)
        }
        Expr::Paren(inner) => eval_ratio(&inner.expr),
        Expr::Group(inner) => eval_ratio(&inner.expr),
        Expr::Binary(binary) => {
            let (ln, ld) = eval_ratio(&binary.left)?;
            let (rn, rd) = eval_ratio(&binary.right)?;
            let (numerator, denominator) = match binary.op {
                BinOp::Mul(_) => (ln.checked_mul(rn), ld.checked_mul(rd)),
                BinOp::Div(_) => (ln.checked_mul(rd), ld.checked_mul(rn)),
                _ => {
                    return Err(syn::Error::new_spanned(
                        &binary.op,
                        "scale expressions only support `*` and `/`",
                    ))
                }
            };
            Ok(reduce((
                numerator.ok_or_else(overflow)?,
                denominator.ok_or_else(overflow)?,
            )))
        }
        _ => Err(syn::Error::new_spanned(
            expr,
            "scale must be a numeric literal or a product/quotient of literals",
        )),
    }
}

fn scale_ratio(expr: &Expr) -> syn::Result<(u64, u64)> {
    let (numerator, denominator) = eval_ratio(expr)?;
    if numerator == 0 || denominator == 0 {
        return Err(syn::Error::new_spanned(expr, "scale must be non-zero"));
    }
    match (u64::try_from(numerator), u64::try_from(denominator)) {
        (Ok(numerator), Ok(denominator)) => Ok((numerator, denominator)),
        _ => Err(syn::Error::new_spanned(
            expr,
            "scale does not fit in a 64-bit fraction",
        )),
    }
}

impl Parse for UnitAttribute {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let mut id: Option<(u32, Span)> = None;
        let mut scale: Option<(u64, u64)> = None;
        let mut offset: Option<Expr> = None;
        let mut base_span: Option<Span> = None;
        let mut symbols: Option<(Vec<LitStr>, Span)> = None;

        while !input.is_empty() {
            let ident: Ident = input.parse()?;

            if ident == "base" {
                base_span = Some(ident.span());
            } else {
                input.parse::<Token![=]>()?;
                match ident.to_string().as_str() {
                    "id" => {
                        let lit: LitInt = input.parse()?;
                        id = Some((lit.base10_parse()?, lit.span()));
                    }
                    "scale" => {
                        let expr: Expr = input.parse()?;
                        scale = Some(scale_ratio(&expr)?);
                    }
                    "offset" => {
                        offset = Some(input.parse()?);
                    }
                    "symbols" => {
                        let content;
                        syn::bracketed!(content in input);
                        let list = Punctuated::<LitStr, Token![,]>::parse_terminated(&content)?;
                        symbols = Some((list.into_iter().collect(), ident.span()));
                    }
                    other => {
                        return Err(syn::Error::new(
                            ident.span(),
                            format!("unknown attribute `{}`", other),
                        ));
                    }
                }
            }

            if input.peek(Token![,]) {
                input.parse::<Token![,]>()?;
            }
        }

        let (id, id_span) =
            id.ok_or_else(|| syn::Error::new(input.span(), "missing required attribute `id`"))?;
        if id == 0 {
            return Err(syn::Error::new(
                id_span,
                "id 0 is reserved for the undefined unit",
            ));
        }

        if let Some(span) = base_span {
            if scale.is_some() || offset.is_some() {
                return Err(syn::Error::new(
                    span,
                    "a `base` unit cannot declare `scale` or `offset`",
                ));
            }
        } else if scale.is_none() {
            return Err(syn::Error::new(
                input.span(),
                "missing required attribute `scale`",
            ));
        }

        let (symbols, symbols_span) = symbols.ok_or_else(|| {
            syn::Error::new(input.span(), "missing required attribute `symbols`")
        })?;
        if symbols.is_empty() {
            return Err(syn::Error::new(
                symbols_span,
                "`symbols` needs at least the canonical abbreviation",
            ));
        }

        Ok(UnitAttribute {
            id,
            id_span,
            scale,
            offset,
            base: base_span.is_some(),
            symbols,
        })
    }
}

fn parse_variant_attribute(variant: &Ident, attrs: &[Attribute]) -> syn::Result<UnitAttribute> {
    for attr in attrs {
        if attr.path().is_ident("unit") {
            return attr.parse_args::<UnitAttribute>();
        }
    }

    Err(syn::Error::new_spanned(
        variant,
        format!("missing #[unit(...)] attribute on `{}`", variant),
    ))
}

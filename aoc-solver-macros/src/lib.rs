//! Procedural macros for the aoc-solver library

use proc_macro::TokenStream;
use proc_macro2::Literal;
use quote::quote;
use syn::{parse_macro_input, DeriveInput, LitInt};

/// Derives `Solver` from a set of `PartSolver<N>` impls.
///
/// `#[aoc_solver(max_parts = N)]` sets `Solver::PARTS` to `N` and generates
/// a `solve_part` that dispatches part `k` in `1..=N` to
/// `<Self as PartSolver<k>>::solve`. Any other part number yields
/// `SolveError::PartNotImplemented`.
///
/// Every `PartSolver<1>` through `PartSolver<N>` must be implemented,
/// otherwise the generated dispatch fails to compile.
///
/// # Example
///
/// ```ignore
/// use aoc_solver::{AocParser, AocSolver, ParseError, PartSolver, SolveError};
///
/// #[derive(AocSolver)]
/// #[aoc_solver(max_parts = 2)]
/// struct Day6;
///
/// impl AocParser for Day6 { /* ... */ }
/// impl PartSolver<1> for Day6 { /* ... */ }
/// impl PartSolver<2> for Day6 { /* ... */ }
/// ```
#[proc_macro_derive(AocSolver, attributes(aoc_solver))]
pub fn derive_aoc_solver(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    expand(&input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}

fn expand(input: &DeriveInput) -> syn::Result<proc_macro2::TokenStream> {
    let max_parts = max_parts(input)?;
    let name = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    let arms = (1..=max_parts).map(|part| {
        let part = Literal::u8_unsuffixed(part);
        quote! {
            #part => <Self as ::aoc_solver::PartSolver<#part>>::solve(shared),
        }
    });
    let parts = Literal::u8_unsuffixed(max_parts);

    Ok(quote! {
        impl #impl_generics ::aoc_solver::Solver for #name #ty_generics #where_clause {
            const PARTS: u8 = #parts;

            fn solve_part(
                shared: &mut <Self as ::aoc_solver::AocParser>::SharedData<'_>,
                part: u8,
            ) -> ::core::result::Result<::std::string::String, ::aoc_solver::SolveError> {
                match part {
                    #(#arms)*
                    _ => ::core::result::Result::Err(
                        ::aoc_solver::SolveError::PartNotImplemented(part),
                    ),
                }
            }
        }
    })
}

/// Read `max_parts` out of the `#[aoc_solver(...)]` attribute.
fn max_parts(input: &DeriveInput) -> syn::Result<u8> {
    let attr = input
        .attrs
        .iter()
        .find(|attr| attr.path().is_ident("aoc_solver"))
        .ok_or_else(|| {
            syn::Error::new_spanned(
                &input.ident,
                "AocSolver derive requires #[aoc_solver(max_parts = N)]",
            )
        })?;

    let mut max_parts = None;
    attr.parse_nested_meta(|meta| {
        if meta.path.is_ident("max_parts") {
            let value: LitInt = meta.value()?.parse()?;
            let parts: u8 = value.base10_parse()?;
            if parts == 0 {
                return Err(syn::Error::new_spanned(value, "max_parts must be at least 1"));
            }
            max_parts = Some(parts);
            Ok(())
        } else {
            Err(meta.error("unknown aoc_solver attribute, expected `max_parts`"))
        }
    })?;

    max_parts.ok_or_else(|| syn::Error::new_spanned(attr, "missing `max_parts = N`"))
}

#![deny(missing_docs)]
//! # abstract-core-derive: procedural macros for algebraic contracts
//!
//! This crate provides **derive macros** for the `abstract-core`
//! library.
//!
//! ## Supported derives
//!
//! ### Product structures
//! Componentwise over every field of a struct (named or tuple):
//! - **`#[derive(Magma)]`**: `combine` combines each field
//! - **`#[derive(Semigroup)]`**: marker, requires each field to be a `Semigroup`
//! - **`#[derive(Monoid)]`**: `identity()` is built from each field's identity
//! - **`#[derive(CommutativeMonoid)]`**: marker, requires each field to be one
//! - **`#[derive(BoundedSemilattice)]`**: marker, requires each field to be one
//!
//! ### Wrappers
//! - **`#[derive(Wrapper)]`**: for structs with exactly one field
//!
//! ### Semirings
//! - **`#[derive(Semiring)]`**: picks a derivation rule per role from a
//!   `#[semiring(...)]` attribute; a role left out is taken from a
//!   hand-written `SemiringAddition` or `SemiringMultiplication` impl
//!
//! ## Usage
//!
//! These macros are re-exported through `abstract-core` when the
//! `derive` feature is enabled:
//!
//! ```ignore
//! use abstract_core::{BoundedSemilattice, CommutativeMonoid, Magma, Monoid, Semigroup};
//!
//! #[derive(Clone, PartialEq, Eq, Debug)]
//! #[derive(Magma, Semigroup, Monoid, CommutativeMonoid, BoundedSemilattice)]
//! struct Seen {
//!     latest: abstract_core::Max<u64>,
//!     tags: std::collections::BTreeSet<String>,
//! }
//! ```
use proc_macro::TokenStream;
use quote::quote;
use syn::parse_macro_input;
use syn::parse_quote;
use syn::punctuated::Punctuated;
use syn::token::Comma;
use syn::Data;
use syn::DeriveInput;
use syn::Field;
use syn::Fields;
use syn::Generics;
use syn::Index;
use syn::Member;
use syn::Path;
use syn::Type;

/// Internal helper: ensure we're deriving on a struct, and return its
/// fields.
fn get_fields(input: &DeriveInput) -> Result<Option<&Punctuated<Field, Comma>>, TokenStream> {
    match &input.data {
        Data::Struct(s) => match &s.fields {
            Fields::Named(named) => Ok(Some(&named.named)),
            Fields::Unnamed(unnamed) => Ok(Some(&unnamed.unnamed)),
            Fields::Unit => Ok(None),
        },
        _ => {
            let msg = "derive macros are only supported on structs";
            Err(syn::Error::new_spanned(&input.ident, msg)
                .to_compile_error()
                .into())
        }
    }
}

/// Internal helper: the accessor and type of every field. Tuple fields
/// are addressed by index, so `Name { 0: .., 1: .. }` builds either
/// kind of struct.
fn members(input: &DeriveInput) -> Result<Vec<(Member, &Type)>, TokenStream> {
    let fields = match get_fields(input)? {
        Some(fields) => fields,
        None => return Ok(Vec::new()),
    };

    Ok(fields
        .iter()
        .enumerate()
        .map(|(i, f)| {
            let member = match &f.ident {
                Some(ident) => Member::Named(ident.clone()),
                None => Member::Unnamed(Index::from(i)),
            };
            (member, &f.ty)
        })
        .collect())
}

/// Internal helper: the input's generics with `field_ty: bound` added
/// for every field.
fn bounded(input: &DeriveInput, field_types: &[&Type], bound: Path) -> Generics {
    let mut generics = input.generics.clone();
    {
        let where_clause = generics.make_where_clause();
        for ty in field_types {
            where_clause.predicates.push(parse_quote!(#ty: #bound));
        }
    }
    generics
}

/// Internal helper: an impl of a marker trait, bounded on every field.
fn derive_marker(input: DeriveInput, bound: Path) -> TokenStream {
    let name = &input.ident;

    let fields = match members(&input) {
        Ok(f) => f,
        Err(ts) => return ts,
    };
    let field_types: Vec<_> = fields.iter().map(|(_, ty)| *ty).collect();

    let generics = bounded(&input, &field_types, bound.clone());
    let (impl_generics, ty_generics, where_clause) = generics.split_for_impl();

    let expanded = quote! {
        impl #impl_generics #bound for #name #ty_generics
        #where_clause
        {}
    };

    TokenStream::from(expanded)
}

/// Derive macro for `Magma`.
///
/// Implements `combine` for a struct by combining each field
/// componentwise.
///
/// # Example
///
/// ```ignore
/// #[derive(Magma)]
/// struct Totals {
///     count: Add<u64>,  // combine = wrapping addition
///     names: Vec<String>,  // combine = concatenation
/// }
/// ```
#[proc_macro_derive(Magma)]
pub fn derive_magma(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    let name = &input.ident;

    let fields = match members(&input) {
        Ok(f) => f,
        Err(ts) => return ts,
    };
    let field_members: Vec<_> = fields.iter().map(|(m, _)| m).collect();
    let field_types: Vec<_> = fields.iter().map(|(_, ty)| *ty).collect();

    let generics = bounded(&input, &field_types, parse_quote!(::abstract_core::Magma));
    let (impl_generics, ty_generics, where_clause) = generics.split_for_impl();

    let expanded = quote! {
        impl #impl_generics ::abstract_core::Magma for #name #ty_generics
        #where_clause
        {
            fn combine(&self, other: &Self) -> Self {
                #name {
                    #( #field_members: ::abstract_core::Magma::combine(&self.#field_members, &other.#field_members), )*
                }
            }
        }
    };

    TokenStream::from(expanded)
}

/// Derive macro for `Semigroup`.
///
/// Marker: a product of semigroups is associative. Requires each field
/// to implement `Semigroup`.
#[proc_macro_derive(Semigroup)]
pub fn derive_semigroup(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    derive_marker(input, parse_quote!(::abstract_core::Semigroup))
}

/// Derive macro for `Monoid`.
///
/// Implements `Monoid` for a struct by constructing `identity()` from
/// each field's identity.
///
/// # Example
///
/// ```ignore
/// #[derive(Magma, Semigroup, Monoid)]
/// struct Totals {
///     count: Add<u64>,  // identity = 0
///     names: Vec<String>,  // identity = []
/// }
/// ```
#[proc_macro_derive(Monoid)]
pub fn derive_monoid(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    let name = &input.ident;

    let fields = match members(&input) {
        Ok(f) => f,
        Err(ts) => return ts,
    };
    let field_members: Vec<_> = fields.iter().map(|(m, _)| m).collect();
    let field_types: Vec<_> = fields.iter().map(|(_, ty)| *ty).collect();

    let generics = bounded(&input, &field_types, parse_quote!(::abstract_core::Monoid));
    let (impl_generics, ty_generics, where_clause) = generics.split_for_impl();

    let expanded = quote! {
        impl #impl_generics ::abstract_core::Monoid for #name #ty_generics
        #where_clause
        {
            fn identity() -> Self {
                #name {
                    #( #field_members: ::abstract_core::Monoid::identity(), )*
                }
            }
        }
    };

    TokenStream::from(expanded)
}

/// Derive macro for `CommutativeMonoid`.
///
/// Marker trait indicating that `combine` is commutative.
/// Requires each field to implement `CommutativeMonoid`.
#[proc_macro_derive(CommutativeMonoid)]
pub fn derive_commutative_monoid(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    derive_marker(input, parse_quote!(::abstract_core::CommutativeMonoid))
}

/// Derive macro for `BoundedSemilattice`.
///
/// Marker trait indicating that `combine` is idempotent.
/// Requires each field to implement `BoundedSemilattice`.
///
/// # Example
///
/// ```ignore
/// #[derive(Magma, Semigroup, Monoid, CommutativeMonoid, BoundedSemilattice)]
/// struct Seen {
///     latest: Max<u64>,  // identity = 0
///     tags: BTreeSet<String>,  // identity = ∅
/// }
/// ```
#[proc_macro_derive(BoundedSemilattice)]
pub fn derive_bounded_semilattice(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    derive_marker(input, parse_quote!(::abstract_core::BoundedSemilattice))
}

/// Derive macro for `Wrapper`.
///
/// The struct must have exactly one field; that field's type becomes
/// `Wrapped`.
///
/// # Example
///
/// ```ignore
/// #[derive(Wrapper)]
/// struct Meters(u64);
///
/// #[derive(Wrapper)]
/// struct Label { text: String }
/// ```
#[proc_macro_derive(Wrapper)]
pub fn derive_wrapper(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    let name = &input.ident;

    let fields = match members(&input) {
        Ok(f) => f,
        Err(ts) => return ts,
    };
    let (member, wrapped) = match fields.as_slice() {
        [(member, ty)] => (member, *ty),
        _ => {
            let msg = "Wrapper can only be derived for structs with exactly one field";
            return syn::Error::new_spanned(&input.ident, msg)
                .to_compile_error()
                .into();
        }
    };

    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    let expanded = quote! {
        impl #impl_generics ::abstract_core::Wrapper for #name #ty_generics
        #where_clause
        {
            type Wrapped = #wrapped;

            fn wrap(value: Self::Wrapped) -> Self {
                #name { #member: value }
            }

            fn get(&self) -> &Self::Wrapped {
                &self.#member
            }

            fn into_inner(self) -> Self::Wrapped {
                self.#member
            }
        }
    };

    TokenStream::from(expanded)
}

/// How one semiring role obtains its operations.
enum Rule {
    /// The role wraps the semiring type itself.
    SelfWrapper(Type),
    /// The role wraps the same type the semiring wraps.
    DoubleWrapper(Type),
}

impl Rule {
    fn role(&self) -> &Type {
        match self {
            Rule::SelfWrapper(ty) | Rule::DoubleWrapper(ty) => ty,
        }
    }

    fn derived(&self) -> proc_macro2::TokenStream {
        match self {
            Rule::SelfWrapper(ty) => {
                quote!(::abstract_core::derive_from_self_wrapper::<Self, #ty>())
            }
            Rule::DoubleWrapper(ty) => {
                quote!(::abstract_core::derive_from_double_wrapper::<Self, #ty>())
            }
        }
    }
}

/// Internal helper: parse `role(self_wrapper = T)` or
/// `role(double_wrapper = T)`.
fn parse_rule(meta: &syn::meta::ParseNestedMeta) -> syn::Result<Rule> {
    let mut rule = None;
    meta.parse_nested_meta(|inner| {
        let parsed = if inner.path.is_ident("self_wrapper") {
            Rule::SelfWrapper(inner.value()?.parse()?)
        } else if inner.path.is_ident("double_wrapper") {
            Rule::DoubleWrapper(inner.value()?.parse()?)
        } else {
            return Err(inner.error("expected `self_wrapper = Type` or `double_wrapper = Type`"));
        };
        if rule.replace(parsed).is_some() {
            return Err(inner.error("a role takes exactly one rule"));
        }
        Ok(())
    })?;
    rule.ok_or_else(|| meta.error("missing rule: `self_wrapper = Type` or `double_wrapper = Type`"))
}

/// Internal helper: read the additive and multiplicative rules from
/// `#[semiring(...)]`. At most one role may be left out.
fn semiring_rules(input: &DeriveInput) -> syn::Result<(Option<Rule>, Option<Rule>)> {
    let mut additive = None;
    let mut multiplicative = None;

    for attr in input.attrs.iter().filter(|a| a.path().is_ident("semiring")) {
        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("additive") {
                additive = Some(parse_rule(&meta)?);
                Ok(())
            } else if meta.path.is_ident("multiplicative") {
                multiplicative = Some(parse_rule(&meta)?);
                Ok(())
            } else {
                Err(meta.error("expected `additive(..)` or `multiplicative(..)`"))
            }
        })?;
    }

    if additive.is_none() && multiplicative.is_none() {
        return Err(syn::Error::new_spanned(
            &input.ident,
            "Semiring needs #[semiring(additive(..))], #[semiring(multiplicative(..))] or both",
        ));
    }
    Ok((additive, multiplicative))
}

/// The associated type, `combine` body and identity body of one role.
struct RoleItems {
    role: proc_macro2::TokenStream,
    combine: proc_macro2::TokenStream,
    identity: proc_macro2::TokenStream,
}

/// Internal helper: use the rule when present, otherwise delegate to
/// the hand-written role trait `fallback`.
fn role_items(
    rule: Option<&Rule>,
    fallback: Path,
    combine: proc_macro2::TokenStream,
    identity: proc_macro2::TokenStream,
) -> RoleItems {
    match rule {
        Some(rule) => {
            let role = rule.role();
            let derived = rule.derived();
            RoleItems {
                role: quote!(#role),
                combine: quote!(#derived.combine(self, other)),
                identity: quote!(#derived.identity()),
            }
        }
        None => RoleItems {
            role: quote!(<Self as #fallback>::Role),
            combine: quote!(<Self as #fallback>::#combine(self, other)),
            identity: quote!(<Self as #fallback>::#identity()),
        },
    }
}

/// Derive macro for `Semiring`.
///
/// Each role names its structure and the rule that derives its
/// operations from it:
///
/// - `self_wrapper = R`: `R` wraps the semiring type itself
///   (`derive_from_self_wrapper`)
/// - `double_wrapper = R`: the semiring type and `R` wrap the same
///   type (`derive_from_double_wrapper`)
///
/// One role may be omitted. Its operations then come from a
/// hand-written `SemiringAddition` or `SemiringMultiplication` impl.
///
/// # Example
///
/// ```ignore
/// #[derive(Clone, Copy, Debug, PartialEq, Wrapper, Semiring)]
/// #[semiring(additive(double_wrapper = Or), multiplicative(double_wrapper = And))]
/// struct Reachable(bool);
/// ```
#[proc_macro_derive(Semiring, attributes(semiring))]
pub fn derive_semiring(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    let name = &input.ident;

    let (additive, multiplicative) = match semiring_rules(&input) {
        Ok(rules) => rules,
        Err(err) => return err.to_compile_error().into(),
    };
    let RoleItems {
        role: additive_ty,
        combine: add,
        identity: zero,
    } = role_items(
        additive.as_ref(),
        parse_quote!(::abstract_core::semiring::SemiringAddition),
        quote!(plus),
        quote!(additive_identity),
    );
    let RoleItems {
        role: multiplicative_ty,
        combine: mul,
        identity: one,
    } = role_items(
        multiplicative.as_ref(),
        parse_quote!(::abstract_core::semiring::SemiringMultiplication),
        quote!(times),
        quote!(multiplicative_identity),
    );

    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    let expanded = quote! {
        impl #impl_generics ::abstract_core::Semiring for #name #ty_generics
        #where_clause
        {
            type Additive = #additive_ty;
            type Multiplicative = #multiplicative_ty;

            fn add_combine(&self, other: &Self) -> Self {
                #add
            }

            fn multiply_combine(&self, other: &Self) -> Self {
                #mul
            }

            fn zero() -> Self {
                #zero
            }

            fn one() -> Self {
                #one
            }
        }
    };

    TokenStream::from(expanded)
}

//! Validating record builders.
//!
//! For each structure: the struct itself, a companion module holding the
//! failure taxonomy and the builder, per-member setters and the `build`
//! finalizer. `build` stops at the first failure in member declaration
//! order; it is infallible when the taxonomy is empty.

use crate::{
    CodegenError,
    types::{Emitter, Position, docs},
};
use proc_macro2::{Ident, TokenStream};
use quote::quote;
use shapegen_model::node::{Member, Structure};
use shapegen_utils::ident::{
    constraint_variant_ident, member_ident, missing_variant_ident, module_ident, raw_setter_ident,
    setter_ident, type_ident,
};

/// Name of the failure taxonomy inside a builder module.
pub const TAXONOMY: &str = "ValidationFailure";

///
/// CaseKind
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum CaseKind {
    MissingRequiredMember,
    ConstraintViolation,
}

///
/// FailureCase
/// one way `build` can fail for a structure
///

#[derive(Clone, Copy, Debug)]
pub struct FailureCase<'a> {
    pub member: &'a Member,
    pub kind: CaseKind,
}

impl FailureCase<'_> {
    pub fn variant(&self) -> Ident {
        match self.kind {
            CaseKind::MissingRequiredMember => missing_variant_ident(&self.member.name),
            CaseKind::ConstraintViolation => constraint_variant_ident(&self.member.name),
        }
    }

    pub fn message(&self, structure: &str) -> String {
        match self.kind {
            CaseKind::MissingRequiredMember => missing_message(&self.member.name, structure),
            CaseKind::ConstraintViolation => constraint_message(&self.member.name, structure),
        }
    }
}

#[must_use]
pub fn missing_message(member: &str, structure: &str) -> String {
    format!("`{member}` was not specified but it is required when building `{structure}`")
}

#[must_use]
pub fn constraint_message(member: &str, structure: &str) -> String {
    format!("validation failure occurred building member `{member}` when building `{structure}`")
}

/// Failure cases in member declaration order; a missing case precedes the
/// constraint case of the same member.
#[must_use]
pub fn taxonomy(structure: &Structure) -> Vec<FailureCase<'_>> {
    let mut cases = Vec::new();

    for member in &structure.members {
        if member.required {
            cases.push(FailureCase {
                member,
                kind: CaseKind::MissingRequiredMember,
            });
        }
        if member.needs_constraint_check() {
            cases.push(FailureCase {
                member,
                kind: CaseKind::ConstraintViolation,
            });
        }
    }

    cases
}

pub fn generate(e: &Emitter<'_>, structure: &Structure) -> Result<TokenStream, CodegenError> {
    let ident = type_ident(&structure.name);
    let module = module_ident(&structure.name);
    let struct_docs = docs(structure.docs.as_ref());
    let module_doc = format!(" See [`{ident}`](super::{ident}).");

    let mut fields = Vec::new();
    for member in &structure.members {
        let field = member_ident(&member.name);
        let ty = e.target_type(&member.target, Position::Root)?;
        let ty = if member.required {
            ty
        } else {
            quote!(::std::option::Option<#ty>)
        };
        let member_docs = docs(member.docs.as_ref());

        fields.push(quote! {
            #member_docs
            pub #field: #ty
        });
    }

    let cases = taxonomy(structure);
    let failure = failure_taxonomy(e, structure, &cases)?;
    let builder = builder(e, structure, &cases)?;

    Ok(quote! {
        #struct_docs
        #[derive(Clone, Debug, PartialEq)]
        pub struct #ident {
            #(#fields,)*
        }

        impl #ident {
            /// Creates a new builder-style object to manufacture this structure.
            pub fn builder() -> #module::Builder {
                #module::Builder::default()
            }
        }

        #[doc = #module_doc]
        pub mod #module {
            #failure
            #builder
        }
    })
}

fn failure_taxonomy(
    e: &Emitter<'_>,
    structure: &Structure,
    cases: &[FailureCase<'_>],
) -> Result<TokenStream, CodegenError> {
    if cases.is_empty() {
        return Ok(TokenStream::new());
    }

    let rt = e.rt();
    let taxonomy = Ident::new(TAXONOMY, proc_macro2::Span::call_site());
    let doc = format!(
        " Holds one variant for each way [`Builder::build`] can fail for `{}`.",
        structure.name
    );

    let mut variants = Vec::new();
    let mut display_arms = Vec::new();
    let mut source_arms = Vec::new();

    for case in cases {
        let variant = case.variant();
        let message = case.message(&structure.name);
        let variant_doc = format!(" {message}");

        match case.kind {
            CaseKind::MissingRequiredMember => {
                variants.push(quote! {
                    #[doc = #variant_doc]
                    #variant
                });
                display_arms.push(quote!(Self::#variant => f.write_str(#message)));
                source_arms.push(quote!(Self::#variant => ::std::option::Option::None));
            }
            CaseKind::ConstraintViolation => {
                let ty = e.target_type(&case.member.target, Position::Module)?;
                variants.push(quote! {
                    #[doc = #variant_doc]
                    #variant(<#ty as #rt::constrained::Constrained>::Error)
                });
                display_arms.push(quote!(Self::#variant(_) => f.write_str(#message)));
                source_arms.push(quote!(Self::#variant(e) => ::std::option::Option::Some(e)));
            }
        }
    }

    Ok(quote! {
        #[doc = #doc]
        #[derive(Debug, PartialEq)]
        pub enum #taxonomy {
            #(#variants,)*
        }

        impl ::std::fmt::Display for #taxonomy {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                match self {
                    #(#display_arms,)*
                }
            }
        }

        impl ::std::error::Error for #taxonomy {
            fn source(&self) -> ::std::option::Option<&(dyn ::std::error::Error + 'static)> {
                match self {
                    #(#source_arms,)*
                }
            }
        }
    })
}

#[allow(clippy::too_many_lines)]
fn builder(
    e: &Emitter<'_>,
    structure: &Structure,
    cases: &[FailureCase<'_>],
) -> Result<TokenStream, CodegenError> {
    let rt = e.rt();
    let ident = type_ident(&structure.name);
    let taxonomy = Ident::new(TAXONOMY, proc_macro2::Span::call_site());
    let maybe = quote!(#rt::constrained::MaybeConstrained);

    let mut fields = Vec::new();
    let mut setters = Vec::new();
    let mut resolved = Vec::new();
    let mut from_fields = Vec::new();

    for member in &structure.members {
        let field = member_ident(&member.name);
        let setter = setter_ident(&member.name);
        let ty = e.target_type(&member.target, Position::Module)?;
        let constrained = member.needs_constraint_check();
        let member_docs = docs(member.docs.as_ref());

        // builder field: always optional, tagged when constrained
        let stored = if constrained {
            quote!(#maybe<#ty>)
        } else {
            ty.clone()
        };
        fields.push(quote!(#field: ::std::option::Option<#stored>));

        // primary setter takes the validated type
        let (param, assign) = match (member.required, constrained) {
            (true, true) => (ty.clone(), quote!(::std::option::Option::Some(#maybe::Constrained(input)))),
            (true, false) => (ty.clone(), quote!(::std::option::Option::Some(input))),
            (false, true) => (
                quote!(::std::option::Option<#ty>),
                quote!(input.map(#maybe::Constrained)),
            ),
            (false, false) => (quote!(::std::option::Option<#ty>), quote!(input)),
        };
        setters.push(quote! {
            #member_docs
            pub fn #setter(mut self, input: #param) -> Self {
                self.#field = #assign;
                self
            }
        });

        // raw setter for deserializers, storing the unconstrained input
        if constrained {
            let raw_setter = raw_setter_ident(&member.name);
            let raw = quote!(<#ty as #rt::constrained::Constrained>::Unconstrained);
            let (param, assign) = if member.required {
                (raw, quote!(::std::option::Option::Some(#maybe::Unconstrained(input))))
            } else {
                (
                    quote!(::std::option::Option<#raw>),
                    quote!(input.map(#maybe::Unconstrained)),
                )
            };

            setters.push(quote! {
                #[allow(dead_code)]
                pub(crate) fn #raw_setter(mut self, input: #param) -> Self {
                    self.#field = #assign;
                    self
                }
            });
        }

        resolved.push(resolve_member(member, &field, &taxonomy));

        from_fields.push(match (member.required, constrained) {
            (true, true) => quote!(#field: ::std::option::Option::Some(#maybe::Constrained(value.#field))),
            (true, false) => quote!(#field: ::std::option::Option::Some(value.#field)),
            (false, true) => quote!(#field: value.#field.map(#maybe::Constrained)),
            (false, false) => quote!(#field: value.#field),
        });
    }

    let value = if structure.members.is_empty() {
        quote!(_value)
    } else {
        quote!(value)
    };
    let builder_doc = format!(" A builder for [`{ident}`](super::{ident}).");

    let finalizer = if cases.is_empty() {
        quote! {
            /// Consumes the builder and constructs the structure.
            pub fn build(self) -> super::#ident {
                super::#ident {
                    #(#resolved,)*
                }
            }
        }
    } else {
        quote! {
            /// Consumes the builder and constructs the structure, failing
            /// on the first member that is missing or fails its constraint
            /// check, in declaration order.
            pub fn build(self) -> ::std::result::Result<super::#ident, #taxonomy> {
                ::std::result::Result::Ok(super::#ident {
                    #(#resolved,)*
                })
            }
        }
    };

    let conversion = if cases.is_empty() {
        quote! {
            impl ::std::convert::From<Builder> for super::#ident {
                fn from(builder: Builder) -> Self {
                    builder.build()
                }
            }
        }
    } else {
        quote! {
            impl ::std::convert::TryFrom<Builder> for super::#ident {
                type Error = #taxonomy;

                fn try_from(builder: Builder) -> ::std::result::Result<Self, Self::Error> {
                    builder.build()
                }
            }
        }
    };

    Ok(quote! {
        #[doc = #builder_doc]
        #[derive(Clone, Debug, Default, PartialEq)]
        pub struct Builder {
            #(#fields,)*
        }

        impl Builder {
            #(#setters)*

            #finalizer
        }

        #conversion

        impl ::std::convert::From<super::#ident> for Builder {
            fn from(#value: super::#ident) -> Self {
                Self {
                    #(#from_fields,)*
                }
            }
        }
    })
}

// expression resolving one builder field into the structure field
fn resolve_member(member: &Member, field: &Ident, taxonomy: &Ident) -> TokenStream {
    let missing = missing_variant_ident(&member.name);
    let violation = constraint_variant_ident(&member.name);

    let value = match (member.required, member.needs_constraint_check()) {
        (false, false) => quote!(self.#field),
        (true, false) => quote!(self.#field.ok_or(#taxonomy::#missing)?),
        (false, true) => quote! {
            self.#field
                .map(|v| v.try_into_constrained())
                .transpose()
                .map_err(#taxonomy::#violation)?
        },
        (true, true) => quote! {
            self.#field
                .map(|v| v.try_into_constrained())
                .transpose()
                .map_err(#taxonomy::#violation)?
                .ok_or(#taxonomy::#missing)?
        },
    };

    quote!(#field: #value)
}

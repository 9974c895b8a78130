use crate::{
    CodegenError,
    types::{Emitter, docs},
};
use proc_macro2::{Ident, Span, TokenStream};
use quote::quote;
use shapegen_model::node::Operation;
use shapegen_utils::ident::type_ident;

/// Identifier of an operation's error enum.
pub fn error_ident(op: &Operation) -> Ident {
    Ident::new(&format!("{}Error", type_ident(&op.name)), Span::call_site())
}

/// `namespace#Name`, or just the name when the model has no namespace.
pub fn absolute_id(namespace: &str, name: &str) -> String {
    if namespace.is_empty() {
        name.to_string()
    } else {
        format!("{namespace}#{name}")
    }
}

pub fn generate(e: &Emitter<'_>, op: &Operation) -> Result<TokenStream, CodegenError> {
    let rt = e.rt();
    let ident = type_ident(&op.name);
    let op_docs = docs(op.docs.as_ref());

    let namespace = e.model.namespace.as_str();
    let name = op.name.as_str();
    let absolute = absolute_id(namespace, name);

    let input = e.io_type(op.input.as_ref())?;
    let output = e.io_type(op.output.as_ref())?;
    let (error, error_enum) = if op.errors.is_empty() {
        (quote!(::std::convert::Infallible), TokenStream::new())
    } else {
        let ident = error_ident(op);
        (quote!(#ident), error_enum(op))
    };

    Ok(quote! {
        #op_docs
        #[derive(Clone, Copy, Debug, Default)]
        pub struct #ident;

        impl #rt::operation::OperationShape for #ident {
            const ID: #rt::shape_id::ShapeId =
                #rt::shape_id::ShapeId::new(#absolute, #namespace, #name);

            type Input = #input;
            type Output = #output;
            type Error = #error;
        }

        #error_enum
    })
}

fn error_enum(op: &Operation) -> TokenStream {
    let ident = error_ident(op);
    let doc = format!(" Errors `{}` can fail with.", op.name);

    let variants: Vec<_> = op.errors.iter().map(|e| type_ident(e)).collect();
    let messages: Vec<_> = op
        .errors
        .iter()
        .map(|e| format!("{} failed with {e}", op.name))
        .collect();

    quote! {
        #[doc = #doc]
        #[derive(Debug)]
        pub enum #ident {
            #(#variants(#variants),)*
        }

        #(
            impl ::std::convert::From<#variants> for #ident {
                fn from(error: #variants) -> Self {
                    Self::#variants(error)
                }
            }
        )*

        impl ::std::fmt::Display for #ident {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                match self {
                    #(Self::#variants(_) => f.write_str(#messages),)*
                }
            }
        }

        impl ::std::error::Error for #ident {}
    }
}

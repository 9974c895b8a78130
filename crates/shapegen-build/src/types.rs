use crate::CodegenError;
use proc_macro2::TokenStream;
use quote::quote;
use shapegen_config_build::CodegenConfig;
use shapegen_model::{node::*, types::{Primitive, Protocol, Target}};
use shapegen_utils::ident::type_ident;

///
/// Position
/// where a type reference is emitted relative to the generated file root
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Position {
    Root,
    Module,
}

///
/// Emitter
///
/// Per-worker emission context: the read-only model and config plus the
/// parsed runtime path.
///

pub struct Emitter<'a> {
    pub model: &'a Model,
    pub config: &'a CodegenConfig,
    rt: syn::Path,
}

impl<'a> Emitter<'a> {
    pub fn new(model: &'a Model, config: &'a CodegenConfig) -> Result<Self, CodegenError> {
        let rt = syn::parse_str(&config.runtime_path).map_err(|_| CodegenError::InvalidPath {
            shape: "runtime_path".to_string(),
            path: config.runtime_path.clone(),
        })?;

        Ok(Self { model, config, rt })
    }

    /// Path prefix of the runtime crate in emitted code.
    pub fn rt(&self) -> TokenStream {
        let rt = &self.rt;
        quote!(#rt)
    }

    pub fn protocol(&self, service: &Service) -> Protocol {
        service.protocol.unwrap_or(self.config.default_protocol)
    }

    /// The Rust type a member or list target resolves to.
    pub fn target_type(&self, target: &str, pos: Position) -> Result<TokenStream, CodegenError> {
        let resolved = self
            .model
            .resolve_target(target)
            .ok_or_else(|| CodegenError::UnknownShape(target.to_string()))?;

        match resolved {
            Target::Primitive(p) => Ok(primitive_type(p)),
            Target::Structure(s) => Ok(local_type(&s.name, pos)),
            Target::List(l) => Ok(local_type(&l.name, pos)),
            Target::Constrained(c) => constrained_path(c),
        }
    }

    /// Type of an operation's input or output; `()` when absent.
    pub fn io_type(&self, shape: Option<&String>) -> Result<TokenStream, CodegenError> {
        match shape {
            Some(name) => self.target_type(name, Position::Root),
            None => Ok(quote!(())),
        }
    }

    /// `pub type <List> = Vec<member>;`
    pub fn list(&self, list: &List) -> Result<TokenStream, CodegenError> {
        let ident = type_ident(&list.name);
        let member = self.target_type(&list.member, Position::Root)?;

        Ok(quote! {
            pub type #ident = ::std::vec::Vec<#member>;
        })
    }
}

pub fn constrained_path(shape: &ConstrainedShape) -> Result<TokenStream, CodegenError> {
    let path: syn::Type = syn::parse_str(&shape.path).map_err(|_| CodegenError::InvalidPath {
        shape: shape.name.clone(),
        path: shape.path.clone(),
    })?;

    Ok(quote!(#path))
}

fn local_type(name: &str, pos: Position) -> TokenStream {
    let ident = type_ident(name);

    match pos {
        Position::Root => quote!(#ident),
        Position::Module => quote!(super::#ident),
    }
}

fn primitive_type(p: Primitive) -> TokenStream {
    match p {
        Primitive::Blob => quote!(::std::vec::Vec<u8>),
        Primitive::Boolean => quote!(bool),
        Primitive::Byte => quote!(i8),
        Primitive::Double => quote!(f64),
        Primitive::Float => quote!(f32),
        Primitive::Integer => quote!(i32),
        Primitive::Long => quote!(i64),
        Primitive::Short => quote!(i16),
        Primitive::String => quote!(::std::string::String),
    }
}

/// `#[doc = "..."]` for optional model docs.
pub fn docs(docs: Option<&String>) -> TokenStream {
    docs.map_or_else(TokenStream::new, |d| {
        let lines = d.lines().map(|line| format!(" {line}"));
        quote!(#(#[doc = #lines])*)
    })
}

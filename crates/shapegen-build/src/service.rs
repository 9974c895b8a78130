//! Typestate service builders.
//!
//! A service with N operation slots gets a builder generic over N slot
//! types plus a plugin. Every slot starts as `NotSet`; each setter swaps
//! exactly one slot type and carries the rest over. `build` is bounded on
//! every slot being `Upgradable`, which `NotSet` is not.

use crate::{
    CodegenError,
    router::RouterPolicy,
    types::{Emitter, docs},
};
use proc_macro2::{Ident, Span, TokenStream};
use quote::{format_ident, quote};
use shapegen_model::node::Service;
use shapegen_utils::{
    case::to_snake,
    ident::{Escaped, member_ident, type_ident},
};

/// Builder type identifier for a service.
pub fn builder_ident(service: &str) -> Ident {
    Ident::new(
        &format!("{}Builder", Escaped::new(&shapegen_utils::case::to_pascal(service)).bare()),
        Span::call_site(),
    )
}

/// Handler setter for an operation slot.
pub fn handler_setter(op: &str) -> Ident {
    member_ident(op)
}

/// Operation setter for an operation slot.
pub fn operation_setter(op: &str) -> Ident {
    Ident::new(&format!("{}_operation", to_snake(op)), Span::call_site())
}

/// Whether an operation type named `ty` would be shadowed by one of the
/// builder's own generic parameters.
pub fn shadows_generic(ty: &str) -> bool {
    if ["B", "H", "Pl", "NewOp", "Exts"].contains(&ty) {
        return true;
    }

    ["Op", "Exts"].iter().any(|prefix| {
        ty.strip_prefix(prefix)
            .is_some_and(|n| !n.is_empty() && n.bytes().all(|b| b.is_ascii_digit()))
    })
}

///
/// Slot
/// everything emitted for one generic slot
///

struct Slot {
    op: Ident,
    field: Ident,
    op_setter: Ident,
    generic: Ident,
    exts: Ident,
}

pub fn generate(e: &Emitter<'_>, service: &Service) -> Result<TokenStream, CodegenError> {
    let rt = e.rt();
    let policy = RouterPolicy::new(&rt, e.protocol(service));

    let slots: Vec<Slot> = e
        .model
        .operation_slots(service)
        .into_iter()
        .map(|slot| Slot {
            op: type_ident(&slot.operation),
            field: handler_setter(&slot.operation),
            op_setter: operation_setter(&slot.operation),
            generic: format_ident!("Op{}", slot.index),
            exts: format_ident!("Exts{}", slot.index),
        })
        .collect();

    let wrapper = wrapper(&rt, &policy, service, &slots);
    let builder = builder(&rt, &policy, service, &slots);

    Ok(quote! {
        #wrapper
        #builder
    })
}

fn wrapper(rt: &TokenStream, policy: &RouterPolicy, service: &Service, slots: &[Slot]) -> TokenStream {
    let svc = type_ident(&service.name);
    let builder = builder_ident(&service.name);
    let svc_docs = docs(service.docs.as_ref());
    let marker = &policy.marker;
    let default_router = policy.router_type(rt, &quote!(#rt::body::BoxBody));

    let fields: Vec<_> = slots.iter().map(|s| &s.field).collect();
    let not_set: Vec<_> = slots.iter().map(|_| quote!(#rt::operation::NotSet)).collect();

    quote! {
        #svc_docs
        #[derive(Clone, Debug)]
        pub struct #svc<S = #rt::routing::RoutingService<#default_router, #marker>> {
            svc: S,
        }

        impl #svc<()> {
            /// Constructs a builder with every operation slot unset.
            pub fn builder() -> #builder<#(#not_set,)*> {
                Self::builder_with_plugin(#rt::plugin::IdentityPlugin)
            }

            /// Constructs a builder with every operation slot unset and
            /// `plugin` applied to each operation as it is upgraded.
            pub fn builder_with_plugin<Pl>(plugin: Pl) -> #builder<#(#not_set,)* Pl> {
                #builder {
                    #(#fields: #rt::operation::NotSet,)*
                    plugin,
                }
            }
        }

        impl<S> #svc<S> {
            /// Converts the service into a make-service handing out one
            /// clone per connection.
            pub fn into_make_service(self) -> #rt::routing::IntoMakeService<Self> {
                #rt::routing::IntoMakeService::new(self)
            }

            /// Applies a layer around the whole service.
            pub fn layer<L>(self, layer: &L) -> #svc<L::Service>
            where
                L: #rt::tower::Layer<S>,
            {
                #svc {
                    svc: layer.layer(self.svc),
                }
            }

            pub fn into_inner(self) -> S {
                self.svc
            }
        }

        impl<S, Req> #rt::tower::Service<Req> for #svc<S>
        where
            S: #rt::tower::Service<Req>,
        {
            type Response = S::Response;
            type Error = S::Error;
            type Future = S::Future;

            fn poll_ready(
                &mut self,
                cx: &mut ::std::task::Context<'_>,
            ) -> ::std::task::Poll<::std::result::Result<(), Self::Error>> {
                self.svc.poll_ready(cx)
            }

            fn call(&mut self, request: Req) -> Self::Future {
                self.svc.call(request)
            }
        }
    }
}

fn builder(rt: &TokenStream, policy: &RouterPolicy, service: &Service, slots: &[Slot]) -> TokenStream {
    let svc = type_ident(&service.name);
    let builder = builder_ident(&service.name);
    let doc = format!(" Builder for [`{svc}`]; one generic slot per operation.");

    let generics: Vec<_> = slots.iter().map(|s| &s.generic).collect();
    let fields: Vec<_> = slots.iter().map(|s| &s.field).collect();

    let setters = slots
        .iter()
        .enumerate()
        .map(|(i, slot)| setters(rt, &builder, slots, i, slot));

    let build = build(rt, policy, service, slots);

    quote! {
        #[doc = #doc]
        pub struct #builder<#(#generics,)* Pl = #rt::plugin::IdentityPlugin> {
            #(#fields: #generics,)*
            plugin: Pl,
        }

        impl<#(#generics,)* Pl> #builder<#(#generics,)* Pl> {
            #(#setters)*

            #build
        }
    }
}

// the handler and operation setters for slot `i`
fn setters(rt: &TokenStream, builder: &Ident, slots: &[Slot], i: usize, slot: &Slot) -> TokenStream {
    let Slot {
        op,
        field,
        op_setter,
        ..
    } = slot;

    let replaced = |with: TokenStream| -> Vec<TokenStream> {
        slots
            .iter()
            .enumerate()
            .map(|(j, s)| {
                if i == j {
                    with.clone()
                } else {
                    let g = &s.generic;
                    quote!(#g)
                }
            })
            .collect()
    };
    let with_handler = replaced(quote! {
        #rt::operation::Operation<#rt::operation::IntoService<#op, H>>
    });
    let with_operation = replaced(quote!(NewOp));

    let carried = slots.iter().enumerate().map(|(j, s)| {
        let f = &s.field;
        if i == j {
            quote!(#f: operation)
        } else {
            quote!(#f: self.#f)
        }
    });

    let handler_doc = format!(" Sets the handler for the [`{op}`] operation.");
    let operation_doc = format!(
        " Sets the [`{op}`] slot to an already constructed operation, replacing any previous value."
    );

    quote! {
        #[doc = #handler_doc]
        pub fn #field<H, Exts>(self, handler: H) -> #builder<#(#with_handler,)* Pl>
        where
            H: #rt::operation::Handler<#op, Exts>,
        {
            use #rt::operation::OperationShapeExt;

            self.#op_setter(#op::from_handler(handler))
        }

        #[doc = #operation_doc]
        pub fn #op_setter<NewOp>(self, operation: NewOp) -> #builder<#(#with_operation,)* Pl> {
            #builder {
                #(#carried,)*
                plugin: self.plugin,
            }
        }
    }
}

fn build(rt: &TokenStream, policy: &RouterPolicy, service: &Service, slots: &[Slot]) -> TokenStream {
    let svc = type_ident(&service.name);
    let marker = &policy.marker;
    let body = quote!(B);
    let router = policy.router_type(rt, &body);

    let generics: Vec<_> = slots.iter().map(|s| &s.generic).collect();
    let ops: Vec<_> = slots.iter().map(|s| &s.op).collect();
    let exts: Vec<_> = slots.iter().map(|s| &s.exts).collect();
    let fields: Vec<_> = slots.iter().map(|s| &s.field).collect();

    let upgradable = quote!(#rt::operation::Upgradable);
    let where_clause = if slots.is_empty() {
        TokenStream::new()
    } else {
        quote!(where #(
            #generics: #upgradable<
                #marker, #ops, #exts, B, Pl,
                Service: #rt::tower::Service<#rt::http::Request<B>, Future: 'static>,
            >,
        )*)
    };

    let routes: Vec<(Ident, Ident)> = slots
        .iter()
        .map(|s| (s.op.clone(), s.field.clone()))
        .collect();
    let assemble = policy.assemble(rt, &body, &service.name, &routes);

    quote! {
        /// Upgrades every operation slot in slot order and assembles the
        /// router. Only callable once every slot holds an upgradable value.
        pub fn build<B, #(#exts,)*>(self) -> #svc<#rt::routing::RoutingService<#router, #marker>>
        #where_clause
        {
            #(
                let #fields = #rt::routing::Route::new(
                    <#generics as #upgradable<#marker, #ops, #exts, B, Pl>>::upgrade(
                        self.#fields,
                        &self.plugin,
                    ),
                );
            )*
            let router = #assemble;

            #svc {
                svc: #rt::routing::RoutingService::new(router),
            }
        }
    }
}

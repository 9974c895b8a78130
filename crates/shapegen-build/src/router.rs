//! Router assembly policy: which protocol marker and router type a
//! service is built with, and how the upgraded slot routes are combined.

use proc_macro2::{Ident, TokenStream};
use quote::quote;
use shapegen_model::types::Protocol;

///
/// RouterPolicy
///

pub struct RouterPolicy {
    pub marker: TokenStream,
    pub router: TokenStream,
}

impl RouterPolicy {
    pub fn new(rt: &TokenStream, protocol: Protocol) -> Self {
        match protocol {
            Protocol::RpcV2 => Self {
                marker: quote!(#rt::protocol::rpc_v2::RpcV2),
                router: quote!(#rt::protocol::rpc_v2::RpcV2Router),
            },
            Protocol::AwsJson1_0 => Self {
                marker: quote!(#rt::protocol::aws_json::AwsJson1_0),
                router: quote!(#rt::protocol::aws_json::AwsJsonRouter),
            },
        }
    }

    /// Router type over routes taking request body `body`.
    pub fn router_type(&self, rt: &TokenStream, body: &TokenStream) -> TokenStream {
        let router = &self.router;
        quote!(#router<#rt::routing::Route<#body>>)
    }

    /// Expression building the router from `(operation, route)` pairs in
    /// slot order.
    pub fn assemble(
        &self,
        rt: &TokenStream,
        body: &TokenStream,
        service: &str,
        routes: &[(Ident, Ident)],
    ) -> TokenStream {
        let router = &self.router;
        let ops = routes.iter().map(|(op, _)| op);
        let values = routes.iter().map(|(_, value)| value);

        quote! {
            #router::<#rt::routing::Route<#body>>::new(
                #service,
                [
                    #((<#ops as #rt::operation::OperationShape>::ID, #values),)*
                ],
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proc_macro2::Span;

    #[test]
    fn assembles_in_slot_order() {
        let rt = quote!(::rt);
        let policy = RouterPolicy::new(&rt, Protocol::AwsJson1_0);
        let routes = [
            (Ident::new("B", Span::call_site()), Ident::new("b", Span::call_site())),
            (Ident::new("A", Span::call_site()), Ident::new("a", Span::call_site())),
        ];

        let expr: syn::Expr = syn::parse2(policy.assemble(&rt, &quote!(Body), "Svc", &routes)).unwrap();
        let text = quote!(#expr).to_string();

        assert!(text.starts_with(":: rt :: protocol :: aws_json :: AwsJsonRouter"));
        assert!(text.find("< B as").unwrap() < text.find("< A as").unwrap());
    }
}

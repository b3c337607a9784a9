use proc_macro::TokenStream;
use quote::quote;
use syn::{parse_macro_input, DeriveInput};

/// Implements `result_envelope::IntoEnvelope`, wrapping the value with
/// `ResultEnvelope::of` (status OK, no events).
#[proc_macro_derive(IntoEnvelope)]
pub fn derive_into_envelope(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    let name = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    let expanded = quote! {
        impl #impl_generics ::result_envelope::IntoEnvelope for #name #ty_generics #where_clause {
            fn into_envelope(self) -> ::result_envelope::ResultEnvelope<Self> {
                ::result_envelope::ResultEnvelope::of(self)
            }
        }
    };

    TokenStream::from(expanded)
}

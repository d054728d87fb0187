use proc_macro::TokenStream;
use quote::quote;
use syn::{parse_macro_input, ItemStruct};

/// `#[formwork::buildable]` changes nothing about the struct it decorates; it marks
/// the struct so that formwork tooling generates a builder for it.
///
/// The attribute takes no arguments and may only be applied to structs.
#[proc_macro_attribute]
pub fn buildable(attr: TokenStream, item: TokenStream) -> TokenStream {
    parse_macro_input!(attr as syn::parse::Nothing);

    let item = parse_macro_input!(item as ItemStruct);
    expand(item).into()
}

fn expand(item: ItemStruct) -> proc_macro2::TokenStream {
    quote!(#item)
}

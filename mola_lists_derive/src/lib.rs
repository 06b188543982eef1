use proc_macro::TokenStream;
use quote::quote;
use syn::{
    parse::{Parse, ParseStream}, parse_macro_input, Data, DataStruct, DeriveInput, Fields, Ident, LitStr, Token, Type, TypePath
};

struct NodeAttribute {
    crate_path: syn::Path,
}

/// Parses the attribute in the format: `crate_path = "path::to::crate"`.
impl Parse for NodeAttribute {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let key: Ident = input.parse()?;
        if key != "crate_path" {
            return Err(syn::Error::new(key.span(), "expected attribute `crate_path`"));
        }

        let _: Token![=] = input.parse()?;
        let value: LitStr = input.parse()?;
        let path: syn::Path = value.parse()?;

        Ok(NodeAttribute { crate_path: path })
    }
}

/// Derive macro for singly linked list nodes.
///
/// The struct must have exactly two named fields: `link`, of type
/// `SingleLink<Self>`, and `data`, holding the payload. Implements `Link` and
/// `NodeWithData` for it.
#[proc_macro_derive(Node, attributes(node))]
pub fn node_derive(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    let struct_name = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    // Find absolute crate path
    let mut crate_path = quote! { ::mola_lists };

    for attr in &input.attrs {
        if attr.path().is_ident("node") {
            match attr.parse_args::<NodeAttribute>() {
                Ok(node_attr) => {
                    let path = node_attr.crate_path;
                    crate_path = quote! { #path };
                    break;
                }
                Err(e) => return e.to_compile_error().into(),
            }
        }
    }

    let intrusive_path = quote! { #crate_path::linked_list::intrusive };

    let mut link_field = None;
    let mut data_field = None;

    if let Data::Struct(DataStruct {
        fields: Fields::Named(ref fields),
        ..
    }) = input.data
    {
        for field in fields.named.iter() {
            if let Some(ident) = &field.ident {
                match ident.to_string().as_str() {
                    "link" => link_field = Some(field.clone()),
                    "data" => data_field = Some(field.clone()),
                    _ => {
                        return syn::Error::new_spanned(
                            ident,
                            "Unexpected field name: expected 'link' or 'data'",
                        )
                        .to_compile_error()
                        .into();
                    }
                }
            }
        }
    } else {
        return syn::Error::new_spanned(
            input,
            "Node derive macro only supports structs with named fields",
        )
        .to_compile_error()
        .into();
    };

    let link_field = match link_field {
        Some(field) => field,
        None => {
            return syn::Error::new_spanned(struct_name, "Struct must have a field named 'link'")
                .to_compile_error()
                .into();
        }
    };
    let data_field = match data_field {
        Some(field) => field,
        None => {
            return syn::Error::new_spanned(struct_name, "Struct must have a field named 'data'")
                .to_compile_error()
                .into();
        }
    };

    let link_type = &link_field.ty;
    let type_ident = match link_type {
        Type::Path(TypePath { path, .. }) => path.segments.last().map(|s| s.ident.clone()),
        _ => None,
    };
    if type_ident.is_none_or(|ident| ident != "SingleLink") {
        return syn::Error::new_spanned(link_type, "Field 'link' must be a 'SingleLink<Self>'")
            .to_compile_error()
            .into();
    }

    let data_type = &data_field.ty;

    let expanded = quote! {
        impl #impl_generics #intrusive_path::traits::Link for #struct_name #ty_generics #where_clause {
            #[inline]
            fn next_slot(&self) -> &#intrusive_path::single::Next<Self> {
                self.link.slot()
            }

            #[inline]
            fn next_slot_mut(&mut self) -> &mut #intrusive_path::single::Next<Self> {
                self.link.slot_mut()
            }
        }

        impl #impl_generics #intrusive_path::traits::NodeWithData for #struct_name #ty_generics #where_clause {
            type Data = #data_type;

            #[inline]
            fn new(data: Self::Data) -> Self {
                Self {
                    link: ::core::default::Default::default(),
                    data,
                }
            }

            #[inline]
            fn data(&self) -> &Self::Data {
                &self.data
            }

            #[inline]
            fn data_mut(&mut self) -> &mut Self::Data {
                &mut self.data
            }

            #[inline]
            fn split_mut(&mut self) -> (&mut Self::Data, ::core::option::Option<&mut Self>) {
                (&mut self.data, self.link.slot_mut().as_deref_mut())
            }

            fn into_data(mut self) -> Self::Data {
                // Unlink successors one by one so a long chain never recurses in drop.
                let mut rest = self.link.slot_mut().take();
                while let ::core::option::Option::Some(mut node) = rest {
                    rest = node.link.slot_mut().take();
                }
                self.data
            }
        }
    };

    TokenStream::from(expanded)
}

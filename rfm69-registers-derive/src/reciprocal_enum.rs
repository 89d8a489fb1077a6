use proc_macro2::{Ident, TokenStream};
use quote::quote;
use syn::DeriveInput;

#[derive(deluxe::ExtractAttributes)]
#[deluxe(attributes(valued))]
struct ReciprocalEnum {
    #[deluxe(default = quote!{u8})]
    r#type: TokenStream,
}

/// `From<Enum>` for the raw type and `TryFrom<raw>` back, both keyed on the
/// variant discriminants. The enum needs a matching `#[repr(..)]`.
pub fn reciprocal_enum_impl(item: TokenStream) -> deluxe::Result<TokenStream> {
    let mut ast: DeriveInput = syn::parse2(item)?;
    let meta: ReciprocalEnum = deluxe::extract_attributes(&mut ast)?;
    let ident = ast.ident.clone();

    let syn::Data::Enum(e) = &ast.data else {
        return Err(syn::Error::new_spanned(&ident, "derive(Valued) is only supported on type `enum`"));
    };

    let variants: Vec<&Ident> = e.variants.iter().map(|variant| {
        if matches!(variant.fields, syn::Fields::Unit) {
            Ok(&variant.ident)
        } else {
            Err(syn::Error::new_spanned(variant, "derive(Valued) variants must not carry data"))
        }
    }).collect::<Result<_, syn::Error>>()?;

    let d_type = meta.r#type;

    let from_matches: Vec<TokenStream> = variants.iter().map(|variant| {
        quote! {
            _ if value == Self::#variant as #d_type => Ok(Self::#variant),
        }
    }).collect();

    let (impl_generics, type_generics, where_clause) = ast.generics.split_for_impl();

    Ok(quote! {
        impl #impl_generics From<#ident #type_generics> for #d_type #where_clause {
            fn from(value: #ident #type_generics) -> Self {
                value as #d_type
            }
        }

        impl #impl_generics TryFrom<#d_type> for #ident #type_generics #where_clause {
            type Error = ::rfm69_registers::RegisterError;

            fn try_from(value: #d_type) -> Result<Self, Self::Error> {
                match value {
                    #(#from_matches)*
                    _ => Err(::rfm69_registers::RegisterError::ConversionError),
                }
            }
        }
    })
}

use proc_macro2::TokenStream;
use quote::{format_ident, quote};

/// You know when you shove all your mess in a cupboard when someone says their coming over?
/// Thats what this is...
mod background;
use background::*;

mod reciprocal_enum;
use reciprocal_enum::*;

/// [`ReadableRegister`] Implementation
fn readable_register_impl(meta: StructMetadata, fields: Vec<ParsedRegisterField>) -> TokenStream {
    let (struct_ident, _address, ast_generics) = meta;
    let (impl_generics, type_generics, where_clause) = ast_generics.split_for_impl();

    let readable_register_attrs: Vec<TokenStream> = fields.iter().enumerate().map(|(index, field)| {
        let ident = &field.ident;
        if field.is_fixed() {
            quote! { #ident: ::rfm69_registers::Reserved }
        } else {
            quote! { #ident: values[#index] }
        }
    }).collect();

    quote! {
        impl #impl_generics ::rfm69_registers::ReadableRegister for #struct_ident #type_generics #where_clause {
            fn unpack(byte: u8) -> Self {
                let values = <Self as ::rfm69_registers::Register>::SCHEMA.unpack(byte);
                Self {
                    #(#readable_register_attrs),*
                }
            }
        }
    }
}

/// [`WriteableRegister`] Implementation
fn writeable_register_impl(meta: StructMetadata, fields: Vec<ParsedRegisterField>) -> TokenStream {
    let (struct_ident, _address, ast_generics) = meta;
    let (impl_generics, type_generics, where_clause) = ast_generics.split_for_impl();

    let named = fields.iter().filter(|field| !field.is_fixed()).map(|field| &field.ident);

    quote! {
        impl #impl_generics ::rfm69_registers::WriteableRegister for #struct_ident #type_generics #where_clause {
            fn pack(&self) -> u8 {
                <Self as ::rfm69_registers::Register>::SCHEMA.pack_validated(&[#(self.#named),*])
            }
        }
    }
}

/// [`Register`] Implementation, plus typed accessors for every named field
fn register_impl(meta: StructMetadata, fields: Vec<ParsedRegisterField>) -> TokenStream {
    let (struct_ident, address, ast_generics) = meta;
    let (impl_generics, type_generics, where_clause) = ast_generics.split_for_impl();

    let descriptors: Vec<TokenStream> = fields.iter().map(|ParsedRegisterField { ident, width, kind, .. }| {
        match kind {
            FieldKind::Named(reset) => {
                let name = ident.to_string();
                quote! { ::rfm69_registers::Field::named(#name, #width, (#reset) as u8) }
            }
            FieldKind::Fixed(value) => quote! { ::rfm69_registers::Field::fixed(#width, (#value) as u8) },
        }
    }).collect();

    let reset_values: Vec<TokenStream> = fields.iter().enumerate().map(|(index, field)| {
        let ident = &field.ident;
        if field.is_fixed() {
            quote! { #ident: ::rfm69_registers::Reserved }
        } else {
            quote! { #ident: Self::SCHEMA.fields()[#index].default }
        }
    }).collect();

    let named: Vec<(usize, &ParsedRegisterField)> = fields.iter().enumerate().filter(|(_, field)| !field.is_fixed()).collect();
    let names: Vec<String> = named.iter().map(|(_, field)| field.ident.to_string()).collect();
    let idents: Vec<_> = named.iter().map(|(_, field)| &field.ident).collect();
    let setters: Vec<_> = idents.iter().map(|ident| format_ident!("set_{}", ident)).collect();

    let accessors: Vec<TokenStream> = named.iter().zip(&setters).map(|((index, field), setter)| {
        let ident = &field.ident;
        let docs = &field.docs;
        let setter_doc = format!("Sets `{ident}`, rejecting values wider than {} bits.", field.width);

        quote! {
            #(#docs)*
            #[inline]
            pub fn #ident(&self) -> u8 {
                self.#ident
            }

            #[doc = #setter_doc]
            pub fn #setter(&mut self, value: impl Into<u8>) -> ::rfm69_registers::RegisterResult<()> {
                let field = &<Self as ::rfm69_registers::Register>::SCHEMA.fields()[#index];
                self.#ident = field.check(value.into())?;
                Ok(())
            }
        }
    }).collect();

    // Force the schema through const evaluation even if nothing reads it
    let schema_check = if ast_generics.params.is_empty() {
        quote! {
            const _: ::rfm69_registers::Schema = <#struct_ident as ::rfm69_registers::Register>::SCHEMA;
        }
    } else {
        quote! {}
    };

    quote! {
        impl #impl_generics ::rfm69_registers::Register for #struct_ident #type_generics #where_clause {
            const ADDRESS: u8 = #address;
            const SCHEMA: ::rfm69_registers::Schema = {
                const FIELDS: &[::rfm69_registers::Field] = &[#(#descriptors),*];
                ::rfm69_registers::Schema::new(FIELDS)
            };

            fn reset_value() -> Self {
                Self {
                    #(#reset_values),*
                }
            }

            fn field(&self, name: &str) -> Option<u8> {
                match name {
                    #(#names => Some(self.#idents),)*
                    _ => None,
                }
            }

            fn set_field(&mut self, name: &str, value: u8) -> ::rfm69_registers::RegisterResult<()> {
                match name {
                    #(#names => self.#setters(value),)*
                    _ => Err(::rfm69_registers::RegisterError::UnknownField { address: Self::ADDRESS }),
                }
            }
        }

        impl #impl_generics #struct_ident #type_generics #where_clause {
            #(#accessors)*
        }

        #schema_check
    }
}

type FnImpl = fn(StructMetadata, Vec<ParsedRegisterField>) -> TokenStream;
/// Little helper to take care of repetitious `to_compile_error`
fn wrapped_macro_processing(item: proc_macro::TokenStream, with: FnImpl) -> proc_macro::TokenStream {
    match common_macro_processing(item.into()) {
        Ok((meta, fields)) => with(meta, fields).into(),
        Err(err) => err.to_compile_error().into(),
    }
}

#[proc_macro_derive(Register, attributes(register))]
pub fn register_derive_macro(item: proc_macro::TokenStream) -> proc_macro::TokenStream {
    wrapped_macro_processing(item, register_impl)
}

#[proc_macro_derive(ReadableRegister, attributes(register))]
pub fn readable_register_derive_macro(item: proc_macro::TokenStream) -> proc_macro::TokenStream {
    wrapped_macro_processing(item, readable_register_impl)
}

#[proc_macro_derive(WriteableRegister, attributes(register))]
pub fn writeable_register_derive_macro(item: proc_macro::TokenStream) -> proc_macro::TokenStream {
    wrapped_macro_processing(item, writeable_register_impl)
}

#[proc_macro_derive(Valued, attributes(valued))]
pub fn reciprocal_enum_derive_macro(item: proc_macro::TokenStream) -> proc_macro::TokenStream {
    match reciprocal_enum_impl(item.into()) {
        Ok(item) => item.into(),
        Err(err) => err.to_compile_error().into(),
    }
}

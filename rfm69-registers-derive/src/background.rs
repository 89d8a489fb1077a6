use proc_macro2::{Ident, TokenStream};
use syn::{Attribute, DeriveInput, Generics};

/// Bits in one register
const REGISTER_BITS: u32 = 8;

/// Interpret the struct and do all the fun processing and error handling here
pub fn common_macro_processing(item: TokenStream) -> deluxe::Result<(StructMetadata, Vec<ParsedRegisterField>)> {
    let mut ast: DeriveInput = syn::parse2(item)?;

    let register_meta: RegisterStructAttributes = deluxe::extract_attributes(&mut ast)?;
    let ident = ast.ident.clone();

    let syn::Data::Struct(s) = &mut ast.data else {
        return Err(syn::Error::new_spanned(&ident, "derive(Register) is only supported on type `struct`"));
    };

    let fields: Vec<ParsedRegisterField> = s.fields.iter_mut().map(|field| {
        let Some(field_ident) = field.ident.clone() else {
            return Err(syn::Error::new_spanned(&*field, "register fields must be named"));
        };
        let attr: RegisterFieldAttribute = deluxe::extract_attributes(field)?;

        if !(1..=REGISTER_BITS).contains(&u32::from(attr.width)) {
            return Err(syn::Error::new_spanned(&field_ident, "`width` must be between 1 and 8"));
        }

        let kind = match (attr.reset, attr.fixed) {
            (Some(reset), None) => FieldKind::Named(reset),
            (None, Some(value)) => FieldKind::Fixed(value),
            _ => return Err(syn::Error::new_spanned(&field_ident, "Must have exactly one of `register(reset = ...)` or `register(fixed = ...)` set")),
        };

        // Literal values can be checked here, anything else is caught by `Schema::new`
        if let Ok(literal) = syn::parse2::<syn::LitInt>(kind.value().clone()) {
            let value: u32 = literal.base10_parse()?;
            if value >> attr.width != 0 {
                return Err(syn::Error::new_spanned(literal, format!("value does not fit in {} bits", attr.width)));
            }
        }

        let docs = field.attrs.iter().filter(|attr| attr.path().is_ident("doc")).cloned().collect();

        Ok(ParsedRegisterField {
            ident: field_ident,
            width: attr.width,
            kind,
            docs,
        })
    }).collect::<Result<_, syn::Error>>()?;

    let total: u32 = fields.iter().map(|field| u32::from(field.width)).sum();
    if total != REGISTER_BITS {
        return Err(syn::Error::new_spanned(&ident, format!("register field widths sum to {total} bits, expected {REGISTER_BITS}")));
    }

    let wrapped_meta: StructMetadata = (ident, register_meta.address, ast.generics);

    Ok((wrapped_meta, fields))
}

#[derive(deluxe::ExtractAttributes)]
#[deluxe(attributes(register))]
struct RegisterStructAttributes {
    address: TokenStream,
}

#[derive(deluxe::ExtractAttributes)]
#[deluxe(attributes(register))]
struct RegisterFieldAttribute {
    width: u8,
    #[deluxe(default = None)]
    reset: Option<TokenStream>,
    #[deluxe(default = None)]
    fixed: Option<TokenStream>,
}

pub enum FieldKind {
    /// Mutable field and its reset value
    Named(TokenStream),
    /// Constant bits
    Fixed(TokenStream),
}

impl FieldKind {
    pub fn value(&self) -> &TokenStream {
        match self {
            Self::Named(value) | Self::Fixed(value) => value,
        }
    }
}

pub struct ParsedRegisterField {
    pub ident: Ident,
    pub width: u8,
    pub kind: FieldKind,
    pub docs: Vec<Attribute>,
}

impl ParsedRegisterField {
    pub fn is_fixed(&self) -> bool {
        matches!(self.kind, FieldKind::Fixed(_))
    }
}

/// Metadata for the struct
/// ```ignore
/// let (struct_ident, address, generics) = meta;
/// ```
pub type StructMetadata = (Ident, TokenStream, Generics);

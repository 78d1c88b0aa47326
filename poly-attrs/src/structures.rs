use proc_macro2::TokenStream as TokenStream2;
use quote::{quote, quote_spanned, ToTokens};
use syn::{
    parse::{Parse, ParseStream},
    Attribute,
    Expr,
    Fields,
    Ident,
    ItemStruct,
    Result,
    Token,
};

/// The arguments that can be passed to the `error` attribute. `message` and `label` are
/// required; `help` is optional.
#[derive(Debug, Default)]
pub struct ErrorArgs {
    pub message: Option<Expr>,
    pub label: Option<Expr>,
    pub help: Option<Expr>,
}

impl ErrorArgs {
    /// Parses the next `tag = expr` argument from the input stream and applies it to itself.
    fn parse_arg(&mut self, input: ParseStream) -> Result<()> {
        let ident: Ident = input.parse()?;
        input.parse::<Token![=]>()?;

        match &*ident.to_string() {
            "message" => self.message = Some(input.parse()?),
            "label" => self.label = Some(input.parse()?),
            "help" => self.help = Some(input.parse()?),
            other => return Err(syn::Error::new_spanned(&ident, format!("unknown tag `{}`", other))),
        }

        Ok(())
    }
}

impl Parse for ErrorArgs {
    fn parse(input: ParseStream) -> Result<Self> {
        let mut args = ErrorArgs::default();

        while !input.is_empty() {
            args.parse_arg(input)?;
            if !input.is_empty() {
                input.parse::<Token![,]>()?;
            }
        }

        Ok(args)
    }
}

/// The target struct to derive `ErrorKind` for.
#[derive(Debug)]
pub struct ErrorKindTarget {
    pub name: Ident,
    pub fields: Fields,
    pub error_args: ErrorArgs,
}

impl ErrorKindTarget {
    /// Creates a `let` statement that destructures `self` into the struct's named fields, so
    /// the attribute expressions can refer to them. Unit structs destructure to nothing;
    /// tuple structs are rejected with a compile error.
    fn destructure_fields(&self) -> TokenStream2 {
        let name = &self.name;
        match &self.fields {
            Fields::Named(fields) => {
                let idents = fields.named.iter().map(|field| &field.ident);
                quote! { let #name { #(#idents),* } = self; }
            },
            Fields::Unit => TokenStream2::new(),
            Fields::Unnamed(_) => quote_spanned! {
                name.span() => compile_error!("`ErrorKind` cannot be derived for tuple structs");
            },
        }
    }
}

impl Parse for ErrorKindTarget {
    fn parse(input: ParseStream) -> Result<Self> {
        // outer attributes arrive before the struct itself, documentation included
        let attributes = input.call(Attribute::parse_outer)?;
        let item = input.parse::<ItemStruct>()?;

        let error_args = attributes.iter()
            .find(|attr| attr.path().is_ident("error"))
            .map(|attr| attr.parse_args::<ErrorArgs>())
            .transpose()?
            .unwrap_or_default();

        Ok(ErrorKindTarget {
            name: item.ident,
            fields: item.fields,
            error_args,
        })
    }
}

impl ToTokens for ErrorKindTarget {
    fn to_tokens(&self, tokens: &mut TokenStream2) {
        let destructure = self.destructure_fields();
        let message = self.error_args.message.as_ref();
        let label = self.error_args.label.as_ref();
        let help = self.error_args.help.as_ref()
            .map(|expr| quote! { builder.set_help(#expr); });

        // every error in this workspace points at exactly one region, so the label is
        // attached to the first (and only) span
        tokens.extend(quote! {
            fn build_report<'a>(
                &self,
                src_id: &'a str,
                spans: &[std::ops::Range<usize>],
            ) -> ariadne::Report<(&'a str, std::ops::Range<usize>)> {
                #[allow(unused_variables)]
                #destructure

                let text = String::from(#label);
                let mut label = ariadne::Label::new((src_id, spans[0].clone()))
                    .with_color(poly_error::EXPR);
                if !text.is_empty() {
                    label = label.with_message(&text);
                }

                let mut builder = ariadne::Report::build(ariadne::ReportKind::Error, src_id, spans[0].start)
                    .with_message(#message)
                    .with_label(label);

                #help
                builder.finish()
            }
        });
    }
}

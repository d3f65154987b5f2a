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

/// The tags accepted by the `error` attribute.
#[derive(Debug, Default)]
pub struct ReportArgs {
    pub message: Option<Expr>,
    pub labels: Option<Expr>,
    pub help: Option<Expr>,
}

impl ReportArgs {
    /// Parses one `tag = expr` pair and stores it.
    fn parse_tag(&mut self, input: ParseStream) -> Result<()> {
        let tag: Ident = input.parse()?;
        input.parse::<Token![=]>()?;

        let slot = match tag.to_string().as_str() {
            "message" => &mut self.message,
            "labels" => &mut self.labels,
            "help" => &mut self.help,
            other => return Err(syn::Error::new_spanned(&tag, format!("unknown tag `{}`", other))),
        };

        if slot.is_some() {
            return Err(syn::Error::new_spanned(&tag, format!("duplicate tag `{}`", tag)));
        }
        *slot = Some(input.parse()?);
        Ok(())
    }
}

impl Parse for ReportArgs {
    fn parse(input: ParseStream) -> Result<Self> {
        let mut args = ReportArgs::default();

        while !input.is_empty() {
            args.parse_tag(input)?;
            if input.is_empty() {
                break;
            }
            input.parse::<Token![,]>()?;
        }

        Ok(args)
    }
}

/// Binds every named field of `self` to a local of the same name, so the tag expressions can use
/// the fields directly.
fn bind_fields(name: &Ident, fields: &Fields) -> TokenStream2 {
    match fields {
        Fields::Named(fields) => {
            let names = fields.named.iter().map(|field| field.ident.as_ref());
            quote! { let #name { #(#names),* } = self; }
        },
        Fields::Unnamed(_) => quote_spanned! {
            name.span() => compile_error!("`ErrorKind` cannot be derived for tuple structs");
        },
        Fields::Unit => TokenStream2::new(),
    }
}

/// A struct that `ErrorKind` is derived for.
#[derive(Debug)]
pub struct ErrorKindTarget {
    pub name: Ident,
    pub fields: Fields,
    pub args: ReportArgs,
}

impl Parse for ErrorKindTarget {
    fn parse(input: ParseStream) -> Result<Self> {
        let attributes = input.call(Attribute::parse_outer)?;
        let item = input.parse::<ItemStruct>()?;

        let args = match attributes.iter().find(|attr| attr.path().is_ident("error")) {
            Some(attr) => attr.parse_args::<ReportArgs>()?,
            None => ReportArgs::default(),
        };

        Ok(ErrorKindTarget {
            name: item.ident,
            fields: item.fields,
            args,
        })
    }
}

impl ToTokens for ErrorKindTarget {
    fn to_tokens(&self, tokens: &mut TokenStream2) {
        let name = &self.name;
        let bindings = bind_fields(name, &self.fields);

        let message = match self.args.message.as_ref() {
            Some(message) => quote! { #message },
            None => quote_spanned! {
                name.span() => compile_error!("missing `message` tag in `#[error(...)]`")
            },
        };
        let labels = match self.args.labels.as_ref() {
            Some(labels) => quote! { #labels },
            None => quote! { Vec::<String>::new() },
        };
        let help = self.args.help.as_ref().map(|help| quote! { builder.set_help(#help); });

        tokens.extend(quote! {
            impl computor_error::ErrorKind for #name {
                fn as_any(&self) -> &dyn std::any::Any {
                    self
                }

                fn build_report<'a>(
                    &self,
                    src_id: &'a str,
                    spans: &[std::ops::Range<usize>],
                ) -> ariadne::Report<(&'a str, std::ops::Range<usize>)> {
                    #[allow(unused_variables)]
                    #bindings

                    let offset = spans.first().map_or(0, |span| span.start);
                    let labels = spans
                        .iter()
                        .zip(#labels)
                        .map(|(span, text)| {
                            let label = ariadne::Label::new((src_id, span.clone()))
                                .with_color(computor_error::HIGHLIGHT);

                            if text.is_empty() {
                                label
                            } else {
                                label.with_message(text)
                            }
                        })
                        .collect::<Vec<_>>();

                    #[allow(unused_mut)]
                    let mut builder = ariadne::Report::build(ariadne::ReportKind::Error, src_id, offset)
                        .with_message(#message)
                        .with_labels(labels);

                    #help
                    builder.finish()
                }
            }
        });
    }
}

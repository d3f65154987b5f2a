mod error_kind;

use error_kind::ErrorKindTarget;
use proc_macro::TokenStream;
use quote::quote;
use syn::parse_macro_input;

/// Derives the `ErrorKind` trait of the `computor-error` crate for the given struct.
///
/// The report of the error is customized with the `error` attribute:
/// ```
/// use computor_attrs::ErrorKind;
///
/// #[derive(Debug, ErrorKind)]
/// #[error(message = "unexpected end of equation", labels = ["add a term here"])]
/// pub struct Foo;
///
/// let err = computor_error::Error::new(vec![0..1], Foo);
/// assert!(err.is::<Foo>());
/// ```
///
/// The following tags are available:
///
/// | Tag         | Description                                                                  |
/// | ----------- | ---------------------------------------------------------------------------- |
/// | `message`   | The message displayed at the top of the error when it is displayed.          |
/// | `labels`    | The texts of the labels pointing at each span of the error, in order.        |
/// | `help`      | Optional help text for the error, describing what the user can do to fix it. |
///
/// Each tag accepts an expression. `message` and `help` should evaluate to something that
/// implements [`ToString`], and `labels` to an array of `&str` or [`String`]. For structs with
/// named fields, the expressions are evaluated with the fields of the struct in scope (tuple
/// structs are not supported).
///
/// The deriving crate must depend on `ariadne` and `computor-error`.
#[proc_macro_derive(ErrorKind, attributes(error))]
pub fn error_kind(item: TokenStream) -> TokenStream {
    let target = parse_macro_input!(item as ErrorKindTarget);
    quote! { #target }.into()
}

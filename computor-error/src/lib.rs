//! Contains the common [`ErrorKind`] trait used by all errors to display user-facing error
//! messages, and the [`Error`] type that ties an [`ErrorKind`] to the regions of the equation it
//! was found in.

// lets `#[derive(ErrorKind)]` refer to `computor_error` from inside this crate's tests
extern crate self as computor_error;

use ariadne::{Color, Report, Source};
use std::{any::Any, fmt::Debug, io, ops::Range};

/// The color to use to highlight expressions.
pub const HIGHLIGHT: Color = Color::RGB(52, 235, 152);

/// Represents any kind of error that can occur while reading an equation.
pub trait ErrorKind: Debug + Send {
    /// Returns this error kind as [`Any`], so that callers can inspect the concrete kind.
    fn as_any(&self) -> &dyn Any;

    /// Builds the report for this error.
    fn build_report<'a>(
        &self,
        src_id: &'a str,
        spans: &[Range<usize>],
    ) -> Report<(&'a str, Range<usize>)>;
}

/// An error associated with regions of source code that can be highlighted.
#[derive(Debug)]
pub struct Error {
    /// The regions of the source code that this error originated from.
    pub spans: Vec<Range<usize>>,

    /// The kind of error that occurred.
    pub kind: Box<dyn ErrorKind>,
}

impl Error {
    /// Creates a new error with the given spans and kind.
    pub fn new(spans: Vec<Range<usize>>, kind: impl ErrorKind + 'static) -> Self {
        Self { spans, kind: Box::new(kind) }
    }

    /// Returns the concrete kind of this error, if it is a `T`.
    pub fn downcast_ref<T: ErrorKind + 'static>(&self) -> Option<&T> {
        self.kind.as_any().downcast_ref::<T>()
    }

    /// Returns true if this error is of kind `T`.
    pub fn is<T: ErrorKind + 'static>(&self) -> bool {
        self.downcast_ref::<T>().is_some()
    }

    /// Build a report from this error kind.
    pub fn build_report<'a>(&self, src_id: &'a str) -> Report<(&'a str, Range<usize>)> {
        self.kind.build_report(src_id, &self.spans)
    }

    /// Writes the report for this error to the given writer.
    ///
    /// Colors are included; strip them if the output is not meant for a terminal.
    pub fn write_report(&self, src_id: &str, input: &str, writer: impl io::Write) -> io::Result<()> {
        self.build_report(src_id).write((src_id, Source::from(input)), writer)
    }

    /// Report this error to stderr.
    ///
    /// The `ariadne` crate's [`Report`] type does not have a `Display` implementation, so we can
    /// only use its `eprint` method to print to stderr.
    pub fn report_to_stderr(&self, src_id: &str, input: &str) -> io::Result<()> {
        self.build_report(src_id).eprint((src_id, Source::from(input)))
    }
}

#[cfg(test)]
mod tests {
    use computor_attrs::ErrorKind;
    use super::*;

    #[derive(Debug, ErrorKind)]
    #[error(
        message = "something went wrong",
        labels = ["right here"],
        help = format!("try removing `{}`", self.found),
    )]
    struct Oops {
        found: String,
    }

    #[derive(Debug, ErrorKind)]
    #[error(message = "nothing to see", labels = [""])]
    struct Quiet;

    /// Renders the report of the given error without colors.
    fn render(err: &Error, input: &str) -> String {
        let mut buf = Vec::new();
        err.write_report("input", input, &mut buf).unwrap();
        String::from_utf8_lossy(&strip_ansi_escapes::strip(buf)).into_owned()
    }

    #[test]
    fn report_contains_message_label_and_help() {
        let err = Error::new(vec![4..5], Oops { found: "y".to_string() });
        let out = render(&err, "3 * y = 2");

        assert!(out.contains("something went wrong"), "{}", out);
        assert!(out.contains("right here"), "{}", out);
        assert!(out.contains("try removing `y`"), "{}", out);
    }

    #[test]
    fn empty_label_is_omitted() {
        let err = Error::new(vec![0..1], Quiet);
        let out = render(&err, "x = 1");

        assert!(out.contains("nothing to see"), "{}", out);
    }

    #[test]
    fn downcast_to_concrete_kind() {
        let err = Error::new(vec![0..1], Quiet);
        assert!(err.is::<Quiet>());
        assert!(err.downcast_ref::<Oops>().is_none());
    }
}

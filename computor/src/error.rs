use computor_error::Error;
use std::io;

/// Utility struct to package the errors found while reading one equation.
#[derive(Debug)]
pub struct InputErrors(pub Vec<Error>);

impl InputErrors {
    /// Report the errors to stderr.
    ///
    /// The `ariadne` crate's [`Report`] type actually does not have a `Display` implementation, so
    /// we can only use its `eprint` method to print to stderr.
    ///
    /// [`Report`]: https://docs.rs/ariadne/latest/ariadne/struct.Report.html
    pub fn report_to_stderr(&self, src_id: &str, input: &str) -> io::Result<()> {
        self.0.iter().try_for_each(|err| err.report_to_stderr(src_id, input))
    }

    /// Renders each error as plain text, without colors.
    pub fn render_plain(&self, src_id: &str, input: &str) -> io::Result<Vec<String>> {
        self.0
            .iter()
            .map(|err| {
                let mut buf = Vec::new();
                err.write_report(src_id, input, &mut buf)?;
                Ok(String::from_utf8_lossy(&strip_ansi_escapes::strip(buf)).into_owned())
            })
            .collect()
    }
}

impl From<Vec<Error>> for InputErrors {
    fn from(errs: Vec<Error>) -> Self {
        Self(errs)
    }
}

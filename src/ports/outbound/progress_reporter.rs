/// ProgressReporter port for status output
///
/// Status lines go somewhere other than the listing itself (stderr for
/// the CLI) so piping the output stays clean.
pub trait ProgressReporter {
    /// Reports a status message
    fn report(&self, message: &str);

    /// Reports an error or warning message
    fn report_error(&self, message: &str);

    /// Reports completion of an operation
    fn report_completion(&self, message: &str);
}

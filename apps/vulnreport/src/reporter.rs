//! Leveled reporting over two output streams.
//!
//! Error messages go to the results stream and are never filtered; they also
//! mark the run as errored. Warn, info and verbose messages go to the
//! diagnostics stream, and only when the configured threshold admits them.
//! Keeping diagnostics off the results stream lets the primary output be
//! piped and parsed on its own.
//!
//! Sinks are any `std::io::Write`. Pass `&mut W` to lend a sink the caller
//! keeps owning; the reporter never closes or reads from it.

use crate::models::{CycloneDxVersion, VerbosityLevel};
use std::fmt;
use std::io::Write;

/// Leveled message sink consumed by scan orchestration code.
pub trait Reporter {
    /// Always written to the results stream; marks the run as errored.
    fn error(&mut self, args: fmt::Arguments<'_>);
    fn warn(&mut self, args: fmt::Arguments<'_>);
    fn info(&mut self, args: fmt::Arguments<'_>);
    fn verbose(&mut self, args: fmt::Arguments<'_>);
    /// True once any error message has been reported. Never resets.
    fn has_errored(&self) -> bool;
}

impl<T: Reporter + ?Sized> Reporter for &mut T {
    fn error(&mut self, args: fmt::Arguments<'_>) {
        (**self).error(args)
    }
    fn warn(&mut self, args: fmt::Arguments<'_>) {
        (**self).warn(args)
    }
    fn info(&mut self, args: fmt::Arguments<'_>) {
        (**self).info(args)
    }
    fn verbose(&mut self, args: fmt::Arguments<'_>) {
        (**self).verbose(args)
    }
    fn has_errored(&self) -> bool {
        (**self).has_errored()
    }
}

impl<T: Reporter + ?Sized> Reporter for Box<T> {
    fn error(&mut self, args: fmt::Arguments<'_>) {
        (**self).error(args)
    }
    fn warn(&mut self, args: fmt::Arguments<'_>) {
        (**self).warn(args)
    }
    fn info(&mut self, args: fmt::Arguments<'_>) {
        (**self).info(args)
    }
    fn verbose(&mut self, args: fmt::Arguments<'_>) {
        (**self).verbose(args)
    }
    fn has_errored(&self) -> bool {
        (**self).has_errored()
    }
}

/// Reporter used when emitting CycloneDX documents.
///
/// The schema version is stored for the document writer and does not change
/// filtering or routing.
pub struct CycloneDxReporter<R, D> {
    results: R,
    diagnostics: D,
    format: CycloneDxVersion,
    threshold: VerbosityLevel,
    has_errored: bool,
}

impl<R: Write, D: Write> CycloneDxReporter<R, D> {
    pub fn new(
        results: R,
        diagnostics: D,
        format: CycloneDxVersion,
        threshold: VerbosityLevel,
    ) -> Self {
        log::debug!(
            "reporter ready: threshold={} cyclonedx={}",
            threshold,
            format
        );
        Self {
            results,
            diagnostics,
            format,
            threshold,
            has_errored: false,
        }
    }

    pub fn threshold(&self) -> VerbosityLevel {
        self.threshold
    }

    pub fn format(&self) -> CycloneDxVersion {
        self.format
    }

    /// Results stream, for writing the primary report payload.
    pub fn results_mut(&mut self) -> &mut R {
        &mut self.results
    }

    /// Give the sinks back as `(results, diagnostics)`.
    pub fn into_sinks(self) -> (R, D) {
        (self.results, self.diagnostics)
    }

    fn diagnostic(&mut self, level: VerbosityLevel, args: fmt::Arguments<'_>) {
        if self.threshold.allows(level) {
            write_message(&mut self.diagnostics, args);
        }
    }
}

impl<R: Write, D: Write> Reporter for CycloneDxReporter<R, D> {
    fn error(&mut self, args: fmt::Arguments<'_>) {
        write_message(&mut self.results, args);
        self.has_errored = true;
    }

    fn warn(&mut self, args: fmt::Arguments<'_>) {
        self.diagnostic(VerbosityLevel::Warn, args);
    }

    fn info(&mut self, args: fmt::Arguments<'_>) {
        self.diagnostic(VerbosityLevel::Info, args);
    }

    fn verbose(&mut self, args: fmt::Arguments<'_>) {
        self.diagnostic(VerbosityLevel::Verbose, args);
    }

    fn has_errored(&self) -> bool {
        self.has_errored
    }
}

/// Discards all output but still records whether an error was reported.
#[derive(Debug, Default, Clone, Copy)]
pub struct VoidReporter {
    has_errored: bool,
}

impl VoidReporter {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Reporter for VoidReporter {
    fn error(&mut self, _args: fmt::Arguments<'_>) {
        self.has_errored = true;
    }
    fn warn(&mut self, _args: fmt::Arguments<'_>) {}
    fn info(&mut self, _args: fmt::Arguments<'_>) {}
    fn verbose(&mut self, _args: fmt::Arguments<'_>) {}
    fn has_errored(&self) -> bool {
        self.has_errored
    }
}

// Rendered up front so a message lands in one write. Sink errors are the
// sink owner's concern and are dropped here.
fn write_message<W: Write>(sink: &mut W, args: fmt::Arguments<'_>) {
    let text = match args.as_str() {
        Some(s) => std::borrow::Cow::Borrowed(s),
        None => std::borrow::Cow::Owned(args.to_string()),
    };
    let _ = sink.write_all(text.as_bytes());
}

/// Report an error-level message with `format!` syntax.
#[macro_export]
macro_rules! report_error {
    ($reporter:expr, $($arg:tt)+) => {{
        use $crate::reporter::Reporter as _;
        $reporter.error(::std::format_args!($($arg)+))
    }};
}

/// Report a warn-level message with `format!` syntax.
#[macro_export]
macro_rules! report_warn {
    ($reporter:expr, $($arg:tt)+) => {{
        use $crate::reporter::Reporter as _;
        $reporter.warn(::std::format_args!($($arg)+))
    }};
}

/// Report an info-level message with `format!` syntax.
#[macro_export]
macro_rules! report_info {
    ($reporter:expr, $($arg:tt)+) => {{
        use $crate::reporter::Reporter as _;
        $reporter.info(::std::format_args!($($arg)+))
    }};
}

/// Report a verbose-level message with `format!` syntax.
#[macro_export]
macro_rules! report_verbose {
    ($reporter:expr, $($arg:tt)+) => {{
        use $crate::reporter::Reporter as _;
        $reporter.verbose(::std::format_args!($($arg)+))
    }};
}

//! Structured, non-throwing diagnostics
//!
//! Diagnostics are data: a stable id, positional message arguments and an optional
//! location. They are appended to a [`DiagnosticSink`] and processing continues.
//! Severity is a property of the id, never chosen by the reporter, so tooling can
//! rely on it when deciding exit codes.
//!
//! The ids returned by [`DiagnosticId::code`] are part of the tool's observable
//! contract and must never be renumbered.

use std::fmt;
use std::path::{Path, PathBuf};

use serde::Serialize;
use serde::ser::SerializeStruct;

/// How serious a diagnostic is
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Info,
    Warning,
    Error,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Info => f.write_str("info"),
            Severity::Warning => f.write_str("warning"),
            Severity::Error => f.write_str("error"),
        }
    }
}

/// Known diagnostics
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DiagnosticId {
    /// Two bundles of equal priority define the same path; the later one is rejected
    OverrideConflict,
    /// A provider reported a path that fails normalization; it is skipped
    InvalidResourcePath,
    /// Two files of one bundle normalize to the same path; the first is kept
    DuplicateInBundle,
    /// Several database artifacts sit directly under a module root
    MultipleDatabases,
    /// Fingerprints of more than one engine were found
    AmbiguousEngine,
}

impl DiagnosticId {
    /// Stable external code
    pub fn code(self) -> &'static str {
        match self {
            DiagnosticId::OverrideConflict => "RES0001",
            DiagnosticId::InvalidResourcePath => "RES0002",
            DiagnosticId::DuplicateInBundle => "RES0003",
            DiagnosticId::MultipleDatabases => "MOD0001",
            DiagnosticId::AmbiguousEngine => "ENG0001",
        }
    }

    pub fn severity(self) -> Severity {
        match self {
            DiagnosticId::OverrideConflict => Severity::Error,
            DiagnosticId::InvalidResourcePath
            | DiagnosticId::DuplicateInBundle
            | DiagnosticId::MultipleDatabases
            | DiagnosticId::AmbiguousEngine => Severity::Warning,
        }
    }

    /// Message with `{N}` placeholders for positional arguments
    pub fn message_template(self) -> &'static str {
        match self {
            DiagnosticId::OverrideConflict => {
                "Resource '{0}' is defined by bundles '{1}' and '{2}' with equal priority {3}; keeping '{1}', rejecting '{2}'"
            }
            DiagnosticId::InvalidResourcePath => {
                "Bundle '{0}' contains '{1}' which is not a valid resource path: {2}"
            }
            DiagnosticId::DuplicateInBundle => {
                "Bundle '{0}' contains several files for resource '{1}'; keeping '{2}'"
            }
            DiagnosticId::MultipleDatabases => {
                "Module '{0}' contains {1} database files; none was selected"
            }
            DiagnosticId::AmbiguousEngine => {
                "Module '{0}' matches fingerprints of several engines: {1}"
            }
        }
    }
}

impl fmt::Display for DiagnosticId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// One reported condition
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    id: DiagnosticId,
    args: Vec<String>,
    location: Option<PathBuf>,
}

impl Diagnostic {
    pub fn new(id: DiagnosticId, args: Vec<String>) -> Self {
        Self {
            id,
            args,
            location: None,
        }
    }

    /// Attach the file the diagnostic is about
    pub fn with_location(mut self, location: impl Into<PathBuf>) -> Self {
        self.location = Some(location.into());
        self
    }

    /// Same-priority override blocked
    pub fn override_conflict(path: &str, current: &str, rejected: &str, priority: i32) -> Self {
        Self::new(
            DiagnosticId::OverrideConflict,
            vec![
                path.to_string(),
                current.to_string(),
                rejected.to_string(),
                priority.to_string(),
            ],
        )
    }

    pub fn invalid_resource_path(bundle: &str, raw_path: &str, reason: &str) -> Self {
        Self::new(
            DiagnosticId::InvalidResourcePath,
            vec![bundle.to_string(), raw_path.to_string(), reason.to_string()],
        )
    }

    pub fn duplicate_in_bundle(bundle: &str, path: &str, kept: &Path) -> Self {
        Self::new(
            DiagnosticId::DuplicateInBundle,
            vec![
                bundle.to_string(),
                path.to_string(),
                kept.display().to_string(),
            ],
        )
    }

    pub fn multiple_databases(module: &str, count: usize) -> Self {
        Self::new(
            DiagnosticId::MultipleDatabases,
            vec![module.to_string(), count.to_string()],
        )
    }

    pub fn ambiguous_engine(module: &str, engines: &[String]) -> Self {
        Self::new(
            DiagnosticId::AmbiguousEngine,
            vec![module.to_string(), engines.join(", ")],
        )
    }

    pub fn id(&self) -> DiagnosticId {
        self.id
    }

    pub fn severity(&self) -> Severity {
        self.id.severity()
    }

    pub fn args(&self) -> &[String] {
        &self.args
    }

    pub fn location(&self) -> Option<&Path> {
        self.location.as_deref()
    }

    /// The template with positional arguments substituted
    pub fn message(&self) -> String {
        let template = self.id.message_template();
        let mut message = String::with_capacity(template.len());
        let mut rest = template;

        // Single pass so argument text is never itself substituted.
        while let Some(start) = rest.find('{') {
            message.push_str(&rest[..start]);
            let after = &rest[start + 1..];
            let arg = after.find('}').and_then(|end| {
                let idx: usize = after[..end].parse().ok()?;
                Some((self.args.get(idx)?, end))
            });
            match arg {
                Some((value, end)) => {
                    message.push_str(value);
                    rest = &after[end + 1..];
                }
                None => {
                    message.push('{');
                    rest = after;
                }
            }
        }
        message.push_str(rest);
        message
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}[{}]: {}", self.severity(), self.id, self.message())?;
        if let Some(location) = &self.location {
            write!(f, " ({})", location.display())?;
        }
        Ok(())
    }
}

impl Serialize for Diagnostic {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        let mut state = serializer.serialize_struct("Diagnostic", 5)?;
        state.serialize_field("id", self.id.code())?;
        state.serialize_field("severity", &self.severity())?;
        state.serialize_field("message", &self.message())?;
        state.serialize_field("args", &self.args)?;
        state.serialize_field("location", &self.location)?;
        state.end()
    }
}

/// Destination for diagnostics
pub trait DiagnosticSink {
    fn report(&mut self, diagnostic: Diagnostic);
}

impl DiagnosticSink for Vec<Diagnostic> {
    fn report(&mut self, diagnostic: Diagnostic) {
        self.push(diagnostic);
    }
}

/// Collecting sink that also traces every diagnostic it receives at debug level
#[derive(Debug, Clone, Default)]
pub struct DiagnosticBag {
    diagnostics: Vec<Diagnostic>,
}

impl DiagnosticBag {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics.iter()
    }

    pub fn len(&self) -> usize {
        self.diagnostics.len()
    }

    pub fn is_empty(&self) -> bool {
        self.diagnostics.is_empty()
    }

    /// Whether any error-severity diagnostic was reported
    pub fn has_errors(&self) -> bool {
        self.diagnostics
            .iter()
            .any(|d| d.severity() == Severity::Error)
    }

    /// Diagnostics with the given id
    pub fn with_id(&self, id: DiagnosticId) -> Vec<&Diagnostic> {
        self.diagnostics.iter().filter(|d| d.id() == id).collect()
    }

    pub fn extend(&mut self, diagnostics: impl IntoIterator<Item = Diagnostic>) {
        for diagnostic in diagnostics {
            self.report(diagnostic);
        }
    }

    pub fn into_vec(self) -> Vec<Diagnostic> {
        self.diagnostics
    }
}

impl DiagnosticSink for DiagnosticBag {
    fn report(&mut self, diagnostic: Diagnostic) {
        tracing::debug!(
            id = %diagnostic.id(),
            severity = %diagnostic.severity(),
            "{}",
            diagnostic.message()
        );
        self.diagnostics.push(diagnostic);
    }
}

impl<'a> IntoIterator for &'a DiagnosticBag {
    type Item = &'a Diagnostic;
    type IntoIter = std::slice::Iter<'a, Diagnostic>;

    fn into_iter(self) -> Self::IntoIter {
        self.diagnostics.iter()
    }
}

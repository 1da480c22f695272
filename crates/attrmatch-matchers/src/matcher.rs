/// Boundary contract consumed by assertion frameworks.
///
/// A matcher accumulates expectations, is evaluated against one subject,
/// and renders two strings: a description of what it expects and, once
/// evaluated, a failure message naming the subject. Evaluation never
/// errors; every unmet condition is a plain `false`.
pub trait Matcher<S: ?Sized> {
    /// Stable identifier for reports.
    fn id(&self) -> &'static str;

    /// Evaluate against `subject`, capturing its name for failure
    /// rendering.
    fn matches(&mut self, subject: &S) -> bool;

    /// What the matcher expects. A pure function of accumulated state:
    /// independent of any subject or evaluation outcome.
    fn description(&self) -> String;

    /// `"expected <subject> to <description>"` for the most recent
    /// `matches` call.
    ///
    /// Returns `None` until `matches` has run at least once; afterwards it
    /// is always `Some`, whatever the outcome, so callers may print it
    /// unconditionally.
    fn failure_message(&self) -> Option<String>;
}

pub(crate) fn failure_for(subject: &str, description: &str) -> String {
    format!("expected {subject} to {description}")
}

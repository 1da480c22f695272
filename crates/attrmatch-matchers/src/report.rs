use crate::matcher::Matcher;
use attrmatch_schema::Subject;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Outcome of running one matcher against one subject.
///
/// A stable shape assertion frameworks can fold into their own pass/fail
/// reports. `failure_message` is populated only on a failed match; the
/// matcher itself keeps the message available regardless of outcome.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct MatchReport {
    pub matcher_id: String,
    pub subject: String,
    pub matched: bool,
    pub description: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub failure_message: Option<String>,
}

impl MatchReport {
    /// Run `matcher` once against `subject` and record the outcome.
    pub fn run<M, S>(mut matcher: M, subject: &S) -> Self
    where
        M: Matcher<S>,
        S: Subject,
    {
        let matched = matcher.matches(subject);
        Self {
            matcher_id: matcher.id().to_string(),
            subject: subject.type_name().to_string(),
            matched,
            description: matcher.description(),
            failure_message: if matched {
                None
            } else {
                matcher.failure_message()
            },
        }
    }
}

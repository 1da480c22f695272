use crate::matcher::{Matcher, failure_for};
use attrmatch_schema::{CapabilityLookup, Subject};
use attrmatch_types::CapabilityId;
use attrmatch_types::ids;

/// Matches when a subject type has adopted a capability marker.
///
/// The trivial companion to [`crate::HaveAttribute`]: membership only, no
/// constraint composition.
#[derive(Clone, Debug)]
pub struct AdoptCapability {
    capability: CapabilityId,
    evaluated: Option<String>,
}

pub fn adopt_capability<C: Into<CapabilityId>>(capability: C) -> AdoptCapability {
    AdoptCapability::new(capability)
}

impl AdoptCapability {
    pub fn new<C: Into<CapabilityId>>(capability: C) -> Self {
        Self {
            capability: capability.into(),
            evaluated: None,
        }
    }

    pub fn description(&self) -> String {
        format!("adopt capability {}", self.capability)
    }

    /// Failure message for the most recent evaluation, `None` before any.
    pub fn failure_message(&self) -> Option<String> {
        self.evaluated
            .as_ref()
            .map(|subject| failure_for(subject, &self.description()))
    }
}

impl<S: CapabilityLookup> Matcher<S> for AdoptCapability {
    fn id(&self) -> &'static str {
        ids::MATCHER_ADOPT_CAPABILITY
    }

    fn matches(&mut self, subject: &S) -> bool {
        self.evaluated = Some(subject.type_name().to_string());
        subject.adopts(&self.capability)
    }

    fn description(&self) -> String {
        AdoptCapability::description(self)
    }

    fn failure_message(&self) -> Option<String> {
        AdoptCapability::failure_message(self)
    }
}

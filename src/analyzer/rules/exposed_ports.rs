//! exposed-ports (SEC-003): ports should be declared with EXPOSE

use crate::analyzer::rules::{Check, Rule, RuleId};

const NAME: &str = "Explicit port exposure";
const DESCRIPTION: &str = "Ports must be declared explicitly with EXPOSE.";
const RATIONALE: &str = "Only the ports a service actually needs should be reachable; declaring them documents the container's surface.";

pub struct ExposedPorts;

impl Rule for ExposedPorts {
    fn id(&self) -> RuleId {
        RuleId::ExposedPorts
    }

    fn name(&self) -> &'static str {
        NAME
    }

    fn description(&self) -> &'static str {
        DESCRIPTION
    }

    fn rationale(&self) -> &'static str {
        RATIONALE
    }

    fn check(&self, content: &str) -> Check {
        Check::from_bool(
            content.to_uppercase().contains("EXPOSE"),
            "Ports explicitly exposed",
            "No EXPOSE instruction found",
        )
    }
}

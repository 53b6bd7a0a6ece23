use serde_json::Value;
use tracing::debug;

use crate::form::{FormDocument, Fragment};
use crate::registry::HandlerRegistry;
use crate::types::SubmissionResult;

/// Submission target this crate contributes a handler for.
pub const REGISTRATION_TARGET: &str = "registration.von.canada.ca";

/// Class scoping the rendered fragment so replacement touches only our own
/// output.
pub const LEGAL_ENTITY_FRAGMENT_CLASS: &str = "legal-entity-id";

/// Renders the legal entity id from a successful registration submission.
/// Any fragment from an earlier invocation is removed first, so repeated
/// successes leave exactly one fragment. A failed submission, or a response
/// missing the id path, leaves the form untouched; display is best-effort
/// and never blocks the host.
pub fn render_registration_result(form: &mut dyn FormDocument, response: &Value) {
    let result = SubmissionResult::from_json(response);
    if !result.success {
        return;
    }
    let Some(id) = result.legal_entity_id else {
        debug!("registration succeeded without a legal entity id in the response");
        return;
    };
    form.remove_fragments(LEGAL_ENTITY_FRAGMENT_CLASS);
    form.append_fragment(Fragment {
        css_class: LEGAL_ENTITY_FRAGMENT_CLASS.to_string(),
        body: format!("Your legal entity id is: {id}"),
    });
}

/// Contributes this crate's single entry to the host registry.
pub fn register_handlers(registry: &mut HandlerRegistry) {
    registry.register(REGISTRATION_TARGET, Box::new(render_registration_result));
}

use crate::models::{Directory, Intent};
use crate::services::doctor_search::find_by_specialty;

const DOCTOR_PREFIX: &str = "find doctor";

const SPECIFY_SPECIALTY: &str = "Please specify a specialty, e.g., 'find doctor cardiologist'.";

/// Keyword groups in priority order. A group matches when the message
/// contains any of its substrings; the first matching group wins.
const RULES: &[(&[&str], Intent)] = &[
    (&["hello", "hi"], Intent::Greeting),
    (&["report", "analysis", "smartwatch"], Intent::ReportDisabled),
    (&["doctor", "appointment"], Intent::DoctorLookupPrompt),
    (&["signup", "login", "account"], Intent::AccountDisabled),
];

/// Classifies an already-lowercased message.
pub fn classify(message: &str) -> Intent {
    RULES
        .iter()
        .find(|(keywords, _)| keywords.iter().any(|k| message.contains(k)))
        .map(|(_, intent)| *intent)
        .unwrap_or(Intent::Fallback)
}

pub fn get_chatbot_response(message: &str) -> &'static str {
    let intent = classify(&message.to_lowercase());
    tracing::debug!(intent = ?intent, "routed chat message");
    intent.reply()
}

/// Entry point for an inbound chat message. Doctor queries go to the
/// directory search, everything else to the keyword router.
pub fn route_chat(directory: &Directory, raw_message: &str) -> String {
    let message = raw_message.to_lowercase();

    if let Some(rest) = message.strip_prefix(DOCTOR_PREFIX) {
        let specialty = rest.trim();
        if specialty.is_empty() {
            return SPECIFY_SPECIALTY.to_string();
        }
        return find_by_specialty(directory, specialty);
    }

    get_chatbot_response(&message).to_string()
}

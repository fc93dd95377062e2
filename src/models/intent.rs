use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    Greeting,
    ReportDisabled,
    DoctorLookupPrompt,
    AccountDisabled,
    Fallback,
}

impl Intent {
    pub fn reply(self) -> &'static str {
        match self {
            Intent::Greeting => "Hello there! How can I help with your health today?",
            Intent::ReportDisabled => {
                "Health report and smartwatch data analysis features are disabled in this free deployment to fit platform limitations."
            }
            Intent::DoctorLookupPrompt => {
                "I can help you find a doctor. What kind of specialist are you looking for (e.g., Cardiologist, Nutritionist, General Physician)? Type 'find doctor [specialty]'."
            }
            Intent::AccountDisabled => {
                "User registration and login are disabled in this free deployment due to lack of a persistent database."
            }
            Intent::Fallback => {
                "I'm still learning! You can ask me general health questions or about finding a doctor."
            }
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    pub message: Option<serde_json::Value>,
}

#[derive(Debug, Serialize)]
pub struct ChatResponse {
    pub response: String,
}

pub mod doctor;
pub mod intent;

pub use doctor::{Directory, Doctor};
pub use intent::{ChatRequest, ChatResponse, Intent};

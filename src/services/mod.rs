pub mod chat;
pub mod doctor_search;

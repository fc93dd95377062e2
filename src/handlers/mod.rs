pub mod account;
pub mod chat;
pub mod health;
pub mod pages;
pub mod uploads;

use std::env;

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub port: u16,
    pub doctors_path: String,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self {
            port: env::var("PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(3000),
            doctors_path: env::var("DOCTORS_FILE").unwrap_or_else(|_| "doctors.json".to_string()),
        }
    }
}

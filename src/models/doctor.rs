use std::path::Path;

use anyhow::Context;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct Doctor {
    pub name: String,
    pub specialty: String,
    pub location: String,
    pub contact: String,
    pub phone: String,
    pub availability: String,
}

/// Immutable list of providers, in file order. Loaded once at startup.
#[derive(Debug, Clone, Default)]
pub struct Directory {
    doctors: Vec<Doctor>,
}

impl Directory {
    pub fn new(doctors: Vec<Doctor>) -> Self {
        Self { doctors }
    }

    /// Parses a JSON array of doctor records. Entries that don't match the
    /// record shape are skipped; anything other than an array is an error.
    pub fn from_json(s: &str) -> anyhow::Result<Self> {
        let entries: Vec<serde_json::Value> =
            serde_json::from_str(s).context("doctor list must be a JSON array")?;

        let doctors = entries
            .into_iter()
            .enumerate()
            .filter_map(|(index, entry)| match serde_json::from_value::<Doctor>(entry) {
                Ok(doctor) => Some(doctor),
                Err(e) => {
                    tracing::warn!(index, error = %e, "skipping malformed doctor entry");
                    None
                }
            })
            .collect();

        Ok(Self { doctors })
    }

    /// Loads the directory from disk, degrading to an empty directory when the
    /// file is missing or unusable.
    pub fn load(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();

        if !path.exists() {
            tracing::warn!(
                path = %path.display(),
                "doctor file not found, doctor search will be unavailable"
            );
            return Self::default();
        }

        match read_directory(path) {
            Ok(directory) => {
                tracing::info!(count = directory.len(), path = %path.display(), "loaded doctor directory");
                directory
            }
            Err(e) => {
                tracing::error!(path = %path.display(), error = %format!("{e:#}"), "could not load doctor file");
                Self::default()
            }
        }
    }

    pub fn doctors(&self) -> &[Doctor] {
        &self.doctors
    }

    pub fn len(&self) -> usize {
        self.doctors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.doctors.is_empty()
    }
}

fn read_directory(path: &Path) -> anyhow::Result<Directory> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    Directory::from_json(&raw)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"[
        {"name":"Dr. Asha Rao","specialty":"Cardiologist","location":"City Heart Clinic","contact":"asha.rao@example.com","phone":"555-0101","availability":"Mon-Fri 9am-5pm"},
        {"name":"Dr. Ben Ortiz","specialty":"Nutritionist","location":"Wellness Center","contact":"ben.ortiz@example.com","phone":"555-0102","availability":"Tue, Thu 10am-4pm"}
    ]"#;

    #[test]
    fn test_from_json_preserves_order() {
        let directory = Directory::from_json(SAMPLE).unwrap();
        assert_eq!(directory.len(), 2);
        assert_eq!(directory.doctors()[0].name, "Dr. Asha Rao");
        assert_eq!(directory.doctors()[1].specialty, "Nutritionist");
    }

    #[test]
    fn test_from_json_skips_malformed_entries() {
        let json = r#"[
            {"name":"Dr. Asha Rao","specialty":"Cardiologist","location":"A","contact":"a@x","phone":"1","availability":"Mon"},
            {"name":"Missing fields"},
            42,
            {"name":"Dr. Chen","specialty":"Dermatologist","location":"B","contact":"c@x","phone":"2","availability":"Fri"}
        ]"#;
        let directory = Directory::from_json(json).unwrap();
        let names: Vec<&str> = directory.doctors().iter().map(|d| d.name.as_str()).collect();
        assert_eq!(names, vec!["Dr. Asha Rao", "Dr. Chen"]);
    }

    #[test]
    fn test_from_json_rejects_non_array() {
        assert!(Directory::from_json(r#"{"name":"x"}"#).is_err());
        assert!(Directory::from_json("not json").is_err());
    }

    #[test]
    fn test_from_json_empty_array() {
        let directory = Directory::from_json("[]").unwrap();
        assert!(directory.is_empty());
    }

    #[test]
    fn test_load_missing_file_is_empty() {
        let directory = Directory::load("/nonexistent/healthdesk/doctors.json");
        assert!(directory.is_empty());
    }

    #[test]
    fn test_load_unparseable_file_is_empty() {
        let path = std::env::temp_dir().join(format!("healthdesk-bad-{}.json", std::process::id()));
        std::fs::write(&path, "{ not valid").unwrap();
        let directory = Directory::load(&path);
        std::fs::remove_file(&path).ok();
        assert!(directory.is_empty());
    }

    #[test]
    fn test_load_reads_file() {
        let path = std::env::temp_dir().join(format!("healthdesk-ok-{}.json", std::process::id()));
        std::fs::write(&path, SAMPLE).unwrap();
        let directory = Directory::load(&path);
        std::fs::remove_file(&path).ok();
        assert_eq!(directory.len(), 2);
    }
}

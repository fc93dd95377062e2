use crate::models::{Directory, Doctor};

/// Returns every doctor whose specialty contains `query`, ignoring case.
/// `query` must already be lowercased. An empty query matches everything.
pub fn search<'a>(directory: &'a Directory, query: &str) -> Vec<&'a Doctor> {
    directory
        .doctors()
        .iter()
        .filter(|doc| doc.specialty.to_lowercase().contains(query))
        .collect()
}

pub fn find_by_specialty(directory: &Directory, query: &str) -> String {
    let found = search(directory, query);

    tracing::debug!(query, matches = found.len(), "doctor search");

    if found.is_empty() {
        return format!(
            "Sorry, I couldn't find any doctors specializing in '{query}'. Please try a different specialty."
        );
    }

    let blocks: String = found
        .iter()
        .map(|doc| {
            format!(
                "**{}**\nSpecialty: {}\nLocation: {}\nContact: {} | Phone: {}\nAvailability: {}\n\n",
                doc.name, doc.specialty, doc.location, doc.contact, doc.phone, doc.availability,
            )
        })
        .collect();

    format!("Here are some doctors specializing in your area of interest:\n\n{blocks}")
}

use serde::{Deserialize, Serialize};

/// Descriptions longer than this many characters are cut and suffixed with "...".
pub const DESCRIPTION_LIMIT: usize = 300;

/// A job posting as shown to the user. Produced fresh per search; never cached.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobListing {
    pub title: String,
    pub company: String,
    pub location: String,
    pub description: String,
    pub link: String,
}

/// Cuts `text` to `DESCRIPTION_LIMIT` characters, appending an ellipsis when cut.
pub fn truncate_description(text: &str) -> String {
    match text.char_indices().nth(DESCRIPTION_LIMIT) {
        Some((byte_idx, _)) => format!("{}...", &text[..byte_idx]),
        None => text.to_string(),
    }
}

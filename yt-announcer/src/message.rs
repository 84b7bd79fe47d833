use crate::text::teaser;
use crate::types::Candidate;

/// First message: the bare link, so the chat client renders a preview card.
pub fn preview_text(candidate: &Candidate) -> String {
    candidate.url.clone()
}

/// Follow-up message with title, teaser and links. Sent with previews off.
pub fn details_text(candidate: &Candidate, subscribe_url: &str) -> String {
    format!(
        "📌 {}\n\n{}\n\n👉 Watch now: {}\n🔔 Subscribe: {}",
        candidate.title,
        teaser(&candidate.description),
        candidate.url,
        subscribe_url
    )
}

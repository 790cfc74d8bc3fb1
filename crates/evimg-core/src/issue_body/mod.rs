//! Issue body parsing: event identifier and attached image URLs.

mod event_id;
mod images;

pub use event_id::{is_valid_event_id, parse_event_id};
pub use images::{extract_image_urls, ALLOWED_URL_PREFIXES};

use crate::error::IngestError;

/// The parts of an issue body the pipeline acts on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    pub event_id: String,
    /// In document order; duplicates kept.
    pub image_urls: Vec<String>,
}

/// Parses the event ID and image URLs, failing on the first problem.
///
/// Order of checks: empty body, event ID section, event ID characters, image links.
pub fn parse_submission(body: &str) -> Result<Submission, IngestError> {
    if body.trim().is_empty() {
        return Err(IngestError::Configuration);
    }
    let event_id = parse_event_id(body)?;
    let image_urls = extract_image_urls(body);
    if image_urls.is_empty() {
        return Err(IngestError::NoImagesFound);
    }
    Ok(Submission {
        event_id,
        image_urls,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_body_is_configuration_error() {
        assert!(matches!(parse_submission(""), Err(IngestError::Configuration)));
        assert!(matches!(
            parse_submission("  \n\t"),
            Err(IngestError::Configuration)
        ));
    }

    #[test]
    fn identifier_checked_before_images() {
        let body = "### Event ID\n\nevt/1\n\n![a](https://github.com/user-attachments/assets/x)";
        match parse_submission(body) {
            Err(IngestError::InvalidIdentifier(id)) => assert_eq!(id, "evt/1"),
            other => panic!("expected InvalidIdentifier, got {:?}", other),
        }
    }

    #[test]
    fn no_images() {
        let body = "### Event ID\n\nrust-meetup-2024\n\n### Images\n\nnone yet";
        assert!(matches!(
            parse_submission(body),
            Err(IngestError::NoImagesFound)
        ));
    }

    #[test]
    fn full_submission() {
        let body = "### Event ID\n\nrust-meetup-2024\n\n### Images\n\n\
                    ![stage](https://github.com/user-attachments/assets/1111)\n\
                    ![crowd](https://user-images.githubusercontent.com/42/crowd.jpg)\n";
        let s = parse_submission(body).unwrap();
        assert_eq!(s.event_id, "rust-meetup-2024");
        assert_eq!(
            s.image_urls,
            vec![
                "https://github.com/user-attachments/assets/1111",
                "https://user-images.githubusercontent.com/42/crowd.jpg",
            ]
        );
    }
}

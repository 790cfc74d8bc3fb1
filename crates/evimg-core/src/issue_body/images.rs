//! Markdown image link extraction, limited to GitHub attachment hosts.

use once_cell::sync::Lazy;
use regex::Regex;

/// URL prefixes GitHub uses for files dropped into an issue.
pub const ALLOWED_URL_PREFIXES: [&str; 2] = [
    "https://github.com/user-attachments/assets/",
    "https://user-images.githubusercontent.com/",
];

static IMAGE_LINK: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"!\[.*?\]\((https://(?:github\.com/user-attachments/assets/|user-images\.githubusercontent\.com/)[^\s)]+)\)",
    )
    .unwrap()
});

/// Returns the URLs of `![alt](url)` embeds whose URL starts with an allowed prefix.
///
/// Document order, duplicates kept.
pub fn extract_image_urls(body: &str) -> Vec<String> {
    IMAGE_LINK
        .captures_iter(body)
        .map(|caps| caps[1].to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_document_order() {
        let body = "![one](https://github.com/user-attachments/assets/aaa)\n\
                    text\n\
                    ![two](https://user-images.githubusercontent.com/1/b.png)\n\
                    ![three](https://github.com/user-attachments/assets/ccc)";
        assert_eq!(
            extract_image_urls(body),
            vec![
                "https://github.com/user-attachments/assets/aaa",
                "https://user-images.githubusercontent.com/1/b.png",
                "https://github.com/user-attachments/assets/ccc",
            ]
        );
    }

    #[test]
    fn duplicates_preserved() {
        let body = "![a](https://github.com/user-attachments/assets/same) \
                    ![b](https://github.com/user-attachments/assets/same)";
        assert_eq!(extract_image_urls(body).len(), 2);
    }

    #[test]
    fn ignores_other_hosts_and_plain_links() {
        let body = "![x](https://example.com/evil.png)\n\
                    [not an image](https://github.com/user-attachments/assets/zzz)\n\
                    ![http](http://user-images.githubusercontent.com/1/a.png)\n\
                    ![lookalike](https://github.com.evil.io/user-attachments/assets/q)";
        assert!(extract_image_urls(body).is_empty());
    }

    #[test]
    fn adjacent_links_on_one_line() {
        let body = "![a](https://github.com/user-attachments/assets/1)![b](https://github.com/user-attachments/assets/2)";
        assert_eq!(
            extract_image_urls(body),
            vec![
                "https://github.com/user-attachments/assets/1",
                "https://github.com/user-attachments/assets/2",
            ]
        );
    }

    #[test]
    fn empty_alt_text_and_query() {
        let body = "![](https://user-images.githubusercontent.com/9/pic.png?token=abc)";
        assert_eq!(
            extract_image_urls(body),
            vec!["https://user-images.githubusercontent.com/9/pic.png?token=abc"]
        );
    }

    #[test]
    fn prefixes_match_pattern() {
        for prefix in ALLOWED_URL_PREFIXES {
            let body = format!("![p]({}x)", prefix);
            assert_eq!(extract_image_urls(&body), vec![format!("{}x", prefix)]);
        }
    }
}

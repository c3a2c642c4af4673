use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct HashtagCreateRequest {
    pub name: String,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Hashtag {
    pub id: i64,
    pub name: String,
}

impl Hashtag {
    /// Normalise user input: trim, drop leading `#`, collapse inner whitespace.
    pub fn normalize(input: &str) -> Option<String> {
        let name: String = input
            .trim()
            .trim_start_matches('#')
            .split_whitespace()
            .collect::<Vec<_>>()
            .join("_");
        if name.is_empty() {
            None
        } else {
            Some(name)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize() {
        assert_eq!(Hashtag::normalize(" #golden hour "), Some("golden_hour".to_string()));
        assert_eq!(Hashtag::normalize("포즈"), Some("포즈".to_string()));
        assert_eq!(Hashtag::normalize("##"), None);
        assert_eq!(Hashtag::normalize("   "), None);
    }
}

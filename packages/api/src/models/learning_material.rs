use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LearningMaterialCreateRequest {
    pub title: String,
    pub reference_info: String,
    pub key_word: String,
    pub pretty_manner: String,
    pub tips: String,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LearningMaterialImage {
    #[serde(default)]
    pub file_name: String,
    pub file_url: String,
}

/// Entry of `/api/learning-material/list`.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LearningMaterialSummary {
    pub id: i64,
    pub title: String,
    #[serde(default)]
    pub thumbnail_url: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LearningMaterial {
    pub id: i64,
    pub title: String,
    #[serde(default)]
    pub images: Vec<LearningMaterialImage>,
    #[serde(default)]
    pub reference_info: String,
    #[serde(default)]
    pub key_word: Option<String>,
    #[serde(default)]
    pub pretty_manner: String,
    #[serde(default)]
    pub tips: String,
}

impl LearningMaterial {
    /// The four titled info boxes shown next to the image carousel.
    pub fn info_sections(&self) -> Vec<(&'static str, String)> {
        let key_word = self
            .key_word
            .as_deref()
            .filter(|k| !k.trim().is_empty())
            .unwrap_or("No keywords yet.");
        vec![
            ("When to use this", self.reference_info.clone()),
            ("Key words", key_word.to_string()),
            ("How to take it well", self.pretty_manner.clone()),
            ("Extra tips", self.tips.clone()),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_info_sections_fill_missing_keywords() {
        let body = r#"{"id":1,"title":"Backlight","images":[{"fileUrl":"https://cdn/1.jpg"}],"referenceInfo":"sunset","keyWord":"","prettyManner":"expose for face","tips":"use reflector"}"#;
        let material: LearningMaterial = serde_json::from_str(body).unwrap();
        let sections = material.info_sections();
        assert_eq!(sections.len(), 4);
        assert_eq!(sections[1].1, "No keywords yet.");
        assert_eq!(sections[3].1, "use reflector");
    }
}

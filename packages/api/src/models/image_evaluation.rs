use serde::Deserialize;

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EvaluationImage {
    #[serde(default)]
    pub file_name: String,
    #[serde(default)]
    pub extension: String,
    pub file_url: String,
}

/// A photo submitted for evaluation and, once `finish` is set, its result.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageEvaluation {
    pub id: i64,
    pub evaluation_image: EvaluationImage,
    #[serde(default)]
    pub created_at: String,
    /// Whether evaluation is complete.
    #[serde(default)]
    pub finish: bool,
    #[serde(default)]
    pub score: Option<f64>,
    #[serde(default)]
    pub feedback: Option<String>,
}

impl ImageEvaluation {
    pub fn status_label(&self) -> &'static str {
        if self.finish {
            "Evaluated"
        } else {
            "Waiting"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_pending_evaluation() {
        let body = r#"{"id":3,"evaluationImage":{"fileName":"a.png","extension":"png","fileUrl":"https://cdn/a.png"},"createdAt":"2024-11-04T09:00:00","finish":false}"#;
        let eval: ImageEvaluation = serde_json::from_str(body).unwrap();
        assert_eq!(eval.evaluation_image.extension, "png");
        assert_eq!(eval.score, None);
        assert_eq!(eval.status_label(), "Waiting");
    }
}

//! Files picked in the browser or on disk, ready to go into a multipart body.

use base64::Engine;
use reqwest::multipart::{Form, Part};
use serde::Serialize;

use crate::ApiError;

#[derive(Clone, Debug, PartialEq)]
pub struct Upload {
    pub file_name: String,
    pub mime: String,
    pub bytes: Vec<u8>,
}

impl Upload {
    pub fn new(file_name: impl Into<String>, bytes: Vec<u8>) -> Self {
        let file_name = file_name.into();
        let mime = mime_guess::from_path(&file_name)
            .first_or_octet_stream()
            .essence_str()
            .to_string();
        Self {
            file_name,
            mime,
            bytes,
        }
    }

    pub fn is_image(&self) -> bool {
        self.mime.starts_with("image/")
    }

    pub fn size(&self) -> usize {
        self.bytes.len()
    }

    /// Inline `data:` URL for previews before the file reaches the server.
    pub fn data_url(&self) -> String {
        let encoded = base64::engine::general_purpose::STANDARD.encode(&self.bytes);
        format!("data:{};base64,{encoded}", self.mime)
    }

    pub(crate) fn into_part(self) -> Result<Part, ApiError> {
        let part = Part::bytes(self.bytes)
            .file_name(self.file_name)
            .mime_str(&self.mime)?;
        Ok(part)
    }
}

/// A JSON document sent as one named part, the way the backend expects
/// `@RequestPart` DTOs.
pub(crate) fn json_part<T: Serialize>(value: &T) -> Result<Part, ApiError> {
    let json = serde_json::to_string(value)?;
    Ok(Part::text(json).mime_str("application/json")?)
}

/// Append every upload under the same field name.
pub(crate) fn append_files(
    mut form: Form,
    field: &str,
    files: Vec<Upload>,
) -> Result<Form, ApiError> {
    for file in files {
        form = form.part(field.to_string(), file.into_part()?);
    }
    Ok(form)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mime_guess() {
        let photo = Upload::new("sunset.JPG", vec![1, 2, 3]);
        assert_eq!(photo.mime, "image/jpeg");
        assert!(photo.is_image());

        let doc = Upload::new("notes.pdf", vec![]);
        assert!(!doc.is_image());

        let unknown = Upload::new("blob", vec![]);
        assert_eq!(unknown.mime, "application/octet-stream");
    }

    #[test]
    fn test_data_url() {
        let photo = Upload::new("dot.png", b"hi".to_vec());
        assert_eq!(photo.data_url(), "data:image/png;base64,aGk=");
        assert_eq!(photo.size(), 2);
    }
}

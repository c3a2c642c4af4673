//! Turning `<input type="file">` selections into [`Upload`]s.

use api::Upload;
use dioxus::prelude::*;

/// Read every file picked in `evt`. Files the engine fails to read are skipped.
pub async fn read_uploads(evt: &FormEvent) -> Vec<Upload> {
    let Some(engine) = evt.files() else {
        return Vec::new();
    };
    let mut uploads = Vec::new();
    for name in engine.files() {
        match engine.read_file(&name).await {
            Some(bytes) => uploads.push(Upload::new(name, bytes)),
            None => tracing::warn!(file = %name, "could not read picked file"),
        }
    }
    uploads
}

/// Keep image files only; also returns how many were dropped.
pub fn only_images(uploads: Vec<Upload>) -> (Vec<Upload>, usize) {
    let total = uploads.len();
    let images: Vec<Upload> = uploads.into_iter().filter(Upload::is_image).collect();
    let dropped = total - images.len();
    (images, dropped)
}

/// Trim `picked` so that `existing + picked` stays within `limit`; also returns
/// how many were cut.
pub fn within_limit(existing: usize, limit: usize, mut picked: Vec<Upload>) -> (Vec<Upload>, usize) {
    let room = limit.saturating_sub(existing);
    let cut = picked.len().saturating_sub(room);
    picked.truncate(room);
    (picked, cut)
}

/// Remove the item at `index` if it is still there. A stale index from an
/// earlier render is ignored.
pub fn remove_at<T>(list: &mut Vec<T>, index: usize) -> Option<T> {
    (index < list.len()).then(|| list.remove(index))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn file(name: &str) -> Upload {
        Upload::new(name, vec![0])
    }

    #[test]
    fn test_only_images() {
        let (images, dropped) = only_images(vec![file("a.jpg"), file("b.txt"), file("c.PNG")]);
        assert_eq!(images.len(), 2);
        assert_eq!(dropped, 1);
    }

    #[test]
    fn test_within_limit() {
        let picked = vec![file("1.jpg"), file("2.jpg"), file("3.jpg")];
        let (kept, cut) = within_limit(3, 5, picked.clone());
        assert_eq!(kept.len(), 2);
        assert_eq!(cut, 1);

        let (kept, cut) = within_limit(6, 5, picked.clone());
        assert!(kept.is_empty());
        assert_eq!(cut, 3);

        let (kept, cut) = within_limit(0, 5, picked);
        assert_eq!(kept.len(), 3);
        assert_eq!(cut, 0);
    }

    #[test]
    fn test_remove_at_ignores_stale_index() {
        let mut list = vec![file("1.jpg"), file("2.jpg")];
        assert_eq!(remove_at(&mut list, 1).map(|u| u.file_name), Some("2.jpg".to_string()));
        assert!(remove_at(&mut list, 1).is_none());
        assert_eq!(list.len(), 1);
        assert!(remove_at(&mut Vec::<Upload>::new(), 0).is_none());
    }
}

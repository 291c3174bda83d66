use serde::{Deserialize, Serialize};

/// Upload ceiling per file.
pub const MAX_UPLOAD_BYTES: u64 = 5 * 1024 * 1024;

/// One file attached to an artist submission, as reported by the
/// browser file input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArtworkUpload {
    #[serde(rename = "fileName")]
    pub file_name: String,
    #[serde(rename = "sizeBytes")]
    pub size_bytes: u64,
    #[serde(rename = "mimeType")]
    pub mime_type: String,
}

/// Images only, capped at 5 MiB each.
pub fn validate_upload(upload: &ArtworkUpload) -> Result<(), String> {
    if !upload.mime_type.starts_with("image/") {
        return Err(format!("'{}' is not an image", upload.file_name));
    }
    if upload.size_bytes > MAX_UPLOAD_BYTES {
        return Err(format!("'{}' exceeds the 5 MB limit", upload.file_name));
    }
    Ok(())
}

/// An artist's proposal to stock their work in the store. There is no
/// backend; a valid submission is only logged.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArtistSubmission {
    pub name: String,
    pub email: String,
    pub description: String,
    pub uploads: Vec<ArtworkUpload>,
}

impl ArtistSubmission {
    pub fn validate(&self) -> Result<(), String> {
        if self.name.trim().is_empty() {
            return Err("name required".to_string());
        }
        let email = self.email.trim();
        if !email.contains('@') || email.starts_with('@') || email.ends_with('@') {
            return Err("a valid email is required".to_string());
        }
        if self.uploads.is_empty() {
            return Err("attach at least one image".to_string());
        }
        for upload in &self.uploads {
            validate_upload(upload)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn upload(name: &str, size: u64, mime: &str) -> ArtworkUpload {
        ArtworkUpload {
            file_name: name.to_string(),
            size_bytes: size,
            mime_type: mime.to_string(),
        }
    }

    #[test]
    fn accepts_small_images_only() {
        assert_eq!(validate_upload(&upload("a.png", 1024, "image/png")), Ok(()));
        assert!(validate_upload(&upload("a.pdf", 1024, "application/pdf")).is_err());
        assert!(validate_upload(&upload("big.jpg", MAX_UPLOAD_BYTES + 1, "image/jpeg")).is_err());
    }

    #[test]
    fn submission_requires_contact_and_files() {
        let mut submission = ArtistSubmission {
            name: "Emma".to_string(),
            email: "emma@example.com".to_string(),
            description: String::new(),
            uploads: vec![upload("a.png", 1024, "image/png")],
        };
        assert_eq!(submission.validate(), Ok(()));

        submission.email = "not-an-email".to_string();
        assert!(submission.validate().is_err());

        submission.email = "emma@example.com".to_string();
        submission.uploads.clear();
        assert!(submission.validate().is_err());
    }
}

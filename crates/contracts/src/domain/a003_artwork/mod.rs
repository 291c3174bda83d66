pub mod aggregate;

pub use aggregate::{validate_upload, ArtistSubmission, ArtworkUpload, MAX_UPLOAD_BYTES};

//! Video upload collaborator.
//!
//! Uploading is modelled as an interface: submit a video plus its metadata,
//! receive a platform video id or a failure. The only implementation shipped
//! is [`DemoUploader`], which builds the Data API resource body, logs it and
//! returns a `demo_<millis>` id without any network traffic.

pub mod config;
pub mod error;
pub mod types;
pub mod uploader;

pub use config::YouTubeConfig;
pub use error::{UploadError, UploadResult};
pub use types::{
    parse_schedule_time, PrivacyStatus, UploadOutcome, UploadRequest, VideoResource, VideoSource,
};
pub use uploader::{DemoUploader, VideoUploader};

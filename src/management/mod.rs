mod extract;
mod job;
mod upload;

pub use extract::PulseExtractor;
pub use job::JobContext;
pub use job::run;
pub use job::run_for_date;
pub use upload::SnapshotUploader;
pub use upload::UploadError;

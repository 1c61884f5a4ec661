pub mod contact;

pub use contact::{ContactSubmission, FileInfo};

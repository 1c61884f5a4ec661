pub mod contact;
pub mod diagnostics;
pub mod estimate;

pub use contact::{ContactFields, ContactResponse};
pub use diagnostics::DiagnosticsResponse;
pub use estimate::{EstimateRequest, EstimateResponse};

pub mod contact;
pub mod diagnostics;
pub mod estimate;
pub mod health;

pub use contact::submit_contact;
pub use diagnostics::database_diagnostics;
pub use estimate::estimate;
pub use health::{health_check, root};

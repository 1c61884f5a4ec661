pub mod database;
pub mod metrics;

pub use database::{DocumentStore, MockDocumentStore, MongoStore};
pub use metrics::{get_metrics, init_metrics};

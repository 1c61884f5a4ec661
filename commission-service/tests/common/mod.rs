//! Test helpers for commission-service integration tests.

#![allow(dead_code)]

use commission_service::config::{CommissionConfig, DatabaseConfig};
use commission_service::services::{DocumentStore, MockDocumentStore};
use commission_service::startup::Application;
use service_core::config::Config as CoreConfig;
use std::sync::Arc;

pub struct TestApp {
    pub address: String,
    pub port: u16,
    /// The injected mock store, when the app was spawned with one.
    pub store: Option<Arc<MockDocumentStore>>,
}

impl TestApp {
    /// Spawn the service without a document store (degraded mode).
    pub async fn spawn() -> Self {
        Self::spawn_with(None).await
    }

    /// Spawn the service backed by an in-memory mock store.
    pub async fn spawn_with_store(succeed: bool) -> Self {
        Self::spawn_with(Some(Arc::new(MockDocumentStore::new(succeed)))).await
    }

    async fn spawn_with(store: Option<Arc<MockDocumentStore>>) -> Self {
        let config = test_config();
        let dyn_store = store.clone().map(|s| s as Arc<dyn DocumentStore>);

        let app = Application::build_with_store(config, dyn_store)
            .await
            .expect("Failed to build test application");
        let port = app.port();

        tokio::spawn(async move {
            app.run_until_stopped().await.ok();
        });

        TestApp {
            address: format!("http://127.0.0.1:{}", port),
            port,
            store,
        }
    }
}

fn test_config() -> CommissionConfig {
    CommissionConfig {
        common: CoreConfig { port: 0 }, // Random port for testing
        database: DatabaseConfig {
            url: None,
            name: "commission_test".to_string(),
        },
    }
}

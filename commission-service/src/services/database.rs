use async_trait::async_trait;
use mongodb::{
    bson::{doc, Bson, Document},
    Client as MongoClient, Database,
};
use service_core::error::AppError;
use std::sync::Mutex;

/// Capability surface the handlers need from the document store.
///
/// Resolved once at startup. An absent store is a supported degraded
/// state, not an error: contact submissions then skip persistence and
/// diagnostics report the store as unavailable.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Insert a document into the named collection, returning its id.
    async fn create_document(
        &self,
        collection: &str,
        payload: Document,
    ) -> Result<String, AppError>;

    /// Names of the collections in the configured database.
    async fn list_collection_names(&self) -> Result<Vec<String>, AppError>;

    async fn health_check(&self) -> Result<(), AppError>;
}

#[derive(Clone)]
pub struct MongoStore {
    client: MongoClient,
    db: Database,
}

impl MongoStore {
    /// Create a client for the given connection string.
    ///
    /// The driver connects lazily, so this succeeding does not guarantee
    /// the server is reachable; per-call failures surface through the
    /// trait methods.
    pub async fn connect(uri: &str, database: &str) -> Result<Self, AppError> {
        tracing::info!(uri = %uri, "Creating MongoDB client");
        let client = MongoClient::with_uri_str(uri).await.map_err(|e| {
            tracing::error!("Failed to create MongoDB client for {}: {}", uri, e);
            AppError::from(e)
        })?;
        let db = client.database(database);
        tracing::info!(database = %database, "MongoDB client ready");
        Ok(Self { client, db })
    }
}

#[async_trait]
impl DocumentStore for MongoStore {
    async fn create_document(
        &self,
        collection: &str,
        payload: Document,
    ) -> Result<String, AppError> {
        let result = self
            .db
            .collection::<Document>(collection)
            .insert_one(payload, None)
            .await
            .map_err(|e| {
                tracing::error!("Failed to insert into {}: {}", collection, e);
                AppError::from(e)
            })?;

        let id = match result.inserted_id {
            Bson::ObjectId(oid) => oid.to_hex(),
            other => other.to_string(),
        };
        Ok(id)
    }

    async fn list_collection_names(&self) -> Result<Vec<String>, AppError> {
        self.db
            .list_collection_names(None)
            .await
            .map_err(AppError::from)
    }

    async fn health_check(&self) -> Result<(), AppError> {
        self.client
            .database("admin")
            .run_command(doc! { "ping": 1 }, None)
            .await
            .map_err(|e| {
                tracing::error!("MongoDB health check failed: {}", e);
                AppError::from(e)
            })?;
        Ok(())
    }
}

/// In-memory store for tests.
///
/// With `succeed = false` every call fails, which exercises the
/// best-effort persistence paths without a database.
pub struct MockDocumentStore {
    succeed: bool,
    documents: Mutex<Vec<(String, Document)>>,
}

impl MockDocumentStore {
    pub fn new(succeed: bool) -> Self {
        Self {
            succeed,
            documents: Mutex::new(Vec::new()),
        }
    }

    /// Everything inserted so far, as (collection, document) pairs.
    pub fn documents(&self) -> Vec<(String, Document)> {
        self.documents.lock().expect("mock store lock poisoned").clone()
    }
}

#[async_trait]
impl DocumentStore for MockDocumentStore {
    async fn create_document(
        &self,
        collection: &str,
        payload: Document,
    ) -> Result<String, AppError> {
        if !self.succeed {
            return Err(AppError::DatabaseError(anyhow::anyhow!(
                "mock store configured to fail"
            )));
        }
        let id = mongodb::bson::oid::ObjectId::new().to_hex();
        self.documents
            .lock()
            .expect("mock store lock poisoned")
            .push((collection.to_string(), payload));
        Ok(id)
    }

    async fn list_collection_names(&self) -> Result<Vec<String>, AppError> {
        if !self.succeed {
            return Err(AppError::DatabaseError(anyhow::anyhow!(
                "mock store configured to fail"
            )));
        }
        let documents = self.documents.lock().expect("mock store lock poisoned");
        let mut names: Vec<String> = Vec::new();
        for (collection, _) in documents.iter() {
            if !names.contains(collection) {
                names.push(collection.clone());
            }
        }
        Ok(names)
    }

    async fn health_check(&self) -> Result<(), AppError> {
        if !self.succeed {
            return Err(AppError::DatabaseError(anyhow::anyhow!(
                "mock store configured to fail"
            )));
        }
        Ok(())
    }
}

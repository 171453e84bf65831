//! MongoDB-backed `TodoStore`.
//!
//! # Design
//! One `Collection` handle is built at startup and shared by every request;
//! the driver pools connections internally. Ids are stored as the `_id`
//! primary key using the standard binary UUID subtype, so uniqueness is
//! enforced by the server.

use futures_util::TryStreamExt;
use mongodb::{
    bson::{doc, Uuid as BsonUuid},
    error::{Error as MongoError, ErrorKind, WriteFailure},
    options::ClientOptions,
    Client, Collection,
};
use serde::{Deserialize, Serialize};
use todo_core::{StoreError, StoreResult, TodoItem, TodoStore};
use tracing::info;
use uuid::Uuid;

const DUPLICATE_KEY_CODE: i32 = 11000;

/// Document layout in the `todos` collection.
#[derive(Debug, Serialize, Deserialize)]
struct TodoDocument {
    #[serde(rename = "_id")]
    id: BsonUuid,
    content: String,
}

impl From<&TodoItem> for TodoDocument {
    fn from(item: &TodoItem) -> Self {
        Self {
            id: to_bson(item.id),
            content: item.content.clone(),
        }
    }
}

impl From<TodoDocument> for TodoItem {
    fn from(doc: TodoDocument) -> Self {
        Self {
            id: Uuid::from_bytes(doc.id.bytes()),
            content: doc.content,
        }
    }
}

fn to_bson(id: Uuid) -> BsonUuid {
    BsonUuid::from_bytes(id.into_bytes())
}

#[derive(Debug, Clone)]
pub struct MongoStore {
    todos: Collection<TodoDocument>,
}

impl MongoStore {
    /// Connect to `uri` and verify the deployment answers a `ping`.
    pub async fn connect(uri: &str, database: &str, collection: &str) -> StoreResult<Self> {
        let mut options = ClientOptions::parse(uri).await.map_err(StoreError::backend)?;
        options.app_name = Some(env!("CARGO_PKG_NAME").to_string());
        let client = Client::with_options(options).map_err(StoreError::backend)?;

        let db = client.database(database);
        db.run_command(doc! { "ping": 1 })
            .await
            .map_err(StoreError::backend)?;
        info!(database, collection, "connected to MongoDB");

        Ok(Self {
            todos: db.collection(collection),
        })
    }
}

impl TodoStore for MongoStore {
    async fn insert(&self, item: &TodoItem) -> StoreResult<()> {
        self.todos
            .insert_one(TodoDocument::from(item))
            .await
            .map_err(|err| {
                if is_duplicate_key(&err) {
                    StoreError::DuplicateKey { id: item.id }
                } else {
                    StoreError::backend(err)
                }
            })?;
        Ok(())
    }

    async fn list(&self) -> StoreResult<Vec<TodoItem>> {
        let cursor = self.todos.find(doc! {}).await.map_err(StoreError::backend)?;
        let docs: Vec<TodoDocument> = cursor.try_collect().await.map_err(StoreError::backend)?;
        Ok(docs.into_iter().map(TodoItem::from).collect())
    }

    async fn delete(&self, id: Uuid) -> StoreResult<u64> {
        let result = self
            .todos
            .delete_one(doc! { "_id": to_bson(id) })
            .await
            .map_err(StoreError::backend)?;
        Ok(result.deleted_count)
    }
}

fn is_duplicate_key(err: &MongoError) -> bool {
    matches!(
        err.kind.as_ref(),
        ErrorKind::Write(WriteFailure::WriteError(write)) if write.code == DUPLICATE_KEY_CODE
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use mongodb::bson::{self, spec::BinarySubtype, Bson};

    #[test]
    fn document_uses_id_as_primary_key() {
        let item = TodoItem {
            id: Uuid::parse_str("67e55044-10b1-426f-9247-bb680e5fe0c8").unwrap(),
            content: "buy milk".to_string(),
        };
        let doc = bson::to_document(&TodoDocument::from(&item)).unwrap();

        assert_eq!(doc.keys().collect::<Vec<_>>(), vec!["_id", "content"]);
        match doc.get("_id") {
            Some(Bson::Binary(binary)) => {
                assert_eq!(binary.subtype, BinarySubtype::Uuid);
                assert_eq!(binary.bytes, item.id.as_bytes().to_vec());
            }
            other => panic!("unexpected _id: {other:?}"),
        }
        assert_eq!(doc.get_str("content").unwrap(), "buy milk");
    }

    #[test]
    fn document_converts_back_to_item() {
        let item = TodoItem {
            id: Uuid::new_v4(),
            content: String::new(),
        };
        let doc = bson::to_document(&TodoDocument::from(&item)).unwrap();
        let back: TodoDocument = bson::from_document(doc).unwrap();
        assert_eq!(TodoItem::from(back), item);
    }
}

use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::{
    bson::{doc, oid::ObjectId},
    options::IndexOptions,
    Collection, IndexModel,
};

use crate::{
    db::{Database, ROLES_COLLECTION},
    errors::{is_duplicate_key, AppError, AppResult},
    models::domain::Role,
};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RoleRepository: Send + Sync {
    async fn create(&self, role: Role) -> AppResult<Role>;
    async fn find_by_name(&self, name: &str) -> AppResult<Option<Role>>;
    /// Unknown names are skipped.
    async fn find_by_names(&self, names: &[String]) -> AppResult<Vec<Role>>;
    /// Unknown ids are skipped.
    async fn find_by_ids(&self, ids: &[ObjectId]) -> AppResult<Vec<Role>>;
}

pub struct MongoRoleRepository {
    collection: Collection<Role>,
}

impl MongoRoleRepository {
    pub fn new(db: &Database) -> Self {
        let collection = db.get_collection(ROLES_COLLECTION);
        Self { collection }
    }

    pub async fn ensure_indexes(&self) -> AppResult<()> {
        let model = IndexModel::builder()
            .keys(doc! { "name": 1 })
            .options(
                IndexOptions::builder()
                    .unique(true)
                    .name("name_unique".to_string())
                    .build(),
            )
            .build();

        self.collection.create_index(model).await?;
        log::info!("Ensured unique index on roles.name");

        Ok(())
    }
}

#[async_trait]
impl RoleRepository for MongoRoleRepository {
    async fn create(&self, role: Role) -> AppResult<Role> {
        match self.collection.insert_one(&role).await {
            Ok(_) => Ok(role),
            Err(err) if is_duplicate_key(&err) => Err(AppError::AlreadyExists(format!(
                "Role '{}' already exists",
                role.name
            ))),
            Err(err) => Err(err.into()),
        }
    }

    async fn find_by_name(&self, name: &str) -> AppResult<Option<Role>> {
        let role = self.collection.find_one(doc! { "name": name }).await?;
        Ok(role)
    }

    async fn find_by_names(&self, names: &[String]) -> AppResult<Vec<Role>> {
        let cursor = self
            .collection
            .find(doc! { "name": { "$in": names.to_vec() } })
            .await?;
        let roles: Vec<Role> = cursor.try_collect().await?;
        Ok(roles)
    }

    async fn find_by_ids(&self, ids: &[ObjectId]) -> AppResult<Vec<Role>> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let cursor = self.collection.find(doc! { "_id": { "$in": ids.to_vec() } }).await?;
        let roles: Vec<Role> = cursor.try_collect().await?;
        Ok(roles)
    }
}

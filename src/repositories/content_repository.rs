use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::{
    bson::{doc, oid::ObjectId, Document},
    options::ReturnDocument,
    Collection,
};

use crate::{
    db::{Database, MODULES_COLLECTION, SUBMODULES_COLLECTION, VIDEOS_COLLECTION},
    errors::AppResult,
    models::domain::{
        module::ModulePatch, submodule::SubmodulePatch, video::VideoPatch, Module, Submodule,
        Video,
    },
};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ModuleRepository: Send + Sync {
    async fn create(&self, module: Module) -> AppResult<Module>;
    async fn find_all(&self) -> AppResult<Vec<Module>>;
    async fn find_by_id(&self, id: &ObjectId) -> AppResult<Option<Module>>;
    async fn update(&self, id: &ObjectId, patch: ModulePatch) -> AppResult<Option<Module>>;
    async fn delete(&self, id: &ObjectId) -> AppResult<bool>;
    /// Appends a submodule reference. Returns false when the module is missing.
    async fn push_submodule(&self, id: &ObjectId, submodule_id: &ObjectId) -> AppResult<bool>;
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SubmoduleRepository: Send + Sync {
    async fn create(&self, submodule: Submodule) -> AppResult<Submodule>;
    async fn find_by_id(&self, id: &ObjectId) -> AppResult<Option<Submodule>>;
    async fn find_by_ids(&self, ids: &[ObjectId]) -> AppResult<Vec<Submodule>>;
    async fn update(&self, id: &ObjectId, patch: SubmodulePatch) -> AppResult<Option<Submodule>>;
    async fn delete(&self, id: &ObjectId) -> AppResult<bool>;
    /// Appends a video reference. Returns false when the submodule is missing.
    async fn push_video(&self, id: &ObjectId, video_id: &ObjectId) -> AppResult<bool>;
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait VideoRepository: Send + Sync {
    async fn create(&self, video: Video) -> AppResult<Video>;
    async fn find_by_id(&self, id: &ObjectId) -> AppResult<Option<Video>>;
    async fn find_by_ids(&self, ids: &[ObjectId]) -> AppResult<Vec<Video>>;
    async fn update(&self, id: &ObjectId, patch: VideoPatch) -> AppResult<Option<Video>>;
    async fn delete(&self, id: &ObjectId) -> AppResult<bool>;
}

/// `$set` of the supplied string fields.
fn set_strings<'a>(fields: impl IntoIterator<Item = (&'a str, Option<String>)>) -> Document {
    fields
        .into_iter()
        .filter_map(|(key, value)| value.map(|v| (key.to_string(), v.into())))
        .collect()
}

async fn find_many<T>(collection: &Collection<T>, ids: &[ObjectId]) -> AppResult<Vec<T>>
where
    T: serde::de::DeserializeOwned + Send + Sync + Unpin,
{
    if ids.is_empty() {
        return Ok(Vec::new());
    }

    let cursor = collection.find(doc! { "_id": { "$in": ids.to_vec() } }).await?;
    let items: Vec<T> = cursor.try_collect().await?;
    Ok(items)
}

async fn patch_one<T>(
    collection: &Collection<T>,
    id: &ObjectId,
    fields: Document,
) -> AppResult<Option<T>>
where
    T: serde::de::DeserializeOwned + Send + Sync + Unpin,
{
    if fields.is_empty() {
        return Ok(collection.find_one(doc! { "_id": *id }).await?);
    }

    let updated = collection
        .find_one_and_update(doc! { "_id": *id }, doc! { "$set": fields })
        .return_document(ReturnDocument::After)
        .await?;
    Ok(updated)
}

pub struct MongoModuleRepository {
    collection: Collection<Module>,
}

impl MongoModuleRepository {
    pub fn new(db: &Database) -> Self {
        let collection = db.get_collection(MODULES_COLLECTION);
        Self { collection }
    }
}

#[async_trait]
impl ModuleRepository for MongoModuleRepository {
    async fn create(&self, module: Module) -> AppResult<Module> {
        self.collection.insert_one(&module).await?;
        Ok(module)
    }

    async fn find_all(&self) -> AppResult<Vec<Module>> {
        let cursor = self.collection.find(doc! {}).await?;
        let modules: Vec<Module> = cursor.try_collect().await?;
        Ok(modules)
    }

    async fn find_by_id(&self, id: &ObjectId) -> AppResult<Option<Module>> {
        Ok(self.collection.find_one(doc! { "_id": *id }).await?)
    }

    async fn update(&self, id: &ObjectId, patch: ModulePatch) -> AppResult<Option<Module>> {
        let fields = set_strings([
            ("nombre", patch.nombre),
            ("descripcion", patch.descripcion),
            ("imagen", patch.imagen),
        ]);
        patch_one(&self.collection, id, fields).await
    }

    async fn delete(&self, id: &ObjectId) -> AppResult<bool> {
        let result = self.collection.delete_one(doc! { "_id": *id }).await?;
        Ok(result.deleted_count > 0)
    }

    async fn push_submodule(&self, id: &ObjectId, submodule_id: &ObjectId) -> AppResult<bool> {
        let result = self
            .collection
            .update_one(
                doc! { "_id": *id },
                doc! { "$push": { "submodulos": *submodule_id } },
            )
            .await?;
        Ok(result.matched_count > 0)
    }
}

pub struct MongoSubmoduleRepository {
    collection: Collection<Submodule>,
}

impl MongoSubmoduleRepository {
    pub fn new(db: &Database) -> Self {
        let collection = db.get_collection(SUBMODULES_COLLECTION);
        Self { collection }
    }
}

#[async_trait]
impl SubmoduleRepository for MongoSubmoduleRepository {
    async fn create(&self, submodule: Submodule) -> AppResult<Submodule> {
        self.collection.insert_one(&submodule).await?;
        Ok(submodule)
    }

    async fn find_by_id(&self, id: &ObjectId) -> AppResult<Option<Submodule>> {
        Ok(self.collection.find_one(doc! { "_id": *id }).await?)
    }

    async fn find_by_ids(&self, ids: &[ObjectId]) -> AppResult<Vec<Submodule>> {
        find_many(&self.collection, ids).await
    }

    async fn update(&self, id: &ObjectId, patch: SubmodulePatch) -> AppResult<Option<Submodule>> {
        let fields = set_strings([
            ("nombre", patch.nombre),
            ("descripcion", patch.descripcion),
        ]);
        patch_one(&self.collection, id, fields).await
    }

    async fn delete(&self, id: &ObjectId) -> AppResult<bool> {
        let result = self.collection.delete_one(doc! { "_id": *id }).await?;
        Ok(result.deleted_count > 0)
    }

    async fn push_video(&self, id: &ObjectId, video_id: &ObjectId) -> AppResult<bool> {
        let result = self
            .collection
            .update_one(doc! { "_id": *id }, doc! { "$push": { "videos": *video_id } })
            .await?;
        Ok(result.matched_count > 0)
    }
}

pub struct MongoVideoRepository {
    collection: Collection<Video>,
}

impl MongoVideoRepository {
    pub fn new(db: &Database) -> Self {
        let collection = db.get_collection(VIDEOS_COLLECTION);
        Self { collection }
    }
}

#[async_trait]
impl VideoRepository for MongoVideoRepository {
    async fn create(&self, video: Video) -> AppResult<Video> {
        self.collection.insert_one(&video).await?;
        Ok(video)
    }

    async fn find_by_id(&self, id: &ObjectId) -> AppResult<Option<Video>> {
        Ok(self.collection.find_one(doc! { "_id": *id }).await?)
    }

    async fn find_by_ids(&self, ids: &[ObjectId]) -> AppResult<Vec<Video>> {
        find_many(&self.collection, ids).await
    }

    async fn update(&self, id: &ObjectId, patch: VideoPatch) -> AppResult<Option<Video>> {
        let fields = set_strings([
            ("title", patch.title),
            ("description", patch.description),
            ("url", patch.url),
        ]);
        patch_one(&self.collection, id, fields).await
    }

    async fn delete(&self, id: &ObjectId) -> AppResult<bool> {
        let result = self.collection.delete_one(doc! { "_id": *id }).await?;
        Ok(result.deleted_count > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_strings_skips_missing_fields() {
        let fields = set_strings([
            ("nombre", Some("Geometría".to_string())),
            ("descripcion", None),
        ]);

        assert_eq!(fields.get_str("nombre").unwrap(), "Geometría");
        assert!(!fields.contains_key("descripcion"));
    }
}

use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::{
    bson::{doc, oid::ObjectId, to_bson, Document},
    options::ReturnDocument,
    Collection,
};

use crate::{
    db::{Database, STATISTICS_COLLECTION},
    errors::AppResult,
    models::domain::{statistics::StatisticsPatch, Statistics},
};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait StatisticsRepository: Send + Sync {
    async fn create(&self, statistics: Statistics) -> AppResult<Statistics>;
    async fn find_by_user(&self, user_id: &ObjectId) -> AppResult<Vec<Statistics>>;
    /// Patches the first document owned by the user.
    async fn update_by_user(
        &self,
        user_id: &ObjectId,
        patch: StatisticsPatch,
    ) -> AppResult<Option<Statistics>>;
    /// Removes the first document owned by the user.
    async fn delete_by_user(&self, user_id: &ObjectId) -> AppResult<Option<Statistics>>;
}

pub struct MongoStatisticsRepository {
    collection: Collection<Statistics>,
}

impl MongoStatisticsRepository {
    pub fn new(db: &Database) -> Self {
        let collection = db.get_collection(STATISTICS_COLLECTION);
        Self { collection }
    }
}

fn set_fields(patch: StatisticsPatch) -> AppResult<Document> {
    let mut fields = Document::new();
    if let Some(total) = patch.total_correct_answers {
        fields.insert("totalCorrectAnswers", total);
    }
    if let Some(total) = patch.total_incorrect_answers {
        fields.insert("totalIncorrectAnswers", total);
    }
    if let Some(time) = patch.total_time_practice {
        fields.insert("totalTimePractice", time);
    }
    if let Some(score) = patch.average_score {
        fields.insert("averageScore", score);
    }
    if let Some(history) = patch.session_history {
        fields.insert("sessionHistory", to_bson(&history)?);
    }
    if let Some(progress) = patch.time_progress {
        fields.insert("timeProgress", to_bson(&progress)?);
    }
    if let Some(achievements) = patch.achievements {
        fields.insert("achievements", to_bson(&achievements)?);
    }
    if let Some(themes) = patch.theme_progress {
        fields.insert("themeProgress", to_bson(&themes)?);
    }
    Ok(fields)
}

#[async_trait]
impl StatisticsRepository for MongoStatisticsRepository {
    async fn create(&self, statistics: Statistics) -> AppResult<Statistics> {
        self.collection.insert_one(&statistics).await?;
        Ok(statistics)
    }

    async fn find_by_user(&self, user_id: &ObjectId) -> AppResult<Vec<Statistics>> {
        let cursor = self.collection.find(doc! { "userId": *user_id }).await?;
        let statistics: Vec<Statistics> = cursor.try_collect().await?;
        Ok(statistics)
    }

    async fn update_by_user(
        &self,
        user_id: &ObjectId,
        patch: StatisticsPatch,
    ) -> AppResult<Option<Statistics>> {
        let fields = set_fields(patch)?;
        if fields.is_empty() {
            return Ok(self.collection.find_one(doc! { "userId": *user_id }).await?);
        }

        let statistics = self
            .collection
            .find_one_and_update(doc! { "userId": *user_id }, doc! { "$set": fields })
            .return_document(ReturnDocument::After)
            .await?;
        Ok(statistics)
    }

    async fn delete_by_user(&self, user_id: &ObjectId) -> AppResult<Option<Statistics>> {
        let deleted = self
            .collection
            .find_one_and_delete(doc! { "userId": *user_id })
            .await?;
        Ok(deleted)
    }
}

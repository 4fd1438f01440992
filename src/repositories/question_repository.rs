use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::{
    bson::{doc, oid::ObjectId, Document},
    options::ReturnDocument,
    Collection,
};

use crate::{
    db::{Database, QUESTIONS_COLLECTION},
    errors::AppResult,
    models::domain::{question::QuestionPatch, Question},
};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait QuestionRepository: Send + Sync {
    async fn create(&self, question: Question) -> AppResult<Question>;
    async fn find_all(&self) -> AppResult<Vec<Question>>;
    async fn find_by_id(&self, id: &ObjectId) -> AppResult<Option<Question>>;
    /// Returns the updated question, or `None` when it does not exist.
    async fn update(&self, id: &ObjectId, patch: QuestionPatch) -> AppResult<Option<Question>>;
    /// Returns whether a question was removed.
    async fn delete(&self, id: &ObjectId) -> AppResult<bool>;
}

pub struct MongoQuestionRepository {
    collection: Collection<Question>,
}

impl MongoQuestionRepository {
    pub fn new(db: &Database) -> Self {
        let collection = db.get_collection(QUESTIONS_COLLECTION);
        Self { collection }
    }
}

fn set_fields(patch: QuestionPatch) -> Document {
    let mut fields = Document::new();
    if let Some(enunciado) = patch.enunciado {
        fields.insert("enunciado", enunciado);
    }
    if let Some(opciones) = patch.opciones {
        fields.insert("opciones", opciones);
    }
    if let Some(respuesta) = patch.respuesta_correcta {
        fields.insert("respuestaCorrecta", respuesta);
    }
    if let Some(nivel) = patch.nivel {
        fields.insert("nivel", nivel);
    }
    if let Some(tema) = patch.tema {
        fields.insert("Tema", tema);
    }
    fields
}

#[async_trait]
impl QuestionRepository for MongoQuestionRepository {
    async fn create(&self, question: Question) -> AppResult<Question> {
        self.collection.insert_one(&question).await?;
        Ok(question)
    }

    async fn find_all(&self) -> AppResult<Vec<Question>> {
        let cursor = self.collection.find(doc! {}).await?;
        let questions: Vec<Question> = cursor.try_collect().await?;
        Ok(questions)
    }

    async fn find_by_id(&self, id: &ObjectId) -> AppResult<Option<Question>> {
        let question = self.collection.find_one(doc! { "_id": *id }).await?;
        Ok(question)
    }

    async fn update(&self, id: &ObjectId, patch: QuestionPatch) -> AppResult<Option<Question>> {
        let fields = set_fields(patch);
        if fields.is_empty() {
            return self.find_by_id(id).await;
        }

        let question = self
            .collection
            .find_one_and_update(doc! { "_id": *id }, doc! { "$set": fields })
            .return_document(ReturnDocument::After)
            .await?;
        Ok(question)
    }

    async fn delete(&self, id: &ObjectId) -> AppResult<bool> {
        let result = self.collection.delete_one(doc! { "_id": *id }).await?;
        Ok(result.deleted_count > 0)
    }
}

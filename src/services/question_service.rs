use std::sync::Arc;

use mongodb::bson::oid::ObjectId;
use validator::Validate;

use crate::{
    errors::{AppError, AppResult},
    models::{
        domain::{question::QuestionPatch, Question},
        dto::request::QuestionRequest,
    },
    repositories::QuestionRepository,
    services::db_helpers::parse_object_id,
};

pub const QUESTION_NOT_FOUND_MESSAGE: &str = "Pregunta no encontrada";

pub struct QuestionService {
    questions: Arc<dyn QuestionRepository>,
}

impl QuestionService {
    pub fn new(questions: Arc<dyn QuestionRepository>) -> Self {
        Self { questions }
    }

    pub async fn create(&self, request: QuestionRequest) -> AppResult<Question> {
        request.validate()?;

        let mut question = Question {
            id: ObjectId::new(),
            enunciado: None,
            opciones: Vec::new(),
            respuesta_correcta: None,
            nivel: None,
            tema: None,
        };
        QuestionPatch::from(request).apply(&mut question);

        self.questions.create(question).await
    }

    pub async fn list(&self) -> AppResult<Vec<Question>> {
        self.questions.find_all().await
    }

    pub async fn get(&self, id: &str) -> AppResult<Question> {
        let id = parse_object_id(id, QUESTION_NOT_FOUND_MESSAGE)?;
        self.questions
            .find_by_id(&id)
            .await?
            .ok_or_else(not_found)
    }

    pub async fn update(&self, id: &str, request: QuestionRequest) -> AppResult<Question> {
        let id = parse_object_id(id, QUESTION_NOT_FOUND_MESSAGE)?;
        request.validate()?;

        let patch = QuestionPatch::from(request);

        // Options and answer index may arrive in separate updates; the
        // resulting pair must stay consistent.
        let (index, options_len) = match (patch.respuesta_correcta, &patch.opciones) {
            (Some(_), Some(_)) | (None, None) => (None, 0),
            (Some(index), None) => {
                let current = self.questions.find_by_id(&id).await?.ok_or_else(not_found)?;
                (Some(index), current.opciones.len())
            }
            (None, Some(opciones)) => {
                let current = self.questions.find_by_id(&id).await?.ok_or_else(not_found)?;
                (current.respuesta_correcta, opciones.len())
            }
        };
        if let Some(index) = index {
            if index < 0 || index as usize >= options_len {
                return Err(AppError::ValidationError(
                    "respuestaCorrecta fuera de rango".to_string(),
                ));
            }
        }

        self.questions
            .update(&id, patch)
            .await?
            .ok_or_else(not_found)
    }

    pub async fn delete(&self, id: &str) -> AppResult<()> {
        let id = parse_object_id(id, QUESTION_NOT_FOUND_MESSAGE)?;
        if self.questions.delete(&id).await? {
            Ok(())
        } else {
            Err(not_found())
        }
    }
}

fn not_found() -> AppError {
    AppError::NotFound(QUESTION_NOT_FOUND_MESSAGE.to_string())
}

use serde::Deserialize;
use validator::{Validate, ValidationError};

use crate::models::domain::{
    module::ModulePatch,
    question::QuestionPatch,
    statistics::{Achievement, SessionRecord, StatisticsPatch, ThemeProgress, TimeProgress},
    submodule::SubmodulePatch,
    video::VideoPatch,
};

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct RegisterRequest {
    #[validate(length(max = 100))]
    pub nombre: Option<String>,

    #[validate(email(message = "Formato de email inválido"))]
    pub email: String,

    #[validate(length(min = 1, message = "La contraseña es obligatoria"))]
    pub password: String,

    /// Role names. Omitted means the default "user" role.
    pub roles: Option<Vec<String>>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
#[validate(schema(function = "validate_answer_index"))]
pub struct QuestionRequest {
    pub enunciado: Option<String>,
    pub opciones: Option<Vec<String>>,
    pub respuesta_correcta: Option<i32>,
    pub nivel: Option<String>,
    #[serde(rename = "Tema")]
    pub tema: Option<String>,
}

fn validate_answer_index(request: &QuestionRequest) -> Result<(), ValidationError> {
    match (&request.opciones, request.respuesta_correcta) {
        (Some(opciones), Some(index)) if index < 0 || index as usize >= opciones.len() => {
            Err(ValidationError::new("respuesta_correcta_fuera_de_rango"))
        }
        _ => Ok(()),
    }
}

impl From<QuestionRequest> for QuestionPatch {
    fn from(request: QuestionRequest) -> Self {
        QuestionPatch {
            enunciado: request.enunciado,
            opciones: request.opciones,
            respuesta_correcta: request.respuesta_correcta,
            nivel: request.nivel,
            tema: request.tema,
        }
    }
}

/// Body of a practice-session save. Any `userId` sent by the client is
/// ignored; the session belongs to the authenticated caller.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SaveStatisticsRequest {
    pub correct_answers: Option<i64>,
    pub incorrect_answers: Option<i64>,
    pub total_time_practice: Option<f64>,
    pub average_score: Option<f64>,
    #[serde(default)]
    pub session_history: Vec<SessionRecord>,
    #[serde(default)]
    pub time_progress: Vec<TimeProgress>,
    #[serde(default)]
    pub achievements: Vec<Achievement>,
    #[serde(default)]
    pub theme_progress: Vec<ThemeProgress>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateStatisticsRequest {
    pub total_correct_answers: Option<i64>,
    pub total_incorrect_answers: Option<i64>,
    pub total_time_practice: Option<f64>,
    pub average_score: Option<f64>,
    pub session_history: Option<Vec<SessionRecord>>,
    pub time_progress: Option<Vec<TimeProgress>>,
    pub achievements: Option<Vec<Achievement>>,
    pub theme_progress: Option<Vec<ThemeProgress>>,
}

impl From<UpdateStatisticsRequest> for StatisticsPatch {
    fn from(request: UpdateStatisticsRequest) -> Self {
        StatisticsPatch {
            total_correct_answers: request.total_correct_answers,
            total_incorrect_answers: request.total_incorrect_answers,
            total_time_practice: request.total_time_practice,
            average_score: request.average_score,
            session_history: request.session_history,
            time_progress: request.time_progress,
            achievements: request.achievements,
            theme_progress: request.theme_progress,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateModuleRequest {
    #[validate(length(min = 1, max = 200))]
    pub nombre: String,

    #[validate(length(min = 1))]
    pub descripcion: String,

    #[validate(length(min = 1))]
    pub imagen: String,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateModuleRequest {
    #[validate(length(min = 1, max = 200))]
    pub nombre: Option<String>,

    #[validate(length(min = 1))]
    pub descripcion: Option<String>,

    #[validate(length(min = 1))]
    pub imagen: Option<String>,
}

impl From<UpdateModuleRequest> for ModulePatch {
    fn from(request: UpdateModuleRequest) -> Self {
        ModulePatch {
            nombre: request.nombre,
            descripcion: request.descripcion,
            imagen: request.imagen,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateSubmoduleRequest {
    #[validate(length(min = 1, max = 200))]
    pub nombre: String,

    #[validate(length(min = 1))]
    pub descripcion: String,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateSubmoduleRequest {
    #[validate(length(min = 1, max = 200))]
    pub nombre: Option<String>,

    #[validate(length(min = 1))]
    pub descripcion: Option<String>,
}

impl From<UpdateSubmoduleRequest> for SubmodulePatch {
    fn from(request: UpdateSubmoduleRequest) -> Self {
        SubmodulePatch {
            nombre: request.nombre,
            descripcion: request.descripcion,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct VideoRequest {
    pub title: Option<String>,
    pub description: Option<String>,

    #[validate(url)]
    pub url: Option<String>,
}

impl From<VideoRequest> for VideoPatch {
    fn from(request: VideoRequest) -> Self {
        VideoPatch {
            title: request.title,
            description: request.description,
            url: request.url,
        }
    }
}

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::models::domain::{
    statistics::{Achievement, SessionRecord, ThemeProgress, TimeProgress},
    Module, Question, Statistics, Submodule, User, Video,
};

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        MessageResponse {
            message: message.into(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub message: String,
    pub token: String,
}

/// Public view of an account: no password hash, role names instead of ids.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileDto {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nombre: Option<String>,
    pub email: String,
    pub roles: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl ProfileDto {
    pub fn new(user: User, mut role_names: Vec<String>) -> Self {
        role_names.sort();
        ProfileDto {
            id: user.id.to_hex(),
            nombre: user.nombre,
            email: user.email,
            roles: role_names,
            created_at: user.created_at,
            updated_at: user.updated_at,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ProfileResponse {
    pub message: String,
    pub user: ProfileDto,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestionDto {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enunciado: Option<String>,
    pub opciones: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub respuesta_correcta: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nivel: Option<String>,
    #[serde(rename = "Tema", skip_serializing_if = "Option::is_none")]
    pub tema: Option<String>,
}

impl From<Question> for QuestionDto {
    fn from(question: Question) -> Self {
        QuestionDto {
            id: question.id.to_hex(),
            enunciado: question.enunciado,
            opciones: question.opciones,
            respuesta_correcta: question.respuesta_correcta,
            nivel: question.nivel,
            tema: question.tema,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct QuestionUpdatedResponse {
    pub message: String,
    pub pregunta: QuestionDto,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatisticsDto {
    #[serde(rename = "_id")]
    pub id: String,
    pub user_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_correct_answers: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_incorrect_answers: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_time_practice: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub average_score: Option<f64>,
    pub session_history: Vec<SessionRecord>,
    pub time_progress: Vec<TimeProgress>,
    pub achievements: Vec<Achievement>,
    pub theme_progress: Vec<ThemeProgress>,
}

impl From<Statistics> for StatisticsDto {
    fn from(statistics: Statistics) -> Self {
        StatisticsDto {
            id: statistics.id.to_hex(),
            user_id: statistics.user_id.to_hex(),
            total_correct_answers: statistics.total_correct_answers,
            total_incorrect_answers: statistics.total_incorrect_answers,
            total_time_practice: statistics.total_time_practice,
            average_score: statistics.average_score,
            session_history: statistics.session_history,
            time_progress: statistics.time_progress,
            achievements: statistics.achievements,
            theme_progress: statistics.theme_progress,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct StatisticsUpdatedResponse {
    pub message: String,
    pub statistics: StatisticsDto,
}

#[derive(Debug, Clone, Serialize)]
pub struct ModuleDto {
    #[serde(rename = "_id")]
    pub id: String,
    pub nombre: String,
    pub descripcion: String,
    pub imagen: String,
    pub submodulos: Vec<String>,
}

impl From<Module> for ModuleDto {
    fn from(module: Module) -> Self {
        ModuleDto {
            id: module.id.to_hex(),
            nombre: module.nombre,
            descripcion: module.descripcion,
            imagen: module.imagen,
            submodulos: module.submodulos.iter().map(|id| id.to_hex()).collect(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct SubmoduleDto {
    #[serde(rename = "_id")]
    pub id: String,
    pub nombre: String,
    pub descripcion: String,
    pub videos: Vec<String>,
}

impl From<Submodule> for SubmoduleDto {
    fn from(submodule: Submodule) -> Self {
        SubmoduleDto {
            id: submodule.id.to_hex(),
            nombre: submodule.nombre,
            descripcion: submodule.descripcion,
            videos: submodule.videos.iter().map(|id| id.to_hex()).collect(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct VideoDto {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

impl From<Video> for VideoDto {
    fn from(video: Video) -> Self {
        VideoDto {
            id: video.id.to_hex(),
            title: video.title,
            description: video.description,
            url: video.url,
        }
    }
}

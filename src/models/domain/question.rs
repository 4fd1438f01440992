use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

/// Multiple-choice practice question.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Question {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enunciado: Option<String>,
    #[serde(default)]
    pub opciones: Vec<String>,
    /// Index of the correct entry in `opciones`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub respuesta_correcta: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nivel: Option<String>,
    #[serde(rename = "Tema", default, skip_serializing_if = "Option::is_none")]
    pub tema: Option<String>,
}

/// Fields supplied to a partial question update. `None` leaves a field untouched.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct QuestionPatch {
    pub enunciado: Option<String>,
    pub opciones: Option<Vec<String>>,
    pub respuesta_correcta: Option<i32>,
    pub nivel: Option<String>,
    pub tema: Option<String>,
}

impl QuestionPatch {
    pub fn apply(self, question: &mut Question) {
        if let Some(enunciado) = self.enunciado {
            question.enunciado = Some(enunciado);
        }
        if let Some(opciones) = self.opciones {
            question.opciones = opciones;
        }
        if let Some(respuesta) = self.respuesta_correcta {
            question.respuesta_correcta = Some(respuesta);
        }
        if let Some(nivel) = self.nivel {
            question.nivel = Some(nivel);
        }
        if let Some(tema) = self.tema {
            question.tema = Some(tema);
        }
    }
}

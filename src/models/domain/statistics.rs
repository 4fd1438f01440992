use chrono::{DateTime, Utc};
use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

/// Practice history of a single user.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Statistics {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    pub user_id: ObjectId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_correct_answers: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_incorrect_answers: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_time_practice: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
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

#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionRecord {
    #[serde(default = "Utc::now")]
    pub date: DateTime<Utc>,
    #[serde(default)]
    pub total_questions: Option<i64>,
    #[serde(default)]
    pub correct_answers: Option<i64>,
    #[serde(default)]
    pub incorrect_answers: Option<i64>,
    #[serde(default)]
    pub time_practice: Option<f64>,
    #[serde(default)]
    pub average_score: Option<f64>,
}

#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeProgress {
    #[serde(default)]
    pub interval_start: Option<DateTime<Utc>>,
    #[serde(default)]
    pub interval_end: Option<DateTime<Utc>>,
    #[serde(default)]
    pub correct_answers: Option<i64>,
    #[serde(default)]
    pub total_questions: Option<i64>,
}

#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Achievement {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub earned_at: Option<DateTime<Utc>>,
}

#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ThemeProgress {
    #[serde(default)]
    pub theme: Option<String>,
    #[serde(default)]
    pub correct_answers: Option<i64>,
    #[serde(default)]
    pub incorrect_answers: Option<i64>,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct StatisticsPatch {
    pub total_correct_answers: Option<i64>,
    pub total_incorrect_answers: Option<i64>,
    pub total_time_practice: Option<f64>,
    pub average_score: Option<f64>,
    pub session_history: Option<Vec<SessionRecord>>,
    pub time_progress: Option<Vec<TimeProgress>>,
    pub achievements: Option<Vec<Achievement>>,
    pub theme_progress: Option<Vec<ThemeProgress>>,
}

impl StatisticsPatch {
    pub fn apply(self, statistics: &mut Statistics) {
        if self.total_correct_answers.is_some() {
            statistics.total_correct_answers = self.total_correct_answers;
        }
        if self.total_incorrect_answers.is_some() {
            statistics.total_incorrect_answers = self.total_incorrect_answers;
        }
        if self.total_time_practice.is_some() {
            statistics.total_time_practice = self.total_time_practice;
        }
        if self.average_score.is_some() {
            statistics.average_score = self.average_score;
        }
        if let Some(history) = self.session_history {
            statistics.session_history = history;
        }
        if let Some(progress) = self.time_progress {
            statistics.time_progress = progress;
        }
        if let Some(achievements) = self.achievements {
            statistics.achievements = achievements;
        }
        if let Some(themes) = self.theme_progress {
            statistics.theme_progress = themes;
        }
    }
}

use std::sync::Arc;

use mongodb::bson::oid::ObjectId;

use crate::{
    errors::{AppError, AppResult},
    models::{
        domain::{statistics::StatisticsPatch, Statistics},
        dto::request::{SaveStatisticsRequest, UpdateStatisticsRequest},
    },
    repositories::StatisticsRepository,
    services::db_helpers::parse_object_id,
};

pub const STATISTICS_NOT_FOUND_MESSAGE: &str = "Estadísticas no encontradas";

pub struct StatisticsService {
    statistics: Arc<dyn StatisticsRepository>,
}

impl StatisticsService {
    pub fn new(statistics: Arc<dyn StatisticsRepository>) -> Self {
        Self { statistics }
    }

    /// Stores a practice session for `owner`, the authenticated caller.
    pub async fn save(&self, owner: &str, request: SaveStatisticsRequest) -> AppResult<Statistics> {
        let user_id = ObjectId::parse_str(owner).map_err(|_| AppError::unauthorized())?;

        let statistics = Statistics {
            id: ObjectId::new(),
            user_id,
            total_correct_answers: request.correct_answers,
            total_incorrect_answers: request.incorrect_answers,
            total_time_practice: request.total_time_practice,
            average_score: request.average_score,
            session_history: request.session_history,
            time_progress: request.time_progress,
            achievements: request.achievements,
            theme_progress: request.theme_progress,
        };

        let statistics = self.statistics.create(statistics).await?;
        log::debug!("Saved statistics {} for user {}", statistics.id, owner);
        Ok(statistics)
    }

    pub async fn list_for_user(&self, user_id: &str) -> AppResult<Vec<Statistics>> {
        let user_id = parse_object_id(user_id, STATISTICS_NOT_FOUND_MESSAGE)?;

        let statistics = self.statistics.find_by_user(&user_id).await?;
        if statistics.is_empty() {
            return Err(not_found());
        }
        Ok(statistics)
    }

    pub async fn update_for_user(
        &self,
        user_id: &str,
        request: UpdateStatisticsRequest,
    ) -> AppResult<Statistics> {
        let user_id = parse_object_id(user_id, STATISTICS_NOT_FOUND_MESSAGE)?;

        self.statistics
            .update_by_user(&user_id, StatisticsPatch::from(request))
            .await?
            .ok_or_else(not_found)
    }

    pub async fn delete_for_user(&self, user_id: &str) -> AppResult<()> {
        let user_id = parse_object_id(user_id, STATISTICS_NOT_FOUND_MESSAGE)?;

        match self.statistics.delete_by_user(&user_id).await? {
            Some(_) => Ok(()),
            None => Err(not_found()),
        }
    }
}

fn not_found() -> AppError {
    AppError::NotFound(STATISTICS_NOT_FOUND_MESSAGE.to_string())
}

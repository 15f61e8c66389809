use crate::domain::{
    preference::{
        entity::{Decision, SwipeAction},
        repository::PreferenceRepository,
    },
    shared::{errors::DomainError, ids::AccountId},
};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, SqlitePool};
use std::collections::{HashMap, HashSet};
use tracing::{debug, info, instrument};
use uuid::Uuid;

#[derive(FromRow)]
struct DecisionRow {
    user_id: Uuid,
    place_id: String,
    action: String,
    created_at: DateTime<Utc>,
}

impl TryFrom<DecisionRow> for Decision {
    type Error = DomainError;

    fn try_from(r: DecisionRow) -> Result<Self, Self::Error> {
        Ok(Decision {
            user_id: AccountId::from(r.user_id),
            place_id: r.place_id,
            action: parse_stored_action(&r.action)?,
            decided_at: r.created_at,
        })
    }
}

fn parse_stored_action(raw: &str) -> Result<SwipeAction, DomainError> {
    raw.parse().map_err(|_| {
        DomainError::InfrastructureError(format!("Stored decision has unknown action '{}'", raw))
    })
}

pub struct SqlxPreferenceRepository {
    pub pool: SqlitePool,
}

impl SqlxPreferenceRepository {
    pub fn new(pool: SqlitePool) -> Self {
        info!("Initializing SqlxPreferenceRepository with connection pool");
        Self { pool }
    }
}

#[async_trait]
impl PreferenceRepository for SqlxPreferenceRepository {
    #[instrument(skip(self, decision), fields(user_id = %decision.user_id, place_id = %decision.place_id, action = %decision.action))]
    async fn upsert(&self, decision: &Decision) -> Result<(), DomainError> {
        sqlx::query(
            "INSERT INTO decisions (user_id, place_id, action, created_at) VALUES (?, ?, ?, ?) \
             ON CONFLICT (user_id, place_id) DO UPDATE SET \
                action = excluded.action, \
                created_at = excluded.created_at",
        )
        .bind(decision.user_id.as_uuid())
        .bind(&decision.place_id)
        .bind(decision.action.as_str())
        .bind(decision.decided_at)
        .execute(&self.pool)
        .await
        .map_err(|e| DomainError::InfrastructureError(e.to_string()))?;
        debug!("Decision stored");
        Ok(())
    }

    #[instrument(skip(self), fields(user_id = %user_id))]
    async fn decisions_for_user(
        &self,
        user_id: AccountId,
    ) -> Result<HashMap<String, SwipeAction>, DomainError> {
        let rows = sqlx::query_as::<_, (String, String)>(
            "SELECT place_id, action FROM decisions WHERE user_id = ?",
        )
        .bind(user_id.as_uuid())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| DomainError::InfrastructureError(e.to_string()))?;

        rows.into_iter()
            .map(|(place_id, action)| Ok((place_id, parse_stored_action(&action)?)))
            .collect()
    }

    #[instrument(skip(self), fields(user_id = %user_id))]
    async fn liked_place_ids(&self, user_id: AccountId) -> Result<HashSet<String>, DomainError> {
        let ids = sqlx::query_scalar::<_, String>(
            "SELECT place_id FROM decisions WHERE user_id = ? AND action = 'like'",
        )
        .bind(user_id.as_uuid())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| DomainError::InfrastructureError(e.to_string()))?;
        Ok(ids.into_iter().collect())
    }

    #[instrument(skip(self), fields(user_id = %user_id))]
    async fn history_for_user(&self, user_id: AccountId) -> Result<Vec<Decision>, DomainError> {
        let rows = sqlx::query_as::<_, DecisionRow>(
            "SELECT user_id, place_id, action, created_at FROM decisions \
             WHERE user_id = ? \
             ORDER BY created_at DESC, place_id",
        )
        .bind(user_id.as_uuid())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| DomainError::InfrastructureError(e.to_string()))?;
        rows.into_iter().map(Decision::try_from).collect()
    }
}

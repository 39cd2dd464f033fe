use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Запрос на перенос анонимной статистики использования на учётную запись.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MigrateUsageRequest {
    pub anonymous_id: Uuid,
    pub user_id: String,
}

/// Одна запись использования, как её хранит бэкенд.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UsageRecord {
    pub id: Uuid,
    pub owner: UsageOwner,
    pub feature: String,
    pub used_at: DateTime<Utc>,
}

/// Владелец записи: анонимный посетитель или авторизованный пользователь.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum UsageOwner {
    Anonymous { anonymous_id: Uuid },
    User { user_id: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn migrate_request_serializes_both_ids() {
        let request = MigrateUsageRequest {
            anonymous_id: Uuid::nil(),
            user_id: "u1".to_string(),
        };
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(
            json["anonymous_id"],
            "00000000-0000-0000-0000-000000000000"
        );
        assert_eq!(json["user_id"], "u1");
    }

    #[test]
    fn usage_owner_is_tagged_by_kind() {
        let owner = UsageOwner::User {
            user_id: "u1".to_string(),
        };
        let json = serde_json::to_value(&owner).unwrap();
        assert_eq!(json["kind"], "user");
    }
}

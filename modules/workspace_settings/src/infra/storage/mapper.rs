//! Entity to model mappers
//!
//! Rows are decoded according to the key in their `name` column.

use super::entity;
use crate::domain::key::key_name_to_enum;
use crate::domain::stored::{StoredSettingValue, StoredWorkspaceSetting};
use anyhow::Context;

impl TryFrom<entity::Model> for StoredWorkspaceSetting {
    type Error = anyhow::Error;

    fn try_from(row: entity::Model) -> Result<Self, Self::Error> {
        let key = key_name_to_enum(&row.name)
            .with_context(|| format!("unknown workspace setting row '{}'", row.name))?;

        let value = row
            .payload
            .map(|json| StoredSettingValue::from_json(key, json))
            .transpose()
            .with_context(|| format!("failed to decode workspace setting {}", key))?;

        Ok(Self { key, value })
    }
}

/// Build an active model for insert-or-update; timestamps are set to `now`
pub fn to_active_model(
    setting: &StoredWorkspaceSetting,
    now: chrono::DateTime<chrono::Utc>,
) -> anyhow::Result<entity::ActiveModel> {
    use sea_orm::ActiveValue::Set;

    let payload = setting
        .value
        .as_ref()
        .map(StoredSettingValue::to_json)
        .transpose()
        .with_context(|| format!("failed to encode workspace setting {}", setting.key))?;

    Ok(entity::ActiveModel {
        name: Set(setting.key.as_str().to_string()),
        payload: Set(payload),
        created_at: Set(now),
        updated_at: Set(now),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::stored::MemoRelatedSetting;
    use crate::domain::SettingKey;
    use serde_json::json;

    fn row(name: &str, payload: Option<serde_json::Value>) -> entity::Model {
        entity::Model {
            name: name.to_string(),
            payload,
            created_at: chrono::Utc::now(),
            updated_at: chrono::Utc::now(),
        }
    }

    #[test]
    fn test_row_decodes_by_key() {
        let setting = StoredWorkspaceSetting::try_from(row(
            "MEMO_RELATED",
            Some(json!({"disallowPublicVisible": true})),
        ))
        .unwrap();

        assert_eq!(setting.key, SettingKey::MemoRelated);
        assert_eq!(
            setting.value,
            Some(StoredSettingValue::MemoRelated(MemoRelatedSetting {
                disallow_public_visible: true,
                display_with_update_time: false,
            }))
        );
    }

    #[test]
    fn test_null_payload_decodes_to_empty_value() {
        let setting = StoredWorkspaceSetting::try_from(row("GENERAL", None)).unwrap();
        assert_eq!(setting.value, None);
    }

    #[test]
    fn test_unknown_row_name_is_an_error() {
        assert!(StoredWorkspaceSetting::try_from(row("LEGACY_THING", None)).is_err());
    }
}

//! Mapper implementations for converting between DTOs and contract models

use super::dto::*;
use crate::contract::{self, SettingsError, WorkspaceSettingValue};

// ===== Setting conversions =====

impl From<contract::WorkspaceSetting> for WorkspaceSettingDto {
    fn from(setting: contract::WorkspaceSetting) -> Self {
        let mut dto = Self {
            name: setting.name,
            ..Self::default()
        };
        match setting.value {
            Some(WorkspaceSettingValue::GeneralSetting(general)) => {
                dto.general_setting = Some(general.into())
            }
            Some(WorkspaceSettingValue::StorageSetting(storage)) => {
                dto.storage_setting = Some(storage.into())
            }
            Some(WorkspaceSettingValue::MemoRelatedSetting(memo)) => {
                dto.memo_related_setting = Some(memo.into())
            }
            None => {}
        }
        dto
    }
}

impl TryFrom<WorkspaceSettingDto> for contract::WorkspaceSetting {
    type Error = SettingsError;

    fn try_from(dto: WorkspaceSettingDto) -> Result<Self, Self::Error> {
        let value = match (dto.general_setting, dto.storage_setting, dto.memo_related_setting) {
            (None, None, None) => None,
            (Some(general), None, None) => {
                Some(WorkspaceSettingValue::GeneralSetting(general.into()))
            }
            (None, Some(storage), None) => {
                Some(WorkspaceSettingValue::StorageSetting(storage.into()))
            }
            (None, None, Some(memo)) => Some(WorkspaceSettingValue::MemoRelatedSetting(memo.into())),
            _ => {
                return Err(SettingsError::invalid_argument(
                    "at most one of generalSetting, storageSetting, memoRelatedSetting may be set",
                ))
            }
        };

        Ok(Self {
            name: dto.name,
            value,
        })
    }
}

// ===== Payload conversions =====

impl From<contract::WorkspaceGeneralSetting> for GeneralSettingDto {
    fn from(setting: contract::WorkspaceGeneralSetting) -> Self {
        Self {
            instance_url: setting.instance_url,
            disallow_signup: setting.disallow_signup,
            disallow_password_login: setting.disallow_password_login,
            additional_script: setting.additional_script,
            additional_style: setting.additional_style,
            custom_profile: setting.custom_profile.map(Into::into),
        }
    }
}

impl From<GeneralSettingDto> for contract::WorkspaceGeneralSetting {
    fn from(dto: GeneralSettingDto) -> Self {
        Self {
            instance_url: dto.instance_url,
            disallow_signup: dto.disallow_signup,
            disallow_password_login: dto.disallow_password_login,
            additional_script: dto.additional_script,
            additional_style: dto.additional_style,
            custom_profile: dto.custom_profile.map(Into::into),
        }
    }
}

impl From<contract::WorkspaceCustomProfile> for CustomProfileDto {
    fn from(profile: contract::WorkspaceCustomProfile) -> Self {
        Self {
            title: profile.title,
            description: profile.description,
            logo_url: profile.logo_url,
            locale: profile.locale,
            appearance: profile.appearance,
        }
    }
}

impl From<CustomProfileDto> for contract::WorkspaceCustomProfile {
    fn from(dto: CustomProfileDto) -> Self {
        Self {
            title: dto.title,
            description: dto.description,
            logo_url: dto.logo_url,
            locale: dto.locale,
            appearance: dto.appearance,
        }
    }
}

impl From<contract::StorageType> for StorageTypeDto {
    fn from(storage_type: contract::StorageType) -> Self {
        match storage_type {
            contract::StorageType::Unspecified => StorageTypeDto::Unspecified,
            contract::StorageType::Database => StorageTypeDto::Database,
            contract::StorageType::Local => StorageTypeDto::Local,
            contract::StorageType::S3 => StorageTypeDto::S3,
        }
    }
}

impl From<StorageTypeDto> for contract::StorageType {
    fn from(dto: StorageTypeDto) -> Self {
        match dto {
            StorageTypeDto::Unspecified => contract::StorageType::Unspecified,
            StorageTypeDto::Database => contract::StorageType::Database,
            StorageTypeDto::Local => contract::StorageType::Local,
            StorageTypeDto::S3 => contract::StorageType::S3,
        }
    }
}

impl From<contract::WorkspaceStorageSetting> for StorageSettingDto {
    fn from(setting: contract::WorkspaceStorageSetting) -> Self {
        Self {
            storage_type: setting.storage_type.into(),
            local_storage_path_template: setting.local_storage_path_template,
            upload_size_limit_mb: setting.upload_size_limit_mb,
            active_external_storage_id: setting.active_external_storage_id,
        }
    }
}

impl From<StorageSettingDto> for contract::WorkspaceStorageSetting {
    fn from(dto: StorageSettingDto) -> Self {
        Self {
            storage_type: dto.storage_type.into(),
            local_storage_path_template: dto.local_storage_path_template,
            upload_size_limit_mb: dto.upload_size_limit_mb,
            active_external_storage_id: dto.active_external_storage_id,
        }
    }
}

impl From<contract::WorkspaceMemoRelatedSetting> for MemoRelatedSettingDto {
    fn from(setting: contract::WorkspaceMemoRelatedSetting) -> Self {
        Self {
            disallow_public_visible: setting.disallow_public_visible,
            display_with_update_time: setting.display_with_update_time,
        }
    }
}

impl From<MemoRelatedSettingDto> for contract::WorkspaceMemoRelatedSetting {
    fn from(dto: MemoRelatedSettingDto) -> Self {
        Self {
            disallow_public_visible: dto.disallow_public_visible,
            display_with_update_time: dto.display_with_update_time,
        }
    }
}

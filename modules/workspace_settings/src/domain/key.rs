//! Setting key registry
//!
//! Keys are addressed externally by resource names of the form
//! `settings/<KEY>`. The string form of a key is case-sensitive and maps
//! one-to-one onto [`SettingKey`].

use crate::contract::SettingsError;
use std::fmt;

/// Prefix shared by every workspace setting resource name
pub const RESOURCE_NAME_PREFIX: &str = "settings/";

/// Identifier of a setting category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SettingKey {
    /// Internal instance bootstrap data; never listed
    Basic,
    General,
    Storage,
    MemoRelated,
}

impl SettingKey {
    pub const ALL: [SettingKey; 4] = [
        SettingKey::Basic,
        SettingKey::General,
        SettingKey::Storage,
        SettingKey::MemoRelated,
    ];

    /// Canonical string form, also used as the store's lookup name
    pub const fn as_str(self) -> &'static str {
        match self {
            SettingKey::Basic => "BASIC",
            SettingKey::General => "GENERAL",
            SettingKey::Storage => "STORAGE",
            SettingKey::MemoRelated => "MEMO_RELATED",
        }
    }

    /// Whether the key may appear in List responses
    pub const fn is_listed(self) -> bool {
        !matches!(self, SettingKey::Basic)
    }

    /// Resource name for this key, e.g. `settings/GENERAL`
    pub fn resource_name(self) -> String {
        format!("{}{}", RESOURCE_NAME_PREFIX, self.as_str())
    }
}

impl fmt::Display for SettingKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Resolve an external key name to a [`SettingKey`]
pub fn key_name_to_enum(name: &str) -> Result<SettingKey, SettingsError> {
    SettingKey::ALL
        .into_iter()
        .find(|key| key.as_str() == name)
        .ok_or_else(|| {
            SettingsError::invalid_argument(format!("unknown workspace setting key '{}'", name))
        })
}

/// Strip the `settings/` prefix from a resource name, returning the raw key
pub fn extract_key_from_resource_name(resource_name: &str) -> Result<&str, SettingsError> {
    let key = resource_name.strip_prefix(RESOURCE_NAME_PREFIX).ok_or_else(|| {
        SettingsError::invalid_argument(format!(
            "invalid workspace setting name '{}': expected prefix '{}'",
            resource_name, RESOURCE_NAME_PREFIX
        ))
    })?;

    if key.is_empty() || key.contains('/') {
        return Err(SettingsError::invalid_argument(format!(
            "invalid workspace setting name '{}'",
            resource_name
        )));
    }

    Ok(key)
}

/// Parse a full resource name into its key
pub fn parse_resource_name(resource_name: &str) -> Result<SettingKey, SettingsError> {
    extract_key_from_resource_name(resource_name).and_then(key_name_to_enum)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_names_are_a_bijection() {
        for key in SettingKey::ALL {
            assert_eq!(key_name_to_enum(key.as_str()), Ok(key));
        }
    }

    #[test]
    fn test_key_lookup_is_case_sensitive() {
        assert!(matches!(
            key_name_to_enum("general"),
            Err(SettingsError::InvalidArgument { .. })
        ));
        assert!(key_name_to_enum("NOT_A_KEY").is_err());
        assert!(key_name_to_enum("").is_err());
    }

    #[test]
    fn test_extract_key_from_resource_name() {
        assert_eq!(extract_key_from_resource_name("settings/GENERAL"), Ok("GENERAL"));
        assert_eq!(
            extract_key_from_resource_name("settings/NOT_A_KEY"),
            Ok("NOT_A_KEY")
        );
    }

    #[test]
    fn test_extract_rejects_malformed_names() {
        for name in ["GENERAL", "setting/GENERAL", "settings/", "settings/GENERAL/x", ""] {
            assert!(
                matches!(
                    extract_key_from_resource_name(name),
                    Err(SettingsError::InvalidArgument { .. })
                ),
                "{name} should be rejected"
            );
        }
    }

    #[test]
    fn test_resource_name_round_trip() {
        for key in SettingKey::ALL {
            assert_eq!(parse_resource_name(&key.resource_name()), Ok(key));
        }
        assert_eq!(SettingKey::MemoRelated.resource_name(), "settings/MEMO_RELATED");
    }

    #[test]
    fn test_only_basic_is_hidden() {
        let hidden: Vec<_> = SettingKey::ALL.into_iter().filter(|k| !k.is_listed()).collect();
        assert_eq!(hidden, vec![SettingKey::Basic]);
    }
}

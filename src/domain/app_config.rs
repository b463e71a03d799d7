//! Branding configuration (singleton).

use serde::{Deserialize, Deserializer, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::config::DEFAULT_APP_NAME;

/// Logo and app name shown on the login screen
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AppConfig {
    /// Image as a data URL / base64 text
    pub logo: Option<String>,
    #[schema(example = "Welcome Back")]
    pub app_name: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            logo: None,
            app_name: DEFAULT_APP_NAME.to_string(),
        }
    }
}

/// Partial branding update. Absent fields keep their stored value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AppConfigChanges {
    /// `None`: keep, `Some(None)`: remove the logo, `Some(Some(_))`: replace
    #[serde(default, deserialize_with = "present")]
    #[schema(value_type = Option<String>, nullable)]
    pub logo: Option<Option<String>>,
    #[validate(length(min = 1, message = "App name cannot be empty"))]
    pub app_name: Option<String>,
}

/// Tells an explicit `null` apart from a missing key
fn present<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

impl AppConfigChanges {
    pub fn is_empty(&self) -> bool {
        self.logo.is_none() && self.app_name.is_none()
    }

    /// Apply the supplied fields on top of `current`
    pub fn apply(self, current: AppConfig) -> AppConfig {
        AppConfig {
            logo: self.logo.unwrap_or(current.logo),
            app_name: self.app_name.unwrap_or(current.app_name),
        }
    }
}

//! Requested appearance settings.

use serde::{Deserialize, Serialize};

/// Which dark appearance is used when dark mode is on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DarkStyle {
    /// Dark grey backgrounds.
    #[default]
    Dark,
    /// Pure black backgrounds.
    Black,
}

/// How notifications are themed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NotificationStyle {
    /// Follow the system appearance.
    #[default]
    FollowSystem,
    Light,
    Dark,
    Black,
}

/// Error returned when a raw setting value has no meaning.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SettingsError {
    #[error("unknown dark style {0} (expected 0 or 1)")]
    UnknownDarkStyle(i32),
    #[error("unknown notification style {0} (expected 0 to 3)")]
    UnknownNotificationStyle(i32),
}

impl TryFrom<i32> for DarkStyle {
    type Error = SettingsError;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(DarkStyle::Dark),
            1 => Ok(DarkStyle::Black),
            other => Err(SettingsError::UnknownDarkStyle(other)),
        }
    }
}

impl TryFrom<i32> for NotificationStyle {
    type Error = SettingsError;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(NotificationStyle::FollowSystem),
            1 => Ok(NotificationStyle::Light),
            2 => Ok(NotificationStyle::Dark),
            3 => Ok(NotificationStyle::Black),
            other => Err(SettingsError::UnknownNotificationStyle(other)),
        }
    }
}

/// A full snapshot of what the user asked for.
///
/// Applied as a whole by [`ThemeCoordinator::apply`](crate::ThemeCoordinator::apply).
///
/// # Example
///
/// ```rust
/// use theme_overlays::{AppearanceSettings, DarkStyle, NotificationStyle};
///
/// let settings: AppearanceSettings = serde_yaml::from_str(r#"
/// use_dark_theme: true
/// dark_style: black
/// notification_style: follow_system
/// accent: 6
/// "#).unwrap();
///
/// assert_eq!(settings.dark_style, DarkStyle::Black);
/// assert_eq!(settings.notification_style, NotificationStyle::FollowSystem);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AppearanceSettings {
    pub use_dark_theme: bool,
    pub dark_style: DarkStyle,
    pub notification_style: NotificationStyle,
    /// Accent index; 0 means no accent.
    pub accent: i32,
}

impl AppearanceSettings {
    /// Builds settings from the raw integer encoding used by settings stores.
    pub fn from_raw(
        use_dark_theme: bool,
        dark_style: i32,
        notification_style: i32,
        accent: i32,
    ) -> Result<Self, SettingsError> {
        Ok(Self {
            use_dark_theme,
            dark_style: DarkStyle::try_from(dark_style)?,
            notification_style: NotificationStyle::try_from(notification_style)?,
            accent,
        })
    }
}

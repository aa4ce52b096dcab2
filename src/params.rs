//! Query-parameter model for the wallpaper endpoint.
//!
//! Every parameter is optional and resolves to a documented default when
//! absent, unrecognized, or unparsable. Resolution never fails: the raw query
//! deserializes all fields as plain strings so a malformed number degrades to
//! its default instead of rejecting the request.

use serde::Deserialize;

use crate::catalog::{self, DeviceProfile, Locale, Theme};

/// Default timezone offset in fractional hours east of UTC.
pub const DEFAULT_TZ_HOURS: f64 = 2.0;

/// Raw query string fields as sent by the client.
#[derive(Debug, Default, Clone, Deserialize)]
pub struct WallpaperQuery {
    pub model: Option<String>,
    pub style: Option<String>,
    pub calendar_size: Option<String>,
    pub weekend_mode: Option<String>,
    pub opacity: Option<String>,
    pub theme: Option<String>,
    pub lang: Option<String>,
    pub timezone: Option<String>,
    pub footer: Option<String>,
}

/// How each calendar cell is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Style {
    #[default]
    Dots,
    DotsMini,
    Numbers,
    NumbersBold,
    Squares,
    SquaresRounded,
    Lines,
    Bars,
}

impl Style {
    fn resolve(value: Option<&str>) -> Self {
        match value {
            Some("dots") => Style::Dots,
            Some("dots_mini") => Style::DotsMini,
            Some("numbers") => Style::Numbers,
            Some("numbers_bold") => Style::NumbersBold,
            Some("squares") => Style::Squares,
            Some("squares_rounded") => Style::SquaresRounded,
            Some("lines") => Style::Lines,
            Some("bars") => Style::Bars,
            _ => Style::default(),
        }
    }
}

/// Overall cell-size multiplier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CalendarSize {
    Small,
    #[default]
    Standard,
    Large,
}

impl CalendarSize {
    fn resolve(value: Option<&str>) -> Self {
        match value {
            Some("small") => CalendarSize::Small,
            Some("standard") => CalendarSize::Standard,
            Some("large") => CalendarSize::Large,
            _ => CalendarSize::default(),
        }
    }

    pub fn scale(self) -> f64 {
        match self {
            CalendarSize::Small => 0.75,
            CalendarSize::Standard => 1.0,
            CalendarSize::Large => 1.3,
        }
    }
}

/// Whether weekend days get distinguished coloring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WeekendMode {
    None,
    #[default]
    WeekendsOnly,
    All,
}

impl WeekendMode {
    fn resolve(value: Option<&str>) -> Self {
        match value {
            Some("none") => WeekendMode::None,
            Some("weekends_only") => WeekendMode::WeekendsOnly,
            Some("all") => WeekendMode::All,
            _ => WeekendMode::default(),
        }
    }
}

/// Which summary line is drawn below the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FooterKind {
    None,
    DaysLeft,
    DaysPassed,
    PercentLeft,
    PercentPassed,
    #[default]
    DaysLeftPercentLeft,
}

impl FooterKind {
    fn resolve(value: Option<&str>) -> Self {
        match value {
            Some("none") => FooterKind::None,
            Some("days_left") => FooterKind::DaysLeft,
            Some("days_passed") => FooterKind::DaysPassed,
            Some("percent_left") => FooterKind::PercentLeft,
            Some("percent_passed") => FooterKind::PercentPassed,
            Some("days_left_percent_left") => FooterKind::DaysLeftPercentLeft,
            _ => FooterKind::default(),
        }
    }
}

/// Fully resolved render configuration. Construction cannot fail.
#[derive(Debug, Clone)]
pub struct WallpaperConfig {
    pub device: DeviceProfile,
    pub theme: Theme,
    pub locale: Locale,
    pub style: Style,
    pub size: CalendarSize,
    pub weekend_mode: WeekendMode,
    pub footer: FooterKind,
    /// Background opacity override, 0 means "use the theme background".
    pub opacity: u8,
    /// Fractional-hour offset east of UTC.
    pub tz_hours: f64,
}

impl WallpaperConfig {
    pub fn from_query(query: &WallpaperQuery) -> Self {
        let opacity = query
            .opacity
            .as_deref()
            .and_then(|s| s.trim().parse::<i64>().ok())
            .unwrap_or(0)
            .clamp(0, 100) as u8;

        let tz_hours = query
            .timezone
            .as_deref()
            .and_then(|s| s.trim().parse::<f64>().ok())
            .filter(|v| v.is_finite())
            .unwrap_or(DEFAULT_TZ_HOURS);

        Self {
            device: catalog::resolve_device(query.model.as_deref().unwrap_or("")),
            theme: catalog::resolve_theme(query.theme.as_deref().unwrap_or("")),
            locale: catalog::resolve_locale(query.lang.as_deref().unwrap_or("")),
            style: Style::resolve(query.style.as_deref()),
            size: CalendarSize::resolve(query.calendar_size.as_deref()),
            weekend_mode: WeekendMode::resolve(query.weekend_mode.as_deref()),
            footer: FooterKind::resolve(query.footer.as_deref()),
            opacity,
            tz_hours,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_query_uses_documented_defaults() {
        let config = WallpaperConfig::from_query(&WallpaperQuery::default());
        assert_eq!(config.device.name, "iphone_15_pro");
        assert_eq!(config.theme.name, "graphite_orange");
        assert_eq!(config.locale.lang, "uk");
        assert_eq!(config.style, Style::Dots);
        assert_eq!(config.size, CalendarSize::Standard);
        assert_eq!(config.weekend_mode, WeekendMode::WeekendsOnly);
        assert_eq!(config.footer, FooterKind::DaysLeftPercentLeft);
        assert_eq!(config.opacity, 0);
        assert_eq!(config.tz_hours, 2.0);
    }

    #[test]
    fn test_unknown_keys_fall_back_instead_of_failing() {
        let query = WallpaperQuery {
            model: Some("bogus".into()),
            style: Some("spirals".into()),
            calendar_size: Some("huge".into()),
            weekend_mode: Some("sometimes".into()),
            theme: Some("bogus".into()),
            lang: Some("xx".into()),
            footer: Some("everything".into()),
            ..Default::default()
        };
        let config = WallpaperConfig::from_query(&query);
        assert_eq!(config.device.name, "iphone_15_pro");
        assert_eq!(config.theme.name, "graphite_orange");
        assert_eq!(config.locale.lang, "uk");
        assert_eq!(config.style, Style::Dots);
        assert_eq!(config.size, CalendarSize::Standard);
        assert_eq!(config.weekend_mode, WeekendMode::WeekendsOnly);
        assert_eq!(config.footer, FooterKind::DaysLeftPercentLeft);
    }

    #[test]
    fn test_invalid_numerics_fall_back() {
        let query = WallpaperQuery {
            opacity: Some("not-a-number".into()),
            timezone: Some("whenever".into()),
            ..Default::default()
        };
        let config = WallpaperConfig::from_query(&query);
        assert_eq!(config.opacity, 0);
        assert_eq!(config.tz_hours, DEFAULT_TZ_HOURS);
    }

    #[test]
    fn test_non_finite_timezone_falls_back() {
        let query = WallpaperQuery {
            timezone: Some("NaN".into()),
            ..Default::default()
        };
        let config = WallpaperConfig::from_query(&query);
        assert_eq!(config.tz_hours, DEFAULT_TZ_HOURS);
    }

    #[test]
    fn test_opacity_clamped_to_percent_range() {
        let query = WallpaperQuery {
            opacity: Some("250".into()),
            ..Default::default()
        };
        assert_eq!(WallpaperConfig::from_query(&query).opacity, 100);

        let query = WallpaperQuery {
            opacity: Some("-5".into()),
            ..Default::default()
        };
        assert_eq!(WallpaperConfig::from_query(&query).opacity, 0);
    }

    #[test]
    fn test_valid_parameters_resolve() {
        let query = WallpaperQuery {
            model: Some("iphone_se".into()),
            style: Some("squares_rounded".into()),
            calendar_size: Some("large".into()),
            weekend_mode: Some("all".into()),
            opacity: Some("50".into()),
            theme: Some("pure_white".into()),
            lang: Some("en".into()),
            timezone: Some("-4.5".into()),
            footer: Some("percent_left".into()),
        };
        let config = WallpaperConfig::from_query(&query);
        assert_eq!(config.device.name, "iphone_se");
        assert_eq!(config.style, Style::SquaresRounded);
        assert_eq!(config.size, CalendarSize::Large);
        assert_eq!(config.weekend_mode, WeekendMode::All);
        assert_eq!(config.opacity, 50);
        assert_eq!(config.theme.name, "pure_white");
        assert_eq!(config.locale.lang, "en");
        assert_eq!(config.tz_hours, -4.5);
        assert_eq!(config.footer, FooterKind::PercentLeft);
    }
}

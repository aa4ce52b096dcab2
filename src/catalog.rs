//! Static lookup catalogs: device profiles, color themes, and locale tables.
//!
//! Unknown keys are expected input, not a fault: every resolver falls back to
//! its default entry instead of returning an error.

/// A target screen, selected by device model name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeviceProfile {
    pub name: &'static str,
    pub width: u32,
    pub height: u32,
}

/// A five-color palette: background, past, today, future, text.
///
/// Colors are CSS hex strings; the past color carries a `99` alpha suffix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    pub name: &'static str,
    pub bg: &'static str,
    pub past: &'static str,
    pub today: &'static str,
    pub future: &'static str,
    pub text: &'static str,
}

/// Month and weekday abbreviations for one language.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Locale {
    pub lang: &'static str,
    pub months: [&'static str; 12],
    pub weekdays: [&'static str; 7],
}

const DEVICE_FALLBACK: DeviceProfile = DeviceProfile {
    name: "iphone_15_pro",
    width: 1179,
    height: 2556,
};

const DEVICES: &[DeviceProfile] = &[
    DeviceProfile { name: "iphone_16_pro", width: 1206, height: 2622 },
    DeviceProfile { name: "iphone_16", width: 1179, height: 2556 },
    DEVICE_FALLBACK,
    DeviceProfile { name: "iphone_15", width: 1179, height: 2556 },
    DeviceProfile { name: "iphone_14_pro", width: 1179, height: 2556 },
    DeviceProfile { name: "iphone_14", width: 1170, height: 2532 },
    DeviceProfile { name: "iphone_13_pro", width: 1170, height: 2532 },
    DeviceProfile { name: "iphone_13", width: 1170, height: 2532 },
    DeviceProfile { name: "iphone_se", width: 750, height: 1334 },
];

const THEME_FALLBACK: Theme = Theme {
    name: "graphite_orange",
    bg: "#111111",
    past: "#ff8c4299",
    today: "#ff8c42",
    future: "#2a2a2a",
    text: "#ffffff",
};

const THEMES: &[Theme] = &[
    THEME_FALLBACK,
    Theme {
        name: "graphite_yellow",
        bg: "#111111",
        past: "#e8ff4799",
        today: "#e8ff47",
        future: "#2a2a2a",
        text: "#ffffff",
    },
    Theme {
        name: "graphite_green",
        bg: "#111111",
        past: "#4fffb099",
        today: "#4fffb0",
        future: "#2a2a2a",
        text: "#ffffff",
    },
    Theme {
        name: "graphite_blue",
        bg: "#111111",
        past: "#47b8ff99",
        today: "#47b8ff",
        future: "#2a2a2a",
        text: "#ffffff",
    },
    Theme {
        name: "graphite_red",
        bg: "#111111",
        past: "#ff474799",
        today: "#ff4747",
        future: "#2a2a2a",
        text: "#ffffff",
    },
    Theme {
        name: "graphite_pink",
        bg: "#111111",
        past: "#ff47c899",
        today: "#ff47c8",
        future: "#2a2a2a",
        text: "#ffffff",
    },
    Theme {
        name: "white_orange",
        bg: "#f5f5f5",
        past: "#ff8c4299",
        today: "#ff8c42",
        future: "#e0e0e0",
        text: "#111111",
    },
    Theme {
        name: "white_yellow",
        bg: "#f5f5f5",
        past: "#c8a80099",
        today: "#c8a800",
        future: "#e0e0e0",
        text: "#111111",
    },
    Theme {
        name: "white_blue",
        bg: "#f5f5f5",
        past: "#3b82f699",
        today: "#3b82f6",
        future: "#e0e0e0",
        text: "#111111",
    },
    Theme {
        name: "white_green",
        bg: "#f5f5f5",
        past: "#22c55e99",
        today: "#22c55e",
        future: "#e0e0e0",
        text: "#111111",
    },
    Theme {
        name: "black_white",
        bg: "#000000",
        past: "#ffffff99",
        today: "#ffffff",
        future: "#333333",
        text: "#ffffff",
    },
    Theme {
        name: "pure_white",
        bg: "#ffffff",
        past: "#88888899",
        today: "#333333",
        future: "#eeeeee",
        text: "#111111",
    },
];

const LOCALE_FALLBACK: Locale = Locale {
    lang: "uk",
    months: [
        "Січ", "Лют", "Бер", "Кві", "Тра", "Чер", "Лип", "Сер", "Вер", "Жов", "Лис", "Гру",
    ],
    weekdays: ["Пн", "Вт", "Ср", "Чт", "Пт", "Сб", "Нд"],
};

const LOCALES: &[Locale] = &[
    LOCALE_FALLBACK,
    Locale {
        lang: "ru",
        months: [
            "Янв", "Фев", "Мар", "Апр", "Май", "Июн", "Июл", "Авг", "Сен", "Окт", "Ноя", "Дек",
        ],
        weekdays: ["Пн", "Вт", "Ср", "Чт", "Пт", "Сб", "Вс"],
    },
    Locale {
        lang: "en",
        months: [
            "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
        ],
        weekdays: ["Mo", "Tu", "We", "Th", "Fr", "Sa", "Su"],
    },
    Locale {
        lang: "pl",
        months: [
            "Sty", "Lut", "Mar", "Kwi", "Maj", "Cze", "Lip", "Sie", "Wrz", "Paź", "Lis", "Gru",
        ],
        weekdays: ["Pn", "Wt", "Śr", "Cz", "Pt", "So", "Nd"],
    },
    Locale {
        lang: "de",
        months: [
            "Jan", "Feb", "Mär", "Apr", "Mai", "Jun", "Jul", "Aug", "Sep", "Okt", "Nov", "Dez",
        ],
        weekdays: ["Mo", "Di", "Mi", "Do", "Fr", "Sa", "So"],
    },
];

/// Look up a device profile by model name, falling back to iphone_15_pro.
pub fn resolve_device(model: &str) -> DeviceProfile {
    DEVICES
        .iter()
        .copied()
        .find(|d| d.name == model)
        .unwrap_or(DEVICE_FALLBACK)
}

/// Look up a theme by name, falling back to graphite_orange.
pub fn resolve_theme(name: &str) -> Theme {
    THEMES
        .iter()
        .copied()
        .find(|t| t.name == name)
        .unwrap_or(THEME_FALLBACK)
}

/// Look up locale tables by language code, falling back to uk.
pub fn resolve_locale(lang: &str) -> Locale {
    LOCALES
        .iter()
        .copied()
        .find(|l| l.lang == lang)
        .unwrap_or(LOCALE_FALLBACK)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_model_falls_back_to_default() {
        let device = resolve_device("bogus");
        assert_eq!(device.name, "iphone_15_pro");
        assert_eq!((device.width, device.height), (1179, 2556));
    }

    #[test]
    fn test_known_devices_resolve() {
        let se = resolve_device("iphone_se");
        assert_eq!((se.width, se.height), (750, 1334));

        let pro16 = resolve_device("iphone_16_pro");
        assert_eq!((pro16.width, pro16.height), (1206, 2622));
    }

    #[test]
    fn test_unknown_theme_falls_back_to_graphite_orange() {
        let theme = resolve_theme("bogus");
        assert_eq!(theme.name, "graphite_orange");
        assert_eq!(theme.bg, "#111111");
        assert_eq!(theme.today, "#ff8c42");
    }

    #[test]
    fn test_theme_catalog_has_twelve_entries() {
        assert_eq!(THEMES.len(), 12);
    }

    #[test]
    fn test_pure_white_palette() {
        let theme = resolve_theme("pure_white");
        assert_eq!(theme.bg, "#ffffff");
        assert_eq!(theme.text, "#111111");
    }

    #[test]
    fn test_unknown_lang_falls_back_to_uk() {
        let locale = resolve_locale("fr");
        assert_eq!(locale.lang, "uk");
        assert_eq!(locale.months[0], "Січ");
    }

    #[test]
    fn test_english_locale() {
        let locale = resolve_locale("en");
        assert_eq!(locale.months[11], "Dec");
        assert_eq!(locale.weekdays[5], "Sa");
    }
}

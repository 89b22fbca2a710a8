//! WMO weather code catalog
//!
//! Maps the integer weather codes reported by `OpenMeteo` to an icon/label
//! pair for display. See <https://open-meteo.com/en/docs#weathervariables>.

/// Icon and label for one weather code
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WeatherMeta {
    pub icon: &'static str,
    pub label: &'static str,
}

const fn meta(icon: &'static str, label: &'static str) -> WeatherMeta {
    WeatherMeta { icon, label }
}

/// Fallback pair for codes not in the catalog
pub const UNKNOWN: WeatherMeta = meta("🌈", "Unknown");

/// Describe a WMO weather code as an icon/label pair
///
/// Total function: unknown codes return [`UNKNOWN`] rather than failing.
#[must_use]
pub fn describe(code: u16) -> WeatherMeta {
    match code {
        0 => meta("☀️", "Clear sky"),
        1 => meta("🌤️", "Mainly clear"),
        2 => meta("⛅", "Partly cloudy"),
        3 => meta("☁️", "Overcast"),
        45 => meta("🌫️", "Fog"),
        48 => meta("🌫️", "Rime fog"),
        51 => meta("🌦️", "Light drizzle"),
        53 => meta("🌦️", "Moderate drizzle"),
        55 => meta("🌧️", "Dense drizzle"),
        61 => meta("🌧️", "Light rain"),
        63 => meta("🌧️", "Moderate rain"),
        65 => meta("🌧️", "Heavy rain"),
        71 => meta("🌨️", "Light snow"),
        73 => meta("🌨️", "Moderate snow"),
        75 => meta("❄️", "Heavy snow"),
        80 => meta("🌦️", "Rain showers"),
        81 => meta("🌧️", "Moderate showers"),
        82 => meta("⛈️", "Heavy showers"),
        95 => meta("⛈️", "Thunderstorm"),
        96 => meta("⛈️", "Thunderstorm + hail"),
        99 => meta("⛈️", "Severe thunderstorm"),
        _ => UNKNOWN,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(0, "☀️", "Clear sky")]
    #[case(1, "🌤️", "Mainly clear")]
    #[case(2, "⛅", "Partly cloudy")]
    #[case(3, "☁️", "Overcast")]
    #[case(45, "🌫️", "Fog")]
    #[case(48, "🌫️", "Rime fog")]
    #[case(51, "🌦️", "Light drizzle")]
    #[case(53, "🌦️", "Moderate drizzle")]
    #[case(55, "🌧️", "Dense drizzle")]
    #[case(61, "🌧️", "Light rain")]
    #[case(63, "🌧️", "Moderate rain")]
    #[case(65, "🌧️", "Heavy rain")]
    #[case(71, "🌨️", "Light snow")]
    #[case(73, "🌨️", "Moderate snow")]
    #[case(75, "❄️", "Heavy snow")]
    #[case(80, "🌦️", "Rain showers")]
    #[case(81, "🌧️", "Moderate showers")]
    #[case(82, "⛈️", "Heavy showers")]
    #[case(95, "⛈️", "Thunderstorm")]
    #[case(96, "⛈️", "Thunderstorm + hail")]
    #[case(99, "⛈️", "Severe thunderstorm")]
    fn known_codes(#[case] code: u16, #[case] icon: &str, #[case] label: &str) {
        let described = describe(code);
        assert_eq!(described.icon, icon);
        assert_eq!(described.label, label);
    }

    #[rstest]
    #[case(4)]
    #[case(42)]
    #[case(100)]
    #[case(999)]
    #[case(u16::MAX)]
    fn unknown_codes_fall_back(#[case] code: u16) {
        assert_eq!(describe(code), UNKNOWN);
    }
}

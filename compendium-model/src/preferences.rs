//! Presentation preference values.
//!
//! Each enum knows its stored string form so a preference store can
//! validate whatever it reads back and fall back to the default.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CardDensity {
    Compact,
    #[default]
    Comfortable,
}

impl CardDensity {
    pub fn all() -> &'static [CardDensity] {
        &[CardDensity::Compact, CardDensity::Comfortable]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            CardDensity::Compact => "compact",
            CardDensity::Comfortable => "comfortable",
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        Self::all().iter().copied().find(|value| value.as_str() == raw)
    }
}

impl fmt::Display for CardDensity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ListViewMode {
    #[default]
    Cards,
    Table,
}

impl ListViewMode {
    pub fn all() -> &'static [ListViewMode] {
        &[ListViewMode::Cards, ListViewMode::Table]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ListViewMode::Cards => "cards",
            ListViewMode::Table => "table",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ListViewMode::Cards => "Cards",
            ListViewMode::Table => "Table",
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        Self::all().iter().copied().find(|value| value.as_str() == raw)
    }
}

impl fmt::Display for ListViewMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResolvedTheme {
    Light,
    Dark,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ThemeMode {
    Light,
    Dark,
    #[default]
    System,
}

impl ThemeMode {
    pub fn all() -> &'static [ThemeMode] {
        &[ThemeMode::Light, ThemeMode::Dark, ThemeMode::System]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ThemeMode::Light => "light",
            ThemeMode::Dark => "dark",
            ThemeMode::System => "system",
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        Self::all().iter().copied().find(|value| value.as_str() == raw)
    }

    /// light → dark → system → light
    pub fn cycle(self) -> Self {
        match self {
            ThemeMode::Light => ThemeMode::Dark,
            ThemeMode::Dark => ThemeMode::System,
            ThemeMode::System => ThemeMode::Light,
        }
    }

    pub fn resolve(self, system: ResolvedTheme) -> ResolvedTheme {
        match self {
            ThemeMode::Light => ResolvedTheme::Light,
            ThemeMode::Dark => ResolvedTheme::Dark,
            ThemeMode::System => system,
        }
    }
}

impl fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_rejects_unknown_values() {
        assert_eq!(CardDensity::parse("compact"), Some(CardDensity::Compact));
        assert_eq!(CardDensity::parse("Compact"), None);
        assert_eq!(ListViewMode::parse("grid"), None);
        assert_eq!(ThemeMode::parse(""), None);
    }

    #[test]
    fn theme_cycles_through_all_modes() {
        let mut mode = ThemeMode::Light;
        let mut seen = vec![mode];
        for _ in 0..3 {
            mode = mode.cycle();
            seen.push(mode);
        }
        assert_eq!(
            seen,
            vec![
                ThemeMode::Light,
                ThemeMode::Dark,
                ThemeMode::System,
                ThemeMode::Light
            ]
        );
    }

    #[test]
    fn system_theme_follows_platform() {
        assert_eq!(
            ThemeMode::System.resolve(ResolvedTheme::Dark),
            ResolvedTheme::Dark
        );
        assert_eq!(
            ThemeMode::Light.resolve(ResolvedTheme::Dark),
            ResolvedTheme::Light
        );
    }
}

use std::fmt;

/// A single named value read off a record.
///
/// Filtering, option derivation and sorting never look at concrete record
/// structs; they ask for fields by name and get one of these back.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Text(String),
    Number(f64),
    Bool(bool),
}

impl FieldValue {
    pub fn text(value: impl Into<String>) -> Self {
        FieldValue::Text(value.into())
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            FieldValue::Number(value) => Some(*value),
            _ => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            FieldValue::Text(value) => Some(value.as_str()),
            _ => None,
        }
    }

    /// String form used for URL values and exact-match comparisons.
    ///
    /// Whole numbers render without a fractional part so that a challenge
    /// rating of `2.0` round-trips through the query string as `"2"`.
    pub fn to_display_string(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Text(value) => f.write_str(value),
            FieldValue::Number(value) => write!(f, "{value}"),
            FieldValue::Bool(value) => write!(f, "{value}"),
        }
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        FieldValue::Text(value.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        FieldValue::Text(value)
    }
}

impl From<f64> for FieldValue {
    fn from(value: f64) -> Self {
        FieldValue::Number(value)
    }
}

impl From<u32> for FieldValue {
    fn from(value: u32) -> Self {
        FieldValue::Number(f64::from(value))
    }
}

impl From<bool> for FieldValue {
    fn from(value: bool) -> Self {
        FieldValue::Bool(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn whole_numbers_render_without_fraction() {
        assert_eq!(FieldValue::Number(2.0).to_display_string(), "2");
        assert_eq!(FieldValue::Number(0.25).to_display_string(), "0.25");
    }

    #[test]
    fn text_renders_verbatim() {
        assert_eq!(FieldValue::text("Wizard").to_display_string(), "Wizard");
        assert_eq!(FieldValue::Bool(true).to_display_string(), "true");
    }
}

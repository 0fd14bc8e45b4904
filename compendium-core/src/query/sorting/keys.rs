//! Sort key values and their comparison rules.
//!
//! Two numbers compare numerically. Any other pairing compares the display
//! strings with a natural, case-insensitive ordering in which digit runs are
//! compared by value, so "Item 9" sorts before "Item 10".

use std::cmp::Ordering;

use compendium_model::FieldValue;
use ordered_float::OrderedFloat;

use super::state::SortDirection;

#[derive(Clone, Debug, PartialEq)]
pub enum SortValue {
    Number(f64),
    Text(String),
}

impl SortValue {
    pub fn text(value: impl Into<String>) -> Self {
        SortValue::Text(value.into())
    }

    fn display(&self) -> String {
        match self {
            SortValue::Number(value) => value.to_string(),
            SortValue::Text(value) => value.clone(),
        }
    }
}

impl From<FieldValue> for SortValue {
    fn from(value: FieldValue) -> Self {
        match value {
            FieldValue::Number(number) => SortValue::Number(number),
            other => SortValue::Text(other.to_display_string()),
        }
    }
}

impl From<f64> for SortValue {
    fn from(value: f64) -> Self {
        SortValue::Number(value)
    }
}

impl From<u32> for SortValue {
    fn from(value: u32) -> Self {
        SortValue::Number(f64::from(value))
    }
}

impl From<&str> for SortValue {
    fn from(value: &str) -> Self {
        SortValue::Text(value.to_string())
    }
}

impl From<String> for SortValue {
    fn from(value: String) -> Self {
        SortValue::Text(value)
    }
}

/// Ascending order of `a` relative to `b`, reversed for descending.
pub fn compare_values(
    a: &SortValue,
    b: &SortValue,
    direction: SortDirection,
) -> Ordering {
    let ascending = match (a, b) {
        (SortValue::Number(x), SortValue::Number(y)) => {
            OrderedFloat(*x).cmp(&OrderedFloat(*y))
        }
        _ => natural_cmp(&a.display(), &b.display()),
    };
    match direction {
        SortDirection::Asc => ascending,
        SortDirection::Desc => ascending.reverse(),
    }
}

/// Case-insensitive comparison that orders runs of ASCII digits by value.
pub fn natural_cmp(a: &str, b: &str) -> Ordering {
    let mut left = a.chars().peekable();
    let mut right = b.chars().peekable();

    loop {
        match (left.peek().copied(), right.peek().copied()) {
            (None, None) => return Ordering::Equal,
            (None, Some(_)) => return Ordering::Less,
            (Some(_), None) => return Ordering::Greater,
            (Some(x), Some(y)) if x.is_ascii_digit() && y.is_ascii_digit() => {
                let lhs = take_digits(&mut left);
                let rhs = take_digits(&mut right);
                let ordering = compare_digit_runs(&lhs, &rhs);
                if ordering != Ordering::Equal {
                    return ordering;
                }
            }
            (Some(x), Some(y)) => {
                left.next();
                right.next();
                let ordering = x.to_lowercase().cmp(y.to_lowercase());
                if ordering != Ordering::Equal {
                    return ordering;
                }
            }
        }
    }
}

fn take_digits(chars: &mut std::iter::Peekable<std::str::Chars<'_>>) -> String {
    let mut run = String::new();
    while let Some(c) = chars.peek().copied() {
        if !c.is_ascii_digit() {
            break;
        }
        run.push(c);
        chars.next();
    }
    run
}

fn compare_digit_runs(a: &str, b: &str) -> Ordering {
    let a = a.trim_start_matches('0');
    let b = b.trim_start_matches('0');
    a.len().cmp(&b.len()).then_with(|| a.cmp(b))
}

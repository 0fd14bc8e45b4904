//! Distinct, sorted value sets for select filters.

use compendium_model::{FieldValue, Record};
use ordered_float::OrderedFloat;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterOption {
    pub label: String,
    pub value: String,
}

pub fn unique_sorted_strings<I, S>(values: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let mut values: Vec<String> = values.into_iter().map(Into::into).collect();
    values.sort_unstable();
    values.dedup();
    values
}

pub fn unique_sorted_numbers<I>(values: I) -> Vec<f64>
where
    I: IntoIterator<Item = f64>,
{
    let mut values: Vec<OrderedFloat<f64>> =
        values.into_iter().map(OrderedFloat).collect();
    values.sort_unstable();
    values.dedup();
    values.into_iter().map(|value| value.0).collect()
}

/// Distinct values of `field` across `records`, fully sorted.
///
/// A field that is numeric on every record sorts numerically; anything else
/// sorts as case-sensitive text. Records without the field are skipped.
pub fn unique_values<R: Record>(records: &[R], field: &str) -> Vec<FieldValue> {
    let values: Vec<FieldValue> =
        records.iter().filter_map(|record| record.field(field)).collect();

    let numbers: Option<Vec<f64>> =
        values.iter().map(FieldValue::as_number).collect();

    match numbers {
        Some(numbers) => unique_sorted_numbers(numbers)
            .into_iter()
            .map(FieldValue::Number)
            .collect(),
        None => unique_sorted_strings(
            values.iter().map(FieldValue::to_display_string),
        )
        .into_iter()
        .map(FieldValue::Text)
        .collect(),
    }
}

pub fn to_filter_options(values: &[FieldValue]) -> Vec<FilterOption> {
    values
        .iter()
        .map(|value| {
            let text = value.to_display_string();
            FilterOption {
                label: text.clone(),
                value: text,
            }
        })
        .collect()
}

/// Prefer the authoritative metadata universe; fall back to whatever the
/// loaded records contain.
pub fn resolve_options<R: Record>(
    metadata: Option<&[String]>,
    records: &[R],
    field: &str,
) -> Vec<FilterOption> {
    match metadata {
        Some(universe) if !universe.is_empty() => {
            let values: Vec<FieldValue> =
                unique_sorted_strings(universe.iter().cloned())
                    .into_iter()
                    .map(FieldValue::Text)
                    .collect();
            to_filter_options(&values)
        }
        _ => to_filter_options(&unique_values(records, field)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use compendium_model::{FilterField, RecordKind};

    #[test]
    fn strings_sort_case_sensitively_and_dedup() {
        let values = unique_sorted_strings(["elf", "Dwarf", "Elf", "Dwarf"]);
        assert_eq!(values, vec!["Dwarf", "Elf", "elf"]);
    }

    #[test]
    fn numbers_sort_numerically() {
        let values = unique_sorted_numbers([10.0, 2.0, 0.25, 2.0, 0.125]);
        assert_eq!(values, vec![0.125, 0.25, 2.0, 10.0]);
    }

    #[test]
    fn empty_input_yields_empty_output() {
        assert!(unique_sorted_strings(Vec::<String>::new()).is_empty());
        assert!(unique_sorted_numbers(Vec::new()).is_empty());
    }

    #[test]
    fn dedup_is_idempotent() {
        let once = unique_sorted_strings(["b", "a", "b"]);
        let twice = unique_sorted_strings(once.clone());
        assert_eq!(once, twice);
    }

    #[derive(Debug, Clone)]
    struct Row(Option<FieldValue>);

    impl Record for Row {
        const KIND: RecordKind = RecordKind::Monsters;
        const FILTERS: &'static [FilterField] = &[];

        fn id(&self) -> u32 {
            0
        }

        fn name(&self) -> &str {
            "row"
        }

        fn field(&self, name: &str) -> Option<FieldValue> {
            (name == "value").then(|| self.0.clone()).flatten()
        }

        fn search_fields(&self) -> Vec<&str> {
            Vec::new()
        }
    }

    fn rows(values: &[FieldValue]) -> Vec<Row> {
        values.iter().cloned().map(|value| Row(Some(value))).collect()
    }

    #[test]
    fn numeric_field_values_sort_by_number() {
        let ratings = rows(&[
            FieldValue::Number(10.0),
            FieldValue::Number(2.0),
            FieldValue::Number(0.25),
            FieldValue::Number(2.0),
        ]);
        assert_eq!(
            unique_values(&ratings, "value"),
            vec![
                FieldValue::Number(0.25),
                FieldValue::Number(2.0),
                FieldValue::Number(10.0),
            ]
        );
    }

    #[test]
    fn mixed_field_values_fall_back_to_text() {
        let mixed = rows(&[
            FieldValue::Number(10.0),
            FieldValue::text("Beast"),
            FieldValue::Number(2.0),
        ]);
        assert_eq!(
            unique_values(&mixed, "value"),
            vec![
                FieldValue::text("10"),
                FieldValue::text("2"),
                FieldValue::text("Beast"),
            ]
        );
    }

    #[test]
    fn unique_values_edge_cases() {
        assert!(unique_values::<Row>(&[], "value").is_empty());
        assert!(unique_values(&[Row(None)], "value").is_empty());

        let same = rows(&[FieldValue::text("Elf"), FieldValue::text("Elf")]);
        assert_eq!(unique_values(&same, "value"), vec![FieldValue::text("Elf")]);
    }

    #[test]
    fn unique_values_ignores_input_order() {
        let values = [
            FieldValue::text("Wizard"),
            FieldValue::text("Fighter"),
            FieldValue::text("Rogue"),
            FieldValue::text("Fighter"),
            FieldValue::text("Cleric"),
        ];
        let expected = unique_values(&rows(&values), "value");

        for shift in 0..values.len() {
            let mut rotated = values.to_vec();
            rotated.rotate_left(shift);
            assert_eq!(unique_values(&rows(&rotated), "value"), expected);
            rotated.reverse();
            assert_eq!(unique_values(&rows(&rotated), "value"), expected);
        }

        let again: Vec<FieldValue> = unique_values(&rows(&expected), "value");
        assert_eq!(again, expected);
    }

    #[test]
    fn options_use_display_strings() {
        let options = to_filter_options(&[
            FieldValue::Number(0.5),
            FieldValue::Number(2.0),
        ]);
        assert_eq!(
            options,
            vec![
                FilterOption { label: "0.5".into(), value: "0.5".into() },
                FilterOption { label: "2".into(), value: "2".into() },
            ]
        );
    }
}

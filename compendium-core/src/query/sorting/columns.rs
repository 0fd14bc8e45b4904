use std::fmt;
use std::sync::Arc;

use compendium_model::Record;

use super::keys::SortValue;

pub type RenderFn<Row> = Arc<dyn Fn(&Row) -> String + Send + Sync>;
pub type SortValueFn<Row> = Arc<dyn Fn(&Row) -> SortValue + Send + Sync>;

/// One table column.
///
/// A sortable column without an explicit sort value orders by its rendered
/// text. Non-sortable columns never take part in ordering.
pub struct Column<Row> {
    pub key: String,
    pub header: String,
    render: RenderFn<Row>,
    sortable: bool,
    sort_value: Option<SortValueFn<Row>>,
}

impl<Row> Clone for Column<Row> {
    fn clone(&self) -> Self {
        Self {
            key: self.key.clone(),
            header: self.header.clone(),
            render: Arc::clone(&self.render),
            sortable: self.sortable,
            sort_value: self.sort_value.clone(),
        }
    }
}

impl<Row> fmt::Debug for Column<Row> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Column")
            .field("key", &self.key)
            .field("header", &self.header)
            .field("sortable", &self.sortable)
            .field("has_sort_value", &self.sort_value.is_some())
            .finish()
    }
}

impl<Row> Column<Row> {
    pub fn new<F>(
        key: impl Into<String>,
        header: impl Into<String>,
        render: F,
    ) -> Self
    where
        F: Fn(&Row) -> String + Send + Sync + 'static,
    {
        Self {
            key: key.into(),
            header: header.into(),
            render: Arc::new(render),
            sortable: false,
            sort_value: None,
        }
    }

    pub fn sortable(mut self) -> Self {
        self.sortable = true;
        self
    }

    /// Marks the column sortable and orders it by `value`.
    pub fn sort_by<F>(mut self, value: F) -> Self
    where
        F: Fn(&Row) -> SortValue + Send + Sync + 'static,
    {
        self.sortable = true;
        self.sort_value = Some(Arc::new(value));
        self
    }

    pub fn is_sortable(&self) -> bool {
        self.sortable
    }

    pub fn render(&self, row: &Row) -> String {
        (self.render)(row)
    }

    /// `None` for non-sortable columns.
    pub fn sort_value(&self, row: &Row) -> Option<SortValue> {
        if !self.sortable {
            return None;
        }
        Some(match &self.sort_value {
            Some(value) => value(row),
            None => SortValue::Text(self.render(row)),
        })
    }
}

impl<R: Record> Column<R> {
    /// Column bound to a record field: renders its display string and sorts
    /// by its typed value.
    pub fn field(key: &'static str, header: impl Into<String>) -> Self {
        Column::new(key, header, move |row: &R| {
            row.field(key)
                .map(|value| value.to_display_string())
                .unwrap_or_default()
        })
        .sort_by(move |row: &R| {
            row.field(key)
                .map(SortValue::from)
                .unwrap_or_else(|| SortValue::text(""))
        })
    }
}

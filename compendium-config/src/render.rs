//! Plain-text rendering of list and detail pages for the terminal client.

use std::fmt::Write;

use compendium_core::detail::DetailState;
use compendium_core::list::{PageBody, PageView, TableView};
use compendium_core::model::{CardDensity, Record};
use serde::Serialize;

pub fn render_page(view: &PageView) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "# {}", view.kind);

    if let Some(error) = &view.error {
        let _ = writeln!(out, "error: {error}");
    }
    if !view.search_value.is_empty() {
        let _ = writeln!(out, "search: {}", view.search_value);
    }
    for filter in &view.filters {
        let value = if filter.value.is_empty() {
            filter.all_label.as_str()
        } else {
            filter.value.as_str()
        };
        let _ = writeln!(
            out,
            "{}: {} ({} options)",
            filter.label,
            value,
            filter.options.len()
        );
    }
    let _ = writeln!(out, "{}", view.summary);
    out.push('\n');

    match &view.body {
        PageBody::Loading { placeholders } => {
            for _ in 0..*placeholders {
                out.push_str("  ...\n");
            }
        }
        PageBody::Empty { message } => {
            let _ = writeln!(out, "{message}");
        }
        PageBody::Cards(cards) => {
            for card in cards {
                let _ = writeln!(out, "{}  [{}]", card.title, card.badge);
                let _ = writeln!(out, "  {}", card.subtitle);
                if view.density == CardDensity::Comfortable
                    && let Some(description) = &card.description
                {
                    let _ = writeln!(out, "  {description}");
                }
                if !card.stats.is_empty() {
                    let stats: Vec<String> = card
                        .stats
                        .iter()
                        .map(|(label, value)| format!("{label}: {value}"))
                        .collect();
                    let _ = writeln!(out, "  {}", stats.join(" | "));
                }
                let _ = writeln!(out, "  {}", card.href);
            }
        }
        PageBody::Table(table) => render_table(&mut out, table),
    }

    out
}

fn render_table(out: &mut String, table: &TableView) {
    let mut widths: Vec<usize> = table
        .headers
        .iter()
        .map(|header| header.label.chars().count() + marker_len(header.sortable))
        .collect();
    for row in &table.rows {
        for (width, cell) in widths.iter_mut().zip(&row.cells) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let headers: Vec<String> = table
        .headers
        .iter()
        .zip(&widths)
        .map(|(header, width)| {
            let marker = match header.indicator.as_str() {
                "ascending" => " ^",
                "descending" => " v",
                _ if header.sortable => " -",
                _ => "",
            };
            format!("{:<width$}", format!("{}{marker}", header.label))
        })
        .collect();
    let _ = writeln!(out, "{}", headers.join("  ").trim_end());

    for row in &table.rows {
        let cells: Vec<String> = row
            .cells
            .iter()
            .zip(&widths)
            .map(|(cell, width)| format!("{cell:<width$}"))
            .collect();
        let _ = writeln!(out, "{}", cells.join("  ").trim_end());
    }
}

fn marker_len(sortable: bool) -> usize {
    if sortable { 2 } else { 0 }
}

/// Detail pages print the record as pretty JSON under a short heading.
pub fn render_detail<R: Record + Serialize>(
    state: &DetailState<R>,
) -> serde_json::Result<String> {
    Ok(match state {
        DetailState::Loading => "Loading...\n".to_string(),
        DetailState::NotFound => format!("{} not found\n", R::KIND.singular()),
        DetailState::Failed(message) => format!("error: {message}\n"),
        DetailState::Loaded(record) => format!(
            "# {} #{}: {}\n{}\n",
            R::KIND.singular(),
            record.id(),
            record.name(),
            serde_json::to_string_pretty(record)?
        ),
    })
}

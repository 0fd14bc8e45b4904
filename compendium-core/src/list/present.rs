//! Per-kind card and table presentation.

use compendium_model::{Character, Item, Monster, Record};

use crate::list::page::CardView;
use crate::query::sorting::{Column, SortValue};
use crate::routes;

/// How one record kind shows up on its list page.
pub trait ListPresentation: Record {
    fn search_placeholder() -> &'static str;

    fn columns() -> Vec<Column<Self>>;

    fn card(&self) -> CardView;
}

impl ListPresentation for Character {
    fn search_placeholder() -> &'static str {
        "Search characters by name"
    }

    fn columns() -> Vec<Column<Self>> {
        vec![
            Column::field("name", "Name"),
            Column::field("race", "Race"),
            Column::field("class", "Class"),
            Column::field("alignment", "Alignment"),
        ]
    }

    fn card(&self) -> CardView {
        CardView {
            id: self.id,
            title: self.name.clone(),
            subtitle: format!("{} · {} · {}", self.race, self.class, self.alignment),
            badge: format!("#{}", self.id),
            description: Some(self.description.clone()),
            stats: Vec::new(),
            href: routes::detail_path(Self::KIND, self.id),
        }
    }
}

impl ListPresentation for Item {
    fn search_placeholder() -> &'static str {
        "Search items by name"
    }

    fn columns() -> Vec<Column<Self>> {
        vec![
            Column::field("name", "Name"),
            Column::field("type", "Type"),
            Column::field("rarity", "Rarity"),
            Column::new("cost", "Cost", |item: &Item| format!("{} gp", item.cost))
                .sort_by(|item: &Item| SortValue::Number(item.cost)),
            Column::new("weight", "Weight", |item: &Item| {
                format!("{} lb", item.weight)
            })
            .sort_by(|item: &Item| SortValue::Number(item.weight)),
            Column::new("magic", "Magic", |item: &Item| {
                if item.magic { "Yes" } else { "No" }.to_string()
            }),
        ]
    }

    fn card(&self) -> CardView {
        CardView {
            id: self.id,
            title: self.name.clone(),
            subtitle: format!("{} · {}", self.item_type, self.rarity),
            badge: format!("#{}", self.id),
            description: Some(self.description.clone()),
            stats: vec![
                ("Cost".to_string(), format!("{} gp", self.cost)),
                ("Weight".to_string(), format!("{} lb", self.weight)),
            ],
            href: routes::detail_path(Self::KIND, self.id),
        }
    }
}

impl ListPresentation for Monster {
    fn search_placeholder() -> &'static str {
        "Search monsters by name"
    }

    fn columns() -> Vec<Column<Self>> {
        vec![
            Column::field("name", "Name"),
            Column::field("size", "Size"),
            Column::field("type", "Type"),
            Column::field("cr", "CR"),
            Column::field("armor_class", "AC"),
            Column::field("hit_points", "HP"),
        ]
    }

    fn card(&self) -> CardView {
        CardView {
            id: self.id,
            title: self.name.clone(),
            subtitle: format!(
                "{} {} · {}",
                self.size, self.monster_type, self.alignment
            ),
            badge: format!("CR {}", self.challenge_rating),
            description: None,
            stats: vec![
                ("AC".to_string(), self.armor_class.to_string()),
                ("HP".to_string(), self.hit_points.to_string()),
            ],
            href: routes::detail_path(Self::KIND, self.id),
        }
    }
}

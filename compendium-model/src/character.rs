use crate::field::FieldValue;
use crate::record::{FilterField, Record, RecordKind};
use crate::stats::AbilityScores;

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Character {
    pub id: u32,
    pub name: String,
    pub race: String,
    pub class: String,
    pub alignment: String,
    pub description: String,
    pub stats: AbilityScores,
}

const CHARACTER_FILTERS: &[FilterField] = &[
    FilterField {
        param: "class",
        field: "class",
        label: "Class",
        all_label: "All classes",
    },
    FilterField {
        param: "race",
        field: "race",
        label: "Race",
        all_label: "All races",
    },
];

impl Record for Character {
    const KIND: RecordKind = RecordKind::Characters;
    const FILTERS: &'static [FilterField] = CHARACTER_FILTERS;

    fn id(&self) -> u32 {
        self.id
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn field(&self, name: &str) -> Option<FieldValue> {
        match name {
            "id" => Some(self.id.into()),
            "name" => Some(self.name.as_str().into()),
            "race" => Some(self.race.as_str().into()),
            "class" => Some(self.class.as_str().into()),
            "alignment" => Some(self.alignment.as_str().into()),
            "description" => Some(self.description.as_str().into()),
            other => self
                .stats
                .get(other)
                .map(|score| FieldValue::Number(f64::from(score))),
        }
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![
            self.name.as_str(),
            self.race.as_str(),
            self.class.as_str(),
            self.alignment.as_str(),
        ]
    }
}

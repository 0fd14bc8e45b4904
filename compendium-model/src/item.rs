use crate::field::FieldValue;
use crate::record::{FilterField, Record, RecordKind};

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Item {
    pub id: u32,
    pub name: String,
    #[cfg_attr(feature = "serde", serde(rename = "type"))]
    pub item_type: String,
    pub category: String,
    pub rarity: String,
    pub description: String,
    /// Cost in gold pieces.
    pub cost: f64,
    /// Weight in pounds.
    pub weight: f64,
    #[cfg_attr(feature = "serde", serde(default))]
    pub properties: Vec<String>,
    pub magic: bool,
    pub attunement_required: bool,
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub damage: Option<String>,
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub damage_type: Option<String>,
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub armor_class: Option<u32>,
}

const ITEM_FILTERS: &[FilterField] = &[
    FilterField {
        param: "type",
        field: "type",
        label: "Type",
        all_label: "All types",
    },
    FilterField {
        param: "rarity",
        field: "rarity",
        label: "Rarity",
        all_label: "All rarities",
    },
];

impl Record for Item {
    const KIND: RecordKind = RecordKind::Items;
    const FILTERS: &'static [FilterField] = ITEM_FILTERS;

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
            "type" => Some(self.item_type.as_str().into()),
            "category" => Some(self.category.as_str().into()),
            "rarity" => Some(self.rarity.as_str().into()),
            "description" => Some(self.description.as_str().into()),
            "cost" => Some(self.cost.into()),
            "weight" => Some(self.weight.into()),
            "magic" => Some(self.magic.into()),
            "attunement_required" => Some(self.attunement_required.into()),
            "damage" => self.damage.as_deref().map(FieldValue::from),
            "damage_type" => self.damage_type.as_deref().map(FieldValue::from),
            "armor_class" => self.armor_class.map(FieldValue::from),
            _ => None,
        }
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![
            self.name.as_str(),
            self.item_type.as_str(),
            self.category.as_str(),
            self.rarity.as_str(),
        ]
    }
}

use std::collections::BTreeMap;

use crate::field::FieldValue;
use crate::record::{FilterField, Record, RecordKind};
use crate::stats::AbilityScores;

/// Movement speeds in feet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MonsterSpeed {
    pub walk: u32,
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub climb: Option<u32>,
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub fly: Option<u32>,
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub swim: Option<u32>,
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub burrow: Option<u32>,
}

/// Sense ranges in feet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MonsterSenses {
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub blindsight: Option<u32>,
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub darkvision: Option<u32>,
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub tremorsense: Option<u32>,
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub truesight: Option<u32>,
    pub passive_perception: u32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MonsterAbility {
    pub name: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MonsterAction {
    pub name: String,
    pub description: String,
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub attack_bonus: Option<i32>,
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub damage_dice: Option<String>,
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub damage_type: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Monster {
    pub id: u32,
    pub name: String,
    pub size: String,
    #[cfg_attr(feature = "serde", serde(rename = "type"))]
    pub monster_type: String,
    pub alignment: String,
    pub armor_class: u32,
    pub hit_points: u32,
    pub hit_dice: String,
    pub speed: MonsterSpeed,
    pub stats: AbilityScores,
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub saving_throws: Option<BTreeMap<String, i32>>,
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub skills: Option<BTreeMap<String, i32>>,
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub damage_immunities: Option<Vec<String>>,
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub condition_immunities: Option<Vec<String>>,
    pub senses: MonsterSenses,
    #[cfg_attr(feature = "serde", serde(default))]
    pub languages: Vec<String>,
    /// Fractional ratings (`0.125`, `0.25`, `0.5`) are kept as-is.
    pub challenge_rating: f64,
    pub experience_points: u32,
    #[cfg_attr(feature = "serde", serde(default))]
    pub special_abilities: Vec<MonsterAbility>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub actions: Vec<MonsterAction>,
}

const MONSTER_FILTERS: &[FilterField] = &[
    FilterField {
        param: "type",
        field: "type",
        label: "Type",
        all_label: "All types",
    },
    FilterField {
        param: "size",
        field: "size",
        label: "Size",
        all_label: "All sizes",
    },
    FilterField {
        param: "cr",
        field: "challenge_rating",
        label: "Challenge rating",
        all_label: "Any CR",
    },
];

impl Record for Monster {
    const KIND: RecordKind = RecordKind::Monsters;
    const FILTERS: &'static [FilterField] = MONSTER_FILTERS;

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
            "size" => Some(self.size.as_str().into()),
            "type" => Some(self.monster_type.as_str().into()),
            "alignment" => Some(self.alignment.as_str().into()),
            "armor_class" => Some(self.armor_class.into()),
            "hit_points" => Some(self.hit_points.into()),
            "hit_dice" => Some(self.hit_dice.as_str().into()),
            "challenge_rating" | "cr" => Some(self.challenge_rating.into()),
            "experience_points" => Some(self.experience_points.into()),
            "speed" => Some(self.speed.walk.into()),
            "passive_perception" => Some(self.senses.passive_perception.into()),
            other => self
                .stats
                .get(other)
                .map(|score| FieldValue::Number(f64::from(score))),
        }
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![
            self.name.as_str(),
            self.monster_type.as_str(),
            self.size.as_str(),
            self.alignment.as_str(),
        ]
    }
}

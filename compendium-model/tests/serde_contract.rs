#![cfg(feature = "serde")]
//! Wire-shape coverage for the list and detail payloads served by the API.

use compendium_model::prelude::*;
use compendium_model::{MonstersResponse, ItemsResponse};

const MONSTER_JSON: &str = r#"{
    "id": 7,
    "name": "Young Green Dragon",
    "size": "Large",
    "type": "Dragon",
    "alignment": "Lawful Evil",
    "armor_class": 18,
    "hit_points": 136,
    "hit_dice": "16d10+48",
    "speed": { "walk": 40, "fly": 80, "swim": 40 },
    "stats": {
        "strength": 19, "dexterity": 12, "constitution": 17,
        "intelligence": 16, "wisdom": 13, "charisma": 15
    },
    "saving_throws": { "dex": 4, "con": 6 },
    "senses": { "blindsight": 30, "darkvision": 120, "passive_perception": 17 },
    "languages": ["Common", "Draconic"],
    "challenge_rating": 8,
    "experience_points": 3900,
    "special_abilities": [{ "name": "Amphibious", "description": "Breathes air and water." }],
    "actions": [{
        "name": "Bite",
        "description": "Melee Weapon Attack.",
        "attack_bonus": 7,
        "damage_dice": "2d10+4",
        "damage_type": "piercing"
    }]
}"#;

#[test]
fn monster_payload_deserializes_with_optional_fields() {
    let monster: Monster = serde_json::from_str(MONSTER_JSON).expect("monster json");

    assert_eq!(monster.monster_type, "Dragon");
    assert_eq!(monster.speed.fly, Some(80));
    assert_eq!(monster.speed.climb, None);
    assert_eq!(monster.skills, None);
    assert_eq!(monster.challenge_rating, 8.0);
    assert_eq!(monster.actions[0].attack_bonus, Some(7));
    assert_eq!(
        monster.field("cr").map(|value| value.to_display_string()),
        Some("8".to_string())
    );
}

#[test]
fn list_response_collapses_into_record_page() {
    let json = format!(
        r#"{{ "monsters": [{MONSTER_JSON}], "total": 41, "skip": 0, "limit": 50 }}"#
    );
    let response: MonstersResponse = serde_json::from_str(&json).expect("response json");
    let page: RecordPage<Monster> = response.into();

    assert_eq!(page.records.len(), 1);
    assert_eq!(page.total, 41);
    assert_eq!(page.limit, 50);
}

#[test]
fn item_type_field_uses_wire_name() {
    let json = r#"{
        "items": [{
            "id": 3,
            "name": "Longsword",
            "type": "Weapon",
            "category": "Martial Melee",
            "rarity": "Common",
            "description": "A versatile blade.",
            "cost": 15,
            "weight": 3,
            "properties": ["Versatile"],
            "magic": false,
            "attunement_required": false,
            "damage": "1d8",
            "damage_type": "slashing"
        }],
        "total": 1, "skip": 0, "limit": 50
    }"#;
    let response: ItemsResponse = serde_json::from_str(json).expect("items json");
    let item = &response.items[0];

    assert_eq!(item.item_type, "Weapon");
    assert_eq!(item.armor_class, None);
    assert_eq!(item.field("type"), Some(FieldValue::text("Weapon")));

    let round_trip = serde_json::to_value(item).expect("serialize item");
    assert_eq!(round_trip["type"], "Weapon");
    assert!(round_trip.get("armor_class").is_none());
}

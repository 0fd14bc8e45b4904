#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use compendium_core::model::{
    AbilityScores, Character, Monster, MonsterSenses, MonsterSpeed, Record,
    RecordPage,
};
use compendium_core::query::PageQuery;
use compendium_core::{CompendiumError, RecordSource, Result};
use tokio::sync::oneshot;

pub type PageReply<R> = oneshot::Sender<Result<RecordPage<R>>>;
pub type RecordReply<R> = oneshot::Sender<Result<R>>;

/// Source whose responses are released by the test, keyed by search text
/// for pages and by id for single records.
pub struct ControlledSource<R> {
    pending: Mutex<HashMap<String, oneshot::Receiver<Result<RecordPage<R>>>>>,
    pending_records: Mutex<HashMap<u32, oneshot::Receiver<Result<R>>>>,
    calls: AtomicUsize,
}

impl<R: Record> ControlledSource<R> {
    pub fn new() -> Self {
        Self {
            pending: Mutex::new(HashMap::new()),
            pending_records: Mutex::new(HashMap::new()),
            calls: AtomicUsize::new(0),
        }
    }

    /// Register the reply channel for requests searching `text`.
    pub fn expect(&self, text: &str) -> PageReply<R> {
        let (tx, rx) = oneshot::channel();
        self.pending
            .lock()
            .expect("pending lock")
            .insert(text.to_string(), rx);
        tx
    }

    /// Register the reply channel for a detail fetch of `id`.
    pub fn expect_record(&self, id: u32) -> RecordReply<R> {
        let (tx, rx) = oneshot::channel();
        self.pending_records
            .lock()
            .expect("pending lock")
            .insert(id, rx);
        tx
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl<R: Record> RecordSource<R> for ControlledSource<R> {
    async fn fetch_page(&self, query: &PageQuery) -> Result<RecordPage<R>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let key = query.text.clone().unwrap_or_default();
        let receiver = self
            .pending
            .lock()
            .expect("pending lock")
            .remove(&key)
            .ok_or_else(|| CompendiumError::Internal(format!("no reply for {key:?}")))?;
        receiver
            .await
            .unwrap_or_else(|_| Err(CompendiumError::Internal("reply dropped".into())))
    }

    async fn fetch_one(&self, id: u32) -> Result<R> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let receiver = self.pending_records.lock().expect("pending lock").remove(&id);
        match receiver {
            Some(receiver) => receiver
                .await
                .unwrap_or_else(|_| Err(CompendiumError::Internal("reply dropped".into()))),
            None => Err(CompendiumError::NotFound(format!("{id}"))),
        }
    }
}

pub fn page<R>(records: Vec<R>, total: usize) -> RecordPage<R> {
    RecordPage {
        records,
        total,
        skip: 0,
        limit: 50,
    }
}

pub fn character(id: u32, name: &str, race: &str, class: &str) -> Character {
    Character {
        id,
        name: name.to_string(),
        race: race.to_string(),
        class: class.to_string(),
        alignment: "Neutral".to_string(),
        description: format!("{name} the {class}"),
        stats: AbilityScores {
            strength: 10,
            dexterity: 12,
            constitution: 14,
            intelligence: 8,
            wisdom: 13,
            charisma: 15,
        },
    }
}

pub fn monster(id: u32, name: &str, kind: &str, cr: f64) -> Monster {
    Monster {
        id,
        name: name.to_string(),
        size: "Medium".to_string(),
        monster_type: kind.to_string(),
        alignment: "Unaligned".to_string(),
        armor_class: 12,
        hit_points: 20 + id,
        hit_dice: "3d8+6".to_string(),
        speed: MonsterSpeed {
            walk: 30,
            ..MonsterSpeed::default()
        },
        stats: AbilityScores::default(),
        saving_throws: None,
        skills: None,
        damage_immunities: None,
        condition_immunities: None,
        senses: MonsterSenses {
            passive_perception: 10,
            ..MonsterSenses::default()
        },
        languages: Vec::new(),
        challenge_rating: cr,
        experience_points: 100,
        special_abilities: Vec::new(),
        actions: Vec::new(),
    }
}

/// The three-row bestiary used by the ordering examples.
pub fn bestiary() -> Vec<Monster> {
    vec![
        monster(1, "Ape", "Beast", 2.0),
        monster(2, "Zombie", "Undead", 2.0),
        monster(3, "Beast", "Beast", 1.0),
    ]
}

pub fn party() -> Vec<Character> {
    vec![
        character(1, "Aelar", "Elf", "Wizard"),
        character(2, "Bruenor", "Dwarf", "Fighter"),
        character(3, "Lidda", "Halfling", "Rogue"),
        character(4, "Mialee", "Elf", "Wizard"),
    ]
}

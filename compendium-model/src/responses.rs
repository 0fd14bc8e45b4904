//! List endpoint payloads and the kind-agnostic page they collapse into.

use crate::character::Character;
use crate::item::Item;
use crate::monster::Monster;

/// One page of records plus the server-side total.
#[derive(Debug, Clone, PartialEq)]
pub struct RecordPage<R> {
    pub records: Vec<R>,
    pub total: usize,
    pub skip: usize,
    pub limit: usize,
}

impl<R> RecordPage<R> {
    pub fn empty(skip: usize, limit: usize) -> Self {
        Self {
            records: Vec::new(),
            total: 0,
            skip,
            limit,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CharactersResponse {
    pub characters: Vec<Character>,
    pub total: usize,
    pub skip: usize,
    pub limit: usize,
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ItemsResponse {
    pub items: Vec<Item>,
    pub total: usize,
    pub skip: usize,
    pub limit: usize,
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MonstersResponse {
    pub monsters: Vec<Monster>,
    pub total: usize,
    pub skip: usize,
    pub limit: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ClassesResponse {
    pub classes: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RacesResponse {
    pub races: Vec<String>,
}

impl From<CharactersResponse> for RecordPage<Character> {
    fn from(response: CharactersResponse) -> Self {
        Self {
            records: response.characters,
            total: response.total,
            skip: response.skip,
            limit: response.limit,
        }
    }
}

impl From<ItemsResponse> for RecordPage<Item> {
    fn from(response: ItemsResponse) -> Self {
        Self {
            records: response.items,
            total: response.total,
            skip: response.skip,
            limit: response.limit,
        }
    }
}

impl From<MonstersResponse> for RecordPage<Monster> {
    fn from(response: MonstersResponse) -> Self {
        Self {
            records: response.monsters,
            total: response.total,
            skip: response.skip,
            limit: response.limit,
        }
    }
}

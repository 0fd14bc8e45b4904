//! URL query string as the single source of truth for list filters.
//!
//! [`QueryParamSync`] owns the page location. Every [`QueryParamSync::update`]
//! is one navigation: it rewrites the query string, records a history entry
//! (or replaces the current one) and publishes the new [`FilterState`] on a
//! `watch` channel so the list driver can refetch.

use std::collections::BTreeMap;

use tokio::sync::watch;
use tracing::debug;
use url::Url;

use crate::error::Result;

/// Flat key → value view of the query string.
///
/// Empty values never appear here; an absent key means "no constraint".
/// When a key is repeated the first non-empty occurrence wins.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterState(BTreeMap<String, String>);

impl FilterState {
    pub fn from_url(url: &Url) -> Self {
        let mut values = BTreeMap::new();
        for (key, value) in url.query_pairs() {
            if value.is_empty() {
                continue;
            }
            values
                .entry(key.into_owned())
                .or_insert_with(|| value.into_owned());
        }
        FilterState(values)
    }

    pub fn from_pairs<K, V>(pairs: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        let mut values = BTreeMap::new();
        for (key, value) in pairs {
            let value = value.into();
            if !value.is_empty() {
                values.entry(key.into()).or_insert(value);
            }
        }
        FilterState(values)
    }

    /// Value for `key`, or `""` when unconstrained.
    pub fn get(&self, key: &str) -> &str {
        self.0.get(key).map(String::as_str).unwrap_or("")
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

/// How an update is recorded in navigation history.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HistoryMode {
    #[default]
    Push,
    Replace,
}

#[derive(Debug)]
pub struct QueryParamSync {
    location: Url,
    history: Vec<Url>,
    mode: HistoryMode,
    tx: watch::Sender<FilterState>,
}

impl QueryParamSync {
    pub fn new(location: Url) -> Self {
        let (tx, _rx) = watch::channel(FilterState::from_url(&location));
        Self {
            location,
            history: Vec::new(),
            mode: HistoryMode::Push,
            tx,
        }
    }

    /// Parse an absolute location such as `http://localhost/monsters?cr=2`.
    pub fn parse(location: &str) -> Result<Self> {
        Ok(Self::new(Url::parse(location)?))
    }

    pub fn with_mode(mut self, mode: HistoryMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn set_mode(&mut self, mode: HistoryMode) {
        self.mode = mode;
    }

    pub fn location(&self) -> &Url {
        &self.location
    }

    /// Serialized query without the leading `?`; empty when there is none.
    pub fn query_string(&self) -> &str {
        self.location.query().unwrap_or("")
    }

    /// Current value for `key`, `""` when absent. Agrees with
    /// [`QueryParamSync::snapshot`] on repeated and empty keys.
    pub fn read(&self, key: &str) -> String {
        self.snapshot().get(key).to_string()
    }

    /// Set `key` to `value`, or remove it when `value` is empty.
    ///
    /// An existing key is rewritten in place and any duplicates are dropped;
    /// a new key is appended. Other keys keep their order.
    pub fn update(&mut self, key: &str, value: &str) {
        let mut pairs: Vec<(String, String)> =
            self.location.query_pairs().into_owned().collect();

        if value.is_empty() {
            pairs.retain(|(k, _)| k != key);
        } else if let Some(index) = pairs.iter().position(|(k, _)| k == key) {
            pairs[index].1 = value.to_string();
            let mut seen = false;
            pairs.retain(|(k, _)| {
                if k != key {
                    return true;
                }
                let keep = !seen;
                seen = true;
                keep
            });
        } else {
            pairs.push((key.to_string(), value.to_string()));
        }

        let mut next = self.location.clone();
        if pairs.is_empty() {
            next.set_query(None);
        } else {
            next.query_pairs_mut().clear().extend_pairs(&pairs);
        }

        debug!(key, value, mode = ?self.mode, "query param update");
        self.navigate(next);
    }

    /// Restore the previous history entry. Returns `false` at the start of
    /// history.
    pub fn back(&mut self) -> bool {
        match self.history.pop() {
            Some(previous) => {
                self.location = previous;
                self.publish();
                true
            }
            None => false,
        }
    }

    pub fn can_go_back(&self) -> bool {
        !self.history.is_empty()
    }

    pub fn snapshot(&self) -> FilterState {
        FilterState::from_url(&self.location)
    }

    pub fn subscribe(&self) -> watch::Receiver<FilterState> {
        self.tx.subscribe()
    }

    fn navigate(&mut self, next: Url) {
        let previous = std::mem::replace(&mut self.location, next);
        if self.mode == HistoryMode::Push {
            self.history.push(previous);
        }
        self.publish();
    }

    fn publish(&self) {
        self.tx.send_replace(self.snapshot());
    }
}

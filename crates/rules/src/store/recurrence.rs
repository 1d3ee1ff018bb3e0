//! [`RecurrenceStore`]: the ordered list of recurring task rules.

use daymark_core::KeyValueStore;
use serde_json::Value;
use tracing::{debug, info, warn};

use crate::schema::{NewRule, RecurringTaskRule, RuleUpdate};
use crate::validation::validate_rule;

use super::error::{Result, StoreError};
use super::{new_id, parse_entries, to_document};

/// Authoritative, persisted list of recurring task rules.
///
/// Order is display priority only. Every mutation validates the new value,
/// writes the whole list back under one key and only then updates the
/// in-memory copy, so a failed write leaves the store unchanged.
pub struct RecurrenceStore<S> {
    backend: S,
    key: String,
    rules: Vec<RecurringTaskRule>,
    /// Saved entries that did not parse, written back after `rules`.
    unparsed: Vec<Value>,
}

impl<S: KeyValueStore> RecurrenceStore<S> {
    /// Read the rule list stored under `key`.
    ///
    /// A missing key is an empty list. A document that is not a list is
    /// logged and treated as empty; it stays in the backend until the next
    /// successful write. Single entries that fail to parse are logged, left
    /// out of [`rules`](Self::rules) and preserved on every write. Rules
    /// saved without an id get one, and the list is written back.
    pub fn load(backend: S, key: impl Into<String>) -> Result<Self> {
        let key = key.into();
        let mut store = Self {
            backend,
            key,
            rules: Vec::new(),
            unparsed: Vec::new(),
        };
        store.reload()?;
        Ok(store)
    }

    /// Re-read the list from the backend, discarding the in-memory copy.
    pub fn reload(&mut self) -> Result<()> {
        let (mut rules, unparsed) = match self.backend.get(&self.key)? {
            None => (Vec::new(), Vec::new()),
            Some(raw) => match serde_json::from_str::<Vec<Value>>(&raw) {
                Ok(entries) => parse_entries::<RecurringTaskRule>(&self.key, entries),
                Err(e) => {
                    warn!(key = %self.key, error = %e, "ignoring malformed recurring task list");
                    (Vec::new(), Vec::new())
                }
            },
        };
        self.unparsed = unparsed;

        let mut assigned = 0usize;
        for rule in rules.iter_mut().filter(|r| r.id.is_empty()) {
            rule.id = new_id();
            assigned += 1;
        }

        debug!(key = %self.key, count = rules.len(), "loaded recurring tasks");
        if assigned > 0 {
            info!(key = %self.key, assigned, "assigned ids to recurring tasks saved without one");
            self.commit(rules)?;
        } else {
            self.rules = rules;
        }
        Ok(())
    }

    /// Snapshot of all rules in display order, for the projector.
    pub fn rules(&self) -> &[RecurringTaskRule] {
        &self.rules
    }

    pub fn get(&self, id: &str) -> Option<&RecurringTaskRule> {
        self.rules.iter().find(|r| r.id == id)
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Validate and append a new rule, assigning its id.
    pub fn add(&mut self, new_rule: NewRule) -> Result<&RecurringTaskRule> {
        let rule = new_rule.into_rule(new_id());
        check(&rule)?;

        let id = rule.id.clone();
        let mut next = self.rules.clone();
        next.push(rule);
        self.commit(next)?;

        info!(rule_id = %id, "added recurring task");
        Ok(&self.rules[self.rules.len() - 1])
    }

    /// Apply a partial update to the rule with `id`. The id never changes.
    pub fn update(&mut self, id: &str, update: &RuleUpdate) -> Result<&RecurringTaskRule> {
        let index = self.index_of(id)?;
        let updated = update.apply_to(&self.rules[index]);
        check(&updated)?;

        let mut next = self.rules.clone();
        next[index] = updated;
        self.commit(next)?;

        info!(rule_id = %id, "updated recurring task");
        Ok(&self.rules[index])
    }

    /// Move the rule at position `from` to position `to`, shifting the rest.
    pub fn move_rule(&mut self, from: usize, to: usize) -> Result<()> {
        let len = self.rules.len();
        for index in [from, to] {
            if index >= len {
                return Err(StoreError::IndexOutOfRange { index, len });
            }
        }
        if from == to {
            return Ok(());
        }

        let mut next = self.rules.clone();
        let rule = next.remove(from);
        next.insert(to, rule);
        self.commit(next)?;

        debug!(from, to, "reordered recurring tasks");
        Ok(())
    }

    /// Permanently remove the rule with `id` and return it.
    ///
    /// Confirmation is the caller's responsibility; there is no undo.
    pub fn delete(&mut self, id: &str) -> Result<RecurringTaskRule> {
        let index = self.index_of(id)?;
        let mut next = self.rules.clone();
        let removed = next.remove(index);
        self.commit(next)?;

        info!(rule_id = %id, "deleted recurring task");
        Ok(removed)
    }

    /// Give the backend back, e.g. to open another store on it.
    pub fn into_backend(self) -> S {
        self.backend
    }

    fn index_of(&self, id: &str) -> Result<usize> {
        self.rules
            .iter()
            .position(|r| r.id == id)
            .ok_or_else(|| StoreError::NotFound {
                kind: "recurring task",
                id: id.to_string(),
            })
    }

    fn commit(&mut self, next: Vec<RecurringTaskRule>) -> Result<()> {
        let json = to_document(&next, &self.unparsed)?;
        self.backend.set(&self.key, &json)?;
        self.rules = next;
        Ok(())
    }
}

fn check(rule: &RecurringTaskRule) -> Result<()> {
    let result = validate_rule(rule);
    if result.valid {
        Ok(())
    } else {
        warn!(rule_id = %rule.id, errors = %result.error_summary(), "rejected recurring task");
        Err(StoreError::Validation(result))
    }
}

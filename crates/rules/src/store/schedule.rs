//! [`ScheduleStore`]: the list of work/rest cycle schedules.

use daymark_core::KeyValueStore;
use serde::Deserialize;
use serde_json::Value;
use tracing::{debug, info, warn};

use crate::schema::{CycleSchedule, ScheduleVisibility};
use crate::validation::validate_schedule;

use super::error::{Result, StoreError};
use super::{new_id, parse_entries, to_document};

/// Saved schedules come either as one object (older saves) or as a list.
#[derive(Deserialize)]
#[serde(untagged)]
enum PersistedSchedules {
    Many(Vec<Value>),
    One(CycleSchedule),
}

/// Authoritative, persisted list of cycle schedules.
///
/// Always written back as a list. Overlapping schedules are allowed; how
/// their icons combine is decided per projection, not here.
pub struct ScheduleStore<S> {
    backend: S,
    key: String,
    schedules: Vec<CycleSchedule>,
    /// Saved list entries that did not parse, written back after `schedules`.
    unparsed: Vec<Value>,
}

impl<S: KeyValueStore> ScheduleStore<S> {
    /// Read the schedules stored under `key`.
    ///
    /// A missing key is an empty list and an unparseable document is logged
    /// and treated as empty. List entries that fail to parse are logged, left
    /// out of [`schedules`](Self::schedules) and preserved on every write. A
    /// single-object save, or schedules without ids, are normalized to a
    /// list with ids and written back.
    pub fn load(backend: S, key: impl Into<String>) -> Result<Self> {
        let key = key.into();
        let mut store = Self {
            backend,
            key,
            schedules: Vec::new(),
            unparsed: Vec::new(),
        };
        store.reload()?;
        Ok(store)
    }

    /// Re-read the schedules from the backend, discarding the in-memory copy.
    pub fn reload(&mut self) -> Result<()> {
        let (mut schedules, unparsed, mut needs_write) = match self.backend.get(&self.key)? {
            None => (Vec::new(), Vec::new(), false),
            Some(raw) => match serde_json::from_str::<PersistedSchedules>(&raw) {
                Ok(PersistedSchedules::Many(entries)) => {
                    let (list, unparsed) = parse_entries::<CycleSchedule>(&self.key, entries);
                    (list, unparsed, false)
                }
                Ok(PersistedSchedules::One(single)) => {
                    info!(key = %self.key, "converting single schedule to list");
                    (vec![single], Vec::new(), true)
                }
                Err(e) => {
                    warn!(key = %self.key, error = %e, "ignoring malformed schedule data");
                    (Vec::new(), Vec::new(), false)
                }
            },
        };
        self.unparsed = unparsed;

        for schedule in schedules.iter_mut().filter(|s| s.id.is_empty()) {
            schedule.id = new_id();
            needs_write = true;
        }

        debug!(key = %self.key, count = schedules.len(), "loaded schedules");
        if needs_write {
            self.commit(schedules)?;
        } else {
            self.schedules = schedules;
        }
        Ok(())
    }

    /// Snapshot of all schedules in list order, for the projector.
    pub fn schedules(&self) -> &[CycleSchedule] {
        &self.schedules
    }

    pub fn get(&self, id: &str) -> Option<&CycleSchedule> {
        self.schedules.iter().find(|s| s.id == id)
    }

    pub fn len(&self) -> usize {
        self.schedules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.schedules.is_empty()
    }

    /// Validate and append a schedule. Any id it carries is replaced.
    pub fn add(&mut self, mut schedule: CycleSchedule) -> Result<&CycleSchedule> {
        schedule.id = new_id();
        check(&schedule)?;

        let id = schedule.id.clone();
        let mut next = self.schedules.clone();
        next.push(schedule);
        self.commit(next)?;

        info!(schedule_id = %id, "added schedule");
        Ok(&self.schedules[self.schedules.len() - 1])
    }

    /// Replace the schedule with `id`, keeping its id.
    pub fn update(&mut self, id: &str, mut schedule: CycleSchedule) -> Result<&CycleSchedule> {
        let index = self.index_of(id)?;
        schedule.id = id.to_string();
        check(&schedule)?;

        let mut next = self.schedules.clone();
        next[index] = schedule;
        self.commit(next)?;

        info!(schedule_id = %id, "updated schedule");
        Ok(&self.schedules[index])
    }

    /// Change only which granularities show this schedule's icon.
    pub fn set_visibility(&mut self, id: &str, visibility: ScheduleVisibility) -> Result<()> {
        let index = self.index_of(id)?;
        let mut next = self.schedules.clone();
        next[index].visibility = visibility;
        self.commit(next)?;

        debug!(schedule_id = %id, ?visibility, "changed schedule visibility");
        Ok(())
    }

    /// Permanently remove the schedule with `id` and return it.
    pub fn remove(&mut self, id: &str) -> Result<CycleSchedule> {
        let index = self.index_of(id)?;
        let mut next = self.schedules.clone();
        let removed = next.remove(index);
        self.commit(next)?;

        info!(schedule_id = %id, "removed schedule");
        Ok(removed)
    }

    /// Give the backend back, e.g. to open another store on it.
    pub fn into_backend(self) -> S {
        self.backend
    }

    fn index_of(&self, id: &str) -> Result<usize> {
        self.schedules
            .iter()
            .position(|s| s.id == id)
            .ok_or_else(|| StoreError::NotFound {
                kind: "schedule",
                id: id.to_string(),
            })
    }

    fn commit(&mut self, next: Vec<CycleSchedule>) -> Result<()> {
        let json = to_document(&next, &self.unparsed)?;
        self.backend.set(&self.key, &json)?;
        self.schedules = next;
        Ok(())
    }
}

fn check(schedule: &CycleSchedule) -> Result<()> {
    let result = validate_schedule(schedule);
    if result.valid {
        Ok(())
    } else {
        warn!(schedule_id = %schedule.id, errors = %result.error_summary(), "rejected schedule");
        Err(StoreError::Validation(result))
    }
}

//! Schedule store: owns the week and writes it back after every change.

use crate::core::kv::KeyValueStore;
use crate::errors::AppResult;
use crate::models::{ClassSession, DayId, DaySchedule, WeekSchedule};
use tracing::{debug, warn};

/// Outcome of an upsert.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Upserted {
    Inserted,
    Replaced,
    /// The day key did not name one of the six days.
    UnknownDay,
}

pub struct ScheduleStore<K: KeyValueStore> {
    week: WeekSchedule,
    kv: K,
    key: String,
    /// In-memory state not yet written (last write failed).
    dirty: bool,
}

impl<K: KeyValueStore> ScheduleStore<K> {
    /// Load the week stored under `key`, or start from the default seed
    /// when nothing usable is stored.
    pub fn open(kv: K, key: &str) -> AppResult<Self> {
        let week = match kv.get(key)? {
            Some(raw) => match WeekSchedule::from_json(&raw) {
                Ok(week) => week,
                Err(e) => {
                    warn!(key, error = %e, "discarding stored schedule, using default seed");
                    WeekSchedule::default_seed()
                }
            },
            None => {
                debug!(key, "no stored schedule, using default seed");
                WeekSchedule::default_seed()
            }
        };

        Ok(Self::with_week(week, kv, key))
    }

    /// Wrap an already built week (nothing is written until the first change).
    pub fn with_week(week: WeekSchedule, kv: K, key: &str) -> Self {
        Self {
            week,
            kv,
            key: key.to_string(),
            dirty: false,
        }
    }

    pub fn list(&self) -> &WeekSchedule {
        &self.week
    }

    pub fn lookup(&self, day: DayId) -> &DaySchedule {
        self.week.day(day)
    }

    pub fn lookup_key(&self, day_key: &str) -> Option<&DaySchedule> {
        self.week.day_by_key(day_key)
    }

    pub fn find(&self, session_id: &str) -> Option<(DayId, &ClassSession)> {
        self.week.find(session_id)
    }

    /// The persistence medium, shared with sibling state such as the theme.
    pub fn medium(&self) -> &K {
        &self.kv
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Insert or replace `session` (matched by id) in `day`, then keep the
    /// day sorted by start time.
    ///
    /// If the write fails the change stays in memory and the error is
    /// returned; the next successful write carries it.
    pub fn upsert(&mut self, session: ClassSession, day: DayId) -> AppResult<Upserted> {
        let column = self.week.day_mut(day);
        let outcome = match column.position_of(&session.id) {
            Some(idx) => {
                column.classes[idx] = session;
                Upserted::Replaced
            }
            None => {
                column.classes.push(session);
                Upserted::Inserted
            }
        };
        column.sort_classes();

        debug!(%day, ?outcome, count = column.classes.len(), "class upserted");
        self.persist()?;
        Ok(outcome)
    }

    pub fn upsert_by_key(&mut self, session: ClassSession, day_key: &str) -> AppResult<Upserted> {
        match DayId::from_key(day_key) {
            Some(day) => self.upsert(session, day),
            None => {
                debug!(day_key, "upsert ignored: unknown day");
                Ok(Upserted::UnknownDay)
            }
        }
    }

    /// Remove the class with `session_id` from `day`. Returns whether a class
    /// was removed; nothing is written when the id is absent.
    pub fn remove(&mut self, session_id: &str, day: DayId) -> AppResult<bool> {
        let column = self.week.day_mut(day);
        let Some(idx) = column.position_of(session_id) else {
            debug!(%day, session_id, "remove ignored: no such class");
            return Ok(false);
        };
        column.classes.remove(idx);

        debug!(%day, session_id, "class removed");
        self.persist()?;
        Ok(true)
    }

    pub fn remove_by_key(&mut self, session_id: &str, day_key: &str) -> AppResult<bool> {
        match DayId::from_key(day_key) {
            Some(day) => self.remove(session_id, day),
            None => Ok(false),
        }
    }

    /// Write the current week, whether or not it changed.
    pub fn flush(&mut self) -> AppResult<()> {
        self.persist()
    }

    /// Final write at shutdown.
    pub fn close(mut self) -> AppResult<()> {
        self.persist()
    }

    fn persist(&mut self) -> AppResult<()> {
        let blob = self.week.to_json()?;
        match self.kv.set(&self.key, &blob) {
            Ok(()) => {
                self.dirty = false;
                Ok(())
            }
            Err(e) => {
                warn!(key = %self.key, error = %e, "schedule write failed, keeping change in memory");
                self.dirty = true;
                Err(e)
            }
        }
    }
}

//! Editor session: the open/submit/cancel/delete workflow around one class
//! form at a time.
//!
//! The controller never renders or prompts by itself. It reports through a
//! [`Render`] capability and asks a [`Confirm`] capability before deleting,
//! so front-ends and tests can plug in their own.

use crate::core::kv::KeyValueStore;
use crate::core::store::{ScheduleStore, Upserted};
use crate::core::validate::{Field, FieldError, check_subject, check_time};
use crate::errors::{AppError, AppResult};
use crate::models::{ClassSession, DayId, WeekSchedule, new_session_id, palette};
use tracing::debug;

/// Yes/no prompt shown before a class is deleted.
pub trait Confirm {
    fn confirm(&mut self, prompt: &str) -> bool;
}

impl<F: FnMut(&str) -> bool> Confirm for F {
    fn confirm(&mut self, prompt: &str) -> bool {
        self(prompt)
    }
}

/// Receives every visible change.
pub trait Render {
    fn week_changed(&mut self, week: &WeekSchedule);
    fn editor_changed(&mut self, state: &EditorState);
}

impl<R: Render + ?Sized> Render for &mut R {
    fn week_changed(&mut self, week: &WeekSchedule) {
        (**self).week_changed(week)
    }

    fn editor_changed(&mut self, state: &EditorState) {
        (**self).editor_changed(state)
    }
}

/// Renderer for callers that do not display anything.
#[derive(Debug, Default)]
pub struct NoRender;

impl Render for NoRender {
    fn week_changed(&mut self, _week: &WeekSchedule) {}
    fn editor_changed(&mut self, _state: &EditorState) {}
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum EditorState {
    #[default]
    Closed,
    Editing {
        day: DayId,
        /// `None` while creating a new class.
        existing: Option<ClassSession>,
    },
}

impl EditorState {
    pub fn is_editing(&self) -> bool {
        matches!(self, EditorState::Editing { .. })
    }
}

/// Raw values collected by the class form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormValues {
    pub subject: String,
    pub start_time: String,
    pub end_time: String,
    pub teacher: String,
    pub room: String,
    pub color: String,
}

impl FormValues {
    pub fn for_create(defaults: &FormDefaults) -> Self {
        Self {
            subject: String::new(),
            start_time: defaults.start_time.clone(),
            end_time: defaults.end_time.clone(),
            teacher: String::new(),
            room: String::new(),
            color: defaults.color.clone(),
        }
    }

    pub fn from_session(session: &ClassSession) -> Self {
        Self {
            subject: session.subject.clone(),
            start_time: session.start_time.clone(),
            end_time: session.end_time.clone(),
            teacher: session.teacher.clone().unwrap_or_default(),
            room: session.room.clone().unwrap_or_default(),
            color: session.color.clone(),
        }
    }

    /// Every failing field, in form order.
    pub fn validate(&self) -> Result<(), Vec<FieldError>> {
        let errors: Vec<FieldError> = [
            check_subject(&self.subject),
            check_time(Field::StartTime, &self.start_time),
            check_time(Field::EndTime, &self.end_time),
        ]
        .into_iter()
        .flatten()
        .collect();

        if errors.is_empty() { Ok(()) } else { Err(errors) }
    }

    fn into_session(self, id: String) -> ClassSession {
        ClassSession {
            id,
            subject: self.subject.trim().to_string(),
            start_time: self.start_time.trim().to_string(),
            end_time: self.end_time.trim().to_string(),
            teacher: non_blank(self.teacher),
            room: non_blank(self.room),
            color: self.color,
        }
    }
}

fn non_blank(s: String) -> Option<String> {
    let t = s.trim();
    (!t.is_empty()).then(|| t.to_string())
}

/// Values prefilled when a new class is created.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormDefaults {
    pub start_time: String,
    pub end_time: String,
    pub color: String,
}

impl Default for FormDefaults {
    fn default() -> Self {
        Self {
            start_time: "08:00".to_string(),
            end_time: "08:45".to_string(),
            color: palette::default_color().to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Saved {
    pub id: String,
    pub day: DayId,
    pub outcome: Upserted,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeleteOutcome {
    Deleted { id: String, day: DayId },
    Declined,
}

pub struct EditorController<R: Render> {
    state: EditorState,
    defaults: FormDefaults,
    renderer: R,
}

impl<R: Render> EditorController<R> {
    pub fn new(renderer: R) -> Self {
        Self::with_defaults(renderer, FormDefaults::default())
    }

    pub fn with_defaults(renderer: R, defaults: FormDefaults) -> Self {
        Self {
            state: EditorState::Closed,
            defaults,
            renderer,
        }
    }

    pub fn state(&self) -> &EditorState {
        &self.state
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    /// Values the form starts with for the current edit.
    pub fn form(&self) -> Option<FormValues> {
        match &self.state {
            EditorState::Closed => None,
            EditorState::Editing {
                existing: Some(s), ..
            } => Some(FormValues::from_session(s)),
            EditorState::Editing { existing: None, .. } => {
                Some(FormValues::for_create(&self.defaults))
            }
        }
    }

    /// Start creating a class in `day`. An edit already in progress is
    /// discarded.
    pub fn open_for_create(&mut self, day: DayId) {
        debug!(%day, "editor opened for create");
        self.transition(EditorState::Editing {
            day,
            existing: None,
        });
    }

    pub fn open_for_edit(&mut self, day: DayId, session: ClassSession) {
        debug!(%day, id = %session.id, "editor opened for edit");
        self.transition(EditorState::Editing {
            day,
            existing: Some(session),
        });
    }

    pub fn cancel(&mut self) {
        if !self.state.is_editing() {
            return;
        }
        debug!("editor cancelled");
        self.transition(EditorState::Closed);
    }

    /// Validate `form` and save it to `store`.
    ///
    /// On validation failure the store is untouched and the editor stays
    /// open. A storage error is returned after the editor closes: the store
    /// already holds the change in memory.
    pub fn submit<K: KeyValueStore>(
        &mut self,
        store: &mut ScheduleStore<K>,
        form: FormValues,
    ) -> AppResult<Saved> {
        let EditorState::Editing { day, existing } = &self.state else {
            return Err(AppError::NotEditing);
        };
        let day = *day;

        if let Err(errors) = form.validate() {
            debug!(%day, ?errors, "form rejected");
            return Err(AppError::Validation(errors));
        }

        let id = existing
            .as_ref()
            .map(|s| s.id.clone())
            .unwrap_or_else(new_session_id);
        let session = form.into_session(id.clone());

        let result = store.upsert(session, day);
        self.transition(EditorState::Closed);
        self.renderer.week_changed(store.list());

        let outcome = result?;
        Ok(Saved { id, day, outcome })
    }

    /// Delete the class being edited once `confirm` agrees.
    pub fn request_delete<K: KeyValueStore, C: Confirm + ?Sized>(
        &mut self,
        store: &mut ScheduleStore<K>,
        confirm: &mut C,
    ) -> AppResult<DeleteOutcome> {
        let (day, session) = match &self.state {
            EditorState::Closed => return Err(AppError::NotEditing),
            EditorState::Editing { existing: None, .. } => return Err(AppError::NothingToDelete),
            EditorState::Editing {
                day,
                existing: Some(s),
            } => (*day, s),
        };

        let prompt = format!(
            "Delete '{}' ({}-{}) from {}?",
            session.subject,
            session.start_time,
            session.end_time,
            day.display_name()
        );
        if !confirm.confirm(&prompt) {
            debug!(%day, id = %session.id, "delete declined");
            return Ok(DeleteOutcome::Declined);
        }

        let id = session.id.clone();
        let result = store.remove(&id, day);
        self.transition(EditorState::Closed);
        self.renderer.week_changed(store.list());

        result?;
        Ok(DeleteOutcome::Deleted { id, day })
    }

    fn transition(&mut self, next: EditorState) {
        self.state = next;
        self.renderer.editor_changed(&self.state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::kv::MemoryKv;

    #[derive(Default)]
    struct Recorder {
        weeks: Vec<WeekSchedule>,
        states: Vec<EditorState>,
    }

    impl Render for Recorder {
        fn week_changed(&mut self, week: &WeekSchedule) {
            self.weeks.push(week.clone());
        }

        fn editor_changed(&mut self, state: &EditorState) {
            self.states.push(state.clone());
        }
    }

    fn store() -> ScheduleStore<MemoryKv> {
        ScheduleStore::open(MemoryKv::new(), "schoolSchedule").unwrap()
    }

    fn monday_subjects(store: &ScheduleStore<MemoryKv>) -> Vec<&str> {
        store
            .lookup(DayId::Monday)
            .classes
            .iter()
            .map(|c| c.subject.as_str())
            .collect()
    }

    fn matematika(store: &ScheduleStore<MemoryKv>) -> ClassSession {
        store.lookup(DayId::Monday).classes[0].clone()
    }

    #[test]
    fn create_uses_defaults_and_fresh_id() {
        let mut store = store();
        let mut editor = EditorController::new(Recorder::default());
        editor.open_for_create(DayId::Wednesday);

        let mut form = editor.form().unwrap();
        assert_eq!(form.start_time, "08:00");
        assert_eq!(form.end_time, "08:45");
        assert_eq!(form.color, palette::default_color());

        form.subject = "  Biologiya ".into();
        form.room = " ".into();
        let saved = editor.submit(&mut store, form).unwrap();

        assert_eq!(saved.outcome, Upserted::Inserted);
        assert_eq!(saved.day, DayId::Wednesday);
        assert_eq!(*editor.state(), EditorState::Closed);

        let wed = &store.lookup(DayId::Wednesday).classes;
        assert_eq!(wed.len(), 1);
        assert_eq!(wed[0].id, saved.id);
        assert_eq!(wed[0].subject, "Biologiya");
        assert_eq!(wed[0].room, None);
        assert!(!["1", "2", "3"].contains(&saved.id.as_str()));
    }

    #[test]
    fn edit_keeps_original_id() {
        let mut store = store();
        let mut editor = EditorController::new(NoRender);
        editor.open_for_edit(DayId::Monday, matematika(&store));

        let mut form = editor.form().unwrap();
        assert_eq!(form.subject, "Matematika");
        assert_eq!(form.teacher, "Azizova N.");
        form.start_time = "10:00".into();
        form.end_time = "10:45".into();

        let saved = editor.submit(&mut store, form).unwrap();
        assert_eq!(saved.id, "1");
        assert_eq!(saved.outcome, Upserted::Replaced);
        assert_eq!(monday_subjects(&store), ["Ona tili", "Matematika"]);
    }

    #[test]
    fn empty_subject_is_rejected_and_editor_stays_open() {
        let mut store = store();
        let mut editor = EditorController::new(NoRender);
        let session = matematika(&store);
        editor.open_for_edit(DayId::Monday, session.clone());

        let mut form = editor.form().unwrap();
        form.subject = String::new();
        form.end_time = "9:45".into();

        match editor.submit(&mut store, form) {
            Err(AppError::Validation(errors)) => {
                assert_eq!(errors.len(), 2);
                assert_eq!(errors[0], FieldError::Missing(Field::Subject));
                assert_eq!(errors[1].field(), Field::EndTime);
            }
            other => panic!("expected validation error, got {other:?}"),
        }

        assert_eq!(monday_subjects(&store), ["Matematika", "Ona tili"]);
        assert_eq!(
            *editor.state(),
            EditorState::Editing {
                day: DayId::Monday,
                existing: Some(session)
            }
        );
    }

    #[test]
    fn cancel_discards_without_touching_store() {
        let mut store = store();
        let before = store.list().clone();
        let mut editor = EditorController::new(Recorder::default());
        editor.open_for_create(DayId::Friday);
        editor.cancel();

        assert_eq!(*editor.state(), EditorState::Closed);
        assert_eq!(store.list(), &before);
        assert!(editor.renderer().weeks.is_empty());
        assert!(matches!(
            editor.submit(&mut store, FormValues::for_create(&FormDefaults::default())),
            Err(AppError::NotEditing)
        ));
    }

    #[test]
    fn cancel_while_closed_reports_nothing() {
        let mut editor = EditorController::new(Recorder::default());
        editor.cancel();
        assert!(editor.renderer().states.is_empty());

        editor.open_for_create(DayId::Monday);
        editor.cancel();
        editor.cancel();
        assert_eq!(editor.renderer().states.len(), 2);
        assert_eq!(editor.renderer().states[1], EditorState::Closed);
    }

    #[test]
    fn confirmed_delete_removes_class() {
        let mut store = store();
        let mut editor = EditorController::new(Recorder::default());
        editor.open_for_edit(DayId::Monday, matematika(&store));

        let mut asked = Vec::new();
        let mut yes = |p: &str| {
            asked.push(p.to_string());
            true
        };
        let out = editor.request_delete(&mut store, &mut yes).unwrap();

        assert_eq!(
            out,
            DeleteOutcome::Deleted {
                id: "1".into(),
                day: DayId::Monday
            }
        );
        assert_eq!(asked, ["Delete 'Matematika' (08:00-08:45) from Dushanba?"]);
        assert_eq!(monday_subjects(&store), ["Ona tili"]);
        assert_eq!(*editor.state(), EditorState::Closed);
        assert_eq!(editor.renderer().weeks.len(), 1);
    }

    #[test]
    fn declined_delete_keeps_editing() {
        let mut store = store();
        let mut editor = EditorController::new(NoRender);
        editor.open_for_edit(DayId::Monday, matematika(&store));

        let out = editor.request_delete(&mut store, &mut |_: &str| false).unwrap();
        assert_eq!(out, DeleteOutcome::Declined);
        assert!(editor.state().is_editing());
        assert_eq!(monday_subjects(&store), ["Matematika", "Ona tili"]);
    }

    #[test]
    fn delete_needs_an_existing_class() {
        let mut store = store();
        let mut editor = EditorController::new(NoRender);
        let mut yes = |_: &str| true;

        assert!(matches!(
            editor.request_delete(&mut store, &mut yes),
            Err(AppError::NotEditing)
        ));

        editor.open_for_create(DayId::Monday);
        assert!(matches!(
            editor.request_delete(&mut store, &mut yes),
            Err(AppError::NothingToDelete)
        ));
        assert!(editor.state().is_editing());
    }

    #[test]
    fn reopening_replaces_pending_edit() {
        let store = store();
        let mut editor = EditorController::new(Recorder::default());
        editor.open_for_create(DayId::Monday);
        editor.open_for_edit(DayId::Monday, matematika(&store));

        assert_eq!(editor.form().unwrap().subject, "Matematika");
        assert_eq!(editor.renderer().states.len(), 2);
    }

    #[test]
    fn storage_failure_closes_editor_but_reports_error() {
        let mut kv = MemoryKv::new();
        kv.fail_writes = true;
        let mut store = ScheduleStore::open(kv, "schoolSchedule").unwrap();
        let mut editor = EditorController::new(NoRender);
        editor.open_for_create(DayId::Monday);

        let mut form = editor.form().unwrap();
        form.subject = "Fizika".into();
        form.start_time = "08:30".into();
        form.end_time = "09:15".into();

        assert!(matches!(
            editor.submit(&mut store, form),
            Err(AppError::Storage { .. })
        ));
        assert_eq!(*editor.state(), EditorState::Closed);
        assert_eq!(monday_subjects(&store), ["Matematika", "Fizika", "Ona tili"]);
        assert!(store.is_dirty());
    }
}

//! Delete confirmation for a single Balance Sheet Item Type.
//!
//! The workflow owns no remote state. It reads the fetched snapshot through an
//! [`EntityReader`], issues requests through an [`EntityDispatch`] and leaves the
//! page through a [`Navigate`]. The hosting component feeds store changes back
//! in via [`DeleteWorkflow::observe`].

use crate::entity::{EntityId, EntitySnapshot};
use thiserror::Error;
use tracing::{debug, info};

pub const COLLECTION_PATH: &str = "/balance-sheet-item-type";
pub const DIALOG_TITLE: &str = "Confirm delete operation";

const ENTITY_LABEL: &str = "Balance Sheet Item Type";

pub trait EntityReader {
    fn snapshot(&self) -> EntitySnapshot;
}

pub trait EntityDispatch {
    fn get_entity(&self, id: &str);
    fn delete_entity(&self, id: EntityId);
}

pub trait Navigate {
    fn navigate_to(&self, path: &str);
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum WorkflowError {
    #[error("Balance Sheet Item Type is not loaded yet")]
    EntityNotLoaded,
}

#[derive(Clone, Copy, PartialEq, Eq, Default, Debug)]
pub enum Phase {
    #[default]
    AwaitingConfirmation,
    Deleting,
}

/// Everything the dialog needs to draw itself.
#[derive(Clone, PartialEq, Debug)]
pub struct DialogView {
    pub is_open: bool,
    pub title: &'static str,
    pub question: String,
    pub can_delete: bool,
    pub is_deleting: bool,
    pub fetch_error: Option<String>,
}

pub struct DeleteWorkflow<R, D, N> {
    reader: R,
    dispatch: D,
    navigator: N,
    activated_id: Option<String>,
    is_modal_loaded: bool,
    phase: Phase,
}

impl<R, D, N> DeleteWorkflow<R, D, N>
where
    R: EntityReader,
    D: EntityDispatch,
    N: Navigate,
{
    pub fn new(reader: R, dispatch: D, navigator: N) -> Self {
        Self {
            reader,
            dispatch,
            navigator,
            activated_id: None,
            is_modal_loaded: false,
            phase: Phase::AwaitingConfirmation,
        }
    }

    #[allow(dead_code)]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    #[allow(dead_code)]
    pub fn is_modal_loaded(&self) -> bool {
        self.is_modal_loaded
    }

    /// Requests the entity named by the route.
    ///
    /// Repeating the same id is a no-op. A different id starts the dialog over
    /// for that entity.
    pub fn activate(&mut self, entity_id: &str) {
        if self.activated_id.as_deref() == Some(entity_id) {
            return;
        }

        info!("Opening delete dialog for {} {}", ENTITY_LABEL, entity_id);
        self.dispatch.get_entity(entity_id);
        self.activated_id = Some(entity_id.to_string());
        self.is_modal_loaded = true;
        self.phase = Phase::AwaitingConfirmation;
    }

    pub fn view(&self) -> DialogView {
        let snapshot = self.reader.snapshot();
        let id = snapshot.id();
        let fetch_error = match snapshot {
            EntitySnapshot::FetchFailed(error) => Some(error),
            _ => None,
        };
        let question = match id {
            Some(id) => format!("Are you sure you want to delete {} {}?", ENTITY_LABEL, id),
            None => format!("Are you sure you want to delete {}?", ENTITY_LABEL),
        };

        DialogView {
            is_open: true,
            title: DIALOG_TITLE,
            can_delete: id.is_some(),
            is_deleting: self.phase == Phase::Deleting,
            question,
            fetch_error,
        }
    }

    pub fn cancel(&self) {
        debug!("Delete dialog closed without deleting");
        self.navigator.navigate_to(COLLECTION_PATH);
    }

    /// Deletes the entity held in the fetched snapshot.
    ///
    /// Every call dispatches; repeated clicks are not collapsed.
    pub fn confirm_delete(&mut self) -> Result<(), WorkflowError> {
        let id = self
            .reader
            .snapshot()
            .id()
            .ok_or(WorkflowError::EntityNotLoaded)?;

        info!("Deleting {} {}", ENTITY_LABEL, id);
        self.dispatch.delete_entity(id);
        self.phase = Phase::Deleting;
        Ok(())
    }

    /// Reacts to the store's delete-success flag. Returns true when it navigated.
    pub fn observe(&mut self, update_success: bool) -> bool {
        if !(update_success && self.is_modal_loaded) {
            return false;
        }

        info!("{} deleted, returning to list", ENTITY_LABEL);
        self.navigator.navigate_to(COLLECTION_PATH);
        self.is_modal_loaded = false;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entity::BalanceSheetItemType;
    use crate::state::{Action, EntityState};
    use std::cell::RefCell;
    use std::rc::Rc;

    #[derive(Clone, Debug, PartialEq)]
    enum Request {
        Get(String),
        Delete(EntityId),
    }

    /// In-memory stand-in for the store, the dispatcher and the router.
    #[derive(Clone, Default)]
    struct FakeStore {
        snapshot: Rc<RefCell<EntitySnapshot>>,
        requests: Rc<RefCell<Vec<Request>>>,
        navigations: Rc<RefCell<Vec<String>>>,
    }

    impl FakeStore {
        fn resolve_fetch(&self, entity: BalanceSheetItemType) {
            *self.snapshot.borrow_mut() = EntitySnapshot::Loaded(entity);
        }

        fn requests(&self) -> Vec<Request> {
            self.requests.borrow().clone()
        }

        fn navigations(&self) -> Vec<String> {
            self.navigations.borrow().clone()
        }
    }

    impl EntityReader for FakeStore {
        fn snapshot(&self) -> EntitySnapshot {
            self.snapshot.borrow().clone()
        }
    }

    impl EntityDispatch for FakeStore {
        fn get_entity(&self, id: &str) {
            self.requests.borrow_mut().push(Request::Get(id.to_string()));
        }

        fn delete_entity(&self, id: EntityId) {
            self.requests.borrow_mut().push(Request::Delete(id));
        }
    }

    impl Navigate for FakeStore {
        fn navigate_to(&self, path: &str) {
            self.navigations.borrow_mut().push(path.to_string());
        }
    }

    fn workflow(store: &FakeStore) -> DeleteWorkflow<FakeStore, FakeStore, FakeStore> {
        DeleteWorkflow::new(store.clone(), store.clone(), store.clone())
    }

    fn liabilities(id: EntityId) -> BalanceSheetItemType {
        BalanceSheetItemType {
            id: Some(id),
            item_number: "BS-042".to_string(),
            short_description: Some("Current Liabilities".to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn test_activate_dispatches_one_fetch() {
        let store = FakeStore::default();
        let mut workflow = workflow(&store);

        workflow.activate("42");
        workflow.activate("42");

        assert_eq!(store.requests(), vec![Request::Get("42".to_string())]);
        assert!(workflow.is_modal_loaded());
    }

    #[test]
    fn test_view_is_open_before_fetch_resolves() {
        let store = FakeStore::default();
        let mut workflow = workflow(&store);
        workflow.activate("42");

        let view = workflow.view();
        assert!(view.is_open);
        assert_eq!(view.title, "Confirm delete operation");
        assert_eq!(
            view.question,
            "Are you sure you want to delete Balance Sheet Item Type?"
        );
        assert!(!view.can_delete);
        assert!(!view.is_deleting);
        assert!(view.fetch_error.is_none());
    }

    #[test]
    fn test_view_stays_open_after_fetch_failure() {
        let store = FakeStore::default();
        let mut workflow = workflow(&store);
        workflow.activate("999");
        *store.snapshot.borrow_mut() = EntitySnapshot::FetchFailed("not found".to_string());

        let view = workflow.view();
        assert!(view.is_open);
        assert!(!view.can_delete);
        assert_eq!(view.fetch_error.as_deref(), Some("not found"));
    }

    #[test]
    fn test_cancel_navigates_without_deleting() {
        let store = FakeStore::default();
        let mut workflow = workflow(&store);
        workflow.activate("42");
        store.resolve_fetch(liabilities(42));

        workflow.cancel();

        assert_eq!(store.navigations(), vec![COLLECTION_PATH.to_string()]);
        assert!(
            !store
                .requests()
                .iter()
                .any(|r| matches!(r, Request::Delete(_)))
        );
    }

    #[test]
    fn test_confirm_delete_uses_snapshot_id() {
        let store = FakeStore::default();
        let mut workflow = workflow(&store);
        workflow.activate("0042");
        store.resolve_fetch(liabilities(42));

        workflow.confirm_delete().unwrap();

        assert_eq!(
            store.requests(),
            vec![Request::Get("0042".to_string()), Request::Delete(42)]
        );
        assert_eq!(workflow.phase(), Phase::Deleting);
        assert!(workflow.view().is_deleting);
    }

    #[test]
    fn test_confirm_delete_before_fetch_resolves() {
        let store = FakeStore::default();
        let mut workflow = workflow(&store);
        workflow.activate("42");

        assert_eq!(workflow.confirm_delete(), Err(WorkflowError::EntityNotLoaded));
        assert_eq!(store.requests(), vec![Request::Get("42".to_string())]);
        assert_eq!(workflow.phase(), Phase::AwaitingConfirmation);
    }

    #[test]
    fn test_repeated_confirm_dispatches_each_time() {
        let store = FakeStore::default();
        let mut workflow = workflow(&store);
        workflow.activate("42");
        store.resolve_fetch(liabilities(42));

        workflow.confirm_delete().unwrap();
        workflow.confirm_delete().unwrap();

        let deletes = store
            .requests()
            .into_iter()
            .filter(|r| matches!(r, Request::Delete(42)))
            .count();
        assert_eq!(deletes, 2);
    }

    #[test]
    fn test_stale_success_before_activation_is_ignored() {
        let store = FakeStore::default();
        let mut workflow = workflow(&store);

        assert!(!workflow.observe(true));
        assert!(store.navigations().is_empty());

        workflow.activate("42");
        assert!(!workflow.observe(false));
        assert!(store.navigations().is_empty());

        assert!(workflow.observe(true));
        assert_eq!(store.navigations(), vec![COLLECTION_PATH.to_string()]);
    }

    #[test]
    fn test_success_navigates_once() {
        let store = FakeStore::default();
        let mut workflow = workflow(&store);
        workflow.activate("42");
        store.resolve_fetch(liabilities(42));
        workflow.confirm_delete().unwrap();

        assert!(workflow.observe(true));
        assert!(!workflow.is_modal_loaded());
        assert!(!workflow.observe(true));
        assert!(!workflow.observe(false));
        assert!(!workflow.observe(true));

        assert_eq!(store.navigations(), vec![COLLECTION_PATH.to_string()]);
    }

    #[test]
    fn test_failed_delete_keeps_dialog_open() {
        let store = FakeStore::default();
        let mut workflow = workflow(&store);
        workflow.activate("42");
        store.resolve_fetch(liabilities(42));
        workflow.confirm_delete().unwrap();

        assert!(!workflow.observe(false));

        let view = workflow.view();
        assert!(view.is_open);
        assert!(view.can_delete);
        assert!(store.navigations().is_empty());

        workflow.confirm_delete().unwrap();
        assert!(workflow.observe(true));
    }

    #[test]
    fn test_delete_scenario_for_current_liabilities() {
        let store = FakeStore::default();
        let mut workflow = workflow(&store);

        workflow.activate("42");
        store.resolve_fetch(liabilities(42));
        assert_eq!(
            workflow.view().question,
            "Are you sure you want to delete Balance Sheet Item Type 42?"
        );

        workflow.confirm_delete().unwrap();
        assert!(workflow.observe(true));

        assert_eq!(
            store.requests(),
            vec![Request::Get("42".to_string()), Request::Delete(42)]
        );
        assert_eq!(store.navigations(), vec!["/balance-sheet-item-type".to_string()]);
    }

    #[test]
    fn test_stale_success_is_cleared_by_fetch_pending() {
        let store = FakeStore::default();
        let mut workflow = workflow(&store);
        let mut state = EntityState::new();
        state.reduce(Action::DeleteEntityFulfilled {
            id: 7,
            alert: None,
        });
        assert!(state.update_success);

        // The dialog observes first, then activates, and the fetch it
        // dispatches reduces FetchEntityPending before the next observation.
        assert!(!workflow.observe(state.update_success));
        workflow.activate("42");
        state.reduce(Action::FetchEntityPending);
        assert!(!workflow.observe(state.update_success));
        assert!(store.navigations().is_empty());

        state.reduce(Action::FetchEntityFulfilled(liabilities(42)));
        state.reduce(Action::DeleteEntityPending);
        state.reduce(Action::DeleteEntityFulfilled {
            id: 42,
            alert: None,
        });
        assert!(workflow.observe(state.update_success));
        assert_eq!(store.navigations(), vec![COLLECTION_PATH.to_string()]);
    }

    #[test]
    fn test_activate_with_new_id_restarts_dialog() {
        let store = FakeStore::default();
        let mut workflow = workflow(&store);
        workflow.activate("1");
        store.resolve_fetch(liabilities(1));
        workflow.confirm_delete().unwrap();
        assert_eq!(workflow.phase(), Phase::Deleting);

        workflow.activate("2");
        assert_eq!(workflow.phase(), Phase::AwaitingConfirmation);
        assert!(workflow.is_modal_loaded());
        store.resolve_fetch(liabilities(2));
        workflow.confirm_delete().unwrap();

        assert_eq!(
            store.requests(),
            vec![
                Request::Get("1".to_string()),
                Request::Delete(1),
                Request::Get("2".to_string()),
                Request::Delete(2),
            ]
        );
    }
}

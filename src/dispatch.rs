use crate::entity::{ApiClient, EntityId, EntitySnapshot, PageRequest};
use crate::state::{Action, EntityState};
use crate::workflow::{EntityDispatch, EntityReader, Navigate};
use dioxus::prelude::*;
use dioxus::router::Navigator;
use tracing::warn;

/// Runs entity requests against the backend and reduces their outcome into the store.
///
/// The pending action is applied before the request is spawned, so readers see
/// the request in flight as soon as the call returns.
#[derive(Clone)]
pub struct StoreDispatch {
    store: Signal<EntityState>,
    client: ApiClient,
}

impl StoreDispatch {
    pub fn new(store: Signal<EntityState>, client: ApiClient) -> Self {
        Self { store, client }
    }

    pub fn get_entities(&self, page: PageRequest) {
        let mut store = self.store;
        let client = self.client.clone();

        store.write().reduce(Action::FetchEntitiesPending);
        spawn(async move {
            let action = match client.get_entities(&page).await {
                Ok(page) => Action::FetchEntitiesFulfilled(page),
                Err(e) => Action::FetchEntitiesRejected(e.to_string()),
            };
            store.write().reduce(action);
        });
    }
}

impl EntityDispatch for StoreDispatch {
    fn get_entity(&self, id: &str) {
        let mut store = self.store;
        let client = self.client.clone();
        let id = id.to_string();

        store.write().reduce(Action::FetchEntityPending);
        spawn(async move {
            let action = match client.get_entity(&id).await {
                Ok(entity) => Action::FetchEntityFulfilled(entity),
                Err(e) => Action::FetchEntityRejected(e.to_string()),
            };
            store.write().reduce(action);
        });
    }

    fn delete_entity(&self, id: EntityId) {
        let mut store = self.store;
        let client = self.client.clone();

        store.write().reduce(Action::DeleteEntityPending);
        spawn(async move {
            let action = match client.delete_entity(id).await {
                Ok(alert) => Action::DeleteEntityFulfilled { id, alert },
                Err(e) => Action::DeleteEntityRejected(e.to_string()),
            };
            store.write().reduce(action);
        });
    }
}

impl EntityReader for Signal<EntityState> {
    fn snapshot(&self) -> EntitySnapshot {
        self.read().entity.clone()
    }
}

impl Navigate for Navigator {
    fn navigate_to(&self, path: &str) {
        if self.push(path.to_string()).is_some() {
            warn!("Navigation to {} failed", path);
        }
    }
}

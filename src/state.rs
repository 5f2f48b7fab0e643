use crate::entity::{BalanceSheetItemType, EntityId, EntityPage, EntitySnapshot};
use tracing::{debug, warn};

#[derive(Clone, Debug, PartialEq)]
pub struct Message {
    pub text: String,
    pub is_error: bool,
}

impl Message {
    pub fn success(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            is_error: false,
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            is_error: true,
        }
    }
}

#[derive(Clone, Debug)]
pub enum Action {
    FetchEntityPending,
    FetchEntityFulfilled(BalanceSheetItemType),
    FetchEntityRejected(String),
    FetchEntitiesPending,
    FetchEntitiesFulfilled(EntityPage),
    FetchEntitiesRejected(String),
    DeleteEntityPending,
    DeleteEntityFulfilled {
        id: EntityId,
        alert: Option<String>,
    },
    DeleteEntityRejected(String),
    #[allow(dead_code)]
    Reset,
}

/// Client-side slice for the Balance Sheet Item Type entity.
///
/// Only [`EntityState::reduce`] mutates the entity fields; views observe them.
#[derive(Clone, Debug, PartialEq)]
pub struct EntityState {
    pub entity: EntitySnapshot,
    pub entities: Vec<BalanceSheetItemType>,
    pub total_items: u64,
    pub loading: bool,
    pub updating: bool,
    pub update_success: bool,
    pub error_message: Option<String>,
    pub message: Option<Message>,
}

impl EntityState {
    pub fn new() -> Self {
        Self {
            entity: EntitySnapshot::NotLoaded,
            entities: Vec::new(),
            total_items: 0,
            loading: false,
            updating: false,
            update_success: false,
            error_message: None,
            message: None,
        }
    }

    pub fn set_message(&mut self, message: Message) {
        self.message = Some(message);
    }

    pub fn clear_message(&mut self) {
        self.message = None;
    }

    pub fn reduce(&mut self, action: Action) {
        debug!("Reducing {:?}", action);

        match action {
            Action::FetchEntityPending => {
                self.begin_fetch();
                self.entity = EntitySnapshot::NotLoaded;
            }
            Action::FetchEntitiesPending => self.begin_fetch(),
            Action::FetchEntityFulfilled(entity) => {
                self.loading = false;
                self.entity = EntitySnapshot::Loaded(entity);
            }
            Action::FetchEntityRejected(error) => {
                warn!("Fetching Balance Sheet Item Type failed: {}", error);
                self.loading = false;
                self.entity = EntitySnapshot::FetchFailed(error.clone());
                self.fail(format!("Failed to load Balance Sheet Item Type: {}", error));
            }
            Action::FetchEntitiesFulfilled(page) => {
                self.loading = false;
                self.entities = page.items;
                self.total_items = page.total_items;
            }
            Action::FetchEntitiesRejected(error) => {
                warn!("Fetching Balance Sheet Item Types failed: {}", error);
                self.loading = false;
                self.fail(format!("Failed to load Balance Sheet Item Types: {}", error));
            }
            Action::DeleteEntityPending => {
                self.error_message = None;
                self.update_success = false;
                self.updating = true;
            }
            Action::DeleteEntityFulfilled { id, alert } => {
                self.updating = false;
                self.update_success = true;
                self.entity = EntitySnapshot::NotLoaded;
                if let Some(position) = self.entities.iter().position(|e| e.id == Some(id)) {
                    self.entities.remove(position);
                    self.total_items = self.total_items.saturating_sub(1);
                }
                let text =
                    alert.unwrap_or_else(|| format!("Balance Sheet Item Type {} deleted", id));
                self.set_message(Message::success(text));
            }
            Action::DeleteEntityRejected(error) => {
                warn!("Deleting Balance Sheet Item Type failed: {}", error);
                self.updating = false;
                self.update_success = false;
                self.fail(format!("Failed to delete Balance Sheet Item Type: {}", error));
            }
            Action::Reset => *self = Self::new(),
        }
    }

    fn begin_fetch(&mut self) {
        self.error_message = None;
        self.update_success = false;
        self.loading = true;
    }

    fn fail(&mut self, text: String) {
        self.error_message = Some(text.clone());
        self.set_message(Message::error(text));
    }
}

impl Default for EntityState {
    fn default() -> Self {
        Self::new()
    }
}

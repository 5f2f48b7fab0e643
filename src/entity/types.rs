use serde::{Deserialize, Serialize};

pub type EntityId = i64;

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct TransactionAccountRef {
    pub id: EntityId,
    #[serde(default)]
    pub account_name: Option<String>,
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct ParentItemRef {
    pub id: EntityId,
    #[serde(default)]
    pub item_number: Option<String>,
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Default, Debug)]
#[serde(rename_all = "camelCase")]
pub struct BalanceSheetItemType {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<EntityId>,
    #[serde(default)]
    pub item_sequence: i32,
    #[serde(default)]
    pub item_number: String,
    #[serde(default)]
    pub short_description: Option<String>,
    #[serde(default)]
    pub transaction_account: Option<TransactionAccountRef>,
    #[serde(default)]
    pub parent_item: Option<ParentItemRef>,
}

impl BalanceSheetItemType {
    pub fn transaction_account_name(&self) -> String {
        self.transaction_account
            .as_ref()
            .map(|a| a.account_name.clone().unwrap_or_else(|| a.id.to_string()))
            .unwrap_or_default()
    }

    pub fn parent_item_number(&self) -> String {
        self.parent_item
            .as_ref()
            .map(|p| p.item_number.clone().unwrap_or_else(|| p.id.to_string()))
            .unwrap_or_default()
    }
}

/// What the store currently knows about the entity targeted by a dialog.
#[derive(Clone, PartialEq, Default, Debug)]
pub enum EntitySnapshot {
    #[default]
    NotLoaded,
    Loaded(BalanceSheetItemType),
    FetchFailed(String),
}

impl EntitySnapshot {
    pub fn entity(&self) -> Option<&BalanceSheetItemType> {
        match self {
            EntitySnapshot::Loaded(entity) => Some(entity),
            _ => None,
        }
    }

    pub fn id(&self) -> Option<EntityId> {
        self.entity().and_then(|e| e.id)
    }
}

#[derive(Clone, PartialEq, Eq, Debug)]
pub struct PageRequest {
    pub page: u32,
    pub size: u32,
    pub sort: String,
}

impl PageRequest {
    pub fn new(page: u32, size: u32) -> Self {
        Self {
            page,
            size: size.max(1),
            sort: "id,asc".to_string(),
        }
    }

    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        vec![
            ("page", self.page.to_string()),
            ("size", self.size.to_string()),
            ("sort", self.sort.clone()),
        ]
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self::new(0, AppConfig::DEFAULT_PAGE_SIZE)
    }
}

#[derive(Clone, PartialEq, Default, Debug)]
pub struct EntityPage {
    pub items: Vec<BalanceSheetItemType>,
    pub total_items: u64,
}

#[derive(Clone, Copy, PartialEq, Serialize, Deserialize, Debug)]
#[serde(default)]
pub struct WindowState {
    pub width: u32,
    pub height: u32,
}

impl WindowState {
    pub const MIN_WIDTH: u32 = 640;
    pub const MIN_HEIGHT: u32 = 420;

    pub fn clamped(&self) -> Self {
        Self {
            width: self.width.max(Self::MIN_WIDTH),
            height: self.height.max(Self::MIN_HEIGHT),
        }
    }
}

impl Default for WindowState {
    fn default() -> Self {
        Self {
            width: 960,
            height: 640,
        }
    }
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
#[serde(default)]
pub struct AppConfig {
    pub api_base_url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auth_token: Option<String>,
    /// Application name the backend uses in its `X-<name>-alert` headers.
    pub app_name: String,
    pub page_size: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub window: Option<WindowState>,
}

impl AppConfig {
    pub const DEFAULT_PAGE_SIZE: u32 = 20;

    pub fn new() -> Self {
        Self::default()
    }

    pub fn page_size(&self) -> u32 {
        self.page_size.clamp(1, 100)
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: "http://localhost:8080".to_string(),
            auth_token: None,
            app_name: "bookKeeperErpApp".to_string(),
            page_size: Self::DEFAULT_PAGE_SIZE,
            window: None,
        }
    }
}

use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Status {
    Fulfilled,
    InProgress,
    Delayed,
    /// A status the tracker does not know about, kept verbatim.
    Unrecognized(String),
}

impl Status {
    pub fn as_str(&self) -> &str {
        match self {
            Status::Fulfilled => "fulfilled",
            Status::InProgress => "in-progress",
            Status::Delayed => "delayed",
            Status::Unrecognized(raw) => raw.as_str(),
        }
    }
}

impl From<String> for Status {
    fn from(value: String) -> Self {
        match value.as_str() {
            "fulfilled" => Status::Fulfilled,
            "in-progress" => Status::InProgress,
            "delayed" => Status::Delayed,
            _ => Status::Unrecognized(value),
        }
    }
}

impl From<Status> for String {
    fn from(status: Status) -> Self {
        match status {
            Status::Unrecognized(raw) => raw,
            known => known.as_str().to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PromiseRecord {
    pub id: u32,
    pub politician: String,
    pub promise: String,
    pub category: String,
    pub status: Status,
    pub progress: u8,
    pub date_promised: String,
    pub last_update: String,
    pub evidence: String,
    #[serde(rename = "state")]
    pub region: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StatColor {
    Blue,
    Green,
    Yellow,
    Purple,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatRecord {
    pub label: String,
    pub value: String,
    pub icon: String,
    pub color: StatColor,
}

/// Category filter shown as a tab above the promise list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Tab {
    #[default]
    All,
    Fulfilled,
    InProgress,
    Delayed,
}

pub const TABS: [Tab; 4] = [Tab::All, Tab::Fulfilled, Tab::InProgress, Tab::Delayed];

impl Tab {
    pub fn as_str(self) -> &'static str {
        match self {
            Tab::All => "all",
            Tab::Fulfilled => "fulfilled",
            Tab::InProgress => "in-progress",
            Tab::Delayed => "delayed",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        TABS.into_iter().find(|tab| tab.as_str() == value)
    }

    pub fn label(self) -> &'static str {
        match self {
            Tab::All => "All",
            Tab::Fulfilled => "Fulfilled",
            Tab::InProgress => "In progress",
            Tab::Delayed => "Delayed",
        }
    }

    /// Whether a record with `status` belongs under this tab.
    pub fn admits(self, status: &Status) -> bool {
        match self {
            Tab::All => true,
            Tab::Fulfilled => *status == Status::Fulfilled,
            Tab::InProgress => *status == Status::InProgress,
            Tab::Delayed => *status == Status::Delayed,
        }
    }
}

impl fmt::Display for Tab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct ViewState {
    pub active_tab: Tab,
    pub search_query: String,
}

impl ViewState {
    pub fn new(active_tab: Tab, search_query: impl Into<String>) -> Self {
        Self {
            active_tab,
            search_query: search_query.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NavPanel {
    #[default]
    Collapsed,
    Expanded,
}

impl NavPanel {
    pub fn toggled(self) -> Self {
        match self {
            NavPanel::Collapsed => NavPanel::Expanded,
            NavPanel::Expanded => NavPanel::Collapsed,
        }
    }

    pub fn is_expanded(self) -> bool {
        self == NavPanel::Expanded
    }
}

#[derive(Debug, Deserialize)]
pub struct PromiseQuery {
    pub tab: Option<String>,
    pub q: Option<String>,
}

/// Raw event body posted by the page script.
#[derive(Debug, Deserialize)]
pub struct EventRequest {
    #[serde(rename = "type")]
    pub kind: String,
    pub tab: Option<String>,
    pub query: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InteractionEvent {
    SelectTab { tab: Tab },
    Search { query: String },
    ToggleMenu,
}

#[derive(Debug, Serialize)]
pub struct ContentUpdate {
    pub target: String,
    pub html: String,
}

#[derive(Debug, Serialize)]
pub struct VisibilityUpdate {
    pub target: String,
    pub hidden: bool,
}

#[derive(Debug, Serialize)]
pub struct EventResponse {
    pub revision: u64,
    pub updates: Vec<ContentUpdate>,
    pub visibility: Vec<VisibilityUpdate>,
    pub refresh_icons: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tab_parse_round_trips_known_values() {
        for tab in TABS {
            assert_eq!(Tab::parse(tab.as_str()), Some(tab));
        }
        assert_eq!(Tab::parse("archived"), None);
        assert_eq!(Tab::parse("All"), None);
    }

    #[test]
    fn unknown_status_deserializes_as_unrecognized() {
        let status: Status = serde_json::from_str("\"abandoned\"").unwrap();
        assert_eq!(status, Status::Unrecognized("abandoned".into()));
        let status: Status = serde_json::from_str("\"in-progress\"").unwrap();
        assert_eq!(status, Status::InProgress);
    }

    #[test]
    fn unknown_status_serializes_verbatim() {
        let status = Status::Unrecognized("On Hold".into());
        assert_eq!(serde_json::to_string(&status).unwrap(), "\"On Hold\"");
        assert_eq!(serde_json::to_string(&Status::Delayed).unwrap(), "\"delayed\"");
    }

    #[test]
    fn unrecognized_status_only_shows_under_all() {
        let unknown = Status::Unrecognized("paused".into());
        assert!(Tab::All.admits(&unknown));
        for tab in [Tab::Fulfilled, Tab::InProgress, Tab::Delayed] {
            assert!(!tab.admits(&unknown));
        }
    }

    #[test]
    fn event_request_reads_type_field() {
        let request: EventRequest =
            serde_json::from_str(r#"{"type":"select_tab","tab":"in-progress"}"#).unwrap();
        assert_eq!(request.kind, "select_tab");
        assert_eq!(request.tab.as_deref(), Some("in-progress"));
        assert!(request.query.is_none());
    }

    #[test]
    fn nav_panel_toggle_twice_restores_state() {
        let start = NavPanel::default();
        assert_eq!(start, NavPanel::Collapsed);
        assert_eq!(start.toggled().toggled(), start);
    }
}

use serde::{Deserialize, Serialize};

use crate::models::{
    Choice, Client, ClientStatus, Deal, Priority, Project, ProjectStatus, RecordError, RecordId,
    Ticket, TicketStatus,
};
use crate::services::store::CrmStore;

#[cfg(test)]
#[path = "filter_test.rs"]
mod filter_test;

/// Records exposing the text fields a free-text query is matched against.
pub trait Searchable {
    fn search_fields(&self) -> Vec<&str>;
}

impl Searchable for Client {
    fn search_fields(&self) -> Vec<&str> {
        vec![self.name.as_str(), self.company.as_str(), self.email.as_str()]
    }
}

impl Searchable for Deal {
    fn search_fields(&self) -> Vec<&str> {
        vec![self.title.as_str(), self.company.as_str()]
    }
}

impl Searchable for Project {
    fn search_fields(&self) -> Vec<&str> {
        vec![self.name.as_str(), self.client.as_str()]
    }
}

impl Searchable for Ticket {
    fn search_fields(&self) -> Vec<&str> {
        vec![self.title.as_str(), self.client.as_str(), self.id.as_str()]
    }
}

pub(crate) fn normalize_filter_value(value: &str) -> String {
    value.trim().to_lowercase()
}

/// Case-insensitive substring match; a blank query matches everything.
pub fn matches_query<R: Searchable>(record: &R, query: &str) -> bool {
    let needle = normalize_filter_value(query);
    if needle.is_empty() {
        return true;
    }
    record
        .search_fields()
        .iter()
        .any(|field| field.to_lowercase().contains(&needle))
}

/// Categorical select-box value: `all` or one enum member.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Selector<T> {
    All,
    Only(T),
}

impl<T> Default for Selector<T> {
    fn default() -> Self {
        Self::All
    }
}

impl<T: Choice> Selector<T> {
    pub const ALL_VALUE: &'static str = "all";

    pub fn parse(value: &str) -> Result<Self, RecordError> {
        let trimmed = value.trim();
        if trimmed.is_empty() || trimmed.eq_ignore_ascii_case(Self::ALL_VALUE) {
            return Ok(Self::All);
        }
        T::parse(trimmed).map(Self::Only)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::All => Self::ALL_VALUE,
            Self::Only(value) => value.as_str(),
        }
    }

    pub fn admits(&self, value: T) -> bool {
        match self {
            Self::All => true,
            Self::Only(expected) => *expected == value,
        }
    }
}

pub trait RecordFilter<R> {
    fn matches(&self, record: &R) -> bool;

    /// Visible subset, original order preserved.
    fn apply<'a>(&self, records: &'a [R]) -> Vec<&'a R> {
        records
            .iter()
            .filter(|record| self.matches(record))
            .collect()
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ClientFilter {
    pub query: String,
    pub status: Selector<ClientStatus>,
}

impl RecordFilter<Client> for ClientFilter {
    fn matches(&self, record: &Client) -> bool {
        matches_query(record, &self.query) && self.status.admits(record.status)
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DealFilter {
    pub query: String,
    pub priority: Selector<Priority>,
}

impl RecordFilter<Deal> for DealFilter {
    fn matches(&self, record: &Deal) -> bool {
        matches_query(record, &self.query) && self.priority.admits(record.priority)
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ProjectFilter {
    pub query: String,
    pub status: Selector<ProjectStatus>,
}

impl RecordFilter<Project> for ProjectFilter {
    fn matches(&self, record: &Project) -> bool {
        matches_query(record, &self.query) && self.status.admits(record.status)
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TicketFilter {
    pub query: String,
    pub status: Selector<TicketStatus>,
    pub priority: Selector<Priority>,
}

impl RecordFilter<Ticket> for TicketFilter {
    fn matches(&self, record: &Ticket) -> bool {
        matches_query(record, &self.query)
            && self.status.admits(record.status)
            && self.priority.admits(record.priority)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SearchHitKind {
    Client,
    Deal,
    Project,
    Ticket,
}

impl SearchHitKind {
    pub fn label(self) -> &'static str {
        match self {
            Self::Client => "Client",
            Self::Deal => "Affaire",
            Self::Project => "Projet",
            Self::Ticket => "Ticket",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchHit {
    pub kind: SearchHitKind,
    pub id: RecordId,
    pub title: String,
    pub subtitle: String,
}

/// Cross-entity lookup behind the ⌘K modal. Blank queries return nothing.
pub fn search_everything(store: &CrmStore, query: &str, per_kind: usize) -> Vec<SearchHit> {
    if normalize_filter_value(query).is_empty() {
        return Vec::new();
    }

    let mut hits = Vec::new();

    hits.extend(
        store
            .clients
            .iter()
            .filter(|client| matches_query(*client, query))
            .take(per_kind)
            .map(|client| SearchHit {
                kind: SearchHitKind::Client,
                id: client.id.clone(),
                title: client.name.clone(),
                subtitle: client.company.clone(),
            }),
    );
    hits.extend(
        store
            .deals
            .iter()
            .filter(|deal| matches_query(*deal, query))
            .take(per_kind)
            .map(|deal| SearchHit {
                kind: SearchHitKind::Deal,
                id: deal.id.clone(),
                title: deal.title.clone(),
                subtitle: format!("{} · {}", deal.company, deal.stage.label()),
            }),
    );
    hits.extend(
        store
            .projects
            .iter()
            .filter(|project| matches_query(*project, query))
            .take(per_kind)
            .map(|project| SearchHit {
                kind: SearchHitKind::Project,
                id: project.id.clone(),
                title: project.name.clone(),
                subtitle: project.client.clone(),
            }),
    );
    hits.extend(
        store
            .tickets
            .iter()
            .filter(|ticket| matches_query(*ticket, query))
            .take(per_kind)
            .map(|ticket| SearchHit {
                kind: SearchHitKind::Ticket,
                id: ticket.id.clone(),
                title: format!("{} · {}", ticket.id, ticket.title),
                subtitle: ticket.client.clone(),
            }),
    );

    hits
}

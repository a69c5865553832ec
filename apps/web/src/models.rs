use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use time::{Date, PrimitiveDateTime};

#[cfg(test)]
#[path = "models_test.rs"]
mod models_test;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RecordError {
    #[error("unknown {kind} value: {value}")]
    UnknownVariant { kind: &'static str, value: String },
    #[error("percentage out of range: {0} (expected 0-100)")]
    PercentOutOfRange(u8),
    #[error("rating out of range: {0} (expected 0-5)")]
    RatingOutOfRange(u8),
    #[error("project {id} ends ({end}) before it starts ({start})")]
    InvalidDateRange { id: String, start: Date, end: Date },
}

/// Opaque identifier shared by every CRM record kind.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordId(String);

impl RecordId {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for RecordId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Whole-euro amount. Negative values are unrepresentable.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Money(u64);

impl Money {
    pub const ZERO: Money = Money(0);

    pub const fn euros(amount: u64) -> Self {
        Self(amount)
    }

    pub const fn amount(self) -> u64 {
        self.0
    }

    pub fn as_f64(self) -> f64 {
        self.0 as f64
    }

    /// `€125k` style label, rounded half-up to the nearest thousand.
    pub fn to_thousands_label(self) -> String {
        let thousands = self.0 / 1_000 + u64::from(self.0 % 1_000 >= 500);
        format!("€{thousands}k")
    }

    /// `€125,430` style label.
    pub fn to_grouped_label(self) -> String {
        format!("€{}", group_digits(self.0))
    }
}

impl std::ops::Add for Money {
    type Output = Money;

    fn add(self, rhs: Money) -> Money {
        Money(self.0.saturating_add(rhs.0))
    }
}

impl std::iter::Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Money {
        iter.fold(Money::ZERO, |acc, value| acc + value)
    }
}

fn group_digits(value: u64) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (idx, ch) in digits.chars().enumerate() {
        if idx != 0 && (digits.len() - idx) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(try_from = "u8", into = "u8")]
pub struct Percent(u8);

impl Percent {
    pub const MAX: u8 = 100;

    pub fn new(value: u8) -> Result<Self, RecordError> {
        if value > Self::MAX {
            return Err(RecordError::PercentOutOfRange(value));
        }
        Ok(Self(value))
    }

    pub const fn value(self) -> u8 {
        self.0
    }

    pub fn fraction(self) -> f64 {
        f64::from(self.0) / 100.0
    }
}

impl TryFrom<u8> for Percent {
    type Error = RecordError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Percent> for u8 {
    fn from(value: Percent) -> Self {
        value.0
    }
}

#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(try_from = "u8", into = "u8")]
pub struct Rating(u8);

impl Rating {
    pub const MAX: u8 = 5;

    pub fn new(value: u8) -> Result<Self, RecordError> {
        if value > Self::MAX {
            return Err(RecordError::RatingOutOfRange(value));
        }
        Ok(Self(value))
    }

    pub const fn stars(self) -> u8 {
        self.0
    }
}

impl TryFrom<u8> for Rating {
    type Error = RecordError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Rating> for u8 {
    fn from(value: Rating) -> Self {
        value.0
    }
}

/// Closed set of values behind a select box.
pub trait Choice: Copy + Eq + 'static {
    const KIND: &'static str;

    fn all() -> &'static [Self];

    /// Wire value, identical to the serde representation.
    fn as_str(self) -> &'static str;

    /// French label shown in the UI.
    fn label(self) -> &'static str;

    fn parse(value: &str) -> Result<Self, RecordError> {
        let needle = value.trim();
        Self::all()
            .iter()
            .copied()
            .find(|choice| choice.as_str().eq_ignore_ascii_case(needle))
            .ok_or_else(|| RecordError::UnknownVariant {
                kind: Self::KIND,
                value: value.to_string(),
            })
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ClientStatus {
    Active,
    Inactive,
    Prospect,
}

impl Choice for ClientStatus {
    const KIND: &'static str = "client status";

    fn all() -> &'static [Self] {
        &[Self::Active, Self::Inactive, Self::Prospect]
    }

    fn as_str(self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Inactive => "inactive",
            Self::Prospect => "prospect",
        }
    }

    fn label(self) -> &'static str {
        match self {
            Self::Active => "Actif",
            Self::Inactive => "Inactif",
            Self::Prospect => "Prospect",
        }
    }
}

/// Pipeline stages in board order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DealStage {
    Lead,
    Qualification,
    Proposal,
    Negotiation,
    Closing,
    Won,
    Lost,
}

impl DealStage {
    pub fn is_terminal(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }

    pub fn accent_class(self) -> &'static str {
        match self {
            Self::Lead => "from-gray-400 to-gray-600",
            Self::Qualification => "from-blue-400 to-blue-600",
            Self::Proposal => "from-yellow-400 to-orange-500",
            Self::Negotiation => "from-purple-400 to-purple-600",
            Self::Closing => "from-green-400 to-green-600",
            Self::Won => "from-cyan-400 to-violet-600",
            Self::Lost => "from-red-400 to-red-600",
        }
    }
}

impl Choice for DealStage {
    const KIND: &'static str = "deal stage";

    fn all() -> &'static [Self] {
        &[
            Self::Lead,
            Self::Qualification,
            Self::Proposal,
            Self::Negotiation,
            Self::Closing,
            Self::Won,
            Self::Lost,
        ]
    }

    fn as_str(self) -> &'static str {
        match self {
            Self::Lead => "lead",
            Self::Qualification => "qualification",
            Self::Proposal => "proposal",
            Self::Negotiation => "negotiation",
            Self::Closing => "closing",
            Self::Won => "won",
            Self::Lost => "lost",
        }
    }

    fn label(self) -> &'static str {
        match self {
            Self::Lead => "Prospect",
            Self::Qualification => "Qualification",
            Self::Proposal => "Proposition",
            Self::Negotiation => "Négociation",
            Self::Closing => "Closing",
            Self::Won => "Gagné",
            Self::Lost => "Perdu",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Priority {
    Low,
    Medium,
    High,
    Urgent,
}

impl Priority {
    pub fn badge_class(self) -> &'static str {
        match self {
            Self::Urgent => "bg-red-500",
            Self::High => "bg-orange-500",
            Self::Medium => "bg-yellow-500",
            Self::Low => "bg-green-500",
        }
    }
}

impl Choice for Priority {
    const KIND: &'static str = "priority";

    fn all() -> &'static [Self] {
        &[Self::Low, Self::Medium, Self::High, Self::Urgent]
    }

    fn as_str(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
            Self::Urgent => "urgent",
        }
    }

    fn label(self) -> &'static str {
        match self {
            Self::Low => "Basse",
            Self::Medium => "Moyenne",
            Self::High => "Haute",
            Self::Urgent => "Urgente",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ProjectStatus {
    Planning,
    Active,
    OnHold,
    Completed,
}

impl ProjectStatus {
    pub fn badge_class(self) -> &'static str {
        match self {
            Self::Planning => "bg-blue-100 text-blue-600 dark:bg-blue-900 dark:text-blue-400",
            Self::Active => "bg-green-100 text-green-600 dark:bg-green-900 dark:text-green-400",
            Self::OnHold => "bg-yellow-100 text-yellow-600 dark:bg-yellow-900 dark:text-yellow-400",
            Self::Completed => "bg-gray-100 text-gray-600 dark:bg-gray-800 dark:text-gray-400",
        }
    }
}

impl Choice for ProjectStatus {
    const KIND: &'static str = "project status";

    fn all() -> &'static [Self] {
        &[Self::Planning, Self::Active, Self::OnHold, Self::Completed]
    }

    fn as_str(self) -> &'static str {
        match self {
            Self::Planning => "planning",
            Self::Active => "active",
            Self::OnHold => "on-hold",
            Self::Completed => "completed",
        }
    }

    fn label(self) -> &'static str {
        match self {
            Self::Planning => "Planification",
            Self::Active => "Actif",
            Self::OnHold => "En pause",
            Self::Completed => "Terminé",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TaskStatus {
    Todo,
    InProgress,
    Done,
}

impl Choice for TaskStatus {
    const KIND: &'static str = "task status";

    fn all() -> &'static [Self] {
        &[Self::Todo, Self::InProgress, Self::Done]
    }

    fn as_str(self) -> &'static str {
        match self {
            Self::Todo => "todo",
            Self::InProgress => "in-progress",
            Self::Done => "done",
        }
    }

    fn label(self) -> &'static str {
        match self {
            Self::Todo => "À faire",
            Self::InProgress => "En cours",
            Self::Done => "Terminé",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TicketStatus {
    Open,
    InProgress,
    Resolved,
    Closed,
}

impl TicketStatus {
    pub fn is_settled(self) -> bool {
        matches!(self, Self::Resolved | Self::Closed)
    }

    pub fn badge_class(self) -> &'static str {
        match self {
            Self::Open => "bg-blue-100 text-blue-600 dark:bg-blue-900 dark:text-blue-400",
            Self::InProgress => {
                "bg-yellow-100 text-yellow-600 dark:bg-yellow-900 dark:text-yellow-400"
            }
            Self::Resolved => "bg-green-100 text-green-600 dark:bg-green-900 dark:text-green-400",
            Self::Closed => "bg-gray-100 text-gray-600 dark:bg-gray-800 dark:text-gray-400",
        }
    }
}

impl Choice for TicketStatus {
    const KIND: &'static str = "ticket status";

    fn all() -> &'static [Self] {
        &[Self::Open, Self::InProgress, Self::Resolved, Self::Closed]
    }

    fn as_str(self) -> &'static str {
        match self {
            Self::Open => "open",
            Self::InProgress => "in-progress",
            Self::Resolved => "resolved",
            Self::Closed => "closed",
        }
    }

    fn label(self) -> &'static str {
        match self {
            Self::Open => "Ouvert",
            Self::InProgress => "En cours",
            Self::Resolved => "Résolu",
            Self::Closed => "Fermé",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Client {
    pub id: RecordId,
    pub name: String,
    pub company: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    pub status: ClientStatus,
    pub rating: Rating,
    pub revenue: Money,
    pub projects: u32,
    pub joined_date: Date,
    pub last_contact: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl Client {
    pub fn initials(&self) -> String {
        self.name
            .split_whitespace()
            .filter_map(|part| part.chars().next())
            .take(2)
            .collect()
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Deal {
    pub id: RecordId,
    pub title: String,
    pub company: String,
    pub contact: String,
    pub value: Money,
    pub probability: Percent,
    pub stage: DealStage,
    pub priority: Priority,
    pub created_date: Date,
    pub expected_close_date: Date,
    pub last_activity: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
}

impl Deal {
    /// Value weighted by win probability, in euros.
    pub fn weighted_value(&self) -> f64 {
        self.value.as_f64() * self.probability.fraction()
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: RecordId,
    pub name: String,
    pub status: TaskStatus,
    pub assignee: String,
    pub due_date: Date,
    pub priority: Priority,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TaskCounts {
    pub todo: usize,
    pub in_progress: usize,
    pub done: usize,
}

impl TaskCounts {
    pub fn total(&self) -> usize {
        self.todo + self.in_progress + self.done
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: RecordId,
    pub name: String,
    pub client: String,
    pub status: ProjectStatus,
    pub progress: Percent,
    pub budget: Money,
    pub spent: Money,
    pub start_date: Date,
    pub end_date: Date,
    #[serde(default)]
    pub team: Vec<String>,
    #[serde(default)]
    pub tasks: Vec<Task>,
    pub priority: Priority,
    pub description: String,
}

impl Project {
    pub fn validate(&self) -> Result<(), RecordError> {
        if self.end_date < self.start_date {
            return Err(RecordError::InvalidDateRange {
                id: self.id.to_string(),
                start: self.start_date,
                end: self.end_date,
            });
        }
        Ok(())
    }

    pub fn task_counts(&self) -> TaskCounts {
        self.tasks
            .iter()
            .fold(TaskCounts::default(), |mut counts, task| {
                match task.status {
                    TaskStatus::Todo => counts.todo += 1,
                    TaskStatus::InProgress => counts.in_progress += 1,
                    TaskStatus::Done => counts.done += 1,
                }
                counts
            })
    }

    pub fn is_over_budget(&self) -> bool {
        self.spent > self.budget
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ticket {
    pub id: RecordId,
    pub title: String,
    pub description: String,
    pub client: String,
    pub assignee: String,
    pub status: TicketStatus,
    pub priority: Priority,
    pub category: String,
    pub created_at: PrimitiveDateTime,
    pub updated_at: PrimitiveDateTime,
    pub messages: u32,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PortfolioItem {
    pub id: u32,
    pub title: String,
    pub category: String,
    pub description: String,
    pub image: String,
    pub color: String,
    #[serde(default)]
    pub tech: Vec<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ProcessStep {
    pub phase: String,
    pub title: String,
    pub description: String,
    pub icon: String,
    #[serde(default)]
    pub details: Vec<String>,
    pub duration: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TeamMember {
    pub name: String,
    pub email: String,
    pub role: String,
}

impl TeamMember {
    pub fn initials(&self) -> String {
        self.name
            .split_whitespace()
            .filter_map(|part| part.chars().next())
            .take(2)
            .collect()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivityKind {
    Client,
    Project,
    Ticket,
    Revenue,
}

impl ActivityKind {
    pub fn dot_class(self) -> &'static str {
        match self {
            Self::Client => "bg-blue-500",
            Self::Project => "bg-green-500",
            Self::Ticket => "bg-red-500",
            Self::Revenue => "bg-purple-500",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Activity {
    pub kind: ActivityKind,
    pub action: String,
    pub description: String,
    pub time: String,
}

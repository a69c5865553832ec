use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::models::{
    Choice, Client, ClientStatus, Deal, DealStage, Money, Priority, Project, ProjectStatus,
    Ticket, TicketStatus,
};

#[cfg(test)]
#[path = "summary_test.rs"]
mod summary_test;

/// `numerator / denominator`, defined as 0 when the denominator is 0.
pub fn ratio(numerator: f64, denominator: f64) -> f64 {
    if denominator == 0.0 {
        0.0
    } else {
        numerator / denominator
    }
}

pub fn percentage(numerator: f64, denominator: f64) -> f64 {
    ratio(numerator, denominator) * 100.0
}

pub fn format_percent(value: f64) -> String {
    format!("{value:.1}%")
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ClientSummary {
    pub total: usize,
    pub active: usize,
    pub prospects: usize,
    pub inactive: usize,
    pub revenue: Money,
    pub average_rating: f64,
}

impl ClientSummary {
    pub fn compute(clients: &[Client]) -> Self {
        let count = |status: ClientStatus| clients.iter().filter(|c| c.status == status).count();
        let rating_sum: f64 = clients
            .iter()
            .map(|client| f64::from(client.rating.stars()))
            .sum();

        Self {
            total: clients.len(),
            active: count(ClientStatus::Active),
            prospects: count(ClientStatus::Prospect),
            inactive: count(ClientStatus::Inactive),
            revenue: clients.iter().map(|client| client.revenue).sum(),
            average_rating: ratio(rating_sum, clients.len() as f64),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StageTally {
    pub count: usize,
    pub value: Money,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PipelineSummary {
    pub total_deals: usize,
    pub total_value: Money,
    pub average_value: f64,
    /// Won deals over all deals, in percent.
    pub conversion_rate: f64,
    pub weighted_forecast: f64,
    pub by_stage: BTreeMap<DealStage, StageTally>,
}

impl PipelineSummary {
    pub fn compute(deals: &[Deal]) -> Self {
        let mut by_stage: BTreeMap<DealStage, StageTally> = DealStage::all()
            .iter()
            .map(|stage| (*stage, StageTally::default()))
            .collect();

        for deal in deals {
            let tally = by_stage.entry(deal.stage).or_default();
            tally.count += 1;
            tally.value = tally.value + deal.value;
        }

        let total_value: Money = deals.iter().map(|deal| deal.value).sum();
        let won = by_stage
            .get(&DealStage::Won)
            .map(|tally| tally.count)
            .unwrap_or(0);

        Self {
            total_deals: deals.len(),
            total_value,
            average_value: ratio(total_value.as_f64(), deals.len() as f64),
            conversion_rate: percentage(won as f64, deals.len() as f64),
            weighted_forecast: deals.iter().map(Deal::weighted_value).sum(),
            by_stage,
        }
    }

    pub fn stage(&self, stage: DealStage) -> StageTally {
        self.by_stage.get(&stage).copied().unwrap_or_default()
    }

    /// Deals still moving through the board.
    pub fn open_deals(&self) -> usize {
        self.by_stage
            .iter()
            .filter(|(stage, _)| !stage.is_terminal())
            .map(|(_, tally)| tally.count)
            .sum()
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ProjectSummary {
    pub total: usize,
    pub active: usize,
    pub completed: usize,
    pub total_budget: Money,
    pub total_spent: Money,
    /// Spent over budget, in percent.
    pub budget_utilization: f64,
    /// Done tasks over all tasks, in percent.
    pub task_completion: f64,
}

impl ProjectSummary {
    pub fn compute(projects: &[Project]) -> Self {
        let count = |status: ProjectStatus| projects.iter().filter(|p| p.status == status).count();
        let total_budget: Money = projects.iter().map(|project| project.budget).sum();
        let total_spent: Money = projects.iter().map(|project| project.spent).sum();
        let (done, tasks) = projects
            .iter()
            .map(Project::task_counts)
            .fold((0usize, 0usize), |(done, total), counts| {
                (done + counts.done, total + counts.total())
            });

        Self {
            total: projects.len(),
            active: count(ProjectStatus::Active),
            completed: count(ProjectStatus::Completed),
            total_budget,
            total_spent,
            budget_utilization: percentage(total_spent.as_f64(), total_budget.as_f64()),
            task_completion: percentage(done as f64, tasks as f64),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct TicketSummary {
    pub total: usize,
    pub open: usize,
    pub in_progress: usize,
    pub resolved: usize,
    pub urgent: usize,
    /// Resolved or closed tickets over all tickets, in percent.
    pub resolution_rate: f64,
    pub by_category: BTreeMap<String, usize>,
}

impl TicketSummary {
    pub fn compute(tickets: &[Ticket]) -> Self {
        let count = |status: TicketStatus| tickets.iter().filter(|t| t.status == status).count();
        let settled = tickets
            .iter()
            .filter(|ticket| ticket.status.is_settled())
            .count();

        let mut by_category = BTreeMap::new();
        for ticket in tickets {
            *by_category.entry(ticket.category.clone()).or_insert(0) += 1;
        }

        Self {
            total: tickets.len(),
            open: count(TicketStatus::Open),
            in_progress: count(TicketStatus::InProgress),
            resolved: count(TicketStatus::Resolved),
            urgent: tickets
                .iter()
                .filter(|ticket| ticket.priority == Priority::Urgent)
                .count(),
            resolution_rate: percentage(settled as f64, tickets.len() as f64),
            by_category,
        }
    }
}

/// Projects still to deliver, nearest deadline first.
pub fn priority_projects(projects: &[Project], limit: usize) -> Vec<&Project> {
    let mut pending: Vec<&Project> = projects
        .iter()
        .filter(|project| {
            matches!(
                project.status,
                ProjectStatus::Active | ProjectStatus::Planning
            )
        })
        .collect();
    pending.sort_by_key(|project| project.end_date);
    pending.truncate(limit);
    pending
}

/// Bar widths in percent of the largest value; all zero when the series is empty or flat at 0.
pub fn relative_widths(values: &[u64]) -> Vec<f64> {
    let max = values.iter().copied().max().unwrap_or(0) as f64;
    values
        .iter()
        .map(|value| percentage(*value as f64, max))
        .collect()
}

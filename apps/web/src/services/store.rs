use serde::{Deserialize, Serialize};

use crate::fixtures::crm::{sample_clients, sample_deals, sample_projects, sample_tickets};
use crate::models::{Client, Deal, Project, RecordError, RecordId, Ticket};

/// In-memory record lists backing every CRM view for the session.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct CrmStore {
    pub clients: Vec<Client>,
    pub deals: Vec<Deal>,
    pub projects: Vec<Project>,
    pub tickets: Vec<Ticket>,
}

impl CrmStore {
    pub fn load_sample() -> Result<Self, RecordError> {
        Ok(Self {
            clients: sample_clients()?,
            deals: sample_deals()?,
            projects: sample_projects()?,
            tickets: sample_tickets(),
        })
    }

    pub fn client(&self, id: &RecordId) -> Option<&Client> {
        self.clients.iter().find(|client| &client.id == id)
    }

    pub fn deal(&self, id: &RecordId) -> Option<&Deal> {
        self.deals.iter().find(|deal| &deal.id == id)
    }

    pub fn project(&self, id: &RecordId) -> Option<&Project> {
        self.projects.iter().find(|project| &project.id == id)
    }

    pub fn ticket(&self, id: &RecordId) -> Option<&Ticket> {
        self.tickets.iter().find(|ticket| &ticket.id == id)
    }
}

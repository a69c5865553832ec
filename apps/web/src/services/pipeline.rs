use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::{Choice, Deal, DealStage, Money, RecordError, RecordId};
use crate::services::filter::{DealFilter, RecordFilter};

#[cfg(test)]
#[path = "pipeline_test.rs"]
mod pipeline_test;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PipelineError {
    #[error("unknown deal: {0}")]
    UnknownDeal(RecordId),
    #[error("cannot move a deal from {} to {}", .from.label(), .to.label())]
    Forbidden { from: DealStage, to: DealStage },
}

/// Which stage moves the board accepts.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PipelinePolicy {
    /// Any stage to any stage, closed deals can be re-opened.
    #[default]
    Permissive,
    /// Won and lost deals stay where they are.
    Guarded,
}

impl PipelinePolicy {
    pub fn parse(value: &str) -> Result<Self, RecordError> {
        match value.trim().to_ascii_lowercase().as_str() {
            "permissive" => Ok(Self::Permissive),
            "guarded" => Ok(Self::Guarded),
            other => Err(RecordError::UnknownVariant {
                kind: "pipeline policy",
                value: other.to_string(),
            }),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Permissive => "permissive",
            Self::Guarded => "guarded",
        }
    }

    pub fn allows(self, from: DealStage, to: DealStage) -> bool {
        if from == to {
            return true;
        }
        match self {
            Self::Permissive => true,
            Self::Guarded => !from.is_terminal(),
        }
    }
}

/// Moves a deal to `target` and returns the stage it left.
pub fn move_deal(
    deals: &mut [Deal],
    id: &RecordId,
    target: DealStage,
    policy: PipelinePolicy,
) -> Result<DealStage, PipelineError> {
    let deal = deals
        .iter_mut()
        .find(|deal| &deal.id == id)
        .ok_or_else(|| PipelineError::UnknownDeal(id.clone()))?;

    let previous = deal.stage;
    if !policy.allows(previous, target) {
        return Err(PipelineError::Forbidden {
            from: previous,
            to: target,
        });
    }

    deal.stage = target;
    Ok(previous)
}

/// One kanban column: the filtered deals in a stage and their total value.
#[derive(Clone, Debug, PartialEq)]
pub struct StageColumn<'a> {
    pub stage: DealStage,
    pub deals: Vec<&'a Deal>,
    pub value: Money,
}

impl StageColumn<'_> {
    pub fn is_empty(&self) -> bool {
        self.deals.is_empty()
    }
}

pub fn stage_columns<'a>(deals: &'a [Deal], filter: &DealFilter) -> Vec<StageColumn<'a>> {
    let visible = filter.apply(deals);
    DealStage::all()
        .iter()
        .map(|stage| {
            let in_stage: Vec<&Deal> = visible
                .iter()
                .copied()
                .filter(|deal| deal.stage == *stage)
                .collect();
            let value = in_stage.iter().map(|deal| deal.value).sum();
            StageColumn {
                stage: *stage,
                deals: in_stage,
                value,
            }
        })
        .collect()
}

/// Transient drag-and-drop and card-expansion state of the board.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BoardInteraction {
    dragged: Option<RecordId>,
    expanded: BTreeSet<RecordId>,
}

impl BoardInteraction {
    pub fn start_drag(&mut self, id: RecordId) {
        self.dragged = Some(id);
    }

    pub fn end_drag(&mut self) {
        self.dragged = None;
    }

    pub fn dragged(&self) -> Option<&RecordId> {
        self.dragged.as_ref()
    }

    /// Applies the pending drag to `target`. Without a drag this is a no-op returning `Ok(None)`.
    pub fn drop_on(
        &mut self,
        deals: &mut [Deal],
        target: DealStage,
        policy: PipelinePolicy,
    ) -> Result<Option<DealStage>, PipelineError> {
        let Some(id) = self.dragged.take() else {
            return Ok(None);
        };
        move_deal(deals, &id, target, policy).map(Some)
    }

    pub fn toggle_expanded(&mut self, id: &RecordId) {
        if !self.expanded.remove(id) {
            self.expanded.insert(id.clone());
        }
    }

    pub fn is_expanded(&self, id: &RecordId) -> bool {
        self.expanded.contains(id)
    }
}

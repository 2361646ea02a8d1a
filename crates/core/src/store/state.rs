//! Application state and its single update channel
//!
//! All mutation goes through [`reduce`]. Records are replaced whole; there is
//! no partial patching and nothing is ever deleted.

use asnalo_domain::{Client, Deal, DealStage};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// Screen currently shown by the UI shell
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum View {
    #[default]
    Dashboard,
    Pipeline,
    Clients,
    Reports,
}

/// Everything the presentation layer renders from
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppState {
    pub view: View,
    /// Store order is preserved for tables and boards
    pub deals: Vec<Deal>,
    pub clients: Vec<Client>,
    pub selected_deal_id: Option<String>,
}

impl AppState {
    /// Seed state from fixture records
    pub fn new(deals: Vec<Deal>, clients: Vec<Client>) -> Self {
        Self { view: View::default(), deals, clients, selected_deal_id: None }
    }
}

/// A state transition requested by the UI or by a completed assistant call
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Navigate(View),
    /// `None` closes the deal detail
    SelectDeal(Option<String>),
    /// Any stage may move to any other stage
    ChangeStage { deal_id: String, stage: DealStage },
    /// Replace the stored deal that has the same id
    UpdateDeal(Deal),
}

/// Apply one action. Returns whether anything changed.
///
/// Actions that name a deal id not present in the collection are no-ops, as
/// are whole-deal updates that fail validation.
pub fn reduce(state: &mut AppState, action: Action) -> bool {
    match action {
        Action::Navigate(view) => {
            let changed = state.view != view;
            state.view = view;
            changed
        }
        Action::SelectDeal(None) => state.selected_deal_id.take().is_some(),
        Action::SelectDeal(Some(deal_id)) => {
            if !state.deals.iter().any(|deal| deal.id == deal_id) {
                debug!(deal_id = %deal_id, "ignoring selection of unknown deal");
                return false;
            }
            let changed = state.selected_deal_id.as_deref() != Some(deal_id.as_str());
            state.selected_deal_id = Some(deal_id);
            changed
        }
        Action::ChangeStage { deal_id, stage } => {
            match state.deals.iter_mut().find(|deal| deal.id == deal_id) {
                Some(deal) => {
                    let changed = deal.stage != stage;
                    debug!(deal_id = %deal_id, from = %deal.stage, to = %stage, "stage change");
                    *deal = Deal { stage, ..deal.clone() };
                    changed
                }
                None => {
                    debug!(deal_id = %deal_id, "ignoring stage change for unknown deal");
                    false
                }
            }
        }
        Action::UpdateDeal(updated) => {
            if let Err(err) = updated.validate() {
                warn!(deal_id = %updated.id, error = %err, "rejecting invalid deal update");
                return false;
            }
            match state.deals.iter_mut().find(|deal| deal.id == updated.id) {
                Some(deal) => {
                    let changed = *deal != updated;
                    *deal = updated;
                    changed
                }
                None => {
                    debug!(deal_id = %updated.id, "ignoring update for unknown deal");
                    false
                }
            }
        }
    }
}

/// Owner of the application state
///
/// Readers borrow; writers go through [`Store::dispatch`].
#[derive(Debug, Clone, Default)]
pub struct Store {
    state: AppState,
}

impl Store {
    pub fn new(state: AppState) -> Self {
        Self { state }
    }

    pub fn dispatch(&mut self, action: Action) -> bool {
        reduce(&mut self.state, action)
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn view(&self) -> View {
        self.state.view
    }

    pub fn deals(&self) -> &[Deal] {
        &self.state.deals
    }

    pub fn clients(&self) -> &[Client] {
        &self.state.clients
    }

    pub fn deal(&self, id: &str) -> Option<&Deal> {
        self.state.deals.iter().find(|deal| deal.id == id)
    }

    pub fn client(&self, id: &str) -> Option<&Client> {
        self.state.clients.iter().find(|client| client.id == id)
    }

    /// The deal open in the detail view, if it still exists
    pub fn selected_deal(&self) -> Option<&Deal> {
        self.state.selected_deal_id.as_deref().and_then(|id| self.deal(id))
    }
}

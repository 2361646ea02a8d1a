//! Pipeline records: clients, deals, and the activities logged against them
//!
//! Deals reference clients by identifier only. Activities are owned by their
//! deal and kept most-recent-first.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
#[cfg(feature = "ts-gen")]
use ts_rs::TS;

use crate::constants::MAX_PROBABILITY;
use crate::impl_domain_status_conversions;
use crate::types::month::MonthKey;
use crate::{Result, SfaError};

/* -------------------------------------------------------------------------- */
/* Deal Stage */
/* -------------------------------------------------------------------------- */

/// Pipeline progress of a deal, in fixed board order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[cfg_attr(feature = "ts-gen", derive(TS))]
#[cfg_attr(feature = "ts-gen", ts(export))]
#[serde(rename_all = "snake_case")]
pub enum DealStage {
    FirstContact,
    Discovery,
    Proposal,
    QuotePresented,
    Won,
    Lost,
}

impl_domain_status_conversions!(DealStage {
    FirstContact => "first_contact",
    Discovery => "discovery",
    Proposal => "proposal",
    QuotePresented => "quote_presented",
    Won => "won",
    Lost => "lost",
});

impl DealStage {
    /// Every stage in board order.
    pub const ALL: [DealStage; 6] = [
        DealStage::FirstContact,
        DealStage::Discovery,
        DealStage::Proposal,
        DealStage::QuotePresented,
        DealStage::Won,
        DealStage::Lost,
    ];

    /// Human-readable label for column headers and prompts
    pub fn label(&self) -> &'static str {
        match self {
            Self::FirstContact => "First contact",
            Self::Discovery => "Discovery",
            Self::Proposal => "Proposal",
            Self::QuotePresented => "Quote presented",
            Self::Won => "Won",
            Self::Lost => "Lost",
        }
    }

    /// Won and lost deals have left the pipeline.
    pub fn is_closed(&self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }

    pub fn is_open(&self) -> bool {
        !self.is_closed()
    }

    /// The next column on the board, wrapping from the last back to the first
    pub fn next(&self) -> DealStage {
        let index = Self::ALL.iter().position(|stage| stage == self).unwrap_or(0);
        Self::ALL[(index + 1) % Self::ALL.len()]
    }
}

/* -------------------------------------------------------------------------- */
/* Activity */
/* -------------------------------------------------------------------------- */

/// How contact with the client happened
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[cfg_attr(feature = "ts-gen", derive(TS))]
#[cfg_attr(feature = "ts-gen", ts(export))]
#[serde(rename_all = "snake_case")]
pub enum ActivityType {
    Call,
    Email,
    Meeting,
    Note,
}

impl_domain_status_conversions!(ActivityType {
    Call => "call",
    Email => "email",
    Meeting => "meeting",
    Note => "note",
});

impl ActivityType {
    pub const ALL: [ActivityType; 4] =
        [ActivityType::Call, ActivityType::Email, ActivityType::Meeting, ActivityType::Note];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Call => "Call",
            Self::Email => "Email",
            Self::Meeting => "Meeting",
            Self::Note => "Note",
        }
    }
}

/// A single logged interaction, owned by its deal
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "ts-gen", derive(TS))]
#[cfg_attr(feature = "ts-gen", ts(export))]
pub struct Activity {
    pub id: String,
    #[serde(rename = "type")]
    pub activity_type: ActivityType,
    pub date: NaiveDate,
    pub content: String,
}

/* -------------------------------------------------------------------------- */
/* Client */
/* -------------------------------------------------------------------------- */

/// Contact person at a customer company
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "ts-gen", derive(TS))]
#[cfg_attr(feature = "ts-gen", ts(export))]
#[serde(rename_all = "camelCase")]
pub struct Client {
    pub id: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub company: String,
    pub role: String,
    pub avatar_url: String,
}

/* -------------------------------------------------------------------------- */
/* Deal */
/* -------------------------------------------------------------------------- */

/// A sales opportunity tracked through the pipeline
///
/// Amounts are whole yen. `probability` is a percentage in `0..=100`, checked
/// by [`Deal::validate`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "ts-gen", derive(TS))]
#[cfg_attr(feature = "ts-gen", ts(export))]
#[serde(rename_all = "camelCase")]
pub struct Deal {
    pub id: String,
    pub title: String,
    #[cfg_attr(feature = "ts-gen", ts(type = "number"))]
    pub amount: u64,
    #[cfg_attr(feature = "ts-gen", ts(type = "number"))]
    pub gross_profit: u64,
    pub stage: DealStage,
    pub client_id: String,
    pub probability: u8,
    pub expected_close_date: NaiveDate,
    /// Most recent first
    #[serde(default)]
    pub activities: Vec<Activity>,
    #[serde(default)]
    pub notes: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_action: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_action_date: Option<NaiveDate>,
}

impl Deal {
    /// Check the record invariants that the type system does not already
    /// enforce.
    ///
    /// # Errors
    /// Returns `SfaError::InvalidInput` for a blank id, title, or client
    /// reference, or a probability above 100.
    pub fn validate(&self) -> Result<()> {
        if self.id.trim().is_empty() {
            return Err(SfaError::InvalidInput("deal id must not be blank".into()));
        }
        if self.title.trim().is_empty() {
            return Err(SfaError::InvalidInput(format!("deal {} has a blank title", self.id)));
        }
        if self.client_id.trim().is_empty() {
            return Err(SfaError::InvalidInput(format!(
                "deal {} has no client reference",
                self.id
            )));
        }
        if self.probability > MAX_PROBABILITY {
            return Err(SfaError::InvalidInput(format!(
                "deal {} probability {} is outside 0..=100",
                self.id, self.probability
            )));
        }
        Ok(())
    }

    /// Month in which the deal is expected to close
    pub fn close_month(&self) -> MonthKey {
        MonthKey::from(self.expected_close_date)
    }

    pub fn closes_in(&self, month: MonthKey) -> bool {
        self.close_month() == month
    }
}

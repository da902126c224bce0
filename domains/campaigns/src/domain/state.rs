//! Campaign lifecycle state machine
//!
//! Every status write on a campaign goes through this machine, so
//! duplicate admin actions and replayed requests fail deterministically
//! instead of silently rewriting history.

use fundlift_common::StateError;

use crate::domain::entities::CampaignStatus;

/// Events that trigger campaign state transitions
#[derive(Debug, Clone, PartialEq)]
pub enum CampaignEvent {
    /// Admin approves the campaign for public listing
    Approve,
    /// Admin rejects the campaign with a reason
    Reject,
    /// Owner or admin cancels the campaign
    Cancel,
    /// Raised amount reaches the funding target
    TargetReached,
}

impl std::fmt::Display for CampaignEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Approve => write!(f, "approve"),
            Self::Reject => write!(f, "reject"),
            Self::Cancel => write!(f, "cancel"),
            Self::TargetReached => write!(f, "target_reached"),
        }
    }
}

/// Campaign state machine
pub struct CampaignStateMachine;

impl CampaignStateMachine {
    /// Attempt a state transition
    ///
    /// Returns the new state if the transition is valid, or an error otherwise.
    pub fn transition(
        current: CampaignStatus,
        event: CampaignEvent,
    ) -> Result<CampaignStatus, StateError> {
        if current.is_terminal() {
            return Err(StateError::TerminalState(current.to_string()));
        }

        let next = match (&current, &event) {
            // From Pending: awaiting admin review
            (CampaignStatus::Pending, CampaignEvent::Approve) => CampaignStatus::Live,
            (CampaignStatus::Pending, CampaignEvent::Reject) => CampaignStatus::Rejected,
            (CampaignStatus::Pending, CampaignEvent::Cancel) => CampaignStatus::Cancelled,

            // From Live: taking contributions
            (CampaignStatus::Live, CampaignEvent::TargetReached) => CampaignStatus::Completed,
            (CampaignStatus::Live, CampaignEvent::Cancel) => CampaignStatus::Cancelled,

            // Invalid transitions
            (state, event) => {
                return Err(StateError::InvalidTransition {
                    from: state.to_string(),
                    to: "unknown".to_string(),
                    event: event.to_string(),
                });
            }
        };

        Ok(next)
    }
}

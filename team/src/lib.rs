//! Team building: a six-slot team store and its type coverage.

use thiserror::Error;
use typedex_chart::ChartError;

pub mod coverage;
pub mod store;

pub use coverage::{TeamCoverage, coverage};
pub use store::{MAX_TEAM_SIZE, MemberId, NewMember, TeamMember, TeamStore};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TeamError {
    #[error("Team is full ({0} members)")]
    Full(usize),

    #[error("No team member with id {0}")]
    UnknownMember(MemberId),

    #[error("Invalid typing: {0}")]
    InvalidTyping(#[from] ChartError),
}

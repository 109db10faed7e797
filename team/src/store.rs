//! Team store

use serde::{Deserialize, Serialize};
use typedex_chart::{Type, Typing};
use typedex_species::Species;
use uuid::Uuid;

use crate::TeamError;
use crate::coverage::{TeamCoverage, coverage};

/// A team holds at most this many members
pub const MAX_TEAM_SIZE: usize = 6;

/// Unique id assigned when a member joins the team
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MemberId(Uuid);

impl MemberId {
    fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl std::fmt::Display for MemberId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A species on the team
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeamMember {
    pub id: MemberId,
    pub name: String,
    pub types: Vec<Type>,
    pub image: Option<String>,
}

/// A member about to be added; the store assigns the id
#[derive(Debug, Clone, PartialEq)]
pub struct NewMember {
    pub name: String,
    pub types: Vec<Type>,
    pub image: Option<String>,
}

impl NewMember {
    pub fn new(name: impl Into<String>, types: &[Type]) -> Self {
        Self {
            name: name.into(),
            types: types.to_vec(),
            image: None,
        }
    }
}

impl From<&Species> for NewMember {
    fn from(species: &Species) -> Self {
        Self {
            name: species.name.clone(),
            types: species.types.clone(),
            image: species.image.clone(),
        }
    }
}

/// Insertion-ordered team of up to [`MAX_TEAM_SIZE`] members
#[derive(Debug, Clone, Default)]
pub struct TeamStore {
    members: Vec<TeamMember>,
}

impl TeamStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a member at the end of the team and return its id
    ///
    /// Fails when the team is full or the member's typing is not 1-2 types.
    pub fn add(&mut self, member: NewMember) -> Result<MemberId, TeamError> {
        if self.is_full() {
            return Err(TeamError::Full(MAX_TEAM_SIZE));
        }
        Typing::from_types(&member.types)?;

        let id = MemberId::new();
        self.members.push(TeamMember {
            id,
            name: member.name,
            types: member.types,
            image: member.image,
        });
        Ok(id)
    }

    /// Remove a member, keeping the order of the others
    pub fn remove(&mut self, id: MemberId) -> Result<TeamMember, TeamError> {
        let pos = self
            .members
            .iter()
            .position(|m| m.id == id)
            .ok_or(TeamError::UnknownMember(id))?;
        Ok(self.members.remove(pos))
    }

    pub fn get(&self, id: MemberId) -> Option<&TeamMember> {
        self.members.iter().find(|m| m.id == id)
    }

    pub fn members(&self) -> &[TeamMember] {
        &self.members
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.members.len() >= MAX_TEAM_SIZE
    }

    pub fn clear(&mut self) {
        self.members.clear();
    }

    /// Type coverage of the current team, `None` while the team is empty
    pub fn coverage(&self) -> Option<TeamCoverage> {
        coverage(self.members.iter().map(|m| m.types.as_slice()))
    }
}

pub mod competitions;
pub mod favourites;
pub mod games;
pub mod table;

use crate::competitions::{self as registry, Competition};
use crate::error::{FootballError, FootballResult};

/// Look up a competition by name or alias for a one-shot command
pub fn resolve_competition(name: &str) -> FootballResult<&'static Competition> {
    registry::find(name).ok_or_else(|| FootballError::CompetitionNotFound(name.to_string()))
}

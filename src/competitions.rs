/// Static registry of supported competitions
///
/// The order of [`COMPETITIONS`] is the order of the competition tabs and of
/// the `1`-`6` jump keys.
use phf::phf_map;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Competition {
    /// Identifier used by the remote API
    pub id: u32,
    /// Short name used for tabs and cache keys
    pub name: &'static str,
    pub display_name: &'static str,
}

pub const COMPETITIONS: [Competition; 6] = [
    Competition { id: 7, name: "EPL", display_name: "Premier League" },
    Competition { id: 11, name: "La liga", display_name: "La Liga" },
    Competition { id: 17, name: "Serie A", display_name: "Serie A" },
    Competition { id: 35, name: "Ligue 1", display_name: "Ligue 1" },
    Competition { id: 25, name: "Bundesliga", display_name: "Bundesliga" },
    Competition { id: 572, name: "UCL", display_name: "UEFA Champions League" },
];

/// Command-line friendly aliases, mapped to an index into [`COMPETITIONS`]
static ALIASES: phf::Map<&'static str, usize> = phf_map! {
    "epl" => 0,
    "pl" => 0,
    "premier-league" => 0,
    "laliga" => 1,
    "la-liga" => 1,
    "seriea" => 2,
    "serie-a" => 2,
    "ligue1" => 3,
    "ligue-1" => 3,
    "bundesliga" => 4,
    "bl" => 4,
    "ucl" => 5,
    "cl" => 5,
    "champions-league" => 5,
};

pub fn all() -> &'static [Competition] {
    &COMPETITIONS
}

/// Competition at a zero-based registry index
pub fn get(index: usize) -> Option<&'static Competition> {
    COMPETITIONS.get(index)
}

/// Registry index of a competition given user text
///
/// Matches the short name (case-insensitive), then an alias, then a
/// substring of the display name.
pub fn position(name: &str) -> Option<usize> {
    let needle = name.trim().to_lowercase();
    if needle.is_empty() {
        return None;
    }

    if let Some(index) = COMPETITIONS
        .iter()
        .position(|c| c.name.to_lowercase() == needle)
    {
        return Some(index);
    }

    if let Some(index) = ALIASES.get(needle.as_str()) {
        return Some(*index);
    }

    COMPETITIONS
        .iter()
        .position(|c| c.display_name.to_lowercase().contains(&needle))
}

pub fn find(name: &str) -> Option<&'static Competition> {
    position(name).and_then(get)
}

use std::collections::HashSet;

use super::navigation::Selection;
use super::renderer::Frame;
use crate::cache::{CacheKey, ContentCache};
use crate::competitions;
use crate::config::ThemeConfig;

/// Interactive session state
///
/// Owned by the [`super::runtime::Runtime`] and only changed through
/// [`super::reducer::reduce`].
#[derive(Debug)]
pub struct SessionState {
    pub selection: Selection,
    pub cache: ContentCache,
    /// Keys with a fetch in flight; at most one outstanding request per key
    pub pending: HashSet<CacheKey>,
    /// Frame currently on screen
    pub screen: Option<Frame>,
    pub help_visible: bool,
    pub theme: ThemeConfig,
    pub competition_count: usize,
    pub quit: bool,
}

impl Default for SessionState {
    fn default() -> Self {
        Self::new(Selection::default(), ThemeConfig::default())
    }
}

impl SessionState {
    pub fn new(selection: Selection, theme: ThemeConfig) -> Self {
        Self {
            selection,
            cache: ContentCache::new(),
            pending: HashSet::new(),
            screen: None,
            help_visible: false,
            theme,
            competition_count: competitions::all().len(),
            quit: false,
        }
    }

    pub fn current_key(&self) -> Option<CacheKey> {
        self.selection.cache_key()
    }

    pub fn is_pending(&self, key: &CacheKey) -> bool {
        self.pending.contains(key)
    }
}

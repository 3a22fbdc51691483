// Linear navigation history - visited pages and a cursor, browser-style

/// Capability interface the window implements so controls can be wired to
/// navigation without closures or any toolkit dependency.
pub trait NavigationSurface<P> {
    fn on_navigate(&mut self, page: P);
    fn on_back(&mut self);
    fn on_forward(&mut self);
}

/// Linear (non-branching) history of visited pages with a cursor marking the
/// current one. Navigating somewhere new erases forward history, like a
/// browser. Purely a passive state holder: callers re-query `can_go_back` /
/// `can_go_forward` after every mutation to refresh control enablement.
#[derive(Debug, Clone)]
pub struct PagedNavigator<P> {
    history: Vec<P>,
    cursor: usize,
}

impl<P: Copy> PagedNavigator<P> {
    /// With `Some(page)` the history starts holding that page, which is what
    /// a window wants at open time (the displayed page is already "visited").
    /// With `None` the history starts empty and `current_page` is `None`
    /// until the first `navigate_to`.
    pub fn new(seed: Option<P>) -> Self {
        match seed {
            Some(page) => Self {
                history: vec![page],
                cursor: 0,
            },
            None => Self {
                history: Vec::new(),
                cursor: 0,
            },
        }
    }

    pub fn seeded(page: P) -> Self {
        Self::new(Some(page))
    }

    pub fn navigate_to(&mut self, page: P) {
        // Remove any forward history when navigating to a new page
        if !self.history.is_empty() {
            self.history.truncate(self.cursor + 1);
        }
        self.history.push(page);
        self.cursor = self.history.len() - 1;
    }

    pub fn back(&mut self) -> Option<P> {
        if self.can_go_back() {
            self.cursor -= 1;
            Some(self.history[self.cursor])
        } else {
            None
        }
    }

    pub fn forward(&mut self) -> Option<P> {
        if self.can_go_forward() {
            self.cursor += 1;
            Some(self.history[self.cursor])
        } else {
            None
        }
    }

    pub fn current_page(&self) -> Option<P> {
        self.history.get(self.cursor).copied()
    }

    pub fn can_go_back(&self) -> bool {
        self.cursor > 0
    }

    pub fn can_go_forward(&self) -> bool {
        self.cursor + 1 < self.history.len()
    }

    pub fn len(&self) -> usize {
        self.history.len()
    }

    pub fn is_empty(&self) -> bool {
        self.history.is_empty()
    }
}

impl<P: Copy> Default for PagedNavigator<P> {
    fn default() -> Self {
        Self::new(None)
    }
}

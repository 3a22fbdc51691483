// Shell state - the one window collaborator that owns the navigator
use crate::config::Config;
use crate::message::Message;
use crate::navigation::{NavigationSurface, PagedNavigator};
use crate::page::{Page, SettingsControl};

/// A pending informational dialog the toolkit should show.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dialog {
    pub title: String,
    pub body: String,
}

/// Headless state of the control-panel window: which page is current, whether
/// the back/forward buttons are enabled, and any pending dialog. The toolkit
/// layer feeds it a `Message` per control activation and redraws from it; it
/// never mutates navigation state directly.
pub struct Shell {
    navigator: PagedNavigator<Page>,
    pub back_enabled: bool,
    pub forward_enabled: bool,
    pub dialog: Option<Dialog>,
}

impl Default for Shell {
    fn default() -> Self {
        Self::new(Page::default())
    }
}

impl Shell {
    /// The start page is seeded into the history rather than navigated to, so
    /// a freshly opened window shows it with both nav buttons disabled.
    pub fn new(start_page: Page) -> Self {
        Self {
            navigator: PagedNavigator::seeded(start_page),
            back_enabled: false,
            forward_enabled: false,
            dialog: None,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.start_page())
    }

    pub fn current_page(&self) -> Page {
        self.navigator.current_page().unwrap_or_default()
    }

    pub fn update(&mut self, message: Message) {
        match message {
            Message::Navigate(page) => self.on_navigate(page),
            Message::NavigateBack => self.on_back(),
            Message::NavigateForward => self.on_forward(),
            Message::ViewData => self.view_data(),
            Message::Settings(control) => self.settings_stub(control),
            Message::DismissDialog => self.dialog = None,
        }
    }

    fn view_data(&mut self) {
        self.dialog = Some(Dialog {
            title: "View Data".to_string(),
            body: "This feature is not implemented yet.".to_string(),
        });
    }

    fn settings_stub(&mut self, control: SettingsControl) {
        log::debug!("{} activated (not implemented)", control.label());
    }

    fn sync_nav_buttons(&mut self) {
        self.back_enabled = self.navigator.can_go_back();
        self.forward_enabled = self.navigator.can_go_forward();
    }
}

impl NavigationSurface<Page> for Shell {
    fn on_navigate(&mut self, page: Page) {
        self.navigator.navigate_to(page);
        log::debug!("navigated to {:?}", page);
        self.sync_nav_buttons();
    }

    fn on_back(&mut self) {
        if let Some(page) = self.navigator.back() {
            log::debug!("back to {:?}", page);
        }
        self.sync_nav_buttons();
    }

    fn on_forward(&mut self) {
        if let Some(page) = self.navigator.forward() {
            log::debug!("forward to {:?}", page);
        }
        self.sync_nav_buttons();
    }
}

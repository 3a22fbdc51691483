use crate::page::{Page, SettingsControl};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    // Navigation
    Navigate(Page),
    NavigateBack,
    NavigateForward,

    // Welcome page
    ViewData,

    // Settings page (placeholder controls)
    Settings(SettingsControl),

    // Dialogs
    DismissDialog,
}

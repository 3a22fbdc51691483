//! State layer for the NanoLab control-panel shell: a linear page-navigation
//! history plus the headless window state that owns it. Rendering is left to
//! whatever toolkit hosts the [`Shell`]; it feeds a [`Message`] per control
//! activation and redraws from the shell's fields afterwards.

pub mod config;
pub mod message;
pub mod navigation;
pub mod page;
pub mod shell;

pub use config::Config;
pub use message::Message;
pub use navigation::{NavigationSurface, PagedNavigator};
pub use page::{Page, SettingsControl};
pub use shell::{Dialog, Shell};

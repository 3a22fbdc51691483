/// The closed set of pages in the control panel, in stack order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Page {
    Welcome,
    Settings,
}

impl Default for Page {
    fn default() -> Self {
        Self::Welcome
    }
}

impl Page {
    /// Position of the page in the window's page stack.
    pub fn index(self) -> usize {
        match self {
            Page::Welcome => 0,
            Page::Settings => 1,
        }
    }

    pub fn from_index(index: usize) -> Option<Page> {
        match index {
            0 => Some(Page::Welcome),
            1 => Some(Page::Settings),
            _ => None,
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Page::Welcome => "Welcome",
            Page::Settings => "Adjust NanoLab Settings",
        }
    }
}

/// Controls on the settings page. All of them are placeholders: activating
/// one does nothing until the device side exists.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SettingsControl {
    DataResults,
    WaterPump,
    Led,
    Fan,
    Camera,
    AtmosphericSensor,
    SendToDevice,
}

impl SettingsControl {
    /// The six controls laid out in the 3x2 settings grid. `SendToDevice`
    /// sits apart in the bottom bar.
    pub const GRID: [SettingsControl; 6] = [
        SettingsControl::DataResults,
        SettingsControl::WaterPump,
        SettingsControl::Led,
        SettingsControl::Fan,
        SettingsControl::Camera,
        SettingsControl::AtmosphericSensor,
    ];

    pub fn label(self) -> &'static str {
        match self {
            SettingsControl::DataResults => "Data Results",
            SettingsControl::WaterPump => "Water Pump Settings",
            SettingsControl::Led => "LED Settings",
            SettingsControl::Fan => "Fan Settings",
            SettingsControl::Camera => "Camera Settings",
            SettingsControl::AtmosphericSensor => "Atmospheric Sensor",
            SettingsControl::SendToDevice => "Sent to your NanoLab",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_index_round_trip() {
        assert_eq!(Page::from_index(Page::Welcome.index()), Some(Page::Welcome));
        assert_eq!(
            Page::from_index(Page::Settings.index()),
            Some(Page::Settings)
        );
        assert_eq!(Page::from_index(2), None);
    }

    #[test]
    fn test_grid_excludes_send_button() {
        assert_eq!(SettingsControl::GRID.len(), 6);
        assert!(!SettingsControl::GRID.contains(&SettingsControl::SendToDevice));
    }
}

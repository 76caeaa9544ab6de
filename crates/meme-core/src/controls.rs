use std::fmt;

/// The action controls whose availability follows the image lifecycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ControlKind {
    Generate,
    Clear,
    ReadAloud,
}

impl ControlKind {
    pub const ALL: [ControlKind; 3] = [
        ControlKind::Generate,
        ControlKind::Clear,
        ControlKind::ReadAloud,
    ];

    fn index(self) -> usize {
        match self {
            ControlKind::Generate => 0,
            ControlKind::Clear => 1,
            ControlKind::ReadAloud => 2,
        }
    }
}

impl fmt::Display for ControlKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ControlKind::Generate => write!(f, "Generate"),
            ControlKind::Clear => write!(f, "Clear"),
            ControlKind::ReadAloud => write!(f, "Read Text"),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Control {
    pub kind: ControlKind,
    pub enabled: bool,
}

/// Fixed, ordered set of action controls: generate, clear, read-aloud.
///
/// Starts with every control disabled. Only [`ControlSet::set_loaded_baseline`]
/// and [`ControlSet::toggle_all`] change the flags.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ControlSet {
    controls: [Control; 3],
}

impl Default for ControlSet {
    fn default() -> Self {
        Self {
            controls: ControlKind::ALL.map(|kind| Control {
                kind,
                enabled: false,
            }),
        }
    }
}

impl ControlSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Baseline after an image loads: only generate is available.
    pub fn set_loaded_baseline(&mut self) {
        for control in &mut self.controls {
            control.enabled = control.kind == ControlKind::Generate;
        }
    }

    /// Flip every control to its opposite state.
    pub fn toggle_all(&mut self) {
        for control in &mut self.controls {
            control.enabled = !control.enabled;
        }
    }

    pub fn is_enabled(&self, kind: ControlKind) -> bool {
        self.controls[kind.index()].enabled
    }

    pub fn iter(&self) -> impl Iterator<Item = &Control> {
        self.controls.iter()
    }

    /// Enabled flags in control order.
    pub fn flags(&self) -> [bool; 3] {
        self.controls.map(|c| c.enabled)
    }
}

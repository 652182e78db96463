/// Game mode of the host's current session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionMode {
    Career,
    ScienceSandbox,
    Sandbox,
    Mission,
}

impl SessionMode {
    /// Whether the checklist has anything to track in this mode. Sandbox and
    /// mission sessions have no science progression, so the addon stays
    /// inactive there.
    pub fn supports_checklist(self) -> bool {
        matches!(self, SessionMode::Career | SessionMode::ScienceSandbox)
    }
}

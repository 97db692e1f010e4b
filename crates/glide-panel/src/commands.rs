/// Mode operations a host toolbar or keybinding layer can issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelCommand {
    Open,
    Close,
    Toggle,
    Minimize,
    Maximize,
    Restore,
}

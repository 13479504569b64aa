/// User actions the controller understands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    New,
    Open,
    Save,
    SaveAs,
    Exit,
    About,
    /// The text region was edited
    TextChanged,
}

impl Command {
    /// Menu label, `None` for commands without a menu item
    pub fn label(self) -> Option<&'static str> {
        match self {
            Command::New => Some("New"),
            Command::Open => Some("Open"),
            Command::Save => Some("Save"),
            Command::SaveAs => Some("Save As"),
            Command::Exit => Some("Exit"),
            Command::About => Some("About"),
            Command::TextChanged => None,
        }
    }

    /// Menu items in display order
    pub const MENU: [Command; 6] = [
        Command::New,
        Command::Open,
        Command::Save,
        Command::SaveAs,
        Command::Exit,
        Command::About,
    ];
}

/// What the application should do after a command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Continue,
    Exit,
}

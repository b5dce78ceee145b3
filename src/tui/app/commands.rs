pub const HELP_TEXT: &str =
    "Enter send | Shift+Enter newline | Up/Down history | PgUp/PgDn scroll | /exit quit";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlashCommand {
    Help,
    Exit,
}

impl SlashCommand {
    /// Recognizes a local command. Anything else, including unknown
    /// `/...` text, is a chat message.
    #[must_use]
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim() {
            "/help" => Some(Self::Help),
            "/exit" => Some(Self::Exit),
            _ => None,
        }
    }
}

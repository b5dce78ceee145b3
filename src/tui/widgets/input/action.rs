#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputAction {
    Continue,
    /// Enter was pressed on non-empty input. The text stays in the box
    /// until the widget asks for it to be cleared.
    Submit(String),
    HistoryPrev,
    HistoryNext,
    Clear,
    /// The key was dropped because the input is disabled.
    Rejected,
}

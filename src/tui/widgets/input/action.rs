#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputAction {
    Continue,
    /// The text changed; the caller should schedule a lookup.
    Edited,
    Clear,
    SuggestionPrev,
    SuggestionNext,
    Submit,
}

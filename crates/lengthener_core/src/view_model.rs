use crate::Phase;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppViewModel {
    pub input: String,
    pub phase: Phase,
    pub input_enabled: bool,
    pub submit_enabled: bool,
    /// Present only while the phase is `Failed`.
    pub error: Option<String>,
    /// Present only while the phase is `Succeeded` with a non-empty result.
    pub result: Option<ResultView>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultView {
    pub url: String,
    pub char_count: usize,
    pub copied: bool,
}

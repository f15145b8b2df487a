//! Link entry entity holding the redirect pair for one identifier.

/// The pair of destinations registered under one identifier.
///
/// The entry is always stored and replaced as a whole. Either URL may be
/// empty; no well-formedness check is applied before storing.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LinkEntry {
    /// Destination for visitors that passed the JavaScript probe.
    pub real: String,
    /// Destination for visitors classified as crawlers or HTTP clients.
    pub bot: String,
}

impl LinkEntry {
    /// Creates a new link entry.
    pub fn new(real: impl Into<String>, bot: impl Into<String>) -> Self {
        Self {
            real: real.into(),
            bot: bot.into(),
        }
    }
}

use strum_macros::Display;

/// Which path a flight took during a refresh pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum RefreshSource {
    /// The primary provider answered.
    Primary,
    /// The primary failed and the secondary answered.
    Fallback,
    /// Nobody answered; the prior record was kept.
    Unchanged,
}

/// Per-pass counts of `RefreshSource`s.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RefreshSummary {
    primary: usize,
    fallback: usize,
    unchanged: usize,
}

impl RefreshSummary {
    pub fn record(&mut self, source: RefreshSource) {
        match source {
            RefreshSource::Primary => self.primary += 1,
            RefreshSource::Fallback => self.fallback += 1,
            RefreshSource::Unchanged => self.unchanged += 1,
        }
    }

    pub fn primary(&self) -> usize { self.primary }
    pub fn fallback(&self) -> usize { self.fallback }
    pub fn unchanged(&self) -> usize { self.unchanged }
    pub fn total(&self) -> usize { self.primary + self.fallback + self.unchanged }
}

impl std::fmt::Display for RefreshSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} flights: {} primary, {} fallback, {} unchanged",
            self.total(),
            self.primary,
            self.fallback,
            self.unchanged
        )
    }
}

//! ReadyGate - Run-once scheduling against document readiness
//!
//! A task scheduled while the document is still loading is deferred to the
//! ready transition; scheduled after that, it runs at once. Either way it
//! runs exactly once.

/// `document.readyState`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DocumentReadiness {
    #[default]
    Loading,
    Interactive,
    Complete,
}

impl DocumentReadiness {
    /// Whether the markup is fully parsed
    pub fn is_ready(&self) -> bool {
        !matches!(self, DocumentReadiness::Loading)
    }
}

/// Gate for a single run-once task
#[derive(Debug, Clone, Default)]
pub struct ReadyGate {
    readiness: DocumentReadiness,
    pending: bool,
    ran: bool,
}

impl ReadyGate {
    pub fn new(readiness: DocumentReadiness) -> Self {
        Self {
            readiness,
            ..Default::default()
        }
    }

    pub fn readiness(&self) -> DocumentReadiness {
        self.readiness
    }

    /// Request the task; `true` means the caller runs it now
    pub fn schedule(&mut self) -> bool {
        if self.ran {
            return false;
        }
        if self.readiness.is_ready() {
            self.ran = true;
            true
        } else {
            self.pending = true;
            false
        }
    }

    /// Record a readiness change; `true` means the deferred task runs now
    pub fn advance(&mut self, readiness: DocumentReadiness) -> bool {
        self.readiness = readiness;
        if self.pending && !self.ran && readiness.is_ready() {
            self.pending = false;
            self.ran = true;
            return true;
        }
        false
    }

    pub fn has_run(&self) -> bool {
        self.ran
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn runs_immediately_when_interactive() {
        let mut gate = ReadyGate::new(DocumentReadiness::Interactive);
        assert!(gate.schedule());
        assert!(!gate.advance(DocumentReadiness::Complete));
        assert!(!gate.schedule());
    }

    #[test]
    fn defers_while_loading() {
        let mut gate = ReadyGate::new(DocumentReadiness::Loading);
        assert!(!gate.schedule());
        assert!(!gate.has_run());

        assert!(gate.advance(DocumentReadiness::Interactive));
        assert!(!gate.advance(DocumentReadiness::Complete));
        assert!(gate.has_run());
    }

    #[test]
    fn never_runs_without_schedule() {
        let mut gate = ReadyGate::new(DocumentReadiness::Loading);
        assert!(!gate.advance(DocumentReadiness::Interactive));
        assert!(!gate.has_run());
    }
}

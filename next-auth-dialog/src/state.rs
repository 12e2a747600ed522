//! Local state of the dialog's email field and its transitions.

/// Where the email field is in its edit/submit cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EmailPhase {
    #[default]
    Idle,
    Editing,
    /// A validation for the latest text has not answered yet
    Validating,
    Submitting,
}

/// Identifies the text a validation result belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidationTicket(u64);

/// Email text, its validity and the submit flag, owned by one dialog
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DialogState {
    email: String,
    valid_email: bool,
    phase: EmailPhase,
    latest_ticket: u64,
}

impl DialogState {
    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn valid_email(&self) -> bool {
        self.valid_email
    }

    pub fn email_submitting(&self) -> bool {
        self.phase == EmailPhase::Submitting
    }

    pub fn phase(&self) -> EmailPhase {
        self.phase
    }

    /// Stores the new text and issues the ticket its validation must present.
    ///
    /// Typing while a submission is in flight keeps the submitting phase.
    pub fn email_changed(&mut self, text: String) -> ValidationTicket {
        self.email = text;
        self.latest_ticket += 1;
        if self.phase != EmailPhase::Submitting {
            self.phase = EmailPhase::Validating;
        }
        ValidationTicket(self.latest_ticket)
    }

    /// Applies a validation result; returns false when a newer edit made it stale.
    pub fn validation_resolved(&mut self, ticket: ValidationTicket, valid: bool) -> bool {
        if ticket.0 != self.latest_ticket {
            return false;
        }
        self.valid_email = valid;
        if self.phase == EmailPhase::Validating {
            self.phase = EmailPhase::Editing;
        }
        true
    }

    /// Enters the submitting phase and hands out the address to submit.
    ///
    /// Returns `None` while the address is invalid or a submission is running.
    pub fn begin_submit(&mut self) -> Option<String> {
        if !self.valid_email || self.email_submitting() {
            return None;
        }
        self.phase = EmailPhase::Submitting;
        Some(self.email.clone())
    }

    /// Leaves the submitting phase, whatever the outcome was
    pub fn finish_submit(&mut self) {
        if self.email_submitting() {
            self.phase = EmailPhase::Idle;
        }
    }
}

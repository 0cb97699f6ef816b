//! Creation Dialog State
//!
//! `Idle -> Editing -> Submitting -> Idle`. Only one submission may be in
//! flight per dialog and the dialog may not close while it is.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DialogPhase {
    #[default]
    Idle,
    Editing,
    Submitting,
}

impl DialogPhase {
    /// Dialog shown. Ignored while a submission is still running.
    pub fn open(&mut self) {
        if *self != DialogPhase::Submitting {
            *self = DialogPhase::Editing;
        }
    }

    /// Claim the submission slot. Returns false if the click must be ignored.
    pub fn begin_submit(&mut self) -> bool {
        if *self == DialogPhase::Editing {
            *self = DialogPhase::Submitting;
            true
        } else {
            false
        }
    }

    /// Submission settled, successfully or not
    pub fn finish(&mut self) {
        *self = DialogPhase::Idle;
    }

    /// A close attempt (user or programmatic) is allowed
    pub fn allows_close(&self) -> bool {
        *self != DialogPhase::Submitting
    }

    pub fn is_submitting(&self) -> bool {
        *self == DialogPhase::Submitting
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lifecycle() {
        let mut phase = DialogPhase::default();
        assert_eq!(phase, DialogPhase::Idle);
        phase.open();
        assert_eq!(phase, DialogPhase::Editing);
        assert!(phase.begin_submit());
        assert!(phase.is_submitting());
        assert!(!phase.allows_close());
        phase.finish();
        assert_eq!(phase, DialogPhase::Idle);
        assert!(phase.allows_close());
    }

    #[test]
    fn test_double_submit_claims_once() {
        let mut phase = DialogPhase::Editing;
        let claims = (0..2).filter(|_| phase.begin_submit()).count();
        assert_eq!(claims, 1);
    }

    #[test]
    fn test_submit_requires_open_dialog() {
        let mut phase = DialogPhase::Idle;
        assert!(!phase.begin_submit());
    }

    #[test]
    fn test_reopen_during_submission_keeps_lock() {
        let mut phase = DialogPhase::Submitting;
        phase.open();
        assert!(phase.is_submitting());
    }
}

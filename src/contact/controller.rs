use std::time::Duration;

use futures::future::LocalBoxFuture;
use tracing::{debug, info, warn};

use super::delay::Delay;
use super::validation::{validate, Field, SubmissionAttempt, ValidationErrors};

pub const SUCCESS_MESSAGE: &str =
    "Merci ! Votre demande a été enregistrée. Nous revenons vers vous rapidement.";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// A submission is already in flight; nothing changed.
    Ignored,
    /// Validation failed; `errors` holds the reasons.
    Rejected,
    /// Validation passed and `loading` is now set.
    Submitting,
}

/// Everything the quote form owns between renders.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ContactFormState {
    pub fields: SubmissionAttempt,
    pub loading: bool,
    pub errors: ValidationErrors,
}

impl ContactFormState {
    pub fn update_field(&mut self, field: Field, value: String) {
        self.fields.set(field, value);
    }

    pub fn set_consent(&mut self, consent: bool) {
        self.fields.consent = consent;
    }

    pub fn error(&self, field: Field) -> Option<&'static str> {
        self.errors.get(field)
    }

    pub fn begin_submit(&mut self) -> SubmitOutcome {
        if self.loading {
            debug!("submit ignored, a request is already in flight");
            return SubmitOutcome::Ignored;
        }

        self.errors.clear();
        let errors = validate(&self.fields);
        if !errors.is_empty() {
            for error in errors.iter() {
                warn!(%error, "quote request rejected");
            }
            self.errors = errors;
            self.loading = false;
            return SubmitOutcome::Rejected;
        }

        self.loading = true;
        SubmitOutcome::Submitting
    }

    /// Submitting -> Idle. Clears every field back to its default.
    pub fn complete_submit(&mut self) {
        self.loading = false;
        self.errors.clear();
        self.fields = SubmissionAttempt::default();
    }
}

/// Waits out the simulated request, resets the form and then tells the host.
pub async fn settle_after<D, A>(
    mut state: ContactFormState,
    delay: &D,
    duration: Duration,
    on_accepted: A,
) -> ContactFormState
where
    D: Delay + ?Sized,
    A: FnOnce(),
{
    match serde_json::to_string(&state.fields) {
        Ok(payload) => debug!(bytes = payload.len(), "simulating quote request"),
        Err(e) => warn!("could not encode quote request: {}", e),
    }
    delay.wait(duration).await;
    state.complete_submit();
    info!("quote request accepted");
    on_accepted();
    state
}

/// Handles one submit trigger.
///
/// `state` is updated synchronously. Only an attempt that starts submitting
/// yields a settlement future; `on_accepted` is dropped unused otherwise.
pub fn submit<D, A>(
    state: &mut ContactFormState,
    delay: D,
    duration: Duration,
    on_accepted: A,
) -> Option<LocalBoxFuture<'static, ContactFormState>>
where
    D: Delay + 'static,
    A: FnOnce() + 'static,
{
    match state.begin_submit() {
        SubmitOutcome::Ignored | SubmitOutcome::Rejected => None,
        SubmitOutcome::Submitting => {
            let submitting = state.clone();
            Some(Box::pin(async move {
                settle_after(submitting, &delay, duration, on_accepted).await
            }))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::contact::delay::NoDelay;
    use crate::contact::validation::{EMAIL_INVALID, NAME_REQUIRED, PHONE_REQUIRED};
    use futures::executor::block_on;
    use futures::future::{self, LocalBoxFuture};
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;

    #[derive(Default)]
    struct RecordingDelay {
        calls: RefCell<Vec<Duration>>,
    }

    impl Delay for RecordingDelay {
        fn wait(&self, duration: Duration) -> LocalBoxFuture<'static, ()> {
            self.calls.borrow_mut().push(duration);
            Box::pin(future::ready(()))
        }
    }

    fn filled(name: &str, phone: &str, email: &str) -> ContactFormState {
        let mut state = ContactFormState::default();
        state.update_field(Field::Name, name.to_string());
        state.update_field(Field::Phone, phone.to_string());
        state.update_field(Field::Email, email.to_string());
        state.set_consent(true);
        state
    }

    #[test]
    fn valid_attempt_goes_through_submitting_and_resets() {
        let mut state = filled("Jean Dupont", "0659610285", "");
        state.update_field(Field::Message, "Tache d’humidité au sous-sol".to_string());

        assert_eq!(state.begin_submit(), SubmitOutcome::Submitting);
        assert!(state.loading);
        assert!(state.errors.is_empty());

        let delay = RecordingDelay::default();
        let settled = block_on(settle_after(state, &delay, Duration::from_millis(600), || ()));

        assert_eq!(*delay.calls.borrow(), vec![Duration::from_millis(600)]);
        assert!(!settled.loading);
        assert_eq!(settled, ContactFormState::default());
    }

    #[test]
    fn missing_name_never_starts_loading() {
        let mut state = filled("", "0659610285", "");

        assert_eq!(state.begin_submit(), SubmitOutcome::Rejected);
        assert!(!state.loading);
        assert_eq!(state.error(Field::Name), Some(NAME_REQUIRED));
        assert_eq!(state.errors.len(), 1);
        assert_eq!(state.fields.phone, "0659610285");
    }

    #[test]
    fn malformed_email_blocks_submission() {
        let mut state = filled("Jean", "0659610285", "not-an-email");

        assert_eq!(state.begin_submit(), SubmitOutcome::Rejected);
        assert!(!state.loading);
        assert_eq!(state.error(Field::Email), Some(EMAIL_INVALID));
        assert_eq!(state.errors.len(), 1);
    }

    #[test]
    fn second_submit_while_loading_is_ignored() {
        let mut state = filled("Jean", "0659610285", "");
        assert_eq!(state.begin_submit(), SubmitOutcome::Submitting);

        // Even a now-invalid form must not be re-validated mid-flight.
        state.update_field(Field::Name, String::new());
        let before = state.clone();

        assert_eq!(state.begin_submit(), SubmitOutcome::Ignored);
        assert_eq!(state, before);
        assert!(state.loading);
        assert!(state.errors.is_empty());
    }

    #[test]
    fn stale_errors_drop_on_next_attempt() {
        let mut state = filled("", "", "bad");
        assert_eq!(state.begin_submit(), SubmitOutcome::Rejected);
        assert_eq!(state.errors.len(), 3);

        state.update_field(Field::Name, "Jean".to_string());
        state.update_field(Field::Email, String::new());
        assert_eq!(state.begin_submit(), SubmitOutcome::Rejected);
        assert_eq!(state.errors.len(), 1);
        assert_eq!(state.error(Field::Phone), Some(PHONE_REQUIRED));
        assert_eq!(state.error(Field::Name), None);
    }

    #[test]
    fn corrected_attempt_can_be_resubmitted() {
        let mut state = filled("Jean", "", "");
        for _ in 0..3 {
            assert_eq!(state.begin_submit(), SubmitOutcome::Rejected);
        }

        state.update_field(Field::Phone, "0659610285".to_string());
        assert_eq!(state.begin_submit(), SubmitOutcome::Submitting);

        let settled = block_on(settle_after(state, &NoDelay, Duration::ZERO, || ()));
        assert!(!settled.loading);
        assert!(settled.fields.name.is_empty());
        assert!(!settled.fields.consent);
    }

    #[test]
    fn padded_email_is_accepted() {
        let mut state = filled("Jean", "0659610285", "  jean@humitek.fr  ");
        assert_eq!(state.begin_submit(), SubmitOutcome::Submitting);
    }

    #[test]
    fn consent_is_not_checked_by_the_controller() {
        let mut state = filled("Jean", "0659610285", "");
        state.set_consent(false);
        assert_eq!(state.begin_submit(), SubmitOutcome::Submitting);
    }

    fn counter() -> (Rc<Cell<u32>>, impl FnOnce() + 'static) {
        let count = Rc::new(Cell::new(0));
        let bump = {
            let count = count.clone();
            move || count.set(count.get() + 1)
        };
        (count, bump)
    }

    #[test]
    fn accepted_attempt_notifies_once_after_reset() {
        let mut state = filled("Jean Dupont", "0659610285", "");
        let (count, bump) = counter();

        let settling = submit(&mut state, NoDelay, Duration::from_millis(600), bump)
            .expect("valid attempt starts submitting");
        assert!(state.loading);
        assert_eq!(count.get(), 0);

        let settled = block_on(settling);
        assert_eq!(count.get(), 1);
        assert_eq!(settled, ContactFormState::default());
    }

    #[test]
    fn rejected_attempt_never_notifies() {
        let mut state = filled("", "0659610285", "");
        let (count, bump) = counter();

        assert!(submit(&mut state, NoDelay, Duration::ZERO, bump).is_none());
        assert_eq!(count.get(), 0);
        assert!(!state.loading);
        assert_eq!(state.error(Field::Name), Some(NAME_REQUIRED));
    }

    #[test]
    fn ignored_trigger_never_notifies() {
        let mut state = filled("Jean", "0659610285", "");
        let (first, bump_first) = counter();
        let in_flight = submit(&mut state, NoDelay, Duration::ZERO, bump_first);
        assert!(in_flight.is_some());

        let (second, bump_second) = counter();
        let before = state.clone();
        assert!(submit(&mut state, NoDelay, Duration::ZERO, bump_second).is_none());
        assert_eq!(state, before);

        if let Some(settling) = in_flight {
            block_on(settling);
        }
        assert_eq!(first.get(), 1);
        assert_eq!(second.get(), 0);
    }
}

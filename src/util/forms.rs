//! Simulated contact-form submission.
//!
//! There is no backend: a submission disables the button, waits a fake round
//! trip, then shows a success message that fades out on its own. Timing goes
//! through a [`Scheduler`], so the whole lifecycle runs on a virtual clock in
//! tests.
//!
//! TIMELINE
//! ========
//! ```text
//! t = 0                 button -> "Sending...", disabled
//! t = delay             message shown, form reset, button restored, logged
//! t = delay + ttl       message fades
//! t = delay + ttl+fade  message removed
//! ```

#[cfg(test)]
#[path = "forms_test.rs"]
mod forms_test;

use std::fmt;
use std::rc::Rc;
use std::time::Duration;

use pacing::Scheduler;

pub const SENDING_LABEL: &str = "Sending...";
pub const SUCCESS_TEXT: &str = "Thank you! We'll respond within 24 hours.";
pub const SUBMIT_BUTTON_SELECTOR: &str = "button[type=\"submit\"]";
pub const MESSAGE_SELECTOR: &str = ".form-message";
/// Class list for the confirmation message element.
pub const SUCCESS_MESSAGE_CLASS: &str = "form-message form-message-success";

/// The site's three enquiry forms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormKind {
    Coaching,
    Corporate,
    General,
}

impl FormKind {
    pub const ALL: [Self; 3] = [Self::Coaching, Self::Corporate, Self::General];

    /// DOM id of the form element.
    #[must_use]
    pub fn form_id(self) -> &'static str {
        match self {
            Self::Coaching => "coachingForm",
            Self::Corporate => "corporateForm",
            Self::General => "generalForm",
        }
    }

    #[must_use]
    pub fn from_form_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.form_id() == id)
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Coaching => "coaching",
            Self::Corporate => "corporate",
            Self::General => "general",
        }
    }
}

impl fmt::Display for FormKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubmissionTiming {
    pub response_delay: Duration,
    pub message_ttl: Duration,
    pub fade: Duration,
}

/// What a submission needs from a form.
pub trait FormSurface {
    /// Handle to a shown message, so that a later fade or removal hits the
    /// message it was scheduled for and not a newer one.
    type Message: 'static;

    /// Field name/value pairs at submit time.
    fn fields(&self) -> Vec<(String, String)>;

    /// Current submit button label, `None` without a submit button.
    fn submit_label(&self) -> Option<String>;

    fn set_submit(&self, label: &str, disabled: bool);

    fn reset(&self);

    /// Replace any existing message with a new one.
    fn show_message(&self, text: &str) -> Option<Self::Message>;

    fn fade_message(&self, message: &Self::Message);

    fn remove_message(&self, message: &Self::Message);
}

/// Run one simulated submission of `form`.
pub fn simulate_submission<F, S>(form: Rc<F>, kind: FormKind, timing: SubmissionTiming, scheduler: &S)
where
    F: FormSurface + 'static,
    S: Scheduler + Clone + 'static,
{
    let fields = form.fields();
    let original_label = form.submit_label();
    if original_label.is_some() {
        form.set_submit(SENDING_LABEL, true);
    }
    log::debug!("{kind} form: submitting {} fields", fields.len());

    let later = scheduler.clone();
    scheduler.schedule(
        timing.response_delay,
        Box::new(move || {
            let message = form.show_message(SUCCESS_TEXT);
            form.reset();
            if let Some(label) = &original_label {
                form.set_submit(label, false);
            }
            log::info!("{kind} form submitted: {fields:?}");

            if let Some(message) = message {
                schedule_dismissal(form, message, timing, &later);
            }
        }),
    );
}

fn schedule_dismissal<F, S>(form: Rc<F>, message: F::Message, timing: SubmissionTiming, scheduler: &S)
where
    F: FormSurface + 'static,
    S: Scheduler + Clone + 'static,
{
    let later = scheduler.clone();
    scheduler.schedule(
        timing.message_ttl,
        Box::new(move || {
            form.fade_message(&message);
            later.schedule(timing.fade, Box::new(move || form.remove_message(&message)));
        }),
    );
}

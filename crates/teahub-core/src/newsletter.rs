//! Newsletter sign-up form state.
//!
//! There is no backend: an accepted submission is completed by the caller
//! after a short delay, which produces the confirmation toast.

/// Submission status of the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubscribeStatus {
    #[default]
    Idle,
    Subscribing,
}

/// Result of pressing "Subscribe".
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    Ignored,
    Accepted(String),
}

/// A transient confirmation banner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub title: String,
    pub description: String,
}

impl Toast {
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
        }
    }

    /// The newsletter welcome message.
    pub fn welcome(brand: &str) -> Self {
        Self::new(
            format!("Welcome to {}!", brand),
            "You'll receive a confirmation email shortly. Thank you for subscribing!",
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct NewsletterForm {
    email: String,
    status: SubscribeStatus,
}

impl NewsletterForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn status(&self) -> SubscribeStatus {
        self.status
    }

    pub fn is_subscribing(&self) -> bool {
        self.status == SubscribeStatus::Subscribing
    }

    pub fn set_email(&mut self, email: impl Into<String>) {
        self.email = email.into();
    }

    pub fn submit(&mut self) -> SubmitOutcome {
        if self.is_subscribing() || self.email.trim().is_empty() {
            return SubmitOutcome::Ignored;
        }
        self.status = SubscribeStatus::Subscribing;
        log::info!("newsletter subscription accepted");
        SubmitOutcome::Accepted(self.email.clone())
    }

    /// Finish a pending submission. Clears the field and returns the toast
    /// to show.
    pub fn complete(&mut self, brand: &str) -> Toast {
        self.email.clear();
        self.status = SubscribeStatus::Idle;
        Toast::welcome(brand)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_email_ignored() {
        let mut form = NewsletterForm::new();
        assert_eq!(form.submit(), SubmitOutcome::Ignored);

        form.set_email("   ");
        assert_eq!(form.submit(), SubmitOutcome::Ignored);
        assert_eq!(form.status(), SubscribeStatus::Idle);
    }

    #[test]
    fn test_submit_then_complete() {
        let mut form = NewsletterForm::new();
        form.set_email("leaf@example.com");

        assert_eq!(
            form.submit(),
            SubmitOutcome::Accepted("leaf@example.com".to_string())
        );
        assert!(form.is_subscribing());
        assert_eq!(form.submit(), SubmitOutcome::Ignored);

        let toast = form.complete("TeaHub");
        assert_eq!(toast.title, "Welcome to TeaHub!");
        assert!(toast.description.contains("Thank you for subscribing"));
        assert_eq!(form.email(), "");
        assert_eq!(form.status(), SubscribeStatus::Idle);
    }
}

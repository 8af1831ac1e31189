//! Shared world state for user registration BDD scenarios.

use rstest::fixture;
use rulebook::{
    adapters::RuleFn,
    domain::{FailureSeverity, IntoFailure, Outcome, Summary},
    services::RuleBasedValidator,
};

/// The form a new user submits.
#[derive(Debug, Clone, Default)]
pub struct Registration {
    pub email: String,
    pub password: String,
    pub password_repeated: String,
    pub birth_date: Option<String>,
}

/// Scenario world for registration behaviour tests.
#[derive(Debug, Default)]
pub struct RegistrationWorld {
    pub registered_emails: Vec<String>,
    pub registration: Option<Registration>,
    pub summary: Option<Summary>,
}

impl RegistrationWorld {
    /// Builds the registration validator against the registered addresses.
    #[must_use]
    pub fn validator(&self) -> RuleBasedValidator<Registration> {
        let registered = self.registered_emails.clone();
        RuleBasedValidator::new()
            .with_rule(RuleFn::new(password_rule))
            .with_rule(RuleFn::new(move |form: &Registration| {
                email_rule(form, &registered)
            }))
            .with_rule(RuleFn::new(birth_date_rule))
    }
}

fn password_rule(form: &Registration) -> Outcome {
    if form.password != form.password_repeated {
        return "The two passwords you entered are not the same."
            .into_failure(FailureSeverity::Error);
    }
    if form.password.is_empty() || form.password.contains(char::is_whitespace) {
        return "The password you entered does not conform to the password policy."
            .into_failure(FailureSeverity::Error);
    }
    if form.password.len() < 8 {
        return "The password you entered is valid but weak."
            .into_failure(FailureSeverity::Warning);
    }
    Outcome::success()
}

fn email_rule(form: &Registration, registered: &[String]) -> Outcome {
    if !form.email.contains('@') {
        return format!("The email address {} is not a valid mail address.", form.email)
            .into_failure(FailureSeverity::Error);
    }
    if registered.contains(&form.email) {
        return format!("The email address {} is already registered.", form.email)
            .into_failure(FailureSeverity::Error);
    }
    Outcome::success()
}

fn birth_date_rule(form: &Registration) -> Outcome {
    match form.birth_date {
        Some(_) => Outcome::success(),
        None => "You did not enter a birth date. You can add it later."
            .into_failure(FailureSeverity::Information),
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> RegistrationWorld {
    RegistrationWorld::default()
}

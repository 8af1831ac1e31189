//! Given steps for user registration BDD scenarios.

use super::world::{Registration, RegistrationWorld};
use rstest_bdd_macros::given;

#[given(r#"the e-mail address "{email}" is already registered"#)]
fn email_already_registered(world: &mut RegistrationWorld, email: String) {
    world.registered_emails.push(email);
}

#[given(r#"a registration for "{email}" with password "{password}" repeated as "{repeated}""#)]
fn registration_with_passwords(
    world: &mut RegistrationWorld,
    email: String,
    password: String,
    repeated: String,
) {
    world.registration = Some(Registration {
        email,
        password,
        password_repeated: repeated,
        birth_date: None,
    });
}

#[given(r#"the birth date "{birth_date}""#)]
fn registration_birth_date(
    world: &mut RegistrationWorld,
    birth_date: String,
) -> Result<(), eyre::Report> {
    let registration = world
        .registration
        .as_mut()
        .ok_or_else(|| eyre::eyre!("missing registration in scenario world"))?;
    registration.birth_date = Some(birth_date);
    Ok(())
}

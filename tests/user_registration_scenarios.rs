//! Behaviour tests for validating a new user registration.

mod user_registration_steps;

use rstest_bdd_macros::scenario;
use user_registration_steps::world::{RegistrationWorld, world};

#[scenario(
    path = "tests/features/user_registration.feature",
    name = "A complete registration is accepted"
)]
fn complete_registration_is_accepted(world: RegistrationWorld) {
    let _ = world;
}

#[scenario(
    path = "tests/features/user_registration.feature",
    name = "Differing passwords are rejected"
)]
fn differing_passwords_are_rejected(world: RegistrationWorld) {
    let _ = world;
}

#[scenario(
    path = "tests/features/user_registration.feature",
    name = "A weak password needs confirmation"
)]
fn weak_password_needs_confirmation(world: RegistrationWorld) {
    let _ = world;
}

#[scenario(
    path = "tests/features/user_registration.feature",
    name = "A missing birth date is only reported"
)]
fn missing_birth_date_is_reported(world: RegistrationWorld) {
    let _ = world;
}

#[scenario(
    path = "tests/features/user_registration.feature",
    name = "An already registered e-mail address is rejected"
)]
fn registered_email_is_rejected(world: RegistrationWorld) {
    let _ = world;
}

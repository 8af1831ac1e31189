//! When steps for user registration BDD scenarios.

use super::world::RegistrationWorld;
use rstest_bdd_macros::when;
use rulebook::ports::Validator;

#[when("the registration is validated")]
fn validate_registration(world: &mut RegistrationWorld) -> Result<(), eyre::Report> {
    let registration = world
        .registration
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing registration in scenario world"))?;
    let summary = world.validator().validate(registration);
    world.summary = Some(summary);
    Ok(())
}

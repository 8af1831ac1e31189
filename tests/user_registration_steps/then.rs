//! Then steps for user registration BDD scenarios.

use super::world::RegistrationWorld;
use eyre::eyre;
use rstest_bdd_macros::then;
use rulebook::{
    adapters::TracingPresenter,
    domain::{Severity, Summary},
    ports::{PresentationPolicy, SummaryPresenter, SummaryPresenterExt},
};

fn summary(world: &RegistrationWorld) -> Result<&Summary, eyre::Report> {
    world
        .summary
        .as_ref()
        .ok_or_else(|| eyre!("missing summary in scenario world"))
}

#[then(r#"the summary severity is "{severity}""#)]
fn summary_severity_is(world: &RegistrationWorld, severity: String) -> Result<(), eyre::Report> {
    let expected = Severity::try_from(severity.as_str())?;
    let actual = summary(world)?.severity();
    if actual != expected {
        return Err(eyre!("expected severity {expected}, found {actual}"));
    }
    Ok(())
}

#[then("the number of failures is {count:usize}")]
fn number_of_failures_is(world: &RegistrationWorld, count: usize) -> Result<(), eyre::Report> {
    let actual = summary(world)?.failures().count();
    if actual != count {
        return Err(eyre!("expected {count} failures, found {actual}"));
    }
    Ok(())
}

#[then(r#"the first failure reads "{message}""#)]
fn first_failure_reads(world: &RegistrationWorld, message: String) -> Result<(), eyre::Report> {
    let first = summary(world)?
        .failures()
        .next()
        .ok_or_else(|| eyre!("expected at least one failure"))?;
    if first.message() != message {
        return Err(eyre!("unexpected first failure: {}", first.message()));
    }
    Ok(())
}

#[then("the presenter lets the user proceed")]
fn presenter_lets_user_proceed(world: &RegistrationWorld) -> Result<(), eyre::Report> {
    if !TracingPresenter.show(summary(world)?) {
        return Err(eyre!("expected the presenter to let the user proceed"));
    }
    Ok(())
}

#[then("the presenter stops the user")]
fn presenter_stops_user(world: &RegistrationWorld) -> Result<(), eyre::Report> {
    if TracingPresenter.show(summary(world)?) {
        return Err(eyre!("expected the presenter to stop the user"));
    }
    Ok(())
}

#[then("the presenter lets the user proceed once warnings are accepted")]
fn presenter_accepts_warnings(world: &RegistrationWorld) -> Result<(), eyre::Report> {
    let policy = PresentationPolicy::default().accepting_warnings();
    if !TracingPresenter.present(summary(world)?, &policy) {
        return Err(eyre!("expected accepted warnings to let the user proceed"));
    }
    Ok(())
}

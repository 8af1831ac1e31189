//! Tests for severity ranking and attributes.

use crate::domain::{CustomSeverity, FailureSeverity, ParseSeverityError, Severity, SeverityError};
use eyre::ensure;
use rstest::rstest;

#[rstest]
#[case(Severity::Success, 0, false, false, false)]
#[case(Severity::Information, 10, true, false, false)]
#[case(Severity::Warning, 20, true, true, false)]
#[case(Severity::Error, 30, true, true, true)]
fn base_severity_attributes(
    #[case] severity: Severity,
    #[case] rank: u16,
    #[case] is_error: bool,
    #[case] allows_cancel: bool,
    #[case] causes_cancel: bool,
) {
    assert_eq!(severity.rank(), rank);
    assert_eq!(severity.is_error(), is_error);
    assert_eq!(severity.allows_cancel(), allows_cancel);
    assert_eq!(severity.causes_cancel(), causes_cancel);
}

#[rstest]
fn base_severities_form_a_strict_order() {
    let mut shuffled = vec![
        Severity::Warning,
        Severity::Success,
        Severity::Error,
        Severity::Information,
    ];
    shuffled.sort();

    assert_eq!(
        shuffled,
        vec![
            Severity::Success,
            Severity::Information,
            Severity::Warning,
            Severity::Error,
        ]
    );
    assert_eq!(Severity::default(), Severity::Success);
}

#[rstest]
fn custom_severity_ranks_above_error() -> eyre::Result<()> {
    let fatal = Severity::from(CustomSeverity::new("fatal", 40)?);

    ensure!(fatal > Severity::Error, "custom severity should outrank error");
    ensure!(fatal.is_error(), "custom severity should be error-class");
    ensure!(fatal.allows_cancel(), "custom severity should allow cancel");
    ensure!(fatal.causes_cancel(), "custom severity should force cancel");
    ensure!(fatal.as_str() == "fatal", "unexpected name {}", fatal.as_str());
    Ok(())
}

#[rstest]
fn custom_severity_can_leave_the_decision_to_the_user() -> eyre::Result<()> {
    let review = Severity::from(CustomSeverity::new("needs_review", 35)?.without_forced_cancel());

    ensure!(review.allows_cancel(), "should still allow cancel");
    ensure!(!review.causes_cancel(), "should not force cancel");
    Ok(())
}

#[rstest]
#[case("", 40, SeverityError::EmptyName)]
#[case("   ", 40, SeverityError::EmptyName)]
#[case("minor", 15, SeverityError::RankNotAboveError { name: "minor".to_owned(), rank: 15 })]
#[case("tie", 30, SeverityError::RankNotAboveError { name: "tie".to_owned(), rank: 30 })]
fn custom_severity_rejects_invalid_declarations(
    #[case] name: &'static str,
    #[case] rank: u16,
    #[case] expected: SeverityError,
) {
    assert_eq!(CustomSeverity::new(name, rank).map(Severity::from), Err(expected));
}

#[rstest]
fn severities_with_equal_rank_are_equal() -> eyre::Result<()> {
    let left = Severity::from(CustomSeverity::new("blocker", 50)?);
    let right = Severity::from(CustomSeverity::new("showstopper", 50)?.without_forced_cancel());

    ensure!(left == right, "equal ranks should compare equal");
    Ok(())
}

#[rstest]
#[case("success", Severity::Success)]
#[case("Information", Severity::Information)]
#[case(" WARNING ", Severity::Warning)]
#[case("error", Severity::Error)]
fn severity_parses_base_names(#[case] input: &str, #[case] expected: Severity) {
    assert_eq!(Severity::try_from(input), Ok(expected));
}

#[rstest]
fn severity_parse_rejects_unknown_names() {
    assert_eq!(
        Severity::try_from("fatal"),
        Err(ParseSeverityError("fatal".to_owned()))
    );
}

#[rstest]
#[case(FailureSeverity::Information, Severity::Information)]
#[case(FailureSeverity::Warning, Severity::Warning)]
#[case(FailureSeverity::Error, Severity::Error)]
fn failure_severity_converts_to_severity(
    #[case] failure: FailureSeverity,
    #[case] expected: Severity,
) {
    assert_eq!(Severity::from(failure), expected);
    assert_eq!(Severity::from(failure).to_string(), expected.as_str());
}

//! Integration tests validating a zoo and its dogs through the public API.

use rstest::{fixture, rstest};
use rulebook::{
    adapters::{Immediate, RuleFn},
    domain::{FailureSeverity, IntoFailure, Outcome, Severity},
    ports::{AsyncValidator, Validator},
    services::{
        AsyncCollectionValidator, CollectionValidator, IterationOrder, RuleBasedValidator,
        RuleExt, SubCollectionValidator, ValidatorCombiner, ValidatorExt,
    },
};
use tokio_util::sync::CancellationToken;

#[derive(Debug, Clone)]
struct Animal {
    name: String,
    legs: u8,
}

#[derive(Debug, Clone)]
struct Dog {
    animal: Animal,
    owner: Option<String>,
}

#[derive(Debug, Default)]
struct Zoo {
    name: String,
    dogs: Vec<Dog>,
}

fn dog(name: &str, legs: u8, owner: Option<&str>) -> Dog {
    Dog {
        animal: Animal {
            name: name.to_owned(),
            legs,
        },
        owner: owner.map(str::to_owned),
    }
}

fn four_legs(animal: &Animal) -> Outcome {
    if animal.legs == 4 {
        Outcome::success()
    } else {
        format!("{} has {} legs", animal.name, animal.legs).into_failure(FailureSeverity::Warning)
    }
}

fn has_owner(dog: &Dog) -> Outcome {
    match dog.owner {
        Some(_) => Outcome::success(),
        None => {
            format!("{} has no owner", dog.animal.name).into_failure(FailureSeverity::Error)
        }
    }
}

fn dog_validator() -> RuleBasedValidator<Dog> {
    RuleBasedValidator::new()
        .with_rule(RuleFn::new(has_owner).stopping_on_error())
        .with_rule(RuleFn::new(four_legs).project(|dog: &Dog| &dog.animal))
}

#[fixture]
fn zoo() -> Zoo {
    Zoo {
        name: "City Zoo".to_owned(),
        dogs: vec![
            dog("Rex", 4, Some("Ann")),
            dog("Tripod", 3, Some("Bob")),
            dog("Stray", 3, None),
        ],
    }
}

#[rstest]
fn zoo_validation_combines_own_rules_and_dog_rules(zoo: Zoo) {
    let validator = ValidatorCombiner::new()
        .with_rule(RuleFn::new(|zoo: &Zoo| {
            if zoo.name.is_empty() {
                "zoo has no name".into_failure(FailureSeverity::Error)
            } else {
                Outcome::success()
            }
        }))
        .with_validator(SubCollectionValidator::over_slice(
            |zoo: &Zoo| zoo.dogs.as_slice(),
            dog_validator(),
        ));

    let summary = validator.validate(&zoo);
    let failures: Vec<&str> = summary.failures().map(|failure| failure.message()).collect();

    assert_eq!(summary.severity(), Severity::Error);
    assert_eq!(failures, vec!["Stray has no owner", "Tripod has 3 legs"]);
}

#[rstest]
fn rules_first_keeps_checking_legs_after_an_owner_stop(zoo: Zoo) -> eyre::Result<()> {
    let objects_first = CollectionValidator::from_rules(dog_validator());
    let rules_first = CollectionValidator::from_rules(dog_validator())
        .with_iteration_order(IterationOrder::RulesFirst)?;

    let by_object = objects_first.validate_collection(&zoo.dogs);
    let by_rule = rules_first.validate_collection(&zoo.dogs);

    eyre::ensure!(by_object.severity() == Severity::Error, "expected an error");
    eyre::ensure!(
        by_object.failures().count() == 2,
        "the stray's leg count is skipped per object"
    );
    eyre::ensure!(
        by_rule.failures().count() == 3,
        "the leg rule still runs over every dog"
    );
    Ok(())
}

#[rstest]
fn delegated_animal_validation_ignores_owners(zoo: Zoo) {
    let animals = RuleBasedValidator::new()
        .with_rule(RuleFn::new(four_legs))
        .delegate(|dog: &Dog| &dog.animal);
    let collection = CollectionValidator::from_validator(animals);

    let summary = collection.validate(zoo.dogs.as_slice());

    assert_eq!(summary.severity(), Severity::Warning);
    assert_eq!(summary.failures().count(), 2);
}

#[rstest]
#[tokio::test]
async fn async_collection_agrees_with_the_synchronous_one(zoo: Zoo) -> eyre::Result<()> {
    let sync = CollectionValidator::from_validator(dog_validator());
    let lifted = AsyncCollectionValidator::from_validator(Immediate(dog_validator()));
    let token = CancellationToken::new();

    let expected = sync.validate_collection(&zoo.dogs);
    let actual = lifted
        .validate_collection_cancellable(&zoo.dogs, &token)
        .await?;

    eyre::ensure!(actual == expected, "async summary differs from sync summary");
    eyre::ensure!(
        AsyncValidator::validate(&lifted, zoo.dogs.as_slice()).await == expected,
        "plain async run differs"
    );
    Ok(())
}

#[rstest]
fn selectors_can_filter_the_sub_collection(zoo: Zoo) {
    let owned = SubCollectionValidator::<Zoo, Dog>::new(
        |zoo: &Zoo| Box::new(zoo.dogs.iter().filter(|dog| dog.owner.is_some())),
        RuleBasedValidator::new()
            .with_rule(RuleFn::new(four_legs).project(|dog: &Dog| &dog.animal)),
    );

    let summary = owned.validate(&zoo);
    let failures: Vec<&str> = summary.failures().map(|failure| failure.message()).collect();

    assert_eq!(failures, vec!["Tripod has 3 legs"]);
}

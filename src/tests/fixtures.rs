//! Shared rules and sample objects for unit tests.

use crate::{
    domain::{FailureSeverity, Outcome},
    ports::Rule,
    services::Elements,
};
use std::sync::{Arc, Mutex};

/// Records the order in which rules were invoked.
#[derive(Debug, Clone, Default)]
pub(super) struct CallLog(Arc<Mutex<Vec<usize>>>);

impl CallLog {
    pub(super) fn record(&self, id: usize) {
        self.0.lock().expect("call log lock").push(id);
    }

    pub(super) fn calls(&self) -> Vec<usize> {
        self.0.lock().expect("call log lock").clone()
    }

    pub(super) fn count(&self) -> usize {
        self.0.lock().expect("call log lock").len()
    }
}

/// A rule returning a fixed outcome and logging each invocation.
#[derive(Debug, Clone)]
pub(super) struct RecordingRule {
    id: usize,
    outcome: Outcome,
    stops_on_error: bool,
    log: CallLog,
}

impl RecordingRule {
    pub(super) fn passing(id: usize, log: &CallLog) -> Self {
        Self {
            id,
            outcome: Outcome::success(),
            stops_on_error: false,
            log: log.clone(),
        }
    }

    pub(super) fn failing(id: usize, severity: FailureSeverity, log: &CallLog) -> Self {
        Self {
            id,
            outcome: Outcome::failure(severity, format!("r{id}")),
            stops_on_error: false,
            log: log.clone(),
        }
    }

    pub(super) fn stopping(mut self) -> Self {
        self.stops_on_error = true;
        self
    }
}

impl<T: ?Sized> Rule<T> for RecordingRule {
    fn validate(&self, _object: &T) -> Outcome {
        self.log.record(self.id);
        self.outcome.clone()
    }

    fn stops_on_error(&self) -> bool {
        self.stops_on_error
    }
}

/// Records which rule saw which object, as `rule * 100 + object`.
#[derive(Debug, Clone)]
pub(super) struct GridRule {
    id: usize,
    stops_on_error: bool,
    log: CallLog,
}

impl GridRule {
    pub(super) fn new(id: usize, log: &CallLog) -> Self {
        Self {
            id,
            stops_on_error: false,
            log: log.clone(),
        }
    }

    pub(super) fn stopping(mut self) -> Self {
        self.stops_on_error = true;
        self
    }
}

impl Rule<usize> for GridRule {
    fn validate(&self, object: &usize) -> Outcome {
        self.log.record(self.id * 100 + object);
        Outcome::failure(FailureSeverity::Error, format!("r{} on {object}", self.id))
    }

    fn stops_on_error(&self) -> bool {
        self.stops_on_error
    }
}

/// Any animal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(super) struct Animal {
    pub name: String,
    pub legs: u8,
}

/// A dog is an animal with an optional owner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(super) struct Dog {
    pub animal: Animal,
    pub owner: Option<String>,
}

impl Dog {
    pub(super) fn new(name: &str, owner: Option<&str>) -> Self {
        Self {
            animal: Animal {
                name: name.to_owned(),
                legs: 4,
            },
            owner: owner.map(str::to_owned),
        }
    }
}

/// A zoo keeps dogs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(super) struct Zoo {
    pub dogs: Vec<Dog>,
}

/// Borrows the animal part of a dog.
pub(super) const fn animal_of(dog: &Dog) -> &Animal {
    &dog.animal
}

/// Selects every dog of a zoo.
pub(super) fn dogs_of(zoo: &Zoo) -> Elements<'_, Dog> {
    Box::new(zoo.dogs.iter())
}

/// Selects only the dogs that have an owner.
pub(super) fn owned_dogs(zoo: &Zoo) -> Elements<'_, Dog> {
    Box::new(zoo.dogs.iter().filter(|dog| dog.owner.is_some()))
}

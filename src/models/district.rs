//! District: a group of people split into odd and even partitions.

use crate::models::person::{DistrictId, Parity, Person};
use serde::{Deserialize, Serialize};

/// A district competing in the game.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct District {
    id: DistrictId,
    /// People born in odd months, in insertion order.
    odd_population: Vec<Person>,
    /// People born in even months, in insertion order.
    even_population: Vec<Person>,
}

impl District {
    /// Create an empty district.
    pub fn new(id: DistrictId) -> Self {
        Self {
            id,
            odd_population: Vec::new(),
            even_population: Vec::new(),
        }
    }

    pub fn id(&self) -> DistrictId {
        self.id
    }

    pub fn odd_population(&self) -> &[Person] {
        &self.odd_population
    }

    pub fn even_population(&self) -> &[Person] {
        &self.even_population
    }

    /// The partition list for one side.
    pub fn population_of(&self, parity: Parity) -> &[Person] {
        match parity {
            Parity::Odd => &self.odd_population,
            Parity::Even => &self.even_population,
        }
    }

    pub(crate) fn population_of_mut(&mut self, parity: Parity) -> &mut Vec<Person> {
        match parity {
            Parity::Odd => &mut self.odd_population,
            Parity::Even => &mut self.even_population,
        }
    }

    /// Add a person to the partition matching their birth month.
    pub fn add_person(&mut self, person: Person) {
        self.population_of_mut(person.parity()).push(person);
    }

    pub fn add_odd_person(&mut self, person: Person) {
        self.odd_population.push(person);
    }

    pub fn add_even_person(&mut self, person: Person) {
        self.even_population.push(person);
    }

    /// Remove and return the member at `index` of one partition.
    pub(crate) fn take_person(&mut self, parity: Parity, index: usize) -> Option<Person> {
        let population = self.population_of_mut(parity);
        (index < population.len()).then(|| population.remove(index))
    }

    /// Total number of people in both partitions.
    pub fn population(&self) -> usize {
        self.odd_population.len() + self.even_population.len()
    }

    /// A district with an empty partition can no longer field a duel and must leave the game.
    pub fn is_defeated(&self) -> bool {
        self.odd_population.is_empty() || self.even_population.is_empty()
    }
}

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::car::{Car, COLORS, DELEGATION_ID, MAKES, MAX_PRICE, MIN_PRICE, MODELS, YEARS};

/// Number of records a default run produces.
pub const DEFAULT_FLEET_SIZE: usize = 50;

/// Samples car records one at a time, keeping the 1-based sequence index that
/// feeds the `operation` sort key.
#[derive(Debug)]
pub struct CarGenerator {
    rng: StdRng,
    next_index: usize,
}

impl CarGenerator {
    /// An unseeded generator; every run produces a different dataset.
    #[must_use]
    pub fn new() -> Self {
        CarGenerator {
            rng: StdRng::from_entropy(),
            next_index: 1,
        }
    }

    /// A seeded generator; the same seed reproduces the same dataset.
    #[must_use]
    pub fn with_seed(seed: u64) -> Self {
        CarGenerator {
            rng: StdRng::seed_from_u64(seed),
            next_index: 1,
        }
    }

    /// The sequence index the next record will carry.
    #[must_use]
    pub fn next_index(&self) -> usize {
        self.next_index
    }

    /// Sample the next record. Every random field is drawn independently; in
    /// particular the year embedded in `operation` and the `year` field are
    /// separate draws and may disagree, matching the table this seeds.
    pub fn next_car(&mut self) -> Car {
        let index = self.next_index;
        self.next_index += 1;

        let operation_year = self.pick(&YEARS);
        Car {
            delegation_id: DELEGATION_ID.to_string(),
            operation: Car::operation_key(operation_year, index),
            make: self.pick(&MAKES).to_string(),
            model: self.pick(&MODELS).to_string(),
            year: self.pick(&YEARS),
            color: self.pick(&COLORS).to_string(),
            rented: self.rng.gen(),
            price: self.rng.gen_range(MIN_PRICE..=MAX_PRICE),
        }
    }

    /// Sample `count` records in sequence order.
    pub fn generate_fleet(&mut self, count: usize) -> Vec<Car> {
        (0..count).map(|_| self.next_car()).collect()
    }

    fn pick<T: Copy>(&mut self, candidates: &[T]) -> T {
        candidates[self.rng.gen_range(0..candidates.len())]
    }
}

impl Default for CarGenerator {
    fn default() -> Self {
        CarGenerator::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fleet_size() {
        let mut generator = CarGenerator::new();
        let fleet = generator.generate_fleet(DEFAULT_FLEET_SIZE);
        assert_eq!(fleet.len(), 50);
    }

    #[test]
    fn test_sequence_index_matches_position() {
        let mut generator = CarGenerator::new();
        let fleet = generator.generate_fleet(DEFAULT_FLEET_SIZE);
        for (position, car) in fleet.iter().enumerate() {
            let suffix = car.operation.rsplit('#').next().unwrap();
            assert_eq!(suffix.len(), 3);
            assert_eq!(suffix.parse::<usize>().unwrap(), position + 1);
        }
        assert_eq!(generator.next_index(), 51);
    }

    #[test]
    fn test_fields_drawn_from_candidate_sets() {
        let mut generator = CarGenerator::new();
        for car in generator.generate_fleet(200) {
            assert_eq!(car.delegation_id, DELEGATION_ID);
            assert!(MAKES.contains(&car.make.as_str()));
            assert!(MODELS.contains(&car.model.as_str()));
            assert!(COLORS.contains(&car.color.as_str()));
            assert!(YEARS.contains(&car.year));
            assert!((MIN_PRICE..=MAX_PRICE).contains(&car.price));

            let mut parts = car.operation.split('#');
            assert_eq!(parts.next(), Some("car"));
            let operation_year = parts.next().unwrap().parse::<i32>().unwrap();
            assert!(YEARS.contains(&operation_year));
        }
    }

    #[test]
    fn test_seeded_generation_is_reproducible() {
        let fleet_1 = CarGenerator::with_seed(42).generate_fleet(DEFAULT_FLEET_SIZE);
        let fleet_2 = CarGenerator::with_seed(42).generate_fleet(DEFAULT_FLEET_SIZE);
        assert_eq!(fleet_1, fleet_2);

        let fleet_3 = CarGenerator::with_seed(43).generate_fleet(DEFAULT_FLEET_SIZE);
        assert_ne!(fleet_1, fleet_3);
    }
}

//! Recommendation Rules
//!
//! Each rule inspects the raw input record against a fixed threshold and
//! yields at most one recommendation. Rules are independent; every rule is
//! evaluated on every call, in the order of [`RULES`].
//!
//! | Rule                 | Fires when         | Savings (t/yr)          |
//! |----------------------|--------------------|-------------------------|
//! | reduce_driving       | carMiles > 500     | carMiles × 0.25 × 0.4   |
//! | reduce_flights       | flights > 10       | flights × 0.5 × 2.5     |
//! | efficient_lighting   | electricity > 800  | electricity × 0.2 × 0.5 |
//! | reduce_meat          | meat > 7           | 2 × 3.2 × 52 / 12       |
//! | buy_local_produce    | localFood < 50     | 2.4                     |
//! | reduce_waste         | waste > 3          | (waste − 2) × 2.5 × 52  |

use crate::data::{CarbonData, CategoryId};
use crate::recommendations::types::{Difficulty, Impact, Recommendation};

/// Signature shared by all rules
pub type Rule = fn(&CarbonData) -> Option<Recommendation>;

/// Rules in evaluation order (also the tie-break order)
pub const RULES: [Rule; 6] = [
    reduce_driving,
    reduce_flights,
    switch_to_efficient_lighting,
    reduce_meat,
    buy_local_produce,
    reduce_waste,
];

/// Two meat meals per month replaced
const MEAT_MEALS_SAVINGS: f64 = 2.0 * 3.2 * 52.0 / 12.0;

const LOCAL_PRODUCE_SAVINGS: f64 = 2.4;

fn card(
    title: &str,
    impact: Impact,
    difficulty: Difficulty,
    savings: f64,
    description: &str,
    category: CategoryId,
) -> Recommendation {
    Recommendation {
        title: title.to_string(),
        impact,
        difficulty,
        savings,
        description: description.to_string(),
        category,
    }
}

/// Driving a quarter less
pub fn reduce_driving(data: &CarbonData) -> Option<Recommendation> {
    let miles = data.transport.car_miles;
    if miles <= 500.0 {
        return None;
    }
    Some(card(
        "Reduce driving by 25%",
        Impact::High,
        Difficulty::Medium,
        miles * 0.25 * 0.4,
        "Combine trips, work from home more, or use public transport",
        CategoryId::Transport,
    ))
}

pub fn reduce_flights(data: &CarbonData) -> Option<Recommendation> {
    let flights = data.transport.flights;
    if flights <= 10.0 {
        return None;
    }
    Some(card(
        "Offset or reduce flights",
        Impact::VeryHigh,
        Difficulty::Hard,
        flights * 0.5 * 2.5,
        "Consider domestic travel alternatives or carbon offset programs",
        CategoryId::Transport,
    ))
}

pub fn switch_to_efficient_lighting(data: &CarbonData) -> Option<Recommendation> {
    let kwh = data.energy.electricity;
    if kwh <= 800.0 {
        return None;
    }
    Some(card(
        "Switch to LED bulbs & efficient appliances",
        Impact::Medium,
        Difficulty::Easy,
        kwh * 0.2 * 0.5,
        "Replace incandescent bulbs and upgrade old appliances",
        CategoryId::Energy,
    ))
}

pub fn reduce_meat(data: &CarbonData) -> Option<Recommendation> {
    if data.food.meat <= 7.0 {
        return None;
    }
    Some(card(
        "Try \"Meatless Monday\" or reduce meat intake",
        Impact::High,
        Difficulty::Easy,
        MEAT_MEALS_SAVINGS,
        "Replace 2 meat meals per month with plant-based alternatives",
        CategoryId::Food,
    ))
}

/// Fires for any local-food preference below 50, so every ordinal level
pub fn buy_local_produce(data: &CarbonData) -> Option<Recommendation> {
    if data.food.local_food >= 50.0 {
        return None;
    }
    Some(card(
        "Buy more local and seasonal produce",
        Impact::Medium,
        Difficulty::Easy,
        LOCAL_PRODUCE_SAVINGS,
        "Shop at farmers markets or choose local options at grocery stores",
        CategoryId::Food,
    ))
}

pub fn reduce_waste(data: &CarbonData) -> Option<Recommendation> {
    let waste = data.lifestyle.waste;
    if waste <= 3.0 {
        return None;
    }
    Some(card(
        "Reduce waste and increase recycling",
        Impact::Medium,
        Difficulty::Easy,
        (waste - 2.0) * 2.5 * 52.0,
        "Focus on reducing single-use items and composting organic waste",
        CategoryId::Lifestyle,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::Field;
    use approx::assert_relative_eq;

    fn with(field: Field, value: f64) -> CarbonData {
        CarbonData::default().with_value(field, value)
    }

    #[test]
    fn test_reduce_driving_threshold() {
        assert!(reduce_driving(&with(Field::CarMiles, 500.0)).is_none());

        let rec = reduce_driving(&with(Field::CarMiles, 501.0)).unwrap();
        assert_relative_eq!(rec.savings, 50.1, epsilon = 1e-9);
        assert_eq!(rec.impact, Impact::High);
        assert_eq!(rec.difficulty, Difficulty::Medium);
        assert_eq!(rec.category, CategoryId::Transport);
    }

    #[test]
    fn test_reduce_flights_threshold() {
        assert!(reduce_flights(&with(Field::Flights, 10.0)).is_none());

        let rec = reduce_flights(&with(Field::Flights, 12.0)).unwrap();
        assert_relative_eq!(rec.savings, 15.0);
        assert_eq!(rec.impact, Impact::VeryHigh);
        assert_eq!(rec.difficulty, Difficulty::Hard);
    }

    #[test]
    fn test_efficient_lighting_threshold() {
        assert!(switch_to_efficient_lighting(&with(Field::Electricity, 800.0)).is_none());

        let rec = switch_to_efficient_lighting(&with(Field::Electricity, 1000.0)).unwrap();
        assert_relative_eq!(rec.savings, 100.0);
        assert_eq!(rec.category, CategoryId::Energy);
    }

    #[test]
    fn test_reduce_meat_constant_savings() {
        assert!(reduce_meat(&with(Field::Meat, 7.0)).is_none());

        let rec = reduce_meat(&with(Field::Meat, 8.0)).unwrap();
        assert_relative_eq!(rec.savings, 2.0 * 3.2 * 52.0 / 12.0);
        assert_relative_eq!(rec.savings, 27.7333, epsilon = 1e-3);
        assert_eq!(rec.impact, Impact::High);
        assert_eq!(rec.difficulty, Difficulty::Easy);

        // Constant regardless of how far over the threshold
        let heavy = reduce_meat(&with(Field::Meat, 20.0)).unwrap();
        assert_eq!(heavy.savings, rec.savings);
    }

    #[test]
    fn test_buy_local_produce_threshold() {
        let rec = buy_local_produce(&with(Field::LocalFood, 4.0)).unwrap();
        assert_eq!(rec.savings, 2.4);
        assert!(buy_local_produce(&with(Field::LocalFood, 49.9)).is_some());
        assert!(buy_local_produce(&with(Field::LocalFood, 50.0)).is_none());
    }

    #[test]
    fn test_reduce_waste_threshold() {
        assert!(reduce_waste(&with(Field::Waste, 3.0)).is_none());

        let rec = reduce_waste(&with(Field::Waste, 4.0)).unwrap();
        assert_relative_eq!(rec.savings, 260.0);
        assert_eq!(rec.category, CategoryId::Lifestyle);
    }
}

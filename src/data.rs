//! Input Record
//!
//! The calculator's single piece of user data: four categories of three
//! fields each. Values are raw units (miles, kWh, dollars) or ordinal
//! option indices, depending on the field's kind in the category catalog.
//!
//! The record is `Copy` and never mutated by the computation. Edits go
//! through [`CarbonData::with_value`], which returns a new record.

use crate::input::InputError;
use anyhow::{Context, Result};
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::Path;
use std::str::FromStr;
use std::sync::OnceLock;

/// One of the four input groupings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CategoryId {
    Transport,
    Energy,
    Food,
    Lifestyle,
}

impl CategoryId {
    pub const ALL: [CategoryId; 4] = [
        CategoryId::Transport,
        CategoryId::Energy,
        CategoryId::Food,
        CategoryId::Lifestyle,
    ];

    /// Short label used on recommendation cards ("Energy", not "Home Energy")
    pub fn label(self) -> &'static str {
        match self {
            CategoryId::Transport => "Transportation",
            CategoryId::Energy => "Energy",
            CategoryId::Food => "Food",
            CategoryId::Lifestyle => "Lifestyle",
        }
    }

    /// Fields belonging to this category, in form order
    pub fn fields(self) -> [Field; 3] {
        match self {
            CategoryId::Transport => [Field::CarMiles, Field::PublicTransport, Field::Flights],
            CategoryId::Energy => [Field::Electricity, Field::Gas, Field::Heating],
            CategoryId::Food => [Field::Meat, Field::Dairy, Field::LocalFood],
            CategoryId::Lifestyle => [Field::Shopping, Field::Waste, Field::Recycling],
        }
    }
}

impl fmt::Display for CategoryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Every input field the calculator knows about
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Field {
    CarMiles,
    PublicTransport,
    Flights,
    Electricity,
    Gas,
    Heating,
    Meat,
    Dairy,
    LocalFood,
    Shopping,
    Waste,
    Recycling,
}

impl Field {
    pub const ALL: [Field; 12] = [
        Field::CarMiles,
        Field::PublicTransport,
        Field::Flights,
        Field::Electricity,
        Field::Gas,
        Field::Heating,
        Field::Meat,
        Field::Dairy,
        Field::LocalFood,
        Field::Shopping,
        Field::Waste,
        Field::Recycling,
    ];

    /// Key used in profile JSON and on the command line
    pub fn key(self) -> &'static str {
        match self {
            Field::CarMiles => "carMiles",
            Field::PublicTransport => "publicTransport",
            Field::Flights => "flights",
            Field::Electricity => "electricity",
            Field::Gas => "gas",
            Field::Heating => "heating",
            Field::Meat => "meat",
            Field::Dairy => "dairy",
            Field::LocalFood => "localFood",
            Field::Shopping => "shopping",
            Field::Waste => "waste",
            Field::Recycling => "recycling",
        }
    }

    pub fn category(self) -> CategoryId {
        match self {
            Field::CarMiles | Field::PublicTransport | Field::Flights => CategoryId::Transport,
            Field::Electricity | Field::Gas | Field::Heating => CategoryId::Energy,
            Field::Meat | Field::Dairy | Field::LocalFood => CategoryId::Food,
            Field::Shopping | Field::Waste | Field::Recycling => CategoryId::Lifestyle,
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Lookup of accepted spellings: `carMiles`, `car_miles`, `transport.carMiles`
fn field_lookup() -> &'static FxHashMap<String, Field> {
    static LOOKUP: OnceLock<FxHashMap<String, Field>> = OnceLock::new();
    LOOKUP.get_or_init(|| {
        let mut map = FxHashMap::default();
        for field in Field::ALL {
            let key = field.key();
            let category = format!("{:?}", field.category()).to_lowercase();
            map.insert(key.to_string(), field);
            map.insert(to_snake_case(key), field);
            map.insert(format!("{}.{}", category, key), field);
        }
        map
    })
}

fn to_snake_case(key: &str) -> String {
    let mut out = String::with_capacity(key.len() + 2);
    for ch in key.chars() {
        if ch.is_ascii_uppercase() {
            out.push('_');
            out.push(ch.to_ascii_lowercase());
        } else {
            out.push(ch);
        }
    }
    out
}

impl FromStr for Field {
    type Err = InputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        field_lookup()
            .get(s.trim())
            .copied()
            .ok_or_else(|| InputError::UnknownField(s.trim().to_string()))
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TransportInputs {
    pub car_miles: f64,
    pub public_transport: f64,
    pub flights: f64,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct EnergyInputs {
    pub electricity: f64,
    pub gas: f64,
    pub heating: f64,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FoodInputs {
    pub meat: f64,
    pub dairy: f64,
    pub local_food: f64,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct LifestyleInputs {
    pub shopping: f64,
    pub waste: f64,
    pub recycling: f64,
}

/// Complete calculator input
///
/// `Default` is the empty form: every field 0.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CarbonData {
    pub transport: TransportInputs,
    pub energy: EnergyInputs,
    pub food: FoodInputs,
    pub lifestyle: LifestyleInputs,
}

impl CarbonData {
    /// Load a profile from a JSON file
    ///
    /// Missing categories and fields default to 0. Values pass through the
    /// input boundary, so negative or non-finite numbers become 0.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read profile file: {:?}", path))?;

        let data: CarbonData = serde_json::from_str(&contents)
            .with_context(|| format!("Failed to parse profile JSON: {:?}", path))?;

        Ok(data.sanitized())
    }

    /// Current value of a field
    pub fn get(&self, field: Field) -> f64 {
        match field {
            Field::CarMiles => self.transport.car_miles,
            Field::PublicTransport => self.transport.public_transport,
            Field::Flights => self.transport.flights,
            Field::Electricity => self.energy.electricity,
            Field::Gas => self.energy.gas,
            Field::Heating => self.energy.heating,
            Field::Meat => self.food.meat,
            Field::Dairy => self.food.dairy,
            Field::LocalFood => self.food.local_food,
            Field::Shopping => self.lifestyle.shopping,
            Field::Waste => self.lifestyle.waste,
            Field::Recycling => self.lifestyle.recycling,
        }
    }

    /// Copy of this record with one field replaced
    ///
    /// The value is stored as given; clamping belongs to the input boundary.
    #[must_use]
    pub fn with_value(mut self, field: Field, value: f64) -> Self {
        let slot = match field {
            Field::CarMiles => &mut self.transport.car_miles,
            Field::PublicTransport => &mut self.transport.public_transport,
            Field::Flights => &mut self.transport.flights,
            Field::Electricity => &mut self.energy.electricity,
            Field::Gas => &mut self.energy.gas,
            Field::Heating => &mut self.energy.heating,
            Field::Meat => &mut self.food.meat,
            Field::Dairy => &mut self.food.dairy,
            Field::LocalFood => &mut self.food.local_food,
            Field::Shopping => &mut self.lifestyle.shopping,
            Field::Waste => &mut self.lifestyle.waste,
            Field::Recycling => &mut self.lifestyle.recycling,
        };
        *slot = value;
        self
    }

    /// True once any field holds a positive value
    pub fn has_data(&self) -> bool {
        self.entries().any(|(_, value)| value > 0.0)
    }

    /// Copy with every field clamped by the input boundary policy
    #[must_use]
    pub fn sanitized(self) -> Self {
        Field::ALL.iter().fold(self, |data, &field| {
            let value = crate::input::sanitize_amount(data.get(field));
            data.with_value(field, value)
        })
    }

    /// (field, value) pairs in form order
    pub fn entries(&self) -> impl Iterator<Item = (Field, f64)> + '_ {
        Field::ALL.iter().map(move |&f| (f, self.get(f)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_empty() {
        let data = CarbonData::default();
        assert!(!data.has_data());
        assert!(data.entries().all(|(_, v)| v == 0.0));
    }

    #[test]
    fn test_with_value_leaves_source_untouched() {
        let before = CarbonData::default();
        let after = before.with_value(Field::Electricity, 900.0);

        assert_eq!(before.energy.electricity, 0.0);
        assert_eq!(after.energy.electricity, 900.0);
        assert!(after.has_data());
    }

    #[test]
    fn test_get_matches_with_value_for_every_field() {
        for (i, field) in Field::ALL.iter().enumerate() {
            let data = CarbonData::default().with_value(*field, i as f64 + 1.0);
            assert_eq!(data.get(*field), i as f64 + 1.0, "field {}", field);
        }
    }

    #[test]
    fn test_field_categories() {
        for category in CategoryId::ALL {
            for field in category.fields() {
                assert_eq!(field.category(), category);
            }
        }
    }

    #[test]
    fn test_field_from_str_spellings() {
        assert_eq!("carMiles".parse::<Field>().unwrap(), Field::CarMiles);
        assert_eq!("car_miles".parse::<Field>().unwrap(), Field::CarMiles);
        assert_eq!("food.localFood".parse::<Field>().unwrap(), Field::LocalFood);
        assert_eq!(" recycling ".parse::<Field>().unwrap(), Field::Recycling);

        let err = "boatMiles".parse::<Field>().unwrap_err();
        assert!(matches!(err, InputError::UnknownField(ref k) if k == "boatMiles"));
    }

    #[test]
    fn test_json_profile_defaults_missing_fields() {
        let json = r#"{
            "transport": { "carMiles": 600 },
            "food": { "meat": 3, "localFood": 1 }
        }"#;

        let data: CarbonData = serde_json::from_str(json).unwrap();
        assert_eq!(data.transport.car_miles, 600.0);
        assert_eq!(data.transport.flights, 0.0);
        assert_eq!(data.food.local_food, 1.0);
        assert_eq!(data.energy, EnergyInputs::default());
    }

    #[test]
    fn test_sanitized_clamps_negative_values() {
        let data = CarbonData::default()
            .with_value(Field::Shopping, -40.0)
            .with_value(Field::Waste, 2.0)
            .sanitized();

        assert_eq!(data.lifestyle.shopping, 0.0);
        assert_eq!(data.lifestyle.waste, 2.0);
    }
}

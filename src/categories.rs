//! Category Catalog
//!
//! Static descriptors for the four input categories: field labels, units,
//! option lists and the linear coefficient (tons CO₂ per unit) for each
//! field. Fixed at build time.
//!
//! | Category       | Field           | Factor | Kind               |
//! |----------------|-----------------|--------|--------------------|
//! | Transportation | carMiles        | 0.4    | numeric (miles)    |
//! |                | publicTransport | 0.2    | ordinal (5 levels) |
//! |                | flights         | 2.5    | ordinal (5 levels) |
//! | Home Energy    | electricity     | 0.5    | numeric (kWh)      |
//! |                | gas             | 5.3    | ordinal (5 levels) |
//! |                | heating         | 22.4   | ordinal (5 levels) |
//! | Food & Diet    | meat            | 3.2    | ordinal (5 levels) |
//! |                | dairy           | 1.1    | ordinal (5 levels) |
//! |                | localFood       | -0.02  | ordinal (5 levels) |
//! | Lifestyle      | shopping        | 0.01   | numeric ($)        |
//! |                | waste           | 2.5    | ordinal (5 levels) |
//! |                | recycling       | -0.05  | ordinal (5 levels) |
//!
//! Negative factors mark mitigating behaviours. The estimator still adds
//! their magnitude to the footprint.

use crate::data::{CategoryId, Field};
use serde::Serialize;

/// How a field is entered
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum FieldKind {
    /// Free numeric entry in a physical unit
    Numeric { unit: &'static str },
    /// Choice from a fixed option list; the stored value is the option index
    Ordinal { levels: &'static [&'static str] },
}

impl FieldKind {
    /// Number of options for ordinal fields
    pub fn level_count(&self) -> Option<usize> {
        match self {
            FieldKind::Numeric { .. } => None,
            FieldKind::Ordinal { levels } => Some(levels.len()),
        }
    }

    /// Option label for a stored ordinal value
    pub fn level_label(&self, value: f64) -> Option<&'static str> {
        match self {
            FieldKind::Numeric { .. } => None,
            FieldKind::Ordinal { levels } => {
                if value < 0.0 || value.fract() != 0.0 {
                    return None;
                }
                levels.get(value as usize).copied()
            }
        }
    }
}

/// One input field of a category
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FieldDescriptor {
    pub field: Field,
    pub label: &'static str,
    /// Tons CO₂ per unit of input (or per ordinal step)
    pub factor: f64,
    pub kind: FieldKind,
}

impl FieldDescriptor {
    /// Footprint contribution of a value: `value × |factor|`
    ///
    /// Same rule for numeric and ordinal fields.
    #[inline]
    pub fn contribution(&self, value: f64) -> f64 {
        value * self.factor.abs()
    }

    /// True for fields whose behaviour reduces emissions (negative factor)
    pub fn is_mitigating(&self) -> bool {
        self.factor < 0.0
    }
}

/// A category card: title plus its three fields
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CategoryDescriptor {
    pub id: CategoryId,
    pub title: &'static str,
    pub fields: [FieldDescriptor; 3],
}

const FREQUENCY_PUBLIC_TRANSPORT: &[&str] = &[
    "Never",
    "Rarely (1-2 times/month)",
    "Sometimes (1-2 times/week)",
    "Often (3-4 times/week)",
    "Daily",
];

const FREQUENCY_FLIGHTS: &[&str] = &[
    "Never",
    "1-2 flights/year",
    "3-5 flights/year",
    "6-10 flights/year",
    "More than 10 flights/year",
];

const HOME_SIZE: &[&str] = &[
    "Studio/1BR",
    "2BR Apartment",
    "3BR House",
    "4BR House",
    "5+ BR House",
];

const HEATING_SOURCE: &[&str] = &[
    "Electric",
    "Natural Gas",
    "Oil",
    "Solar/Renewable",
    "Wood/Biomass",
];

const MEAT_CONSUMPTION: &[&str] = &[
    "Vegetarian/Vegan",
    "Rarely (1-2 times/week)",
    "Moderate (3-5 times/week)",
    "High (6-10 times/week)",
    "Very High (11+ times/week)",
];

const DAIRY_CONSUMPTION: &[&str] = &[
    "None",
    "Low (1-3 servings/week)",
    "Moderate (4-7 servings/week)",
    "High (8-14 servings/week)",
    "Very High (15+ servings/week)",
];

const LOCAL_FOOD: &[&str] = &[
    "Never",
    "Rarely (10-25%)",
    "Sometimes (25-50%)",
    "Often (50-75%)",
    "Always (75-100%)",
];

const WASTE_GENERATION: &[&str] = &[
    "Very Low (minimal waste)",
    "Low (1-2 bags/week)",
    "Moderate (3-4 bags/week)",
    "High (5-6 bags/week)",
    "Very High (7+ bags/week)",
];

const RECYCLING_HABITS: &[&str] = &[
    "Never recycle",
    "Rarely (25%)",
    "Sometimes (50%)",
    "Often (75%)",
    "Always (90-100%)",
];

static DEFAULT_CATEGORIES: [CategoryDescriptor; 4] = [
    CategoryDescriptor {
        id: CategoryId::Transport,
        title: "Transportation",
        fields: [
            FieldDescriptor {
                field: Field::CarMiles,
                label: "Car Miles per Month",
                factor: 0.4,
                kind: FieldKind::Numeric { unit: "miles" },
            },
            FieldDescriptor {
                field: Field::PublicTransport,
                label: "Public Transport Usage",
                factor: 0.2,
                kind: FieldKind::Ordinal { levels: FREQUENCY_PUBLIC_TRANSPORT },
            },
            FieldDescriptor {
                field: Field::Flights,
                label: "Flight Frequency",
                factor: 2.5,
                kind: FieldKind::Ordinal { levels: FREQUENCY_FLIGHTS },
            },
        ],
    },
    CategoryDescriptor {
        id: CategoryId::Energy,
        title: "Home Energy",
        fields: [
            FieldDescriptor {
                field: Field::Electricity,
                label: "Monthly Electricity Usage",
                factor: 0.5,
                kind: FieldKind::Numeric { unit: "kWh" },
            },
            FieldDescriptor {
                field: Field::Gas,
                label: "Home Size",
                factor: 5.3,
                kind: FieldKind::Ordinal { levels: HOME_SIZE },
            },
            FieldDescriptor {
                field: Field::Heating,
                label: "Primary Heating Source",
                factor: 22.4,
                kind: FieldKind::Ordinal { levels: HEATING_SOURCE },
            },
        ],
    },
    CategoryDescriptor {
        id: CategoryId::Food,
        title: "Food & Diet",
        fields: [
            FieldDescriptor {
                field: Field::Meat,
                label: "Meat Consumption",
                factor: 3.2,
                kind: FieldKind::Ordinal { levels: MEAT_CONSUMPTION },
            },
            FieldDescriptor {
                field: Field::Dairy,
                label: "Dairy Consumption",
                factor: 1.1,
                kind: FieldKind::Ordinal { levels: DAIRY_CONSUMPTION },
            },
            FieldDescriptor {
                field: Field::LocalFood,
                label: "Local/Organic Food Preference",
                factor: -0.02,
                kind: FieldKind::Ordinal { levels: LOCAL_FOOD },
            },
        ],
    },
    CategoryDescriptor {
        id: CategoryId::Lifestyle,
        title: "Lifestyle",
        fields: [
            FieldDescriptor {
                field: Field::Shopping,
                label: "Monthly Shopping Spend",
                factor: 0.01,
                kind: FieldKind::Numeric { unit: "$" },
            },
            FieldDescriptor {
                field: Field::Waste,
                label: "Waste Generation",
                factor: 2.5,
                kind: FieldKind::Ordinal { levels: WASTE_GENERATION },
            },
            FieldDescriptor {
                field: Field::Recycling,
                label: "Recycling Habits",
                factor: -0.05,
                kind: FieldKind::Ordinal { levels: RECYCLING_HABITS },
            },
        ],
    },
];

/// The calculator's four categories in display order
pub fn default_categories() -> &'static [CategoryDescriptor] {
    &DEFAULT_CATEGORIES
}

/// Descriptor for a single field in the default catalog
pub fn descriptor(field: Field) -> &'static FieldDescriptor {
    let category = &DEFAULT_CATEGORIES[category_index(field.category())];
    // Category fields are listed in the same order as CategoryId::fields()
    let position = field
        .category()
        .fields()
        .iter()
        .position(|&f| f == field)
        .unwrap_or(0);
    &category.fields[position]
}

fn category_index(id: CategoryId) -> usize {
    match id {
        CategoryId::Transport => 0,
        CategoryId::Energy => 1,
        CategoryId::Food => 2,
        CategoryId::Lifestyle => 3,
    }
}

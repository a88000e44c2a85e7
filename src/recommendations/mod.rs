pub mod types;
pub mod rules;
pub mod engine;

pub use types::{Difficulty, Impact, Recommendation, RecommendationSet};
pub use rules::{
    buy_local_produce, reduce_driving, reduce_flights, reduce_meat, reduce_waste,
    switch_to_efficient_lighting, RULES,
};
pub use engine::{recommend, recommend_summary, MAX_RECOMMENDATIONS};

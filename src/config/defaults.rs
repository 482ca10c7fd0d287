//! Default value functions for serde deserialization.

pub fn potential_scale() -> f32 {
    3.0
}

pub fn gain_scale() -> f32 {
    1.0
}

pub fn min_frontier_size() -> f32 {
    0.75
}

pub fn seed_search_radius() -> f32 {
    1.0
}

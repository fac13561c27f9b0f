/// Expected click share of the first five organic slots.
pub const CTR_WEIGHTS: [f64; 5] = [0.40, 0.23, 0.16, 0.12, 0.09];

/// Weight for a 1-indexed SERP position, `None` outside the weighted slots.
pub fn ctr_weight(position: u32) -> Option<f64> {
    match position {
        0 => None,
        p => CTR_WEIGHTS.get(p as usize - 1).copied(),
    }
}

pub fn is_weighted(position: u32) -> bool {
    ctr_weight(position).is_some()
}

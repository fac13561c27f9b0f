use super::{category::Category, ctr::ctr_weight};

/// Share of known click weight held by commercial results.
///
/// Unknown results drop out of both sides of the ratio, so their weight is
/// spread over the classified ones. Returns `None` when nothing in the top
/// five was classified, which is different from a score of zero.
pub fn commercialization_score<I>(results: I) -> Option<f64>
where
    I: IntoIterator<Item = (u32, Category)>,
{
    let mut commercial_weight = 0.0;
    let mut known_weight = 0.0;

    for (position, category) in results {
        let Some(weight) = ctr_weight(position) else {
            continue;
        };
        if !category.is_known() {
            continue;
        }
        known_weight += weight;
        if category == Category::Commercial {
            commercial_weight += weight;
        }
    }

    match known_weight > 0.0 {
        true => Some(round_to(commercial_weight / known_weight, 4)),
        false => None,
    }
}

pub fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}

#[derive(Debug, Default, PartialEq)]
pub struct ScoreSummary {
    pub scored: usize,
    pub undefined: usize,
    pub mean: f64,
    pub fully_commercial: usize,
    pub high: usize,
    pub medium: usize,
    pub low: usize,
}

pub fn summarize<'a, I>(scores: I) -> ScoreSummary
where
    I: IntoIterator<Item = &'a Option<f64>>,
{
    let mut summary = ScoreSummary::default();
    let mut total = 0.0;

    for score in scores {
        match score {
            None => summary.undefined += 1,
            Some(v) => {
                summary.scored += 1;
                total += v;
                match *v {
                    v if v >= 0.8 => summary.fully_commercial += 1,
                    v if v >= 0.5 => summary.high += 1,
                    v if v >= 0.2 => summary.medium += 1,
                    _ => summary.low += 1,
                }
            }
        }
    }

    if summary.scored > 0 {
        summary.mean = total / summary.scored as f64;
    }

    summary
}

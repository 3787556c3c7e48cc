use crate::core::model::CANONICAL_BASES;
use serde::Serialize;

#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize)]
pub struct BaseCounts {
    pub a: u64,
    pub t: u64,
    pub g: u64,
    pub c: u64,
}

impl BaseCounts {
    /// Bumps the counter for `base` if it is A, T, G or C in either case.
    pub fn add(&mut self, base: char) {
        match base.to_ascii_uppercase() {
            'A' => self.a += 1,
            'T' => self.t += 1,
            'G' => self.g += 1,
            'C' => self.c += 1,
            _ => {}
        }
    }

    pub fn get(&self, base: char) -> u64 {
        match base {
            'A' => self.a,
            'T' => self.t,
            'G' => self.g,
            'C' => self.c,
            _ => 0,
        }
    }

    pub fn total(&self) -> u64 {
        self.a + self.t + self.g + self.c
    }

    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct BaseCompositionRow {
    pub base: char,
    pub count: u64,
    pub percent: f64,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct BaseComposition {
    pub total: u64,
    pub bases: Vec<BaseCompositionRow>,
}

pub fn compute(counts: &BaseCounts) -> Option<BaseComposition> {
    if counts.is_empty() {
        return None;
    }
    let total = counts.total();
    let bases = CANONICAL_BASES
        .iter()
        .map(|&base| {
            let count = counts.get(base);
            let percent = if total > 0 {
                count as f64 / total as f64 * 100.0
            } else {
                0.0
            };
            BaseCompositionRow {
                base,
                count,
                percent,
            }
        })
        .collect();
    Some(BaseComposition { total, bases })
}

/// One of five ordered severity buckets for a metric value.
///
/// Ordering contract: `Q20 < Q40 < Q60 < Q80 < Q100`.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Tier {
    Q20,
    Q40,
    Q60,
    Q80,
    Q100,
}

impl std::fmt::Display for Tier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Tier::Q20 => "q20",
            Tier::Q40 => "q40",
            Tier::Q60 => "q60",
            Tier::Q80 => "q80",
            Tier::Q100 => "q100",
        };
        f.write_str(name)
    }
}

impl Tier {
    pub const ALL: [Tier; 5] = [Tier::Q20, Tier::Q40, Tier::Q60, Tier::Q80, Tier::Q100];

    /// Stable 0-based index, usable for per-tier accumulators.
    pub fn index(self) -> usize {
        match self {
            Tier::Q20 => 0,
            Tier::Q40 => 1,
            Tier::Q60 => 2,
            Tier::Q80 => 3,
            Tier::Q100 => 4,
        }
    }
}

/// The four percentile cut points partitioning values into tiers.
///
/// Invariant: `q20 <= q40 <= q60 <= q80` whenever built through
/// [`Thresholds::from_samples`].
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Thresholds {
    pub q20: f64,
    pub q40: f64,
    pub q60: f64,
    pub q80: f64,
}

impl Thresholds {
    /// Degenerate default used for an empty sample set: every positive value
    /// classifies as [`Tier::Q100`], which renders a flat single-tier map
    /// rather than failing the refresh.
    pub const ZERO: Thresholds = Thresholds {
        q20: 0.0,
        q40: 0.0,
        q60: 0.0,
        q80: 0.0,
    };

    /// Computes 20th/40th/60th/80th percentile cut points from `samples`.
    ///
    /// Uses the nearest-rank method: the element at 0-based rank
    /// `floor((n - 1) * p)` of the ascending-sorted samples. Input order is
    /// irrelevant; ties between equal samples are irrelevant.
    pub fn from_samples(samples: &[f64]) -> Thresholds {
        if samples.is_empty() {
            return Thresholds::ZERO;
        }

        let mut sorted = samples.to_vec();
        sorted.sort_by(f64::total_cmp);

        let rank = |p: f64| sorted[((sorted.len() - 1) as f64 * p).floor() as usize];
        Thresholds {
            q20: rank(0.20),
            q40: rank(0.40),
            q60: rank(0.60),
            q80: rank(0.80),
        }
    }

    /// Buckets `value` into the smallest tier whose cut point it does not
    /// exceed. Total over all of f64:
    ///
    /// - a value equal to a cut point falls into the lower tier (`<=`);
    /// - a value above every cut point maps to [`Tier::Q100`];
    /// - NaN compares false against every cut point and therefore also maps
    ///   to [`Tier::Q100`]. Defined behavior, not an error.
    pub fn classify(&self, value: f64) -> Tier {
        if value <= self.q20 {
            Tier::Q20
        } else if value <= self.q40 {
            Tier::Q40
        } else if value <= self.q60 {
            Tier::Q60
        } else if value <= self.q80 {
            Tier::Q80
        } else {
            Tier::Q100
        }
    }
}

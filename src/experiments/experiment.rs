use crate::*;

/// A single measurement the runner can perform.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Experiment {
    /// Best roll count for both the six-sided and four-sided dice.
    BestRolls,
    /// Win rate of a constant strategy against the baseline.
    AlwaysRoll(Rolls),
    /// Win rate of the default margin strategy against the baseline.
    Margin,
    /// Win rate of the default swap-aware strategy against the baseline.
    SwapAware,
    /// Win rate of the composite strategy against the baseline.
    Composite,
}

impl Experiment {
    pub fn run(&self, samples: usize, seed: u64) -> Result<Vec<Report>, InvalidStrategyOutput> {
        log::debug!("[experiment] running {} over {} samples, seed {:#x}", self, samples, seed);
        match self {
            Self::BestRolls => Ok([Sides::Six, Sides::Four]
                .into_iter()
                .map(|sides| Report::BestRolls {
                    sides,
                    rolls: par_best_rolls(sides, samples, seed),
                })
                .collect()),
            Self::AlwaysRoll(n) => Self::versus(AlwaysRoll::new(*n)?, samples, seed),
            Self::Margin => Self::versus(Margin::new(Margin::MARGIN, Margin::ROLLS)?, samples, seed),
            Self::SwapAware => Self::versus(SwapAware::new(SwapAware::MARGIN, SwapAware::ROLLS)?, samples, seed),
            Self::Composite => Self::versus(Composite::new()?, samples, seed),
        }
    }
    fn versus<S>(strategy: S, samples: usize, seed: u64) -> Result<Vec<Report>, InvalidStrategyOutput>
    where
        S: Strategy + std::fmt::Display,
    {
        let ref baseline = AlwaysRoll::new(BASELINE_ROLLS)?;
        let rate = win_rate(&strategy, baseline, samples, seed)?;
        Ok(vec![Report::WinRate {
            strategy: strategy.to_string(),
            rate,
        }])
    }
}

/// Accepts `rolls`, `always:N`, `margin`, `swap`, and `composite`.
impl TryFrom<&str> for Experiment {
    type Error = anyhow::Error;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        match s.trim() {
            "rolls" => Ok(Self::BestRolls),
            "margin" => Ok(Self::Margin),
            "swap" => Ok(Self::SwapAware),
            "composite" => Ok(Self::Composite),
            other => match other.strip_prefix("always:") {
                Some(n) => Ok(Self::AlwaysRoll(n.parse()?)),
                None => Err(anyhow::anyhow!("unknown experiment: {}", other)),
            },
        }
    }
}

impl std::fmt::Display for Experiment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::BestRolls => write!(f, "rolls"),
            Self::AlwaysRoll(n) => write!(f, "always:{}", n),
            Self::Margin => write!(f, "margin"),
            Self::SwapAware => write!(f, "swap"),
            Self::Composite => write!(f, "composite"),
        }
    }
}

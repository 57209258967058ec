use crate::*;

/// Which experiments to run, how many trials each estimate draws, and the
/// seed the trials' dice derive from.
///
/// The default runs only the best-roll-count search at [`SAMPLES`] trials.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Experiments {
    pub samples: usize,
    pub seed: u64,
    pub list: Vec<Experiment>,
}

impl Default for Experiments {
    fn default() -> Self {
        Self {
            samples: SAMPLES,
            seed: SEED,
            list: vec![Experiment::BestRolls],
        }
    }
}

impl Experiments {
    /// Comma-separated experiment names, e.g. `rolls,always:8,composite`.
    pub const ENV_LIST: &'static str = "HOG_EXPERIMENTS";
    /// Trials per estimate.
    pub const ENV_SAMPLES: &'static str = "HOG_SAMPLES";
    /// Seed for the experiments' dice.
    pub const ENV_SEED: &'static str = "HOG_SEED";

    /// Defaults overridden by [`Self::ENV_LIST`], [`Self::ENV_SAMPLES`] and
    /// [`Self::ENV_SEED`] when set.
    pub fn from_env() -> anyhow::Result<Self> {
        let list = std::env::var(Self::ENV_LIST).ok();
        let samples = std::env::var(Self::ENV_SAMPLES).ok();
        let seed = std::env::var(Self::ENV_SEED).ok();
        Self::parse(list.as_deref(), samples.as_deref(), seed.as_deref())
    }
    pub fn parse(list: Option<&str>, samples: Option<&str>, seed: Option<&str>) -> anyhow::Result<Self> {
        let mut config = Self::default();
        if let Some(list) = list {
            config.list = list
                .split(',')
                .filter(|name| !name.trim().is_empty())
                .map(Experiment::try_from)
                .collect::<anyhow::Result<Vec<_>>>()?;
        }
        if let Some(samples) = samples {
            config.samples = samples.trim().parse()?;
        }
        if let Some(seed) = seed {
            config.seed = seed.trim().parse()?;
        }
        if config.samples == 0 {
            return Err(anyhow::anyhow!("{} must be positive", Self::ENV_SAMPLES));
        }
        Ok(config)
    }
    pub fn run(&self) -> Result<Vec<Report>, InvalidStrategyOutput> {
        log::info!("running {} experiments over {} samples", self.list.len(), self.samples);
        self.list
            .iter()
            .map(|experiment| experiment.run(self.samples, self.seed))
            .collect::<Result<Vec<_>, _>>()
            .map(|reports| reports.into_iter().flatten().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_best_rolls() {
        let config = Experiments::parse(None, None, None).unwrap();
        assert_eq!(config, Experiments::default());
        assert_eq!(config.list, vec![Experiment::BestRolls]);
        assert_eq!(config.samples, SAMPLES);
    }
    #[test]
    fn parses_list_and_samples() {
        let config = Experiments::parse(Some("rolls, always:8,composite"), Some("250"), Some("42")).unwrap();
        assert_eq!(
            config.list,
            vec![Experiment::BestRolls, Experiment::AlwaysRoll(8), Experiment::Composite]
        );
        assert_eq!(config.samples, 250);
        assert_eq!(config.seed, 42);
    }
    #[test]
    fn empty_list_runs_nothing() {
        let config = Experiments::parse(Some(""), None, None).unwrap();
        assert!(config.list.is_empty());
        assert!(config.run().unwrap().is_empty());
    }
    #[test]
    fn rejects_bad_samples() {
        assert!(Experiments::parse(None, Some("0"), None).is_err());
        assert!(Experiments::parse(None, Some("many"), None).is_err());
        assert!(Experiments::parse(None, None, Some("-1")).is_err());
    }
    #[test]
    fn rejects_bad_names() {
        assert!(Experiments::parse(Some("rolls,bogus"), None, None).is_err());
    }
    #[test]
    fn runs_in_order() {
        let config = Experiments {
            samples: 50,
            seed: SEED,
            list: vec![Experiment::Margin, Experiment::BestRolls],
        };
        let reports = config.run().unwrap();
        assert_eq!(reports.len(), 3);
        assert!(matches!(reports[0], Report::WinRate { .. }));
        assert!(matches!(reports[1], Report::BestRolls { sides: Sides::Six, .. }));
        assert!(matches!(reports[2], Report::BestRolls { sides: Sides::Four, .. }));
    }
}

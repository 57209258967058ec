use crate::*;

/// Outcome of one measurement.
#[derive(Debug, Clone, PartialEq)]
pub enum Report {
    BestRolls { sides: Sides, rolls: Rolls },
    WinRate { strategy: String, rate: Probability },
}

impl std::fmt::Display for Report {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::BestRolls { sides, rolls } => {
                write!(f, "Max scoring num rolls for {} dice: {}", sides, rolls)
            }
            Self::WinRate { strategy, rate } => write!(f, "{} win rate: {:.4}", strategy, rate),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn best_rolls_line() {
        let report = Report::BestRolls {
            sides: Sides::Six,
            rolls: 6,
        };
        assert_eq!(report.to_string(), "Max scoring num rolls for six-sided dice: 6");
    }
    #[test]
    fn win_rate_line() {
        let report = Report::WinRate {
            strategy: String::from("composite"),
            rate: 0.65,
        };
        assert_eq!(report.to_string(), "composite win rate: 0.6500");
    }
}

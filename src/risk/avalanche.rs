use crate::risk::tier::Tier;
use crate::types::massif::MassifProfile;
use crate::types::summary::AvalancheAssessment;
use serde::{Deserialize, Serialize};

/// Massifs treated as avalanche terrain regardless of their difficulty rating.
const KNOWN_DANGEROUS_MASSIFS: &[&str] = &["piatra_craiului"];

/// Winter difficulty from which a massif without bulletin coverage is
/// reported as unknown high risk.
const HIGH_WINTER_DIFFICULTY: u8 = 4;

/// Tier of a published avalanche danger level.
pub fn avalanche_tier(level: u8) -> Tier {
    if level >= 4 {
        Tier::Red
    } else if level >= 2 {
        Tier::Yellow
    } else {
        Tier::Green
    }
}

/// Avalanche risk as shown to the user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum AvalancheOutlook {
    /// A reading taken from the bulletin.
    Reported {
        assessment: AvalancheAssessment,
        tier: Tier,
    },
    /// No bulletin for a massif with serious winter terrain. Treated as red but
    /// kept distinct from a published level.
    UnknownHighRisk,
}

impl AvalancheOutlook {
    /// Builds the outlook for a forecast.
    ///
    /// Returns `None` when there is no bulletin reading and the massif does not
    /// warrant the unknown-high-risk warning. A reading of level 0 is still a
    /// reading and is reported as green.
    pub fn evaluate(risk: Option<&AvalancheAssessment>, profile: &MassifProfile) -> Option<Self> {
        match risk {
            Some(assessment) => Some(AvalancheOutlook::Reported {
                tier: avalanche_tier(assessment.level),
                assessment: assessment.clone(),
            }),
            None if Self::needs_warning_without_bulletin(profile) => {
                Some(AvalancheOutlook::UnknownHighRisk)
            }
            None => None,
        }
    }

    fn needs_warning_without_bulletin(profile: &MassifProfile) -> bool {
        profile.difficulty_winter_above >= HIGH_WINTER_DIFFICULTY
            || KNOWN_DANGEROUS_MASSIFS.contains(&profile.id.as_str())
    }

    pub fn tier(&self) -> Tier {
        match self {
            AvalancheOutlook::Reported { tier, .. } => *tier,
            AvalancheOutlook::UnknownHighRisk => Tier::Red,
        }
    }

    /// Published danger level; `None` for [`AvalancheOutlook::UnknownHighRisk`].
    pub fn level(&self) -> Option<u8> {
        match self {
            AvalancheOutlook::Reported { assessment, .. } => Some(assessment.level),
            AvalancheOutlook::UnknownHighRisk => None,
        }
    }

    pub fn is_unknown_high_risk(&self) -> bool {
        matches!(self, AvalancheOutlook::UnknownHighRisk)
    }

    pub fn display_value(&self) -> String {
        match self {
            AvalancheOutlook::Reported { assessment, .. } => {
                format!("Level {} ({})", assessment.level, assessment.text)
            }
            AvalancheOutlook::UnknownHighRisk => "Unknown avalanche risk".to_string(),
        }
    }

    pub fn remark(&self) -> String {
        match self {
            AvalancheOutlook::UnknownHighRisk => {
                "Call Salvamont for information. Dangerous alpine terrain.".to_string()
            }
            AvalancheOutlook::Reported { assessment, tier } => {
                let text = if assessment.text.is_empty() {
                    None
                } else {
                    Some(assessment.text.as_str())
                };
                match tier {
                    Tier::Red => format!(
                        "{} danger on all slopes. Experts only.",
                        text.unwrap_or("High")
                    ),
                    Tier::Yellow => format!(
                        "Level {}. Watch slopes with wind-drifted snow.",
                        text.unwrap_or("moderate")
                    ),
                    Tier::Green => "Stable snowpack, minimal risk.".to_string(),
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stations::reference_data::ReferenceData;

    fn profile(id: &str) -> MassifProfile {
        ReferenceData::carpathians().massif(id).cloned().unwrap()
    }

    fn assessment(level: u8, text: &str) -> AvalancheAssessment {
        AvalancheAssessment {
            level,
            text: text.to_string(),
            message: None,
        }
    }

    #[test]
    fn test_level_tiers() {
        assert_eq!(avalanche_tier(0), Tier::Green);
        assert_eq!(avalanche_tier(1), Tier::Green);
        assert_eq!(avalanche_tier(2), Tier::Yellow);
        assert_eq!(avalanche_tier(3), Tier::Yellow);
        assert_eq!(avalanche_tier(4), Tier::Red);
        assert_eq!(avalanche_tier(5), Tier::Red);
    }

    #[test]
    fn test_reported_reading() {
        let outlook =
            AvalancheOutlook::evaluate(Some(&assessment(4, "mare")), &profile("bucegi")).unwrap();
        assert_eq!(outlook.tier(), Tier::Red);
        assert_eq!(outlook.level(), Some(4));
        assert!(!outlook.is_unknown_high_risk());
        assert_eq!(outlook.display_value(), "Level 4 (mare)");
        assert_eq!(outlook.remark(), "mare danger on all slopes. Experts only.");
    }

    #[test]
    fn test_level_zero_is_a_reading_not_missing() {
        let outlook =
            AvalancheOutlook::evaluate(Some(&assessment(0, "")), &profile("bucegi")).unwrap();
        assert_eq!(outlook.tier(), Tier::Green);
        assert!(!outlook.is_unknown_high_risk());
    }

    #[test]
    fn test_missing_bulletin_on_hard_winter_massif() {
        // Maramureșului has winter difficulty 4 and no bulletin key.
        let outlook = AvalancheOutlook::evaluate(None, &profile("maramuresului")).unwrap();
        assert!(outlook.is_unknown_high_risk());
        assert_eq!(outlook.tier(), Tier::Red);
        assert_eq!(outlook.level(), None);
    }

    #[test]
    fn test_missing_bulletin_on_easy_massif() {
        assert_eq!(AvalancheOutlook::evaluate(None, &profile("ceahlau")), None);
        assert_eq!(AvalancheOutlook::evaluate(None, &profile("cozia")), None);
    }

    #[test]
    fn test_known_dangerous_massif_without_difficulty() {
        let mut craiului = profile("piatra_craiului");
        craiului.difficulty_winter_above = 2;
        assert_eq!(
            AvalancheOutlook::evaluate(None, &craiului),
            Some(AvalancheOutlook::UnknownHighRisk)
        );
    }

    #[test]
    fn test_yellow_remark_falls_back_to_generic_text() {
        let outlook =
            AvalancheOutlook::evaluate(Some(&assessment(2, "")), &profile("bucegi")).unwrap();
        assert_eq!(
            outlook.remark(),
            "Level moderate. Watch slopes with wind-drifted snow."
        );
    }
}

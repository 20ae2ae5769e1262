use serde::{Deserialize, Serialize};
use ts_rs::TS;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Race {
    White,
    /// African American.
    Aa,
    Other,
}

/// Biological sex as the published models distinguish it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Sex {
    Male,
    Female,
}

impl Sex {
    /// Case-insensitive parse of `male` / `female`. Anything else is
    /// indeterminate and yields `None`.
    pub fn parse(gender: &str) -> Option<Self> {
        if gender.eq_ignore_ascii_case("male") {
            Some(Sex::Male)
        } else if gender.eq_ignore_ascii_case("female") {
            Some(Sex::Female)
        } else {
            None
        }
    }
}

/// A self-reported yes/no risk factor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum FactorKind {
    Smoker,
    Hypertensive,
    Diabetic,
    Race,
    FamilyHeartAttackHistory,
}

impl FactorKind {
    pub fn name(&self) -> &'static str {
        match self {
            FactorKind::Smoker => "smoker",
            FactorKind::Hypertensive => "hypertensive",
            FactorKind::Diabetic => "diabetic",
            FactorKind::Race => "race",
            FactorKind::FamilyHeartAttackHistory => "family heart attack history",
        }
    }
}

/// Self-reported risk factors. Each is tri-state: `None` means the answer
/// is not yet known, which is distinct from `Some(false)` and blocks
/// scoring for any model that needs it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct RelatedFactors {
    #[serde(default)]
    pub smoker: Option<bool>,
    /// Called `hypertension` by some product variants.
    #[serde(default, alias = "hypertension")]
    pub hypertensive: Option<bool>,
    #[serde(default)]
    pub diabetic: Option<bool>,
    #[serde(default)]
    pub race: Option<Race>,
    #[serde(default)]
    pub family_heart_attack_history: Option<bool>,
}

impl RelatedFactors {
    /// Whether the given factor has been answered.
    pub fn is_known(&self, factor: FactorKind) -> bool {
        match factor {
            FactorKind::Smoker => self.smoker.is_some(),
            FactorKind::Hypertensive => self.hypertensive.is_some(),
            FactorKind::Diabetic => self.diabetic.is_some(),
            FactorKind::Race => self.race.is_some(),
            FactorKind::FamilyHeartAttackHistory => self.family_heart_attack_history.is_some(),
        }
    }

    /// Set a yes/no factor. Race is not a yes/no factor and is left alone;
    /// use the `race` field directly.
    pub fn set(&mut self, factor: FactorKind, value: Option<bool>) {
        match factor {
            FactorKind::Smoker => self.smoker = value,
            FactorKind::Hypertensive => self.hypertensive = value,
            FactorKind::Diabetic => self.diabetic = value,
            FactorKind::FamilyHeartAttackHistory => self.family_heart_attack_history = value,
            FactorKind::Race => {}
        }
    }

    pub fn is_smoker(&self) -> bool {
        self.smoker == Some(true)
    }

    pub fn is_hypertensive(&self) -> bool {
        self.hypertensive == Some(true)
    }

    pub fn is_diabetic(&self) -> bool {
        self.diabetic == Some(true)
    }

    pub fn has_family_history(&self) -> bool {
        self.family_heart_attack_history == Some(true)
    }

    pub fn is_african_american(&self) -> bool {
        self.race == Some(Race::Aa)
    }
}

use crate::error::{PlannerError, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum Gender {
    Male,
    Female,
}

/// Measurement system for entering weight and height.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum Units {
    /// Kilograms and centimetres.
    #[default]
    Metric,
    /// Pounds, feet and inches.
    Imperial,
}

/// Activity level with its calorie-needs multiplier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum ActivityLevel {
    Sedentary,
    LightlyActive,
    #[default]
    ModeratelyActive,
    VeryActive,
    ExtremelyActive,
}

impl ActivityLevel {
    pub const ALL: [ActivityLevel; 5] = [
        ActivityLevel::Sedentary,
        ActivityLevel::LightlyActive,
        ActivityLevel::ModeratelyActive,
        ActivityLevel::VeryActive,
        ActivityLevel::ExtremelyActive,
    ];

    /// Multiplier applied to the basal metabolic rate.
    pub fn factor(&self) -> f64 {
        match self {
            ActivityLevel::Sedentary => 1.2,
            ActivityLevel::LightlyActive => 1.375,
            ActivityLevel::ModeratelyActive => 1.55,
            ActivityLevel::VeryActive => 1.725,
            ActivityLevel::ExtremelyActive => 1.9,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ActivityLevel::Sedentary => "Sedentary",
            ActivityLevel::LightlyActive => "Lightly Active",
            ActivityLevel::ModeratelyActive => "Moderately Active",
            ActivityLevel::VeryActive => "Very Active",
            ActivityLevel::ExtremelyActive => "Extremely Active",
        }
    }
}

/// Daily calorie adjustment on top of maintenance needs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WeightGoal {
    #[default]
    Maintain,
    /// Daily deficit in kcal.
    Lose(u32),
    /// Daily surplus in kcal.
    Gain(u32),
}

impl WeightGoal {
    /// Signed kcal adjustment to daily needs.
    pub fn adjustment(&self) -> f64 {
        match self {
            WeightGoal::Maintain => 0.0,
            WeightGoal::Lose(kcal) => -f64::from(*kcal),
            WeightGoal::Gain(kcal) => f64::from(*kcal),
        }
    }
}

/// Biometrics and dietary constraints for one person.
#[derive(Debug, Clone, PartialEq)]
pub struct UserProfile {
    pub name: String,
    pub age: u32,
    pub gender: Gender,
    pub weight_kg: f64,
    pub height_cm: f64,
    pub activity: ActivityLevel,
    pub goal: WeightGoal,
    pub preferences: Vec<String>,
    pub allergies: Vec<String>,
}

impl UserProfile {
    /// Reject profiles the calorie formula cannot be applied to.
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(PlannerError::invalid("name is required"));
        }
        if !(1..=120).contains(&self.age) {
            return Err(PlannerError::invalid(format!(
                "age must be between 1 and 120, got {}",
                self.age
            )));
        }
        if !(self.weight_kg.is_finite() && self.weight_kg > 0.0) {
            return Err(PlannerError::invalid("weight must be positive"));
        }
        if !(self.height_cm.is_finite() && self.height_cm > 0.0) {
            return Err(PlannerError::invalid("height must be positive"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_profile() -> UserProfile {
        UserProfile {
            name: "Asha".to_string(),
            age: 30,
            gender: Gender::Female,
            weight_kg: 60.0,
            height_cm: 165.0,
            activity: ActivityLevel::default(),
            goal: WeightGoal::Maintain,
            preferences: vec![],
            allergies: vec![],
        }
    }

    #[test]
    fn test_validate_ok() {
        assert!(sample_profile().validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_bad_fields() {
        let mut p = sample_profile();
        p.name = "  ".to_string();
        assert!(p.validate().is_err());

        let mut p = sample_profile();
        p.age = 0;
        assert!(p.validate().is_err());

        let mut p = sample_profile();
        p.weight_kg = 0.0;
        assert!(p.validate().is_err());

        let mut p = sample_profile();
        p.height_cm = f64::NAN;
        assert!(p.validate().is_err());
    }

    #[test]
    fn test_goal_adjustment_sign() {
        assert_eq!(WeightGoal::Maintain.adjustment(), 0.0);
        assert_eq!(WeightGoal::Lose(500).adjustment(), -500.0);
        assert_eq!(WeightGoal::Gain(300).adjustment(), 300.0);
    }
}

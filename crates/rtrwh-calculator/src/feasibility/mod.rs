//! Feasibility scoring
//!
//! The score starts at a base of 50. Each registered `ScoringRule` looks at the
//! input, the city record and the coverage ratio, adds points and appends
//! advice. The total is capped at 100.

pub mod rules;

use rtrwh_types::{CityData, Feasibility, FeasibilityLevel, UserInput};
use tracing::debug;

use crate::constants::scoring::{BASE_SCORE, MAX_SCORE};
use rules::{
    BirdNestingRule, CoverageRule, GroundwaterDepthRule, IndustrialEnvironmentRule,
    MonsoonConcentrationRule, RainfallAdequacyRule, RoofSuitabilityRule, SoilSuitabilityRule,
};

/// Everything a rule may look at
#[derive(Debug, Clone, Copy)]
pub struct ScoringContext<'a> {
    /// Submitted input
    pub input: &'a UserInput,
    /// Resolved city record
    pub city: &'a CityData,
    /// Share of demand met by harvesting, 0-100
    pub coverage_percentage: f64,
}

/// Points and advice produced by one rule
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RuleOutcome {
    pub points: u32,
    pub recommendations: Vec<String>,
    pub warnings: Vec<String>,
}

impl RuleOutcome {
    /// Rule contributed nothing
    pub fn none() -> Self {
        Self::default()
    }

    /// Points with a recommendation
    pub fn recommend(points: u32, message: impl Into<String>) -> Self {
        Self { points, recommendations: vec![message.into()], warnings: Vec::new() }
    }

    /// Points with a warning
    pub fn warn(points: u32, message: impl Into<String>) -> Self {
        Self { points, recommendations: Vec::new(), warnings: vec![message.into()] }
    }
}

/// A single feasibility heuristic.
pub trait ScoringRule: Send + Sync {
    /// Name used in logs.
    fn name(&self) -> &str;

    /// Evaluates the rule against one calculation.
    fn evaluate(&self, ctx: &ScoringContext<'_>) -> RuleOutcome;
}

/// Ordered collection of scoring rules
pub struct RuleSet {
    rules: Vec<Box<dyn ScoringRule>>,
}

impl Default for RuleSet {
    fn default() -> Self {
        Self::new()
    }
}

impl RuleSet {
    pub fn new() -> Self {
        Self { rules: Vec::new() }
    }

    /// Rules are evaluated in registration order, which is also the order
    /// their advice appears in.
    pub fn register(&mut self, rule: Box<dyn ScoringRule>) {
        self.rules.push(rule);
    }

    pub fn get(&self, name: &str) -> Option<&dyn ScoringRule> {
        self.rules.iter().find(|r| r.name() == name).map(|r| r.as_ref())
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &dyn ScoringRule> {
        self.rules.iter().map(|r| r.as_ref())
    }
}

/// Scores a calculation with the standard rule set
pub struct FeasibilityScorer {
    rule_set: RuleSet,
}

impl Default for FeasibilityScorer {
    fn default() -> Self {
        Self::new()
    }
}

impl FeasibilityScorer {
    pub fn new() -> Self {
        let mut rule_set = RuleSet::new();
        rule_set.register(Box::new(RainfallAdequacyRule));
        rule_set.register(Box::new(RoofSuitabilityRule));
        rule_set.register(Box::new(SoilSuitabilityRule));
        rule_set.register(Box::new(GroundwaterDepthRule));
        rule_set.register(Box::new(CoverageRule));
        rule_set.register(Box::new(BirdNestingRule));
        rule_set.register(Box::new(IndustrialEnvironmentRule));
        rule_set.register(Box::new(MonsoonConcentrationRule));
        Self { rule_set }
    }

    /// Build a scorer around a custom rule set
    pub fn with_rules(rule_set: RuleSet) -> Self {
        Self { rule_set }
    }

    pub fn rules(&self) -> &RuleSet {
        &self.rule_set
    }

    pub fn score(&self, ctx: &ScoringContext<'_>) -> Feasibility {
        let mut total = BASE_SCORE;
        let mut recommendations = Vec::new();
        let mut warnings = Vec::new();

        for rule in self.rule_set.iter() {
            let outcome = rule.evaluate(ctx);
            debug!(rule = rule.name(), points = outcome.points, "Scoring rule evaluated");
            total = total.saturating_add(outcome.points);
            recommendations.extend(outcome.recommendations);
            warnings.extend(outcome.warnings);
        }

        let score = total.min(MAX_SCORE) as u8;

        Feasibility { score, level: FeasibilityLevel::from_score(score), recommendations, warnings }
    }
}

use std::sync::Arc;

use proptest::prelude::*;
use rtrwh_core::types::{
    BudgetTier, CalculationType, EnvironmentType, FeasibilityLevel, RoofType, SoilType,
    UsagePurpose, UserInput,
};
use rtrwh_core::{CalculationEngine, ReferenceData};

fn roof() -> impl Strategy<Value = RoofType> {
    prop_oneof![
        Just(RoofType::Rcc),
        Just(RoofType::Gi),
        Just(RoofType::Asbestos),
        Just(RoofType::Tiles)
    ]
}

fn soil() -> impl Strategy<Value = SoilType> {
    prop_oneof![Just(SoilType::Sandy), Just(SoilType::Loamy), Just(SoilType::Clayey)]
}

fn purpose() -> impl Strategy<Value = UsagePurpose> {
    prop_oneof![
        Just(UsagePurpose::Domestic),
        Just(UsagePurpose::Irrigation),
        Just(UsagePurpose::Industrial)
    ]
}

fn budget() -> impl Strategy<Value = BudgetTier> {
    prop_oneof![Just(BudgetTier::Low), Just(BudgetTier::Medium), Just(BudgetTier::High)]
}

fn calculation_type() -> impl Strategy<Value = CalculationType> {
    prop_oneof![Just(CalculationType::Rainwater), Just(CalculationType::Recharge)]
}

prop_compose! {
    fn user_input()(
        pincode in "[1-9][0-9]{5}",
        roof_area in 1.0f64..5_000.0,
        roof_type in roof(),
        dwellers in 1u32..200,
        usage_purpose in purpose(),
        groundwater_depth in 0.0f64..150.0,
        soil_type in soil(),
        budget in budget(),
        bird_nesting in any::<bool>(),
        has_open_space in any::<bool>(),
    ) -> UserInput {
        UserInput {
            name: "Prop".to_string(),
            location: "Somewhere".to_string(),
            pincode,
            roof_area,
            roof_type,
            environment: EnvironmentType::Residential,
            bird_nesting,
            dwellers,
            usage_purpose,
            has_open_space,
            open_space_area: has_open_space.then_some(25.0),
            groundwater_depth,
            soil_type,
            budget,
        }
    }
}

proptest! {
    #[test]
    fn results_respect_documented_bounds(input in user_input(), mode in calculation_type()) {
        let engine = CalculationEngine::new(Arc::new(ReferenceData::builtin().unwrap()));
        let results = engine.calculate(&input, mode).unwrap();

        let monthly_total: u64 = results.monthly_potential.iter().map(|m| m.liters).sum();
        prop_assert_eq!(monthly_total, results.annual_potential);

        prop_assert!((2_000..=15_000).contains(&results.tank.capacity_liters));
        prop_assert!(results.feasibility.score <= 100);
        prop_assert_eq!(
            results.feasibility.level,
            FeasibilityLevel::from_score(results.feasibility.score)
        );
        prop_assert!((0.0..=100.0).contains(&results.coverage_percentage));
        prop_assert!((0.0..=20.0).contains(&results.cost.payback_years));

        let has_recharge_fields =
            results.recharge_volume.is_some() && results.pit_dimensions.is_some();
        let has_no_recharge_fields =
            results.recharge_volume.is_none() && results.pit_dimensions.is_none();
        match mode {
            CalculationType::Recharge => prop_assert!(has_recharge_fields),
            CalculationType::Rainwater => prop_assert!(has_no_recharge_fields),
        }

        if let Some(pit) = results.pit_dimensions {
            prop_assert!(pit.length_m >= 3.0);
            prop_assert!((2.0..=4.0).contains(&pit.depth_m));
        }
    }
}

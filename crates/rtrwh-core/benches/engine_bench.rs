use std::hint::black_box;
use std::sync::Arc;

use criterion::{Criterion, criterion_group, criterion_main};
use rtrwh_core::types::{
    BudgetTier, CalculationType, EnvironmentType, RoofType, SoilType, UsagePurpose, UserInput,
};
use rtrwh_core::{CalculationEngine, ReferenceData, resolve_city};

fn sample_input() -> UserInput {
    UserInput {
        name: "Bench".to_string(),
        location: "Hyderabad".to_string(),
        pincode: "500081".to_string(),
        roof_area: 180.0,
        roof_type: RoofType::Gi,
        environment: EnvironmentType::Residential,
        bird_nesting: true,
        dwellers: 6,
        usage_purpose: UsagePurpose::Irrigation,
        has_open_space: true,
        open_space_area: Some(20.0),
        groundwater_depth: 18.0,
        soil_type: SoilType::Clayey,
        budget: BudgetTier::High,
    }
}

fn engine_benchmark(c: &mut Criterion) {
    let engine = CalculationEngine::new(Arc::new(ReferenceData::builtin().unwrap()));
    let input = sample_input();

    c.bench_function("calculate_rainwater", |b| {
        b.iter(|| engine.calculate(black_box(&input), CalculationType::Rainwater).unwrap())
    });

    c.bench_function("calculate_recharge", |b| {
        b.iter(|| engine.calculate(black_box(&input), CalculationType::Recharge).unwrap())
    });

    let cities = engine.reference_data().cities();
    c.bench_function("resolve_city_by_location", |b| {
        b.iter(|| resolve_city(black_box(cities), black_box("Old City, Hyderabad"), "000000"))
    });
}

criterion_group!(benches, engine_benchmark);
criterion_main!(benches);

use std::sync::atomic::{AtomicUsize, Ordering};

use dashmap::DashMap;
use rtrwh_types::UserSubmission;
use uuid::Uuid;

use crate::error::{ApiError, ApiResult};

/// In-memory submission store with a fixed capacity.
///
/// Submissions are immutable once stored. Inserts are refused once `capacity`
/// slots have been reserved.
#[derive(Debug)]
pub struct SubmissionStore {
    submissions: DashMap<Uuid, UserSubmission>,
    reserved: AtomicUsize,
    capacity: usize,
}

impl SubmissionStore {
    pub fn new(capacity: usize) -> Self {
        Self { submissions: DashMap::new(), reserved: AtomicUsize::new(0), capacity }
    }

    pub fn insert(&self, submission: UserSubmission) -> ApiResult<()> {
        // Reserve a slot first; `reserved` never exceeds `capacity`
        self.reserved
            .fetch_update(Ordering::AcqRel, Ordering::Acquire, |n| {
                (n < self.capacity).then_some(n + 1)
            })
            .map_err(|_| {
                ApiError::storage(format!("submission store is full ({} entries)", self.capacity))
            })?;
        self.submissions.insert(submission.id, submission);
        Ok(())
    }

    pub fn get(&self, id: &Uuid) -> Option<UserSubmission> {
        self.submissions.get(id).map(|entry| entry.value().clone())
    }

    /// All submissions, newest first
    pub fn list(&self) -> Vec<UserSubmission> {
        let mut all: Vec<UserSubmission> =
            self.submissions.iter().map(|entry| entry.value().clone()).collect();
        all.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        all
    }

    pub fn len(&self) -> usize {
        self.submissions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.submissions.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, Utc};
    use rtrwh_core::{CalculationEngine, ReferenceData};
    use rtrwh_types::{
        BudgetTier, CalculationType, EnvironmentType, RoofType, SoilType, UsagePurpose, UserInput,
    };
    use std::sync::Arc;

    fn submission(age_minutes: i64) -> UserSubmission {
        let input = UserInput {
            name: "Store".to_string(),
            location: "Pune".to_string(),
            pincode: "411001".to_string(),
            roof_area: 90.0,
            roof_type: RoofType::Tiles,
            environment: EnvironmentType::Residential,
            bird_nesting: false,
            dwellers: 3,
            usage_purpose: UsagePurpose::Domestic,
            has_open_space: false,
            open_space_area: None,
            groundwater_depth: 12.0,
            soil_type: SoilType::Loamy,
            budget: BudgetTier::Low,
        };
        let engine = CalculationEngine::new(Arc::new(ReferenceData::builtin().unwrap()));
        let results = engine.calculate(&input, CalculationType::Rainwater).unwrap();
        UserSubmission {
            id: Uuid::new_v4(),
            input,
            calculation_type: CalculationType::Rainwater,
            results,
            created_at: Utc::now() - Duration::minutes(age_minutes),
        }
    }

    #[test]
    fn test_insert_and_get() {
        let store = SubmissionStore::new(10);
        assert!(store.is_empty());
        let sub = submission(0);
        let id = sub.id;
        store.insert(sub).unwrap();
        assert_eq!(store.len(), 1);
        assert_eq!(store.get(&id).unwrap().id, id);
        assert!(store.get(&Uuid::new_v4()).is_none());
    }

    #[test]
    fn test_list_newest_first() {
        let store = SubmissionStore::new(10);
        let old = submission(30);
        let new = submission(1);
        let middle = submission(10);
        let expected = vec![new.id, middle.id, old.id];
        for sub in [old, new, middle] {
            store.insert(sub).unwrap();
        }
        let ids: Vec<Uuid> = store.list().into_iter().map(|s| s.id).collect();
        assert_eq!(ids, expected);
    }

    #[test]
    fn test_capacity_is_enforced() {
        let store = SubmissionStore::new(1);
        store.insert(submission(0)).unwrap();
        let err = store.insert(submission(0)).unwrap_err();
        assert_eq!(err.error_code(), "STORAGE_ERROR");
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_concurrent_inserts_respect_capacity() {
        let store = SubmissionStore::new(5);
        let template = submission(0);
        let accepted = AtomicUsize::new(0);

        std::thread::scope(|scope| {
            for _ in 0..16 {
                scope.spawn(|| {
                    let sub = UserSubmission { id: Uuid::new_v4(), ..template.clone() };
                    if store.insert(sub).is_ok() {
                        accepted.fetch_add(1, Ordering::Relaxed);
                    }
                });
            }
        });

        assert_eq!(accepted.load(Ordering::Relaxed), 5);
        assert_eq!(store.len(), 5);
    }
}

use crate::types::*;
use chrono::Utc;
use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock};
use uuid::Uuid;

/// Storage for lesson plans shared through `/share`.
///
/// Plans are opaque JSON and are returned exactly as saved. There is no
/// update or delete; entries live until `clear` or process exit.
pub trait PlanStore: Send + Sync {
    fn save(&self, plan: serde_json::Value) -> PlanId;
    fn get(&self, id: &str) -> Option<SharedPlan>;
    fn clear(&self);
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Unbounded in-process plan map. Contents are lost on restart.
pub struct MemoryPlanStore {
    inner: Arc<RwLock<HashMap<PlanId, SharedPlan>>>,
}

impl MemoryPlanStore {
    pub fn new() -> Self {
        Self {
            inner: Arc::new(RwLock::new(HashMap::new())),
        }
    }
}

impl Default for MemoryPlanStore {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for MemoryPlanStore {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

fn generate_plan_id() -> PlanId {
    let suffix = Uuid::new_v4().simple().to_string();
    format!("plan_{}_{}", Utc::now().timestamp_millis(), &suffix[..8])
}

impl PlanStore for MemoryPlanStore {
    fn save(&self, plan: serde_json::Value) -> PlanId {
        let mut inner = self.inner.write().unwrap_or_else(PoisonError::into_inner);

        let mut id = generate_plan_id();
        while inner.contains_key(&id) {
            id = generate_plan_id();
        }

        inner.insert(
            id.clone(),
            SharedPlan {
                id: id.clone(),
                plan,
                created_at: Utc::now(),
            },
        );

        id
    }

    fn get(&self, id: &str) -> Option<SharedPlan> {
        self.inner
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(id)
            .cloned()
    }

    fn clear(&self) {
        self.inner
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
    }

    fn len(&self) -> usize {
        self.inner
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }
}

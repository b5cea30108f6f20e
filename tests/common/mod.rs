#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::{TimeZone, Utc};

use audit_autofill::autofill::{AutoFillEngine, FixedClock, MapperOperation};
use audit_autofill::mapper::{Mapper, MapperError};
use audit_autofill::types::{ActorId, Timestamp};

/// Frozen instant used by scenario tests
pub fn frozen_time() -> Timestamp {
    Utc.with_ymd_and_hms(2025, 4, 2, 15, 38, 0).unwrap()
}

pub fn frozen_engine() -> Arc<AutoFillEngine> {
    Arc::new(AutoFillEngine::default().with_clock(Arc::new(FixedClock(frozen_time()))))
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dish {
    pub id: Option<i64>,
    pub name: String,
    pub create_time: Option<Timestamp>,
    pub update_time: Option<Timestamp>,
    pub create_user: Option<ActorId>,
    pub update_user: Option<ActorId>,
}

audit_autofill::auto_fill!(Dish { create_time, update_time, create_user, update_user });

/// What the inner mapper saw when it was called
#[derive(Debug, Clone, PartialEq)]
pub struct Seen {
    pub operation: &'static str,
    pub entity: Option<Dish>,
}

/// Inner mapper that records each call instead of persisting
#[derive(Default)]
pub struct RecordingMapper {
    calls: Mutex<Vec<Seen>>,
}

impl RecordingMapper {
    pub fn calls(&self) -> Vec<Seen> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl Mapper<Dish> for RecordingMapper {
    async fn execute(&self, op: &MapperOperation, entity: Option<&mut Dish>) -> Result<u64, MapperError> {
        let entity = entity.map(|dish| dish.clone());
        self.calls.lock().unwrap().push(Seen { operation: op.name, entity });
        Ok(1)
    }
}

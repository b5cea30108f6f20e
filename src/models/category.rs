use serde::{Deserialize, Serialize};

use crate::autofill::{MapperOperation, Statement, MAPPER_NAMESPACE};
use crate::mapper::Keyed;
use crate::types::{ActorId, OperationType, Timestamp};

/// Dish or set-meal category
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub id: Option<i64>,
    /// 1 = dish category, 2 = set-meal category
    #[serde(rename = "type")]
    pub kind: i32,
    pub name: String,
    pub sort: i32,
    pub status: i32,
    pub create_time: Option<Timestamp>,
    pub update_time: Option<Timestamp>,
    pub create_user: Option<ActorId>,
    pub update_user: Option<ActorId>,
}

crate::auto_fill!(Category { create_time, update_time, create_user, update_user });

impl Keyed for Category {
    fn id(&self) -> Option<i64> {
        self.id
    }

    fn set_id(&mut self, id: i64) {
        self.id = Some(id);
    }
}

pub struct CategoryMapper;

impl CategoryMapper {
    pub const INSERT: MapperOperation =
        MapperOperation::new(MAPPER_NAMESPACE, "category.insert", Statement::Insert)
            .auto_fill(OperationType::Create);

    pub const UPDATE: MapperOperation =
        MapperOperation::new(MAPPER_NAMESPACE, "category.update", Statement::Update)
            .auto_fill(OperationType::Modify);

    pub const DELETE: MapperOperation =
        MapperOperation::new(MAPPER_NAMESPACE, "category.delete", Statement::Delete);
}

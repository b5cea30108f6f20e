use serde::{Deserialize, Serialize};

use crate::autofill::{MapperOperation, Statement, MAPPER_NAMESPACE};
use crate::mapper::Keyed;
use crate::types::{ActorId, OperationType, Timestamp};

/// Admin-side employee account
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    pub id: Option<i64>,
    pub username: String,
    pub name: String,
    pub phone: String,
    pub sex: String,
    pub status: i32,
    pub create_time: Option<Timestamp>,
    pub update_time: Option<Timestamp>,
    pub create_user: Option<ActorId>,
    pub update_user: Option<ActorId>,
}

crate::auto_fill!(Employee { create_time, update_time, create_user, update_user });

impl Keyed for Employee {
    fn id(&self) -> Option<i64> {
        self.id
    }

    fn set_id(&mut self, id: i64) {
        self.id = Some(id);
    }
}

/// Operations on the employee table
pub struct EmployeeMapper;

impl EmployeeMapper {
    pub const INSERT: MapperOperation =
        MapperOperation::new(MAPPER_NAMESPACE, "employee.insert", Statement::Insert)
            .auto_fill(OperationType::Create);

    pub const UPDATE: MapperOperation =
        MapperOperation::new(MAPPER_NAMESPACE, "employee.update", Statement::Update)
            .auto_fill(OperationType::Modify);

    pub const DELETE: MapperOperation =
        MapperOperation::new(MAPPER_NAMESPACE, "employee.delete", Statement::Delete);
}

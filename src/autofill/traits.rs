use std::fmt;

use crate::types::{ActorId, Timestamp};

/// Audit fields the engine knows how to fill
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum FillField {
    CreateTime = 0,
    UpdateTime = 1,
    CreateUser = 2,
    UpdateUser = 3,
}

impl FillField {
    pub const ALL: [FillField; 4] = [
        FillField::CreateTime,
        FillField::UpdateTime,
        FillField::CreateUser,
        FillField::UpdateUser,
    ];

    /// Canonical setter name, used in diagnostics
    pub fn setter_name(self) -> &'static str {
        match self {
            FillField::CreateTime => "set_create_time",
            FillField::UpdateTime => "set_update_time",
            FillField::CreateUser => "set_create_user",
            FillField::UpdateUser => "set_update_user",
        }
    }

    const fn bit(self) -> u8 {
        1 << (self as u8)
    }
}

impl fmt::Display for FillField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.setter_name())
    }
}

/// Set of audit fields an entity accepts
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FillCapabilities(u8);

impl FillCapabilities {
    pub const fn none() -> Self {
        Self(0)
    }

    pub const fn all() -> Self {
        Self::none()
            .with(FillField::CreateTime)
            .with(FillField::UpdateTime)
            .with(FillField::CreateUser)
            .with(FillField::UpdateUser)
    }

    pub const fn with(self, field: FillField) -> Self {
        Self(self.0 | field.bit())
    }

    pub fn contains(self, field: FillField) -> bool {
        self.0 & field.bit() != 0
    }

    /// Fields from `required` this set lacks, in the order given
    pub fn missing(self, required: &[FillField]) -> Vec<FillField> {
        required.iter().copied().filter(|field| !self.contains(*field)).collect()
    }

    pub fn is_empty(self) -> bool {
        self.0 == 0
    }
}

impl FromIterator<FillField> for FillCapabilities {
    fn from_iter<I: IntoIterator<Item = FillField>>(iter: I) -> Self {
        iter.into_iter().fold(Self::none(), Self::with)
    }
}

/// Capability interface for entities that take part in audit auto-fill.
///
/// `capabilities` declares which setters are real; the engine checks it
/// against the operation marker before calling any setter. Setters that an
/// entity does not support keep their no-op default.
///
/// Plain structs with `create_time`/`update_time`/`create_user`/`update_user`
/// fields can use [`auto_fill!`](crate::auto_fill) instead of a hand-written impl.
pub trait AutoFill {
    /// Entity type name for diagnostics
    fn entity_name(&self) -> &'static str;

    fn capabilities(&self) -> FillCapabilities;

    fn set_create_time(&mut self, _time: Timestamp) {}

    fn set_update_time(&mut self, _time: Timestamp) {}

    fn set_create_user(&mut self, _actor: Option<ActorId>) {}

    fn set_update_user(&mut self, _actor: Option<ActorId>) {}
}

/// Implement [`AutoFill`] for a struct by naming the audit fields it carries.
///
/// Time fields must be `Option<Timestamp>`, user fields `Option<ActorId>`.
///
/// ```ignore
/// auto_fill!(Employee { create_time, update_time, create_user, update_user });
/// auto_fill!(LoginLog { create_time, create_user });
/// ```
#[macro_export]
macro_rules! auto_fill {
    ($entity:ty { $($field:ident),* $(,)? }) => {
        impl $crate::autofill::AutoFill for $entity {
            fn entity_name(&self) -> &'static str {
                stringify!($entity)
            }

            fn capabilities(&self) -> $crate::autofill::FillCapabilities {
                $crate::autofill::FillCapabilities::none()
                    $( .with($crate::auto_fill!(@field $field)) )*
            }

            $( $crate::auto_fill!(@setter $field); )*
        }
    };

    (@field create_time) => { $crate::autofill::FillField::CreateTime };
    (@field update_time) => { $crate::autofill::FillField::UpdateTime };
    (@field create_user) => { $crate::autofill::FillField::CreateUser };
    (@field update_user) => { $crate::autofill::FillField::UpdateUser };

    (@setter create_time) => {
        fn set_create_time(&mut self, time: $crate::types::Timestamp) {
            self.create_time = Some(time);
        }
    };
    (@setter update_time) => {
        fn set_update_time(&mut self, time: $crate::types::Timestamp) {
            self.update_time = Some(time);
        }
    };
    (@setter create_user) => {
        fn set_create_user(&mut self, actor: Option<$crate::types::ActorId>) {
            self.create_user = actor;
        }
    };
    (@setter update_user) => {
        fn set_update_user(&mut self, actor: Option<$crate::types::ActorId>) {
            self.update_user = actor;
        }
    };
}

//! Strongly-typed identifiers for host-side records.
//!
//! The host keys everything numerically. These newtypes keep course ids,
//! course module ids, module instance ids, context ids, and user ids from
//! being mixed up at call sites.

use serde::{Deserialize, Serialize};

/// Identifier of a course.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CourseId(u64);

/// Identifier of a course module (the placement of an activity in a course).
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ModuleId(u64);

/// Identifier of a module instance (the activity record behind a module).
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct InstanceId(u64);

/// Identifier of a content context (the host's addressable scope for a piece
/// of content — module, course, etc.).
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ContextId(u64);

/// Identifier of a user (actor identity).
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(u64);

macro_rules! impl_numeric_newtype {
    ($t:ty) => {
        impl $t {
            pub const fn new(id: u64) -> Self {
                Self(id)
            }

            pub const fn as_u64(&self) -> u64 {
                self.0
            }
        }

        impl core::fmt::Display for $t {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                core::fmt::Display::fmt(&self.0, f)
            }
        }

        impl From<u64> for $t {
            fn from(value: u64) -> Self {
                Self(value)
            }
        }

        impl From<$t> for u64 {
            fn from(value: $t) -> Self {
                value.0
            }
        }
    };
}

impl_numeric_newtype!(CourseId);
impl_numeric_newtype!(ModuleId);
impl_numeric_newtype!(InstanceId);
impl_numeric_newtype!(ContextId);
impl_numeric_newtype!(UserId);

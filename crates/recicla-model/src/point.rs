// SPDX-License-Identifier: Apache-2.0

use crate::materials::Materials;
use crate::time::TimeOfDay;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// Row identifier of a collection point. Assigned by storage, immutable
/// once created.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PointId(i64);

impl PointId {
    #[must_use]
    pub const fn new(raw: i64) -> Self {
        Self(raw)
    }

    #[must_use]
    pub const fn as_i64(self) -> i64 {
        self.0
    }
}

impl Display for PointId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Everything a collection point carries except its identity. This is
/// the shape that validated form input produces and that insert/update
/// consume.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PointDraft {
    pub name: String,
    pub street: String,
    pub number: String,
    pub complement: String,
    pub neighborhood: String,
    pub city: String,
    pub state: String,
    pub postal_code: String,
    pub materials: Materials,
    pub hours_start: TimeOfDay,
    pub hours_end: TimeOfDay,
}

#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub struct CollectionPoint {
    pub id: PointId,
    pub draft: PointDraft,
}

impl CollectionPoint {
    #[must_use]
    pub fn new(id: PointId, draft: PointDraft) -> Self {
        Self { id, draft }
    }
}

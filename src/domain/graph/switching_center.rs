use std::fmt;

use crate::domain::geometry::Position;
use crate::domain::graph::vertex::{GraphVertex, VertexBase};
use crate::domain::utils::id::VertexId;

/// The switching hub of a zone. Every tower links to it and every call is routed through it.
///
/// The user registry belongs to the owning zone; the zone answers registry questions for the center.
#[derive(Debug, Clone)]
pub struct SwitchingCenter {
    base: VertexBase,
}

impl SwitchingCenter {
    pub fn new(id: VertexId, position: Position) -> Self {
        Self { base: VertexBase::new(id, position) }
    }
}

impl GraphVertex for SwitchingCenter {
    fn base(&self) -> &VertexBase {
        &self.base
    }

    fn base_mut(&mut self) -> &mut VertexBase {
        &mut self.base
    }

    fn kind(&self) -> &'static str {
        "MSC"
    }
}

impl fmt::Display for SwitchingCenter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "MSC({}, Pos={})", self.base.id, self.base.position)
    }
}

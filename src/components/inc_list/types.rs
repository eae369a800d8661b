use serde::Serialize;

pub type VertexId = u32;

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Edge {
	pub source: VertexId,
	pub target: VertexId,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub weight: Option<f64>,
}

impl Edge {
	pub fn new(source: VertexId, target: VertexId) -> Self {
		Self {
			source,
			target,
			weight: None,
		}
	}
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Graph {
	pub nodes: Vec<VertexId>,
	pub edges: Vec<Edge>,
}

/// Which side of a vertex the stored neighbour list describes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Side {
	/// Each key lists the vertices it points to.
	#[default]
	Left,
	/// Each key lists the vertices pointing to it.
	Right,
}

impl Side {
	pub fn label(self) -> &'static str {
		match self {
			Side::Left => "left",
			Side::Right => "right",
		}
	}
}

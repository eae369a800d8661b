mod component;
mod field;
pub mod io;
mod state;
mod types;

pub use component::IncListInput;
pub use state::IncList;
pub use types::{Edge, Graph, Side, VertexId};

mod component;
mod derive;

pub use component::{MatrixKind, MatrixTable};
pub use derive::{adjacency, incidence};

mod component;
mod neighborhood;
mod render;
mod state;
mod types;

pub use component::ForceGraphCanvas;
pub use neighborhood::{Neighborhood, Tier};
pub use types::{GraphData, GraphLink, GraphNode};

pub mod actions;
pub mod cx2;
pub mod error;

pub use actions::{LayoutBounds, ServiceAction};
pub use cx2::{Cx2Edge, Cx2Network, Cx2Node};
pub use error::NetError;

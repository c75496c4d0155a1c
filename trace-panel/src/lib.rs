pub mod components;
pub mod location;
pub mod node_value;

pub use components::*;
pub use location::*;
pub use node_value::*;

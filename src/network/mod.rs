pub mod codec;
pub mod layer;
pub mod network;
pub mod spec;
pub mod unit;

pub use layer::Layer;
pub use network::Network;
pub use spec::NetworkSpec;
pub use unit::Unit;

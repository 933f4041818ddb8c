pub mod activation;
pub mod error;
pub mod loss;
pub mod network;
pub mod train;

// Convenience re-exports
pub use activation::sigmoid::{sigmoid, sigmoid_derivative};
pub use error::{NetworkError, Result};
pub use loss::mse::MseLoss;
pub use network::layer::Layer;
pub use network::network::Network;
pub use network::spec::NetworkSpec;
pub use network::unit::Unit;
pub use train::epoch_stats::EpochStats;
pub use train::trainer::{train_epoch, train_loop, Sample};

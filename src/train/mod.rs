pub mod epoch_stats;
pub mod trainer;

pub use epoch_stats::EpochStats;
pub use trainer::{train_epoch, train_loop};

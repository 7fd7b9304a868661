pub mod model_bridge;
pub mod pool;

pub use pool::*;

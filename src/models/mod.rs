pub mod snapshot;
pub mod record;
pub mod assessment;

pub use snapshot::*;
pub use record::*;
pub use assessment::*;

mod device;
mod oem;
mod market_name;
mod record;
mod grouping;

pub use device::*;
pub use oem::*;
pub use market_name::*;
pub use record::*;
pub use grouping::*;

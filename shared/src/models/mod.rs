//! Domain models for the land potential analysis engine

mod agri;
mod analysis;
mod crop;
mod energy;
mod scenario;
mod soil;
mod system;
mod weather;

pub use agri::*;
pub use analysis::*;
pub use crop::*;
pub use energy::*;
pub use scenario::*;
pub use soil::*;
pub use system::*;
pub use weather::*;

//! Type definitions

pub mod config;
pub mod driver;
pub mod event;
pub mod geo;
pub mod messages;
pub mod passenger;
pub mod person;
pub mod result;
pub mod ride_group;
pub mod unmatched;

pub use config::*;
pub use driver::*;
pub use event::*;
pub use geo::*;
pub use messages::*;
pub use passenger::*;
pub use person::*;
pub use result::*;
pub use ride_group::*;
pub use unmatched::*;

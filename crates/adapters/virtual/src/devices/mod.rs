//! Virtual device implementations — switch, barrier, thermal.

mod barrier;
mod switch;
mod thermal;

pub use barrier::VirtualBarrier;
pub use switch::VirtualSwitch;
pub use thermal::VirtualThermal;

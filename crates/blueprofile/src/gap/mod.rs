pub mod cod;
pub mod constants;
pub mod types;

pub use cod::{ClassOfDevice, MajorServiceClass};
pub use constants::*;
pub use types::*;

pub mod copy;
pub mod batch;
pub mod sink;
pub mod cancel;

pub use copy::*;
pub use batch::*;
pub use sink::*;
pub use cancel::*;

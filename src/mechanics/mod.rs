pub mod multinomial;
pub mod partition;
pub mod stoch;

pub use multinomial::*;
pub use partition::*;

pub mod binomial;
pub mod combinatorics;
pub mod errors;
pub mod hypergeometric;
pub mod negative_binomial;

pub use binomial::{dbinom, pbinom};
pub use combinatorics::{choose, factorial};
pub use errors::DistError;
pub use hypergeometric::{dhyper, phyper};
pub use negative_binomial::{dnbinom, pnbinom};

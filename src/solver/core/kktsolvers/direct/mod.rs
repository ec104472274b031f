//flatten direct KKT module structure
mod densecholeskykktsolver;
pub use densecholeskykktsolver::*;

// package together all of the following and re-export
// in a partially flattened structure :
// : core component traits
// : the constraint cone
// : kkt solver engines
// : user settings and error types
// : main solver implementation

pub mod callbacks;
pub mod cones;
pub mod kktsolvers;
pub mod traits;

//partially flatten top level pieces

mod errors;
mod settings;
mod solver;
pub use errors::*;
pub use settings::*;
pub use solver::*;

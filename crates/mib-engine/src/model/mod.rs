pub mod node;
pub mod oid;

pub use node::{NodeType, OidNode};
pub use oid::Oid;

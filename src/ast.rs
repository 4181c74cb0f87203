pub mod node;
pub mod quantifier;

pub use self::{
    node::{ClassItem, Node},
    quantifier::{Quantifier, Symbol},
};

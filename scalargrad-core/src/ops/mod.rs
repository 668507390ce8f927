//! # Scalar Operations Module (`ops`)
//!
//! Forward constructors for every differentiable operation. Each `xxx_op`
//! function computes the forward value from its operand value(s), appends a
//! new node to the arena whose [`Op`](crate::node::Op) variant records the
//! operands (and any cached data the derivative rule needs), and returns the
//! new node's id. The actual derivative rules live in the backward driver,
//! which dispatches on the `Op` tag (see [`crate::autograd`]).
//!
//! Raw numeric arguments are promoted to leaf nodes at the
//! [`Operand`](crate::graph::Operand) boundary. The compound operations
//! (`neg`, `sub`, `div`) are sugar over `add`/`mul`/`pow` and introduce the
//! corresponding intermediate nodes rather than carrying their own rules.

pub mod activation;
pub mod arithmetic;
pub mod math_elem;

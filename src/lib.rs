//! Ordered collections backed by an arena-allocated red-black tree.

pub mod arena;
pub mod red_black_tree;

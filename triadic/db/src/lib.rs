#[cfg(test)]
#[macro_use(quickcheck)]
extern crate quickcheck_macros;

pub mod algorithms;
pub mod export;
pub mod graph_info;
pub mod graphgen;
pub mod loaders;

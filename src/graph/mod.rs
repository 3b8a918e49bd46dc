pub mod edge_list;
pub mod generators;
pub mod parse;

pub use edge_list::{Edge, EdgeListGraph};
pub use parse::parse_edge_list;

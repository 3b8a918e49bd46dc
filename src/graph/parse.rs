use crate::graph::edge_list::Edge;
use num_traits::PrimInt;
use std::fmt::Debug;

/// Parses whitespace-separated edge-list text.
///
/// Each line carries `u v w` (three integers); tokens past the third are
/// ignored. Lines with fewer than three tokens, or with non-numeric leading
/// tokens, are skipped with a debug log rather than failing the whole input.
pub fn parse_edge_list<W>(input: &str) -> Vec<Edge<W>>
where
    W: PrimInt + Debug,
{
    let mut edges = Vec::new();
    for (number, line) in input.lines().enumerate() {
        let tokens: Vec<&str> = line.split_whitespace().collect();
        if tokens.len() < 3 {
            if !tokens.is_empty() {
                log::debug!("skipping line {}: fewer than three tokens", number + 1);
            }
            continue;
        }
        match (
            tokens[0].parse::<usize>(),
            tokens[1].parse::<usize>(),
            W::from_str_radix(tokens[2], 10),
        ) {
            (Ok(from), Ok(to), Ok(weight)) => edges.push(Edge::new(from, to, weight)),
            _ => log::debug!("skipping line {}: non-numeric token", number + 1),
        }
    }
    edges
}

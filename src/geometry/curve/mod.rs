mod mobius_edge;

pub use mobius_edge::MobiusEdge;

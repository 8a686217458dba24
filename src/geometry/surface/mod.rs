mod mobius;

pub use mobius::MobiusSurface;

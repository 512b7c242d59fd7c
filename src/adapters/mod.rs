// Adapters layer: turn an AgeReport into the bytes a caller asked for.

pub mod output;

/// Multi-trial driver selecting the best scoring assignment
pub mod assigner;
/// Tiles, assignments and their scores
pub mod assignment;
/// Per-trial availability and usage bookkeeping
pub mod arena;
/// Single randomized greedy assignment pass
pub mod trial;

/// Random orthogonal candidate cuts
pub mod candidate;
/// Canvas state and polygon bookkeeping
pub mod canvas;
/// Step-wise painting generation with rejection sampling
pub mod executor;
/// Polygon splitting along a candidate cut
pub mod subdivision;

//! Marker types.

/// Marker type describing the start of something.
#[derive(Clone, Copy, Debug)]
pub struct Start;

/// Marker type describing the expected end of something.
#[derive(Clone, Copy, Debug)]
pub struct End;

/// Marker type describing an entity issue.
#[derive(Clone, Copy, Debug)]
pub struct Issue;

/// Marker type describing an entity placement.
#[derive(Clone, Copy, Debug)]
pub struct Placement;

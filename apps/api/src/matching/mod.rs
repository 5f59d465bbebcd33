// Career Matcher: content-based + collaborative-style hybrid scoring,
// missing-skill derivation, and readiness timelines.
// Pure and synchronous; no I/O below `handlers`.

pub mod handlers;
pub mod recommender;
pub mod scoring;
pub mod timeline;
pub mod weights;

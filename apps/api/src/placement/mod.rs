// Placement Estimator: heuristic probability, confidence tier, insights,
// and priority-sorted improvement suggestions.

pub mod handlers;
pub mod improvements;
pub mod insights;
pub mod predictor;
pub mod probability;

// Two security tiers:
// Public (no auth, /auth/*) → Protected (JWT auth, /api/*)

pub mod protected; // JWT authentication required
pub mod public; // No authentication required

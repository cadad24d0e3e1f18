pub mod liveness;
pub mod readiness;

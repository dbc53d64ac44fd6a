// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{Candidate, DecisionEvent, SwipeDirection};
pub use requests::{FindMatchesRequest, LikeRequest, PassRequest};
pub use responses::{HealthResponse, LikeResponse};

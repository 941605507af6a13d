pub mod assessment;
pub mod emotion;
pub mod guidance;
pub mod message;
pub mod recommendation;
pub mod sentiment;
pub mod therapy;

pub mod bodies;
pub mod collision;
pub mod forces;

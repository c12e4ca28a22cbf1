pub mod collision;
pub mod forces;
pub mod kinematics;
pub mod simulation;
pub mod termination;

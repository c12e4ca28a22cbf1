pub mod environment;
pub mod scenario;

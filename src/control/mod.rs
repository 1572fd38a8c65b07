pub mod input;
pub mod mission;
pub mod planet;
pub mod satellite;

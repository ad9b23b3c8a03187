pub mod clock;
pub mod compute;
pub mod constants;
pub mod entities;

pub mod analytical;
pub mod bc;
pub mod params;

pub mod set;
pub mod status;
pub mod version;

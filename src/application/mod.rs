// Application layer - Chart building use cases and their ports
pub mod diurnal_service;
pub mod sun_clock;
pub mod windowing;

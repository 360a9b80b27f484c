pub mod app_config;
pub mod memory;
pub mod seed;

pub use memory::MemStore;
pub use seed::seed_demo_data;

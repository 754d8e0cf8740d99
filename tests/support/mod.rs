pub mod cellclass_env;
pub mod fake_service;

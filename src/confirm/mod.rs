pub mod checker;
pub mod interceptor;

//! OKR module - objectives and their key results.

mod key_result;
mod objective;

pub use key_result::KeyResult;
pub use objective::Objective;

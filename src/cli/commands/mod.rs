pub mod init;
pub mod inspect;
pub mod maintenance;
pub mod sync;

mod command_result;

pub use command_result::*;

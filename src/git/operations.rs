pub mod init_ops;
pub mod file_ops;
pub mod commit_ops;
pub mod tag_ops;
pub mod checkout_ops;

pub use init_ops::*;
pub use file_ops::*;
pub use commit_ops::*;
pub use tag_ops::*;
pub use checkout_ops::*;

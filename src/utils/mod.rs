pub mod fs;
pub mod git;
pub mod make;

pub use fs::{list_protocols, read_version, resolve_version_path};
pub use git::{check_git_status, get_current_branch, has_uncommitted_changes};
pub use make::run_make_bump;

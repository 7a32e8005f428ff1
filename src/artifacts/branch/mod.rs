pub mod branch_name;
pub mod branch_table;
pub mod revision;

pub const INVALID_BRANCH_NAME_REGEX: &str =
    r"^\.|\/\.|\.\.|^\/|\/$|\.lock$|@\{|[\x00-\x20\*:\?\[\\~\^\x7f]";

/// Branch created by `init`
pub const DEFAULT_BRANCH: &str = "main";

/// Shortest prefix accepted when abbreviating a commit id
pub const MIN_SHORT_ID_LENGTH: usize = 4;

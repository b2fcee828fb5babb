// Paths
pub const PATH_SEPARATOR: &str = "/";
pub const ROOT_PATH: &str = "/";

// Remote store
pub const DEFAULT_TIMEOUT_SECS: u64 = 120;

// Public content-addressed gateway used for share links
pub const PUBLIC_GATEWAY_ROOT: &str = "https://ipfs.io/ipfs";

// Listing rows never stat their children just to draw a preview
pub const DIR_PLACEHOLDER: &str = "📁";

/// Utility functions used throughout the application

use std::path::PathBuf;

/// Get platform-specific debug log path
pub fn get_debug_log_path() -> PathBuf {
    let mut path = std::env::temp_dir();
    path.push("mushaftui-debug.log");
    path
}

/// IPC socket for the mpv instance owned by this process
pub fn get_player_socket_path() -> PathBuf {
    let mut path = std::env::temp_dir();
    path.push(format!("mushaftui-mpv-{}.sock", std::process::id()));
    path
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paths_live_in_temp_dir() {
        let temp = std::env::temp_dir();
        assert!(get_debug_log_path().starts_with(&temp));
        assert!(get_player_socket_path().starts_with(&temp));
    }

    #[test]
    fn test_socket_path_is_per_process() {
        let name = get_player_socket_path()
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        assert_eq!(name, format!("mushaftui-mpv-{}.sock", std::process::id()));
    }
}

//! Launcher messages

pub struct LauncherMessages {
    pub header: &'static str,
    pub app_missing: &'static str,
    pub mode_cpu: &'static str,
    pub mode_nvidia: &'static str,
    pub mode_apple: &'static str,
    pub mode_amd: &'static str,
    pub starting: &'static str,
    pub directory: &'static str,
    pub command: &'static str,
    pub waiting: &'static str,
    pub opening_browser: &'static str,
    pub browser_failed: &'static str,
    pub running: &'static str,
    pub stopping: &'static str,
    pub exited: &'static str,
    pub start_failed: &'static str,
}

pub const LAUNCHER_MESSAGES: LauncherMessages = LauncherMessages {
    header: "🎨 Portrait Master FLUX - Launcher\n========================================",
    app_missing: "ComfyUI not found at {path}! Run pm-install first",
    mode_cpu: "CPU mode",
    mode_nvidia: "NVIDIA GPU mode",
    mode_apple: "Apple Silicon mode",
    mode_amd: "AMD GPU detected, running in CPU mode",
    starting: "Starting ComfyUI...",
    directory: "  Directory: {path}",
    command: "  Command: {command}",
    waiting: "Waiting {seconds} seconds for startup...",
    opening_browser: "Opening browser: {url}",
    browser_failed: "Could not open a browser ({error}). Visit {url} manually",
    running: "\n🎨 Portrait Master FLUX is running!\n  Web interface: {url}\n  Load a workflow from the list to get started\n  Press Ctrl+C to stop\n--------------------------------------------------",
    stopping: "\nStopping Portrait Master...",
    exited: "ComfyUI exited with code {code}",
    start_failed: "Failed to start ComfyUI: {error}",
};

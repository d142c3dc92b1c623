//! Installer messages

pub struct InstallerMessages {
    // ============================================================================
    // Prerequisites and hardware
    // ============================================================================
    pub header: &'static str,
    pub checking_prerequisites: &'static str,
    pub python_ok: &'static str,
    pub python_too_old: &'static str,
    pub python_missing: &'static str,
    pub git_ok: &'static str,
    pub git_missing: &'static str,
    pub detecting_hardware: &'static str,
    pub system_label: &'static str,
    pub gpu_nvidia: &'static str,
    pub gpu_apple: &'static str,
    pub gpu_amd: &'static str,
    pub gpu_cpu_only: &'static str,
    pub use_gpu_prompt: &'static str,
    pub cpu_auto: &'static str,
    pub clean_ignored: &'static str,
    pub starting: &'static str,

    // ============================================================================
    // Provisioning
    // ============================================================================
    pub runtime_installing: &'static str,
    pub runtime_mode: &'static str,
    pub runtime_installed: &'static str,
    pub runtime_failed: &'static str,
    pub deps_installing: &'static str,
    pub dep_installed: &'static str,
    pub dep_failed: &'static str,
    pub deps_done: &'static str,

    // ============================================================================
    // Fetching
    // ============================================================================
    pub app_setup: &'static str,
    pub app_cloned: &'static str,
    pub app_present: &'static str,
    pub app_clone_failed: &'static str,
    pub app_requirements_ok: &'static str,
    pub app_requirements_failed: &'static str,
    pub nodes_installing: &'static str,
    pub node_cloned: &'static str,
    pub node_present: &'static str,
    pub node_failed: &'static str,
    pub nodes_done: &'static str,
    pub models_setup: &'static str,
    pub models_manual: &'static str,

    // ============================================================================
    // Launcher and completion
    // ============================================================================
    pub launcher_creating: &'static str,
    pub launcher_created: &'static str,
    pub shortcut_created: &'static str,
    pub shortcut_failed: &'static str,
    pub complete: &'static str,
}

pub const INSTALLER_MESSAGES: InstallerMessages = InstallerMessages {
    header: "🎨 Portrait Master FLUX - Local Installation\n==================================================",
    checking_prerequisites: "Checking prerequisites...",
    python_ok: "Python {version} OK",
    python_too_old: "Python 3.8+ is required. Found: {version}",
    python_missing: "Python was not found. Install Python 3.8+ or set PM_PYTHON to continue",
    git_ok: "Git available",
    git_missing: "Git not found! Install Git to continue",
    detecting_hardware: "Detecting hardware...",
    system_label: "  System: {os} ({arch})",
    gpu_nvidia: "  NVIDIA GPU detected",
    gpu_apple: "  Apple Silicon detected",
    gpu_amd: "  AMD GPU detected",
    gpu_cpu_only: "  CPU only",
    use_gpu_prompt: "GPU detected. Use the GPU?",
    cpu_auto: "CPU mode selected automatically",
    clean_ignored: "--clean has no effect, existing checkouts are kept",
    starting: "Starting installation...",

    runtime_installing: "Installing PyTorch...",
    runtime_mode: "{mode} mode selected",
    runtime_installed: "PyTorch installed",
    runtime_failed: "PyTorch installation failed: {error}",
    deps_installing: "Installing core dependencies...",
    dep_installed: "  {package}",
    dep_failed: "Failed to install {package}",
    deps_done: "Dependencies installed ({installed}/{total})",

    app_setup: "Setting up ComfyUI...",
    app_cloned: "ComfyUI cloned",
    app_present: "ComfyUI already present",
    app_clone_failed: "Failed to clone ComfyUI: {error}",
    app_requirements_ok: "ComfyUI requirements installed",
    app_requirements_failed: "Failed to install ComfyUI requirements",
    nodes_installing: "Installing custom nodes...",
    node_cloned: "  {name}",
    node_present: "  {name} (already present)",
    node_failed: "Failed to install {name}",
    nodes_done: "Custom nodes installed",
    models_setup: "Preparing FLUX model directories...",
    models_manual: "FLUX models (~50GB) must be downloaded manually from:\n  https://huggingface.co/black-forest-labs/FLUX.1-dev\n  Place the files in {models_dir}:\n    - flux1-dev.safetensors -> unet/\n    - ae.safetensors -> vae/\n    - clip_l.safetensors, t5xxl_fp16.safetensors -> clip/",

    launcher_creating: "Creating launcher...",
    launcher_created: "Launcher created: {path}",
    shortcut_created: "Desktop shortcut created",
    shortcut_failed: "Could not create desktop shortcut: {error}",
    complete: "\n✅ INSTALLATION COMPLETE!\n\nTo start Portrait Master:\n  - Windows: double-click 'Portrait Master' on the desktop\n  - Mac/Linux: run {launcher}\n\n  Web interface: {url}\n  Workflow: load 'Portrait_Basic_Local.json'\n  Models: download from HuggingFace into ComfyUI/models/",
};

//! Setup messages (config.json and system advice)

pub struct SetupMessages {
    pub header: &'static str,
    pub config_written: &'static str,
    pub system_label: &'static str,
    pub ram_label: &'static str,
    pub ram_limited: &'static str,
    pub ram_plenty: &'static str,
    pub complete: &'static str,
}

pub const SETUP_MESSAGES: SetupMessages = SetupMessages {
    header: "🎨 Portrait Master FLUX - Advanced Setup\n========================================",
    config_written: "Configuration file written: {path}",
    system_label: "  System: {system}",
    ram_label: "  RAM: {ram}GB",
    ram_limited: "Limited RAM - use CPU or lowvram mode",
    ram_plenty: "Plenty of RAM - high batch sizes are fine",
    complete: "\n✅ Setup complete!",
};

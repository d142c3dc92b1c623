//! Common/shared messages across binaries

pub struct CommonMessages {
    pub error_generic: &'static str,
    pub logging_init_failed: &'static str,
    pub web_ui_url: &'static str,
}

pub const COMMON_MESSAGES: CommonMessages = CommonMessages {
    error_generic: "Error: {error}",
    logging_init_failed: "Failed to initialize logging, continuing without diagnostics",
    web_ui_url: "http://localhost:{port}",
};

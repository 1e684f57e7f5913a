pub mod cli_consts {
    //! Admin Client Configuration Constants

    // =============================================================================
    // UI CONFIGURATION
    // =============================================================================

    /// How long the UI loop waits for a key press before redrawing (milliseconds)
    pub const UI_POLL_INTERVAL_MS: u64 = 100;
}

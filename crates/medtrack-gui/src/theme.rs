//! Theme and styling constants

/// Spacing constants
pub mod spacing {
    pub const XS: f32 = 4.0;
    pub const SM: f32 = 8.0;
    pub const MD: f32 = 16.0;
}

/// Row markers for the expiry status report
pub mod colors {
    use egui::Color32;
    use medtrack_core::ExpiryStatus;

    pub const EXPIRED_BG: Color32 = Color32::from_rgb(198, 40, 40);
    pub const EXPIRING_SOON_BG: Color32 = Color32::from_rgb(251, 192, 45);
    pub const SAFE_BG: Color32 = Color32::from_rgb(46, 125, 50);

    /// Background and text color for a bucket.
    pub fn status_colors(status: ExpiryStatus) -> (Color32, Color32) {
        match status {
            ExpiryStatus::Expired => (EXPIRED_BG, Color32::WHITE),
            ExpiryStatus::ExpiringSoon => (EXPIRING_SOON_BG, Color32::BLACK),
            ExpiryStatus::Safe => (SAFE_BG, Color32::WHITE),
        }
    }
}

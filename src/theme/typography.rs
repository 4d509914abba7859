//! Typography - Font Sizes and Weights

/// Typography constants (pixels)
pub struct Typography;

impl Typography {
    // Font sizes
    pub const TEXT_SM: f32 = 14.0;
    pub const TEXT_BASE: f32 = 16.0;
    pub const TEXT_LG: f32 = 18.0;

    // Icon sizes
    pub const ICON_SM: f32 = 16.0;
    pub const ICON_MD: f32 = 20.0;
    pub const ICON_LG: f32 = 24.0;
    pub const ICON_XL: f32 = 48.0;

    // Spacing scale used by inputs and tables
    pub const SPACE_1_5: f32 = 6.0;
    pub const SPACE_2: f32 = 8.0;
    pub const SPACE_2_5: f32 = 10.0;
    pub const SPACE_3: f32 = 12.0;
    pub const SPACE_4: f32 = 16.0;
    pub const SPACE_10: f32 = 40.0;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scales_ascend() {
        let text = [Typography::TEXT_SM, Typography::TEXT_BASE, Typography::TEXT_LG];
        let icons = [
            Typography::ICON_SM,
            Typography::ICON_MD,
            Typography::ICON_LG,
            Typography::ICON_XL,
        ];
        let spacing = [
            Typography::SPACE_1_5,
            Typography::SPACE_2,
            Typography::SPACE_2_5,
            Typography::SPACE_3,
            Typography::SPACE_4,
            Typography::SPACE_10,
        ];
        for scale in [&text[..], &icons[..], &spacing[..]] {
            assert!(scale.windows(2).all(|w| w[0] < w[1]));
        }
    }
}

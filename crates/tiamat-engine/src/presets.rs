//! Ready-made loader configurations.
//!
//! Each preset is a plain [`WaveLoaderConfig`] value; callers can use them
//! as-is or as a starting point for further tweaking.

use crate::wave::{PathVariant, WaveLoaderConfig, WaveOverride};

/// The default showcase: three navy waves on a 240×80 canvas.
pub fn mahalo() -> WaveLoaderConfig {
    WaveLoaderConfig::new()
        .size(240.0, 80.0)
        .waves(3.0)
        .color("#012D53")
        .period_ms(4000.0)
        .path_variant(PathVariant::Rounded)
}

/// Slow northern-lights ribbons; per-wave colors and periods.
pub fn aurora() -> WaveLoaderConfig {
    WaveLoaderConfig::new()
        .size(320.0, 200.0)
        .waves(4.0)
        .path_variant(PathVariant::Smooth)
        .wave_overrides([
            WaveOverride::default().color("#890082").period_ms(10_200.0),
            WaveOverride::default().color("#890082").period_ms(8600.0),
            WaveOverride::default().color("#00D00B").period_ms(5800.0),
            WaveOverride::default().color("#5BC800").period_ms(6200.0),
        ])
}

/// Warm dusk bands in three reds.
pub fn sunset() -> WaveLoaderConfig {
    WaveLoaderConfig::new()
        .size(400.0, 70.0)
        .waves(3.0)
        .color("#C2694F")
        .period_ms(3500.0)
        .wave_overrides([
            WaveOverride::default().color("#E8A87C"),
            WaveOverride::default().color("#C2694F"),
            WaveOverride::default().color("#8B3A3A"),
        ])
}

/// A single slow ice-blue wave.
pub fn frost() -> WaveLoaderConfig {
    WaveLoaderConfig::new()
        .size(260.0, 60.0)
        .waves(1.0)
        .color("#A8DADC")
        .period_ms(7000.0)
        .path_variant(PathVariant::Smooth)
}

/// Five fast slate-gray waves.
pub fn storm() -> WaveLoaderConfig {
    WaveLoaderConfig::new()
        .size(320.0, 70.0)
        .waves(5.0)
        .color("#2B3A4A")
        .period_ms(2000.0)
}

/// Two deep-green waves.
pub fn moss() -> WaveLoaderConfig {
    WaveLoaderConfig::new()
        .size(180.0, 90.0)
        .waves(2.0)
        .color("#1B4332")
        .period_ms(4800.0)
        .path_variant(PathVariant::Rounded)
}

/// Five purples with mixed variants and periods.
pub fn nebula() -> WaveLoaderConfig {
    WaveLoaderConfig::new()
        .size(300.0, 100.0)
        .waves(5.0)
        .color("#3D0066")
        .period_ms(5500.0)
        .path_variant(PathVariant::Smooth)
        .wave_overrides([
            WaveOverride::default()
                .color("#6A0DAD")
                .path_variant(PathVariant::Rounded)
                .period_ms(5000.0),
            WaveOverride::default()
                .color("#9B59B6")
                .path_variant(PathVariant::Smooth)
                .period_ms(6000.0),
            WaveOverride::default().color("#3D0066").period_ms(5200.0),
            WaveOverride::default()
                .color("#BB8FCE")
                .path_variant(PathVariant::Rounded)
                .period_ms(4800.0),
            WaveOverride::default()
                .color("#7D3C98")
                .path_variant(PathVariant::Smooth)
                .period_ms(5700.0),
        ])
}

/// Four saturated neons over a near-black base.
pub fn neon_pulse() -> WaveLoaderConfig {
    WaveLoaderConfig::new()
        .size(260.0, 90.0)
        .waves(4.0)
        .color("#0B1020")
        .period_ms(2800.0)
        .path_variant(PathVariant::Smooth)
        .wave_overrides([
            WaveOverride::default().color("#00F5FF"),
            WaveOverride::default().color("#7B2CFF"),
            WaveOverride::default().color("#FF2D95"),
            WaveOverride::default().color("#00FFA3"),
        ])
}

/// Reds climbing over a scorched base.
pub fn lava() -> WaveLoaderConfig {
    WaveLoaderConfig::new()
        .size(260.0, 88.0)
        .waves(3.0)
        .color("#2A0E05")
        .period_ms(3200.0)
        .path_variant(PathVariant::Rounded)
        .wave_overrides([
            WaveOverride::default().color("#FF0000"),
            WaveOverride::default().color("#FF2E00"),
            WaveOverride::default().color("#FF0000"),
        ])
}

/// Two acid greens, fast.
pub fn toxic() -> WaveLoaderConfig {
    WaveLoaderConfig::new()
        .size(240.0, 84.0)
        .waves(2.0)
        .color("#1B2B00")
        .period_ms(2300.0)
        .wave_overrides([
            WaveOverride::default().color("#9EFF00"),
            WaveOverride::default().color("#D2FF6B"),
        ])
}

/// All built-in presets with display names, in showcase order.
pub fn all() -> Vec<(&'static str, WaveLoaderConfig)> {
    vec![
        ("mahalo", mahalo()),
        ("aurora", aurora()),
        ("sunset", sunset()),
        ("frost", frost()),
        ("storm", storm()),
        ("moss", moss()),
        ("nebula", nebula()),
        ("neon-pulse", neon_pulse()),
        ("lava", lava()),
        ("toxic", toxic()),
    ]
}

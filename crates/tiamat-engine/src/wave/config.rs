//! User-facing configuration and the layered override resolver.
//!
//! Resolution is total: every malformed field has a pure fallback, so the
//! loader always renders something plausible instead of erroring.

use super::anchors::OPACITY_ANCHORS;
use super::variant::PathVariant;

pub const MIN_WAVES: usize = 1;
pub const MAX_WAVES: usize = 5;
pub const DEFAULT_WAVES: usize = 3;

pub const DEFAULT_WIDTH: f32 = 240.0;
pub const DEFAULT_HEIGHT: f32 = 80.0;
pub const DEFAULT_COLOR: &str = "#012D53";
pub const DEFAULT_PERIOD_MS: f64 = 4000.0;
/// Matches the last opacity anchor: a single wave at default opacity renders
/// exactly like the strongest slot of a full stack.
pub const DEFAULT_OPACITY: f64 = OPACITY_ANCHORS[OPACITY_ANCHORS.len() - 1];
pub const DEFAULT_FADE_OUT: f64 = 60.0;

/// Per-slot override record. Unset fields inherit the resolved global value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WaveOverride {
    pub color: Option<String>,
    pub period_ms: Option<f64>,
    pub path_variant: Option<PathVariant>,
}

impl WaveOverride {
    pub fn color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    pub fn period_ms(mut self, period_ms: f64) -> Self {
        self.period_ms = Some(period_ms);
        self
    }

    pub fn path_variant(mut self, variant: PathVariant) -> Self {
        self.path_variant = Some(variant);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.color.is_none() && self.period_ms.is_none() && self.path_variant.is_none()
    }
}

/// Immutable per-render-cycle loader configuration.
///
/// Numeric fields hold raw user input (`waves` may be non-finite); clamping
/// and fallback happen at resolution time so the validation contract stays
/// observable and testable.
#[derive(Debug, Clone, PartialEq)]
pub struct WaveLoaderConfig {
    pub width: f32,
    pub height: f32,
    pub waves: f64,
    pub color: String,
    pub period_ms: f64,
    pub path_variant: PathVariant,
    pub opacity: f64,
    pub fade_out: f64,
    pub wave_overrides: Vec<WaveOverride>,
}

impl Default for WaveLoaderConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            waves: DEFAULT_WAVES as f64,
            color: DEFAULT_COLOR.to_string(),
            period_ms: DEFAULT_PERIOD_MS,
            path_variant: PathVariant::default(),
            opacity: DEFAULT_OPACITY,
            fade_out: DEFAULT_FADE_OUT,
            wave_overrides: Vec::new(),
        }
    }
}

impl WaveLoaderConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn size(mut self, width: f32, height: f32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    pub fn waves(mut self, waves: f64) -> Self {
        self.waves = waves;
        self
    }

    pub fn color(mut self, color: impl Into<String>) -> Self {
        self.color = color.into();
        self
    }

    pub fn period_ms(mut self, period_ms: f64) -> Self {
        self.period_ms = period_ms;
        self
    }

    pub fn path_variant(mut self, variant: PathVariant) -> Self {
        self.path_variant = variant;
        self
    }

    pub fn opacity(mut self, opacity: f64) -> Self {
        self.opacity = opacity;
        self
    }

    pub fn fade_out(mut self, fade_out: f64) -> Self {
        self.fade_out = fade_out;
        self
    }

    pub fn wave_overrides(mut self, overrides: impl Into<Vec<WaveOverride>>) -> Self {
        self.wave_overrides = overrides.into();
        self
    }

    /// Clamped active slot count for this configuration.
    pub fn wave_count(&self) -> usize {
        clamp_wave_count(self.waves)
    }
}

/// Fully-determined per-slot configuration; never contains unset fields.
#[derive(Debug, Clone, PartialEq)]
pub struct WaveResolvedConfig {
    pub color: String,
    pub period_ms: f64,
    pub path_variant: PathVariant,
}

/// Non-finite input takes the default count; anything else rounds to the
/// nearest integer and clamps into `[MIN_WAVES, MAX_WAVES]`.
pub fn clamp_wave_count(waves: f64) -> usize {
    if !waves.is_finite() {
        return DEFAULT_WAVES;
    }

    (waves.round() as i64).clamp(MIN_WAVES as i64, MAX_WAVES as i64) as usize
}

/// A color is valid when its trimmed form is non-empty; otherwise the
/// caller's fallback applies. The fallback layering (override → resolved
/// global → hard default) is what makes per-wave inheritance work.
pub fn resolve_color(color: Option<&str>, fallback: &str) -> String {
    match color {
        Some(c) if !c.trim().is_empty() => c.trim().to_string(),
        _ => fallback.to_string(),
    }
}

/// A period is valid when finite and positive; otherwise the caller's
/// fallback applies.
pub fn resolve_period(period_ms: Option<f64>, fallback: f64) -> f64 {
    match period_ms {
        Some(p) if p.is_finite() && p > 0.0 => p,
        _ => fallback,
    }
}

/// Non-finite opacity takes the default; finite input clamps to [0, 1].
pub fn resolve_opacity(opacity: f64) -> f64 {
    if !opacity.is_finite() {
        return DEFAULT_OPACITY;
    }

    clamp_unit(opacity)
}

/// Non-finite fade intensity takes the default; finite input clamps to
/// [0, 100].
pub fn resolve_fade_out(fade_out: f64) -> f64 {
    if !fade_out.is_finite() {
        return DEFAULT_FADE_OUT;
    }

    fade_out.clamp(0.0, 100.0)
}

#[inline]
pub fn clamp_unit(value: f64) -> f64 {
    if !value.is_finite() {
        return 0.0;
    }

    value.clamp(0.0, 1.0)
}

/// Produces exactly `wave_count` resolved records.
///
/// Per field, per slot: the override (if present and valid) wins, else the
/// resolved global value, which itself already fell back to the hard default
/// if absent or invalid.
pub fn build_wave_configs(config: &WaveLoaderConfig) -> Vec<WaveResolvedConfig> {
    let wave_count = config.wave_count();

    let base_color = resolve_color(Some(&config.color), DEFAULT_COLOR);
    let base_period = resolve_period(Some(config.period_ms), DEFAULT_PERIOD_MS);
    if base_period != config.period_ms {
        log::debug!(
            "invalid global period {} replaced by {}ms",
            config.period_ms,
            base_period
        );
    }
    let base_variant = config.path_variant;

    (0..wave_count)
        .map(|index| {
            let ov = config.wave_overrides.get(index);
            WaveResolvedConfig {
                color: resolve_color(ov.and_then(|o| o.color.as_deref()), &base_color),
                period_ms: resolve_period(ov.and_then(|o| o.period_ms), base_period),
                path_variant: ov.and_then(|o| o.path_variant).unwrap_or(base_variant),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    // ── wave count clamping ───────────────────────────────────────────────

    #[test]
    fn wave_count_clamps_to_bounds() {
        assert_eq!(clamp_wave_count(0.0), 1);
        assert_eq!(clamp_wave_count(7.0), 5);
        assert_eq!(clamp_wave_count(-3.0), 1);
    }

    #[test]
    fn wave_count_rounds_to_nearest() {
        assert_eq!(clamp_wave_count(2.4), 2);
        assert_eq!(clamp_wave_count(2.6), 3);
    }

    #[test]
    fn non_finite_wave_count_takes_default() {
        assert_eq!(clamp_wave_count(f64::NAN), 3);
        assert_eq!(clamp_wave_count(f64::INFINITY), 3);
    }

    // ── scalar resolution ─────────────────────────────────────────────────

    #[test]
    fn color_falls_back_when_blank() {
        assert_eq!(resolve_color(Some("  "), "#111111"), "#111111");
        assert_eq!(resolve_color(None, "#111111"), "#111111");
        assert_eq!(resolve_color(Some(" #222222 "), "#111111"), "#222222");
    }

    #[test]
    fn period_falls_back_when_not_positive() {
        assert_eq!(resolve_period(Some(0.0), 4000.0), 4000.0);
        assert_eq!(resolve_period(Some(-5.0), 4000.0), 4000.0);
        assert_eq!(resolve_period(Some(f64::NAN), 4000.0), 4000.0);
        assert_eq!(resolve_period(Some(3000.0), 4000.0), 3000.0);
    }

    #[test]
    fn opacity_and_fade_clamp() {
        assert_eq!(resolve_opacity(-1.0), 0.0);
        assert_eq!(resolve_opacity(2.0), 1.0);
        assert_eq!(resolve_opacity(f64::NAN), DEFAULT_OPACITY);
        assert_eq!(resolve_fade_out(150.0), 100.0);
        assert_eq!(resolve_fade_out(-10.0), 0.0);
        assert_eq!(resolve_fade_out(f64::NAN), DEFAULT_FADE_OUT);
    }

    // ── override resolution ───────────────────────────────────────────────

    #[test]
    fn override_inherits_unset_fields_from_global() {
        let config = WaveLoaderConfig::new()
            .waves(2.0)
            .color("#111111")
            .period_ms(3000.0)
            .wave_overrides([WaveOverride::default().color("#222222")]);

        let resolved = build_wave_configs(&config);
        assert_eq!(resolved.len(), 2);

        assert_eq!(resolved[0].color, "#222222");
        assert_eq!(resolved[0].period_ms, 3000.0);
        assert_eq!(resolved[0].path_variant, PathVariant::Rounded);

        // Slot without an override inherits everything.
        assert_eq!(resolved[1].color, "#111111");
        assert_eq!(resolved[1].period_ms, 3000.0);
    }

    #[test]
    fn invalid_override_falls_back_to_resolved_global_not_hard_default() {
        let config = WaveLoaderConfig::new()
            .waves(1.0)
            .color("#333333")
            .period_ms(2500.0)
            .wave_overrides([WaveOverride::default().color("   ").period_ms(-1.0)]);

        let resolved = build_wave_configs(&config);
        assert_eq!(resolved[0].color, "#333333");
        assert_eq!(resolved[0].period_ms, 2500.0);
    }

    #[test]
    fn invalid_global_falls_back_to_hard_default() {
        let config = WaveLoaderConfig::new().waves(1.0).color("").period_ms(f64::NAN);

        let resolved = build_wave_configs(&config);
        assert_eq!(resolved[0].color, DEFAULT_COLOR);
        assert_eq!(resolved[0].period_ms, DEFAULT_PERIOD_MS);
    }

    #[test]
    fn resolver_emits_exactly_wave_count_records() {
        for waves in 1..=5 {
            let config = WaveLoaderConfig::new().waves(waves as f64);
            assert_eq!(build_wave_configs(&config).len(), waves);
        }

        // More overrides than waves: extras are ignored.
        let config = WaveLoaderConfig::new().waves(2.0).wave_overrides(vec![
            WaveOverride::default(),
            WaveOverride::default(),
            WaveOverride::default().color("#999999"),
        ]);
        assert_eq!(build_wave_configs(&config).len(), 2);
    }
}

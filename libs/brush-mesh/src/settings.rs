//! # Build Settings
//!
//! Runtime knobs for the brush builder. Defaults come from
//! `config::constants`; the validating constructor rejects values that
//! would make welding or clipping meaningless.

use config::constants::{
    CLIP_PLANE_EPSILON, DEFAULT_UV_CHANNEL, MAX_UV_CHANNELS, SNAP_THRESHOLD,
    TEXTURE_ALIGNMENT_THRESHOLD,
};
use thiserror::Error;

/// Error returned when invalid settings are provided.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ConfigError {
    /// Weld tolerance is negative or not finite.
    #[error("weld tolerance must be finite and >= 0: {0}")]
    InvalidWeldTolerance(f64),
    /// Alignment threshold is outside [0, 1].
    #[error("texture alignment threshold must be within [0, 1]: {0}")]
    InvalidAlignmentThreshold(f64),
    /// Clip epsilon is negative or not finite.
    #[error("clip epsilon must be finite and >= 0: {0}")]
    InvalidClipEpsilon(f64),
    /// UV channel index beyond what a vertex instance can hold.
    #[error("UV channel must be < {max}: {channel}")]
    InvalidUvChannel {
        /// Requested channel
        channel: usize,
        /// Exclusive upper bound
        max: usize,
    },
}

/// Tolerances and options for one `BrushMeshBuilder`.
///
/// # Examples
/// ```
/// use brush_mesh::BuildSettings;
///
/// let settings = BuildSettings::new(0.5, 0.1, 1.0e-5)?.with_snap_to_grid(true);
/// assert_eq!(settings.weld_tolerance(), 0.5);
/// assert!(settings.snap_to_grid());
/// # Ok::<(), brush_mesh::ConfigError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BuildSettings {
    weld_tolerance: f64,
    texture_alignment_threshold: f64,
    clip_epsilon: f64,
    snap_to_grid: bool,
    uv_channel: usize,
}

impl BuildSettings {
    /// Builds settings enforcing strict validation of the supplied values.
    pub fn new(
        weld_tolerance: f64,
        texture_alignment_threshold: f64,
        clip_epsilon: f64,
    ) -> Result<Self, ConfigError> {
        if !weld_tolerance.is_finite() || weld_tolerance < 0.0 {
            return Err(ConfigError::InvalidWeldTolerance(weld_tolerance));
        }
        if !(0.0..=1.0).contains(&texture_alignment_threshold) {
            return Err(ConfigError::InvalidAlignmentThreshold(
                texture_alignment_threshold,
            ));
        }
        if !clip_epsilon.is_finite() || clip_epsilon < 0.0 {
            return Err(ConfigError::InvalidClipEpsilon(clip_epsilon));
        }
        Ok(Self {
            weld_tolerance,
            texture_alignment_threshold,
            clip_epsilon,
            ..Self::default()
        })
    }

    /// Enables snapping positions to the weld-tolerance grid before welding.
    ///
    /// Off by default: positions are welded by tolerance and stored as
    /// clipped, so welded coordinates depend on which face created them.
    pub fn with_snap_to_grid(mut self, snap_to_grid: bool) -> Self {
        self.snap_to_grid = snap_to_grid;
        self
    }

    /// Selects the UV channel the builder writes.
    pub fn with_uv_channel(mut self, uv_channel: usize) -> Result<Self, ConfigError> {
        if uv_channel >= MAX_UV_CHANNELS {
            return Err(ConfigError::InvalidUvChannel {
                channel: uv_channel,
                max: MAX_UV_CHANNELS,
            });
        }
        self.uv_channel = uv_channel;
        Ok(self)
    }

    /// Componentwise distance under which positions weld together.
    #[inline]
    pub fn weld_tolerance(&self) -> f64 {
        self.weld_tolerance
    }

    /// Minimum |cos| between texture normal and face normal.
    #[inline]
    pub fn texture_alignment_threshold(&self) -> f64 {
        self.texture_alignment_threshold
    }

    /// Signed distance band treated as "on the plane" while clipping.
    #[inline]
    pub fn clip_epsilon(&self) -> f64 {
        self.clip_epsilon
    }

    /// Whether positions are grid-snapped before welding.
    #[inline]
    pub fn snap_to_grid(&self) -> bool {
        self.snap_to_grid
    }

    /// UV channel written for every vertex instance.
    #[inline]
    pub fn uv_channel(&self) -> usize {
        self.uv_channel
    }
}

impl Default for BuildSettings {
    fn default() -> Self {
        Self {
            weld_tolerance: SNAP_THRESHOLD,
            texture_alignment_threshold: TEXTURE_ALIGNMENT_THRESHOLD,
            clip_epsilon: CLIP_PLANE_EPSILON,
            snap_to_grid: false,
            uv_channel: DEFAULT_UV_CHANNEL,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_settings_match_constants() {
        let settings = BuildSettings::default();
        assert_eq!(settings.weld_tolerance(), SNAP_THRESHOLD);
        assert_eq!(settings.texture_alignment_threshold(), TEXTURE_ALIGNMENT_THRESHOLD);
        assert_eq!(settings.clip_epsilon(), CLIP_PLANE_EPSILON);
        assert!(!settings.snap_to_grid());
        assert_eq!(settings.uv_channel(), DEFAULT_UV_CHANNEL);
    }

    #[test]
    fn new_validates_inputs() {
        assert_eq!(
            BuildSettings::new(-0.1, 0.1, 1e-5).unwrap_err(),
            ConfigError::InvalidWeldTolerance(-0.1)
        );
        assert_eq!(
            BuildSettings::new(0.25, 1.5, 1e-5).unwrap_err(),
            ConfigError::InvalidAlignmentThreshold(1.5)
        );
        assert!(matches!(
            BuildSettings::new(0.25, 0.1, f64::NAN),
            Err(ConfigError::InvalidClipEpsilon(_))
        ));
    }

    #[test]
    fn uv_channel_is_bounded() {
        let settings = BuildSettings::default().with_uv_channel(2).unwrap();
        assert_eq!(settings.uv_channel(), 2);
        assert_eq!(
            BuildSettings::default().with_uv_channel(MAX_UV_CHANNELS).unwrap_err(),
            ConfigError::InvalidUvChannel {
                channel: MAX_UV_CHANNELS,
                max: MAX_UV_CHANNELS
            }
        );
    }
}

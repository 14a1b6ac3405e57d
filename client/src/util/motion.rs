//! Per-instance hover motion for images.
//!
//! Motion parameters are rendered as CSS custom properties on the element and
//! picked up by the `.motion-hover` rule in `style/main.css`, so each instance
//! can tune scale, tilt, and timing without its own stylesheet rule.

#[cfg(test)]
#[path = "motion_test.rs"]
mod motion_test;

/// Class that enables the hover transform rule.
pub const MOTION_CLASS: &str = "motion-hover";

const DEFAULT_DURATION_MS: u32 = 400;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MotionProps {
    pub hover_scale: Option<f64>,
    pub hover_rotate_y_deg: Option<f64>,
    pub duration_ms: u32,
}

impl Default for MotionProps {
    fn default() -> Self {
        Self { hover_scale: None, hover_rotate_y_deg: None, duration_ms: DEFAULT_DURATION_MS }
    }
}

impl MotionProps {
    /// Scale up on hover.
    #[must_use]
    pub fn hover_scale(scale: f64) -> Self {
        Self { hover_scale: Some(scale), ..Self::default() }
    }

    #[must_use]
    pub fn with_rotate_y(mut self, degrees: f64) -> Self {
        self.hover_rotate_y_deg = Some(degrees);
        self
    }

    #[must_use]
    pub fn with_duration_ms(mut self, duration_ms: u32) -> Self {
        self.duration_ms = duration_ms;
        self
    }

    /// Inline style declarations carrying the motion variables.
    #[must_use]
    pub fn to_style(&self) -> String {
        let mut decls = vec![format!("--motion-duration: {}ms", self.duration_ms)];
        if let Some(scale) = self.hover_scale {
            decls.push(format!("--hover-scale: {scale}"));
        }
        if let Some(deg) = self.hover_rotate_y_deg {
            decls.push(format!("--hover-rotate-y: {deg}deg"));
        }
        decls.join("; ")
    }
}

/// Join a base inline style with optional motion variables.
#[must_use]
pub fn merge_style(base: Option<&str>, motion: Option<&MotionProps>) -> Option<String> {
    let base = base.map(str::trim).filter(|s| !s.is_empty());
    match (base, motion) {
        (None, None) => None,
        (Some(base), None) => Some(base.to_owned()),
        (None, Some(motion)) => Some(motion.to_style()),
        (Some(base), Some(motion)) => Some(format!("{}; {}", base.trim_end_matches(';'), motion.to_style())),
    }
}

//! Gauge color themes.
//!
//! One palette struct with every semantic role required, declared once and
//! passed down to renderers. Missing roles are a compile error, not a
//! runtime fallback.

/// Semantic color roles for a gauge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    pub loss: &'static str,
    pub profit: &'static str,
    pub loss_glow: &'static str,
    pub profit_glow: &'static str,
    pub bg: &'static str,
    pub text: &'static str,
    pub text_muted: &'static str,
    pub track: &'static str,
}

impl Theme {
    pub const fn light() -> Self {
        Self {
            loss: "#ef4444",
            profit: "#10b981",
            loss_glow: "rgba(239, 68, 68, 0.6)",
            profit_glow: "rgba(16, 185, 129, 0.6)",
            bg: "#1f2937",
            text: "#ffffff",
            text_muted: "#9ca3af",
            track: "#374151",
        }
    }

    pub const fn dark() -> Self {
        Self {
            loss: "#ff0844",
            profit: "#00ff88",
            loss_glow: "rgba(255, 8, 68, 0.8)",
            profit_glow: "rgba(0, 255, 136, 0.8)",
            bg: "#0a0a0f",
            text: "#00ff88",
            text_muted: "#4a5568",
            track: "#1a1a2e",
        }
    }

    pub const fn for_mode(is_dark: bool) -> Self {
        if is_dark {
            Self::dark()
        } else {
            Self::light()
        }
    }

    /// Color of the value's side.
    pub fn side_color(&self, is_profit: bool) -> &'static str {
        if is_profit {
            self.profit
        } else {
            self.loss
        }
    }

    /// Glow of the value's side.
    pub fn side_glow(&self, is_profit: bool) -> &'static str {
        if is_profit {
            self.profit_glow
        } else {
            self.loss_glow
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::light()
    }
}

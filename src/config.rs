//! Display configuration types and builder

use crate::command::{DEFAULT_MODE, DEFAULT_OPTIONS, MATRIX_COUNT, MAX_BRIGHTNESS};
pub use crate::error::BuilderError;

/// Tallest supported display, in rows
///
/// Each matrix frame is eight bytes; the last one carries the decimal point.
pub const MAX_HEIGHT: usize = 7;

/// Widest supported chip stride, in columns
pub const MAX_CHIP_WIDTH: usize = 8;

/// Visible LED columns on each matrix
pub const MATRIX_COLUMNS: usize = 5;

/// Display-space geometry
///
/// Describes the logical bitmap the caller draws into and how it is cut into
/// chips: columns `i * chip_width .. (i + 1) * chip_width` belong to matrix `i`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Layout {
    /// Display width in pixels
    pub width: usize,
    /// Display height in pixels
    pub height: usize,
    /// Display columns per chip
    pub chip_width: usize,
}

impl Layout {
    /// Micro Dot pHAT layout: 45x7, one chip every 8 columns
    ///
    /// The three columns between neighbouring matrices have no LEDs, so
    /// spacing on screen matches spacing on the board.
    pub const MICRO_DOT_PHAT: Self = Self {
        width: 45,
        height: 7,
        chip_width: 8,
    };

    /// Gapless layout: 30x7, matrices packed side by side
    pub const COMPACT: Self = Self {
        width: 30,
        height: 7,
        chip_width: 5,
    };

    /// Create a new layout with validation
    ///
    /// # Errors
    ///
    /// Returns `BuilderError::InvalidLayout` if:
    /// - height is 0 or greater than [`MAX_HEIGHT`]
    /// - chip_width is 0 or greater than [`MAX_CHIP_WIDTH`]
    /// - width is 0 or wider than six chips
    pub fn new(width: usize, height: usize, chip_width: usize) -> Result<Self, BuilderError> {
        let err = BuilderError::InvalidLayout {
            width,
            height,
            chip_width,
        };
        if height == 0 || height > MAX_HEIGHT {
            return Err(err);
        }
        if chip_width == 0 || chip_width > MAX_CHIP_WIDTH {
            return Err(err);
        }
        if width == 0 || width > chip_width * MATRIX_COUNT {
            return Err(err);
        }
        Ok(Self {
            width,
            height,
            chip_width,
        })
    }
}

impl Default for Layout {
    fn default() -> Self {
        Self::MICRO_DOT_PHAT
    }
}

/// Display mirroring
///
/// Setting both axes rotates the output by 180 degrees, for boards mounted
/// upside down.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Mirror {
    /// Flip horizontally
    pub x: bool,
    /// Flip vertically
    pub y: bool,
}

impl Mirror {
    /// No mirroring
    pub const NONE: Self = Self { x: false, y: false };

    /// Both axes flipped
    pub const ROTATE_180: Self = Self { x: true, y: true };
}

/// Display configuration
///
/// Use `Builder` to create a Config.
#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    /// Display geometry
    pub layout: Layout,
    /// Output mirroring
    pub mirror: Mirror,
    /// PWM brightness, 0 to [`MAX_BRIGHTNESS`]
    pub brightness: u8,
    /// Configuration register value sent when a session opens
    pub mode: u8,
    /// Lighting effect register value sent when a session opens
    pub options: u8,
}

impl Default for Config {
    fn default() -> Self {
        Builder::new().build()
    }
}

/// Builder for constructing display configuration
///
/// # Example
///
/// ```
/// use microdotphat::{Builder, Layout};
///
/// let config = Builder::new()
///     .layout(Layout::COMPACT)
///     .rotate_180()
///     .brightness(64)
///     .build();
/// assert_eq!(config.layout.width, 30);
/// assert!(config.mirror.x && config.mirror.y);
/// ```
#[must_use]
pub struct Builder {
    layout: Layout,
    mirror: Mirror,
    brightness: u8,
    mode: u8,
    options: u8,
}

impl Default for Builder {
    fn default() -> Self {
        Self {
            layout: Layout::MICRO_DOT_PHAT,
            mirror: Mirror::NONE,
            brightness: MAX_BRIGHTNESS,
            mode: DEFAULT_MODE,
            options: DEFAULT_OPTIONS,
        }
    }
}

impl Builder {
    /// Create a new Builder with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set display geometry
    pub fn layout(mut self, layout: Layout) -> Self {
        self.layout = layout;
        self
    }

    /// Set horizontal and vertical mirroring
    pub fn mirror(mut self, x: bool, y: bool) -> Self {
        self.mirror = Mirror { x, y };
        self
    }

    /// Flip both axes
    pub fn rotate_180(mut self) -> Self {
        self.mirror = Mirror::ROTATE_180;
        self
    }

    /// Set initial brightness (clamped to [`MAX_BRIGHTNESS`])
    pub fn brightness(mut self, level: u8) -> Self {
        self.brightness = level.min(MAX_BRIGHTNESS);
        self
    }

    /// Set configuration register value
    pub fn mode(mut self, value: u8) -> Self {
        self.mode = value;
        self
    }

    /// Set lighting effect register value
    pub fn options(mut self, value: u8) -> Self {
        self.options = value;
        self
    }

    /// Build the configuration
    pub fn build(self) -> Config {
        Config {
            layout: self.layout,
            mirror: self.mirror,
            brightness: self.brightness,
            mode: self.mode,
            options: self.options,
        }
    }
}

//! Keys for the slider-driven simulation parameters.
//!
//! Every tunable value in the editor lives in exactly one slider. The
//! editor looks values up by `Param` each frame instead of caching them.

/// A simulation parameter bound to a slider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Param {
    SpawnRate,
    AngleSpread,
    InitialSpeed,
    StartSize,
    Gravity,
    Friction,
    StartRed,
    StartGreen,
    EndRed,
    EndGreen,
    Wind,
    Vortex,
    PointerPull,
}

impl Param {
    /// Every parameter, in panel order.
    pub const ALL: [Param; 13] = [
        Param::SpawnRate,
        Param::AngleSpread,
        Param::InitialSpeed,
        Param::StartSize,
        Param::Gravity,
        Param::Friction,
        Param::StartRed,
        Param::StartGreen,
        Param::EndRed,
        Param::EndGreen,
        Param::Wind,
        Param::Vortex,
        Param::PointerPull,
    ];

    /// Label shown above the slider track.
    pub fn label(&self) -> &'static str {
        match self {
            Param::SpawnRate => "Spawn Rate",
            Param::AngleSpread => "Angle Spread",
            Param::InitialSpeed => "Initial Speed",
            Param::StartSize => "Start Size",
            Param::Gravity => "Gravity",
            Param::Friction => "Friction",
            Param::StartRed => "Start R",
            Param::StartGreen => "Start G",
            Param::EndRed => "End R",
            Param::EndGreen => "End G",
            Param::Wind => "Wind",
            Param::Vortex => "Vortex",
            Param::PointerPull => "Pointer Pull",
        }
    }

    /// `(min, max, default)` for the slider bound to this parameter.
    pub fn range(&self) -> (f32, f32, f32) {
        match self {
            Param::SpawnRate => (0.0, 20.0, 5.0),
            Param::AngleSpread => (0.0, 6.28, 1.5),
            Param::InitialSpeed => (0.0, 10.0, 3.0),
            Param::StartSize => (1.0, 20.0, 1.5),
            Param::Gravity => (-0.5, 0.5, 0.1),
            Param::Friction => (0.9, 1.0, 0.97),
            Param::StartRed => (0.0, 255.0, 255.0),
            Param::StartGreen => (0.0, 255.0, 150.0),
            Param::EndRed => (0.0, 255.0, 50.0),
            Param::EndGreen => (0.0, 255.0, 255.0),
            Param::Wind => (-0.2, 0.2, 0.0),
            Param::Vortex => (-1.0, 1.0, 0.0),
            Param::PointerPull => (-1.0, 1.0, 0.0),
        }
    }

    /// Default value, always inside [`Param::range`].
    pub fn default_value(&self) -> f32 {
        self.range().2
    }
}

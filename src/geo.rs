use crate::error::GeoError;
use crate::types::Coords;

/// Zoom used for the initial view and whenever a workout is focused.
pub const MAP_ZOOM_LEVEL: u8 = 13;

/// One-shot source of the user's current position.
///
/// Consumed once at startup; a failure leaves the map unavailable.
pub trait Locator {
    fn locate(self) -> Result<Coords, GeoError>;
}

/// Position known up front (e.g. passed on the command line).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FixedLocator(pub Option<Coords>);

impl Locator for FixedLocator {
    fn locate(self) -> Result<Coords, GeoError> {
        self.0.ok_or(GeoError::Unavailable)
    }
}

impl<F> Locator for F
where
    F: FnOnce() -> Result<Coords, GeoError>,
{
    fn locate(self) -> Result<Coords, GeoError> {
        self()
    }
}

/// Where the map is looking.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MapView {
    pub center: Coords,
    pub zoom: u8,
}

impl MapView {
    pub const fn new(center: Coords) -> Self {
        Self {
            center,
            zoom: MAP_ZOOM_LEVEL,
        }
    }

    pub fn set_view(&mut self, center: Coords, zoom: u8) {
        self.center = center;
        self.zoom = zoom;
    }
}

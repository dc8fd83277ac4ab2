// Geographic domain models

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

impl LatLng {
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }
}

/// Rectangle described by its southwest and northeast corners.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub southwest: LatLng,
    pub northeast: LatLng,
}

impl Bounds {
    pub fn new(southwest: LatLng, northeast: LatLng) -> Self {
        Self {
            southwest,
            northeast,
        }
    }

    /// Inclusive on every edge.
    pub fn contains(&self, point: LatLng) -> bool {
        point.lat >= self.southwest.lat
            && point.lat <= self.northeast.lat
            && point.lng >= self.southwest.lng
            && point.lng <= self.northeast.lng
    }

    pub fn center(&self) -> LatLng {
        LatLng::new(
            (self.southwest.lat + self.northeast.lat) / 2.0,
            (self.southwest.lng + self.northeast.lng) / 2.0,
        )
    }

    /// Height and width in degrees
    pub fn span(&self) -> (f64, f64) {
        (
            self.northeast.lat - self.southwest.lat,
            self.northeast.lng - self.southwest.lng,
        )
    }

    /// Same span, moved so that `center` sits in the middle.
    pub fn recentered_on(&self, center: LatLng) -> Self {
        let (lat_span, lng_span) = self.span();
        Self::new(
            LatLng::new(center.lat - lat_span / 2.0, center.lng - lng_span / 2.0),
            LatLng::new(center.lat + lat_span / 2.0, center.lng + lng_span / 2.0),
        )
    }
}

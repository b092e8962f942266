use std::f64::consts::PI;

use crate::shared::LatLng;

pub const TILE_SIZE: f64 = 256.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MarkerId(pub usize);

/// The operations the dashboard needs from a map widget.
pub trait MapSurface {
    fn create_marker(&mut self, at: LatLng) -> MarkerId;
    fn move_marker(&mut self, marker: MarkerId, to: LatLng);
    /// Recenter without changing zoom.
    fn pan_to(&mut self, to: LatLng);
}

/// XYZ raster tile source, e.g. `https://{s}.example.com/{z}/{x}/{y}{r}.png`.
#[derive(Debug, Clone, PartialEq)]
pub struct TileLayer {
    pub url_template: String,
    pub subdomains: Vec<String>,
    pub max_zoom: u8,
}

impl TileLayer {
    pub fn new(url_template: impl Into<String>, max_zoom: u8) -> Self {
        Self {
            url_template: url_template.into(),
            subdomains: vec!["a".into(), "b".into(), "c".into()],
            max_zoom,
        }
    }

    pub fn tile_url(&self, x: u32, y: u32, z: u8) -> String {
        let sub = if self.subdomains.is_empty() {
            ""
        } else {
            self.subdomains[(x as usize + y as usize) % self.subdomains.len()].as_str()
        };
        self.url_template
            .replace("{s}", sub)
            .replace("{z}", &z.to_string())
            .replace("{x}", &x.to_string())
            .replace("{y}", &y.to_string())
            .replace("{r}", "")
    }
}

/// Web-Mercator world pixel coordinates at `zoom`.
pub fn project(p: LatLng, zoom: u8) -> (f64, f64) {
    let scale = TILE_SIZE * f64::from(1u32 << zoom);
    let lat = p.lat.clamp(-85.051_128_78, 85.051_128_78).to_radians();
    let x = (p.lng + 180.0) / 360.0 * scale;
    let y = (1.0 - (lat.tan() + 1.0 / lat.cos()).ln() / PI) / 2.0 * scale;
    (x, y)
}

#[derive(Debug, Clone, PartialEq)]
pub struct PlacedTile {
    pub url: String,
    /// Offset from the viewport's top-left corner, in pixels.
    pub left: f64,
    pub top: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Marker {
    pub id: MarkerId,
    pub at: LatLng,
}

/// Tile map with markers, rendered into a fixed-size viewport.
#[derive(Debug, Clone, PartialEq)]
pub struct SlippyMap {
    center: LatLng,
    zoom: u8,
    width: f64,
    height: f64,
    layer: TileLayer,
    markers: Vec<Marker>,
}

impl SlippyMap {
    pub fn new(center: LatLng, zoom: u8, layer: TileLayer) -> Self {
        Self {
            center,
            zoom: zoom.min(layer.max_zoom),
            width: 640.0,
            height: 360.0,
            layer,
            markers: Vec::new(),
        }
    }

    pub fn with_viewport(mut self, width: f64, height: f64) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    pub fn center(&self) -> LatLng {
        self.center
    }

    pub fn zoom(&self) -> u8 {
        self.zoom
    }

    pub fn viewport(&self) -> (f64, f64) {
        (self.width, self.height)
    }

    pub fn markers(&self) -> &[Marker] {
        &self.markers
    }

    fn origin(&self) -> (f64, f64) {
        let (cx, cy) = project(self.center, self.zoom);
        (cx - self.width / 2.0, cy - self.height / 2.0)
    }

    /// Viewport position of a point.
    pub fn screen_position(&self, p: LatLng) -> (f64, f64) {
        let (ox, oy) = self.origin();
        let (x, y) = project(p, self.zoom);
        (x - ox, y - oy)
    }

    pub fn visible_tiles(&self) -> Vec<PlacedTile> {
        let (ox, oy) = self.origin();
        let n = 1i64 << self.zoom;
        let x0 = (ox / TILE_SIZE).floor() as i64;
        let y0 = (oy / TILE_SIZE).floor() as i64;
        let x1 = ((ox + self.width) / TILE_SIZE).floor() as i64;
        let y1 = ((oy + self.height) / TILE_SIZE).floor() as i64;

        let mut out = Vec::new();
        for ty in y0..=y1 {
            if ty < 0 || ty >= n {
                continue;
            }
            for tx in x0..=x1 {
                let wrapped = tx.rem_euclid(n);
                out.push(PlacedTile {
                    url: self.layer.tile_url(wrapped as u32, ty as u32, self.zoom),
                    left: tx as f64 * TILE_SIZE - ox,
                    top: ty as f64 * TILE_SIZE - oy,
                });
            }
        }
        out
    }
}

impl MapSurface for SlippyMap {
    fn create_marker(&mut self, at: LatLng) -> MarkerId {
        let id = MarkerId(self.markers.len());
        self.markers.push(Marker { id, at });
        id
    }

    fn move_marker(&mut self, marker: MarkerId, to: LatLng) {
        if let Some(m) = self.markers.iter_mut().find(|m| m.id == marker) {
            m.at = to;
        }
    }

    fn pan_to(&mut self, to: LatLng) {
        self.center = to;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CARTO: &str = "https://{s}.basemaps.cartocdn.com/dark_all/{z}/{x}/{y}{r}.png";

    #[test]
    fn projects_known_points() {
        let (x, y) = project(LatLng::new(0.0, 0.0), 0);
        assert!((x - 128.0).abs() < 1e-9);
        assert!((y - 128.0).abs() < 1e-9);

        // Osijek lands in tile (4520, 2928) at zoom 13.
        let (x, y) = project(LatLng::new(45.555, 18.6761), 13);
        assert_eq!((x / TILE_SIZE) as u32, 4520);
        assert_eq!((y / TILE_SIZE) as u32, 2928);
    }

    #[test]
    fn tile_url_fills_template() {
        let layer = TileLayer::new(CARTO, 19);
        assert_eq!(
            layer.tile_url(4520, 2928, 13),
            "https://c.basemaps.cartocdn.com/dark_all/13/4520/2928.png"
        );
    }

    #[test]
    fn center_sits_mid_viewport_and_tiles_cover_it() {
        let map = SlippyMap::new(LatLng::new(45.555, 18.6761), 13, TileLayer::new(CARTO, 19))
            .with_viewport(640.0, 360.0);
        let (sx, sy) = map.screen_position(map.center());
        assert!((sx - 320.0).abs() < 1e-6);
        assert!((sy - 180.0).abs() < 1e-6);

        let tiles = map.visible_tiles();
        assert!(!tiles.is_empty());
        assert!(tiles.iter().all(|t| t.left > -TILE_SIZE && t.left < 640.0));
        assert!(tiles.iter().all(|t| t.top > -TILE_SIZE && t.top < 360.0));
        let covered = tiles.iter().any(|t| {
            t.left <= sx && sx < t.left + TILE_SIZE && t.top <= sy && sy < t.top + TILE_SIZE
        });
        assert!(covered);
    }

    #[test]
    fn zoom_is_clamped_to_layer_max() {
        let map = SlippyMap::new(LatLng::new(0.0, 0.0), 22, TileLayer::new(CARTO, 19));
        assert_eq!(map.zoom(), 19);
    }

    #[test]
    fn pan_keeps_zoom_and_marker_moves_in_place() {
        let mut map = SlippyMap::new(LatLng::new(45.555, 18.6761), 13, TileLayer::new(CARTO, 19));
        let id = map.create_marker(LatLng::new(45.555, 18.6761));
        let retfala = LatLng::new(45.5644, 18.6468);
        map.move_marker(id, retfala);
        map.pan_to(retfala);
        assert_eq!(map.markers().len(), 1);
        assert_eq!(map.markers()[0].id, id);
        assert_eq!(map.markers()[0].at, retfala);
        assert_eq!(map.center(), retfala);
        assert_eq!(map.zoom(), 13);
    }
}

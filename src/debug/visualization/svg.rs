// src/debug/visualization/svg.rs
use crate::math::{geometry::polygon::PolygonPart, types::*};
use crate::territory::{BoundsRegion, TerritoryAnalysisResult};
use std::path::Path;
use svg::{Document, Node};
use svg::node::element::{Circle, Group, Polygon as SvgPolygon, Rectangle, Style};
use tracing::info;

// ===================================================================================
// 1. HILFS-STRUCT für die SVG-Erstellung
// ===================================================================================
/// Ein Helfer zum Erstellen einer SVG-Datei.
///
/// Karten-Koordinaten haben die y-Achse nach oben, SVG nach unten. Alle Punkte
/// werden deshalb beim Zeichnen an der x-Achse gespiegelt.
struct SvgBuilder {
    document: Document,
    content: Group,
    point_radius: f64,
}

impl SvgBuilder {
    /// Erstellt ein neues SVG-Grundgerüst mit Stil und Hintergrund.
    fn new(view: &Bounds2D, svg_pixel_size: f64) -> Self {
        let viewbox_min_x = view.min.x;
        let viewbox_min_y = -view.max.y;
        let viewbox_width = view.width();
        let viewbox_height = view.height();

        let stroke_w_normal = (viewbox_width + viewbox_height) / 2.0 * 0.003;
        let stroke_w_thin = (viewbox_width + viewbox_height) / 2.0 * 0.0015;
        let point_radius = (viewbox_width + viewbox_height) / 2.0 * 0.004;

        let style = Style::new(format!(
            r#"
    .background {{ fill: #e8f1f8; }}
    .main-territory {{ fill: rgba(220, 120, 60, 0.8); stroke: #8a3a10; stroke-width: {stroke_w_normal}; }}
    .exclave {{ fill: rgba(240, 180, 120, 0.6); stroke: #8a3a10; stroke-width: {stroke_w_thin}; }}
    .bounds-region {{ fill: none; stroke: #0044cc; stroke-width: {stroke_w_normal}; stroke-dasharray: {dash},{dash}; }}
    .centroid {{ fill: #222222; }}
"#,
            dash = stroke_w_normal * 4.0,
        ));

        let background = Rectangle::new()
            .set("x", viewbox_min_x)
            .set("y", viewbox_min_y)
            .set("width", viewbox_width)
            .set("height", viewbox_height)
            .set("class", "background");

        let document = Document::new()
            .set("width", svg_pixel_size)
            .set("height", svg_pixel_size)
            .set(
                "viewBox",
                (viewbox_min_x, viewbox_min_y, viewbox_width, viewbox_height),
            )
            .add(style)
            .add(background);

        Self {
            document,
            content: Group::new(),
            point_radius,
        }
    }

    /// Zeichnet einen Ring als Polygon.
    fn draw_ring(&mut self, ring: &LineString<f64>, class: &str) {
        if ring.0.len() < 3 {
            return;
        }
        let points_str: String = ring
            .coords()
            .map(|p| format!("{:.5},{:.5}", p.x, -p.y))
            .collect::<Vec<_>>()
            .join(" ");
        let polygon = SvgPolygon::new()
            .set("points", points_str)
            .set("class", class);
        self.content.append(polygon);
    }

    /// Zeichnet einen Polygon-Teil samt Löchern.
    fn draw_part(&mut self, part: &PolygonPart, class: &str) {
        self.draw_ring(part.exterior(), class);
        for hole in part.holes() {
            self.draw_ring(hole, "background");
        }
    }

    /// Zeichnet einen Punkt.
    fn draw_point(&mut self, center: Point2D, class: &str) {
        let circle = Circle::new()
            .set("cx", center.x)
            .set("cy", -center.y)
            .set("r", self.point_radius)
            .set("class", class);
        self.content.append(circle);
    }

    /// Zeichnet ein Rechteck.
    fn draw_rect(&mut self, bounds: &Bounds2D, class: &str) {
        let rect = Rectangle::new()
            .set("x", bounds.min.x)
            .set("y", -bounds.max.y)
            .set("width", bounds.width())
            .set("height", bounds.height())
            .set("class", class);
        self.content.append(rect);
    }

    fn finish(self) -> Document {
        self.document.add(self.content)
    }
}

// ===================================================================================
// 2. ÖFFENTLICHE FUNKTIONEN
// ===================================================================================
/// Baut ein SVG-Dokument mit allen Territorien und der Bounding-Region.
///
/// Der Hauptteil (Rang 0) wird hervorgehoben, alle anderen Teile erscheinen als
/// Exklaven. `view` bestimmt die Leinwand, üblicherweise der gerahmte Ausschnitt.
pub fn analysis_svg_document(
    result: &TerritoryAnalysisResult,
    region: &BoundsRegion,
    view: &Bounds2D,
    svg_pixel_size: f64,
) -> Document {
    let mut svg = SvgBuilder::new(view, svg_pixel_size);

    // Kleinere Teile zuletzt, damit sie über dem Hauptteil liegen
    for territory in &result.territories {
        let class = if territory.is_main() {
            "main-territory"
        } else {
            "exclave"
        };
        svg.draw_part(&territory.part, class);
    }

    for territory in &result.territories {
        svg.draw_point(territory.centroid, "centroid");
    }

    svg.draw_rect(&region.bounds, "bounds-region");
    svg.finish()
}

/// Schreibt die Analyse als SVG-Datei.
///
/// # Arguments
/// * `path` - Der Dateipfad für die zu erstellende SVG.
/// * `result` - Das Analyse-Ergebnis mit den Territorien.
/// * `region` - Die Bounding-Region, die als Rahmen eingezeichnet wird.
/// * `view` - Die Grenzen der SVG-Leinwand ("ViewBox").
/// * `svg_pixel_size` - Die Größe der SVG in Pixeln (Breite und Höhe).
#[cfg(debug_assertions)]
pub fn write_analysis_svg(
    path: impl AsRef<Path>,
    result: &TerritoryAnalysisResult,
    region: &BoundsRegion,
    view: &Bounds2D,
    svg_pixel_size: f64,
) -> Result<(), Box<dyn std::error::Error>> {
    let path = path.as_ref();
    let document = analysis_svg_document(result, region, view, svg_pixel_size);
    svg::save(path, &document)?;
    info!(
        country = %result.country_name,
        path = %path.display(),
        "debug SVG written"
    );
    Ok(())
}

pub mod svg;

#[cfg(debug_assertions)]
pub use svg::write_analysis_svg;
pub use svg::analysis_svg_document;

// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 Scale Invariant

/// Canvas Configuration Loader
/// Parses ~/.config/linkboard/canvas.xml and provides grid dimensions, cell
/// metrics, and the default link list

use quick_xml::events::Event;
use quick_xml::Reader;
use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;

use crate::lbgt_types::{CellMetrics, GridDims, DEFAULT_COLS, DEFAULT_ROWS};

// Embed the default canvas template at compile time
const DEFAULT_CANVAS_XML: &str = include_str!("../canvas.default.xml");

// Grid dimensions accepted from configuration
const MIN_DIM: i32 = 1;
const MAX_DIM: i32 = 16;

/// One default link entry: display name, icon key, layout width class
#[derive(Debug, Clone)]
pub struct LinkEntry {
    pub name: String,
    pub icon: String,
    pub wide: bool,
}

/// Canvas manager holding the loaded configuration
#[derive(Debug)]
pub struct CanvasManager {
    dims: GridDims,
    metrics: CellMetrics,
    links: Vec<LinkEntry>,
}

impl CanvasManager {
    /// Create a new canvas manager with built-in defaults (6x6, 84px cells)
    pub fn new() -> Self {
        Self {
            dims: GridDims { cols: DEFAULT_COLS, rows: DEFAULT_ROWS },
            metrics: CellMetrics {
                cell_width: 84.0,
                cell_height: 84.0,
                gap: 8.0,
                padding: 12.0,
            },
            links: Vec::new(),
        }
    }

    /// Load from file, creating default template if missing
    pub fn load_from_file() -> Self {
        let config_path = Self::config_path();

        // Try to read user config
        match fs::read_to_string(&config_path) {
            Ok(xml_content) => {
                eprintln!("DEBUG: [CANVAS] Parsing {}", config_path.display());
                match Self::parse_xml(&xml_content) {
                    Ok(manager) => {
                        eprintln!(
                            "DEBUG: [CANVAS] Loaded {}x{} canvas with {} default links",
                            manager.dims.cols,
                            manager.dims.rows,
                            manager.links.len()
                        );
                        manager
                    }
                    Err(e) => {
                        println!("CANVAS: parse_error ({}), reverting to built-in default", e);
                        // Don't overwrite user's invalid file - parse embedded default instead
                        Self::parse_xml(DEFAULT_CANVAS_XML).unwrap_or_else(|_| Self::new())
                    }
                }
            }
            Err(_) => {
                // Config file missing - create directory and write default template
                if let Some(parent) = config_path.parent() {
                    if let Err(e) = fs::create_dir_all(parent) {
                        eprintln!("DEBUG: [CANVAS] Failed to create config directory: {}", e);
                        return Self::parse_xml(DEFAULT_CANVAS_XML)
                            .unwrap_or_else(|_| Self::new());
                    }
                }

                match fs::write(&config_path, DEFAULT_CANVAS_XML) {
                    Ok(()) => {
                        eprintln!("DEBUG: [CANVAS] Created default config at {}", config_path.display());
                        Self::parse_xml(DEFAULT_CANVAS_XML)
                            .unwrap_or_else(|_| Self::new())
                    }
                    Err(e) => {
                        eprintln!("DEBUG: [CANVAS] Failed to write default config: {}", e);
                        // Fall back to embedded default
                        Self::parse_xml(DEFAULT_CANVAS_XML)
                            .unwrap_or_else(|_| Self::new())
                    }
                }
            }
        }
    }

    /// Get config file path
    fn config_path() -> PathBuf {
        let mut path = dirs::home_dir().unwrap_or_else(|| PathBuf::from("."));
        path.push(".config");
        path.push("linkboard");
        path.push("canvas.xml");
        path
    }

    /// Parse XML content
    fn parse_xml(xml: &str) -> Result<Self, String> {
        let mut reader = Reader::from_str(xml);
        reader.trim_text(true);

        let mut manager = Self::new();
        let mut saw_canvas = false;
        let mut warned_dims = false;

        let mut buf = Vec::new();

        loop {
            match reader.read_event_into(&mut buf) {
                Ok(Event::Start(ref e)) | Ok(Event::Empty(ref e)) => {
                    match e.name().as_ref() {
                        b"Canvas" => {
                            saw_canvas = true;

                            for attr in e.attributes() {
                                let attr = attr.map_err(|e| format!("attribute error: {}", e))?;
                                let value_str = String::from_utf8_lossy(&attr.value).to_string();

                                match attr.key.as_ref() {
                                    b"cols" => {
                                        let v = value_str.parse::<i32>()
                                            .map_err(|_| format!("invalid cols: {}", value_str))?;
                                        manager.dims.cols = Self::clamp_dim(v, "cols", &mut warned_dims);
                                    }
                                    b"rows" => {
                                        let v = value_str.parse::<i32>()
                                            .map_err(|_| format!("invalid rows: {}", value_str))?;
                                        manager.dims.rows = Self::clamp_dim(v, "rows", &mut warned_dims);
                                    }
                                    b"cellWidth" => {
                                        manager.metrics.cell_width = Self::parse_px(&value_str, "cellWidth")?;
                                    }
                                    b"cellHeight" => {
                                        manager.metrics.cell_height = Self::parse_px(&value_str, "cellHeight")?;
                                    }
                                    b"gap" => {
                                        manager.metrics.gap = Self::parse_px(&value_str, "gap")?;
                                    }
                                    b"padding" => {
                                        manager.metrics.padding = Self::parse_px(&value_str, "padding")?;
                                    }
                                    _ => {}
                                }
                            }
                        }
                        b"Link" => {
                            let mut name: Option<String> = None;
                            let mut icon: Option<String> = None;
                            let mut wide = false;

                            for attr in e.attributes() {
                                let attr = attr.map_err(|e| format!("attribute error: {}", e))?;
                                let value_str = String::from_utf8_lossy(&attr.value).to_string();

                                match attr.key.as_ref() {
                                    b"name" => name = Some(value_str),
                                    b"icon" => icon = Some(value_str),
                                    b"wide" => wide = value_str == "true",
                                    _ => {} // Ignore url, color
                                }
                            }

                            match name {
                                Some(name) if !name.is_empty() => {
                                    manager.links.push(LinkEntry {
                                        name,
                                        icon: icon.unwrap_or_default(),
                                        wide,
                                    });
                                }
                                _ => {
                                    println!("CANVAS: WARNING skipping Link without name");
                                }
                            }
                        }
                        _ => {}
                    }
                }
                Ok(Event::Eof) => break,
                Err(e) => return Err(format!("XML parse error: {}", e)),
                _ => {}
            }
            buf.clear();
        }

        if !saw_canvas {
            Err("no Canvas element found".to_string())
        } else {
            if manager.links.is_empty() {
                println!("CANVAS: WARNING empty link list");
            }
            Ok(manager)
        }
    }

    /// Clamp grid dimension to [MIN_DIM, MAX_DIM]
    fn clamp_dim(value: i32, name: &str, warned: &mut bool) -> i32 {
        if value < MIN_DIM {
            if !*warned {
                println!("CANVAS: WARNING dim clamp {}={} -> {}", name, value, MIN_DIM);
                *warned = true;
            }
            MIN_DIM
        } else if value > MAX_DIM {
            if !*warned {
                println!("CANVAS: WARNING dim clamp {}={} -> {}", name, value, MAX_DIM);
                *warned = true;
            }
            MAX_DIM
        } else {
            value
        }
    }

    /// Parse a non-negative pixel value
    fn parse_px(s: &str, name: &str) -> Result<f64, String> {
        let v = s.parse::<f64>().map_err(|_| format!("invalid {}: {}", name, s))?;
        if v < 0.0 {
            println!("CANVAS: WARNING {}={:.1} -> 0.0", name, v);
            Ok(0.0)
        } else {
            Ok(v)
        }
    }

    pub fn dims(&self) -> &GridDims {
        &self.dims
    }

    pub fn metrics(&self) -> &CellMetrics {
        &self.metrics
    }

    pub fn links(&self) -> &[LinkEntry] {
        &self.links
    }

    /// Name -> icon key lookup table for the rendering layer
    pub fn icon_table(&self) -> HashMap<String, String> {
        self.links
            .iter()
            .map(|link| (link.name.clone(), link.icon.clone()))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_default() {
        let mgr = CanvasManager::new();
        assert_eq!(mgr.dims().cols, 6);
        assert_eq!(mgr.dims().rows, 6);
        assert!(mgr.links().is_empty());
    }

    #[test]
    fn test_parse_valid_xml() {
        let xml = r#"
            <Canvas cols="6" rows="6" cellWidth="84" cellHeight="84" gap="8" padding="12">
                <LinkList>
                    <Link name="Portal" icon="home" wide="true"/>
                    <Link name="Library" icon="book"/>
                </LinkList>
            </Canvas>
        "#;

        let mgr = CanvasManager::parse_xml(xml).unwrap();
        assert_eq!(mgr.dims().cols, 6);
        assert_eq!(mgr.metrics().gap, 8.0);
        assert_eq!(mgr.links().len(), 2);
        assert!(mgr.links()[0].wide);
        assert!(!mgr.links()[1].wide);
        assert_eq!(mgr.icon_table().get("Library").unwrap(), "book");
    }

    #[test]
    fn test_clamp_dimensions() {
        let xml = r#"
            <Canvas cols="0" rows="99">
                <Link name="A" icon="a"/>
            </Canvas>
        "#;

        let mgr = CanvasManager::parse_xml(xml).unwrap();
        assert_eq!(mgr.dims().cols, 1);
        assert_eq!(mgr.dims().rows, 16);
    }

    #[test]
    fn test_skip_nameless_link() {
        let xml = r#"
            <Canvas cols="6" rows="6">
                <Link icon="ghost"/>
                <Link name="Kept" icon="ok"/>
            </Canvas>
        "#;

        let mgr = CanvasManager::parse_xml(xml).unwrap();
        assert_eq!(mgr.links().len(), 1);
        assert_eq!(mgr.links()[0].name, "Kept");
    }

    #[test]
    fn test_missing_canvas_element() {
        assert!(CanvasManager::parse_xml("<Other/>").is_err());
    }

    #[test]
    fn test_embedded_default_parses() {
        let mgr = CanvasManager::parse_xml(DEFAULT_CANVAS_XML).unwrap();
        assert_eq!(mgr.dims().cols, 6);
        assert!(!mgr.links().is_empty());
    }
}

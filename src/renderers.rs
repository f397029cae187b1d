//! Printable output for a finished maze: an SVG page and an HTML page that shows it.
//!
//! The SVG is laid out on a physical page (A4 portrait by default). Squares are kept square,
//! scaled to the largest size that fits inside the page margins, and the maze is centred.

use std::fmt::Write as FmtWrite;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

use log::info;

use crate::cells::CellState;
use crate::errors::*;
use crate::maze::Maze;

#[derive(Debug, Clone, PartialEq)]
pub struct RenderOptions {
    pub page_width_mm: f64,
    pub page_height_mm: f64,
    pub margin_mm: f64,
    pub wall_colour: String,
    pub start_colour: String,
    pub end_colour: String,
    pub start_label: String,
    pub end_label: String,
    /// Marker label height as a fraction of a square's side.
    pub label_scale: f64,
    pub outline_width: f64,
}

impl Default for RenderOptions {
    fn default() -> RenderOptions {
        RenderOptions {
            page_width_mm: 210.0,
            page_height_mm: 297.0,
            margin_mm: 10.0,
            wall_colour: String::from("black"),
            start_colour: String::from("#4CAF50"),
            end_colour: String::from("#f44336"),
            start_label: String::from("S"),
            end_label: String::from("E"),
            label_scale: 0.6,
            outline_width: 0.5,
        }
    }
}

#[derive(Debug, Clone)]
pub struct RenderOptionsBuilder {
    options: RenderOptions,
}

impl RenderOptionsBuilder {
    pub fn new() -> RenderOptionsBuilder {
        RenderOptionsBuilder { options: RenderOptions::default() }
    }
    pub fn page_size_mm(mut self, width: f64, height: f64) -> Self {
        self.options.page_width_mm = width;
        self.options.page_height_mm = height;
        self
    }
    pub fn margin_mm(mut self, margin: f64) -> Self {
        self.options.margin_mm = margin;
        self
    }
    pub fn wall_colour(mut self, colour: &str) -> Self {
        self.options.wall_colour = colour.to_owned();
        self
    }
    pub fn start_colour(mut self, colour: &str) -> Self {
        self.options.start_colour = colour.to_owned();
        self
    }
    pub fn end_colour(mut self, colour: &str) -> Self {
        self.options.end_colour = colour.to_owned();
        self
    }
    pub fn start_label(mut self, label: &str) -> Self {
        self.options.start_label = label.to_owned();
        self
    }
    pub fn end_label(mut self, label: &str) -> Self {
        self.options.end_label = label.to_owned();
        self
    }
    pub fn build(self) -> RenderOptions {
        self.options
    }
}

impl Default for RenderOptionsBuilder {
    fn default() -> Self {
        RenderOptionsBuilder::new()
    }
}

/// Where the maze sits on the page, in page units (mm).
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct PageLayout {
    pub cell_size: f64,
    pub offset_x: f64,
    pub offset_y: f64,
}

impl PageLayout {
    pub fn fit(maze: &Maze, options: &RenderOptions) -> PageLayout {
        let columns = maze.grid().width().0 as f64;
        let rows = maze.grid().height().0 as f64;
        let drawable_width = options.page_width_mm - 2.0 * options.margin_mm;
        let drawable_height = options.page_height_mm - 2.0 * options.margin_mm;

        let cell_size = (drawable_width / columns).min(drawable_height / rows);
        PageLayout {
            cell_size: cell_size,
            offset_x: options.margin_mm + (drawable_width - cell_size * columns) / 2.0,
            offset_y: options.margin_mm + (drawable_height - cell_size * rows) / 2.0,
        }
    }
}

pub fn render_svg(maze: &Maze, options: &RenderOptions) -> String {
    let grid = maze.grid();
    let layout = PageLayout::fit(maze, options);
    let size = num(layout.cell_size);
    let (page_w, page_h) = (num(options.page_width_mm), num(options.page_height_mm));

    let mut svg = String::with_capacity(grid.size() * 80);
    svg.push_str("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
    // Writing into a String cannot fail.
    let _ = writeln!(svg,
                     "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{w}mm\" height=\"{h}mm\" \
                      viewBox=\"0 0 {w} {h}\">",
                     w = page_w,
                     h = page_h);
    let _ = writeln!(svg, "  <rect width=\"{}\" height=\"{}\" fill=\"white\"/>", page_w, page_h);
    svg.push_str("  <g id=\"maze\">\n");

    for coord in grid.iter() {
        let px = layout.offset_x + coord.x as f64 * layout.cell_size;
        let py = layout.offset_y + coord.y as f64 * layout.cell_size;

        let (fill, label) = match grid.cell(coord) {
            Some(CellState::Wall) => (&options.wall_colour, None),
            Some(CellState::Start) => (&options.start_colour, Some(&options.start_label)),
            Some(CellState::End) => (&options.end_colour, Some(&options.end_label)),
            Some(CellState::Passage) | None => continue,
        };

        let _ = writeln!(svg,
                         "    <rect x=\"{}\" y=\"{}\" width=\"{s}\" height=\"{s}\" fill=\"{}\"/>",
                         num(px),
                         num(py),
                         escape_html(fill),
                         s = size);
        if let Some(text) = label {
            let _ = writeln!(svg,
                             "    <text x=\"{}\" y=\"{}\" font-size=\"{}\" text-anchor=\"middle\" \
                              dominant-baseline=\"middle\" fill=\"white\" \
                              font-weight=\"bold\">{}</text>",
                             num(px + layout.cell_size / 2.0),
                             num(py + layout.cell_size / 2.0),
                             num(layout.cell_size * options.label_scale),
                             escape_html(text));
        }
    }

    let _ = writeln!(svg,
                     "    <rect x=\"{}\" y=\"{}\" width=\"{}\" height=\"{}\" fill=\"none\" \
                      stroke=\"black\" stroke-width=\"{}\"/>",
                     num(layout.offset_x),
                     num(layout.offset_y),
                     num(layout.cell_size * grid.width().0 as f64),
                     num(layout.cell_size * grid.height().0 as f64),
                     num(options.outline_width));
    svg.push_str("  </g>\n");
    svg.push_str("</svg>\n");
    svg
}

const HTML_STYLE: &str = r#"    <style>
        * {
            margin: 0;
            padding: 0;
            box-sizing: border-box;
        }
        body {
            font-family: 'Segoe UI', 'Helvetica Neue', Arial, sans-serif;
            background: linear-gradient(135deg, #667eea 0%, #764ba2 100%);
            min-height: 100vh;
            display: flex;
            flex-direction: column;
            align-items: center;
            padding: 40px 20px;
        }
        .container {
            background: white;
            border-radius: 20px;
            padding: 40px;
            box-shadow: 0 20px 60px rgba(0, 0, 0, 0.3);
            max-width: 95vw;
        }
        h1 {
            text-align: center;
            color: #333;
            margin-bottom: 10px;
            font-size: 2.5em;
        }
        .info {
            text-align: center;
            color: #666;
            margin-bottom: 30px;
            font-size: 0.95em;
        }
        .info span {
            display: inline-block;
            margin: 0 10px;
            padding: 8px 16px;
            background: #f5f5f5;
            border-radius: 20px;
            font-weight: bold;
        }
        .legend {
            display: flex;
            justify-content: center;
            gap: 30px;
            margin-bottom: 30px;
            flex-wrap: wrap;
        }
        .legend-item {
            display: flex;
            align-items: center;
            gap: 10px;
            color: #555;
        }
        .legend-box {
            width: 30px;
            height: 30px;
            border-radius: 5px;
            box-shadow: 0 2px 5px rgba(0, 0, 0, 0.2);
        }
        .maze-wrapper {
            display: flex;
            justify-content: center;
            margin-bottom: 30px;
        }
        .maze-svg {
            border: 3px solid #333;
            border-radius: 10px;
            max-width: 100%;
            height: auto;
        }
        .actions {
            display: flex;
            justify-content: center;
            gap: 15px;
            flex-wrap: wrap;
        }
        .btn {
            padding: 12px 30px;
            background: linear-gradient(135deg, #667eea 0%, #764ba2 100%);
            color: white;
            border: none;
            border-radius: 25px;
            font-size: 16px;
            font-weight: bold;
            cursor: pointer;
            text-decoration: none;
            display: inline-block;
        }
        @media print {
            body {
                background: white;
                padding: 0;
            }
            .container {
                box-shadow: none;
                padding: 0;
            }
            h1, .info, .legend, .actions {
                display: none;
            }
            .maze-svg {
                border: none;
            }
        }
    </style>
"#;

/// A page presenting the maze image at `svg_href`, with its size, seed and creation time, a
/// colour legend, and buttons to print it or download the SVG.
pub fn render_html(maze: &Maze,
                   svg_href: &str,
                   generated_at: SystemTime,
                   options: &RenderOptions)
                   -> String {

    let (w, h) = (maze.grid().width().0, maze.grid().height().0);
    let href = escape_html(svg_href);

    let mut html = String::with_capacity(HTML_STYLE.len() + 2048);
    html.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
    html.push_str("    <meta charset=\"UTF-8\">\n");
    html.push_str("    <meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">\n");
    let _ = writeln!(html, "    <title>Maze - {}x{}</title>", w, h);
    html.push_str(HTML_STYLE);
    html.push_str("</head>\n<body>\n    <div class=\"container\">\n");
    html.push_str("        <h1>Maze Challenge</h1>\n");
    html.push_str("        <div class=\"info\">\n");
    let _ = writeln!(html, "            <span>Size: {} &times; {}</span>", w, h);
    let _ = writeln!(html, "            <span>Seed: {}</span>", maze.seed());
    let _ = writeln!(html,
                     "            <span>Generated: {}</span>",
                     humantime::format_rfc3339_seconds(generated_at));
    html.push_str("        </div>\n");

    html.push_str("        <div class=\"legend\">\n");
    for &(colour, name) in &[(options.start_colour.as_str(), "Start"),
                             (options.end_colour.as_str(), "End"),
                             ("white; border: 2px solid #ddd", "Path"),
                             (options.wall_colour.as_str(), "Wall")] {
        html.push_str("            <div class=\"legend-item\">\n");
        let _ = writeln!(html,
                         "                <div class=\"legend-box\" style=\"background: {};\"></div>",
                         escape_html(colour));
        let _ = writeln!(html, "                <span>{}</span>", name);
        html.push_str("            </div>\n");
    }
    html.push_str("        </div>\n");

    html.push_str("        <div class=\"maze-wrapper\">\n");
    let _ = writeln!(html,
                     "            <img src=\"{}\" alt=\"Maze {}x{}, seed {}\" class=\"maze-svg\">",
                     href, w, h, maze.seed());
    html.push_str("        </div>\n");
    html.push_str("        <div class=\"actions\">\n");
    html.push_str("            <button class=\"btn\" onclick=\"window.print()\">Print maze</button>\n");
    let _ = writeln!(html,
                     "            <a href=\"{}\" download class=\"btn\">Download SVG</a>",
                     href);
    html.push_str("        </div>\n    </div>\n</body>\n</html>\n");
    html
}

/// The HTML page path that goes with an SVG path: same name, `.html` extension.
pub fn html_path_for(svg_path: &Path) -> PathBuf {
    svg_path.with_extension("html")
}

pub fn write_svg_file(maze: &Maze, path: &Path, options: &RenderOptions) -> Result<()> {
    fs::write(path, render_svg(maze, options))
        .chain_err(|| format!("Failed to write maze image to {}", path.display()))?;
    info!("maze image saved to {}", path.display());
    Ok(())
}

/// Write the HTML page to `path`, linking the image by its file name relative to the page.
pub fn write_html_file(maze: &Maze,
                       path: &Path,
                       svg_path: &Path,
                       options: &RenderOptions)
                       -> Result<()> {

    let href = relative_href(path, svg_path);
    fs::write(path, render_html(maze, &href, SystemTime::now(), options))
        .chain_err(|| format!("Failed to write maze page to {}", path.display()))?;
    info!("maze page saved to {}", path.display());
    Ok(())
}

// The page and image normally sit side by side, so link by file name. Otherwise fall back to
// the path as given.
fn relative_href(page_path: &Path, svg_path: &Path) -> String {
    let same_dir = page_path.parent() == svg_path.parent();
    match svg_path.file_name() {
        Some(name) if same_dir => name.to_string_lossy().into_owned(),
        _ => svg_path.to_string_lossy().into_owned(),
    }
}

// Page units with at most 4 decimals and no trailing zeros.
fn num(value: f64) -> String {
    let fixed = format!("{:.4}", value);
    let trimmed = fixed.trim_end_matches('0').trim_end_matches('.');
    if trimmed == "-0" {
        String::from("0")
    } else {
        trimmed.to_owned()
    }
}

fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

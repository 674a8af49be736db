//! Preview generation: one swatch grid and one JSON export per strategy.

mod html;

use std::{env, path::PathBuf};

use anyhow::Result;
use tracing::info;

use html::write_html_grid;
use palette_studio::color::Color;
use palette_studio::export::{self, ExportFormat};
use palette_studio::generator::{self, Strategy};

const COUNT: usize = 5;

pub fn run() -> Result<()> {
    let target_dir = env::var("CARGO_TARGET_DIR")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("target"));
    let out_dir = target_dir.join("tool-palette-preview");

    let base = match env::args().nth(1) {
        Some(arg) => arg.parse::<Color>()?,
        None => generator::random_color(),
    };
    info!(%base, "generating strategy previews");

    for strategy in Strategy::ALL {
        let colors = generator::generate(base, strategy, COUNT, None);

        let title = format!("{} — {}", strategy.label(), strategy.description());
        let html_path = out_dir.join(format!("{strategy}.html"));
        write_html_grid(&title, &colors, &html_path)?;

        let json = export::formats::to_json(&colors, Some(strategy.label()))?;
        let json_path = export::io::write_export(&out_dir, strategy.id(), ExportFormat::Json, &json)?;

        println!("  - {}", html_path.display());
        println!("  - {}", json_path.display());
    }

    println!("Generated palette previews in {}", out_dir.display());
    Ok(())
}

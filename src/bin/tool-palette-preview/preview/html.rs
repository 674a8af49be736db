//! HTML swatch grid writer.

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

use anyhow::Result;

use palette_studio::color::Color;
use palette_studio::export::contrasting_text_color;
use palette_studio::generator::color_name;

fn swatch_label(color: Color) -> String {
    let hsl = color.hsl();
    format!(
        "{} | {color} | {:.0}°, {:.0}%, {:.0}%",
        color_name(color),
        hsl.h,
        hsl.s,
        hsl.l
    )
}

pub fn write_html_grid(title: &str, colors: &[Color], path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let f = File::create(path)?;
    let mut w = BufWriter::new(f);
    writeln!(
        w,
        r#"<!doctype html><meta charset="utf-8">
<style>
  body{{margin:0;background:#111;color:#eee;font-family:system-ui}}
  h2{{margin:12px}}
  .g{{display:grid;grid-template-columns:repeat({},1fr);gap:6px;padding:8px}}
  .s{{aspect-ratio:3/1;border-radius:10px;display:flex;align-items:center;justify-content:center;
      font-weight:700}}
</style>
<h2>{title}</h2>
<div class="g">"#,
        colors.len()
    )?;
    for &color in colors {
        writeln!(
            w,
            r#"<div class="s" style="background:{color};color:{}">{}</div>"#,
            contrasting_text_color(color),
            swatch_label(color)
        )?;
    }
    writeln!(w, "</div>")?;
    Ok(())
}

use anyhow::{Context, Result};
use clap::Parser;
use icon_raster::{
    IconGeometry, IconRasterizer, IconStyle, parse_hex_color, save_svg, svg::render_svg,
    write_icon_set,
};
use std::path::PathBuf;

/// Generate the app's PNG icons: a white disc with a cross on a colored square.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Output directory, created if absent
    #[arg(short, long, default_value = "images")]
    output_dir: PathBuf,

    /// Icon sizes in pixels
    #[arg(short, long, value_delimiter = ',', default_value = "192,512")]
    sizes: Vec<u32>,

    /// Background and cross color
    #[arg(short, long, default_value = "#2196F3")]
    color: String,

    /// Also write icon.svg, using the first size as its canvas
    #[arg(long)]
    svg: bool,
}

fn main() -> Result<()> {
    init_logger();
    let args = Args::parse();

    let primary = parse_hex_color(&args.color)?;
    let style = IconStyle::new().with_primary(primary);
    let rasterizer = IconRasterizer::new().with_style(style);

    let paths = write_icon_set(&rasterizer, &args.output_dir, &args.sizes)
        .with_context(|| format!("write icons to {}", args.output_dir.display()))?;

    if let Some(&size) = args.sizes.first().filter(|_| args.svg) {
        let geometry = IconGeometry::from_size(size)?;
        let svg = render_svg(&geometry, rasterizer.style());
        save_svg(&svg, &args.output_dir)
            .with_context(|| format!("write svg to {}", args.output_dir.display()))?;
    }

    log::info!("all {} icons generated", paths.len());
    Ok(())
}

fn init_logger() {
    use std::io::Write;

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format(|buf, record| {
            let style = buf.default_level_style(record.level());
            let ts = chrono::Local::now().format("%H:%M:%S");

            writeln!(
                buf,
                "[{} {style}{}{style:#} {} {}] {}",
                ts,
                record.level(),
                record
                    .file()
                    .unwrap_or("None")
                    .split('/')
                    .next_back()
                    .unwrap_or("None"),
                record.line().unwrap_or(0),
                record.args()
            )
        })
        .init();
}

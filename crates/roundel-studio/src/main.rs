use std::path::{Path, PathBuf};
use std::rc::Rc;

use anyhow::{bail, Context, Result};
use roundel_engine::logging::{init_logging, LoggingConfig};
use roundel_ui::prelude::*;

const USAGE: &str = "\
usage: roundel-studio <input> <output.png> [options]

  <input>               png / jpeg image, or an .svg document
  --shape <kind>        circle | round | 0 | 1          (default: circle)
  --radius <len>        corner radius, e.g. 12 or 12dp  (default: 10dp)
  --size <WxH>          widget size in dp               (default: image size)
  --density <f>         device pixels per dp            (default: 1)
  --padding <dp>        space around the widget         (default: 0)
  --background <hex>    RRGGBB or RRGGBBAA backdrop     (default: transparent)
  --log <filter>        env_logger filter, e.g. debug   (default: $RUST_LOG, then info)";

#[derive(Debug)]
struct Options {
    input: PathBuf,
    output: PathBuf,
    props: Vec<(String, String)>,
    size: Option<Vec2>,
    density: f32,
    padding: f32,
    background: Option<Color>,
    log_filter: Option<String>,
}

fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    if args.iter().any(|a| a == "-h" || a == "--help") {
        println!("{USAGE}");
        return Ok(());
    }
    let options = parse_args(&args).with_context(|| format!("invalid arguments\n\n{USAGE}"))?;

    let mut logging = LoggingConfig::default();
    if let Some(filter) = &options.log_filter {
        logging = logging.with_filter(filter.as_str());
    }
    init_logging(logging);

    run(&options)
}

fn run(options: &Options) -> Result<()> {
    let density = options.density;
    let source = load_source(&options.input)?;
    let (iw, ih) = source.intrinsic_size();
    log::info!("loaded {} ({iw}x{ih})", options.input.display());

    let config = ShapedImageConfig::from_props(options.props.iter().map(|(k, v)| (k.as_str(), v.as_str())));
    let mut avatar = ShapedImage::new(config, density).with_image(source);
    if let Some(size) = options.size {
        avatar = avatar.with_preferred_size(size * density);
    }

    let mut root = Container::new(avatar).padding_all(Dp(options.padding).to_px(density));
    if let Some(bg) = options.background {
        root = root.background(bg);
    }

    // Lay out unbounded first so the viewport hugs the widget.
    let natural = root.measure(Constraints::unbounded(), &LayoutCtx::new(density));
    anyhow::ensure!(natural.x >= 1.0 && natural.y >= 1.0, "nothing to draw: widget measured {}x{}", natural.x, natural.y);

    let mut ui = UiScene::new(density);
    ui.frame(&mut root, natural);
    let viewport = Viewport::new(ui.root_size().x, ui.root_size().y);

    let raster = CpuRenderer::new()
        .render(&mut ui.draw_list, viewport)
        .context("failed to render scene")?;
    raster
        .to_image()
        .save(&options.output)
        .with_context(|| format!("failed to write {}", options.output.display()))?;

    let child = root.child();
    log::info!(
        "wrote {} ({}x{}, {:?}, corner radius {}px)",
        options.output.display(),
        raster.width(),
        raster.height(),
        child.shape(),
        child.corner_radius_px(),
    );
    Ok(())
}

fn load_source(path: &Path) -> Result<Rc<dyn Drawable>> {
    let is_svg = path
        .extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("svg"));

    if is_svg {
        let data = std::fs::read(path).with_context(|| format!("failed to read {}", path.display()))?;
        return Ok(Rc::new(SvgDrawable::from_data(&data)?));
    }

    let decoded = image::open(path)
        .with_context(|| format!("failed to decode {}", path.display()))?
        .into_rgba8();
    Ok(Rc::new(BitmapDrawable::new(Raster::from_image(&decoded)?)))
}

fn parse_args(args: &[String]) -> Result<Options> {
    let mut positional = Vec::new();
    let mut props = Vec::new();
    let mut size = None;
    let mut density = 1.0;
    let mut padding = 0.0;
    let mut background = None;
    let mut log_filter = None;

    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        let mut value = || iter.next().with_context(|| format!("{arg} needs a value"));
        match arg.as_str() {
            "--shape" => props.push(("shape_type".to_string(), value()?.clone())),
            "--radius" => props.push(("corner_radius".to_string(), value()?.clone())),
            "--size" => size = Some(parse_size(value()?)?),
            "--density" => density = parse_positive(value()?, "--density")?,
            "--padding" => padding = parse_non_negative(value()?, "--padding")?,
            "--background" => background = Some(parse_hex_color(value()?)?),
            "--log" => log_filter = Some(value()?.clone()),
            flag if flag.starts_with("--") => bail!("unknown option {flag}"),
            _ => positional.push(PathBuf::from(arg)),
        }
    }

    let [input, output]: [PathBuf; 2] = positional
        .try_into()
        .map_err(|_| anyhow::anyhow!("expected exactly <input> and <output>"))?;

    Ok(Options { input, output, props, size, density, padding, background, log_filter })
}

fn parse_positive(s: &str, flag: &str) -> Result<f32> {
    let v: f32 = s.parse().with_context(|| format!("{flag} expects a number"))?;
    anyhow::ensure!(v.is_finite() && v > 0.0, "{flag} must be positive");
    Ok(v)
}

fn parse_non_negative(s: &str, flag: &str) -> Result<f32> {
    let v: f32 = s.parse().with_context(|| format!("{flag} expects a number"))?;
    anyhow::ensure!(v.is_finite() && v >= 0.0, "{flag} must not be negative");
    Ok(v)
}

fn parse_size(s: &str) -> Result<Vec2> {
    let (w, h) = s.split_once(['x', 'X']).context("--size expects WxH")?;
    Ok(Vec2::new(parse_positive(w, "--size")?, parse_positive(h, "--size")?))
}

fn parse_hex_color(s: &str) -> Result<Color> {
    let hex = s.trim_start_matches('#');
    let byte = |i: usize| -> Result<u8> {
        let pair = hex.get(i..i + 2).context("truncated color")?;
        u8::from_str_radix(pair, 16).with_context(|| format!("bad hex digits '{pair}'"))
    };
    match hex.len() {
        6 => Ok(Color::from_rgba8(byte(0)?, byte(2)?, byte(4)?, 255)),
        8 => Ok(Color::from_rgba8(byte(0)?, byte(2)?, byte(4)?, byte(6)?)),
        _ => bail!("--background expects RRGGBB or RRGGBBAA, got '{s}'"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(v: &[&str]) -> Vec<String> {
        v.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn parses_full_command_line() {
        let o = parse_args(&args(&[
            "in.png", "out.png", "--shape", "round", "--radius", "20dp", "--size", "200x150",
            "--density", "2", "--padding", "4", "--background", "#102030",
        ]))
        .unwrap();
        assert_eq!(o.input, PathBuf::from("in.png"));
        assert_eq!(o.output, PathBuf::from("out.png"));
        assert_eq!(o.size, Some(Vec2::new(200.0, 150.0)));
        assert_eq!(o.density, 2.0);
        assert_eq!(o.padding, 4.0);
        assert_eq!(o.background, Some(Color::from_rgba8(0x10, 0x20, 0x30, 255)));
        assert_eq!(o.log_filter, None);

        let config = ShapedImageConfig::from_props(o.props.iter().map(|(k, v)| (k.as_str(), v.as_str())));
        assert_eq!(config.shape, ShapeKind::RoundedRect);
        assert_eq!(config.corner_radius, Dp(20.0));
    }

    #[test]
    fn rejects_missing_output() {
        assert!(parse_args(&args(&["in.png"])).is_err());
    }

    #[test]
    fn rejects_unknown_flag_and_missing_value() {
        assert!(parse_args(&args(&["a", "b", "--zoom", "2"])).is_err());
        assert!(parse_args(&args(&["a", "b", "--density"])).is_err());
        assert!(parse_args(&args(&["a", "b", "--density", "0"])).is_err());
    }

    #[test]
    fn padding_must_not_be_negative() {
        assert!(parse_args(&args(&["a", "b", "--padding", "-4"])).is_err());
        assert!(parse_args(&args(&["a", "b", "--padding", "inf"])).is_err());
        assert_eq!(parse_args(&args(&["a", "b", "--padding", "0"])).unwrap().padding, 0.0);
    }

    #[test]
    fn log_filter_is_forwarded() {
        let o = parse_args(&args(&["a", "b", "--log", "roundel_ui=debug"])).unwrap();
        assert_eq!(o.log_filter.as_deref(), Some("roundel_ui=debug"));
    }

    #[test]
    fn hex_colors() {
        assert_eq!(parse_hex_color("ff000080").unwrap(), Color::from_rgba8(255, 0, 0, 128));
        assert!(parse_hex_color("#abc").is_err());
        assert!(parse_hex_color("zzzzzz").is_err());
    }
}

use ringdraw_core::{DrawConfig, Graph};
use ringdraw_render::{
    DrawSummary, DrawingPlan, GraphDrawing, Recorder, SvgRenderer, plan_drawing,
};
use serde::Serialize;
use std::io::{Read, Write};
use std::str::FromStr;

#[derive(Debug)]
enum CliError {
    Usage(&'static str),
    Io(std::io::Error),
    Draw(ringdraw_core::Error),
    Json(serde_json::Error),
    Raster(&'static str),
}

impl std::fmt::Display for CliError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CliError::Usage(msg) => write!(f, "{msg}"),
            CliError::Io(err) => write!(f, "I/O error: {err}"),
            CliError::Draw(err) => write!(f, "{err}"),
            CliError::Json(err) => write!(f, "JSON error: {err}"),
            CliError::Raster(msg) => write!(f, "raster error: {msg}"),
        }
    }
}

impl From<std::io::Error> for CliError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<ringdraw_core::Error> for CliError {
    fn from(value: ringdraw_core::Error) -> Self {
        Self::Draw(value)
    }
}

impl From<serde_json::Error> for CliError {
    fn from(value: serde_json::Error) -> Self {
        Self::Json(value)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
enum Command {
    #[default]
    Render,
    Layout,
    Ops,
    Step(usize, usize),
}

#[derive(Debug, Clone, Copy, Default)]
enum RenderFormat {
    #[default]
    Svg,
    Png,
}

impl FromStr for RenderFormat {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "svg" => Ok(Self::Svg),
            "png" => Ok(Self::Png),
            _ => Err(()),
        }
    }
}

#[derive(Debug, Default)]
struct Args {
    command: Command,
    input: Option<String>,
    config: Option<String>,
    pretty: bool,
    vertices: Option<usize>,
    render_format: RenderFormat,
    render_scale: f32,
    background: Option<String>,
    out: Option<String>,
}

#[derive(Serialize)]
struct LayoutOut<'a> {
    summary: DrawSummary,
    #[serde(flatten)]
    plan: &'a DrawingPlan,
}

fn usage() -> &'static str {
    "ringdraw-cli\n\
\n\
USAGE:\n\
  ringdraw-cli layout [--pretty] [--config <path>] [--vertices <n>] [<graph.json>|-]\n\
  ringdraw-cli ops [--pretty] [--config <path>] [--vertices <n>] [<graph.json>|-]\n\
  ringdraw-cli [render] [--format svg|png] [--scale <n>] [--background <css-color>] [--config <path>] [--vertices <n>] [--out <path>] [<graph.json>|-]\n\
  ringdraw-cli step <a> <b> [--format svg|png] [--scale <n>] [--background <css-color>] [--config <path>] [--out <path>] [<graph.json>|-]\n\
\n\
NOTES:\n\
  - If <graph.json> is omitted or '-', input is read from stdin.\n\
  - The graph document is {\"directed\": bool, \"adjacency\": [[0, 1], [1, 0]]}.\n\
  - --vertices defaults to the size of the adjacency matrix.\n\
  - ops prints every renderer call of a full draw as JSON.\n\
  - render prints SVG to stdout by default; use --out to write a file.\n\
  - PNG output defaults to writing next to the input file (or ./out.png for stdin).\n\
  - step lays the graph out and draws only vertices <a>, <b> and the edge between them.\n\
  - Set RUST_LOG (e.g. RUST_LOG=ringdraw_core=debug) for diagnostics on stderr.\n\
"
}

fn parse_index(raw: Option<&String>) -> Result<usize, CliError> {
    let Some(raw) = raw else {
        return Err(CliError::Usage(usage()));
    };
    raw.parse::<usize>().map_err(|_| CliError::Usage(usage()))
}

fn parse_args(argv: &[String]) -> Result<Args, CliError> {
    let mut args = Args {
        command: Command::Render,
        render_format: RenderFormat::Svg,
        render_scale: 1.0,
        ..Default::default()
    };

    let mut it = argv.iter().skip(1);
    while let Some(a) = it.next() {
        match a.as_str() {
            "--help" | "-h" => return Err(CliError::Usage(usage())),
            "render" => args.command = Command::Render,
            "layout" => args.command = Command::Layout,
            "ops" => args.command = Command::Ops,
            "step" => {
                let from = parse_index(it.next())?;
                let to = parse_index(it.next())?;
                args.command = Command::Step(from, to);
            }
            "--pretty" => args.pretty = true,
            "--config" => {
                let Some(path) = it.next() else {
                    return Err(CliError::Usage(usage()));
                };
                args.config = Some(path.clone());
            }
            "--vertices" => {
                args.vertices = Some(parse_index(it.next())?);
            }
            "--format" => {
                let Some(fmt) = it.next() else {
                    return Err(CliError::Usage(usage()));
                };
                args.render_format = fmt
                    .parse::<RenderFormat>()
                    .map_err(|_| CliError::Usage(usage()))?;
            }
            "--scale" => {
                let Some(scale) = it.next() else {
                    return Err(CliError::Usage(usage()));
                };
                args.render_scale = scale.parse::<f32>().map_err(|_| CliError::Usage(usage()))?;
                if !(args.render_scale.is_finite() && args.render_scale > 0.0) {
                    return Err(CliError::Usage(usage()));
                }
            }
            "--background" => {
                let Some(bg) = it.next() else {
                    return Err(CliError::Usage(usage()));
                };
                if !bg.trim().is_empty() {
                    args.background = Some(bg.trim().to_string());
                }
            }
            "--out" => {
                let Some(out) = it.next() else {
                    return Err(CliError::Usage(usage()));
                };
                args.out = Some(out.clone());
            }
            "--" => {
                if let Some(rest) = it.next() {
                    if args.input.is_some() {
                        return Err(CliError::Usage(usage()));
                    }
                    args.input = Some(rest.clone());
                }
                if it.next().is_some() {
                    return Err(CliError::Usage(usage()));
                }
            }
            other if other.starts_with('-') && other != "-" => {
                return Err(CliError::Usage(usage()));
            }
            path => {
                if args.input.is_some() {
                    return Err(CliError::Usage(usage()));
                }
                args.input = Some(path.to_string());
            }
        }
    }

    Ok(args)
}

fn read_input(input: Option<&str>) -> Result<String, CliError> {
    match input {
        None | Some("-") => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            Ok(buf)
        }
        Some(path) => Ok(std::fs::read_to_string(path)?),
    }
}

fn load_config(path: Option<&str>) -> Result<DrawConfig, CliError> {
    match path {
        None => Ok(DrawConfig::default()),
        Some(path) => {
            let text = std::fs::read_to_string(path)?;
            Ok(DrawConfig::from_json_str(&text)?)
        }
    }
}

fn write_json(value: &impl Serialize, pretty: bool) -> Result<(), CliError> {
    let mut stdout = std::io::stdout().lock();
    if pretty {
        serde_json::to_writer_pretty(&mut stdout, value)?;
    } else {
        serde_json::to_writer(&mut stdout, value)?;
    }
    writeln!(stdout)?;
    Ok(())
}

fn write_text(text: &str, out: Option<&str>) -> Result<(), CliError> {
    match out {
        None => {
            print!("{text}");
            Ok(())
        }
        Some(path) => {
            std::fs::write(path, text)?;
            Ok(())
        }
    }
}

fn default_raster_out_path(input: Option<&str>, ext: &str) -> std::path::PathBuf {
    match input {
        Some(path) if path != "-" => std::path::PathBuf::from(path).with_extension(ext),
        _ => std::path::PathBuf::from(format!("out.{ext}")),
    }
}

fn render_svg_to_png(svg: &str, scale: f32) -> Result<Vec<u8>, CliError> {
    let mut opt = usvg::Options::default();
    opt.fontdb_mut().load_system_fonts();
    opt.font_family = "Arial".to_string();

    let tree = usvg::Tree::from_str(svg, &opt)
        .map_err(|_| CliError::Raster("failed to parse SVG for PNG rendering"))?;

    let size = tree.size();
    let width_px = (size.width() * scale).ceil().max(1.0) as u32;
    let height_px = (size.height() * scale).ceil().max(1.0) as u32;
    let mut pixmap = tiny_skia::Pixmap::new(width_px, height_px)
        .ok_or(CliError::Raster("failed to allocate pixmap"))?;

    resvg::render(
        &tree,
        tiny_skia::Transform::from_scale(scale, scale),
        &mut pixmap.as_mut(),
    );
    pixmap
        .encode_png()
        .map_err(|_| CliError::Raster("failed to encode PNG"))
}

fn parse_css_color(text: &str) -> Option<String> {
    let s = text.trim().to_ascii_lowercase();
    match s.as_str() {
        "transparent" | "white" | "black" => return Some(s),
        _ => {}
    }
    let hex = s.strip_prefix('#')?;
    let ok = matches!(hex.len(), 3 | 4 | 6 | 8) && hex.chars().all(|c| c.is_ascii_hexdigit());
    ok.then_some(s)
}

fn new_svg_renderer(
    config: &DrawConfig,
    background: Option<&str>,
) -> Result<SvgRenderer, CliError> {
    let renderer = SvgRenderer::new(config);
    match background {
        None => Ok(renderer),
        Some(bg) => {
            let Some(color) = parse_css_color(bg) else {
                return Err(CliError::Usage("invalid --background color"));
            };
            Ok(renderer.with_background(color))
        }
    }
}

fn emit_drawing(args: &Args, svg: &str) -> Result<(), CliError> {
    match args.render_format {
        RenderFormat::Svg => write_text(svg, args.out.as_deref()),
        RenderFormat::Png => {
            let bytes = render_svg_to_png(svg, args.render_scale)?;
            let out = args.out.clone().unwrap_or_else(|| {
                default_raster_out_path(args.input.as_deref(), "png")
                    .to_string_lossy()
                    .to_string()
            });
            if out == "-" {
                std::io::stdout().lock().write_all(&bytes)?;
            } else {
                std::fs::write(out, bytes)?;
            }
            Ok(())
        }
    }
}

fn run(args: Args) -> Result<(), CliError> {
    let text = read_input(args.input.as_deref())?;
    let graph = Graph::from_json_str(&text)?;
    let config = load_config(args.config.as_deref())?;
    let vertex_count = args.vertices.unwrap_or_else(|| graph.vertex_count());
    tracing::debug!(
        vertex_count,
        directed = graph.is_directed(),
        command = ?args.command,
        "loaded graph"
    );

    match args.command {
        Command::Layout => {
            let plan = plan_drawing(&graph, &config, vertex_count)?;
            let out = LayoutOut {
                summary: plan.summary(),
                plan: &plan,
            };
            write_json(&out, args.pretty)
        }
        Command::Ops => {
            let mut drawing = GraphDrawing::new(Recorder::new(), &graph, config)?;
            drawing.draw_graph(vertex_count)?;
            write_json(&drawing.into_renderer().into_ops(), args.pretty)
        }
        Command::Render => {
            let renderer = new_svg_renderer(&config, args.background.as_deref())?;
            let mut drawing = GraphDrawing::new(renderer, &graph, config)?;
            drawing.draw_graph(vertex_count)?;
            let svg = drawing.into_renderer().finish();
            emit_drawing(&args, &svg)
        }
        Command::Step(a, b) => {
            let renderer = new_svg_renderer(&config, args.background.as_deref())?;
            let mut drawing = GraphDrawing::new(renderer, &graph, config)?;
            drawing.draw_graph(vertex_count)?;
            // Only the step itself ends up in the document.
            drawing.renderer_mut().clear();
            let geometry = drawing.draw_step(a, b)?;
            tracing::debug!(a, b, strategy = ?geometry.strategy, "drew step");
            let svg = drawing.into_renderer().finish();
            emit_drawing(&args, &svg)
        }
    }
}

fn init_tracing() {
    if std::env::var("RUST_LOG").is_ok() {
        tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_writer(std::io::stderr)
            .init();
    }
}

fn main() {
    init_tracing();

    let args = match parse_args(&std::env::args().collect::<Vec<_>>()) {
        Ok(v) => v,
        Err(CliError::Usage(msg)) => {
            eprintln!("{msg}");
            std::process::exit(2);
        }
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(1);
        }
    };

    match run(args) {
        Ok(()) => {}
        Err(CliError::Usage(msg)) => {
            eprintln!("{msg}");
            std::process::exit(2);
        }
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(1);
        }
    }
}

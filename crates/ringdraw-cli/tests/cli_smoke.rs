use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};

fn repo_root() -> PathBuf {
    let manifest_dir = Path::new(env!("CARGO_MANIFEST_DIR"));
    manifest_dir
        .parent()
        .and_then(|p| p.parent())
        .expect("expected crates/<name> layout")
        .to_path_buf()
}

fn fixture(name: &str) -> PathBuf {
    let path = repo_root().join("fixtures").join(name);
    assert!(path.exists(), "fixture missing: {}", path.display());
    path
}

fn cli() -> Command {
    let mut cmd = Command::new(assert_cmd::cargo_bin!("ringdraw-cli"));
    cmd.current_dir(repo_root());
    cmd
}

fn png_size(path: &Path) -> (u32, u32) {
    let decoder = png::Decoder::new(fs::File::open(path).expect("open png"));
    let reader = decoder.read_info().expect("png header");
    let info = reader.info();
    (info.width, info.height)
}

#[test]
fn cli_layout_prints_vertices_edges_and_summary() {
    let k5 = fixture("k5.json");
    let output = cli()
        .args(["layout", k5.to_string_lossy().as_ref()])
        .output()
        .expect("run");
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).expect("json");
    assert_eq!(json["summary"]["vertices"], 5);
    assert_eq!(json["summary"]["edges"], 10);
    assert_eq!(json["summary"]["self_loops"], 0);
    assert_eq!(json["vertices"].as_array().map(Vec::len), Some(5));
    assert_eq!(json["edges"].as_array().map(Vec::len), Some(10));
    // The last vertex is the hub in the middle of the default 800x600 canvas.
    assert_eq!(json["vertices"][4]["position"], serde_json::json!([400.0, 300.0]));
}

#[test]
fn cli_layout_reads_stdin_and_honors_vertex_count() {
    let text = fs::read_to_string(fixture("k5.json")).expect("read fixture");
    let output = cli()
        .args(["layout", "--vertices", "3", "-"])
        .write_stdin(text)
        .output()
        .expect("run");
    assert!(output.status.success());
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).expect("json");
    assert_eq!(json["summary"]["vertices"], 3);
    assert_eq!(json["summary"]["edges"], 3);
}

#[test]
fn cli_ops_lists_renderer_calls() {
    let k5 = fixture("k5.json");
    let output = cli()
        .args(["ops", k5.to_string_lossy().as_ref()])
        .output()
        .expect("run");
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).expect("json");
    let ops = json.as_array().expect("array of ops");
    let strokes = ops.iter().filter(|op| op["op"] == "stroke").count();
    let texts = ops.iter().filter(|op| op["op"] == "fillText").count();
    assert_eq!(strokes, 5 + 10);
    assert_eq!(texts, 5);
    assert_eq!(ops[0]["op"], "beginPath");
}

#[test]
fn cli_renders_svg_to_stdout() {
    let graph = fixture("bidirectional.json");
    let config = fixture("square.config.json");
    let output = cli()
        .args([
            "render",
            "--config",
            config.to_string_lossy().as_ref(),
            graph.to_string_lossy().as_ref(),
        ])
        .output()
        .expect("run");
    assert!(output.status.success());

    let svg = String::from_utf8(output.stdout).expect("utf8");
    assert!(svg.starts_with("<svg"));
    assert!(svg.contains(r#"viewBox="0 0 400 400""#));
    assert_eq!(svg.matches("<text").count(), 4);
    assert!(!svg.contains("NaN"));
}

#[test]
fn cli_renders_png_with_scale() {
    let graph = fixture("k5.json");
    let config = fixture("square.config.json");
    let tmp = tempfile::tempdir().expect("tempdir");
    let out = tmp.path().join("k5.png");

    cli()
        .args([
            "render",
            "--format",
            "png",
            "--scale",
            "2",
            "--background",
            "white",
            "--config",
            config.to_string_lossy().as_ref(),
            "--out",
            out.to_string_lossy().as_ref(),
            graph.to_string_lossy().as_ref(),
        ])
        .assert()
        .success();

    let bytes = fs::read(&out).expect("read png");
    assert!(bytes.starts_with(b"\x89PNG\r\n\x1a\n"), "output is not a PNG");
    assert_eq!(png_size(&out), (800, 800));
}

#[test]
fn cli_renders_png_with_default_out_path_for_file_input() {
    let tmp = tempfile::tempdir().expect("tempdir");
    let tmp_fixture = tmp.path().join("k5.json");
    fs::copy(fixture("k5.json"), &tmp_fixture).expect("copy fixture");
    let expected_out = tmp_fixture.with_extension("png");

    cli()
        .args(["render", "--format", "png", tmp_fixture.to_string_lossy().as_ref()])
        .assert()
        .success();

    assert_eq!(png_size(&expected_out), (800, 600));
}

#[test]
fn cli_step_draws_two_vertices_and_one_edge() {
    let graph = fixture("k5.json");
    let tmp = tempfile::tempdir().expect("tempdir");
    let out = tmp.path().join("step.svg");

    cli()
        .args([
            "step",
            "0",
            "4",
            "--out",
            out.to_string_lossy().as_ref(),
            graph.to_string_lossy().as_ref(),
        ])
        .assert()
        .success();

    let svg = fs::read_to_string(&out).expect("read svg");
    assert_eq!(svg.matches("<text").count(), 2);
    assert_eq!(svg.matches("<path").count(), 3);
    assert!(svg.contains(">1</text>"));
    assert!(svg.contains(">5</text>"));
}

#[test]
fn cli_step_out_of_range_fails() {
    let graph = fixture("k5.json");
    cli()
        .args(["step", "0", "9", graph.to_string_lossy().as_ref()])
        .assert()
        .failure()
        .code(1);
}

#[test]
fn cli_rejects_bad_usage_with_exit_code_2() {
    cli().args(["render", "--format", "jpeg"]).assert().code(2);
    cli().args(["step", "x", "1"]).assert().code(2);
    cli().args(["--bogus"]).assert().code(2);
    cli().arg("--help").assert().code(2);
}

#[test]
fn cli_reports_malformed_graph() {
    cli()
        .args(["layout", "-"])
        .write_stdin(r#"{"adjacency": [[0, 1], [1]]}"#)
        .assert()
        .failure()
        .code(1);
    cli()
        .args(["layout", "-"])
        .write_stdin("not json")
        .assert()
        .failure()
        .code(1);
}

#[test]
fn cli_rejects_more_vertices_than_the_graph_has() {
    let graph = fixture("k5.json");
    cli()
        .args(["render", "--vertices", "6", graph.to_string_lossy().as_ref()])
        .assert()
        .failure()
        .code(1);
}

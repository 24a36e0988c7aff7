use std::io::Write;

use cli::args::ConfigArgs;
use expander::{Expander, GeneratorConfig};
use tempfile::NamedTempFile;

fn write_temp(suffix: &str, content: &str) -> NamedTempFile {
    let mut f = NamedTempFile::with_suffix(suffix).unwrap();
    f.write_all(content.as_bytes()).unwrap();
    f.flush().unwrap();
    f
}

fn max_param(n: usize) -> ConfigArgs {
    ConfigArgs {
        config: None,
        max_param: Some(n),
    }
}

// ======================================================================
// generate_file
// ======================================================================

#[test]
fn generate_writes_output_file() {
    let out = NamedTempFile::with_suffix(".inc").unwrap();
    let out_path = out.path().to_str().unwrap().to_string();

    let result = cli::commands::generate::generate_file(&max_param(3), Some(&out_path));
    assert!(result.is_ok(), "generate_file failed: {:?}", result.err());

    let written = std::fs::read_to_string(&out_path).unwrap();
    let expected = Expander::new(GeneratorConfig::with_max_param(3)).generate();
    assert_eq!(written, expected);
    assert!(written.ends_with("#undef ARG\n#undef CHECK\n"));
}

#[test]
fn generate_to_stdout_succeeds() {
    let result = cli::commands::generate::generate_file(&max_param(1), None);
    assert!(result.is_ok(), "generate_file (stdout) failed: {:?}", result.err());
}

#[test]
fn generate_into_missing_directory_returns_error() {
    let result = cli::commands::generate::generate_file(
        &max_param(1),
        Some("/tmp/nonexistent_binder_gen_dir/binder.inc"),
    );
    assert!(result.is_err());
}

// ======================================================================
// resolve_config
// ======================================================================

#[test]
fn flag_overrides_config_file() {
    let file = write_temp(".toml", "[generator]\nmax_param = 2\norigin = \"make regen\"\n");
    let args = ConfigArgs {
        config: Some(file.path().to_str().unwrap().to_string()),
        max_param: Some(5),
    };
    let config = cli::commands::resolve_config(&args).unwrap();
    assert_eq!(config.max_param, 5);
    assert_eq!(config.origin, "make regen");
}

#[test]
fn no_arguments_resolve_to_defaults() {
    let config = cli::commands::resolve_config(&ConfigArgs::default()).unwrap();
    assert_eq!(config, GeneratorConfig::default());
    assert_eq!(config.max_param, expander::DEFAULT_MAX_PARAM);
}

#[test]
fn missing_config_file_returns_error() {
    let args = ConfigArgs {
        config: Some("/tmp/nonexistent_binder_gen.toml".into()),
        max_param: None,
    };
    let err = cli::commands::resolve_config(&args).unwrap_err();
    assert!(
        format!("{err}").contains("Failed to load config"),
        "unexpected error: {err}"
    );
}

// ======================================================================
// check_file
// ======================================================================

#[test]
fn check_accepts_fresh_output() {
    let fresh = Expander::new(GeneratorConfig::with_max_param(4)).generate();
    let file = write_temp(".inc", &fresh);
    let result = cli::commands::check::check_file(file.path().to_str().unwrap(), &max_param(4));
    assert!(result.is_ok(), "check_file failed: {:?}", result.err());
}

#[test]
fn check_rejects_stale_output() {
    let stale = Expander::new(GeneratorConfig::with_max_param(2)).generate();
    let file = write_temp(".inc", &stale);
    let result = cli::commands::check::check_file(file.path().to_str().unwrap(), &max_param(3));
    let err = format!("{}", result.unwrap_err());
    assert!(err.contains("is stale"), "unexpected error: {err}");
    assert!(err.contains("first difference at line"), "unexpected error: {err}");
}

#[test]
fn check_rejects_edited_banner() {
    let fresh = Expander::new(GeneratorConfig::with_max_param(1)).generate();
    let edited = fresh.replacen("tools/binder-gen", "hand edited", 1);
    let file = write_temp(".inc", &edited);
    let err = cli::commands::check::check_file(file.path().to_str().unwrap(), &max_param(1))
        .unwrap_err();
    assert!(format!("{err}").contains("first difference at line 1"));
}

#[test]
fn check_nonexistent_file_returns_error() {
    let result = cli::commands::check::check_file("/tmp/nonexistent_binder.inc", &max_param(1));
    assert!(result.is_err());
}

// ======================================================================
// inspect
// ======================================================================

#[test]
fn inspect_nullary_table() {
    let text = cli::commands::inspect::format_table(0, &max_param(2), false).unwrap();
    assert!(text.contains(r#"%PARAMS%     = "void""#), "got:\n{text}");
    assert!(text.contains(r#"%ARGS%       = """#), "got:\n{text}");
    assert!(text.contains(r#"%ASSERTS%    = "(void)(state);""#), "got:\n{text}");
    assert_eq!(text.lines().count(), 6);
}

#[test]
fn inspect_json_table() {
    let text = cli::commands::inspect::format_table(2, &max_param(2), true).unwrap();
    let value: serde_json::Value = serde_json::from_str(&text).unwrap();
    assert_eq!(value["PARAMS"], "P0, P1");
    assert_eq!(value["NPARAM"], "2");
    assert_eq!(value["CLASSES1"], ", class P0, class P1");
}

#[test]
fn inspect_above_maximum_returns_error() {
    let err = cli::commands::inspect::format_table(3, &max_param(2), false).unwrap_err();
    let msg = format!("{err:#}");
    assert!(msg.contains("Cannot inspect arity 3"), "unexpected error: {msg}");
    assert!(msg.contains("exceeds the configured maximum of 2"), "unexpected error: {msg}");
}

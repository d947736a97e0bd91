use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

/// Fresh scratch directory for one test; the binary runs with it as cwd so
/// the `wallpapers/` output directory lands inside it.
fn scratch_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("quotewall_it_{}_{}", std::process::id(), name));
    let _ = fs::remove_dir_all(&dir);
    fs::create_dir_all(&dir).expect("Failed to create scratch dir");
    dir
}

/// Run the quotewall binary with the given arguments.
fn run_quotewall(cwd: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_quotewall"))
        .args(args)
        .current_dir(cwd)
        .output()
        .expect("Failed to spawn quotewall")
}

/// Check if bytes are a valid PNG
fn is_valid_png(bytes: &[u8]) -> bool {
    bytes.len() > 8 && &bytes[0..8] == &[137, 80, 78, 71, 13, 10, 26, 10]
}

/// Rendering tests need the configured font on the machine.
fn font_available() -> bool {
    quotewall::Config::default().font_path.exists()
}

#[test]
fn test_missing_argument_exits_one_with_usage() {
    let dir = scratch_dir("no_args");
    let output = run_quotewall(&dir, &[]);
    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Usage"), "stderr was: {}", stderr);
}

#[test]
fn test_unreadable_input_fails() {
    let dir = scratch_dir("unreadable");
    let output = run_quotewall(&dir, &["does_not_exist.txt"]);
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Failed to read quotes file"), "stderr was: {}", stderr);
}

#[test]
fn test_no_quotes_found_exits_one() {
    let dir = scratch_dir("no_quotes");
    let input = dir.join("quotes.txt");
    fs::write(&input, "# only a comment\n----\nnot numbered\n").unwrap();
    let output = run_quotewall(&dir, &["quotes.txt"]);
    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("No quotes found"), "stderr was: {}", stderr);
}

#[test]
fn test_end_to_end_renders_one_png_per_quote() {
    if !font_available() {
        eprintln!("skipping: configured font not present");
        return;
    }
    let dir = scratch_dir("end_to_end");
    fs::write(dir.join("quotes.txt"), "1. \"Be kind.\"\n2. Stay curious\n").unwrap();

    let output = run_quotewall(&dir, &["quotes.txt"]);
    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Wallpaper saved to"), "stdout was: {}", stdout);

    let config = quotewall::Config::default();
    for idx in 1..=2 {
        let path = dir.join("wallpapers").join(format!("quote_{}.png", idx));
        let bytes = fs::read(&path).expect("wallpaper should exist");
        assert!(is_valid_png(&bytes), "not a PNG: {}", path.display());
        let (width, height) = image::image_dimensions(&path).expect("wallpaper should decode");
        assert_eq!((width, height), (config.width, config.height));
    }
    assert!(!dir.join("wallpapers").join("quote_3.png").exists());
}

#[test]
fn test_rerun_overwrites_with_identical_content() {
    if !font_available() {
        eprintln!("skipping: configured font not present");
        return;
    }
    let dir = scratch_dir("idempotent");
    fs::write(dir.join("quotes.txt"), "1. Determinism is a feature\n").unwrap();

    // Seed a stale file where the output will land; it must be overwritten.
    let wallpapers = dir.join("wallpapers");
    fs::create_dir_all(&wallpapers).unwrap();
    fs::write(wallpapers.join("quote_1.png"), b"stale").unwrap();

    assert!(run_quotewall(&dir, &["quotes.txt"]).status.success());
    let first = fs::read(wallpapers.join("quote_1.png")).unwrap();
    assert!(is_valid_png(&first));

    assert!(run_quotewall(&dir, &["quotes.txt"]).status.success());
    let second = fs::read(wallpapers.join("quote_1.png")).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_oversized_single_word_still_renders() {
    if !font_available() {
        eprintln!("skipping: configured font not present");
        return;
    }
    let dir = scratch_dir("oversized");
    let word = "W".repeat(300);
    fs::write(dir.join("quotes.txt"), format!("1. {}\n", word)).unwrap();

    let output = run_quotewall(&dir, &["quotes.txt"]);
    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    let bytes = fs::read(dir.join("wallpapers").join("quote_1.png")).unwrap();
    assert!(is_valid_png(&bytes));
}

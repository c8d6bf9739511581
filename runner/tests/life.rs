use std::{
    env, fs,
    path::PathBuf,
    process::{Command, Output},
};

/// A file under the temp dir that is removed again when dropped.
struct TempFile {
    path: PathBuf,
}

impl TempFile {
    fn reserve(name: &str) -> Self {
        let path = env::temp_dir().join(format!("life-{}-{name}", std::process::id()));
        Self { path }
    }

    fn with_contents(name: &str, contents: &str) -> Self {
        let file = Self::reserve(name);
        fs::write(&file.path, contents).expect("temp dir is writable");
        file
    }

    fn path(&self) -> &str {
        self.path.to_str().expect("temp path is UTF-8")
    }
}

impl Drop for TempFile {
    fn drop(&mut self) {
        let _ = fs::remove_file(&self.path);
    }
}

fn life(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_life"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .expect("binary runs")
}

#[test]
fn prints_final_board() {
    let input = TempFile::with_contents("blinker.txt", "1\n3\n3\n...\nooo\n...\n");

    let output = life(&[input.path()]);

    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout), ".o.\n.o.\n.o.\n");
}

#[test]
fn generations_override() {
    let input = TempFile::with_contents("override.txt", "1\n3\n3\n...\nooo\n...\n");

    let output = life(&[input.path(), "--generations", "2"]);

    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout), "...\nooo\n...\n");
}

#[test]
fn writes_output_file_and_summary() {
    let input = TempFile::with_contents("corner.txt", "1\n2\n2\noo\no.\n");
    let output_file = TempFile::reserve("corner.out");

    let output = life(&[input.path(), "-o", output_file.path(), "--summary"]);

    assert!(output.status.success());
    assert!(output.stdout.is_empty());
    assert_eq!(fs::read_to_string(output_file.path()).unwrap(), "oo\noo\n");
    assert!(
        String::from_utf8_lossy(&output.stderr)
            .contains("2x2 board, 1 generations, 3 alive -> 4 alive")
    );
}

#[test]
fn config_file() {
    let input = TempFile::with_contents("configured.txt", "0\n1\n3\no.o\n");
    let config = TempFile::with_contents(
        "config.json",
        &format!(r#"{{ "input": {:?}, "generations": 1 }}"#, input.path()),
    );

    let output = life(&["--config", config.path()]);

    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout), "...\n");
}

#[test]
fn malformed_input_fails_without_output() {
    let input = TempFile::with_contents("short.txt", "1\n3\n3\n...\noo\n...\n");

    let output = life(&[input.path()]);

    assert!(!output.status.success());
    assert!(output.stdout.is_empty());

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("MalformedInput"), "{stderr}");
    assert!(stderr.contains("line 5"), "{stderr}");
}

#[test]
fn huge_header_is_malformed() {
    let input = TempFile::with_contents("huge.txt", "0\n1000000000\n1000000000\n");

    let output = life(&[input.path()]);

    assert!(!output.status.success());
    assert!(output.stdout.is_empty());

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("MalformedInput"), "{stderr}");
    assert!(stderr.contains("line 4"), "{stderr}");
}

#[test]
fn negative_generations_fail() {
    let input = TempFile::with_contents("negative.txt", "-2\n1\n1\no\n");

    let output = life(&[input.path()]);

    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("InvalidArgument"));

    let input = TempFile::with_contents("negative-override.txt", "2\n1\n1\no\n");
    let output = life(&[input.path(), "-g", "-1"]);

    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
    assert!(String::from_utf8_lossy(&output.stderr).contains("InvalidArgument"));
}

#[test]
fn missing_file_fails() {
    let output = life(&["/nonexistent/seed.txt"]);

    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("Couldn't read seed file"));
}

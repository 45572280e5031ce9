// tests/cli_test.rs
//
// Batch behaviour of the voicepitch binary.

mod test_utils;

use std::ffi::OsStr;
use std::fs;
use test_utils::*;

fn stdout_lines(output: &std::process::Output) -> Vec<String> {
    String::from_utf8_lossy(&output.stdout)
        .lines()
        .map(|l| l.to_string())
        .collect()
}

#[test]
fn test_batch_prints_one_label_per_readable_clip() {
    let scratch = Scratch::new();
    let high = scratch.path("high.wav");
    let broken = scratch.path("broken.wav");
    let low = scratch.path("low.wav");
    write_mono_wav(&high, &voiced(240.0, 0.5, 0.5));
    fs::write(&broken, b"garbage").unwrap();
    write_mono_wav(&low, &voiced(115.0, 0.5, 0.5));

    let output = run_voicepitch([&high, &broken, &low]);
    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));
    assert_eq!(stdout_lines(&output), vec!["HIGH", "LOW"]);
}

#[test]
fn test_letter_format() {
    let scratch = Scratch::new();
    let low = scratch.path("low.wav");
    let high = scratch.path("high.wav");
    write_mono_wav(&low, &voiced(100.0, 0.5, 0.5));
    write_mono_wav(&high, &voiced(250.0, 0.5, 0.5));

    let output = run_voicepitch([
        OsStr::new("--format"),
        OsStr::new("letter"),
        low.as_os_str(),
        high.as_os_str(),
    ]);
    assert!(output.status.success());
    assert_eq!(stdout_lines(&output), vec!["M", "K"]);
}

#[test]
fn test_directory_input_and_json() {
    let scratch = Scratch::new();
    write_mono_wav(&scratch.path("a.wav"), &voiced(130.0, 0.5, 0.5));
    write_wav_i16(&scratch.path("b.wav"), 1, &vec![0i16; 2000]);
    fs::write(scratch.path("notes.txt"), "ignored").unwrap();

    let output = run_voicepitch([OsStr::new("--format"), OsStr::new("json"), scratch.dir.as_os_str()]);
    assert!(output.status.success());

    let parsed: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let entries = parsed.as_array().unwrap();
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0]["label"], "LOW");
    assert!(entries[0]["file"].as_str().unwrap().ends_with("a.wav"));
    assert!(entries[1]["error"].as_str().is_some());
}

#[test]
fn test_empty_directory_is_an_error() {
    let scratch = Scratch::new();
    let output = run_voicepitch([scratch.dir.as_os_str()]);
    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
}

#[test]
fn test_single_worker_keeps_order() {
    let scratch = Scratch::new();
    let mut paths = Vec::new();
    let mut expected = Vec::new();
    for (i, f0) in [105.0, 235.0, 140.0, 265.0].iter().enumerate() {
        let path = scratch.path(&format!("clip{}.wav", i));
        write_mono_wav(&path, &voiced(*f0, 0.4, 0.5));
        paths.push(path);
        expected.push(if *f0 > 180.0 { "HIGH" } else { "LOW" });
    }

    let mut args: Vec<std::ffi::OsString> = vec!["-j".into(), "1".into()];
    args.extend(paths.iter().map(|p| p.clone().into_os_string()));
    let output = run_voicepitch(args);
    assert!(output.status.success());
    assert_eq!(stdout_lines(&output), expected);
}

#[test]
fn test_piped_verbose_output_is_plain_text() {
    let scratch = Scratch::new();
    let clip = scratch.path("clip.wav");
    write_mono_wav(&clip, &voiced(120.0, 0.5, 0.5));

    let output = run_voicepitch([OsStr::new("--format"), OsStr::new("verbose"), clip.as_os_str()]);
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("LOW  autocorrelation"), "stdout: {}", stdout);
    assert!(!stdout.contains('\x1b'));
}

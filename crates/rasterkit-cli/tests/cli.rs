//! End-to-end tests that drive the `rasterkit` binary.

use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use image::{Rgb, RgbImage};
use tempfile::TempDir;

const WHITE: Rgb<u8> = Rgb([255, 255, 255]);

struct Workspace {
    dir: TempDir,
}

impl Workspace {
    fn new() -> Self {
        Self {
            dir: tempfile::tempdir().unwrap(),
        }
    }

    fn path(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }

    fn image(&self, name: &str, img: &RgbImage) -> PathBuf {
        let path = self.path(name);
        img.save(&path).unwrap();
        path
    }

    fn white10(&self) -> PathBuf {
        self.image("in.bmp", &RgbImage::from_pixel(10, 10, WHITE))
    }

    /// Run the binary inside the workspace with logging disabled.
    fn run(&self, args: &[&str]) -> Output {
        Command::new(env!("CARGO_BIN_EXE_rasterkit"))
            .current_dir(self.dir.path())
            .env_remove("RASTERKIT_LOG_DB")
            .arg("--no_log")
            .args(args)
            .output()
            .unwrap()
    }
}

fn stdout(out: &Output) -> String {
    String::from_utf8_lossy(&out.stdout).into_owned()
}

fn stderr(out: &Output) -> String {
    String::from_utf8_lossy(&out.stderr).into_owned()
}

fn load(path: &Path) -> RgbImage {
    image::open(path).unwrap().into_rgb8()
}

#[test]
fn test_no_arguments_prints_help() {
    let out = Command::new(env!("CARGO_BIN_EXE_rasterkit")).output().unwrap();
    assert_eq!(out.status.code(), Some(0));
    assert!(stdout(&out).contains("Operations (only one at a time):"));
}

#[test]
fn test_help_for_operation() {
    let ws = Workspace::new();
    let out = ws.run(&["--help=circle"]);
    assert_eq!(out.status.code(), Some(0));
    assert!(stdout(&out).starts_with("Draw circle operation:"));
}

#[test]
fn test_rect_border() {
    let ws = Workspace::new();
    ws.white10();
    let out = ws.run(&[
        "--rect", "--left_up", "0.0", "--right_down", "9.9", "--thickness", "1", "--color",
        "255.0.0", "-i", "in.bmp", "-o", "out.bmp",
    ]);
    assert_eq!(out.status.code(), Some(0), "{}", stderr(&out));
    assert_eq!(
        stdout(&out).trim(),
        "Operation completed successfully. Output saved to out.bmp"
    );

    let img = load(&ws.path("out.bmp"));
    for i in 0..10 {
        assert_eq!(*img.get_pixel(i, 0), Rgb([255, 0, 0]));
        assert_eq!(*img.get_pixel(i, 9), Rgb([255, 0, 0]));
        assert_eq!(*img.get_pixel(0, i), Rgb([255, 0, 0]));
        assert_eq!(*img.get_pixel(9, i), Rgb([255, 0, 0]));
    }
    for y in 1..9 {
        for x in 1..9 {
            assert_eq!(*img.get_pixel(x, y), WHITE);
        }
    }
}

#[test]
fn test_circle_succeeds() {
    let ws = Workspace::new();
    ws.white10();
    let out = ws.run(&[
        "--circle", "--center=5.5", "--radius=3", "--thickness=1", "--color=0.255.0", "in.bmp",
    ]);
    assert_eq!(out.status.code(), Some(0), "{}", stderr(&out));
    // Default output name follows the input extension
    let img = load(&ws.path("out.bmp"));
    assert_eq!(*img.get_pixel(8, 5), Rgb([0, 255, 0]));
    assert_eq!(*img.get_pixel(5, 5), WHITE);
}

#[test]
fn test_circle_center_outside() {
    let ws = Workspace::new();
    ws.white10();
    let out = ws.run(&[
        "--circle", "--center=10.5", "--radius=3", "--thickness=1", "--color=0.255.0", "in.bmp",
    ]);
    assert_eq!(out.status.code(), Some(44));
    assert!(!ws.path("out.bmp").exists());
}

#[test]
fn test_trim_size() {
    let ws = Workspace::new();
    ws.white10();
    let out = ws.run(&["--trim", "--left_up", "2.2", "--right_down", "5.5", "-i", "in.bmp", "-o", "t.png"]);
    assert_eq!(out.status.code(), Some(0), "{}", stderr(&out));
    assert_eq!(load(&ws.path("t.png")).dimensions(), (4, 4));
}

#[test]
fn test_trim_edge_strip() {
    let ws = Workspace::new();
    ws.white10();
    let out = ws.run(&["--trim", "--left_up", "9.0", "--right_down", "20.5", "in.bmp"]);
    assert_eq!(out.status.code(), Some(0), "{}", stderr(&out));
    assert_eq!(load(&ws.path("out.bmp")).dimensions(), (1, 6));

    let out = ws.run(&["--trim", "--left_up", "12.0", "--right_down", "20.5", "in.bmp", "-o", "x.bmp"]);
    assert_eq!(out.status.code(), Some(48));
}

#[test]
fn test_collage_size() {
    let ws = Workspace::new();
    ws.image("in.png", &RgbImage::from_pixel(7, 5, WHITE));
    let out = ws.run(&["--collage", "--number_x", "2", "--number_y", "3", "in.png"]);
    assert_eq!(out.status.code(), Some(0), "{}", stderr(&out));
    assert_eq!(load(&ws.path("out.png")).dimensions(), (14, 15));
}

#[test]
fn test_color_replace_count() {
    let ws = Workspace::new();
    ws.image("black.bmp", &RgbImage::from_pixel(6, 4, Rgb([0, 0, 0])));
    let out = ws.run(&[
        "--color_replace", "--old_color", "0.0.0", "--new_color", "1.1.1", "black.bmp",
    ]);
    assert_eq!(out.status.code(), Some(0), "{}", stderr(&out));
    assert_eq!(stdout(&out).trim(), "Replaced 24 pixels. Output saved to out.bmp");
    assert!(load(&ws.path("out.bmp")).pixels().all(|p| *p == Rgb([1, 1, 1])));
}

#[test]
fn test_rotate_bad_angle() {
    let ws = Workspace::new();
    ws.white10();
    let out = ws.run(&["--rotate", "--left_up", "0.0", "--right_down", "2.2", "--angle", "45", "in.bmp"]);
    assert_eq!(out.status.code(), Some(47));
    assert!(stderr(&out).contains("Error: Invalid angle"));
}

#[test]
fn test_copy_out_of_bounds_is_noop() {
    let ws = Workspace::new();
    let mut src = RgbImage::from_pixel(10, 10, WHITE);
    src.put_pixel(1, 1, Rgb([9, 8, 7]));
    ws.image("in.png", &src);

    let out = ws.run(&[
        "--copy", "--left_up", "0.0", "--right_down", "3.3", "--dest_left_up", "20.20", "in.png",
    ]);
    assert_eq!(out.status.code(), Some(0), "{}", stderr(&out));
    assert_eq!(load(&ws.path("out.png")), src);
}

#[test]
fn test_info() {
    let ws = Workspace::new();
    let input = ws.white10();
    let out = ws.run(&["--info", "in.bmp"]);
    assert_eq!(out.status.code(), Some(0), "{}", stderr(&out));

    let size = std::fs::metadata(&input).unwrap().len();
    assert_eq!(
        stdout(&out).trim(),
        format!("File information:\nFile size: {size}\nWidth: 10\nHeight: 10")
    );
}

#[test]
fn test_argument_errors() {
    let ws = Workspace::new();
    ws.white10();

    let cases: [(&[&str], i32); 6] = [
        (&["--info", "--trim", "in.bmp"], 42),
        (&["--trim", "--mirror", "in.bmp"], 42),
        (&["in.bmp"], 42),
        (&["--trim", "--left_up", "1.1", "in.bmp"], 42),
        (&["--sharpen", "in.bmp"], 42),
        (&["--color_replace", "--old_color", "1.1", "--new_color", "0.0.0", "in.bmp"], 43),
    ];
    for (args, code) in cases {
        let out = ws.run(args);
        assert_eq!(out.status.code(), Some(code), "{args:?}: {}", stderr(&out));
        assert!(stderr(&out).starts_with("Error: "));
    }
}

#[test]
fn test_bad_input_file() {
    let ws = Workspace::new();
    std::fs::write(ws.path("junk.bmp"), b"not an image").unwrap();

    let out = ws.run(&["--trim", "--left_up", "0.0", "--right_down", "1.1", "junk.bmp"]);
    assert_eq!(out.status.code(), Some(41));

    let out = ws.run(&["--info", "missing.png"]);
    assert_eq!(out.status.code(), Some(41));
}

#[test]
fn test_output_same_as_input() {
    let ws = Workspace::new();
    ws.white10();
    let before = std::fs::read(ws.path("in.bmp")).unwrap();

    let out = ws.run(&["--mirror", "--axis", "x", "--left_up", "0.0", "--right_down", "9.9", "-i", "in.bmp", "-o", "in.bmp"]);
    assert_eq!(out.status.code(), Some(46));
    assert_eq!(std::fs::read(ws.path("in.bmp")).unwrap(), before);
}

#[test]
fn test_processing_log_written() {
    let ws = Workspace::new();
    ws.white10();
    let db = ws.path("log.db");

    let out = Command::new(env!("CARGO_BIN_EXE_rasterkit"))
        .current_dir(ws.dir.path())
        .args(["--trim", "--left_up", "0.0", "--right_down", "4.4", "in.bmp", "--log_db"])
        .arg(&db)
        .output()
        .unwrap();
    assert_eq!(out.status.code(), Some(0), "{}", stderr(&out));

    let conn = rusqlite::Connection::open(&db).unwrap();
    let command: String = conn
        .query_row("SELECT operation_command FROM processing_operations", [], |row| row.get(0))
        .unwrap();
    assert_eq!(command, "--trim --left_up 0.0 --right_down 4.4");
}

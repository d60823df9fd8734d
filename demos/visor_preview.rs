//! Replay keycodes against the visor on the host and save each frame as a PNG.
//!
//! ```text
//! cargo run --bin visor_preview -- <output_dir> [--faces <dir> | --png-faces <dir>] <keycode>...
//! cargo run --bin visor_preview -- target/preview --faces faces 0x09 0x00 0x0C 0x04
//! ```
//!
//! Keycodes are hex (`0x0c`) or decimal. `--faces` reads `01_happy.bmp` … `15_face.bmp`,
//! `--png-faces` reads the same names with a `.png` extension. Without either, the
//! built-in faces are used.
#![cfg(feature = "host")]

use std::env;
use std::error::Error;
use std::path::PathBuf;

use embassy_futures::block_on;
use led_visor::face::{BUILTIN_FACES, BmpFaces, FaceSource, PngFaces};
use led_visor::led2d::{LED_COUNT, PANEL_HEIGHT, PANEL_WIDTH, VISOR_LAYOUT};
use led_visor::serial::ScriptedKeycodes;
use led_visor::to_png::PngPanel;
use led_visor::visor::{StopSignal, VISOR_CONFIG_DEFAULT, Visor};

const USAGE: &str =
    "usage: visor_preview <output_dir> [--faces <dir> | --png-faces <dir>] <keycode>...";

enum Faces {
    Builtin,
    Bmp(PathBuf),
    Png(PathBuf),
}

fn main() -> Result<(), Box<dyn Error>> {
    let mut args = env::args().skip(1);
    let output_dir = PathBuf::from(args.next().ok_or(USAGE)?);

    let mut faces = Faces::Builtin;
    let mut keycodes = Vec::new();
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--faces" => faces = Faces::Bmp(PathBuf::from(args.next().ok_or(USAGE)?)),
            "--png-faces" => faces = Faces::Png(PathBuf::from(args.next().ok_or(USAGE)?)),
            _ => keycodes.push(parse_keycode(&arg)?),
        }
    }

    let panel = PngPanel::new(VISOR_LAYOUT, &output_dir);
    let rendered = match faces {
        Faces::Builtin => replay(BUILTIN_FACES, panel, &keycodes)?,
        Faces::Bmp(dir) => replay(BmpFaces::new(dir), panel, &keycodes)?,
        Faces::Png(dir) => replay(PngFaces::new(dir), panel, &keycodes)?,
    };
    println!("{rendered} frames in {}", output_dir.display());
    Ok(())
}

fn replay<F: FaceSource<PANEL_WIDTH, PANEL_HEIGHT>>(
    faces: F,
    panel: PngPanel<LED_COUNT, PANEL_WIDTH, PANEL_HEIGHT>,
    keycodes: &[u8],
) -> Result<usize, Box<dyn Error>> {
    let stop = StopSignal::new();
    let mut source = ScriptedKeycodes::from_bytes(keycodes, &stop);
    let mut visor = Visor::new(&VISOR_LAYOUT, &VISOR_CONFIG_DEFAULT, faces, panel);
    block_on(async {
        visor.start().await?;
        visor.run(&mut source, &stop).await
    })?;
    Ok(visor.display().rendered_count())
}

fn parse_keycode(arg: &str) -> Result<u8, Box<dyn Error>> {
    let keycode = match arg.strip_prefix("0x").or_else(|| arg.strip_prefix("0X")) {
        Some(hex) => u8::from_str_radix(hex, 16)?,
        None => arg.parse()?,
    };
    Ok(keycode)
}

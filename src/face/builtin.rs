//! Compiled-in art for the 32×16 visor panel, `#` lit and `.` dark.

use super::FaceId;
use crate::led2d::{Bitmap, PANEL_HEIGHT, PANEL_WIDTH};

type PanelBitmap = Bitmap<PANEL_WIDTH, PANEL_HEIGHT>;

pub(super) const FACES: [(FaceId, PanelBitmap); super::FACE_COUNT] = [
    (FaceId::Happy, Bitmap::from_art(HAPPY)),
    (FaceId::Wide, Bitmap::from_art(WIDE)),
    (FaceId::Sleepy, Bitmap::from_art(SLEEPY)),
    (FaceId::Wink, Bitmap::from_art(WINK)),
    (FaceId::Boop, Bitmap::from_art(BOOP)),
    (FaceId::Dizzy, Bitmap::from_art(DIZZY)),
    (FaceId::Flat, Bitmap::from_art(FLAT)),
    (FaceId::Small, Bitmap::from_art(SMALL)),
    (FaceId::Hearts, Bitmap::from_art(HEARTS)),
    (FaceId::Dead, Bitmap::from_art(DEAD)),
    (FaceId::Angry, Bitmap::from_art(ANGRY)),
    (FaceId::Beep, Bitmap::from_art(BEEP)),
    (FaceId::Awoo, Bitmap::from_art(AWOO)),
    (FaceId::No, Bitmap::from_art(NO)),
    (FaceId::Face, Bitmap::from_art(FACE)),
];

const HAPPY: [&str; PANEL_HEIGHT] = [
    "................................",
    "................................",
    ".....##..................##.....",
    "....####................####....",
    "...##..##..............##..##...",
    "...#....#..............#....#...",
    "................................",
    "................................",
    "................................",
    "................................",
    "....#......................#....",
    ".....#....................#.....",
    "......##................##......",
    "........################........",
    "................................",
    "................................",
];

const WIDE: [&str; PANEL_HEIGHT] = [
    "................................",
    "....######............######....",
    "...##....##..........##....##...",
    "...#......#..........#......#...",
    "...#..##..#..........#..##..#...",
    "...#......#..........#......#...",
    "...##....##..........##....##...",
    "....######............######....",
    "................................",
    "................................",
    "........################........",
    "......##................##......",
    "......#..................#......",
    "......##................##......",
    "........################........",
    "................................",
];

const SLEEPY: [&str; PANEL_HEIGHT] = [
    "................................",
    "................................",
    "................................",
    "................................",
    "...#....#..............#....#...",
    "....####................####....",
    "................................",
    "................................",
    "................................",
    "................................",
    "................................",
    ".....##....##....##....##.......",
    "....#..#..#..#..#..#..#..#......",
    "........##....##....##....##....",
    "................................",
    "................................",
];

const WINK: [&str; PANEL_HEIGHT] = [
    "................................",
    "................................",
    ".....##.................####....",
    "....####...............######...",
    "...##..##..............######...",
    "...#....#..............######...",
    "........................####....",
    "................................",
    "................................",
    "................................",
    "....#......................#....",
    ".....#....................#.....",
    "......##................##......",
    "........################........",
    "................................",
    "................................",
];

const BOOP: [&str; PANEL_HEIGHT] = [
    "................................",
    "...#........................#...",
    "...##......................##...",
    "....###..................###....",
    ".....####..............####.....",
    "....###..................###....",
    "...##......................##...",
    "...#........................#...",
    "................................",
    "................................",
    "................................",
    "................................",
    "............#......#............",
    ".............######.............",
    "................................",
    "................................",
];

const DIZZY: [&str; PANEL_HEIGHT] = [
    "................................",
    "................................",
    "...######..............######...",
    "...#....#..............#....#...",
    "...#.##.#..............#.##.#...",
    "...#.#..#..............#.#..#...",
    "...#.####..............#.####...",
    "...#...................#........",
    "................................",
    "................................",
    "................................",
    ".....##....##....##....##.......",
    "....#..#..#..#..#..#..#..#......",
    "........##....##....##....##....",
    "................................",
    "................................",
];

const FLAT: [&str; PANEL_HEIGHT] = [
    "................................",
    "................................",
    "................................",
    "...######..............######...",
    "...######..............######...",
    "................................",
    "................................",
    "................................",
    "................................",
    "................................",
    "................................",
    "................................",
    "....########################....",
    "................................",
    "................................",
    "................................",
];

const SMALL: [&str; PANEL_HEIGHT] = [
    "................................",
    "................................",
    "................................",
    "................................",
    ".....##..................##.....",
    ".....##..................##.....",
    "................................",
    "................................",
    "................................",
    "................................",
    "................................",
    "............#......#............",
    ".............######.............",
    "................................",
    "................................",
    "................................",
];

const HEARTS: [&str; PANEL_HEIGHT] = [
    "................................",
    "................................",
    "....##.##..............##.##....",
    "...#######............#######...",
    "...#######............#######...",
    "....#####..............#####....",
    ".....###................###.....",
    "......#..................#......",
    "................................",
    "................................",
    "....#......................#....",
    ".....#....................#.....",
    "......##................##......",
    "........################........",
    "................................",
    "................................",
];

const DEAD: [&str; PANEL_HEIGHT] = [
    "................................",
    "................................",
    "...#....#..............#....#...",
    "....#..#................#..#....",
    ".....##..................##.....",
    ".....##..................##.....",
    "....#..#................#..#....",
    "...#....#..............#....#...",
    "................................",
    "................................",
    "................................",
    "................................",
    "....########################....",
    "................................",
    "................................",
    "................................",
];

const ANGRY: [&str; PANEL_HEIGHT] = [
    "................................",
    "................................",
    "...#........................#...",
    "...###....................###...",
    "...#####................#####...",
    "...######..............######...",
    "....####................####....",
    "................................",
    "................................",
    "................................",
    "........################........",
    "......##................##......",
    ".....#....................#.....",
    "....#......................#....",
    "................................",
    "................................",
];

const BEEP: [&str; PANEL_HEIGHT] = [
    "................................",
    "................................",
    "...######..............######...",
    "...#....#..............#....#...",
    "...#....#..............#....#...",
    "...#....#..............#....#...",
    "...######..............######...",
    "................................",
    "................................",
    "................................",
    "................................",
    "....########################....",
    "....#......................#....",
    "....########################....",
    "................................",
    "................................",
];

const AWOO: [&str; PANEL_HEIGHT] = [
    "................................",
    "................................",
    ".....##..................##.....",
    "....####................####....",
    "...##..##..............##..##...",
    "...#....#..............#....#...",
    "................................",
    "................................",
    "................................",
    "................................",
    ".............######.............",
    "...........##......##...........",
    "...........#........#...........",
    "...........##......##...........",
    ".............######.............",
    "................................",
];

const NO: [&str; PANEL_HEIGHT] = [
    "................................",
    "................................",
    "................................",
    "................................",
    "...######..............######...",
    "...######..............######...",
    "................................",
    "................................",
    "................................",
    "................................",
    "........################........",
    "......##................##......",
    ".....#....................#.....",
    "....#......................#....",
    "................................",
    "................................",
];

const FACE: [&str; PANEL_HEIGHT] = [
    "................................",
    "................................",
    "....####................####....",
    "...######..............######...",
    "...######..............######...",
    "...######..............######...",
    "....####................####....",
    "................................",
    "................................",
    "................................",
    "....#.....#.....#.....#.........",
    "....##...###...###...###...#....",
    ".....#.#..#.#.#..#.#.#..#.#.....",
    "......#....#....#....#....#.....",
    "................................",
    "................................",
];


//! Block drop runner (default binary).
//!
//! Replays an action script against a fresh board and prints the final
//! board, the cleared-row count and whether the game ended.

use std::io::{self, Write};

use anyhow::{Context, Result};
use clap::Parser;

use block_drop::core::{
    BagProvider, BoardConfig, BoardTurnManager, CycleProvider, Error, ShapeKind, ShapeProvider,
};
use block_drop::script::{parse_script, replay, ReplaySummary};
use block_drop::term::{encode_inline_into, BoardFrame, GridView};
use block_drop::types::{
    Coordinate, DEFAULT_BOARD_HEIGHT, DEFAULT_BOARD_WIDTH, DEFAULT_SPAWN_POINT,
};

#[derive(Parser, Debug)]
#[command(name = "block-drop", version, about)]
struct Args {
    /// Board width in cells
    #[arg(long, default_value_t = DEFAULT_BOARD_WIDTH)]
    width: usize,

    /// Board height in cells
    #[arg(long, default_value_t = DEFAULT_BOARD_HEIGHT)]
    height: usize,

    /// Column of the spawn anchor
    #[arg(long, default_value_t = DEFAULT_SPAWN_POINT.x)]
    spawn_x: i32,

    /// Row of the spawn anchor
    #[arg(long, default_value_t = DEFAULT_SPAWN_POINT.y)]
    spawn_y: i32,

    /// 7-bag RNG seed
    #[arg(long, default_value_t = 1)]
    seed: u32,

    /// Fixed piece sequence instead of the 7-bag, e.g. "OL" (repeats)
    #[arg(long)]
    pieces: Option<String>,

    /// Print ASCII only, no colors
    #[arg(long)]
    plain: bool,

    /// Actions: names (moveLeft, rotateRight, flip, drop, ...) or codes h l q e f j
    script: Vec<String>,
}

fn main() -> Result<()> {
    let args = Args::parse();
    let config = BoardConfig::new(
        args.width,
        args.height,
        Coordinate::new(args.spawn_x, args.spawn_y),
    );

    match args.pieces.as_deref() {
        Some(sequence) => run(&args, config, fixed_sequence(sequence)?),
        None => run(&args, config, BagProvider::new(args.seed)),
    }
}

fn fixed_sequence(sequence: &str) -> Result<CycleProvider> {
    let shapes = sequence
        .chars()
        .filter(|c| !c.is_whitespace() && *c != ',')
        .map(|c| {
            ShapeKind::from_str(&c.to_string())
                .map(|kind| kind.shape())
                .with_context(|| format!("unknown piece {:?} in --pieces", c))
        })
        .collect::<Result<Vec<_>>>()?;
    CycleProvider::new(shapes).context("--pieces needs at least one piece")
}

fn run<P: ShapeProvider>(args: &Args, config: BoardConfig, provider: P) -> Result<()> {
    let actions = parse_script(args.script.as_slice()).context("failed to parse action script")?;
    let mut board = BoardTurnManager::new(config, provider).context("invalid board")?;

    let summary = match board.init_turn() {
        Ok(_) => replay(&mut board, &actions).context("replay failed")?,
        Err(Error::InvalidSpawn { .. }) => ReplaySummary {
            game_over: true,
            ..ReplaySummary::default()
        },
        Err(err) => return Err(err).context("failed to start the first turn"),
    };

    let frame = BoardFrame::from_manager(&board).with_game_over(summary.game_over);
    let mut stdout = io::stdout().lock();
    if args.plain {
        writeln!(stdout, "{}", GridView::plain().to_plain_text(&frame))?;
    } else {
        let view = GridView::default();
        let fb = view.render(&frame, view.fit_viewport(board.grid()));
        let mut buf = Vec::with_capacity(4 * 1024);
        encode_inline_into(&fb, &mut buf)?;
        stdout.write_all(&buf)?;
    }

    writeln!(
        stdout,
        "actions: {} applied, {} accepted, {} rejected, {} landed",
        summary.applied, summary.accepted, summary.rejected, summary.landings
    )?;
    writeln!(stdout, "lines cleared: {}", board.lines_cleared())?;
    writeln!(
        stdout,
        "game over: {}",
        if summary.game_over { "yes" } else { "no" }
    )?;
    stdout.flush()?;
    Ok(())
}

//! Game screen hosting one sliding-tile puzzle at a time.
//!
//! The board is the widget tree: it is created in `set_up` and dropped in
//! `dispose`, so leaving with pop-and-dispose always gives the next visit
//! a fresh board. The clock only runs while the screen is shown.

use crate::components::{Footer, Header};
use crate::dialog::{ConfirmDialog, DialogOutcome, Modal};
use crate::keymap::Action;
use crate::puzzle::{Board, Direction, BOARD_SIZES};
use crate::screens::screen_trait::{RenderContext, Screen, ScreenAction, ScreenContext, ScreenId};
use crate::services::SoundCode;
use crate::stats::{format_seconds, Statistics};
use crate::styles::theme;
use crate::utils::create_standard_layout;
use crate::widgets::BoardWidget;
use anyhow::Result;
use chrono::Utc;
use crossterm::event::Event;
use rand::rngs::StdRng;
use rand::SeedableRng;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;
use std::time::{Duration, Instant};
use tracing::{info, warn};

const DEFAULT_BOARD_SIZE: u8 = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum GameDialog {
    Abandon,
    Solved,
}

pub struct GameScreen {
    board: Option<Board>,
    moves: u32,
    /// Play time banked before the current showing
    elapsed: Duration,
    /// Set while the clock runs
    running_since: Option<Instant>,
    rng: StdRng,
    modal: Modal<GameDialog>,
}

impl Default for GameScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl GameScreen {
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_entropy())
    }

    /// Deterministic shuffles
    pub fn with_seed(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }

    fn with_rng(rng: StdRng) -> Self {
        Self {
            board: None,
            moves: 0,
            elapsed: Duration::ZERO,
            running_since: None,
            rng,
            modal: Modal::new(),
        }
    }

    pub fn board(&self) -> Option<&Board> {
        self.board.as_ref()
    }

    pub fn moves(&self) -> u32 {
        self.moves
    }

    fn play_time(&self) -> Duration {
        self.elapsed + self.running_since.map_or(Duration::ZERO, |t| t.elapsed())
    }

    fn pause_clock(&mut self) {
        if let Some(since) = self.running_since.take() {
            self.elapsed += since.elapsed();
        }
    }

    fn solved(&self) -> bool {
        self.board.as_ref().is_some_and(Board::is_solved)
    }

    /// Shuffle a new board and count it as a started game
    fn new_puzzle(&mut self, ctx: &mut ScreenContext) {
        let size = if BOARD_SIZES.contains(&ctx.board_size) {
            ctx.board_size
        } else {
            warn!("Board size {} unsupported, using {}", ctx.board_size, DEFAULT_BOARD_SIZE);
            DEFAULT_BOARD_SIZE
        };

        self.board = match Board::shuffled(size, &mut self.rng) {
            Ok(board) => Some(board),
            Err(e) => {
                warn!("Failed to create board: {}", e);
                None
            }
        };
        self.moves = 0;
        self.elapsed = Duration::ZERO;
        self.running_since = Some(Instant::now());

        let mut stats = Statistics::load(&*ctx.prefs);
        stats.record_start();
        stats.save(&mut *ctx.prefs);
        if let Err(e) = ctx.prefs.flush() {
            warn!("Failed to save statistics: {:#}", e);
        }
        info!("New {}x{} puzzle", size, size);
    }

    fn slide(&mut self, direction: Direction, ctx: &mut ScreenContext) -> Result<()> {
        let Some(board) = self.board.as_mut() else {
            return Ok(());
        };
        if !board.slide(direction) {
            ctx.play(SoundCode::Blocked);
            return Ok(());
        }
        self.moves += 1;
        ctx.play(SoundCode::Slide);

        if board.is_solved() {
            self.on_solved(ctx)?;
        }
        Ok(())
    }

    fn on_solved(&mut self, ctx: &mut ScreenContext) -> Result<()> {
        self.pause_clock();
        let seconds = self.elapsed.as_secs() as i64;

        let mut stats = Statistics::load(&*ctx.prefs);
        stats.record_solve(i64::from(self.moves), seconds, Utc::now());
        stats.save(&mut *ctx.prefs);
        ctx.prefs.flush()?;

        info!("Solved in {} moves, {}s", self.moves, seconds);
        ctx.play(SoundCode::Solved);
        self.modal.open(ConfirmDialog::message(
            GameDialog::Solved,
            ctx.text("game.solved.title"),
            format!(
                "{} {} in {}.\n\n{}",
                self.moves,
                ctx.text("game.moves").to_lowercase(),
                format_seconds(seconds),
                ctx.text("game.solved.body")
            ),
        ));
        Ok(())
    }

    fn on_dialog(
        &mut self,
        purpose: GameDialog,
        outcome: DialogOutcome,
        ctx: &mut ScreenContext,
    ) -> ScreenAction {
        match (purpose, outcome) {
            (GameDialog::Abandon, DialogOutcome::Confirmed) | (GameDialog::Solved, _) => {
                ctx.play(SoundCode::Back);
                ScreenAction::PopAndDispose
            }
            (GameDialog::Abandon, DialogOutcome::Cancelled) => ScreenAction::None,
        }
    }

    fn status_line(&self, ctx: &RenderContext) -> Line<'static> {
        let t = theme();
        Line::from(vec![
            Span::styled(format!("{}: ", ctx.text("game.moves")), t.muted_style()),
            Span::styled(self.moves.to_string(), t.emphasis_style()),
            Span::styled(format!("   {}: ", ctx.text("game.time")), t.muted_style()),
            Span::styled(
                format_seconds(self.play_time().as_secs() as i64),
                t.emphasis_style(),
            ),
        ])
    }
}

impl Screen for GameScreen {
    fn id(&self) -> ScreenId {
        ScreenId::Game
    }

    fn set_up(&mut self, ctx: &mut ScreenContext) {
        self.new_puzzle(ctx);
    }

    fn show(&mut self, _ctx: &mut ScreenContext) {
        if self.running_since.is_none() && !self.solved() {
            self.running_since = Some(Instant::now());
        }
    }

    fn hide(&mut self, _ctx: &mut ScreenContext) {
        self.pause_clock();
    }

    fn dispose(&mut self) {
        self.board = None;
        self.running_since = None;
        self.modal.close();
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, ctx: &RenderContext) -> Result<()> {
        let (header_chunk, content_chunk, footer_chunk) = create_standard_layout(area, 3, 2);

        Header::render(
            frame,
            header_chunk,
            &ctx.text("game.title"),
            &ctx.text("app.tagline"),
        )?;

        let [status_area, board_area] =
            Layout::vertical([Constraint::Length(1), Constraint::Min(0)]).areas(content_chunk);
        frame.render_widget(
            Paragraph::new(self.status_line(ctx)).alignment(Alignment::Center),
            status_area,
        );
        if let Some(board) = &self.board {
            frame.render_widget(BoardWidget::new(board), board_area);
        }

        let k = |a| ctx.keymap.key_for(a);
        let footer_text = format!(
            "Slide: {}/{}/{}/{} | New board: {} | Back: {}",
            k(Action::MoveUp),
            k(Action::MoveDown),
            k(Action::MoveLeft),
            k(Action::MoveRight),
            k(Action::Restart),
            k(Action::Cancel),
        );
        Footer::render(frame, footer_chunk, &footer_text)?;

        self.modal.render(frame, area, ctx);
        Ok(())
    }

    fn handle_event(&mut self, event: Event, ctx: &mut ScreenContext) -> Result<ScreenAction> {
        let action = ctx.action_for(&event);

        if self.modal.is_open() {
            let solved_dialog = self
                .modal
                .current()
                .is_some_and(|d| d.purpose == GameDialog::Solved);
            if solved_dialog && action == Some(Action::Restart) {
                self.modal.close();
                self.new_puzzle(ctx);
                return Ok(ScreenAction::None);
            }
            return Ok(match self.modal.handle(action) {
                Some((purpose, outcome)) => self.on_dialog(purpose, outcome, ctx),
                None => ScreenAction::None,
            });
        }

        let Some(action) = action else {
            return Ok(ScreenAction::None);
        };
        match action {
            Action::MoveUp => self.slide(Direction::Up, ctx)?,
            Action::MoveDown => self.slide(Direction::Down, ctx)?,
            Action::MoveLeft => self.slide(Direction::Left, ctx)?,
            Action::MoveRight => self.slide(Direction::Right, ctx)?,
            Action::Restart => self.new_puzzle(ctx),
            Action::Cancel | Action::Quit => {
                self.modal.open(
                    ConfirmDialog::confirm(
                        GameDialog::Abandon,
                        ctx.text("game.abandon.title"),
                        ctx.text("game.abandon.body"),
                    )
                    .destructive(),
                );
            }
            _ => {}
        }
        Ok(ScreenAction::None)
    }

    fn has_modal(&self) -> bool {
        self.modal.is_open()
    }
}
